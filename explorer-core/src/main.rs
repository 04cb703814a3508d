//! src/main.rs
//! Line-driven front-end for the explorer action dispatcher.
//!
//! Each input line is `<action> [args...]`, plus the built-ins `cursor N`,
//! `ls` and `quit`. Targets are the selected nodes, or the node under the
//! cursor when nothing is selected.

use std::io;
use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Parser;
use tracing::{error, info};

use explorer_core::{
    ActionDispatcher, AppError, ExplorerState,
    config::Config,
    host::{Host, TerminalHost},
    logging::LoggerBuilder,
    view::ExplorerView,
};

type StdioView = ExplorerView<TerminalHost<io::StdinLock<'static>, io::Stdout>>;

#[derive(Debug, Parser)]
#[command(name = "explorer", version, about = "Drive file-explorer actions from the terminal")]
struct Cli {
    /// Directory to start in (defaults to the current directory)
    dir: Option<PathBuf>,

    /// Config file to use instead of the platform default
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level directive, e.g. `debug` or `explorer_core=trace`
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::load().context("Failed to load config")?,
    };

    let mut logger = LoggerBuilder::new().with_config(config.logging.clone());
    if let Some(level) = &cli.log_level {
        logger = logger.with_level(level);
    }
    let _guard = logger.build().context("Failed to initialize logging")?;

    let host_cwd = std::env::current_dir().context("Cannot read current directory")?;
    let start = match cli.dir {
        Some(dir) => explorer_core::fs::paths::resolve(&host_cwd, &dir.to_string_lossy()),
        None => host_cwd.clone(),
    };
    info!("Starting explorer in {}", start.display());

    let mut state = ExplorerState::from_config(start, &config);
    let host = TerminalHost::stdio(host_cwd, config.editor_cmd.clone());
    let mut view = ExplorerView::open(host, &state, config.show_hidden)
        .with_context(|| format!("Cannot list {}", state.cwd.display()))?;
    let dispatcher = ActionDispatcher::new();

    run(&dispatcher, &mut view, &mut state);

    info!("Explorer exited cleanly");
    Ok(())
}

fn run(dispatcher: &ActionDispatcher, view: &mut StdioView, state: &mut ExplorerState) {
    loop {
        if view.take_dirty() {
            let lines = view.render_lines(state);
            view.host_mut().print_lines(lines);
        }

        let Some(line) = view.host_mut().read_line("> ") else {
            break;
        };
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            continue;
        };

        match name {
            "quit" | "q" => break,
            "ls" => view.mark_dirty(),
            "cursor" => match words.next().map(str::parse::<usize>) {
                Some(Ok(n)) => view.set_cursor(n),
                _ => view.host_mut().error("usage: cursor N"),
            },
            _ => {
                let context = view.context(words);
                match dispatcher.dispatch(view, state, name, context) {
                    Ok(result) => info!("{} -> {:?}", name, result),
                    Err(err @ AppError::UnknownAction(_)) => {
                        let names: Vec<_> = dispatcher.registry().names().collect();
                        view.host_mut()
                            .error(&format!("{err} (available: {})", names.join(", ")));
                    }
                    Err(err) => {
                        error!("dispatch failed: {}", err);
                        view.host_mut().error(&err.to_string());
                    }
                }
            }
        }
    }
}
