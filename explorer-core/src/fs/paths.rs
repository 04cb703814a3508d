//! Path helpers shared by the handlers.

use std::path::{Component, Path, PathBuf};

use directories::BaseDirs;

/// The user's home directory, or `/` when it cannot be determined.
#[must_use]
pub fn home_dir() -> PathBuf {
    BaseDirs::new().map_or_else(|| PathBuf::from("/"), |d| d.home_dir().to_path_buf())
}

/// Expand a leading `~` to the home directory.
#[must_use]
pub fn expand_home(input: &str) -> PathBuf {
    if input == "~" {
        return home_dir();
    }
    match input.strip_prefix("~/") {
        Some(rest) => home_dir().join(rest),
        None => PathBuf::from(input),
    }
}

/// Join `input` onto `base` (absolute inputs replace it) and normalize the
/// result lexically, without touching the filesystem.
#[must_use]
pub fn resolve(base: &Path, input: &str) -> PathBuf {
    normalize(&base.join(expand_home(input)))
}

/// Lexical normalization: drops `.`, folds `..` into the preceding
/// component. `..` at the root stays at the root.
#[must_use]
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

/// `path` relative to `base` when `path` lies under `base` on a component
/// boundary; `path` unchanged otherwise.
#[must_use]
pub fn relative_to(path: &Path, base: &Path) -> PathBuf {
    match path.strip_prefix(base) {
        Ok(rel) if !rel.as_os_str().is_empty() => rel.to_path_buf(),
        _ => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_folds_dots() {
        assert_eq!(normalize(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
        assert_eq!(normalize(Path::new("/..")), PathBuf::from("/"));
        assert_eq!(normalize(Path::new("a/..")), PathBuf::from("."));
        assert_eq!(normalize(Path::new("../x")), PathBuf::from("../x"));
    }

    #[test]
    fn resolve_relative_and_absolute() {
        let base = Path::new("/home/user/project");
        assert_eq!(resolve(base, "src"), PathBuf::from("/home/user/project/src"));
        assert_eq!(resolve(base, ".."), PathBuf::from("/home/user"));
        assert_eq!(resolve(base, "/tmp"), PathBuf::from("/tmp"));
    }

    #[test]
    fn tilde_expands_to_home() {
        assert_eq!(expand_home("~"), home_dir());
        assert_eq!(expand_home("~/x"), home_dir().join("x"));
        assert_eq!(expand_home("a~"), PathBuf::from("a~"));
    }

    #[test]
    fn relative_only_on_component_boundary() {
        let cwd = Path::new("/foo");
        assert_eq!(relative_to(Path::new("/foo/bar.txt"), cwd), PathBuf::from("bar.txt"));
        assert_eq!(
            relative_to(Path::new("/foobar/x.txt"), cwd),
            PathBuf::from("/foobar/x.txt")
        );
        assert_eq!(relative_to(Path::new("/foo"), cwd), PathBuf::from("/foo"));
    }
}
