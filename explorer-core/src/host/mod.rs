pub mod scripted;
pub mod terminal;
pub mod traits;

pub use scripted::ScriptedHost;
pub use terminal::TerminalHost;
pub use traits::{Completion, Host};
