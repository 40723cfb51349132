//! Inkboard application shell.
//!
//! Replays recorded input scripts into a board and persists every committed
//! change.

pub mod cli;
pub mod error;
pub mod replay;
pub mod session;
pub mod shortcuts;

pub use cli::CliArgs;
pub use error::{AppError, AppResult};
pub use replay::{Script, ScriptStep};
pub use session::{ReplaySummary, Session};
pub use shortcuts::ShortcutRegistry;
