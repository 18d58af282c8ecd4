/// Linear undo/redo history of arbitrary states.
///
/// Provides a `StateHistory` that keeps states newest-first together with a
/// cursor marking the current one. Adding a state while the cursor is behind
/// the head discards the redo branch. History lives in memory only.
pub mod config;
pub mod error;
pub mod history;

pub use config::HistoryConfig;
pub use error::{ErrorKind, HistoryError, Result};
pub use history::StateHistory;
