//! Desktop front end: a canvas where clicks move a marker, with undo/redo
//! shortcuts over the marker's position history.

pub mod app;
pub mod marker;
pub mod shortcut;
pub mod toast;

pub use app::{App, StartupArgs};
