//! Autosync - mirror a directory tree with rsync on every filesystem change.
//!
//! Two pieces composed trivially: a recursive directory watcher built on
//! `notify`, and a dispatcher that answers every change event with one
//! full-tree `rsync` run. There is no batching and no concurrency between
//! sync runs - each invocation blocks the watch loop until rsync exits.

pub mod error;
pub mod mirror;
pub mod watcher;

// Re-exports for convenience
pub use error::{AutosyncError, AutosyncResult};
pub use mirror::{rsync_available, Mirror, WatchTarget};
pub use watcher::{watch, ChangeEvent, ChangeKind, WatchEvent};
