//! Directory watcher for continuous mirroring
//!
//! Implements the watch loop with:
//! - Recursive change notifications via `notify`
//! - One full-tree sync per event, strictly sequential (no debouncing)
//! - Graceful Ctrl+C shutdown
//! - NDJSON event output for CI

mod event;
mod sync;

pub use event::{ChangeEvent, ChangeKind, WatchEvent};
pub use sync::watch;
