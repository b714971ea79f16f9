//! Change event types and NDJSON output events

use std::path::{Path, PathBuf};

use notify::event::{CreateKind, EventKind, ModifyKind, RemoveKind, RenameMode};
use notify::Event;

/// What happened to a filesystem entry.
///
/// One tagged variant set dispatched through a single handler; the raw
/// `notify` taxonomy is collapsed into these four kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    Created,
    Deleted,
    Modified,
    Moved,
}

/// A single detected filesystem change.
///
/// Ephemeral: produced by the watcher, consumed immediately by the
/// dispatcher, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub kind: ChangeKind,
    pub is_directory: bool,
    pub path: PathBuf,
    /// Destination path, present only for `Moved`
    pub dest_path: Option<PathBuf>,
}

impl ChangeEvent {
    fn new(kind: ChangeKind, is_directory: bool, path: &Path) -> Self {
        Self {
            kind,
            is_directory,
            path: path.to_path_buf(),
            dest_path: None,
        }
    }

    /// "file" or "directory", for log lines
    pub fn what(&self) -> &'static str {
        if self.is_directory {
            "directory"
        } else {
            "file"
        }
    }

    /// Translate a raw `notify` event into zero or more change events.
    ///
    /// Access notifications and unclassified events carry no mirror-relevant
    /// information and are dropped. A rename reported as a from/to pair
    /// becomes one `Moved` event; bare rename halves map to `Deleted` and
    /// `Created`.
    pub fn from_notify(event: &Event) -> Vec<ChangeEvent> {
        match event.kind {
            EventKind::Create(kind) => event
                .paths
                .iter()
                .map(|p| {
                    Self::new(
                        ChangeKind::Created,
                        matches!(kind, CreateKind::Folder) || p.is_dir(),
                        p,
                    )
                })
                .collect(),
            EventKind::Remove(kind) => event
                .paths
                .iter()
                .map(|p| Self::new(ChangeKind::Deleted, matches!(kind, RemoveKind::Folder), p))
                .collect(),
            EventKind::Modify(ModifyKind::Name(RenameMode::Both)) => {
                if let [from, to] = event.paths.as_slice() {
                    vec![ChangeEvent {
                        kind: ChangeKind::Moved,
                        is_directory: to.is_dir(),
                        path: from.clone(),
                        dest_path: Some(to.clone()),
                    }]
                } else {
                    // Pair expected but not delivered; treat each path as modified
                    event
                        .paths
                        .iter()
                        .map(|p| Self::new(ChangeKind::Modified, p.is_dir(), p))
                        .collect()
                }
            }
            EventKind::Modify(ModifyKind::Name(RenameMode::From)) => event
                .paths
                .iter()
                .map(|p| Self::new(ChangeKind::Deleted, p.is_dir(), p))
                .collect(),
            EventKind::Modify(ModifyKind::Name(RenameMode::To)) => event
                .paths
                .iter()
                .map(|p| Self::new(ChangeKind::Created, p.is_dir(), p))
                .collect(),
            EventKind::Modify(_) => event
                .paths
                .iter()
                .map(|p| Self::new(ChangeKind::Modified, p.is_dir(), p))
                .collect(),
            EventKind::Access(_) | EventKind::Any | EventKind::Other => Vec::new(),
        }
    }
}

/// Watch event types for output (NDJSON in `--json` mode)
#[derive(Debug, Clone, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WatchEvent {
    WatchStarted {
        local: String,
        remote: String,
    },
    Changed {
        kind: ChangeKind,
        what: String,
        path: String,
        dest: Option<String>,
    },
    Syncing,
    Command {
        line: String,
    },
    SyncFailed {
        code: Option<i32>,
    },
    Shutdown,
}

impl WatchEvent {
    pub fn from_change(change: &ChangeEvent) -> Self {
        WatchEvent::Changed {
            kind: change.kind,
            what: change.what().to_string(),
            path: change.path.display().to_string(),
            dest: change.dest_path.as_ref().map(|p| p.display().to_string()),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}
