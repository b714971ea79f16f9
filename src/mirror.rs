//! Sync dispatcher: answers every change event with one full-tree rsync run.
//!
//! The dispatcher owns the immutable [`WatchTarget`] and an explicit event
//! callback; it never configures process-global logging. Every run is
//! synchronous - the watch loop blocks until rsync exits.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::error::AutosyncResult;
use crate::watcher::{ChangeEvent, WatchEvent};

/// External sync program, treated as an opaque collaborator
pub const RSYNC_PROGRAM: &str = "rsync";

/// Fixed mirror-mode flags: archive, verbose, compress, partial+progress
pub const MIRROR_FLAGS: &str = "-avzP";

/// What to mirror and where. Set once at startup, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchTarget {
    pub local_root: PathBuf,
    pub remote_destination: String,
    /// Extra rsync flags appended verbatim between the fixed flags and
    /// the path pair
    pub extra_options: Vec<String>,
}

impl WatchTarget {
    pub fn new(
        local_root: PathBuf,
        remote_destination: String,
        rsync_options: &str,
    ) -> Self {
        Self {
            local_root,
            remote_destination,
            extra_options: split_options(rsync_options),
        }
    }

    /// Ordered argument list for one full-tree sync run:
    /// fixed flags, extra options, local root, remote destination.
    pub fn sync_args(&self) -> Vec<String> {
        let mut args = Vec::with_capacity(self.extra_options.len() + 3);
        args.push(MIRROR_FLAGS.to_string());
        args.extend(self.extra_options.iter().cloned());
        args.push(self.local_root.display().to_string());
        args.push(self.remote_destination.clone());
        args
    }
}

/// Split a raw `--rsync-options` value on whitespace.
pub fn split_options(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(str::to_string).collect()
}

/// Check once at startup whether the sync program is runnable.
pub fn rsync_available() -> bool {
    Command::new(RSYNC_PROGRAM)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Dispatcher from change events to sync invocations.
///
/// Construction performs one unconditional baseline sync, establishing the
/// mirror before any filesystem event is observed.
pub struct Mirror<F: Fn(WatchEvent)> {
    target: WatchTarget,
    program: String,
    emit: F,
}

impl<F: Fn(WatchEvent)> Mirror<F> {
    pub fn new(target: WatchTarget, emit: F) -> AutosyncResult<Self> {
        Self::with_program(RSYNC_PROGRAM, target, emit)
    }

    fn with_program(program: &str, target: WatchTarget, emit: F) -> AutosyncResult<Self> {
        let mirror = Self {
            target,
            program: program.to_string(),
            emit,
        };
        mirror.sync()?;
        Ok(mirror)
    }

    /// Log the change, then run one full-tree sync. Any event kind on any
    /// path triggers the same invocation of the entire target.
    pub fn handle(&self, change: &ChangeEvent) -> AutosyncResult<()> {
        (self.emit)(WatchEvent::from_change(change));
        self.sync()
    }

    /// Run the external sync program and block until it exits.
    ///
    /// Its stdout is discarded and its stderr is merged into the same
    /// discarded stream; a non-zero exit is logged but never aborts the
    /// watch loop.
    pub fn sync(&self) -> AutosyncResult<()> {
        (self.emit)(WatchEvent::Syncing);

        let args = self.target.sync_args();
        (self.emit)(WatchEvent::Command {
            line: format!("{} {}", self.program, args.join(" ")),
        });

        let status = Command::new(&self.program)
            .args(&args)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()?;

        if !status.success() {
            (self.emit)(WatchEvent::SyncFailed {
                code: status.code(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::watcher::ChangeKind;

    fn target(extra: &str) -> WatchTarget {
        WatchTarget::new(
            PathBuf::from("/src/project"),
            "user@host:/srv/mirror".to_string(),
            extra,
        )
    }

    #[test]
    fn sync_args_fixed_template_without_extras() {
        assert_eq!(
            target("").sync_args(),
            vec!["-avzP", "/src/project", "user@host:/srv/mirror"]
        );
    }

    #[test]
    fn sync_args_places_extras_between_flags_and_paths() {
        assert_eq!(
            target("--exclude *.tmp").sync_args(),
            vec![
                "-avzP",
                "--exclude",
                "*.tmp",
                "/src/project",
                "user@host:/srv/mirror"
            ]
        );
    }

    #[test]
    fn split_options_collapses_whitespace() {
        assert_eq!(
            split_options("  --delete   --exclude .git "),
            vec!["--delete", "--exclude", ".git"]
        );
        assert!(split_options("").is_empty());
    }

    #[test]
    fn rsync_available_does_not_panic() {
        let _ = rsync_available();
    }

    // Sequencing tests run against coreutils `true`/`false` instead of rsync.

    fn tagged(event: &WatchEvent) -> &'static str {
        match event {
            WatchEvent::WatchStarted { .. } => "started",
            WatchEvent::Changed { .. } => "changed",
            WatchEvent::Syncing => "syncing",
            WatchEvent::Command { .. } => "command",
            WatchEvent::SyncFailed { .. } => "sync_failed",
            WatchEvent::Shutdown => "shutdown",
        }
    }

    fn capture() -> (Arc<Mutex<Vec<String>>>, impl Fn(WatchEvent)) {
        let events: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();
        (events, move |event: WatchEvent| {
            sink.lock().unwrap().push(tagged(&event).to_string())
        })
    }

    #[cfg(unix)]
    #[test]
    fn construction_runs_exactly_one_baseline_sync() {
        let (events, emit) = capture();
        let _mirror = Mirror::with_program("true", target(""), emit).unwrap();

        assert_eq!(*events.lock().unwrap(), vec!["syncing", "command"]);
    }

    #[cfg(unix)]
    #[test]
    fn every_event_triggers_one_full_sequential_sync() {
        let (events, emit) = capture();
        let mirror = Mirror::with_program("true", target(""), emit).unwrap();
        events.lock().unwrap().clear();

        let change = ChangeEvent {
            kind: ChangeKind::Modified,
            is_directory: false,
            path: PathBuf::from("/src/project/a.txt"),
            dest_path: None,
        };

        // Two rapid events on the same path: two independent invocations,
        // no coalescing.
        mirror.handle(&change).unwrap();
        mirror.handle(&change).unwrap();

        assert_eq!(
            *events.lock().unwrap(),
            vec![
                "changed", "syncing", "command", //
                "changed", "syncing", "command",
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn nonzero_exit_is_logged_but_not_fatal() {
        let (events, emit) = capture();
        let mirror = Mirror::with_program("false", target(""), emit);

        let mirror = mirror.expect("non-zero exit must not abort the dispatcher");
        assert_eq!(
            *events.lock().unwrap(),
            vec!["syncing", "command", "sync_failed"]
        );

        events.lock().unwrap().clear();
        mirror.sync().unwrap();
        assert_eq!(
            *events.lock().unwrap(),
            vec!["syncing", "command", "sync_failed"]
        );
    }
}
