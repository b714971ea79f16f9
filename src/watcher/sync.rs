//! Watch loop: filesystem notifications in, sync runs out

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, RecvTimeoutError};
use std::sync::Arc;
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};

use crate::error::AutosyncResult;
use crate::mirror::{Mirror, WatchTarget};

use super::event::{ChangeEvent, WatchEvent};

/// Watch `target.local_root` recursively and run one full-tree sync per
/// detected change, strictly sequentially.
///
/// The baseline sync runs before the watcher is registered, so the mirror
/// exists even if no event ever arrives. `running` is the single stop
/// signal: once it reads false the loop emits `Shutdown` and returns.
pub fn watch(
    target: WatchTarget,
    observer_timeout: Option<Duration>,
    running: Arc<AtomicBool>,
    emit: impl Fn(WatchEvent),
) -> AutosyncResult<()> {
    emit(WatchEvent::WatchStarted {
        local: target.local_root.display().to_string(),
        remote: target.remote_destination.clone(),
    });

    let local_root = target.local_root.clone();

    // Baseline sync happens inside construction
    let mirror = Mirror::new(target, &emit)?;

    let (tx, rx) = channel();

    let mut config = Config::default();
    if let Some(interval) = observer_timeout {
        config = config.with_poll_interval(interval);
    }

    let mut watcher = RecommendedWatcher::new(
        move |res: Result<Event, notify::Error>| {
            if let Ok(event) = res {
                let _ = tx.send(event);
            }
        },
        config,
    )?;

    watcher.watch(&local_root, RecursiveMode::Recursive)?;

    while running.load(Ordering::SeqCst) {
        // Short timeout so the stop signal is noticed promptly
        match rx.recv_timeout(Duration::from_millis(50)) {
            Ok(event) => {
                for change in ChangeEvent::from_notify(&event) {
                    mirror.handle(&change)?;
                }
            }
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    emit(WatchEvent::Shutdown);
    Ok(())
}
