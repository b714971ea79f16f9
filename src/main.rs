//! autosync CLI - watch a directory tree and mirror it with rsync.
//!
//! Usage: autosync [OPTIONS] <LOCAL_PATH> <REMOTE_PATH>
//!
//! Runs a baseline sync at startup, then one full-tree sync per detected
//! filesystem change, until interrupted with Ctrl+C.

mod cli;
mod ui;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use autosync::mirror::{rsync_available, WatchTarget};
use autosync::watcher::watch;
use autosync::AutosyncError;

use crate::cli::Cli;
use crate::ui::UiContext;

fn main() -> Result<()> {
    let Cli {
        local_path,
        remote_path,
        observer_timeout,
        rsync_options,
        json,
        color,
    } = Cli::parse();

    // Pre-flight: the one fatal startup check. Nothing is watched when
    // rsync is missing.
    if !rsync_available() {
        return Err(AutosyncError::RsyncNotFound.into());
    }

    let ui = UiContext::new(color);
    let target = WatchTarget::new(local_path, remote_path, &rsync_options);

    // Set up Ctrl+C handler
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();

    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl+C handler");

    watch(target, observer_timeout, running, |event| {
        if json {
            println!("{}", event.to_json());
        } else {
            let timestamp = chrono::Local::now()
                .format("%Y-%m-%d %H:%M:%S")
                .to_string();
            print!(
                "{}",
                crate::ui::watch::render_watch_event(&timestamp, &event, ui.color)
            );
        }
    })?;

    Ok(())
}
