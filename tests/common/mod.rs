//! Shared helpers for integration tests driving the autosync binary.

#![allow(dead_code)]

use std::path::Path;
use std::time::{Duration, Instant};

/// Path to the built autosync binary
pub fn autosync_bin() -> &'static str {
    env!("CARGO_BIN_EXE_autosync")
}

/// Install a fake `rsync` into `dir` that appends its argument list to
/// `log`, one invocation per line, and exits 0.
#[cfg(unix)]
pub fn install_fake_rsync(dir: &Path, log: &Path) {
    use std::os::unix::fs::PermissionsExt;

    let script = format!("#!/bin/sh\nprintf '%s\\n' \"$*\" >> \"{}\"\n", log.display());
    let path = dir.join("rsync");
    std::fs::write(&path, script).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
}

/// Poll until `pred` returns true or the timeout passes.
pub fn wait_until(timeout: Duration, mut pred: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if pred() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(50));
    }
    false
}
