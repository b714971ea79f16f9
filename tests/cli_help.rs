use std::process::Command;

mod common;

#[test]
fn test_help_lists_watch_surface() {
    let output = Command::new(common::autosync_bin())
        .arg("--help")
        .output()
        .unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--observer-timeout"), "got:\n{}", stdout);
    assert!(stdout.contains("--rsync-options"), "got:\n{}", stdout);
    assert!(stdout.contains("--json"), "got:\n{}", stdout);
    assert!(stdout.contains("LOCAL_PATH"), "got:\n{}", stdout);
    assert!(stdout.contains("REMOTE_PATH"), "got:\n{}", stdout);
}

#[test]
fn test_missing_positional_arguments_is_a_usage_error() {
    let output = Command::new(common::autosync_bin()).output().unwrap();
    assert!(!output.status.success());
}
