//! Human-readable rendering of watch events.
//!
//! One timestamped line per lifecycle event, color-tagged by category the
//! way the classic auto-mirroring tools do: created=green, deleted=red,
//! modified=yellow, moved=blue, syncing=magenta, command=bold.

use crossterm::style::{Color, Stylize};

use autosync::{ChangeKind, WatchEvent};

fn paint(text: String, color: Color, enabled: bool) -> String {
    if enabled {
        format!("{}", text.with(color))
    } else {
        text
    }
}

fn kind_color(kind: ChangeKind) -> Color {
    match kind {
        ChangeKind::Created => Color::Green,
        ChangeKind::Deleted => Color::Red,
        ChangeKind::Modified => Color::Yellow,
        ChangeKind::Moved => Color::Blue,
    }
}

fn kind_label(kind: ChangeKind) -> &'static str {
    match kind {
        ChangeKind::Created => "Created",
        ChangeKind::Deleted => "Deleted",
        ChangeKind::Modified => "Modified",
        ChangeKind::Moved => "Moved",
    }
}

pub fn render_watch_event(timestamp: &str, event: &WatchEvent, supports_color: bool) -> String {
    let prefix = format!("[{}]", timestamp);

    match event {
        WatchEvent::WatchStarted { local, remote } => format!(
            "{} {}\n",
            prefix,
            paint(
                format!("Watching {} -> {} (Ctrl+C to stop)", local, remote),
                Color::Cyan,
                supports_color
            )
        ),
        WatchEvent::Changed {
            kind,
            what,
            path,
            dest,
        } => {
            let description = match dest {
                Some(dest) => format!("{} {}: from {} to {}", kind_label(*kind), what, path, dest),
                None => format!("{} {}: {}", kind_label(*kind), what, path),
            };
            format!(
                "{} {}\n",
                prefix,
                paint(description, kind_color(*kind), supports_color)
            )
        }
        WatchEvent::Syncing => format!(
            "{} {}\n",
            prefix,
            paint("Syncing...".to_string(), Color::Magenta, supports_color)
        ),
        WatchEvent::Command { line } => {
            let line = if supports_color {
                format!("{}", line.as_str().bold())
            } else {
                line.clone()
            };
            format!("{} {}\n", prefix, line)
        }
        WatchEvent::SyncFailed { code } => {
            let description = match code {
                Some(code) => format!("rsync exited with code {}", code),
                None => "rsync terminated by a signal".to_string(),
            };
            format!(
                "{} {}\n",
                prefix,
                paint(description, Color::Red, supports_color)
            )
        }
        WatchEvent::Shutdown => format!("{} Watch stopped.\n", prefix),
    }
}
