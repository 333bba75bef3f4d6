//! Clipboard collaborator used by the copy-email action.
//!
//! Modeled as a trait so the event layer can be exercised with a recording
//! fake. The system implementation shells out to `wl-copy` on Wayland and
//! falls back to `xclip`; a missing tool or failed spawn reports `false` and
//! the session continues.

use std::io::Write as _;
use std::process::{Command, Stdio};

/// External clipboard surface: a single best-effort write operation.
pub trait Clipboard {
    /// Place `text` on the clipboard. Returns `false` when the write failed.
    fn write(&self, text: &str) -> bool;
}

/// Clipboard backed by the desktop's clipboard tool.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

/// Pipe `text` into `program` with the given arguments.
fn pipe_into(program: &str, args: &[&str], text: &str) -> bool {
    let Ok(mut child) = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
    else {
        return false;
    };
    if let Some(mut sin) = child.stdin.take()
        && sin.write_all(text.as_bytes()).is_err()
    {
        let _ = child.wait();
        return false;
    }
    matches!(child.wait(), Ok(status) if status.success())
}

impl Clipboard for SystemClipboard {
    fn write(&self, text: &str) -> bool {
        // Wayland first, X11 fallback; which() avoids a doomed spawn.
        if std::env::var("WAYLAND_DISPLAY").is_ok()
            && which::which("wl-copy").is_ok()
            && pipe_into("wl-copy", &[], text)
        {
            return true;
        }
        if which::which("xclip").is_ok() && pipe_into("xclip", &["-selection", "clipboard"], text) {
            return true;
        }
        tracing::debug!("no usable clipboard tool (wl-copy/xclip)");
        false
    }
}
