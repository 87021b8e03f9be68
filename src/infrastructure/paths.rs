//! Filesystem locations for application data.

use std::env;
use std::path::PathBuf;

/// Returns the directory for application data (currently just the trace
/// log).
///
/// Resolves `$XDG_DATA_HOME/kinolog`, falling back to
/// `$HOME/.local/share/kinolog`, and finally to a relative `.kinolog` when
/// neither variable is set.
#[must_use]
pub fn data_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_DATA_HOME") {
        if !xdg.is_empty() {
            return PathBuf::from(xdg).join("kinolog");
        }
    }
    if let Ok(home) = env::var("HOME") {
        if !home.is_empty() {
            return PathBuf::from(home).join(".local/share/kinolog");
        }
    }
    PathBuf::from(".kinolog")
}
