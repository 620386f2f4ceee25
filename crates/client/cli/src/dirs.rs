//! Platform-specific directory utilities

use std::path::PathBuf;

/// Get the platform-specific save directory
///
/// Follows platform conventions:
/// - macOS: `~/Library/Application Support/status-sim/saves`
/// - Linux: `~/.local/share/status-sim/saves` (or `$XDG_DATA_HOME/status-sim/saves`)
/// - Windows: `%APPDATA%\status-sim\saves`
/// - Fallback: `./save_data/saves`
pub fn save_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "status-sim")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./save_data"))
        .join("saves")
}
