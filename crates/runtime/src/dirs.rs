//! Resolution of the history file location.
//!
//! Follows platform conventions for data directories, with an environment
//! override for tests and portable installs.

use std::path::PathBuf;

/// Environment variable overriding the history file path.
pub const HISTORY_ENV_VAR: &str = "BONES_HISTORY_FILE";

/// Default file name of the history store.
pub const HISTORY_FILE_NAME: &str = "history.json";

/// Resolve where the history file lives.
///
/// Precedence: `BONES_HISTORY_FILE`, then the platform data directory,
/// then the current directory (headless platforms without a home).
pub fn history_file_path() -> PathBuf {
    if let Ok(path) = std::env::var(HISTORY_ENV_VAR) {
        return PathBuf::from(path);
    }

    directories::ProjectDirs::from("", "", "bones")
        .map(|dirs| dirs.data_dir().join(HISTORY_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(HISTORY_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_ends_with_history_file_name() {
        if std::env::var(HISTORY_ENV_VAR).is_ok() {
            // An external override may point anywhere; nothing to assert.
            return;
        }
        let path = history_file_path();
        assert_eq!(
            path.file_name().and_then(|name| name.to_str()),
            Some(HISTORY_FILE_NAME)
        );
    }
}
