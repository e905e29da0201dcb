//! File-backed history repository (UTF-8 JSON).

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use bones_core::Summary;

use crate::dirs;
use crate::repository::traits::HistoryRepository;
use crate::repository::{HistoryError, Result};

/// History repository persisting summaries as a JSON array in one file.
///
/// Reads are tolerant: a missing file and an unparsable file both load as
/// an empty list (the latter with a warning), so a damaged history can
/// never prevent new results from being recorded. Write failures propagate
/// to the caller.
pub struct FileHistoryRepository {
    path: PathBuf,
}

impl FileHistoryRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Open the repository at the platform default location (or the
    /// `BONES_HISTORY_FILE` override).
    pub fn at_default_location() -> Self {
        Self::new(dirs::history_file_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoryRepository for FileHistoryRepository {
    fn load(&self) -> Result<Vec<Summary>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(error) => return Err(HistoryError::Io(error)),
        };

        match serde_json::from_str(&raw) {
            Ok(records) => Ok(records),
            Err(error) => {
                tracing::warn!(
                    path = %self.path.display(),
                    %error,
                    "history file is unreadable, treating it as empty"
                );
                Ok(Vec::new())
            }
        }
    }

    fn store(&mut self, records: &[Summary]) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, json)?;

        tracing::debug!(
            path = %self.path.display(),
            count = records.len(),
            "history written"
        );
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn summary(player: &str, score: i32) -> Summary {
        let at = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap();
        Summary {
            started_at: at,
            finished_at: at,
            player: player.to_string(),
            level: "Short".to_string(),
            rounds: 5,
            score,
        }
    }

    #[test]
    fn missing_file_loads_as_empty() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileHistoryRepository::new(temp_dir.path().join("history.json"));
        assert_eq!(repo.load().unwrap(), Vec::new());
    }

    #[test]
    fn corrupt_file_loads_as_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("history.json");
        fs::write(&path, "{ not json at all").unwrap();

        let repo = FileHistoryRepository::new(&path);
        assert_eq!(repo.load().unwrap(), Vec::new());
    }

    #[test]
    fn store_then_load_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let mut repo = FileHistoryRepository::new(temp_dir.path().join("history.json"));

        let records = vec![summary("Alice", 4), summary("Bob", -2)];
        repo.store(&records).unwrap();
        assert_eq!(repo.load().unwrap(), records);
    }

    #[test]
    fn store_creates_missing_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested/dir/history.json");

        let mut repo = FileHistoryRepository::new(&path);
        repo.store(&[summary("Alice", 1)]).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn timestamps_use_the_fixed_wire_format() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("history.json");

        let mut repo = FileHistoryRepository::new(&path);
        repo.store(&[summary("Alice", 4)]).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"2024-03-09 18:00:00\""));
    }
}
