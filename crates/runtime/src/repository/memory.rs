//! In-memory history repository.

use bones_core::Summary;

use crate::repository::Result;
use crate::repository::traits::HistoryRepository;

/// In-memory history for tests and ephemeral runs.
///
/// Not persistent across process restarts; the system is single-threaded
/// by contract, so a plain `Vec` suffices.
#[derive(Clone, Debug, Default)]
pub struct InMemoryHistoryRepository {
    records: Vec<Summary>,
}

impl InMemoryHistoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repository with existing records (test setup).
    pub fn with_records(records: Vec<Summary>) -> Self {
        Self { records }
    }
}

impl HistoryRepository for InMemoryHistoryRepository {
    fn load(&self) -> Result<Vec<Summary>> {
        Ok(self.records.clone())
    }

    fn store(&mut self, records: &[Summary]) -> Result<()> {
        self.records = records.to_vec();
        Ok(())
    }

    fn describe(&self) -> String {
        format!("in-memory ({} records)", self.records.len())
    }
}
