//! Result store: append, paginate, and summarize finished sessions.

use bones_core::Summary;

use crate::repository::{HistoryError, HistoryRepository, Result};

/// One page of history records, newest first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryPage {
    /// Records on this page, sorted by finish time descending.
    pub records: Vec<Summary>,
    /// 0-indexed page this response covers.
    pub page_index: usize,
    /// `ceil(total_records / page_size)`.
    pub total_pages: usize,
    /// Records in the whole store, for "X–Y of Z" headers.
    pub total_records: usize,
}

impl HistoryPage {
    /// Conventional page size used by the history view.
    pub const DEFAULT_PAGE_SIZE: usize = 8;
}

/// Aggregate win/loss statistics over a set of summaries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HistoryStats {
    pub wins: usize,
    pub losses: usize,
    pub draws: usize,
    /// `100 * wins / total`; 0.0 for an empty record set.
    pub win_rate_percent: f64,
}

impl HistoryStats {
    pub fn from_records(records: &[Summary]) -> Self {
        let wins = records.iter().filter(|record| record.score > 0).count();
        let losses = records.iter().filter(|record| record.score < 0).count();
        let draws = records.len() - wins - losses;
        let win_rate_percent = if records.is_empty() {
            0.0
        } else {
            100.0 * wins as f64 / records.len() as f64
        };
        Self {
            wins,
            losses,
            draws,
            win_rate_percent,
        }
    }

    pub fn total(&self) -> usize {
        self.wins + self.losses + self.draws
    }
}

/// Durable list of finished sessions with paginated, sorted retrieval.
///
/// Reads go through the repository on every call, so the store tolerates
/// the underlying medium being emptied, replaced, or corrupted externally
/// at any time: load failures are downgraded to an empty history. Write
/// failures surface to the caller and are not retried.
pub struct ResultStore<R: HistoryRepository> {
    repository: R,
}

impl<R: HistoryRepository> ResultStore<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Append one summary to the durable list (read-modify-write).
    ///
    /// A damaged existing history never blocks the append; the summary is
    /// accepted into the list being written even when the final write
    /// fails, in which case the error is surfaced without retry.
    pub fn append(&mut self, summary: Summary) -> Result<()> {
        let mut records = self.load_tolerant();
        records.push(summary);
        self.repository.store(&records)
    }

    /// Fetch one 0-indexed page, sorted by finish time descending.
    ///
    /// An out-of-range page returns an empty record set, not an error.
    ///
    /// # Errors
    ///
    /// `InvalidPageSize` when `page_size` is zero.
    pub fn list_page(&self, page_index: usize, page_size: usize) -> Result<HistoryPage> {
        if page_size == 0 {
            return Err(HistoryError::InvalidPageSize);
        }

        let mut records = self.load_tolerant();
        records.sort_by(|a, b| b.finished_at.cmp(&a.finished_at));

        let total_records = records.len();
        let total_pages = total_records.div_ceil(page_size);

        let start = page_index.saturating_mul(page_size);
        let page_records = if start >= total_records {
            Vec::new()
        } else {
            let end = (start + page_size).min(total_records);
            records[start..end].to_vec()
        };

        Ok(HistoryPage {
            records: page_records,
            page_index,
            total_pages,
            total_records,
        })
    }

    /// Statistics over the entire history, not just one page.
    pub fn statistics(&self) -> HistoryStats {
        HistoryStats::from_records(&self.load_tolerant())
    }

    /// Load the full record list, downgrading read failures to empty.
    fn load_tolerant(&self) -> Vec<Summary> {
        match self.repository.load() {
            Ok(records) => records,
            Err(error) => {
                tracing::warn!(
                    store = %self.repository.describe(),
                    %error,
                    "failed to load history, continuing with an empty list"
                );
                Vec::new()
            }
        }
    }
}
