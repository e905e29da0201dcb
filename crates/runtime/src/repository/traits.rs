//! Repository abstraction over the durable summary list.

use bones_core::Summary;

use crate::repository::Result;

/// Durable store of finished-session summaries.
///
/// `load` must tolerate an absent store (empty list); how much corruption
/// is tolerated is implementation-defined, but the file implementation also
/// downgrades unparsable content to an empty list. `store` replaces the
/// full list (read-modify-write append is layered on top by
/// [`crate::store::ResultStore`]).
pub trait HistoryRepository {
    fn load(&self) -> Result<Vec<Summary>>;

    fn store(&mut self, records: &[Summary]) -> Result<()>;

    /// Human-readable description of where records live, for logging.
    fn describe(&self) -> String;
}
