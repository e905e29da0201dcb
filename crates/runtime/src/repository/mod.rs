//! Repository layer for the durable session history.
//!
//! Repositories handle the one piece of data that outlives a process: the
//! list of finished-session summaries. The file-backed implementation is
//! the production store; the in-memory one serves tests and ephemeral runs.

mod error;
mod file;
mod memory;
mod traits;

pub use error::{HistoryError, Result};
pub use file::FileHistoryRepository;
pub use memory::InMemoryHistoryRepository;
pub use traits::HistoryRepository;
