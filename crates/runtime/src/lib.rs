//! Host-side runtime for the dice duel: persistence and environment glue.
//!
//! `bones-runtime` supplies everything the pure engine in `bones-core`
//! deliberately leaves out: the durable history of finished sessions, the
//! platform location of that history, entropy-seeded dice, and the single
//! error surface a presentation layer matches on.
//!
//! Modules are organized by responsibility:
//! - [`repository`] provides the durable (and in-memory) summary stores
//! - [`store`] layers pagination and statistics over a repository
//! - [`dirs`] resolves where the history file lives
//! - [`env`] seeds the deterministic dice from OS entropy
pub mod dirs;
pub mod env;
pub mod repository;
pub mod store;

mod error;

pub use error::RuntimeError;
pub use repository::{
    FileHistoryRepository, HistoryError, HistoryRepository, InMemoryHistoryRepository, Result,
};
pub use store::{HistoryPage, HistoryStats, ResultStore};
