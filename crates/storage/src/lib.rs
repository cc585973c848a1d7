//! Storage layer for activity-log
//!
//! One `SQLite` file holds named collections of activity vectors; the
//! sqlite-vec extension supplies the distance functions used for
//! nearest-neighbour queries.

pub mod error;
mod migrations;
mod store;
#[cfg(test)]
mod tests;
mod traits;
mod vec_init;

pub use error::StorageError;
pub use store::ActivityStore;
pub use traits::VectorStore;
pub use vec_init::init_sqlite_vec;
