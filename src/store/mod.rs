//! Record store
//!
//! Process-local, ordered collection of movies plus the startup loader.
//! Nothing here is durable.

mod dataset;
mod errors;
mod movie_store;

pub use dataset::{load_default, load_file, parse_dataset, DEFAULT_DATASET};
pub use errors::{StoreError, StoreResult};
pub use movie_store::{MovieStore, SortDirection};
