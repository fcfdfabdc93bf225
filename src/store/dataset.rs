//! Startup dataset loading
//!
//! The bundled catalogue is compiled into the binary; a JSON file with the
//! same shape (an array of movie records) can replace it. Every record goes
//! through the same field checks as a client payload, plus a required `id`.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::schema::{Movie, MovieValidator};

use super::errors::{StoreError, StoreResult};
use super::movie_store::MovieStore;

/// Bundled catalogue
pub const DEFAULT_DATASET: &str = include_str!("../../data/movies.json");

/// Parses and validates a JSON array of movies into a store
pub fn parse_dataset(json: &str) -> StoreResult<MovieStore> {
    let records: Vec<Value> = serde_json::from_str(json)?;
    let validator = MovieValidator::new();

    let movies = records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            validator
                .validate_record(record)
                .map_err(|source| StoreError::InvalidRecord {
                    index,
                    id: record_id(record),
                    source,
                })
        })
        .collect::<StoreResult<Vec<Movie>>>()?;

    MovieStore::from_records(movies)
}

fn record_id(record: &Value) -> String {
    match record.get("id") {
        Some(Value::String(id)) => id.clone(),
        Some(other) => other.to_string(),
        None => "no id".to_string(),
    }
}

/// Loads the bundled catalogue
pub fn load_default() -> StoreResult<MovieStore> {
    parse_dataset(DEFAULT_DATASET)
}

/// Loads a catalogue from a JSON file
pub fn load_file(path: &Path) -> StoreResult<MovieStore> {
    let json = fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_dataset(&json)
}
