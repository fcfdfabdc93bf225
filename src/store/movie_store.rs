//! In-memory movie store
//!
//! An ordered sequence of records. Order is insertion order until a
//! rate sort reorders it in place.

use std::collections::HashSet;

use crate::schema::{Movie, MoviePatch};

use super::errors::{StoreError, StoreResult};

/// Direction for rate sorting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Ordered, mutable collection of movies.
///
/// Not synchronized; callers that share it across threads wrap it in a lock.
#[derive(Debug, Clone, Default)]
pub struct MovieStore {
    movies: Vec<Movie>,
}

impl MovieStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store from records, rejecting duplicate ids
    pub fn from_records(movies: Vec<Movie>) -> StoreResult<Self> {
        let mut seen = HashSet::with_capacity(movies.len());
        for movie in &movies {
            if !seen.insert(movie.id.as_str()) {
                return Err(StoreError::DuplicateId(movie.id.clone()));
            }
        }
        Ok(Self { movies })
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Current records in store order
    pub fn list(&self) -> &[Movie] {
        &self.movies
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Movie> {
        self.movies.iter().find(|m| m.id == id)
    }

    pub fn find_index_by_id(&self, id: &str) -> Option<usize> {
        self.movies.iter().position(|m| m.id == id)
    }

    /// Adds a record at the end.
    ///
    /// Callers guarantee the id is fresh.
    pub fn append(&mut self, movie: Movie) {
        self.movies.push(movie);
    }

    /// Removes the record at `index`, shifting the rest down
    pub fn remove_at(&mut self, index: usize) -> StoreResult<Movie> {
        if index >= self.movies.len() {
            return Err(StoreError::IndexOutOfBounds {
                index,
                len: self.movies.len(),
            });
        }
        Ok(self.movies.remove(index))
    }

    /// Merges `patch` into the record at `index`
    pub fn apply_at(&mut self, index: usize, patch: MoviePatch) -> StoreResult<&Movie> {
        let len = self.movies.len();
        let movie = self
            .movies
            .get_mut(index)
            .ok_or(StoreError::IndexOutOfBounds { index, len })?;
        movie.apply(patch);
        Ok(&*movie)
    }

    /// Stable in-place sort by rate; the new order persists
    pub fn sort_by_rate(&mut self, direction: SortDirection) {
        match direction {
            SortDirection::Ascending => self.movies.sort_by(|a, b| a.rate.total_cmp(&b.rate)),
            SortDirection::Descending => self.movies.sort_by(|a, b| b.rate.total_cmp(&a.rate)),
        }
    }
}
