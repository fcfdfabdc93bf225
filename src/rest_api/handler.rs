//! # REST API Handler
//!
//! Translates REST requests into store operations.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde_json::Value;
use uuid::Uuid;

use crate::observability::Logger;
use crate::schema::{Movie, MovieValidator};
use crate::store::MovieStore;

use super::errors::{RestError, RestResult};
use super::parser::ListParams;
use super::query::QueryPlan;
use super::response::ListResponse;

/// Movie collection operations behind the HTTP routes
pub trait MovieHandler: Send + Sync {
    /// List movies according to the query precedence rules
    fn list(&self, params: &ListParams) -> RestResult<ListResponse>;

    /// Get a single movie by id
    fn get(&self, id: &str) -> RestResult<Movie>;

    /// Validate and insert a movie, assigning a fresh id
    fn create(&self, body: &Value) -> RestResult<Movie>;

    /// Validate a partial body and merge it into an existing movie
    fn update(&self, id: &str, body: &Value) -> RestResult<Movie>;

    /// Delete a movie, returning the removed record
    fn delete(&self, id: &str) -> RestResult<Movie>;
}

/// Handler backed by an in-process `MovieStore`.
///
/// Mutations (create, update, delete, rate sort) hold the write lock.
pub struct InMemoryMovieHandler {
    store: RwLock<MovieStore>,
    validator: MovieValidator,
}

impl InMemoryMovieHandler {
    pub fn new(store: MovieStore) -> Self {
        Self {
            store: RwLock::new(store),
            validator: MovieValidator::new(),
        }
    }

    /// Copy of the current records in store order
    pub fn snapshot(&self) -> RestResult<Vec<Movie>> {
        Ok(self.read()?.list().to_vec())
    }

    fn read(&self) -> RestResult<RwLockReadGuard<'_, MovieStore>> {
        self.store
            .read()
            .map_err(|_| RestError::Internal("Lock poisoned".to_string()))
    }

    fn write(&self) -> RestResult<RwLockWriteGuard<'_, MovieStore>> {
        self.store
            .write()
            .map_err(|_| RestError::Internal("Lock poisoned".to_string()))
    }
}

impl MovieHandler for InMemoryMovieHandler {
    fn list(&self, params: &ListParams) -> RestResult<ListResponse> {
        let plan = QueryPlan::resolve(params)?;

        if plan.mutates_store() {
            let mut store = self.write()?;
            Logger::trace("MOVIES_REORDERED", &[("plan", plan.name())]);
            Ok(plan.execute(&mut store))
        } else {
            let store = self.read()?;
            Ok(plan.view(store.list()))
        }
    }

    fn get(&self, id: &str) -> RestResult<Movie> {
        let store = self.read()?;
        store.find_by_id(id).cloned().ok_or(RestError::NotFound)
    }

    fn create(&self, body: &Value) -> RestResult<Movie> {
        let new = self.validator.validate(body)?;

        let mut store = self.write()?;
        let mut id = Uuid::new_v4().to_string();
        while store.find_by_id(&id).is_some() {
            id = Uuid::new_v4().to_string();
        }

        let movie = Movie::from_new(id, new);
        store.append(movie.clone());

        Logger::info(
            "MOVIE_CREATED",
            &[("id", movie.id.as_str()), ("title", movie.title.as_str())],
        );
        Ok(movie)
    }

    fn update(&self, id: &str, body: &Value) -> RestResult<Movie> {
        let mut store = self.write()?;
        let index = store.find_index_by_id(id).ok_or(RestError::NotFound)?;

        let patch = self.validator.validate_partial(body)?;
        let movie = store.apply_at(index, patch)?.clone();

        Logger::info("MOVIE_UPDATED", &[("id", id)]);
        Ok(movie)
    }

    fn delete(&self, id: &str) -> RestResult<Movie> {
        let mut store = self.write()?;
        let index = store.find_index_by_id(id).ok_or(RestError::NotFound)?;
        let removed = store.remove_at(index)?;

        Logger::info("MOVIE_DELETED", &[("id", id)]);
        Ok(removed)
    }
}
