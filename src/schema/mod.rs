//! Movie schema
//!
//! Record types and the validator gating every write.
//!
//! # Design Principles
//!
//! - Validation runs before the store is touched
//! - Unknown fields are rejected, `id` is server-owned
//! - No implicit type coercion
//! - Every failing field is reported in one error

mod errors;
mod types;
mod validator;

pub use errors::{FieldIssue, SchemaResult, ValidationError};
pub use types::{
    Genre, Movie, MoviePatch, NewMovie, DEFAULT_RATE, MAX_RATE, MAX_YEAR, MIN_RATE, MIN_YEAR,
};
pub use validator::{MovieValidator, DECLARED_FIELDS};
