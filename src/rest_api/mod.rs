//! # Movies REST API Module
//!
//! HTTP endpoints for CRUD operations on the movie collection, with
//! query-driven filtering, paging and sorting on the list route.

pub mod errors;
pub mod handler;
pub mod parser;
pub mod query;
pub mod response;
pub mod server;

pub use errors::{RestError, RestResult, NOT_FOUND_MESSAGE};
pub use handler::{InMemoryMovieHandler, MovieHandler};
pub use parser::ListParams;
pub use query::{QueryPlan, DEFAULT_PAGE_SIZE};
pub use response::{ListResponse, MessageResponse, PageResponse};
pub use server::{RestServer, DELETED_MESSAGE, GREETING};
