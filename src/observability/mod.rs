//! Observability
//!
//! Structured JSON event logging on top of the `log` facade.
//!
//! # Usage
//!
//! ```ignore
//! use movies_api::observability::{init_logging, Logger};
//!
//! init_logging();
//! Logger::info("MOVIE_CREATED", &[("id", "42")]);
//! ```

mod logger;

pub use logger::{init_logging, Logger, Severity, LOG_TARGET};
