//! movies-api - an in-memory movie catalogue served over HTTP
//!
//! Layers, leaf-first:
//! - `schema`: movie types and the payload validator
//! - `store`: ordered in-memory record store and dataset loader
//! - `rest_api`: query precedence engine, handlers and routes
//! - `http_server`: config, cross-origin policy and listener
//! - `cli`: process entry point

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod rest_api;
pub mod schema;
pub mod store;
