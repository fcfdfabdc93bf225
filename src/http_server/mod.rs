//! # HTTP Server Module
//!
//! Serves the movies REST API over HTTP.
//!
//! # Endpoints
//!
//! - `/` - Greeting
//! - `/movies` - List (filter, page, sort) and create
//! - `/movies/:id` - Get, partial update, delete

pub mod config;
pub mod cors;
pub mod server;

pub use config::HttpServerConfig;
pub use cors::OriginPolicy;
pub use server::HttpServer;
