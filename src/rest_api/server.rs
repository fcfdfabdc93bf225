//! # REST API HTTP Server
//!
//! Axum routes for the movie collection.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::Value;

use crate::schema::{FieldIssue, Movie, ValidationError};

use super::errors::{RestError, RestResult};
use super::handler::MovieHandler;
use super::parser::ListParams;
use super::response::{ListResponse, MessageResponse};

/// Body of `GET /`
pub const GREETING: &str = "holaa";

/// Body message after a successful delete
pub const DELETED_MESSAGE: &str = "Movie deleted";

/// REST API server state
pub struct RestServer<H: MovieHandler> {
    handler: Arc<H>,
}

impl<H: MovieHandler + 'static> RestServer<H> {
    pub fn new(handler: H) -> Self {
        Self {
            handler: Arc::new(handler),
        }
    }

    /// Wraps an already shared handler
    pub fn from_shared(handler: Arc<H>) -> Self {
        Self { handler }
    }

    /// Build the Axum router
    pub fn router(self) -> Router {
        let state = Arc::new(self);

        Router::new()
            .route("/", get(root_handler))
            .route("/movies", get(list_handler::<H>).post(create_handler::<H>))
            .route(
                "/movies/:id",
                get(get_handler::<H>)
                    .patch(update_handler::<H>)
                    .delete(delete_handler::<H>),
            )
            .with_state(state)
    }
}

/// Shared state type
type ServerState<H> = Arc<RestServer<H>>;

/// Turns a body that is not JSON into the usual validation error shape
fn json_body(body: Result<Json<Value>, JsonRejection>) -> RestResult<Value> {
    match body {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => Err(RestError::Validation(ValidationError::single(
            FieldIssue::new("$body", rejection.body_text()),
        ))),
    }
}

/// Greeting handler
async fn root_handler() -> Json<MessageResponse> {
    Json(MessageResponse::new(GREETING))
}

/// List movies handler
async fn list_handler<H: MovieHandler + 'static>(
    State(server): State<ServerState<H>>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Json<ListResponse>, RestError> {
    let params = ListParams::parse(&query);

    let result = server.handler.list(&params)?;
    Ok(Json(result))
}

/// Get single movie handler
async fn get_handler<H: MovieHandler + 'static>(
    State(server): State<ServerState<H>>,
    Path(id): Path<String>,
) -> Result<Json<Movie>, RestError> {
    let result = server.handler.get(&id)?;
    Ok(Json(result))
}

/// Create movie handler
async fn create_handler<H: MovieHandler + 'static>(
    State(server): State<ServerState<H>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Movie>), RestError> {
    let body = json_body(body)?;

    let result = server.handler.create(&body)?;
    Ok((StatusCode::CREATED, Json(result)))
}

/// Partial update handler
async fn update_handler<H: MovieHandler + 'static>(
    State(server): State<ServerState<H>>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Movie>, RestError> {
    // An unknown id is a 404 whatever the body looks like
    let body = match json_body(body) {
        Ok(body) => body,
        Err(err) => {
            server.handler.get(&id)?;
            return Err(err);
        }
    };

    let result = server.handler.update(&id, &body)?;
    Ok(Json(result))
}

/// Delete movie handler
async fn delete_handler<H: MovieHandler + 'static>(
    State(server): State<ServerState<H>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, RestError> {
    server.handler.delete(&id)?;
    Ok(Json(MessageResponse::new(DELETED_MESSAGE)))
}
