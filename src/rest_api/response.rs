//! # Response Formatting
//!
//! Response bodies for the movies endpoints.

use serde::Serialize;

use crate::schema::{FieldIssue, Movie, ValidationError};

/// `{"message": ...}` body used by greetings, confirmations and 404s
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `{"error": [...]}` body for rejected payloads
#[derive(Debug, Clone, Serialize)]
pub struct ValidationErrorResponse {
    pub error: Vec<FieldIssue>,
}

impl From<ValidationError> for ValidationErrorResponse {
    fn from(err: ValidationError) -> Self {
        Self {
            error: err.into_issues(),
        }
    }
}

/// One page of movies plus paging metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse {
    pub movies: Vec<Movie>,
    pub total_pages: u64,
    pub current_page: i64,
    pub total_movies: usize,
}

/// Body of `GET /movies`: either a plain list or a page
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ListResponse {
    Movies(Vec<Movie>),
    Page(PageResponse),
}

impl ListResponse {
    /// Movies carried by the response, whatever its shape
    pub fn movies(&self) -> &[Movie] {
        match self {
            ListResponse::Movies(movies) => movies,
            ListResponse::Page(page) => &page.movies,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_response_serialization() {
        let response = ListResponse::Page(PageResponse {
            movies: Vec::new(),
            total_pages: 3,
            current_page: 2,
            total_movies: 12,
        });

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["totalPages"], 3);
        assert_eq!(json["currentPage"], 2);
        assert_eq!(json["totalMovies"], 12);
        assert!(json["movies"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_plain_list_serializes_as_array() {
        let json = serde_json::to_value(ListResponse::Movies(Vec::new())).unwrap();
        assert!(json.is_array());
    }

    #[test]
    fn test_validation_error_body() {
        let err = ValidationError::single(FieldIssue::missing_field("title"));
        let json = serde_json::to_value(ValidationErrorResponse::from(err)).unwrap();
        assert_eq!(json["error"][0]["field"], "title");
    }
}
