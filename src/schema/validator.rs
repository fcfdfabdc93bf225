//! Movie payload validator
//!
//! Validation semantics:
//! - The payload must be a JSON object
//! - All required fields are present (full validation only)
//! - No undeclared fields exist; `id` is server-owned in client payloads
//!   and required in stored records
//! - Field types match exactly, integers must be integral
//! - Every failing field is reported, not just the first
//!
//! Validator does not mutate the input.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::{Map, Value};

use super::errors::{FieldIssue, SchemaResult, ValidationError};
use super::types::{
    Genre, Movie, MoviePatch, NewMovie, DEFAULT_RATE, MAX_RATE, MAX_YEAR, MIN_RATE, MIN_YEAR,
};

/// Fields a client may send, in reporting order
pub const DECLARED_FIELDS: [&str; 7] = [
    "title", "year", "director", "duration", "rate", "poster", "genre",
];

fn poster_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^https?://[^\s/$.?#][^\s]*$").expect("poster pattern is a valid regex")
    })
}

/// Validates untyped request bodies into movie payloads.
#[derive(Debug, Clone, Copy, Default)]
pub struct MovieValidator;

impl MovieValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validates a creation payload.
    ///
    /// `rate` may be omitted and falls back to `DEFAULT_RATE`; every other
    /// declared field is required.
    pub fn validate(&self, input: &Value) -> SchemaResult<NewMovie> {
        let obj = as_object(input)?;
        let mut errors = ValidationError::new();
        reject_undeclared(obj, false, &mut errors);
        new_movie(obj, errors)
    }

    /// Validates a stored record, such as one entry of a dataset file.
    ///
    /// Same rules as `validate`, except that a non-empty `id` is required.
    pub fn validate_record(&self, input: &Value) -> SchemaResult<Movie> {
        let obj = as_object(input)?;
        let mut errors = ValidationError::new();
        reject_undeclared(obj, true, &mut errors);
        let id = required(obj, "id", check_text, &mut errors);

        match (id, new_movie(obj, errors)) {
            (Some(id), Ok(new)) => Ok(Movie::from_new(id, new)),
            (_, Err(errors)) => Err(errors),
            (None, Ok(_)) => Err(ValidationError::single(FieldIssue::missing_field("id"))),
        }
    }

    /// Validates a partial payload: only the fields present are checked.
    pub fn validate_partial(&self, input: &Value) -> SchemaResult<MoviePatch> {
        let obj = as_object(input)?;
        let mut errors = ValidationError::new();
        reject_undeclared(obj, false, &mut errors);

        let patch = MoviePatch {
            title: optional(obj, "title", check_text, &mut errors),
            year: optional(obj, "year", check_year, &mut errors),
            director: optional(obj, "director", check_text, &mut errors),
            duration: optional(obj, "duration", check_duration, &mut errors),
            rate: optional(obj, "rate", check_rate, &mut errors),
            poster: optional(obj, "poster", check_poster, &mut errors),
            genre: optional(obj, "genre", check_genre, &mut errors),
        };

        if errors.is_empty() {
            Ok(patch)
        } else {
            Err(errors)
        }
    }
}

fn as_object(input: &Value) -> SchemaResult<&Map<String, Value>> {
    input.as_object().ok_or_else(|| {
        ValidationError::single(FieldIssue::type_mismatch(
            "$root",
            "object",
            json_type_name(input),
        ))
    })
}

/// Full field set of a movie; `errors` carries issues found earlier
fn new_movie(obj: &Map<String, Value>, mut errors: ValidationError) -> SchemaResult<NewMovie> {
    let title = required(obj, "title", check_text, &mut errors);
    let year = required(obj, "year", check_year, &mut errors);
    let director = required(obj, "director", check_text, &mut errors);
    let duration = required(obj, "duration", check_duration, &mut errors);
    let rate = match obj.get("rate") {
        Some(value) => present("rate", value, check_rate, &mut errors),
        None => Some(DEFAULT_RATE),
    };
    let poster = required(obj, "poster", check_poster, &mut errors);
    let genre = required(obj, "genre", check_genre, &mut errors);

    if let (
        Some(title),
        Some(year),
        Some(director),
        Some(duration),
        Some(rate),
        Some(poster),
        Some(genre),
    ) = (title, year, director, duration, rate, poster, genre)
    {
        if errors.is_empty() {
            return Ok(NewMovie {
                title,
                year,
                director,
                duration,
                poster,
                genre,
                rate,
            });
        }
    }

    Err(errors)
}

fn reject_undeclared(obj: &Map<String, Value>, allow_id: bool, errors: &mut ValidationError) {
    for key in obj.keys() {
        if key == "id" {
            if allow_id {
                continue;
            }
            errors.push(FieldIssue::new("id", "Assigned by the server"));
        } else if !DECLARED_FIELDS.contains(&key.as_str()) {
            errors.push(FieldIssue::unknown_field(key.as_str()));
        }
    }
}

fn required<T>(
    obj: &Map<String, Value>,
    field: &str,
    check: fn(&Value) -> Result<T, String>,
    errors: &mut ValidationError,
) -> Option<T> {
    match obj.get(field) {
        Some(value) => present(field, value, check, errors),
        None => {
            errors.push(FieldIssue::missing_field(field));
            None
        }
    }
}

fn optional<T>(
    obj: &Map<String, Value>,
    field: &str,
    check: fn(&Value) -> Result<T, String>,
    errors: &mut ValidationError,
) -> Option<T> {
    obj.get(field)
        .and_then(|value| present(field, value, check, errors))
}

fn present<T>(
    field: &str,
    value: &Value,
    check: fn(&Value) -> Result<T, String>,
    errors: &mut ValidationError,
) -> Option<T> {
    match check(value) {
        Ok(v) => Some(v),
        Err(message) => {
            errors.push(FieldIssue::new(field, message));
            None
        }
    }
}

fn check_text(value: &Value) -> Result<String, String> {
    let s = value.as_str().ok_or_else(|| expected("string", value))?;
    if s.trim().is_empty() {
        return Err("Must not be empty".to_string());
    }
    Ok(s.to_string())
}

fn check_integer(value: &Value) -> Result<i64, String> {
    match value.as_i64() {
        Some(n) => Ok(n),
        None if value.is_u64() => Err("Number is too large".to_string()),
        None => Err(expected("integer", value)),
    }
}

fn check_year(value: &Value) -> Result<i64, String> {
    let year = check_integer(value)?;
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(format!("Must be between {} and {}", MIN_YEAR, MAX_YEAR));
    }
    Ok(year)
}

fn check_duration(value: &Value) -> Result<u32, String> {
    let minutes = check_integer(value)?;
    if minutes <= 0 {
        return Err("Must be a positive number of minutes".to_string());
    }
    u32::try_from(minutes).map_err(|_| "Number is too large".to_string())
}

fn check_rate(value: &Value) -> Result<f64, String> {
    let rate = value.as_f64().ok_or_else(|| expected("number", value))?;
    if !(MIN_RATE..=MAX_RATE).contains(&rate) {
        return Err(format!("Must be between {} and {}", MIN_RATE, MAX_RATE));
    }
    Ok(rate)
}

fn check_poster(value: &Value) -> Result<String, String> {
    let url = value.as_str().ok_or_else(|| expected("string", value))?;
    if !poster_pattern().is_match(url) {
        return Err("Poster must be a valid URL".to_string());
    }
    Ok(url.to_string())
}

fn check_genre(value: &Value) -> Result<Vec<Genre>, String> {
    let items = value.as_array().ok_or_else(|| expected("array", value))?;
    if items.is_empty() {
        return Err("Must contain at least one genre".to_string());
    }

    let mut genres = Vec::with_capacity(items.len());
    let mut invalid = Vec::new();
    for (i, item) in items.iter().enumerate() {
        match item.as_str().and_then(Genre::from_name) {
            Some(genre) => genres.push(genre),
            None => invalid.push(format!("[{}] {}", i, item)),
        }
    }

    if !invalid.is_empty() {
        return Err(format!(
            "Invalid genre {}; expected one of: {}",
            invalid.join(", "),
            Genre::expected_names()
        ));
    }
    Ok(genres)
}

fn expected(kind: &str, actual: &Value) -> String {
    format!("Expected {}, received {}", kind, json_type_name(actual))
}

/// Returns the JSON type name for error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "integer"
            } else {
                "float"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
