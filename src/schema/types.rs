//! Movie record types
//!
//! Supported fields:
//! - title: non-empty string
//! - year: integer in [MIN_YEAR, MAX_YEAR]
//! - director: non-empty string
//! - duration: positive integer (minutes)
//! - rate: float in [MIN_RATE, MAX_RATE]
//! - poster: http(s) URL
//! - genre: non-empty list drawn from the closed `Genre` set

use std::fmt;

use serde::{Deserialize, Serialize};

/// Earliest accepted release year
pub const MIN_YEAR: i64 = 1900;

/// Latest accepted release year
pub const MAX_YEAR: i64 = 2024;

/// Lowest accepted rate
pub const MIN_RATE: f64 = 0.0;

/// Highest accepted rate
pub const MAX_RATE: f64 = 10.0;

/// Rate assigned on creation when the payload omits one
pub const DEFAULT_RATE: f64 = 5.0;

/// Closed set of genres a movie can be tagged with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Action,
    Adventure,
    Crime,
    Comedy,
    Drama,
    Fantasy,
    Horror,
    Thriller,
    #[serde(rename = "Sci-Fi")]
    SciFi,
}

impl Genre {
    /// Every genre, in declaration order
    pub const ALL: [Genre; 9] = [
        Genre::Action,
        Genre::Adventure,
        Genre::Crime,
        Genre::Comedy,
        Genre::Drama,
        Genre::Fantasy,
        Genre::Horror,
        Genre::Thriller,
        Genre::SciFi,
    ];

    /// Returns the wire name of the genre
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Adventure => "Adventure",
            Genre::Crime => "Crime",
            Genre::Comedy => "Comedy",
            Genre::Drama => "Drama",
            Genre::Fantasy => "Fantasy",
            Genre::Horror => "Horror",
            Genre::Thriller => "Thriller",
            Genre::SciFi => "Sci-Fi",
        }
    }

    /// Looks up a genre by its exact wire name
    pub fn from_name(name: &str) -> Option<Genre> {
        Genre::ALL.into_iter().find(|g| g.as_str() == name)
    }

    /// Case-insensitive comparison against a free-form search term
    pub fn matches_term(&self, term: &str) -> bool {
        self.as_str().to_lowercase() == term.to_lowercase()
    }

    /// Comma-separated list of valid names, for error messages
    pub fn expected_names() -> String {
        Genre::ALL
            .iter()
            .map(|g| g.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored movie record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub year: i64,
    pub director: String,
    pub duration: u32,
    pub poster: String,
    pub genre: Vec<Genre>,
    pub rate: f64,
}

impl Movie {
    /// Builds a stored record from a validated payload and a fresh id
    pub fn from_new(id: impl Into<String>, new: NewMovie) -> Self {
        Self {
            id: id.into(),
            title: new.title,
            year: new.year,
            director: new.director,
            duration: new.duration,
            poster: new.poster,
            genre: new.genre,
            rate: new.rate,
        }
    }

    /// True if any of the record's genres matches `term` ignoring case
    pub fn has_genre(&self, term: &str) -> bool {
        self.genre.iter().any(|g| g.matches_term(term))
    }

    /// Merges the fields present in `patch` into this record.
    ///
    /// The id never changes.
    pub fn apply(&mut self, patch: MoviePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(year) = patch.year {
            self.year = year;
        }
        if let Some(director) = patch.director {
            self.director = director;
        }
        if let Some(duration) = patch.duration {
            self.duration = duration;
        }
        if let Some(poster) = patch.poster {
            self.poster = poster;
        }
        if let Some(genre) = patch.genre {
            self.genre = genre;
        }
        if let Some(rate) = patch.rate {
            self.rate = rate;
        }
    }
}

/// A creation payload that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct NewMovie {
    pub title: String,
    pub year: i64,
    pub director: String,
    pub duration: u32,
    pub poster: String,
    pub genre: Vec<Genre>,
    pub rate: f64,
}

/// A partial update that passed validation; absent fields are left alone
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoviePatch {
    pub title: Option<String>,
    pub year: Option<i64>,
    pub director: Option<String>,
    pub duration: Option<u32>,
    pub poster: Option<String>,
    pub genre: Option<Vec<Genre>>,
    pub rate: Option<f64>,
}

impl MoviePatch {
    /// True if the patch carries no field at all
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.year.is_none()
            && self.director.is_none()
            && self.duration.is_none()
            && self.poster.is_none()
            && self.genre.is_none()
            && self.rate.is_none()
    }
}
