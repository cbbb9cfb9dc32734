//! Domain DTOs for the movie service.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Integration tests catch any schema drift between the two crates.
//!
//! Field names already match the wire format (`movie_id`, `release_date`), so
//! no serde renaming is needed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A movie as exchanged with the remote service.
///
/// `movie_id` is `None` until the service assigns one on creation and never
/// changes afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Movie {
    /// Comma-separated cast names.
    pub cast: String,
    #[serde(default)]
    pub movie_id: Option<i64>,
    pub name: String,
    pub release_date: NaiveDate,
    pub year: i32,
}

impl Movie {
    /// A movie that has not been stored yet.
    pub fn new(name: impl Into<String>, cast: impl Into<String>, release_date: NaiveDate, year: i32) -> Self {
        Self {
            cast: cast.into(),
            movie_id: None,
            name: name.into(),
            release_date,
            year,
        }
    }
}

/// Request payload for updating an existing movie. Only the fields present in
/// the JSON are applied; omitted fields remain unchanged on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MovieUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cast: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

impl From<Movie> for MovieUpdate {
    fn from(movie: Movie) -> Self {
        Self {
            cast: Some(movie.cast),
            name: Some(movie.name),
            release_date: Some(movie.release_date),
            year: Some(movie.year),
        }
    }
}

impl From<&Movie> for MovieUpdate {
    fn from(movie: &Movie) -> Self {
        Self::from(movie.clone())
    }
}
