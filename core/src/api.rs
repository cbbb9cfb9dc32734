//! Stateless HTTP request builder and response parser for the movie service.
//!
//! # Design
//! `MoviesApi` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! `MoviesClient` runs the round-trip in between through a `Transport`.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Movie, MovieUpdate};

pub const ALL_MOVIES_V1: &str = "/movieservice/v1/allMovies";
pub const MOVIE_BY_ID_V1: &str = "/movieservice/v1/movie";
pub const MOVIE_BY_NAME_V1: &str = "/movieservice/v1/movieName";
pub const MOVIE_BY_YEAR_V1: &str = "/movieservice/v1/movieYear";
pub const ADD_MOVIE_V2: &str = "/movieservice/v2/movie";

/// Returned by `delete_by_name`, whose endpoint answers with an empty body.
pub const DELETE_BY_NAME_CONFIRMATION: &str = "Movie deleted successfully";

/// Request builder and response parser for the movie service.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network.
#[derive(Debug, Clone)]
pub struct MoviesApi {
    base_url: String,
}

impl MoviesApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_all(&self) -> HttpRequest {
        self.json_get(format!("{}{ALL_MOVIES_V1}", self.base_url))
    }

    pub fn build_get_by_id(&self, id: i64) -> HttpRequest {
        self.json_get(format!("{}{MOVIE_BY_ID_V1}/{id}", self.base_url))
    }

    pub fn build_list_by_name(&self, name: &str) -> HttpRequest {
        self.json_get(self.name_query_url(name))
    }

    pub fn build_list_by_year(&self, year: i32) -> HttpRequest {
        self.json_get(format!("{}{MOVIE_BY_YEAR_V1}?year={year}", self.base_url))
    }

    pub fn build_create(&self, movie: &Movie) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(movie).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}{ADD_MOVIE_V2}", self.base_url),
            headers: json_body_headers(),
            body: Some(body),
        })
    }

    pub fn build_update(&self, id: i64, update: &MovieUpdate) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(update).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            url: format!("{}{MOVIE_BY_ID_V1}/{id}", self.base_url),
            headers: json_body_headers(),
            body: Some(body),
        })
    }

    pub fn build_delete_by_id(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: format!("{}{MOVIE_BY_ID_V1}/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_delete_by_name(&self, name: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: self.name_query_url(name),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Parse a response carrying a JSON array of movies (list all, by name, by year).
    pub fn parse_movie_list(&self, response: HttpResponse) -> Result<Vec<Movie>, ApiError> {
        decode(response)
    }

    /// Parse a response carrying one JSON movie (get, create, update).
    pub fn parse_movie(&self, response: HttpResponse) -> Result<Movie, ApiError> {
        decode(response)
    }

    /// The service confirms deletion by id with a plain-text body.
    pub fn parse_delete_by_id(&self, response: HttpResponse) -> Result<String, ApiError> {
        check_status(&response)?;
        Ok(response.body)
    }

    pub fn parse_delete_by_name(&self, response: HttpResponse) -> Result<String, ApiError> {
        check_status(&response)?;
        Ok(DELETE_BY_NAME_CONFIRMATION.to_string())
    }

    fn name_query_url(&self, name: &str) -> String {
        format!(
            "{}{MOVIE_BY_NAME_V1}?movie_name={}",
            self.base_url,
            urlencoding::encode(name)
        )
    }

    fn json_get(&self, url: String) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url,
            headers: vec![("accept".to_string(), "application/json".to_string())],
            body: None,
        }
    }
}

fn json_body_headers() -> Vec<(String, String)> {
    vec![
        ("content-type".to_string(), "application/json".to_string()),
        ("accept".to_string(), "application/json".to_string()),
    ]
}

fn decode<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::RemoteError {
        status: response.status,
        body: response.body.clone(),
    })
}
