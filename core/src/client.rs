//! Blocking client for the movie service.
//!
//! # Design
//! `MoviesClient` pairs a `MoviesApi` (request building and response parsing)
//! with a `Transport` (I/O). Every operation is one request: build, execute,
//! parse. Failures are logged with the operation name and URL, then returned
//! unchanged; nothing is retried and nothing is turned into an empty success.

use crate::api::MoviesApi;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::{Transport, UreqTransport};
use crate::types::{Movie, MovieUpdate};

/// Typed client for the movie service.
///
/// Holds no mutable state, so it can be shared between threads whenever the
/// transport can.
#[derive(Debug, Clone)]
pub struct MoviesClient<T = UreqTransport> {
    api: MoviesApi,
    transport: T,
}

impl MoviesClient<UreqTransport> {
    /// Client with the default `ureq` transport and the configured timeouts.
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_transport(&config.base_url, UreqTransport::new(config.timeouts))
    }

    /// Client configured from `MOVIES_*` environment variables.
    pub fn from_env() -> Result<Self, ApiError> {
        ClientConfig::from_env().map(|config| Self::new(&config))
    }
}

impl<T: Transport> MoviesClient<T> {
    pub fn with_transport(base_url: &str, transport: T) -> Self {
        Self {
            api: MoviesApi::new(base_url),
            transport,
        }
    }

    pub fn list_all(&self) -> Result<Vec<Movie>, ApiError> {
        let request = self.api.build_list_all();
        self.call("list_all", request, MoviesApi::parse_movie_list)
    }

    pub fn get_by_id(&self, id: i64) -> Result<Movie, ApiError> {
        let request = self.api.build_get_by_id(id);
        self.call("get_by_id", request, MoviesApi::parse_movie)
    }

    pub fn list_by_name(&self, name: &str) -> Result<Vec<Movie>, ApiError> {
        let request = self.api.build_list_by_name(name);
        self.call("list_by_name", request, MoviesApi::parse_movie_list)
    }

    pub fn list_by_year(&self, year: i32) -> Result<Vec<Movie>, ApiError> {
        let request = self.api.build_list_by_year(year);
        self.call("list_by_year", request, MoviesApi::parse_movie_list)
    }

    /// Not idempotent: every successful call stores a new movie.
    pub fn create(&self, movie: &Movie) -> Result<Movie, ApiError> {
        let request = self.api.build_create(movie).inspect_err(|err| {
            tracing::error!(operation = "create", error = %err, "could not encode movie");
        })?;
        self.call("create", request, MoviesApi::parse_movie)
    }

    /// Applies the fields present in `update`. An unknown `id` fails with
    /// `ApiError::NotFound` (not `RemoteError`); `status()` reports 404.
    pub fn update(&self, id: i64, update: &MovieUpdate) -> Result<Movie, ApiError> {
        let request = self.api.build_update(id, update).inspect_err(|err| {
            tracing::error!(operation = "update", id, error = %err, "could not encode update");
        })?;
        self.call("update", request, MoviesApi::parse_movie)
    }

    /// Returns the service's confirmation text. An unknown `id` fails with
    /// `ApiError::NotFound` (not `RemoteError`); `status()` reports 404.
    pub fn delete_by_id(&self, id: i64) -> Result<String, ApiError> {
        let request = self.api.build_delete_by_id(id);
        self.call("delete_by_id", request, MoviesApi::parse_delete_by_id)
    }

    pub fn delete_by_name(&self, name: &str) -> Result<String, ApiError> {
        let request = self.api.build_delete_by_name(name);
        self.call("delete_by_name", request, MoviesApi::parse_delete_by_name)
    }

    fn call<R>(
        &self,
        operation: &'static str,
        request: HttpRequest,
        parse: fn(&MoviesApi, HttpResponse) -> Result<R, ApiError>,
    ) -> Result<R, ApiError> {
        tracing::debug!(operation, method = request.method.as_str(), url = %request.url, "sending request");

        let result = self
            .transport
            .execute(&request)
            .map_err(ApiError::from)
            .and_then(|response| {
                let status = response.status;
                parse(&self.api, response).inspect(|_| {
                    tracing::debug!(operation, status, "request succeeded");
                })
            });

        match &result {
            Ok(_) => {}
            Err(ApiError::NotFound) => {
                tracing::warn!(operation, url = %request.url, "movie not found");
            }
            Err(err) => {
                tracing::error!(operation, url = %request.url, error = %err, "movie service call failed");
            }
        }
        result
    }
}
