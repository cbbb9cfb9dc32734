//! Blocking, typed client for the movie service.
//!
//! # Overview
//! `MoviesClient` turns each operation (list, get, search by name or year,
//! create, update, delete) into exactly one HTTP exchange and returns a typed
//! result. 404 becomes `ApiError::NotFound`, other non-2xx statuses become
//! `ApiError::RemoteError`, and failures to get any response become
//! `ApiError::TransportError`.
//!
//! # Design
//! - `MoviesApi` is stateless. It holds only `base_url`, and its `build_*`/`parse_*`
//!   methods do no I/O.
//! - `Transport` executes requests. `UreqTransport` is the default, configured
//!   once with connect/read/write timeouts.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use api::{MoviesApi, DELETE_BY_NAME_CONFIRMATION};
pub use client::MoviesClient;
pub use config::{ClientConfig, Timeouts};
pub use error::{ApiError, TransportError, TransportErrorKind};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{Transport, UreqTransport};
pub use types::{Movie, MovieUpdate};
