//! HTTP request and response types passed between `MoviesApi` and a
//! `Transport`.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. `MoviesApi`
//! builds `HttpRequest` values and parses `HttpResponse` values without ever
//! touching the network. A `Transport` performs the actual I/O. That split
//! keeps request building and response parsing deterministic and lets tests
//! swap in a stub transport.

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// An HTTP request described as plain data.
///
/// Built by `MoviesApi::build_*` methods. `url` is absolute, including any
/// query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Returned by a `Transport`, then passed to `MoviesApi::parse_*` methods
/// for status classification and deserialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
