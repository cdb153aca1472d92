//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! Requests and responses are plain data. `JustCmsClient` builds
//! `HttpRequest` values and parses `HttpResponse` values without touching the
//! network. Whoever owns the connection pool implements `Transport` (or runs
//! the round-trip by hand between `build_*` and `parse_*`).
//!
//! The API is read-only, so every request is a GET without a body.

use std::sync::Arc;

use crate::error::TransportFailure;

/// An HTTP GET request described as plain data.
///
/// Built by `JustCmsClient::build_*` methods with the bearer header already
/// attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

impl HttpRequest {
    /// First header value matching `name` case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

/// An HTTP response described as plain data.
///
/// Constructed by the transport after executing an `HttpRequest`, then
/// passed to `JustCmsClient::parse_*` methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

fn find_header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}

/// Performs one HTTP GET.
///
/// Implementations return `Ok` for every exchange that produced a status,
/// including 4xx and 5xx, and `Err` only when there is no status to report.
/// Timeouts, TLS, redirects and pooling are the implementation's concern.
pub trait Transport {
    fn get(&self, request: &HttpRequest) -> Result<HttpResponse, TransportFailure>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, request: &HttpRequest) -> Result<HttpResponse, TransportFailure> {
        (**self).get(request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn get(&self, request: &HttpRequest) -> Result<HttpResponse, TransportFailure> {
        self.as_ref().get(request)
    }
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn get(&self, request: &HttpRequest) -> Result<HttpResponse, TransportFailure> {
        self.as_ref().get(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_lookup_ignores_case() {
        let request = HttpRequest {
            url: "https://example.com".to_string(),
            headers: vec![("authorization".to_string(), "Bearer t".to_string())],
        };
        assert_eq!(request.header("Authorization"), Some("Bearer t"));
        assert_eq!(request.header("content-type"), None);
    }

    #[test]
    fn success_is_any_2xx() {
        let mut response = HttpResponse {
            status: 204,
            headers: Vec::new(),
            body: String::new(),
        };
        assert!(response.is_success());
        response.status = 301;
        assert!(!response.is_success());
        response.status = 199;
        assert!(!response.is_success());
    }
}
