//! HTTP response handling.

use crate::FetchError;
use serde::de::DeserializeOwned;

/// Longest slice of an error body kept in [`FetchError::HttpError`].
const ERROR_BODY_LIMIT: usize = 200;

/// A fully buffered HTTP response.
#[derive(Debug, Clone)]
pub struct Response {
    /// The HTTP status code.
    pub status: u16,
    /// The URL the response came from.
    pub url: String,
    /// The response body.
    pub body: Vec<u8>,
}

impl Response {
    /// Create a new response.
    pub fn new(status: u16, url: impl Into<String>, body: Vec<u8>) -> Self {
        Self {
            status,
            url: url.into(),
            body,
        }
    }

    /// Check if the response was successful (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse the response body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, FetchError> {
        serde_json::from_slice(&self.body)
            .map_err(|e| FetchError::ParseError(format!("{}: {}", self.url, e)))
    }

    /// Convert to a Result, returning an error for non-2xx status codes.
    pub fn error_for_status(self) -> Result<Self, FetchError> {
        if self.is_success() {
            Ok(self)
        } else {
            let message = String::from_utf8_lossy(&self.body)
                .chars()
                .take(ERROR_BODY_LIMIT)
                .collect();
            Err(FetchError::HttpError {
                status: self.status,
                url: self.url,
                message,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_response(status: u16, body: &[u8]) -> Response {
        Response::new(status, "http://api/stock/1", body.to_vec())
    }

    #[test]
    fn test_response_is_success() {
        assert!(make_response(200, b"").is_success());
        assert!(make_response(204, b"").is_success());
        assert!(!make_response(304, b"").is_success());
        assert!(!make_response(404, b"").is_success());
    }

    #[test]
    fn test_response_json() {
        use serde::Deserialize;

        #[derive(Deserialize, Debug, PartialEq)]
        struct Stock {
            amount: i64,
        }

        let resp = make_response(200, br#"{"id": 1, "amount": 3}"#);
        let stock: Stock = resp.json().unwrap();
        assert_eq!(stock, Stock { amount: 3 });
    }

    #[test]
    fn test_response_json_invalid_names_url() {
        let resp = make_response(200, b"<html>oops</html>");
        let err = resp.json::<serde_json::Value>().unwrap_err();

        match err {
            FetchError::ParseError(message) => assert!(message.starts_with("http://api/stock/1")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_error_for_status() {
        assert!(make_response(200, b"OK").error_for_status().is_ok());

        let err = make_response(404, b"Not Found").error_for_status().unwrap_err();
        assert!(err.is_not_found());
        match err {
            FetchError::HttpError { status, url, message } => {
                assert_eq!(status, 404);
                assert_eq!(url, "http://api/stock/1");
                assert_eq!(message, "Not Found");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_error_body_is_truncated() {
        let body = vec![b'x'; 1000];
        let err = make_response(500, &body).error_for_status().unwrap_err();
        match err {
            FetchError::HttpError { message, .. } => assert_eq!(message.len(), ERROR_BODY_LIMIT),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
