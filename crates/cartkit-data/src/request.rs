//! HTTP request builder.

use std::collections::HashMap;

/// A transport-independent description of a GET request.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    pub(crate) url: String,
    pub(crate) headers: HashMap<String, String>,
}

impl RequestBuilder {
    /// Create a new request builder.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: HashMap::new(),
        }
    }

    /// The fully resolved request URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Look up a header that will be sent.
    pub fn header_value(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(String::as_str)
    }

    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set the Accept header.
    pub fn accept(self, content_type: impl Into<String>) -> Self {
        self.header("Accept", content_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_later_header_replaces_earlier() {
        let req = RequestBuilder::new("http://api/stock/1")
            .header("Accept", "text/plain")
            .accept("application/json");

        assert_eq!(req.url(), "http://api/stock/1");
        assert_eq!(req.header_value("Accept"), Some("application/json"));
        assert_eq!(req.header_value("Authorization"), None);
    }
}
