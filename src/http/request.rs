use std::collections::HashMap;

/// HTTP request methods implemented by the server.
///
/// Only the HTTP/1.0 subset is supported. Any other method token is
/// parsed but answered with 501 Not Implemented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// HEAD - Like GET but without the response body
    HEAD,
    /// POST - Submit form data
    POST,
}

impl Method {
    /// Parses an HTTP method from a string.
    ///
    /// # Arguments
    ///
    /// * `s` - String representation of the method (case-sensitive, typically uppercase)
    ///
    /// # Returns
    ///
    /// `Some(Method)` if the string is one of the implemented methods, `None` otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// # use staticd::http::request::Method;
    /// assert_eq!(Method::from_str("GET"), Some(Method::GET));
    /// assert_eq!(Method::from_str("get"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Method::GET),
            "HEAD" => Some(Method::HEAD),
            "POST" => Some(Method::POST),
            _ => None,
        }
    }
}

/// Represents a parsed HTTP request from a client.
///
/// Every field holds whatever could be extracted. A malformed request
/// line leaves the extraction fields at their defaults; the damage is
/// recorded in the accompanying [`Verdict`] instead of aborting the
/// pipeline.
#[derive(Debug, Clone, Default)]
pub struct Request {
    /// The method token exactly as sent (empty if the request line was malformed)
    pub raw_method: String,
    /// The parsed method, `None` when the token is not GET/HEAD/POST
    pub method: Option<Method>,
    /// The request target (e.g., "/index.html")
    pub target: String,
    /// The version token exactly as sent (e.g., "HTTP/1.0")
    pub version: String,
    /// Raw header lines in arrival order
    pub headers: Vec<String>,
    /// The whole User-Agent header line, empty if none was sent
    pub user_agent: String,
    /// Parsed Content-Length value, 0 on any parse failure
    pub content_length: usize,
    /// Form parameters from a POST body, present only when the body parsed
    pub body_params: Option<HashMap<String, String>>,
}

impl Request {
    /// True when the parsed method is HEAD; the transmitter suppresses
    /// the body for these.
    pub fn is_head(&self) -> bool {
        self.method == Some(Method::HEAD)
    }
}

/// Validity flags driving the status decision.
///
/// Both flags start `true` and are only ever cleared while parsing.
/// A false `method_valid` selects 501 before any other check;
/// `request_valid` covers the request-line shape, the version token,
/// and the POST body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub method_valid: bool,
    pub request_valid: bool,
}

impl Default for Verdict {
    fn default() -> Self {
        Self {
            method_valid: true,
            request_valid: true,
        }
    }
}
