use crate::http::request::{Method, Request, Verdict};
use std::collections::HashMap;

const USER_AGENT_PREFIX: &str = "user-agent";
const CONTENT_LENGTH_PREFIX: &str = "content-length";

#[derive(Debug)]
pub enum ProtocolError {
    /// The stream ended before the blank line terminating the headers.
    UnterminatedHeaders,
}

/// Locates the header/body separator, returning the offset of `\r\n\r\n`.
pub fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4)
        .position(|w| w == b"\r\n\r\n")
}

/// Parses the request line and header lines of `head` (the bytes before
/// the blank line, separator excluded).
///
/// Never fails: malformed input is recorded in the returned [`Verdict`]
/// and the request fields keep their defaults.
pub fn parse_head(head: &[u8]) -> (Request, Verdict) {
    let mut request = Request::default();
    let mut verdict = Verdict::default();

    let text = String::from_utf8_lossy(head);
    let mut lines = text.split("\r\n");

    // Request line
    let request_line = lines.next().unwrap_or("");
    let tokens: Vec<&str> = request_line.split_whitespace().collect();

    if tokens.len() != 3 {
        verdict.request_valid = false;
    } else {
        request.raw_method = tokens[0].to_string();
        request.method = Method::from_str(tokens[0]);
        verdict.method_valid = request.method.is_some();

        request.target = tokens[1].to_string();
        request.version = tokens[2].to_string();

        // Version tag must split into exactly "HTTP" and "1.0"
        let version_parts: Vec<&str> = tokens[2].split('/').collect();
        if version_parts.len() != 2
            || version_parts[0] != "HTTP"
            || version_parts[1] != "1.0"
        {
            verdict.request_valid = false;
        }
    }

    // Headers
    for line in lines {
        if line.is_empty() {
            continue;
        }

        if has_prefix(line, USER_AGENT_PREFIX) {
            request.user_agent = line.to_string();
        } else if has_prefix(line, CONTENT_LENGTH_PREFIX) {
            // The value is the token after the first whitespace character.
            // Runs are not collapsed, so a doubled space parses as 0.
            request.content_length = line
                .split(char::is_whitespace)
                .nth(1)
                .and_then(|t| t.parse().ok())
                .unwrap_or(0);
        }

        request.headers.push(line.to_string());
    }

    (request, verdict)
}

/// Splits a POST body of the form `k=v&k=v` into a parameter map.
///
/// Returns `None` if any segment lacks a key/value pair; one bad segment
/// rejects the whole body.
pub fn parse_body_params(body: &str) -> Option<HashMap<String, String>> {
    let mut params = HashMap::new();

    for entry in body.split('&') {
        let mut parts: Vec<&str> = entry.split('=').collect();

        // A trailing '=' leaves no value token, which rejects the segment
        while parts.last() == Some(&"") {
            parts.pop();
        }

        if parts.len() < 2 {
            return None;
        }

        params.insert(parts[0].to_string(), parts[1].to_string());
    }

    Some(params)
}

fn has_prefix(line: &str, prefix: &str) -> bool {
    line.len() > prefix.len()
        && line
            .get(..prefix.len())
            .is_some_and(|p| p.eq_ignore_ascii_case(prefix))
}
