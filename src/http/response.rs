use crate::config::StaticFilesConfig;
use crate::http::mime::MimeTable;
use crate::http::request::{Request, Verdict};
use std::net::IpAddr;
use tokio::fs::File;

/// HTTP status codes the server can answer with.
///
/// - `Ok` (200): Target file found and opened
/// - `BadRequest` (400): Malformed request line, version, or POST body
/// - `NotFound` (404): Target file absent
/// - `NotImplemented` (501): Method outside GET/HEAD/POST
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 400 Bad Request
    BadRequest,
    /// 404 Not Found
    NotFound,
    /// 501 Not Implemented
    NotImplemented,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use staticd::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotImplemented.as_u16(), 501);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::BadRequest => 400,
            StatusCode::NotFound => 404,
            StatusCode::NotImplemented => 501,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use staticd::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    /// assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
            StatusCode::NotImplemented => "Not Implemented",
        }
    }
}

/// Response body source: a literal HTML page or an open file streamed
/// out in chunks by the writer.
#[derive(Debug)]
pub enum Body {
    Html(String),
    File(File),
}

/// A response ready for transmission.
#[derive(Debug)]
pub struct Response {
    pub status: StatusCode,
    /// Value of the Content-type header line. Always `text/html` for
    /// non-200 responses.
    pub content_type: String,
    pub body: Body,
}

impl Response {
    /// Decides the response for a parsed request. Priority order, first
    /// match wins: invalid method → 501, invalid request → 400, openable
    /// file → 200, otherwise 404.
    pub async fn for_request(
        request: &Request,
        verdict: Verdict,
        peer_ip: IpAddr,
        files: &StaticFilesConfig,
        mime: &MimeTable,
    ) -> Self {
        if !verdict.method_valid {
            return Self::not_implemented();
        }

        if !verdict.request_valid {
            return Self::bad_request();
        }

        let path = resolve_target(&files.root, &request.target);
        match open_file(&path).await {
            Some(file) => Self::ok(file, mime.content_type_for(&path)),
            None => Self::not_found(peer_ip, &request.user_agent),
        }
    }

    /// Creates a 200 OK response streaming the given file.
    pub fn ok(file: File, content_type: &str) -> Self {
        Self {
            status: StatusCode::Ok,
            content_type: content_type.to_string(),
            body: Body::File(file),
        }
    }

    /// Creates a 400 Bad Request response.
    pub fn bad_request() -> Self {
        Self {
            status: StatusCode::BadRequest,
            content_type: "text/html".to_string(),
            body: Body::Html(
                "<HTML><HEAD><TITLE>Bad Request</TITLE></HEAD>\
                 <BODY>Bad Request</BODY></HTML>"
                    .to_string(),
            ),
        }
    }

    /// Creates a 404 Not Found response; the page shows the peer's
    /// address and the raw User-Agent header line it sent.
    pub fn not_found(peer_ip: IpAddr, user_agent: &str) -> Self {
        Self {
            status: StatusCode::NotFound,
            content_type: "text/html".to_string(),
            body: Body::Html(format!(
                "<HTML><HEAD><TITLE>Not Found</TITLE></HEAD>\
                 <BODY>Not Found<BR/>Host-IP: {}<BR/>{}<BR/></BODY></HTML>",
                peer_ip, user_agent
            )),
        }
    }

    /// Creates a 501 Not Implemented response.
    pub fn not_implemented() -> Self {
        Self {
            status: StatusCode::NotImplemented,
            content_type: "text/html".to_string(),
            body: Body::Html(
                "<HTML><HEAD><TITLE>Not Implemented</TITLE></HEAD>\
                 <BODY>Not Implemented</BODY></HTML>"
                    .to_string(),
            ),
        }
    }
}

/// Resolves a request target against the document root by plain
/// concatenation. No normalization is applied, so `..` segments are
/// passed through to the filesystem as-is.
pub fn resolve_target(root: &str, target: &str) -> String {
    format!("{}{}", root, target)
}

async fn open_file(path: &str) -> Option<File> {
    // A directory opens fine on unix but is not a servable file
    let meta = tokio::fs::metadata(path).await.ok()?;
    if !meta.is_file() {
        return None;
    }

    File::open(path).await.ok()
}
