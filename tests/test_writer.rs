use staticd::http::response::{Body, Response, StatusCode};
use staticd::http::writer::write_response;
use std::io::Cursor;
use std::path::PathBuf;

fn temp_root(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("staticd-writer-{}-{}", tag, std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn html_response(status: StatusCode, page: &str) -> Response {
    Response {
        status,
        content_type: "text/html".to_string(),
        body: Body::Html(page.to_string()),
    }
}

#[tokio::test]
async fn test_writes_status_and_content_type_framing() {
    let mut out = Cursor::new(Vec::new());
    let response = html_response(StatusCode::BadRequest, "<HTML>bad</HTML>");

    write_response(&mut out, response, false).await.unwrap();

    let wire = String::from_utf8(out.into_inner()).unwrap();
    assert_eq!(
        wire,
        "HTTP/1.0 400 Bad Request\r\nContent-type: text/html\r\n\r\n<HTML>bad</HTML>"
    );
}

#[tokio::test]
async fn test_head_only_suppresses_html_body() {
    let mut out = Cursor::new(Vec::new());
    let response = html_response(StatusCode::NotFound, "<HTML>gone</HTML>");

    write_response(&mut out, response, true).await.unwrap();

    let wire = String::from_utf8(out.into_inner()).unwrap();
    assert_eq!(wire, "HTTP/1.0 404 Not Found\r\nContent-type: text/html\r\n\r\n");
}

#[tokio::test]
async fn test_streams_file_body_exactly() {
    let root = temp_root("stream");
    // Larger than one chunk so the copy loop runs more than once
    let payload: Vec<u8> = (0..3000u32).map(|i| (i % 251) as u8).collect();
    let path = root.join("payload.bin");
    std::fs::write(&path, &payload).unwrap();

    let file = tokio::fs::File::open(&path).await.unwrap();
    let response = Response {
        status: StatusCode::Ok,
        content_type: "application/octet-stream".to_string(),
        body: Body::File(file),
    };

    let mut out = Cursor::new(Vec::new());
    write_response(&mut out, response, false).await.unwrap();

    let wire = out.into_inner();
    let head = b"HTTP/1.0 200 OK\r\nContent-type: application/octet-stream\r\n\r\n";
    assert_eq!(&wire[..head.len()], head);
    assert_eq!(&wire[head.len()..], &payload[..]);
}

#[tokio::test]
async fn test_head_only_suppresses_file_body() {
    let root = temp_root("headfile");
    let path = root.join("page.html");
    std::fs::write(&path, "hello").unwrap();

    let file = tokio::fs::File::open(&path).await.unwrap();
    let response = Response {
        status: StatusCode::Ok,
        content_type: "text/html".to_string(),
        body: Body::File(file),
    };

    let mut out = Cursor::new(Vec::new());
    write_response(&mut out, response, true).await.unwrap();

    let wire = String::from_utf8(out.into_inner()).unwrap();
    assert_eq!(wire, "HTTP/1.0 200 OK\r\nContent-type: text/html\r\n\r\n");
}

#[tokio::test]
async fn test_empty_file_sends_headers_only_body() {
    let root = temp_root("empty");
    let path = root.join("empty.txt");
    std::fs::write(&path, "").unwrap();

    let file = tokio::fs::File::open(&path).await.unwrap();
    let response = Response {
        status: StatusCode::Ok,
        content_type: "text/plain".to_string(),
        body: Body::File(file),
    };

    let mut out = Cursor::new(Vec::new());
    write_response(&mut out, response, false).await.unwrap();

    let wire = String::from_utf8(out.into_inner()).unwrap();
    assert_eq!(wire, "HTTP/1.0 200 OK\r\nContent-type: text/plain\r\n\r\n");
}
