use staticd::config::StaticFilesConfig;
use staticd::http::mime::MimeTable;
use staticd::http::parser::parse_head;
use staticd::http::response::{Body, Response, StatusCode, resolve_target};
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

const PEER: IpAddr = IpAddr::V4(Ipv4Addr::new(203, 0, 113, 5));

fn temp_root(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("staticd-response-{}-{}", tag, std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn files_config(root: &PathBuf) -> StaticFilesConfig {
    StaticFilesConfig {
        root: root.to_str().unwrap().to_string(),
    }
}

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::BadRequest.as_u16(), 400);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
    assert_eq!(StatusCode::NotImplemented.as_u16(), 501);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::BadRequest.reason_phrase(), "Bad Request");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    assert_eq!(StatusCode::NotImplemented.reason_phrase(), "Not Implemented");
}

#[test]
fn test_resolve_target_concatenates() {
    assert_eq!(resolve_target(".", "/index.html"), "./index.html");
    assert_eq!(resolve_target("/srv/www", "/a/b.txt"), "/srv/www/a/b.txt");
}

#[test]
fn test_resolve_target_does_not_sanitize_traversal() {
    assert_eq!(resolve_target(".", "/../secret"), "./../secret");
}

#[test]
fn test_error_pages_are_html() {
    assert_eq!(Response::not_implemented().content_type, "text/html");
    assert_eq!(Response::bad_request().content_type, "text/html");
    assert_eq!(Response::not_found(PEER, "").content_type, "text/html");
}

#[test]
fn test_not_found_page_shows_peer_and_user_agent() {
    let response = Response::not_found(PEER, "User-Agent: curl/8.0.1");

    let Body::Html(page) = response.body else {
        panic!("expected an HTML body");
    };
    assert!(page.contains("Host-IP: 203.0.113.5"));
    assert!(page.contains("User-Agent: curl/8.0.1"));
}

#[test]
fn test_not_found_page_without_user_agent() {
    let response = Response::not_found(PEER, "");

    let Body::Html(page) = response.body else {
        panic!("expected an HTML body");
    };
    assert!(page.contains("Not Found"));
    assert!(page.contains("Host-IP: 203.0.113.5"));
}

#[tokio::test]
async fn test_invalid_method_wins_over_everything() {
    // Both flags bad at once: 501 must still win
    let (request, verdict) = parse_head(b"FOO / HTTP/1.1");
    assert!(!verdict.method_valid);
    assert!(!verdict.request_valid);

    let root = temp_root("priority");
    let response = Response::for_request(
        &request,
        verdict,
        PEER,
        &files_config(&root),
        &MimeTable::empty(),
    )
    .await;

    assert_eq!(response.status, StatusCode::NotImplemented);
}

#[tokio::test]
async fn test_invalid_request_yields_400() {
    let (request, verdict) = parse_head(b"GET / HTTP/1.1");

    let root = temp_root("badreq");
    let response = Response::for_request(
        &request,
        verdict,
        PEER,
        &files_config(&root),
        &MimeTable::empty(),
    )
    .await;

    assert_eq!(response.status, StatusCode::BadRequest);
}

#[tokio::test]
async fn test_existing_file_yields_200_with_mapped_type() {
    let root = temp_root("ok");
    std::fs::write(root.join("page.html"), "hello").unwrap();

    let (request, verdict) = parse_head(b"GET /page.html HTTP/1.0");
    let mime = MimeTable::parse("text/html html htm");

    let response =
        Response::for_request(&request, verdict, PEER, &files_config(&root), &mime).await;

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(response.content_type, "text/html");
    assert!(matches!(response.body, Body::File(_)));
}

#[tokio::test]
async fn test_existing_file_with_unmapped_extension_defaults() {
    let root = temp_root("octet");
    std::fs::write(root.join("blob.dat"), [0u8, 1, 2]).unwrap();

    let (request, verdict) = parse_head(b"GET /blob.dat HTTP/1.0");

    let response = Response::for_request(
        &request,
        verdict,
        PEER,
        &files_config(&root),
        &MimeTable::empty(),
    )
    .await;

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(response.content_type, "application/octet-stream");
}

#[tokio::test]
async fn test_missing_file_yields_404() {
    let root = temp_root("missing");

    let (request, verdict) = parse_head(b"GET /nope.txt HTTP/1.0\r\nUser-Agent: probe");

    let response = Response::for_request(
        &request,
        verdict,
        PEER,
        &files_config(&root),
        &MimeTable::empty(),
    )
    .await;

    assert_eq!(response.status, StatusCode::NotFound);
    let Body::Html(page) = response.body else {
        panic!("expected an HTML body");
    };
    assert!(page.contains("203.0.113.5"));
    assert!(page.contains("User-Agent: probe"));
}

#[tokio::test]
async fn test_directory_target_yields_404() {
    let root = temp_root("dir");
    std::fs::create_dir_all(root.join("sub")).unwrap();

    let (request, verdict) = parse_head(b"GET /sub HTTP/1.0");

    let response = Response::for_request(
        &request,
        verdict,
        PEER,
        &files_config(&root),
        &MimeTable::empty(),
    )
    .await;

    assert_eq!(response.status, StatusCode::NotFound);
}
