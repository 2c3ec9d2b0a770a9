//! HTTP protocol implementation.
//!
//! This module implements the HTTP/1.0 subset the server speaks: one
//! request per connection, three methods, no keep-alive.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: The main connection handler driving the pipeline
//! - **`parser`**: Parses the request head and POST body from raw bytes
//! - **`request`**: Request representation and validity verdict
//! - **`response`**: Response representation and the status decision
//! - **`writer`**: Serializes and writes responses to the client
//! - **`mime`**: MIME type lookup based on file extensions
//!
//! # Request pipeline
//!
//! Each accepted connection runs the stages once, then closes:
//!
//! ```text
//!        ┌─────────────┐
//!        │   Parsing   │ ← Request line, headers, optional POST body
//!        └──────┬──────┘
//!               │ Request + Verdict
//!               ▼
//!        ┌──────────────────┐
//!        │    Deciding      │ ← 501 / 400 / 200 / 404, first match wins
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │  Transmitting    │ ← Head lines, then HTML page or file chunks
//!        └──────┬───────────┘
//!               │ Flushed
//!               ▼
//!             Closed
//! ```
//!
//! # Example
//!
//! ```ignore
//! use staticd::config::StaticFilesConfig;
//! use staticd::http::connection::Connection;
//! use staticd::http::mime::MimeTable;
//! use std::sync::Arc;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let listener = TcpListener::bind("127.0.0.1:6789").await?;
//!     let mime = Arc::new(MimeTable::empty());
//!
//!     loop {
//!         let (socket, peer) = listener.accept().await?;
//!         let conn = Connection::new(
//!             socket,
//!             peer,
//!             StaticFilesConfig::default(),
//!             Arc::clone(&mime),
//!         );
//!         tokio::spawn(async move {
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod request;
pub mod response;
pub mod parser;
pub mod connection;
pub mod writer;
pub mod mime;
