use bytes::{Buf, BytesMut};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;

use crate::config::StaticFilesConfig;
use crate::http::mime::MimeTable;
use crate::http::parser::{self, ProtocolError};
use crate::http::request::{Method, Request, Verdict};
use crate::http::response::Response;
use crate::http::writer;

/// Handles a single accepted connection: one request in, one response
/// out, then the socket closes. The stream, the read buffer, and any
/// file opened for the response are owned here exclusively and released
/// by drop on every exit path.
pub struct Connection {
    stream: TcpStream,
    peer: SocketAddr,
    buffer: BytesMut,
    files: StaticFilesConfig,
    mime: Arc<MimeTable>,
}

impl Connection {
    pub fn new(
        stream: TcpStream,
        peer: SocketAddr,
        files: StaticFilesConfig,
        mime: Arc<MimeTable>,
    ) -> Self {
        Self {
            stream,
            peer,
            buffer: BytesMut::with_capacity(4096),
            files,
            mime,
        }
    }

    /// Runs the request/response exchange.
    pub async fn run(mut self) -> anyhow::Result<()> {
        let Some((request, verdict)) = self.read_request().await? else {
            // Client connected and left without sending anything
            return Ok(());
        };

        tracing::debug!(
            "{} {} {} from {}",
            request.raw_method,
            request.target,
            request.version,
            self.peer
        );

        let response =
            Response::for_request(&request, verdict, self.peer.ip(), &self.files, &self.mime)
                .await;

        tracing::debug!(
            "{} {} to {}",
            response.status.as_u16(),
            response.status.reason_phrase(),
            self.peer
        );

        writer::write_response(&mut self.stream, response, request.is_head()).await
    }

    /// Reads from the socket until the header separator arrives, parses
    /// the head, then completes the POST body if the request calls for
    /// one. Returns `None` when the client closed without sending a byte.
    async fn read_request(&mut self) -> anyhow::Result<Option<(Request, Verdict)>> {
        let head_len = loop {
            if let Some(end) = parser::find_headers_end(&self.buffer) {
                break end;
            }

            let n = self.stream.read_buf(&mut self.buffer).await?;

            if n == 0 {
                if self.buffer.is_empty() {
                    return Ok(None);
                }

                // Data arrived but the headers were never terminated
                return Err(anyhow::anyhow!(
                    "HTTP parse error: {:?}",
                    ProtocolError::UnterminatedHeaders
                ));
            }
        };

        let (mut request, mut verdict) = parser::parse_head(&self.buffer[..head_len]);
        self.buffer.advance(head_len + 4);

        if request.method == Some(Method::POST)
            && verdict.request_valid
            && request.content_length > 0
        {
            self.read_body(&mut request, &mut verdict).await?;
        }

        Ok(Some((request, verdict)))
    }

    /// Reads exactly Content-Length body bytes and splits them into form
    /// parameters. A short body or a bad `k=v` pair invalidates the
    /// whole request rather than erroring out.
    async fn read_body(
        &mut self,
        request: &mut Request,
        verdict: &mut Verdict,
    ) -> anyhow::Result<()> {
        while self.buffer.len() < request.content_length {
            let n = self.stream.read_buf(&mut self.buffer).await?;

            if n == 0 {
                break;
            }
        }

        if self.buffer.len() < request.content_length {
            verdict.request_valid = false;
            return Ok(());
        }

        let body = self.buffer.split_to(request.content_length);
        let text = String::from_utf8_lossy(&body);

        match parser::parse_body_params(&text) {
            Some(params) => request.body_params = Some(params),
            None => verdict.request_valid = false,
        }

        Ok(())
    }
}
