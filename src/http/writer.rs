use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::http::response::{Body, Response, StatusCode};

const HTTP_VERSION: &str = "HTTP/1.0";

/// File bodies are copied to the socket in chunks of this size.
const CHUNK_SIZE: usize = 1024;

fn serialize_head(status: StatusCode, content_type: &str) -> Vec<u8> {
    let mut buf = Vec::new();

    // Status line
    let status_line = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        status.as_u16(),
        status.reason_phrase()
    );
    buf.extend_from_slice(status_line.as_bytes());

    // Content type line
    buf.extend_from_slice(b"Content-type: ");
    buf.extend_from_slice(content_type.as_bytes());
    buf.extend_from_slice(b"\r\n");

    // Blank line marks end of headers
    buf.extend_from_slice(b"\r\n");

    buf
}

pub struct ResponseWriter {
    head: Vec<u8>,
    written: usize,
}

impl ResponseWriter {
    pub fn new(response: &Response) -> Self {
        Self {
            head: serialize_head(response.status, &response.content_type),
            written: 0,
        }
    }

    pub async fn write_head<W>(&mut self, stream: &mut W) -> anyhow::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        while self.written < self.head.len() {
            let n = stream.write(&self.head[self.written..]).await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.written += n;
        }

        Ok(())
    }
}

/// Transmits a response: status line, Content-type line, blank line,
/// then the body. When `head_only` is set (HEAD requests) nothing after
/// the blank line is written, whatever the status. A 200 streams its
/// file in fixed-size chunks; every other status carries its HTML page.
/// The stream is flushed before returning.
pub async fn write_response<W>(
    stream: &mut W,
    response: Response,
    head_only: bool,
) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut writer = ResponseWriter::new(&response);
    writer.write_head(stream).await?;

    if !head_only {
        match response.body {
            Body::Html(page) => stream.write_all(page.as_bytes()).await?,
            Body::File(mut file) => send_file(&mut file, stream).await?,
        }
    }

    stream.flush().await?;

    Ok(())
}

async fn send_file<R, W>(file: &mut R, stream: &mut W) -> anyhow::Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buffer = [0u8; CHUNK_SIZE];

    loop {
        let n = file.read(&mut buffer).await?;
        if n == 0 {
            break;
        }

        stream.write_all(&buffer[..n]).await?;
    }

    Ok(())
}
