use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::http::connection::Connection;
use crate::http::mime::MimeTable;

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    // Built once before the first accept; handlers only ever read it
    let mime = Arc::new(load_mime_table(cfg));

    let listener = TcpListener::bind(&cfg.server.listen_addr).await?;
    info!("Listening on {}", cfg.server.listen_addr);

    loop {
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        let static_config = cfg.static_files.clone();
        let mime = Arc::clone(&mime);
        tokio::spawn(async move {
            let conn = Connection::new(socket, peer, static_config, mime);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}

fn load_mime_table(cfg: &Config) -> MimeTable {
    let Some(path) = &cfg.mime.file else {
        return MimeTable::empty();
    };

    match MimeTable::from_file(path) {
        Ok(table) => {
            info!(
                "Loaded {} MIME type mappings from {}",
                table.len(),
                path.display()
            );
            table
        }
        Err(e) => {
            tracing::warn!("{:#}, serving everything as application/octet-stream", e);
            MimeTable::empty()
        }
    }
}
