use crate::domain::{FetchError, FetchReport, ImageFetcher};
use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;
use tokio::io::AsyncWriteExt;

// Bytes written to disk per write call.
const WRITE_CHUNK_SIZE: usize = 1024;

// Thin reqwest client that streams image bodies to disk.
#[derive(Clone)]
pub struct HttpImageFetcher {
    http: reqwest::Client,
}

impl HttpImageFetcher {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http })
    }
}

fn transport_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout(Box::new(err))
    } else {
        FetchError::Transport(Box::new(err))
    }
}

#[async_trait]
impl ImageFetcher for HttpImageFetcher {
    async fn fetch_to(&self, url: &str, dest: &Path) -> Result<FetchReport, FetchError> {
        // Truncate up front so the destination never holds a previous body.
        let mut file = tokio::fs::File::create(dest).await?;

        let mut response = self.http.get(url).send().await.map_err(transport_error)?;
        let status = response.status();

        // Not fatal: whatever body came back is still written and decoded.
        if !status.is_success() {
            tracing::warn!(%status, "image upstream returned non-success status");
        }

        let mut bytes_written = 0u64;
        while let Some(chunk) = response.chunk().await.map_err(transport_error)? {
            if chunk.is_empty() {
                break;
            }
            for block in chunk.chunks(WRITE_CHUNK_SIZE) {
                file.write_all(block).await?;
                bytes_written += block.len() as u64;
            }
        }
        file.flush().await?;

        Ok(FetchReport {
            status: status.as_u16(),
            bytes_written,
        })
    }
}
