use async_trait::async_trait;
use std::path::Path;

use crate::domain::entities::{DecodedSymbol, FetchReport};
use crate::domain::errors::{FetchError, ImageLoadError};

// Port for downloading an image into a local file.
// Implementations create or truncate `dest` on every call.
#[async_trait]
pub trait ImageFetcher: Send + Sync {
    async fn fetch_to(&self, url: &str, dest: &Path) -> Result<FetchReport, FetchError>;
}

// Port for the external barcode decoder. Blocking; callers move it off the runtime.
pub trait SymbolDecoder: Send + Sync {
    fn decode_file(&self, path: &Path) -> Result<Vec<DecodedSymbol>, ImageLoadError>;
}
