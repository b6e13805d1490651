use std::sync::Arc;

use crate::domain::entities::{DecodeOutcome, DecodedSymbol, SymbolKind};
use crate::domain::ports::{ImageFetcher, SymbolDecoder};
use crate::use_cases::scratch::ScratchDir;

// Fetch-then-decode workflow with injected collaborators.
pub struct DecodeImageUseCase<F: ?Sized, D: ?Sized> {
    pub fetcher: Arc<F>,
    pub decoder: Arc<D>,
    pub scratch: ScratchDir,
}

impl<F, D> DecodeImageUseCase<F, D>
where
    F: ImageFetcher + ?Sized,
    D: SymbolDecoder + ?Sized + 'static,
{
    // Never fails: every fetch or decode problem becomes a non-text outcome.
    pub async fn execute(&self, url: &str) -> DecodeOutcome {
        if let Err(err) = self.scratch.ensure_present().await {
            tracing::warn!(dir = %self.scratch.root().display(), error = %err, "scratch dir unavailable");
            return DecodeOutcome::FetchFailed;
        }

        // Held until the end of the call so the file outlives the decoder.
        let file = self.scratch.allocate();

        match self.fetcher.fetch_to(url, file.path()).await {
            Ok(report) => {
                tracing::debug!(
                    status = report.status,
                    bytes = report.bytes_written,
                    "image fetched"
                );
            }
            Err(err) => {
                tracing::warn!(error = %err, "image fetch failed");
                return DecodeOutcome::FetchFailed;
            }
        }

        let decoder = Arc::clone(&self.decoder);
        let path = file.path().to_path_buf();
        let symbols = match tokio::task::spawn_blocking(move || decoder.decode_file(&path)).await {
            Ok(Ok(symbols)) => symbols,
            Ok(Err(err)) => {
                tracing::debug!(error = %err, "image could not be loaded");
                return DecodeOutcome::ImageUnreadable;
            }
            Err(err) => {
                tracing::warn!(error = %err, "decoder task failed");
                return DecodeOutcome::ImageUnreadable;
            }
        };

        first_qr_text(&symbols)
    }
}

// Text of the first QR-typed symbol, in decoder order.
pub fn first_qr_text(symbols: &[DecodedSymbol]) -> DecodeOutcome {
    let Some(symbol) = symbols.iter().find(|s| {
        let is_qr = s.kind == SymbolKind::QrCode;
        if !is_qr {
            tracing::debug!(tag = s.kind.tag(), "skipping non-qr symbol");
        }
        is_qr
    }) else {
        return DecodeOutcome::NoSymbol;
    };

    match std::str::from_utf8(&symbol.data) {
        Ok(text) => DecodeOutcome::Text(text.to_string()),
        Err(_) => DecodeOutcome::NoSymbol,
    }
}
