use crate::domain::{ImageFetcher, SymbolDecoder};
use crate::use_cases::ScratchDir;
use std::sync::Arc;

// Shared application state for the HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    // Arc<dyn Trait> so tests can swap in fakes for the network and decoder.
    pub fetcher: Arc<dyn ImageFetcher>,
    pub decoder: Arc<dyn SymbolDecoder>,
    pub scratch: ScratchDir,
}
