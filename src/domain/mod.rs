// Domain layer: request shapes, decode results and the ports the workflow needs.

pub mod entities;
pub mod errors;
pub mod ports;
pub mod schema;

pub use entities::{DecodeOutcome, DecodedSymbol, FetchReport, SymbolKind};
pub use errors::{BoxError, FetchError, ImageLoadError};
pub use ports::{ImageFetcher, SymbolDecoder};
pub use schema::{RequestSchema, UsageError, ValueKind};
