// Barcode type tag attached to each decoded symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymbolKind {
    QrCode,
    Other(String),
}

impl SymbolKind {
    pub fn tag(&self) -> &str {
        match self {
            SymbolKind::QrCode => "QRCODE",
            SymbolKind::Other(tag) => tag,
        }
    }
}

// One result unit produced by the barcode decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedSymbol {
    pub kind: SymbolKind,
    pub data: Vec<u8>,
}

impl DecodedSymbol {
    pub fn qr(data: impl Into<Vec<u8>>) -> Self {
        Self {
            kind: SymbolKind::QrCode,
            data: data.into(),
        }
    }
}

// Summary of a completed image download.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchReport {
    pub status: u16,
    pub bytes_written: u64,
}

// How a single decode run ended. Only `Text` carries a payload to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeOutcome {
    Text(String),
    NoSymbol,
    ImageUnreadable,
    FetchFailed,
}

impl DecodeOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            DecodeOutcome::Text(_) => "decoded",
            DecodeOutcome::NoSymbol => "no_symbol",
            DecodeOutcome::ImageUnreadable => "image_unreadable",
            DecodeOutcome::FetchFailed => "fetch_failed",
        }
    }

    pub fn into_text(self) -> String {
        match self {
            DecodeOutcome::Text(text) => text,
            _ => String::new(),
        }
    }
}
