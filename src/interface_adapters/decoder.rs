use crate::domain::{DecodedSymbol, ImageLoadError, SymbolDecoder};
use image::DynamicImage;
use std::path::Path;

// SymbolDecoder backed by the image codec and the qrism QR reader.
#[derive(Clone, Copy, Default)]
pub struct QrismDecoder;

impl SymbolDecoder for QrismDecoder {
    fn decode_file(&self, path: &Path) -> Result<Vec<DecodedSymbol>, ImageLoadError> {
        let bytes = std::fs::read(path)?;
        let img =
            image::load_from_memory(&bytes).map_err(|err| ImageLoadError::Format(Box::new(err)))?;
        Ok(decode_image(&img))
    }
}

// Every QR symbol qrism can read, in detection order.
pub fn decode_image(img: &DynamicImage) -> Vec<DecodedSymbol> {
    let mut detected = qrism::reader::detect_qr(img);

    detected
        .symbols()
        .iter_mut()
        .filter_map(|symbol| match symbol.decode() {
            Ok((_metadata, message)) => Some(DecodedSymbol::qr(message.into_bytes())),
            Err(err) => {
                tracing::debug!(error = ?err, "skipping unreadable qr symbol");
                None
            }
        })
        .collect()
}
