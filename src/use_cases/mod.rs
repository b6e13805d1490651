// Use cases layer: the decode workflow and its per-request storage.

pub mod decode_image;
pub mod scratch;


pub use decode_image::DecodeImageUseCase;
pub use scratch::{ScratchDir, ScratchFile};
