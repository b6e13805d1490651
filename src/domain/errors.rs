use thiserror::Error;

// Boxed adapter error, kept as the `source()` of domain errors.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

// Failures while pulling a remote image into local storage.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("image request failed: {0}")]
    Transport(#[source] BoxError),
    #[error("image request timed out")]
    Timeout(#[source] BoxError),
    #[error("failed to write fetched image: {0}")]
    Io(#[from] std::io::Error),
}

// Failures while turning a local file into pixels.
#[derive(Debug, Error)]
pub enum ImageLoadError {
    #[error("failed to read image file: {0}")]
    Io(#[from] std::io::Error),
    #[error("unsupported or corrupt image: {0}")]
    Format(#[source] BoxError),
}
