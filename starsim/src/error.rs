use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LogoError>;

/// Ways a logo payload can fail to load. None of them stop the star field.
#[derive(Debug, Error)]
pub enum LogoError {
    #[error("logo payload must have 3 comma separated fields, found {0}")]
    FieldCount(usize),
    #[error("invalid logo dimension {0:?}")]
    InvalidNumber(String),
    #[error("logo dimensions must be non-zero, got {width}x{height}")]
    ZeroSize { width: u32, height: u32 },
    #[error("logo pixel data is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("logo pixel data has {found} bytes, expected {expected}")]
    ByteCount { expected: usize, found: usize },
    #[error("logo has {found} pixels, expected {expected}")]
    PixelCount { expected: usize, found: usize },
    #[error("failed to read logo from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
