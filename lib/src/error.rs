//! Error type shared by the encoder, decoder and pipeline.

use std::io;
use std::path::PathBuf;

/// Every way a round trip can fail
///
/// Errors are logged where they are detected and then returned to the caller;
/// nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum RoundtripError {
    /// A text or image file could not be opened
    #[error("unable to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading or writing failed after the file was opened
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    /// The source image could not be decoded
    #[error("unable to load image {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The ASCII art decoded to an empty image
    #[error("ASCII art in {} reconstructs to an empty image", .path.display())]
    Reconstruct { path: PathBuf },

    /// The reconstructed image could not be written
    #[error("unable to save image {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("block scale must be positive, got {width}x{height}")]
    InvalidScale { width: u32, height: u32 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("no source image selected")]
    SelectionCancelled,
}

pub type Result<T> = std::result::Result<T, RoundtripError>;
