//! ASCII round trip - image to ASCII art and back
//!
//! The encoder averages pixel blocks into characters of a fixed 10-symbol
//! ramp. The decoder turns each character back into a single greyscale pixel
//! at its block origin. The trip is lossy: only dimensions survive it.
//!
//! # Example
//! ```no_run
//! use ascii_roundtrip::{BlockScale, RampMapping, decode_file, encode_to_file, load_image};
//! use std::path::Path;
//!
//! let input = load_image(Path::new("photo.jpg")).unwrap();
//! let scale = BlockScale::new(6, 12).unwrap();
//! encode_to_file(&input, Path::new("output.txt"), scale, RampMapping::Spread).unwrap();
//! let output = decode_file(Path::new("output.txt"), scale.divided_by(3)).unwrap();
//! output.save("output.png").unwrap();
//! ```

pub mod art;
pub mod config;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod gray;
pub mod pipeline;
pub mod ramp;

// Re-export main types for convenience
pub use art::AsciiArt;
pub use config::{BlockScale, RoundtripConfig};
pub use decoder::{ascii_to_image, decode_file, render_art};
pub use encoder::{encode_to_file, image_to_ascii, write_ascii};
pub use error::{Result, RoundtripError};
pub use pipeline::{
    FixedPath, PathProvider, RoundtripReport, load_image, resolve_source, run, save_image,
};
pub use ramp::{RAMP, RampMapping};
