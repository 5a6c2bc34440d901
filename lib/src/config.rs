use crate::error::{Result, RoundtripError};
use crate::ramp::RampMapping;
use std::path::PathBuf;

/// Size of the pixel block collapsed into one character (encode) or
/// expanded from one character (decode)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockScale {
    width: u32,
    height: u32,
}

impl BlockScale {
    /// Creates a block scale, rejecting zero-sized blocks
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(RoundtripError::InvalidScale { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels in one block
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Divides both components by `divisor`, never going below 1
    ///
    /// The default decode scale is the encode scale divided by 3.
    pub fn divided_by(&self, divisor: u32) -> Self {
        let divisor = divisor.max(1);
        Self {
            width: (self.width / divisor).max(1),
            height: (self.height / divisor).max(1),
        }
    }
}

impl std::str::FromStr for BlockScale {
    type Err = RoundtripError;

    /// Parses `WIDTHxHEIGHT`, e.g. `6x12`
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || RoundtripError::InvalidConfig(format!("expected WIDTHxHEIGHT, got '{}'", s));
        let (w, h) = s.split_once(['x', 'X']).ok_or_else(invalid)?;
        let width = w.trim().parse().map_err(|_| invalid())?;
        let height = h.trim().parse().map_err(|_| invalid())?;
        Self::new(width, height)
    }
}

impl std::fmt::Display for BlockScale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Encode scale used when none is given
pub const DEFAULT_ENCODE_SCALE: BlockScale = BlockScale { width: 6, height: 12 };

/// Encode scale / decode scale
pub const DECODE_SCALE_DIVISOR: u32 = 3;

pub const DEFAULT_INTERMEDIATE_PATH: &str = "output.txt";
pub const DEFAULT_OUTPUT_PATH: &str = "output.jpg";

/// Configuration for one image -> text -> image round trip
#[derive(Debug, Clone)]
pub struct RoundtripConfig {
    /// Files
    pub source_path: PathBuf,       // image picked by the user
    pub intermediate_path: PathBuf, // ASCII art text, default output.txt
    pub output_path: PathBuf,       // reconstructed JPEG, default output.jpg

    /// Scales
    pub encode_scale: BlockScale, // default 6x12
    pub decode_scale: BlockScale, // default 2x4

    /// Quantization
    pub ramp_mapping: RampMapping, // default Spread
}

impl RoundtripConfig {
    /// Default configuration for the given source image
    pub fn for_source(source_path: impl Into<PathBuf>) -> Self {
        Self {
            source_path: source_path.into(),
            ..Default::default()
        }
    }

    /// Validates the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.source_path.as_os_str().is_empty() {
            return Err(RoundtripError::InvalidConfig("source path is empty".to_string()));
        }
        if self.intermediate_path.as_os_str().is_empty() {
            return Err(RoundtripError::InvalidConfig(
                "intermediate text path is empty".to_string(),
            ));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(RoundtripError::InvalidConfig("output path is empty".to_string()));
        }
        Ok(())
    }
}

impl Default for RoundtripConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::new(),
            intermediate_path: PathBuf::from(DEFAULT_INTERMEDIATE_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),

            encode_scale: DEFAULT_ENCODE_SCALE,
            decode_scale: DEFAULT_ENCODE_SCALE.divided_by(DECODE_SCALE_DIVISOR),

            ramp_mapping: RampMapping::default(),
        }
    }
}
