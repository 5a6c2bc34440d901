//! Command line arguments.

use ascii_roundtrip::config::{
    DECODE_SCALE_DIVISOR, DEFAULT_ENCODE_SCALE, DEFAULT_INTERMEDIATE_PATH, DEFAULT_OUTPUT_PATH,
};
use ascii_roundtrip::{BlockScale, RampMapping, RoundtripConfig};
use clap::Parser;
use std::path::PathBuf;

/// Convert an image to ASCII art and reconstruct a greyscale image from it
#[derive(Parser, Debug)]
#[command(name = "ascii-roundtrip")]
#[command(version, long_about = None)]
pub struct Args {
    /// Source image (a file dialog opens when omitted)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Where the ASCII art text is written
    #[arg(short, long, default_value = DEFAULT_INTERMEDIATE_PATH)]
    pub text: PathBuf,

    /// Where the reconstructed JPEG is written
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Pixel block per character when encoding, as WIDTHxHEIGHT
    #[arg(long, default_value_t = DEFAULT_ENCODE_SCALE)]
    pub scale: BlockScale,

    /// Pixel block per character when decoding (default: scale divided by 3)
    #[arg(long)]
    pub decode_scale: Option<BlockScale>,

    /// Bucket gray values 32 levels wide, leaving the two lightest symbols unused
    #[arg(long)]
    pub legacy_ramp: bool,
}

impl Args {
    /// Build the round trip configuration for an already resolved source
    pub fn into_config(self, source_path: PathBuf) -> RoundtripConfig {
        RoundtripConfig {
            source_path,
            intermediate_path: self.text,
            output_path: self.output,
            encode_scale: self.scale,
            decode_scale: self
                .decode_scale
                .unwrap_or_else(|| self.scale.divided_by(DECODE_SCALE_DIVISOR)),
            ramp_mapping: if self.legacy_ramp {
                RampMapping::Legacy
            } else {
                RampMapping::Spread
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["ascii-roundtrip"]).unwrap();
        assert!(args.input.is_none());

        let config = args.into_config(PathBuf::from("photo.jpg"));
        assert_eq!(config.intermediate_path, PathBuf::from("output.txt"));
        assert_eq!(config.output_path, PathBuf::from("output.jpg"));
        assert_eq!(config.encode_scale, BlockScale::new(6, 12).unwrap());
        assert_eq!(config.decode_scale, BlockScale::new(2, 4).unwrap());
        assert_eq!(config.ramp_mapping, RampMapping::Spread);
    }

    #[test]
    fn test_custom_scales() {
        let args = Args::try_parse_from([
            "ascii-roundtrip",
            "--input",
            "cat.png",
            "--scale",
            "9x18",
            "--legacy-ramp",
        ])
        .unwrap();
        assert_eq!(args.input, Some(PathBuf::from("cat.png")));

        let config = args.into_config(PathBuf::from("cat.png"));
        assert_eq!(config.encode_scale, BlockScale::new(9, 18).unwrap());
        assert_eq!(config.decode_scale, BlockScale::new(3, 6).unwrap());
        assert_eq!(config.ramp_mapping, RampMapping::Legacy);
    }

    #[test]
    fn test_explicit_decode_scale() {
        let args =
            Args::try_parse_from(["ascii-roundtrip", "--decode-scale", "1x1"]).unwrap();
        let config = args.into_config(PathBuf::from("a.jpg"));
        assert_eq!(config.decode_scale, BlockScale::new(1, 1).unwrap());
    }

    #[test]
    fn test_zero_scale_rejected() {
        assert!(Args::try_parse_from(["ascii-roundtrip", "--scale", "0x12"]).is_err());
        assert!(Args::try_parse_from(["ascii-roundtrip", "--scale", "12"]).is_err());
    }
}
