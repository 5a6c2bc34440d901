//! Character ramp lookup
//!
//! The ramp holds 10 symbols ordered from darkest to lightest. The encoder
//! maps gray values onto it, the decoder maps characters back to shades.

/// Ramp characters organized by brightness
pub const RAMP: [char; 10] = [
    '@', // 0: darkest
    '%', // 1
    '#', // 2
    '*', // 3
    '+', // 4
    '=', // 5
    '-', // 6
    ':', // 7
    '.', // 8
    ' ', // 9: lightest
];

/// How a gray value in [0, 255] is bucketed into a ramp index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RampMapping {
    /// `gray / 26`: ten buckets, the last one (234-255) narrower
    #[default]
    Spread,
    /// `gray / 32`: only the first eight symbols are ever produced
    Legacy,
}

impl RampMapping {
    fn bucket_width(self) -> u8 {
        match self {
            RampMapping::Spread => 26,
            RampMapping::Legacy => 32,
        }
    }

    /// Ramp index for a gray value
    pub fn index(self, gray: u8) -> usize {
        (gray / self.bucket_width()) as usize
    }
}

/// Get the ramp character for a gray value
pub fn char_for_gray(gray: u8, mapping: RampMapping) -> char {
    RAMP[mapping.index(gray).min(RAMP.len() - 1)]
}

pub fn is_ramp_char(ch: char) -> bool {
    RAMP.contains(&ch)
}

/// Shade written by the decoder for a character
///
/// This is the character's code point scaled by 8, saturated at white. It is
/// not the inverse of [`char_for_gray`]; only blank characters (see
/// [`is_blank`]) fall outside it and leave their block unset. Every non-blank
/// ramp symbol has a code point of at least 35, so decoded ramp text is
/// effectively two-tone: white at block origins, black elsewhere.
pub fn shade_for_char(ch: char) -> u8 {
    u32::from(ch).saturating_mul(8).min(255) as u8
}

/// Characters the decoder leaves as background
pub fn is_blank(ch: char) -> bool {
    ch.is_whitespace()
}
