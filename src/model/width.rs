use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Errors produced when validating a bit width
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WidthError {
    #[error("bit width must be a multiple of 8, got {0}")]
    NotByteAligned(u32),
    #[error("bit width must be between 8 and {max}, got {0}", max = BitWidth::MAX_BITS)]
    OutOfRange(u32),
    #[error("invalid bit width {0:?}")]
    Parse(String),
}

/// Number of bits in a fixed-width signed integer: a multiple of 8, up to 128
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct BitWidth(u32);

impl BitWidth {
    pub const MAX_BITS: u32 = 128;

    /// The classic `time_t` that overflows in 2038
    pub const W32: BitWidth = BitWidth(32);
    pub const W64: BitWidth = BitWidth(64);

    pub fn new(bits: u32) -> Result<Self, WidthError> {
        if bits == 0 || bits > Self::MAX_BITS {
            return Err(WidthError::OutOfRange(bits));
        }
        if bits % 8 != 0 {
            return Err(WidthError::NotByteAligned(bits));
        }
        Ok(Self(bits))
    }

    pub fn bits(self) -> u32 {
        self.0
    }

    pub fn bytes(self) -> usize {
        (self.0 / 8) as usize
    }

    /// Smallest signed value representable at this width
    pub fn min_value(self) -> i128 {
        i128::MIN >> (128 - self.0)
    }

    /// Largest signed value representable at this width
    pub fn max_value(self) -> i128 {
        !self.min_value()
    }

    pub fn contains(self, value: i128) -> bool {
        (self.min_value()..=self.max_value()).contains(&value)
    }

    /// Length of a rendered, space-grouped bit string at this width
    pub fn rendered_len(self) -> usize {
        self.0 as usize + self.bytes() - 1
    }
}

impl fmt::Display for BitWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.0)
    }
}

impl FromStr for BitWidth {
    type Err = WidthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_suffix("-bit")
            .or_else(|| trimmed.strip_suffix("bit"))
            .unwrap_or(trimmed);
        let bits = digits
            .parse::<u32>()
            .map_err(|_| WidthError::Parse(s.to_string()))?;
        Self::new(bits)
    }
}
