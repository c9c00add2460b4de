use core::{fmt, ops::Neg};

use crate::U256;

/// Signed 256 bit integer.
///
/// Stored as the two's complement bit pattern of the value, so the big
/// endian bytes of the inner [`U256`] are already sign extended to 32 bytes.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct I256(U256);

impl I256 {
    /// Zero.
    pub const ZERO: Self = Self(U256::ZERO);

    /// Smallest value, `-2^255`.
    pub const MIN: Self = Self(U256::from_limbs([0, 0, 0, 1 << 63]));

    /// Largest value, `2^255 - 1`.
    pub const MAX: Self = Self(U256::from_limbs([u64::MAX, u64::MAX, u64::MAX, i64::MAX as u64]));

    /// Width in bits.
    pub const BITS: usize = 256;

    /// Reinterpret a two's complement bit pattern.
    pub const fn from_raw(raw: U256) -> Self {
        Self(raw)
    }

    /// The two's complement bit pattern.
    pub const fn into_raw(self) -> U256 {
        self.0
    }

    /// Build from 32 big endian bytes.
    pub fn from_be_bytes(bytes: [u8; 32]) -> Self {
        Self(U256::from_be_bytes::<32>(bytes))
    }

    /// Sign extended big endian bytes.
    pub fn to_be_bytes(&self) -> [u8; 32] {
        self.0.to_be_bytes::<32>()
    }

    /// Whether the sign bit is set.
    pub fn is_negative(&self) -> bool {
        self.0.bit(255)
    }

    /// Magnitude of the value. `MIN` maps to `2^255`.
    pub fn unsigned_abs(&self) -> U256 {
        if self.is_negative() {
            self.0.wrapping_neg()
        } else {
            self.0
        }
    }

    /// Two's complement negation, `MIN` negates to itself.
    pub fn wrapping_neg(self) -> Self {
        Self(self.0.wrapping_neg())
    }

    /// Whether the value is representable as an `intN` with `bits` bits.
    pub fn fits_bits(&self, bits: usize) -> bool {
        match bits {
            0 => false,
            256.. => true,
            _ => {
                // Value bits excluding the sign must fit in `bits - 1`.
                let magnitude = if self.is_negative() { !self.0 } else { self.0 };
                magnitude.bit_len() < bits
            }
        }
    }
}

macro_rules! impl_from_signed {
    ($($int:ty),+) => {
        $(
            impl From<$int> for I256 {
                fn from(value: $int) -> Self {
                    let magnitude = U256::from((value as i128).unsigned_abs());
                    if value < 0 {
                        Self(magnitude.wrapping_neg())
                    } else {
                        Self(magnitude)
                    }
                }
            }
        )+
    };
}

impl_from_signed!(i8, i16, i32, i64, i128, isize);

impl Neg for I256 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.wrapping_neg()
    }
}

impl fmt::Display for I256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}", self.unsigned_abs())
        } else {
            write!(f, "{}", self.0)
        }
    }
}
