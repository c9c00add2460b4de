//! Type descriptions.

use core::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(not(feature = "std"))]
use crate::no_std_prelude::*;
use crate::Error;

mod reader;
pub(crate) use reader::is_int_width;
pub use reader::Reader;

/// Structural description of an ABI type.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParamType {
    /// Unsigned integer with the given bit width.
    Uint(usize),
    /// Signed integer with the given bit width.
    Int(usize),
    /// 20 byte address.
    Address,
    /// Boolean.
    Bool,
    /// Fixed size byte array, `bytesN`.
    FixedBytes(usize),
    /// Dynamic byte array.
    Bytes,
    /// UTF-8 string.
    String,
    /// Dynamic length array, `T[]`.
    Array(Box<ParamType>),
    /// Fixed length array, `T[k]`.
    FixedArray(Box<ParamType>, usize),
    /// Tuple or struct.
    Tuple(Vec<ParamType>),
}

impl ParamType {
    /// Parse a canonical type string such as `(uint256,bytes)[]`.
    pub fn parse(name: &str) -> crate::Result<Self> {
        Reader::read(name)
    }

    /// Whether the value is encoded as exactly one word.
    pub fn is_word(&self) -> bool {
        matches!(
            self,
            Self::Uint(_) | Self::Int(_) | Self::Address | Self::Bool | Self::FixedBytes(_)
        )
    }

    /// Whether the encoded size depends on the value, in which case the type
    /// is placed behind an offset in any enclosing head.
    pub fn is_dynamic(&self) -> bool {
        match self {
            Self::Bytes | Self::String | Self::Array(_) => true,
            Self::FixedArray(inner, _) => inner.is_dynamic(),
            Self::Tuple(fields) => fields.iter().any(Self::is_dynamic),
            _ => false,
        }
    }

    /// Encoded size of an inline-safe type, `None` for dynamic types.
    pub fn static_size(&self) -> Option<usize> {
        match self {
            ty if ty.is_word() => Some(32),
            Self::FixedArray(inner, len) => inner.static_size().map(|size| size * len),
            Self::Tuple(fields) => fields.iter().map(Self::static_size).sum(),
            _ => None,
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uint(bits) => write!(f, "uint{bits}"),
            Self::Int(bits) => write!(f, "int{bits}"),
            Self::Address => f.write_str("address"),
            Self::Bool => f.write_str("bool"),
            Self::FixedBytes(len) => write!(f, "bytes{len}"),
            Self::Bytes => f.write_str("bytes"),
            Self::String => f.write_str("string"),
            Self::Array(inner) => write!(f, "{inner}[]"),
            Self::FixedArray(inner, len) => write!(f, "{inner}[{len}]"),
            Self::Tuple(fields) => {
                f.write_str("(")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{field}")?;
                }
                f.write_str(")")
            }
        }
    }
}

impl FromStr for ParamType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Reader::read(s)
    }
}
