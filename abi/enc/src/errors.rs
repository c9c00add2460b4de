//! Encoder errors.

#[cfg(not(feature = "std"))]
use crate::no_std_prelude::*;
use crate::{ParamType, Value};

/// Encoder result
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors raised while building an encoder tree.
///
/// Encoding itself cannot fail once the tree is built, so both variants are
/// construction time errors and no bytes are produced when they occur.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(thiserror::Error))]
pub enum Error {
    /// The type description cannot be mapped to any encoder.
    #[cfg_attr(feature = "std", error("unsupported type: {0}"))]
    UnsupportedType(String),

    /// A value does not match the shape its type expects.
    #[cfg_attr(feature = "std", error("invalid value for {ty}: {reason}"))]
    InvalidValue {
        /// Canonical name of the expected type
        ty: String,
        /// What is wrong with the value
        reason: String,
    },
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::UnsupportedType(ty) => write!(f, "unsupported type: {ty}"),
            Self::InvalidValue { ty, reason } => write!(f, "invalid value for {ty}: {reason}"),
        }
    }
}

impl Error {
    pub(crate) fn unsupported(ty: impl ToString) -> Self {
        Self::UnsupportedType(ty.to_string())
    }

    pub(crate) fn invalid_value(ty: &ParamType, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            ty: ty.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn mismatch(ty: &ParamType, value: &Value) -> Self {
        Self::invalid_value(ty, format!("got {} value", value.kind()))
    }
}
