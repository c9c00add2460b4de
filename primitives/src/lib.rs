#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

//! Fixed width numeric types for the calldata encoder.
//!
//! Unsigned integers come straight from [`ruint`]. Signed integers are
//! [`I256`], a two's complement view over the same 256 bit storage. Fixed
//! hashes ([`B256`], [`B160`]) are plain byte arrays built with `fixed-hash`.

mod bits;
pub use bits::{B160, B256};

mod signed;
pub use signed::I256;

pub use ruint::{
    self,
    aliases::{U128, U256, U64},
    uint, Uint,
};
