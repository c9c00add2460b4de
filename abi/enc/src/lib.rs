#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::module_inception)]
#![warn(missing_docs)]

//! Single pass ABI encoder for contract call data.
//!
//! A [`ParamType`] and a matching [`Value`] are turned into a tree of
//! [`Encoder`]s by the builder. Every encoder knows its encoded size up front,
//! so the tree is written in one pass: heads first, with offsets pointing
//! into tails that are filled through a second cursor over the same buffer.

#[cfg_attr(not(feature = "std"), macro_use)]
extern crate alloc;
#[cfg(not(feature = "std"))]
mod no_std_prelude {
    pub use alloc::{
        borrow::ToOwned,
        boxed::Box,
        string::{String, ToString},
        vec::Vec,
    };
}

use calldata_primitives::{B160, B256};

mod buffer;
pub use buffer::EncodeBuffer;

mod builder;
pub use builder::{build, build_from_str, build_params};

mod encoder;
pub use encoder::{
    encode, encode_hex, encode_params, encode_with_selector, ArrayBase, BytesEncoder,
    DynamicArray, Encode, Encoder, InlineList, NumericArray, RefList, WordEncoder,
};

mod errors;
pub use errors::{Error, Result};

mod param_type;
pub use param_type::{ParamType, Reader};

mod tokenize;
pub use tokenize::Tokenize;

mod value;
pub use value::Value;

pub mod word;

/// EVM Word
pub type Word = B256;
/// EVM Address
pub type Address = B160;
/// Encoded call data
pub type Bytes = alloc::vec::Vec<u8>;
/// Function selector
pub type Selector = [u8; 4];
