// Copyright 2015-2020 Parity Technologies
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Values to encode.

use core::fmt;

use calldata_primitives::{I256, U256};

#[cfg(not(feature = "std"))]
use crate::no_std_prelude::*;
use crate::{Address, ParamType};

/// A value tree matching a [`ParamType`].
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Value {
    /// `uintN`
    Uint(U256),
    /// `intN`
    Int(I256),
    /// `address`
    Address(Address),
    /// `bool`
    Bool(bool),
    /// `bytesN`, exactly `N` bytes
    FixedBytes(Vec<u8>),
    /// `bytes`
    Bytes(Vec<u8>),
    /// `string`
    String(String),
    /// `T[]`
    Array(Vec<Value>),
    /// `T[k]`
    FixedArray(Vec<Value>),
    /// Tuple or struct
    Tuple(Vec<Value>),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Uint(v) => write!(f, "{v}"),
            Value::Int(v) => write!(f, "{v}"),
            Value::Address(v) => write!(f, "{v:?}"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::FixedBytes(v) | Value::Bytes(v) => write!(f, "0x{}", hex::encode(v)),
            Value::String(v) => write!(f, "{v:?}"),
            Value::Array(values) | Value::FixedArray(values) => {
                f.write_str("[")?;
                write_list(f, values)?;
                f.write_str("]")
            }
            Value::Tuple(values) => {
                f.write_str("(")?;
                write_list(f, values)?;
                f.write_str(")")
            }
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, values: &[Value]) -> fmt::Result {
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        write!(f, "{value}")?;
    }
    Ok(())
}

impl Value {
    /// Short name of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Uint(_) => "uint",
            Value::Int(_) => "int",
            Value::Address(_) => "address",
            Value::Bool(_) => "bool",
            Value::FixedBytes(_) => "fixed bytes",
            Value::Bytes(_) => "bytes",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::FixedArray(_) => "fixed array",
            Value::Tuple(_) => "tuple",
        }
    }

    /// Check whether the value has the shape the given type expects.
    ///
    /// Integer ranges are checked for the declared width, fixed byte
    /// lengths and fixed array lengths must match exactly.
    pub fn type_check(&self, param_type: &ParamType) -> bool {
        match (param_type, self) {
            (ParamType::Uint(bits), Value::Uint(v)) => v.bit_len() <= *bits,
            (ParamType::Int(bits), Value::Int(v)) => v.fits_bits(*bits),
            (ParamType::Address, Value::Address(_))
            | (ParamType::Bool, Value::Bool(_))
            | (ParamType::Bytes, Value::Bytes(_))
            | (ParamType::String, Value::String(_)) => true,
            (ParamType::FixedBytes(len), Value::FixedBytes(bytes)) => bytes.len() == *len,
            (ParamType::Array(inner), Value::Array(values)) => {
                values.iter().all(|v| v.type_check(inner))
            }
            (ParamType::FixedArray(inner, len), Value::FixedArray(values)) => {
                values.len() == *len && values.iter().all(|v| v.type_check(inner))
            }
            (ParamType::Tuple(fields), Value::Tuple(values)) => Self::types_check(values, fields),
            _ => false,
        }
    }

    /// Check if all the values match the given parameter types.
    pub fn types_check(values: &[Value], param_types: &[ParamType]) -> bool {
        param_types.len() == values.len()
            && param_types.iter().zip(values).all(|(param_type, value)| value.type_check(param_type))
    }
}
