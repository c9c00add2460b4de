//! Encoder tree construction.
//!
//! The type is validated as a whole before any encoder is created, then the
//! value is walked alongside it. Word scalars are converted to words here,
//! so the tree only borrows the dynamic payloads of the value.

use tracing::trace;

#[cfg(not(feature = "std"))]
use crate::no_std_prelude::*;
use crate::{
    param_type::is_int_width,
    word::{encode_word, fixed_bytes_word},
    ArrayBase, BytesEncoder, DynamicArray, Encode, Encoder, Error, InlineList, NumericArray,
    ParamType, Reader, RefList, Result, Value, Word, WordEncoder,
};

/// Build the encoder tree for `value` of type `ty`.
pub fn build<'a>(ty: &ParamType, value: &'a Value) -> Result<Encoder<'a>> {
    check_type(ty)?;
    build_checked(ty, value)
}

/// Build the encoder tree for a value of the named type, e.g. `(uint256,bytes)`.
pub fn build_from_str<'a>(name: &str, value: &'a Value) -> Result<Encoder<'a>> {
    build(&Reader::read(name)?, value)
}

/// Build the encoder tree for a parameter list, encoded as a tuple.
pub fn build_params<'a>(types: &[ParamType], values: &'a [Value]) -> Result<Encoder<'a>> {
    let ty = ParamType::Tuple(types.to_vec());
    check_type(&ty)?;
    tuple(&ty, types, values)
}

/// Reject types no encoder exists for, such as `uint7` or `bytes0`.
fn check_type(ty: &ParamType) -> Result<()> {
    match ty {
        ParamType::Uint(bits) | ParamType::Int(bits) if !is_int_width(*bits) => {
            Err(Error::unsupported(ty))
        }
        ParamType::FixedBytes(len) if !(1..=32).contains(len) => Err(Error::unsupported(ty)),
        ParamType::Array(inner) | ParamType::FixedArray(inner, _) => check_type(inner),
        ParamType::Tuple(fields) => fields.iter().try_for_each(check_type),
        _ => Ok(()),
    }
}

fn build_checked<'a>(ty: &ParamType, value: &'a Value) -> Result<Encoder<'a>> {
    match (ty, value) {
        (ty, value) if ty.is_word() => word(ty, value).map(|w| WordEncoder::new(w).into()),
        (ParamType::Bytes, Value::Bytes(bytes)) => Ok(BytesEncoder::new(bytes).into()),
        (ParamType::String, Value::String(s)) => Ok(BytesEncoder::new(s.as_bytes()).into()),
        (ParamType::Tuple(fields), Value::Tuple(values)) => tuple(ty, fields, values),
        (ParamType::FixedArray(inner, len), Value::FixedArray(values)) => {
            if values.len() != *len {
                return Err(Error::invalid_value(
                    ty,
                    format!("expected {len} elements, got {}", values.len()),
                ));
            }
            array(inner, values, false)
        }
        (ParamType::Array(inner), Value::Array(values)) => array(inner, values, true),
        _ => Err(Error::mismatch(ty, value)),
    }
}

fn word(ty: &ParamType, value: &Value) -> Result<Word> {
    match (ty, value) {
        (ParamType::Uint(bits), Value::Uint(v)) => {
            if v.bit_len() > *bits {
                return Err(Error::invalid_value(ty, format!("{v} is out of range")));
            }
            Ok(encode_word(*v))
        }
        (ParamType::Int(bits), Value::Int(v)) => {
            if !v.fits_bits(*bits) {
                return Err(Error::invalid_value(ty, format!("{v} is out of range")));
            }
            Ok(encode_word(*v))
        }
        (ParamType::Address, Value::Address(address)) => Ok(encode_word(*address)),
        (ParamType::Bool, Value::Bool(b)) => Ok(encode_word(*b)),
        (ParamType::FixedBytes(len), Value::FixedBytes(bytes)) => {
            if bytes.len() != *len {
                return Err(Error::invalid_value(
                    ty,
                    format!("expected {len} bytes, got {}", bytes.len()),
                ));
            }
            Ok(fixed_bytes_word(bytes))
        }
        _ => Err(Error::mismatch(ty, value)),
    }
}

fn tuple<'a>(ty: &ParamType, fields: &[ParamType], values: &'a [Value]) -> Result<Encoder<'a>> {
    if fields.len() != values.len() {
        return Err(Error::invalid_value(
            ty,
            format!("expected {} fields, got {}", fields.len(), values.len()),
        ));
    }

    let elements = fields
        .iter()
        .zip(values)
        .map(|(field, value)| build_checked(field, value))
        .collect::<Result<Vec<_>>>()?;

    if fields.iter().any(ParamType::is_dynamic) {
        trace!(target: "abi::enc", %ty, "ref list");
        Ok(RefList::new(elements).into())
    } else {
        trace!(target: "abi::enc", %ty, "inline list");
        Ok(InlineList::new(elements).into())
    }
}

fn array<'a>(inner: &ParamType, values: &'a [Value], dynamic: bool) -> Result<Encoder<'a>> {
    if inner.is_word() {
        let words = values.iter().map(|v| word(inner, v)).collect::<Result<Vec<_>>>()?;
        trace!(target: "abi::enc", %inner, len = words.len(), dynamic, "numeric array");
        return Ok(NumericArray::new(words, dynamic).into());
    }

    let elements = values
        .iter()
        .map(|v| build_checked(inner, v))
        .collect::<Result<Vec<_>>>()?;

    // Dynamic elements may differ in size, so only static ones share one.
    let base = match inner.static_size() {
        Some(size) => {
            let list = InlineList::homogeneous(elements);
            debug_assert_eq!(list.encoded_size(), size * list.len());
            ArrayBase::Inline(list)
        }
        None => ArrayBase::Ref(RefList::new(elements)),
    };
    trace!(target: "abi::enc", %inner, len = base.len(), dynamic, "array");

    Ok(if dynamic {
        DynamicArray::new(base).into()
    } else {
        base.into()
    })
}
