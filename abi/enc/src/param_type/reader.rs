//! Type string reader.

#[cfg(not(feature = "std"))]
use crate::no_std_prelude::*;
use crate::{Error, ParamType, Result};

/// Nesting limit for tuples and array suffixes together.
const MAX_DEPTH: usize = 1024;

/// Reads canonical Solidity type strings into [`ParamType`]s.
pub struct Reader;

impl Reader {
    /// Read a type such as `uint256`, `bytes`, `(address,uint8[])[2]`.
    ///
    /// Array suffixes apply left to right, so `uint8[3][]` is a dynamic
    /// array of `uint8[3]`. Any malformed part rejects the whole string.
    pub fn read(name: &str) -> Result<ParamType> {
        Self::read_type(name, 0).ok_or_else(|| Error::unsupported(name))
    }

    fn read_type(name: &str, depth: usize) -> Option<ParamType> {
        if depth > MAX_DEPTH {
            return None;
        }

        if let Some(stripped) = name.strip_suffix(']') {
            let open = stripped.rfind('[')?;
            let (inner, len) = (&stripped[..open], &stripped[open + 1..]);
            let inner = Box::new(Self::read_type(inner, depth + 1)?);
            if len.is_empty() {
                return Some(ParamType::Array(inner));
            }
            return parse_number(len).map(|len| ParamType::FixedArray(inner, len));
        }

        let tuple = name.strip_prefix("tuple").unwrap_or(name);
        if let Some(body) = tuple.strip_prefix('(') {
            return Self::read_tuple(body.strip_suffix(')')?, depth + 1);
        }

        match name {
            "address" => Some(ParamType::Address),
            "bool" => Some(ParamType::Bool),
            "string" => Some(ParamType::String),
            "bytes" => Some(ParamType::Bytes),
            "uint" => Some(ParamType::Uint(256)),
            "int" => Some(ParamType::Int(256)),
            _ => {
                if let Some(len) = name.strip_prefix("bytes") {
                    parse_number(len)
                        .filter(|len| (1..=32).contains(len))
                        .map(ParamType::FixedBytes)
                } else if let Some(bits) = name.strip_prefix("uint") {
                    parse_number(bits).filter(|b| is_int_width(*b)).map(ParamType::Uint)
                } else if let Some(bits) = name.strip_prefix("int") {
                    parse_number(bits).filter(|b| is_int_width(*b)).map(ParamType::Int)
                } else {
                    None
                }
            }
        }
    }

    fn read_tuple(body: &str, depth: usize) -> Option<ParamType> {
        if body.is_empty() {
            return Some(ParamType::Tuple(Vec::new()));
        }

        let mut fields = Vec::new();
        let mut depth = 0usize;
        let mut start = 0;
        for (i, c) in body.char_indices() {
            match c {
                '(' => depth += 1,
                ')' => depth = depth.checked_sub(1)?,
                ',' if depth == 0 => {
                    fields.push(Self::read_type(&body[start..i], depth)?);
                    start = i + 1;
                }
                _ => {}
            }
        }
        if depth != 0 {
            return None;
        }
        fields.push(Self::read_type(&body[start..], depth)?);

        Some(ParamType::Tuple(fields))
    }
}

pub(crate) fn is_int_width(bits: usize) -> bool {
    bits % 8 == 0 && (8..=256).contains(&bits)
}

/// Decimal without sign or leading zeros.
fn parse_number(s: &str) -> Option<usize> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) || (s.len() > 1 && s.starts_with('0'))
    {
        return None;
    }
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    #[cfg(not(feature = "std"))]
    use crate::no_std_prelude::*;
    use crate::{Error, ParamType, Reader};

    #[test]
    fn read_elementary() {
        assert_eq!(Reader::read("address").unwrap(), ParamType::Address);
        assert_eq!(Reader::read("bool").unwrap(), ParamType::Bool);
        assert_eq!(Reader::read("bytes").unwrap(), ParamType::Bytes);
        assert_eq!(Reader::read("bytes32").unwrap(), ParamType::FixedBytes(32));
        assert_eq!(Reader::read("bytes1").unwrap(), ParamType::FixedBytes(1));
        assert_eq!(Reader::read("string").unwrap(), ParamType::String);
        assert_eq!(Reader::read("uint").unwrap(), ParamType::Uint(256));
        assert_eq!(Reader::read("int").unwrap(), ParamType::Int(256));
        assert_eq!(Reader::read("uint8").unwrap(), ParamType::Uint(8));
        assert_eq!(Reader::read("int112").unwrap(), ParamType::Int(112));
    }

    #[test]
    fn read_arrays() {
        assert_eq!(
            Reader::read("uint256[]").unwrap(),
            ParamType::Array(Box::new(ParamType::Uint(256)))
        );
        assert_eq!(
            Reader::read("bool[3][]").unwrap(),
            ParamType::Array(Box::new(ParamType::FixedArray(Box::new(ParamType::Bool), 3)))
        );
        assert_eq!(
            Reader::read("bytes[][2]").unwrap(),
            ParamType::FixedArray(Box::new(ParamType::Array(Box::new(ParamType::Bytes))), 2)
        );
    }

    #[test]
    fn read_tuples() {
        assert_eq!(Reader::read("()").unwrap(), ParamType::Tuple(vec![]));
        assert_eq!(
            Reader::read("(uint256,bytes)").unwrap(),
            ParamType::Tuple(vec![ParamType::Uint(256), ParamType::Bytes])
        );
        assert_eq!(
            Reader::read("tuple(address,(bool,string[]))[2]").unwrap(),
            ParamType::FixedArray(
                Box::new(ParamType::Tuple(vec![
                    ParamType::Address,
                    ParamType::Tuple(vec![
                        ParamType::Bool,
                        ParamType::Array(Box::new(ParamType::String)),
                    ]),
                ])),
                2
            )
        );
    }

    #[test]
    fn display_round_trip() {
        for name in [
            "uint8",
            "int256",
            "bytes7",
            "(uint256,(bytes,bool[2])[],string)",
            "address[][3]",
            "()",
        ] {
            let ty = Reader::read(name).unwrap();
            assert_eq!(ty.to_string(), name);
            assert_eq!(name.parse::<ParamType>().unwrap(), ty);
        }
    }

    #[test]
    fn nesting_limit() {
        let nested = |depth: usize| format!("{}uint8{}", "(".repeat(depth), ")".repeat(depth));
        assert!(Reader::read(&nested(512)).is_ok());

        let name = nested(5000);
        assert_eq!(Reader::read(&name), Err(Error::UnsupportedType(name.clone())));

        let name = format!("uint8{}", "[]".repeat(5000));
        assert_eq!(Reader::read(&name), Err(Error::UnsupportedType(name.clone())));

        let name = format!("bool{}", "[2]".repeat(100));
        assert!(Reader::read(&name).is_ok());
    }

    #[test]
    fn reject_unknown() {
        for name in [
            "",
            "uint7",
            "uint0",
            "uint264",
            "uint08",
            "int+8",
            "bytes0",
            "bytes33",
            "fixed128x18",
            "function",
            "Uint256",
            "uint256[",
            "uint256]",
            "uint256[x]",
            "(uint256",
            "(uint256,)",
            "(uint256))",
            "uint256 ",
        ] {
            assert_eq!(
                Reader::read(name),
                Err(Error::UnsupportedType(name.to_string())),
                "{name}"
            );
        }
    }
}
