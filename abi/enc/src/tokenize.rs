use calldata_primitives::{B160, B256, I256, U128, U256, U64};

#[cfg(not(feature = "std"))]
use crate::no_std_prelude::*;
use crate::{builder, encode, Bytes, ParamType, Result, Selector, Value};

/// Rust types with a fixed ABI type
pub trait Tokenize {
    /// ABI type shared by all values of this type
    fn param_type() -> ParamType;

    /// Convert to a value tree
    fn to_value(&self) -> Value;

    /// ABI encode
    fn encode(&self) -> Result<Bytes> {
        encode(&Self::param_type(), &self.to_value())
    }

    /// Hex encode
    fn encode_hex(&self) -> Result<String> {
        self.encode().map(hex::encode)
    }

    /// ABI encode with a selector.
    ///
    /// A tuple is the argument list. Any other value is the only argument,
    /// so `x` and `(x,)` give the same call data.
    fn encode_with_selector(&self, selector: Selector) -> Result<Bytes> {
        let (ty, value) = match (Self::param_type(), self.to_value()) {
            (ty @ ParamType::Tuple(_), value) => (ty, value),
            (ty, value) => (ParamType::Tuple(vec![ty]), Value::Tuple(vec![value])),
        };
        Ok(builder::build(&ty, &value)?.to_vec_with_prefix(&selector))
    }

    /// Hex with selector
    fn encode_hex_with_selector(&self, selector: Selector) -> Result<String> {
        self.encode_with_selector(selector).map(hex::encode)
    }
}

macro_rules! impl_tokenize_ints {
    ($int:ty, $uint:ty, $bits:expr) => {
        impl Tokenize for $int {
            fn param_type() -> ParamType {
                ParamType::Int($bits)
            }

            fn to_value(&self) -> Value {
                Value::Int(I256::from(*self))
            }
        }

        impl Tokenize for $uint {
            fn param_type() -> ParamType {
                ParamType::Uint($bits)
            }

            fn to_value(&self) -> Value {
                Value::Uint(U256::from(*self))
            }
        }
    };
}

impl_tokenize_ints!(i8, u8, 8);
impl_tokenize_ints!(i16, u16, 16);
impl_tokenize_ints!(i32, u32, 32);
impl_tokenize_ints!(i64, u64, 64);
impl_tokenize_ints!(i128, u128, 128);
impl_tokenize_ints!(isize, usize, usize::BITS as usize);

impl Tokenize for &str {
    fn param_type() -> ParamType {
        ParamType::String
    }

    fn to_value(&self) -> Value {
        Value::String((*self).to_owned())
    }
}

impl Tokenize for String {
    fn param_type() -> ParamType {
        ParamType::String
    }

    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl<T, const N: usize> Tokenize for [T; N]
where
    T: Tokenize,
{
    fn param_type() -> ParamType {
        ParamType::FixedArray(Box::new(T::param_type()), N)
    }

    fn to_value(&self) -> Value {
        Value::FixedArray(self.iter().map(Tokenize::to_value).collect())
    }
}

impl<T> Tokenize for Vec<T>
where
    T: Tokenize,
{
    fn param_type() -> ParamType {
        ParamType::Array(Box::new(T::param_type()))
    }

    fn to_value(&self) -> Value {
        Value::Array(self.iter().map(Tokenize::to_value).collect())
    }
}

impl Tokenize for bool {
    fn param_type() -> ParamType {
        ParamType::Bool
    }

    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl Tokenize for B160 {
    fn param_type() -> ParamType {
        ParamType::Address
    }

    fn to_value(&self) -> Value {
        Value::Address(*self)
    }
}

impl Tokenize for B256 {
    fn param_type() -> ParamType {
        ParamType::FixedBytes(32)
    }

    fn to_value(&self) -> Value {
        Value::FixedBytes(self.as_bytes().to_vec())
    }
}

impl Tokenize for U64 {
    fn param_type() -> ParamType {
        ParamType::Uint(64)
    }

    fn to_value(&self) -> Value {
        Value::Uint(U256::from(self.to::<u64>()))
    }
}

impl Tokenize for U128 {
    fn param_type() -> ParamType {
        ParamType::Uint(128)
    }

    fn to_value(&self) -> Value {
        Value::Uint(U256::from(self.to::<u128>()))
    }
}

impl Tokenize for U256 {
    fn param_type() -> ParamType {
        ParamType::Uint(256)
    }

    fn to_value(&self) -> Value {
        Value::Uint(*self)
    }
}

impl Tokenize for I256 {
    fn param_type() -> ParamType {
        ParamType::Int(256)
    }

    fn to_value(&self) -> Value {
        Value::Int(*self)
    }
}

macro_rules! impl_tokenize_tuple {
    ($($ty:ident),+) => {
        impl<$($ty: Tokenize),+> Tokenize for ($($ty,)+) {
            fn param_type() -> ParamType {
                ParamType::Tuple(vec![$(<$ty as Tokenize>::param_type()),+])
            }

            #[allow(non_snake_case)]
            fn to_value(&self) -> Value {
                let ($($ty,)+) = self;
                Value::Tuple(vec![$($ty.to_value()),+])
            }
        }
    };
}

impl_tokenize_tuple!(A);
impl_tokenize_tuple!(A, B);
impl_tokenize_tuple!(A, B, C);
impl_tokenize_tuple!(A, B, C, D);
impl_tokenize_tuple!(A, B, C, D, E);
impl_tokenize_tuple!(A, B, C, D, E, F);
impl_tokenize_tuple!(A, B, C, D, E, F, G);
impl_tokenize_tuple!(A, B, C, D, E, F, G, H);

#[cfg(test)]
mod tests {
    use calldata_primitives::{B160, B256, I256, U256, U64};
    use hex_literal::hex;

    #[cfg(not(feature = "std"))]
    use crate::no_std_prelude::*;
    use crate::{encode_params, encode_with_selector, ParamType, Tokenize, Value};

    #[test]
    fn param_types() {
        assert_eq!(u8::param_type(), ParamType::Uint(8));
        assert_eq!(i128::param_type(), ParamType::Int(128));
        assert_eq!(U64::param_type(), ParamType::Uint(64));
        assert_eq!(<[bool; 3]>::param_type().to_string(), "bool[3]");
        assert_eq!(
            <(B160, Vec<String>, (bool, B256))>::param_type().to_string(),
            "(address,string[],(bool,bytes32))"
        );
    }

    #[test]
    fn scalars() {
        assert_eq!(
            7u16.encode().unwrap(),
            hex!("0000000000000000000000000000000000000000000000000000000000000007")
        );
        assert_eq!(
            (-1i32).encode().unwrap(),
            hex!("ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff")
        );
        assert_eq!(I256::from(-1i8).encode().unwrap(), (-1i64).encode().unwrap());
        assert_eq!(
            B160([0x11; 20]).encode_hex().unwrap(),
            "0000000000000000000000001111111111111111111111111111111111111111"
        );
        assert_eq!(B256([0xab; 32]).encode().unwrap(), [0xab; 32]);
        assert_eq!(U256::MAX.encode().unwrap(), [0xff; 32]);
        assert_eq!(true.encode().unwrap(), 1u8.encode().unwrap());
    }

    #[test]
    fn strings_and_arrays() {
        assert_eq!(
            "gavofyork".encode().unwrap(),
            hex!(
                "
                0000000000000000000000000000000000000000000000000000000000000009
                6761766f66796f726b0000000000000000000000000000000000000000000000
            "
            )
        );
        assert_eq!(String::from("gavofyork").encode(), "gavofyork".encode());

        assert_eq!(
            vec![5u64, 7].encode().unwrap(),
            hex!(
                "
                0000000000000000000000000000000000000000000000000000000000000002
                0000000000000000000000000000000000000000000000000000000000000005
                0000000000000000000000000000000000000000000000000000000000000007
            "
            )
        );
        assert_eq!([5u64, 7].encode().unwrap()[..], vec![5u64, 7].encode().unwrap()[32..]);
    }

    #[test]
    fn tuples_are_argument_lists() {
        let args = (B160([0x22; 20]), String::from("spaceship"), vec![true, false]);
        let types = <(B160, String, Vec<bool>)>::param_type();
        let ParamType::Tuple(types) = types else {
            panic!("tuple expected");
        };
        let values = vec![
            Value::Address(B160([0x22; 20])),
            Value::String("spaceship".into()),
            Value::Array(vec![Value::Bool(true), Value::Bool(false)]),
        ];

        assert_eq!(args.encode().unwrap(), encode_params(&types, &values).unwrap());

        let selector = [0xa9, 0x05, 0x9c, 0xbb];
        let call = args.encode_with_selector(selector).unwrap();
        assert_eq!(call, encode_with_selector(selector, &types, &values).unwrap());
        assert_eq!(call[..4], selector);
        assert_eq!(
            args.encode_hex_with_selector(selector).unwrap(),
            hex::encode(&call)
        );
    }

    #[test]
    fn single_argument_call() {
        let selector = [1, 2, 3, 4];
        let call = ("x",).encode_with_selector(selector).unwrap();
        let expected = hex!(
            "
            01020304
            0000000000000000000000000000000000000000000000000000000000000020
            0000000000000000000000000000000000000000000000000000000000000001
            7800000000000000000000000000000000000000000000000000000000000000
        "
        );
        assert_eq!(call, expected);

        assert_eq!("x".encode_with_selector(selector).unwrap(), call);
        assert_eq!(
            call,
            encode_with_selector(selector, &[ParamType::String], &[Value::String("x".into())])
                .unwrap()
        );
    }

    #[test]
    fn single_dynamic_arguments_get_an_offset() {
        let selector = [0xaa; 4];
        let call = vec![1u8, 2].encode_with_selector(selector).unwrap();
        let expected = hex!(
            "
            aaaaaaaa
            0000000000000000000000000000000000000000000000000000000000000020
            0000000000000000000000000000000000000000000000000000000000000002
            0000000000000000000000000000000000000000000000000000000000000001
            0000000000000000000000000000000000000000000000000000000000000002
        "
        );
        assert_eq!(call, expected);

        // static arguments have no offset either way
        assert_eq!(
            7u32.encode_with_selector(selector).unwrap()[4..],
            7u32.encode().unwrap()[..]
        );
        assert_eq!(
            [true, false].encode_with_selector(selector).unwrap()[4..],
            [true, false].encode().unwrap()[..]
        );
    }
}
