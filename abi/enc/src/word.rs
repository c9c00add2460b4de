//! Word codec.
//!
//! Every scalar, offset, length and count in the format is one 32 byte big
//! endian word. Numbers are right aligned (zero or sign extended), fixed byte
//! arrays are left aligned and zero padded.

use calldata_primitives::{B160, B256, I256, U256};

use crate::{EncodeBuffer, Word};

/// Size of a word in bytes.
pub const WORD_SIZE: usize = 32;

const ZEROES: [u8; WORD_SIZE] = [0; WORD_SIZE];

/// Values that fit in a single word.
pub trait IntoWord {
    /// Big endian word representation.
    fn into_word(self) -> Word;
}

impl IntoWord for Word {
    fn into_word(self) -> Word {
        self
    }
}

impl IntoWord for U256 {
    fn into_word(self) -> Word {
        self.into()
    }
}

impl IntoWord for I256 {
    fn into_word(self) -> Word {
        B256(self.to_be_bytes())
    }
}

impl IntoWord for B160 {
    fn into_word(self) -> Word {
        self.into()
    }
}

impl IntoWord for bool {
    fn into_word(self) -> Word {
        let mut word = Word::default();
        word[31..].copy_from_slice(&[self as u8]);
        word
    }
}

macro_rules! impl_into_word_ints {
    ($int:ty, $uint:ty) => {
        impl IntoWord for $uint {
            fn into_word(self) -> Word {
                let bytes = self.to_be_bytes();
                let mut word = Word::default();
                word[WORD_SIZE - bytes.len()..].copy_from_slice(&bytes);
                word
            }
        }

        impl IntoWord for $int {
            fn into_word(self) -> Word {
                I256::from(self).into_word()
            }
        }
    };
}

impl_into_word_ints!(i8, u8);
impl_into_word_ints!(i16, u16);
impl_into_word_ints!(i32, u32);
impl_into_word_ints!(i64, u64);
impl_into_word_ints!(i128, u128);
impl_into_word_ints!(isize, usize);

/// Encode a word sized value.
pub fn encode_word<T: IntoWord>(value: T) -> Word {
    value.into_word()
}

/// Convert u32 to Word, right aligned.
pub fn pad_u32(value: u32) -> Word {
    value.into_word()
}

/// Convert usize to Word, right aligned.
pub fn pad_usize(value: usize) -> Word {
    value.into_word()
}

/// Word holding a fixed size byte array, left aligned. Bytes past the
/// first 32 are ignored; the builder rejects such values before this point.
pub fn fixed_bytes_word(bytes: &[u8]) -> Word {
    let len = bytes.len().min(WORD_SIZE);
    let mut word = Word::default();
    word[..len].copy_from_slice(&bytes[..len]);
    word
}

/// `len` rounded up to the next multiple of [`WORD_SIZE`].
pub fn aligned_size(len: usize) -> usize {
    (len + WORD_SIZE - 1) / WORD_SIZE * WORD_SIZE
}

/// Write one word at the cursor.
pub fn write_word(buf: &mut EncodeBuffer<'_>, word: &Word) {
    buf.write(word.as_bytes());
}

/// Write `bytes` followed by zero padding up to the next word boundary.
pub fn write_aligned(buf: &mut EncodeBuffer<'_>, bytes: &[u8]) {
    buf.write(bytes);
    let fill = aligned_size(bytes.len()) - bytes.len();
    buf.write(&ZEROES[..fill]);
}

#[cfg(test)]
mod tests {
    use core::cell::RefCell;

    use calldata_primitives::{B160, I256, U256};
    use hex_literal::hex;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_pad_u32() {
        // this will fail if endianess is not supported
        assert_eq!(pad_u32(0x1)[31], 1);
        assert_eq!(pad_u32(0x100)[30], 1);
    }

    #[test]
    fn uint256_one() {
        let word = encode_word(U256::from(1u8));
        assert_eq!(word[..31], [0u8; 31]);
        assert_eq!(word[31], 1);
    }

    #[test]
    fn negative_ints_are_sign_extended() {
        assert_eq!(encode_word(-1i8).0, [0xff; 32]);
        assert_eq!(
            encode_word(-2i64).0,
            hex!("fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffe")
        );
        assert_eq!(encode_word(I256::from(-1i32)), encode_word(-1i128));
    }

    #[test]
    fn address_and_bool() {
        assert_eq!(
            encode_word(B160([0x11; 20])).0,
            hex!("0000000000000000000000001111111111111111111111111111111111111111")
        );
        assert_eq!(encode_word(true), pad_u32(1));
        assert_eq!(encode_word(false), Word::default());
    }

    #[test]
    fn bool_words() {
        assert_eq!(
            encode_word(true).0,
            hex!("0000000000000000000000000000000000000000000000000000000000000001")
        );
        assert_eq!(encode_word(false).0, [0u8; 32]);
    }

    #[test]
    fn fixed_bytes_left_aligned() {
        assert_eq!(
            fixed_bytes_word(&[0x12, 0x34]).0,
            hex!("1234000000000000000000000000000000000000000000000000000000000000")
        );
    }

    #[test]
    fn aligned_sizes() {
        assert_eq!(aligned_size(0), 0);
        assert_eq!(aligned_size(1), 32);
        assert_eq!(aligned_size(32), 32);
        assert_eq!(aligned_size(33), 64);
    }

    #[test]
    fn write_aligned_pads_with_zeroes() {
        let storage = RefCell::new(Vec::new());
        let mut buf = EncodeBuffer::new(&storage);
        write_aligned(&mut buf, &[1, 2, 3]);
        assert_eq!(buf.pos(), 32);
        write_aligned(&mut buf, &[]);
        assert_eq!(buf.pos(), 32);
        let out = storage.into_inner();
        assert_eq!(out[..3], [1, 2, 3]);
        assert!(out[3..].iter().all(|b| *b == 0));
    }

    proptest! {
        #[test]
        fn aligned_size_bounds(n in 0usize..1 << 20) {
            let aligned = aligned_size(n);
            prop_assert_eq!(aligned % WORD_SIZE, 0);
            prop_assert!(aligned >= n && aligned - n < WORD_SIZE);
        }

        #[test]
        fn uint_round_trip(value: u128) {
            let decoded: U256 = encode_word(value).into();
            prop_assert_eq!(decoded, U256::from(value));
        }

        #[test]
        fn int_round_trip(value: i64) {
            let word = encode_word(value);
            prop_assert_eq!(I256::from_be_bytes(word.0), I256::from(value));
        }

        #[test]
        fn u256_round_trip(limbs: [u64; 4]) {
            let value = U256::from_limbs(limbs);
            let decoded: U256 = encode_word(value).into();
            prop_assert_eq!(decoded, value);
        }
    }
}
