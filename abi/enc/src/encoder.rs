// Copyright 2015-2020 Parity Technologies
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! ABI encoder.

use core::cell::RefCell;

use tracing::debug;

#[cfg(not(feature = "std"))]
use crate::no_std_prelude::*;
use crate::{
    builder,
    word::{aligned_size, pad_usize, write_aligned, write_word, WORD_SIZE},
    Bytes, EncodeBuffer, ParamType, Result, Selector, Value, Word,
};

/// Sizing and writing, implemented by every encoder shape.
pub trait Encode {
    /// Bytes written by [`encode_to`](Self::encode_to), head and tail
    /// together. Pure, so parents can lay out offsets before writing.
    fn encoded_size(&self) -> usize;

    /// Whether an enclosing head holds an offset to this encoding rather
    /// than the encoding itself.
    fn is_indirect(&self) -> bool;

    /// Bytes occupied in an enclosing head.
    fn head_size(&self) -> usize {
        if self.is_indirect() {
            WORD_SIZE
        } else {
            self.encoded_size()
        }
    }

    /// Write the full encoding at the cursor.
    ///
    /// Offsets written by this encoder are relative to the position
    /// `head_base_offset` bytes before the cursor. Every list passes 0 to
    /// its children, so offsets are always relative to the head of the list
    /// currently being written. The cursor is left just past the encoding.
    fn encode_to(&self, buf: &mut EncodeBuffer<'_>, head_base_offset: usize);
}

/// A single word: integer, address, bool or `bytesN`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEncoder(Word);

impl WordEncoder {
    /// Wrap an already encoded word.
    pub fn new(word: Word) -> Self {
        Self(word)
    }
}

impl Encode for WordEncoder {
    fn encoded_size(&self) -> usize {
        WORD_SIZE
    }

    fn is_indirect(&self) -> bool {
        false
    }

    fn encode_to(&self, buf: &mut EncodeBuffer<'_>, _: usize) {
        write_word(buf, &self.0);
    }
}

/// `bytes` or `string`: a length word, then the data padded to a word
/// boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BytesEncoder<'a>(&'a [u8]);

impl<'a> BytesEncoder<'a> {
    /// Borrow the payload.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self(bytes)
    }
}

impl Encode for BytesEncoder<'_> {
    fn encoded_size(&self) -> usize {
        WORD_SIZE + aligned_size(self.0.len())
    }

    fn is_indirect(&self) -> bool {
        true
    }

    fn encode_to(&self, buf: &mut EncodeBuffer<'_>, _: usize) {
        write_word(buf, &pad_usize(self.0.len()));
        write_aligned(buf, self.0);
    }
}

fn is_uniform(elements: &[Encoder<'_>]) -> bool {
    elements.windows(2).all(|pair| {
        pair[0].encoded_size() == pair[1].encoded_size()
            && pair[0].is_indirect() == pair[1].is_indirect()
    })
}

/// Elements written back to back, no offsets. Every element must be inline
/// safe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineList<'a> {
    elements: Vec<Encoder<'a>>,
    homogeneous: bool,
}

impl<'a> InlineList<'a> {
    /// List of arbitrary inline safe elements.
    pub fn new(elements: Vec<Encoder<'a>>) -> Self {
        debug_assert!(elements.iter().all(|e| !e.is_indirect()));
        Self {
            elements,
            homogeneous: false,
        }
    }

    /// List whose elements all have the same encoded size. Sizing only
    /// looks at the first element.
    pub fn homogeneous(elements: Vec<Encoder<'a>>) -> Self {
        debug_assert!(is_uniform(&elements), "non uniform homogeneous list");
        Self {
            homogeneous: true,
            ..Self::new(elements)
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the list has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl Encode for InlineList<'_> {
    fn encoded_size(&self) -> usize {
        match self.elements.first() {
            Some(first) if self.homogeneous => first.encoded_size() * self.elements.len(),
            _ => self.elements.iter().map(Encode::encoded_size).sum(),
        }
    }

    fn is_indirect(&self) -> bool {
        false
    }

    fn encode_to(&self, buf: &mut EncodeBuffer<'_>, _: usize) {
        for element in &self.elements {
            element.encode_to(buf, 0);
        }
    }
}

/// Elements split into a head and a tail.
///
/// Inline safe elements sit in the head as they are. Every other element
/// takes one offset word in the head, pointing at its encoding in the tail.
/// Tail encodings follow the head in element order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefList<'a> {
    elements: Vec<Encoder<'a>>,
    homogeneous: bool,
}

impl<'a> RefList<'a> {
    /// List with at least one element requiring indirection, or any list
    /// of an indirected element type.
    pub fn new(elements: Vec<Encoder<'a>>) -> Self {
        Self {
            elements,
            homogeneous: false,
        }
    }

    /// List whose elements all have the same encoded size. Sizing only
    /// looks at the first element.
    pub fn homogeneous(elements: Vec<Encoder<'a>>) -> Self {
        debug_assert!(is_uniform(&elements), "non uniform homogeneous list");
        Self {
            elements,
            homogeneous: true,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the list has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    fn head_len(&self) -> usize {
        match self.elements.first() {
            Some(first) if self.homogeneous => first.head_size() * self.elements.len(),
            _ => self.elements.iter().map(Encode::head_size).sum(),
        }
    }

    fn tail_len(&self) -> usize {
        match self.elements.first() {
            Some(first) if self.homogeneous => {
                if first.is_indirect() {
                    first.encoded_size() * self.elements.len()
                } else {
                    0
                }
            }
            _ => self
                .elements
                .iter()
                .filter(|e| e.is_indirect())
                .map(Encode::encoded_size)
                .sum(),
        }
    }
}

impl Encode for RefList<'_> {
    fn encoded_size(&self) -> usize {
        self.head_len() + self.tail_len()
    }

    fn is_indirect(&self) -> bool {
        true
    }

    fn encode_to(&self, buf: &mut EncodeBuffer<'_>, head_base_offset: usize) {
        let head_start = buf.pos() - head_base_offset;
        let tail_start = buf.pos() + self.head_len();
        let mut tail = buf.view(tail_start);

        for element in &self.elements {
            if element.is_indirect() {
                debug_assert!(buf.pos() + WORD_SIZE <= tail_start);
                write_word(buf, &pad_usize(tail.pos() - head_start));

                let start = tail.pos();
                element.encode_to(&mut tail, 0);
                debug_assert_eq!(tail.pos() - start, element.encoded_size());
            } else {
                element.encode_to(buf, 0);
            }
        }

        debug_assert_eq!(buf.pos(), tail_start);
        buf.join(tail);
    }
}

/// The list shapes a [`DynamicArray`] can wrap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArrayBase<'a> {
    /// Inline safe elements
    Inline(InlineList<'a>),
    /// Indirected elements
    Ref(RefList<'a>),
}

impl ArrayBase<'_> {
    /// Number of elements.
    pub fn len(&self) -> usize {
        match self {
            Self::Inline(list) => list.len(),
            Self::Ref(list) => list.len(),
        }
    }

    /// Whether the array has no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Encode for ArrayBase<'_> {
    fn encoded_size(&self) -> usize {
        match self {
            Self::Inline(list) => list.encoded_size(),
            Self::Ref(list) => list.encoded_size(),
        }
    }

    fn is_indirect(&self) -> bool {
        match self {
            Self::Inline(list) => list.is_indirect(),
            Self::Ref(list) => list.is_indirect(),
        }
    }

    fn encode_to(&self, buf: &mut EncodeBuffer<'_>, head_base_offset: usize) {
        match self {
            Self::Inline(list) => list.encode_to(buf, head_base_offset),
            Self::Ref(list) => list.encode_to(buf, head_base_offset),
        }
    }
}

/// `T[]`: element count, then the elements as a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicArray<'a> {
    base: ArrayBase<'a>,
}

impl<'a> DynamicArray<'a> {
    /// Prefix `base` with its length.
    pub fn new(base: ArrayBase<'a>) -> Self {
        Self { base }
    }
}

impl Encode for DynamicArray<'_> {
    fn encoded_size(&self) -> usize {
        self.base.encoded_size() + WORD_SIZE
    }

    fn is_indirect(&self) -> bool {
        true
    }

    fn encode_to(&self, buf: &mut EncodeBuffer<'_>, _: usize) {
        write_word(buf, &pad_usize(self.base.len()));
        // element offsets are relative to the word after the count
        self.base.encode_to(buf, 0);
    }
}

/// Array of word scalars, stored as words without per element encoders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericArray {
    words: Vec<Word>,
    dynamic: bool,
}

impl NumericArray {
    /// `T[]` when `dynamic`, `T[k]` otherwise.
    pub fn new(words: Vec<Word>, dynamic: bool) -> Self {
        Self { words, dynamic }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the array has no elements.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Encode for NumericArray {
    fn encoded_size(&self) -> usize {
        (self.words.len() + self.dynamic as usize) * WORD_SIZE
    }

    fn is_indirect(&self) -> bool {
        self.dynamic
    }

    fn encode_to(&self, buf: &mut EncodeBuffer<'_>, _: usize) {
        if self.dynamic {
            write_word(buf, &pad_usize(self.words.len()));
        }
        for word in &self.words {
            write_word(buf, word);
        }
    }
}

/// Any encoder shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Encoder<'a> {
    /// Single word
    Word(WordEncoder),
    /// Dynamic bytes or string
    Bytes(BytesEncoder<'a>),
    /// Static tuple or fixed array of inline safe elements
    InlineList(InlineList<'a>),
    /// Dynamic tuple or fixed array of indirected elements
    RefList(RefList<'a>),
    /// Dynamic array of non word elements
    DynamicArray(DynamicArray<'a>),
    /// Fixed or dynamic array of words
    NumericArray(NumericArray),
}

macro_rules! dispatch {
    ($self:ident, $enc:ident => $body:expr) => {
        match $self {
            Encoder::Word($enc) => $body,
            Encoder::Bytes($enc) => $body,
            Encoder::InlineList($enc) => $body,
            Encoder::RefList($enc) => $body,
            Encoder::DynamicArray($enc) => $body,
            Encoder::NumericArray($enc) => $body,
        }
    };
}

impl Encode for Encoder<'_> {
    fn encoded_size(&self) -> usize {
        dispatch!(self, enc => enc.encoded_size())
    }

    fn is_indirect(&self) -> bool {
        dispatch!(self, enc => enc.is_indirect())
    }

    fn encode_to(&self, buf: &mut EncodeBuffer<'_>, head_base_offset: usize) {
        dispatch!(self, enc => enc.encode_to(buf, head_base_offset))
    }
}

macro_rules! impl_from_encoder {
    ($($variant:ident($ty:ty)),+ $(,)?) => {
        $(
            impl<'a> From<$ty> for Encoder<'a> {
                fn from(enc: $ty) -> Self {
                    Encoder::$variant(enc)
                }
            }
        )+
    };
}

impl_from_encoder!(
    Word(WordEncoder),
    Bytes(BytesEncoder<'a>),
    InlineList(InlineList<'a>),
    RefList(RefList<'a>),
    DynamicArray(DynamicArray<'a>),
    NumericArray(NumericArray),
);

impl<'a> From<ArrayBase<'a>> for Encoder<'a> {
    fn from(base: ArrayBase<'a>) -> Self {
        match base {
            ArrayBase::Inline(list) => list.into(),
            ArrayBase::Ref(list) => list.into(),
        }
    }
}

impl<'a> Encoder<'a> {
    /// Build the encoder tree for `value` of type `ty`.
    pub fn build(ty: &ParamType, value: &'a Value) -> Result<Self> {
        builder::build(ty, value)
    }

    /// Encode into a fresh buffer.
    pub fn to_vec(&self) -> Bytes {
        self.to_vec_with_prefix(&[])
    }

    /// Encode after `prefix`. Offsets are measured from the end of the
    /// prefix.
    pub fn to_vec_with_prefix(&self, prefix: &[u8]) -> Bytes {
        let size = self.encoded_size();
        let storage = RefCell::new(Vec::new());
        let mut buf = EncodeBuffer::new(&storage);
        buf.reserve(prefix.len() + size);
        buf.write(prefix);
        self.encode_to(&mut buf, 0);
        debug_assert_eq!(buf.pos(), prefix.len() + size);
        storage.into_inner()
    }
}

/// Encodes a single value of type `ty`, without an enclosing parameter
/// tuple.
pub fn encode(ty: &ParamType, value: &Value) -> Result<Bytes> {
    let encoded = builder::build(ty, value)?.to_vec();
    debug!(target: "abi::enc", %ty, size = encoded.len(), "encoded value");
    Ok(encoded)
}

/// Encodes a single value as a hex string.
pub fn encode_hex(ty: &ParamType, value: &Value) -> Result<String> {
    encode(ty, value).map(hex::encode)
}

/// Encodes function arguments, i.e. the tuple of `values`.
pub fn encode_params(types: &[ParamType], values: &[Value]) -> Result<Bytes> {
    let encoded = builder::build_params(types, values)?.to_vec();
    debug!(target: "abi::enc", params = types.len(), size = encoded.len(), "encoded params");
    Ok(encoded)
}

/// Encodes call data: `selector` followed by the arguments.
pub fn encode_with_selector(
    selector: Selector,
    types: &[ParamType],
    values: &[Value],
) -> Result<Bytes> {
    let encoded = builder::build_params(types, values)?.to_vec_with_prefix(&selector);
    debug!(
        target: "abi::enc",
        selector = %hex::encode(selector),
        size = encoded.len(),
        "encoded call"
    );
    Ok(encoded)
}
