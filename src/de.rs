//! Decoding of NBT from bytes.
//!
//! Most users want [`crate::from_bytes`], which also deals with compression.
//! [`Decoder`] works on uncompressed data and can read tags one at a time,
//! optionally insisting on a particular tag type:
//!
//! ```
//! use nbtcodec::{de::Decoder, error::ErrorKind, Tag};
//!
//! // An Int named "a" with value 7.
//! let data = [3, 0, 1, b'a', 0, 0, 0, 7];
//!
//! let err = Decoder::new(&data).read_short().unwrap_err();
//! assert_eq!(
//!     err.kind(),
//!     &ErrorKind::TypeMismatch { expected: Tag::Short, actual: Tag::Int }
//! );
//!
//! let (name, v) = Decoder::new(&data).read_int().unwrap();
//! assert_eq!((name.as_str(), v), ("a", 7));
//! ```
//!
//! # Format
//!
//! Every tag in a compound, and the root, is written as its tag byte, a
//! `u16` length prefixed name, then its content. List elements are written as
//! content only; their tag is given once by the list. A compound is its
//! members followed by a single [`Tag::End`] byte, and has no length.
//!
//! Decoding stops at the first error. A truncated compound is an error, never
//! a compound with fewer members.

use log::trace;

use crate::error::{Error, Result};
use crate::input::Slice;
use crate::{Compound, DeOpts, List, NamedTag, Tag, Value};

/// Decoder over uncompressed NBT data.
pub struct Decoder<'de> {
    input: Slice<'de>,
    opts: DeOpts,
    depth: usize,
}

macro_rules! typed_reads {
    ($($(#[$attr:meta])* $fn:ident => $variant:ident: $ty:ty),* $(,)?) => {
        $(
            $(#[$attr])*
            pub fn $fn(&mut self) -> Result<(String, $ty)> {
                let named = self.read_named_as(Tag::$variant)?;
                match named.value {
                    Value::$variant(v) => Ok((named.name, v)),
                    other => Err(Error::type_mismatch(Tag::$variant, other.tag())),
                }
            }
        )*
    };
}

impl<'de> Decoder<'de> {
    pub fn new(data: &'de [u8]) -> Self {
        Self::with_opts(data, DeOpts::default())
    }

    pub fn with_opts(data: &'de [u8], opts: DeOpts) -> Self {
        Self {
            input: Slice::new(data),
            opts,
            depth: 0,
        }
    }

    /// Offset of the next byte to be read.
    pub fn offset(&self) -> usize {
        self.input.pos()
    }

    /// Number of bytes not yet read.
    pub fn remaining(&self) -> usize {
        self.input.remaining()
    }

    /// The tag of the next value, without consuming anything.
    pub fn peek_tag(&self) -> Result<Tag> {
        self.input.peek_tag()
    }

    /// Read the document root. This is a single named tag which is not
    /// [`Tag::End`].
    pub fn read_root(&mut self) -> Result<NamedTag> {
        self.read_named()
    }

    /// Read one named tag of any type. An end tag is an error here; see
    /// [`Decoder::read_entry`] for reading the members of a compound.
    pub fn read_named(&mut self) -> Result<NamedTag> {
        let at = self.offset();
        self.read_entry()?
            .ok_or_else(|| Error::type_mismatch(Tag::Compound, Tag::End).at(at))
    }

    /// Read one named tag, first checking its type is `expected`. On a
    /// mismatch nothing is consumed.
    pub fn read_named_as(&mut self, expected: Tag) -> Result<NamedTag> {
        let actual = self.peek_tag()?;
        if actual != expected {
            return Err(Error::type_mismatch(expected, actual).at(self.offset()));
        }
        self.read_named()
    }

    /// Read the next entry of a compound: a named tag, or `None` if the end
    /// tag was consumed.
    pub fn read_entry(&mut self) -> Result<Option<NamedTag>> {
        let tag = self.input.consume_tag()?;

        // End tags have no name or value.
        let mut value = match Value::default_for(tag) {
            Some(v) => v,
            None => return Ok(None),
        };

        let name = self.input.consume_str(self.opts.strings)?;
        trace!("{:?} {:?} at {}", tag, name, self.offset());

        self.read_content(&mut value)?;
        Ok(Some(NamedTag { name, value }))
    }

    typed_reads! {
        read_byte => Byte: i8,
        read_short => Short: i16,
        read_int => Int: i32,
        read_long => Long: i64,
        read_float => Float: f32,
        read_double => Double: f64,
        read_string => String: String,
        read_byte_array => ByteArray: Vec<i8>,
        read_int_array => IntArray: Vec<i32>,
        read_long_array => LongArray: Vec<i64>,
        read_list => List: List,
        /// Read a named compound, such as the usual document root.
        read_compound => Compound: Compound,
    }

    /// Fill in the content of `value`, whose variant decides what is read.
    /// This is the content only: no tag byte and no name.
    pub(crate) fn read_content(&mut self, value: &mut Value) -> Result<()> {
        match value {
            Value::Byte(v) => *v = self.input.consume_i8()?,
            Value::Short(v) => *v = self.input.consume_i16()?,
            Value::Int(v) => *v = self.input.consume_i32()?,
            Value::Long(v) => *v = self.input.consume_i64()?,
            Value::Float(v) => *v = self.input.consume_f32()?,
            Value::Double(v) => *v = self.input.consume_f64()?,
            Value::String(v) => *v = self.input.consume_str(self.opts.strings)?,
            Value::ByteArray(v) => {
                let len = self.input.consume_len(self.opts.max_seq_len)?;
                *v = self.input.consume_i8_array(len)?;
            }
            Value::IntArray(v) => {
                let len = self.input.consume_len(self.opts.max_seq_len)?;
                *v = self.input.consume_i32_array(len)?;
            }
            Value::LongArray(v) => {
                let len = self.input.consume_len(self.opts.max_seq_len)?;
                *v = self.input.consume_i64_array(len)?;
            }
            Value::List(v) => {
                self.enter()?;
                *v = self.read_list_content()?;
                self.depth -= 1;
            }
            Value::Compound(v) => {
                self.enter()?;
                *v = self.read_compound_content()?;
                self.depth -= 1;
            }
        }
        Ok(())
    }

    fn enter(&mut self) -> Result<()> {
        if self.depth >= self.opts.max_depth {
            return Err(Error::depth_limit(self.opts.max_depth).at(self.offset()));
        }
        self.depth += 1;
        Ok(())
    }

    fn read_list_content(&mut self) -> Result<List> {
        let element = self.input.consume_tag()?;
        let at = self.offset();
        let len = self.input.consume_len(self.opts.max_seq_len)?;

        if element == Tag::End && len > 0 {
            return Err(Error::malformed_length(len as i64).at(at));
        }

        // Every element takes at least a byte, so a count beyond what is left
        // cannot be satisfied. Checked before allocating for it.
        if len > self.remaining() {
            return Err(Error::truncated(len, self.remaining()).at(at));
        }

        let mut items = Vec::with_capacity(len);
        for _ in 0..len {
            let mut item = Value::default_for(element)
                .ok_or_else(|| Error::malformed_length(len as i64).at(at))?;
            self.read_content(&mut item)?;
            items.push(item);
        }

        Ok(List::from_parts(element, items))
    }

    fn read_compound_content(&mut self) -> Result<Compound> {
        let mut compound = Compound::new();
        while let Some(NamedTag { name, value }) = self.read_entry()? {
            compound.insert(name, value);
        }
        Ok(compound)
    }
}
