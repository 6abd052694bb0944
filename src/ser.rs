//! Encoding of NBT to bytes.
//!
//! [`Encoder`] writes uncompressed NBT to any [`Write`]. Lists are written as
//! their element tag, an `i32` count, then the content of each element, with
//! no trailing end tag. Compounds are written as their members in insertion
//! order followed by a [`Tag::End`] byte.

use std::io::Write;

use byteorder::{BigEndian, WriteBytesExt};

use crate::error::Result;
use crate::write_nbt::WriteNbt;
use crate::{Compound, List, NamedTag, SerOpts, Tag, Value};

/// Encoder for NBT data.
pub struct Encoder<W: Write> {
    writer: W,
    opts: SerOpts,
}

impl<W: Write> Encoder<W> {
    pub fn new(writer: W) -> Self {
        Self::with_opts(writer, SerOpts::default())
    }

    pub fn with_opts(writer: W, opts: SerOpts) -> Self {
        Self { writer, opts }
    }

    /// Consumes this encoder, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Write a named tag, such as a document root.
    pub fn write_named(&mut self, tag: &NamedTag) -> Result<()> {
        self.write_entry(&tag.name, &tag.value)
    }

    /// Write a tag byte, name, then content. This is how the root and every
    /// member of a compound is written.
    pub fn write_entry(&mut self, name: &str, value: &Value) -> Result<()> {
        self.writer.write_tag(value.tag())?;
        self.writer.write_size_prefixed_str(name, self.opts.strings)?;
        self.write_content(value)
    }

    /// Write just the content of a value, as it appears as a list element.
    pub fn write_content(&mut self, value: &Value) -> Result<()> {
        match value {
            Value::Byte(v) => self.writer.write_i8(*v)?,
            Value::Short(v) => self.writer.write_i16::<BigEndian>(*v)?,
            Value::Int(v) => self.writer.write_i32::<BigEndian>(*v)?,
            Value::Long(v) => self.writer.write_i64::<BigEndian>(*v)?,
            Value::Float(v) => self.writer.write_f32::<BigEndian>(*v)?,
            Value::Double(v) => self.writer.write_f64::<BigEndian>(*v)?,
            Value::String(v) => self.writer.write_size_prefixed_str(v, self.opts.strings)?,
            Value::ByteArray(v) => {
                self.writer.write_len(v.len())?;
                for b in v {
                    self.writer.write_i8(*b)?;
                }
            }
            Value::IntArray(v) => {
                self.writer.write_len(v.len())?;
                for i in v {
                    self.writer.write_i32::<BigEndian>(*i)?;
                }
            }
            Value::LongArray(v) => {
                self.writer.write_len(v.len())?;
                for l in v {
                    self.writer.write_i64::<BigEndian>(*l)?;
                }
            }
            Value::List(v) => self.write_list(v)?,
            Value::Compound(v) => self.write_compound(v)?,
        }
        Ok(())
    }

    fn write_list(&mut self, list: &List) -> Result<()> {
        self.writer.write_tag(list.element_tag())?;
        self.writer.write_len(list.len())?;
        for v in list {
            self.write_content(v)?;
        }
        Ok(())
    }

    fn write_compound(&mut self, compound: &Compound) -> Result<()> {
        for (name, v) in compound {
            self.write_entry(name, v)?;
        }
        self.writer.write_tag(Tag::End)
    }
}
