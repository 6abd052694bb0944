//! nbtcodec reads and writes NBT, the named binary tag format used by
//! *Minecraft: Java Edition* to store world data, player inventories and the
//! like.
//!
//! * For the tree of values see [`Value`], [`Compound`], [`List`] and the
//!   document root [`NamedTag`].
//! * For lower level, tag-at-a-time decoding see [`de::Decoder`].
//! * For encoding see [`ser::Encoder`].
//! * For gzip/zlib detection see [`Envelope`].
//!
//! # Quick example
//!
//! Documents on disk are usually gzip compressed. [`from_bytes`] detects this
//! from the first byte and decompresses before parsing, so the same call works
//! for raw, gzip and zlib data.
//!
//! ```no_run
//! use nbtcodec::{from_bytes, Value};
//!
//! # fn main() -> nbtcodec::error::Result<()> {
//! let data = std::fs::read("level.dat")?;
//! let level = from_bytes(&data)?;
//!
//! if let Some(Value::Compound(data)) = level.as_compound().and_then(|c| c.get("Data")) {
//!     println!("level name: {:?}", data.get("LevelName"));
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Writing goes the other way. Compression is never applied implicitly:
//!
//! ```
//! use nbtcodec::{from_bytes, to_bytes_compressed, Compound, Envelope, List, NamedTag, Tag};
//!
//! # fn main() -> nbtcodec::error::Result<()> {
//! let mut pos = List::new(Tag::Double);
//! pos.push(1.5f64)?;
//! pos.push(64.0f64)?;
//!
//! let root = NamedTag::new("", Compound::new().with("id", "minecraft:pig").with("Pos", pos));
//! let bytes = to_bytes_compressed(&root, Envelope::Gzip)?;
//!
//! assert_eq!(from_bytes(&bytes)?, root);
//! # Ok(())
//! # }
//! ```

use std::io::{Read, Write};

use log::debug;

pub mod de;
pub mod error;
pub mod ser;

mod envelope;
mod input;
mod value;
mod write_nbt;

pub use envelope::Envelope;
pub use value::*;

#[cfg(test)]
mod test;

use error::Result;

/// An NBT tag. This does not carry the value or the name of the data.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(feature = "arbitrary1", derive(arbitrary::Arbitrary))]
#[repr(u8)]
pub enum Tag {
    /// Represents the end of a Compound object.
    End = 0,
    /// Equivalent to i8.
    Byte = 1,
    /// Equivalent to i16.
    Short = 2,
    /// Equivalent to i32.
    Int = 3,
    /// Equivalent to i64
    Long = 4,
    /// Equivalent to f32.
    Float = 5,
    /// Equivalent to f64.
    Double = 6,
    /// Represents as array of Byte (i8).
    ByteArray = 7,
    /// Represents a Unicode string.
    String = 8,
    /// Represents a list of other objects, all of the same type.
    List = 9,
    /// Represents a struct-like structure.
    Compound = 10,
    /// Represents as array of Int (i32).
    IntArray = 11,
    /// Represents as array of Long (i64).
    LongArray = 12,
}

// Written out by hand rather than derived. The tags are fixed by the format
// and will very rarely change.
impl TryFrom<u8> for Tag {
    type Error = error::Error;

    fn try_from(value: u8) -> Result<Self> {
        use Tag::*;
        Ok(match value {
            0 => End,
            1 => Byte,
            2 => Short,
            3 => Int,
            4 => Long,
            5 => Float,
            6 => Double,
            7 => ByteArray,
            8 => String,
            9 => List,
            10 => Compound,
            11 => IntArray,
            12 => LongArray,
            13..=u8::MAX => return Err(error::Error::unknown_type(value)),
        })
    }
}

impl From<Tag> for u8 {
    fn from(tag: Tag) -> Self {
        tag as u8
    }
}

/// How strings and keys are represented on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StringEncoding {
    /// Standard UTF-8.
    #[default]
    Utf8,
    /// Java's modified UTF-8 (CESU-8 with an encoded NUL), which is what the
    /// game itself writes. Only differs from UTF-8 for NUL and characters
    /// outside the basic multilingual plane.
    JavaCesu8,
}

/// Options for decoding NBT.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct DeOpts {
    /// Maximum number of elements a list or array may declare.
    pub max_seq_len: usize,
    /// Maximum nesting of compounds and lists.
    pub max_depth: usize,
    /// Encoding used for strings and keys.
    pub strings: StringEncoding,
}

impl DeOpts {
    pub fn new() -> Self {
        Default::default()
    }

    /// Maximum number of elements a list or array may declare. Larger counts
    /// are rejected before any allocation happens.
    pub fn max_seq_len(mut self, value: usize) -> Self {
        self.max_seq_len = value;
        self
    }

    /// Maximum nesting of compounds and lists.
    pub fn max_depth(mut self, value: usize) -> Self {
        self.max_depth = value;
        self
    }

    pub fn strings(mut self, value: StringEncoding) -> Self {
        self.strings = value;
        self
    }
}

impl Default for DeOpts {
    fn default() -> Self {
        Self {
            max_seq_len: 10_000_000,
            max_depth: 512,
            strings: StringEncoding::Utf8,
        }
    }
}

/// Options for encoding NBT.
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct SerOpts {
    /// Encoding used for strings and keys.
    pub strings: StringEncoding,
}

impl SerOpts {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn strings(mut self, value: StringEncoding) -> Self {
        self.strings = value;
        self
    }
}

/// Decode an NBT document. The compression envelope (none, gzip or zlib) is
/// detected from the first byte.
pub fn from_bytes(input: &[u8]) -> Result<NamedTag> {
    from_bytes_with_opts(input, DeOpts::default())
}

/// Decode an NBT document with the given options. See [`from_bytes`].
pub fn from_bytes_with_opts(input: &[u8], opts: DeOpts) -> Result<NamedTag> {
    let envelope = Envelope::sniff(input)?;
    debug!("{:?} nbt document, {} bytes", envelope, input.len());

    let data = envelope.decompress(input)?;
    let mut decoder = de::Decoder::with_opts(&data, opts);
    let root = decoder.read_root()?;

    if decoder.remaining() > 0 {
        debug!("ignoring {} trailing bytes after root tag", decoder.remaining());
    }

    Ok(root)
}

/// Read all of `reader` and decode it as an NBT document. See [`from_bytes`].
pub fn from_reader<R: Read>(mut reader: R) -> Result<NamedTag> {
    let mut buf = vec![];
    reader.read_to_end(&mut buf)?;
    from_bytes(&buf)
}

/// Encode an NBT document. The output is uncompressed; see
/// [`to_bytes_compressed`] for gzip or zlib output.
pub fn to_bytes(root: &NamedTag) -> Result<Vec<u8>> {
    to_bytes_with_opts(root, SerOpts::default())
}

/// Encode an NBT document with the given options.
pub fn to_bytes_with_opts(root: &NamedTag, opts: SerOpts) -> Result<Vec<u8>> {
    let mut encoder = ser::Encoder::with_opts(vec![], opts);
    encoder.write_named(root)?;
    Ok(encoder.into_inner())
}

/// Encode an NBT document to the given writer.
pub fn to_writer<W: Write>(writer: W, root: &NamedTag) -> Result<()> {
    let mut encoder = ser::Encoder::new(writer);
    encoder.write_named(root)
}

/// Encode an NBT document and wrap it in the given compression envelope.
pub fn to_bytes_compressed(root: &NamedTag, envelope: Envelope) -> Result<Vec<u8>> {
    envelope.compress(&to_bytes(root)?)
}
