use std::borrow::Cow;

use byteorder::{BigEndian, ByteOrder};

use crate::{
    error::{Error, Result},
    StringEncoding, Tag,
};

/// Read cursor over in-memory NBT. Every read either returns the whole value
/// or fails with a truncation error at the current offset; nothing is consumed
/// on failure.
pub(crate) struct Slice<'de> {
    data: &'de [u8],
    pos: usize,
}

impl<'de> Slice<'de> {
    pub fn new(data: &'de [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Offset of the next byte to be read.
    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    fn consume(&mut self, n: usize) -> Result<&'de [u8]> {
        if n <= self.remaining() {
            let ret = &self.data[self.pos..self.pos + n];
            self.pos += n;
            Ok(ret)
        } else {
            Err(Error::truncated(n, self.remaining()).at(self.pos))
        }
    }

    pub fn peek_byte(&self) -> Result<u8> {
        self.data
            .get(self.pos)
            .copied()
            .ok_or_else(|| Error::truncated(1, 0).at(self.pos))
    }

    /// Look at the next tag without consuming it.
    pub fn peek_tag(&self) -> Result<Tag> {
        let b = self.peek_byte()?;
        Tag::try_from(b).map_err(|e| e.at(self.pos))
    }

    pub fn consume_tag(&mut self) -> Result<Tag> {
        let tag = self.peek_tag()?;
        self.pos += 1;
        Ok(tag)
    }

    pub fn consume_i8(&mut self) -> Result<i8> {
        Ok(self.consume(1)?[0] as i8)
    }

    pub fn consume_i16(&mut self) -> Result<i16> {
        Ok(BigEndian::read_i16(self.consume(2)?))
    }

    pub fn consume_i32(&mut self) -> Result<i32> {
        Ok(BigEndian::read_i32(self.consume(4)?))
    }

    pub fn consume_i64(&mut self) -> Result<i64> {
        Ok(BigEndian::read_i64(self.consume(8)?))
    }

    pub fn consume_f32(&mut self) -> Result<f32> {
        Ok(BigEndian::read_f32(self.consume(4)?))
    }

    pub fn consume_f64(&mut self) -> Result<f64> {
        Ok(BigEndian::read_f64(self.consume(8)?))
    }

    /// Read an int32 element count, rejecting negative counts and counts
    /// beyond `max`.
    pub fn consume_len(&mut self, max: usize) -> Result<usize> {
        let at = self.pos;
        let len = self.consume_i32()?;
        match usize::try_from(len) {
            Ok(len) if len <= max => Ok(len),
            _ => Err(Error::malformed_length(len as i64).at(at)),
        }
    }

    pub fn consume_str(&mut self, encoding: StringEncoding) -> Result<String> {
        let len = BigEndian::read_u16(self.consume(2)?) as usize;
        let at = self.pos;
        let bytes = self.consume(len)?;

        let s = match encoding {
            StringEncoding::Utf8 => std::str::from_utf8(bytes).map(Cow::Borrowed).ok(),
            StringEncoding::JavaCesu8 => cesu8::from_java_cesu8(bytes).ok(),
        };

        s.map(Cow::into_owned)
            .ok_or_else(|| Error::invalid_string(bytes).at(at))
    }

    /// Read `len` elements of `width` bytes each.
    fn consume_elements(&mut self, len: usize, width: usize) -> Result<&'de [u8]> {
        let at = self.pos;
        let size = len
            .checked_mul(width)
            .ok_or_else(|| Error::malformed_length(len as i64).at(at))?;
        self.consume(size)
    }

    pub fn consume_i8_array(&mut self, len: usize) -> Result<Vec<i8>> {
        let bs = self.consume_elements(len, 1)?;
        Ok(bs.iter().map(|&b| b as i8).collect())
    }

    pub fn consume_i32_array(&mut self, len: usize) -> Result<Vec<i32>> {
        let bs = self.consume_elements(len, std::mem::size_of::<i32>())?;
        let mut out = vec![0; len];
        BigEndian::read_i32_into(bs, &mut out);
        Ok(out)
    }

    pub fn consume_i64_array(&mut self, len: usize) -> Result<Vec<i64>> {
        let bs = self.consume_elements(len, std::mem::size_of::<i64>())?;
        let mut out = vec![0; len];
        BigEndian::read_i64_into(bs, &mut out);
        Ok(out)
    }
}
