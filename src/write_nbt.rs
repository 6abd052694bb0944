use std::borrow::Cow;
use std::io::Write;

use byteorder::{BigEndian, WriteBytesExt};

use crate::error::{Error, Result};
use crate::{StringEncoding, Tag};

pub(crate) trait WriteNbt: Write {
    fn write_tag(&mut self, tag: Tag) -> Result<()> {
        self.write_u8(tag as u8)?;
        Ok(())
    }

    fn write_size_prefixed_str(&mut self, s: &str, encoding: StringEncoding) -> Result<()> {
        let bytes = match encoding {
            StringEncoding::Utf8 => Cow::Borrowed(s.as_bytes()),
            StringEncoding::JavaCesu8 => cesu8::to_java_cesu8(s),
        };
        let len: u16 = bytes
            .len()
            .try_into()
            .map_err(|_| Error::malformed_length(bytes.len() as i64))?;
        self.write_u16::<BigEndian>(len)?;
        self.write_all(&bytes)?;
        Ok(())
    }

    fn write_len(&mut self, len: usize) -> Result<()> {
        self.write_i32::<BigEndian>(
            len.try_into()
                .map_err(|_| Error::malformed_length(len as i64))?,
        )?;

        Ok(())
    }
}

impl<T> WriteNbt for T where T: Write {}
