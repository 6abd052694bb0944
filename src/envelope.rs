use std::borrow::Cow;
use std::io::{Read, Write};

use flate2::read::{GzDecoder, ZlibDecoder};
use flate2::write::{GzEncoder, ZlibEncoder};
use flate2::Compression;
use num_enum::TryFromPrimitive;

use crate::error::{Error, Result};

/// The compression wrapper around an NBT document. Each variant is represented
/// by the first byte such a document starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[repr(u8)]
pub enum Envelope {
    /// No compression. The document starts directly with the root compound's
    /// tag byte.
    Uncompressed = 0x0a,
    /// gzip, as used by `level.dat` and player data.
    Gzip = 0x1f,
    /// zlib, as used by chunks inside region files.
    Zlib = 0x78,
}

impl Envelope {
    /// Classify a document by its first byte.
    pub fn classify(first: u8) -> Result<Self> {
        Envelope::try_from(first).map_err(|_| Error::unknown_envelope(first))
    }

    /// Classify a document by looking at its first byte. Does not consume or
    /// decompress anything.
    pub fn sniff(data: &[u8]) -> Result<Self> {
        match data.first() {
            Some(&b) => Self::classify(b),
            None => Err(Error::truncated(1, 0).at(0)),
        }
    }

    /// Remove this envelope from `data`. Uncompressed data is borrowed as is.
    pub fn decompress(self, data: &[u8]) -> Result<Cow<'_, [u8]>> {
        let mut buf = vec![];
        match self {
            Envelope::Uncompressed => return Ok(Cow::Borrowed(data)),
            Envelope::Gzip => {
                GzDecoder::new(data).read_to_end(&mut buf)?;
            }
            Envelope::Zlib => {
                ZlibDecoder::new(data).read_to_end(&mut buf)?;
            }
        }
        Ok(Cow::Owned(buf))
    }

    /// Wrap `data` in this envelope using the default compression level.
    pub fn compress(self, data: &[u8]) -> Result<Vec<u8>> {
        Ok(match self {
            Envelope::Uncompressed => data.to_vec(),
            Envelope::Gzip => {
                let mut enc = GzEncoder::new(vec![], Compression::default());
                enc.write_all(data)?;
                enc.finish()?
            }
            Envelope::Zlib => {
                let mut enc = ZlibEncoder::new(vec![], Compression::default());
                enc.write_all(data)?;
                enc.finish()?
            }
        })
    }
}
