use std::io::Write;

use flate2::write::{GzEncoder, ZlibEncoder};
use flate2::Compression;

use crate::error::{ErrorKind, Result};
use crate::test::builder::Builder;
use crate::{from_bytes, from_reader, to_bytes, to_bytes_compressed, Compound, Envelope, NamedTag};

fn sample() -> NamedTag {
    NamedTag::new(
        "",
        Compound::new()
            .with("LevelName", "New World")
            .with("SpawnX", 128i32),
    )
}

#[test]
fn classify_first_byte() -> Result<()> {
    assert_eq!(Envelope::classify(0x0a)?, Envelope::Uncompressed);
    assert_eq!(Envelope::classify(0x1f)?, Envelope::Gzip);
    assert_eq!(Envelope::classify(0x78)?, Envelope::Zlib);

    let err = Envelope::classify(0x05).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::UnknownEnvelope(0x05));
    assert_eq!(err.offset(), Some(0));
    Ok(())
}

#[test]
fn sniff_does_not_need_more_than_one_byte() -> Result<()> {
    assert_eq!(Envelope::sniff(&[0x1f])?, Envelope::Gzip);
    assert_eq!(Envelope::sniff(&[0x78, 0x9c, 0xff])?, Envelope::Zlib);
    assert!(Envelope::sniff(&[]).unwrap_err().is_truncated());
    Ok(())
}

#[test]
fn unknown_envelope_from_bytes() {
    let payload = Builder::new().int("x", 1).build();
    let err = from_bytes(&payload).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::UnknownEnvelope(3));
}

#[test]
fn gzip_document() -> Result<()> {
    let raw = to_bytes(&sample())?;
    let mut enc = GzEncoder::new(vec![], Compression::fast());
    enc.write_all(&raw)?;
    let gz = enc.finish()?;

    assert_eq!(Envelope::sniff(&gz)?, Envelope::Gzip);
    assert_eq!(from_bytes(&gz)?, sample());
    Ok(())
}

#[test]
fn zlib_document() -> Result<()> {
    let raw = to_bytes(&sample())?;
    let mut enc = ZlibEncoder::new(vec![], Compression::best());
    enc.write_all(&raw)?;
    let z = enc.finish()?;

    assert_eq!(Envelope::sniff(&z)?, Envelope::Zlib);
    assert_eq!(from_bytes(&z)?, sample());
    Ok(())
}

#[test]
fn compressed_round_trip() -> Result<()> {
    for envelope in [Envelope::Uncompressed, Envelope::Gzip, Envelope::Zlib] {
        let bs = to_bytes_compressed(&sample(), envelope)?;
        assert_eq!(Envelope::sniff(&bs)?, envelope);
        assert_eq!(from_bytes(&bs)?, sample());
        assert_eq!(from_reader(bs.as_slice())?, sample());
    }
    Ok(())
}

#[test]
fn uncompressed_is_borrowed() -> Result<()> {
    let raw = to_bytes(&sample())?;
    let out = Envelope::Uncompressed.decompress(&raw)?;
    assert!(matches!(out, std::borrow::Cow::Borrowed(_)));
    Ok(())
}

#[test]
fn corrupt_gzip_is_io_error() -> Result<()> {
    let mut gz = to_bytes_compressed(&sample(), Envelope::Gzip)?;
    let n = gz.len();
    // Damage the crc in the trailer.
    gz[n - 8] ^= 0xff;

    let err = from_bytes(&gz).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::Io(_)), "{}", err);
    Ok(())
}

#[test]
fn truncated_inside_gzip() -> Result<()> {
    let mut raw = to_bytes(&sample())?;
    raw.pop(); // drop the end tag
    let gz = Envelope::Gzip.compress(&raw)?;

    let err = from_bytes(&gz).unwrap_err();
    assert!(err.is_truncated());
    Ok(())
}
