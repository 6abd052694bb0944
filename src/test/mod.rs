use crate::error::ErrorKind;
use crate::{create, Tag, Value};

pub mod builder;
mod envelope;
mod value;

macro_rules! check_tags {
    {$($tag:ident = $val:literal),* $(,)?} => {
        $(
            assert_eq!(u8::from(Tag::$tag), $val);
            assert_eq!(Tag::try_from($val as u8).unwrap(), Tag::$tag);
        )*
    };
}

#[test]
fn exhaustive_tag_check() {
    check_tags! {
        End = 0,
        Byte = 1,
        Short = 2,
        Int = 3,
        Long = 4,
        Float = 5,
        Double = 6,
        ByteArray = 7,
        String = 8,
        List = 9,
        Compound = 10,
        IntArray = 11,
        LongArray = 12,
    }

    for value in 13..=u8::MAX {
        let err = Tag::try_from(value).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::UnknownType(value));
    }
}

#[test]
fn registry_creates_defaults() {
    for code in 1..=12u8 {
        let v = create(code).unwrap().unwrap();
        assert_eq!(u8::from(v.tag()), code);
    }

    assert_eq!(create(3).unwrap(), Some(Value::Int(0)));
    assert_eq!(create(8).unwrap(), Some(Value::String(String::new())));
    assert_eq!(create(0).unwrap(), None);
    assert_eq!(create(13).unwrap_err().kind(), &ErrorKind::UnknownType(13));
}

#[test]
fn error_impls_sync_send() {
    fn i<T: Clone + Send + Sync + std::error::Error>(_: T) {}
    i(crate::error::Error::unknown_type(13));
}
