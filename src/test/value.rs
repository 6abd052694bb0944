use crate::error::{ErrorKind, Result};
use crate::{Compound, List, NamedTag, Tag, Value};

#[test]
fn list_push_rejects_other_tags() -> Result<()> {
    let mut list = List::new(Tag::Int);
    list.push(1i32)?;

    let err = list.push(1i64).unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorKind::TypeMismatch {
            expected: Tag::Int,
            actual: Tag::Long
        }
    );
    assert_eq!(list.len(), 1);
    Ok(())
}

#[test]
fn end_list_adopts_first_tag() -> Result<()> {
    let mut list = List::default();
    assert_eq!(list.element_tag(), Tag::End);

    list.push("a")?;
    assert_eq!(list.element_tag(), Tag::String);
    assert!(list.push(1i8).is_err());
    Ok(())
}

#[test]
fn from_values_checks_every_value() {
    let ok = List::from_values(Tag::Byte, vec![Value::Byte(1), Value::Byte(2)]);
    assert_eq!(ok.map(|l| l.len()), Ok(2));

    let bad = List::from_values(Tag::Byte, vec![Value::Byte(1), Value::Short(2)]);
    assert!(bad.is_err());
}

#[test]
fn compound_remove_keeps_order() {
    let mut c = Compound::new().with("a", 1i8).with("b", 2i8).with("c", 3i8);
    assert_eq!(c.remove("a"), Some(Value::Byte(1)));
    assert_eq!(c.remove("a"), None);

    let keys: Vec<_> = c.keys().cloned().collect();
    assert_eq!(keys, ["b", "c"]);
}

#[test]
fn compound_get_mut() {
    let mut c = Compound::new().with("n", 1i32);
    if let Some(Value::Int(n)) = c.get_mut("n") {
        *n += 1;
    }
    assert_eq!(c.get("n"), Some(&Value::Int(2)));
    assert!(c.contains_key("n"));
    assert!(!c.contains_key("m"));
}

#[test]
fn compound_from_iter() {
    let c: Compound = vec![("x", 1i32), ("y", 2i32)].into_iter().collect();
    let members: Vec<_> = c.into_iter().collect();
    assert_eq!(
        members,
        [
            ("x".to_owned(), Value::Int(1)),
            ("y".to_owned(), Value::Int(2))
        ]
    );
}

#[test]
fn accessors() {
    assert_eq!(Value::Short(-3).as_i64(), Some(-3));
    assert_eq!(Value::Float(1.5).as_f64(), Some(1.5));
    assert_eq!(Value::String("s".into()).as_i64(), None);
    assert_eq!(Value::Int(1).as_str(), None);
    assert_eq!(Value::from(true), Value::Byte(1));
    assert_eq!(Value::from(255u8), Value::Byte(-1));
    assert_eq!(Value::from(vec![1i64]).tag(), Tag::LongArray);
}

#[test]
fn into_compound_on_other_root() {
    let err = NamedTag::new("", 1i32).into_compound().unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorKind::TypeMismatch {
            expected: Tag::Compound,
            actual: Tag::Int
        }
    );
}

#[test]
fn json_projection() -> Result<()> {
    let mut list = List::new(Tag::Short);
    list.push(1i16)?;
    list.push(2i16)?;

    let root = NamedTag::new(
        "",
        Compound::new()
            .with("z", "last?")
            .with("a", list)
            .with("bytes", vec![1i8, -1])
            .with("inner", Compound::new().with("f", 0.5f64)),
    );

    let json = serde_json::to_string(&root).unwrap();
    assert_eq!(
        json,
        r#"{"":{"z":"last?","a":[1,2],"bytes":[1,-1],"inner":{"f":0.5}}}"#
    );
    Ok(())
}
