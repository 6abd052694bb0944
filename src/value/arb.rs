use arbitrary::{Arbitrary, Unstructured};

use super::{Compound, List, Value};
use crate::Tag;

fn homogeneous<'a, T, F>(u: &mut Unstructured<'a>, element: Tag, f: F) -> arbitrary::Result<List>
where
    F: FnMut(T) -> Value,
    T: Arbitrary<'a>,
{
    let items = u
        .arbitrary_iter::<T>()?
        .collect::<arbitrary::Result<Vec<_>>>()?
        .into_iter()
        .map(f)
        .collect();
    Ok(List::from_parts(element, items))
}

fn arb_list(u: &mut Unstructured) -> arbitrary::Result<List> {
    let element = u.arbitrary::<Tag>()?;
    match element {
        Tag::End => Ok(List::new(Tag::End)),
        Tag::Byte => homogeneous(u, element, Value::Byte),
        Tag::Short => homogeneous(u, element, Value::Short),
        Tag::Int => homogeneous(u, element, Value::Int),
        Tag::Long => homogeneous(u, element, Value::Long),
        Tag::Float => homogeneous(u, element, Value::Float),
        Tag::Double => homogeneous(u, element, Value::Double),
        Tag::ByteArray => homogeneous(u, element, Value::ByteArray),
        Tag::String => homogeneous(u, element, Value::String),
        Tag::IntArray => homogeneous(u, element, Value::IntArray),
        Tag::LongArray => homogeneous(u, element, Value::LongArray),
        Tag::Compound => homogeneous(u, element, Value::Compound),
        Tag::List => {
            // make a list of lists
            let len = u.arbitrary_len::<Value>()?;
            let mut items = vec![];
            for _ in 0..len {
                items.push(Value::List(arb_list(u)?));
            }
            Ok(List::from_parts(element, items))
        }
    }
}

impl<'a> Arbitrary<'a> for Compound {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let members: Vec<(String, Value)> = u.arbitrary()?;
        Ok(members.into_iter().collect())
    }
}

impl<'a> Arbitrary<'a> for Value {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        Ok(match u.arbitrary::<Tag>()? {
            Tag::End => return Err(arbitrary::Error::IncorrectFormat),
            Tag::Byte => Value::Byte(u.arbitrary()?),
            Tag::Short => Value::Short(u.arbitrary()?),
            Tag::Int => Value::Int(u.arbitrary()?),
            Tag::Long => Value::Long(u.arbitrary()?),
            Tag::Float => Value::Float(u.arbitrary()?),
            Tag::Double => Value::Double(u.arbitrary()?),
            Tag::ByteArray => Value::ByteArray(u.arbitrary()?),
            Tag::String => Value::String(u.arbitrary()?),
            Tag::Compound => Value::Compound(u.arbitrary()?),
            Tag::IntArray => Value::IntArray(u.arbitrary()?),
            Tag::LongArray => Value::LongArray(u.arbitrary()?),

            // Lists need to all be the same type.
            Tag::List => Value::List(arb_list(u)?),
        })
    }
}
