mod compound;
mod list;
mod ser;

#[cfg(feature = "arbitrary1")]
mod arb;

pub use self::compound::Compound;
pub use self::list::List;

use crate::error::{Error, Result};
use crate::Tag;

/// Value is a complete NBT value. It owns its data, and compounds and lists
/// own their children. There is no variant for [`Tag::End`]: it only ever
/// appears in the binary form, to terminate a compound.
///
/// Keys live with whatever holds the value: a [`Compound`] maps keys to values,
/// a [`NamedTag`] pairs the document root with its name, and [`List`] elements
/// have no key at all.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
    ByteArray(Vec<i8>),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
    List(List),
    Compound(Compound),
}

impl Value {
    /// A default valued instance of the given tag: zero, an empty string, an
    /// empty array, list or compound. `None` for [`Tag::End`], which has no
    /// value.
    pub fn default_for(tag: Tag) -> Option<Value> {
        Some(match tag {
            Tag::End => return None,
            Tag::Byte => Value::Byte(0),
            Tag::Short => Value::Short(0),
            Tag::Int => Value::Int(0),
            Tag::Long => Value::Long(0),
            Tag::Float => Value::Float(0.0),
            Tag::Double => Value::Double(0.0),
            Tag::ByteArray => Value::ByteArray(vec![]),
            Tag::String => Value::String(String::new()),
            Tag::List => Value::List(List::default()),
            Tag::Compound => Value::Compound(Compound::new()),
            Tag::IntArray => Value::IntArray(vec![]),
            Tag::LongArray => Value::LongArray(vec![]),
        })
    }

    /// The tag this value is written with.
    pub fn tag(&self) -> Tag {
        match self {
            Value::Byte(_) => Tag::Byte,
            Value::Short(_) => Tag::Short,
            Value::Int(_) => Tag::Int,
            Value::Long(_) => Tag::Long,
            Value::Float(_) => Tag::Float,
            Value::Double(_) => Tag::Double,
            Value::String(_) => Tag::String,
            Value::ByteArray(_) => Tag::ByteArray,
            Value::IntArray(_) => Tag::IntArray,
            Value::LongArray(_) => Tag::LongArray,
            Value::List(_) => Tag::List,
            Value::Compound(_) => Tag::Compound,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Value::Byte(v) => Some(v as i64),
            Value::Short(v) => Some(v as i64),
            Value::Int(v) => Some(v as i64),
            Value::Long(v) => Some(v),
            Value::Float(v) => Some(v as i64),
            Value::Double(v) => Some(v as i64),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::Byte(v) => Some(v as f64),
            Value::Short(v) => Some(v as f64),
            Value::Int(v) => Some(v as f64),
            Value::Long(v) => Some(v as f64),
            Value::Float(v) => Some(v as f64),
            Value::Double(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            Value::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_compound(&self) -> Option<&Compound> {
        match self {
            Value::Compound(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_compound_mut(&mut self) -> Option<&mut Compound> {
        match self {
            Value::Compound(v) => Some(v),
            _ => None,
        }
    }
}

/// Create a default valued instance for a raw tag byte. Fails for bytes that
/// are not a known tag; returns `None` for the end tag. See
/// [`Value::default_for`].
pub fn create(tag: u8) -> Result<Option<Value>> {
    Ok(Value::default_for(Tag::try_from(tag)?))
}

/// A value along with its name. The root of every NBT document is a named
/// tag, usually a compound with an empty name.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "arbitrary1", derive(arbitrary::Arbitrary))]
pub struct NamedTag {
    pub name: String,
    pub value: Value,
}

impl NamedTag {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn as_compound(&self) -> Option<&Compound> {
        self.value.as_compound()
    }

    /// Take the root compound out of this tag. Fails if the root is some
    /// other kind of value.
    pub fn into_compound(self) -> Result<Compound> {
        match self.value {
            Value::Compound(c) => Ok(c),
            other => Err(Error::type_mismatch(Tag::Compound, other.tag())),
        }
    }
}

// ------------- From<T> impls -------------

macro_rules! from {
    ($type:ty, $variant:ident $(, $($part:tt)+)?) => {
        impl From<$type> for Value {
            fn from(val: $type) -> Self {
                Self::$variant(val$($($part)+)?)
            }
        }
        impl From<&$type> for Value {
            fn from(val: &$type) -> Self {
                Self::$variant(val.to_owned()$($($part)+)?)
            }
        }
    };
}
from!(i8, Byte);
from!(u8, Byte, as i8);
from!(i16, Short);
from!(u16, Short, as i16);
from!(i32, Int);
from!(u32, Int, as i32);
from!(i64, Long);
from!(u64, Long, as i64);
from!(f32, Float);
from!(f64, Double);
from!(String, String);
from!(&str, String, .to_owned());
from!(Vec<i8>, ByteArray);
from!(Vec<i32>, IntArray);
from!(Vec<i64>, LongArray);
from!(List, List);
from!(Compound, Compound);

impl From<bool> for Value {
    fn from(val: bool) -> Self {
        Self::Byte(i8::from(val))
    }
}
