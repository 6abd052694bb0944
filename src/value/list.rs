use std::slice;

use super::Value;
use crate::error::{Error, Result};
use crate::Tag;

/// An NBT list. Every element has the same tag, which is stored alongside the
/// elements so that empty lists still carry their element type.
///
/// An empty list with element tag [`Tag::End`] is how the game writes a list
/// with nothing in it. Pushing to such a list adopts the tag of the pushed
/// value.
#[derive(Debug, Clone, PartialEq)]
pub struct List {
    element: Tag,
    items: Vec<Value>,
}

impl Default for List {
    fn default() -> Self {
        Self::new(Tag::End)
    }
}

impl List {
    pub fn new(element: Tag) -> Self {
        Self {
            element,
            items: vec![],
        }
    }

    /// Build a list from values that must all share `element` as their tag.
    pub fn from_values(element: Tag, values: impl IntoIterator<Item = Value>) -> Result<Self> {
        let mut list = Self::new(element);
        for v in values {
            list.push(v)?;
        }
        Ok(list)
    }

    pub fn element_tag(&self) -> Tag {
        self.element
    }

    /// Append a value. Fails if its tag differs from the list's element tag.
    pub fn push(&mut self, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        if self.element == Tag::End && self.items.is_empty() {
            self.element = value.tag();
        }

        if value.tag() != self.element {
            return Err(Error::type_mismatch(self.element, value.tag()));
        }

        self.items.push(value);
        Ok(())
    }

    /// Used by the decoder, which has already checked the element tag.
    pub(crate) fn from_parts(element: Tag, items: Vec<Value>) -> Self {
        Self { element, items }
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Value> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.items
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for List {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
