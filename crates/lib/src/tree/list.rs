//! Sequence nodes for tree containers.
//!
//! [`List`] is the ordered-sequence node type. It keeps plain positional
//! semantics: elements are addressed by index, insertion splices at a
//! position (negative positions count from the end), and merging appends.

use super::value::Value;
use crate::tree::TreeError;

/// Resolves a signed splice position against a length.
///
/// Negative positions count backward from the end; a magnitude larger than
/// `len` is out of range. `position == len` addresses the slot past the last
/// element (append).
pub(crate) fn resolve_position(position: isize, len: usize) -> Result<usize, TreeError> {
    let magnitude = position.unsigned_abs();
    if magnitude > len {
        return Err(TreeError::OutOfRange { position, len });
    }
    Ok(if position < 0 {
        len - magnitude
    } else {
        magnitude
    })
}

/// Ordered sequence of values.
///
/// ```
/// # use acorn::tree::{List, Value};
/// let mut list = List::new();
/// list.push("first");
/// list.push("third");
/// list.insert(1, "second").unwrap();
///
/// assert_eq!(list.get(1), Some(&Value::Text("second".into())));
/// assert_eq!(list.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct List {
    items: Vec<Value>,
}

impl List {
    /// Creates a new empty list
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Returns the number of items in the list
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the list is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends a value to the end of the list
    pub fn push(&mut self, value: impl Into<Value>) {
        self.items.push(value.into());
    }

    /// Inserts a value at a splice position.
    ///
    /// Negative positions count from the end: `-1` inserts just before the
    /// last element. Fails with [`TreeError::OutOfRange`] when the position's
    /// magnitude exceeds the element count; the list is left unmodified.
    pub fn insert(&mut self, position: isize, value: impl Into<Value>) -> Result<(), TreeError> {
        let index = resolve_position(position, self.items.len())?;
        self.items.insert(index, value.into());
        Ok(())
    }

    /// Gets a value by index
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    /// Gets a mutable reference to a value by index
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.items.get_mut(index)
    }

    /// Replaces the value at an index, returning the old value
    pub fn set(&mut self, index: usize, value: impl Into<Value>) -> Option<Value> {
        let slot = self.items.get_mut(index)?;
        Some(std::mem::replace(slot, value.into()))
    }

    /// Removes and returns the value at an index, shifting later elements
    pub fn remove(&mut self, index: usize) -> Option<Value> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// Returns the index of the first element equal to `value`
    pub fn position_of(&self, value: &Value) -> Option<usize> {
        self.items.iter().position(|v| v == value)
    }

    /// Merges another list into this one by appending its elements.
    ///
    /// Positions never conflict: incoming elements keep their relative order
    /// after the existing ones.
    pub fn merge(&mut self, other: &List) {
        self.items.extend(other.items.iter().cloned());
    }

    /// Returns an iterator over the values in order
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Value> {
        self.items.iter()
    }

    /// Returns a mutable iterator over the values in order
    pub fn iter_mut(&mut self) -> impl DoubleEndedIterator<Item = &mut Value> {
        self.items.iter_mut()
    }

    /// Clears all items from the list
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Consumes the list, returning the underlying vector
    pub fn into_vec(self) -> Vec<Value> {
        self.items
    }

    /// Returns the elements as a slice
    pub fn as_slice(&self) -> &[Value] {
        &self.items
    }
}

impl<T: Into<Value>> From<Vec<T>> for List {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Into<Value>> FromIterator<T> for List {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl IntoIterator for List {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
