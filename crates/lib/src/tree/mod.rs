//! Dot-notation tree containers.
//!
//! This module provides the main container type for Acorn. A [`Tree`] owns an
//! insertion-ordered map of string keys to [`Value`] nodes, which themselves
//! may be scalars, sequences ([`List`]), or nested maps (further [`Tree`]s).
//! Every value in the structure is addressable with a dot-notation path such
//! as `"user.profile.name"`; numeric segments index into sequence nodes.
//!
//! # Usage
//!
//! ```
//! use acorn::Tree;
//!
//! let mut tree = Tree::new();
//! tree.set("user.name", "Ann")?;
//! tree.set("user.roles", vec!["admin", "editor"])?;
//!
//! assert_eq!(tree.get("user.name").unwrap(), "Ann");
//! assert_eq!(tree.get("user.roles.1").unwrap(), "editor");
//! assert_eq!(tree.get_or("user.missing", "none"), "none");
//! # Ok::<(), acorn::tree::TreeError>(())
//! ```
//!
//! Containers are plain values: no locking, no global state, exclusive
//! single-owner mutation.

use std::{fmt, str::FromStr};

use indexmap::IndexMap;

// Submodules
pub mod errors;
pub mod list;
pub mod path;
pub mod value;

// Convenience re-exports for the core container types
pub use errors::TreeError;
pub use list::List;
pub use path::{Path, PathBuf};
pub use value::Value;

// Re-export the macro from the crate root
pub use crate::path;

use list::resolve_position;

/// An insertion-ordered, nested key-value container with dot-notation access.
///
/// # Core Operations
///
/// - **Path access**: [`get`](Tree::get), [`set`](Tree::set),
///   [`remove`](Tree::remove), [`contains`](Tree::contains)
/// - **Defaulted lookups**: [`get_or`](Tree::get_or),
///   [`get_or_else`](Tree::get_or_else) (the closure runs only on a miss)
/// - **Whole-tree transforms**: [`flatten`](Tree::flatten),
///   [`merge`](Tree::merge)
/// - **Positional insertion**: [`insert`](Tree::insert),
///   [`insert_before_key`](Tree::insert_before_key),
///   [`insert_after_key`](Tree::insert_after_key),
///   [`insert_after_value`](Tree::insert_after_value)
///
/// # Examples
///
/// ## Merge semantics
///
/// ```
/// # use acorn::Tree;
/// let mut base = Tree::new();
/// base.set("a", vec![1, 2])?;
/// base.set("m.x", 1)?;
///
/// let mut incoming = Tree::new();
/// incoming.set("a", vec![3])?;
/// incoming.set("m.y", 2)?;
///
/// base.merge(&incoming);
/// assert_eq!(*base.get("a.2").unwrap(), 3); // lists append
/// assert_eq!(*base.get("m.x").unwrap(), 1); // maps merge recursively
/// assert_eq!(*base.get("m.y").unwrap(), 2);
/// # Ok::<(), acorn::tree::TreeError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Tree {
    /// Top-level entries in insertion order
    entries: IndexMap<String, Value>,
}

impl Tree {
    /// Creates a new empty tree
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Returns the number of top-level entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the tree has no top-level entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if a value exists at the given path
    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.get(path).is_some()
    }

    /// Gets a value by dot-notation path (immutable reference).
    ///
    /// Returns `None` as soon as a segment is absent or an intermediate node
    /// is a scalar. Numeric segments index into sequence nodes.
    pub fn get(&self, path: impl AsRef<Path>) -> Option<&Value> {
        let mut segments = path.as_ref().components();
        let mut current = self.entries.get(segments.next()?)?;

        for segment in segments {
            current = match current {
                Value::Map(tree) => tree.entries.get(segment)?,
                Value::List(list) => list.get(segment.parse().ok()?)?,
                _ => return None,
            };
        }

        Some(current)
    }

    /// Gets a mutable reference to a value by dot-notation path
    pub fn get_mut(&mut self, path: impl AsRef<Path>) -> Option<&mut Value> {
        let mut segments = path.as_ref().components();
        let mut current = self.entries.get_mut(segments.next()?)?;

        for segment in segments {
            current = match current {
                Value::Map(tree) => tree.entries.get_mut(segment)?,
                Value::List(list) => list.get_mut(segment.parse().ok()?)?,
                _ => return None,
            };
        }

        Some(current)
    }

    /// Gets a value by path with automatic type conversion using `TryFrom`.
    ///
    /// Returns `None` if the path doesn't resolve or the conversion fails.
    ///
    /// ```
    /// # use acorn::Tree;
    /// let mut tree = Tree::new();
    /// tree.set("age", 30)?;
    ///
    /// assert_eq!(tree.get_as::<i64>("age"), Some(30));
    /// assert_eq!(tree.get_as::<&str>("age"), None);
    /// # Ok::<(), acorn::tree::TreeError>(())
    /// ```
    pub fn get_as<'a, T>(&'a self, path: impl AsRef<Path>) -> Option<T>
    where
        T: TryFrom<&'a Value, Error = TreeError>,
    {
        let value = self.get(path)?;
        T::try_from(value).ok()
    }

    /// Gets a value by path, or a default when the path doesn't resolve.
    pub fn get_or(&self, path: impl AsRef<Path>, default: impl Into<Value>) -> Value {
        match self.get(path) {
            Some(value) => value.clone(),
            None => default.into(),
        }
    }

    /// Gets a value by path, computing the default lazily.
    ///
    /// The closure is a deferred zero-argument computation: it runs only when
    /// the lookup misses, and its result is never stored back into the tree.
    pub fn get_or_else<V: Into<Value>>(
        &self,
        path: impl AsRef<Path>,
        default: impl FnOnce() -> V,
    ) -> Value {
        match self.get(path) {
            Some(value) => value.clone(),
            None => default().into(),
        }
    }

    /// Resolves several paths at once.
    ///
    /// Returns a single-level tree mapping each requested path string to its
    /// resolved value, or to a clone of `default` where the path misses.
    pub fn get_many<I, P>(&self, paths: I, default: impl Into<Value>) -> Tree
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let default = default.into();
        paths
            .into_iter()
            .map(|p| {
                let path = p.as_ref();
                let value = match self.get(path) {
                    Some(value) => value.clone(),
                    None => default.clone(),
                };
                (path.as_str().to_string(), value)
            })
            .collect()
    }

    /// Sets a value at a dot-notation path, returning the previous value at
    /// the final segment if any.
    ///
    /// Intermediate map nodes are created as needed. Sequence nodes are
    /// written through in place when the segment indexes them, mirroring
    /// [`get`](Tree::get): an existing index replaces that element, one past
    /// the end appends. A scalar intermediate, or a sequence the segment
    /// cannot index, is replaced by a fresh map. Fails only when the path
    /// normalizes to the empty path.
    pub fn set(
        &mut self,
        path: impl AsRef<Path>,
        value: impl Into<Value>,
    ) -> Result<Option<Value>, TreeError> {
        let path = path.as_ref();
        let segments: Vec<&str> = path.components().collect();
        let Some((first, rest)) = segments.split_first() else {
            return Err(TreeError::InvalidPath {
                path: path.as_str().to_string(),
            });
        };

        if rest.is_empty() {
            return Ok(self.entries.insert((*first).to_string(), value.into()));
        }
        let entry = self
            .entries
            .entry((*first).to_string())
            .or_insert_with(|| Value::Map(Tree::new()));
        Ok(write_segments(entry, rest, value.into()))
    }

    /// Applies several path/value pairs in iteration order
    pub fn set_many<I, P, V>(&mut self, pairs: I) -> Result<(), TreeError>
    where
        I: IntoIterator<Item = (P, V)>,
        P: AsRef<Path>,
        V: Into<Value>,
    {
        for (path, value) in pairs {
            self.set(path, value)?;
        }
        Ok(())
    }

    /// Replaces the entire tree, returning the previous contents
    pub fn replace_root(&mut self, entries: impl Into<Tree>) -> Tree {
        std::mem::replace(self, entries.into())
    }

    /// Removes the value at a dot-notation path, returning it.
    ///
    /// Unlike [`set`](Tree::set), the traversal never creates intermediate
    /// nodes: a missing or non-map intermediate means there is nothing to
    /// remove and `None` is returned. Remaining entries keep their order.
    pub fn remove(&mut self, path: impl AsRef<Path>) -> Option<Value> {
        let segments: Vec<&str> = path.as_ref().components().collect();
        let (last, parents) = segments.split_last()?;

        let mut tree = self;
        for segment in parents {
            tree = match tree.entries.get_mut(*segment) {
                Some(Value::Map(t)) => t,
                _ => return None,
            };
        }

        tree.entries.shift_remove(*last)
    }

    /// Removes several paths, returning a tree of path → removed value.
    ///
    /// Paths that don't resolve map to [`Value::Null`].
    pub fn remove_many<I, P>(&mut self, paths: I) -> Tree
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        paths
            .into_iter()
            .map(|p| {
                let key = p.as_ref().as_str().to_string();
                let removed = self.remove(p.as_ref()).unwrap_or(Value::Null);
                (key, removed)
            })
            .collect()
    }

    /// Flattens the tree into a single-level map.
    ///
    /// Keys of the result are the path segments of each leaf joined with
    /// `glue`. With `indexed = true`, sequence nodes are descended into using
    /// their numeric indices as segments; with `indexed = false` sequence
    /// nodes are treated as leaf values.
    ///
    /// ```
    /// # use acorn::Tree;
    /// let mut tree = Tree::new();
    /// tree.set("a.b", 1)?;
    /// tree.set("a.c", 2)?;
    ///
    /// let flat = tree.flatten("/", true)?;
    /// assert_eq!(*flat.as_map().get("a/b").unwrap(), 1);
    /// assert_eq!(*flat.as_map().get("a/c").unwrap(), 2);
    /// # Ok::<(), acorn::tree::TreeError>(())
    /// ```
    pub fn flatten(&self, glue: &str, indexed: bool) -> Result<Tree, TreeError> {
        if glue.is_empty() {
            return Err(TreeError::InvalidArgument {
                reason: "flatten glue must be a non-empty string".to_string(),
            });
        }

        let mut out = Tree::new();
        for (key, value) in &self.entries {
            flatten_node(value, glue, indexed, key, &mut out);
        }
        Ok(out)
    }

    /// Flattens only through map nodes, treating sequences as leaves.
    ///
    /// Shorthand for `flatten(glue, false)`.
    pub fn flatten_assoc(&self, glue: &str) -> Result<Tree, TreeError> {
        self.flatten(glue, false)
    }

    /// Merges another tree into this one.
    ///
    /// Keys present in both trees with map values on both sides merge
    /// recursively; sequence values on both sides append; any other conflict
    /// is resolved by the incoming value overwriting the existing one. Keys
    /// only present in the incoming tree are added in its iteration order.
    pub fn merge(&mut self, other: &Tree) {
        for (key, incoming) in &other.entries {
            match self.entries.get_mut(key) {
                Some(existing) => existing.merge(incoming),
                None => {
                    self.entries.insert(key.clone(), incoming.clone());
                }
            }
        }
    }

    /// Merges several trees in sequence; each source is fully applied before
    /// the next one.
    pub fn merge_all<'a>(&mut self, sources: impl IntoIterator<Item = &'a Tree>) {
        for source in sources {
            self.merge(source);
        }
    }

    /// Inserts a value at a splice position among the top-level entries.
    ///
    /// Negative positions count from the end. Fails with
    /// [`TreeError::OutOfRange`] when the position's magnitude exceeds the
    /// entry count; the tree is left unmodified. The inserted value receives
    /// the next free numeric key.
    pub fn insert(&mut self, value: impl Into<Value>, position: isize) -> Result<(), TreeError> {
        let index = resolve_position(position, self.entries.len())?;
        let key = self.next_numeric_key();
        self.entries.shift_insert(index, key, value.into());
        Ok(())
    }

    /// Inserts a value just before an existing key.
    ///
    /// Fails with [`TreeError::KeyNotFound`] when the anchor key is absent.
    pub fn insert_before_key(
        &mut self,
        value: impl Into<Value>,
        key: impl AsRef<str>,
    ) -> Result<(), TreeError> {
        let key = key.as_ref();
        let position = self
            .entries
            .get_index_of(key)
            .ok_or_else(|| TreeError::KeyNotFound {
                key: key.to_string(),
            })?;
        self.insert(value, position as isize)
    }

    /// Inserts a value just after an existing key.
    ///
    /// Fails with [`TreeError::KeyNotFound`] when the anchor key is absent.
    pub fn insert_after_key(
        &mut self,
        value: impl Into<Value>,
        key: impl AsRef<str>,
    ) -> Result<(), TreeError> {
        let key = key.as_ref();
        let position = self
            .entries
            .get_index_of(key)
            .ok_or_else(|| TreeError::KeyNotFound {
                key: key.to_string(),
            })?;
        self.insert(value, (position + 1) as isize)
    }

    /// Inserts a value just after the first entry equal to `anchor`.
    ///
    /// Fails with [`TreeError::ValueNotFound`] when no entry matches.
    pub fn insert_after_value(
        &mut self,
        value: impl Into<Value>,
        anchor: &Value,
    ) -> Result<(), TreeError> {
        let position = self
            .entries
            .values()
            .position(|v| v == anchor)
            .ok_or(TreeError::ValueNotFound)?;
        self.insert(value, (position + 1) as isize)
    }

    /// Renames a top-level key in place, keeping its position and value.
    ///
    /// Returns false when the key is absent.
    pub fn replace_key(&mut self, from: impl AsRef<str>, to: impl Into<String>) -> bool {
        let from = from.as_ref();
        let Some(index) = self.entries.get_index_of(from) else {
            return false;
        };
        let Some(value) = self.entries.shift_remove(from) else {
            return false;
        };
        self.entries.shift_insert(index, to.into(), value);
        true
    }

    /// Prepends a key-value pair, overwriting the key if it already exists
    pub fn prepend(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.shift_insert(0, key.into(), value.into());
    }

    /// Returns the top-level entries whose keys start with `prefix`.
    ///
    /// With `strip_prefix = true`, the prefix is removed from the result's
    /// keys.
    pub fn filter_prefixed(&self, prefix: &str, strip_prefix: bool) -> Tree {
        self.entries
            .iter()
            .filter(|(key, _)| key.starts_with(prefix))
            .map(|(key, value)| {
                let key = if strip_prefix {
                    key[prefix.len()..].to_string()
                } else {
                    key.clone()
                };
                (key, value.clone())
            })
            .collect()
    }

    /// Selects the given top-level keys into a new tree.
    ///
    /// With `remove = true`, the matched entries are extracted from this
    /// tree. Missing keys are skipped.
    pub fn filter_keys<I, S>(&mut self, keys: I, remove: bool) -> Tree
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out = Tree::new();
        for key in keys {
            let key = key.as_ref();
            if remove {
                if let Some(value) = self.entries.shift_remove(key) {
                    out.entries.insert(key.to_string(), value);
                }
            } else if let Some(value) = self.entries.get(key) {
                out.entries.insert(key.to_string(), value.clone());
            }
        }
        out
    }

    /// Returns true when any top-level key is non-numeric
    pub fn is_assoc(&self) -> bool {
        self.entries.keys().any(|key| key.parse::<u64>().is_err())
    }

    /// Returns an iterator over the top-level entries in insertion order
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.entries.iter()
    }

    /// Returns a mutable iterator over the top-level entries
    pub fn iter_mut(&mut self) -> indexmap::map::IterMut<'_, String, Value> {
        self.entries.iter_mut()
    }

    /// Returns an iterator over the top-level keys
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    /// Returns an iterator over the top-level values
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }

    /// Returns a reference to the underlying ordered map
    pub fn as_map(&self) -> &IndexMap<String, Value> {
        &self.entries
    }

    /// Consumes the tree, returning the underlying ordered map
    pub fn into_inner(self) -> IndexMap<String, Value> {
        self.entries
    }

    /// Converts to a JSON string representation for display and export
    pub fn to_json_string(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Smallest decimal key greater than every existing numeric key.
    fn next_numeric_key(&self) -> String {
        self.entries
            .keys()
            .filter_map(|key| key.parse::<u64>().ok())
            .max()
            .map_or(0, |max| max + 1)
            .to_string()
    }
}

/// Applies the remaining path segments to a node, writing `value` at the
/// final segment and returning the value it displaced.
///
/// Sequence nodes are descended in place when the segment indexes them; on
/// the final segment an existing index replaces that element and `len`
/// appends. Any other non-map node is replaced by a fresh map keyed by the
/// segment.
fn write_segments(node: &mut Value, segments: &[&str], value: Value) -> Option<Value> {
    let Some((first, rest)) = segments.split_first() else {
        return None;
    };

    if let Value::List(list) = node {
        if let Ok(index) = first.parse::<usize>() {
            if index < list.len() {
                if rest.is_empty() {
                    return list.set(index, value);
                }
                if let Some(slot) = list.get_mut(index) {
                    return write_segments(slot, rest, value);
                }
            } else if index == list.len() {
                if rest.is_empty() {
                    list.push(value);
                    return None;
                }
                list.push(Value::Map(Tree::new()));
                if let Some(slot) = list.get_mut(index) {
                    return write_segments(slot, rest, value);
                }
                return None;
            }
        }
    }

    if !node.is_map() {
        *node = Value::Map(Tree::new());
    }
    match node {
        Value::Map(tree) => {
            if rest.is_empty() {
                tree.entries.insert((*first).to_string(), value)
            } else {
                let entry = tree
                    .entries
                    .entry((*first).to_string())
                    .or_insert_with(|| Value::Map(Tree::new()));
                write_segments(entry, rest, value)
            }
        }
        _ => None,
    }
}

/// Depth-first flatten of a single node into `out` under the given key.
fn flatten_node(node: &Value, glue: &str, indexed: bool, key: &str, out: &mut Tree) {
    match node {
        Value::Map(tree) => {
            for (child_key, child) in &tree.entries {
                let flat_key = format!("{key}{glue}{child_key}");
                flatten_node(child, glue, indexed, &flat_key, out);
            }
        }
        Value::List(list) if indexed => {
            for (index, child) in list.iter().enumerate() {
                let flat_key = format!("{key}{glue}{index}");
                flatten_node(child, glue, indexed, &flat_key, out);
            }
        }
        leaf => {
            out.entries.insert(key.to_string(), leaf.clone());
        }
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let mut first = true;
        for (key, value) in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value}")?;
            first = false;
        }
        write!(f, "}}")
    }
}

impl FromIterator<(String, Value)> for Tree {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<(&'a str, Value)> for Tree {
    fn from_iter<T: IntoIterator<Item = (&'a str, Value)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.to_string(), value))
                .collect(),
        }
    }
}

impl Extend<(String, Value)> for Tree {
    fn extend<T: IntoIterator<Item = (String, Value)>>(&mut self, iter: T) {
        self.entries.extend(iter);
    }
}

impl From<IndexMap<String, Value>> for Tree {
    fn from(entries: IndexMap<String, Value>) -> Self {
        Self { entries }
    }
}

impl IntoIterator for Tree {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Tree {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromStr for Tree {
    type Err = crate::Error;

    /// Parses a tree from a JSON object string
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(serde_json::from_str(s)?)
    }
}

// Builder pattern methods
impl Tree {
    /// Builder method to set a value at a path and return self.
    ///
    /// Fragments that normalize to the empty path are ignored.
    pub fn with(mut self, path: impl AsRef<Path>, value: impl Into<Value>) -> Self {
        let _ = self.set(path, value);
        self
    }

    /// Builder method to set a sequence value
    pub fn with_list(self, path: impl AsRef<Path>, value: impl Into<List>) -> Self {
        self.with(path, Value::List(value.into()))
    }

    /// Builder method to set a nested map value
    pub fn with_tree(self, path: impl AsRef<Path>, value: impl Into<Tree>) -> Self {
        self.with(path, Value::Map(value.into()))
    }
}
