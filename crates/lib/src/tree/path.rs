//! Dot-notation paths for hierarchical container access.
//!
//! A path addresses a nested value through successive map lookups, with each
//! segment separated by a dot: `"user.profile.name"`. Segments that parse as
//! an unsigned integer index into sequence nodes during traversal.
//!
//! The [`Path`]/[`PathBuf`] pair follows the borrowed/owned pattern of
//! `std::path::Path`/`PathBuf`. Any string is a usable path: empty segments
//! (leading, trailing, or doubled dots) are skipped during iteration, and
//! [`PathBuf`] construction normalizes them away entirely.
//!
//! # Usage
//!
//! ```
//! use acorn::tree::{Path, PathBuf};
//!
//! // Borrow any string as a path
//! let path = Path::new("user.profile.name");
//! assert_eq!(path.components().count(), 3);
//!
//! // Build incrementally
//! let path = PathBuf::new().push("user").push("profile.name");
//! assert_eq!(path.as_str(), "user.profile.name");
//! ```

use std::{borrow::Borrow, fmt, ops::Deref, str::FromStr};

/// Normalizes a path string by collapsing dots and empty segments.
///
/// - `""` stays empty (the root)
/// - `".user"` / `"user."` become `"user"`
/// - `"user..profile"` becomes `"user.profile"`
/// - `"..."` collapses to the empty path
pub fn normalize(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    input
        .split('.')
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join(".")
}

/// A borrowed dot-notation path.
///
/// `Path` is an unsized wrapper over `str` and is always used behind a
/// reference, exactly like `std::path::Path`. Iteration skips empty segments,
/// so un-normalized strings still traverse correctly.
#[derive(Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Path {
    inner: str,
}

impl Path {
    /// Borrows a string as a `Path`.
    pub fn new<S: AsRef<str> + ?Sized>(s: &S) -> &Path {
        // SAFETY: Path is repr(transparent) over str
        unsafe { &*(s.as_ref() as *const str as *const Path) }
    }

    /// Returns an iterator over the non-empty path segments.
    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.inner.split('.').filter(|s| !s.is_empty())
    }

    /// Returns the number of segments in the path.
    pub fn len(&self) -> usize {
        self.components().count()
    }

    /// Returns `true` if the path has no segments.
    pub fn is_empty(&self) -> bool {
        self.components().next().is_none()
    }

    /// Returns the last segment of the path, or `None` if empty.
    pub fn last(&self) -> Option<&str> {
        self.inner.split('.').filter(|s| !s.is_empty()).next_back()
    }

    /// Returns the path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Converts this `Path` to an owned, normalized [`PathBuf`].
    pub fn to_path_buf(&self) -> PathBuf {
        PathBuf::normalize(&self.inner)
    }
}

/// An owned, normalized dot-notation path.
///
/// Construction always normalizes: `PathBuf::from_str` is infallible and
/// `push` accepts whole sub-paths as well as single segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PathBuf {
    inner: String,
}

impl PathBuf {
    /// Creates a new empty path.
    pub fn new() -> Self {
        Self {
            inner: String::new(),
        }
    }

    /// Creates a `PathBuf` by normalizing the input string.
    pub fn normalize(path: &str) -> Self {
        Self {
            inner: normalize(path),
        }
    }

    /// Appends a path fragment, normalizing it first.
    ///
    /// Accepts single segments (`"user"`) and whole sub-paths
    /// (`"profile.name"`); empty fragments are ignored.
    pub fn push(mut self, fragment: impl AsRef<str>) -> Self {
        let normalized = normalize(fragment.as_ref());
        if normalized.is_empty() {
            return self;
        }

        if self.inner.is_empty() {
            self.inner = normalized;
        } else {
            self.inner.push('.');
            self.inner.push_str(&normalized);
        }
        self
    }

    /// Joins this path with another path.
    pub fn join(self, other: impl AsRef<Path>) -> Self {
        self.push(other.as_ref().as_str())
    }

    /// Returns the parent path, or `None` if this path has at most one
    /// segment.
    pub fn parent(&self) -> Option<PathBuf> {
        self.inner.rfind('.').map(|last_dot| PathBuf {
            inner: self.inner[..last_dot].to_string(),
        })
    }

    /// Returns the path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.inner
    }
}

impl Deref for PathBuf {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        Path::new(self.inner.as_str())
    }
}

impl AsRef<Path> for PathBuf {
    fn as_ref(&self) -> &Path {
        self
    }
}

impl AsRef<Path> for Path {
    fn as_ref(&self) -> &Path {
        self
    }
}

impl AsRef<Path> for str {
    fn as_ref(&self) -> &Path {
        Path::new(self)
    }
}

impl AsRef<Path> for String {
    fn as_ref(&self) -> &Path {
        Path::new(self)
    }
}

impl AsRef<str> for Path {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl AsRef<str> for PathBuf {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl Borrow<Path> for PathBuf {
    fn borrow(&self) -> &Path {
        self
    }
}

impl FromStr for PathBuf {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::normalize(s))
    }
}

impl From<&Path> for PathBuf {
    fn from(path: &Path) -> Self {
        path.to_path_buf()
    }
}

impl From<&str> for PathBuf {
    fn from(s: &str) -> Self {
        Self::normalize(s)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inner.is_empty() {
            write!(f, "(empty path)")
        } else {
            write!(f, "{}", &self.inner)
        }
    }
}

impl fmt::Display for PathBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.deref(), f)
    }
}

/// Constructs a [`PathBuf`] from one or more fragments.
///
/// ```
/// use acorn::path;
///
/// let p = path!("user", "profile", "name");
/// assert_eq!(p.as_str(), "user.profile.name");
///
/// let base = "user";
/// let p = path!(base, "profile.name");
/// assert_eq!(p.as_str(), "user.profile.name");
/// ```
#[macro_export]
macro_rules! path {
    () => {
        $crate::tree::PathBuf::new()
    };
    ($($fragment:expr),+ $(,)?) => {{
        let mut path = $crate::tree::PathBuf::new();
        $(
            path = path.push($fragment);
        )+
        path
    }};
}
