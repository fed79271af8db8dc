//! Column keys and sort specs.
//!
//! A [`ColumnKey`] is a signed, 1-based column reference: the magnitude picks
//! the column and the sign picks the [`Dir`]. A [`SortSpec`] is the ordered,
//! non-empty list of keys used as primary, secondary, ... tie-breakers.

use std::cmp::Ordering;
use std::fmt;
use std::num::NonZeroI64;
use std::str::FromStr;

use crate::error::{Result, RowSortError};
use crate::sort::{compare_rows, sort_by};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl Dir {
    /// Applies this direction to an ordering.
    ///
    /// For `Asc`, returns the ordering unchanged.
    /// For `Desc`, reverses the ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }
}

/// A signed, 1-based column reference.
///
/// `3` sorts the third column ascending, `-3` sorts it descending. Zero is
/// rejected.
///
/// # Example
///
/// ```
/// use standout_rowsort::{ColumnKey, Dir};
///
/// let key = ColumnKey::new(-3).unwrap();
/// assert_eq!(key.position(), 3);
/// assert_eq!(key.index(), 2);
/// assert_eq!(key.dir(), Dir::Desc);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColumnKey(NonZeroI64);

impl ColumnKey {
    /// Creates a key from a signed 1-based column number.
    ///
    /// `i64::MIN` is rejected so that every key can be negated.
    pub fn new(key: i64) -> Result<Self> {
        if key == i64::MIN {
            return Err(RowSortError::InvalidKey(key.to_string()));
        }
        NonZeroI64::new(key)
            .map(ColumnKey)
            .ok_or(RowSortError::ZeroColumnKey)
    }

    /// Creates an ascending key for the 1-based `position`.
    pub fn asc(position: usize) -> Result<Self> {
        Self::with_dir(position, Dir::Asc)
    }

    /// Creates a descending key for the 1-based `position`.
    pub fn desc(position: usize) -> Result<Self> {
        Self::with_dir(position, Dir::Desc)
    }

    /// Creates a key for the 1-based `position` with an explicit direction.
    pub fn with_dir(position: usize, dir: Dir) -> Result<Self> {
        let magnitude = i64::try_from(position)
            .map_err(|_| RowSortError::InvalidKey(position.to_string()))?;
        match dir {
            Dir::Asc => Self::new(magnitude),
            Dir::Desc => Self::new(-magnitude),
        }
    }

    /// Returns the signed key as given.
    pub fn get(self) -> i64 {
        self.0.get()
    }

    /// Returns the 1-based column position.
    pub fn position(self) -> usize {
        usize::try_from(self.0.get().unsigned_abs()).unwrap_or(usize::MAX)
    }

    /// Returns the 0-based field index.
    pub fn index(self) -> usize {
        self.position() - 1
    }

    /// Returns the sort direction encoded in the sign.
    pub fn dir(self) -> Dir {
        if self.0.get() < 0 {
            Dir::Desc
        } else {
            Dir::Asc
        }
    }

    /// Returns the same column with the opposite direction.
    pub fn reversed(self) -> Self {
        ColumnKey(-self.0)
    }
}

impl TryFrom<i64> for ColumnKey {
    type Error = RowSortError;

    fn try_from(key: i64) -> Result<Self> {
        ColumnKey::new(key)
    }
}

impl From<ColumnKey> for i64 {
    fn from(key: ColumnKey) -> i64 {
        key.get()
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ColumnKey {
    type Err = RowSortError;

    fn from_str(s: &str) -> Result<Self> {
        let key: i64 = s
            .trim()
            .parse()
            .map_err(|_| RowSortError::InvalidKey(s.to_string()))?;
        ColumnKey::new(key)
    }
}

/// An ordered, non-empty list of column keys.
///
/// The first key is the primary sort key, the second breaks its ties, and so
/// on. Repeating a key is allowed but has no further effect.
///
/// # Example
///
/// ```
/// use standout_rowsort::SortSpec;
///
/// let spec: SortSpec = "-1, 3, 2".parse().unwrap();
/// assert_eq!(spec.to_string(), "-1,3,2");
///
/// let mut rows = vec![vec!["b", "x"], vec!["a", "y"]];
/// spec.sort(&mut rows);
/// assert_eq!(rows[0], vec!["b", "x"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SortSpec {
    keys: Vec<ColumnKey>,
}

impl SortSpec {
    /// Creates a spec from already validated keys.
    pub fn new(keys: impl IntoIterator<Item = ColumnKey>) -> Result<Self> {
        let keys: Vec<ColumnKey> = keys.into_iter().collect();
        if keys.is_empty() {
            return Err(RowSortError::EmptySortSpec);
        }
        Ok(SortSpec { keys })
    }

    /// Creates a spec from signed 1-based column numbers.
    ///
    /// Fails on the first zero key, or when `indices` is empty.
    pub fn from_indices(indices: &[i64]) -> Result<Self> {
        let keys = indices
            .iter()
            .map(|&key| ColumnKey::new(key))
            .collect::<Result<Vec<_>>>()?;
        SortSpec::new(keys)
    }

    /// Returns the keys in priority order.
    pub fn keys(&self) -> &[ColumnKey] {
        &self.keys
    }

    /// Returns an iterator over the keys in priority order.
    pub fn iter(&self) -> std::slice::Iter<'_, ColumnKey> {
        self.keys.iter()
    }

    /// Number of keys. Never zero.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the spec with every key's direction flipped.
    pub fn reversed(&self) -> Self {
        SortSpec {
            keys: self.keys.iter().map(|key| key.reversed()).collect(),
        }
    }

    /// Compares two rows under this spec.
    pub fn compare<P, Q, S, T>(&self, p: &P, q: &Q) -> Ordering
    where
        P: AsRef<[S]> + ?Sized,
        Q: AsRef<[T]> + ?Sized,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        compare_rows(p, q, self)
    }

    /// Sorts `rows` in place under this spec. The sort is stable.
    pub fn sort<R, S>(&self, rows: &mut [R])
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        sort_by(rows, self)
    }
}

impl<'a> IntoIterator for &'a SortSpec {
    type Item = &'a ColumnKey;
    type IntoIter = std::slice::Iter<'a, ColumnKey>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, key) in self.keys.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", key)?;
        }
        Ok(())
    }
}

impl FromStr for SortSpec {
    type Err = RowSortError;

    /// Parses comma-separated signed column numbers, e.g. `"-1,3,2"`.
    fn from_str(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            return Err(RowSortError::EmptySortSpec);
        }
        let keys = s
            .split(',')
            .map(str::parse)
            .collect::<Result<Vec<ColumnKey>>>()?;
        SortSpec::new(keys)
    }
}
