//! Multi-key row comparison and the stable sort it drives.

use std::cmp::Ordering;

use crate::error::Result;
use crate::field::field_at;
use crate::headers::HeaderIndex;
use crate::key::SortSpec;

/// Compares two rows key by key.
///
/// Each key's field is compared as raw text (byte order, no case folding, no
/// trimming, no numeric coercion) and the key's direction is applied. The first
/// key that tells the rows apart decides; if every key compares equal the rows
/// are `Equal`. Fields past the end of a row compare as `""`.
pub fn compare_rows<P, Q, S, T>(p: &P, q: &Q, spec: &SortSpec) -> Ordering
where
    P: AsRef<[S]> + ?Sized,
    Q: AsRef<[T]> + ?Sized,
    S: AsRef<str>,
    T: AsRef<str>,
{
    for key in spec {
        let index = key.index();
        let ordering = key.dir().apply(field_at(p, index).cmp(field_at(q, index)));
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

/// Sorts `rows` in place under `spec`.
///
/// The sort is stable: rows equal under every key keep their relative order.
pub fn sort_by<R, S>(rows: &mut [R], spec: &SortSpec)
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    tracing::trace!(rows = rows.len(), spec = %spec, "sorting rows");
    rows.sort_by(|p, q| compare_rows(p, q, spec));
}

/// Sorts `rows` in place by signed 1-based column numbers.
///
/// Negative numbers sort that column in reverse. Rows are left untouched when
/// a key is zero or no key is given.
///
/// # Example
///
/// ```
/// use standout_rowsort::sort_by_indices;
///
/// let mut rows = vec![
///     vec!["John Lennon", "1968"],
///     vec!["George Harrison", "1968"],
///     vec!["Paul McCartney", "1963"],
/// ];
/// sort_by_indices(&mut rows, &[2, -1]).unwrap();
/// assert_eq!(rows[0][0], "Paul McCartney");
/// assert_eq!(rows[1][0], "John Lennon");
/// ```
pub fn sort_by_indices<R, S>(rows: &mut [R], keys: &[i64]) -> Result<()>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let spec = SortSpec::from_indices(keys)?;
    sort_by(rows, &spec);
    Ok(())
}

/// Sorts `rows` in place by column header names.
///
/// Names prefixed with `-` sort that column in reverse. Any unknown name fails
/// the whole call before a single row moves.
pub fn sort_by_headers<R, S, N>(headers: &HeaderIndex, rows: &mut [R], names: &[N]) -> Result<()>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
    N: AsRef<str>,
{
    let spec = headers.resolve_all(names)?;
    sort_by(rows, &spec);
    Ok(())
}

/// Borrows a table so it can be re-sorted in several orders.
///
/// # Example
///
/// ```
/// use standout_rowsort::{HeaderIndex, RowSorter};
///
/// let headers = HeaderIndex::new(["author", "year"]);
/// let mut rows = vec![vec!["B", "1965"], vec!["A", "1968"]];
///
/// let mut sorter = RowSorter::new(&mut rows);
/// sorter.by_headers(&headers, &["author"]).unwrap();
/// assert_eq!(sorter.rows()[0][0], "A");
/// sorter.by_indices(&[2]).unwrap();
/// assert_eq!(sorter.rows()[0][0], "B");
/// ```
#[derive(Debug)]
pub struct RowSorter<'a, R> {
    rows: &'a mut [R],
}

impl<'a, R> RowSorter<'a, R> {
    /// Wraps a table.
    pub fn new(rows: &'a mut [R]) -> Self {
        RowSorter { rows }
    }

    /// Returns the rows in their current order.
    pub fn rows(&self) -> &[R] {
        &*self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if there are no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sorts by an already built spec.
    pub fn by<S>(&mut self, spec: &SortSpec) -> &mut Self
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        sort_by(self.rows, spec);
        self
    }

    /// Sorts by signed 1-based column numbers.
    pub fn by_indices<S>(&mut self, keys: &[i64]) -> Result<&mut Self>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        sort_by_indices(self.rows, keys)?;
        Ok(self)
    }

    /// Sorts by header names, resolved through `headers`.
    pub fn by_headers<S, N>(&mut self, headers: &HeaderIndex, names: &[N]) -> Result<&mut Self>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
        N: AsRef<str>,
    {
        sort_by_headers(headers, self.rows, names)?;
        Ok(self)
    }
}
