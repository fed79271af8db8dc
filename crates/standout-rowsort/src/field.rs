//! Out-of-range tolerant field access.

/// Returns the field at the 0-based `index`, or `""` when the row is too short.
///
/// Rows of different lengths therefore sort deterministically: a missing
/// trailing field compares like an empty string, before any non-empty value.
///
/// # Example
///
/// ```
/// use standout_rowsort::field_at;
///
/// let row = ["Ringo Star"];
/// assert_eq!(field_at(&row, 0), "Ringo Star");
/// assert_eq!(field_at(&row, 2), "");
/// ```
pub fn field_at<'a, R, S>(row: &'a R, index: usize) -> &'a str
where
    R: AsRef<[S]> + ?Sized,
    S: AsRef<str> + 'a,
{
    row.as_ref().get(index).map_or("", |field| field.as_ref())
}
