//! Plain-text rendering of rows, mostly for debugging and examples.

/// Formats a labelled block of rows, one line per row with fields joined by `sep`.
///
/// The block starts with a blank line and `"{label}:"`, and every row line ends
/// with a newline.
///
/// # Example
///
/// ```
/// use standout_rowsort::format_rows;
///
/// let rows = vec![vec!["Ringo Star"], vec!["Paul McCartney", "1963"]];
/// assert_eq!(
///     format_rows("By author", &rows, ", "),
///     "\nBy author:\nRingo Star\nPaul McCartney, 1963\n"
/// );
/// ```
pub fn format_rows<R, S>(label: &str, rows: &[R], sep: &str) -> String
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let mut out = format!("\n{label}:\n");
    for row in rows {
        for (i, field) in row.as_ref().iter().enumerate() {
            if i > 0 {
                out.push_str(sep);
            }
            out.push_str(field.as_ref());
        }
        out.push('\n');
    }
    out
}
