//! Rowsort - Stable multi-column sorting for rows of text fields.
//!
//! Rows are any sequence of string-like fields (`Vec<String>`, `Vec<&str>`,
//! `[&str; N]`, ...). Tables are mutable slices of rows and are sorted in place.
//! Columns are addressed either by signed 1-based index or by header name:
//!
//! - `3` sorts the third column ascending, `-3` descending
//! - `"year"` sorts the year column ascending, `"-year"` descending
//!
//! Several keys form a [`SortSpec`]: the first key decides, later keys break
//! ties, and rows that tie on every key keep their original order.
//!
//! # Quick Start
//!
//! ```rust
//! use standout_rowsort::{sort_by_headers, sort_by_indices, HeaderIndex};
//!
//! let mut rows = vec![
//!     vec!["John Lennon", "1968", "Let It Be"],
//!     vec!["Paul McCartney", "1963", "All My Loving"],
//!     vec!["Ringo Star"],
//! ];
//!
//! // Author descending, then title, then year.
//! sort_by_indices(&mut rows, &[-1, 3, 2]).unwrap();
//! assert_eq!(rows[0], vec!["Ringo Star"]);
//!
//! let headers = HeaderIndex::new(["author", "year", "title"]);
//! sort_by_headers(&headers, &mut rows, &["year", "author"]).unwrap();
//! assert_eq!(rows[0], vec!["Ringo Star"]);
//! assert_eq!(rows[1][0], "Paul McCartney");
//! ```
//!
//! # Comparison Rules
//!
//! | Situation | Behavior |
//! |-----------|----------|
//! | Field values | Compared as raw text, byte by byte |
//! | Row shorter than a key's column | Missing field compares as `""` |
//! | Negative key / `-name` | That key alone is reversed |
//! | Tie on every key | Original relative order is kept |
//! | Key `0` | Rejected with [`RowSortError::ZeroColumnKey`] |
//! | Unknown header name | Rejected with [`RowSortError::UnknownHeader`], rows untouched |

mod error;
mod field;
mod headers;
mod key;
mod render;
mod sort;

// Re-export public API
pub use error::{Result, RowSortError};
pub use field::field_at;
pub use headers::{HeaderIndex, REVERSE_PREFIX};
pub use key::{ColumnKey, Dir, SortSpec};
pub use render::format_rows;
pub use sort::{compare_rows, sort_by, sort_by_headers, sort_by_indices, RowSorter};
