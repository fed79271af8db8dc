//! Header-name to column-key resolution.
//!
//! A [`HeaderIndex`] maps each column title to its 1-based position, and the
//! same title prefixed with `-` to the negated position, so `"-year"` sorts the
//! year column in reverse.

use std::collections::{HashMap, HashSet};

use crate::error::{Result, RowSortError};
use crate::key::{ColumnKey, SortSpec};

/// Prefix that requests a descending sort for a header name.
pub const REVERSE_PREFIX: &str = "-";

/// Lookup table from column names to [`ColumnKey`]s.
///
/// Built once from the table's title row and immutable afterwards.
///
/// Empty titles are skipped and cannot be addressed. When the same title
/// appears twice, the later column wins silently. The same holds when a title
/// collides with another title's `-` form: titles `["x", "-x"]` leave `"-x"`
/// pointing at column 2, not at column 1 reversed.
///
/// # Example
///
/// ```
/// use standout_rowsort::HeaderIndex;
///
/// let headers = HeaderIndex::new(["author", "year", "title"]);
/// assert_eq!(headers.resolve("title").unwrap().get(), 3);
/// assert_eq!(headers.resolve("-author").unwrap().get(), -1);
/// assert!(headers.resolve("disc").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderIndex {
    keys: HashMap<String, ColumnKey>,
}

impl HeaderIndex {
    /// Builds an index from column titles in column order.
    pub fn new<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut keys = HashMap::new();
        for (i, title) in titles.into_iter().enumerate() {
            let title = title.as_ref();
            if title.is_empty() {
                continue;
            }
            let position = i + 1;
            let (Ok(asc), Ok(desc)) = (ColumnKey::asc(position), ColumnKey::desc(position)) else {
                continue;
            };
            register(&mut keys, title.to_string(), asc);
            register(&mut keys, format!("{REVERSE_PREFIX}{title}"), desc);
        }
        HeaderIndex { keys }
    }

    /// Resolves one name, plain or `-` prefixed, to its column key.
    pub fn resolve(&self, name: &str) -> Result<ColumnKey> {
        match self.keys.get(name) {
            Some(&key) => Ok(key),
            None => {
                tracing::debug!(name, "unknown column header");
                Err(RowSortError::UnknownHeader {
                    name: name.to_string(),
                    known: self.names(),
                })
            }
        }
    }

    /// Resolves names in order into a [`SortSpec`].
    ///
    /// Stops at the first unknown name; no partial spec is returned.
    pub fn resolve_all<N: AsRef<str>>(&self, names: &[N]) -> Result<SortSpec> {
        let keys = names
            .iter()
            .map(|name| self.resolve(name.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        SortSpec::new(keys)
    }

    /// Resolves a comma-separated list of names, e.g. `"-author, title, year"`.
    ///
    /// Blank text is an empty spec, as with `SortSpec`'s parser.
    pub fn parse_spec(&self, text: &str) -> Result<SortSpec> {
        if text.trim().is_empty() {
            return Err(RowSortError::EmptySortSpec);
        }
        let names: Vec<&str> = text.split(',').map(str::trim).collect();
        self.resolve_all(&names)
    }

    /// Returns `true` if `name` resolves.
    pub fn contains(&self, name: &str) -> bool {
        self.keys.contains_key(name)
    }

    /// Every resolvable name, including `-` forms, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.keys.keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of distinct columns reachable through some name.
    pub fn len(&self) -> usize {
        self.keys
            .values()
            .map(|key| key.position())
            .collect::<HashSet<_>>()
            .len()
    }

    /// Returns `true` if no column can be addressed.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

// Inserts one name; a name seen before keeps only the newest key.
fn register(keys: &mut HashMap<String, ColumnKey>, name: String, key: ColumnKey) {
    if let Some(previous) = keys.get(&name) {
        tracing::debug!(
            name = %name,
            previous = %previous,
            key = %key,
            "column header overwrites earlier entry"
        );
    }
    keys.insert(name, key);
}

impl<S: AsRef<str>> FromIterator<S> for HeaderIndex {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        HeaderIndex::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(headers: &HeaderIndex, name: &str) -> i64 {
        headers.resolve(name).unwrap().get()
    }

    #[test]
    fn build_registers_both_forms() {
        let headers = HeaderIndex::new(["author", "year", "title"]);
        assert_eq!(key(&headers, "author"), 1);
        assert_eq!(key(&headers, "year"), 2);
        assert_eq!(key(&headers, "title"), 3);
        assert_eq!(key(&headers, "-author"), -1);
        assert_eq!(key(&headers, "-year"), -2);
        assert_eq!(key(&headers, "-title"), -3);
        assert_eq!(headers.len(), 3);
        assert!(!headers.is_empty());
    }

    #[test]
    fn empty_titles_are_skipped() {
        let headers = HeaderIndex::new(["id", "", "name"]);
        assert_eq!(key(&headers, "name"), 3);
        assert!(!headers.contains(""));
        assert!(!headers.contains("-"));
        assert_eq!(headers.len(), 2);
    }

    #[test]
    fn no_titles() {
        let headers = HeaderIndex::new(Vec::<String>::new());
        assert!(headers.is_empty());
        assert_eq!(headers.len(), 0);
        assert!(headers.names().is_empty());
    }

    #[test]
    fn duplicate_title_last_write_wins() {
        let headers = HeaderIndex::new(["name", "age", "name"]);
        assert_eq!(key(&headers, "name"), 3);
        assert_eq!(key(&headers, "-name"), -3);
        assert_eq!(key(&headers, "age"), 2);
    }

    fn overwrite_events(titles: &[&str]) -> usize {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;

        use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

        struct CountDebug(Arc<AtomicUsize>);

        impl<S: tracing::Subscriber> Layer<S> for CountDebug {
            fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
                if *event.metadata().level() == tracing::Level::DEBUG {
                    self.0.fetch_add(1, Ordering::SeqCst);
                }
            }
        }

        let count = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(CountDebug(Arc::clone(&count)));
        tracing::subscriber::with_default(subscriber, || HeaderIndex::new(titles));
        count.load(Ordering::SeqCst)
    }

    #[test]
    fn overwrites_are_traced_for_both_forms() {
        assert_eq!(overwrite_events(&["a", "b"]), 0);
        // Both "a" and "-a" are replaced.
        assert_eq!(overwrite_events(&["a", "a"]), 2);
        // Only the "-x" entry built for column 2 replaces an earlier one.
        assert_eq!(overwrite_events(&["-x", "x"]), 1);
        assert_eq!(overwrite_events(&["x", "-x"]), 1);
    }

    #[test]
    fn title_colliding_with_negated_form() {
        let headers = HeaderIndex::new(["x", "-x"]);
        assert_eq!(key(&headers, "x"), 1);
        assert_eq!(key(&headers, "-x"), 2);
        assert_eq!(key(&headers, "--x"), -2);
        assert_eq!(headers.len(), 2);

        let headers = HeaderIndex::new(["-x", "x"]);
        assert_eq!(key(&headers, "x"), 2);
        assert_eq!(key(&headers, "-x"), -2);
        assert_eq!(key(&headers, "--x"), -1);
        assert_eq!(headers.names(), vec!["--x", "-x", "x"]);
        assert_eq!(headers.len(), 2);
    }

    #[test]
    fn unknown_header_lists_known_names() {
        let headers = HeaderIndex::new(["b", "a"]);
        let err = headers.resolve("disc").unwrap_err();
        assert_eq!(
            err,
            RowSortError::UnknownHeader {
                name: "disc".into(),
                known: vec!["-a".into(), "-b".into(), "a".into(), "b".into()],
            }
        );
        assert_eq!(
            err.to_string(),
            "unknown column header: disc (known: -a, -b, a, b)"
        );
    }

    #[test]
    fn resolve_all_in_order() {
        let headers = HeaderIndex::new(["author", "year", "title"]);
        let spec = headers.resolve_all(&["-author", "title", "year"]).unwrap();
        assert_eq!(spec, SortSpec::from_indices(&[-1, 3, 2]).unwrap());
    }

    #[test]
    fn resolve_all_fails_fast() {
        let headers = HeaderIndex::new(["author", "year"]);
        let err = headers
            .resolve_all(&["year", "disc", "nope"])
            .unwrap_err();
        assert!(matches!(err, RowSortError::UnknownHeader { ref name, .. } if name == "disc"));
    }

    #[test]
    fn resolve_all_empty() {
        let headers = HeaderIndex::new(["author"]);
        let names: [&str; 0] = [];
        assert_eq!(headers.resolve_all(&names), Err(RowSortError::EmptySortSpec));
    }

    #[test]
    fn parse_spec_trims_names() {
        let headers = HeaderIndex::new(["author", "year", "title"]);
        let spec = headers.parse_spec("-author, title ,year").unwrap();
        assert_eq!(spec.to_string(), "-1,3,2");

        assert_eq!(headers.parse_spec(""), Err(RowSortError::EmptySortSpec));
        assert_eq!(headers.parse_spec("  "), Err(RowSortError::EmptySortSpec));
        assert_eq!("".parse::<SortSpec>(), Err(RowSortError::EmptySortSpec));

        let err = headers.parse_spec("author,,year").unwrap_err();
        assert!(matches!(err, RowSortError::UnknownHeader { ref name, .. } if name.is_empty()));
    }

    #[test]
    fn collect_from_iterator() {
        let headers: HeaderIndex = vec!["a".to_string(), "b".to_string()].into_iter().collect();
        assert_eq!(key(&headers, "-b"), -2);
    }
}
