/// Error type representing the failures that can occur while building or querying a ranking index.
///
/// This enum covers lookups against identifiers the index has never seen, construction input
/// that would break the index's invariants, and the I/O or syntax errors raised while loading
/// datasets and scripts from disk.
#[derive(Debug)]
pub enum RankingError {
    /// A score change targeted an item that was not present at construction.
    ///
    /// Only reported by [`crate::ranking_index::RankingIndex::try_change_score`];
    /// the plain `change_score` ignores unknown items.
    UnknownItem(String),

    /// A query named a category that no item belongs to.
    UnknownCategory(String),

    /// A category's queue ran out of entries before a current one was found.
    ///
    /// Every known category keeps at least one live entry, so seeing this means the
    /// index's internal maps have fallen out of sync.
    EmptyCategory(String),

    /// The three construction sequences did not have the same length.
    LengthMismatch {
        items: usize,
        categories: usize,
        scores: usize,
    },

    /// The same item identifier appeared more than once in the construction input.
    DuplicateItem(String),

    /// A dataset or script line could not be parsed.
    ///
    /// Contains a description of the offending input, including its line number when known.
    ParseError(String),

    /// Represents underlying I/O errors from the standard library.
    IoError(std::io::Error),
}

impl From<std::io::Error> for RankingError {
    /// Converts a [`std::io::Error`] into a [`RankingError`].
    ///
    /// # Examples
    /// ```
    /// use std::fs::File;
    /// use ferris_rankings::errors::RankingError;
    ///
    /// fn read_dataset() -> Result<(), RankingError> {
    ///     let _file = File::open("nonexistent.csv")?;
    ///     Ok(())
    /// }
    /// assert!(matches!(read_dataset(), Err(RankingError::IoError(_))));
    /// ```
    fn from(err: std::io::Error) -> Self {
        RankingError::IoError(err)
    }
}

impl std::fmt::Display for RankingError {
    /// Formats the error for display purposes.
    ///
    /// # Examples
    /// ```
    /// use ferris_rankings::errors::RankingError;
    /// let err = RankingError::UnknownCategory("thai".to_string());
    /// assert_eq!(format!("{}", err), "Unknown category: thai");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RankingError::UnknownItem(item) => write!(f, "Unknown item: {}", item),
            RankingError::UnknownCategory(c) => write!(f, "Unknown category: {}", c),
            RankingError::EmptyCategory(c) => {
                write!(f, "No current entry left for category: {}", c)
            }
            RankingError::LengthMismatch {
                items,
                categories,
                scores,
            } => write!(
                f,
                "Length mismatch: {} items, {} categories, {} scores",
                items, categories, scores
            ),
            RankingError::DuplicateItem(item) => write!(f, "Duplicate item: {}", item),
            RankingError::ParseError(e) => write!(f, "Parse error: {}", e),
            RankingError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for RankingError {
    /// Returns the lower-level source of this error, if any.
    ///
    /// Only [`RankingError::IoError`] wraps another error type.
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RankingError::IoError(e) => Some(e),
            _ => None,
        }
    }
}
