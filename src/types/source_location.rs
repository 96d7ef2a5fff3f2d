use alloc::sync::Arc;

/// A byte range inside the input string that produced a token or node.
///
/// The input is shared by reference count, so cloning a location never copies
/// the source text. Tokens produced by macro expansion carry no location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceLocation {
    /// The full input string being rendered.
    pub input: Arc<str>,
    /// Zero-based inclusive start offset.
    pub start: usize,
    /// Zero-based exclusive end offset.
    pub end: usize,
}

impl SourceLocation {
    /// Creates a new location over `input[start..end]`.
    #[must_use]
    pub const fn new(input: Arc<str>, start: usize, end: usize) -> Self {
        Self { input, start, end }
    }

    /// Merges two locations into one spanning both.
    ///
    /// Returns `None` when either side is missing or the two locations come
    /// from different inputs.
    #[must_use]
    pub fn range(first: Option<&Self>, second: Option<&Self>) -> Option<Self> {
        let (first, second) = (first?, second?);
        if !Arc::ptr_eq(&first.input, &second.input) {
            return None;
        }
        Some(Self {
            input: Arc::clone(&first.input),
            start: first.start.min(second.start),
            end: first.end.max(second.end),
        })
    }

    /// Returns the covered source text.
    #[must_use]
    pub fn text(&self) -> &str {
        self.input.get(self.start..self.end).unwrap_or_default()
    }

    /// Number of bytes covered by this location.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether the location covers no bytes (end of input markers).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Anything that can point at a place in the source.
///
/// Implemented by tokens and parse nodes so that [`ParseError::with_token`]
/// accepts either.
///
/// [`ParseError::with_token`]: crate::types::ParseError::with_token
pub trait ErrorLocationProvider {
    /// The source range, if known.
    fn loc(&self) -> Option<&SourceLocation>;
}

impl ErrorLocationProvider for SourceLocation {
    fn loc(&self) -> Option<&SourceLocation> {
        Some(self)
    }
}

impl ErrorLocationProvider for Option<SourceLocation> {
    fn loc(&self) -> Option<&SourceLocation> {
        self.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_spans_both_locations() {
        let input: Arc<str> = Arc::from(r"\frac{a}{b}");
        let a = SourceLocation::new(Arc::clone(&input), 0, 5);
        let b = SourceLocation::new(Arc::clone(&input), 8, 11);
        let merged = SourceLocation::range(Some(&a), Some(&b)).unwrap();
        assert_eq!(merged.start, 0);
        assert_eq!(merged.end, 11);
        assert_eq!(merged.text(), r"\frac{a}{b}");
    }

    #[test]
    fn range_rejects_foreign_inputs() {
        let a = SourceLocation::new(Arc::from("x"), 0, 1);
        let b = SourceLocation::new(Arc::from("x"), 0, 1);
        assert!(SourceLocation::range(Some(&a), Some(&b)).is_none());
        assert!(SourceLocation::range(Some(&a), None).is_none());
    }
}
