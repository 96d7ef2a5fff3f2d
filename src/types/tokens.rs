use core::fmt;
use core::ops::Range;

use alloc::sync::Arc;

use crate::types::{ErrorLocationProvider, SourceLocation};

/// Text of a token, either borrowed from the input or owned.
///
/// Most tokens point into the shared input string; tokens built from macro
/// definitions own their text.
#[derive(Clone, Debug)]
pub enum TokenText {
    /// A slice of the shared input.
    Slice {
        /// The input the slice points into.
        source: Arc<str>,
        /// Byte range of the slice.
        range: Range<usize>,
    },
    /// Owned text, typically from a macro body.
    Owned(Arc<str>),
    /// Static text such as `EOF` or a single space.
    Static(&'static str),
}

impl TokenText {
    /// Creates a slice of `source`.
    #[must_use]
    pub const fn slice(source: Arc<str>, start: usize, end: usize) -> Self {
        Self::Slice {
            source,
            range: start..end,
        }
    }

    /// The token text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Slice { source, range } => source.get(range.clone()).unwrap_or_default(),
            Self::Owned(text) => text,
            Self::Static(text) => text,
        }
    }

    /// Length of the text in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.as_str().len()
    }

    /// Whether the text is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PartialEq for TokenText {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for TokenText {}

impl PartialEq<&str> for TokenText {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialEq<str> for TokenText {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl From<&str> for TokenText {
    fn from(value: &str) -> Self {
        Self::Owned(Arc::from(value))
    }
}

impl From<String> for TokenText {
    fn from(value: String) -> Self {
        Self::Owned(Arc::from(value))
    }
}

impl fmt::Display for TokenText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lexical category of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
pub enum TokenKind {
    /// `\name` or `\c`, including control space `\ `.
    ControlSequence,
    /// Any other single character (with trailing combining marks).
    Char,
    /// A run of whitespace.
    Space,
    /// `{`
    GroupOpen,
    /// `}`
    GroupClose,
    /// `^`
    Superscript,
    /// `_`
    Subscript,
    /// `&`
    AlignmentTab,
    /// End of the input, or the end marker of a scanned argument.
    EndOfInput,
    /// Malformed input the lexer could not classify, such as a trailing `\`.
    Error,
}

impl TokenKind {
    /// Classifies token text the way the lexer would.
    #[must_use]
    pub fn classify(text: &str) -> Self {
        match text {
            "{" => Self::GroupOpen,
            "}" => Self::GroupClose,
            "^" => Self::Superscript,
            "_" => Self::Subscript,
            "&" => Self::AlignmentTab,
            "EOF" => Self::EndOfInput,
            r"\" => Self::Error,
            t if t.starts_with('\\') => Self::ControlSequence,
            t if !t.is_empty() && t.chars().all(char::is_whitespace) => Self::Space,
            _ => Self::Char,
        }
    }
}

/// Tokens at which an expression being parsed stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::AsRefStr)]
pub enum BreakToken {
    /// `]`, ending an optional argument.
    #[strum(serialize = "]")]
    RightBracket,
    /// `}`, ending a group.
    #[strum(serialize = "}")]
    RightBrace,
    /// `\end`, ending an environment.
    #[strum(serialize = "\\end")]
    End,
    /// `\\`, ending an array row.
    #[strum(serialize = "\\\\")]
    DoubleBackslash,
    /// End of input.
    #[strum(serialize = "EOF")]
    Eof,
}

/// A lexical token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Lexical category.
    pub kind: TokenKind,
    /// Source text of the token.
    pub text: TokenText,
    /// Location in the input; `None` for tokens created by macro expansion.
    pub loc: Option<SourceLocation>,
    /// Set by `\noexpand`-style suppression; the expander passes it through.
    pub noexpand: bool,
    /// Macro-expansion depth that produced this token, 0 for input tokens.
    pub depth: usize,
}

impl Token {
    /// Creates a token, inferring its kind from the text.
    #[must_use]
    pub fn new(text: impl Into<TokenText>, loc: Option<SourceLocation>) -> Self {
        let text = text.into();
        Self {
            kind: TokenKind::classify(text.as_str()),
            text,
            loc,
            noexpand: false,
            depth: 0,
        }
    }

    /// Creates a token of an explicit kind.
    #[must_use]
    pub const fn with_kind(kind: TokenKind, text: TokenText, loc: Option<SourceLocation>) -> Self {
        Self {
            kind,
            text,
            loc,
            noexpand: false,
            depth: 0,
        }
    }

    /// An end-of-input marker at the given location.
    #[must_use]
    pub const fn eof(loc: Option<SourceLocation>) -> Self {
        Self::with_kind(TokenKind::EndOfInput, TokenText::Static("EOF"), loc)
    }

    /// Token text as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    /// Whether this token ends the current token stream.
    #[must_use]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }

    /// Whether this token is a control sequence (including an `Error` token,
    /// which is treated as an unknown command).
    #[must_use]
    pub fn is_command(&self) -> bool {
        matches!(self.kind, TokenKind::ControlSequence | TokenKind::Error)
    }

    /// A new token spanning from `self` to `end`, carrying `text`.
    #[must_use]
    pub fn range(&self, end: &Self, text: impl Into<TokenText>) -> Self {
        let loc = SourceLocation::range(self.loc.as_ref(), end.loc.as_ref());
        Self::new(text, loc)
    }
}

impl ErrorLocationProvider for Token {
    fn loc(&self) -> Option<&SourceLocation> {
        self.loc.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_structural_characters() {
        assert_eq!(TokenKind::classify("{"), TokenKind::GroupOpen);
        assert_eq!(TokenKind::classify("}"), TokenKind::GroupClose);
        assert_eq!(TokenKind::classify("^"), TokenKind::Superscript);
        assert_eq!(TokenKind::classify("_"), TokenKind::Subscript);
        assert_eq!(TokenKind::classify("&"), TokenKind::AlignmentTab);
        assert_eq!(TokenKind::classify(r"\alpha"), TokenKind::ControlSequence);
        assert_eq!(TokenKind::classify(r"\ "), TokenKind::ControlSequence);
        assert_eq!(TokenKind::classify(" "), TokenKind::Space);
        assert_eq!(TokenKind::classify("x"), TokenKind::Char);
        assert_eq!(TokenKind::classify(r"\"), TokenKind::Error);
    }

    #[test]
    fn slice_text_compares_by_content() {
        let input: Arc<str> = Arc::from("abc");
        let slice = TokenText::slice(Arc::clone(&input), 1, 2);
        assert_eq!(slice, TokenText::from("b"));
        assert_eq!(slice, "b");
    }
}
