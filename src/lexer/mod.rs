//! The lexer turns the input string into [`Token`]s on demand.
//!
//! Lexing is lazy: the macro expander pulls one token at a time with
//! [`Lexer::lex`]. The lexer never fails; input it cannot classify (a lone
//! trailing backslash) becomes an [`TokenKind::Error`] token which the parser
//! reports as an unknown command.

use alloc::sync::Arc;

use crate::types::{SourceLocation, Token, TokenKind, TokenText};

const fn is_combining_mark(ch: char) -> bool {
    (ch as u32) >= 0x0300 && (ch as u32) <= 0x036F
}

const fn is_space(ch: char) -> bool {
    matches!(ch, ' ' | '\r' | '\n' | '\t')
}

fn match_space(s: &str) -> Option<usize> {
    let len: usize = s
        .chars()
        .take_while(|&c| is_space(c))
        .map(char::len_utf8)
        .sum();
    (len > 0).then_some(len)
}

/// `\` followed by whitespace: a control space. Trailing blanks are swallowed.
fn match_control_space(s: &str) -> Option<usize> {
    let rest = s.strip_prefix('\\')?;
    let first = rest.chars().next()?;
    if !is_space(first) {
        return None;
    }
    Some(1 + match_space(rest).unwrap_or(0))
}

/// `\` followed by ASCII letters or `@`, plus the length of trailing spaces.
fn match_control_word(s: &str) -> Option<(usize, usize)> {
    let rest = s.strip_prefix('\\')?;
    let name_len = rest
        .chars()
        .take_while(|c| c.is_ascii_alphabetic() || *c == '@')
        .count();
    if name_len == 0 {
        return None;
    }
    let len = 1 + name_len;
    let skip = match_space(&s[len..]).unwrap_or(0);
    Some((len, skip))
}

fn match_control_symbol(s: &str) -> Option<usize> {
    let rest = s.strip_prefix('\\')?;
    let c = rest.chars().next()?;
    Some(1 + c.len_utf8())
}

/// A normal character together with any combining marks that follow it.
fn match_char_with_accents(s: &str) -> Option<usize> {
    let mut chars = s.chars();
    let first = chars.next()?;
    let marks: usize = chars
        .take_while(|&c| is_combining_mark(c))
        .map(char::len_utf8)
        .sum();
    Some(first.len_utf8() + marks)
}

fn single_char_kind(ch: char) -> TokenKind {
    match ch {
        '{' => TokenKind::GroupOpen,
        '}' => TokenKind::GroupClose,
        '^' => TokenKind::Superscript,
        '_' => TokenKind::Subscript,
        '&' => TokenKind::AlignmentTab,
        _ => TokenKind::Char,
    }
}

/// Lazy tokenizer over a shared input string.
#[derive(Debug, Clone)]
pub struct Lexer {
    input: Arc<str>,
    last_index: usize,
    done: bool,
}

impl Lexer {
    /// Creates a lexer positioned at the start of `input`.
    #[must_use]
    pub fn new(input: impl Into<Arc<str>>) -> Self {
        Self {
            input: input.into(),
            last_index: 0,
            done: false,
        }
    }

    /// The shared input string.
    #[must_use]
    pub fn input(&self) -> &Arc<str> {
        &self.input
    }

    /// Current byte offset.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.last_index
    }

    fn loc(&self, start: usize, end: usize) -> Option<SourceLocation> {
        Some(SourceLocation::new(Arc::clone(&self.input), start, end))
    }

    fn slice_text(&self, start: usize, end: usize) -> TokenText {
        TokenText::slice(Arc::clone(&self.input), start, end)
    }

    /// Returns the next token; at the end of input, returns an
    /// [`TokenKind::EndOfInput`] token (repeatedly).
    pub fn lex(&mut self) -> Token {
        loop {
            let start = self.last_index;
            let Some(slice) = self.input.get(start..).filter(|s| !s.is_empty()) else {
                return Token::eof(self.loc(self.input.len(), self.input.len()));
            };

            if slice.starts_with('%') {
                self.last_index = slice
                    .find('\n')
                    .map_or(self.input.len(), |nl| start + nl + 1);
                continue;
            }

            if let Some(len) = match_space(slice) {
                self.last_index += len;
                return Token::with_kind(
                    TokenKind::Space,
                    TokenText::Static(" "),
                    self.loc(start, start + len),
                );
            }

            if let Some(len) = match_control_space(slice) {
                self.last_index += len;
                return Token::with_kind(
                    TokenKind::ControlSequence,
                    TokenText::Static(r"\ "),
                    self.loc(start, start + len),
                );
            }

            if let Some((len, skip)) = match_control_word(slice) {
                self.last_index += len + skip;
                return Token::with_kind(
                    TokenKind::ControlSequence,
                    self.slice_text(start, start + len),
                    self.loc(start, start + len),
                );
            }

            if let Some(len) = match_control_symbol(slice) {
                self.last_index += len;
                return Token::with_kind(
                    TokenKind::ControlSequence,
                    self.slice_text(start, start + len),
                    self.loc(start, start + len),
                );
            }

            if slice == r"\" {
                self.last_index += 1;
                return Token::with_kind(
                    TokenKind::Error,
                    TokenText::Static(r"\"),
                    self.loc(start, start + 1),
                );
            }

            let len = match_char_with_accents(slice).unwrap_or(slice.len());
            self.last_index += len;
            let kind = slice.chars().next().map_or(TokenKind::Char, single_char_kind);
            return Token::with_kind(
                kind,
                self.slice_text(start, start + len),
                self.loc(start, start + len),
            );
        }
    }
}

impl Iterator for Lexer {
    type Item = Token;

    /// Yields every token including one final end-of-input token.
    fn next(&mut self) -> Option<Token> {
        if self.done {
            return None;
        }
        let token = self.lex();
        if token.is_eof() {
            self.done = true;
        }
        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds_and_texts(input: &str) -> Vec<(TokenKind, String)> {
        Lexer::new(input)
            .map(|t| (t.kind, t.as_str().to_owned()))
            .collect()
    }

    #[test]
    fn lexes_control_words_and_swallows_spaces() {
        let tokens = kinds_and_texts(r"\alpha  x");
        assert_eq!(
            tokens,
            vec![
                (TokenKind::ControlSequence, r"\alpha".to_owned()),
                (TokenKind::Char, "x".to_owned()),
                (TokenKind::EndOfInput, "EOF".to_owned()),
            ]
        );
    }

    #[test]
    fn lexes_structural_characters() {
        let kinds: Vec<_> = kinds_and_texts("{a}^_&").into_iter().map(|(k, _)| k).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::GroupOpen,
                TokenKind::Char,
                TokenKind::GroupClose,
                TokenKind::Superscript,
                TokenKind::Subscript,
                TokenKind::AlignmentTab,
                TokenKind::EndOfInput,
            ]
        );
    }

    #[test]
    fn collapses_whitespace_runs() {
        let tokens = kinds_and_texts("a \n\t b");
        assert_eq!(tokens[1], (TokenKind::Space, " ".to_owned()));
        assert_eq!(tokens[2], (TokenKind::Char, "b".to_owned()));
    }

    #[test]
    fn control_symbols_and_control_space() {
        let tokens = kinds_and_texts(r"\,\\\ x");
        assert_eq!(tokens[0].1, r"\,");
        assert_eq!(tokens[1].1, r"\\");
        assert_eq!(tokens[2].1, r"\ ");
        assert_eq!(tokens[3].1, "x");
    }

    #[test]
    fn skips_comments() {
        let tokens = kinds_and_texts("a% comment\nb");
        assert_eq!(tokens[0].1, "a");
        assert_eq!(tokens[1].1, "b");
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn trailing_backslash_is_an_error_token() {
        let tokens = kinds_and_texts(r"x\");
        assert_eq!(tokens[1], (TokenKind::Error, r"\".to_owned()));
    }

    #[test]
    fn keeps_combining_marks_with_their_base() {
        let tokens = kinds_and_texts("e\u{0301}x");
        assert_eq!(tokens[0].1, "e\u{0301}");
        assert_eq!(tokens[1].1, "x");
    }

    #[test]
    fn records_locations() {
        let mut lexer = Lexer::new(r"a\beta");
        lexer.lex();
        let beta = lexer.lex();
        let loc = beta.loc.unwrap();
        assert_eq!((loc.start, loc.end), (1, 6));
        let eof = lexer.lex();
        assert!(eof.is_eof());
        assert!(lexer.lex().is_eof());
    }

    #[test]
    fn lexing_is_finite_and_restartable() {
        let input = r"\frac{a}{b} % done";
        let first: Vec<_> = Lexer::new(input).collect();
        let second: Vec<_> = Lexer::new(input).collect();
        assert_eq!(first, second);
        assert!(first.last().is_some_and(Token::is_eof));
    }
}
