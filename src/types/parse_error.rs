//! Parse and layout errors
//!
//! Every failure the renderer reports is a [`ParseError`]: a categorised
//! [`ParseErrorKind`] plus the byte range of the offending input. The kind
//! decides how the error is treated by the render entry point (see
//! [`Recovery`]).

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;
#[cfg(feature = "backtrace")]
use std::backtrace::Backtrace;

use thiserror::Error;

use crate::parser::NodeTypeError;
use crate::symbols::Mode;
use crate::types::{ErrorLocationProvider, SourceLocation};

/// Error returned by every fallible stage of the pipeline.
#[derive(Debug, Error)]
#[error("texbox parse error: {kind}{context}")]
pub struct ParseError {
    /// Categorised reason for the failure.
    #[source]
    pub kind: Box<ParseErrorKind>,
    /// Start offset of the offending input, when known.
    pub position: Option<usize>,
    /// Length of the offending input, when known.
    pub length: Option<usize>,
    context: ParseErrorContext,
    /// Where the error was raised.
    #[cfg(feature = "backtrace")]
    pub backtrace: Box<Backtrace>,
}

impl ParseError {
    /// Creates an error with no location.
    pub fn new<T: Into<ParseErrorKind>>(kind: T) -> Self {
        Self::from_kind(kind.into(), ParseErrorContext::None, None, None)
    }

    /// Creates an error pointing at a token or node.
    pub fn with_token<T: Into<ParseErrorKind>>(kind: T, token: &dyn ErrorLocationProvider) -> Self {
        let mut position = None;
        let mut length = None;
        let context = token.loc().filter(|loc| loc.start <= loc.end).map_or(
            ParseErrorContext::None,
            |loc| {
                position = Some(loc.start);
                length = Some(loc.len());
                ParseErrorContext::Location(loc.clone())
            },
        );
        Self::from_kind(kind.into(), context, position, length)
    }

    fn from_kind(
        kind: ParseErrorKind,
        context: ParseErrorContext,
        position: Option<usize>,
        length: Option<usize>,
    ) -> Self {
        Self {
            kind: Box::new(kind),
            position,
            length,
            context,
            #[cfg(feature = "backtrace")]
            backtrace: Box::new(Backtrace::force_capture()),
        }
    }

    /// The source range this error points at, if any.
    #[must_use]
    pub const fn location(&self) -> Option<&SourceLocation> {
        match &self.context {
            ParseErrorContext::Location(loc) => Some(loc),
            ParseErrorContext::None => None,
        }
    }

    /// The offending source text, if the error carries a location.
    #[must_use]
    pub fn source_text(&self) -> Option<&str> {
        self.location().map(SourceLocation::text)
    }
}

impl From<ParseErrorKind> for ParseError {
    fn from(kind: ParseErrorKind) -> Self {
        Self::new(kind)
    }
}

impl From<NodeTypeError> for ParseError {
    fn from(err: NodeTypeError) -> Self {
        Self::new(err)
    }
}

/// How an error kind is handled by the render entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recovery {
    /// Always aborts the render.
    Fatal,
    /// Governed by the strict mode: ignored, warned about, or fatal.
    Strict,
    /// Governed by `throw_on_error`, and fatal under strict `Error`.
    ThrowOnError,
}

/// Describes the specific reason for a [`ParseError`].
#[allow(missing_docs)]
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseErrorKind {
    #[error("Unbalanced group: expected '{expected}', got '{found}'")]
    UnbalancedGroup { expected: String, found: String },
    #[error(
        "Too many expansions: infinite loop or need to increase the expansion limit ({limit})"
    )]
    RecursionLimitExceeded { limit: usize },
    #[error("Groups nested too deeply: the limit is {limit} levels")]
    NestingTooDeep { limit: usize },
    #[error("Invalid setting {name}: {value}")]
    InvalidSetting { name: &'static str, value: String },
    #[error("Undefined control sequence: {name}")]
    UndefinedControlSequence { name: String },
    #[error("Missing glyph for '{character}' in font {font}")]
    MissingGlyph { character: char, font: String },
    #[error("Double superscript")]
    DoubleSuperscript,
    #[error("Double subscript")]
    DoubleSubscript,
    #[error("Expected '{expected}', got '{found}'")]
    ExpectedToken { expected: String, found: String },
    #[error("Expected group after '{symbol}'")]
    ExpectedGroupAfter { symbol: String },
    #[error("Got function '{func}' with no arguments as {context}")]
    FunctionMissingArguments { func: String, context: String },
    #[error("Can't use function '{func}' in {mode} mode")]
    FunctionDisallowedInMode { func: String, mode: Mode },
    #[error("Only one infix operator per group")]
    MultipleInfixOperators,
    #[error("\\limits must follow a base")]
    LimitsMustFollowBase,
    #[error("Invalid delimiter '{delimiter}' after '{function}'")]
    InvalidDelimiter { delimiter: String, function: String },
    #[error("Invalid {context}: '{value}'")]
    InvalidValue { context: &'static str, value: String },
    #[error("Invalid size: '{size}'")]
    InvalidSize { size: String },
    #[error("Invalid unit: '{unit}'")]
    InvalidUnit { unit: String },
    #[error("Invalid color: '{color}'")]
    InvalidColor { color: String },
    #[error("No such environment: {name}")]
    NoSuchEnvironment { name: String },
    #[error(r"Mismatched: \begin{{{begin}}} matched by \end{{{end}}}")]
    MismatchedEnvironmentEnd { begin: String, end: String },
    #[error(r"Expected & or \\ or \cr or \end, found {found}")]
    ExpectedArrayDelimiter { found: String },
    #[error("Unknown column alignment: {found}")]
    UnknownColumnAlignment { found: String },
    #[error(r"Invalid \arraystretch: {stretch}")]
    InvalidArrayStretch { stretch: String },
    #[error("Expected a control sequence")]
    ExpectedControlSequence,
    #[error("Invalid argument number: {value}")]
    InvalidMacroArgumentNumber { value: String },
    #[error("Incomplete placeholder at end of macro body")]
    MacroIncompletePlaceholder,
    #[error("Macro parameters must be numbered consecutively: expected #{expected}")]
    ExpectedMacroParameter { expected: usize },
    #[error(r"\newcommand{{{name}}} attempting to redefine {name}; use \renewcommand")]
    NewcommandRedefinition { name: String },
    #[error(r"\renewcommand{{{name}}} when {name} does not yet exist; use \newcommand")]
    RenewcommandNonexistent { name: String },
    #[error("Invalid number of arguments: {value}")]
    InvalidNewcommandArgumentCount { value: String },
    #[error("Invalid token after macro prefix: {token}")]
    InvalidTokenAfterMacroPrefix { token: String },
    #[error("Unexpected end of input in a macro argument, expected '{expected}'")]
    UnexpectedEndOfMacroArgument { expected: String },
    #[error("Use of the macro doesn't match its definition")]
    MacroDefinitionMismatch,
    #[error("Expected a macro definition")]
    ExpectedMacroDefinition,
    #[error("Too many tab characters: &; the environment allows {max} columns")]
    TooManyColumns { max: usize },
    #[error("Invalid environment name")]
    InvalidEnvironmentName,
    #[error("Illegal delimiter: '{delimiter}'")]
    IllegalDelimiter { delimiter: String },
    #[error("Unknown accent '{label}'")]
    UnknownAccent { label: String },
    #[error(r"\\ is only allowed inside an array")]
    NewlineOutsideArray,
    #[error("{func} valid only within array environment")]
    OnlyInArray { func: String },
    #[error("Got group of unknown type: '{node}'")]
    UnexpectedNode { node: String },
    #[error("Unknown function '{name}'")]
    UnknownFunction { name: String },
    #[error("Failed to serialize output: {message}")]
    Serialization { message: String },
    #[error(transparent)]
    NodeType(#[from] NodeTypeError),
}

impl ParseErrorKind {
    /// How the render entry point treats this kind.
    #[must_use]
    pub const fn recovery(&self) -> Recovery {
        match self {
            Self::UndefinedControlSequence { .. } | Self::MissingGlyph { .. } => Recovery::Strict,
            Self::DoubleSuperscript | Self::DoubleSubscript => Recovery::ThrowOnError,
            _ => Recovery::Fatal,
        }
    }

    /// Whether the error comes from the caller's settings rather than the
    /// input; such errors are never swallowed.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::InvalidSetting { .. })
    }
}

#[derive(Debug, Clone)]
enum ParseErrorContext {
    None,
    Location(SourceLocation),
}

impl fmt::Display for ParseErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self::Location(loc) = self else {
            return Ok(());
        };
        let input = loc.input.as_ref();
        if loc.start >= input.len() {
            return write!(f, " at end of input: {input}");
        }
        write!(f, " at position {}: ", loc.start + 1)?;

        const CONTEXT: usize = 15;
        let before_start = floor_char_boundary(input, loc.start.saturating_sub(CONTEXT));
        if before_start > 0 {
            f.write_str("\u{2026}")?;
        }
        f.write_str(input.get(before_start..loc.start).unwrap_or_default())?;

        let end = floor_char_boundary(input, loc.end.min(input.len()));
        for ch in input.get(loc.start..end).unwrap_or_default().chars() {
            write!(f, "{ch}\u{0332}")?;
        }

        let after_end = floor_char_boundary(input, (end + CONTEXT).min(input.len()));
        f.write_str(input.get(end..after_end).unwrap_or_default())?;
        if after_end < input.len() {
            f.write_str("\u{2026}")?;
        }
        Ok(())
    }
}

fn floor_char_boundary(s: &str, mut index: usize) -> usize {
    while index > 0 && !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

#[cfg(test)]
mod tests {
    use alloc::sync::Arc;

    use super::*;
    use crate::types::Token;

    #[test]
    fn with_token_records_position() {
        let input: Arc<str> = Arc::from(r"x^2^3");
        let token = Token::new("^", Some(SourceLocation::new(Arc::clone(&input), 3, 4)));
        let err = ParseError::with_token(ParseErrorKind::DoubleSuperscript, &token);
        assert_eq!(err.position, Some(3));
        assert_eq!(err.length, Some(1));
        assert_eq!(err.source_text(), Some("^"));
        assert!(err.to_string().contains("Double superscript at position 4"));
    }

    #[test]
    fn recovery_classes() {
        assert_eq!(
            ParseErrorKind::UndefinedControlSequence { name: r"\foo".to_owned() }.recovery(),
            Recovery::Strict
        );
        assert_eq!(ParseErrorKind::DoubleSubscript.recovery(), Recovery::ThrowOnError);
        assert_eq!(
            ParseErrorKind::RecursionLimitExceeded { limit: 10 }.recovery(),
            Recovery::Fatal
        );
        assert_eq!(ParseErrorKind::NestingTooDeep { limit: 100 }.recovery(), Recovery::Fatal);
    }

    #[test]
    fn end_of_input_context() {
        let input: Arc<str> = Arc::from("{x");
        let err = ParseError::with_token(
            ParseErrorKind::UnbalancedGroup {
                expected: "}".to_owned(),
                found: "EOF".to_owned(),
            },
            &SourceLocation::new(Arc::clone(&input), 2, 2),
        );
        assert!(err.to_string().ends_with("at end of input: {x"));
    }
}
