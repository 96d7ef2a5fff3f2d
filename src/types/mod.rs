//! Shared types: tokens, source locations, errors and settings.

mod parse_error;
mod settings;
mod source_location;
mod tokens;

pub use parse_error::{ParseError, ParseErrorKind, Recovery};
pub use settings::{ErrorPolicy, Settings, StrictMode};
pub use source_location::{ErrorLocationProvider, SourceLocation};
pub use tokens::{BreakToken, Token, TokenKind, TokenText};
