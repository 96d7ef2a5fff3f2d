//! Macro definitions and the interface macro functions expand against
//!
//! A macro is either a template (a definition string or pre-lexed token
//! list with `#1`..`#9` placeholders) or a function that reads its own
//! arguments through [`MacroContextInterface`]. Templates are stored with
//! their tokens in reverse order so that pushing them onto the expander's
//! stack is a plain `extend`.

use alloc::sync::Arc;
use core::fmt::{self, Debug};

use crate::lexer::Lexer;
use crate::namespace::{Mapping, Namespace};
use crate::symbols::Mode;
use crate::types::{ParseError, Token};

pub mod builtins;

/// User macro table, as given in [`crate::Settings::macros`].
pub type MacroMap = Mapping<MacroDefinition>;

/// An argument read from the token stream.
#[derive(Debug, Clone)]
pub struct MacroArg {
    /// Argument tokens in reverse order, without enclosing braces.
    pub tokens: Vec<Token>,
    /// First token of the argument (the `{` of a braced argument).
    pub start: Token,
    /// Last token read for the argument.
    pub end: Token,
}

/// A macro template: reversed body tokens plus argument shape.
#[derive(Debug, Clone, Default)]
pub struct MacroExpansion {
    /// Body tokens in reverse order.
    pub tokens: Vec<Token>,
    /// Number of `#n` parameters.
    pub num_args: usize,
    /// Delimiter texts preceding each parameter (`\def\foo#1.{..}`), with one
    /// trailing entry for text after the last parameter.
    pub delimiters: Option<Vec<Vec<String>>>,
    /// Set for `\let` aliases of non-macros; such a definition is never
    /// expanded by `\edef`.
    pub unexpandable: bool,
}

impl MacroExpansion {
    /// Lexes a definition string into a template.
    ///
    /// The parameter count is the highest consecutive `#n` found after
    /// removing `##` escapes.
    #[must_use]
    pub fn from_definition(body: &str) -> Self {
        let mut num_args = 0;
        if body.contains('#') {
            let stripped = body.replace("##", "");
            while num_args < 9 && stripped.contains(&format!("#{}", num_args + 1)) {
                num_args += 1;
            }
        }

        let mut tokens: Vec<Token> = Lexer::new(body)
            .filter(|token| !token.is_eof())
            .map(|mut token| {
                token.loc = None;
                token
            })
            .collect();
        tokens.reverse();

        Self {
            tokens,
            num_args,
            delimiters: None,
            unexpandable: false,
        }
    }
}

/// Function-based macro with captured state.
pub type MacroFunction = Arc<
    dyn Fn(&mut dyn MacroContextInterface<'_>) -> Result<MacroExpansionResult, ParseError>
        + Send
        + Sync,
>;

/// Function-based macro without captured state.
pub type StaticMacroFunction =
    fn(&mut dyn MacroContextInterface<'_>) -> Result<MacroExpansionResult, ParseError>;

/// How a macro expands.
#[derive(Clone)]
pub enum MacroDefinition {
    /// Definition string, lexed at expansion time.
    String(String),
    /// Definition string known at compile time.
    StaticStr(&'static str),
    /// Pre-lexed template.
    Expansion(MacroExpansion),
    /// Closure reading its own arguments.
    Function(MacroFunction),
    /// Function pointer reading its own arguments.
    StaticFunction(StaticMacroFunction),
}

impl MacroDefinition {
    /// The definition string, for string-based macros.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            Self::StaticStr(s) => Some(s),
            _ => None,
        }
    }
}

impl Debug for MacroDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StaticStr(s) => f.debug_tuple("StaticStr").field(s).finish(),
            Self::String(s) => f.debug_tuple("String").field(s).finish(),
            Self::Expansion(e) => f.debug_tuple("Expansion").field(e).finish(),
            Self::Function(_) => f.debug_struct("Function").finish(),
            Self::StaticFunction(_) => f.debug_struct("StaticFunction").finish(),
        }
    }
}

impl From<&str> for MacroDefinition {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for MacroDefinition {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

/// What a function-based macro expands to.
#[derive(Debug, Clone)]
pub enum MacroExpansionResult {
    /// A definition string, lexed like [`MacroDefinition::String`].
    String(String),
    /// A ready template.
    Expansion(MacroExpansion),
    /// Nothing; the macro only had side effects.
    Empty,
}

impl MacroExpansionResult {
    /// A zero-argument expansion to the given reversed tokens.
    #[must_use]
    pub fn tokens(tokens: Vec<Token>) -> Self {
        Self::Expansion(MacroExpansion {
            tokens,
            ..MacroExpansion::default()
        })
    }
}

/// The expander state available to function-based macros.
pub trait MacroContextInterface<'a> {
    /// Current parsing mode.
    fn mode(&self) -> Mode;

    /// The macro namespace.
    fn macros(&self) -> &Namespace<'a, MacroDefinition>;

    /// The macro namespace, for definitions.
    fn macros_mut(&mut self) -> &mut Namespace<'a, MacroDefinition>;

    /// The next unexpanded token, without consuming it.
    fn future(&mut self) -> &Token;

    /// Removes and returns the next unexpanded token.
    fn pop_token(&mut self) -> Token;

    /// Puts a token back at the front of the stream.
    fn push_token(&mut self, token: Token);

    /// Drops space tokens at the front of the stream.
    fn consume_spaces(&mut self);

    /// Expands the next token once if it is a macro.
    ///
    /// Returns `false` (leaving the token in place) when it is not.
    fn expand_once(&mut self) -> Result<bool, ParseError>;

    /// Expands until the next token is not a macro, then consumes it.
    fn expand_next_token(&mut self) -> Result<Token, ParseError>;

    /// Fully expands reversed `tokens`, returning the result in forward order.
    fn expand_tokens(&mut self, tokens: Vec<Token>) -> Result<Vec<Token>, ParseError>;

    /// Reads one argument: a balanced group, a single token, or everything up
    /// to the given delimiter tokens.
    fn consume_arg(&mut self, delims: Option<&[String]>) -> Result<MacroArg, ParseError>;

    /// Reads `num_args` undelimited arguments, each in reverse order.
    fn consume_args(&mut self, num_args: usize) -> Result<Vec<Vec<Token>>, ParseError>;

    /// Whether `name` means anything: macro, function, symbol, or one of the
    /// implicit commands.
    fn is_defined(&self, name: &str) -> bool;

    /// Whether `name` is a macro that `\edef` would expand.
    fn is_expandable(&self, name: &str) -> bool;

    /// Opens a definition scope.
    fn begin_group(&mut self);

    /// Closes a definition scope, undoing its local definitions.
    fn end_group(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_parameters_and_reverses_tokens() {
        let expansion = MacroExpansion::from_definition(r"\frac{#1}{#2}");
        assert_eq!(expansion.num_args, 2);
        let texts: Vec<_> = expansion.tokens.iter().rev().map(Token::as_str).collect();
        assert_eq!(texts, [r"\frac", "{", "#", "1", "}", "{", "#", "2", "}"]);
        assert!(expansion.tokens.iter().all(|t| t.loc.is_none()));
    }

    #[test]
    fn escaped_hash_is_not_a_parameter() {
        assert_eq!(MacroExpansion::from_definition("##1").num_args, 0);
        assert_eq!(MacroExpansion::from_definition("#1##2").num_args, 1);
        assert_eq!(MacroExpansion::from_definition("#2").num_args, 0);
    }

    #[test]
    fn definitions_from_strings() {
        let def = MacroDefinition::from(r"\mathbb{R}");
        assert_eq!(def.as_str(), Some(r"\mathbb{R}"));
        assert!(MacroDefinition::Expansion(MacroExpansion::default()).as_str().is_none());
    }
}
