//! The macro expander sits between the lexer and the parser
//!
//! It keeps a stack of pending tokens (in reverse order) in front of the
//! lexer, and replaces macro tokens at the top of the stack by their
//! expansions until a non-macro token surfaces. Every expansion is counted
//! against [`Settings::max_expand`], and every token remembers how many
//! nested expansions produced it so that runaway recursion is caught at
//! [`Settings::max_expansion_depth`].

use alloc::sync::Arc;

use tracing::trace;

use crate::context::TexboxContext;
use crate::lexer::Lexer;
use crate::macros::builtins::BUILTIN_MACROS;
use crate::macros::{
    MacroArg, MacroContextInterface, MacroDefinition, MacroExpansion, MacroExpansionResult,
};
use crate::namespace::Namespace;
use crate::symbols::Mode;
use crate::types::{ParseError, ParseErrorKind, Settings, Token, TokenKind};

/// Commands that are neither macros, functions nor symbols but are still
/// understood by the parser.
pub static IMPLICIT_COMMANDS: phf::Set<&'static str> = phf::phf_set! {
    "^",
    "_",
    "\\limits",
    "\\nolimits",
};

/// Expands macros until only non-macro tokens remain.
pub struct MacroExpander<'a> {
    settings: &'a Settings,
    ctx: &'a TexboxContext,
    lexer: Lexer,
    macros: Namespace<'a, MacroDefinition>,
    /// Pending tokens, in reverse order.
    stack: Vec<Token>,
    expansion_count: usize,
    mode: Mode,
}

impl<'a> MacroExpander<'a> {
    /// An expander over `input` with the caller's macros layered over the
    /// built-ins.
    #[must_use]
    pub fn new(
        input: impl Into<Arc<str>>,
        settings: &'a Settings,
        mode: Mode,
        ctx: &'a TexboxContext,
    ) -> Self {
        Self {
            settings,
            ctx,
            lexer: Lexer::new(input),
            macros: Namespace::new(&BUILTIN_MACROS, &settings.macros),
            stack: Vec::new(),
            expansion_count: 0,
            mode,
        }
    }

    /// The input being expanded.
    #[must_use]
    pub fn input(&self) -> &Arc<str> {
        self.lexer.input()
    }

    /// Switches the lexing mode for the tokens that follow.
    pub const fn switch_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Closes any groups left open, undoing their local definitions.
    pub fn end_groups(&mut self) {
        self.macros.end_groups();
    }

    /// Pushes tokens to be read next. The last token is read first.
    pub fn push_tokens(&mut self, tokens: Vec<Token>) {
        self.stack.extend(tokens);
    }

    /// Reads an argument without expanding it and pushes it back followed by
    /// an end marker, so the parser can parse it as a standalone expression.
    ///
    /// Returns a token spanning the argument, or `None` when an optional
    /// argument is absent.
    pub fn scan_argument(&mut self, optional: bool) -> Result<Option<Token>, ParseError> {
        let (start, arg) = if optional {
            self.consume_spaces();
            if self.future().as_str() != "[" {
                return Ok(None);
            }
            let start = self.pop_token();
            let arg = self.consume_arg(Some(&["]".to_owned()]))?;
            (start, arg)
        } else {
            let arg = self.consume_arg(None)?;
            (arg.start.clone(), arg)
        };

        self.push_token(Token::eof(arg.end.loc.clone()));
        let range = start.range(&arg.end, "");
        self.push_tokens(arg.tokens);
        Ok(Some(range))
    }

    /// Fully expands the macro `name` and concatenates the resulting token
    /// texts, or returns `None` when no such macro exists.
    pub fn expand_macro_as_text(&mut self, name: &str) -> Result<Option<String>, ParseError> {
        if !self.macros.has(name) {
            return Ok(None);
        }
        let tokens = self.expand_tokens(vec![Token::new(name.to_owned(), None)])?;
        Ok(Some(tokens.iter().map(Token::as_str).collect()))
    }

    fn consume_args_with_delims(
        &mut self,
        num_args: usize,
        delimiters: Option<&[Vec<String>]>,
    ) -> Result<Vec<Vec<Token>>, ParseError> {
        if let Some(delimiters) = delimiters {
            if delimiters.len() != num_args + 1 {
                return Err(ParseError::new(ParseErrorKind::MacroDefinitionMismatch));
            }
            for expected in &delimiters[0] {
                let tok = self.pop_token();
                if tok.as_str() != expected {
                    return Err(ParseError::with_token(
                        ParseErrorKind::MacroDefinitionMismatch,
                        &tok,
                    ));
                }
            }
        }

        let mut args = Vec::with_capacity(num_args);
        for i in 0..num_args {
            let delims = delimiters.and_then(|d| d.get(i + 1)).map(Vec::as_slice);
            args.push(self.consume_arg(delims)?.tokens);
        }
        Ok(args)
    }

    fn count_expansion(&mut self, amount: usize, token: &Token) -> Result<(), ParseError> {
        self.expansion_count += amount;
        if self.expansion_count > self.settings.max_expand {
            return Err(ParseError::with_token(
                ParseErrorKind::RecursionLimitExceeded {
                    limit: self.settings.max_expand,
                },
                token,
            ));
        }
        Ok(())
    }

    fn expand_once_internal(&mut self, expandable_only: bool) -> Result<bool, ParseError> {
        let top = self.pop_token();
        let name = top.as_str();
        let skip = top.noexpand
            || match self.macros.get(name) {
                None => true,
                Some(MacroDefinition::Expansion(e)) => expandable_only && e.unexpandable,
                Some(_) => false,
            };
        if skip {
            self.push_token(top);
            return Ok(false);
        }

        let depth = top.depth + 1;
        if depth > self.settings.max_expansion_depth {
            return Err(ParseError::with_token(
                ParseErrorKind::RecursionLimitExceeded {
                    limit: self.settings.max_expansion_depth,
                },
                &top,
            ));
        }
        self.count_expansion(1, &top)?;

        let Some(expansion) = self.get_expansion(name)? else {
            self.push_token(top);
            return Ok(false);
        };
        trace!(name, depth, "expanding macro");

        let MacroExpansion {
            mut tokens,
            num_args,
            delimiters,
            ..
        } = expansion;
        for token in &mut tokens {
            token.depth = depth;
            if token.loc.is_none() {
                token.loc.clone_from(&top.loc);
            }
        }

        let args = self.consume_args_with_delims(num_args, delimiters.as_deref())?;
        if num_args > 0 {
            let mut i = tokens.len();
            while i > 0 {
                i -= 1;
                if tokens[i].as_str() != "#" {
                    continue;
                }
                if i == 0 {
                    return Err(ParseError::with_token(
                        ParseErrorKind::MacroIncompletePlaceholder,
                        &tokens[i],
                    ));
                }
                let next = &tokens[i - 1];
                if next.as_str() == "#" {
                    tokens.remove(i);
                    i -= 1;
                    continue;
                }
                let index = next
                    .as_str()
                    .parse::<usize>()
                    .ok()
                    .filter(|n| (1..=num_args).contains(n) && next.as_str().len() == 1);
                let Some(index) = index else {
                    return Err(ParseError::with_token(
                        ParseErrorKind::InvalidMacroArgumentNumber {
                            value: next.as_str().to_owned(),
                        },
                        next,
                    ));
                };
                let arg = args[index - 1].clone();
                tokens.splice(i - 1..=i, arg);
                i -= 1;
            }
        }

        self.push_tokens(tokens);
        Ok(true)
    }

    /// Resolves a macro name to its template, running function macros.
    fn get_expansion(&mut self, name: &str) -> Result<Option<MacroExpansion>, ParseError> {
        let Some(definition) = self.macros.get(name).cloned() else {
            return Ok(None);
        };
        let result = match definition {
            MacroDefinition::StaticStr(s) => MacroExpansionResult::String(s.to_owned()),
            MacroDefinition::String(s) => MacroExpansionResult::String(s),
            MacroDefinition::Expansion(e) => MacroExpansionResult::Expansion(e),
            MacroDefinition::Function(f) => f(self)?,
            MacroDefinition::StaticFunction(f) => f(self)?,
        };
        Ok(Some(match result {
            MacroExpansionResult::String(s) => MacroExpansion::from_definition(&s),
            MacroExpansionResult::Expansion(e) => e,
            MacroExpansionResult::Empty => MacroExpansion::default(),
        }))
    }
}

impl<'a> MacroContextInterface<'a> for MacroExpander<'a> {
    fn mode(&self) -> Mode {
        self.mode
    }

    fn macros(&self) -> &Namespace<'a, MacroDefinition> {
        &self.macros
    }

    fn macros_mut(&mut self) -> &mut Namespace<'a, MacroDefinition> {
        &mut self.macros
    }

    fn future(&mut self) -> &Token {
        if self.stack.is_empty() {
            let token = self.lexer.lex();
            self.stack.push(token);
        }
        let last = self.stack.len() - 1;
        &self.stack[last]
    }

    fn pop_token(&mut self) -> Token {
        self.stack.pop().unwrap_or_else(|| self.lexer.lex())
    }

    fn push_token(&mut self, token: Token) {
        self.stack.push(token);
    }

    fn consume_spaces(&mut self) {
        while self.future().kind == TokenKind::Space {
            self.stack.pop();
        }
    }

    fn expand_once(&mut self) -> Result<bool, ParseError> {
        self.expand_once_internal(false)
    }

    fn expand_next_token(&mut self) -> Result<Token, ParseError> {
        while self.expand_once_internal(false)? {}
        Ok(self.pop_token())
    }

    fn expand_tokens(&mut self, tokens: Vec<Token>) -> Result<Vec<Token>, ParseError> {
        let base = self.stack.len();
        self.push_tokens(tokens);
        let mut output = Vec::new();
        while self.stack.len() > base {
            if !self.expand_once_internal(true)? {
                let mut token = self.pop_token();
                if token.noexpand && self.is_expandable(token.as_str()) {
                    // the expansion of \noexpand\foo is \foo itself
                    token.noexpand = false;
                }
                output.push(token);
            }
        }
        if let Some(last) = output.last().cloned() {
            self.count_expansion(output.len(), &last)?;
        }
        Ok(output)
    }

    fn consume_arg(&mut self, delims: Option<&[String]>) -> Result<MacroArg, ParseError> {
        let delims = delims.filter(|d| !d.is_empty());
        if delims.is_none() {
            self.consume_spaces();
        }
        let start = self.future().clone();
        let mut tokens = Vec::new();
        let mut depth: usize = 0;
        let mut matched = 0;
        let end = loop {
            let tok = self.pop_token();
            match tok.kind {
                TokenKind::GroupOpen => depth += 1,
                TokenKind::GroupClose => {
                    if depth == 0 {
                        return Err(ParseError::with_token(
                            ParseErrorKind::UnbalancedGroup {
                                expected: "argument".to_owned(),
                                found: "}".to_owned(),
                            },
                            &tok,
                        ));
                    }
                    depth -= 1;
                }
                TokenKind::EndOfInput if depth > 0 => {
                    return Err(ParseError::with_token(
                        ParseErrorKind::UnbalancedGroup {
                            expected: "}".to_owned(),
                            found: "EOF".to_owned(),
                        },
                        &tok,
                    ));
                }
                TokenKind::EndOfInput => {
                    let expected = delims
                        .and_then(|d| d.get(matched))
                        .map_or("}", String::as_str);
                    return Err(ParseError::with_token(
                        ParseErrorKind::UnexpectedEndOfMacroArgument {
                            expected: expected.to_owned(),
                        },
                        &tok,
                    ));
                }
                _ => {}
            }
            tokens.push(tok.clone());

            match delims {
                Some(d) => {
                    let at_level = depth == 0 || (depth == 1 && d[matched] == "{");
                    if at_level && tok.as_str() == d[matched] {
                        matched += 1;
                        if matched == d.len() {
                            tokens.truncate(tokens.len() - matched);
                            break tok;
                        }
                    } else {
                        matched = 0;
                    }
                }
                None if depth == 0 => break tok,
                None => {}
            }
        };

        if start.kind == TokenKind::GroupOpen
            && tokens.len() >= 2
            && tokens.last().is_some_and(|t| t.kind == TokenKind::GroupClose)
        {
            tokens.pop();
            tokens.remove(0);
        }
        tokens.reverse();
        Ok(MacroArg { tokens, start, end })
    }

    fn consume_args(&mut self, num_args: usize) -> Result<Vec<Vec<Token>>, ParseError> {
        self.consume_args_with_delims(num_args, None)
    }

    fn is_defined(&self, name: &str) -> bool {
        self.macros.has(name)
            || self.ctx.functions.contains_key(name)
            || IMPLICIT_COMMANDS.contains(name)
            || self.ctx.symbols.contains(Mode::Math, name)
            || self.ctx.symbols.contains(Mode::Text, name)
    }

    fn is_expandable(&self, name: &str) -> bool {
        match self.macros.get(name) {
            Some(MacroDefinition::Expansion(e)) => !e.unexpandable,
            Some(_) => true,
            None => false,
        }
    }

    fn begin_group(&mut self) {
        self.macros.begin_group();
    }

    fn end_group(&mut self) {
        self.macros.end_group();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand_all(input: &str, settings: &Settings) -> Result<Vec<String>, ParseError> {
        let ctx = TexboxContext::default();
        let mut expander = MacroExpander::new(input, settings, Mode::Math, &ctx);
        let mut out = Vec::new();
        loop {
            let token = expander.expand_next_token()?;
            if token.is_eof() {
                return Ok(out);
            }
            out.push(token.as_str().to_owned());
        }
    }

    #[test]
    fn expands_user_macros_with_arguments() {
        let mut macros = crate::macros::MacroMap::default();
        macros.insert(r"\pair".to_owned(), r"(#1,#2)".into());
        let settings = Settings::builder().macros(macros).build();
        let tokens = expand_all(r"\pair{a}b", &settings).unwrap();
        assert_eq!(tokens, ["(", "a", ",", "b", ")"]);
    }

    #[test]
    fn builtin_aliases_expand() {
        let settings = Settings::default();
        assert_eq!(expand_all(r"\le", &settings).unwrap(), [r"\leq"]);
        assert_eq!(
            expand_all(r"\R", &settings).unwrap(),
            [r"\mathbb", "{", "R", "}"]
        );
    }

    #[test]
    fn double_hash_escapes() {
        let settings = Settings::default();
        let tokens = expand_all(r"\def\x#1{#1##}\x{a}", &settings).unwrap();
        assert_eq!(tokens, ["a", "#"]);
    }

    #[test]
    fn delimited_parameters() {
        let settings = Settings::default();
        let tokens = expand_all(r"\def\x#1.{[#1]}\x ab.", &settings).unwrap();
        assert_eq!(tokens, ["[", "a", "b", "]"]);
    }

    #[test]
    fn self_recursion_hits_the_depth_limit() {
        let settings = Settings::builder().max_expansion_depth(10).build();
        let err = expand_all(r"\def\a{\a}\a", &settings).unwrap_err();
        assert_eq!(
            *err.kind,
            ParseErrorKind::RecursionLimitExceeded { limit: 10 }
        );
    }

    #[test]
    fn flat_expansion_hits_the_count_limit() {
        let settings = Settings::builder().max_expand(5).build();
        let err = expand_all(r"\def\a{x}\a\a\a\a\a\a", &settings).unwrap_err();
        assert_eq!(*err.kind, ParseErrorKind::RecursionLimitExceeded { limit: 5 });
    }

    #[test]
    fn groups_scope_local_definitions() {
        let settings = Settings::default();
        let ctx = TexboxContext::default();
        let mut expander = MacroExpander::new(r"\def\a{x}", &settings, Mode::Math, &ctx);
        expander.begin_group();
        assert!(expander.expand_next_token().unwrap().is_eof());
        assert!(expander.is_expandable(r"\a"));
        expander.end_group();
        assert!(!expander.is_defined(r"\a"));
    }

    #[test]
    fn unbalanced_argument() {
        let settings = Settings::default();
        let err = expand_all(r"\def\x#1{#1}\x{ab", &settings).unwrap_err();
        assert!(matches!(*err.kind, ParseErrorKind::UnbalancedGroup { .. }));
    }

    #[test]
    fn newcommand_rejects_redefinition() {
        let settings = Settings::default();
        let err = expand_all(r"\newcommand{\frac}{x}", &settings).unwrap_err();
        assert!(matches!(*err.kind, ParseErrorKind::NewcommandRedefinition { .. }));

        let tokens = expand_all(r"\newcommand{\sq}[1]{#1^2}\sq{y}", &settings).unwrap();
        assert_eq!(tokens, ["y", "^", "2"]);
    }

    #[test]
    fn edef_expands_its_body_at_definition_time() {
        let settings = Settings::default();
        let tokens = expand_all(r"\def\a{x}\edef\b{\a}\def\a{y}\b", &settings).unwrap();
        assert_eq!(tokens, ["x"]);
    }

    #[test]
    fn let_copies_the_current_meaning() {
        let settings = Settings::default();
        let tokens = expand_all(r"\def\a{x}\let\b=\a\def\a{y}\b\a", &settings).unwrap();
        assert_eq!(tokens, ["x", "y"]);
    }

    #[test]
    fn scan_argument_pushes_an_end_marker() {
        let settings = Settings::default();
        let ctx = TexboxContext::default();
        let mut expander = MacroExpander::new("[ab]{c}", &settings, Mode::Math, &ctx);
        assert!(expander.scan_argument(true).unwrap().is_some());
        assert_eq!(expander.pop_token().as_str(), "a");
        assert_eq!(expander.pop_token().as_str(), "b");
        assert!(expander.pop_token().is_eof());
        assert!(expander.scan_argument(true).unwrap().is_none());
    }
}
