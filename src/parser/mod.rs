//! The parser turns the token stream into a tree of [`ParseNode`]s.
//!
//! It is a recursive descent parser with one token of lookahead, reading
//! fully expanded tokens from the [`MacroExpander`]. Commands with arguments
//! are dispatched through the function registry of the [`TexboxContext`];
//! everything else is a symbol, a group or a script.

pub mod parse_node;

use alloc::sync::Arc;
use core::iter;

use phf::phf_set;

pub use parse_node::*;

use crate::context::TexboxContext;
use crate::define_function::{ArgType, ArgumentSpec, FunctionContext};
use crate::macro_expander::{IMPLICIT_COMMANDS, MacroExpander};
use crate::macros::{MacroContextInterface as _, MacroDefinition};
use crate::symbols::{Group, Mode, NonAtom};
use crate::types::{
    BreakToken, ParseError, ParseErrorKind, Settings, SourceLocation, Token,
};
use crate::units::{Measurement, Unit};

/// Tokens that end any expression.
const END_OF_EXPRESSION: phf::Set<&'static str> = phf_set! {
    "}",
    "\\endgroup",
    "\\end",
    "\\right",
    "&",
};

/// Parser state for one input string.
///
/// The parser owns the macro expander (and through it the lexer), and keeps
/// a single lookahead token. Functions registered in the context receive a
/// mutable reference to the parser so they can read their own arguments or
/// the rest of the enclosing group.
///
/// ```
/// use texbox::parser::{ParseNode, Parser};
/// use texbox::{Settings, TexboxContext};
///
/// let settings = Settings::default();
/// let ctx = TexboxContext::default();
/// let mut parser = Parser::new(r"\frac{a}{b} + x^2", &settings, &ctx);
/// let ParseNode::OrdGroup(root) = parser.parse().unwrap() else {
///     unreachable!()
/// };
/// assert_eq!(root.body.len(), 3);
/// ```
pub struct Parser<'a> {
    /// Current mode; switched by `\text` and friends.
    pub mode: Mode,
    /// The macro expander supplying tokens.
    pub gullet: MacroExpander<'a>,
    /// Settings of the current render.
    pub settings: &'a Settings,
    /// Registered functions, environments and symbols.
    pub ctx: &'a TexboxContext,
    next_token: Option<Token>,
    depth: usize,
}

impl<'a> Parser<'a> {
    /// A parser positioned at the start of `input`, in math mode.
    #[must_use]
    pub fn new(input: &str, settings: &'a Settings, ctx: &'a TexboxContext) -> Self {
        let mode = Mode::Math;
        Self {
            mode,
            gullet: MacroExpander::new(input, settings, mode, ctx),
            settings,
            ctx,
            next_token: None,
            depth: 0,
        }
    }

    /// Checks that the lookahead token is `text`, and consumes it if asked.
    ///
    /// A missing or extra `}` is reported as an unbalanced group.
    pub fn expect(&mut self, text: &str, consume: bool) -> Result<(), ParseError> {
        let token = self.fetch()?;
        if token.as_str() != text {
            let found = token.as_str().to_owned();
            let kind = if text == "}" || found == "}" {
                ParseErrorKind::UnbalancedGroup {
                    expected: text.to_owned(),
                    found,
                }
            } else {
                ParseErrorKind::ExpectedToken {
                    expected: text.to_owned(),
                    found,
                }
            };
            return Err(ParseError::with_token(kind, token));
        }
        if consume {
            self.consume();
        }
        Ok(())
    }

    /// Drops the lookahead token.
    pub fn consume(&mut self) {
        self.next_token = None;
    }

    /// The lookahead token, expanding macros to get one if needed.
    pub fn fetch(&mut self) -> Result<&Token, ParseError> {
        match &mut self.next_token {
            Some(token) => Ok(token),
            slot => {
                let token = self.gullet.expand_next_token()?;
                Ok(slot.insert(token))
            }
        }
    }

    /// Switches between math and text mode.
    pub const fn switch_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.gullet.switch_mode(mode);
    }

    /// Parses the whole input.
    ///
    /// The result is always an [`ParseNode::OrdGroup`] spanning the input.
    /// Macro definitions made during the parse are dropped when it ends,
    /// whether it succeeded or not.
    pub fn parse(&mut self) -> Result<ParseNode, ParseError> {
        self.gullet.begin_group();

        if self.settings.color_is_text_color {
            self.gullet.macros_mut().set(
                "\\color",
                Some(MacroDefinition::StaticStr("\\textcolor")),
                false,
            );
        }

        let result = self
            .parse_expression(false, None)
            .and_then(|body| self.expect("EOF", true).map(|()| body));
        self.gullet.end_groups();
        let body = result?;

        let input = Arc::clone(self.gullet.input());
        let end = input.len();
        Ok(ParseNode::OrdGroup(ParseNodeOrdGroup {
            mode: Mode::Math,
            loc: Some(SourceLocation::new(input, 0, end)),
            body,
            semisimple: false,
        }))
    }

    /// Parses atoms until the end of the current expression.
    ///
    /// Stops before `}`, `\end`, `\right`, `&`, the end of input, the
    /// `break_on_token_text` token and, when `break_on_infix` is set, before
    /// an infix operator such as `\over`. Infix operators found in the
    /// expression are resolved before returning.
    pub fn parse_expression(
        &mut self,
        break_on_infix: bool,
        break_on_token_text: Option<BreakToken>,
    ) -> Result<Vec<ParseNode>, ParseError> {
        let ctx = self.ctx;
        let mut body = Vec::new();
        loop {
            if self.mode == Mode::Math {
                self.consume_spaces()?;
            }
            let lex = self.fetch()?;
            let text = lex.as_str();
            if lex.is_eof() || END_OF_EXPRESSION.contains(text) {
                break;
            }
            if break_on_token_text.is_some_and(|token| token.as_ref() == text) {
                break;
            }
            if break_on_infix && ctx.functions.get(text).is_some_and(|func| func.infix) {
                break;
            }
            match self.parse_atom(break_on_token_text)? {
                Some(atom) => body.push(atom),
                None => break,
            }
        }

        if self.mode == Mode::Text {
            form_ligatures(&mut body);
        }
        self.handle_infix_nodes(body)
    }

    /// Skips space tokens.
    pub fn consume_spaces(&mut self) -> Result<(), ParseError> {
        while self.fetch()?.as_str() == " " {
            self.consume();
        }
        Ok(())
    }

    /// Rewrites `a \over b` into the function the infix operator stands for.
    fn handle_infix_nodes(&mut self, mut body: Vec<ParseNode>) -> Result<Vec<ParseNode>, ParseError> {
        let positions: Vec<usize> = body
            .iter()
            .enumerate()
            .filter(|(_, node)| matches!(node, ParseNode::Infix(_)))
            .map(|(index, _)| index)
            .collect();
        let Some(&index) = positions.first() else {
            return Ok(body);
        };
        if let Some(&second) = positions.get(1) {
            return Err(ParseError::with_token(
                ParseErrorKind::MultipleInfixOperators,
                &body[second],
            ));
        }

        let denom_body = body.split_off(index + 1);
        let Some(ParseNode::Infix(infix)) = body.pop() else {
            return Ok(body);
        };
        let numer = wrap_ordgroup(body, self.mode);
        let denom = wrap_ordgroup(denom_body, self.mode);
        let token = infix.token.clone();
        let replace_with = infix.replace_with.clone();
        let args = if replace_with == "\\\\abovefrac" {
            vec![numer, ParseNode::Infix(infix), denom]
        } else {
            vec![numer, denom]
        };
        let node = self.call_function(&replace_with, args, Vec::new(), token.as_ref(), None)?;
        Ok(vec![node])
    }

    /// Parses a `^` or `_` and the group after it.
    fn handle_sup_subscript(&mut self, name: &str) -> Result<ParseNode, ParseError> {
        let symbol_token = self.fetch()?.clone();
        self.consume();
        self.consume_spaces()?;
        self.parse_group(name, None)?.ok_or_else(|| {
            ParseError::with_token(
                ParseErrorKind::ExpectedGroupAfter {
                    symbol: symbol_token.as_str().to_owned(),
                },
                &symbol_token,
            )
        })
    }

    /// Combines a newly parsed script with one already attached to the same
    /// base. A second script is an error; when the error policy lets it
    /// through, the extra script is kept as an inline error marker.
    fn attach_script(
        &self,
        existing: Option<ParseNode>,
        script: ParseNode,
        lex: &Token,
        kind: ParseErrorKind,
    ) -> Result<ParseNode, ParseError> {
        let Some(existing) = existing else {
            return Ok(script);
        };
        let loc = merge_loc(lex.loc.clone(), script.loc());
        let error = self
            .settings
            .error_policy()
            .recover(ParseError::with_token(kind, &loc))?;
        let text = loc
            .as_ref()
            .map_or_else(|| lex.as_str().to_owned(), |loc| loc.text().to_owned());
        let marker = self.error_node(&error, text, loc);
        Ok(ParseNode::OrdGroup(ParseNodeOrdGroup {
            mode: self.mode,
            loc: merge_loc(existing.loc().cloned(), marker.loc()),
            body: vec![existing, marker],
            semisimple: false,
        }))
    }

    /// Parses a group with its optional scripts and `\limits`.
    fn parse_atom(
        &mut self,
        break_on_token_text: Option<BreakToken>,
    ) -> Result<Option<ParseNode>, ParseError> {
        let mut base = self.parse_group("atom", break_on_token_text)?;
        if self.mode == Mode::Text {
            return Ok(base);
        }

        let mut span = base.as_ref().and_then(|node| node.loc().cloned());
        let mut superscript = None;
        let mut subscript = None;
        loop {
            self.consume_spaces()?;
            let lex = self.fetch()?.clone();
            match lex.as_str() {
                "\\limits" | "\\nolimits" => {
                    let Some(ParseNode::Op(op)) = &mut base else {
                        return Err(ParseError::with_token(
                            ParseErrorKind::LimitsMustFollowBase,
                            &lex,
                        ));
                    };
                    op.limits = lex.as_str() == "\\limits";
                    op.always_handle_sup_sub = true;
                    self.consume();
                }
                "^" => {
                    let script = self.handle_sup_subscript("superscript")?;
                    span = merge_loc(merge_loc(span, lex.loc.as_ref()), script.loc());
                    superscript = Some(self.attach_script(
                        superscript,
                        script,
                        &lex,
                        ParseErrorKind::DoubleSuperscript,
                    )?);
                }
                "_" => {
                    let script = self.handle_sup_subscript("subscript")?;
                    span = merge_loc(merge_loc(span, lex.loc.as_ref()), script.loc());
                    subscript = Some(self.attach_script(
                        subscript,
                        script,
                        &lex,
                        ParseErrorKind::DoubleSubscript,
                    )?);
                }
                "'" => {
                    self.consume();
                    let mut count = 1;
                    let mut last = lex.clone();
                    while self.fetch()?.as_str() == "'" {
                        count += 1;
                        last = self.fetch()?.clone();
                        self.consume();
                    }
                    let prime = ParseNode::TextOrd(ParseNodeSymbol {
                        mode: self.mode,
                        loc: None,
                        text: "\\prime".to_owned(),
                    });
                    let mut primes: Vec<ParseNode> = iter::repeat_n(prime, count).collect();
                    let mut primes_loc = SourceLocation::range(lex.loc.as_ref(), last.loc.as_ref());
                    if self.fetch()?.as_str() == "^" {
                        let script = self.handle_sup_subscript("superscript")?;
                        primes_loc = merge_loc(primes_loc, script.loc());
                        primes.push(script);
                    }
                    span = merge_loc(span, primes_loc.as_ref());
                    let group = ParseNode::OrdGroup(ParseNodeOrdGroup {
                        mode: self.mode,
                        loc: primes_loc,
                        body: primes,
                        semisimple: false,
                    });
                    superscript = Some(self.attach_script(
                        superscript,
                        group,
                        &lex,
                        ParseErrorKind::DoubleSuperscript,
                    )?);
                }
                _ => break,
            }
        }

        if superscript.is_none() && subscript.is_none() {
            return Ok(base);
        }
        Ok(Some(ParseNode::SupSub(ParseNodeSupSub {
            mode: self.mode,
            loc: span,
            base: base.map(Box::new),
            sup: superscript.map(Box::new),
            sub: subscript.map(Box::new),
        })))
    }

    /// Parses an argument of the given type.
    pub fn parse_group_of_type(
        &mut self,
        name: &str,
        arg_type: Option<ArgType>,
        optional: bool,
    ) -> Result<Option<ParseNode>, ParseError> {
        match arg_type {
            Some(ArgType::Color) => self.parse_color_group(optional),
            Some(ArgType::Size) => self.parse_size_group(optional),
            Some(ArgType::Primitive) if !optional => self.parse_group(name, None),
            Some(ArgType::Raw) => Ok(self.parse_string_group(optional)?.map(|token| {
                ParseNode::Raw(ParseNodeRaw {
                    mode: Mode::Text,
                    string: token.as_str().to_owned(),
                    loc: token.loc,
                })
            })),
            Some(ArgType::Mode(mode)) => self.parse_argument_group(optional, Some(mode)),
            Some(ArgType::Original | ArgType::Primitive) | None => {
                self.parse_argument_group(optional, None)
            }
        }
    }

    /// Reads an argument as plain text, expanding macros in it.
    fn parse_string_group(&mut self, optional: bool) -> Result<Option<Token>, ParseError> {
        let Some(arg_token) = self.gullet.scan_argument(optional)? else {
            return Ok(None);
        };
        let mut text = String::new();
        loop {
            let token = self.fetch()?;
            if token.is_eof() {
                break;
            }
            text.push_str(token.as_str());
            self.consume();
        }
        self.consume();
        Ok(Some(Token::new(text, arg_token.loc)))
    }

    /// Reads tokens for as long as their concatenation satisfies `accepts`.
    fn parse_regex_group(
        &mut self,
        accepts: fn(&str) -> bool,
        context: &'static str,
    ) -> Result<Token, ParseError> {
        let first = self.fetch()?.clone();
        let mut last = first.clone();
        let mut text = String::new();
        loop {
            let token = self.fetch()?;
            if token.is_eof() {
                break;
            }
            let candidate = format!("{text}{}", token.as_str());
            if !accepts(&candidate) {
                break;
            }
            last = token.clone();
            text = candidate;
            self.consume();
        }
        if text.is_empty() {
            return Err(ParseError::with_token(
                ParseErrorKind::InvalidValue {
                    context,
                    value: first.as_str().to_owned(),
                },
                &first,
            ));
        }
        Ok(first.range(&last, text))
    }

    fn parse_color_group(&mut self, optional: bool) -> Result<Option<ParseNode>, ParseError> {
        let Some(token) = self.parse_string_group(optional)? else {
            return Ok(None);
        };
        let Some(color) = normalize_color(token.as_str()) else {
            return Err(ParseError::with_token(
                ParseErrorKind::InvalidColor {
                    color: token.as_str().to_owned(),
                },
                &token,
            ));
        };
        Ok(Some(ParseNode::ColorToken(ParseNodeColorToken {
            mode: self.mode,
            loc: token.loc,
            color,
        })))
    }

    /// Parses a dimension like `3mu` or `{-1.5em}`.
    ///
    /// A required size may be written without braces; an empty one (as in
    /// `\rule{}{1em}`) reads as `0pt` and is marked blank.
    pub fn parse_size_group(&mut self, optional: bool) -> Result<Option<ParseNode>, ParseError> {
        self.gullet.consume_spaces();
        let token = if !optional && self.gullet.future().as_str() != "{" {
            Some(self.parse_regex_group(is_size_prefix, "size")?)
        } else {
            self.parse_string_group(optional)?
        };
        let Some(token) = token else {
            return Ok(None);
        };

        let mut text = token.as_str().to_owned();
        let mut is_blank = false;
        if !optional && text.trim().is_empty() {
            text = "0pt".to_owned();
            is_blank = true;
        }
        let Some((number, unit)) = parse_size_with_unit(&text) else {
            return Err(ParseError::with_token(
                ParseErrorKind::InvalidSize { size: text.clone() },
                &token,
            ));
        };
        let unit: Unit = unit.parse().map_err(|_| {
            ParseError::with_token(
                ParseErrorKind::InvalidUnit {
                    unit: unit.to_owned(),
                },
                &token,
            )
        })?;
        Ok(Some(ParseNode::Size(ParseNodeSize {
            mode: self.mode,
            loc: token.loc,
            value: Measurement::new(number, unit),
            is_blank,
        })))
    }

    /// Parses a braced (or single-token) argument as its own expression,
    /// optionally in another mode.
    pub fn parse_argument_group(
        &mut self,
        optional: bool,
        mode: Option<Mode>,
    ) -> Result<Option<ParseNode>, ParseError> {
        let Some(arg_token) = self.gullet.scan_argument(optional)? else {
            return Ok(None);
        };
        self.nested(&arg_token, |parser| {
            let outer_mode = parser.mode;
            if let Some(mode) = mode {
                parser.switch_mode(mode);
            }
            parser.gullet.begin_group();
            let body = parser.parse_expression(false, Some(BreakToken::Eof))?;
            parser.expect("EOF", true)?;
            parser.gullet.end_group();
            let mode = parser.mode;
            parser.switch_mode(outer_mode);
            Ok(Some(ParseNode::OrdGroup(ParseNodeOrdGroup {
                mode,
                loc: arg_token.loc.clone(),
                body,
                semisimple: false,
            })))
        })
    }

    /// Runs `parse` one nesting level deeper.
    ///
    /// Every group, argument and script passes through here, so the limit
    /// bounds the recursion of both parsing and layout.
    fn nested<T>(
        &mut self,
        token: &Token,
        parse: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        let limit = self.settings.max_nesting_depth;
        if self.depth >= limit {
            return Err(ParseError::with_token(ParseErrorKind::NestingTooDeep { limit }, token));
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    /// Parses a braced group, a function call or a symbol.
    ///
    /// `name` describes where the group appears ("atom", "superscript", an
    /// argument) for error messages. An unknown control sequence becomes an
    /// error node when the strict mode allows it.
    pub fn parse_group(
        &mut self,
        name: &str,
        break_on_token_text: Option<BreakToken>,
    ) -> Result<Option<ParseNode>, ParseError> {
        let first = self.fetch()?.clone();
        self.nested(&first, |parser| parser.parse_group_at(&first, name, break_on_token_text))
    }

    fn parse_group_at(
        &mut self,
        first: &Token,
        name: &str,
        break_on_token_text: Option<BreakToken>,
    ) -> Result<Option<ParseNode>, ParseError> {
        let text = first.as_str();

        if text == "{" || text == "\\begingroup" {
            self.consume();
            let semisimple = text == "\\begingroup";
            let (end, break_token) = if semisimple {
                ("\\endgroup", None)
            } else {
                ("}", Some(BreakToken::RightBrace))
            };
            self.gullet.begin_group();
            let body = self.parse_expression(false, break_token)?;
            let last = self.fetch()?.clone();
            self.expect(end, true)?;
            self.gullet.end_group();
            return Ok(Some(ParseNode::OrdGroup(ParseNodeOrdGroup {
                mode: self.mode,
                loc: SourceLocation::range(first.loc.as_ref(), last.loc.as_ref()),
                body,
                semisimple,
            })));
        }

        let result = match self.parse_function(break_on_token_text, Some(name))? {
            Some(node) => Some(node),
            None => self.parse_symbol()?,
        };
        if result.is_none() && first.is_command() && !IMPLICIT_COMMANDS.contains(text) {
            let error = ParseError::with_token(
                ParseErrorKind::UndefinedControlSequence {
                    name: text.to_owned(),
                },
                first,
            );
            let error = self.settings.error_policy().recover(error)?;
            self.consume();
            return Ok(Some(self.error_node(&error, text.to_owned(), first.loc.clone())));
        }
        Ok(result)
    }

    /// Parses a call to a registered function, or returns `None` when the
    /// lookahead token is not one.
    pub fn parse_function(
        &mut self,
        break_on_token_text: Option<BreakToken>,
        name: Option<&str>,
    ) -> Result<Option<ParseNode>, ParseError> {
        let ctx = self.ctx;
        let token = self.fetch()?.clone();
        let func = token.as_str();
        let Some(func_data) = ctx.functions.get(func) else {
            return Ok(None);
        };
        self.consume();

        if let Some(name) = name
            && name != "atom"
            && !func_data.allowed_in_argument
        {
            return Err(ParseError::with_token(
                ParseErrorKind::FunctionMissingArguments {
                    func: func.to_owned(),
                    context: name.to_owned(),
                },
                &token,
            ));
        }
        let allowed = match self.mode {
            Mode::Text => func_data.allowed_in_text,
            Mode::Math => func_data.allowed_in_math,
        };
        if !allowed {
            return Err(ParseError::with_token(
                ParseErrorKind::FunctionDisallowedInMode {
                    func: func.to_owned(),
                    mode: self.mode,
                },
                &token,
            ));
        }

        let (args, opt_args) = self.parse_arguments(func, func_data)?;
        self.call_function(func, args, opt_args, Some(&token), break_on_token_text)
            .map(Some)
    }

    /// Runs the handler of the function registered as `name`.
    pub fn call_function(
        &mut self,
        name: &str,
        args: Vec<ParseNode>,
        opt_args: Vec<Option<ParseNode>>,
        token: Option<&Token>,
        break_on_token_text: Option<BreakToken>,
    ) -> Result<ParseNode, ParseError> {
        let ctx = self.ctx;
        let Some(func) = ctx.functions.get(name) else {
            return Err(ParseError::with_token(
                ParseErrorKind::UnknownFunction {
                    name: name.to_owned(),
                },
                &token.and_then(|token| token.loc.clone()),
            ));
        };
        let context = FunctionContext {
            func_name: name.to_owned(),
            parser: self,
            token,
            break_on_token_text,
        };
        (func.handler)(context, args, opt_args)
    }

    /// Parses the optional and mandatory arguments of a function or
    /// environment.
    pub fn parse_arguments(
        &mut self,
        func: &str,
        spec: &dyn ArgumentSpec,
    ) -> Result<(Vec<ParseNode>, Vec<Option<ParseNode>>), ParseError> {
        let num_optional = spec.num_optional_args();
        let total = spec.num_args() + num_optional;
        let mut args = Vec::with_capacity(spec.num_args());
        let mut opt_args = Vec::with_capacity(num_optional);

        for i in 0..total {
            let optional = i < num_optional;
            let mut arg_type = spec.arg_types().and_then(|types| types.get(i)).copied();
            // \sqrt without an index reads its radicand like a primitive
            let bare_sqrt = spec.node_type() == Some(NodeType::Sqrt)
                && i == 1
                && opt_args.first().is_some_and(Option::is_none);
            if (spec.primitive() && arg_type.is_none()) || bare_sqrt {
                arg_type = Some(ArgType::Primitive);
            }

            let context = format!("argument to '{func}'");
            let arg = self.parse_group_of_type(&context, arg_type, optional)?;
            if optional {
                opt_args.push(arg);
            } else if let Some(arg) = arg {
                args.push(arg);
            } else {
                let token = self.fetch()?.clone();
                return Err(ParseError::with_token(
                    ParseErrorKind::ExpectedGroupAfter {
                        symbol: func.to_owned(),
                    },
                    &token,
                ));
            }
        }
        Ok((args, opt_args))
    }

    /// Parses a single symbol, wrapping it in accents for any combining
    /// marks that follow it.
    fn parse_symbol(&mut self) -> Result<Option<ParseNode>, ParseError> {
        let nucleus = self.fetch()?.clone();
        if nucleus.is_eof() {
            return Ok(None);
        }
        let (base, marks) = split_combining_marks(nucleus.as_str());
        let mut text = base;
        if !marks.is_empty() && self.mode == Mode::Math {
            text = match text {
                "i" => "\u{0131}",
                "j" => "\u{0237}",
                other => other,
            };
        }

        let loc = nucleus.loc.clone();
        let symbol = |mode: Mode| ParseNodeSymbol {
            mode,
            loc: loc.clone(),
            text: text.to_owned(),
        };
        let mut node = if self.mode == Mode::Text && matches!(text, "^" | "_") {
            ParseNode::TextOrd(symbol(Mode::Text))
        } else if let Some(info) = self.ctx.symbols.get(self.mode, text) {
            match info.group {
                Group::Atom(family) => ParseNode::Atom(ParseNodeAtom {
                    mode: self.mode,
                    loc: loc.clone(),
                    family,
                    text: text.to_owned(),
                }),
                Group::NonAtom(NonAtom::MathOrd) => ParseNode::MathOrd(symbol(self.mode)),
                Group::NonAtom(NonAtom::Spacing) => ParseNode::Spacing(symbol(self.mode)),
                Group::NonAtom(NonAtom::TextOrd | NonAtom::AccentToken | NonAtom::OpToken) => {
                    ParseNode::TextOrd(symbol(self.mode))
                }
            }
        } else if text.chars().next().is_some_and(|ch| !ch.is_ascii()) {
            ParseNode::TextOrd(symbol(Mode::Text))
        } else {
            return Ok(None);
        };
        self.consume();

        for mark in marks.chars() {
            let Some(label) = combining_accent(mark, self.mode) else {
                return Err(ParseError::with_token(
                    ParseErrorKind::UnknownAccent {
                        label: format!("U+{:04X}", u32::from(mark)),
                    },
                    &nucleus,
                ));
            };
            node = ParseNode::Accent(Box::new(ParseNodeAccent {
                mode: self.mode,
                loc: loc.clone(),
                label: label.to_owned(),
                is_stretchy: false,
                is_shifty: true,
                base: node,
            }));
        }
        Ok(Some(node))
    }

    /// An inline error marker for a recovered error.
    #[must_use]
    pub fn error_node(&self, error: &ParseError, text: String, loc: Option<SourceLocation>) -> ParseNode {
        ParseNode::Error(ParseNodeError {
            mode: self.mode,
            loc,
            message: error.kind.to_string(),
            text,
        })
    }
}

fn merge_loc(span: Option<SourceLocation>, next: Option<&SourceLocation>) -> Option<SourceLocation> {
    match (span, next) {
        (Some(span), Some(next)) => SourceLocation::range(Some(&span), Some(next)).or(Some(span)),
        (span, next) => span.or_else(|| next.cloned()),
    }
}

/// A group holding `nodes`, or the single group they already are.
fn wrap_ordgroup(mut nodes: Vec<ParseNode>, mode: Mode) -> ParseNode {
    if nodes.len() == 1 && matches!(nodes[0], ParseNode::OrdGroup(_)) {
        return nodes.remove(0);
    }
    let loc = match (nodes.first(), nodes.last()) {
        (Some(first), Some(last)) => SourceLocation::range(first.loc(), last.loc()),
        _ => None,
    };
    ParseNode::OrdGroup(ParseNodeOrdGroup {
        mode,
        loc,
        body: nodes,
        semisimple: false,
    })
}

fn ord_text(node: &ParseNode) -> Option<&str> {
    match node {
        ParseNode::TextOrd(symbol) => Some(&symbol.text),
        _ => None,
    }
}

/// Merges the text-mode ligatures `--`, `---`, ` `` ` and `''`.
fn form_ligatures(group: &mut Vec<ParseNode>) {
    let mut i = 0;
    while i + 1 < group.len() {
        let third = group.get(i + 2).and_then(ord_text);
        let ligature = match (ord_text(&group[i]), ord_text(&group[i + 1]), third) {
            (Some("-"), Some("-"), Some("-")) => Some(("---", 3)),
            (Some("-"), Some("-"), _) => Some(("--", 2)),
            (Some("'"), Some("'"), _) => Some(("''", 2)),
            (Some("`"), Some("`"), _) => Some(("``", 2)),
            _ => None,
        };
        if let Some((text, len)) = ligature {
            let node = ParseNode::TextOrd(ParseNodeSymbol {
                mode: group[i].mode(),
                loc: SourceLocation::range(group[i].loc(), group[i + len - 1].loc()),
                text: text.to_owned(),
            });
            group[i] = node;
            group.drain(i + 1..i + len);
        }
        i += 1;
    }
}

const fn is_combining_mark(ch: char) -> bool {
    matches!(ch as u32, 0x0300..=0x036F)
}

/// Splits a character token into its base and trailing combining marks.
fn split_combining_marks(text: &str) -> (&str, &str) {
    let base_len = text
        .char_indices()
        .rev()
        .find(|&(_, ch)| !is_combining_mark(ch))
        .map_or(0, |(index, ch)| index + ch.len_utf8());
    text.split_at(base_len)
}

/// The accent command a combining mark stands for.
const fn combining_accent(mark: char, mode: Mode) -> Option<&'static str> {
    let (math, text) = match mark {
        '\u{0300}' => ("\\grave", "\\`"),
        '\u{0301}' => ("\\acute", "\\'"),
        '\u{0302}' => ("\\hat", "\\^"),
        '\u{0303}' => ("\\tilde", "\\~"),
        '\u{0304}' => ("\\bar", "\\="),
        '\u{0306}' => ("\\breve", "\\u"),
        '\u{0307}' => ("\\dot", "\\."),
        '\u{0308}' => ("\\ddot", "\\\""),
        '\u{030A}' => ("\\mathring", "\\r"),
        '\u{030C}' => ("\\check", "\\v"),
        _ => return None,
    };
    Some(match mode {
        Mode::Math => math,
        Mode::Text => text,
    })
}

/// Whether `text` can still grow into a dimension: sign, number, unit.
fn is_size_prefix(text: &str) -> bool {
    let rest = text.strip_prefix(['+', '-']).unwrap_or(text);
    let rest = rest.trim_start_matches(' ');
    let after_int = rest.trim_start_matches(|ch: char| ch.is_ascii_digit());
    let has_int = after_int.len() < rest.len();
    let after_number = match after_int.strip_prefix('.') {
        Some(fraction) => fraction.trim_start_matches(|ch: char| ch.is_ascii_digit()),
        None if has_int => after_int,
        None => return rest.is_empty(),
    };
    let unit = after_number.trim_start_matches(' ');
    let after_unit = unit.trim_start_matches(|ch: char| ch.is_ascii_lowercase());
    unit.len() - after_unit.len() <= 2 && after_unit.trim_start_matches(' ').is_empty()
}

/// Splits `-1.5 em` into `(-1.5, "em")`.
fn parse_size_with_unit(text: &str) -> Option<(f64, &str)> {
    let text = text.trim();
    let (sign, rest) = match text.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, text.strip_prefix('+').unwrap_or(text)),
    };
    let unit_start = rest.find(|ch: char| ch.is_ascii_lowercase())?;
    let (number, unit) = rest.split_at(unit_start);
    let number = number.trim();
    if number.is_empty() || number == "." {
        return None;
    }
    let value: f64 = number.parse().ok()?;
    Some((sign * value, unit.trim_end()))
}

/// Validates a color argument; six bare hex digits get a `#`.
fn normalize_color(text: &str) -> Option<String> {
    let is_hex = |s: &str| !s.is_empty() && s.chars().all(|ch| ch.is_ascii_hexdigit());
    if let Some(hex) = text.strip_prefix('#') {
        return (matches!(hex.len(), 3 | 4 | 6 | 8) && is_hex(hex)).then(|| text.to_owned());
    }
    if text.len() == 6 && is_hex(text) {
        return Some(format!("#{text}"));
    }
    (!text.is_empty() && text.chars().all(|ch| ch.is_ascii_alphabetic())).then(|| text.to_owned())
}
