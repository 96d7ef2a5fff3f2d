//! Built-in macros
//!
//! String macros cover spacing commands, symbol aliases and small
//! conveniences. Function macros implement the definition commands
//! (`\def` and friends, `\newcommand` and friends, `\let`, `\global`) and
//! the few primitives that inspect the token stream.

use phf::phf_map;

use crate::macros::{MacroContextInterface, MacroDefinition, MacroExpansion, MacroExpansionResult};
use crate::symbols::Mode;
use crate::types::{ParseError, ParseErrorKind, Token, TokenKind, TokenText};

/// Tokens that cannot be the name of a definition.
fn is_reserved_name(name: &str) -> bool {
    matches!(name, "\\" | "{" | "}" | "$" | "&" | "#" | "^" | "_" | "EOF")
}

fn definition_name(context: &mut dyn MacroContextInterface<'_>) -> Result<Token, ParseError> {
    let name_tok = context.pop_token();
    if is_reserved_name(name_tok.as_str()) {
        return Err(ParseError::with_token(
            ParseErrorKind::ExpectedControlSequence,
            &name_tok,
        ));
    }
    Ok(name_tok)
}

// \newcommand{\name}[n]{body}, \renewcommand, \providecommand
fn new_command(
    context: &mut dyn MacroContextInterface<'_>,
    exists_ok: bool,
    nonexists_ok: bool,
    skip_if_exists: bool,
) -> Result<MacroExpansionResult, ParseError> {
    let arg = context.consume_arg(None)?;
    let [name_tok] = arg.tokens.as_slice() else {
        return Err(ParseError::with_token(
            ParseErrorKind::ExpectedControlSequence,
            &arg.start,
        ));
    };
    let name = name_tok.as_str().to_owned();

    let exists = context.is_defined(&name);
    if exists && !exists_ok {
        return Err(ParseError::with_token(
            ParseErrorKind::NewcommandRedefinition { name },
            name_tok,
        ));
    }
    if !exists && !nonexists_ok {
        return Err(ParseError::with_token(
            ParseErrorKind::RenewcommandNonexistent { name },
            name_tok,
        ));
    }

    let mut num_args = 0;
    let mut body = context.consume_arg(None)?;
    if body.tokens.len() == 1 && body.tokens[0].as_str() == "[" {
        let mut count = String::new();
        let mut token = context.expand_next_token()?;
        while token.as_str() != "]" && !token.is_eof() {
            count.push_str(token.as_str());
            token = context.expand_next_token()?;
        }
        num_args = match count.trim().parse::<usize>() {
            Ok(n) if n <= 9 => n,
            _ => {
                return Err(ParseError::with_token(
                    ParseErrorKind::InvalidNewcommandArgumentCount { value: count },
                    &token,
                ));
            }
        };
        body = context.consume_arg(None)?;
    }

    if !(exists && skip_if_exists) {
        context.macros_mut().set(
            &name,
            Some(MacroDefinition::Expansion(MacroExpansion {
                tokens: body.tokens,
                num_args,
                ..MacroExpansion::default()
            })),
            false,
        );
    }

    Ok(MacroExpansionResult::Empty)
}

// \def\name#1#2{body}, with delimited parameters such as \def\foo#1.{..}
fn def(
    context: &mut dyn MacroContextInterface<'_>,
    global: bool,
    expand: bool,
) -> Result<MacroExpansionResult, ParseError> {
    let name_tok = definition_name(context)?;

    let mut num_args = 0;
    let mut delimiters: Vec<Vec<String>> = vec![Vec::new()];
    let mut insert = None;

    while context.future().as_str() != "{" {
        let tok = context.pop_token();
        if tok.as_str() == "#" {
            // #{ delimits the last parameter by the opening brace itself
            if context.future().as_str() == "{" {
                insert = Some(context.future().clone());
                delimiters[num_args].push("{".to_owned());
                break;
            }
            let arg_tok = context.pop_token();
            let number = arg_tok
                .as_str()
                .parse::<usize>()
                .ok()
                .filter(|n| (1..=9).contains(n) && arg_tok.as_str().len() == 1);
            let Some(number) = number else {
                return Err(ParseError::with_token(
                    ParseErrorKind::InvalidMacroArgumentNumber {
                        value: arg_tok.as_str().to_owned(),
                    },
                    &arg_tok,
                ));
            };
            if number != num_args + 1 {
                return Err(ParseError::with_token(
                    ParseErrorKind::ExpectedMacroParameter {
                        expected: num_args + 1,
                    },
                    &arg_tok,
                ));
            }
            num_args += 1;
            delimiters.push(Vec::new());
        } else if tok.is_eof() {
            return Err(ParseError::with_token(
                ParseErrorKind::ExpectedMacroDefinition,
                &tok,
            ));
        } else {
            delimiters[num_args].push(tok.as_str().to_owned());
        }
    }

    let mut tokens = context.consume_arg(None)?.tokens;
    if let Some(brace) = insert {
        tokens.insert(0, brace);
    }
    if expand {
        tokens = context.expand_tokens(tokens)?;
        tokens.reverse();
    }

    context.macros_mut().set(
        name_tok.as_str(),
        Some(MacroDefinition::Expansion(MacroExpansion {
            tokens,
            num_args,
            delimiters: Some(delimiters),
            unexpandable: false,
        })),
        global,
    );
    Ok(MacroExpansionResult::Empty)
}

// \let\name=<token>
fn let_token(
    context: &mut dyn MacroContextInterface<'_>,
    global: bool,
) -> Result<MacroExpansionResult, ParseError> {
    let name_tok = definition_name(context)?;
    context.consume_spaces();
    let mut rhs = context.pop_token();
    if rhs.as_str() == "=" {
        rhs = context.pop_token();
        if rhs.kind == TokenKind::Space {
            rhs = context.pop_token();
        }
    }

    let definition = if let Some(existing) = context.macros().get(rhs.as_str()) {
        existing.clone()
    } else {
        let unexpandable = !context.is_expandable(rhs.as_str());
        let mut alias = rhs;
        alias.noexpand = true;
        MacroDefinition::Expansion(MacroExpansion {
            tokens: vec![alias],
            num_args: 0,
            delimiters: None,
            unexpandable,
        })
    };
    context
        .macros_mut()
        .set(name_tok.as_str(), Some(definition), global);
    Ok(MacroExpansionResult::Empty)
}

/// Built-in macro table, consulted after the caller's macros.
pub static BUILTIN_MACROS: phf::Map<&'static str, MacroDefinition> = phf_map! {
    "\\noexpand" => MacroDefinition::StaticFunction(|context| {
        let mut token = context.pop_token();
        if context.is_expandable(token.as_str()) {
            token.noexpand = true;
        }
        Ok(MacroExpansionResult::tokens(vec![token]))
    }),
    "\\TextOrMath" => MacroDefinition::StaticFunction(|context| {
        let mut args = context.consume_args(2)?;
        let math = args.pop().unwrap_or_default();
        let text = args.pop().unwrap_or_default();
        let tokens = if context.mode() == Mode::Text { text } else { math };
        Ok(MacroExpansionResult::tokens(tokens))
    }),
    "\\@firstoftwo" => MacroDefinition::StaticFunction(|context| {
        let mut args = context.consume_args(2)?;
        args.truncate(1);
        Ok(MacroExpansionResult::tokens(args.pop().unwrap_or_default()))
    }),
    "\\@secondoftwo" => MacroDefinition::StaticFunction(|context| {
        let mut args = context.consume_args(2)?;
        Ok(MacroExpansionResult::tokens(args.pop().unwrap_or_default()))
    }),
    "\\@ifnextchar" => MacroDefinition::StaticFunction(|context| {
        let mut args = context.consume_args(3)?;
        context.consume_spaces();
        let otherwise = args.pop().unwrap_or_default();
        let then = args.pop().unwrap_or_default();
        let matches = matches!(
            args.first().map(Vec::as_slice),
            Some([ch]) if ch.text == context.future().text
        );
        Ok(MacroExpansionResult::tokens(if matches { then } else { otherwise }))
    }),
    "\\@ifstar" => MacroDefinition::StaticStr("\\@ifnextchar *{\\@firstoftwo{#1}}"),

    "\\newcommand" => MacroDefinition::StaticFunction(|context| new_command(context, false, true, false)),
    "\\renewcommand" => MacroDefinition::StaticFunction(|context| new_command(context, true, false, false)),
    "\\providecommand" => MacroDefinition::StaticFunction(|context| new_command(context, true, true, true)),
    "\\def" => MacroDefinition::StaticFunction(|context| def(context, false, false)),
    "\\gdef" => MacroDefinition::StaticFunction(|context| def(context, true, false)),
    "\\edef" => MacroDefinition::StaticFunction(|context| def(context, false, true)),
    "\\xdef" => MacroDefinition::StaticFunction(|context| def(context, true, true)),
    "\\let" => MacroDefinition::StaticFunction(|context| let_token(context, false)),
    "\\\\globallet" => MacroDefinition::StaticFunction(|context| let_token(context, true)),
    "\\global" => MacroDefinition::StaticFunction(|context| {
        context.consume_spaces();
        let mut token = context.pop_token();
        let global = match token.as_str() {
            "\\def" | "\\gdef" => "\\gdef",
            "\\edef" | "\\xdef" => "\\xdef",
            "\\let" | "\\\\globallet" => "\\\\globallet",
            _ => {
                return Err(ParseError::with_token(
                    ParseErrorKind::InvalidTokenAfterMacroPrefix {
                        token: token.as_str().to_owned(),
                    },
                    &token,
                ));
            }
        };
        token.text = TokenText::Static(global);
        Ok(MacroExpansionResult::tokens(vec![token]))
    }),
    "\\relax" => MacroDefinition::StaticStr(""),

    // Grouping
    "\\bgroup" => MacroDefinition::StaticStr("{"),
    "\\egroup" => MacroDefinition::StaticStr("}"),

    // Spacing
    "\\," => MacroDefinition::StaticStr("\\TextOrMath{\\kern{.1667em}}{\\mskip{3mu}}"),
    "\\thinspace" => MacroDefinition::StaticStr("\\,"),
    "\\:" => MacroDefinition::StaticStr("\\TextOrMath{\\kern{.2222em}}{\\mskip{4mu}}"),
    "\\>" => MacroDefinition::StaticStr("\\:"),
    "\\medspace" => MacroDefinition::StaticStr("\\:"),
    "\\;" => MacroDefinition::StaticStr("\\TextOrMath{\\kern{.2777em}}{\\mskip{5mu}}"),
    "\\thickspace" => MacroDefinition::StaticStr("\\;"),
    "\\!" => MacroDefinition::StaticStr("\\TextOrMath{\\kern{-.1667em}}{\\mskip{-3mu}}"),
    "\\negthinspace" => MacroDefinition::StaticStr("\\!"),
    "\\negmedspace" => MacroDefinition::StaticStr("\\TextOrMath{\\kern{-.2222em}}{\\mskip{-4mu}}"),
    "\\negthickspace" => MacroDefinition::StaticStr("\\TextOrMath{\\kern{-.2777em}}{\\mskip{-5mu}}"),
    "\\enspace" => MacroDefinition::StaticStr("\\kern.5em "),
    "\\enskip" => MacroDefinition::StaticStr("\\hskip.5em\\relax"),
    "\\quad" => MacroDefinition::StaticStr("\\hskip1em\\relax"),
    "\\qquad" => MacroDefinition::StaticStr("\\hskip2em\\relax"),
    "\\space" => MacroDefinition::StaticStr("\\ "),
    "~" => MacroDefinition::StaticStr("\\nobreakspace"),

    // Symbol aliases
    "\\ne" => MacroDefinition::StaticStr("\\neq"),
    "\\le" => MacroDefinition::StaticStr("\\leq"),
    "\\ge" => MacroDefinition::StaticStr("\\geq"),
    "\\to" => MacroDefinition::StaticStr("\\rightarrow"),
    "\\gets" => MacroDefinition::StaticStr("\\leftarrow"),
    "\\owns" => MacroDefinition::StaticStr("\\ni"),
    "\\land" => MacroDefinition::StaticStr("\\wedge"),
    "\\lor" => MacroDefinition::StaticStr("\\vee"),
    "\\lnot" => MacroDefinition::StaticStr("\\neg"),
    "\\iff" => MacroDefinition::StaticStr("\\;\\Longleftrightarrow\\;"),
    "\\implies" => MacroDefinition::StaticStr("\\;\\Longrightarrow\\;"),
    "\\impliedby" => MacroDefinition::StaticStr("\\;\\Longleftarrow\\;"),
    "\\lbrace" => MacroDefinition::StaticStr("\\{"),
    "\\rbrace" => MacroDefinition::StaticStr("\\}"),
    "\\lbrack" => MacroDefinition::StaticStr("["),
    "\\rbrack" => MacroDefinition::StaticStr("]"),
    "\\dots" => MacroDefinition::StaticStr("\\ldots"),
    "\\dotsc" => MacroDefinition::StaticStr("\\ldots"),
    "\\dotso" => MacroDefinition::StaticStr("\\ldots"),
    "\\dotsb" => MacroDefinition::StaticStr("\\cdots"),
    "\\dotsm" => MacroDefinition::StaticStr("\\cdots"),
    "\\dotsi" => MacroDefinition::StaticStr("\\!\\cdots"),
    "\\varnothing" => MacroDefinition::StaticStr("\\emptyset"),

    // Number sets
    "\\R" => MacroDefinition::StaticStr("\\mathbb{R}"),
    "\\N" => MacroDefinition::StaticStr("\\mathbb{N}"),
    "\\Z" => MacroDefinition::StaticStr("\\mathbb{Z}"),
    "\\Q" => MacroDefinition::StaticStr("\\mathbb{Q}"),
    "\\C" => MacroDefinition::StaticStr("\\mathbb{C}"),

    // Overlays
    "\\llap" => MacroDefinition::StaticStr("\\mathllap{\\textrm{#1}}"),
    "\\rlap" => MacroDefinition::StaticStr("\\mathrlap{\\textrm{#1}}"),
    "\\clap" => MacroDefinition::StaticStr("\\mathclap{\\textrm{#1}}"),
    "\\not" => MacroDefinition::StaticStr("\\mathrel{\\mathrlap{\\mkern2.5mu/}}"),

    // Conveniences
    "\\cr" => MacroDefinition::StaticStr("\\\\"),
    "\\mathstrut" => MacroDefinition::StaticStr("\\vphantom{(}"),
    "\\bmod" => MacroDefinition::StaticStr(
        "\\mathchoice{\\mskip1mu}{\\mskip1mu}{\\mskip5mu}{\\mskip5mu}\\mathbin{\\rm mod}\\mathchoice{\\mskip1mu}{\\mskip1mu}{\\mskip5mu}{\\mskip5mu}"
    ),
    "\\pod" => MacroDefinition::StaticStr("\\mathchoice{\\mkern18mu}{\\mkern8mu}{\\mkern8mu}{\\mkern8mu}(#1)"),
    "\\pmod" => MacroDefinition::StaticStr("\\pod{{\\rm mod}\\mkern6mu#1}"),
    "\\mod" => MacroDefinition::StaticStr("\\mathchoice{\\mkern18mu}{\\mkern12mu}{\\mkern12mu}{\\mkern12mu}{\\rm mod}\\,\\,#1"),
    "\\emph" => MacroDefinition::StaticStr("\\textit{#1}"),
    "\\Bbb" => MacroDefinition::StaticStr("\\mathbb"),
    "\\bold" => MacroDefinition::StaticStr("\\mathbf"),
    "\\underbar" => MacroDefinition::StaticStr("\\underline{\\text{#1}}"),
    "\\dbinom" => MacroDefinition::StaticStr("\\genfrac(){0pt}{0}{#1}{#2}"),
    "\\tbinom" => MacroDefinition::StaticStr("\\genfrac(){0pt}{1}{#1}{#2}"),
};
