//! Row separators and rules that only make sense inside an array.
//!
//! The array parser consumes `\\`, `\cr` and a row's leading `\hline`s
//! itself; reaching one of these functions means the command appeared
//! somewhere else.

use crate::context::TexboxContext;
use crate::define_function::{FunctionContext, FunctionDefSpec, FunctionPropSpec};
use crate::types::{ParseError, ParseErrorKind};

/// Registers `\\`, `\newline` and `\hline`, which are errors outside an
/// array.
pub fn define_cr(ctx: &mut TexboxContext) {
    ctx.define_function(FunctionDefSpec {
        node_type: None,
        names: &["\\\\", "\\newline"],
        props: FunctionPropSpec {
            allowed_in_text: true,
            ..Default::default()
        },
        handler: |context: FunctionContext, _args, _opt_args| {
            Err(ParseError::with_token(ParseErrorKind::NewlineOutsideArray, &context.loc()))
        },
    });

    ctx.define_function(FunctionDefSpec {
        node_type: None,
        names: &["\\hline", "\\hdashline"],
        props: FunctionPropSpec {
            allowed_in_text: true,
            ..Default::default()
        },
        handler: |context: FunctionContext, _args, _opt_args| {
            Err(ParseError::with_token(
                ParseErrorKind::OnlyInArray {
                    func: context.func_name.clone(),
                },
                &context.loc(),
            ))
        },
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Parser;
    use crate::types::Settings;

    fn parse_err(input: &str) -> ParseErrorKind {
        let settings = Settings::default();
        let ctx = TexboxContext::default();
        *Parser::new(input, &settings, &ctx).parse().unwrap_err().kind
    }

    #[test]
    fn newline_outside_array() {
        assert_eq!(parse_err(r"a \\ b"), ParseErrorKind::NewlineOutsideArray);
        assert_eq!(parse_err(r"a \cr b"), ParseErrorKind::NewlineOutsideArray);
    }

    #[test]
    fn hline_outside_array() {
        assert_eq!(
            parse_err(r"a \hline b"),
            ParseErrorKind::OnlyInArray {
                func: "\\hline".to_owned()
            }
        );
    }
}
