//! `\begin{name}...\end{name}`

use crate::context::TexboxContext;
use crate::define_environment::EnvContext;
use crate::define_function::{ArgType, FunctionContext, FunctionDefSpec, FunctionPropSpec};
use crate::functions::single_arg;
use crate::parser::{NodeType, NodeTypeError, ParseNode, ParseNodeEnvironment};
use crate::symbols::Mode;
use crate::types::{ParseError, ParseErrorKind};

/// The environment name from a raw `{...}` argument.
fn env_name(arg: &ParseNode) -> Result<String, ParseError> {
    let ParseNode::Raw(raw) = arg else {
        return Err(NodeTypeError::TypeMismatch {
            expected: NodeType::Raw,
            actual: arg.node_type().to_string(),
        }
        .into());
    };
    let name = raw.string.trim();
    if name.is_empty() || name.contains(|ch: char| ch.is_whitespace() || ch == '\\') {
        return Err(ParseError::with_token(ParseErrorKind::InvalidEnvironmentName, arg));
    }
    Ok(name.to_owned())
}

/// Registers `\begin` and `\end`.
///
/// Environments themselves are registered separately with
/// [`crate::define_environment::define_array`].
pub fn define_environment(ctx: &mut TexboxContext) {
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Environment),
        names: &["\\begin", "\\end"],
        props: FunctionPropSpec {
            num_args: 1,
            arg_types: Some(vec![ArgType::Raw]),
            allowed_in_text: true,
            ..Default::default()
        },
        handler: |context: FunctionContext, args, _opt_args| {
            let name_arg = single_arg(&context, args)?;
            let name = env_name(&name_arg)?;
            if context.func_name == "\\end" {
                return Ok(ParseNode::Environment(ParseNodeEnvironment {
                    mode: context.parser.mode,
                    loc: context.loc(),
                    name,
                }));
            }

            let parser = context.parser;
            let ctx = parser.ctx;
            let Some(env) = ctx.environments.get(&name) else {
                return Err(ParseError::with_token(
                    ParseErrorKind::NoSuchEnvironment { name },
                    &name_arg,
                ));
            };
            let begin = format!("\\begin{{{name}}}");
            if parser.mode == Mode::Text && !env.allowed_in_text {
                return Err(ParseError::with_token(
                    ParseErrorKind::FunctionDisallowedInMode {
                        func: begin,
                        mode: parser.mode,
                    },
                    &name_arg,
                ));
            }

            let (env_args, env_opt_args) = parser.parse_arguments(&begin, env)?;
            let env_context = EnvContext {
                mode: parser.mode,
                env_name: name.clone(),
                parser: &mut *parser,
            };
            let result = (env.handler)(env_context, env_args, env_opt_args)?;

            parser.expect("\\end", false)?;
            let end_token = parser.fetch()?.clone();
            match parser.parse_function(None, None)? {
                Some(ParseNode::Environment(end)) if end.name == name => Ok(result),
                Some(ParseNode::Environment(end)) => Err(ParseError::with_token(
                    ParseErrorKind::MismatchedEnvironmentEnd {
                        begin: name,
                        end: end.name,
                    },
                    &end_token,
                )),
                Some(other) => Err(NodeTypeError::TypeMismatch {
                    expected: NodeType::Environment,
                    actual: other.node_type().to_string(),
                }
                .into()),
                None => Err(ParseError::with_token(
                    ParseErrorKind::ExpectedToken {
                        expected: "\\end".to_owned(),
                        found: end_token.as_str().to_owned(),
                    },
                    &end_token,
                )),
            }
        },
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Parser;
    use crate::types::Settings;

    fn parse(input: &str) -> Result<Vec<ParseNode>, ParseError> {
        let settings = Settings::default();
        let ctx = TexboxContext::default();
        match Parser::new(input, &settings, &ctx).parse()? {
            ParseNode::OrdGroup(root) => Ok(root.body),
            other => panic!("root is {}", other.node_type()),
        }
    }

    #[test]
    fn begin_and_end_enclose_an_array() {
        let body = parse(r"\begin{array}{cc} a & b \\ c & d \end{array}").unwrap();
        assert_eq!(body.len(), 1);
        let ParseNode::Array(array) = &body[0] else {
            panic!("expected an array, got {}", body[0].node_type());
        };
        assert_eq!(array.body.len(), 2);
        assert!(array.body.iter().all(|row| row.len() == 2));
    }

    #[test]
    fn unknown_environment() {
        let err = parse(r"\begin{foo} a \end{foo}").unwrap_err();
        assert_eq!(
            *err.kind,
            ParseErrorKind::NoSuchEnvironment {
                name: "foo".to_owned()
            }
        );
    }

    #[test]
    fn mismatched_end() {
        let err = parse(r"\begin{matrix} a \end{pmatrix}").unwrap_err();
        assert_eq!(
            *err.kind,
            ParseErrorKind::MismatchedEnvironmentEnd {
                begin: "matrix".to_owned(),
                end: "pmatrix".to_owned(),
            }
        );
    }

    #[test]
    fn missing_end() {
        assert!(parse(r"\begin{matrix} a & b").is_err());
        assert!(parse(r"a \end{matrix}").is_err());
    }
}
