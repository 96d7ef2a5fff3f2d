//! `\textcolor{c}{body}` and the switch `\color{c}`

use crate::context::TexboxContext;
use crate::define_function::{ArgType, FunctionContext, FunctionDefSpec, FunctionPropSpec, ord_argument};
use crate::functions::{missing_argument, single_arg};
use crate::macros::{MacroContextInterface as _, MacroDefinition};
use crate::parser::{NodeType, NodeTypeError, ParseNode, ParseNodeColor};
use crate::types::ParseError;

fn color_arg(node: &ParseNode) -> Result<String, ParseError> {
    match node {
        ParseNode::ColorToken(token) => Ok(token.color.clone()),
        other => Err(NodeTypeError::TypeMismatch {
            expected: NodeType::ColorToken,
            actual: other.node_type().to_string(),
        }
        .into()),
    }
}

/// Registers `\color` and `\textcolor`.
pub fn define_color(ctx: &mut TexboxContext) {
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Color),
        names: &["\\textcolor"],
        props: FunctionPropSpec {
            num_args: 2,
            allowed_in_text: true,
            arg_types: Some(vec![ArgType::Color, ArgType::Original]),
            ..Default::default()
        },
        handler: |context: FunctionContext, args, _opt_args| {
            let mut args = args.into_iter();
            let (Some(color), Some(body)) = (args.next(), args.next()) else {
                return Err(missing_argument(&context));
            };
            Ok(ParseNode::Color(ParseNodeColor {
                mode: context.parser.mode,
                loc: context.loc(),
                color: color_arg(&color)?,
                body: ord_argument(body),
            }))
        },
    });

    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Color),
        names: &["\\color"],
        props: FunctionPropSpec {
            num_args: 1,
            allowed_in_text: true,
            arg_types: Some(vec![ArgType::Color]),
            ..Default::default()
        },
        handler: |context: FunctionContext, args, _opt_args| {
            let color = color_arg(&single_arg(&context, args)?)?;

            // color.sty keeps the active color in \current@color
            context.parser.gullet.macros_mut().set(
                "\\current@color",
                Some(MacroDefinition::String(color.clone())),
                false,
            );

            let body = context
                .parser
                .parse_expression(true, context.break_on_token_text)?;
            Ok(ParseNode::Color(ParseNodeColor {
                mode: context.parser.mode,
                loc: context.loc(),
                color,
                body,
            }))
        },
    });
}
