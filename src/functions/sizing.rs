//! Size switches, `\tiny` through `\Huge`

use crate::context::TexboxContext;
use crate::define_function::{FunctionContext, FunctionDefSpec, FunctionPropSpec};
use crate::parser::{NodeType, ParseNode, ParseNodeSizing};

/// The size commands, smallest first; size index `n` is entry `n - 1`.
pub const SIZE_FUNCS: [&str; 11] = [
    "\\tiny",
    "\\sixptsize",
    "\\scriptsize",
    "\\footnotesize",
    "\\small",
    "\\normalsize",
    "\\large",
    "\\Large",
    "\\LARGE",
    "\\huge",
    "\\Huge",
];

/// Registers `\tiny` through `\Huge`.
pub fn define_sizing(ctx: &mut TexboxContext) {
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Sizing),
        names: &SIZE_FUNCS,
        props: FunctionPropSpec {
            allowed_in_text: true,
            ..Default::default()
        },
        handler: |context: FunctionContext, _args, _opt_args| {
            let body = context
                .parser
                .parse_expression(false, context.break_on_token_text)?;
            let size = SIZE_FUNCS
                .iter()
                .position(|name| *name == context.func_name)
                .map_or(6, |index| index + 1);
            Ok(ParseNode::Sizing(ParseNodeSizing {
                mode: context.parser.mode,
                loc: context.loc(),
                size,
                body,
            }))
        },
    });
}
