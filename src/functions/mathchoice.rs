//! `\mathchoice{D}{T}{S}{SS}`: one body per style, picked at layout time

use crate::context::TexboxContext;
use crate::define_function::{FunctionContext, FunctionDefSpec, FunctionPropSpec, ord_argument};
use crate::parser::{NodeType, ParseNode, ParseNodeMathChoice};

/// Registers `\mathchoice`. Its layout is a style lookup done in
/// [`crate::build_box`], so there is no `build_mathchoice`.
pub fn define_mathchoice(ctx: &mut TexboxContext) {
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::MathChoice),
        names: &["\\mathchoice"],
        props: FunctionPropSpec {
            num_args: 4,
            primitive: true,
            ..Default::default()
        },
        handler: |context: FunctionContext, args, _opt_args| {
            let mut bodies = args.into_iter().map(ord_argument);
            let mut next = || bodies.next().unwrap_or_default();
            Ok(ParseNode::MathChoice(Box::new(ParseNodeMathChoice {
                mode: context.parser.mode,
                loc: context.loc(),
                display: next(),
                text: next(),
                script: next(),
                scriptscript: next(),
            })))
        },
    });
}
