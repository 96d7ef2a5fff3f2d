//! `\displaystyle` and friends switch style for the rest of the group.

use crate::context::TexboxContext;
use crate::define_function::{FunctionContext, FunctionDefSpec, FunctionPropSpec};
use crate::parser::{NodeType, ParseNode, ParseNodeStyling};
use crate::style::Style;

fn style_of(name: &str) -> Style {
    match name {
        "\\displaystyle" => Style::Display,
        "\\scriptstyle" => Style::Script,
        "\\scriptscriptstyle" => Style::ScriptScript,
        _ => Style::Text,
    }
}

/// Registers `\displaystyle`, `\textstyle`, `\scriptstyle` and
/// `\scriptscriptstyle`.
pub fn define_styling(ctx: &mut TexboxContext) {
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Styling),
        names: &[
            "\\displaystyle",
            "\\textstyle",
            "\\scriptstyle",
            "\\scriptscriptstyle",
        ],
        props: FunctionPropSpec {
            primitive: true,
            allowed_in_text: true,
            ..Default::default()
        },
        handler: |context: FunctionContext, _args, _opt_args| {
            let body = context
                .parser
                .parse_expression(true, context.break_on_token_text)?;
            Ok(ParseNode::Styling(ParseNodeStyling {
                mode: context.parser.mode,
                loc: context.loc(),
                style: style_of(&context.func_name),
                body,
            }))
        },
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Parser;
    use crate::types::Settings;

    fn parse(input: &str) -> Vec<ParseNode> {
        let settings = Settings::default();
        let ctx = TexboxContext::default();
        let ParseNode::OrdGroup(root) = Parser::new(input, &settings, &ctx).parse().unwrap() else {
            panic!("root is not a group");
        };
        root.body
    }

    #[test]
    fn styles_take_the_rest_of_the_group() {
        let body = parse(r"a{\scriptstyle b c}d");
        assert_eq!(body.len(), 3);
        let ParseNode::OrdGroup(group) = &body[1] else {
            panic!("expected a group");
        };
        let ParseNode::Styling(styling) = &group.body[0] else {
            panic!("expected styling");
        };
        assert_eq!(styling.style, Style::Script);
        assert_eq!(styling.body.len(), 2);
    }

    #[test]
    fn styles_stop_before_infix_operators() {
        let body = parse(r"\displaystyle a \over b");
        let ParseNode::Genfrac(frac) = &body[0] else {
            panic!("expected a fraction");
        };
        let ParseNode::OrdGroup(numer) = &frac.numer else {
            panic!("expected a group");
        };
        assert!(matches!(&numer.body[0], ParseNode::Styling(s) if s.style == Style::Display));
    }
}
