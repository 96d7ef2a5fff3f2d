//! `\smash`, with an optional `[t]`, `[b]` or `[tb]`

use crate::box_tree::LayoutBox;
use crate::build_box::layout;
use crate::context::TexboxContext;
use crate::define_function::{FunctionContext, FunctionDefSpec, FunctionPropSpec};
use crate::functions::single_arg;
use crate::options::Options;
use crate::parser::{NodeType, ParseNode, ParseNodeSmash};
use crate::types::ParseError;

/// Which dimensions an optional argument removes: `t` the height, `b` the
/// depth. Anything else in the argument removes neither.
fn smashed_sides(arg: Option<&ParseNode>) -> (bool, bool) {
    let Some(ParseNode::OrdGroup(group)) = arg else {
        return (true, true);
    };
    let (mut height, mut depth) = (false, false);
    for node in &group.body {
        match node.text() {
            Some("t") => height = true,
            Some("b") => depth = true,
            _ => return (false, false),
        }
    }
    (height, depth)
}

/// Registers `\smash`.
pub fn define_smash(ctx: &mut TexboxContext) {
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Smash),
        names: &["\\smash"],
        props: FunctionPropSpec {
            num_args: 1,
            num_optional_args: 1,
            allowed_in_text: true,
            ..Default::default()
        },
        handler: |context: FunctionContext, args, opt_args| {
            let (smash_height, smash_depth) = smashed_sides(opt_args.first().and_then(Option::as_ref));
            let body = single_arg(&context, args)?;
            Ok(ParseNode::Smash(ParseNodeSmash {
                mode: context.parser.mode,
                loc: context.loc(),
                body: Box::new(body),
                smash_height,
                smash_depth,
            }))
        },
    });
}

/// Lays out the body with the requested dimensions zeroed.
pub fn build_smash(ctx: &TexboxContext, smash: &ParseNodeSmash, options: &Options) -> Result<LayoutBox, ParseError> {
    let inner = layout(ctx, &smash.body, options)?;
    let width = inner.width();
    let height = if smash.smash_height { 0.0 } else { inner.height() };
    let depth = if smash.smash_depth { 0.0 } else { inner.depth() };
    Ok(LayoutBox::hbox_with_dims(vec![inner], width, height, depth))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Parser;
    use crate::types::Settings;

    fn build(input: &str) -> LayoutBox {
        let settings = Settings::default();
        let ctx = TexboxContext::default();
        let ParseNode::OrdGroup(root) = Parser::new(input, &settings, &ctx).parse().unwrap() else {
            panic!("root is not a group");
        };
        layout(&ctx, &root.body[0], &Options::from_settings(&settings)).unwrap()
    }

    #[test]
    fn smash_removes_height_and_depth() {
        let body = build("{gh}");
        let smashed = build(r"\smash{gh}");
        assert_eq!(smashed.height(), 0.0);
        assert_eq!(smashed.depth(), 0.0);
        assert!((smashed.width() - body.width()).abs() < 1e-9);
        assert!(smashed.has_ink());
    }

    #[test]
    fn optional_argument_picks_a_side() {
        let body = build("{gh}");
        let top = build(r"\smash[t]{gh}");
        assert_eq!(top.height(), 0.0);
        assert!((top.depth() - body.depth()).abs() < 1e-9);
        let bottom = build(r"\smash[b]{gh}");
        assert!((bottom.height() - body.height()).abs() < 1e-9);
        assert_eq!(bottom.depth(), 0.0);
        let both = build(r"\smash[tb]{gh}");
        assert_eq!((both.height(), both.depth()), (0.0, 0.0));
    }

    #[test]
    fn unknown_sides_smash_nothing() {
        let body = build("{gh}");
        let kept = build(r"\smash[x]{gh}");
        assert!((kept.height() - body.height()).abs() < 1e-9);
        assert!((kept.depth() - body.depth()).abs() < 1e-9);
    }
}
