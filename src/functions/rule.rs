//! `\rule[raise]{width}{height}`

use crate::box_tree::LayoutBox;
use crate::context::TexboxContext;
use crate::define_function::{ArgType, FunctionContext, FunctionDefSpec, FunctionPropSpec};
use crate::functions::{missing_argument, size_arg};
use crate::options::Options;
use crate::parser::{NodeType, ParseNode, ParseNodeRule};
use crate::units::calculate_size;

/// Registers `\rule`.
pub fn define_rule(ctx: &mut TexboxContext) {
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Rule),
        names: &["\\rule"],
        props: FunctionPropSpec {
            num_args: 2,
            num_optional_args: 1,
            arg_types: Some(vec![ArgType::Size, ArgType::Size, ArgType::Size]),
            allowed_in_text: true,
            allowed_in_argument: true,
            ..Default::default()
        },
        handler: |context: FunctionContext, args, opt_args| {
            let shift = opt_args.first().and_then(Option::as_ref).map(size_arg).transpose()?;
            let (Some(width), Some(height)) = (args.first(), args.get(1)) else {
                return Err(missing_argument(&context));
            };
            Ok(ParseNode::Rule(ParseNodeRule {
                mode: context.parser.mode,
                loc: context.loc(),
                shift,
                width: size_arg(width)?,
                height: size_arg(height)?,
            }))
        },
    });
}

/// A solid box standing on the baseline, raised by the optional shift.
#[must_use]
pub fn build_rule(rule: &ParseNodeRule, options: &Options) -> LayoutBox {
    let width = calculate_size(&rule.width, options);
    let height = calculate_size(&rule.height, options);
    let shift = rule
        .shift
        .as_ref()
        .map_or(0.0, |shift| calculate_size(shift, options));
    LayoutBox::rule(width, height, 0.0, options.color.clone()).shifted(-shift)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build_box::layout;
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
    fn rules_take_their_size() {
        let rule = build(r"\rule{2em}{10pt}");
        assert!(matches!(rule, LayoutBox::Rule(_)));
        assert!((rule.width() - 2.0).abs() < 1e-9);
        assert!((rule.height() - 1.0).abs() < 1e-9);
        assert_eq!(rule.depth(), 0.0);
    }

    #[test]
    fn raised_and_lowered_rules() {
        let raised = build(r"\rule[0.5em]{1em}{1em}");
        assert!((raised.height() - 1.5).abs() < 1e-9);
        let lowered = build(r"\rule[-0.5em]{1em}{1em}");
        assert!((lowered.height() - 0.5).abs() < 1e-9);
        assert!((lowered.depth() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn sizes_are_clamped_to_max_size() {
        let settings = Settings::builder().max_size(3.0).build();
        let ctx = TexboxContext::default();
        let ParseNode::OrdGroup(root) = Parser::new(r"\rule{100em}{1em}", &settings, &ctx).parse().unwrap() else {
            panic!("root is not a group");
        };
        let rule = layout(&ctx, &root.body[0], &Options::from_settings(&settings)).unwrap();
        assert!((rule.width() - 3.0).abs() < 1e-9);
    }
}
