//! Framed boxes: `\fbox` for text and `\boxed` for display-style math
//!
//! The frame is four rules `fbox_rule` thick, `fbox_sep` away from the
//! body on every side.

use crate::box_tree::{LayoutBox, VListChild, VListPosition, make_v_list};
use crate::build_box::layout;
use crate::build_common::make_line;
use crate::context::TexboxContext;
use crate::define_function::{ArgType, FunctionContext, FunctionDefSpec, FunctionPropSpec, ord_argument};
use crate::functions::single_arg;
use crate::options::Options;
use crate::parser::{NodeType, ParseNode, ParseNodeEnclose, ParseNodeStyling, ParseNodeText};
use crate::style::Style;
use crate::symbols::Mode;
use crate::types::ParseError;

/// Registers `\fbox` and `\boxed`.
pub fn define_enclose(ctx: &mut TexboxContext) {
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Enclose),
        names: &["\\fbox"],
        props: FunctionPropSpec {
            num_args: 1,
            arg_types: Some(vec![ArgType::Mode(Mode::Text)]),
            allowed_in_text: true,
            ..Default::default()
        },
        handler: |context: FunctionContext, args, _opt_args| {
            let body = single_arg(&context, args)?;
            let mode = context.parser.mode;
            let text = ParseNode::Text(ParseNodeText {
                mode,
                loc: body.loc().cloned(),
                body: ord_argument(body),
                font: None,
            });
            Ok(ParseNode::Enclose(ParseNodeEnclose {
                mode,
                loc: context.loc(),
                label: context.func_name.clone(),
                body: Box::new(text),
            }))
        },
    });

    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Enclose),
        names: &["\\boxed"],
        props: FunctionPropSpec {
            num_args: 1,
            ..Default::default()
        },
        handler: |context: FunctionContext, args, _opt_args| {
            let body = single_arg(&context, args)?;
            let mode = context.parser.mode;
            let display = ParseNode::Styling(ParseNodeStyling {
                mode,
                loc: body.loc().cloned(),
                style: Style::Display,
                body: ord_argument(body),
            });
            Ok(ParseNode::Enclose(ParseNodeEnclose {
                mode,
                loc: context.loc(),
                label: context.func_name.clone(),
                body: Box::new(display),
            }))
        },
    });
}

/// Lays out a framed body.
pub fn build_enclose(
    ctx: &TexboxContext,
    enclose: &ParseNodeEnclose,
    options: &Options,
) -> Result<LayoutBox, ParseError> {
    let inner = layout(ctx, &enclose.body, options)?;
    let metrics = options.metrics();
    let rule = metrics.fbox_rule.max(options.min_rule_thickness);
    let sep = metrics.fbox_sep;
    let (height, depth) = (inner.height() + sep, inner.depth() + sep);

    let side = || LayoutBox::rule(rule, height, depth, options.color.clone());
    let middle = LayoutBox::hbox(vec![
        side(),
        LayoutBox::kern(sep),
        inner,
        LayoutBox::kern(sep),
        side(),
    ]);
    let width = middle.width();
    Ok(make_v_list(
        VListPosition::Bottom(depth + rule),
        vec![
            VListChild::Box(make_line(width, rule, options)),
            VListChild::Box(middle),
            VListChild::Box(make_line(width, rule, options)),
        ],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::box_tree::ListBox;
    use crate::parser::Parser;
    use crate::types::Settings;

    fn build_with(input: &str, settings: &Settings) -> LayoutBox {
        let ctx = TexboxContext::default();
        let ParseNode::OrdGroup(root) = Parser::new(input, settings, &ctx).parse().unwrap() else {
            panic!("root is not a group");
        };
        layout(&ctx, &root.body[0], &Options::from_settings(settings)).unwrap()
    }

    fn build(input: &str) -> LayoutBox {
        build_with(input, &Settings::default())
    }

    fn count_rules(b: &LayoutBox) -> usize {
        match b {
            LayoutBox::Rule(_) => 1,
            LayoutBox::HBox(ListBox { children, .. }) | LayoutBox::VBox(ListBox { children, .. }) => {
                children.iter().map(count_rules).sum()
            }
            _ => 0,
        }
    }

    #[test]
    fn frame_pads_every_side() {
        let body = build(r"\text{ab}");
        let framed = build(r"\fbox{ab}");
        let pad = 0.3 + 0.04;
        assert!((framed.width() - (body.width() + 2.0 * pad)).abs() < 1e-9);
        assert!((framed.height() - (body.height() + pad)).abs() < 1e-9);
        assert!((framed.depth() - (body.depth() + pad)).abs() < 1e-9);
        assert_eq!(count_rules(&framed), 4);
    }

    #[test]
    fn boxed_uses_display_style() {
        let inline = build(r"\sum");
        let boxed = build(r"\boxed{\sum}");
        assert!(boxed.height() - 0.34 > inline.height());
        assert_eq!(count_rules(&boxed), 4);
    }

    #[test]
    fn frame_honours_minimum_rule_thickness() {
        let settings = Settings::builder().min_rule_thickness(0.1).build();
        let framed = build_with(r"\fbox{a}", &settings);
        let body = build_with(r"\text{a}", &settings);
        assert!((framed.width() - (body.width() + 2.0 * 0.4)).abs() < 1e-9);
    }
}
