//! `\mathllap`, `\mathrlap`, `\mathclap`: boxes of zero width
//!
//! The text-mode `\llap`, `\rlap` and `\clap` are macros over these.

use crate::box_tree::LayoutBox;
use crate::build_box::layout;
use crate::context::TexboxContext;
use crate::define_function::{FunctionContext, FunctionDefSpec, FunctionPropSpec};
use crate::functions::single_arg;
use crate::options::Options;
use crate::parser::{LapAlignment, NodeType, ParseNode, ParseNodeLap};
use crate::types::ParseError;

/// Registers `\mathllap`, `\mathrlap` and `\mathclap`.
pub fn define_lap(ctx: &mut TexboxContext) {
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Lap),
        names: &["\\mathllap", "\\mathrlap", "\\mathclap"],
        props: FunctionPropSpec {
            num_args: 1,
            allowed_in_text: true,
            ..Default::default()
        },
        handler: |context: FunctionContext, args, _opt_args| {
            let body = single_arg(&context, args)?;
            let alignment = match context.func_name.as_str() {
                "\\mathllap" => LapAlignment::Left,
                "\\mathclap" => LapAlignment::Center,
                _ => LapAlignment::Right,
            };
            Ok(ParseNode::Lap(ParseNodeLap {
                mode: context.parser.mode,
                loc: context.loc(),
                alignment,
                body: Box::new(body),
            }))
        },
    });
}

/// The body with kerns that cancel its width.
pub fn build_lap(ctx: &TexboxContext, lap: &ParseNodeLap, options: &Options) -> Result<LayoutBox, ParseError> {
    let inner = layout(ctx, &lap.body, options)?;
    let width = inner.width();
    let children = match lap.alignment {
        LapAlignment::Left => vec![LayoutBox::kern(-width), inner],
        LapAlignment::Right => vec![inner, LayoutBox::kern(-width)],
        LapAlignment::Center => vec![
            LayoutBox::kern(-width / 2.0),
            inner,
            LayoutBox::kern(-width / 2.0),
        ],
    };
    Ok(LayoutBox::hbox(children))
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
    fn laps_take_no_width() {
        let body = build("xyz");
        for command in [r"\mathllap", r"\mathrlap", r"\mathclap"] {
            let lapped = build(&format!("{command}{{xyz}}"));
            assert!(lapped.width().abs() < 1e-9, "{command} has width {}", lapped.width());
            assert!((lapped.height() - body.height()).abs() < 1e-9);
            assert!(lapped.has_ink());
        }
    }

    #[test]
    fn kerns_sit_on_the_side_the_body_sticks_out() {
        let LayoutBox::HBox(left) = build(r"\mathllap{x}") else {
            panic!("expected an hbox");
        };
        assert!(matches!(left.children[0], LayoutBox::Kern(kern) if kern.amount < 0.0));
        let LayoutBox::HBox(center) = build(r"\mathclap{x}") else {
            panic!("expected an hbox");
        };
        assert_eq!(center.children.len(), 3);
        assert!((center.children[0].width() - center.children[2].width()).abs() < 1e-12);
    }

    #[test]
    fn text_laps_are_macros() {
        let LayoutBox::HBox(lap) = build(r"\rlap{ab}") else {
            panic!("expected an hbox");
        };
        assert!(lap.width.abs() < 1e-9);
        assert!(matches!(lap.children[0], LayoutBox::HBox(_)));
    }
}
