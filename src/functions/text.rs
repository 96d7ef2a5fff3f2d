//! Text-mode material inside math: `\text` and its weight and shape variants

use phf::phf_map;

use crate::box_tree::LayoutBox;
use crate::build_box::build_hbox;
use crate::context::TexboxContext;
use crate::define_function::{ArgType, FunctionContext, FunctionDefSpec, FunctionPropSpec, ord_argument};
use crate::functions::single_arg;
use crate::options::Options;
use crate::parser::{NodeType, ParseNode, ParseNodeText};
use crate::symbols::Mode;
use crate::types::ParseError;

/// Weight and shape each command sets; `None` keeps the surrounding one.
static TEXT_FONTS: phf::Map<&'static str, (Option<bool>, Option<bool>)> = phf_map! {
    "\\text" => (None, None),
    "\\textrm" => (None, None),
    "\\textnormal" => (Some(false), Some(false)),
    "\\textbf" => (Some(true), None),
    "\\textmd" => (Some(false), None),
    "\\textit" => (None, Some(true)),
    "\\textup" => (None, Some(false)),
};

/// Registers `\text` and its weight and shape variants.
pub fn define_text(ctx: &mut TexboxContext) {
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Text),
        names: &[
            "\\text",
            "\\textrm",
            "\\textnormal",
            "\\textbf",
            "\\textmd",
            "\\textit",
            "\\textup",
        ],
        props: FunctionPropSpec {
            num_args: 1,
            arg_types: Some(vec![ArgType::Mode(Mode::Text)]),
            allowed_in_argument: true,
            allowed_in_text: true,
            ..Default::default()
        },
        handler: |context: FunctionContext, args, _opt_args| {
            let body = single_arg(&context, args)?;
            Ok(ParseNode::Text(ParseNodeText {
                mode: context.parser.mode,
                loc: context.loc(),
                body: ord_argument(body),
                font: Some(context.func_name.clone()),
            }))
        },
    });
}

fn options_with_font(text: &ParseNodeText, options: &Options) -> Options {
    let (bold, italic) = text
        .font
        .as_deref()
        .and_then(|font| TEXT_FONTS.get(font))
        .copied()
        .unwrap_or((None, None));
    options.with_text_font(bold, italic)
}

/// Lays out text-mode material.
pub fn build_text(ctx: &TexboxContext, text: &ParseNodeText, options: &Options) -> Result<LayoutBox, ParseError> {
    build_hbox(ctx, &text.body, &options_with_font(text, options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build_box::layout;
    use crate::font_metrics::FontName;
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

    fn fonts(text: &LayoutBox) -> Vec<FontName> {
        let LayoutBox::HBox(list) = text else {
            panic!("not an hbox");
        };
        list.children
            .iter()
            .filter_map(|child| match child {
                LayoutBox::Glyph(glyph) => Some(glyph.font),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn text_is_upright_and_keeps_spaces() {
        let text = build(r"\text{a b}");
        assert_eq!(fonts(&text), vec![FontName::MainRegular; 3]);
    }

    #[test]
    fn weight_and_shape_commands() {
        assert_eq!(fonts(&build(r"\textbf{ab}")), vec![FontName::MainBold; 2]);
        assert_eq!(fonts(&build(r"\textit{ab}")), vec![FontName::MainItalic; 2]);
    }

    #[test]
    fn nested_text_commands_combine() {
        let LayoutBox::HBox(outer) = build(r"\textit{a\textup{b}}") else {
            panic!("not an hbox");
        };
        let LayoutBox::Glyph(first) = &outer.children[0] else {
            panic!("not a glyph");
        };
        assert_eq!(first.font, FontName::MainItalic);
        assert_eq!(fonts(&outer.children[1]), vec![FontName::MainRegular]);
    }

    #[test]
    fn text_inside_math_switches_mode() {
        let settings = Settings::default();
        let ctx = TexboxContext::default();
        let ParseNode::OrdGroup(root) = Parser::new(r"\text{ab c}", &settings, &ctx).parse().unwrap() else {
            panic!("root is not a group");
        };
        let ParseNode::Text(text) = &root.body[0] else {
            panic!("not text");
        };
        assert_eq!(text.mode, Mode::Math);
        assert_eq!(text.body.len(), 4);
        assert!(text.body.iter().all(|node| node.mode() == Mode::Text));
    }
}
