//! Math font commands
//!
//! `\mathrm{...}` and friends take one argument; the old-style switches
//! `\rm`, `\bf` and `\it` apply to the rest of the group. Families without
//! metrics of their own (sans-serif, typewriter, calligraphic, fraktur,
//! script) keep their font name but are measured as Main-Regular.

use phf::phf_map;

use crate::box_tree::LayoutBox;
use crate::build_box::layout;
use crate::context::TexboxContext;
use crate::define_function::{FunctionContext, FunctionDefSpec, FunctionPropSpec, normalize_argument};
use crate::font_metrics::FontName;
use crate::functions::mclass::binrel_class;
use crate::functions::single_arg;
use crate::options::Options;
use crate::parser::{NodeType, ParseNode, ParseNodeFont, ParseNodeMclass, ParseNodeOrdGroup};
use crate::types::ParseError;

/// Font each command name (without backslash) selects.
static MATH_FONTS: phf::Map<&'static str, FontName> = phf_map! {
    "mathrm" => FontName::MainRegular,
    "mathup" => FontName::MainRegular,
    "mathit" => FontName::MainItalic,
    "mathbf" => FontName::MainBold,
    "boldsymbol" => FontName::MainBold,
    "mathnormal" => FontName::MathItalic,
    "mathbb" => FontName::AmsRegular,
    "mathsf" => FontName::SansSerifRegular,
    "mathtt" => FontName::TypewriterRegular,
    "mathcal" => FontName::CaligraphicRegular,
    "mathfrak" => FontName::FrakturRegular,
    "mathscr" => FontName::ScriptRegular,
};

/// Registers the math font commands and their old-style switches.
pub fn define_font(ctx: &mut TexboxContext) {
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Font),
        names: &[
            "\\mathrm",
            "\\mathup",
            "\\mathit",
            "\\mathbf",
            "\\mathnormal",
            "\\mathbb",
            "\\mathsf",
            "\\mathtt",
            "\\mathcal",
            "\\mathfrak",
            "\\mathscr",
            "\\frak",
        ],
        props: FunctionPropSpec {
            num_args: 1,
            allowed_in_argument: true,
            ..Default::default()
        },
        handler: |context: FunctionContext, args, _opt_args| {
            let body = single_arg(&context, args)?;
            let font = match context.func_name.as_str() {
                "\\frak" => "mathfrak",
                name => name.trim_start_matches('\\'),
            };
            Ok(ParseNode::Font(ParseNodeFont {
                mode: context.parser.mode,
                loc: context.loc(),
                font: font.to_owned(),
                body: Box::new(normalize_argument(&body).clone()),
            }))
        },
    });

    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Mclass),
        names: &["\\boldsymbol", "\\bm"],
        props: FunctionPropSpec {
            num_args: 1,
            ..Default::default()
        },
        handler: |context: FunctionContext, args, _opt_args| {
            let body = single_arg(&context, args)?;
            let mclass = binrel_class(&body);
            let bold = ParseNode::Font(ParseNodeFont {
                mode: context.parser.mode,
                loc: context.loc(),
                font: "boldsymbol".to_owned(),
                body: Box::new(body),
            });
            Ok(ParseNode::Mclass(ParseNodeMclass {
                mode: context.parser.mode,
                loc: context.loc(),
                mclass,
                body: vec![bold],
            }))
        },
    });

    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Font),
        names: &["\\rm", "\\sf", "\\tt", "\\bf", "\\it", "\\cal"],
        props: FunctionPropSpec {
            allowed_in_text: true,
            ..Default::default()
        },
        handler: |context: FunctionContext, _args, _opt_args| {
            let body = context
                .parser
                .parse_expression(true, context.break_on_token_text)?;
            let font = format!("math{}", context.func_name.trim_start_matches('\\'));
            Ok(ParseNode::Font(ParseNodeFont {
                mode: context.parser.mode,
                loc: context.loc(),
                font,
                body: Box::new(ParseNode::OrdGroup(ParseNodeOrdGroup {
                    mode: context.parser.mode,
                    loc: context.loc(),
                    body,
                    semisimple: false,
                })),
            }))
        },
    });
}

/// Lays out the body in the requested font.
pub fn build_font(ctx: &TexboxContext, font: &ParseNodeFont, options: &Options) -> Result<LayoutBox, ParseError> {
    let options = match MATH_FONTS.get(font.font.as_str()) {
        Some(&name) => options.with_font(name),
        None => options.clone(),
    };
    layout(ctx, &font.body, &options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Parser;
    use crate::spacing_data::AtomClass;
    use crate::types::Settings;

    fn parse(input: &str) -> Vec<ParseNode> {
        let settings = Settings::default();
        let ctx = TexboxContext::default();
        let ParseNode::OrdGroup(root) = Parser::new(input, &settings, &ctx).parse().unwrap() else {
            panic!("root is not a group");
        };
        root.body
    }

    fn glyph_fonts(input: &str) -> Vec<FontName> {
        let settings = Settings::default();
        let ctx = TexboxContext::default();
        let root = Parser::new(input, &settings, &ctx).parse().unwrap();
        let mut fonts = Vec::new();
        collect_fonts(&layout(&ctx, &root, &Options::from_settings(&settings)).unwrap(), &mut fonts);
        fonts
    }

    fn collect_fonts(b: &LayoutBox, fonts: &mut Vec<FontName>) {
        match b {
            LayoutBox::Glyph(glyph) => fonts.push(glyph.font),
            LayoutBox::HBox(list) | LayoutBox::VBox(list) => {
                for child in &list.children {
                    collect_fonts(child, fonts);
                }
            }
            _ => {}
        }
    }

    #[test]
    fn math_fonts_change_glyph_fonts() {
        assert_eq!(glyph_fonts("x"), vec![FontName::MathItalic]);
        assert_eq!(glyph_fonts(r"\mathrm{x}"), vec![FontName::MainRegular]);
        assert_eq!(glyph_fonts(r"\mathbf{x}"), vec![FontName::MainBold]);
        assert_eq!(glyph_fonts(r"\mathit{x}"), vec![FontName::MainItalic]);
        assert_eq!(glyph_fonts(r"\mathbb{R}"), vec![FontName::AmsRegular]);
    }

    #[test]
    fn borrowed_families_keep_their_names() {
        assert_eq!(glyph_fonts(r"\mathsf{x}"), vec![FontName::SansSerifRegular]);
        assert_eq!(glyph_fonts(r"\mathtt{x}"), vec![FontName::TypewriterRegular]);
        assert_eq!(glyph_fonts(r"\mathcal{L}"), vec![FontName::CaligraphicRegular]);
        assert_eq!(glyph_fonts(r"\frak{g}"), vec![FontName::FrakturRegular]);
        assert_eq!(glyph_fonts(r"\mathscr{F}"), vec![FontName::ScriptRegular]);
        assert_eq!(glyph_fonts(r"x{\sf y}"), vec![FontName::MathItalic, FontName::SansSerifRegular]);
    }

    #[test]
    fn old_style_switches_cover_the_rest_of_the_group() {
        assert_eq!(
            glyph_fonts(r"x{\rm ab}y"),
            vec![
                FontName::MathItalic,
                FontName::MainRegular,
                FontName::MainRegular,
                FontName::MathItalic,
            ]
        );
    }

    #[test]
    fn font_argument_is_unwrapped() {
        let body = parse(r"\mathbf{x}");
        let ParseNode::Font(font) = &body[0] else {
            panic!("expected a font node");
        };
        assert_eq!(font.font, "mathbf");
        assert!(matches!(*font.body, ParseNode::MathOrd(_)));
    }

    #[test]
    fn boldsymbol_keeps_relation_class() {
        let body = parse(r"\boldsymbol{=}");
        assert!(matches!(&body[0], ParseNode::Mclass(m) if m.mclass == AtomClass::Mrel));
        let body = parse(r"\bm{x}");
        assert!(matches!(&body[0], ParseNode::Mclass(m) if m.mclass == AtomClass::Mord));
    }
}
