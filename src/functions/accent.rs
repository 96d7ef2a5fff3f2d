//! Accents over a base
//!
//! Math accents (`\hat`, `\vec`, ...) take a math argument; the text
//! accents (`\'`, `\^`, ...) are also allowed in text mode. `\widehat` and
//! `\widetilde` pick the narrowest of the sized variants that spans the
//! base.

use crate::box_tree::{LayoutBox, VListChild, VListPosition, make_v_list};
use crate::build_box::layout;
use crate::build_common::{has_glyph, make_symbol, symbol_font, symbol_skew};
use crate::context::TexboxContext;
use crate::define_function::{FunctionContext, FunctionDefSpec, FunctionPropSpec, normalize_argument};
use crate::font_metrics::FontName;
use crate::options::Options;
use crate::parser::{NodeType, ParseNode, ParseNodeAccent};
use crate::symbols::Mode;
use crate::types::{ParseError, ParseErrorKind};

const STRETCHY_FONTS: [FontName; 5] = [
    FontName::MainRegular,
    FontName::Size1,
    FontName::Size2,
    FontName::Size3,
    FontName::Size4,
];

/// The character drawn for an accent command.
#[must_use]
pub fn accent_char(label: &str) -> Option<char> {
    let ch = match label {
        "\\acute" | "\\'" => '\u{02CA}',
        "\\grave" | "\\`" => '\u{02CB}',
        "\\ddot" | "\\\"" => '\u{00A8}',
        "\\tilde" | "\\~" | "\\widetilde" => '\u{02DC}',
        "\\bar" | "\\=" => '\u{02C9}',
        "\\breve" | "\\u" => '\u{02D8}',
        "\\check" | "\\v" => '\u{02C7}',
        "\\hat" | "\\^" | "\\widehat" => '\u{02C6}',
        "\\vec" => '\u{20D7}',
        "\\dot" | "\\." => '\u{02D9}',
        "\\mathring" | "\\r" => '\u{02DA}',
        _ => return None,
    };
    Some(ch)
}

/// Registers the text accents and math accents (`\hat`, `\vec`, `\'`, ...).
pub fn define_accent(ctx: &mut TexboxContext) {
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Accent),
        names: &[
            "\\acute",
            "\\grave",
            "\\ddot",
            "\\tilde",
            "\\bar",
            "\\breve",
            "\\check",
            "\\hat",
            "\\vec",
            "\\dot",
            "\\mathring",
            "\\widehat",
            "\\widetilde",
        ],
        props: FunctionPropSpec {
            num_args: 1,
            ..Default::default()
        },
        handler: |context: FunctionContext, args, _opt_args| {
            let Some(arg) = args.into_iter().next() else {
                return Err(ParseError::with_token(
                    ParseErrorKind::ExpectedGroupAfter {
                        symbol: context.func_name.clone(),
                    },
                    &context.loc(),
                ));
            };
            let is_stretchy = matches!(context.func_name.as_str(), "\\widehat" | "\\widetilde");
            Ok(ParseNode::Accent(Box::new(ParseNodeAccent {
                mode: context.parser.mode,
                loc: context.loc(),
                label: context.func_name.clone(),
                is_stretchy,
                is_shifty: true,
                base: normalize_argument(&arg).clone(),
            })))
        },
    });

    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Accent),
        names: &["\\'", "\\`", "\\^", "\\~", "\\=", "\\u", "\\.", "\\\"", "\\r", "\\v"],
        props: FunctionPropSpec {
            num_args: 1,
            allowed_in_text: true,
            primitive: true,
            ..Default::default()
        },
        handler: |context: FunctionContext, args, _opt_args| {
            let Some(base) = args.into_iter().next() else {
                return Err(ParseError::with_token(
                    ParseErrorKind::ExpectedGroupAfter {
                        symbol: context.func_name.clone(),
                    },
                    &context.loc(),
                ));
            };
            Ok(ParseNode::Accent(Box::new(ParseNodeAccent {
                mode: context.parser.mode,
                loc: context.loc(),
                label: context.func_name.clone(),
                is_stretchy: false,
                is_shifty: true,
                base,
            })))
        },
    });
}

/// Skew of a single-character base, which moves the accent over the
/// visual centre of slanted letters.
fn base_skew(ctx: &TexboxContext, base: &ParseNode, options: &Options) -> f64 {
    let elem = base.base_elem();
    let Some(text) = elem.text() else {
        return 0.0;
    };
    let mode = elem.mode();
    let font = symbol_font(ctx, text, mode, options);
    symbol_skew(ctx, text, font, mode, options)
}

/// The widest-fitting variant of a stretchy accent for a base `width` wide.
fn stretchy_accent(
    ctx: &TexboxContext,
    ch: char,
    width: f64,
    options: &Options,
) -> Result<LayoutBox, ParseError> {
    let text = ch.to_string();
    let mut widest = None;
    for font in STRETCHY_FONTS {
        if !has_glyph(ctx, &text, font, Mode::Text) {
            continue;
        }
        let glyph = make_symbol(ctx, &text, font, Mode::Text, options)?;
        if glyph.width() >= width {
            return Ok(glyph);
        }
        widest = Some(glyph);
    }
    match widest {
        Some(glyph) => Ok(glyph),
        None => make_symbol(ctx, &text, FontName::MainRegular, Mode::Text, options),
    }
}

/// Lays out an accent over its base, shifted by the base's skew.
pub fn build_accent(
    ctx: &TexboxContext,
    accent: &ParseNodeAccent,
    options: &Options,
) -> Result<LayoutBox, ParseError> {
    let Some(ch) = accent_char(&accent.label) else {
        return Err(ParseError::with_token(
            ParseErrorKind::UnknownAccent {
                label: accent.label.clone(),
            },
            &accent.loc,
        ));
    };

    let base = layout(ctx, &accent.base, &options.having_cramped_style())?;
    let skew = if accent.is_shifty && accent.base.is_character_box() {
        base_skew(ctx, &accent.base, options)
    } else {
        0.0
    };
    let clearance = base.height().min(options.metrics().x_height);

    let glyph = if accent.is_stretchy {
        stretchy_accent(ctx, ch, base.width(), options)?
    } else {
        make_symbol(ctx, &ch.to_string(), FontName::MainRegular, Mode::Text, options)?
    };
    let width = base.width();
    let mark = glyph.centered(width, skew);

    Ok(make_v_list(
        VListPosition::FirstBaseline,
        vec![
            VListChild::Box(base),
            VListChild::Kern(-clearance),
            VListChild::Box(mark),
        ],
    ))
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

    /// The accent glyph, the topmost inked child of the accent's stack.
    fn mark(accented: &LayoutBox) -> &LayoutBox {
        let LayoutBox::VBox(stack) = accented else {
            panic!("not a vbox");
        };
        let Some(LayoutBox::HBox(centered)) = stack
            .children
            .iter()
            .find(|child| !matches!(child, LayoutBox::Kern(_)))
        else {
            panic!("no accent");
        };
        &centered.children[1]
    }

    #[test]
    fn accents_sit_above_the_base() {
        let hat = build(r"\hat{x}");
        let x = build("x");
        assert!(hat.height() > x.height());
        assert!((hat.width() - x.width()).abs() < 1e-9);
        assert!((hat.depth() - x.depth()).abs() < 1e-9);
    }

    #[test]
    fn accent_glyphs_come_from_main_regular() {
        let built = build(r"\vec{v}");
        let LayoutBox::Glyph(glyph) = mark(&built) else {
            panic!("not a glyph");
        };
        assert_eq!(glyph.text, "\u{20D7}");
        assert_eq!(glyph.font, FontName::MainRegular);
        assert_eq!(glyph.italic, 0.0);
    }

    #[test]
    fn wide_accents_grow_with_the_base() {
        let narrow = mark(&build(r"\widehat{x}")).width();
        let wide = mark(&build(r"\widehat{xyz}")).width();
        assert!(wide > narrow);
    }

    #[test]
    fn text_accents_work_in_text() {
        let LayoutBox::HBox(text) = build(r"\text{\'e}") else {
            panic!("not an hbox");
        };
        assert!(matches!(text.children[0], LayoutBox::VBox(_)));
    }

    #[test]
    fn accent_labels_map_to_characters() {
        assert_eq!(accent_char("\\hat"), Some('\u{02C6}'));
        assert_eq!(accent_char("\\\""), Some('\u{00A8}'));
        assert_eq!(accent_char("\\nope"), None);
    }
}
