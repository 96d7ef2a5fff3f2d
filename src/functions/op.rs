//! Large operators and named operators
//!
//! `\sum` and its relatives draw a glyph from the Size1 font (Size2 in
//! display style) centred on the math axis. `\sin`, `\lim` and friends are
//! upright names. Operators with limits put their scripts above and below
//! in display style, spaced by the `big_op_spacing` parameters of TeXbook
//! rule 13a.

use crate::box_tree::{LayoutBox, VListChild, VListPosition, make_v_list};
use crate::build_box::{build_hbox, layout};
use crate::build_common::make_symbol;
use crate::context::TexboxContext;
use crate::define_function::{ArgType, FunctionContext, FunctionDefSpec, FunctionPropSpec, ord_argument};
use crate::font_metrics::FontName;
use crate::options::Options;
use crate::parser::{NodeType, OpBase, ParseNode, ParseNodeFont, ParseNodeOp};
use crate::style::Style;
use crate::symbols::Mode;
use crate::types::ParseError;

/// The glyph of a symbol operator, by command or by the character itself.
fn operator_symbol(name: &str) -> Option<(char, bool)> {
    let entry = match name {
        "\\prod" | "\u{220F}" => ('\u{220F}', true),
        "\\coprod" | "\u{2210}" => ('\u{2210}', true),
        "\\sum" | "\u{2211}" => ('\u{2211}', true),
        "\\bigwedge" | "\u{22C0}" => ('\u{22C0}', true),
        "\\bigvee" | "\u{22C1}" => ('\u{22C1}', true),
        "\\bigcap" | "\u{22C2}" => ('\u{22C2}', true),
        "\\bigcup" | "\u{22C3}" => ('\u{22C3}', true),
        "\\bigodot" | "\u{2A00}" => ('\u{2A00}', true),
        "\\bigoplus" | "\u{2A01}" => ('\u{2A01}', true),
        "\\bigotimes" | "\u{2A02}" => ('\u{2A02}', true),
        "\\biguplus" | "\u{2A04}" => ('\u{2A04}', true),
        "\\bigsqcup" | "\u{2A06}" => ('\u{2A06}', true),
        "\\intop" => ('\u{222B}', true),
        "\\int" | "\u{222B}" => ('\u{222B}', false),
        "\\iint" | "\u{222C}" => ('\u{222C}', false),
        "\\iiint" | "\u{222D}" => ('\u{222D}', false),
        "\\oint" | "\u{222E}" => ('\u{222E}', false),
        _ => return None,
    };
    Some(entry)
}

/// Registers large operators (`\sum`, `\int`, ...), named operators
/// (`\lim`, `\sin`, ...), `\mathop`, and `\limits`/`\nolimits`.
pub fn define_op(ctx: &mut TexboxContext) {
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Op),
        names: &[
            "\\coprod", "\\bigvee", "\\bigwedge", "\\biguplus", "\\bigcap", "\\bigcup", "\\intop",
            "\\prod", "\\sum", "\\bigotimes", "\\bigoplus", "\\bigodot", "\\bigsqcup", "\\int",
            "\\iint", "\\iiint", "\\oint", "\u{220F}", "\u{2210}", "\u{2211}", "\u{22C0}",
            "\u{22C1}", "\u{22C2}", "\u{22C3}", "\u{2A00}", "\u{2A01}", "\u{2A02}", "\u{2A04}",
            "\u{2A06}", "\u{222B}", "\u{222C}", "\u{222D}", "\u{222E}",
        ],
        props: FunctionPropSpec::default(),
        handler: |context: FunctionContext, _args, _opt_args| {
            let (symbol, limits) = operator_symbol(&context.func_name).unwrap_or(('\u{2211}', true));
            Ok(ParseNode::Op(ParseNodeOp {
                mode: context.parser.mode,
                loc: context.loc(),
                limits,
                always_handle_sup_sub: false,
                suppress_base_shift: false,
                base: OpBase::Symbol(symbol),
            }))
        },
    });

    // Named operators whose scripts go to the side
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Op),
        names: &[
            "\\arcsin", "\\arccos", "\\arctan", "\\arctg", "\\arcctg", "\\arg", "\\ch", "\\cos",
            "\\cosec", "\\cosh", "\\cot", "\\cotg", "\\coth", "\\csc", "\\ctg", "\\cth", "\\deg",
            "\\dim", "\\exp", "\\hom", "\\ker", "\\lg", "\\ln", "\\log", "\\sec", "\\sin",
            "\\sinh", "\\sh", "\\tan", "\\tanh", "\\tg", "\\th",
        ],
        props: FunctionPropSpec::default(),
        handler: |context: FunctionContext, _args, _opt_args| {
            Ok(named_op(&context, false))
        },
    });

    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Op),
        names: &[
            "\\det", "\\gcd", "\\inf", "\\lim", "\\max", "\\min", "\\Pr", "\\sup", "\\liminf",
            "\\limsup",
        ],
        props: FunctionPropSpec::default(),
        handler: |context: FunctionContext, _args, _opt_args| {
            Ok(named_op(&context, true))
        },
    });

    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Op),
        names: &["\\mathop"],
        props: FunctionPropSpec {
            num_args: 1,
            primitive: true,
            ..Default::default()
        },
        handler: |context: FunctionContext, args, _opt_args| {
            let Some(arg) = args.into_iter().next() else {
                return Ok(ParseNode::Op(empty_op(&context)));
            };
            Ok(ParseNode::Op(ParseNodeOp {
                base: OpBase::Body(ord_argument(arg)),
                ..empty_op(&context)
            }))
        },
    });

    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Op),
        names: &["\\operatorname", "\\operatornamewithlimits"],
        props: FunctionPropSpec {
            num_args: 1,
            arg_types: Some(vec![ArgType::Original]),
            ..Default::default()
        },
        handler: |context: FunctionContext, args, _opt_args| {
            let Some(arg) = args.into_iter().next() else {
                return Ok(ParseNode::Op(empty_op(&context)));
            };
            let upright = ParseNode::Font(ParseNodeFont {
                mode: context.parser.mode,
                loc: arg.loc().cloned(),
                font: "mathrm".to_owned(),
                body: Box::new(arg),
            });
            Ok(ParseNode::Op(ParseNodeOp {
                limits: context.func_name == "\\operatornamewithlimits",
                base: OpBase::Body(vec![upright]),
                ..empty_op(&context)
            }))
        },
    });
}

fn empty_op(context: &FunctionContext) -> ParseNodeOp {
    ParseNodeOp {
        mode: context.parser.mode,
        loc: context.loc(),
        limits: false,
        always_handle_sup_sub: false,
        suppress_base_shift: false,
        base: OpBase::Body(Vec::new()),
    }
}

fn named_op(context: &FunctionContext, limits: bool) -> ParseNode {
    let name = context.func_name.trim_start_matches('\\');
    let name = match name {
        "liminf" => "lim inf",
        "limsup" => "lim sup",
        other => other,
    };
    ParseNode::Op(ParseNodeOp {
        limits,
        base: OpBase::Name(name.to_owned()),
        ..empty_op(context)
    })
}

/// Lays out an operator, with its scripts as limits when given.
///
/// Scripts passed here always go above and below; [`build_supsub`]
/// decides when that applies.
///
/// [`build_supsub`]: crate::functions::build_supsub
pub fn build_op(
    ctx: &TexboxContext,
    op: &ParseNodeOp,
    sup: Option<&ParseNode>,
    sub: Option<&ParseNode>,
    options: &Options,
) -> Result<LayoutBox, ParseError> {
    let (base, base_shift, slant) = match &op.base {
        OpBase::Symbol(symbol) => {
            let font = if options.style.size() == Style::Display.size() {
                FontName::Size2
            } else {
                FontName::Size1
            };
            let glyph = make_symbol(ctx, &symbol.to_string(), font, Mode::Math, options)?;
            let shift = if op.suppress_base_shift {
                0.0
            } else {
                (glyph.height() - glyph.depth()) / 2.0 - options.metrics().axis_height
            };
            let slant = glyph.italic();
            (glyph, shift, slant)
        }
        OpBase::Name(name) => {
            let glyphs = name
                .chars()
                .map(|ch| {
                    if ch == ' ' {
                        Ok(LayoutBox::kern(options.metrics().css_em_per_mu * 3.0))
                    } else {
                        make_symbol(ctx, &ch.to_string(), FontName::MainRegular, Mode::Math, options)
                    }
                })
                .collect::<Result<Vec<_>, _>>()?;
            (LayoutBox::hbox(glyphs), 0.0, 0.0)
        }
        OpBase::Body(body) => (build_hbox(ctx, body, options)?, 0.0, 0.0),
    };

    if sup.is_none() && sub.is_none() {
        return Ok(base.shifted(base_shift));
    }

    let metrics = options.metrics();
    let sup = sup
        .map(|node| {
            let script = layout(ctx, node, &options.having_style(options.style.sup()))?;
            let kern = metrics
                .big_op_spacing1
                .max(metrics.big_op_spacing3 - script.depth());
            Ok::<_, ParseError>((script, kern))
        })
        .transpose()?;
    let sub = sub
        .map(|node| {
            let script = layout(ctx, node, &options.having_style(options.style.sub()))?;
            let kern = metrics
                .big_op_spacing2
                .max(metrics.big_op_spacing4 - script.height());
            Ok::<_, ParseError>((script, kern))
        })
        .transpose()?;

    let width = [
        Some(base.width()),
        sup.as_ref().map(|(script, _)| script.width()),
        sub.as_ref().map(|(script, _)| script.width()),
    ]
    .into_iter()
    .flatten()
    .fold(0.0, f64::max);
    let (base_height, base_depth) = (base.height(), base.depth());
    let base = base.centered(width, 0.0);
    let spacing5 = metrics.big_op_spacing5;

    let stacked = match (sup, sub) {
        (Some((sup, sup_kern)), Some((sub, sub_kern))) => {
            let bottom = spacing5 + sub.height() + sub.depth() + sub_kern + base_depth + base_shift;
            make_v_list(
                VListPosition::Bottom(bottom),
                vec![
                    VListChild::Kern(spacing5),
                    VListChild::Box(sub.centered(width, -slant / 2.0)),
                    VListChild::Kern(sub_kern),
                    VListChild::Box(base),
                    VListChild::Kern(sup_kern),
                    VListChild::Box(sup.centered(width, slant / 2.0)),
                    VListChild::Kern(spacing5),
                ],
            )
        }
        (None, Some((sub, sub_kern))) => make_v_list(
            VListPosition::Top(base_height - base_shift),
            vec![
                VListChild::Kern(spacing5),
                VListChild::Box(sub.centered(width, -slant / 2.0)),
                VListChild::Kern(sub_kern),
                VListChild::Box(base),
            ],
        ),
        (Some((sup, sup_kern)), None) => make_v_list(
            VListPosition::Bottom(base_depth + base_shift),
            vec![
                VListChild::Box(base),
                VListChild::Kern(sup_kern),
                VListChild::Box(sup.centered(width, slant / 2.0)),
                VListChild::Kern(spacing5),
            ],
        ),
        (None, None) => base,
    };
    Ok(stacked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Parser;
    use crate::types::Settings;

    fn build_with(input: &str, settings: &Settings) -> LayoutBox {
        let ctx = TexboxContext::default();
        let root = Parser::new(input, settings, &ctx).parse().unwrap();
        let LayoutBox::HBox(mut list) = layout(&ctx, &root, &Options::from_settings(settings)).unwrap() else {
            panic!("root is not an hbox");
        };
        list.children.remove(0)
    }

    fn inline(input: &str) -> LayoutBox {
        build_with(input, &Settings::default())
    }

    fn display(input: &str) -> LayoutBox {
        build_with(input, &Settings::builder().display_mode(true).build())
    }

    #[test]
    fn display_operators_are_larger() {
        assert!(display(r"\sum").width() > inline(r"\sum").width());
        assert!(display(r"\int").height() > inline(r"\int").height());
    }

    #[test]
    fn symbols_sit_on_the_axis() {
        let sum = inline(r"\sum");
        assert!(((sum.height() - sum.depth()) / 2.0 - 0.25).abs() < 1e-3);
        let big = display(r"\prod");
        assert!(((big.height() - big.depth()) / 2.0 - 0.25).abs() < 1e-3);
    }

    #[test]
    fn limits_stack_in_display_style() {
        let sum = display(r"\sum");
        let limits = display(r"\sum_{i=0}^{n}");
        assert!(matches!(limits, LayoutBox::VBox(_)));
        assert!(limits.height() > sum.height());
        assert!(limits.depth() > sum.depth());
    }

    #[test]
    fn inline_limits_go_to_the_side() {
        let scripts = inline(r"\sum_{i=0}^{n}");
        assert!(matches!(scripts, LayoutBox::HBox(_)));
        let forced = inline(r"\sum\limits_{i=0}^{n}");
        assert!(matches!(forced, LayoutBox::VBox(_)));
        let integral = display(r"\int_0^1");
        assert!(matches!(integral, LayoutBox::HBox(_)));
    }

    #[test]
    fn names_are_upright() {
        let LayoutBox::HBox(sin) = inline(r"\sin") else {
            panic!("expected an hbox");
        };
        assert_eq!(sin.children.len(), 3);
        assert!(sin.children.iter().all(|glyph| matches!(
            glyph,
            LayoutBox::Glyph(glyph) if glyph.font == FontName::MainRegular
        )));
    }

    #[test]
    fn operatorname_uses_roman_letters() {
        let LayoutBox::HBox(op) = inline(r"\operatorname{sgn}") else {
            panic!("expected an hbox");
        };
        assert!(op.width > 0.0);
        let named = inline(r"\operatornamewithlimits{argmax}_x");
        assert!(matches!(named, LayoutBox::HBox(_)));
        assert!(matches!(display(r"\operatornamewithlimits{argmax}_x"), LayoutBox::VBox(_)));
    }
}
