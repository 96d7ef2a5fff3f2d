//! Superscripts and subscripts
//!
//! The parser attaches `^` and `_` directly, so there is nothing to
//! register here. Layout follows TeXbook appendix G, rule 18: the shifts
//! start from the base's height and depth (or zero for a single
//! character), are pushed out to the font's minimums, and when both scripts
//! are present the gap between them is kept at four rule thicknesses.

use crate::box_tree::{LayoutBox, make_v_list_shifted};
use crate::build_box::layout;
use crate::context::TexboxContext;
use crate::functions::{build_horiz_brace, build_op};
use crate::options::Options;
use crate::parser::{ParseNode, ParseNodeSupSub};
use crate::style::Style;
use crate::types::ParseError;

/// Space after a script, in points.
const SCRIPT_SPACE_PT: f64 = 0.5;

/// Lays out a base with superscript and subscript, or an operator with
/// its limits.
///
/// Scripts are parsed by the parser itself rather than a registered
/// function, so there is no matching `define_supsub`.
pub fn build_supsub(
    ctx: &TexboxContext,
    supsub: &ParseNodeSupSub,
    options: &Options,
) -> Result<LayoutBox, ParseError> {
    let base_node = supsub.base.as_deref();
    if let Some(ParseNode::Op(op)) = base_node
        && op.limits
        && (options.style.size() == Style::Display.size() || op.always_handle_sup_sub)
    {
        return build_op(ctx, op, supsub.sup.as_deref(), supsub.sub.as_deref(), options);
    }

    let (mut sup, mut sub) = (supsub.sup.as_deref(), supsub.sub.as_deref());
    let base = match base_node {
        // the brace's own script becomes its note
        Some(ParseNode::HorizBrace(brace)) => {
            let note = if brace.is_over { sup.take() } else { sub.take() };
            build_horiz_brace(ctx, brace, note, options)?
        }
        Some(node) => layout(ctx, node, options)?,
        None => LayoutBox::empty(),
    };
    let is_character_box = base_node.is_some_and(ParseNode::is_character_box);
    attach_scripts(ctx, base, is_character_box, sup, sub, options)
}

/// Places `sup` and `sub` to the right of an already built base.
fn attach_scripts(
    ctx: &TexboxContext,
    base: LayoutBox,
    is_character_box: bool,
    sup: Option<&ParseNode>,
    sub: Option<&ParseNode>,
    options: &Options,
) -> Result<LayoutBox, ParseError> {
    let sup_options = options.having_style(options.style.sup());
    let sub_options = options.having_style(options.style.sub());
    let sup = sup.map(|node| layout(ctx, node, &sup_options)).transpose()?;
    let sub = sub.map(|node| layout(ctx, node, &sub_options)).transpose()?;

    let metrics = options.metrics();
    let (mut sup_shift, mut sub_shift) = if is_character_box {
        (0.0, 0.0)
    } else {
        (
            base.height() - sup_options.metrics().sup_drop,
            base.depth() + sub_options.metrics().sub_drop,
        )
    };

    let min_sup_shift = if options.style == Style::Display {
        metrics.sup1
    } else if options.style.is_cramped() {
        metrics.sup3
    } else {
        metrics.sup2
    };

    // the subscript tucks under the base's italic correction
    let italic = base.italic();
    let sub = sub.map(|sub| {
        if italic == 0.0 {
            sub
        } else {
            LayoutBox::hbox(vec![LayoutBox::kern(-italic), sub])
        }
    });

    let scripts = match (sup, sub) {
        (Some(sup), Some(sub)) => {
            sup_shift = sup_shift
                .max(min_sup_shift)
                .max(sup.depth() + 0.25 * metrics.x_height);
            sub_shift = sub_shift.max(metrics.sub2);

            let min_gap = 4.0 * metrics.default_rule_thickness;
            if (sup_shift - sup.depth()) - (sub.height() - sub_shift) < min_gap {
                sub_shift = min_gap - (sup_shift - sup.depth()) + sub.height();
                let psi = 0.8 * metrics.x_height - (sup_shift - sup.depth());
                if psi > 0.0 {
                    sup_shift += psi;
                    sub_shift -= psi;
                }
            }
            make_v_list_shifted(vec![(sub, sub_shift), (sup, -sup_shift)])
        }
        (None, Some(sub)) => {
            sub_shift = sub_shift
                .max(metrics.sub1)
                .max(sub.height() - 0.8 * metrics.x_height);
            make_v_list_shifted(vec![(sub, sub_shift)])
        }
        (Some(sup), None) => {
            sup_shift = sup_shift
                .max(min_sup_shift)
                .max(sup.depth() + 0.25 * metrics.x_height);
            make_v_list_shifted(vec![(sup, -sup_shift)])
        }
        (None, None) => return Ok(base),
    };

    Ok(LayoutBox::hbox(vec![
        base,
        scripts,
        LayoutBox::kern(SCRIPT_SPACE_PT / metrics.pt_per_em),
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Parser;
    use crate::types::Settings;

    fn build(input: &str) -> LayoutBox {
        let settings = Settings::default();
        let ctx = TexboxContext::default();
        let root = Parser::new(input, &settings, &ctx).parse().unwrap();
        layout(&ctx, &root, &Options::from_settings(&settings)).unwrap()
    }

    #[test]
    fn superscripts_rise_above_the_base() {
        let plain = build("x");
        let raised = build("x^2");
        assert!(raised.height() > plain.height());
        assert!(raised.height() >= 0.363 + 0.3);
        assert!(raised.width() > plain.width());
    }

    #[test]
    fn subscripts_drop_below_the_baseline() {
        let lowered = build("x_2");
        assert!(lowered.depth() >= 0.15);
    }

    #[test]
    fn both_scripts_spread_apart() {
        let both = build("x^2_i");
        let sup = build("x^2");
        let sub = build("x_i");
        assert!(both.height() >= sup.height() - 1e-9);
        assert!(both.depth() >= sub.depth() - 1e-9);
        assert!(both.depth() >= 0.247);
    }

    #[test]
    fn scripts_on_a_group_follow_its_height() {
        let tall = build(r"{\frac{a}{b}}^2");
        let frac = build(r"\frac{a}{b}");
        let sup_drop = 0.386 * 0.7;
        assert!(tall.height() >= frac.height() - sup_drop);
    }

    #[test]
    fn a_brace_takes_its_own_script_as_a_note() {
        let noted = build(r"\overbrace{a}^{n}");
        let brace = build(r"\overbrace{a}");
        assert!((noted.width() - brace.width()).abs() < 1e-9);
        assert!(noted.height() > brace.height());
        let beside = build(r"\overbrace{a}_{n}");
        assert!(beside.width() > brace.width());
    }

    #[test]
    fn nested_scripts_shrink() {
        let nested = build("x^{2^3}");
        let LayoutBox::HBox(root) = &nested else {
            panic!("root is not an hbox");
        };
        assert_eq!(root.children.len(), 1);
        assert!(nested.height() > build("x^2").height());
    }
}
