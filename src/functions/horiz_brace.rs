//! `\overbrace` and `\underbrace`
//!
//! The brace is drawn with rules: a bar as wide as the base, hooks at both
//! ends pointing at the base and a tip in the middle pointing away from it.
//! A superscript on `\overbrace` (subscript on `\underbrace`) is set as a
//! note beyond the tip.

use crate::box_tree::{LayoutBox, VListChild, VListPosition, make_v_list};
use crate::build_box::layout;
use crate::build_common::line_thickness;
use crate::context::TexboxContext;
use crate::define_function::{FunctionContext, FunctionDefSpec, FunctionPropSpec};
use crate::functions::single_arg;
use crate::options::Options;
use crate::parser::{NodeType, ParseNode, ParseNodeHorizBrace};
use crate::style::Style;
use crate::types::ParseError;

/// Height of the brace at normal size, in em.
const BRACE_HEIGHT: f64 = 0.35;
/// Gap between the base and the brace.
const BRACE_GAP: f64 = 0.1;
/// Gap between the brace and its note.
const NOTE_GAP: f64 = 0.2;

/// Registers `\overbrace` and `\underbrace`.
///
/// The brace's note arrives as a script, so [`build_supsub`] calls
/// [`build_horiz_brace`] directly when the base is a brace.
///
/// [`build_supsub`]: crate::functions::build_supsub
pub fn define_horiz_brace(ctx: &mut TexboxContext) {
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::HorizBrace),
        names: &["\\overbrace", "\\underbrace"],
        props: FunctionPropSpec {
            num_args: 1,
            ..Default::default()
        },
        handler: |context: FunctionContext, args, _opt_args| {
            let base = single_arg(&context, args)?;
            Ok(ParseNode::HorizBrace(Box::new(ParseNodeHorizBrace {
                mode: context.parser.mode,
                loc: context.loc(),
                is_over: context.func_name.starts_with("\\over"),
                label: context.func_name,
                base,
            })))
        },
    });
}

/// A brace `width` wide with its tip up (`is_over`) or down, sitting on the
/// baseline.
fn make_brace(width: f64, is_over: bool, options: &Options) -> LayoutBox {
    let thickness = line_thickness(options, None);
    let height = BRACE_HEIGHT * options.size_multiplier;
    let bar_bottom = (height - thickness) / 2.0;
    let rule = |width: f64, height: f64| LayoutBox::rule(width, height, 0.0, options.color.clone());

    let lower = rule(thickness, bar_bottom + thickness);
    let upper = rule(thickness, height - bar_bottom).shifted(-bar_bottom);
    let (end, tip) = if is_over { (lower, upper) } else { (upper, lower) };
    let bar_width = ((width - 3.0 * thickness) / 2.0).max(0.0);
    let bar = rule(bar_width, thickness).shifted(-bar_bottom);
    LayoutBox::hbox(vec![end.clone(), bar.clone(), tip, bar, end])
}

/// Lays out the base with its brace, and with `note` beyond the brace when
/// given.
pub fn build_horiz_brace(
    ctx: &TexboxContext,
    brace: &ParseNodeHorizBrace,
    note: Option<&ParseNode>,
    options: &Options,
) -> Result<LayoutBox, ParseError> {
    let base = layout(ctx, &brace.base, &options.having_style(Style::Display))?;
    let width = base.width().max(4.0 * line_thickness(options, None));
    let mark = make_brace(width, brace.is_over, options);
    let base = base.centered(width, 0.0);

    let braced = if brace.is_over {
        make_v_list(
            VListPosition::FirstBaseline,
            vec![
                VListChild::Box(base),
                VListChild::Kern(BRACE_GAP),
                VListChild::Box(mark),
            ],
        )
    } else {
        let top = base.height();
        make_v_list(
            VListPosition::Top(top),
            vec![
                VListChild::Box(mark),
                VListChild::Kern(BRACE_GAP),
                VListChild::Box(base),
            ],
        )
    };

    let Some(note) = note else {
        return Ok(braced);
    };
    let note_style = if brace.is_over {
        options.style.sup()
    } else {
        options.style.sub()
    };
    let note = layout(ctx, note, &options.having_style(note_style))?;
    let width = braced.width().max(note.width());
    let note = note.centered(width, 0.0);
    let braced = braced.centered(width, 0.0);
    Ok(if brace.is_over {
        make_v_list(
            VListPosition::FirstBaseline,
            vec![
                VListChild::Box(braced),
                VListChild::Kern(NOTE_GAP),
                VListChild::Box(note),
            ],
        )
    } else {
        let top = braced.height();
        make_v_list(
            VListPosition::Top(top),
            vec![
                VListChild::Box(note),
                VListChild::Kern(NOTE_GAP),
                VListChild::Box(braced),
            ],
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::box_tree::ListBox;
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

    fn rule_count(b: &LayoutBox) -> usize {
        match b {
            LayoutBox::Rule(_) => 1,
            LayoutBox::HBox(ListBox { children, .. }) | LayoutBox::VBox(ListBox { children, .. }) => {
                children.iter().map(rule_count).sum()
            }
            _ => 0,
        }
    }

    #[test]
    fn brace_spans_the_base() {
        let options = Options::from_settings(&Settings::default());
        let brace = make_brace(2.0, true, &options);
        assert!((brace.width() - 2.0).abs() < 1e-9);
        assert!((brace.height() - BRACE_HEIGHT).abs() < 1e-9);
        assert_eq!(brace.depth(), 0.0);
        assert_eq!(rule_count(&brace), 5);
    }

    #[test]
    fn overbrace_goes_above_and_underbrace_below() {
        let base = build("{a+b}");
        let over = build(r"\overbrace{a+b}");
        assert!((over.height() - (base.height() + BRACE_GAP + BRACE_HEIGHT)).abs() < 1e-9);
        assert!((over.depth() - base.depth()).abs() < 1e-9);
        assert!((over.width() - base.width()).abs() < 1e-9);

        let under = build(r"\underbrace{a+b}");
        assert!((under.height() - base.height()).abs() < 1e-9);
        assert!((under.depth() - (base.depth() + BRACE_GAP + BRACE_HEIGHT)).abs() < 1e-9);
    }

    #[test]
    fn notes_go_beyond_the_tip() {
        let plain = build(r"\overbrace{a+b}");
        let noted = build(r"\overbrace{a+b}^{n}");
        assert!(noted.height() > plain.height() + NOTE_GAP);
        assert!((noted.depth() - plain.depth()).abs() < 1e-9);

        let plain = build(r"\underbrace{a+b}");
        let noted = build(r"\underbrace{a+b}_{k}");
        assert!(noted.depth() > plain.depth() + NOTE_GAP);
        assert!((noted.height() - plain.height()).abs() < 1e-9);
    }

    #[test]
    fn the_other_script_attaches_to_the_side() {
        let noted = build(r"\overbrace{a+b}^{n}");
        let both = build(r"\overbrace{a+b}^{n}_{2}");
        assert!(both.width() > noted.width());
        assert!(both.depth() > noted.depth());
    }
}
