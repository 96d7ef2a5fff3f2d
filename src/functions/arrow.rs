//! Extensible arrows: `\xrightarrow[below]{above}` and friends
//!
//! An arrow is an arrowhead glyph from Main-Regular whose shaft is extended
//! with rules on the math axis until it is half an em wider than either
//! label on each side.

use crate::box_tree::{LayoutBox, make_v_list_shifted};
use crate::build_box::layout;
use crate::build_common::{line_thickness, make_symbol};
use crate::context::TexboxContext;
use crate::define_function::{FunctionContext, FunctionDefSpec, FunctionPropSpec};
use crate::font_metrics::FontName;
use crate::functions::single_arg;
use crate::options::Options;
use crate::parser::{NodeType, ParseNode, ParseNodeXArrow};
use crate::symbols::Mode;
use crate::types::ParseError;

/// Space on each side of the wider label.
const LABEL_PAD: f64 = 0.5;
/// Gap between a label and the arrow.
const LABEL_GAP: f64 = 0.111;
/// Distance between the two strokes of a double shaft.
const DOUBLE_SHAFT_GAP: f64 = 0.2;

#[derive(Clone, Copy)]
enum ArrowEnd {
    None,
    /// An arrowhead glyph, with its own stub of shaft.
    Head(&'static str),
    /// The short vertical stroke of `\mapsto`.
    Bar,
}

#[derive(Clone, Copy)]
struct ArrowShape {
    left: ArrowEnd,
    right: ArrowEnd,
    double: bool,
    min_width: f64,
}

const fn shape(left: ArrowEnd, right: ArrowEnd, double: bool, min_width: f64) -> ArrowShape {
    ArrowShape {
        left,
        right,
        double,
        min_width,
    }
}

static ARROWS: phf::Map<&'static str, ArrowShape> = phf::phf_map! {
    "\\xleftarrow" => shape(ArrowEnd::Head("\\leftarrow"), ArrowEnd::None, false, 1.469),
    "\\xrightarrow" => shape(ArrowEnd::None, ArrowEnd::Head("\\rightarrow"), false, 1.469),
    "\\xleftrightarrow" => shape(ArrowEnd::Head("\\leftarrow"), ArrowEnd::Head("\\rightarrow"), false, 2.0),
    "\\xLeftarrow" => shape(ArrowEnd::Head("\\Leftarrow"), ArrowEnd::None, true, 1.526),
    "\\xRightarrow" => shape(ArrowEnd::None, ArrowEnd::Head("\\Rightarrow"), true, 1.526),
    "\\xLeftrightarrow" => shape(ArrowEnd::Head("\\Leftarrow"), ArrowEnd::Head("\\Rightarrow"), true, 2.0),
    "\\xmapsto" => shape(ArrowEnd::Bar, ArrowEnd::Head("\\rightarrow"), false, 1.5),
    "\\xlongequal" => shape(ArrowEnd::None, ArrowEnd::None, true, 0.888),
};

/// Registers the extensible arrows `\xrightarrow`, `\xLeftarrow`,
/// `\xmapsto`, `\xlongequal` and the rest, with an optional label below.
pub fn define_arrow(ctx: &mut TexboxContext) {
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::XArrow),
        names: &[
            "\\xleftarrow",
            "\\xrightarrow",
            "\\xleftrightarrow",
            "\\xLeftarrow",
            "\\xRightarrow",
            "\\xLeftrightarrow",
            "\\xmapsto",
            "\\xlongequal",
        ],
        props: FunctionPropSpec {
            num_args: 1,
            num_optional_args: 1,
            ..Default::default()
        },
        handler: |context: FunctionContext, args, mut opt_args| {
            let below = opt_args.pop().flatten();
            let body = single_arg(&context, args)?;
            Ok(ParseNode::XArrow(Box::new(ParseNodeXArrow {
                mode: context.parser.mode,
                loc: context.loc(),
                label: context.func_name,
                body,
                below,
            })))
        },
    });
}

/// The arrow itself, `width` wide, with its shaft on the math axis.
fn make_arrow(
    ctx: &TexboxContext,
    shape: ArrowShape,
    width: f64,
    options: &Options,
) -> Result<LayoutBox, ParseError> {
    let axis = options.metrics().axis_height;
    let thickness = line_thickness(options, None);
    let end = |end: ArrowEnd| -> Result<Option<LayoutBox>, ParseError> {
        Ok(match end {
            ArrowEnd::None => None,
            ArrowEnd::Head(name) => Some(make_symbol(ctx, name, FontName::MainRegular, Mode::Math, options)?),
            ArrowEnd::Bar => {
                let half = 0.2 * options.size_multiplier;
                Some(LayoutBox::rule(thickness, 2.0 * half, 0.0, options.color.clone()).shifted(half - axis))
            }
        })
    };
    let left = end(shape.left)?;
    let right = end(shape.right)?;

    let ends_width = left.as_ref().map_or(0.0, LayoutBox::width) + right.as_ref().map_or(0.0, LayoutBox::width);
    let shaft_width = (width - ends_width).max(0.0);
    let stroke = || LayoutBox::rule(shaft_width, thickness, 0.0, options.color.clone());
    let shaft = if shape.double {
        let gap = DOUBLE_SHAFT_GAP * options.size_multiplier / 2.0;
        make_v_list_shifted(vec![
            (stroke(), -(axis - gap - thickness / 2.0)),
            (stroke(), -(axis + gap - thickness / 2.0)),
        ])
    } else {
        stroke().shifted(-(axis - thickness / 2.0))
    };

    let children = left.into_iter().chain([shaft]).chain(right).collect();
    Ok(LayoutBox::hbox(children))
}

/// Lays out an extensible arrow with its labels.
pub fn build_xarrow(ctx: &TexboxContext, arrow: &ParseNodeXArrow, options: &Options) -> Result<LayoutBox, ParseError> {
    let Some(&shape) = ARROWS.get(arrow.label.as_str()) else {
        return Ok(LayoutBox::empty());
    };
    let above = layout(ctx, &arrow.body, &options.having_style(options.style.sup()))?;
    let below = arrow
        .below
        .as_ref()
        .map(|node| layout(ctx, node, &options.having_style(options.style.sub())))
        .transpose()?;

    let label_width = above.width().max(below.as_ref().map_or(0.0, LayoutBox::width));
    let width = (shape.min_width * options.size_multiplier).max(label_width + 2.0 * LABEL_PAD);
    let body = make_arrow(ctx, shape, width, options)?;
    let width = body.width();

    let mut pieces = Vec::with_capacity(3);
    if let Some(below) = below {
        let shift = body.depth() + LABEL_GAP + below.height();
        pieces.push((below.centered(width, 0.0), shift));
    }
    let shift = -(body.height() + LABEL_GAP + above.depth());
    pieces.push((body, 0.0));
    if above.has_ink() {
        pieces.push((above.centered(width, 0.0), shift));
    }
    Ok(make_v_list_shifted(pieces))
}
