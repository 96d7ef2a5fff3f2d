//! Square roots and nth roots

use crate::box_tree::{LayoutBox, VListChild, VListPosition, make_v_list};
use crate::build_box::layout;
use crate::build_common::{line_thickness, make_line};
use crate::context::TexboxContext;
use crate::define_function::{FunctionContext, FunctionDefSpec, FunctionPropSpec};
use crate::delimiter::make_surd;
use crate::options::Options;
use crate::parser::{NodeType, ParseNode, ParseNodeSqrt};
use crate::style::Style;
use crate::types::{ParseError, ParseErrorKind};

/// Kerns around the index of an nth root, in mu of the surrounding size.
const INDEX_KERN_BEFORE: f64 = 5.0 / 18.0;
const INDEX_KERN_AFTER: f64 = -10.0 / 18.0;

/// Registers `\sqrt`.
pub fn define_sqrt(ctx: &mut TexboxContext) {
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Sqrt),
        names: &["\\sqrt"],
        props: FunctionPropSpec {
            num_args: 1,
            num_optional_args: 1,
            ..Default::default()
        },
        handler: |context: FunctionContext, args, opt_args| {
            let Some(body) = args.into_iter().next() else {
                return Err(ParseError::with_token(
                    ParseErrorKind::ExpectedGroupAfter {
                        symbol: context.func_name.clone(),
                    },
                    &context.loc(),
                ));
            };
            let index = opt_args.into_iter().next().flatten();
            Ok(ParseNode::Sqrt(Box::new(ParseNodeSqrt {
                mode: context.parser.mode,
                loc: context.loc(),
                body,
                index,
            })))
        },
    });
}

/// TeXbook rule 11: a surd tall enough for the radicand plus clearance, a
/// rule across the top, and the index tucked into the surd's crook.
pub fn build_sqrt(ctx: &TexboxContext, sqrt: &ParseNodeSqrt, options: &Options) -> Result<LayoutBox, ParseError> {
    let metrics = options.metrics();
    let mut inner = layout(ctx, &sqrt.body, &options.having_cramped_style())?;
    if inner.height() == 0.0 {
        let (width, depth) = (inner.width(), inner.depth());
        inner = LayoutBox::hbox_with_dims(vec![inner], width, metrics.x_height, depth);
    }

    let theta = metrics.default_rule_thickness;
    let phi = if options.style.size() == Style::Display.size() {
        metrics.x_height
    } else {
        theta
    };
    let rule = line_thickness(options, Some(metrics.sqrt_rule_thickness));
    let mut clearance = theta + phi / 4.0;

    let body_extent = inner.height() + inner.depth();
    let surd = make_surd(ctx, body_extent + clearance + rule, options)?;

    // a surd taller than needed shares its excess above and below
    let surd_depth = surd.height() + surd.depth() - rule;
    if surd_depth > body_extent + clearance {
        clearance = (clearance + surd_depth - body_extent) / 2.0;
    }

    let top = inner.height() + clearance + rule;
    let surd_shift = surd.height() - top;
    let surd = surd.shifted(surd_shift);

    let width = inner.width();
    let body = make_v_list(
        VListPosition::FirstBaseline,
        vec![
            VListChild::Box(inner),
            VListChild::Kern(clearance),
            VListChild::Box(make_line(width, rule, options)),
        ],
    );
    let radical = LayoutBox::hbox(vec![surd, body]);

    let Some(index) = &sqrt.index else {
        return Ok(radical);
    };
    let index_options = options.having_style(Style::ScriptScript);
    let index = layout(ctx, index, &index_options)?;
    let raise = 0.6 * (radical.height() - radical.depth());
    let size = options.size_multiplier;

    Ok(LayoutBox::hbox(vec![
        LayoutBox::kern(INDEX_KERN_BEFORE * size),
        index.shifted(-raise),
        LayoutBox::kern(INDEX_KERN_AFTER * size),
        radical,
    ]))
}
