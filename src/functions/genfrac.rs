//! Fractions, binomials and the infix fraction commands
//!
//! `\frac`, `\binom` and their style-forcing variants are prefix commands.
//! `\over`, `\choose`, `\atop`, `\brack`, `\brace` and `\above` are infix:
//! they produce an [`ParseNodeInfix`] that the parser rewrites into one of
//! the internal prefix commands below once the enclosing group is known.

use crate::box_tree::{LayoutBox, make_v_list_shifted};
use crate::build_box::layout;
use crate::build_common::{line_thickness, make_line, make_null_delimiter};
use crate::context::TexboxContext;
use crate::define_function::{ArgType, FunctionContext, FunctionDefSpec, FunctionPropSpec, normalize_argument};
use crate::delimiter::custom_sized_delim;
use crate::functions::missing_argument;
use crate::options::Options;
use crate::parser::{NodeType, ParseNode, ParseNodeGenfrac, ParseNodeInfix};
use crate::style::Style;
use crate::symbols::{Atom, Mode};
use crate::types::{ParseError, ParseErrorKind};
use crate::units::calculate_size;

/// Strut added to `\cfrac` numerators, in points.
const CFRAC_STRUT_HEIGHT_PT: f64 = 8.5;
const CFRAC_STRUT_DEPTH_PT: f64 = 3.5;

fn genfrac(context: &FunctionContext, numer: ParseNode, denom: ParseNode) -> ParseNodeGenfrac {
    ParseNodeGenfrac {
        mode: context.parser.mode,
        loc: context.loc(),
        continued: false,
        numer,
        denom,
        has_bar_line: true,
        left_delim: None,
        right_delim: None,
        size: None,
        bar_size: None,
    }
}

fn two_args(args: Vec<ParseNode>) -> Option<(ParseNode, ParseNode)> {
    let mut args = args.into_iter();
    Some((args.next()?, args.next()?))
}

/// Delimiter text of a `\genfrac` delimiter argument, `None` for `.` or
/// an empty group.
fn delim_from_arg(arg: &ParseNode, family: Atom) -> Option<String> {
    match normalize_argument(arg) {
        ParseNode::Atom(atom) if atom.family == family => Some(atom.text.clone()),
        _ => None,
    }
}

/// Registers `\frac` and its variants, `\genfrac`, and the infix commands
/// `\over`, `\choose`, `\atop`, `\brace` and `\brack`.
///
/// Infix commands are not laid out directly: the parser rewrites the
/// enclosing group into a call of the prefix form.
pub fn define_genfrac(ctx: &mut TexboxContext) {
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Genfrac),
        names: &[
            "\\frac",
            "\\dfrac",
            "\\tfrac",
            "\\cfrac",
            "\\binom",
            "\\\\atopfrac",
            "\\\\bracketfrac",
            "\\\\bracefrac",
        ],
        props: FunctionPropSpec {
            num_args: 2,
            allowed_in_argument: true,
            ..Default::default()
        },
        handler: |context: FunctionContext, args, _opt_args| {
            let Some((numer, denom)) = two_args(args) else {
                return Err(missing_argument(&context));
            };
            let mut frac = genfrac(&context, numer, denom);
            let delims = |left: &str, right: &str| (Some(left.to_owned()), Some(right.to_owned()));
            match context.func_name.as_str() {
                "\\dfrac" => frac.size = Some(Style::Display),
                "\\tfrac" => frac.size = Some(Style::Text),
                "\\cfrac" => {
                    frac.size = Some(Style::Display);
                    frac.continued = true;
                }
                "\\binom" => {
                    frac.has_bar_line = false;
                    (frac.left_delim, frac.right_delim) = delims("(", ")");
                }
                "\\\\atopfrac" => frac.has_bar_line = false,
                "\\\\bracketfrac" => {
                    frac.has_bar_line = false;
                    (frac.left_delim, frac.right_delim) = delims("[", "]");
                }
                "\\\\bracefrac" => {
                    frac.has_bar_line = false;
                    (frac.left_delim, frac.right_delim) = delims("\\{", "\\}");
                }
                _ => {}
            }
            Ok(ParseNode::Genfrac(Box::new(frac)))
        },
    });

    // \genfrac{left}{right}{thickness}{style}{numer}{denom}
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Genfrac),
        names: &["\\genfrac"],
        props: FunctionPropSpec {
            num_args: 6,
            allowed_in_argument: true,
            arg_types: Some(vec![
                ArgType::Mode(Mode::Math),
                ArgType::Mode(Mode::Math),
                ArgType::Size,
                ArgType::Mode(Mode::Text),
                ArgType::Mode(Mode::Math),
                ArgType::Mode(Mode::Math),
            ]),
            ..Default::default()
        },
        handler: |context: FunctionContext, args, _opt_args| {
            let mut args = args.into_iter();
            let (Some(left), Some(right), Some(thickness), Some(style), Some(numer), Some(denom)) = (
                args.next(),
                args.next(),
                args.next(),
                args.next(),
                args.next(),
                args.next(),
            ) else {
                return Err(missing_argument(&context));
            };

            let mut frac = genfrac(&context, numer, denom);
            frac.left_delim = delim_from_arg(&left, Atom::Open);
            frac.right_delim = delim_from_arg(&right, Atom::Close);
            if let ParseNode::Size(size) = thickness
                && !size.is_blank
            {
                frac.has_bar_line = size.value.number > 0.0;
                frac.bar_size = Some(size.value);
            }

            let style_text: String = match &style {
                ParseNode::OrdGroup(group) => group.body.iter().filter_map(ParseNode::text).collect(),
                other => other.text().unwrap_or_default().to_owned(),
            };
            frac.size = match style_text.trim() {
                "" => None,
                "0" => Some(Style::Display),
                "1" => Some(Style::Text),
                "2" => Some(Style::Script),
                "3" => Some(Style::ScriptScript),
                other => {
                    return Err(ParseError::with_token(
                        ParseErrorKind::InvalidValue {
                            context: "\\genfrac style",
                            value: other.to_owned(),
                        },
                        &style,
                    ));
                }
            };
            Ok(ParseNode::Genfrac(Box::new(frac)))
        },
    });

    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Infix),
        names: &["\\over", "\\choose", "\\atop", "\\brace", "\\brack"],
        props: FunctionPropSpec {
            infix: true,
            ..Default::default()
        },
        handler: |context: FunctionContext, _args, _opt_args| {
            let replace_with = match context.func_name.as_str() {
                "\\choose" => "\\binom",
                "\\atop" => "\\\\atopfrac",
                "\\brace" => "\\\\bracefrac",
                "\\brack" => "\\\\bracketfrac",
                _ => "\\frac",
            };
            Ok(ParseNode::Infix(ParseNodeInfix {
                mode: context.parser.mode,
                loc: context.loc(),
                replace_with: replace_with.to_owned(),
                size: None,
                token: context.token.cloned(),
            }))
        },
    });

    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Infix),
        names: &["\\above"],
        props: FunctionPropSpec {
            num_args: 1,
            arg_types: Some(vec![ArgType::Size]),
            infix: true,
            ..Default::default()
        },
        handler: |context: FunctionContext, args, _opt_args| {
            let size = match args.first() {
                Some(ParseNode::Size(size)) => Some(size.value),
                _ => None,
            };
            Ok(ParseNode::Infix(ParseNodeInfix {
                mode: context.parser.mode,
                loc: context.loc(),
                replace_with: "\\\\abovefrac".to_owned(),
                size,
                token: context.token.cloned(),
            }))
        },
    });

    // numerator, the \above infix node, denominator
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Genfrac),
        names: &["\\\\abovefrac"],
        props: FunctionPropSpec {
            num_args: 3,
            ..Default::default()
        },
        handler: |context: FunctionContext, args, _opt_args| {
            let mut args = args.into_iter();
            let (Some(numer), Some(infix), Some(denom)) = (args.next(), args.next(), args.next()) else {
                return Err(missing_argument(&context));
            };
            let mut frac = genfrac(&context, numer, denom);
            if let ParseNode::Infix(infix) = infix
                && let Some(size) = infix.size
            {
                frac.has_bar_line = size.number > 0.0;
                frac.bar_size = Some(size);
            }
            Ok(ParseNode::Genfrac(Box::new(frac)))
        },
    });
}

/// The style a fraction is set in when it forces `size`.
const fn adjust_style(size: Option<Style>, current: Style) -> Style {
    match size {
        None => current,
        Some(Style::Display) => {
            if current.size() >= Style::Script.size() {
                current.text()
            } else {
                Style::Display
            }
        }
        Some(Style::Text) => {
            if current.size() == Style::Display.size() {
                Style::Text
            } else {
                current
            }
        }
        Some(forced) => forced,
    }
}

/// TeXbook rule 15: numerator over denominator, separated by a bar
/// centred on the math axis, with optional delimiters around the whole.
pub fn build_genfrac(
    ctx: &TexboxContext,
    frac: &ParseNodeGenfrac,
    options: &Options,
) -> Result<LayoutBox, ParseError> {
    let style = adjust_style(frac.size, options.style);
    let frac_options = options.having_style(style);
    let metrics = frac_options.metrics();

    let numer_options = frac_options.having_style(style.frac_num());
    let mut numer = layout(ctx, &frac.numer, &numer_options)?;
    if frac.continued {
        let scale = numer_options.size_multiplier / metrics.pt_per_em;
        numer = LayoutBox::hbox(vec![
            LayoutBox::strut(CFRAC_STRUT_HEIGHT_PT * scale, CFRAC_STRUT_DEPTH_PT * scale),
            numer,
        ]);
    }
    let denom = layout(ctx, &frac.denom, &frac_options.having_style(style.frac_den()))?;

    let rule_width = if frac.has_bar_line {
        let explicit = frac
            .bar_size
            .as_ref()
            .map(|size| calculate_size(size, &frac_options));
        line_thickness(&frac_options, explicit)
    } else {
        0.0
    };
    let rule_spacing = if frac.has_bar_line {
        rule_width
    } else {
        metrics.default_rule_thickness
    };

    let display = style.size() == Style::Display.size();
    let (mut num_shift, clearance) = if display {
        let factor = if frac.has_bar_line { 3.0 } else { 7.0 };
        (metrics.num1, factor * rule_spacing)
    } else if frac.has_bar_line {
        (metrics.num2, rule_spacing)
    } else {
        (metrics.num3, 3.0 * rule_spacing)
    };
    let mut denom_shift = if display { metrics.denom1 } else { metrics.denom2 };

    let width = numer.width().max(denom.width());
    let (numer_depth, denom_height) = (numer.depth(), denom.height());
    let numer = numer.centered(width, 0.0);
    let denom = denom.centered(width, 0.0);

    let stacked = if frac.has_bar_line {
        let axis = metrics.axis_height;
        let above = (num_shift - numer_depth) - (axis + 0.5 * rule_width);
        if above < clearance {
            num_shift += clearance - above;
        }
        let below = (axis - 0.5 * rule_width) - (denom_height - denom_shift);
        if below < clearance {
            denom_shift += clearance - below;
        }
        let rule = make_line(width, rule_width, &frac_options);
        make_v_list_shifted(vec![
            (denom, denom_shift),
            (rule, -(axis - 0.5 * rule_width)),
            (numer, -num_shift),
        ])
    } else {
        let candidate = (num_shift - numer_depth) - (denom_height - denom_shift);
        if candidate < clearance {
            num_shift += 0.5 * (clearance - candidate);
            denom_shift += 0.5 * (clearance - candidate);
        }
        make_v_list_shifted(vec![(denom, denom_shift), (numer, -num_shift)])
    };

    let delim_size = if display {
        metrics.delim1
    } else if style.size() == Style::ScriptScript.size() {
        options.having_style(Style::Script).metrics().delim2
    } else {
        metrics.delim2
    };
    let delim = |delim: Option<&String>| match delim {
        Some(delim) => custom_sized_delim(ctx, delim, delim_size, &frac_options, frac.mode),
        None => Ok(make_null_delimiter(&frac_options)),
    };

    Ok(LayoutBox::hbox(vec![
        delim(frac.left_delim.as_ref())?,
        stacked,
        delim(frac.right_delim.as_ref())?,
    ]))
}
