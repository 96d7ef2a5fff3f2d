//! `\overline` and `\underline` (TeXbook rules 9 and 10)

use crate::box_tree::{LayoutBox, VListChild, VListPosition, make_v_list};
use crate::build_box::layout;
use crate::build_common::{line_thickness, make_line};
use crate::context::TexboxContext;
use crate::define_function::{FunctionContext, FunctionDefSpec, FunctionPropSpec};
use crate::options::Options;
use crate::parser::{NodeType, ParseNode, ParseNodeBody};
use crate::types::{ParseError, ParseErrorKind};

/// Registers `\overline` and `\underline`.
pub fn define_lines(ctx: &mut TexboxContext) {
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Overline),
        names: &["\\overline", "\\underline"],
        props: FunctionPropSpec {
            num_args: 1,
            allowed_in_text: true,
            ..Default::default()
        },
        handler: |context: FunctionContext, args, _opt_args| {
            let Some(body) = args.into_iter().next() else {
                return Err(ParseError::with_token(
                    ParseErrorKind::ExpectedGroupAfter {
                        symbol: context.func_name.clone(),
                    },
                    &context.loc(),
                ));
            };
            let node = ParseNodeBody {
                mode: context.parser.mode,
                loc: context.loc(),
                body: Box::new(body),
            };
            Ok(if context.func_name == "\\underline" {
                ParseNode::Underline(node)
            } else {
                ParseNode::Overline(node)
            })
        },
    });
}

/// The body in cramped style with a rule three thicknesses above it.
pub fn build_overline(ctx: &TexboxContext, line: &ParseNodeBody, options: &Options) -> Result<LayoutBox, ParseError> {
    let inner = layout(ctx, &line.body, &options.having_cramped_style())?;
    let thickness = line_thickness(options, None);
    let rule = make_line(inner.width(), thickness, options);
    Ok(make_v_list(
        VListPosition::FirstBaseline,
        vec![
            VListChild::Box(inner),
            VListChild::Kern(3.0 * thickness),
            VListChild::Box(rule),
            VListChild::Kern(thickness),
        ],
    ))
}

/// The body with a rule three thicknesses below it.
pub fn build_underline(
    ctx: &TexboxContext,
    line: &ParseNodeBody,
    options: &Options,
) -> Result<LayoutBox, ParseError> {
    let inner = layout(ctx, &line.body, options)?;
    let thickness = line_thickness(options, None);
    let rule = make_line(inner.width(), thickness, options);
    let top = inner.height();
    Ok(make_v_list(
        VListPosition::Top(top),
        vec![
            VListChild::Kern(thickness),
            VListChild::Box(rule),
            VListChild::Kern(3.0 * thickness),
            VListChild::Box(inner),
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

    #[test]
    fn overline_adds_five_thicknesses_above() {
        let x = build("x");
        let over = build(r"\overline{x}");
        assert!((over.height() - (x.height() + 5.0 * 0.04)).abs() < 1e-9);
        assert!((over.depth() - x.depth()).abs() < 1e-9);
        assert!((over.width() - x.width()).abs() < 1e-9);
    }

    #[test]
    fn underline_adds_five_thicknesses_below() {
        let x = build("x");
        let under = build(r"\underline{x}");
        assert!((under.height() - x.height()).abs() < 1e-9);
        assert!((under.depth() - (x.depth() + 5.0 * 0.04)).abs() < 1e-9);
    }

    #[test]
    fn lines_are_allowed_in_text() {
        let settings = Settings::default();
        let ctx = TexboxContext::default();
        assert!(Parser::new(r"\text{\underline{a}}", &settings, &ctx).parse().is_ok());
    }
}
