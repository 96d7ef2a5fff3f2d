//! Invisible boxes: `\phantom`, `\hphantom`, `\vphantom`

use crate::box_tree::LayoutBox;
use crate::build_box::build_hbox;
use crate::context::TexboxContext;
use crate::define_function::{FunctionContext, FunctionDefSpec, FunctionPropSpec, ord_argument};
use crate::functions::single_arg;
use crate::options::Options;
use crate::parser::{NodeType, ParseNode, ParseNodePhantom, PhantomKind};
use crate::types::ParseError;

/// Registers the phantoms.
pub fn define_phantom(ctx: &mut TexboxContext) {
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Phantom),
        names: &["\\phantom", "\\hphantom", "\\vphantom"],
        props: FunctionPropSpec {
            num_args: 1,
            allowed_in_text: true,
            ..Default::default()
        },
        handler: |context: FunctionContext, args, _opt_args| {
            let body = single_arg(&context, args)?;
            let kind = match context.func_name.as_str() {
                "\\hphantom" => PhantomKind::Horizontal,
                "\\vphantom" => PhantomKind::Vertical,
                _ => PhantomKind::Full,
            };
            Ok(ParseNode::Phantom(ParseNodePhantom {
                mode: context.parser.mode,
                loc: context.loc(),
                kind,
                body: ord_argument(body),
            }))
        },
    });
}

/// Keeps the dimensions the phantom kind asks for and drops all ink.
pub fn build_phantom(
    ctx: &TexboxContext,
    phantom: &ParseNodePhantom,
    options: &Options,
) -> Result<LayoutBox, ParseError> {
    let inner = build_hbox(ctx, &phantom.body, options)?;
    Ok(match phantom.kind {
        PhantomKind::Full => inner.into_phantom(),
        PhantomKind::Horizontal => LayoutBox::hbox_with_dims(Vec::new(), inner.width(), 0.0, 0.0),
        PhantomKind::Vertical => LayoutBox::strut(inner.height(), inner.depth()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build_box::layout;
    use crate::parser::Parser;
    use crate::types::Settings;

    fn build(input: &str) -> LayoutBox {
        let settings = Settings::default();
        let ctx = TexboxContext::default();
        let root = Parser::new(input, &settings, &ctx).parse().unwrap();
        layout(&ctx, &root, &Options::from_settings(&settings)).unwrap()
    }

    #[test]
    fn phantom_keeps_every_dimension() {
        let visible = build("xyz");
        let hidden = build(r"\phantom{xyz}");
        assert!(!hidden.has_ink());
        assert!((hidden.width() - visible.width()).abs() < 1e-9);
        assert!((hidden.height() - visible.height()).abs() < 1e-9);
        assert!((hidden.depth() - visible.depth()).abs() < 1e-9);
    }

    #[test]
    fn partial_phantoms_drop_a_direction() {
        let visible = build("y");
        let horizontal = build(r"\hphantom{y}");
        assert!((horizontal.width() - visible.width()).abs() < 1e-9);
        assert_eq!(horizontal.height(), 0.0);
        assert_eq!(horizontal.depth(), 0.0);

        let vertical = build(r"\vphantom{y}");
        assert_eq!(vertical.width(), 0.0);
        assert!((vertical.depth() - visible.depth()).abs() < 1e-9);
        assert!(!vertical.has_ink());
    }

    #[test]
    fn mathstrut_is_as_tall_as_a_parenthesis() {
        let strut = build(r"\mathstrut");
        assert!((strut.height() - 0.75).abs() < 1e-9);
        assert!((strut.depth() - 0.25).abs() < 1e-9);
    }
}
