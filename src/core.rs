//! Render entry points and the whole-input error fallback

use tracing::{debug, trace_span};

use crate::box_tree::LayoutBox;
use crate::build_box::layout;
use crate::build_common::make_text_run;
use crate::context::TexboxContext;
use crate::options::Options;
use crate::parser::{ParseNode, Parser};
use crate::serialize::OutputTree;
use crate::types::{ParseError, Settings};

/// Replaces a fatal error with the input drawn in the error color, when
/// the settings ask for that.
///
/// Configuration errors always reach the caller.
fn render_error(
    ctx: &TexboxContext,
    error: ParseError,
    expression: &str,
    settings: &Settings,
) -> Result<LayoutBox, ParseError> {
    if settings.throw_on_error || error.kind.is_configuration() {
        return Err(error);
    }
    debug!(%error, expression, "rendering input as an error marker");
    let options = Options::from_settings(settings);
    let marker = make_text_run(ctx, expression, &options.error_color, &options);
    Ok(LayoutBox::hbox(vec![marker]))
}

/// Parse an expression into its expression tree.
///
/// The root is always an [`ParseNode::OrdGroup`] spanning the whole input.
/// Unlike the render functions, parsing never falls back to an error
/// marker: fatal errors are returned whatever `throw_on_error` says.
pub fn parse(
    ctx: &TexboxContext,
    expression: &str,
    settings: &Settings,
) -> Result<ParseNode, ParseError> {
    settings.validate()?;
    let _span = trace_span!("parse", len = expression.len()).entered();
    Parser::new(expression, settings, ctx).parse()
}

/// Parse and lay out an expression, returning the root box.
pub fn render_to_box(
    ctx: &TexboxContext,
    expression: &str,
    settings: &Settings,
) -> Result<LayoutBox, ParseError> {
    let built = parse(ctx, expression, settings).and_then(|tree| {
        let _span = trace_span!("layout").entered();
        layout(ctx, &tree, &Options::from_settings(settings))
    });
    match built {
        Ok(root) => Ok(root),
        Err(error) => render_error(ctx, error, expression, settings),
    }
}

/// Parse, lay out and position an expression.
pub fn render(
    ctx: &TexboxContext,
    expression: &str,
    settings: &Settings,
) -> Result<OutputTree, ParseError> {
    let root = render_to_box(ctx, expression, settings)?;
    let _span = trace_span!("serialize").entered();
    Ok(OutputTree::from_box(&root, settings.display_mode))
}

/// [`render`], then JSON.
pub fn render_to_json(
    ctx: &TexboxContext,
    expression: &str,
    settings: &Settings,
) -> Result<String, ParseError> {
    render(ctx, expression, settings)?.to_json()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialize::OutputNode;
    use crate::types::ParseErrorKind;

    #[test]
    fn fatal_errors_are_returned_by_default() {
        let ctx = TexboxContext::default();
        let err = render(&ctx, "{x", &Settings::default()).unwrap_err();
        assert!(matches!(*err.kind, ParseErrorKind::UnbalancedGroup { .. }));
    }

    #[test]
    fn fatal_errors_fall_back_to_a_marker() {
        let ctx = TexboxContext::default();
        let settings = Settings::builder().throw_on_error(false).build();
        let tree = render(&ctx, "{x", &settings).unwrap();
        let [OutputNode::Glyph(marker)] = tree.root.children() else {
            panic!("expected a single glyph, got {:?}", tree.root);
        };
        assert_eq!(marker.text, "{x");
        assert_eq!(marker.color.as_deref(), Some(settings.error_color.as_str()));
    }

    #[test]
    fn invalid_settings_are_never_swallowed() {
        let ctx = TexboxContext::default();
        let settings = Settings::builder()
            .throw_on_error(false)
            .min_rule_thickness(-1.0)
            .build();
        let err = render(&ctx, "x", &settings).unwrap_err();
        assert!(matches!(*err.kind, ParseErrorKind::InvalidSetting { .. }));
    }

    #[test]
    fn display_mode_is_recorded() {
        let ctx = TexboxContext::default();
        let settings = Settings::builder().display_mode(true).build();
        assert!(render(&ctx, "x", &settings).unwrap().display_mode);
    }

    #[test]
    fn json_output() {
        let ctx = TexboxContext::default();
        let json = render_to_json(&ctx, "x", &Settings::default()).unwrap();
        assert!(json.contains("\"type\":\"HList\""));
    }
}
