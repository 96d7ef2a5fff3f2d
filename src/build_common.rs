//! Glyph and rule helpers shared by the layout builders
//!
//! Everything that turns a character into a [`LayoutBox::Glyph`] goes through
//! [`make_symbol`], so symbol replacement, metrics lookup, scaling, color and
//! missing-glyph recovery happen in one place.

use crate::box_tree::{Glyph, LayoutBox};
use crate::context::TexboxContext;
use crate::font_metrics::{CharacterMetrics, FontName};
use crate::options::Options;
use crate::symbols::{Font, Group, Mode, NonAtom};
use crate::types::ParseError;

/// Width of an empty `\left.` or `\right.`, in ems of the current size.
const NULL_DELIMITER_SPACE: f64 = 0.12;

/// The character drawn for a symbol name, after table replacement.
#[must_use]
pub fn lookup_symbol(ctx: &TexboxContext, value: &str, mode: Mode) -> String {
    match ctx.symbols.get(mode, value).and_then(|info| info.replace) {
        Some(replaced) => replaced.to_string(),
        None => value.to_owned(),
    }
}

/// Metrics for `ch`, or the metrics of `M` when the font lacks it and the
/// error policy lets the render go on.
fn glyph_metrics(
    ctx: &TexboxContext,
    ch: char,
    font: FontName,
    mode: Mode,
    options: &Options,
) -> Result<CharacterMetrics, ParseError> {
    match ctx.metrics.lookup(ch, font, mode) {
        Ok(metrics) => Ok(metrics),
        Err(err) => {
            options.error_policy.recover(err)?;
            Ok(placeholder_metrics(ctx, mode))
        }
    }
}

fn placeholder_metrics(ctx: &TexboxContext, mode: Mode) -> CharacterMetrics {
    ctx.metrics
        .lookup('M', FontName::MainRegular, mode)
        .unwrap_or(CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.91667))
}

/// Draws the symbol `value` in `font`, scaled to the current size.
///
/// Text-mode glyphs carry no italic correction.
pub fn make_symbol(
    ctx: &TexboxContext,
    value: &str,
    font: FontName,
    mode: Mode,
    options: &Options,
) -> Result<LayoutBox, ParseError> {
    let text = lookup_symbol(ctx, value, mode);
    let Some(ch) = text.chars().next() else {
        return Ok(LayoutBox::empty());
    };
    let mut metrics = glyph_metrics(ctx, ch, font, mode, options)?;
    if mode == Mode::Text {
        metrics.italic = 0.0;
    }
    Ok(LayoutBox::Glyph(Glyph::new(
        text,
        font,
        &metrics,
        options.size_multiplier,
        options.color.clone(),
    )))
}

/// Skew of a symbol's glyph, for placing accents over it.
#[must_use]
pub fn symbol_skew(ctx: &TexboxContext, value: &str, font: FontName, mode: Mode, options: &Options) -> f64 {
    let text = lookup_symbol(ctx, value, mode);
    text.chars()
        .next()
        .and_then(|ch| ctx.metrics.lookup(ch, font, mode).ok())
        .map_or(0.0, |metrics| metrics.skew * options.size_multiplier)
}

/// Whether `font` has a glyph for the symbol `value`.
#[must_use]
pub fn has_glyph(ctx: &TexboxContext, value: &str, font: FontName, mode: Mode) -> bool {
    let text = lookup_symbol(ctx, value, mode);
    text.chars()
        .next()
        .is_some_and(|ch| ctx.metrics.lookup(ch, font, mode).is_ok())
}

/// The font a math or text symbol is drawn in.
///
/// In math mode a font chosen with `\mathbf` and friends wins when it has
/// the glyph. Otherwise letters and lowercase Greek come from Math-Italic,
/// AMS symbols from AMS-Regular and everything else from Main-Regular.
#[must_use]
pub fn symbol_font(ctx: &TexboxContext, value: &str, mode: Mode, options: &Options) -> FontName {
    if mode == Mode::Text {
        let font = options.text_font();
        return if has_glyph(ctx, value, font, mode) {
            font
        } else {
            FontName::MainRegular
        };
    }
    if let Some(font) = options.font
        && has_glyph(ctx, value, font, mode)
    {
        return font;
    }
    match ctx.symbols.get(mode, value) {
        Some(info) if info.group == Group::NonAtom(NonAtom::MathOrd) => {
            if has_glyph(ctx, value, FontName::MathItalic, mode) {
                FontName::MathItalic
            } else {
                FontName::MainRegular
            }
        }
        Some(info) if info.font == Font::Ams => FontName::AmsRegular,
        _ => FontName::MainRegular,
    }
}

/// A run of characters drawn as one glyph, used for error markers.
///
/// The run measures the sum of its characters' widths and the largest of
/// their heights and depths, in Main-Regular.
#[must_use]
pub fn make_text_run(ctx: &TexboxContext, text: &str, color: &str, options: &Options) -> LayoutBox {
    let (mut width, mut height, mut depth) = (0.0, 0.0_f64, 0.0_f64);
    for ch in text.chars() {
        let metrics = ctx
            .metrics
            .lookup(ch, FontName::MainRegular, Mode::Text)
            .unwrap_or_else(|_| placeholder_metrics(ctx, Mode::Text));
        width += metrics.width;
        height = height.max(metrics.height);
        depth = depth.max(metrics.depth);
    }
    let metrics = CharacterMetrics::new(depth, height, 0.0, 0.0, width);
    LayoutBox::Glyph(Glyph::new(
        text,
        FontName::MainRegular,
        &metrics,
        options.size_multiplier,
        Some(color.to_owned()),
    ))
}

/// Thickness of fraction bars and overlines, respecting the minimum rule
/// thickness.
#[must_use]
pub fn line_thickness(options: &Options, thickness: Option<f64>) -> f64 {
    thickness
        .unwrap_or_else(|| options.metrics().default_rule_thickness)
        .max(options.min_rule_thickness)
}

/// A horizontal rule `width` wide and `thickness` tall, sitting on the
/// baseline.
#[must_use]
pub fn make_line(width: f64, thickness: f64, options: &Options) -> LayoutBox {
    LayoutBox::rule(width, thickness, 0.0, options.color.clone())
}

/// The empty box standing in for `.` delimiters.
#[must_use]
pub fn make_null_delimiter(options: &Options) -> LayoutBox {
    LayoutBox::hbox_with_dims(
        Vec::new(),
        NULL_DELIMITER_SPACE * options.size_multiplier,
        0.0,
        0.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Style;
    use crate::types::{ParseErrorKind, Settings, StrictMode};

    fn options() -> Options {
        Options::new(Style::Text, f64::INFINITY, 0.0)
    }

    #[test]
    fn letters_use_math_italic() {
        let ctx = TexboxContext::default();
        let options = options();
        assert_eq!(symbol_font(&ctx, "x", Mode::Math, &options), FontName::MathItalic);
        assert_eq!(symbol_font(&ctx, "2", Mode::Math, &options), FontName::MainRegular);
        assert_eq!(symbol_font(&ctx, "x", Mode::Text, &options), FontName::MainRegular);
        let bold = options.with_font(FontName::MainBold);
        assert_eq!(symbol_font(&ctx, "x", Mode::Math, &bold), FontName::MainBold);
        assert_eq!(symbol_font(&ctx, "\\alpha", Mode::Math, &bold), FontName::MathItalic);
    }

    #[test]
    fn symbols_scale_with_size() {
        let ctx = TexboxContext::default();
        let text = make_symbol(&ctx, "x", FontName::MathItalic, Mode::Math, &options()).unwrap();
        let script = make_symbol(
            &ctx,
            "x",
            FontName::MathItalic,
            Mode::Math,
            &options().having_style(Style::Script),
        )
        .unwrap();
        assert!(script.width() < text.width());
        assert!((script.width() - text.width() * 0.7).abs() < 1e-9);
    }

    #[test]
    fn replacements_are_drawn() {
        let ctx = TexboxContext::default();
        let LayoutBox::Glyph(glyph) =
            make_symbol(&ctx, "\\alpha", FontName::MathItalic, Mode::Math, &options()).unwrap()
        else {
            panic!("expected a glyph");
        };
        assert_eq!(glyph.text, "\u{03B1}");
    }

    #[test]
    fn missing_glyphs_follow_strict_mode() {
        let ctx = TexboxContext::default();
        let lenient = options();
        let glyph = make_symbol(&ctx, "\u{4E2D}", FontName::MainRegular, Mode::Text, &lenient).unwrap();
        let m = make_symbol(&ctx, "M", FontName::MainRegular, Mode::Text, &lenient).unwrap();
        assert!((glyph.width() - m.width()).abs() < 1e-9);

        let strict = Options::from_settings(&Settings::builder().strict(StrictMode::Error).build());
        let err = make_symbol(&ctx, "\u{4E2D}", FontName::MainRegular, Mode::Text, &strict).unwrap_err();
        assert!(matches!(*err.kind, ParseErrorKind::MissingGlyph { .. }));
    }

    #[test]
    fn text_runs_measure_every_character() {
        let ctx = TexboxContext::default();
        let one = make_text_run(&ctx, "a", "#cc0000", &options());
        let three = make_text_run(&ctx, "aaa", "#cc0000", &options());
        assert!((three.width() - 3.0 * one.width()).abs() < 1e-9);
    }

    #[test]
    fn rules_respect_minimum_thickness() {
        let thin = options();
        assert!((line_thickness(&thin, None) - 0.04).abs() < 1e-9);
        let thick = Options::new(Style::Text, f64::INFINITY, 0.1);
        assert!((line_thickness(&thick, None) - 0.1).abs() < 1e-9);
    }
}
