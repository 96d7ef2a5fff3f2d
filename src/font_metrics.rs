//! Font metrics
//!
//! Two kinds of data live here. The TeX font parameters (the sigma and xi
//! values of TeXbook appendix G) come in three sets: one for text sizes
//! (size index 5 and up), one for script sizes (3 and 4) and one for
//! scriptscript sizes (1 and 2). Per-glyph metrics are served through the
//! [`MetricsProvider`] trait; [`BuiltinMetrics`] answers from the tables in
//! [`crate::font_metrics_data`].
//!
//! All values are in ems of the font at its own size.

use core::fmt::Debug;

use serde::Serialize;

use crate::font_metrics_data::{FONT_TABLES, LATIN_FALLBACKS};
use crate::symbols::Mode;
use crate::types::{ParseError, ParseErrorKind};

/// Dimensions of one glyph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacterMetrics {
    /// Extent below the baseline, in em.
    pub depth: f64,
    /// Extent above the baseline, in em.
    pub height: f64,
    /// Italic correction.
    pub italic: f64,
    /// Horizontal offset for accents placed over the glyph.
    pub skew: f64,
    /// Advance width, in em.
    pub width: f64,
}

impl CharacterMetrics {
    /// Metrics in the order the tables list them.
    #[must_use]
    pub const fn new(depth: f64, height: f64, italic: f64, skew: f64, width: f64) -> Self {
        Self {
            depth,
            height,
            italic,
            skew,
            width,
        }
    }
}

/// The fonts glyphs are drawn from.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    strum::Display,
    strum::EnumString,
)]
pub enum FontName {
    /// Upright roman: digits, operators, `\mathrm`.
    #[strum(serialize = "Main-Regular")]
    #[serde(rename = "Main-Regular")]
    MainRegular,
    /// Bold roman, for `\mathbf`.
    #[strum(serialize = "Main-Bold")]
    #[serde(rename = "Main-Bold")]
    MainBold,
    /// Text italic, for `\textit` and `\mathit`.
    #[strum(serialize = "Main-Italic")]
    #[serde(rename = "Main-Italic")]
    MainItalic,
    /// Math italic, the default for letters.
    #[strum(serialize = "Math-Italic")]
    #[serde(rename = "Math-Italic")]
    MathItalic,
    /// AMS symbols and `\mathbb`.
    #[strum(serialize = "AMS-Regular")]
    #[serde(rename = "AMS-Regular")]
    AmsRegular,
    /// Large operators in display style and the first larger delimiters.
    #[strum(serialize = "Size1-Regular")]
    #[serde(rename = "Size1-Regular")]
    Size1,
    /// Larger delimiters.
    #[strum(serialize = "Size2-Regular")]
    #[serde(rename = "Size2-Regular")]
    Size2,
    /// Larger delimiters.
    #[strum(serialize = "Size3-Regular")]
    #[serde(rename = "Size3-Regular")]
    Size3,
    /// The largest delimiters and the pieces of stacked ones.
    #[strum(serialize = "Size4-Regular")]
    #[serde(rename = "Size4-Regular")]
    Size4,
    /// Sans serif, for `\mathsf`.
    #[strum(serialize = "SansSerif-Regular")]
    #[serde(rename = "SansSerif-Regular")]
    SansSerifRegular,
    /// Typewriter, for `\mathtt`.
    #[strum(serialize = "Typewriter-Regular")]
    #[serde(rename = "Typewriter-Regular")]
    TypewriterRegular,
    /// Calligraphic capitals, for `\mathcal`.
    #[strum(serialize = "Caligraphic-Regular")]
    #[serde(rename = "Caligraphic-Regular")]
    CaligraphicRegular,
    /// Fraktur, for `\mathfrak`.
    #[strum(serialize = "Fraktur-Regular")]
    #[serde(rename = "Fraktur-Regular")]
    FrakturRegular,
    /// Script capitals, for `\mathscr`.
    #[strum(serialize = "Script-Regular")]
    #[serde(rename = "Script-Regular")]
    ScriptRegular,
}

impl FontName {
    /// The font for a `\big`-family size from 1 to 4.
    #[must_use]
    pub const fn sized(size: usize) -> Self {
        match size {
            0 | 1 => Self::Size1,
            2 => Self::Size2,
            3 => Self::Size3,
            _ => Self::Size4,
        }
    }

    /// The font whose metrics this one is measured with.
    ///
    /// The families without tables of their own borrow Main-Regular; glyphs
    /// keep their own font name so a renderer can still pick the face.
    #[must_use]
    pub const fn metrics_font(self) -> Self {
        match self {
            Self::SansSerifRegular
            | Self::TypewriterRegular
            | Self::CaligraphicRegular
            | Self::FrakturRegular
            | Self::ScriptRegular => Self::MainRegular,
            other => other,
        }
    }
}

/// Source of glyph metrics.
///
/// A lookup fails with [`ParseErrorKind::MissingGlyph`] when the font has no
/// entry for the character; the layout engine decides whether that is fatal.
pub trait MetricsProvider: Debug + Send + Sync {
    /// Unscaled metrics of `ch` in `font`.
    ///
    /// The caller scales them by the current size. `mode` is the mode the
    /// symbol was parsed in.
    ///
    /// # Errors
    ///
    /// `MissingGlyph` when the font has no metrics for `ch`.
    fn lookup(&self, ch: char, font: FontName, mode: Mode) -> Result<CharacterMetrics, ParseError>;
}

/// Metrics compiled into the crate.
///
/// Accented Latin-1 letters fall back to the metrics of their base letter.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinMetrics;

impl MetricsProvider for BuiltinMetrics {
    fn lookup(&self, ch: char, font: FontName, _mode: Mode) -> Result<CharacterMetrics, ParseError> {
        let table = FONT_TABLES[font.metrics_font() as usize];
        if let Some(metrics) = table.get(&ch) {
            return Ok(*metrics);
        }
        if let Some(metrics) = LATIN_FALLBACKS.get(&ch).and_then(|base| table.get(base)) {
            return Ok(*metrics);
        }
        Err(ParseError::new(ParseErrorKind::MissingGlyph {
            character: ch,
            font: font.to_string(),
        }))
    }
}

/// Which of the three parameter sets applies to a size index.
#[must_use]
pub const fn size_index(size: usize) -> usize {
    if size >= 5 {
        0
    } else if size >= 3 {
        1
    } else {
        2
    }
}

/// TeX font parameters for one size class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    /// Slant per unit height (sigma 1).
    pub slant: f64,
    /// Height of `x` (sigma 5).
    pub x_height: f64,
    /// Width of an em (sigma 6).
    pub quad: f64,
    /// Numerator shift in display style (sigma 8).
    pub num1: f64,
    /// Numerator shift with a bar, other styles (sigma 9).
    pub num2: f64,
    /// Numerator shift without a bar, other styles (sigma 10).
    pub num3: f64,
    /// Denominator shift in display style (sigma 11).
    pub denom1: f64,
    /// Denominator shift, other styles (sigma 12).
    pub denom2: f64,
    /// Superscript shift in display style (sigma 13).
    pub sup1: f64,
    /// Superscript shift, other uncramped styles (sigma 14).
    pub sup2: f64,
    /// Superscript shift in cramped styles (sigma 15).
    pub sup3: f64,
    /// Subscript shift without a superscript (sigma 16).
    pub sub1: f64,
    /// Subscript shift with a superscript (sigma 17).
    pub sub2: f64,
    /// Superscript baseline below the top of a box (sigma 18).
    pub sup_drop: f64,
    /// Subscript baseline below the bottom of a box (sigma 19).
    pub sub_drop: f64,
    /// Size of `\left`/`\right` around a display fraction (sigma 20).
    pub delim1: f64,
    /// Size of `\left`/`\right` around other fractions (sigma 21).
    pub delim2: f64,
    /// Height of the math axis (sigma 22).
    pub axis_height: f64,
    /// Fraction bar thickness (xi 8).
    pub default_rule_thickness: f64,
    /// Minimum gap above a lower limit (xi 9).
    pub big_op_spacing1: f64,
    /// Minimum gap below an upper limit (xi 10).
    pub big_op_spacing2: f64,
    /// Minimum rise of an upper limit's baseline (xi 11).
    pub big_op_spacing3: f64,
    /// Minimum drop of a lower limit's baseline (xi 12).
    pub big_op_spacing4: f64,
    /// Padding above and below limits (xi 13).
    pub big_op_spacing5: f64,
    /// Thickness of the radical's rule.
    pub sqrt_rule_thickness: f64,
    /// TeX points per em; not scaled with the font.
    pub pt_per_em: f64,
    /// Gap between the rules of `||` in an array column spec.
    pub double_rule_sep: f64,
    /// Thickness of array rules.
    pub array_rule_width: f64,
    /// Padding inside `\fbox`.
    pub fbox_sep: f64,
    /// Rule thickness of `\fbox`.
    pub fbox_rule: f64,
    /// One math unit: a quad divided by 18.
    pub css_em_per_mu: f64,
}

impl FontMetrics {
    /// Every length multiplied by `factor`, for use in absolute ems.
    ///
    /// `pt_per_em` is a unit conversion and stays as is.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            slant: self.slant,
            x_height: self.x_height * factor,
            quad: self.quad * factor,
            num1: self.num1 * factor,
            num2: self.num2 * factor,
            num3: self.num3 * factor,
            denom1: self.denom1 * factor,
            denom2: self.denom2 * factor,
            sup1: self.sup1 * factor,
            sup2: self.sup2 * factor,
            sup3: self.sup3 * factor,
            sub1: self.sub1 * factor,
            sub2: self.sub2 * factor,
            sup_drop: self.sup_drop * factor,
            sub_drop: self.sub_drop * factor,
            delim1: self.delim1 * factor,
            delim2: self.delim2 * factor,
            axis_height: self.axis_height * factor,
            default_rule_thickness: self.default_rule_thickness * factor,
            big_op_spacing1: self.big_op_spacing1 * factor,
            big_op_spacing2: self.big_op_spacing2 * factor,
            big_op_spacing3: self.big_op_spacing3 * factor,
            big_op_spacing4: self.big_op_spacing4 * factor,
            big_op_spacing5: self.big_op_spacing5 * factor,
            sqrt_rule_thickness: self.sqrt_rule_thickness * factor,
            pt_per_em: self.pt_per_em,
            double_rule_sep: self.double_rule_sep * factor,
            array_rule_width: self.array_rule_width * factor,
            fbox_sep: self.fbox_sep * factor,
            fbox_rule: self.fbox_rule * factor,
            css_em_per_mu: self.css_em_per_mu * factor,
        }
    }
}

macro_rules! font_metrics {
    ($($field:ident: [$text:expr, $script:expr, $scriptscript:expr]),* $(,)?) => {
        /// Parameters for text, script and scriptscript sizes, in that order.
        pub const FONT_METRICS: [FontMetrics; 3] = [
            FontMetrics { $($field: $text,)* css_em_per_mu: 1.0 / 18.0 },
            FontMetrics { $($field: $script,)* css_em_per_mu: 1.171 / 18.0 },
            FontMetrics { $($field: $scriptscript,)* css_em_per_mu: 1.472 / 18.0 },
        ];
    };
}

font_metrics! {
    slant: [0.250, 0.250, 0.250],
    x_height: [0.431, 0.431, 0.431],
    quad: [1.000, 1.171, 1.472],
    num1: [0.677, 0.732, 0.925],
    num2: [0.394, 0.384, 0.387],
    num3: [0.444, 0.471, 0.504],
    denom1: [0.686, 0.752, 1.025],
    denom2: [0.345, 0.344, 0.532],
    sup1: [0.413, 0.503, 0.504],
    sup2: [0.363, 0.431, 0.404],
    sup3: [0.289, 0.286, 0.294],
    sub1: [0.150, 0.143, 0.200],
    sub2: [0.247, 0.286, 0.400],
    sup_drop: [0.386, 0.353, 0.494],
    sub_drop: [0.050, 0.071, 0.100],
    delim1: [2.390, 1.700, 1.980],
    delim2: [1.010, 1.157, 1.420],
    axis_height: [0.250, 0.250, 0.250],
    default_rule_thickness: [0.04, 0.049, 0.049],
    big_op_spacing1: [0.111, 0.111, 0.111],
    big_op_spacing2: [0.166, 0.166, 0.166],
    big_op_spacing3: [0.2, 0.2, 0.2],
    big_op_spacing4: [0.6, 0.611, 0.611],
    big_op_spacing5: [0.1, 0.143, 0.143],
    sqrt_rule_thickness: [0.04, 0.04, 0.04],
    pt_per_em: [10.0, 10.0, 10.0],
    double_rule_sep: [0.2, 0.2, 0.2],
    array_rule_width: [0.04, 0.04, 0.04],
    fbox_sep: [0.3, 0.3, 0.3],
    fbox_rule: [0.04, 0.04, 0.04],
}
