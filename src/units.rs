//! TeX length units
//!
//! Sizes written in the input (`\kern 3mu`, `\rule{1cm}{2pt}`) are parsed
//! into a [`Measurement`] and converted to absolute ems by
//! [`calculate_size`]. Absolute units go through TeX points, `mu` is a
//! eighteenth of the current quad, and `em`/`ex` follow the current font
//! size.

use serde::Serialize;

use crate::options::Options;

/// A length unit understood by the parser.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display, strum::EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// TeX point, 1/72.27 in.
    Pt,
    /// Millimetre.
    Mm,
    /// Centimetre.
    Cm,
    /// Inch.
    In,
    /// Big point, 1/72 in.
    Bp,
    /// Pixel, taken as a big point.
    Px,
    /// Pica, 12 pt.
    Pc,
    /// Didot point.
    Dd,
    /// Cicero, 12 dd.
    Cc,
    /// New Didot point.
    Nd,
    /// New cicero, 12 nd.
    Nc,
    /// Scaled point, 1/65536 pt.
    Sp,
    /// Quad of the current font.
    Em,
    /// x-height of the current font.
    Ex,
    /// Math unit, 1/18 em of the current style.
    Mu,
}

impl Unit {
    /// TeX points per unit, for units that do not depend on the font.
    #[must_use]
    pub const fn pt_per_unit(self) -> Option<f64> {
        // https://en.wikibooks.org/wiki/LaTeX/Lengths
        match self {
            Self::Pt => Some(1.0),
            Self::Mm => Some(7227.0 / 2540.0),
            Self::Cm => Some(7227.0 / 254.0),
            Self::In => Some(72.27),
            // \pdfpxdimen defaults to 1bp
            Self::Bp | Self::Px => Some(803.0 / 800.0),
            Self::Pc => Some(12.0),
            Self::Dd => Some(1238.0 / 1157.0),
            Self::Cc => Some(14856.0 / 1157.0),
            Self::Nd => Some(685.0 / 642.0),
            Self::Nc => Some(1370.0 / 107.0),
            Self::Sp => Some(1.0 / 65536.0),
            Self::Em | Self::Ex | Self::Mu => None,
        }
    }

    /// Whether the unit scales with the font.
    #[must_use]
    pub const fn is_relative(self) -> bool {
        self.pt_per_unit().is_none()
    }
}

/// A number with a unit, as written in the input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Measurement {
    /// The amount.
    pub number: f64,
    /// The unit the amount is in.
    pub unit: Unit,
}

impl Measurement {
    /// `number` in `unit`.
    #[must_use]
    pub const fn new(number: f64, unit: Unit) -> Self {
        Self { number, unit }
    }

    /// `number` ems.
    #[must_use]
    pub const fn em(number: f64) -> Self {
        Self::new(number, Unit::Em)
    }
}

/// Converts a measurement to absolute ems under `options`, clamped to the
/// configured maximum size.
#[must_use]
pub fn calculate_size(measurement: &Measurement, options: &Options) -> f64 {
    let metrics = options.metrics();
    let scale = match measurement.unit {
        Unit::Mu => metrics.css_em_per_mu,
        Unit::Em | Unit::Ex => {
            // em and ex in script styles refer to the text-style font
            let unit_options = if options.style.is_tight() {
                options.having_style(options.style.text())
            } else {
                options.clone()
            };
            let unit_metrics = unit_options.metrics();
            if measurement.unit == Unit::Em {
                unit_metrics.quad
            } else {
                unit_metrics.x_height
            }
        }
        unit => unit.pt_per_unit().unwrap_or(0.0) / metrics.pt_per_em,
    };
    (measurement.number * scale).min(options.max_size)
}
