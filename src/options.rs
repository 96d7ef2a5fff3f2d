//! Layout options
//!
//! The state threaded down the tree while building boxes: the current style,
//! size, color and font. Every `having_*`/`with_*` method returns a modified
//! copy, so a builder can derive options for a child without touching its
//! own.

use alloc::sync::Arc;

use crate::font_metrics::{FONT_METRICS, FontMetrics, FontName, size_index};
use crate::style::Style;
use crate::types::{ErrorPolicy, Settings};

/// Size index of `\normalsize`.
pub const BASESIZE: usize = 6;

/// Font size multipliers for the eleven sizes, `\tiny` to `\Huge`.
pub const SIZE_MULTIPLIERS: [f64; 11] = [
    0.5, 0.6, 0.7, 0.8, 0.9, 1.0, 1.2, 1.44, 1.728, 2.074, 2.488,
];

/// Size index reached from a text size by the text, script and scriptscript
/// styles.
const SIZE_STYLE_MAP: [[usize; 3]; 11] = [
    [1, 1, 1],
    [2, 1, 1],
    [3, 1, 1],
    [4, 2, 1],
    [5, 2, 1],
    [6, 3, 1],
    [7, 4, 2],
    [8, 6, 3],
    [9, 7, 6],
    [10, 8, 7],
    [11, 10, 9],
];

const fn size_at_style(size: usize, style: Style) -> usize {
    if style.size() < 2 {
        size
    } else {
        SIZE_STYLE_MAP[size - 1][style.size() - 1]
    }
}

/// Options for one subtree.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// Current math style.
    pub style: Style,
    /// Ink color; `None` inherits the renderer's default.
    pub color: Option<String>,
    /// Size index from 1 to 11.
    pub size: usize,
    /// Size index before script styles shrank it.
    pub text_size: usize,
    /// Scale of this size relative to `\normalsize`.
    pub size_multiplier: f64,
    /// Font forced by `\mathrm` and friends.
    pub font: Option<FontName>,
    /// Weight set by `\textbf`.
    pub text_bold: bool,
    /// Shape set by `\textit`.
    pub text_italic: bool,
    /// Upper bound for user-specified sizes, in em.
    pub max_size: f64,
    /// Lower bound for rule thickness, in em.
    pub min_rule_thickness: f64,
    /// What to do with recoverable errors.
    pub error_policy: ErrorPolicy,
    /// Color of error markers.
    pub error_color: Arc<str>,
}

impl Options {
    /// Options at normal size in `style`, with the default error policy.
    #[must_use]
    pub fn new(style: Style, max_size: f64, min_rule_thickness: f64) -> Self {
        Self::from_settings(
            &Settings::builder()
                .max_size(max_size)
                .min_rule_thickness(min_rule_thickness)
                .build(),
        )
        .having_style(style)
    }

    /// Root options for a render.
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        let style = if settings.display_mode {
            Style::Display
        } else {
            Style::Text
        };
        Self {
            style,
            color: None,
            size: BASESIZE,
            text_size: BASESIZE,
            size_multiplier: SIZE_MULTIPLIERS[BASESIZE - 1],
            font: None,
            text_bold: false,
            text_italic: false,
            max_size: settings.max_size,
            min_rule_thickness: settings.min_rule_thickness,
            error_policy: settings.error_policy(),
            error_color: Arc::from(settings.error_color.as_str()),
        }
    }

    /// Font parameters for the current size, scaled to absolute ems.
    #[must_use]
    pub fn metrics(&self) -> FontMetrics {
        FONT_METRICS[size_index(self.size)].scaled(self.size_multiplier)
    }

    fn with_size(&self, style: Style, size: usize, text_size: usize) -> Self {
        Self {
            style,
            size,
            text_size,
            size_multiplier: SIZE_MULTIPLIERS[size - 1],
            ..self.clone()
        }
    }

    /// Switches style, shrinking the size for script styles.
    #[must_use]
    pub fn having_style(&self, style: Style) -> Self {
        if self.style == style {
            return self.clone();
        }
        self.with_size(style, size_at_style(self.text_size, style), self.text_size)
    }

    /// The same options in the cramped version of the current style.
    #[must_use]
    pub fn having_cramped_style(&self) -> Self {
        self.having_style(self.style.cramp())
    }

    /// Switches to a size from `\tiny` (1) to `\Huge` (11).
    #[must_use]
    pub fn having_size(&self, size: usize) -> Self {
        let size = size.clamp(1, SIZE_MULTIPLIERS.len());
        if self.size == size && self.text_size == size {
            return self.clone();
        }
        self.with_size(self.style.text(), size, size)
    }

    /// Resets to normal size in `style`, for glyphs whose size does not
    /// follow the surrounding `\large`.
    #[must_use]
    pub fn having_base_style(&self, style: Style) -> Self {
        let size = size_at_style(BASESIZE, style);
        if self.size == size && self.text_size == BASESIZE && self.style == style {
            return self.clone();
        }
        self.with_size(style, size, BASESIZE)
    }

    /// Normal size for the current style, used to size radical signs.
    #[must_use]
    pub fn having_base_sizing(&self) -> Self {
        let size = match self.style.size() {
            2 => 3,
            3 => 1,
            _ => BASESIZE,
        };
        self.with_size(self.style.text(), size, BASESIZE)
    }

    /// The same options drawing in `color`.
    #[must_use]
    pub fn with_color(&self, color: &str) -> Self {
        Self {
            color: Some(color.to_owned()),
            ..self.clone()
        }
    }

    /// The same options drawing in the math font `font`.
    #[must_use]
    pub fn with_font(&self, font: FontName) -> Self {
        Self {
            font: Some(font),
            ..self.clone()
        }
    }

    /// Text fonts reset any math font.
    #[must_use]
    pub fn with_text_font(&self, bold: Option<bool>, italic: Option<bool>) -> Self {
        Self {
            font: None,
            text_bold: bold.unwrap_or(self.text_bold),
            text_italic: italic.unwrap_or(self.text_italic),
            ..self.clone()
        }
    }

    /// The font text-mode glyphs are drawn in.
    #[must_use]
    pub const fn text_font(&self) -> FontName {
        match (self.text_bold, self.text_italic) {
            (true, _) => FontName::MainBold,
            (false, true) => FontName::MainItalic,
            (false, false) => FontName::MainRegular,
        }
    }
}
