use bon::bon;
use tracing::warn;

use crate::macros::MacroMap;
use crate::types::{ParseError, ParseErrorKind, Recovery};

/// Levels of strictness for input a real TeX engine would reject.
///
/// Governs unknown control sequences and glyphs missing from the font
/// metrics, and promotes double scripts to hard errors under `Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum StrictMode {
    /// Render an inline marker silently.
    Ignore,
    /// Render an inline marker and emit a `tracing` warning.
    #[default]
    Warn,
    /// Fail the whole render.
    Error,
}

/// The two knobs that decide whether a recoverable error aborts the render.
///
/// Split out of [`Settings`] so layout code can carry it by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorPolicy {
    /// Strictness for unknown commands and missing glyphs.
    pub strict: StrictMode,
    /// Whether double scripts abort the render.
    pub throw_on_error: bool,
}

impl ErrorPolicy {
    /// Decides whether `error` is rendered inline or aborts the render.
    ///
    /// Returns `Ok(error)` when the caller should render an inline marker for
    /// it, and `Err(error)` when the render must fail.
    pub fn recover(self, error: ParseError) -> Result<ParseError, ParseError> {
        match error.kind.recovery() {
            Recovery::Fatal => Err(error),
            Recovery::Strict => match self.strict {
                StrictMode::Ignore => Ok(error),
                StrictMode::Warn => {
                    warn!(
                        position = error.position,
                        "LaTeX-incompatible input and strict mode is set to 'warn': {}", error.kind
                    );
                    Ok(error)
                }
                StrictMode::Error => Err(error),
            },
            Recovery::ThrowOnError => {
                if self.throw_on_error || self.strict == StrictMode::Error {
                    Err(error)
                } else {
                    Ok(error)
                }
            }
        }
    }
}

/// Per-render configuration.
///
/// Build with [`Settings::builder`]; every field has a default.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Whether the expression starts in display style rather than text style.
    pub display_mode: bool,
    /// When `false`, fatal errors yield an error-colored rendering of the
    /// whole input and double scripts are rendered inline.
    pub throw_on_error: bool,
    /// Color used for error markers.
    pub error_color: String,
    /// User macro templates, shadowing the built-in ones.
    pub macros: MacroMap,
    /// Minimum thickness of fraction bars and other rules, in em.
    pub min_rule_thickness: f64,
    /// Makes `\color` take an argument like `\textcolor`.
    pub color_is_text_color: bool,
    /// Strictness for unknown commands and missing glyphs.
    pub strict: StrictMode,
    /// Upper bound for user-specified sizes, in em.
    pub max_size: f64,
    /// Maximum number of macro expansions per render.
    pub max_expand: usize,
    /// Maximum nesting depth of macro expansions.
    pub max_expansion_depth: usize,
    /// Maximum nesting depth of groups, arguments and scripts.
    pub max_nesting_depth: usize,
}

#[bon]
impl Settings {
    /// Creates settings, applying the defaults for every omitted value.
    ///
    /// # Default Values
    /// - `display_mode`: `false`
    /// - `throw_on_error`: `true`
    /// - `error_color`: `"#cc0000"`
    /// - `macros`: empty
    /// - `min_rule_thickness`: `0.0`
    /// - `color_is_text_color`: `false`
    /// - `strict`: [`StrictMode::Warn`]
    /// - `max_size`: `f64::INFINITY`
    /// - `max_expand`: `1000`
    /// - `max_expansion_depth`: `200`
    /// - `max_nesting_depth`: `100`
    #[must_use]
    #[builder]
    pub fn new(
        /// Display (block) mode.
        display_mode: Option<bool>,
        /// Fail on errors (true) or render them (false).
        throw_on_error: Option<bool>,
        /// Color for error markers.
        error_color: Option<String>,
        /// User macro definitions.
        macros: Option<MacroMap>,
        /// Minimum rule thickness in em.
        min_rule_thickness: Option<f64>,
        /// Whether `\color` takes an argument.
        color_is_text_color: Option<bool>,
        /// Strictness level.
        strict: Option<StrictMode>,
        /// Maximum user-specified size in em.
        max_size: Option<f64>,
        /// Maximum total macro expansions.
        max_expand: Option<usize>,
        /// Maximum macro nesting depth.
        max_expansion_depth: Option<usize>,
        /// Maximum group nesting depth.
        max_nesting_depth: Option<usize>,
    ) -> Self {
        Self {
            display_mode: display_mode.unwrap_or(false),
            throw_on_error: throw_on_error.unwrap_or(true),
            error_color: error_color.unwrap_or_else(|| "#cc0000".to_owned()),
            macros: macros.unwrap_or_default(),
            min_rule_thickness: min_rule_thickness.unwrap_or(0.0),
            color_is_text_color: color_is_text_color.unwrap_or(false),
            strict: strict.unwrap_or_default(),
            max_size: max_size.unwrap_or(f64::INFINITY),
            max_expand: max_expand.unwrap_or(1000),
            max_expansion_depth: max_expansion_depth.unwrap_or(200),
            max_nesting_depth: max_nesting_depth.unwrap_or(100),
        }
    }

    /// Checks that every numeric setting is usable.
    pub fn validate(&self) -> Result<(), ParseError> {
        let invalid = |name: &'static str, value: String| {
            Err(ParseError::new(ParseErrorKind::InvalidSetting { name, value }))
        };
        if !self.min_rule_thickness.is_finite() || self.min_rule_thickness < 0.0 {
            return invalid("min_rule_thickness", self.min_rule_thickness.to_string());
        }
        if self.max_size.is_nan() || self.max_size < 0.0 {
            return invalid("max_size", self.max_size.to_string());
        }
        if self.max_expand == 0 {
            return invalid("max_expand", "0".to_owned());
        }
        if self.max_expansion_depth == 0 {
            return invalid("max_expansion_depth", "0".to_owned());
        }
        if self.max_nesting_depth == 0 {
            return invalid("max_nesting_depth", "0".to_owned());
        }
        Ok(())
    }

    /// The recoverable-error policy of these settings.
    #[must_use]
    pub const fn error_policy(&self) -> ErrorPolicy {
        ErrorPolicy {
            strict: self.strict,
            throw_on_error: self.throw_on_error,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn undefined() -> ParseError {
        ParseError::new(ParseErrorKind::UndefinedControlSequence {
            name: r"\foo".to_owned(),
        })
    }

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert!(!settings.display_mode);
        assert!(settings.throw_on_error);
        assert_eq!(settings.strict, StrictMode::Warn);
        assert_eq!(settings.max_expand, 1000);
        assert_eq!(settings.max_expansion_depth, 200);
        assert_eq!(settings.max_nesting_depth, 100);
        assert_eq!(settings.error_color, "#cc0000");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_values() {
        let settings = Settings::builder().min_rule_thickness(-1.0).build();
        let err = settings.validate().unwrap_err();
        assert!(matches!(*err.kind, ParseErrorKind::InvalidSetting { name: "min_rule_thickness", .. }));

        let settings = Settings::builder().max_expand(0).build();
        assert!(settings.validate().is_err());

        let settings = Settings::builder().max_size(f64::NAN).build();
        assert!(settings.validate().is_err());

        let settings = Settings::builder().max_nesting_depth(0).build();
        let err = settings.validate().unwrap_err();
        assert!(matches!(*err.kind, ParseErrorKind::InvalidSetting { name: "max_nesting_depth", .. }));
    }

    #[test]
    fn strict_policy_decides_unknown_commands() {
        let ignore = ErrorPolicy { strict: StrictMode::Ignore, throw_on_error: true };
        let error = ErrorPolicy { strict: StrictMode::Error, throw_on_error: false };
        assert!(ignore.recover(undefined()).is_ok());
        assert!(error.recover(undefined()).is_err());
    }

    #[test]
    fn throw_on_error_decides_double_scripts() {
        let double = || ParseError::new(ParseErrorKind::DoubleSuperscript);
        let lenient = ErrorPolicy { strict: StrictMode::Warn, throw_on_error: false };
        let throwing = ErrorPolicy { strict: StrictMode::Ignore, throw_on_error: true };
        let strict = ErrorPolicy { strict: StrictMode::Error, throw_on_error: false };
        assert!(lenient.recover(double()).is_ok());
        assert!(throwing.recover(double()).is_err());
        assert!(strict.recover(double()).is_err());
    }

    #[test]
    fn strict_mode_parses_from_string() {
        assert_eq!("error".parse::<StrictMode>().ok(), Some(StrictMode::Error));
        assert_eq!(StrictMode::Ignore.to_string(), "ignore");
    }
}
