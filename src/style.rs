//! TeX math styles
//!
//! The eight styles of TeXbook chapter 17: display, text, script and
//! scriptscript, each in a normal and a cramped variant. Cramped styles lower
//! superscripts and are used for denominators, radicands and subscripts.

use serde::Serialize;

/// One of the eight math styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display)]
pub enum Style {
    /// Display style, D.
    #[strum(serialize = "D")]
    Display,
    /// Cramped display style, D'.
    #[strum(serialize = "D'")]
    DisplayCramped,
    /// Text style, T.
    #[strum(serialize = "T")]
    Text,
    /// Cramped text style, T'.
    #[strum(serialize = "T'")]
    TextCramped,
    /// Script style, S.
    #[strum(serialize = "S")]
    Script,
    /// Cramped script style, S'.
    #[strum(serialize = "S'")]
    ScriptCramped,
    /// Scriptscript style, SS.
    #[strum(serialize = "SS")]
    ScriptScript,
    /// Cramped scriptscript style, SS'.
    #[strum(serialize = "SS'")]
    ScriptScriptCramped,
}

impl Style {
    const ALL: [Self; 8] = [
        Self::Display,
        Self::DisplayCramped,
        Self::Text,
        Self::TextCramped,
        Self::Script,
        Self::ScriptCramped,
        Self::ScriptScript,
        Self::ScriptScriptCramped,
    ];

    const fn from_parts(size: usize, cramped: bool) -> Self {
        Self::ALL[size * 2 + cramped as usize]
    }

    /// Index from 0 (D) to 7 (SS').
    #[must_use]
    pub const fn id(self) -> usize {
        self as usize
    }

    /// Size level: 0 display, 1 text, 2 script, 3 scriptscript.
    #[must_use]
    pub const fn size(self) -> usize {
        self.id() / 2
    }

    /// Whether superscripts are lowered in this style.
    #[must_use]
    pub const fn is_cramped(self) -> bool {
        self.id() % 2 == 1
    }

    /// Style of a superscript.
    #[must_use]
    pub const fn sup(self) -> Self {
        Self::from_parts(Self::script_size(self.size()), self.is_cramped())
    }

    /// Style of a subscript, always cramped.
    #[must_use]
    pub const fn sub(self) -> Self {
        Self::from_parts(Self::script_size(self.size()), true)
    }

    /// Style of a fraction numerator.
    #[must_use]
    pub const fn frac_num(self) -> Self {
        Self::from_parts(Self::fraction_size(self.size()), self.is_cramped())
    }

    /// Style of a fraction denominator, always cramped.
    #[must_use]
    pub const fn frac_den(self) -> Self {
        Self::from_parts(Self::fraction_size(self.size()), true)
    }

    /// The cramped variant of this style.
    #[must_use]
    pub const fn cramp(self) -> Self {
        Self::from_parts(self.size(), true)
    }

    /// The style used for text inside math: script sizes go back to text.
    #[must_use]
    pub const fn text(self) -> Self {
        let size = if self.size() >= 2 { 1 } else { self.size() };
        Self::from_parts(size, self.is_cramped())
    }

    /// Whether this is a script or scriptscript style.
    #[must_use]
    pub const fn is_tight(self) -> bool {
        self.size() >= 2
    }

    const fn script_size(size: usize) -> usize {
        if size < 2 { 2 } else { 3 }
    }

    const fn fraction_size(size: usize) -> usize {
        if size < 3 { size + 1 } else { 3 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripts_shrink_and_subscripts_cramp() {
        assert_eq!(Style::Display.sup(), Style::Script);
        assert_eq!(Style::TextCramped.sup(), Style::ScriptCramped);
        assert_eq!(Style::Script.sup(), Style::ScriptScript);
        assert_eq!(Style::ScriptScript.sup(), Style::ScriptScript);
        assert_eq!(Style::Text.sub(), Style::ScriptCramped);
        assert_eq!(Style::Script.sub(), Style::ScriptScriptCramped);
    }

    #[test]
    fn fractions_step_down_one_level() {
        assert_eq!(Style::Display.frac_num(), Style::Text);
        assert_eq!(Style::Display.frac_den(), Style::TextCramped);
        assert_eq!(Style::Text.frac_num(), Style::Script);
        assert_eq!(Style::ScriptScript.frac_den(), Style::ScriptScriptCramped);
    }

    #[test]
    fn text_and_cramp() {
        assert_eq!(Style::ScriptCramped.text(), Style::TextCramped);
        assert_eq!(Style::Display.text(), Style::Display);
        assert_eq!(Style::Script.cramp(), Style::ScriptCramped);
        assert!(Style::Script.is_tight());
        assert!(!Style::TextCramped.is_tight());
        assert_eq!(Style::DisplayCramped.to_string(), "D'");
    }
}
