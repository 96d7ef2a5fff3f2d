use serde::Serialize;

/// Parsing mode: math mode (scripts, atom spacing) or text mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, strum::Display)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Math mode.
    #[default]
    Math,
    /// Text mode, inside `\text{...}` and friends.
    Text,
}

/// Font family a symbol is drawn from by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    /// Computer Modern main and math fonts.
    Main,
    /// AMS symbol font.
    Ams,
}

/// Atom classes of symbols that take part in inter-atom spacing directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Atom {
    /// Binary operator.
    Bin,
    /// Closing delimiter.
    Close,
    /// Inner.
    Inner,
    /// Opening delimiter.
    Open,
    /// Punctuation.
    Punct,
    /// Relation.
    Rel,
}

/// Symbol groups that are not atoms in their own right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NonAtom {
    /// An accent.
    AccentToken,
    /// An ordinary math symbol, drawn in math italic.
    MathOrd,
    /// A large operator.
    OpToken,
    /// A spacing symbol.
    Spacing,
    /// An ordinary symbol drawn upright.
    TextOrd,
}

/// The group of a symbol, deciding its node type and spacing class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    /// A symbol with an atom class.
    Atom(Atom),
    /// Any other symbol.
    NonAtom(NonAtom),
}

/// Table entry for a symbol: its font, group and the character drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharInfo {
    /// The font family the symbol is drawn from.
    pub font: Font,
    /// How the symbol behaves in a list.
    pub group: Group,
    /// The character drawn, when it differs from the name.
    pub replace: Option<char>,
}

impl CharInfo {
    /// A symbol drawing `replace`.
    #[must_use]
    pub const fn new(font: Font, group: Group, replace: char) -> Self {
        Self {
            font,
            group,
            replace: Some(replace),
        }
    }
}
