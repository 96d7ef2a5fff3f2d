//! Inter-atom spacing
//!
//! The table of TeXbook chapter 18 deciding how much space goes between two
//! adjacent atoms. In script styles only the tight table applies.

use serde::Serialize;

use crate::symbols::Atom;

/// TeX atom classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AtomClass {
    /// Ordinary.
    Mord,
    /// Large operator.
    Mop,
    /// Binary operator.
    Mbin,
    /// Relation.
    Mrel,
    /// Opening delimiter.
    Mopen,
    /// Closing delimiter.
    Mclose,
    /// Punctuation.
    Mpunct,
    /// Inner, such as a `\left...\right` group.
    Minner,
}

impl From<Atom> for AtomClass {
    fn from(atom: Atom) -> Self {
        match atom {
            Atom::Bin => Self::Mbin,
            Atom::Close => Self::Mclose,
            Atom::Inner => Self::Minner,
            Atom::Open => Self::Mopen,
            Atom::Punct => Self::Mpunct,
            Atom::Rel => Self::Mrel,
        }
    }
}

/// The three amounts of math glue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathSpace {
    /// `\thinmuskip`, 3mu
    Thin,
    /// `\medmuskip`, 4mu
    Medium,
    /// `\thickmuskip`, 5mu
    Thick,
}

impl MathSpace {
    /// The space in mu.
    #[must_use]
    pub const fn mu(self) -> f64 {
        match self {
            Self::Thin => 3.0,
            Self::Medium => 4.0,
            Self::Thick => 5.0,
        }
    }
}

/// Space between `left` and `right` in display and text styles.
#[must_use]
pub const fn spacing(left: AtomClass, right: AtomClass) -> Option<MathSpace> {
    use AtomClass::{Mbin, Mclose, Minner, Mop, Mopen, Mord, Mpunct, Mrel};
    use MathSpace::{Medium, Thick, Thin};

    match (left, right) {
        (Mord | Mclose, Mop) => Some(Thin),
        (Mord | Mclose, Mbin) => Some(Medium),
        (Mord | Mclose, Mrel) => Some(Thick),
        (Mord | Mclose, Minner) => Some(Thin),

        (Mop, Mord | Mop | Minner) => Some(Thin),
        (Mop, Mrel) => Some(Thick),

        (Mbin, Mord | Mop | Mopen | Minner) => Some(Medium),

        (Mrel, Mord | Mop | Mopen | Minner) => Some(Thick),

        (Mpunct, Mord | Mop | Mopen | Mclose | Mpunct | Minner) => Some(Thin),
        (Mpunct, Mrel) => Some(Thick),

        (Minner, Mord | Mop | Mopen | Mpunct | Minner) => Some(Thin),
        (Minner, Mbin) => Some(Medium),
        (Minner, Mrel) => Some(Thick),

        _ => None,
    }
}

/// Space between `left` and `right` in script and scriptscript styles.
#[must_use]
pub const fn tight_spacing(left: AtomClass, right: AtomClass) -> Option<MathSpace> {
    use AtomClass::{Mclose, Minner, Mop, Mord};

    match (left, right) {
        (Mord | Mop | Mclose | Minner, Mop) | (Mop, Mord) => Some(MathSpace::Thin),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use AtomClass::*;

    #[test]
    fn ordinary_spacing() {
        assert_eq!(spacing(Mord, Mbin), Some(MathSpace::Medium));
        assert_eq!(spacing(Mbin, Mord), Some(MathSpace::Medium));
        assert_eq!(spacing(Mord, Mrel), Some(MathSpace::Thick));
        assert_eq!(spacing(Mord, Mord), None);
        assert_eq!(spacing(Mopen, Mord), None);
        assert_eq!(spacing(Mord, Mclose), None);
        assert_eq!(spacing(Mpunct, Mord), Some(MathSpace::Thin));
        assert_eq!(spacing(Mop, Mop), Some(MathSpace::Thin));
    }

    #[test]
    fn tight_spacing_only_around_operators() {
        assert_eq!(tight_spacing(Mord, Mop), Some(MathSpace::Thin));
        assert_eq!(tight_spacing(Mop, Mord), Some(MathSpace::Thin));
        assert_eq!(tight_spacing(Mord, Mbin), None);
        assert_eq!(tight_spacing(Mrel, Mord), None);
    }

    #[test]
    fn atoms_map_to_classes() {
        assert_eq!(AtomClass::from(Atom::Rel), Mrel);
        assert_eq!(AtomClass::from(Atom::Punct), Mpunct);
        assert_eq!(Minner.to_string(), "minner");
        assert!((MathSpace::Thick.mu() - 5.0).abs() < f64::EPSILON);
    }
}
