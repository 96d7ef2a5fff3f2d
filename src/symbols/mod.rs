//! Symbol tables
//!
//! Maps each symbol command (`\alpha`, `\leq`, `+`) to the font it is drawn
//! from, its group (which decides the node built for it and its atom class
//! for spacing) and the character actually drawn. Math and text mode have
//! separate tables. The named entries live in static maps; letters, digits
//! and the Unicode forms of named symbols are filled in by
//! [`create_symbols`].

mod types;

use phf::phf_map;

use crate::namespace::KeyMap;
pub use types::{Atom, CharInfo, Font, Group, Mode, NonAtom};

const REL: Group = Group::Atom(Atom::Rel);
const BIN: Group = Group::Atom(Atom::Bin);
const OPEN: Group = Group::Atom(Atom::Open);
const CLOSE: Group = Group::Atom(Atom::Close);
const PUNCT: Group = Group::Atom(Atom::Punct);
const INNER: Group = Group::Atom(Atom::Inner);
const MATHORD: Group = Group::NonAtom(NonAtom::MathOrd);
const TEXTORD: Group = Group::NonAtom(NonAtom::TextOrd);
const SPACING: Group = Group::NonAtom(NonAtom::Spacing);

const fn main(group: Group, ch: char) -> CharInfo {
    CharInfo::new(Font::Main, group, ch)
}

const fn ams(group: Group, ch: char) -> CharInfo {
    CharInfo::new(Font::Ams, group, ch)
}

/// Named math-mode symbols.
pub static MATH_SYMBOLS: phf::Map<&'static str, CharInfo> = phf_map! {
    // Relations
    "=" => main(REL, '='),
    "<" => main(REL, '<'),
    ">" => main(REL, '>'),
    ":" => main(REL, ':'),
    "\\equiv" => main(REL, '\u{2261}'),
    "\\prec" => main(REL, '\u{227A}'),
    "\\succ" => main(REL, '\u{227B}'),
    "\\sim" => main(REL, '\u{223C}'),
    "\\perp" => main(REL, '\u{22A5}'),
    "\\preceq" => main(REL, '\u{2AAF}'),
    "\\succeq" => main(REL, '\u{2AB0}'),
    "\\simeq" => main(REL, '\u{2243}'),
    "\\mid" => main(REL, '\u{2223}'),
    "\\ll" => main(REL, '\u{226A}'),
    "\\gg" => main(REL, '\u{226B}'),
    "\\asymp" => main(REL, '\u{224D}'),
    "\\parallel" => main(REL, '\u{2225}'),
    "\\subset" => main(REL, '\u{2282}'),
    "\\supset" => main(REL, '\u{2283}'),
    "\\approx" => main(REL, '\u{2248}'),
    "\\cong" => main(REL, '\u{2245}'),
    "\\subseteq" => main(REL, '\u{2286}'),
    "\\supseteq" => main(REL, '\u{2287}'),
    "\\doteq" => main(REL, '\u{2250}'),
    "\\propto" => main(REL, '\u{221D}'),
    "\\vdash" => main(REL, '\u{22A2}'),
    "\\dashv" => main(REL, '\u{22A3}'),
    "\\in" => main(REL, '\u{2208}'),
    "\\ni" => main(REL, '\u{220B}'),
    "\\notin" => main(REL, '\u{2209}'),
    "\\leq" => main(REL, '\u{2264}'),
    "\\geq" => main(REL, '\u{2265}'),
    "\\neq" => main(REL, '\u{2260}'),
    "\\models" => main(REL, '\u{22A8}'),
    "\\smile" => main(REL, '\u{2323}'),
    "\\frown" => main(REL, '\u{2322}'),
    "\\leftarrow" => main(REL, '\u{2190}'),
    "\\rightarrow" => main(REL, '\u{2192}'),
    "\\uparrow" => main(REL, '\u{2191}'),
    "\\downarrow" => main(REL, '\u{2193}'),
    "\\updownarrow" => main(REL, '\u{2195}'),
    "\\leftrightarrow" => main(REL, '\u{2194}'),
    "\\Leftarrow" => main(REL, '\u{21D0}'),
    "\\Rightarrow" => main(REL, '\u{21D2}'),
    "\\Uparrow" => main(REL, '\u{21D1}'),
    "\\Downarrow" => main(REL, '\u{21D3}'),
    "\\Leftrightarrow" => main(REL, '\u{21D4}'),
    "\\longleftarrow" => main(REL, '\u{27F5}'),
    "\\longrightarrow" => main(REL, '\u{27F6}'),
    "\\longleftrightarrow" => main(REL, '\u{27F7}'),
    "\\Longleftarrow" => main(REL, '\u{27F8}'),
    "\\Longrightarrow" => main(REL, '\u{27F9}'),
    "\\Longleftrightarrow" => main(REL, '\u{27FA}'),
    "\\mapsto" => main(REL, '\u{21A6}'),
    "\\longmapsto" => main(REL, '\u{27FC}'),
    "\\nearrow" => main(REL, '\u{2197}'),
    "\\searrow" => main(REL, '\u{2198}'),
    "\\leqslant" => ams(REL, '\u{2A7D}'),
    "\\geqslant" => ams(REL, '\u{2A7E}'),
    "\\lesssim" => ams(REL, '\u{2272}'),
    "\\gtrsim" => ams(REL, '\u{2273}'),
    "\\therefore" => ams(REL, '\u{2234}'),
    "\\because" => ams(REL, '\u{2235}'),
    "\\subsetneq" => ams(REL, '\u{228A}'),
    "\\supsetneq" => ams(REL, '\u{228B}'),

    // Binary operators
    "+" => main(BIN, '+'),
    "-" => main(BIN, '\u{2212}'),
    "*" => main(BIN, '\u{2217}'),
    "\\pm" => main(BIN, '\u{00B1}'),
    "\\mp" => main(BIN, '\u{2213}'),
    "\\times" => main(BIN, '\u{00D7}'),
    "\\div" => main(BIN, '\u{00F7}'),
    "\\cdot" => main(BIN, '\u{22C5}'),
    "\\ast" => main(BIN, '\u{2217}'),
    "\\star" => main(BIN, '\u{22C6}'),
    "\\circ" => main(BIN, '\u{2218}'),
    "\\bullet" => main(BIN, '\u{2219}'),
    "\\cap" => main(BIN, '\u{2229}'),
    "\\cup" => main(BIN, '\u{222A}'),
    "\\wedge" => main(BIN, '\u{2227}'),
    "\\vee" => main(BIN, '\u{2228}'),
    "\\setminus" => main(BIN, '\u{2216}'),
    "\\oplus" => main(BIN, '\u{2295}'),
    "\\ominus" => main(BIN, '\u{2296}'),
    "\\otimes" => main(BIN, '\u{2297}'),
    "\\oslash" => main(BIN, '\u{2298}'),
    "\\odot" => main(BIN, '\u{2299}'),
    "\\uplus" => main(BIN, '\u{228E}'),
    "\\sqcap" => main(BIN, '\u{2293}'),
    "\\sqcup" => main(BIN, '\u{2294}'),
    "\\dagger" => main(BIN, '\u{2020}'),
    "\\ddagger" => main(BIN, '\u{2021}'),
    "\\amalg" => main(BIN, '\u{2A3F}'),
    "\\diamond" => main(BIN, '\u{22C4}'),
    "\\bigcirc" => main(BIN, '\u{25EF}'),
    "\\wr" => main(BIN, '\u{2240}'),

    // Delimiters and punctuation
    "(" => main(OPEN, '('),
    "[" => main(OPEN, '['),
    "\\{" => main(OPEN, '{'),
    "\\langle" => main(OPEN, '\u{27E8}'),
    "\\lceil" => main(OPEN, '\u{2308}'),
    "\\lfloor" => main(OPEN, '\u{230A}'),
    "\\lvert" => main(OPEN, '\u{2223}'),
    "\\lVert" => main(OPEN, '\u{2225}'),
    ")" => main(CLOSE, ')'),
    "]" => main(CLOSE, ']'),
    "\\}" => main(CLOSE, '}'),
    "\\rangle" => main(CLOSE, '\u{27E9}'),
    "\\rceil" => main(CLOSE, '\u{2309}'),
    "\\rfloor" => main(CLOSE, '\u{230B}'),
    "\\rvert" => main(CLOSE, '\u{2223}'),
    "\\rVert" => main(CLOSE, '\u{2225}'),
    "!" => main(CLOSE, '!'),
    "?" => main(CLOSE, '?'),
    "," => main(PUNCT, ','),
    ";" => main(PUNCT, ';'),
    "\\colon" => main(PUNCT, ':'),
    "\\cdotp" => main(PUNCT, '\u{22C5}'),
    "\\ldotp" => main(PUNCT, '.'),
    "\\ldots" => main(INNER, '\u{2026}'),
    "\\cdots" => main(INNER, '\u{22EF}'),
    "\\ddots" => main(INNER, '\u{22F1}'),

    // Ordinary symbols
    "." => main(TEXTORD, '.'),
    "/" => main(TEXTORD, '/'),
    "|" => main(TEXTORD, '\u{2223}'),
    "@" => main(TEXTORD, '@'),
    "\"" => main(TEXTORD, '"'),
    "\\vert" => main(TEXTORD, '\u{2223}'),
    "\\|" => main(TEXTORD, '\u{2225}'),
    "\\Vert" => main(TEXTORD, '\u{2225}'),
    "\\backslash" => main(TEXTORD, '\\'),
    "\\vdots" => main(TEXTORD, '\u{22EE}'),
    "\\%" => main(TEXTORD, '%'),
    "\\$" => main(TEXTORD, '$'),
    "\\#" => main(TEXTORD, '#'),
    "\\&" => main(TEXTORD, '&'),
    "\\_" => main(TEXTORD, '_'),
    "\\infty" => main(TEXTORD, '\u{221E}'),
    "\\forall" => main(TEXTORD, '\u{2200}'),
    "\\exists" => main(TEXTORD, '\u{2203}'),
    "\\nexists" => ams(TEXTORD, '\u{2204}'),
    "\\emptyset" => main(TEXTORD, '\u{2205}'),
    "\\nabla" => main(TEXTORD, '\u{2207}'),
    "\\partial" => main(TEXTORD, '\u{2202}'),
    "\\neg" => main(TEXTORD, '\u{00AC}'),
    "\\top" => main(TEXTORD, '\u{22A4}'),
    "\\bot" => main(TEXTORD, '\u{22A5}'),
    "\\prime" => main(TEXTORD, '\u{2032}'),
    "\\hbar" => main(TEXTORD, '\u{210F}'),
    "\\Re" => main(TEXTORD, '\u{211C}'),
    "\\Im" => main(TEXTORD, '\u{2111}'),
    "\\aleph" => main(TEXTORD, '\u{2135}'),
    "\\wp" => main(TEXTORD, '\u{2118}'),
    "\\angle" => main(TEXTORD, '\u{2220}'),
    "\\triangle" => main(TEXTORD, '\u{25B3}'),
    "\\surd" => main(TEXTORD, '\u{221A}'),
    "\\flat" => main(TEXTORD, '\u{266D}'),
    "\\natural" => main(TEXTORD, '\u{266E}'),
    "\\sharp" => main(TEXTORD, '\u{266F}'),
    "\\clubsuit" => main(TEXTORD, '\u{2663}'),
    "\\diamondsuit" => main(TEXTORD, '\u{2662}'),
    "\\heartsuit" => main(TEXTORD, '\u{2661}'),
    "\\spadesuit" => main(TEXTORD, '\u{2660}'),
    "\\ell" => main(MATHORD, '\u{2113}'),
    "\\imath" => main(MATHORD, '\u{0131}'),
    "\\jmath" => main(MATHORD, '\u{0237}'),

    // Greek
    "\\Gamma" => main(TEXTORD, '\u{0393}'),
    "\\Delta" => main(TEXTORD, '\u{0394}'),
    "\\Theta" => main(TEXTORD, '\u{0398}'),
    "\\Lambda" => main(TEXTORD, '\u{039B}'),
    "\\Xi" => main(TEXTORD, '\u{039E}'),
    "\\Pi" => main(TEXTORD, '\u{03A0}'),
    "\\Sigma" => main(TEXTORD, '\u{03A3}'),
    "\\Upsilon" => main(TEXTORD, '\u{03A5}'),
    "\\Phi" => main(TEXTORD, '\u{03A6}'),
    "\\Psi" => main(TEXTORD, '\u{03A8}'),
    "\\Omega" => main(TEXTORD, '\u{03A9}'),
    "\\alpha" => main(MATHORD, '\u{03B1}'),
    "\\beta" => main(MATHORD, '\u{03B2}'),
    "\\gamma" => main(MATHORD, '\u{03B3}'),
    "\\delta" => main(MATHORD, '\u{03B4}'),
    "\\epsilon" => main(MATHORD, '\u{03F5}'),
    "\\varepsilon" => main(MATHORD, '\u{03B5}'),
    "\\zeta" => main(MATHORD, '\u{03B6}'),
    "\\eta" => main(MATHORD, '\u{03B7}'),
    "\\theta" => main(MATHORD, '\u{03B8}'),
    "\\vartheta" => main(MATHORD, '\u{03D1}'),
    "\\iota" => main(MATHORD, '\u{03B9}'),
    "\\kappa" => main(MATHORD, '\u{03BA}'),
    "\\lambda" => main(MATHORD, '\u{03BB}'),
    "\\mu" => main(MATHORD, '\u{03BC}'),
    "\\nu" => main(MATHORD, '\u{03BD}'),
    "\\xi" => main(MATHORD, '\u{03BE}'),
    "\\omicron" => main(MATHORD, 'o'),
    "\\pi" => main(MATHORD, '\u{03C0}'),
    "\\varpi" => main(MATHORD, '\u{03D6}'),
    "\\rho" => main(MATHORD, '\u{03C1}'),
    "\\varrho" => main(MATHORD, '\u{03F1}'),
    "\\sigma" => main(MATHORD, '\u{03C3}'),
    "\\varsigma" => main(MATHORD, '\u{03C2}'),
    "\\tau" => main(MATHORD, '\u{03C4}'),
    "\\upsilon" => main(MATHORD, '\u{03C5}'),
    "\\phi" => main(MATHORD, '\u{03D5}'),
    "\\varphi" => main(MATHORD, '\u{03C6}'),
    "\\chi" => main(MATHORD, '\u{03C7}'),
    "\\psi" => main(MATHORD, '\u{03C8}'),
    "\\omega" => main(MATHORD, '\u{03C9}'),

    // Spaces
    "\\ " => main(SPACING, '\u{00A0}'),
    "\\nobreakspace" => main(SPACING, '\u{00A0}'),
};

/// Named text-mode symbols.
pub static TEXT_SYMBOLS: phf::Map<&'static str, CharInfo> = phf_map! {
    " " => main(SPACING, '\u{00A0}'),
    "\\ " => main(SPACING, '\u{00A0}'),
    "\\nobreakspace" => main(SPACING, '\u{00A0}'),
    "\\%" => main(TEXTORD, '%'),
    "\\$" => main(TEXTORD, '$'),
    "\\#" => main(TEXTORD, '#'),
    "\\&" => main(TEXTORD, '&'),
    "\\_" => main(TEXTORD, '_'),
    "\\{" => main(TEXTORD, '{'),
    "\\}" => main(TEXTORD, '}'),
    "\\textbackslash" => main(TEXTORD, '\\'),
    "\\textasciitilde" => main(TEXTORD, '~'),
    "\\textasciicircum" => main(TEXTORD, '^'),
    "\\textbar" => main(TEXTORD, '|'),
    "\\textendash" => main(TEXTORD, '\u{2013}'),
    "\\textemdash" => main(TEXTORD, '\u{2014}'),
    "\\dag" => main(TEXTORD, '\u{2020}'),
    "\\ddag" => main(TEXTORD, '\u{2021}'),
    "\\S" => main(TEXTORD, '\u{00A7}'),
    "\\P" => main(TEXTORD, '\u{00B6}'),

    // Quotes and dashes
    "`" => main(TEXTORD, '\u{2018}'),
    "'" => main(TEXTORD, '\u{2019}'),
    "``" => main(TEXTORD, '\u{201C}'),
    "''" => main(TEXTORD, '\u{201D}'),
    "--" => main(TEXTORD, '\u{2013}'),
    "---" => main(TEXTORD, '\u{2014}'),
};

/// Runtime symbol tables, layered over the static ones.
#[derive(Debug, Clone, Default)]
pub struct Symbols {
    math: KeyMap<String, CharInfo>,
    text: KeyMap<String, CharInfo>,
}

impl Symbols {
    /// Empty tables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a symbol; with `accept_unicode_char`, the drawn character itself
    /// becomes a second name for it.
    pub fn define_symbol(&mut self, mode: Mode, info: CharInfo, name: &str, accept_unicode_char: bool) {
        let table = match mode {
            Mode::Math => &mut self.math,
            Mode::Text => &mut self.text,
        };
        table.insert(name.to_owned(), info);
        if accept_unicode_char && let Some(ch) = info.replace {
            table.entry(ch.to_string()).or_insert(info);
        }
    }

    /// A math-mode symbol.
    #[must_use]
    pub fn get_math(&self, name: &str) -> Option<&CharInfo> {
        self.math.get(name).or_else(|| MATH_SYMBOLS.get(name))
    }

    /// A text-mode symbol.
    #[must_use]
    pub fn get_text(&self, name: &str) -> Option<&CharInfo> {
        self.text.get(name).or_else(|| TEXT_SYMBOLS.get(name))
    }

    /// A symbol in `mode`.
    #[must_use]
    pub fn get(&self, mode: Mode, name: &str) -> Option<&CharInfo> {
        match mode {
            Mode::Math => self.get_math(name),
            Mode::Text => self.get_text(name),
        }
    }

    /// Whether `name` is a symbol in `mode`.
    #[must_use]
    pub fn contains(&self, mode: Mode, name: &str) -> bool {
        self.get(mode, name).is_some()
    }
}

/// Builds the full symbol table: letters, digits and printable ASCII, plus
/// the Unicode spelling of every named symbol.
#[must_use]
pub fn create_symbols() -> Symbols {
    let mut symbols = Symbols::new();

    for ch in "0123456789".chars() {
        let info = main(TEXTORD, ch);
        symbols.define_symbol(Mode::Math, info, &ch.to_string(), false);
        symbols.define_symbol(Mode::Text, info, &ch.to_string(), false);
    }

    for ch in ('A'..='Z').chain('a'..='z') {
        symbols.define_symbol(Mode::Math, main(MATHORD, ch), &ch.to_string(), false);
        symbols.define_symbol(Mode::Text, main(TEXTORD, ch), &ch.to_string(), false);
    }

    for ch in "!@*()-=+[]<>|\";:?/.,".chars() {
        symbols.define_symbol(Mode::Text, main(TEXTORD, ch), &ch.to_string(), false);
    }

    for (name, info) in MATH_SYMBOLS.entries() {
        if name.starts_with('\\') && info.group != SPACING {
            symbols.define_symbol(Mode::Math, *info, name, true);
        }
    }
    for (name, info) in TEXT_SYMBOLS.entries() {
        if name.starts_with('\\') && info.group != SPACING {
            symbols.define_symbol(Mode::Text, *info, name, true);
        }
    }

    symbols
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_are_mathord_in_math_and_textord_in_text() {
        let symbols = create_symbols();
        assert_eq!(symbols.get_math("x").map(|i| i.group), Some(MATHORD));
        assert_eq!(symbols.get_text("x").map(|i| i.group), Some(TEXTORD));
        assert_eq!(symbols.get_math("7").map(|i| i.group), Some(TEXTORD));
    }

    #[test]
    fn named_symbols_accept_their_unicode_form() {
        let symbols = create_symbols();
        let named = symbols.get_math("\\leq").copied();
        assert_eq!(named, symbols.get_math("\u{2264}").copied());
        assert_eq!(named.map(|i| i.group), Some(REL));
    }

    #[test]
    fn minus_is_drawn_as_unicode_minus() {
        let symbols = create_symbols();
        assert_eq!(symbols.get_math("-").and_then(|i| i.replace), Some('\u{2212}'));
        assert!(!symbols.contains(Mode::Math, "\\notacommand"));
    }
}
