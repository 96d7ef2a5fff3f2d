//! Glyph metrics compiled into the crate
//!
//! One table per font, keyed by character. Each entry is
//! `m(depth, height, italic, skew, width)` in ems of the font.

use phf::phf_map;

use crate::font_metrics::CharacterMetrics;

const fn m(depth: f64, height: f64, italic: f64, skew: f64, width: f64) -> CharacterMetrics {
    CharacterMetrics::new(depth, height, italic, skew, width)
}

static MAIN_REGULAR: phf::Map<char, CharacterMetrics> = phf_map! {
    '\u{0020}' => m(0.0, 0.0, 0.0, 0.0, 0.25),
    '!' => m(0.0, 0.69444, 0.0, 0.0, 0.27778),
    '"' => m(0.0, 0.69444, 0.0, 0.0, 0.5),
    '#' => m(0.19444, 0.69444, 0.0, 0.0, 0.83334),
    '$' => m(0.05556, 0.75, 0.0, 0.0, 0.5),
    '%' => m(0.05556, 0.75, 0.0, 0.0, 0.83334),
    '&' => m(0.0, 0.69444, 0.0, 0.0, 0.77778),
    '\'' => m(0.0, 0.69444, 0.0, 0.0, 0.27778),
    '(' => m(0.25, 0.75, 0.0, 0.0, 0.38889),
    ')' => m(0.25, 0.75, 0.0, 0.0, 0.38889),
    '*' => m(0.0, 0.75, 0.0, 0.0, 0.5),
    '+' => m(0.08333, 0.58333, 0.0, 0.0, 0.77778),
    ',' => m(0.19444, 0.10556, 0.0, 0.0, 0.27778),
    '-' => m(0.0, 0.43056, 0.0, 0.0, 0.33333),
    '.' => m(0.0, 0.10556, 0.0, 0.0, 0.27778),
    '/' => m(0.25, 0.75, 0.0, 0.0, 0.5),
    '0' => m(0.0, 0.64444, 0.0, 0.0, 0.5),
    '1' => m(0.0, 0.64444, 0.0, 0.0, 0.5),
    '2' => m(0.0, 0.64444, 0.0, 0.0, 0.5),
    '3' => m(0.0, 0.64444, 0.0, 0.0, 0.5),
    '4' => m(0.0, 0.64444, 0.0, 0.0, 0.5),
    '5' => m(0.0, 0.64444, 0.0, 0.0, 0.5),
    '6' => m(0.0, 0.64444, 0.0, 0.0, 0.5),
    '7' => m(0.0, 0.64444, 0.0, 0.0, 0.5),
    '8' => m(0.0, 0.64444, 0.0, 0.0, 0.5),
    '9' => m(0.0, 0.64444, 0.0, 0.0, 0.5),
    ':' => m(0.0, 0.43056, 0.0, 0.0, 0.27778),
    ';' => m(0.19444, 0.43056, 0.0, 0.0, 0.27778),
    '<' => m(0.0391, 0.5391, 0.0, 0.0, 0.77778),
    '=' => m(0.0, 0.36687, 0.0, 0.0, 0.77778),
    '>' => m(0.0391, 0.5391, 0.0, 0.0, 0.77778),
    '?' => m(0.0, 0.69444, 0.0, 0.0, 0.47222),
    '@' => m(0.0, 0.69444, 0.0, 0.0, 0.77778),
    'A' => m(0.0, 0.68333, 0.0, 0.0, 0.75),
    'B' => m(0.0, 0.68333, 0.0, 0.0, 0.70834),
    'C' => m(0.0, 0.68333, 0.0, 0.0, 0.72222),
    'D' => m(0.0, 0.68333, 0.0, 0.0, 0.76389),
    'E' => m(0.0, 0.68333, 0.0, 0.0, 0.68056),
    'F' => m(0.0, 0.68333, 0.0, 0.0, 0.65278),
    'G' => m(0.0, 0.68333, 0.0, 0.0, 0.78472),
    'H' => m(0.0, 0.68333, 0.0, 0.0, 0.75),
    'I' => m(0.0, 0.68333, 0.0, 0.0, 0.36111),
    'J' => m(0.0, 0.68333, 0.0, 0.0, 0.51389),
    'K' => m(0.0, 0.68333, 0.0, 0.0, 0.77778),
    'L' => m(0.0, 0.68333, 0.0, 0.0, 0.625),
    'M' => m(0.0, 0.68333, 0.0, 0.0, 0.91667),
    'N' => m(0.0, 0.68333, 0.0, 0.0, 0.75),
    'O' => m(0.0, 0.68333, 0.0, 0.0, 0.77778),
    'P' => m(0.0, 0.68333, 0.0, 0.0, 0.68056),
    'Q' => m(0.19444, 0.68333, 0.0, 0.0, 0.77778),
    'R' => m(0.0, 0.68333, 0.0, 0.0, 0.73611),
    'S' => m(0.0, 0.68333, 0.0, 0.0, 0.55556),
    'T' => m(0.0, 0.68333, 0.0, 0.0, 0.72222),
    'U' => m(0.0, 0.68333, 0.0, 0.0, 0.75),
    'V' => m(0.0, 0.68333, 0.01389, 0.0, 0.75),
    'W' => m(0.0, 0.68333, 0.01389, 0.0, 1.02778),
    'X' => m(0.0, 0.68333, 0.0, 0.0, 0.75),
    'Y' => m(0.0, 0.68333, 0.025, 0.0, 0.75),
    'Z' => m(0.0, 0.68333, 0.0, 0.0, 0.61111),
    '[' => m(0.25, 0.75, 0.0, 0.0, 0.27778),
    '\\' => m(0.25, 0.75, 0.0, 0.0, 0.5),
    ']' => m(0.25, 0.75, 0.0, 0.0, 0.27778),
    '^' => m(0.0, 0.69444, 0.0, 0.0, 0.5),
    '_' => m(0.31, 0.12056, 0.02778, 0.0, 0.5),
    '`' => m(0.0, 0.69444, 0.0, 0.0, 0.5),
    'a' => m(0.0, 0.43056, 0.0, 0.0, 0.5),
    'b' => m(0.0, 0.69444, 0.0, 0.0, 0.55556),
    'c' => m(0.0, 0.43056, 0.0, 0.0, 0.44445),
    'd' => m(0.0, 0.69444, 0.0, 0.0, 0.55556),
    'e' => m(0.0, 0.43056, 0.0, 0.0, 0.44445),
    'f' => m(0.0, 0.69444, 0.07778, 0.0, 0.30556),
    'g' => m(0.19444, 0.43056, 0.01389, 0.0, 0.5),
    'h' => m(0.0, 0.69444, 0.0, 0.0, 0.55556),
    'i' => m(0.0, 0.66786, 0.0, 0.0, 0.27778),
    'j' => m(0.19444, 0.66786, 0.0, 0.0, 0.30556),
    'k' => m(0.0, 0.69444, 0.0, 0.0, 0.52778),
    'l' => m(0.0, 0.69444, 0.0, 0.0, 0.27778),
    'm' => m(0.0, 0.43056, 0.0, 0.0, 0.83334),
    'n' => m(0.0, 0.43056, 0.0, 0.0, 0.55556),
    'o' => m(0.0, 0.43056, 0.0, 0.0, 0.5),
    'p' => m(0.19444, 0.43056, 0.0, 0.0, 0.55556),
    'q' => m(0.19444, 0.43056, 0.0, 0.0, 0.52778),
    'r' => m(0.0, 0.43056, 0.0, 0.0, 0.39167),
    's' => m(0.0, 0.43056, 0.0, 0.0, 0.39445),
    't' => m(0.0, 0.61508, 0.0, 0.0, 0.38889),
    'u' => m(0.0, 0.43056, 0.0, 0.0, 0.55556),
    'v' => m(0.0, 0.43056, 0.01389, 0.0, 0.52778),
    'w' => m(0.0, 0.43056, 0.01389, 0.0, 0.72222),
    'x' => m(0.0, 0.43056, 0.0, 0.0, 0.52778),
    'y' => m(0.19444, 0.43056, 0.01389, 0.0, 0.52778),
    'z' => m(0.0, 0.43056, 0.0, 0.0, 0.44445),
    '{' => m(0.25, 0.75, 0.0, 0.0, 0.5),
    '|' => m(0.25, 0.75, 0.0, 0.0, 0.27778),
    '}' => m(0.25, 0.75, 0.0, 0.0, 0.5),
    '~' => m(0.0, 0.31786, 0.0, 0.0, 0.5),
    '\u{00A0}' => m(0.0, 0.0, 0.0, 0.0, 0.25),
    '\u{00A7}' => m(0.19444, 0.69444, 0.0, 0.0, 0.44445),
    '\u{00A8}' => m(0.0, 0.66786, 0.0, 0.0, 0.5),
    '\u{00AC}' => m(0.0, 0.43056, 0.0, 0.0, 0.66667),
    '\u{00AF}' => m(0.0, 0.56778, 0.0, 0.0, 0.5),
    '\u{00B0}' => m(0.0, 0.69444, 0.0, 0.0, 0.75),
    '\u{00B1}' => m(0.08333, 0.58333, 0.0, 0.0, 0.77778),
    '\u{00B4}' => m(0.0, 0.69444, 0.0, 0.0, 0.5),
    '\u{00B6}' => m(0.19444, 0.69444, 0.0, 0.0, 0.61111),
    '\u{00D7}' => m(0.08333, 0.58333, 0.0, 0.0, 0.77778),
    '\u{00F7}' => m(0.08333, 0.58333, 0.0, 0.0, 0.77778),
    '\u{0131}' => m(0.0, 0.43056, 0.0, 0.0, 0.27778),
    '\u{0237}' => m(0.19444, 0.43056, 0.0, 0.0, 0.30556),
    '\u{02C6}' => m(0.0, 0.69444, 0.0, 0.0, 0.5),
    '\u{02C7}' => m(0.0, 0.62847, 0.0, 0.0, 0.5),
    '\u{02C9}' => m(0.0, 0.56778, 0.0, 0.0, 0.5),
    '\u{02CA}' => m(0.0, 0.69444, 0.0, 0.0, 0.5),
    '\u{02CB}' => m(0.0, 0.69444, 0.0, 0.0, 0.5),
    '\u{02D8}' => m(0.0, 0.69444, 0.0, 0.0, 0.5),
    '\u{02D9}' => m(0.0, 0.66786, 0.0, 0.0, 0.27778),
    '\u{02DA}' => m(0.0, 0.69444, 0.0, 0.0, 0.75),
    '\u{02DC}' => m(0.0, 0.66786, 0.0, 0.0, 0.5),
    '\u{0393}' => m(0.0, 0.68333, 0.0, 0.0, 0.625),
    '\u{0394}' => m(0.0, 0.68333, 0.0, 0.0, 0.83334),
    '\u{0398}' => m(0.0, 0.68333, 0.0, 0.0, 0.77778),
    '\u{039B}' => m(0.0, 0.68333, 0.0, 0.0, 0.69445),
    '\u{039E}' => m(0.0, 0.68333, 0.0, 0.0, 0.66667),
    '\u{03A0}' => m(0.0, 0.68333, 0.0, 0.0, 0.75),
    '\u{03A3}' => m(0.0, 0.68333, 0.0, 0.0, 0.72222),
    '\u{03A5}' => m(0.0, 0.68333, 0.0, 0.0, 0.77778),
    '\u{03A6}' => m(0.0, 0.68333, 0.0, 0.0, 0.72222),
    '\u{03A8}' => m(0.0, 0.68333, 0.0, 0.0, 0.77778),
    '\u{03A9}' => m(0.0, 0.68333, 0.0, 0.0, 0.72222),
    '\u{2013}' => m(0.0, 0.43056, 0.02778, 0.0, 0.5),
    '\u{2014}' => m(0.0, 0.43056, 0.02778, 0.0, 1.0),
    '\u{2018}' => m(0.0, 0.69444, 0.0, 0.0, 0.27778),
    '\u{2019}' => m(0.0, 0.69444, 0.0, 0.0, 0.27778),
    '\u{201C}' => m(0.0, 0.69444, 0.0, 0.0, 0.5),
    '\u{201D}' => m(0.0, 0.69444, 0.0, 0.0, 0.5),
    '\u{2020}' => m(0.19444, 0.69444, 0.0, 0.0, 0.44445),
    '\u{2021}' => m(0.19444, 0.69444, 0.0, 0.0, 0.44445),
    '\u{2026}' => m(0.0, 0.12, 0.0, 0.0, 1.172),
    '\u{2032}' => m(0.0, 0.55556, 0.0, 0.0, 0.275),
    '\u{20D7}' => m(0.0, 0.71444, 0.15382, 0.0, 0.5),
    '\u{210F}' => m(0.0, 0.68889, 0.0, 0.0, 0.54028),
    '\u{2111}' => m(0.0, 0.69444, 0.0, 0.0, 0.72222),
    '\u{2113}' => m(0.0, 0.69444, 0.0, 0.11111, 0.41667),
    '\u{2118}' => m(0.19444, 0.43056, 0.0, 0.11111, 0.63646),
    '\u{211C}' => m(0.0, 0.69444, 0.0, 0.0, 0.72222),
    '\u{2135}' => m(0.0, 0.69444, 0.0, 0.0, 0.61111),
    '\u{2190}' => m(0.0, 0.36687, 0.0, 0.0, 1.0),
    '\u{2191}' => m(0.19444, 0.69444, 0.0, 0.0, 0.5),
    '\u{2192}' => m(0.0, 0.36687, 0.0, 0.0, 1.0),
    '\u{2193}' => m(0.19444, 0.69444, 0.0, 0.0, 0.5),
    '\u{2194}' => m(0.0, 0.36687, 0.0, 0.0, 1.0),
    '\u{2195}' => m(0.25, 0.75, 0.0, 0.0, 0.5),
    '\u{2196}' => m(0.19444, 0.69444, 0.0, 0.0, 1.0),
    '\u{2197}' => m(0.19444, 0.69444, 0.0, 0.0, 1.0),
    '\u{2198}' => m(0.19444, 0.69444, 0.0, 0.0, 1.0),
    '\u{2199}' => m(0.19444, 0.69444, 0.0, 0.0, 1.0),
    '\u{21A6}' => m(0.011, 0.511, 0.0, 0.0, 1.0),
    '\u{21D0}' => m(0.0, 0.36687, 0.0, 0.0, 1.0),
    '\u{21D1}' => m(0.19444, 0.69444, 0.0, 0.0, 0.61111),
    '\u{21D2}' => m(0.0, 0.36687, 0.0, 0.0, 1.0),
    '\u{21D3}' => m(0.19444, 0.69444, 0.0, 0.0, 0.61111),
    '\u{21D4}' => m(0.0, 0.36687, 0.0, 0.0, 1.0),
    '\u{21D5}' => m(0.25, 0.75, 0.0, 0.0, 0.61111),
    '\u{2200}' => m(0.0, 0.69444, 0.0, 0.0, 0.55556),
    '\u{2202}' => m(0.0, 0.69444, 0.05556, 0.08334, 0.5309),
    '\u{2203}' => m(0.0, 0.69444, 0.0, 0.0, 0.55556),
    '\u{2205}' => m(0.05556, 0.75, 0.0, 0.0, 0.5),
    '\u{2207}' => m(0.0, 0.68333, 0.0, 0.0, 0.83334),
    '\u{2208}' => m(0.0391, 0.5391, 0.0, 0.0, 0.66667),
    '\u{2209}' => m(0.19444, 0.69444, 0.0, 0.0, 0.66667),
    '\u{220B}' => m(0.0391, 0.5391, 0.0, 0.0, 0.66667),
    '\u{2212}' => m(0.08333, 0.58333, 0.0, 0.0, 0.77778),
    '\u{2213}' => m(0.08333, 0.58333, 0.0, 0.0, 0.77778),
    '\u{2215}' => m(0.25, 0.75, 0.0, 0.0, 0.5),
    '\u{2216}' => m(0.25, 0.75, 0.0, 0.0, 0.5),
    '\u{2217}' => m(0.0, 0.46528, 0.0, 0.0, 0.5),
    '\u{2218}' => m(0.0, 0.44445, 0.0, 0.0, 0.5),
    '\u{2219}' => m(0.0, 0.44445, 0.0, 0.0, 0.5),
    '\u{221A}' => m(0.2, 0.8, 0.0, 0.0, 0.83334),
    '\u{221D}' => m(0.0, 0.43056, 0.0, 0.0, 0.77778),
    '\u{221E}' => m(0.0, 0.43056, 0.0, 0.0, 1.0),
    '\u{2220}' => m(0.0, 0.69224, 0.0, 0.0, 0.72222),
    '\u{2223}' => m(0.25, 0.75, 0.0, 0.0, 0.27778),
    '\u{2225}' => m(0.25, 0.75, 0.0, 0.0, 0.5),
    '\u{2227}' => m(0.0, 0.55556, 0.0, 0.0, 0.66667),
    '\u{2228}' => m(0.0, 0.55556, 0.0, 0.0, 0.66667),
    '\u{2229}' => m(0.0, 0.55556, 0.0, 0.0, 0.66667),
    '\u{222A}' => m(0.0, 0.55556, 0.0, 0.0, 0.66667),
    '\u{222B}' => m(0.19444, 0.69444, 0.11111, 0.0, 0.41667),
    '\u{223C}' => m(0.0, 0.36687, 0.0, 0.0, 0.77778),
    '\u{2240}' => m(0.19444, 0.69444, 0.0, 0.0, 0.27778),
    '\u{2243}' => m(0.0, 0.46375, 0.0, 0.0, 0.77778),
    '\u{2245}' => m(0.0, 0.589, 0.0, 0.0, 0.77778),
    '\u{2248}' => m(0.0, 0.48312, 0.0, 0.0, 0.77778),
    '\u{224D}' => m(0.0, 0.46375, 0.0, 0.0, 0.77778),
    '\u{2250}' => m(0.0, 0.673, 0.0, 0.0, 0.77778),
    '\u{2260}' => m(0.215, 0.716, 0.0, 0.0, 0.77778),
    '\u{2261}' => m(0.0, 0.46375, 0.0, 0.0, 0.77778),
    '\u{2264}' => m(0.13597, 0.63597, 0.0, 0.0, 0.77778),
    '\u{2265}' => m(0.13597, 0.63597, 0.0, 0.0, 0.77778),
    '\u{226A}' => m(0.0391, 0.5391, 0.0, 0.0, 1.0),
    '\u{226B}' => m(0.0391, 0.5391, 0.0, 0.0, 1.0),
    '\u{227A}' => m(0.0391, 0.5391, 0.0, 0.0, 0.77778),
    '\u{227B}' => m(0.0391, 0.5391, 0.0, 0.0, 0.77778),
    '\u{2282}' => m(0.0391, 0.5391, 0.0, 0.0, 0.77778),
    '\u{2283}' => m(0.0391, 0.5391, 0.0, 0.0, 0.77778),
    '\u{2286}' => m(0.13597, 0.63597, 0.0, 0.0, 0.77778),
    '\u{2287}' => m(0.13597, 0.63597, 0.0, 0.0, 0.77778),
    '\u{228E}' => m(0.0, 0.55556, 0.0, 0.0, 0.66667),
    '\u{2293}' => m(0.0, 0.55556, 0.0, 0.0, 0.66667),
    '\u{2294}' => m(0.0, 0.55556, 0.0, 0.0, 0.66667),
    '\u{2295}' => m(0.08333, 0.58333, 0.0, 0.0, 0.77778),
    '\u{2296}' => m(0.08333, 0.58333, 0.0, 0.0, 0.77778),
    '\u{2297}' => m(0.08333, 0.58333, 0.0, 0.0, 0.77778),
    '\u{2298}' => m(0.08333, 0.58333, 0.0, 0.0, 0.77778),
    '\u{2299}' => m(0.08333, 0.58333, 0.0, 0.0, 0.77778),
    '\u{22A2}' => m(0.0, 0.69444, 0.0, 0.0, 0.61111),
    '\u{22A3}' => m(0.0, 0.69444, 0.0, 0.0, 0.61111),
    '\u{22A4}' => m(0.0, 0.69444, 0.0, 0.0, 0.77778),
    '\u{22A5}' => m(0.0, 0.69444, 0.0, 0.0, 0.77778),
    '\u{22A8}' => m(0.249, 0.75, 0.0, 0.0, 0.867),
    '\u{22C4}' => m(0.0, 0.44445, 0.0, 0.0, 0.5),
    '\u{22C5}' => m(0.0, 0.44445, 0.0, 0.0, 0.27778),
    '\u{22C6}' => m(0.0, 0.46528, 0.0, 0.0, 0.5),
    '\u{22EE}' => m(0.03, 0.9, 0.0, 0.0, 0.278),
    '\u{22EF}' => m(0.0, 0.31, 0.0, 0.0, 1.172),
    '\u{22F1}' => m(0.0, 0.82, 0.0, 0.0, 1.282),
    '\u{2308}' => m(0.25, 0.75, 0.0, 0.0, 0.44445),
    '\u{2309}' => m(0.25, 0.75, 0.0, 0.0, 0.44445),
    '\u{230A}' => m(0.25, 0.75, 0.0, 0.0, 0.44445),
    '\u{230B}' => m(0.25, 0.75, 0.0, 0.0, 0.44445),
    '\u{2322}' => m(0.0, 0.35764, 0.0, 0.0, 1.0),
    '\u{2323}' => m(0.0, 0.35764, 0.0, 0.0, 1.0),
    '\u{25B3}' => m(0.19444, 0.69444, 0.0, 0.0, 0.88889),
    '\u{25EF}' => m(0.19444, 0.69444, 0.0, 0.0, 1.0),
    '\u{2660}' => m(0.12963, 0.69444, 0.0, 0.0, 0.77778),
    '\u{2661}' => m(0.12963, 0.69444, 0.0, 0.0, 0.77778),
    '\u{2662}' => m(0.12963, 0.69444, 0.0, 0.0, 0.77778),
    '\u{2663}' => m(0.12963, 0.69444, 0.0, 0.0, 0.77778),
    '\u{266D}' => m(0.0, 0.75, 0.0, 0.0, 0.38889),
    '\u{266E}' => m(0.19444, 0.69444, 0.0, 0.0, 0.38889),
    '\u{266F}' => m(0.19444, 0.69444, 0.0, 0.0, 0.38889),
    '\u{27E8}' => m(0.25, 0.75, 0.0, 0.0, 0.38889),
    '\u{27E9}' => m(0.25, 0.75, 0.0, 0.0, 0.38889),
    '\u{27F5}' => m(0.011, 0.511, 0.0, 0.0, 1.609),
    '\u{27F6}' => m(0.011, 0.511, 0.0, 0.0, 1.638),
    '\u{27F7}' => m(0.011, 0.511, 0.0, 0.0, 1.859),
    '\u{27F8}' => m(0.024, 0.525, 0.0, 0.0, 1.609),
    '\u{27F9}' => m(0.024, 0.525, 0.0, 0.0, 1.638),
    '\u{27FA}' => m(0.024, 0.525, 0.0, 0.0, 1.858),
    '\u{27FC}' => m(0.011, 0.511, 0.0, 0.0, 1.638),
    '\u{2A3F}' => m(0.0, 0.68333, 0.0, 0.0, 0.75),
    '\u{2AAF}' => m(0.13597, 0.63597, 0.0, 0.0, 0.77778),
    '\u{2AB0}' => m(0.13597, 0.63597, 0.0, 0.0, 0.77778),
};

static MAIN_BOLD: phf::Map<char, CharacterMetrics> = phf_map! {
    '\u{0020}' => m(0.0, 0.0, 0.0, 0.0, 0.25),
    '!' => m(0.0, 0.69444, 0.0, 0.0, 0.35),
    '(' => m(0.25, 0.75, 0.0, 0.0, 0.44722),
    ')' => m(0.25, 0.75, 0.0, 0.0, 0.44722),
    '+' => m(0.13333, 0.63333, 0.0, 0.0, 0.89444),
    ',' => m(0.19444, 0.15556, 0.0, 0.0, 0.31944),
    '-' => m(0.0, 0.44444, 0.0, 0.0, 0.38333),
    '.' => m(0.0, 0.15556, 0.0, 0.0, 0.31944),
    '/' => m(0.25, 0.75, 0.0, 0.0, 0.575),
    '0' => m(0.0, 0.64444, 0.0, 0.0, 0.575),
    '1' => m(0.0, 0.64444, 0.0, 0.0, 0.575),
    '2' => m(0.0, 0.64444, 0.0, 0.0, 0.575),
    '3' => m(0.0, 0.64444, 0.0, 0.0, 0.575),
    '4' => m(0.0, 0.64444, 0.0, 0.0, 0.575),
    '5' => m(0.0, 0.64444, 0.0, 0.0, 0.575),
    '6' => m(0.0, 0.64444, 0.0, 0.0, 0.575),
    '7' => m(0.0, 0.64444, 0.0, 0.0, 0.575),
    '8' => m(0.0, 0.64444, 0.0, 0.0, 0.575),
    '9' => m(0.0, 0.64444, 0.0, 0.0, 0.575),
    ':' => m(0.0, 0.44444, 0.0, 0.0, 0.31944),
    ';' => m(0.19444, 0.44444, 0.0, 0.0, 0.31944),
    '=' => m(0.0, 0.39364, 0.0, 0.0, 0.89444),
    'A' => m(0.0, 0.68611, 0.0, 0.0, 0.86944),
    'B' => m(0.0, 0.68611, 0.0, 0.0, 0.81805),
    'C' => m(0.0, 0.68611, 0.0, 0.0, 0.83055),
    'D' => m(0.0, 0.68611, 0.0, 0.0, 0.88194),
    'E' => m(0.0, 0.68611, 0.0, 0.0, 0.75555),
    'F' => m(0.0, 0.68611, 0.0, 0.0, 0.72361),
    'G' => m(0.0, 0.68611, 0.0, 0.0, 0.90416),
    'H' => m(0.0, 0.68611, 0.0, 0.0, 0.9),
    'I' => m(0.0, 0.68611, 0.0, 0.0, 0.43611),
    'J' => m(0.0, 0.68611, 0.0, 0.0, 0.59444),
    'K' => m(0.0, 0.68611, 0.0, 0.0, 0.90138),
    'L' => m(0.0, 0.68611, 0.0, 0.0, 0.69166),
    'M' => m(0.0, 0.68611, 0.0, 0.0, 1.09166),
    'N' => m(0.0, 0.68611, 0.0, 0.0, 0.9),
    'O' => m(0.0, 0.68611, 0.0, 0.0, 0.86388),
    'P' => m(0.0, 0.68611, 0.0, 0.0, 0.78611),
    'Q' => m(0.19444, 0.68611, 0.0, 0.0, 0.86388),
    'R' => m(0.0, 0.68611, 0.0, 0.0, 0.8625),
    'S' => m(0.0, 0.68611, 0.0, 0.0, 0.63889),
    'T' => m(0.0, 0.68611, 0.0, 0.0, 0.8),
    'U' => m(0.0, 0.68611, 0.0, 0.0, 0.88472),
    'V' => m(0.0, 0.68611, 0.01597, 0.0, 0.86944),
    'W' => m(0.0, 0.68611, 0.01597, 0.0, 1.18888),
    'X' => m(0.0, 0.68611, 0.0, 0.0, 0.86944),
    'Y' => m(0.0, 0.68611, 0.02875, 0.0, 0.86944),
    'Z' => m(0.0, 0.68611, 0.0, 0.0, 0.70277),
    '[' => m(0.25, 0.75, 0.0, 0.0, 0.31944),
    ']' => m(0.25, 0.75, 0.0, 0.0, 0.31944),
    'a' => m(0.0, 0.44444, 0.0, 0.0, 0.55902),
    'b' => m(0.0, 0.69444, 0.0, 0.0, 0.63889),
    'c' => m(0.0, 0.44444, 0.0, 0.0, 0.51111),
    'd' => m(0.0, 0.69444, 0.0, 0.0, 0.63889),
    'e' => m(0.0, 0.44444, 0.0, 0.0, 0.52708),
    'f' => m(0.0, 0.69444, 0.10903, 0.0, 0.38333),
    'g' => m(0.19444, 0.44444, 0.01597, 0.0, 0.575),
    'h' => m(0.0, 0.69444, 0.0, 0.0, 0.63889),
    'i' => m(0.0, 0.69444, 0.0, 0.0, 0.31944),
    'j' => m(0.19444, 0.69444, 0.0, 0.0, 0.35139),
    'k' => m(0.0, 0.69444, 0.0, 0.0, 0.60694),
    'l' => m(0.0, 0.69444, 0.0, 0.0, 0.31944),
    'm' => m(0.0, 0.44444, 0.0, 0.0, 0.95833),
    'n' => m(0.0, 0.44444, 0.0, 0.0, 0.63889),
    'o' => m(0.0, 0.44444, 0.0, 0.0, 0.575),
    'p' => m(0.19444, 0.44444, 0.0, 0.0, 0.63889),
    'q' => m(0.19444, 0.44444, 0.0, 0.0, 0.60694),
    'r' => m(0.0, 0.44444, 0.0, 0.0, 0.47361),
    's' => m(0.0, 0.44444, 0.0, 0.0, 0.45361),
    't' => m(0.0, 0.63492, 0.0, 0.0, 0.44722),
    'u' => m(0.0, 0.44444, 0.0, 0.0, 0.63889),
    'v' => m(0.0, 0.44444, 0.01597, 0.0, 0.60694),
    'w' => m(0.0, 0.44444, 0.01597, 0.0, 0.83055),
    'x' => m(0.0, 0.44444, 0.0, 0.0, 0.60694),
    'y' => m(0.19444, 0.44444, 0.01597, 0.0, 0.60694),
    'z' => m(0.0, 0.44444, 0.0, 0.0, 0.51111),
    '\u{00A0}' => m(0.0, 0.0, 0.0, 0.0, 0.25),
    '\u{0393}' => m(0.0, 0.68611, 0.0, 0.0, 0.69166),
    '\u{0394}' => m(0.0, 0.68611, 0.0, 0.0, 0.95833),
    '\u{0398}' => m(0.0, 0.68611, 0.0, 0.0, 0.89444),
    '\u{039B}' => m(0.0, 0.68611, 0.0, 0.0, 0.80555),
    '\u{039E}' => m(0.0, 0.68611, 0.0, 0.0, 0.76666),
    '\u{03A0}' => m(0.0, 0.68611, 0.0, 0.0, 0.9),
    '\u{03A3}' => m(0.0, 0.68611, 0.0, 0.0, 0.83055),
    '\u{03A5}' => m(0.0, 0.68611, 0.0, 0.0, 0.89444),
    '\u{03A6}' => m(0.0, 0.68611, 0.0, 0.0, 0.83055),
    '\u{03A8}' => m(0.0, 0.68611, 0.0, 0.0, 0.89444),
    '\u{03A9}' => m(0.0, 0.68611, 0.0, 0.0, 0.83055),
};

static MAIN_ITALIC: phf::Map<char, CharacterMetrics> = phf_map! {
    '\u{0020}' => m(0.0, 0.0, 0.0, 0.0, 0.25),
    '!' => m(0.0, 0.69444, 0.12417, 0.0, 0.30667),
    '(' => m(0.25, 0.75, 0.16194, 0.0, 0.40889),
    ')' => m(0.25, 0.75, 0.03694, 0.0, 0.40889),
    ',' => m(0.19444, 0.10556, 0.0, 0.0, 0.30667),
    '-' => m(0.0, 0.43056, 0.02826, 0.0, 0.35778),
    '.' => m(0.0, 0.10556, 0.0, 0.0, 0.30667),
    '/' => m(0.25, 0.75, 0.16194, 0.0, 0.51111),
    '0' => m(0.0, 0.64444, 0.13556, 0.0, 0.51111),
    '1' => m(0.0, 0.64444, 0.13556, 0.0, 0.51111),
    '2' => m(0.0, 0.64444, 0.13556, 0.0, 0.51111),
    '3' => m(0.0, 0.64444, 0.13556, 0.0, 0.51111),
    '4' => m(0.19444, 0.64444, 0.13556, 0.0, 0.51111),
    '5' => m(0.0, 0.64444, 0.13556, 0.0, 0.51111),
    '6' => m(0.0, 0.64444, 0.13556, 0.0, 0.51111),
    '7' => m(0.19444, 0.64444, 0.13556, 0.0, 0.51111),
    '8' => m(0.0, 0.64444, 0.13556, 0.0, 0.51111),
    '9' => m(0.0, 0.64444, 0.13556, 0.0, 0.51111),
    ':' => m(0.0, 0.43056, 0.0582, 0.0, 0.30667),
    ';' => m(0.19444, 0.43056, 0.0582, 0.0, 0.30667),
    '?' => m(0.0, 0.69444, 0.1225, 0.0, 0.51111),
    'A' => m(0.0, 0.68333, 0.0, 0.0, 0.74333),
    'B' => m(0.0, 0.68333, 0.10257, 0.0, 0.70389),
    'C' => m(0.0, 0.68333, 0.14528, 0.0, 0.71555),
    'D' => m(0.0, 0.68333, 0.09403, 0.0, 0.755),
    'E' => m(0.0, 0.68333, 0.12028, 0.0, 0.67833),
    'F' => m(0.0, 0.68333, 0.13305, 0.0, 0.65277),
    'G' => m(0.0, 0.68333, 0.08722, 0.0, 0.77361),
    'H' => m(0.0, 0.68333, 0.16389, 0.0, 0.74333),
    'I' => m(0.0, 0.68333, 0.15806, 0.0, 0.38555),
    'J' => m(0.0, 0.68333, 0.14028, 0.0, 0.525),
    'K' => m(0.0, 0.68333, 0.14528, 0.0, 0.76888),
    'L' => m(0.0, 0.68333, 0.0, 0.0, 0.62722),
    'M' => m(0.0, 0.68333, 0.16389, 0.0, 0.89666),
    'N' => m(0.0, 0.68333, 0.16389, 0.0, 0.74333),
    'O' => m(0.0, 0.68333, 0.09403, 0.0, 0.76666),
    'P' => m(0.0, 0.68333, 0.10257, 0.0, 0.67833),
    'Q' => m(0.19444, 0.68333, 0.09403, 0.0, 0.76666),
    'R' => m(0.0, 0.68333, 0.03868, 0.0, 0.72944),
    'S' => m(0.0, 0.68333, 0.11972, 0.0, 0.56222),
    'T' => m(0.0, 0.68333, 0.13305, 0.0, 0.71555),
    'U' => m(0.0, 0.68333, 0.16389, 0.0, 0.74333),
    'V' => m(0.0, 0.68333, 0.18361, 0.0, 0.74333),
    'W' => m(0.0, 0.68333, 0.18361, 0.0, 0.99888),
    'X' => m(0.0, 0.68333, 0.15806, 0.0, 0.74333),
    'Y' => m(0.0, 0.68333, 0.19383, 0.0, 0.74333),
    'Z' => m(0.0, 0.68333, 0.14528, 0.0, 0.61333),
    'a' => m(0.0, 0.43056, 0.07671, 0.0, 0.51111),
    'b' => m(0.0, 0.69444, 0.06312, 0.0, 0.46),
    'c' => m(0.0, 0.43056, 0.05653, 0.0, 0.46),
    'd' => m(0.0, 0.69444, 0.10333, 0.0, 0.51111),
    'e' => m(0.0, 0.43056, 0.07514, 0.0, 0.46),
    'f' => m(0.19444, 0.69444, 0.21194, 0.0, 0.30667),
    'g' => m(0.19444, 0.43056, 0.08847, 0.0, 0.46),
    'h' => m(0.0, 0.69444, 0.07671, 0.0, 0.51111),
    'i' => m(0.0, 0.65536, 0.1019, 0.0, 0.30667),
    'j' => m(0.19444, 0.65536, 0.14467, 0.0, 0.30667),
    'k' => m(0.0, 0.69444, 0.10764, 0.0, 0.46),
    'l' => m(0.0, 0.69444, 0.10333, 0.0, 0.25555),
    'm' => m(0.0, 0.43056, 0.07671, 0.0, 0.81777),
    'n' => m(0.0, 0.43056, 0.07671, 0.0, 0.56222),
    'o' => m(0.0, 0.43056, 0.06312, 0.0, 0.51111),
    'p' => m(0.19444, 0.43056, 0.06312, 0.0, 0.51111),
    'q' => m(0.19444, 0.43056, 0.08847, 0.0, 0.46),
    'r' => m(0.0, 0.43056, 0.10764, 0.0, 0.42166),
    's' => m(0.0, 0.43056, 0.08208, 0.0, 0.40889),
    't' => m(0.0, 0.61508, 0.09486, 0.0, 0.33222),
    'u' => m(0.0, 0.43056, 0.07671, 0.0, 0.53666),
    'v' => m(0.0, 0.43056, 0.10764, 0.0, 0.46),
    'w' => m(0.0, 0.43056, 0.10764, 0.0, 0.66444),
    'x' => m(0.0, 0.43056, 0.12042, 0.0, 0.46389),
    'y' => m(0.19444, 0.43056, 0.08847, 0.0, 0.48555),
    'z' => m(0.0, 0.43056, 0.12292, 0.0, 0.40889),
    '\u{00A0}' => m(0.0, 0.0, 0.0, 0.0, 0.25),
};

static MATH_ITALIC: phf::Map<char, CharacterMetrics> = phf_map! {
    '\u{0020}' => m(0.0, 0.0, 0.0, 0.0, 0.25),
    '/' => m(0.19444, 0.69444, 0.0, 0.0, 0.5),
    'A' => m(0.0, 0.68333, 0.0, 0.13889, 0.75),
    'B' => m(0.0, 0.68333, 0.05017, 0.08334, 0.75851),
    'C' => m(0.0, 0.68333, 0.07153, 0.08334, 0.71472),
    'D' => m(0.0, 0.68333, 0.02778, 0.05556, 0.82792),
    'E' => m(0.0, 0.68333, 0.05764, 0.08334, 0.7382),
    'F' => m(0.0, 0.68333, 0.13889, 0.08334, 0.64306),
    'G' => m(0.0, 0.68333, 0.0, 0.08334, 0.78625),
    'H' => m(0.0, 0.68333, 0.08125, 0.05556, 0.83125),
    'I' => m(0.0, 0.68333, 0.07847, 0.11111, 0.43958),
    'J' => m(0.0, 0.68333, 0.09618, 0.16667, 0.55451),
    'K' => m(0.0, 0.68333, 0.07153, 0.05556, 0.84931),
    'L' => m(0.0, 0.68333, 0.0, 0.02778, 0.68056),
    'M' => m(0.0, 0.68333, 0.10903, 0.08334, 0.97014),
    'N' => m(0.0, 0.68333, 0.10903, 0.08334, 0.80347),
    'O' => m(0.0, 0.68333, 0.02778, 0.08334, 0.76278),
    'P' => m(0.0, 0.68333, 0.13889, 0.08334, 0.64201),
    'Q' => m(0.19444, 0.68333, 0.0, 0.08334, 0.79056),
    'R' => m(0.0, 0.68333, 0.00773, 0.08334, 0.75929),
    'S' => m(0.0, 0.68333, 0.05764, 0.08334, 0.6132),
    'T' => m(0.0, 0.68333, 0.13889, 0.08334, 0.58438),
    'U' => m(0.0, 0.68333, 0.10903, 0.02778, 0.68278),
    'V' => m(0.0, 0.68333, 0.22222, 0.0, 0.58333),
    'W' => m(0.0, 0.68333, 0.13889, 0.0, 0.94445),
    'X' => m(0.0, 0.68333, 0.07847, 0.08334, 0.82847),
    'Y' => m(0.0, 0.68333, 0.22222, 0.0, 0.58056),
    'Z' => m(0.0, 0.68333, 0.07153, 0.08334, 0.68264),
    'a' => m(0.0, 0.43056, 0.0, 0.0, 0.52859),
    'b' => m(0.0, 0.69444, 0.0, 0.0, 0.42917),
    'c' => m(0.0, 0.43056, 0.0, 0.05556, 0.43276),
    'd' => m(0.0, 0.69444, 0.0, 0.16667, 0.52049),
    'e' => m(0.0, 0.43056, 0.0, 0.05556, 0.46563),
    'f' => m(0.19444, 0.69444, 0.10764, 0.16667, 0.48959),
    'g' => m(0.19444, 0.43056, 0.03588, 0.02778, 0.47697),
    'h' => m(0.0, 0.69444, 0.0, 0.0, 0.57616),
    'i' => m(0.0, 0.65952, 0.0, 0.0, 0.34451),
    'j' => m(0.19444, 0.65952, 0.05724, 0.0, 0.41181),
    'k' => m(0.0, 0.69444, 0.03148, 0.0, 0.5206),
    'l' => m(0.0, 0.69444, 0.01968, 0.08334, 0.29838),
    'm' => m(0.0, 0.43056, 0.0, 0.0, 0.87801),
    'n' => m(0.0, 0.43056, 0.0, 0.0, 0.60023),
    'o' => m(0.0, 0.43056, 0.0, 0.05556, 0.48472),
    'p' => m(0.19444, 0.43056, 0.0, 0.08334, 0.50313),
    'q' => m(0.19444, 0.43056, 0.03588, 0.08334, 0.44641),
    'r' => m(0.0, 0.43056, 0.02778, 0.05556, 0.45116),
    's' => m(0.0, 0.43056, 0.0, 0.05556, 0.46875),
    't' => m(0.0, 0.61508, 0.0, 0.08334, 0.36111),
    'u' => m(0.0, 0.43056, 0.0, 0.02778, 0.57246),
    'v' => m(0.0, 0.43056, 0.03588, 0.02778, 0.48472),
    'w' => m(0.0, 0.43056, 0.02691, 0.08334, 0.71592),
    'x' => m(0.0, 0.43056, 0.0, 0.02778, 0.57153),
    'y' => m(0.19444, 0.43056, 0.03588, 0.05556, 0.49028),
    'z' => m(0.0, 0.43056, 0.04398, 0.05556, 0.46505),
    '\u{00A0}' => m(0.0, 0.0, 0.0, 0.0, 0.25),
    '\u{0131}' => m(0.0, 0.43056, 0.0, 0.02778, 0.32246),
    '\u{0237}' => m(0.19444, 0.43056, 0.0, 0.08334, 0.38403),
    '\u{0393}' => m(0.0, 0.68333, 0.13889, 0.08334, 0.61528),
    '\u{0394}' => m(0.0, 0.68333, 0.0, 0.16667, 0.83334),
    '\u{0398}' => m(0.0, 0.68333, 0.02778, 0.08334, 0.76278),
    '\u{039B}' => m(0.0, 0.68333, 0.0, 0.16667, 0.69445),
    '\u{039E}' => m(0.0, 0.68333, 0.07569, 0.08334, 0.74236),
    '\u{03A0}' => m(0.0, 0.68333, 0.08125, 0.05556, 0.83125),
    '\u{03A3}' => m(0.0, 0.68333, 0.05764, 0.08334, 0.77986),
    '\u{03A5}' => m(0.0, 0.68333, 0.13889, 0.0, 0.58333),
    '\u{03A6}' => m(0.0, 0.68333, 0.0, 0.08334, 0.66667),
    '\u{03A8}' => m(0.0, 0.68333, 0.11, 0.05556, 0.61222),
    '\u{03A9}' => m(0.0, 0.68333, 0.05017, 0.08334, 0.7724),
    '\u{03B1}' => m(0.0, 0.43056, 0.0037, 0.02778, 0.6397),
    '\u{03B2}' => m(0.19444, 0.69444, 0.05278, 0.08334, 0.56563),
    '\u{03B3}' => m(0.19444, 0.43056, 0.05556, 0.0, 0.51773),
    '\u{03B4}' => m(0.0, 0.69444, 0.03785, 0.05556, 0.44444),
    '\u{03B5}' => m(0.0, 0.43056, 0.0, 0.08334, 0.46632),
    '\u{03B6}' => m(0.19444, 0.69444, 0.07378, 0.08334, 0.4375),
    '\u{03B7}' => m(0.19444, 0.43056, 0.03588, 0.05556, 0.49653),
    '\u{03B8}' => m(0.0, 0.69444, 0.02778, 0.08334, 0.46944),
    '\u{03B9}' => m(0.0, 0.43056, 0.0, 0.05556, 0.35394),
    '\u{03BA}' => m(0.0, 0.43056, 0.0, 0.0, 0.57616),
    '\u{03BB}' => m(0.0, 0.69444, 0.0, 0.0, 0.58334),
    '\u{03BC}' => m(0.19444, 0.43056, 0.0, 0.02778, 0.60255),
    '\u{03BD}' => m(0.0, 0.43056, 0.06366, 0.02778, 0.49398),
    '\u{03BE}' => m(0.19444, 0.69444, 0.04601, 0.11111, 0.4375),
    '\u{03BF}' => m(0.0, 0.43056, 0.0, 0.05556, 0.48472),
    '\u{03C0}' => m(0.0, 0.43056, 0.03588, 0.0, 0.57003),
    '\u{03C1}' => m(0.19444, 0.43056, 0.0, 0.08334, 0.51702),
    '\u{03C2}' => m(0.09722, 0.43056, 0.07986, 0.08334, 0.36285),
    '\u{03C3}' => m(0.0, 0.43056, 0.03588, 0.0, 0.57141),
    '\u{03C4}' => m(0.0, 0.43056, 0.1132, 0.02778, 0.43715),
    '\u{03C5}' => m(0.0, 0.43056, 0.03588, 0.02778, 0.54028),
    '\u{03C6}' => m(0.19444, 0.43056, 0.0, 0.08334, 0.65417),
    '\u{03C7}' => m(0.19444, 0.43056, 0.0, 0.05556, 0.62569),
    '\u{03C8}' => m(0.19444, 0.69444, 0.03588, 0.11111, 0.65139),
    '\u{03C9}' => m(0.0, 0.43056, 0.03588, 0.0, 0.62245),
    '\u{03D1}' => m(0.0, 0.69444, 0.0, 0.08334, 0.59144),
    '\u{03D5}' => m(0.19444, 0.69444, 0.0, 0.08334, 0.59583),
    '\u{03D6}' => m(0.0, 0.43056, 0.02778, 0.0, 0.82813),
    '\u{03F1}' => m(0.19444, 0.43056, 0.0, 0.08334, 0.5171),
    '\u{03F5}' => m(0.0, 0.43056, 0.0, 0.05556, 0.40568),
};

static AMS_REGULAR: phf::Map<char, CharacterMetrics> = phf_map! {
    '\u{0020}' => m(0.0, 0.0, 0.0, 0.0, 0.25),
    'A' => m(0.0, 0.68889, 0.0, 0.0, 0.72222),
    'B' => m(0.0, 0.68889, 0.0, 0.0, 0.66667),
    'C' => m(0.0, 0.68889, 0.0, 0.0, 0.72222),
    'D' => m(0.0, 0.68889, 0.0, 0.0, 0.72222),
    'E' => m(0.0, 0.68889, 0.0, 0.0, 0.66667),
    'F' => m(0.0, 0.68889, 0.0, 0.0, 0.61111),
    'G' => m(0.0, 0.68889, 0.0, 0.0, 0.77778),
    'H' => m(0.0, 0.68889, 0.0, 0.0, 0.77778),
    'I' => m(0.0, 0.68889, 0.0, 0.0, 0.38889),
    'J' => m(0.16667, 0.68889, 0.0, 0.0, 0.5),
    'K' => m(0.0, 0.68889, 0.0, 0.0, 0.77778),
    'L' => m(0.0, 0.68889, 0.0, 0.0, 0.66667),
    'M' => m(0.0, 0.68889, 0.0, 0.0, 0.94445),
    'N' => m(0.0, 0.68889, 0.0, 0.0, 0.72222),
    'O' => m(0.16667, 0.68889, 0.0, 0.0, 0.77778),
    'P' => m(0.0, 0.68889, 0.0, 0.0, 0.61111),
    'Q' => m(0.16667, 0.68889, 0.0, 0.0, 0.77778),
    'R' => m(0.0, 0.68889, 0.0, 0.0, 0.72222),
    'S' => m(0.0, 0.68889, 0.0, 0.0, 0.55556),
    'T' => m(0.0, 0.68889, 0.0, 0.0, 0.66667),
    'U' => m(0.0, 0.68889, 0.0, 0.0, 0.72222),
    'V' => m(0.0, 0.68889, 0.0, 0.0, 0.72222),
    'W' => m(0.0, 0.68889, 0.0, 0.0, 1.0),
    'X' => m(0.0, 0.68889, 0.0, 0.0, 0.72222),
    'Y' => m(0.0, 0.68889, 0.0, 0.0, 0.72222),
    'Z' => m(0.0, 0.68889, 0.0, 0.0, 0.66667),
    'k' => m(0.0, 0.68889, 0.0, 0.0, 0.55556),
    '\u{00A0}' => m(0.0, 0.0, 0.0, 0.0, 0.25),
    '\u{2204}' => m(0.08556, 0.77, 0.0, 0.0, 0.55556),
    '\u{2234}' => m(0.0, 0.69224, 0.0, 0.0, 0.66667),
    '\u{2235}' => m(0.0, 0.69224, 0.0, 0.0, 0.66667),
    '\u{2272}' => m(0.22958, 0.72958, 0.0, 0.0, 0.77778),
    '\u{2273}' => m(0.22958, 0.72958, 0.0, 0.0, 0.77778),
    '\u{228A}' => m(0.13597, 0.63597, 0.0, 0.0, 0.77778),
    '\u{228B}' => m(0.13597, 0.63597, 0.0, 0.0, 0.77778),
    '\u{2A7D}' => m(0.13597, 0.63597, 0.0, 0.0, 0.77778),
    '\u{2A7E}' => m(0.13597, 0.63597, 0.0, 0.0, 0.77778),
};

static SIZE1: phf::Map<char, CharacterMetrics> = phf_map! {
    '(' => m(0.35001, 0.85, 0.0, 0.0, 0.45834),
    ')' => m(0.35001, 0.85, 0.0, 0.0, 0.45834),
    '/' => m(0.35001, 0.85, 0.0, 0.0, 0.57778),
    '[' => m(0.35001, 0.85, 0.0, 0.0, 0.41667),
    '\\' => m(0.35001, 0.85, 0.0, 0.0, 0.57778),
    ']' => m(0.35001, 0.85, 0.0, 0.0, 0.41667),
    '^' => m(0.0, 0.72222, 0.0, 0.0, 0.55556),
    '{' => m(0.35001, 0.85, 0.0, 0.0, 0.58334),
    '}' => m(0.35001, 0.85, 0.0, 0.0, 0.58334),
    '~' => m(0.0, 0.72222, 0.0, 0.0, 0.55556),
    '\u{02C6}' => m(0.0, 0.72222, 0.0, 0.0, 0.55556),
    '\u{02DC}' => m(0.0, 0.72222, 0.0, 0.0, 0.55556),
    '\u{2016}' => m(0.0, 0.601, 0.0, 0.0, 0.77778),
    '\u{2191}' => m(0.0, 0.6, 0.0, 0.0, 0.66667),
    '\u{2193}' => m(0.0, 0.6, 0.0, 0.0, 0.66667),
    '\u{21D1}' => m(0.0, 0.6, 0.0, 0.0, 0.77778),
    '\u{21D3}' => m(0.0, 0.6, 0.0, 0.0, 0.77778),
    '\u{220F}' => m(0.25001, 0.75, 0.0, 0.0, 0.94445),
    '\u{2210}' => m(0.25001, 0.75, 0.0, 0.0, 0.94445),
    '\u{2211}' => m(0.25001, 0.75, 0.0, 0.0, 1.05556),
    '\u{221A}' => m(0.35001, 0.85, 0.0, 0.0, 1.0),
    '\u{2223}' => m(0.0, 0.606, 0.0, 0.0, 0.33333),
    '\u{2225}' => m(0.0, 0.606, 0.0, 0.0, 0.55556),
    '\u{222B}' => m(0.30612, 0.805, 0.19445, 0.0, 0.47222),
    '\u{222C}' => m(0.30612, 0.805, 0.19445, 0.0, 0.83334),
    '\u{222D}' => m(0.30612, 0.805, 0.19445, 0.0, 1.19445),
    '\u{222E}' => m(0.30612, 0.805, 0.19445, 0.0, 0.47222),
    '\u{22C0}' => m(0.25001, 0.75, 0.0, 0.0, 0.83334),
    '\u{22C1}' => m(0.25001, 0.75, 0.0, 0.0, 0.83334),
    '\u{22C2}' => m(0.25001, 0.75, 0.0, 0.0, 0.83334),
    '\u{22C3}' => m(0.25001, 0.75, 0.0, 0.0, 0.83334),
    '\u{2308}' => m(0.35001, 0.85, 0.0, 0.0, 0.47222),
    '\u{2309}' => m(0.35001, 0.85, 0.0, 0.0, 0.47222),
    '\u{230A}' => m(0.35001, 0.85, 0.0, 0.0, 0.47222),
    '\u{230B}' => m(0.35001, 0.85, 0.0, 0.0, 0.47222),
    '\u{23D0}' => m(0.0, 0.601, 0.0, 0.0, 0.66667),
    '\u{27E8}' => m(0.35001, 0.85, 0.0, 0.0, 0.47222),
    '\u{27E9}' => m(0.35001, 0.85, 0.0, 0.0, 0.47222),
    '\u{2A00}' => m(0.25001, 0.75, 0.0, 0.0, 1.11111),
    '\u{2A01}' => m(0.25001, 0.75, 0.0, 0.0, 1.11111),
    '\u{2A02}' => m(0.25001, 0.75, 0.0, 0.0, 1.11111),
    '\u{2A04}' => m(0.25001, 0.75, 0.0, 0.0, 0.83334),
    '\u{2A06}' => m(0.25001, 0.75, 0.0, 0.0, 0.83334),
};

static SIZE2: phf::Map<char, CharacterMetrics> = phf_map! {
    '(' => m(0.65002, 1.15, 0.0, 0.0, 0.59722),
    ')' => m(0.65002, 1.15, 0.0, 0.0, 0.59722),
    '/' => m(0.65002, 1.15, 0.0, 0.0, 0.81111),
    '[' => m(0.65002, 1.15, 0.0, 0.0, 0.47222),
    '\\' => m(0.65002, 1.15, 0.0, 0.0, 0.81111),
    ']' => m(0.65002, 1.15, 0.0, 0.0, 0.47222),
    '^' => m(0.0, 0.75, 0.0, 0.0, 1.0),
    '{' => m(0.65002, 1.15, 0.0, 0.0, 0.66667),
    '}' => m(0.65002, 1.15, 0.0, 0.0, 0.66667),
    '~' => m(0.0, 0.75, 0.0, 0.0, 1.0),
    '\u{02C6}' => m(0.0, 0.75, 0.0, 0.0, 1.0),
    '\u{02DC}' => m(0.0, 0.75, 0.0, 0.0, 1.0),
    '\u{220F}' => m(0.55001, 1.05, 0.0, 0.0, 1.27778),
    '\u{2210}' => m(0.55001, 1.05, 0.0, 0.0, 1.27778),
    '\u{2211}' => m(0.55001, 1.05, 0.0, 0.0, 1.44445),
    '\u{221A}' => m(0.65002, 1.15, 0.0, 0.0, 1.0),
    '\u{222B}' => m(0.86225, 1.36, 0.44445, 0.0, 0.55556),
    '\u{222C}' => m(0.86225, 1.36, 0.44445, 0.0, 1.11111),
    '\u{222D}' => m(0.86225, 1.36, 0.44445, 0.0, 1.66667),
    '\u{222E}' => m(0.86225, 1.36, 0.44445, 0.0, 0.55556),
    '\u{22C0}' => m(0.55001, 1.05, 0.0, 0.0, 1.11111),
    '\u{22C1}' => m(0.55001, 1.05, 0.0, 0.0, 1.11111),
    '\u{22C2}' => m(0.55001, 1.05, 0.0, 0.0, 1.11111),
    '\u{22C3}' => m(0.55001, 1.05, 0.0, 0.0, 1.11111),
    '\u{2308}' => m(0.65002, 1.15, 0.0, 0.0, 0.52778),
    '\u{2309}' => m(0.65002, 1.15, 0.0, 0.0, 0.52778),
    '\u{230A}' => m(0.65002, 1.15, 0.0, 0.0, 0.52778),
    '\u{230B}' => m(0.65002, 1.15, 0.0, 0.0, 0.52778),
    '\u{27E8}' => m(0.65002, 1.15, 0.0, 0.0, 0.61111),
    '\u{27E9}' => m(0.65002, 1.15, 0.0, 0.0, 0.61111),
    '\u{2A00}' => m(0.55001, 1.05, 0.0, 0.0, 1.51112),
    '\u{2A01}' => m(0.55001, 1.05, 0.0, 0.0, 1.51112),
    '\u{2A02}' => m(0.55001, 1.05, 0.0, 0.0, 1.51112),
    '\u{2A04}' => m(0.55001, 1.05, 0.0, 0.0, 1.11111),
    '\u{2A06}' => m(0.55001, 1.05, 0.0, 0.0, 1.11111),
};

static SIZE3: phf::Map<char, CharacterMetrics> = phf_map! {
    '(' => m(0.95003, 1.45, 0.0, 0.0, 0.73611),
    ')' => m(0.95003, 1.45, 0.0, 0.0, 0.73611),
    '/' => m(0.95003, 1.45, 0.0, 0.0, 1.04445),
    '[' => m(0.95003, 1.45, 0.0, 0.0, 0.52778),
    '\\' => m(0.95003, 1.45, 0.0, 0.0, 1.04445),
    ']' => m(0.95003, 1.45, 0.0, 0.0, 0.52778),
    '^' => m(0.0, 0.75, 0.0, 0.0, 1.44445),
    '{' => m(0.95003, 1.45, 0.0, 0.0, 0.75),
    '}' => m(0.95003, 1.45, 0.0, 0.0, 0.75),
    '~' => m(0.0, 0.75, 0.0, 0.0, 1.44445),
    '\u{02C6}' => m(0.0, 0.75, 0.0, 0.0, 1.44445),
    '\u{02DC}' => m(0.0, 0.75, 0.0, 0.0, 1.44445),
    '\u{221A}' => m(0.95003, 1.45, 0.0, 0.0, 1.0),
    '\u{2308}' => m(0.95003, 1.45, 0.0, 0.0, 0.58334),
    '\u{2309}' => m(0.95003, 1.45, 0.0, 0.0, 0.58334),
    '\u{230A}' => m(0.95003, 1.45, 0.0, 0.0, 0.58334),
    '\u{230B}' => m(0.95003, 1.45, 0.0, 0.0, 0.58334),
    '\u{27E8}' => m(0.95003, 1.45, 0.0, 0.0, 0.75),
    '\u{27E9}' => m(0.95003, 1.45, 0.0, 0.0, 0.75),
};

static SIZE4: phf::Map<char, CharacterMetrics> = phf_map! {
    '(' => m(1.25003, 1.75, 0.0, 0.0, 0.79167),
    ')' => m(1.25003, 1.75, 0.0, 0.0, 0.79167),
    '/' => m(1.25003, 1.75, 0.0, 0.0, 1.27778),
    '[' => m(1.25003, 1.75, 0.0, 0.0, 0.58334),
    '\\' => m(1.25003, 1.75, 0.0, 0.0, 1.27778),
    ']' => m(1.25003, 1.75, 0.0, 0.0, 0.58334),
    '^' => m(0.0, 0.825, 0.0, 0.0, 1.8889),
    '{' => m(1.25003, 1.75, 0.0, 0.0, 0.80556),
    '}' => m(1.25003, 1.75, 0.0, 0.0, 0.80556),
    '~' => m(0.0, 0.825, 0.0, 0.0, 1.8889),
    '\u{02C6}' => m(0.0, 0.825, 0.0, 0.0, 1.8889),
    '\u{02DC}' => m(0.0, 0.825, 0.0, 0.0, 1.8889),
    '\u{221A}' => m(1.25003, 1.75, 0.0, 0.0, 1.0),
    '\u{2308}' => m(1.25003, 1.75, 0.0, 0.0, 0.63889),
    '\u{2309}' => m(1.25003, 1.75, 0.0, 0.0, 0.63889),
    '\u{230A}' => m(1.25003, 1.75, 0.0, 0.0, 0.63889),
    '\u{230B}' => m(1.25003, 1.75, 0.0, 0.0, 0.63889),
    '\u{239B}' => m(0.64502, 1.155, 0.0, 0.0, 0.875),
    '\u{239C}' => m(0.0, 0.6, 0.0, 0.0, 0.875),
    '\u{239D}' => m(0.64502, 1.155, 0.0, 0.0, 0.875),
    '\u{239E}' => m(0.64502, 1.155, 0.0, 0.0, 0.875),
    '\u{239F}' => m(0.0, 0.6, 0.0, 0.0, 0.875),
    '\u{23A0}' => m(0.64502, 1.155, 0.0, 0.0, 0.875),
    '\u{23A1}' => m(0.64502, 1.155, 0.0, 0.0, 0.66667),
    '\u{23A2}' => m(0.0, 0.601, 0.0, 0.0, 0.66667),
    '\u{23A3}' => m(0.64502, 1.155, 0.0, 0.0, 0.66667),
    '\u{23A4}' => m(0.64502, 1.155, 0.0, 0.0, 0.66667),
    '\u{23A5}' => m(0.0, 0.601, 0.0, 0.0, 0.66667),
    '\u{23A6}' => m(0.64502, 1.155, 0.0, 0.0, 0.66667),
    '\u{23A7}' => m(0.0, 0.9, 0.0, 0.0, 0.88889),
    '\u{23A8}' => m(0.65002, 1.15, 0.0, 0.0, 0.88889),
    '\u{23A9}' => m(0.90001, 0.0, 0.0, 0.0, 0.88889),
    '\u{23AA}' => m(0.0, 0.3, 0.0, 0.0, 0.88889),
    '\u{23AB}' => m(0.0, 0.9, 0.0, 0.0, 0.88889),
    '\u{23AC}' => m(0.65002, 1.15, 0.0, 0.0, 0.88889),
    '\u{23AD}' => m(0.90001, 0.0, 0.0, 0.0, 0.88889),
    '\u{23B7}' => m(0.88502, 0.915, 0.0, 0.0, 1.05556),
    '\u{27E8}' => m(1.25003, 1.75, 0.0, 0.0, 0.80556),
    '\u{27E9}' => m(1.25003, 1.75, 0.0, 0.0, 0.80556),
    '\u{E000}' => m(0.0, 0.605, 0.0, 0.0, 1.05556),
    '\u{E001}' => m(0.0, 0.605, 0.0, 0.0, 1.05556),
};

/// Tables indexed by `FontName as usize`.
pub static FONT_TABLES: [&phf::Map<char, CharacterMetrics>; 9] = [
    &MAIN_REGULAR,
    &MAIN_BOLD,
    &MAIN_ITALIC,
    &MATH_ITALIC,
    &AMS_REGULAR,
    &SIZE1,
    &SIZE2,
    &SIZE3,
    &SIZE4,
];

/// Accented Latin-1 letters and the letter whose metrics they borrow.
pub static LATIN_FALLBACKS: phf::Map<char, char> = phf_map! {
    '\u{00C0}' => 'A',
    '\u{00C1}' => 'A',
    '\u{00C2}' => 'A',
    '\u{00C3}' => 'A',
    '\u{00C4}' => 'A',
    '\u{00C5}' => 'A',
    '\u{00C7}' => 'C',
    '\u{00C8}' => 'E',
    '\u{00C9}' => 'E',
    '\u{00CA}' => 'E',
    '\u{00CB}' => 'E',
    '\u{00CC}' => 'I',
    '\u{00CD}' => 'I',
    '\u{00CE}' => 'I',
    '\u{00CF}' => 'I',
    '\u{00D0}' => 'D',
    '\u{00D1}' => 'N',
    '\u{00D2}' => 'O',
    '\u{00D3}' => 'O',
    '\u{00D4}' => 'O',
    '\u{00D5}' => 'O',
    '\u{00D6}' => 'O',
    '\u{00D9}' => 'U',
    '\u{00DA}' => 'U',
    '\u{00DB}' => 'U',
    '\u{00DC}' => 'U',
    '\u{00DD}' => 'Y',
    '\u{00E0}' => 'a',
    '\u{00E1}' => 'a',
    '\u{00E2}' => 'a',
    '\u{00E3}' => 'a',
    '\u{00E4}' => 'a',
    '\u{00E5}' => 'a',
    '\u{00E7}' => 'c',
    '\u{00E8}' => 'e',
    '\u{00E9}' => 'e',
    '\u{00EA}' => 'e',
    '\u{00EB}' => 'e',
    '\u{00EC}' => 'i',
    '\u{00ED}' => 'i',
    '\u{00EE}' => 'i',
    '\u{00EF}' => 'i',
    '\u{00F0}' => 'd',
    '\u{00F1}' => 'n',
    '\u{00F2}' => 'o',
    '\u{00F3}' => 'o',
    '\u{00F4}' => 'o',
    '\u{00F5}' => 'o',
    '\u{00F6}' => 'o',
    '\u{00F9}' => 'u',
    '\u{00FA}' => 'u',
    '\u{00FB}' => 'u',
    '\u{00FC}' => 'u',
    '\u{00FD}' => 'y',
    '\u{00FF}' => 'y',
};
