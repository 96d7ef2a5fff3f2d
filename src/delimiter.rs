//! Delimiter sizing
//!
//! Delimiters come in three kinds: small ones drawn from Main-Regular at
//! script, scriptscript or text size; large ones from the Size1 to Size4
//! fonts; and stacked ones built from top, repeat, middle and bottom pieces
//! for anything taller than the largest glyph (TeXbook page 442).
//!
//! `\big` and friends ask for a fixed size with [`sized_delim`]; `\left`,
//! `\right`, fractions and radicals ask for a height with
//! [`custom_sized_delim`], which walks a sequence of candidates until one
//! is tall enough.

use phf::phf_map;

use crate::box_tree::{LayoutBox, VListChild, VListPosition, make_v_list};
use crate::build_common::{make_null_delimiter, make_symbol};
use crate::context::TexboxContext;
use crate::font_metrics::{CharacterMetrics, FontName};
use crate::options::Options;
use crate::style::Style;
use crate::symbols::Mode;
use crate::types::ParseError;

/// Target heights of `\big`, `\Big`, `\bigg` and `\Bigg`.
const SIZE_TO_MAX_HEIGHT: [f64; 5] = [0.0, 1.2, 1.8, 2.4, 3.0];

/// TeX's `\delimiterfactor`.
const DELIMITER_FACTOR: f64 = 901.0;

/// TeX's `\delimitershortfall`, in points.
const DELIMITER_SHORTFALL: f64 = 5.0;

/// Every delimiter name, and the character drawn for it.
static DELIMITERS: phf::Map<&'static str, char> = phf_map! {
    "(" => '(',
    "\\lparen" => '(',
    ")" => ')',
    "\\rparen" => ')',
    "[" => '[',
    "\\lbrack" => '[',
    "]" => ']',
    "\\rbrack" => ']',
    "\\{" => '{',
    "\\lbrace" => '{',
    "\\}" => '}',
    "\\rbrace" => '}',
    "<" => '\u{27E8}',
    "\\lt" => '\u{27E8}',
    "\\langle" => '\u{27E8}',
    "\u{27E8}" => '\u{27E8}',
    ">" => '\u{27E9}',
    "\\gt" => '\u{27E9}',
    "\\rangle" => '\u{27E9}',
    "\u{27E9}" => '\u{27E9}',
    "\\lfloor" => '\u{230A}',
    "\u{230A}" => '\u{230A}',
    "\\rfloor" => '\u{230B}',
    "\u{230B}" => '\u{230B}',
    "\\lceil" => '\u{2308}',
    "\u{2308}" => '\u{2308}',
    "\\rceil" => '\u{2309}',
    "\u{2309}" => '\u{2309}',
    "|" => '\u{2223}',
    "\\vert" => '\u{2223}',
    "\\lvert" => '\u{2223}',
    "\\rvert" => '\u{2223}',
    "\u{2223}" => '\u{2223}',
    "\\|" => '\u{2225}',
    "\\Vert" => '\u{2225}',
    "\\lVert" => '\u{2225}',
    "\\rVert" => '\u{2225}',
    "\u{2225}" => '\u{2225}',
    "/" => '/',
    "\\backslash" => '\\',
    "\\uparrow" => '\u{2191}',
    "\\downarrow" => '\u{2193}',
    "\\Uparrow" => '\u{21D1}',
    "\\Downarrow" => '\u{21D3}',
    "\\surd" => '\u{221A}',
};

/// How a delimiter grows past its largest glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Growth {
    /// Large glyphs first, then a stack.
    Large,
    /// Never stacked; the largest glyph is the limit.
    Never,
    /// Small glyphs, then straight to a stack.
    Always,
}

/// One candidate in a sizing sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelimiterType {
    /// A Main-Regular glyph at the base size of a style.
    Small(Style),
    /// A glyph from the `Size1`..`Size4` font.
    Large(usize),
    /// A stacked construction.
    Stack,
}

const SMALL: [DelimiterType; 3] = [
    DelimiterType::Small(Style::ScriptScript),
    DelimiterType::Small(Style::Script),
    DelimiterType::Small(Style::Text),
];

const LARGE: [DelimiterType; 4] = [
    DelimiterType::Large(1),
    DelimiterType::Large(2),
    DelimiterType::Large(3),
    DelimiterType::Large(4),
];

/// Whether `delim` may follow `\left`, `\big` and friends (`.` included).
#[must_use]
pub fn is_delimiter(delim: &str) -> bool {
    delim == "." || DELIMITERS.contains_key(delim)
}

fn delimiter_char(delim: &str) -> Option<char> {
    DELIMITERS.get(delim).copied()
}

const fn growth(ch: char) -> Growth {
    match ch {
        '\u{27E8}' | '\u{27E9}' | '/' | '\\' => Growth::Never,
        '\u{2191}' | '\u{2193}' | '\u{21D1}' | '\u{21D3}' | '\u{2223}' | '\u{2225}' => {
            Growth::Always
        }
        _ => Growth::Large,
    }
}

fn sequence(growth: Growth) -> Vec<DelimiterType> {
    let mut sequence = SMALL.to_vec();
    match growth {
        Growth::Large => {
            sequence.extend(LARGE);
            sequence.push(DelimiterType::Stack);
        }
        Growth::Never => sequence.extend(LARGE),
        Growth::Always => sequence.push(DelimiterType::Stack),
    }
    sequence
}

/// Pieces of a stacked delimiter.
struct Pieces {
    font: FontName,
    top: char,
    middle: Option<char>,
    repeat: char,
    bottom: char,
}

fn pieces(ch: char) -> Pieces {
    let sized = |top, repeat, bottom| Pieces {
        font: FontName::Size4,
        top,
        middle: None,
        repeat,
        bottom,
    };
    let small = |top, repeat, bottom| Pieces {
        font: FontName::Size1,
        top,
        middle: None,
        repeat,
        bottom,
    };
    match ch {
        '(' => sized('\u{239B}', '\u{239C}', '\u{239D}'),
        ')' => sized('\u{239E}', '\u{239F}', '\u{23A0}'),
        '[' => sized('\u{23A1}', '\u{23A2}', '\u{23A3}'),
        ']' => sized('\u{23A4}', '\u{23A5}', '\u{23A6}'),
        '\u{230A}' => sized('\u{23A2}', '\u{23A2}', '\u{23A3}'),
        '\u{230B}' => sized('\u{23A5}', '\u{23A5}', '\u{23A6}'),
        '\u{2308}' => sized('\u{23A1}', '\u{23A2}', '\u{23A2}'),
        '\u{2309}' => sized('\u{23A4}', '\u{23A5}', '\u{23A5}'),
        '{' => Pieces {
            middle: Some('\u{23A8}'),
            ..sized('\u{23A7}', '\u{23AA}', '\u{23A9}')
        },
        '}' => Pieces {
            middle: Some('\u{23AC}'),
            ..sized('\u{23AB}', '\u{23AA}', '\u{23AD}')
        },
        '\u{221A}' => sized('\u{E001}', '\u{E000}', '\u{23B7}'),
        '\u{2191}' => small('\u{2191}', '\u{23D0}', '\u{23D0}'),
        '\u{2193}' => small('\u{23D0}', '\u{23D0}', '\u{2193}'),
        '\u{21D1}' => small('\u{21D1}', '\u{2016}', '\u{2016}'),
        '\u{21D3}' => small('\u{2016}', '\u{2016}', '\u{21D3}'),
        other => small(other, other, other),
    }
}

fn font_of(delim_type: DelimiterType) -> FontName {
    match delim_type {
        DelimiterType::Small(_) => FontName::MainRegular,
        DelimiterType::Large(size) => FontName::sized(size),
        DelimiterType::Stack => FontName::Size4,
    }
}

fn extent(metrics: &CharacterMetrics) -> f64 {
    metrics.height + metrics.depth
}

/// A glyph drawn at `glyph_options`, moved so that its math axis lines up
/// with the axis of `options`.
fn centered_glyph(
    ctx: &TexboxContext,
    ch: char,
    font: FontName,
    mode: Mode,
    glyph_options: &Options,
    options: &Options,
) -> Result<LayoutBox, ParseError> {
    let glyph = make_symbol(ctx, &ch.to_string(), font, mode, glyph_options)?;
    let shift = glyph_options.metrics().axis_height - options.metrics().axis_height;
    Ok(glyph.shifted(shift))
}

fn make_small_delim(
    ctx: &TexboxContext,
    ch: char,
    style: Style,
    options: &Options,
    mode: Mode,
) -> Result<LayoutBox, ParseError> {
    let glyph_options = options.having_base_style(style);
    centered_glyph(ctx, ch, FontName::MainRegular, mode, &glyph_options, options)
}

fn make_large_delim(
    ctx: &TexboxContext,
    ch: char,
    size: usize,
    options: &Options,
    mode: Mode,
) -> Result<LayoutBox, ParseError> {
    let glyph_options = options.having_base_style(Style::Text);
    centered_glyph(ctx, ch, FontName::sized(size), mode, &glyph_options, options)
}

/// Builds a delimiter at least `height_total` tall from its pieces, centered
/// on the math axis.
fn make_stacked_delim(
    ctx: &TexboxContext,
    ch: char,
    height_total: f64,
    options: &Options,
    mode: Mode,
) -> Result<LayoutBox, ParseError> {
    let Pieces {
        font,
        top,
        middle,
        repeat,
        bottom,
    } = pieces(ch);
    let piece_options = options.having_base_style(Style::Text);
    let piece = |ch: char| make_symbol(ctx, &ch.to_string(), font, mode, &piece_options);

    let top = piece(top)?;
    let repeat = piece(repeat)?;
    let bottom = piece(bottom)?;
    let middle = middle.map(piece).transpose()?;

    let box_extent = |b: &LayoutBox| b.height() + b.depth();
    let middle_extent = middle.as_ref().map_or(0.0, box_extent);
    let repeat_extent = box_extent(&repeat);
    let min_height = box_extent(&top) + box_extent(&bottom) + middle_extent;
    let factor = if middle.is_some() { 2.0 } else { 1.0 };
    let repeat_count = if repeat_extent > 0.0 {
        ((height_total - min_height) / (factor * repeat_extent))
            .ceil()
            .max(0.0) as usize
    } else {
        0
    };
    let real_height = min_height + repeat_count as f64 * factor * repeat_extent;
    let depth = real_height / 2.0 - options.metrics().axis_height;

    let mut stack = vec![VListChild::Box(bottom)];
    stack.extend((0..repeat_count).map(|_| VListChild::Box(repeat.clone())));
    if let Some(middle) = middle {
        stack.push(VListChild::Box(middle));
        stack.extend((0..repeat_count).map(|_| VListChild::Box(repeat.clone())));
    }
    stack.push(VListChild::Box(top));
    Ok(make_v_list(VListPosition::Bottom(depth), stack))
}

/// Picks the first candidate of `sequence` taller than `height`, starting at
/// the smallest one that suits the current style.
fn traverse_sequence(
    ctx: &TexboxContext,
    ch: char,
    height: f64,
    sequence: &[DelimiterType],
    options: &Options,
    mode: Mode,
) -> DelimiterType {
    let start = 2_usize.min(3 - options.style.size().min(3));
    for &delim_type in sequence.iter().skip(start) {
        if delim_type == DelimiterType::Stack {
            return delim_type;
        }
        let Ok(metrics) = ctx.metrics.lookup(ch, font_of(delim_type), mode) else {
            continue;
        };
        let scale = match delim_type {
            DelimiterType::Small(style) => options.having_base_style(style).size_multiplier,
            _ => 1.0,
        };
        if extent(&metrics) * scale > height {
            return delim_type;
        }
    }
    sequence.last().copied().unwrap_or(DelimiterType::Stack)
}

fn make_delim(
    ctx: &TexboxContext,
    ch: char,
    delim_type: DelimiterType,
    height: f64,
    options: &Options,
    mode: Mode,
) -> Result<LayoutBox, ParseError> {
    match delim_type {
        DelimiterType::Small(style) => make_small_delim(ctx, ch, style, options, mode),
        DelimiterType::Large(size) => make_large_delim(ctx, ch, size, options, mode),
        DelimiterType::Stack => make_stacked_delim(ctx, ch, height, options, mode),
    }
}

/// A delimiter of a fixed `\big` size from 1 to 4.
pub fn sized_delim(
    ctx: &TexboxContext,
    delim: &str,
    size: usize,
    options: &Options,
    mode: Mode,
) -> Result<LayoutBox, ParseError> {
    let Some(ch) = delimiter_char(delim) else {
        return Ok(make_null_delimiter(options));
    };
    let size = size.clamp(1, 4);
    match growth(ch) {
        Growth::Always => make_stacked_delim(ctx, ch, SIZE_TO_MAX_HEIGHT[size], options, mode),
        Growth::Large | Growth::Never => make_large_delim(ctx, ch, size, options, mode),
    }
}

/// The smallest delimiter at least `height` tall, centered on the axis.
pub fn custom_sized_delim(
    ctx: &TexboxContext,
    delim: &str,
    height: f64,
    options: &Options,
    mode: Mode,
) -> Result<LayoutBox, ParseError> {
    let Some(ch) = delimiter_char(delim) else {
        return Ok(make_null_delimiter(options));
    };
    let sequence = sequence(growth(ch));
    let delim_type = traverse_sequence(ctx, ch, height, &sequence, options, mode);
    make_delim(ctx, ch, delim_type, height, options, mode)
}

/// A delimiter for `\left` or `\right` around material of the given height
/// and depth, following TeX's `\delimiterfactor` and
/// `\delimitershortfall` rule.
pub fn left_right_delim(
    ctx: &TexboxContext,
    delim: &str,
    height: f64,
    depth: f64,
    options: &Options,
    mode: Mode,
) -> Result<LayoutBox, ParseError> {
    let metrics = options.metrics();
    let axis_height = metrics.axis_height;
    let shortfall = DELIMITER_SHORTFALL / metrics.pt_per_em;
    let max_dist_from_axis = (height - axis_height).max(depth + axis_height);
    let total_height = (max_dist_from_axis / 500.0 * DELIMITER_FACTOR)
        .max(2.0 * max_dist_from_axis - shortfall);
    custom_sized_delim(ctx, delim, total_height, options, mode)
}

/// A radical sign at least `height` tall, centered on the axis.
pub fn make_surd(ctx: &TexboxContext, height: f64, options: &Options) -> Result<LayoutBox, ParseError> {
    custom_sized_delim(ctx, "\\surd", height, options, Mode::Math)
}
