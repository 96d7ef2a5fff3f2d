//! The box tree
//!
//! Layout produces a tree of [`LayoutBox`]es in the manner of TeX's boxes
//! and glue: horizontal lists, vertical lists, glyphs, rules, glue and
//! kerns. Every dimension is in absolute ems of the `\normalsize` font, so a
//! box's dimensions never need rescaling once it has been built.
//!
//! Children of an `HBox` sit on its baseline and advance left to right.
//! Children of a `VBox` are stored top to bottom and stack without gaps; the
//! kerns between them always add up so that the children span exactly the
//! box's height plus depth.

use serde::Serialize;

use crate::font_metrics::{CharacterMetrics, FontName};

/// A node of the box tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum LayoutBox {
    /// Children side by side along the baseline.
    HBox(ListBox),
    /// Children stacked top to bottom.
    VBox(ListBox),
    /// A character from a font.
    Glyph(Glyph),
    /// A solid rectangle.
    Rule(Rule),
    /// Horizontal space between atoms.
    Glue(Glue),
    /// Fixed horizontal space.
    Kern(Kern),
}

/// Contents and extent of a horizontal or vertical list.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct ListBox {
    /// The boxes in the list.
    pub children: Vec<LayoutBox>,
    /// Width, in em.
    pub width: f64,
    /// Extent above the baseline, in em.
    pub height: f64,
    /// Extent below the baseline, in em.
    pub depth: f64,
}

/// One character (or a run of characters for error markers) in one font.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Glyph {
    /// The character drawn.
    pub text: String,
    /// The font it is drawn from.
    pub font: FontName,
    /// Advance width, italic correction included.
    pub width: f64,
    /// Extent above the baseline, scaled.
    pub height: f64,
    /// Extent below the baseline, scaled.
    pub depth: f64,
    /// Italic correction, scaled.
    pub italic: f64,
    /// Color, or `None` for the default.
    pub color: Option<String>,
}

impl Glyph {
    /// A glyph with `metrics` scaled by `scale`.
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        font: FontName,
        metrics: &CharacterMetrics,
        scale: f64,
        color: Option<String>,
    ) -> Self {
        let italic = metrics.italic.max(0.0) * scale;
        Self {
            text: text.into(),
            font,
            width: (metrics.width * scale + italic).max(0.0),
            height: (metrics.height * scale).max(0.0),
            depth: (metrics.depth * scale).max(0.0),
            italic,
            color,
        }
    }
}

/// A solid rectangle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rule {
    /// Width, in em.
    pub width: f64,
    /// Extent above the baseline.
    pub height: f64,
    /// Extent below the baseline.
    pub depth: f64,
    /// Color, or `None` for the default.
    pub color: Option<String>,
}

/// Horizontal space between atoms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Glue {
    /// Natural width, in em.
    pub amount: f64,
    /// How far the glue may stretch.
    pub stretch: f64,
    /// How far the glue may shrink.
    pub shrink: f64,
}

/// Fixed space; horizontal in an `HBox`, vertical in a `VBox`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Kern {
    /// Width, in em; negative kerns move back.
    pub amount: f64,
}

/// An entry of a vertical list under construction, listed bottom to top.
#[derive(Debug, Clone, PartialEq)]
pub enum VListChild {
    /// A box, as tall as its height plus depth.
    Box(LayoutBox),
    /// Vertical space, in em.
    Kern(f64),
}

/// Where a vertical list sits relative to the baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VListPosition {
    /// The bottom edge of the list lies this far below the baseline.
    Bottom(f64),
    /// The top edge of the list lies this far above the baseline.
    Top(f64),
    /// The first child's baseline is moved this far down.
    Shift(f64),
    /// The first child's baseline is the list's baseline.
    FirstBaseline,
}

impl LayoutBox {
    /// A horizontal list measuring its children.
    #[must_use]
    pub fn hbox(children: Vec<Self>) -> Self {
        let width = children.iter().map(Self::width).sum::<f64>();
        let height = children.iter().map(Self::height).fold(0.0, f64::max);
        let depth = children.iter().map(Self::depth).fold(0.0, f64::max);
        Self::hbox_with_dims(children, width, height, depth)
    }

    /// A horizontal list with overridden dimensions.
    #[must_use]
    pub fn hbox_with_dims(children: Vec<Self>, width: f64, height: f64, depth: f64) -> Self {
        Self::HBox(ListBox {
            children,
            width: width.max(0.0),
            height: height.max(0.0),
            depth: depth.max(0.0),
        })
    }

    /// An empty box of zero width and the given height and depth.
    #[must_use]
    pub fn strut(height: f64, depth: f64) -> Self {
        Self::hbox_with_dims(Vec::new(), 0.0, height, depth)
    }

    /// An empty horizontal list.
    #[must_use]
    pub fn empty() -> Self {
        Self::strut(0.0, 0.0)
    }

    /// A kern of `amount` em.
    #[must_use]
    pub const fn kern(amount: f64) -> Self {
        Self::Kern(Kern { amount })
    }

    /// Glue of natural width `amount`, with no stretch or shrink.
    #[must_use]
    pub const fn glue(amount: f64) -> Self {
        Self::Glue(Glue {
            amount,
            stretch: 0.0,
            shrink: 0.0,
        })
    }

    /// A rule; negative dimensions are clamped to zero.
    #[must_use]
    pub fn rule(width: f64, height: f64, depth: f64, color: Option<String>) -> Self {
        Self::Rule(Rule {
            width: width.max(0.0),
            height: height.max(0.0),
            depth: depth.max(0.0),
            color,
        })
    }

    /// Horizontal extent. Kerns and glue count their amount.
    #[must_use]
    pub fn width(&self) -> f64 {
        match self {
            Self::HBox(list) | Self::VBox(list) => list.width,
            Self::Glyph(glyph) => glyph.width,
            Self::Rule(rule) => rule.width,
            Self::Glue(glue) => glue.amount,
            Self::Kern(kern) => kern.amount,
        }
    }

    /// Extent above the baseline.
    #[must_use]
    pub const fn height(&self) -> f64 {
        match self {
            Self::HBox(list) | Self::VBox(list) => list.height,
            Self::Glyph(glyph) => glyph.height,
            Self::Rule(rule) => rule.height,
            Self::Glue(_) | Self::Kern(_) => 0.0,
        }
    }

    /// Extent below the baseline.
    #[must_use]
    pub const fn depth(&self) -> f64 {
        match self {
            Self::HBox(list) | Self::VBox(list) => list.depth,
            Self::Glyph(glyph) => glyph.depth,
            Self::Rule(rule) => rule.depth,
            Self::Glue(_) | Self::Kern(_) => 0.0,
        }
    }

    /// Italic correction of a glyph; zero for anything else.
    #[must_use]
    pub const fn italic(&self) -> f64 {
        match self {
            Self::Glyph(glyph) => glyph.italic,
            _ => 0.0,
        }
    }

    /// The box moved down by `amount` (up when negative).
    #[must_use]
    pub fn shifted(self, amount: f64) -> Self {
        if amount == 0.0 {
            return self;
        }
        make_v_list(VListPosition::Shift(amount), vec![VListChild::Box(self)])
    }

    /// The box placed `offset` to the right of centre in a box of `width`.
    #[must_use]
    pub fn centered(self, width: f64, offset: f64) -> Self {
        let left = (width - self.width()) / 2.0 + offset;
        let right = width - left - self.width();
        let (height, depth) = (self.height(), self.depth());
        Self::hbox_with_dims(
            vec![Self::kern(left), self, Self::kern(right)],
            width,
            height,
            depth,
        )
    }

    /// The same extent with all ink removed.
    #[must_use]
    pub fn into_phantom(self) -> Self {
        match self {
            Self::HBox(list) => Self::HBox(ListBox {
                children: list.children.into_iter().map(Self::into_phantom).collect(),
                ..list
            }),
            Self::VBox(list) => Self::VBox(ListBox {
                children: list.children.into_iter().map(Self::into_phantom).collect(),
                ..list
            }),
            Self::Glyph(Glyph {
                width,
                height,
                depth,
                ..
            })
            | Self::Rule(Rule {
                width,
                height,
                depth,
                ..
            }) => Self::hbox_with_dims(Vec::new(), width, height, depth),
            spacing @ (Self::Glue(_) | Self::Kern(_)) => spacing,
        }
    }

    /// Whether the box draws anything.
    #[must_use]
    pub fn has_ink(&self) -> bool {
        match self {
            Self::HBox(list) | Self::VBox(list) => list.children.iter().any(Self::has_ink),
            Self::Glyph(_) | Self::Rule(_) => true,
            Self::Glue(_) | Self::Kern(_) => false,
        }
    }
}

/// Stacks `children` (bottom to top) into a `VBox` positioned by `position`.
#[must_use]
pub fn make_v_list(position: VListPosition, children: Vec<VListChild>) -> LayoutBox {
    let total = || -> f64 {
        children
            .iter()
            .map(|child| match child {
                VListChild::Kern(amount) => *amount,
                VListChild::Box(b) => b.height() + b.depth(),
            })
            .sum()
    };
    let first_depth = || match children.first() {
        Some(VListChild::Box(b)) => b.depth(),
        _ => 0.0,
    };
    let bottom = match position {
        VListPosition::Bottom(depth) => -depth,
        VListPosition::Top(height) => height - total(),
        VListPosition::Shift(shift) => -first_depth() - shift,
        VListPosition::FirstBaseline => -first_depth(),
    };
    stack(bottom, children)
}

/// Stacks `children` (bottom to top), each with its baseline `shift` below
/// the list's baseline.
#[must_use]
pub fn make_v_list_shifted(children: Vec<(LayoutBox, f64)>) -> LayoutBox {
    let mut iter = children.into_iter();
    let Some((first, first_shift)) = iter.next() else {
        return LayoutBox::VBox(ListBox::default());
    };
    let bottom = -first_shift - first.depth();
    let mut pos = bottom;
    let mut prev_extent = first.height() + first.depth();
    let mut list = vec![VListChild::Box(first)];
    for (elem, shift) in iter {
        let diff = -shift - pos - elem.depth();
        list.push(VListChild::Kern(diff - prev_extent));
        pos += diff;
        prev_extent = elem.height() + elem.depth();
        list.push(VListChild::Box(elem));
    }
    stack(bottom, list)
}

fn stack(bottom: f64, children: Vec<VListChild>) -> LayoutBox {
    let mut pos = bottom;
    let mut min_pos = bottom;
    let mut max_pos = bottom;
    let mut width: f64 = 0.0;
    for child in &children {
        match child {
            VListChild::Kern(amount) => pos += amount,
            VListChild::Box(b) => {
                pos += b.height() + b.depth();
                width = width.max(b.width());
            }
        }
        min_pos = min_pos.min(pos);
        max_pos = max_pos.max(pos);
    }

    let top = max_pos.max(0.0);
    let floor = min_pos.min(0.0);
    let mut list = Vec::with_capacity(children.len() + 2);
    if top - pos != 0.0 {
        list.push(LayoutBox::kern(top - pos));
    }
    for child in children.into_iter().rev() {
        list.push(match child {
            VListChild::Kern(amount) => LayoutBox::kern(amount),
            VListChild::Box(b) => b,
        });
    }
    if bottom - floor != 0.0 {
        list.push(LayoutBox::kern(bottom - floor));
    }

    LayoutBox::VBox(ListBox {
        children: list,
        width,
        height: top,
        depth: -floor,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn vertical_extent(b: &LayoutBox) -> f64 {
        let LayoutBox::VBox(list) = b else {
            panic!("not a vbox: {b:?}");
        };
        list.children
            .iter()
            .map(|c| match c {
                LayoutBox::Kern(k) => k.amount,
                other => other.height() + other.depth(),
            })
            .sum()
    }

    #[test]
    fn hbox_measures_children() {
        let b = LayoutBox::hbox(vec![
            LayoutBox::rule(1.0, 0.5, 0.1, None),
            LayoutBox::kern(0.25),
            LayoutBox::rule(2.0, 0.2, 0.3, None),
        ]);
        assert!(close(b.width(), 3.25));
        assert!(close(b.height(), 0.5));
        assert!(close(b.depth(), 0.3));
    }

    #[test]
    fn shifted_box_keeps_extent_consistent() {
        let raised = LayoutBox::rule(1.0, 0.5, 0.0, None).shifted(-0.25);
        assert!(close(raised.height(), 0.75));
        assert!(close(raised.depth(), 0.0));
        assert!(close(vertical_extent(&raised), 0.75));

        let lowered = LayoutBox::rule(1.0, 0.5, 0.0, None).shifted(1.0);
        assert!(close(lowered.height(), 0.0));
        assert!(close(lowered.depth(), 1.0));
        assert!(close(vertical_extent(&lowered), 1.0));
    }

    #[test]
    fn individual_shifts() {
        let list = make_v_list_shifted(vec![
            (LayoutBox::rule(1.0, 0.4, 0.1, None), 0.7),
            (LayoutBox::rule(1.0, 0.4, 0.1, None), -0.9),
        ]);
        assert!(close(list.height(), 1.3));
        assert!(close(list.depth(), 0.8));
        assert!(close(vertical_extent(&list), 2.1));
    }

    #[test]
    fn top_and_bottom_positions() {
        let children = || {
            vec![
                VListChild::Box(LayoutBox::strut(0.5, 0.5)),
                VListChild::Kern(0.2),
                VListChild::Box(LayoutBox::strut(0.3, 0.0)),
            ]
        };
        let top = make_v_list(VListPosition::Top(1.0), children());
        assert!(close(top.height(), 1.0));
        assert!(close(top.depth(), 0.5));
        let bottom = make_v_list(VListPosition::Bottom(0.25), children());
        assert!(close(bottom.depth(), 0.25));
        assert!(close(bottom.height(), 1.25));
        assert!(close(vertical_extent(&bottom), 1.5));
    }

    #[test]
    fn centering_and_phantoms() {
        let glyph = LayoutBox::rule(1.0, 0.5, 0.0, Some("red".to_owned()));
        let centered = glyph.clone().centered(3.0, 0.0);
        assert!(close(centered.width(), 3.0));
        let LayoutBox::HBox(list) = &centered else {
            panic!("expected hbox");
        };
        assert!(close(list.children[0].width(), 1.0));

        let phantom = centered.into_phantom();
        assert!(!phantom.has_ink());
        assert!(close(phantom.width(), 3.0));
        assert!(close(phantom.height(), 0.5));
    }

    #[test]
    fn glyph_width_includes_italic_correction() {
        let metrics = CharacterMetrics::new(0.0, 0.5, 0.1, 0.0, 0.6);
        let glyph = Glyph::new("f", FontName::MathItalic, &metrics, 0.5, None);
        assert!(close(glyph.width, 0.35));
        assert!(close(glyph.italic, 0.05));
        assert!(close(glyph.height, 0.25));
    }
}
