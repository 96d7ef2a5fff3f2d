//! Positioned output
//!
//! [`serialize`] turns a [`LayoutBox`] into an [`OutputNode`]: the same
//! glyphs and rules, each placed at an explicit offset from its parent's
//! baseline origin. Kerns and glue disappear into those offsets, so a
//! backend only ever draws glyphs and rules and never has to know how TeX
//! stacks boxes.
//!
//! Offsets are in ems of the base font. `x` grows to the right and `y`
//! grows downward, so a child sitting on its parent's baseline has `y == 0`
//! and a raised child has a negative `y`.

use serde::Serialize;

use crate::box_tree::{LayoutBox, ListBox};
use crate::font_metrics::FontName;
use crate::types::{ParseError, ParseErrorKind};

/// A node of the positioned output tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum OutputNode {
    /// A horizontal list.
    HList(OutputList),
    /// A vertical list.
    VList(OutputList),
    /// A character.
    Glyph(OutputGlyph),
    /// A solid rectangle.
    Rule(OutputRule),
}

/// A list whose children are positioned relative to the list's own origin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputList {
    /// Offset from the parent's origin, rightwards, in em.
    pub x: f64,
    /// Offset of the baseline from the parent's baseline, downwards, in em.
    pub y: f64,
    /// Width, in em.
    pub width: f64,
    /// Extent above the baseline.
    pub height: f64,
    /// Extent below the baseline.
    pub depth: f64,
    /// Nodes placed relative to this list.
    pub children: Vec<OutputNode>,
}

/// A positioned character.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputGlyph {
    /// Offset from the parent's origin, rightwards, in em.
    pub x: f64,
    /// Offset of the baseline from the parent's baseline, downwards, in em.
    pub y: f64,
    /// The character drawn.
    pub text: String,
    /// The font it is drawn from.
    pub font: FontName,
    /// Advance width, scaled.
    pub width: f64,
    /// Extent above the baseline, scaled.
    pub height: f64,
    /// Extent below the baseline, scaled.
    pub depth: f64,
    /// Color, or `None` for the default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// A positioned solid rectangle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputRule {
    /// Offset from the parent's origin, rightwards, in em.
    pub x: f64,
    /// Offset of the baseline from the parent's baseline, downwards, in em.
    pub y: f64,
    /// Width, in em.
    pub width: f64,
    /// Extent above the baseline.
    pub height: f64,
    /// Extent below the baseline.
    pub depth: f64,
    /// Color, or `None` for the default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl OutputNode {
    /// The node's horizontal offset.
    #[must_use]
    pub const fn x(&self) -> f64 {
        match self {
            Self::HList(list) | Self::VList(list) => list.x,
            Self::Glyph(glyph) => glyph.x,
            Self::Rule(rule) => rule.x,
        }
    }

    /// The node's vertical offset.
    #[must_use]
    pub const fn y(&self) -> f64 {
        match self {
            Self::HList(list) | Self::VList(list) => list.y,
            Self::Glyph(glyph) => glyph.y,
            Self::Rule(rule) => rule.y,
        }
    }

    /// Children of a list; empty for glyphs and rules.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        match self {
            Self::HList(list) | Self::VList(list) => &list.children,
            Self::Glyph(_) | Self::Rule(_) => &[],
        }
    }
}

/// A rendered expression, ready for a drawing backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputTree {
    /// The top-level list, at the origin.
    pub root: OutputNode,
    /// Total width, in em.
    pub width: f64,
    /// Total extent above the baseline.
    pub height: f64,
    /// Total extent below the baseline.
    pub depth: f64,
    /// Whether the expression was set in display style.
    pub display_mode: bool,
}

impl OutputTree {
    /// Positions every glyph and rule of `root`.
    #[must_use]
    pub fn from_box(root: &LayoutBox, display_mode: bool) -> Self {
        Self {
            root: serialize(root),
            width: root.width().max(0.0),
            height: root.height(),
            depth: root.depth(),
            display_mode,
        }
    }

    /// The tree as JSON.
    pub fn to_json(&self) -> Result<String, ParseError> {
        serde_json::to_string(self).map_err(|err| {
            ParseError::new(ParseErrorKind::Serialization {
                message: err.to_string(),
            })
        })
    }
}

/// Places `root` at the origin.
///
/// A bare kern or glue has nothing to draw and becomes an empty list of its
/// width.
#[must_use]
pub fn serialize(root: &LayoutBox) -> OutputNode {
    place(root, 0.0, 0.0).unwrap_or_else(|| {
        OutputNode::HList(OutputList {
            x: 0.0,
            y: 0.0,
            width: root.width().max(0.0),
            height: 0.0,
            depth: 0.0,
            children: Vec::new(),
        })
    })
}

fn place(node: &LayoutBox, x: f64, y: f64) -> Option<OutputNode> {
    match node {
        LayoutBox::HBox(list) => Some(OutputNode::HList(place_list(list, x, y, hlist_children(list)))),
        LayoutBox::VBox(list) => Some(OutputNode::VList(place_list(list, x, y, vlist_children(list)))),
        LayoutBox::Glyph(glyph) => Some(OutputNode::Glyph(OutputGlyph {
            x,
            y,
            text: glyph.text.clone(),
            font: glyph.font,
            width: glyph.width,
            height: glyph.height,
            depth: glyph.depth,
            color: glyph.color.clone(),
        })),
        LayoutBox::Rule(rule) => Some(OutputNode::Rule(OutputRule {
            x,
            y,
            width: rule.width,
            height: rule.height,
            depth: rule.depth,
            color: rule.color.clone(),
        })),
        LayoutBox::Glue(_) | LayoutBox::Kern(_) => None,
    }
}

const fn place_list(list: &ListBox, x: f64, y: f64, children: Vec<OutputNode>) -> OutputList {
    OutputList {
        x,
        y,
        width: list.width,
        height: list.height,
        depth: list.depth,
        children,
    }
}

/// Children on the baseline, left to right.
fn hlist_children(list: &ListBox) -> Vec<OutputNode> {
    let mut cursor = 0.0;
    let mut out = Vec::with_capacity(list.children.len());
    for child in &list.children {
        out.extend(place(child, cursor, 0.0));
        cursor += child.width();
    }
    out
}

/// Children top to bottom, each placed by its own baseline.
fn vlist_children(list: &ListBox) -> Vec<OutputNode> {
    let mut cursor = -list.height;
    let mut out = Vec::with_capacity(list.children.len());
    for child in &list.children {
        match child {
            LayoutBox::Kern(kern) => cursor += kern.amount,
            LayoutBox::Glue(glue) => cursor += glue.amount,
            other => {
                out.extend(place(other, 0.0, cursor + other.height()));
                cursor += other.height() + other.depth();
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::box_tree::{Glyph, VListChild, VListPosition, make_v_list};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn glyph(text: &str, width: f64, height: f64, depth: f64) -> LayoutBox {
        LayoutBox::Glyph(Glyph {
            text: text.to_owned(),
            font: FontName::MathItalic,
            width,
            height,
            depth,
            italic: 0.0,
            color: None,
        })
    }

    #[test]
    fn hlist_advances_by_width_and_drops_kerns() {
        let row = LayoutBox::hbox(vec![
            glyph("a", 0.5, 0.4, 0.0),
            LayoutBox::kern(0.25),
            glyph("b", 0.6, 0.7, 0.0),
            LayoutBox::glue(0.1),
            LayoutBox::rule(1.0, 0.1, 0.0, None),
        ]);
        let OutputNode::HList(list) = serialize(&row) else {
            panic!("expected an hlist");
        };
        assert_eq!(list.children.len(), 3);
        let xs: Vec<f64> = list.children.iter().map(OutputNode::x).collect();
        assert!(close(xs[0], 0.0));
        assert!(close(xs[1], 0.75));
        assert!(close(xs[2], 1.45));
        assert!(list.children.iter().all(|child| child.y() == 0.0));
    }

    #[test]
    fn vlist_places_children_by_baseline() {
        // `top` sits 1.0 above the baseline, `bottom` on it.
        let stack = make_v_list(
            VListPosition::FirstBaseline,
            vec![
                VListChild::Box(glyph("bottom", 1.0, 0.5, 0.2)),
                VListChild::Kern(0.3),
                VListChild::Box(glyph("top", 1.0, 0.4, 0.1)),
            ],
        );
        let OutputNode::VList(list) = serialize(&stack) else {
            panic!("expected a vlist");
        };
        let positions: Vec<(String, f64)> = list
            .children
            .iter()
            .map(|child| match child {
                OutputNode::Glyph(g) => (g.text.clone(), g.y),
                other => panic!("unexpected {other:?}"),
            })
            .collect();
        assert_eq!(positions[0].0, "top");
        assert!(close(positions[0].1, -(0.5 + 0.3 + 0.1)));
        assert_eq!(positions[1].0, "bottom");
        assert!(close(positions[1].1, 0.0));
    }

    #[test]
    fn shifted_box_moves_down() {
        let lowered = glyph("x", 0.5, 0.4, 0.0).shifted(0.3);
        let node = serialize(&LayoutBox::hbox(vec![lowered]));
        let inner = &node.children()[0];
        assert!(close(inner.children()[0].y(), 0.3));
    }

    #[test]
    fn bare_kern_becomes_empty_list() {
        let node = serialize(&LayoutBox::kern(0.5));
        let OutputNode::HList(list) = node else {
            panic!("expected an hlist");
        };
        assert!(list.children.is_empty());
        assert!(close(list.width, 0.5));
    }

    #[test]
    fn json_is_tagged() {
        let tree = OutputTree::from_box(&LayoutBox::hbox(vec![glyph("x", 0.5, 0.4, 0.0)]), false);
        let json = tree.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["root"]["type"], "HList");
        assert_eq!(value["root"]["children"][0]["type"], "Glyph");
        assert_eq!(value["root"]["children"][0]["text"], "x");
        assert_eq!(value["display_mode"], false);
    }
}
