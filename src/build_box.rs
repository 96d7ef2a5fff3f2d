//! Layout of parse trees into box trees
//!
//! [`layout`] turns one [`ParseNode`] into a [`LayoutBox`], dispatching on
//! the node type; [`build_expression`] lays out a list of nodes and puts
//! TeX's inter-atom glue between them. Style, size, color and font travel
//! down the tree in [`Options`]; nodes that only change those (styling,
//! sizing, color) are flattened into the surrounding list so spacing sees
//! through them.

use crate::box_tree::LayoutBox;
use crate::build_common::{make_symbol, make_text_run, symbol_font};
use crate::context::TexboxContext;
use crate::define_environment::build_array;
use crate::functions;
use crate::options::Options;
use crate::parser::{ParseNode, PhantomKind};
use crate::spacing_data::{AtomClass, spacing, tight_spacing};
use crate::symbols::Mode;
use crate::types::{ParseError, ParseErrorKind};

/// A laid out node and what inter-atom spacing needs to know about it.
#[derive(Debug)]
struct Item {
    layout: LayoutBox,
    /// `None` for kerns, explicit spaces and text-mode material, which glue
    /// ignores.
    class: Option<AtomClass>,
    tight: bool,
    em_per_mu: f64,
}

/// Atom classes assumed before the first and after the last item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Surround {
    /// Class of the atom before the list.
    pub left: Option<AtomClass>,
    /// Class of the atom after the list.
    pub right: Option<AtomClass>,
}

/// Lays out `nodes` as a horizontal list with inter-atom glue.
pub fn build_expression(
    ctx: &TexboxContext,
    nodes: &[ParseNode],
    options: &Options,
) -> Result<Vec<LayoutBox>, ParseError> {
    build_expression_within(ctx, nodes, options, Surround::default())
}

/// Like [`build_expression`], for lists whose ends touch atoms outside the
/// list, such as the body of `\left(...\right)`.
pub fn build_expression_within(
    ctx: &TexboxContext,
    nodes: &[ParseNode],
    options: &Options,
    surround: Surround,
) -> Result<Vec<LayoutBox>, ParseError> {
    let mut items = Vec::with_capacity(nodes.len());
    collect(ctx, nodes, options, &mut items)?;
    reclassify_bins(&mut items, surround);

    let mut result = Vec::with_capacity(items.len() * 2);
    let mut prev_class = None;
    for item in items {
        if let (Some(left), Some(right)) = (prev_class, item.class) {
            let space = if item.tight {
                tight_spacing(left, right)
            } else {
                spacing(left, right)
            };
            if let Some(space) = space {
                result.push(LayoutBox::glue(space.mu() * item.em_per_mu));
            }
        }
        if item.class.is_some() {
            prev_class = item.class;
        }
        result.push(item.layout);
    }
    Ok(result)
}

/// Lays out `nodes` into a single horizontal box.
pub fn build_hbox(
    ctx: &TexboxContext,
    nodes: &[ParseNode],
    options: &Options,
) -> Result<LayoutBox, ParseError> {
    Ok(LayoutBox::hbox(build_expression(ctx, nodes, options)?))
}

fn collect(
    ctx: &TexboxContext,
    nodes: &[ParseNode],
    options: &Options,
    items: &mut Vec<Item>,
) -> Result<(), ParseError> {
    for node in nodes {
        match node {
            ParseNode::Styling(styling) => {
                collect(ctx, &styling.body, &options.having_style(styling.style), items)?;
            }
            ParseNode::Sizing(sizing) => {
                collect(ctx, &sizing.body, &options.having_size(sizing.size), items)?;
            }
            ParseNode::Color(color) => {
                collect(ctx, &color.body, &options.with_color(&color.color), items)?;
            }
            ParseNode::OrdGroup(group) if group.semisimple => {
                collect(ctx, &group.body, options, items)?;
            }
            ParseNode::MathChoice(choice) => {
                collect(ctx, choice.body_for(options.style), options, items)?;
            }
            ParseNode::Phantom(phantom) if phantom.kind == PhantomKind::Full => {
                let start = items.len();
                collect(ctx, &phantom.body, options, items)?;
                for item in &mut items[start..] {
                    item.layout = core::mem::replace(&mut item.layout, LayoutBox::empty()).into_phantom();
                }
            }
            _ => items.push(Item {
                layout: layout(ctx, node, options)?,
                class: atom_class(node),
                tight: options.style.is_tight(),
                em_per_mu: options.metrics().css_em_per_mu,
            }),
        }
    }
    Ok(())
}

/// TeXbook rules 5 and 6: a binary operator with nothing to operate on is
/// an ordinary symbol.
fn reclassify_bins(items: &mut [Item], surround: Surround) {
    let spaced: Vec<usize> = items
        .iter()
        .enumerate()
        .filter(|(_, item)| item.class.is_some())
        .map(|(index, _)| index)
        .collect();
    let mut prev = surround.left;
    for (position, &index) in spaced.iter().enumerate() {
        if items[index].class == Some(AtomClass::Mbin) {
            let bin_after = matches!(
                prev,
                None | Some(
                    AtomClass::Mbin
                        | AtomClass::Mopen
                        | AtomClass::Mrel
                        | AtomClass::Mop
                        | AtomClass::Mpunct
                )
            );
            let next = spaced
                .get(position + 1)
                .map_or(surround.right, |&next| items[next].class);
            let bin_before = matches!(
                next,
                None | Some(AtomClass::Mrel | AtomClass::Mclose | AtomClass::Mpunct)
            );
            if bin_after || bin_before {
                items[index].class = Some(AtomClass::Mord);
            }
        }
        prev = items[index].class;
    }
}

/// The atom class a node takes part in spacing with, or `None` for nodes
/// that are transparent to it.
#[must_use]
pub fn atom_class(node: &ParseNode) -> Option<AtomClass> {
    if node.mode() == Mode::Text {
        return None;
    }
    match node {
        ParseNode::Atom(atom) => Some(atom.family.into()),
        ParseNode::MathOrd(_) | ParseNode::TextOrd(_) => Some(AtomClass::Mord),
        ParseNode::Op(_) => Some(AtomClass::Mop),
        ParseNode::SupSub(supsub) => Some(
            supsub
                .base
                .as_deref()
                .and_then(atom_class)
                .unwrap_or(AtomClass::Mord),
        ),
        ParseNode::LeftRight(_) => Some(AtomClass::Minner),
        ParseNode::Font(font) => atom_class(&font.body),
        ParseNode::Mclass(mclass) => Some(mclass.mclass),
        ParseNode::Delimsizing(delim) => Some(delim.mclass),
        ParseNode::Array(_)
        | ParseNode::OrdGroup(_)
        | ParseNode::Genfrac(_)
        | ParseNode::Sqrt(_)
        | ParseNode::Text(_)
        | ParseNode::Accent(_)
        | ParseNode::Overline(_)
        | ParseNode::Underline(_)
        | ParseNode::Phantom(_)
        | ParseNode::Rule(_)
        | ParseNode::Lap(_)
        | ParseNode::Smash(_)
        | ParseNode::Enclose(_)
        | ParseNode::HorizBrace(_)
        | ParseNode::MathChoice(_)
        | ParseNode::Error(_) => Some(AtomClass::Mord),
        ParseNode::XArrow(_) => Some(AtomClass::Mrel),
        ParseNode::Spacing(_)
        | ParseNode::Kern(_)
        | ParseNode::Styling(_)
        | ParseNode::Sizing(_)
        | ParseNode::Color(_)
        | ParseNode::ColorToken(_)
        | ParseNode::LeftRightRight(_)
        | ParseNode::Infix(_)
        | ParseNode::Environment(_)
        | ParseNode::Size(_)
        | ParseNode::Raw(_) => None,
    }
}

/// Lays out a single node.
pub fn layout(ctx: &TexboxContext, node: &ParseNode, options: &Options) -> Result<LayoutBox, ParseError> {
    match node {
        ParseNode::Atom(atom) => build_symbol(ctx, &atom.text, atom.mode, options),
        ParseNode::MathOrd(symbol) | ParseNode::TextOrd(symbol) | ParseNode::Spacing(symbol) => {
            build_symbol(ctx, &symbol.text, symbol.mode, options)
        }
        ParseNode::OrdGroup(group) => build_hbox(ctx, &group.body, options),
        ParseNode::Styling(styling) => {
            build_hbox(ctx, &styling.body, &options.having_style(styling.style))
        }
        ParseNode::Sizing(sizing) => build_hbox(ctx, &sizing.body, &options.having_size(sizing.size)),
        ParseNode::Color(color) => build_hbox(ctx, &color.body, &options.with_color(&color.color)),
        ParseNode::SupSub(supsub) => functions::build_supsub(ctx, supsub, options),
        ParseNode::Genfrac(genfrac) => functions::build_genfrac(ctx, genfrac, options),
        ParseNode::Sqrt(sqrt) => functions::build_sqrt(ctx, sqrt, options),
        ParseNode::Op(op) => functions::build_op(ctx, op, None, None, options),
        ParseNode::LeftRight(left_right) => functions::build_left_right(ctx, left_right, options),
        ParseNode::Delimsizing(delim) => functions::build_delimsizing(ctx, delim, options),
        ParseNode::Text(text) => functions::build_text(ctx, text, options),
        ParseNode::Font(font) => functions::build_font(ctx, font, options),
        ParseNode::Accent(accent) => functions::build_accent(ctx, accent, options),
        ParseNode::Overline(line) => functions::build_overline(ctx, line, options),
        ParseNode::Underline(line) => functions::build_underline(ctx, line, options),
        ParseNode::Phantom(phantom) => functions::build_phantom(ctx, phantom, options),
        ParseNode::Rule(rule) => Ok(functions::build_rule(rule, options)),
        ParseNode::Kern(kern) => Ok(functions::build_kern(kern, options)),
        ParseNode::Mclass(mclass) => build_hbox(ctx, &mclass.body, options),
        ParseNode::Array(array) => build_array(ctx, array, options),
        ParseNode::Lap(lap) => functions::build_lap(ctx, lap, options),
        ParseNode::Smash(smash) => functions::build_smash(ctx, smash, options),
        ParseNode::Enclose(enclose) => functions::build_enclose(ctx, enclose, options),
        ParseNode::HorizBrace(brace) => functions::build_horiz_brace(ctx, brace, None, options),
        ParseNode::XArrow(arrow) => functions::build_xarrow(ctx, arrow, options),
        ParseNode::MathChoice(choice) => build_hbox(ctx, choice.body_for(options.style), options),
        ParseNode::Error(error) => Ok(make_text_run(ctx, &error.text, &options.error_color, options)),
        ParseNode::ColorToken(_)
        | ParseNode::LeftRightRight(_)
        | ParseNode::Infix(_)
        | ParseNode::Environment(_)
        | ParseNode::Size(_)
        | ParseNode::Raw(_) => Err(ParseError::with_token(
            ParseErrorKind::UnexpectedNode {
                node: node.node_type().to_string(),
            },
            node,
        )),
    }
}

/// A symbol in the font its mode, class and the current options call for.
pub fn build_symbol(
    ctx: &TexboxContext,
    text: &str,
    mode: Mode,
    options: &Options,
) -> Result<LayoutBox, ParseError> {
    let font = symbol_font(ctx, text, mode, options);
    make_symbol(ctx, text, font, mode, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::box_tree::Glue;
    use crate::parser::Parser;
    use crate::style::Style;
    use crate::types::Settings;

    fn build(input: &str) -> Vec<LayoutBox> {
        let settings = Settings::default();
        let ctx = TexboxContext::default();
        let ParseNode::OrdGroup(root) = Parser::new(input, &settings, &ctx).parse().unwrap() else {
            panic!("root is not a group");
        };
        build_expression(&ctx, &root.body, &Options::from_settings(&settings)).unwrap()
    }

    fn close(actual: &[f64], expected: &[f64]) -> bool {
        actual.len() == expected.len()
            && actual.iter().zip(expected).all(|(a, b)| (a - b).abs() < 1e-9)
    }

    fn glue(boxes: &[LayoutBox]) -> Vec<f64> {
        boxes
            .iter()
            .filter_map(|b| match b {
                LayoutBox::Glue(Glue { amount, .. }) => Some(*amount),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn relations_get_thick_space() {
        let boxes = build("a=b");
        assert_eq!(boxes.len(), 5);
        assert!(close(&glue(&boxes), &[5.0 / 18.0, 5.0 / 18.0]));
    }

    #[test]
    fn binary_operators_get_medium_space() {
        assert!(close(&glue(&build("a+b")), &[4.0 / 18.0, 4.0 / 18.0]));
    }

    #[test]
    fn leading_binary_operator_is_ordinary() {
        assert!(glue(&build("-a")).is_empty());
        assert!(close(&glue(&build("a=-b")), &[5.0 / 18.0, 5.0 / 18.0]));
        assert!(glue(&build("a+")).is_empty());
    }

    #[test]
    fn script_styles_use_tight_spacing() {
        let settings = Settings::default();
        let ctx = TexboxContext::default();
        let ParseNode::OrdGroup(root) = Parser::new("a+b", &settings, &ctx).parse().unwrap() else {
            panic!("root is not a group");
        };
        let options = Options::from_settings(&settings).having_style(Style::Script);
        assert!(glue(&build_expression(&ctx, &root.body, &options).unwrap()).is_empty());
    }

    #[test]
    fn explicit_spaces_are_transparent() {
        let boxes = build(r"a\,=b");
        assert_eq!(glue(&boxes).len(), 2);
    }

    #[test]
    fn styling_is_flattened() {
        let boxes = build(r"a{\scriptstyle +}b");
        assert_eq!(boxes.len(), 3);
        let flat = build(r"a\scriptstyle+b");
        assert_eq!(glue(&flat).len(), 0);
    }

    #[test]
    fn error_nodes_use_the_error_color() {
        let settings = Settings::builder().strict(crate::types::StrictMode::Ignore).build();
        let ctx = TexboxContext::default();
        let root = Parser::new(r"\foo", &settings, &ctx).parse().unwrap();
        let LayoutBox::HBox(list) = layout(&ctx, &root, &Options::from_settings(&settings)).unwrap() else {
            panic!("expected an hbox");
        };
        let LayoutBox::Glyph(glyph) = &list.children[0] else {
            panic!("expected a glyph");
        };
        assert_eq!(glyph.text, r"\foo");
        assert_eq!(glyph.color.as_deref(), Some("#cc0000"));
    }
}
