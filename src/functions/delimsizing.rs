//! Delimiters: the fixed sizes of `\big` and friends, and `\left...\right`
//! pairs that grow to fit their contents.

use phf::phf_map;

use crate::box_tree::LayoutBox;
use crate::build_box::{Surround, build_expression_within};
use crate::context::TexboxContext;
use crate::define_function::{FunctionContext, FunctionDefSpec, FunctionPropSpec, normalize_argument};
use crate::delimiter::{is_delimiter, left_right_delim, sized_delim};
use crate::functions::single_arg;
use crate::macros::MacroContextInterface as _;
use crate::options::Options;
use crate::parser::{
    NodeType, NodeTypeError, ParseNode, ParseNodeDelimsizing, ParseNodeLeftRight,
    ParseNodeLeftRightRight,
};
use crate::spacing_data::AtomClass;
use crate::types::{ParseError, ParseErrorKind};

/// Size (1 to 4) and class of each fixed-size command.
static DELIMITER_SIZES: phf::Map<&'static str, (usize, AtomClass)> = phf_map! {
    "\\bigl" => (1, AtomClass::Mopen),
    "\\Bigl" => (2, AtomClass::Mopen),
    "\\biggl" => (3, AtomClass::Mopen),
    "\\Biggl" => (4, AtomClass::Mopen),
    "\\bigr" => (1, AtomClass::Mclose),
    "\\Bigr" => (2, AtomClass::Mclose),
    "\\biggr" => (3, AtomClass::Mclose),
    "\\Biggr" => (4, AtomClass::Mclose),
    "\\bigm" => (1, AtomClass::Mrel),
    "\\Bigm" => (2, AtomClass::Mrel),
    "\\biggm" => (3, AtomClass::Mrel),
    "\\Biggm" => (4, AtomClass::Mrel),
    "\\big" => (1, AtomClass::Mord),
    "\\Big" => (2, AtomClass::Mord),
    "\\bigg" => (3, AtomClass::Mord),
    "\\Bigg" => (4, AtomClass::Mord),
};

/// The delimiter named by a function argument.
fn check_delimiter(delim: &ParseNode, context: &FunctionContext) -> Result<String, ParseError> {
    let symbol = normalize_argument(delim);
    let text = symbol.symbol_text().map_err(|err| {
        ParseError::with_token(
            ParseErrorKind::InvalidDelimiter {
                delimiter: err.to_string(),
                function: context.func_name.clone(),
            },
            symbol,
        )
    })?;
    if !is_delimiter(text) {
        return Err(ParseError::with_token(
            ParseErrorKind::InvalidDelimiter {
                delimiter: text.to_owned(),
                function: context.func_name.clone(),
            },
            symbol,
        ));
    }
    Ok(text.to_owned())
}

/// Registers `\left`, `\right` and `\big` through `\Bigg` with their
/// l/m/r variants.
pub fn define_delimsizing(ctx: &mut TexboxContext) {
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Delimsizing),
        names: &[
            "\\bigl", "\\Bigl", "\\biggl", "\\Biggl", "\\bigr", "\\Bigr", "\\biggr", "\\Biggr",
            "\\bigm", "\\Bigm", "\\biggm", "\\Biggm", "\\big", "\\Big", "\\bigg", "\\Bigg",
        ],
        props: FunctionPropSpec {
            num_args: 1,
            primitive: true,
            ..Default::default()
        },
        handler: |context: FunctionContext, args, _opt_args| {
            let delim = check_delimiter(&single_arg(&context, args)?, &context)?;
            let (size, mclass) = DELIMITER_SIZES
                .get(context.func_name.as_str())
                .copied()
                .unwrap_or((1, AtomClass::Mord));
            Ok(ParseNode::Delimsizing(ParseNodeDelimsizing {
                mode: context.parser.mode,
                loc: context.loc(),
                size,
                mclass,
                delim,
            }))
        },
    });

    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::LeftRightRight),
        names: &["\\right"],
        props: FunctionPropSpec {
            num_args: 1,
            primitive: true,
            ..Default::default()
        },
        handler: |context: FunctionContext, args, _opt_args| {
            let delim = check_delimiter(&single_arg(&context, args)?, &context)?;
            Ok(ParseNode::LeftRightRight(ParseNodeLeftRightRight {
                mode: context.parser.mode,
                loc: context.loc(),
                delim,
            }))
        },
    });

    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::LeftRight),
        names: &["\\left"],
        props: FunctionPropSpec {
            num_args: 1,
            primitive: true,
            ..Default::default()
        },
        handler: |context: FunctionContext, args, _opt_args| {
            let left = check_delimiter(&single_arg(&context, args)?, &context)?;
            let loc = context.loc();
            let parser = context.parser;
            parser.gullet.begin_group();
            let body = parser.parse_expression(false, None)?;
            parser.expect("\\right", false)?;
            let right = parser.parse_function(None, None)?;
            parser.gullet.end_group();
            let right = match right {
                Some(ParseNode::LeftRightRight(right)) => right.delim,
                Some(other) => {
                    return Err(NodeTypeError::TypeMismatch {
                        expected: NodeType::LeftRightRight,
                        actual: other.node_type().to_string(),
                    }
                    .into());
                }
                None => {
                    return Err(ParseError::with_token(
                        ParseErrorKind::ExpectedGroupAfter {
                            symbol: "\\left".to_owned(),
                        },
                        &loc,
                    ));
                }
            };
            Ok(ParseNode::LeftRight(ParseNodeLeftRight {
                mode: parser.mode,
                loc,
                body,
                left,
                right,
            }))
        },
    });
}

/// The body between two delimiters sized to its height and depth. Inside,
/// the list is spaced as if an opening atom preceded it and a closing atom
/// followed it.
pub fn build_left_right(
    ctx: &TexboxContext,
    group: &ParseNodeLeftRight,
    options: &Options,
) -> Result<LayoutBox, ParseError> {
    let surround = Surround {
        left: Some(AtomClass::Mopen),
        right: Some(AtomClass::Mclose),
    };
    let inner = build_expression_within(ctx, &group.body, options, surround)?;
    let height = inner.iter().map(LayoutBox::height).fold(0.0, f64::max);
    let depth = inner.iter().map(LayoutBox::depth).fold(0.0, f64::max);

    let mut children = Vec::with_capacity(inner.len() + 2);
    children.push(left_right_delim(ctx, &group.left, height, depth, options, group.mode)?);
    children.extend(inner);
    children.push(left_right_delim(ctx, &group.right, height, depth, options, group.mode)?);
    Ok(LayoutBox::hbox(children))
}

/// Lays out a fixed-size delimiter.
pub fn build_delimsizing(
    ctx: &TexboxContext,
    group: &ParseNodeDelimsizing,
    options: &Options,
) -> Result<LayoutBox, ParseError> {
    sized_delim(ctx, &group.delim, group.size, options, group.mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build_box::layout;
    use crate::parser::Parser;
    use crate::types::Settings;

    fn parse(input: &str) -> Result<Vec<ParseNode>, ParseError> {
        let settings = Settings::default();
        let ctx = TexboxContext::default();
        match Parser::new(input, &settings, &ctx).parse()? {
            ParseNode::OrdGroup(root) => Ok(root.body),
            other => panic!("root is {}", other.node_type()),
        }
    }

    fn build(input: &str) -> LayoutBox {
        let settings = Settings::default();
        let ctx = TexboxContext::default();
        let root = Parser::new(input, &settings, &ctx).parse().unwrap();
        layout(&ctx, &root, &Options::from_settings(&settings)).unwrap()
    }

    fn total(b: &LayoutBox) -> f64 {
        b.height() + b.depth()
    }

    #[test]
    fn left_right_collects_its_body() {
        let body = parse(r"\left( x + y \right]").unwrap();
        assert_eq!(body.len(), 1);
        let ParseNode::LeftRight(lr) = &body[0] else {
            panic!("expected left-right");
        };
        assert_eq!(lr.left, "(");
        assert_eq!(lr.right, "]");
        assert_eq!(lr.body.len(), 3);
    }

    #[test]
    fn null_delimiters_are_allowed() {
        let body = parse(r"\left. x \right|").unwrap();
        assert!(matches!(&body[0], ParseNode::LeftRight(lr) if lr.left == "."));
    }

    #[test]
    fn non_delimiters_are_rejected() {
        let err = parse(r"\left x \right)").unwrap_err();
        assert!(matches!(*err.kind, ParseErrorKind::InvalidDelimiter { .. }));
    }

    #[test]
    fn unmatched_left_is_an_error() {
        assert!(parse(r"\left( x").is_err());
        assert!(parse(r"x \right)").is_err());
    }

    #[test]
    fn delimiters_grow_with_their_contents() {
        let small = build(r"\left( x \right)");
        let tall = build(r"\left( \frac{\frac{a}{b}}{\frac{c}{d}} \right)");
        assert!(total(&tall) > total(&small));
        let LayoutBox::HBox(root) = &tall else {
            panic!("not an hbox");
        };
        let LayoutBox::HBox(lr) = &root.children[0] else {
            panic!("not an hbox");
        };
        let left = lr.children.first().unwrap();
        let frac = &lr.children[1];
        assert!(total(left) >= 0.9 * total(frac));
    }

    #[test]
    fn big_sizes_increase() {
        let sizes: Vec<f64> = [r"\big(", r"\Big(", r"\bigg(", r"\Bigg("]
            .iter()
            .map(|input| total(&build(input)))
            .collect();
        assert!(sizes.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn big_variants_set_the_class() {
        let body = parse(r"\bigl( \bigm| \bigr)").unwrap();
        let classes: Vec<AtomClass> = body
            .iter()
            .map(|node| match node {
                ParseNode::Delimsizing(delim) => delim.mclass,
                other => panic!("unexpected {}", other.node_type()),
            })
            .collect();
        assert_eq!(classes, vec![AtomClass::Mopen, AtomClass::Mrel, AtomClass::Mclose]);
    }
}
