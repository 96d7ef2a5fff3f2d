//! `\mathord`, `\mathbin`, ... : material with an explicit atom class
//!
//! `\stackrel`, `\overset` and `\underset` live here too: they stack one
//! argument over or under the other as operator limits, and keep the class
//! of the base.

use crate::context::TexboxContext;
use crate::define_function::{FunctionContext, FunctionDefSpec, FunctionPropSpec, ord_argument};
use crate::functions::{missing_argument, single_arg};
use crate::parser::{NodeType, OpBase, ParseNode, ParseNodeMclass, ParseNodeOp, ParseNodeSupSub};
use crate::spacing_data::AtomClass;
use crate::symbols::Atom;

fn class_of(name: &str) -> AtomClass {
    match name {
        "\\mathbin" => AtomClass::Mbin,
        "\\mathrel" => AtomClass::Mrel,
        "\\mathopen" => AtomClass::Mopen,
        "\\mathclose" => AtomClass::Mclose,
        "\\mathpunct" => AtomClass::Mpunct,
        "\\mathinner" => AtomClass::Minner,
        _ => AtomClass::Mord,
    }
}

/// A relation or binary operator keeps its class; anything else is
/// ordinary.
pub(crate) fn binrel_class(node: &ParseNode) -> AtomClass {
    match node.base_elem() {
        ParseNode::Atom(atom) if matches!(atom.family, Atom::Bin | Atom::Rel) => atom.family.into(),
        _ => AtomClass::Mord,
    }
}

/// Registers `\mathord`, `\mathbin` and the other atom class commands,
/// and `\stackrel`, `\overset` and `\underset`.
pub fn define_mclass(ctx: &mut TexboxContext) {
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Mclass),
        names: &[
            "\\mathord",
            "\\mathbin",
            "\\mathrel",
            "\\mathopen",
            "\\mathclose",
            "\\mathpunct",
            "\\mathinner",
        ],
        props: FunctionPropSpec {
            num_args: 1,
            primitive: true,
            ..Default::default()
        },
        handler: |context: FunctionContext, args, _opt_args| {
            let body = single_arg(&context, args)?;
            Ok(ParseNode::Mclass(ParseNodeMclass {
                mode: context.parser.mode,
                loc: context.loc(),
                mclass: class_of(&context.func_name),
                body: ord_argument(body),
            }))
        },
    });

    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Mclass),
        names: &["\\stackrel", "\\overset", "\\underset"],
        props: FunctionPropSpec {
            num_args: 2,
            ..Default::default()
        },
        handler: |context: FunctionContext, args, _opt_args| {
            let mut args = args.into_iter();
            let (Some(script), Some(base)) = (args.next(), args.next()) else {
                return Err(missing_argument(&context));
            };
            let name = context.func_name.as_str();
            let mclass = if name == "\\stackrel" {
                AtomClass::Mrel
            } else {
                binrel_class(&base)
            };
            let mode = context.parser.mode;
            let op = ParseNode::Op(ParseNodeOp {
                mode,
                loc: base.loc().cloned(),
                limits: true,
                always_handle_sup_sub: true,
                suppress_base_shift: name != "\\stackrel",
                base: OpBase::Body(ord_argument(base)),
            });
            let (sup, sub) = if name == "\\underset" {
                (None, Some(Box::new(script)))
            } else {
                (Some(Box::new(script)), None)
            };
            Ok(ParseNode::Mclass(ParseNodeMclass {
                mode,
                loc: context.loc(),
                mclass,
                body: vec![ParseNode::SupSub(ParseNodeSupSub {
                    mode,
                    loc: context.loc(),
                    base: Some(Box::new(op)),
                    sup,
                    sub,
                })],
            }))
        },
    });
}
