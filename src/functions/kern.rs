//! Explicit horizontal space: `\kern`, `\mkern`, `\hskip`, `\mskip`,
//! `\hspace`

use tracing::warn;

use crate::box_tree::LayoutBox;
use crate::context::TexboxContext;
use crate::define_function::{ArgType, FunctionContext, FunctionDefSpec, FunctionPropSpec};
use crate::functions::{single_arg, size_arg};
use crate::options::Options;
use crate::parser::{NodeType, ParseNode, ParseNodeKern};
use crate::types::StrictMode;
use crate::units::{Unit, calculate_size};

/// Registers the explicit spacing commands `\kern`, `\mkern`, `\hskip`,
/// `\mskip` and `\hspace`.
pub fn define_kern(ctx: &mut TexboxContext) {
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Kern),
        names: &["\\kern", "\\mkern", "\\hskip", "\\mskip", "\\hspace"],
        props: FunctionPropSpec {
            num_args: 1,
            arg_types: Some(vec![ArgType::Size]),
            primitive: true,
            allowed_in_text: true,
            ..Default::default()
        },
        handler: |context: FunctionContext, args, _opt_args| {
            let dimension = size_arg(&single_arg(&context, args)?)?;
            let math_units = context.func_name.starts_with("\\m");
            if (dimension.unit == Unit::Mu) != math_units
                && context.parser.settings.strict == StrictMode::Warn
            {
                warn!(
                    command = %context.func_name,
                    unit = %dimension.unit,
                    "kern unit does not match the command"
                );
            }
            Ok(ParseNode::Kern(ParseNodeKern {
                mode: context.parser.mode,
                loc: context.loc(),
                dimension,
            }))
        },
    });
}

/// A kern of the node's dimension at the current size.
#[must_use]
pub fn build_kern(kern: &ParseNodeKern, options: &Options) -> LayoutBox {
    LayoutBox::kern(calculate_size(&kern.dimension, options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build_box::build_expression;
    use crate::parser::Parser;
    use crate::types::Settings;

    fn kerns(input: &str) -> Vec<f64> {
        let settings = Settings::default();
        let ctx = TexboxContext::default();
        let ParseNode::OrdGroup(root) = Parser::new(input, &settings, &ctx).parse().unwrap() else {
            panic!("root is not a group");
        };
        build_expression(&ctx, &root.body, &Options::from_settings(&settings))
            .unwrap()
            .iter()
            .filter_map(|b| match b {
                LayoutBox::Kern(kern) => Some(kern.amount),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn kerns_convert_units() {
        let amounts = kerns(r"a\kern1em b\mkern18mu c\hspace{10pt}d");
        assert_eq!(amounts.len(), 3);
        assert!(amounts.iter().all(|amount| (amount - 1.0).abs() < 1e-9));
    }

    #[test]
    fn spacing_macros_expand_to_kerns() {
        let thin = kerns(r"a\,b");
        assert_eq!(thin.len(), 1);
        assert!((thin[0] - 3.0 / 18.0).abs() < 1e-9);
        let quad = kerns(r"a\quad b");
        assert!((quad[0] - 1.0).abs() < 1e-9);
        let negative = kerns(r"a\!b");
        assert!(negative[0] < 0.0);
    }
}
