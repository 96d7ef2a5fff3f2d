//! Function implementations
//!
//! Every control sequence that takes arguments, or that changes how the rest
//! of its group is read, is registered here. Each submodule contributes a
//! `define_*` function that adds its commands to a [`TexboxContext`] and,
//! when its nodes need a layout of their own, a `build_*` function called
//! from [`crate::build_box::layout`].
//!
//! ## Key Components
//!
//! - **Fractions** (`\frac`, `\binom`, `\over`, ...): [`define_genfrac`] and
//!   [`build_genfrac`].
//! - **Scripts and operators**: [`build_supsub`] places scripts, and hands
//!   operators with limits to [`build_op`].
//! - **Delimiters**: `\left...\right` and the `\big` family.
//! - **Group modifiers**: styles, sizes, colors and fonts, which apply to the
//!   rest of the group or to one argument.
//! - **Environments**: `\begin`/`\end`, dispatching to the environments in
//!   [`crate::define_environment`].
//!
//! [`TexboxContext`]: crate::TexboxContext

mod accent;
mod arrow;
mod color;
mod cr;
mod delimsizing;
mod enclose;
mod environment;
mod font;
mod genfrac;
mod horiz_brace;
mod kern;
mod lap;
mod lines;
mod mathchoice;
mod mclass;
mod op;
mod phantom;
mod rule;
mod sizing;
mod smash;
mod sqrt;
mod styling;
mod supsub;
mod text;

use crate::define_function::FunctionContext;
use crate::parser::{NodeType, NodeTypeError, ParseNode};
use crate::types::{ParseError, ParseErrorKind};
use crate::units::Measurement;

pub use accent::{build_accent, define_accent};
pub use arrow::{build_xarrow, define_arrow};
pub use color::define_color;
pub use cr::define_cr;
pub use delimsizing::{build_delimsizing, build_left_right, define_delimsizing};
pub use enclose::{build_enclose, define_enclose};
pub use environment::define_environment;
pub use font::{build_font, define_font};
pub use genfrac::{build_genfrac, define_genfrac};
pub use horiz_brace::{build_horiz_brace, define_horiz_brace};
pub use kern::{build_kern, define_kern};
pub use lap::{build_lap, define_lap};
pub use lines::{build_overline, build_underline, define_lines};
pub use mathchoice::define_mathchoice;
pub use mclass::define_mclass;
pub use op::{build_op, define_op};
pub use phantom::{build_phantom, define_phantom};
pub use rule::{build_rule, define_rule};
pub use sizing::define_sizing;
pub use smash::{build_smash, define_smash};
pub use sqrt::{build_sqrt, define_sqrt};
pub use styling::define_styling;
pub use supsub::build_supsub;
pub use text::{build_text, define_text};

/// The only argument of a one-argument function.
pub(crate) fn single_arg(context: &FunctionContext, args: Vec<ParseNode>) -> Result<ParseNode, ParseError> {
    args.into_iter().next().ok_or_else(|| missing_argument(context))
}

/// Error for a handler called with fewer arguments than it declared.
pub(crate) fn missing_argument(context: &FunctionContext) -> ParseError {
    ParseError::with_token(
        ParseErrorKind::ExpectedGroupAfter {
            symbol: context.func_name.clone(),
        },
        &context.loc(),
    )
}

/// The measurement of a size argument.
pub(crate) fn size_arg(arg: &ParseNode) -> Result<Measurement, ParseError> {
    match arg {
        ParseNode::Size(size) => Ok(size.value),
        other => Err(ParseError::with_token(
            NodeTypeError::TypeMismatch {
                expected: NodeType::Size,
                actual: other.node_type().to_string(),
            },
            other,
        )),
    }
}
