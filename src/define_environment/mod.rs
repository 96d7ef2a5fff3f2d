//! Environments
//!
//! `\begin{name}...\end{name}` blocks. Each environment is registered under
//! one or more names with an [`EnvDefSpec`]; the `\begin` function looks the
//! name up, reads the environment's arguments and hands the body to its
//! handler. All environments here are variations of the array.

mod array;
mod types;

use crate::parser::NodeType;

pub use array::{ArrayConfig, build_array, define_array, parse_array};
pub use types::*;

/// An environment definition as written by the registration functions.
#[derive(Debug, Clone)]
pub struct EnvDefSpec<'b> {
    /// Type of node the handler returns.
    pub node_type: NodeType,
    /// Environment names the handler is registered under.
    pub names: &'b [&'b str],
    /// Argument properties.
    pub props: EnvProps,
    /// Parses the body.
    pub handler: EnvHandler,
}

impl From<&EnvDefSpec<'_>> for EnvSpec {
    fn from(def: &EnvDefSpec<'_>) -> Self {
        Self {
            node_type: def.node_type,
            num_args: def.props.num_args,
            arg_types: def.props.arg_types.clone(),
            allowed_in_text: def.props.allowed_in_text,
            num_optional_args: def.props.num_optional_args,
            handler: def.handler,
        }
    }
}
