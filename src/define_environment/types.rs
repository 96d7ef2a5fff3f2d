use crate::define_function::{ArgType, ArgumentSpec};
use crate::parser::{AnyParseNode, NodeType, Parser};
use crate::symbols::Mode;
use crate::types::ParseError;

/// What an environment handler gets besides its arguments.
pub struct EnvContext<'a, 'b> {
    /// Mode the environment was opened in.
    pub mode: Mode,
    /// Name inside `\begin{...}`.
    pub env_name: String,
    /// The parser, positioned after the `\begin` arguments.
    pub parser: &'a mut Parser<'b>,
}

/// Parses the body of an environment once its arguments are read.
pub type EnvHandler = fn(
    context: EnvContext,
    args: Vec<AnyParseNode>,
    opt_args: Vec<Option<AnyParseNode>>,
) -> Result<AnyParseNode, ParseError>;

/// Arguments an environment reads after `\begin{name}`.
#[derive(Debug, Clone, Default)]
pub struct EnvProps {
    /// Number of mandatory arguments.
    pub num_args: usize,
    /// Types of the arguments.
    pub arg_types: Option<Vec<ArgType>>,
    /// May be used in text mode.
    pub allowed_in_text: bool,
    /// Number of optional arguments.
    pub num_optional_args: usize,
}

/// A registered environment, as stored in the context.
#[derive(Debug, Clone)]
pub struct EnvSpec {
    /// Type of node the handler returns.
    pub node_type: NodeType,
    /// Number of mandatory arguments.
    pub num_args: usize,
    /// Types of the arguments.
    pub arg_types: Option<Vec<ArgType>>,
    /// May be used in text mode.
    pub allowed_in_text: bool,
    /// Number of optional arguments.
    pub num_optional_args: usize,
    /// Parses the body.
    pub handler: EnvHandler,
}

impl ArgumentSpec for EnvSpec {
    fn num_args(&self) -> usize {
        self.num_args
    }

    fn num_optional_args(&self) -> usize {
        self.num_optional_args
    }

    fn arg_types(&self) -> Option<&[ArgType]> {
        self.arg_types.as_deref()
    }

    fn primitive(&self) -> bool {
        false
    }

    fn node_type(&self) -> Option<NodeType> {
        Some(self.node_type)
    }
}
