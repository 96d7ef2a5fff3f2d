//! Function registry types
//!
//! Every command the parser treats as a function (`\frac`, `\sqrt`,
//! `\text`, ...) is described by a [`FunctionDefSpec`]: how many arguments
//! it takes and of what kind, where it may appear, and the handler that
//! turns the parsed arguments into a [`ParseNode`]. The specs are registered
//! by name in [`TexboxContext::functions`](crate::TexboxContext).

use crate::parser::{NodeType, ParseNode, Parser};
use crate::symbols::Mode;
use crate::types::{BreakToken, ParseError, SourceLocation, Token};

/// How an argument is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgType {
    /// A color name or hex code, as a `ColorToken` node.
    Color,
    /// A dimension such as `1.5em`, as a `Size` node.
    Size,
    /// Unparsed token text, as a `Raw` node.
    Raw,
    /// A group parsed in the surrounding mode.
    Original,
    /// A single token or group, as a TeX primitive would read it.
    Primitive,
    /// A group parsed in the given mode.
    Mode(Mode),
}

/// What a handler gets besides its arguments.
pub struct FunctionContext<'a, 'b> {
    /// Name the function was invoked as, with its backslash.
    pub func_name: String,
    /// The parser, positioned after the arguments.
    pub parser: &'a mut Parser<'b>,
    /// The token that invoked the function.
    pub token: Option<&'a Token>,
    /// Token that ends the enclosing expression, for functions that consume
    /// the rest of the group.
    pub break_on_token_text: Option<BreakToken>,
}

impl FunctionContext<'_, '_> {
    /// Location of the invoking token.
    #[must_use]
    pub fn loc(&self) -> Option<SourceLocation> {
        self.token.and_then(|token| token.loc.clone())
    }
}

/// Builds the node for one invocation.
pub type FunctionHandler = fn(
    context: FunctionContext,
    args: Vec<ParseNode>,
    opt_args: Vec<Option<ParseNode>>,
) -> Result<ParseNode, ParseError>;

/// Parsing properties of a function.
#[derive(Debug, Clone)]
pub struct FunctionPropSpec {
    /// Number of mandatory arguments.
    pub num_args: usize,
    /// Kind of each argument, optional ones first; `None` parses every
    /// argument in the surrounding mode.
    pub arg_types: Option<Vec<ArgType>>,
    /// Whether the function may stand alone as a script or argument, as in
    /// `x^\alpha`.
    pub allowed_in_argument: bool,
    /// May be used in text mode.
    pub allowed_in_text: bool,
    /// May be used in math mode.
    pub allowed_in_math: bool,
    /// Number of `[...]` arguments before the mandatory ones.
    pub num_optional_args: usize,
    /// Whether the function splits its group in two, like `\over`.
    pub infix: bool,
    /// Whether a lone token is accepted where a group is expected.
    pub primitive: bool,
}

impl Default for FunctionPropSpec {
    fn default() -> Self {
        Self {
            num_args: 0,
            arg_types: None,
            allowed_in_argument: false,
            allowed_in_text: false,
            allowed_in_math: true,
            num_optional_args: 0,
            infix: false,
            primitive: false,
        }
    }
}

/// A function definition as written by the `define_*` registration
/// functions.
pub struct FunctionDefSpec<'b> {
    /// Type of the node the handler produces; `None` for handlers that only
    /// report errors.
    pub node_type: Option<NodeType>,
    /// Command names the handler is registered under.
    pub names: &'b [&'b str],
    /// Argument and mode properties.
    pub props: FunctionPropSpec,
    /// Builds the node from the parsed arguments.
    pub handler: FunctionHandler,
}

/// A registered function, as stored in the context.
#[derive(Debug, Clone)]
pub struct FunctionSpec {
    /// Type of node the handler returns, when fixed.
    pub node_type: Option<NodeType>,
    /// Number of mandatory arguments.
    pub num_args: usize,
    /// Types of the arguments, optional ones first.
    pub arg_types: Option<Vec<ArgType>>,
    /// May appear as a bare argument without braces.
    pub allowed_in_argument: bool,
    /// May be used in text mode.
    pub allowed_in_text: bool,
    /// May be used in math mode.
    pub allowed_in_math: bool,
    /// Number of optional `[...]` arguments.
    pub num_optional_args: usize,
    /// An infix command such as `\over`.
    pub infix: bool,
    /// Arguments are single tokens or groups, never a function call.
    pub primitive: bool,
    /// Builds the node from the parsed arguments.
    pub handler: FunctionHandler,
}

impl From<&FunctionDefSpec<'_>> for FunctionSpec {
    fn from(def: &FunctionDefSpec<'_>) -> Self {
        let props = &def.props;
        Self {
            node_type: def.node_type,
            num_args: props.num_args,
            arg_types: props.arg_types.clone(),
            allowed_in_argument: props.allowed_in_argument,
            allowed_in_text: props.allowed_in_text,
            allowed_in_math: props.allowed_in_math,
            num_optional_args: props.num_optional_args,
            infix: props.infix,
            primitive: props.primitive,
            handler: def.handler,
        }
    }
}

/// The argument shape shared by functions and environments, read by
/// [`Parser::parse_arguments`].
pub trait ArgumentSpec {
    /// Number of mandatory arguments.
    fn num_args(&self) -> usize;
    /// Number of optional arguments.
    fn num_optional_args(&self) -> usize;
    /// Types of the arguments, optional ones first.
    fn arg_types(&self) -> Option<&[ArgType]>;
    /// Whether arguments may not be function calls.
    fn primitive(&self) -> bool;
    /// Type of node produced, when fixed.
    fn node_type(&self) -> Option<NodeType>;
}

impl ArgumentSpec for FunctionSpec {
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
        self.primitive
    }

    fn node_type(&self) -> Option<NodeType> {
        self.node_type
    }
}

/// Unwraps a group holding exactly one node.
#[must_use]
pub fn normalize_argument(arg: &ParseNode) -> &ParseNode {
    if let ParseNode::OrdGroup(ord) = arg
        && ord.body.len() == 1
    {
        return &ord.body[0];
    }
    arg
}

/// The nodes of a group argument, or the argument itself.
#[must_use]
pub fn ord_argument(arg: ParseNode) -> Vec<ParseNode> {
    match arg {
        ParseNode::OrdGroup(ord) => ord.body,
        other => vec![other],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{ParseNodeOrdGroup, ParseNodeSymbol};

    fn ord(text: &str) -> ParseNode {
        ParseNode::MathOrd(ParseNodeSymbol {
            mode: Mode::Math,
            loc: None,
            text: text.to_owned(),
        })
    }

    fn group(body: Vec<ParseNode>) -> ParseNode {
        ParseNode::OrdGroup(ParseNodeOrdGroup {
            mode: Mode::Math,
            loc: None,
            body,
            semisimple: false,
        })
    }

    #[test]
    fn normalize_unwraps_single_element_groups() {
        assert_eq!(normalize_argument(&group(vec![ord("x")])), &ord("x"));
        let pair = group(vec![ord("x"), ord("y")]);
        assert_eq!(normalize_argument(&pair), &pair);
    }

    #[test]
    fn ord_argument_flattens_one_level() {
        assert_eq!(ord_argument(group(vec![ord("a"), ord("b")])).len(), 2);
        assert_eq!(ord_argument(ord("a")), vec![ord("a")]);
    }

    #[test]
    fn props_default_to_math_only() {
        let props = FunctionPropSpec::default();
        assert!(props.allowed_in_math);
        assert!(!props.allowed_in_text);
        assert_eq!(props.num_args, 0);
    }
}
