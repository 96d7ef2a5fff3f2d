//! Parse node definitions
//!
//! The parser produces a tree of [`ParseNode`]s. The set of node kinds is
//! closed: every command the parser understands maps onto one of the
//! variants below, and the layout engine matches on them exhaustively.
//! Every node records the mode it was parsed in and, when it came from the
//! input rather than a macro body, its source range.

use strum::{AsRefStr, Display, EnumDiscriminants};
use thiserror::Error;

use crate::spacing_data::AtomClass;
use crate::style::Style;
use crate::symbols::{Atom, Mode};
use crate::types::{ErrorLocationProvider, SourceLocation, Token};
use crate::units::Measurement;

/// How columns of an array are spaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColSeparationType {
    /// `aligned`: alternating right/left columns.
    Align,
    /// `gathered`: one centred column.
    Gather,
    /// `smallmatrix`: script-sized gaps.
    Small,
}

/// Horizontal alignment of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ColumnAlign {
    /// Flush left.
    #[strum(serialize = "l")]
    Left,
    /// Centred.
    #[strum(serialize = "c")]
    Center,
    /// Flush right.
    #[strum(serialize = "r")]
    Right,
}

/// One entry of an array's column specification.
#[derive(Debug, Clone, PartialEq)]
pub enum AlignSpec {
    /// A vertical rule, `|` in the column spec.
    Separator,
    /// A column, with optional gaps (in em) overriding `\arraycolsep`.
    Align {
        /// How cells in the column are aligned.
        align: ColumnAlign,
        /// Space before the column.
        pregap: Option<f64>,
        /// Space after the column.
        postgap: Option<f64>,
    },
}

impl AlignSpec {
    /// A column with the default gaps.
    #[must_use]
    pub const fn column(align: ColumnAlign) -> Self {
        Self::Align {
            align,
            pregap: None,
            postgap: None,
        }
    }
}

/// Which dimensions a phantom keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhantomKind {
    /// `\phantom`: width, height and depth.
    Full,
    /// `\hphantom`: width only.
    Horizontal,
    /// `\vphantom`: height and depth only.
    Vertical,
}

/// Which way a lap's body sticks out of its zero-width box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LapAlignment {
    /// `\llap`: the body ends where the box is.
    Left,
    /// `\rlap`: the body starts where the box is.
    Right,
    /// `\clap`: the body is centred on the box.
    Center,
}

/// What a large operator draws.
#[derive(Debug, Clone, PartialEq)]
pub enum OpBase {
    /// A symbol from the size fonts, such as `\sum`.
    Symbol(char),
    /// An upright name, such as `\lim`.
    Name(String),
    /// Arbitrary material, from `\mathop` and `\operatorname`.
    Body(Vec<ParseNode>),
}

/// A node of the parse tree.
#[derive(Debug, Clone, PartialEq, EnumDiscriminants)]
#[strum_discriminants(vis(pub))]
#[strum_discriminants(derive(Display, Hash, AsRefStr), strum(serialize_all = "lowercase"))]
#[strum_discriminants(name(NodeType))]
pub enum AnyParseNode {
    // Structure
    /// An array or matrix environment.
    Array(Box<ParseNodeArray>),
    /// A group of nodes laid out in sequence.
    OrdGroup(ParseNodeOrdGroup),
    /// A base with superscript and/or subscript.
    SupSub(ParseNodeSupSub),
    /// A fraction or binomial.
    Genfrac(Box<ParseNodeGenfrac>),
    /// `\left...\right` with its body.
    LeftRight(ParseNodeLeftRight),
    /// A `\right` not yet matched with its `\left`.
    #[strum_discriminants(strum(serialize = "leftright-right"))]
    LeftRightRight(ParseNodeLeftRightRight),
    /// A radical, with an optional index.
    Sqrt(Box<ParseNodeSqrt>),

    // Symbols
    /// A symbol with an atom class of its own.
    Atom(ParseNodeAtom),
    /// An ordinary math symbol, usually a letter.
    MathOrd(ParseNodeSymbol),
    /// An ordinary symbol drawn upright: digits, text letters.
    TextOrd(ParseNodeSymbol),
    /// A spacing symbol such as `\ ` or `~`.
    Spacing(ParseNodeSymbol),

    // Functions
    /// A large or named operator.
    Op(ParseNodeOp),
    /// `\text` and its variants.
    Text(ParseNodeText),
    /// Material in an explicit style.
    Styling(ParseNodeStyling),
    /// Material in a math font.
    Font(ParseNodeFont),
    /// Colored material.
    Color(ParseNodeColor),
    /// A color argument.
    #[strum_discriminants(strum(serialize = "color-token"))]
    ColorToken(ParseNodeColorToken),
    /// Material in an explicit size.
    Sizing(ParseNodeSizing),
    /// An accent over a base.
    Accent(Box<ParseNodeAccent>),
    /// `\overline`.
    Overline(ParseNodeBody),
    /// `\underline`.
    Underline(ParseNodeBody),
    /// Invisible material that keeps some of its size.
    Phantom(ParseNodePhantom),
    /// A solid box from `\rule`.
    Rule(ParseNodeRule),
    /// Explicit horizontal space.
    Kern(ParseNodeKern),
    /// Material with an explicit atom class.
    Mclass(ParseNodeMclass),
    /// A delimiter at a fixed size, from `\big` and friends.
    Delimsizing(ParseNodeDelimsizing),
    /// Material of zero width.
    Lap(ParseNodeLap),
    /// Material with its height or depth removed.
    Smash(ParseNodeSmash),
    /// Material in a ruled frame.
    Enclose(ParseNodeEnclose),
    /// A horizontal brace over or under a base.
    HorizBrace(Box<ParseNodeHorizBrace>),
    /// An arrow stretched to fit its labels.
    XArrow(Box<ParseNodeXArrow>),
    /// Alternatives chosen by style at layout time.
    MathChoice(Box<ParseNodeMathChoice>),

    // Parser intermediates
    /// An infix command awaiting its group.
    Infix(ParseNodeInfix),
    /// An `\end` awaiting its `\begin`.
    Environment(ParseNodeEnvironment),
    /// A size argument.
    Size(ParseNodeSize),
    /// A raw string argument.
    Raw(ParseNodeRaw),

    /// Input that failed recoverably, rendered as an inline marker.
    Error(ParseNodeError),
}

/// The parse tree node type.
pub type ParseNode = AnyParseNode;

/// `{...}`, or an implicit group such as an array cell.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeOrdGroup {
    /// Mode the node was parsed in.
    pub mode: Mode,
    /// Source range, or `None` for material from a macro body.
    pub loc: Option<SourceLocation>,
    /// The group's contents.
    pub body: Vec<ParseNode>,
    /// Set for groups that are transparent to inter-atom spacing.
    pub semisimple: bool,
}

/// A base with scripts attached by `^` and `_`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeSupSub {
    /// Mode the node was parsed in.
    pub mode: Mode,
    /// Source range, or `None` for material from a macro body.
    pub loc: Option<SourceLocation>,
    /// The nucleus, absent for a script at the start of a group.
    pub base: Option<Box<ParseNode>>,
    /// Superscript.
    pub sup: Option<Box<ParseNode>>,
    /// Subscript.
    pub sub: Option<Box<ParseNode>>,
}

/// Fractions and binomials.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeGenfrac {
    /// Mode the node was parsed in.
    pub mode: Mode,
    /// Source range, or `None` for material from a macro body.
    pub loc: Option<SourceLocation>,
    /// `\cfrac`: struts the numerator.
    pub continued: bool,
    /// Numerator.
    pub numer: ParseNode,
    /// Denominator.
    pub denom: ParseNode,
    /// Draws the fraction bar; false for `\binom` and `\atop`.
    pub has_bar_line: bool,
    /// Delimiter on the left, such as `(` for `\binom`.
    pub left_delim: Option<String>,
    /// Delimiter on the right.
    pub right_delim: Option<String>,
    /// Style forced by `\dfrac`/`\tfrac`.
    pub size: Option<Style>,
    /// Bar thickness from `\genfrac` or `\above`.
    pub bar_size: Option<Measurement>,
}

/// `\left`, `\right` and everything between.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeLeftRight {
    /// Mode the node was parsed in.
    pub mode: Mode,
    /// Source range, or `None` for material from a macro body.
    pub loc: Option<SourceLocation>,
    /// Material between the delimiters.
    pub body: Vec<ParseNode>,
    /// The `\left` delimiter; `.` for none.
    pub left: String,
    /// The `\right` delimiter; `.` for none.
    pub right: String,
}

/// A `\right` delimiter, consumed by the enclosing `\left`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeLeftRightRight {
    /// Mode the node was parsed in.
    pub mode: Mode,
    /// Source range, or `None` for material from a macro body.
    pub loc: Option<SourceLocation>,
    /// The delimiter.
    pub delim: String,
}

/// `\sqrt` and `\sqrt[n]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeSqrt {
    /// Mode the node was parsed in.
    pub mode: Mode,
    /// Source range, or `None` for material from a macro body.
    pub loc: Option<SourceLocation>,
    /// The radicand.
    pub body: ParseNode,
    /// The root index.
    pub index: Option<ParseNode>,
}

/// A symbol with an atom class of its own (relations, binary operators,
/// delimiters, punctuation).
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeAtom {
    /// Mode the node was parsed in.
    pub mode: Mode,
    /// Source range, or `None` for material from a macro body.
    pub loc: Option<SourceLocation>,
    /// The symbol's atom class.
    pub family: Atom,
    /// The symbol's name in the input.
    pub text: String,
}

/// A single symbol: letters, digits, spaces and the like.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeSymbol {
    /// Mode the node was parsed in.
    pub mode: Mode,
    /// Source range, or `None` for material from a macro body.
    pub loc: Option<SourceLocation>,
    /// The symbol's name in the input.
    pub text: String,
}

/// A large operator (`\sum`), a named one (`\lim`) or `\mathop`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeOp {
    /// Mode the node was parsed in.
    pub mode: Mode,
    /// Source range, or `None` for material from a macro body.
    pub loc: Option<SourceLocation>,
    /// Scripts go above and below in display style.
    pub limits: bool,
    /// Scripts go above and below in every style (`\limits`).
    pub always_handle_sup_sub: bool,
    /// Keeps the symbol on the baseline instead of centring it on the axis.
    pub suppress_base_shift: bool,
    /// What the operator draws.
    pub base: OpBase,
}

/// `\text`, `\textbf` and the other text commands.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeText {
    /// Mode the node was parsed in.
    pub mode: Mode,
    /// Source range, or `None` for material from a macro body.
    pub loc: Option<SourceLocation>,
    /// The text, in text mode.
    pub body: Vec<ParseNode>,
    /// The command that introduced the text, such as `\textbf`.
    pub font: Option<String>,
}

/// `\displaystyle` and friends, applied to the rest of the group.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeStyling {
    /// Mode the node was parsed in.
    pub mode: Mode,
    /// Source range, or `None` for material from a macro body.
    pub loc: Option<SourceLocation>,
    /// The style to lay the body out in.
    pub style: Style,
    /// The material in that style.
    pub body: Vec<ParseNode>,
}

/// `\mathbf` and the other math font commands.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeFont {
    /// Mode the node was parsed in.
    pub mode: Mode,
    /// Source range, or `None` for material from a macro body.
    pub loc: Option<SourceLocation>,
    /// Font command without its backslash, such as `mathbf`.
    pub font: String,
    /// The material in that font.
    pub body: Box<ParseNode>,
}

/// `\color` and `\textcolor`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeColor {
    /// Mode the node was parsed in.
    pub mode: Mode,
    /// Source range, or `None` for material from a macro body.
    pub loc: Option<SourceLocation>,
    /// The color, as given.
    pub color: String,
    /// The colored material.
    pub body: Vec<ParseNode>,
}

/// A parsed color argument.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeColorToken {
    /// Mode the node was parsed in.
    pub mode: Mode,
    /// Source range, or `None` for material from a macro body.
    pub loc: Option<SourceLocation>,
    /// The color, as given.
    pub color: String,
}

/// `\tiny` through `\Huge`, applied to the rest of the group.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeSizing {
    /// Mode the node was parsed in.
    pub mode: Mode,
    /// Source range, or `None` for material from a macro body.
    pub loc: Option<SourceLocation>,
    /// Size index from 1 (`\tiny`) to 11 (`\Huge`).
    pub size: usize,
    /// The material in that size.
    pub body: Vec<ParseNode>,
}

/// `\hat`, `\vec` and the other accents.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeAccent {
    /// Mode the node was parsed in.
    pub mode: Mode,
    /// Source range, or `None` for material from a macro body.
    pub loc: Option<SourceLocation>,
    /// The accent command, such as `\hat`.
    pub label: String,
    /// Stretches to the width of the base (`\widehat`, `\overrightarrow`).
    pub is_stretchy: bool,
    /// Shifts with the base glyph's skew.
    pub is_shifty: bool,
    /// The accented material.
    pub base: ParseNode,
}

/// A node wrapping a single body, such as `\overline`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeBody {
    /// Mode the node was parsed in.
    pub mode: Mode,
    /// Source range, or `None` for material from a macro body.
    pub loc: Option<SourceLocation>,
    /// The wrapped material.
    pub body: Box<ParseNode>,
}

/// `\phantom`, `\hphantom` and `\vphantom`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodePhantom {
    /// Mode the node was parsed in.
    pub mode: Mode,
    /// Source range, or `None` for material from a macro body.
    pub loc: Option<SourceLocation>,
    /// Which dimensions are kept.
    pub kind: PhantomKind,
    /// The invisible material.
    pub body: Vec<ParseNode>,
}

/// `\rule[shift]{width}{height}`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeRule {
    /// Mode the node was parsed in.
    pub mode: Mode,
    /// Source range, or `None` for material from a macro body.
    pub loc: Option<SourceLocation>,
    /// Raise above the baseline.
    pub shift: Option<Measurement>,
    /// Width of the rule.
    pub width: Measurement,
    /// Height of the rule.
    pub height: Measurement,
}

/// `\kern`, `\mkern`, `\hskip`, `\mskip` and `\hspace`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeKern {
    /// Mode the node was parsed in.
    pub mode: Mode,
    /// Source range, or `None` for material from a macro body.
    pub loc: Option<SourceLocation>,
    /// The amount of space.
    pub dimension: Measurement,
}

/// `\mathbin` and friends: material with an explicit atom class.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeMclass {
    /// Mode the node was parsed in.
    pub mode: Mode,
    /// Source range, or `None` for material from a macro body.
    pub loc: Option<SourceLocation>,
    /// The class the material takes part in spacing as.
    pub mclass: AtomClass,
    /// The material.
    pub body: Vec<ParseNode>,
}

/// `\rlap` and friends: a body that takes no horizontal space.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeLap {
    /// Mode the node was parsed in.
    pub mode: Mode,
    /// Source range, or `None` for material from a macro body.
    pub loc: Option<SourceLocation>,
    /// Which way the body sticks out.
    pub alignment: LapAlignment,
    /// The lapped material.
    pub body: Box<ParseNode>,
}

/// `\smash`: a body whose height, depth or both count as zero.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeSmash {
    /// Mode the node was parsed in.
    pub mode: Mode,
    /// Source range, or `None` for material from a macro body.
    pub loc: Option<SourceLocation>,
    /// The smashed material.
    pub body: Box<ParseNode>,
    /// The height counts as zero.
    pub smash_height: bool,
    /// The depth counts as zero.
    pub smash_depth: bool,
}

/// `\fbox` and `\boxed`: a body inside a ruled frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeEnclose {
    /// Mode the node was parsed in.
    pub mode: Mode,
    /// Source range, or `None` for material from a macro body.
    pub loc: Option<SourceLocation>,
    /// The command, such as `\boxed`.
    pub label: String,
    /// The framed material.
    pub body: Box<ParseNode>,
}

/// `\overbrace` and `\underbrace`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeHorizBrace {
    /// Mode the node was parsed in.
    pub mode: Mode,
    /// Source range, or `None` for material from a macro body.
    pub loc: Option<SourceLocation>,
    /// The command, such as `\overbrace`.
    pub label: String,
    /// The brace goes above the base.
    pub is_over: bool,
    /// The material the brace spans.
    pub base: ParseNode,
}

/// `\xrightarrow` and the other extensible arrows.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeXArrow {
    /// Mode the node was parsed in.
    pub mode: Mode,
    /// Source range, or `None` for material from a macro body.
    pub loc: Option<SourceLocation>,
    /// The command, such as `\xrightarrow`.
    pub label: String,
    /// Material above the arrow.
    pub body: ParseNode,
    /// Material below the arrow, from the optional argument.
    pub below: Option<ParseNode>,
}

/// `\mathchoice`: one body for each style size.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeMathChoice {
    /// Mode the node was parsed in.
    pub mode: Mode,
    /// Source range, or `None` for material from a macro body.
    pub loc: Option<SourceLocation>,
    /// Body for display style.
    pub display: Vec<ParseNode>,
    /// Body for text style.
    pub text: Vec<ParseNode>,
    /// Body for script style.
    pub script: Vec<ParseNode>,
    /// Body for scriptscript style.
    pub scriptscript: Vec<ParseNode>,
}

impl ParseNodeMathChoice {
    /// The body TeX would pick in `style`.
    #[must_use]
    pub fn body_for(&self, style: Style) -> &[ParseNode] {
        match style.size() {
            0 => &self.display,
            1 => &self.text,
            2 => &self.script,
            _ => &self.scriptscript,
        }
    }
}

/// `\big(` and friends.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeDelimsizing {
    /// Mode the node was parsed in.
    pub mode: Mode,
    /// Source range, or `None` for material from a macro body.
    pub loc: Option<SourceLocation>,
    /// 1 to 4, from `\big` to `\Bigg`.
    pub size: usize,
    /// Atom class from the command's `l`, `m` or `r` suffix.
    pub mclass: AtomClass,
    /// The delimiter.
    pub delim: String,
}

/// An infix command such as `\over`, rewritten into a fraction once the
/// surrounding group is known.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeInfix {
    /// Mode the node was parsed in.
    pub mode: Mode,
    /// Source range, or `None` for material from a macro body.
    pub loc: Option<SourceLocation>,
    /// The prefix command the group is rewritten into.
    pub replace_with: String,
    /// Bar thickness for `\above`.
    pub size: Option<Measurement>,
    /// The infix command's token, for error positions.
    pub token: Option<Token>,
}

/// `\end{name}`, consumed by the matching `\begin`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeEnvironment {
    /// Mode the node was parsed in.
    pub mode: Mode,
    /// Source range, or `None` for material from a macro body.
    pub loc: Option<SourceLocation>,
    /// The environment name.
    pub name: String,
}

/// A parsed size argument.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeSize {
    /// Mode the node was parsed in.
    pub mode: Mode,
    /// Source range, or `None` for material from a macro body.
    pub loc: Option<SourceLocation>,
    /// The measurement.
    pub value: Measurement,
    /// The argument was empty.
    pub is_blank: bool,
}

/// An unparsed string argument.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeRaw {
    /// Mode the node was parsed in.
    pub mode: Mode,
    /// Source range, or `None` for material from a macro body.
    pub loc: Option<SourceLocation>,
    /// The argument text.
    pub string: String,
}

/// An array, matrix, `cases`, `aligned` or `gathered` environment.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeArray {
    /// Mode the node was parsed in.
    pub mode: Mode,
    /// Source range, or `None` for material from a macro body.
    pub loc: Option<SourceLocation>,
    /// Rows of cells.
    pub body: Vec<Vec<ParseNode>>,
    /// Column specification; empty means as many centred columns as needed.
    pub cols: Vec<AlignSpec>,
    /// Extra space after each row, from `\\[size]`.
    pub row_gaps: Vec<Option<Measurement>>,
    /// Number of `\hline`s before each row, plus one entry after the last.
    pub hlines_before_row: Vec<usize>,
    /// Factor applied to the row strut, from `\arraystretch`.
    pub arraystretch: f64,
    /// Spacing scheme for environments other than `array`.
    pub col_separation_type: Option<ColSeparationType>,
    /// Adds `\arraycolsep` before the first and after the last column.
    pub hskip_before_and_after: bool,
    /// Adds `\jot` below each row.
    pub add_jot: bool,
}

/// Input that failed recoverably.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeError {
    /// Mode the node was parsed in.
    pub mode: Mode,
    /// Source range, or `None` for material from a macro body.
    pub loc: Option<SourceLocation>,
    /// Description of the failure.
    pub message: String,
    /// The offending source text, drawn verbatim.
    pub text: String,
}

/// A node was not of the type a function expected.
#[allow(missing_docs)]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NodeTypeError {
    #[error("Expected node of type {expected}, but got {actual}")]
    TypeMismatch { expected: NodeType, actual: String },
    #[error("Expected node of symbol group type, but got {actual}")]
    NotSymbolNode { actual: String },
}

impl AnyParseNode {
    /// Whether the innermost element is a single symbol, a TeXbook
    /// "character box".
    #[must_use]
    pub fn is_character_box(&self) -> bool {
        matches!(
            self.base_elem(),
            Self::MathOrd(_) | Self::TextOrd(_) | Self::Atom(_)
        )
    }

    /// The innermost element of single-element groups, colors and fonts.
    #[must_use]
    pub fn base_elem(&self) -> &Self {
        match self {
            Self::OrdGroup(ParseNodeOrdGroup { body, .. })
            | Self::Color(ParseNodeColor { body, .. })
                if body.len() == 1 =>
            {
                body[0].base_elem()
            }
            Self::Font(font) => font.body.base_elem(),
            _ => self,
        }
    }

    /// The node's type tag.
    #[must_use]
    pub fn node_type(&self) -> NodeType {
        NodeType::from(self)
    }

    /// Mode the node was parsed in.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        match self {
            Self::Array(node) => node.mode,
            Self::OrdGroup(node) => node.mode,
            Self::SupSub(node) => node.mode,
            Self::Genfrac(node) => node.mode,
            Self::LeftRight(node) => node.mode,
            Self::LeftRightRight(node) => node.mode,
            Self::Sqrt(node) => node.mode,
            Self::Atom(node) => node.mode,
            Self::MathOrd(node) | Self::TextOrd(node) | Self::Spacing(node) => node.mode,
            Self::Op(node) => node.mode,
            Self::Text(node) => node.mode,
            Self::Styling(node) => node.mode,
            Self::Font(node) => node.mode,
            Self::Color(node) => node.mode,
            Self::ColorToken(node) => node.mode,
            Self::Sizing(node) => node.mode,
            Self::Accent(node) => node.mode,
            Self::Overline(node) | Self::Underline(node) => node.mode,
            Self::Phantom(node) => node.mode,
            Self::Rule(node) => node.mode,
            Self::Kern(node) => node.mode,
            Self::Mclass(node) => node.mode,
            Self::Delimsizing(node) => node.mode,
            Self::Lap(node) => node.mode,
            Self::Smash(node) => node.mode,
            Self::Enclose(node) => node.mode,
            Self::HorizBrace(node) => node.mode,
            Self::XArrow(node) => node.mode,
            Self::MathChoice(node) => node.mode,
            Self::Infix(node) => node.mode,
            Self::Environment(node) => node.mode,
            Self::Size(node) => node.mode,
            Self::Raw(node) => node.mode,
            Self::Error(node) => node.mode,
        }
    }

    /// Source range of the node, when it came from the input.
    #[must_use]
    pub const fn loc(&self) -> Option<&SourceLocation> {
        match self {
            Self::Array(node) => node.loc.as_ref(),
            Self::OrdGroup(node) => node.loc.as_ref(),
            Self::SupSub(node) => node.loc.as_ref(),
            Self::Genfrac(node) => node.loc.as_ref(),
            Self::LeftRight(node) => node.loc.as_ref(),
            Self::LeftRightRight(node) => node.loc.as_ref(),
            Self::Sqrt(node) => node.loc.as_ref(),
            Self::Atom(node) => node.loc.as_ref(),
            Self::MathOrd(node) | Self::TextOrd(node) | Self::Spacing(node) => node.loc.as_ref(),
            Self::Op(node) => node.loc.as_ref(),
            Self::Text(node) => node.loc.as_ref(),
            Self::Styling(node) => node.loc.as_ref(),
            Self::Font(node) => node.loc.as_ref(),
            Self::Color(node) => node.loc.as_ref(),
            Self::ColorToken(node) => node.loc.as_ref(),
            Self::Sizing(node) => node.loc.as_ref(),
            Self::Accent(node) => node.loc.as_ref(),
            Self::Overline(node) | Self::Underline(node) => node.loc.as_ref(),
            Self::Phantom(node) => node.loc.as_ref(),
            Self::Rule(node) => node.loc.as_ref(),
            Self::Kern(node) => node.loc.as_ref(),
            Self::Mclass(node) => node.loc.as_ref(),
            Self::Delimsizing(node) => node.loc.as_ref(),
            Self::Lap(node) => node.loc.as_ref(),
            Self::Smash(node) => node.loc.as_ref(),
            Self::Enclose(node) => node.loc.as_ref(),
            Self::HorizBrace(node) => node.loc.as_ref(),
            Self::XArrow(node) => node.loc.as_ref(),
            Self::MathChoice(node) => node.loc.as_ref(),
            Self::Infix(node) => node.loc.as_ref(),
            Self::Environment(node) => node.loc.as_ref(),
            Self::Size(node) => node.loc.as_ref(),
            Self::Raw(node) => node.loc.as_ref(),
            Self::Error(node) => node.loc.as_ref(),
        }
    }

    /// The text of symbol nodes.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Atom(node) => Some(&node.text),
            Self::MathOrd(node) | Self::TextOrd(node) | Self::Spacing(node) => Some(&node.text),
            _ => None,
        }
    }

    /// The symbol text, or an error naming what was found instead.
    pub fn symbol_text(&self) -> Result<&str, NodeTypeError> {
        self.text().ok_or_else(|| NodeTypeError::NotSymbolNode {
            actual: self.node_type().to_string(),
        })
    }
}

impl ErrorLocationProvider for AnyParseNode {
    fn loc(&self) -> Option<&SourceLocation> {
        Self::loc(self)
    }
}

/// Checks that `node` has type `expected`.
pub fn assert_node_type(node: &AnyParseNode, expected: NodeType) -> Result<(), NodeTypeError> {
    let actual = node.node_type();
    if actual == expected {
        Ok(())
    } else {
        Err(NodeTypeError::TypeMismatch {
            expected,
            actual: actual.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn character_boxes_look_through_groups() {
        assert!(ord("x").is_character_box());
        assert!(group(vec![group(vec![ord("x")])]).is_character_box());
        assert!(!group(vec![ord("x"), ord("y")]).is_character_box());
        assert_eq!(group(vec![ord("x")]).base_elem(), &ord("x"));
    }

    #[test]
    fn node_types_have_kebab_names() {
        assert_eq!(ord("x").node_type(), NodeType::MathOrd);
        assert_eq!(NodeType::LeftRightRight.to_string(), "leftright-right");
        assert_eq!(NodeType::OrdGroup.to_string(), "ordgroup");
        assert_eq!(NodeType::HorizBrace.to_string(), "horizbrace");
        assert_eq!(NodeType::MathChoice.to_string(), "mathchoice");
    }

    #[test]
    fn type_assertions() {
        assert!(assert_node_type(&ord("x"), NodeType::MathOrd).is_ok());
        let err = assert_node_type(&ord("x"), NodeType::OrdGroup).unwrap_err();
        assert_eq!(err.to_string(), "Expected node of type ordgroup, but got mathord");
        assert_eq!(ord("x").symbol_text(), Ok("x"));
        assert!(group(Vec::new()).symbol_text().is_err());
    }
}
