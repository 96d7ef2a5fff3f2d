//! Arrays and the environments built on them
//!
//! [`parse_array`] reads the body of any tabular environment: cells split at
//! `&`, rows at `\\` (or `\cr`), `\hline`s counted at the start of each row.
//! The environments differ only in their column specification, spacing and
//! the delimiters wrapped around the result. [`build_array`] lays the cells
//! out on a grid centred on the math axis.

use core::iter::repeat_n;
use core::mem;

use tracing::warn;

use crate::box_tree::{LayoutBox, make_v_list_shifted};
use crate::build_box::layout;
use crate::context::TexboxContext;
use crate::define_environment::{EnvContext, EnvDefSpec, EnvHandler, EnvProps};
use crate::define_function::ArgType;
use crate::functions::size_arg;
use crate::macros::MacroContextInterface as _;
use crate::options::Options;
use crate::parser::{
    AlignSpec, ColSeparationType, ColumnAlign, NodeType, NodeTypeError, ParseNode, ParseNodeArray,
    ParseNodeLeftRight, ParseNodeOrdGroup, ParseNodeStyling, Parser,
};
use crate::style::Style;
use crate::types::{BreakToken, ParseError, ParseErrorKind, StrictMode};
use crate::units::calculate_size;

/// How an environment wants its body read.
#[derive(Debug, Clone, Default)]
pub struct ArrayConfig {
    /// Adds `\arraycolsep` outside the first and last columns.
    pub hskip_before_and_after: bool,
    /// Adds `\jot` below every row.
    pub add_jot: bool,
    /// Column specification.
    pub cols: Vec<AlignSpec>,
    /// Fixed row stretch; `None` reads `\arraystretch`.
    pub arraystretch: Option<f64>,
    /// Spacing scheme for the columns.
    pub col_separation_type: Option<ColSeparationType>,
    /// Number of columns the column specification declares.
    pub max_num_cols: Option<usize>,
}

/// Consumes the `\hline`s at the start of a row.
fn count_hlines(parser: &mut Parser) -> Result<usize, ParseError> {
    let mut count = 0;
    parser.consume_spaces()?;
    while matches!(parser.fetch()?.as_str(), "\\hline" | "\\hdashline") {
        parser.consume();
        count += 1;
        parser.consume_spaces()?;
    }
    Ok(count)
}

fn arraystretch(parser: &mut Parser) -> Result<f64, ParseError> {
    let Some(text) = parser.gullet.expand_macro_as_text("\\arraystretch")? else {
        return Ok(1.0);
    };
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|stretch| stretch.is_finite() && *stretch > 0.0)
        .ok_or_else(|| ParseError::new(ParseErrorKind::InvalidArrayStretch { stretch: text.clone() }))
}

fn is_empty_cell(cell: &ParseNode) -> bool {
    match cell {
        ParseNode::Styling(styling) => match styling.body.as_slice() {
            [ParseNode::OrdGroup(group)] => group.body.is_empty(),
            _ => false,
        },
        _ => false,
    }
}

/// Parses an environment body into rows of cells, each cell a group set
/// in `style`.
///
/// Stops before `\end`, which is left for `\begin` to match. A last row
/// holding a single empty cell, as left by a trailing `\\`, is dropped.
pub fn parse_array(parser: &mut Parser, config: ArrayConfig, style: Style) -> Result<ParseNodeArray, ParseError> {
    parser.gullet.begin_group();
    let arraystretch = match config.arraystretch {
        Some(stretch) => stretch,
        None => arraystretch(parser)?,
    };

    let mut body: Vec<Vec<ParseNode>> = Vec::new();
    let mut row = Vec::new();
    let mut row_gaps = Vec::new();
    let mut hlines_before_row = vec![count_hlines(parser)?];

    // each cell is its own group
    parser.gullet.begin_group();
    loop {
        let cell = parser.parse_expression(false, Some(BreakToken::DoubleBackslash))?;
        parser.gullet.end_group();
        parser.gullet.begin_group();

        let mode = parser.mode;
        row.push(ParseNode::Styling(ParseNodeStyling {
            mode,
            loc: None,
            style,
            body: vec![ParseNode::OrdGroup(ParseNodeOrdGroup {
                mode,
                loc: None,
                body: cell,
                semisimple: false,
            })],
        }));

        let next = parser.fetch()?.clone();
        match next.as_str() {
            "&" => {
                if let Some(max) = config.max_num_cols
                    && row.len() == max
                {
                    match parser.settings.strict {
                        StrictMode::Error => {
                            return Err(ParseError::with_token(ParseErrorKind::TooManyColumns { max }, &next));
                        }
                        StrictMode::Warn => {
                            warn!(columns = max, "too few columns specified in the array column argument");
                        }
                        StrictMode::Ignore => {}
                    }
                }
                parser.consume();
            }
            "\\end" => {
                let trailing_empty = row.len() == 1 && is_empty_cell(&row[0]);
                if !trailing_empty || body.is_empty() {
                    body.push(mem::take(&mut row));
                }
                if hlines_before_row.len() < body.len() + 1 {
                    hlines_before_row.push(0);
                }
                break;
            }
            "\\\\" => {
                parser.consume();
                let gap = if parser.gullet.future().as_str() == " " {
                    None
                } else {
                    parser.parse_size_group(true)?
                };
                row_gaps.push(gap.as_ref().map(size_arg).transpose()?);
                body.push(mem::take(&mut row));
                hlines_before_row.push(count_hlines(parser)?);
            }
            found => {
                return Err(ParseError::with_token(
                    ParseErrorKind::ExpectedArrayDelimiter {
                        found: found.to_owned(),
                    },
                    &next,
                ));
            }
        }
    }
    parser.gullet.end_group();
    parser.gullet.end_group();

    Ok(ParseNodeArray {
        mode: parser.mode,
        loc: None,
        body,
        cols: config.cols,
        row_gaps,
        hlines_before_row,
        arraystretch,
        col_separation_type: config.col_separation_type,
        hskip_before_and_after: config.hskip_before_and_after,
        add_jot: config.add_jot,
    })
}

/// Reads an `array` column specification such as `r|cl`.
fn parse_colspec(arg: &ParseNode) -> Result<Vec<AlignSpec>, ParseError> {
    let ParseNode::Raw(raw) = arg else {
        return Err(NodeTypeError::TypeMismatch {
            expected: NodeType::Raw,
            actual: arg.node_type().to_string(),
        }
        .into());
    };
    raw.string
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .map(|ch| match ch {
            'l' => Ok(AlignSpec::column(ColumnAlign::Left)),
            'c' => Ok(AlignSpec::column(ColumnAlign::Center)),
            'r' => Ok(AlignSpec::column(ColumnAlign::Right)),
            '|' => Ok(AlignSpec::Separator),
            other => Err(ParseError::with_token(
                ParseErrorKind::UnknownColumnAlignment {
                    found: other.to_string(),
                },
                arg,
            )),
        })
        .collect()
}

/// Cells of environments whose name starts with `d` are set in display
/// style.
fn cell_style(env_name: &str) -> Style {
    if env_name.starts_with('d') {
        Style::Display
    } else {
        Style::Text
    }
}

fn with_delimiters(context: &EnvContext, array: ParseNodeArray, left: &str, right: &str) -> ParseNode {
    ParseNode::LeftRight(ParseNodeLeftRight {
        mode: context.mode,
        loc: None,
        body: vec![ParseNode::Array(Box::new(array))],
        left: left.to_owned(),
        right: right.to_owned(),
    })
}

const ALIGNED_HANDLER: EnvHandler = |context, _args, _opt_args| {
    let mut array = parse_array(
        context.parser,
        ArrayConfig {
            add_jot: true,
            col_separation_type: Some(ColSeparationType::Align),
            ..Default::default()
        },
        Style::Display,
    )?;

    // An empty group before every right-hand cell keeps a leading `=` or `+`
    // a relation or binary operator.
    let empty = ParseNode::OrdGroup(ParseNodeOrdGroup {
        mode: context.mode,
        loc: None,
        body: Vec::new(),
        semisimple: false,
    });
    let mut num_cols = 0;
    for row in &mut array.body {
        for cell in row.iter_mut().skip(1).step_by(2) {
            if let ParseNode::Styling(styling) = cell
                && let Some(ParseNode::OrdGroup(group)) = styling.body.first_mut()
            {
                group.body.insert(0, empty.clone());
            }
        }
        num_cols = num_cols.max(row.len());
    }

    array.cols = (0..num_cols)
        .map(|i| AlignSpec::Align {
            align: if i % 2 == 0 { ColumnAlign::Right } else { ColumnAlign::Left },
            pregap: Some(if i > 0 && i % 2 == 0 { 1.0 } else { 0.0 }),
            postgap: Some(0.0),
        })
        .collect();
    Ok(ParseNode::Array(Box::new(array)))
};

/// Registers `array`, the matrix family, `cases`, `aligned` and
/// `gathered`.
pub fn define_array(ctx: &mut TexboxContext) {
    ctx.define_environment(EnvDefSpec {
        node_type: NodeType::Array,
        names: &["array", "darray"],
        props: EnvProps {
            num_args: 1,
            arg_types: Some(vec![ArgType::Raw]),
            ..Default::default()
        },
        handler: |context, args, _opt_args| {
            let Some(spec) = args.first() else {
                return Err(ParseError::new(ParseErrorKind::ExpectedGroupAfter {
                    symbol: format!("\\begin{{{}}}", context.env_name),
                }));
            };
            let cols = parse_colspec(spec)?;
            let max_num_cols = cols
                .iter()
                .filter(|col| matches!(col, AlignSpec::Align { .. }))
                .count();
            let style = cell_style(&context.env_name);
            let array = parse_array(
                context.parser,
                ArrayConfig {
                    hskip_before_and_after: true,
                    cols,
                    max_num_cols: Some(max_num_cols),
                    ..Default::default()
                },
                style,
            )?;
            Ok(ParseNode::Array(Box::new(array)))
        },
    });

    ctx.define_environment(EnvDefSpec {
        node_type: NodeType::Array,
        names: &["matrix", "pmatrix", "bmatrix", "Bmatrix", "vmatrix", "Vmatrix"],
        props: EnvProps::default(),
        handler: |context, _args, _opt_args| {
            let delimiters = match context.env_name.as_str() {
                "pmatrix" => Some(("(", ")")),
                "bmatrix" => Some(("[", "]")),
                "Bmatrix" => Some(("\\{", "\\}")),
                "vmatrix" => Some(("|", "|")),
                "Vmatrix" => Some(("\\Vert", "\\Vert")),
                _ => None,
            };
            let mut array = parse_array(&mut *context.parser, ArrayConfig::default(), Style::Text)?;
            let num_cols = array.body.iter().map(Vec::len).max().unwrap_or(0);
            array.cols = repeat_n(AlignSpec::column(ColumnAlign::Center), num_cols).collect();
            Ok(match delimiters {
                Some((left, right)) => with_delimiters(&context, array, left, right),
                None => ParseNode::Array(Box::new(array)),
            })
        },
    });

    ctx.define_environment(EnvDefSpec {
        node_type: NodeType::Array,
        names: &["smallmatrix"],
        props: EnvProps::default(),
        handler: |context, _args, _opt_args| {
            let array = parse_array(
                context.parser,
                ArrayConfig {
                    arraystretch: Some(0.5),
                    col_separation_type: Some(ColSeparationType::Small),
                    ..Default::default()
                },
                Style::Script,
            )?;
            Ok(ParseNode::Array(Box::new(array)))
        },
    });

    ctx.define_environment(EnvDefSpec {
        node_type: NodeType::Array,
        names: &["cases", "dcases", "rcases", "drcases"],
        props: EnvProps::default(),
        handler: |context, _args, _opt_args| {
            let style = cell_style(&context.env_name);
            let array = parse_array(
                &mut *context.parser,
                ArrayConfig {
                    arraystretch: Some(1.2),
                    cols: vec![
                        AlignSpec::Align {
                            align: ColumnAlign::Left,
                            pregap: Some(0.0),
                            postgap: Some(1.0),
                        },
                        AlignSpec::Align {
                            align: ColumnAlign::Left,
                            pregap: Some(0.0),
                            postgap: Some(0.0),
                        },
                    ],
                    ..Default::default()
                },
                style,
            )?;
            Ok(if context.env_name.contains('r') {
                with_delimiters(&context, array, ".", "\\}")
            } else {
                with_delimiters(&context, array, "\\{", ".")
            })
        },
    });

    ctx.define_environment(EnvDefSpec {
        node_type: NodeType::Array,
        names: &["aligned"],
        props: EnvProps::default(),
        handler: ALIGNED_HANDLER,
    });

    ctx.define_environment(EnvDefSpec {
        node_type: NodeType::Array,
        names: &["gathered"],
        props: EnvProps::default(),
        handler: |context, _args, _opt_args| {
            let array = parse_array(
                context.parser,
                ArrayConfig {
                    cols: vec![AlignSpec::column(ColumnAlign::Center)],
                    add_jot: true,
                    col_separation_type: Some(ColSeparationType::Gather),
                    ..Default::default()
                },
                Style::Display,
            )?;
            Ok(ParseNode::Array(Box::new(array)))
        },
    });
}

/// Vertical extent of one laid-out row.
struct RowMetrics {
    height: f64,
    depth: f64,
    /// Baseline, measured down from the top of the array.
    pos: f64,
}

/// Records `count` rules at the current position, 0.25em apart.
fn place_hlines(hlines: &mut Vec<f64>, total_height: &mut f64, count: usize) {
    for i in 0..count {
        if i > 0 {
            *total_height += 0.25;
        }
        hlines.push(*total_height);
    }
}

/// `cell` padded to `width` and given the row's height and depth.
fn aligned_cell(cell: LayoutBox, width: f64, align: ColumnAlign, row: &RowMetrics) -> LayoutBox {
    let slack = width - cell.width();
    let (before, after) = match align {
        ColumnAlign::Left => (0.0, slack),
        ColumnAlign::Center => (slack / 2.0, slack / 2.0),
        ColumnAlign::Right => (slack, 0.0),
    };
    LayoutBox::hbox_with_dims(
        vec![LayoutBox::kern(before), cell, LayoutBox::kern(after)],
        width,
        row.height,
        row.depth,
    )
}

/// Lays out an array: rows are at least one `\arraystretch`-scaled strut
/// tall, columns as wide as their widest cell, and the whole grid is
/// centred on the math axis.
pub fn build_array(ctx: &TexboxContext, array: &ParseNodeArray, options: &Options) -> Result<LayoutBox, ParseError> {
    let metrics = options.metrics();
    let pt = 1.0 / metrics.pt_per_em;
    let rule_thickness = metrics.array_rule_width.max(options.min_rule_thickness);
    let arraycolsep = if array.col_separation_type == Some(ColSeparationType::Small) {
        // \thickspace, scaled as if the gap were set in script style
        let script = options.having_style(Style::Script).size_multiplier;
        0.2778 * (script / options.size_multiplier)
    } else {
        5.0 * pt
    };
    let baselineskip = 12.0 * pt;
    let jot = 3.0 * pt;
    let arrayskip = array.arraystretch * baselineskip;
    let strut_height = 0.7 * arrayskip;
    let strut_depth = 0.3 * arrayskip;

    let mut rows = Vec::with_capacity(array.body.len());
    let mut columns: Vec<Vec<(usize, LayoutBox)>> = Vec::new();
    let mut hlines = Vec::new();
    let mut total_height = 0.0;
    place_hlines(
        &mut hlines,
        &mut total_height,
        array.hlines_before_row.first().copied().unwrap_or(0),
    );

    for (r, cells) in array.body.iter().enumerate() {
        let mut height = strut_height;
        let mut depth = strut_depth;
        for (c, cell) in cells.iter().enumerate() {
            let cell = layout(ctx, cell, options)?;
            height = height.max(cell.height());
            depth = depth.max(cell.depth());
            if columns.len() <= c {
                columns.resize_with(c + 1, Vec::new);
            }
            columns[c].push((r, cell));
        }

        let mut gap = 0.0;
        if let Some(Some(row_gap)) = array.row_gaps.get(r) {
            gap = calculate_size(row_gap, options);
            if gap > 0.0 {
                depth = depth.max(gap + strut_depth);
                gap = 0.0;
            }
        }
        if array.add_jot {
            depth += jot;
        }

        rows.push(RowMetrics {
            height,
            depth,
            pos: total_height + height,
        });
        total_height += height + depth + gap;
        if let Some(&count) = array.hlines_before_row.get(r + 1) {
            place_hlines(&mut hlines, &mut total_height, count);
        }
    }

    let offset = total_height / 2.0 + metrics.axis_height;
    let num_cols = columns.len();
    let mut columns = columns.into_iter();
    let mut children = Vec::new();
    let mut col = 0;
    let mut spec = 0;
    while col < num_cols || spec < array.cols.len() {
        let mut first_separator = true;
        while let Some(AlignSpec::Separator) = array.cols.get(spec) {
            if !first_separator {
                children.push(LayoutBox::kern(metrics.double_rule_sep));
            }
            children.push(LayoutBox::kern(-rule_thickness / 2.0));
            children.push(LayoutBox::rule(
                rule_thickness,
                offset,
                total_height - offset,
                options.color.clone(),
            ));
            children.push(LayoutBox::kern(-rule_thickness / 2.0));
            first_separator = false;
            spec += 1;
        }

        let Some(cells) = columns.next() else {
            col += 1;
            spec += 1;
            continue;
        };
        let (align, pregap, postgap) = match array.cols.get(spec) {
            Some(AlignSpec::Align { align, pregap, postgap }) => (*align, *pregap, *postgap),
            _ => (ColumnAlign::Center, None, None),
        };

        if col > 0 || array.hskip_before_and_after {
            let sep = pregap.unwrap_or(arraycolsep);
            if sep != 0.0 {
                children.push(LayoutBox::kern(sep));
            }
        }

        let width = cells.iter().map(|(_, cell)| cell.width()).fold(0.0, f64::max);
        // bottom row first
        let stacked = cells
            .into_iter()
            .rev()
            .map(|(r, cell)| {
                let row = &rows[r];
                (aligned_cell(cell, width, align, row), row.pos - offset)
            })
            .collect();
        children.push(make_v_list_shifted(stacked));

        if col + 1 < num_cols || array.hskip_before_and_after {
            let sep = postgap.unwrap_or(arraycolsep);
            if sep != 0.0 {
                children.push(LayoutBox::kern(sep));
            }
        }
        col += 1;
        spec += 1;
    }

    let table = LayoutBox::hbox(children);
    if hlines.is_empty() {
        return Ok(table);
    }
    let width = table.width();
    let mut stacked = vec![(table, 0.0)];
    stacked.extend(hlines.into_iter().rev().map(|pos| {
        (
            LayoutBox::rule(width, rule_thickness, 0.0, options.color.clone()),
            pos - offset,
        )
    }));
    Ok(make_v_list_shifted(stacked))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Settings;

    fn parse(input: &str) -> Vec<ParseNode> {
        let settings = Settings::default();
        let ctx = TexboxContext::default();
        let ParseNode::OrdGroup(root) = Parser::new(input, &settings, &ctx).parse().unwrap() else {
            panic!("root is not a group");
        };
        root.body
    }

    fn parse_err(input: &str) -> ParseErrorKind {
        let settings = Settings::default();
        let ctx = TexboxContext::default();
        *Parser::new(input, &settings, &ctx).parse().unwrap_err().kind
    }

    fn array_of(node: &ParseNode) -> &ParseNodeArray {
        match node {
            ParseNode::Array(array) => array,
            ParseNode::LeftRight(lr) => array_of(&lr.body[0]),
            other => panic!("not an array: {}", other.node_type()),
        }
    }

    fn build(input: &str) -> LayoutBox {
        let settings = Settings::default();
        let ctx = TexboxContext::default();
        let root = Parser::new(input, &settings, &ctx).parse().unwrap();
        layout(&ctx, &root, &Options::from_settings(&settings)).unwrap()
    }

    fn count_rules(b: &LayoutBox) -> usize {
        match b {
            LayoutBox::Rule(_) => 1,
            LayoutBox::HBox(list) | LayoutBox::VBox(list) => list.children.iter().map(count_rules).sum(),
            _ => 0,
        }
    }

    #[test]
    fn rows_and_cells() {
        let body = parse(r"\begin{matrix} a & b \\ c & d \\ e \end{matrix}");
        let array = array_of(&body[0]);
        let widths: Vec<usize> = array.body.iter().map(Vec::len).collect();
        assert_eq!(widths, vec![2, 2, 1]);
        assert_eq!(array.cols.len(), 2);
        assert!(!array.hskip_before_and_after);
    }

    #[test]
    fn trailing_newline_drops_the_empty_row() {
        let body = parse(r"\begin{matrix} a \\ b \\ \end{matrix}");
        assert_eq!(array_of(&body[0]).body.len(), 2);
    }

    #[test]
    fn cr_separates_rows() {
        let body = parse(r"\begin{matrix} a \cr b \end{matrix}");
        assert_eq!(array_of(&body[0]).body.len(), 2);
    }

    #[test]
    fn hlines_are_counted_per_row() {
        let body = parse(r"\begin{array}{c} \hline a \\ \hline\hline b \end{array}");
        let array = array_of(&body[0]);
        assert_eq!(array.hlines_before_row, vec![1, 2, 0]);
    }

    #[test]
    fn row_gaps_are_recorded() {
        let body = parse(r"\begin{matrix} a \\[1em] b \end{matrix}");
        let array = array_of(&body[0]);
        assert_eq!(array.row_gaps.len(), 1);
        assert_eq!(array.row_gaps[0].map(|gap| gap.number), Some(1.0));
    }

    #[test]
    fn column_specification() {
        let body = parse(r"\begin{array}{l|r} a & b \end{array}");
        assert_eq!(
            array_of(&body[0]).cols,
            vec![
                AlignSpec::column(ColumnAlign::Left),
                AlignSpec::Separator,
                AlignSpec::column(ColumnAlign::Right),
            ]
        );
        assert_eq!(
            parse_err(r"\begin{array}{x} a \end{array}"),
            ParseErrorKind::UnknownColumnAlignment { found: "x".to_owned() }
        );
    }

    #[test]
    fn matrix_delimiters() {
        let body = parse(r"\begin{pmatrix} a \end{pmatrix}");
        assert!(matches!(&body[0], ParseNode::LeftRight(lr) if lr.left == "(" && lr.right == ")"));
        let body = parse(r"\begin{cases} a & b \end{cases}");
        assert!(matches!(&body[0], ParseNode::LeftRight(lr) if lr.left == "\\{" && lr.right == "."));
        assert!((array_of(&body[0]).arraystretch - 1.2).abs() < 1e-9);
    }

    #[test]
    fn aligned_alternates_right_and_left() {
        let body = parse(r"\begin{aligned} a &= b & c &= d \end{aligned}");
        let array = array_of(&body[0]);
        let aligns: Vec<ColumnAlign> = array
            .cols
            .iter()
            .filter_map(|col| match col {
                AlignSpec::Align { align, .. } => Some(*align),
                AlignSpec::Separator => None,
            })
            .collect();
        assert_eq!(
            aligns,
            vec![ColumnAlign::Right, ColumnAlign::Left, ColumnAlign::Right, ColumnAlign::Left]
        );
        assert!(array.add_jot);
        let ParseNode::Styling(cell) = &array.body[0][1] else {
            panic!("cells are styled groups");
        };
        let ParseNode::OrdGroup(group) = &cell.body[0] else {
            panic!("cells wrap a group");
        };
        assert!(matches!(&group.body[0], ParseNode::OrdGroup(empty) if empty.body.is_empty()));
    }

    #[test]
    fn arraystretch_macro() {
        let body = parse(r"\def\arraystretch{1.5}\begin{matrix} a \end{matrix}");
        let array = body
            .iter()
            .find(|node| matches!(node, ParseNode::Array(_)))
            .map(array_of)
            .unwrap();
        assert!((array.arraystretch - 1.5).abs() < 1e-9);
        assert!(matches!(
            parse_err(r"\def\arraystretch{-1}\begin{matrix} a \end{matrix}"),
            ParseErrorKind::InvalidArrayStretch { .. }
        ));
    }

    #[test]
    fn unexpected_delimiter() {
        assert!(matches!(
            parse_err(r"\begin{matrix} a } \end{matrix}"),
            ParseErrorKind::ExpectedArrayDelimiter { .. } | ParseErrorKind::UnbalancedGroup { .. }
        ));
    }

    #[test]
    fn too_many_columns_under_strict_error() {
        let settings = Settings::builder().strict(StrictMode::Error).build();
        let ctx = TexboxContext::default();
        let err = Parser::new(r"\begin{array}{c} a & b \end{array}", &settings, &ctx)
            .parse()
            .unwrap_err();
        assert_eq!(*err.kind, ParseErrorKind::TooManyColumns { max: 1 });
        assert!(parse(r"\begin{array}{c} a & b \end{array}").len() == 1);
    }

    #[test]
    fn layout_is_centred_on_the_axis() {
        let settings = Settings::default();
        let axis = Options::from_settings(&settings).metrics().axis_height;
        let grid = build(r"\begin{matrix} a \\ b \\ c \end{matrix}");
        assert!(((grid.height() - grid.depth()) / 2.0 - axis).abs() < 1e-6);
    }

    #[test]
    fn rows_and_columns_grow_the_grid() {
        let one = build(r"\begin{matrix} a \end{matrix}");
        let wide = build(r"\begin{matrix} a & b \end{matrix}");
        let tall = build(r"\begin{matrix} a \\ b \end{matrix}");
        assert!(wide.width() > one.width());
        assert!(tall.height() + tall.depth() > one.height() + one.depth());
    }

    #[test]
    fn rules_for_separators_and_hlines() {
        assert_eq!(count_rules(&build(r"\begin{array}{cc} a & b \end{array}")), 0);
        assert_eq!(count_rules(&build(r"\begin{array}{c|c} a & b \end{array}")), 1);
        assert_eq!(count_rules(&build(r"\begin{array}{cc} \hline a & b \\ \hline \end{array}")), 2);
    }

    #[test]
    fn smallmatrix_is_smaller() {
        let small = build(r"\begin{smallmatrix} a & b \\ c & d \end{smallmatrix}");
        let normal = build(r"\begin{matrix} a & b \\ c & d \end{matrix}");
        assert!(small.width() < normal.width());
        assert!(small.height() + small.depth() < normal.height() + normal.depth());
    }
}
