#![allow(dead_code)]

use std::{
    panic::{UnwindSafe, catch_unwind},
    sync::OnceLock,
};

use texbox::{
    OutputNode, OutputTree, ParseError, ParseErrorKind, Settings, StrictMode, TexboxContext,
    box_tree::LayoutBox,
    parse,
    parser::ParseNode,
    render, render_to_box,
};

static DEFAULT_CONTEXT: OnceLock<TexboxContext> = OnceLock::new();
pub fn default_ctx() -> &'static TexboxContext {
    DEFAULT_CONTEXT.get_or_init(TexboxContext::default)
}

pub struct TestExpr<'a> {
    pub expr: String,
    pub ctx: &'a TexboxContext,
    pub file: &'static str,
    pub line: u32,
    pub code: &'static str,
}

impl TestExpr<'_> {
    fn origin(&self) -> String {
        format!("{}:{} ({})", self.file, self.line, self.code)
    }

    pub fn to_parse(self, settings: &Settings) -> Result<ParseNode, ParseError> {
        parse(self.ctx, &self.expr, settings)
    }

    /// The error the expression fails to parse with.
    pub fn not_to_parse(self, settings: &Settings) -> ParseError {
        match parse(self.ctx, &self.expr, settings) {
            Ok(tree) => panic!(
                "expected '{}' not to parse at {}, got {tree:#?}",
                self.expr,
                self.origin()
            ),
            Err(err) => err,
        }
    }

    pub fn to_build(self, settings: &Settings) -> Result<OutputTree, ParseError> {
        render(self.ctx, &self.expr, settings)
    }

    pub fn not_to_build(self, settings: &Settings) -> ParseError {
        match render(self.ctx, &self.expr, settings) {
            Ok(tree) => panic!(
                "expected '{}' not to build at {}, got {tree:#?}",
                self.expr,
                self.origin()
            ),
            Err(err) => err,
        }
    }

    /// Both expressions produce the same positioned output.
    pub fn to_build_like(self, other: &str, settings: &Settings) -> Result<(), ParseError> {
        let left = render(self.ctx, &self.expr, settings)?;
        let right = render(self.ctx, other, settings)?;
        assert_eq!(
            left,
            right,
            "output differs between '{}' and '{}' at {}",
            self.expr,
            other,
            self.origin()
        );
        Ok(())
    }
}

pub fn expect_impl(
    expr: &str,
    file: &'static str,
    line: u32,
    code: &'static str,
) -> TestExpr<'static> {
    TestExpr {
        expr: expr.to_owned(),
        ctx: default_ctx(),
        file,
        line,
        code,
    }
}

#[macro_export]
macro_rules! expect {
    ($e:expr) => {
        $crate::expect_impl($e, file!(), line!(), stringify!($e))
    };
}

#[cfg(feature = "backtrace")]
fn error_trace(err: &ParseError) -> String {
    err.backtrace.to_string()
}

#[cfg(not(feature = "backtrace"))]
fn error_trace(_err: &ParseError) -> String {
    "(enable the `backtrace` feature for a trace)".to_owned()
}

pub fn it<F>(desc: &str, test_fn: F)
where
    F: FnOnce() -> Result<(), ParseError> + UnwindSafe,
{
    init_tracing();
    match catch_unwind(test_fn) {
        Ok(Ok(())) => {}
        Ok(Err(e)) => {
            panic!(
                "Test '{}' failed with Result::Err: {}\nBacktrace:\n{}",
                desc,
                e,
                error_trace(&e)
            );
        }
        Err(panic_payload) => {
            let msg = if let Some(s) = panic_payload.downcast_ref::<&str>() {
                (*s).to_owned()
            } else if let Some(s) = panic_payload.downcast_ref::<String>() {
                s.clone()
            } else {
                "<non-string panic payload>".to_owned()
            };
            panic!("Test '{desc}' panicked: {msg}");
        }
    }
}

/// Routes `tracing` output through the test harness, filtered by `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Settings helpers
pub fn strict_settings() -> Settings {
    Settings::builder().strict(StrictMode::Error).build()
}

pub fn ignore_settings() -> Settings {
    Settings::builder().strict(StrictMode::Ignore).build()
}

pub fn lenient_settings() -> Settings {
    Settings::builder().throw_on_error(false).build()
}

pub fn display_settings() -> Settings {
    Settings::builder().display_mode(true).build()
}

/// Top-level nodes of the parsed expression.
pub fn get_parsed(expr: &str, settings: &Settings) -> Result<Vec<ParseNode>, ParseError> {
    match parse(default_ctx(), expr, settings)? {
        ParseNode::OrdGroup(root) => Ok(root.body),
        other => panic!("root of '{expr}' is {}", other.node_type()),
    }
}

pub fn get_built(expr: &str, settings: &Settings) -> Result<LayoutBox, ParseError> {
    render_to_box(default_ctx(), expr, settings)
}

pub fn render_default(expr: &str) -> Result<OutputTree, ParseError> {
    render(default_ctx(), expr, &Settings::default())
}

pub fn error_kind(err: &ParseError) -> &ParseErrorKind {
    &err.kind
}

/// A glyph of the output with its absolute position.
#[derive(Debug, Clone)]
pub struct Placed {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub color: Option<String>,
}

/// Every glyph in the output, left to right in tree order.
pub fn glyphs(tree: &OutputTree) -> Vec<Placed> {
    fn walk(node: &OutputNode, x: f64, y: f64, out: &mut Vec<Placed>) {
        let (x, y) = (x + node.x(), y + node.y());
        if let OutputNode::Glyph(glyph) = node {
            out.push(Placed {
                text: glyph.text.clone(),
                x,
                y,
                width: glyph.width,
                color: glyph.color.clone(),
            });
        }
        for child in node.children() {
            walk(child, x, y, out);
        }
    }
    let mut out = Vec::new();
    walk(&tree.root, 0.0, 0.0, &mut out);
    out
}

/// The first glyph drawing `text`.
pub fn glyph<'a>(placed: &'a [Placed], text: &str) -> &'a Placed {
    placed
        .iter()
        .find(|g| g.text == text)
        .unwrap_or_else(|| panic!("no glyph '{text}' in {placed:#?}"))
}

/// Every rule in the output, as `(x, y, width)` in absolute coordinates.
pub fn rules(tree: &OutputTree) -> Vec<(f64, f64, f64)> {
    fn walk(node: &OutputNode, x: f64, y: f64, out: &mut Vec<(f64, f64, f64)>) {
        let (x, y) = (x + node.x(), y + node.y());
        if let OutputNode::Rule(rule) = node {
            out.push((x, y, rule.width));
        }
        for child in node.children() {
            walk(child, x, y, out);
        }
    }
    let mut out = Vec::new();
    walk(&tree.root, 0.0, 0.0, &mut out);
    out
}

/// Checks that every list, glyph and rule has finite, non-negative
/// dimensions.
pub fn assert_dimensions_valid(node: &OutputNode) {
    let (width, height, depth) = match node {
        OutputNode::HList(list) | OutputNode::VList(list) => (list.width, list.height, list.depth),
        OutputNode::Glyph(glyph) => (glyph.width, glyph.height, glyph.depth),
        OutputNode::Rule(rule) => (rule.width, rule.height, rule.depth),
    };
    for value in [width, height, depth, node.x(), node.y()] {
        assert!(value.is_finite(), "non-finite dimension in {node:?}");
    }
    for value in [width, height, depth] {
        assert!(value >= 0.0, "negative dimension in {node:?}");
    }
    for child in node.children() {
        assert_dimensions_valid(child);
    }
}

#[macro_export]
macro_rules! assert_let {
    ($pat:pat = $expr:expr, $($arg:tt)+) => {
        let $pat = $expr else {
            panic!($($arg)+);
        };
    };
    ($pat:pat = $expr:expr) => {
        let $pat = $expr else {
            panic!(
                "assert_let failed: pattern `{}` did not match {} at {}:{} \n{:#?}",
                stringify!($pat), stringify!($expr),
                file!(), line!(),
                $expr
            );
        };
    };
}
