//! texbox - typesets a subset of LaTeX math into positioned boxes
//!
//! An expression goes through five stages: the lexer splits it into tokens,
//! the macro expander rewrites macros, the parser builds an expression tree,
//! layout turns that tree into TeX-style boxes measured with font metrics,
//! and the serializer places every glyph and rule at an explicit offset.
//! The result is an [`OutputTree`] that a backend can draw without knowing
//! anything about TeX.
//!
//! ```rust
//! use texbox::{Settings, TexboxContext, render};
//!
//! let ctx = TexboxContext::default();
//! let tree = render(&ctx, r"x^2 + \frac{1}{2}", &Settings::default()).unwrap();
//! assert!(tree.width > 0.0);
//! ```
#![warn(missing_docs)]
#![warn(clippy::nursery)]
#![warn(clippy::pedantic)]
#![warn(clippy::str_to_string)]
#![warn(clippy::non_ascii_literal)]
#![warn(clippy::pointer_format)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![warn(clippy::print_stdout)]
#![warn(clippy::print_stderr)]
#![warn(clippy::absolute_paths)]
#![warn(clippy::panic)]
#![warn(clippy::expect_used)]
#![warn(clippy::unwrap_in_result)]
#![warn(clippy::if_then_some_else_none)]
#![warn(clippy::unused_trait_names)]
#![warn(clippy::get_unwrap)]
#![warn(clippy::impl_trait_in_params)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::unimplemented)]
#![warn(clippy::return_and_then)]
#![warn(clippy::needless_raw_strings)]
#![warn(clippy::clone_on_ref_ptr)]
#![warn(clippy::rc_buffer)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::map_with_unused_argument_over_ranges)]
#![warn(clippy::missing_asserts_for_indexing)]
#![warn(clippy::separated_literal_suffix)]
#![warn(clippy::ref_patterns)]
// Not sure
#![allow(clippy::indexing_slicing)]
#![allow(clippy::string_slice)]
#![allow(clippy::pub_use)]
// clippy exceptions
#![allow(clippy::float_cmp)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::default_numeric_fallback)]
#![allow(clippy::single_call_fn)]

extern crate alloc;
pub mod box_tree;
pub mod build_box;
pub mod build_common;
pub mod context;
pub mod core;
pub mod define_environment;
pub mod define_function;
pub mod delimiter;
pub mod font_metrics;
pub mod font_metrics_data;
pub mod functions;
pub mod lexer;
pub mod macro_expander;
pub mod macros;
pub mod namespace;
pub mod options;
/// Builds the expression tree from the expanded token stream.
pub mod parser;
/// Positions the box tree for output.
pub mod serialize;
pub mod spacing_data;
pub mod style;
pub mod symbols;
pub mod types;
pub mod units;

/// Registries shared by every render: functions, environments, symbols and
/// the metrics provider.
///
/// Building a context registers every built-in command, which is not free.
/// Build one and share it; it is `Send + Sync` and never changes during a
/// render.
///
/// ```rust
/// use texbox::TexboxContext;
///
/// let ctx = TexboxContext::default();
/// assert!(ctx.functions.contains_key("\\frac"));
/// ```
pub use crate::context::TexboxContext;

/// Parses, lays out and positions a LaTeX math expression.
///
/// # Parameters
///
/// * `ctx` - The [`TexboxContext`] holding registered functions and metrics
/// * `expression` - The LaTeX math expression
/// * `settings` - Display mode, error policy, limits and user macros
///
/// # Errors
///
/// Returns the first fatal [`ParseError`]. With `throw_on_error` off, fatal
/// errors other than invalid settings are rendered instead: the output holds
/// the whole input as a single glyph in the error color.
///
/// # Examples
///
/// ```rust
/// use texbox::{Settings, TexboxContext, render};
///
/// let ctx = TexboxContext::default();
/// let settings = Settings::builder().display_mode(true).build();
/// let tree = render(&ctx, r"\sum_{i=1}^{n} x_i", &settings).unwrap();
/// assert!(tree.display_mode);
/// ```
///
/// Errors carry the offending position:
/// ```rust
/// use texbox::{Settings, TexboxContext, render};
///
/// let ctx = TexboxContext::default();
/// match render(&ctx, r"\frac{a}{", &Settings::default()) {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error at position {}: {}", e.position.unwrap_or(0), e),
/// }
/// ```
pub use crate::core::render;

/// Parses and lays out an expression, returning the root [`LayoutBox`]
/// before positioning.
///
/// [`LayoutBox`]: crate::box_tree::LayoutBox
pub use crate::core::render_to_box;

/// Parses an expression and returns its expression tree.
///
/// NOTE: The tree representation is not stable between releases.
pub use crate::core::parse;

/// Renders an expression straight to JSON.
pub use crate::core::render_to_json;

/// Glyph measurements, and the trait for supplying them.
///
/// [`TexboxContext::default`] measures with [`BuiltinMetrics`]; use
/// [`TexboxContext::with_metrics`] for another provider.
pub use crate::font_metrics::{BuiltinMetrics, CharacterMetrics, FontName, MetricsProvider};

/// Error type for parsing and rendering failures.
///
/// The [`ParseErrorKind`] behind [`ParseError::kind`] says what went wrong,
/// and `position`/`length` locate it in the input when known. `Display`
/// appends the surrounding source with the offending range underlined.
///
/// ```rust
/// use texbox::{ParseErrorKind, Settings, TexboxContext, render};
///
/// let ctx = TexboxContext::default();
/// let err = render(&ctx, "{x", &Settings::default()).unwrap_err();
/// assert!(matches!(*err.kind, ParseErrorKind::UnbalancedGroup { .. }));
/// ```
pub use crate::types::{ParseError, ParseErrorKind};

/// Per-render configuration and its strictness levels.
///
/// ```rust
/// use texbox::{Settings, StrictMode};
///
/// let settings = Settings::builder()
///     .display_mode(true)
///     .throw_on_error(false)
///     .strict(StrictMode::Ignore)
///     .build();
/// assert!(settings.display_mode);
/// assert!(!settings.throw_on_error);
/// ```
pub use crate::types::{Settings, StrictMode};

/// The positioned result of a render.
pub use crate::serialize::{OutputNode, OutputTree};

/// Current version of the texbox crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
