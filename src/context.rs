//! Shared, read-only render context
//!
//! A [`TexboxContext`] holds everything a render looks up but never changes:
//! the function and environment registries, the symbol tables and the
//! metrics provider. Building one registers every built-in command, so
//! create it once and share it across renders (it is `Send + Sync`).

use alloc::sync::Arc;

use crate::define_environment::{self, EnvDefSpec, EnvSpec};
use crate::define_function::{FunctionDefSpec, FunctionSpec};
use crate::font_metrics::{BuiltinMetrics, MetricsProvider};
use crate::functions;
use crate::namespace::KeyMap;
use crate::symbols::{Symbols, create_symbols};

/// Registries shared by every render: functions, environments, symbols
/// and the metrics provider.
#[derive(Debug, Clone)]
pub struct TexboxContext {
    /// Registered functions by command name.
    pub functions: KeyMap<String, FunctionSpec>,
    /// Registered environments by name.
    pub environments: KeyMap<String, EnvSpec>,
    /// Math and text symbol tables.
    pub symbols: Symbols,
    /// Glyph metrics used by layout.
    pub metrics: Arc<dyn MetricsProvider>,
}

impl TexboxContext {
    /// A context with every built-in command, measuring glyphs with
    /// `metrics` instead of the built-in tables.
    #[must_use]
    pub fn with_metrics(metrics: Arc<dyn MetricsProvider>) -> Self {
        Self {
            metrics,
            ..Self::default()
        }
    }

    /// Registers a function under each of its names.
    pub fn define_function(&mut self, spec: FunctionDefSpec) {
        let data = FunctionSpec::from(&spec);
        for name in spec.names {
            self.functions.insert((*name).to_owned(), data.clone());
        }
    }

    /// Registers an environment under each of its names.
    pub fn define_environment(&mut self, spec: EnvDefSpec) {
        let data = EnvSpec::from(&spec);
        for name in spec.names {
            self.environments.insert((*name).to_owned(), data.clone());
        }
    }
}

impl Default for TexboxContext {
    fn default() -> Self {
        let mut ctx = Self {
            functions: KeyMap::default(),
            environments: KeyMap::default(),
            symbols: create_symbols(),
            metrics: Arc::new(BuiltinMetrics),
        };
        functions::define_accent(&mut ctx);
        functions::define_arrow(&mut ctx);
        functions::define_color(&mut ctx);
        functions::define_cr(&mut ctx);
        functions::define_delimsizing(&mut ctx);
        functions::define_enclose(&mut ctx);
        functions::define_environment(&mut ctx);
        functions::define_font(&mut ctx);
        functions::define_genfrac(&mut ctx);
        functions::define_horiz_brace(&mut ctx);
        functions::define_kern(&mut ctx);
        functions::define_lap(&mut ctx);
        functions::define_lines(&mut ctx);
        functions::define_mathchoice(&mut ctx);
        functions::define_mclass(&mut ctx);
        functions::define_op(&mut ctx);
        functions::define_phantom(&mut ctx);
        functions::define_rule(&mut ctx);
        functions::define_sizing(&mut ctx);
        functions::define_smash(&mut ctx);
        functions::define_sqrt(&mut ctx);
        functions::define_styling(&mut ctx);
        functions::define_text(&mut ctx);
        define_environment::define_array(&mut ctx);
        ctx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_builtin_commands() {
        let ctx = TexboxContext::default();
        for name in [
            r"\frac",
            r"\sqrt",
            r"\left",
            r"\text",
            r"\begin",
            r"\over",
            r"\overset",
            r"\smash",
            r"\mathrlap",
            r"\fbox",
            r"\overbrace",
            r"\xrightarrow",
            r"\mathchoice",
        ] {
            assert!(ctx.functions.contains_key(name), "{name} is not registered");
        }
        for name in ["matrix", "pmatrix", "array", "cases", "aligned"] {
            assert!(ctx.environments.contains_key(name), "{name} is not registered");
        }
        assert!(ctx.functions[r"\over"].infix);
    }

    #[test]
    fn context_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TexboxContext>();
    }
}
