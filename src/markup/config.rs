//! Render configuration
//!
//! `defaults/render.default.toml` is embedded so that the documented defaults
//! and [`RenderOptions::default`] never drift apart. Callers layer TOML
//! snippets or single-key overrides on top through [`Loader`]. Nothing here
//! touches the filesystem.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../../defaults/render.default.toml");

/// Knobs for the renderer
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RenderOptions {
    /// Indentation unit, repeated once per level
    pub indent: String,
    /// Level of the outermost element in a render call
    pub root_level: isize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent: "  ".to_string(),
            root_level: -1,
        }
    }
}

impl RenderOptions {
    /// Indentation for `level`; negative levels get none
    pub fn indentation(&self, level: isize) -> String {
        usize::try_from(level)
            .map(|level| self.indent.repeat(level))
            .unwrap_or_default()
    }
}

/// Builds [`RenderOptions`] from the embedded defaults plus caller layers
///
/// Layers apply in call order; a key set by a later layer replaces the
/// same key from any earlier one.
#[derive(Debug, Clone)]
pub struct Loader {
    layers: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let layers = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { layers }
    }

    /// Add a TOML snippet such as `indent = "\t"`
    pub fn with_toml(mut self, toml: &str) -> Self {
        self.layers = self
            .layers
            .add_source(File::from_str(toml, FileFormat::Toml));
        self
    }

    /// Pin one option (`indent` or `root_level`) to `value`
    pub fn override_key<V>(mut self, key: &str, value: V) -> Result<Self, ConfigError>
    where
        V: Into<ValueKind>,
    {
        self.layers = self.layers.set_override(key, value)?;
        Ok(self)
    }

    /// Merge every layer into render options
    ///
    /// Fails on malformed TOML or when a merged value has the wrong type.
    pub fn build(self) -> Result<RenderOptions, ConfigError> {
        self.layers.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_defaults_match_default_impl() {
        let options = Loader::new().build().expect("defaults to deserialize");
        assert_eq!(options, RenderOptions::default());
    }

    #[test]
    fn toml_layer_keeps_unset_defaults() {
        let options = Loader::new()
            .with_toml("indent = \"    \"")
            .build()
            .expect("options to build");
        assert_eq!(options.indent, "    ");
        assert_eq!(options.root_level, -1);
    }

    #[test]
    fn key_override_replaces_default() {
        let options = Loader::new()
            .override_key("root_level", 0i64)
            .expect("override to apply")
            .build()
            .expect("options to build");
        assert_eq!(options.root_level, 0);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(Loader::new().with_toml("indent = ").build().is_err());
    }

    #[test]
    fn later_layers_win() {
        let options = Loader::new()
            .with_toml("indent = \"\\t\"")
            .override_key("indent", "    ")
            .expect("override to apply")
            .build()
            .expect("options to build");
        assert_eq!(options.indent, "    ");
    }

    #[test]
    fn wrongly_typed_value_is_an_error() {
        assert!(Loader::new()
            .with_toml("root_level = \"deep\"")
            .build()
            .is_err());
    }

    #[test]
    fn negative_levels_have_no_indentation() {
        let options = RenderOptions::default();
        assert_eq!(options.indentation(-1), "");
        assert_eq!(options.indentation(0), "");
        assert_eq!(options.indentation(2), "    ");
    }
}
