//! Configuration system for the plotter.
//!
//! YAML configuration with precedence: CLI > file > defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::render::GlyphSet;
use crate::theme::Theme;

/// Global configuration settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Enable vim-style navigation keys (hjkl).
    #[serde(default = "default_vim_keys")]
    pub vim_keys: bool,

    /// Glyph set for the plane: "unicode" or "ascii".
    #[serde(default = "default_glyphs")]
    pub glyphs: String,

    /// Expression plotted at startup when none is given on the CLI.
    #[serde(default = "default_expression")]
    pub expression: String,
}

fn default_vim_keys() -> bool {
    true
}
fn default_glyphs() -> String {
    "unicode".to_string()
}
fn default_expression() -> String {
    "sin(x)".to_string()
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            vim_keys: default_vim_keys(),
            glyphs: default_glyphs(),
            expression: default_expression(),
        }
    }
}

impl GlobalConfig {
    /// The configured glyph set.
    #[must_use]
    pub fn glyph_set(&self) -> GlyphSet {
        if self.glyphs.eq_ignore_ascii_case("ascii") {
            GlyphSet::Ascii
        } else {
            GlyphSet::Unicode
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Global settings.
    #[serde(default)]
    pub global: GlobalConfig,

    /// Color theme.
    #[serde(default)]
    pub theme: Theme,
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;

        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map(|l| l.line()).unwrap_or(0);
            Error::ConfigParse { line, message: e.to_string() }
        })
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// The default config file location, `~/.config/trazar/config.yaml`.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("trazar").join("config.yaml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::new();

        assert!(config.global.vim_keys);
        assert_eq!(config.global.glyphs, "unicode");
        assert_eq!(config.global.expression, "sin(x)");
    }

    #[test]
    fn test_config_parse_minimal() {
        let config = Config::parse("global: {}").unwrap();
        assert!(config.global.vim_keys);
    }

    #[test]
    fn test_config_parse_full() {
        let yaml = r##"
global:
  vim_keys: false
  glyphs: ascii
  expression: cos(x)
theme:
  curve: "#00FF00"
"##;

        let config = Config::parse(yaml).unwrap();

        assert!(!config.global.vim_keys);
        assert_eq!(config.global.glyph_set(), GlyphSet::Ascii);
        assert_eq!(config.global.expression, "cos(x)");
        assert_eq!(config.theme.curve, "#00FF00");
    }

    #[test]
    fn test_config_parse_error_includes_line() {
        let yaml = r#"
global:
  vim_keys: [not, a, bool]
"#;

        let result = Config::parse(yaml);
        assert!(result.is_err());

        let display = result.unwrap_err().to_string();
        assert!(display.contains("3"), "Error should include line number: {display}");
    }

    #[test]
    fn test_config_load_or_default() {
        let config = Config::load_or_default("/nonexistent/path");
        assert_eq!(config.global.expression, "sin(x)");
    }

    #[test]
    fn test_config_load_from_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "global:\n  glyphs: ascii").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.global.glyph_set(), GlyphSet::Ascii);
    }

    #[test]
    fn test_glyph_set_default_is_unicode() {
        let config = Config::new();
        assert_eq!(config.global.glyph_set(), GlyphSet::Unicode);
    }
}
