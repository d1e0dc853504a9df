//! Configuration management for the CLI.
//!
//! This module handles loading configuration from `vectify.toml` files
//! and merging with command-line arguments.

use crate::error::{CliResult, ConfigError};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use vectify::{CompileOptions, registry};

/// Default configuration filename.
pub const CONFIG_FILENAME: &str = "vectify.toml";

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Target variant id.
    pub framework: String,

    /// Directory holding the source SVG files.
    pub input: PathBuf,

    /// Directory receiving the generated components.
    pub output: PathBuf,

    /// Emit typed source.
    pub typescript: bool,

    /// Keep source colors instead of runtime parameters.
    pub keep_colors: bool,

    /// Prepended to every component name.
    pub prefix: String,

    /// Appended to every component name.
    pub suffix: String,

    /// Extra outputs.
    pub generate: GenerateConfig,
}

/// Extra outputs of a generation run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    /// Write an index re-exporting every component.
    pub index: bool,

    /// Write `preview.html` showing every icon.
    pub preview: bool,

    /// Remove component files that no longer have a source SVG.
    pub clean_output: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            framework: "react".to_string(),
            input: PathBuf::from("./icons"),
            output: PathBuf::from("./src/icons"),
            typescript: true,
            keep_colors: false,
            prefix: String::new(),
            suffix: String::new(),
            generate: GenerateConfig::default(),
        }
    }
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            index: true,
            preview: false,
            clean_output: false,
        }
    }
}

impl Config {
    /// Options handed to the core compiler.
    pub fn compile_options(&self) -> CompileOptions {
        CompileOptions::new(self.framework.as_str())
            .with_typed(self.typescript)
            .with_keep_colors(self.keep_colors)
    }

    /// Resolve relative input and output paths against `base`.
    pub fn resolve_paths(&mut self, base: &Path) {
        if self.input.is_relative() {
            self.input = base.join(&self.input);
        }
        if self.output.is_relative() {
            self.output = base.join(&self.output);
        }
    }
}

/// Configuration manager for loading and merging configs.
pub struct ConfigManager;

impl ConfigManager {
    /// Load configuration from a file path.
    ///
    /// If the path is None, attempts to load from the default location.
    /// If no config file exists, returns default configuration. An explicit
    /// path that does not exist is an error.
    ///
    /// Relative paths in the file are resolved against the file's directory.
    pub fn load(path: Option<&Path>) -> CliResult<Config> {
        let config_path = path
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME));

        if !config_path.exists() {
            if path.is_some() {
                return Err(ConfigError::not_found(config_path).into());
            }
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&config_path).map_err(|e| ConfigError::Io {
            path: config_path.clone(),
            source: e,
        })?;

        let mut config: Config = toml::from_str(&content)
            .map_err(|e| ConfigError::invalid_toml(config_path.clone(), e.to_string()))?;

        if let Some(base) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            config.resolve_paths(base);
        }

        Ok(config)
    }

    /// Merge CLI arguments into configuration.
    ///
    /// CLI arguments take precedence over config file values.
    pub fn merge_cli_args(mut config: Config, args: &CliArgs) -> Config {
        if let Some(ref framework) = args.framework {
            config.framework = framework.clone();
        }

        if let Some(ref input) = args.input {
            config.input = input.clone();
        }

        if let Some(ref output) = args.output {
            config.output = output.clone();
        }

        if let Some(typescript) = args.typescript {
            config.typescript = typescript;
        }

        if let Some(keep_colors) = args.keep_colors {
            config.keep_colors = keep_colors;
        }

        config
    }

    /// Reject configurations the generator cannot run with.
    pub fn validate(config: &Config) -> CliResult<()> {
        if !registry().has(&config.framework) {
            return Err(ConfigError::invalid_value(
                "framework",
                format!(
                    "unsupported framework '{}', expected one of: {}",
                    config.framework,
                    registry().list().join(", ")
                ),
            )
            .into());
        }

        for (key, value) in [("prefix", &config.prefix), ("suffix", &config.suffix)] {
            if !value.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                return Err(ConfigError::invalid_value(
                    key,
                    format!("'{}' is not a valid identifier fragment", value),
                )
                .into());
            }
        }

        Ok(())
    }

    /// Get default configuration.
    pub fn default_config() -> Config {
        Config::default()
    }

    /// Generate default configuration file content with comments.
    pub fn default_config_content(framework: &str) -> String {
        format!(
            r#"# vectify configuration file

# Target framework ({frameworks})
framework = "{framework}"

# Directory containing the source SVG files
input = "./icons"

# Directory receiving the generated components
output = "./src/icons"

# Generate TypeScript instead of JavaScript
typescript = true

# Keep the original fill and stroke colors instead of the `color` prop
keep_colors = false

# Component name prefix and suffix (e.g. prefix = "Icon" -> IconArrowRight)
prefix = ""
suffix = ""

[generate]
# Generate an index file re-exporting every component
index = true

# Generate preview.html to browse the icons
preview = false

# Remove components whose SVG file no longer exists
clean_output = false
"#,
            frameworks = registry().list().join(", "),
        )
    }
}

/// CLI arguments that can override configuration.
#[derive(Debug, Default)]
pub struct CliArgs {
    /// Framework override.
    pub framework: Option<String>,

    /// Input directory override.
    pub input: Option<PathBuf>,

    /// Output directory override.
    pub output: Option<PathBuf>,

    /// TypeScript override.
    pub typescript: Option<bool>,

    /// Keep colors override.
    pub keep_colors: Option<bool>,
}
