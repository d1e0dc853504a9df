//! # vectify-cli
//!
//! CLI library for compiling a directory of SVG icons into framework
//! components.
//!
//! This crate drives the `vectify` compiler over a whole icon set: it loads
//! configuration, discovers SVG files, derives component names, runs the
//! batch with statistics and hooks, and writes the output.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`config`] - Configuration management and TOML parsing
//! - [`scanner`] - SVG file discovery
//! - [`naming`] - File name to component name mapping
//! - [`hooks`] - Lifecycle hooks around each compiled file
//! - [`generator`] - Batch generation, index, preview and cleanup
//! - [`writer`] - File output and dry-run support
//! - [`error`] - Error types and handling

pub mod config;
pub mod error;
pub mod generator;
pub mod hooks;
pub mod naming;
pub mod scanner;
pub mod writer;

// Re-export main types for convenience
pub use config::{Config, ConfigManager};
pub use error::{CliError, CliResult};
pub use generator::{GenerationReport, IconGenerator};
pub use hooks::{GenerationHooks, NoHooks};
pub use naming::{NameTransform, NamingOptions, component_name};
pub use scanner::{SvgFile, SvgScanner};
pub use writer::FileWriter;
