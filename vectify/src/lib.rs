//! # vectify
//!
//! Compile SVG icons into UI-framework components.
//!
//! Raw SVG markup is parsed into a framework-neutral node tree, paint
//! attributes are normalized into runtime parameters, and the tree is
//! rendered through a variant strategy into component source.
//!
//! ## Usage
//!
//! ```rust
//! use vectify::{CompileOptions, compile_component};
//!
//! let svg = r#"<svg viewBox="0 0 24 24"><path stroke="black" d="M3 12h18"/></svg>"#;
//! let file = compile_component("Minus", svg, &CompileOptions::new("react")).unwrap();
//!
//! assert_eq!(file.file_name, "Minus.tsx");
//! assert!(file.contents.contains("stroke: '$color'"));
//! ```
//!
//! ## Architecture
//!
//! - [`parser`] - SVG markup → [`IconSet`]
//! - [`normalize`] - fill/stroke classification and paint rewriting
//! - [`format`] - node literals and SVG markup
//! - [`template`] - handlebars rendering of built-in templates
//! - [`strategy`] - output variants and their registry
//! - [`pipeline`] - per-file entry points and run statistics
//! - [`error`] - error types

pub mod error;
pub mod format;
pub mod node;
pub mod normalize;
pub mod parser;
pub mod pipeline;
pub mod strategy;
pub mod template;

// Re-export main types for convenience
pub use error::{ParseError, TemplateError, UnsupportedVariantError, VectifyError, VectifyResult};
pub use format::{FormatOptions, KeyStyle, MarkupOptions, format_icon_node, format_icon_set, to_svg_markup};
pub use node::{AttrValue, Attributes, ElementType, IconNode, IconSet, RuntimeParam};
pub use normalize::{ColorRole, NormalizeOptions, normalize_attributes, normalize_icon_set};
pub use parser::parse_svg;
pub use pipeline::{
    CompileOptions, FileFailure, GeneratedFile, GenerationStats, compile_base_runtime,
    compile_component, compile_index,
};
pub use strategy::{
    BaseRuntime, RenderOptions, VariantFamily, VariantRegistry, VariantStrategy, registry,
};
