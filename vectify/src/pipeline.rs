//! Per-file compilation and run statistics.

use tracing::debug;

use crate::error::VectifyResult;
use crate::parser::parse_svg;
use crate::strategy::{RenderOptions, registry};

/// Options for one compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOptions {
    /// Variant id, e.g. `"react"`.
    pub variant: String,
    /// Emit typed source.
    pub typed: bool,
    /// Keep source colors instead of runtime parameters.
    pub keep_colors: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            variant: "react".to_string(),
            typed: true,
            keep_colors: false,
        }
    }
}

impl CompileOptions {
    /// Create options for a variant with default flags.
    pub fn new(variant: impl Into<String>) -> Self {
        Self {
            variant: variant.into(),
            ..Default::default()
        }
    }

    /// Set whether to emit typed source.
    pub fn with_typed(mut self, typed: bool) -> Self {
        self.typed = typed;
        self
    }

    /// Set whether to keep source colors.
    pub fn with_keep_colors(mut self, keep_colors: bool) -> Self {
        self.keep_colors = keep_colors;
        self
    }

    fn render_options(&self) -> RenderOptions {
        RenderOptions::new(self.typed, self.keep_colors)
    }
}

/// A generated output file, relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub file_name: String,
    pub contents: String,
}

/// Compile one SVG document into a component.
///
/// # Errors
///
/// - [`VectifyError::UnsupportedVariant`] when the variant is unknown;
/// - [`VectifyError::Parse`] when the markup is malformed or has no `<svg>`;
/// - [`VectifyError::Template`] when the variant's template fails.
///
/// [`VectifyError::UnsupportedVariant`]: crate::VectifyError::UnsupportedVariant
/// [`VectifyError::Parse`]: crate::VectifyError::Parse
/// [`VectifyError::Template`]: crate::VectifyError::Template
pub fn compile_component(
    name: &str,
    svg: &str,
    options: &CompileOptions,
) -> VectifyResult<GeneratedFile> {
    let strategy = registry().get(&options.variant)?;

    let icon_set = parse_svg(svg)?;

    let contents = strategy.render_component(name, &icon_set, &options.render_options())?;
    debug!(
        variant = %options.variant,
        component = name,
        nodes = icon_set.len(),
        "Compiled component"
    );

    Ok(GeneratedFile {
        file_name: strategy.component_file_name(name, options.typed),
        contents,
    })
}

/// Render the shared runtime of the configured variant.
pub fn compile_base_runtime(options: &CompileOptions) -> VectifyResult<GeneratedFile> {
    let runtime = registry()
        .get(&options.variant)?
        .render_base_runtime(options.typed)?;

    Ok(GeneratedFile {
        file_name: runtime.file_name,
        contents: runtime.contents,
    })
}

/// Render the index listing `names` in order.
pub fn compile_index(names: &[String], options: &CompileOptions) -> VectifyResult<GeneratedFile> {
    let strategy = registry().get(&options.variant)?;

    Ok(GeneratedFile {
        file_name: strategy.index_file_name(options.typed),
        contents: strategy.render_index(names, options.typed)?,
    })
}

/// One file that failed to compile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailure {
    pub file: String,
    pub error: String,
}

/// Outcome of a generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationStats {
    pub success: usize,
    pub failed: usize,
    pub total: usize,
    /// Failures in processing order.
    pub errors: Vec<FileFailure>,
}

impl GenerationStats {
    /// Create empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successfully compiled file.
    pub fn record_success(&mut self) {
        self.success += 1;
        self.total += 1;
    }

    /// Record a file that failed to compile.
    pub fn record_failure(&mut self, file: impl Into<String>, error: impl ToString) {
        self.failed += 1;
        self.total += 1;
        self.errors.push(FileFailure {
            file: file.into(),
            error: error.to_string(),
        });
    }

    /// Check whether every file compiled.
    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ParseError, VectifyError};

    const STROKE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path stroke="#FFF" stroke-width="1.5" d="M3 10"/></svg>"##;

    #[test]
    fn test_compile_component() {
        let file = compile_component("Arrow", STROKE_SVG, &CompileOptions::new("react")).unwrap();

        assert_eq!(file.file_name, "Arrow.tsx");
        assert!(file.contents.contains(
            "['path', { d: 'M3 10', fill: 'none', stroke: '$color', strokeWidth: 1.5, strokeLinecap: 'round', strokeLinejoin: 'round' }]"
        ));
    }

    #[test]
    fn test_compile_keep_colors() {
        let options = CompileOptions::new("react").with_keep_colors(true);
        let file = compile_component("Arrow", STROKE_SVG, &options).unwrap();
        assert!(file.contents.contains("['path', { stroke: '#FFF', strokeWidth: 1.5, d: 'M3 10' }]"));
    }

    #[test]
    fn test_compile_untyped_file_name() {
        let options = CompileOptions::new("solid").with_typed(false);
        let file = compile_component("Arrow", STROKE_SVG, &options).unwrap();
        assert_eq!(file.file_name, "Arrow.jsx");
    }

    #[test]
    fn test_unsupported_variant_checked_before_parse() {
        let err = compile_component("Broken", "not svg", &CompileOptions::new("ember")).unwrap_err();
        assert!(matches!(err, VectifyError::UnsupportedVariant(_)));
        assert!(!err.is_per_file());
    }

    #[test]
    fn test_missing_root_is_parse_error() {
        let err = compile_component("Broken", "<div/>", &CompileOptions::default()).unwrap_err();
        assert!(matches!(err, VectifyError::Parse(ParseError::MissingRoot)));
        assert!(err.is_per_file());
    }

    #[test]
    fn test_base_runtime_and_index() {
        let options = CompileOptions::new("vue").with_typed(false);

        let runtime = compile_base_runtime(&options).unwrap();
        assert_eq!(runtime.file_name, "Icon.vue");

        let index = compile_index(&["Home".to_string()], &options).unwrap();
        assert_eq!(index.file_name, "index.js");
        assert!(index.contents.contains("export { default as Home } from './Home.vue'"));
    }

    #[test]
    fn test_stats() {
        let mut stats = GenerationStats::new();
        assert!(stats.is_clean());

        stats.record_success();
        stats.record_failure("bad.svg", ParseError::MissingRoot);
        stats.record_success();

        assert_eq!(stats.success, 2);
        assert_eq!(stats.failed, 1);
        assert_eq!(stats.total, 3);
        assert!(!stats.is_clean());
        assert_eq!(
            stats.errors,
            vec![FileFailure {
                file: "bad.svg".to_string(),
                error: "Invalid SVG: No <svg> tag found".to_string(),
            }]
        );
    }
}
