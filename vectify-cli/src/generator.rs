//! Batch generation of icon components.
//!
//! Files are processed in the order given. A file that fails to parse or
//! that maps to an unusable component name is recorded in the statistics
//! and skipped; anything that means the generator itself is broken aborts
//! the run.

use crate::config::Config;
use crate::error::CliResult;
use crate::hooks::{GenerationHooks, NoHooks};
use crate::naming::{NamingOptions, component_name, is_valid_component_name};
use crate::scanner::SvgFile;
use crate::writer::{FileWriter, WriteResult};
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use tracing::{debug, info, warn};
use vectify::format::to_svg_document;
use vectify::{
    CompileOptions, GeneratedFile, GenerationStats, IconSet, MarkupOptions, NormalizeOptions,
    VectifyError, compile_base_runtime, compile_component, compile_index, normalize_icon_set,
    parse_svg, registry,
};

/// File name of the preview page.
pub const PREVIEW_FILENAME: &str = "preview.html";

/// Everything a generation run produced.
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Per-file outcome.
    pub stats: GenerationStats,

    /// Files written, or that would be written in dry-run mode.
    pub outputs: Vec<WriteResult>,

    /// Stale components removed from the output directory.
    pub removed: Vec<PathBuf>,
}

/// A component that compiled.
#[derive(Debug)]
struct CompiledIcon {
    name: String,
    file: GeneratedFile,
    svg: String,
}

/// Generates a directory of components from SVG files.
pub struct IconGenerator<H = NoHooks> {
    config: Config,
    naming: NamingOptions,
    writer: FileWriter,
    hooks: H,
}

impl IconGenerator<NoHooks> {
    /// Create a generator with the given configuration and writer.
    pub fn new(config: Config, writer: FileWriter) -> Self {
        let naming = NamingOptions::new(config.prefix.clone(), config.suffix.clone());
        Self {
            config,
            naming,
            writer,
            hooks: NoHooks,
        }
    }
}

impl<H: GenerationHooks> IconGenerator<H> {
    /// Replace the lifecycle hooks.
    pub fn with_hooks<G: GenerationHooks>(self, hooks: G) -> IconGenerator<G> {
        IconGenerator {
            config: self.config,
            naming: self.naming,
            writer: self.writer,
            hooks,
        }
    }

    /// Replace the naming options.
    pub fn with_naming(mut self, naming: NamingOptions) -> Self {
        self.naming = naming;
        self
    }

    /// Get the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Generate every component, then the index, preview and cleanup.
    pub fn generate(&self, files: &[SvgFile]) -> CliResult<GenerationReport> {
        let options = self.config.compile_options();
        let strategy = registry()
            .get(&options.variant)
            .map_err(VectifyError::from)?;

        let mut report = GenerationReport::default();
        let mut keep = HashSet::new();

        let runtime = compile_base_runtime(&options)?;
        let marker = runtime_import_marker(&runtime.file_name);
        keep.insert(runtime.file_name.clone());
        report.outputs.push(self.write(&runtime)?);

        let mut compiled: Vec<CompiledIcon> = Vec::with_capacity(files.len());
        let mut owners: HashMap<String, &str> = HashMap::new();

        for file in files {
            let name = component_name(&file.file_name, &self.naming);

            if !is_valid_component_name(&name) {
                warn!(file = %file.file_name, name = %name, "Invalid component name");
                report.stats.record_failure(
                    &file.file_name,
                    format!("Invalid component name '{}'", name),
                );
                continue;
            }

            // The source still exists, so its component is not stale even
            // if it fails to compile this run.
            keep.insert(strategy.component_file_name(&name, options.typed));

            if let Some(owner) = owners.get(&name) {
                warn!(file = %file.file_name, name = %name, "Duplicate component name");
                report.stats.record_failure(
                    &file.file_name,
                    format!("Component name '{}' is already used by {}", name, owner),
                );
                continue;
            }

            match self.compile_one(file, &name, &options) {
                Ok(icon) => {
                    owners.insert(name, &file.file_name);
                    report.outputs.push(self.write(&icon.file)?);
                    report.stats.record_success();
                    compiled.push(icon);
                }
                Err(e) if e.is_per_file() => {
                    warn!(file = %file.file_name, error = %e, "Failed to generate icon");
                    report.stats.record_failure(&file.file_name, e);
                }
                Err(e) => return Err(e.into()),
            }
        }

        if self.config.generate.index {
            let names: Vec<String> = compiled.iter().map(|icon| icon.name.clone()).collect();
            let index = compile_index(&names, &options)?;
            keep.insert(index.file_name.clone());
            report.outputs.push(self.write(&index)?);
        }

        if self.config.generate.preview {
            let preview = self.render_preview(&compiled, &options);
            report.outputs.push(self.write(&preview)?);
        }

        if self.config.generate.clean_output {
            let extension = strategy.component_extension(options.typed);
            report.removed = self
                .writer
                .remove_stale(&self.config.output, extension, &marker, &keep)?;
            for path in &report.removed {
                info!(path = %path.display(), "Removed stale component");
            }
        }

        self.hooks.on_complete(&report.stats);
        debug!(
            success = report.stats.success,
            failed = report.stats.failed,
            total = report.stats.total,
            "Generation complete"
        );

        Ok(report)
    }

    fn compile_one(
        &self,
        file: &SvgFile,
        name: &str,
        options: &CompileOptions,
    ) -> Result<CompiledIcon, VectifyError> {
        let svg = self.hooks.before_parse(file.content.clone(), &file.file_name);

        let mut generated = compile_component(name, &svg, options)?;
        generated.contents = self.hooks.after_generate(generated.contents, name);

        Ok(CompiledIcon {
            name: name.to_string(),
            file: generated,
            svg,
        })
    }

    fn write(&self, file: &GeneratedFile) -> CliResult<WriteResult> {
        self.writer
            .write(&self.config.output.join(&file.file_name), &file.contents)
    }

    fn render_preview(&self, icons: &[CompiledIcon], options: &CompileOptions) -> GeneratedFile {
        let normalize = NormalizeOptions {
            keep_colors: options.keep_colors,
        };
        let markup = MarkupOptions::default();

        let cards: Vec<String> = icons
            .iter()
            .filter_map(|icon| {
                let icon_set: IconSet = parse_svg(&icon.svg).ok()?;
                let document = to_svg_document(&normalize_icon_set(&icon_set, normalize), &markup);
                Some(format!(
                    "      <figure class=\"icon\">{}<figcaption>{}</figcaption></figure>",
                    document, icon.name
                ))
            })
            .collect();

        GeneratedFile {
            file_name: PREVIEW_FILENAME.to_string(),
            contents: preview_page(&self.config.framework, &cards),
        }
    }
}

/// Import specifier prefix every generated component uses for the runtime,
/// e.g. `from './createIcon` or `from './Icon`.
fn runtime_import_marker(runtime_file: &str) -> String {
    let stem = runtime_file.split('.').next().unwrap_or(runtime_file);
    format!("from './{}", stem)
}

fn preview_page(framework: &str, cards: &[String]) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <title>Icons ({count}, {framework})</title>
    <style>
      body {{ font-family: system-ui, sans-serif; margin: 2rem; color: #1f2328; }}
      .grid {{ display: grid; grid-template-columns: repeat(auto-fill, minmax(120px, 1fr)); gap: 1rem; }}
      .icon {{ margin: 0; padding: 1rem; border: 1px solid #d0d7de; border-radius: 8px; text-align: center; }}
      .icon figcaption {{ margin-top: 0.5rem; font-size: 12px; word-break: break-all; }}
    </style>
  </head>
  <body>
    <h1>{count} icons</h1>
    <div class="grid">
{cards}
    </div>
  </body>
</html>
"#,
        count = cards.len(),
        framework = framework,
        cards = cards.join("\n"),
    )
}
