//! Named-template rendering.
//!
//! All built-in templates are compiled into the binary and registered once
//! in a shared [`TemplateRenderer`] (see [`templates`]). The renderer runs
//! in strict mode, so a template that references a field missing from its
//! data fails loudly instead of emitting an empty string, and it never
//! escapes: generated output is source code, not HTML.

use std::sync::LazyLock;

use handlebars::Handlebars;
use serde::Serialize;
use tracing::trace;

use crate::error::TemplateError;

/// Built-in templates as `(id, source)` pairs.
const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    ("react/component", include_str!("../templates/react/component.hbs")),
    ("react/runtime", include_str!("../templates/react/runtime.hbs")),
    ("preact/component", include_str!("../templates/preact/component.hbs")),
    ("preact/runtime", include_str!("../templates/preact/runtime.hbs")),
    ("solid/component", include_str!("../templates/solid/component.hbs")),
    ("solid/runtime", include_str!("../templates/solid/runtime.hbs")),
    ("qwik/component", include_str!("../templates/qwik/component.hbs")),
    ("qwik/runtime", include_str!("../templates/qwik/runtime.hbs")),
    ("vue/component", include_str!("../templates/vue/component.hbs")),
    ("vue/runtime", include_str!("../templates/vue/runtime.hbs")),
    ("svelte/component", include_str!("../templates/svelte/component.hbs")),
    ("svelte/runtime", include_str!("../templates/svelte/runtime.hbs")),
    ("astro/component", include_str!("../templates/astro/component.hbs")),
    ("astro/runtime", include_str!("../templates/astro/runtime.hbs")),
    ("lit/component", include_str!("../templates/lit/component.hbs")),
    ("lit/runtime", include_str!("../templates/lit/runtime.hbs")),
    ("angular/component", include_str!("../templates/angular/component.hbs")),
    ("angular/runtime", include_str!("../templates/angular/runtime.hbs")),
    ("vanilla/component", include_str!("../templates/vanilla/component.hbs")),
    ("vanilla/runtime", include_str!("../templates/vanilla/runtime.hbs")),
    ("index/named", include_str!("../templates/index/named.hbs")),
    ("index/default", include_str!("../templates/index/default.hbs")),
];

static TEMPLATES: LazyLock<TemplateRenderer> = LazyLock::new(TemplateRenderer::builtin);

/// The shared renderer holding every built-in template.
pub fn templates() -> &'static TemplateRenderer {
    &TEMPLATES
}

/// Data for a per-icon component template.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentData {
    pub typescript: bool,
    pub component_name: String,
    /// Root nodes rendered by the literal formatter.
    pub formatted_nodes: String,
    /// Custom element tag and component selector, `vectify-<kebab name>`.
    pub tag_name: String,
}

/// Data for a base runtime template.
#[derive(Debug, Clone, Serialize)]
pub struct RuntimeData {
    pub typescript: bool,
}

/// Data for an index template.
#[derive(Debug, Clone, Serialize)]
pub struct IndexData {
    pub components: Vec<IndexEntry>,
}

/// One line of an index file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexEntry {
    pub name: String,
    /// Import specifier relative to the index, without `./`.
    pub path: String,
}

/// Handlebars registry configured for code generation.
pub struct TemplateRenderer {
    registry: Handlebars<'static>,
}

impl TemplateRenderer {
    /// Create an empty renderer.
    pub fn new() -> Self {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_escape_fn(handlebars::no_escape);
        Self { registry }
    }

    /// Create a renderer with every built-in template registered.
    ///
    /// Built-in templates are part of the crate and covered by its tests, so
    /// a template that fails to compile is dropped with an error log and
    /// later surfaces as [`TemplateError::NotFound`].
    fn builtin() -> Self {
        let mut renderer = Self::new();
        for (id, source) in BUILTIN_TEMPLATES {
            if let Err(e) = renderer.register(id, source) {
                tracing::error!(template = id, error = %e, "Failed to compile built-in template");
            }
        }
        renderer
    }

    /// Register or replace a template.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::Render`] when the source does not compile.
    pub fn register(&mut self, id: &str, source: &str) -> Result<(), TemplateError> {
        self.registry
            .register_template_string(id, source)
            .map_err(|e| TemplateError::render(id, e.to_string()))
    }

    /// Check whether a template is registered.
    pub fn has_template(&self, id: &str) -> bool {
        self.registry.has_template(id)
    }

    /// Registered template ids, sorted.
    pub fn template_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self
            .registry
            .get_templates()
            .keys()
            .map(String::as_str)
            .collect();
        ids.sort_unstable();
        ids
    }

    /// Render a template with the given data.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::NotFound`] for an unknown id and
    /// [`TemplateError::Render`] when the data does not fit the template.
    pub fn render<T: Serialize>(&self, id: &str, data: &T) -> Result<String, TemplateError> {
        if !self.has_template(id) {
            return Err(TemplateError::not_found(id));
        }

        trace!(template = id, "Rendering template");
        self.registry
            .render(id, data)
            .map_err(|e| TemplateError::render(id, e.to_string()))
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TemplateRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateRenderer")
            .field("templates", &self.template_ids())
            .finish()
    }
}
