//! Built-in variants.

use convert_case::{Case, Casing};
use tracing::debug;

use super::{BaseRuntime, RenderOptions, VariantFamily, VariantStrategy};
use crate::error::VectifyResult;
use crate::format::{FormatOptions, KeyStyle, format_icon_set};
use crate::node::IconNode;
use crate::normalize::{NormalizeOptions, normalize_icon_set};
use crate::template::{ComponentData, RuntimeData, templates};

/// Prefix of custom element tags and component selectors.
const ELEMENT_PREFIX: &str = "vectify";

/// Extension pair, `(typed, untyped)`.
type Extensions = (&'static str, &'static str);

const SCRIPT: Extensions = ("ts", "js");
const JSX: Extensions = ("tsx", "jsx");

/// A variant driven entirely by templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateStrategy {
    id: &'static str,
    family: VariantFamily,
    component: Extensions,
    index: Extensions,
    /// Base runtime file stem and extensions.
    runtime_stem: &'static str,
    runtime: Extensions,
    key_style: KeyStyle,
    /// Indentation of root nodes inside the component template.
    node_indent: usize,
    component_template: &'static str,
    runtime_template: &'static str,
}

impl TemplateStrategy {
    /// Function component built by a `createIcon` factory.
    const fn function_component(
        id: &'static str,
        key_style: KeyStyle,
        component_template: &'static str,
        runtime_template: &'static str,
    ) -> Self {
        Self {
            id,
            family: VariantFamily::FunctionComponent,
            component: JSX,
            index: SCRIPT,
            runtime_stem: "createIcon",
            runtime: JSX,
            key_style,
            node_indent: 2,
            component_template,
            runtime_template,
        }
    }

    /// Data-only component deferring to a shared single-file `Icon` component.
    const fn template_directive(
        id: &'static str,
        extension: &'static str,
        node_indent: usize,
        component_template: &'static str,
        runtime_template: &'static str,
    ) -> Self {
        Self {
            id,
            family: VariantFamily::TemplateDirective,
            component: (extension, extension),
            index: SCRIPT,
            runtime_stem: "Icon",
            runtime: (extension, extension),
            key_style: KeyStyle::Kebab,
            node_indent,
            component_template,
            runtime_template,
        }
    }

    /// Plain script modules with a `createIcon` runtime.
    const fn script(
        id: &'static str,
        family: VariantFamily,
        extensions: Extensions,
        node_indent: usize,
        component_template: &'static str,
        runtime_template: &'static str,
    ) -> Self {
        Self {
            id,
            family,
            component: extensions,
            index: extensions,
            runtime_stem: "createIcon",
            runtime: extensions,
            key_style: KeyStyle::Kebab,
            node_indent,
            component_template,
            runtime_template,
        }
    }

    /// Key style of the emitted node literal.
    pub fn key_style(&self) -> KeyStyle {
        self.key_style
    }

    fn pick(extensions: Extensions, typed: bool) -> &'static str {
        if typed { extensions.0 } else { extensions.1 }
    }
}

/// Every built-in variant, in registration order.
pub fn builtin_strategies() -> [TemplateStrategy; 10] {
    [
        TemplateStrategy::function_component(
            "react",
            KeyStyle::Camel,
            "react/component",
            "react/runtime",
        ),
        TemplateStrategy::template_directive("vue", "vue", 2, "vue/component", "vue/runtime"),
        TemplateStrategy::template_directive(
            "svelte",
            "svelte",
            4,
            "svelte/component",
            "svelte/runtime",
        ),
        TemplateStrategy::function_component(
            "solid",
            KeyStyle::Kebab,
            "solid/component",
            "solid/runtime",
        ),
        TemplateStrategy::function_component(
            "preact",
            KeyStyle::Camel,
            "preact/component",
            "preact/runtime",
        ),
        TemplateStrategy::script(
            "vanilla",
            VariantFamily::Imperative,
            SCRIPT,
            2,
            "vanilla/component",
            "vanilla/runtime",
        ),
        TemplateStrategy::script(
            "lit",
            VariantFamily::CustomElement,
            SCRIPT,
            2,
            "lit/component",
            "lit/runtime",
        ),
        TemplateStrategy::function_component(
            "qwik",
            KeyStyle::Kebab,
            "qwik/component",
            "qwik/runtime",
        ),
        TemplateStrategy::template_directive("astro", "astro", 2, "astro/component", "astro/runtime"),
        TemplateStrategy::script(
            "angular",
            VariantFamily::ClassComponent,
            ("ts", "ts"),
            4,
            "angular/component",
            "angular/runtime",
        ),
    ]
}

impl VariantStrategy for TemplateStrategy {
    fn id(&self) -> &'static str {
        self.id
    }

    fn family(&self) -> VariantFamily {
        self.family
    }

    fn component_extension(&self, typed: bool) -> &'static str {
        Self::pick(self.component, typed)
    }

    fn index_extension(&self, typed: bool) -> &'static str {
        Self::pick(self.index, typed)
    }

    fn render_component(
        &self,
        name: &str,
        icon_set: &[IconNode],
        options: &RenderOptions,
    ) -> VectifyResult<String> {
        debug!(variant = self.id, component = name, "Rendering component");

        let icon_set = normalize_icon_set(
            icon_set,
            NormalizeOptions {
                keep_colors: options.keep_colors,
            },
        );
        let format_options = FormatOptions::new(self.node_indent, self.key_style);

        let data = ComponentData {
            typescript: options.typed,
            component_name: name.to_string(),
            formatted_nodes: format_icon_set(&icon_set, &format_options),
            tag_name: format!("{}-{}", ELEMENT_PREFIX, name.to_case(Case::Kebab)),
        };

        Ok(templates().render(self.component_template, &data)?)
    }

    fn render_base_runtime(&self, typed: bool) -> VectifyResult<BaseRuntime> {
        let contents = templates().render(self.runtime_template, &RuntimeData { typescript: typed })?;
        Ok(BaseRuntime {
            contents,
            file_name: format!("{}.{}", self.runtime_stem, Self::pick(self.runtime, typed)),
        })
    }
}
