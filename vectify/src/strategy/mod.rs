//! Output variants.
//!
//! A variant knows how to turn one icon tree into a component for a given
//! UI model, how to produce the runtime shared by every component in an
//! output directory, and how to list the components in an index file.
//!
//! Every built-in variant is a [`TemplateStrategy`]: a small record of
//! template ids and conventions over the shared [`TemplateRenderer`]
//! (see [`crate::template`]). Custom variants implement
//! [`VariantStrategy`] directly and are added to a [`VariantRegistry`].
//!
//! [`TemplateRenderer`]: crate::template::TemplateRenderer

mod registry;
mod variants;

pub use registry::{VariantRegistry, registry};
pub use variants::{TemplateStrategy, builtin_strategies};

use std::fmt;

use crate::error::VectifyResult;
use crate::node::IconNode;
use crate::template::{IndexData, IndexEntry, templates};

/// Structural shape of the generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantFamily {
    /// A factory builds a function component from the icon tree.
    FunctionComponent,
    /// Per-icon files hold only data and defer to one shared component.
    TemplateDirective,
    /// Each icon registers a custom element.
    CustomElement,
    /// Each icon is a class extending a shared decorated base.
    ClassComponent,
    /// Each icon is a function that builds DOM nodes into a container.
    Imperative,
}

impl VariantFamily {
    /// Whether the index re-exports default exports.
    pub fn uses_default_exports(&self) -> bool {
        matches!(self, VariantFamily::TemplateDirective)
    }
}

impl fmt::Display for VariantFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VariantFamily::FunctionComponent => "function component",
            VariantFamily::TemplateDirective => "template directive",
            VariantFamily::CustomElement => "custom element",
            VariantFamily::ClassComponent => "class component",
            VariantFamily::Imperative => "imperative",
        };
        f.write_str(name)
    }
}

/// Per-render options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit typed source.
    pub typed: bool,
    /// Keep source colors instead of runtime parameters.
    pub keep_colors: bool,
}

impl RenderOptions {
    pub fn new(typed: bool, keep_colors: bool) -> Self {
        Self { typed, keep_colors }
    }
}

/// The shared runtime emitted once per output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseRuntime {
    pub contents: String,
    pub file_name: String,
}

/// A target variant.
///
/// Implementations must be stateless: the registry hands out shared
/// references across threads.
pub trait VariantStrategy: Send + Sync {
    /// Returns the identifier used in configuration (e.g. `"react"`).
    fn id(&self) -> &'static str;

    /// Returns the structural family of the generated code.
    fn family(&self) -> VariantFamily;

    /// File extension of per-icon components.
    fn component_extension(&self, typed: bool) -> &'static str;

    /// File extension of the index file.
    fn index_extension(&self, typed: bool) -> &'static str;

    /// Render a full component definition for one icon.
    ///
    /// `icon_set` is the parsed icon as-is; paint is rewritten into runtime
    /// parameters here unless `options.keep_colors` is set.
    ///
    /// # Errors
    ///
    /// Fails only when the underlying template cannot be rendered, which
    /// means the variant itself is broken.
    fn render_component(
        &self,
        name: &str,
        icon_set: &[IconNode],
        options: &RenderOptions,
    ) -> VectifyResult<String>;

    /// Render the shared runtime all components of this variant import.
    fn render_base_runtime(&self, typed: bool) -> VectifyResult<BaseRuntime>;

    /// File name of a component, `<Name>.<component_extension>`.
    fn component_file_name(&self, name: &str, typed: bool) -> String {
        format!("{}.{}", name, self.component_extension(typed))
    }

    /// File name of the index, `index.<index_extension>`.
    fn index_file_name(&self, typed: bool) -> String {
        format!("index.{}", self.index_extension(typed))
    }

    /// Render an index re-exporting every component, in the given order.
    fn render_index(&self, names: &[String], typed: bool) -> VectifyResult<String> {
        let default_exports = self.family().uses_default_exports();
        let components = names
            .iter()
            .map(|name| IndexEntry {
                name: name.clone(),
                // Script modules are imported without their extension.
                path: if default_exports {
                    self.component_file_name(name, typed)
                } else {
                    name.clone()
                },
            })
            .collect();

        let id = if default_exports {
            "index/default"
        } else {
            "index/named"
        };
        Ok(templates().render(id, &IndexData { components })?)
    }
}

impl fmt::Debug for dyn VariantStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariantStrategy")
            .field("id", &self.id())
            .field("family", &self.family())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{AttrValue, ElementType, attrs};

    /// Minimal strategy relying on the provided methods.
    struct PlainText;

    impl VariantStrategy for PlainText {
        fn id(&self) -> &'static str {
            "plain"
        }

        fn family(&self) -> VariantFamily {
            VariantFamily::Imperative
        }

        fn component_extension(&self, typed: bool) -> &'static str {
            if typed { "ts" } else { "js" }
        }

        fn index_extension(&self, typed: bool) -> &'static str {
            self.component_extension(typed)
        }

        fn render_component(
            &self,
            name: &str,
            icon_set: &[IconNode],
            _options: &RenderOptions,
        ) -> VectifyResult<String> {
            Ok(format!("{}:{}", name, icon_set.len()))
        }

        fn render_base_runtime(&self, typed: bool) -> VectifyResult<BaseRuntime> {
            Ok(BaseRuntime {
                contents: String::new(),
                file_name: format!("runtime.{}", self.component_extension(typed)),
            })
        }
    }

    #[test]
    fn test_provided_file_names() {
        assert_eq!(PlainText.component_file_name("Home", true), "Home.ts");
        assert_eq!(PlainText.component_file_name("Home", false), "Home.js");
        assert_eq!(PlainText.index_file_name(true), "index.ts");
    }

    #[test]
    fn test_provided_index_uses_named_exports() {
        let names = vec!["Home".to_string(), "User".to_string()];
        let index = PlainText.render_index(&names, true).unwrap();
        assert_eq!(
            index.lines().collect::<Vec<_>>(),
            ["export { Home } from './Home'", "export { User } from './User'"]
        );
    }

    #[test]
    fn test_custom_strategy_renders() {
        let set = vec![IconNode::leaf(
            ElementType::Path,
            attrs([("d", AttrValue::from("M0 0"))]),
        )];
        let out = PlainText
            .render_component("Home", &set, &RenderOptions::default())
            .unwrap();
        assert_eq!(out, "Home:1");
    }

    #[test]
    fn test_family_display() {
        assert_eq!(VariantFamily::TemplateDirective.to_string(), "template directive");
        assert!(VariantFamily::TemplateDirective.uses_default_exports());
        assert!(!VariantFamily::FunctionComponent.uses_default_exports());
    }
}
