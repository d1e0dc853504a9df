//! Lifecycle hooks for a generation run.

use vectify::GenerationStats;

/// Callbacks invoked around each compiled file.
///
/// Every method has a pass-through default, so implementors override only
/// what they need. `before_parse` is where an SVG optimizer plugs in.
pub trait GenerationHooks {
    /// Rewrite the raw SVG text before it is parsed.
    fn before_parse(&self, svg: String, _file_name: &str) -> String {
        svg
    }

    /// Rewrite generated component source before it is written.
    fn after_generate(&self, code: String, _component_name: &str) -> String {
        code
    }

    /// Called once after every file has been processed.
    fn on_complete(&self, _stats: &GenerationStats) {}
}

/// Hooks that change nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoHooks;

impl GenerationHooks for NoHooks {}
