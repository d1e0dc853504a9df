//! Registry of output variants.

use std::sync::LazyLock;

use tracing::debug;

use super::VariantStrategy;
use super::variants::builtin_strategies;
use crate::error::UnsupportedVariantError;

static REGISTRY: LazyLock<VariantRegistry> = LazyLock::new(VariantRegistry::with_builtins);

/// The process-wide registry holding the built-in variants.
///
/// Built on first use and read-only afterwards.
pub fn registry() -> &'static VariantRegistry {
    &REGISTRY
}

/// Ordered table of variant strategies keyed by id.
///
/// Lookup is linear; the table holds a handful of entries and listing must
/// follow registration order.
#[derive(Default)]
pub struct VariantRegistry {
    strategies: Vec<Box<dyn VariantStrategy>>,
}

impl VariantRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            strategies: Vec::new(),
        }
    }

    /// Create a registry holding every built-in variant.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for strategy in builtin_strategies() {
            registry.register(Box::new(strategy));
        }
        registry
    }

    /// Register a strategy.
    ///
    /// A strategy with an id that is already registered replaces the
    /// existing one in place.
    pub fn register(&mut self, strategy: Box<dyn VariantStrategy>) {
        match self.strategies.iter().position(|s| s.id() == strategy.id()) {
            Some(index) => self.strategies[index] = strategy,
            None => self.strategies.push(strategy),
        }
    }

    /// Get a strategy by id.
    pub fn get(&self, id: &str) -> Result<&dyn VariantStrategy, UnsupportedVariantError> {
        debug!(variant = id, "Looking up variant");
        self.strategies
            .iter()
            .find(|s| s.id() == id)
            .map(|s| s.as_ref())
            .ok_or_else(|| UnsupportedVariantError::new(id))
    }

    /// Check whether a strategy is registered.
    pub fn has(&self, id: &str) -> bool {
        self.strategies.iter().any(|s| s.id() == id)
    }

    /// Registered ids in registration order.
    pub fn list(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.id()).collect()
    }

    /// Get the number of registered strategies.
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

impl std::fmt::Debug for VariantRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VariantRegistry")
            .field("variants", &self.list())
            .finish()
    }
}
