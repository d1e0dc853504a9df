//! Error types for the compilation pipeline.
//!
//! Parse errors are scoped to a single source file; variant and template
//! errors signal a broken configuration or a broken generator and abort the
//! whole run.

use thiserror::Error;

/// Result type alias for pipeline operations.
pub type VectifyResult<T> = Result<T, VectifyError>;

/// Umbrella error for everything the core can fail with.
#[derive(Debug, Error)]
pub enum VectifyError {
    /// The SVG text could not be turned into an icon set.
    #[error("Failed to parse SVG: {0}")]
    Parse(#[from] ParseError),

    /// The requested variant is not registered.
    #[error(transparent)]
    UnsupportedVariant(#[from] UnsupportedVariantError),

    /// A template is missing or does not fit its data.
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),
}

impl VectifyError {
    /// Whether this error only concerns the file being compiled.
    ///
    /// Everything else means the generator or its configuration is broken
    /// and the batch should stop.
    pub fn is_per_file(&self) -> bool {
        matches!(self, VectifyError::Parse(_))
    }
}

/// Error raised by the node parser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The document has no `<svg>` element.
    #[error("Invalid SVG: No <svg> tag found")]
    MissingRoot,

    /// The markup is not well-formed.
    #[error("Malformed markup: {message}")]
    Malformed { message: String },
}

impl ParseError {
    /// Create a malformed-markup error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }
}

/// Error raised when a variant identifier is not registered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported framework: {variant}")]
pub struct UnsupportedVariantError {
    /// The identifier that was looked up.
    pub variant: String,
}

impl UnsupportedVariantError {
    /// Create a new error for the given identifier.
    pub fn new(variant: impl Into<String>) -> Self {
        Self {
            variant: variant.into(),
        }
    }
}

/// Error raised by the template renderer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// No template is registered under this identifier.
    #[error("Template not found: {id}")]
    NotFound { id: String },

    /// Rendering failed, typically a placeholder without data.
    #[error("Failed to render template '{id}': {message}")]
    Render { id: String, message: String },
}

impl TemplateError {
    /// Create a not-found error.
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Create a render error.
    pub fn render(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Render {
            id: id.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ParseError::MissingRoot.to_string(),
            "Invalid SVG: No <svg> tag found"
        );
        assert_eq!(
            UnsupportedVariantError::new("ember").to_string(),
            "Unsupported framework: ember"
        );
        assert_eq!(
            TemplateError::not_found("react/component").to_string(),
            "Template not found: react/component"
        );
    }

    #[test]
    fn test_per_file_classification() {
        let parse: VectifyError = ParseError::MissingRoot.into();
        assert!(parse.is_per_file());

        let variant: VectifyError = UnsupportedVariantError::new("ember").into();
        assert!(!variant.is_per_file());

        let template: VectifyError = TemplateError::render("x", "boom").into();
        assert!(!template.is_per_file());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<VectifyError>();
    }
}
