//! Component naming.
//!
//! `arrow-right.svg` becomes `ArrowRight`, then an optional transform runs,
//! then the configured prefix and suffix are added.

use std::fmt;

/// User hook replacing the PascalCase name.
pub trait NameTransform: Send + Sync {
    fn transform(&self, name: &str) -> String;
}

impl<F> NameTransform for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn transform(&self, name: &str) -> String {
        self(name)
    }
}

/// How file names map to component names.
#[derive(Default)]
pub struct NamingOptions {
    pub prefix: String,
    pub suffix: String,
    pub transform: Option<Box<dyn NameTransform>>,
}

impl NamingOptions {
    /// Create options with a prefix and suffix.
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
            transform: None,
        }
    }

    /// Set the name transform.
    pub fn with_transform(mut self, transform: impl NameTransform + 'static) -> Self {
        self.transform = Some(Box::new(transform));
        self
    }
}

impl fmt::Debug for NamingOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamingOptions")
            .field("prefix", &self.prefix)
            .field("suffix", &self.suffix)
            .field("transform", &self.transform.is_some())
            .finish()
    }
}

/// Convert a file stem to PascalCase.
///
/// A `-` or `_` upper-cases the character after it, the first character is
/// upper-cased, then everything that is not an ASCII letter or digit is
/// removed.
pub fn to_pascal_case(input: &str) -> String {
    let mut joined = String::with_capacity(input.len());
    let mut chars = input.chars();

    while let Some(c) = chars.next() {
        if c == '-' || c == '_' {
            match chars.next() {
                Some('\n') => {
                    joined.push(c);
                    joined.push('\n');
                }
                Some(next) => joined.extend(next.to_uppercase()),
                None => joined.push(c),
            }
        } else {
            joined.push(c);
        }
    }

    let mut chars = joined.chars();
    let capitalized = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
        None => String::new(),
    };

    capitalized
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

/// Derive the component name for an SVG file name.
pub fn component_name(file_name: &str, options: &NamingOptions) -> String {
    let stem = file_name.strip_suffix(".svg").unwrap_or(file_name);

    let mut name = to_pascal_case(stem);
    if let Some(transform) = &options.transform {
        name = transform.transform(&name);
    }

    format!("{}{}{}", options.prefix, name, options.suffix)
}

/// Check that `name` can be used as an identifier in every variant.
pub fn is_valid_component_name(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
