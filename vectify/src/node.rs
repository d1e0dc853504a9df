//! Canonical icon tree.
//!
//! An icon is an ordered list of [`IconNode`]s. Each node carries one of the
//! supported SVG shape/group elements, its attributes in camel form, and its
//! supported children. The same tree feeds every output variant.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;

/// Attribute map of a node.
///
/// Iteration follows document order, which keeps generated output stable.
/// Equality ignores order.
pub type Attributes = IndexMap<String, AttrValue>;

/// Root-level nodes parsed from one SVG file, in document order.
pub type IconSet = Vec<IconNode>;

/// SVG elements that survive parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    Circle,
    Ellipse,
    Line,
    Path,
    Polygon,
    Polyline,
    Rect,
    G,
}

impl ElementType {
    /// All supported elements.
    pub const ALL: [ElementType; 8] = [
        ElementType::Circle,
        ElementType::Ellipse,
        ElementType::Line,
        ElementType::Path,
        ElementType::Polygon,
        ElementType::Polyline,
        ElementType::Rect,
        ElementType::G,
    ];

    /// The SVG tag name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementType::Circle => "circle",
            ElementType::Ellipse => "ellipse",
            ElementType::Line => "line",
            ElementType::Path => "path",
            ElementType::Polygon => "polygon",
            ElementType::Polyline => "polyline",
            ElementType::Rect => "rect",
            ElementType::G => "g",
        }
    }

    /// Look up a tag name, `None` for anything outside the supported set.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|element| element.as_str() == tag)
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| format!("unsupported SVG element '{}'", s))
    }
}

/// Values supplied by the generated component when it is instantiated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuntimeParam {
    /// The `color` input.
    Color,
    /// The `strokeWidth` input.
    StrokeWidth,
}

impl RuntimeParam {
    /// Sentinel literal the base runtimes substitute at render time.
    pub fn placeholder(&self) -> &'static str {
        match self {
            RuntimeParam::Color => "$color",
            RuntimeParam::StrokeWidth => "$strokeWidth",
        }
    }
}

/// An attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Number(f64),
    String(String),
    Param(RuntimeParam),
}

impl AttrValue {
    /// Coerce raw attribute text.
    ///
    /// The trimmed text must parse as a finite number in full, so `"1.5"`
    /// becomes `1.5` while `"10px"` or a path `d` stays a string.
    pub fn coerce(raw: &str) -> Self {
        match raw.trim().parse::<f64>() {
            Ok(number) if number.is_finite() => AttrValue::Number(number),
            _ => AttrValue::String(raw.to_string()),
        }
    }

    /// The string content, if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// The number, if this is a numeric value.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AttrValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Check for the literal string `"none"`.
    pub fn is_none_keyword(&self) -> bool {
        self.as_str() == Some("none")
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::String(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::String(value)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Number(value)
    }
}

impl From<RuntimeParam> for AttrValue {
    fn from(value: RuntimeParam) -> Self {
        AttrValue::Param(value)
    }
}

/// One supported SVG element with its attributes and supported children.
#[derive(Debug, Clone, PartialEq)]
pub struct IconNode {
    pub element: ElementType,
    pub attributes: Attributes,
    /// `None` whenever the element has no supported children.
    pub children: Option<Vec<IconNode>>,
}

impl IconNode {
    /// Create a node; an empty child list is stored as `None`.
    pub fn new(element: ElementType, attributes: Attributes, children: Vec<IconNode>) -> Self {
        Self {
            element,
            attributes,
            children: if children.is_empty() {
                None
            } else {
                Some(children)
            },
        }
    }

    /// Create a node without children.
    pub fn leaf(element: ElementType, attributes: Attributes) -> Self {
        Self::new(element, attributes, Vec::new())
    }

    /// Children as a slice, empty when absent.
    pub fn children(&self) -> &[IconNode] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Check whether the node has children.
    pub fn has_children(&self) -> bool {
        self.children.is_some()
    }

    /// Get an attribute value by its camel-cased name.
    pub fn attr(&self, name: &str) -> Option<&AttrValue> {
        self.attributes.get(name)
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(IconNode::node_count).sum::<usize>()
    }
}

/// Build an [`Attributes`] map from name/value pairs.
pub fn attrs<I, K, V>(pairs: I) -> Attributes
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<AttrValue>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
