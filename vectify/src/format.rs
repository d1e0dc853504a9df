//! Serialization of icon trees.
//!
//! Two outputs are produced from the same tree:
//!
//! - a JavaScript literal (`['path', { d: 'M0 0' }]`) embedded in generated
//!   component source, see [`format_icon_node`];
//! - plain SVG markup, see [`to_svg_markup`], used by the preview page.

use std::fmt::Write;

use crate::node::{AttrValue, Attributes, IconNode, RuntimeParam};

/// SVG attributes whose canonical spelling is camel case.
///
/// These are kept as-is when keys are converted to hyphenated form.
const NATIVE_CAMEL_ATTRIBUTES: &[&str] = &[
    "allowReorder",
    "attributeName",
    "attributeType",
    "baseFrequency",
    "clipPathUnits",
    "diffuseConstant",
    "edgeMode",
    "filterUnits",
    "gradientTransform",
    "gradientUnits",
    "kernelMatrix",
    "kernelUnitLength",
    "keyPoints",
    "keySplines",
    "keyTimes",
    "lengthAdjust",
    "limitingConeAngle",
    "markerHeight",
    "markerUnits",
    "markerWidth",
    "maskContentUnits",
    "maskUnits",
    "numOctaves",
    "pathLength",
    "patternContentUnits",
    "patternTransform",
    "patternUnits",
    "pointsAtX",
    "pointsAtY",
    "pointsAtZ",
    "preserveAlpha",
    "preserveAspectRatio",
    "primitiveUnits",
    "refX",
    "refY",
    "repeatCount",
    "repeatDur",
    "requiredExtensions",
    "requiredFeatures",
    "specularConstant",
    "specularExponent",
    "spreadMethod",
    "startOffset",
    "stdDeviation",
    "stitchTiles",
    "surfaceScale",
    "systemLanguage",
    "tableValues",
    "targetX",
    "targetY",
    "textLength",
    "viewBox",
    "xChannelSelector",
    "yChannelSelector",
    "zoomAndPan",
];

/// Hyphenated SVG attributes, in the camel form the parser produces.
const HYPHENATED_ATTRIBUTES: &[&str] = &[
    "alignmentBaseline",
    "baselineShift",
    "clipPath",
    "clipRule",
    "colorInterpolation",
    "colorInterpolationFilters",
    "colorProfile",
    "colorRendering",
    "dominantBaseline",
    "enableBackground",
    "fillOpacity",
    "fillRule",
    "floodColor",
    "floodOpacity",
    "fontFamily",
    "fontSize",
    "fontSizeAdjust",
    "fontStretch",
    "fontStyle",
    "fontVariant",
    "fontWeight",
    "glyphOrientationHorizontal",
    "glyphOrientationVertical",
    "imageRendering",
    "letterSpacing",
    "lightingColor",
    "markerEnd",
    "markerMid",
    "markerStart",
    "overlinePosition",
    "overlineThickness",
    "paintOrder",
    "pointerEvents",
    "shapeRendering",
    "stopColor",
    "stopOpacity",
    "strikethroughPosition",
    "strikethroughThickness",
    "strokeDasharray",
    "strokeDashoffset",
    "strokeLinecap",
    "strokeLinejoin",
    "strokeMiterlimit",
    "strokeOpacity",
    "strokeWidth",
    "textAnchor",
    "textDecoration",
    "textRendering",
    "transformOrigin",
    "underlinePosition",
    "underlineThickness",
    "unicodeBidi",
    "vectorEffect",
    "wordSpacing",
    "writingMode",
];

/// Prefixes of attribute families that are always hyphenated.
const HYPHENATED_PREFIXES: &[&str] = &["data", "aria"];

/// Spelling of attribute keys in the emitted literal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyStyle {
    /// `strokeWidth`, for JSX runtimes that translate props.
    #[default]
    Camel,
    /// `'stroke-width'`, for runtimes that set DOM attributes directly.
    Kebab,
}

/// Options for the literal formatter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatOptions {
    /// Leading spaces of the outermost node.
    pub indent: usize,
    pub key_style: KeyStyle,
}

impl FormatOptions {
    pub fn new(indent: usize, key_style: KeyStyle) -> Self {
        Self { indent, key_style }
    }

    /// Set the indentation.
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Set the key style.
    pub fn with_key_style(mut self, key_style: KeyStyle) -> Self {
        self.key_style = key_style;
        self
    }

    fn nested(&self) -> Self {
        self.with_indent(self.indent + 2)
    }
}

/// Format one node as a nested array literal.
///
/// A node without children renders as a 2-element array; otherwise the
/// children follow as a third element, each on its own line two spaces
/// deeper.
pub fn format_icon_node(node: &IconNode, options: &FormatOptions) -> String {
    let indent = " ".repeat(options.indent);
    let attrs = format_attributes(&node.attributes, options.key_style);

    match &node.children {
        Some(children) if !children.is_empty() => {
            let nested = options.nested();
            let children = children
                .iter()
                .map(|child| format_icon_node(child, &nested))
                .collect::<Vec<_>>()
                .join(",\n");
            format!(
                "{indent}['{}', {attrs}, [\n{children}\n{indent}]]",
                node.element
            )
        }
        _ => format!("{indent}['{}', {attrs}]", node.element),
    }
}

/// Format root nodes, one per line, separated by commas.
pub fn format_icon_set(icon_set: &[IconNode], options: &FormatOptions) -> String {
    icon_set
        .iter()
        .map(|node| format_icon_node(node, options))
        .collect::<Vec<_>>()
        .join(",\n")
}

/// Format an attribute map as an object literal, `{}` when empty.
pub fn format_attributes(attrs: &Attributes, key_style: KeyStyle) -> String {
    if attrs.is_empty() {
        return "{}".to_string();
    }

    let entries = attrs
        .iter()
        .map(|(key, value)| {
            let key = match key_style {
                KeyStyle::Camel => key.clone(),
                KeyStyle::Kebab => to_kebab_attribute(key),
            };
            format!("{}: {}", format_key(&key), format_value(value))
        })
        .collect::<Vec<_>>()
        .join(", ");

    format!("{{ {entries} }}")
}

/// Format a single value as a JavaScript literal.
pub fn format_value(value: &AttrValue) -> String {
    match value {
        AttrValue::Number(number) => number.to_string(),
        AttrValue::String(text) => quote(text),
        AttrValue::Param(param) => quote(param.placeholder()),
    }
}

/// Object keys are bare when they are valid identifiers, quoted otherwise.
fn format_key(key: &str) -> String {
    if is_identifier(key) {
        key.to_string()
    } else {
        quote(key)
    }
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}

fn quote(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('\'');
    for c in text.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '\'' => quoted.push_str("\\'"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            _ => quoted.push(c),
        }
    }
    quoted.push('\'');
    quoted
}

/// Convert a camel-cased attribute name back to its hyphenated SVG form.
///
/// `strokeWidth` → `stroke-width`, `dataIcon` → `data-icon`. Only known
/// hyphenated SVG attributes and the `data-*`/`aria-*` families are
/// converted; any other name, including native camel-case ones such as
/// `viewBox`, is returned unchanged so camel-case source spellings survive.
/// An unknown hyphenated source attribute therefore comes back camel-cased.
pub fn to_kebab_attribute(name: &str) -> String {
    if NATIVE_CAMEL_ATTRIBUTES.contains(&name) || !is_hyphenated_attribute(name) {
        return name.to_string();
    }

    let mut result = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            result.push('-');
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}

fn is_hyphenated_attribute(name: &str) -> bool {
    HYPHENATED_ATTRIBUTES.contains(&name)
        || HYPHENATED_PREFIXES.iter().any(|prefix| {
            name.strip_prefix(prefix)
                .is_some_and(|rest| rest.starts_with(|c: char| c.is_ascii_uppercase()))
        })
}

/// Options for [`to_svg_markup`].
#[derive(Debug, Clone, PartialEq)]
pub struct MarkupOptions {
    /// Substituted for [`RuntimeParam::Color`].
    pub color: String,
    /// Substituted for [`RuntimeParam::StrokeWidth`].
    pub stroke_width: f64,
    /// Width and height of the document produced by [`to_svg_document`].
    pub size: u32,
}

impl Default for MarkupOptions {
    fn default() -> Self {
        Self {
            color: "currentColor".to_string(),
            stroke_width: 2.0,
            size: 24,
        }
    }
}

/// Serialize one node to SVG markup with hyphenated attribute names.
pub fn to_svg_markup(node: &IconNode, options: &MarkupOptions) -> String {
    let mut out = String::new();
    write_markup(&mut out, node, options);
    out
}

/// Wrap root nodes in a standalone 24×24 `<svg>` document.
pub fn to_svg_document(icon_set: &[IconNode], options: &MarkupOptions) -> String {
    let mut out = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 24 24">"#,
        size = options.size
    );
    for node in icon_set {
        write_markup(&mut out, node, options);
    }
    out.push_str("</svg>");
    out
}

fn write_markup(out: &mut String, node: &IconNode, options: &MarkupOptions) {
    let _ = write!(out, "<{}", node.element);

    for (key, value) in &node.attributes {
        let value = match value {
            AttrValue::Number(number) => number.to_string(),
            AttrValue::String(text) => text.clone(),
            AttrValue::Param(RuntimeParam::Color) => options.color.clone(),
            AttrValue::Param(RuntimeParam::StrokeWidth) => options.stroke_width.to_string(),
        };
        let _ = write!(
            out,
            " {}=\"{}\"",
            to_kebab_attribute(key),
            escape_attribute(&value)
        );
    }

    if node.has_children() {
        out.push('>');
        for child in node.children() {
            write_markup(out, child, options);
        }
        let _ = write!(out, "</{}>", node.element);
    } else {
        out.push_str("/>");
    }
}

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
