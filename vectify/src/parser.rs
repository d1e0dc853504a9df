//! SVG markup → [`IconSet`].
//!
//! The markup is read with `roxmltree`, so nesting, self-closing tags and
//! attribute values containing `>` are handled by a real XML reader. Only the
//! elements listed in [`ElementType`] are kept; an unsupported element is
//! dropped together with everything below it.

use roxmltree::{Document, Node, ParsingOptions};
use tracing::{debug, trace};

use crate::error::ParseError;
use crate::node::{AttrValue, Attributes, ElementType, IconNode, IconSet};

/// Attribute names with this prefix are namespace declarations.
const RESERVED_PREFIX: &str = "xmlns";

/// Parse SVG text into the root-level nodes below its `<svg>` element.
///
/// # Errors
///
/// Returns [`ParseError::Malformed`] when the text is not well-formed XML and
/// [`ParseError::MissingRoot`] when no `<svg>` element exists.
pub fn parse_svg(svg: &str) -> Result<IconSet, ParseError> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..Default::default()
    };

    let doc = Document::parse_with_options(svg, options).map_err(|e| {
        // roxmltree reports an empty or element-less document as a missing root.
        match e {
            roxmltree::Error::NoRootNode => ParseError::MissingRoot,
            other => ParseError::malformed(other.to_string()),
        }
    })?;

    let root = find_svg_root(&doc).ok_or(ParseError::MissingRoot)?;

    let nodes: IconSet = root
        .children()
        .filter(Node::is_element)
        .filter_map(parse_element)
        .collect();

    debug!(nodes = nodes.len(), "Parsed SVG document");
    Ok(nodes)
}

/// The document element when it is `<svg>`, otherwise the first nested one.
fn find_svg_root<'a, 'input>(doc: &'a Document<'input>) -> Option<Node<'a, 'input>> {
    let root = doc.root_element();
    if is_svg(root) {
        return Some(root);
    }
    root.descendants().find(|node| is_svg(*node))
}

fn is_svg(node: Node<'_, '_>) -> bool {
    node.is_element() && node.tag_name().name() == "svg"
}

/// Convert one element, `None` when its tag is unsupported.
fn parse_element(node: Node<'_, '_>) -> Option<IconNode> {
    let tag = node.tag_name().name();
    let Some(element) = ElementType::from_tag(tag) else {
        trace!(tag, "Dropping unsupported element");
        return None;
    };

    let attributes = parse_attributes(node);
    let children: Vec<IconNode> = node
        .children()
        .filter(Node::is_element)
        .filter_map(parse_element)
        .collect();

    Some(IconNode::new(element, attributes, children))
}

/// Collect attributes with camel-cased names and coerced values.
fn parse_attributes(node: Node<'_, '_>) -> Attributes {
    let mut attributes = Attributes::new();

    for attr in node.attributes() {
        let name = match attr.namespace().and_then(|uri| node.lookup_prefix(uri)) {
            Some(prefix) if !prefix.is_empty() => format!("{}:{}", prefix, attr.name()),
            _ => attr.name().to_string(),
        };

        if name.starts_with(RESERVED_PREFIX) {
            continue;
        }

        attributes.insert(camelize(&name), AttrValue::coerce(attr.value()));
    }

    attributes
}

/// Fold hyphenated names into camel form: `stroke-width` → `strokeWidth`.
///
/// Only a hyphen followed by a lowercase ASCII letter is folded; anything
/// else is kept verbatim.
pub fn camelize(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut chars = name.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '-' {
            if let Some(next) = chars.peek().copied().filter(char::is_ascii_lowercase) {
                result.push(next.to_ascii_uppercase());
                chars.next();
                continue;
            }
        }
        result.push(c);
    }

    result
}
