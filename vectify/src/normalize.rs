//! Color and stroke normalization.
//!
//! Icons exported from design tools carry hard-coded paint values. Before
//! rendering, each node is classified as fill-type or stroke-type and its
//! paint attributes are replaced by [`RuntimeParam`] placeholders, so the
//! generated component can recolor it at run time.

use crate::node::{AttrValue, Attributes, IconNode, IconSet, RuntimeParam};

const FILL: &str = "fill";
const STROKE: &str = "stroke";
const STROKE_WIDTH: &str = "strokeWidth";
const STROKE_LINECAP: &str = "strokeLinecap";
const STROKE_LINEJOIN: &str = "strokeLinejoin";

/// Options for [`normalize_attributes`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Leave the source paint untouched.
    pub keep_colors: bool,
}

impl NormalizeOptions {
    /// Options that keep the original colors.
    pub fn keep_colors() -> Self {
        Self { keep_colors: true }
    }
}

/// How a node is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorRole {
    /// Has a `fill` other than `none`. Wins over stroke.
    Fill,
    /// Has a `stroke` and no effective fill.
    Stroke,
    /// Neither.
    Neutral,
}

/// Classify an attribute map.
pub fn classify(attrs: &Attributes) -> ColorRole {
    let has_fill = attrs.get(FILL).is_some_and(|fill| !fill.is_none_keyword());
    let has_stroke = attrs.contains_key(STROKE);

    if has_fill {
        ColorRole::Fill
    } else if has_stroke {
        ColorRole::Stroke
    } else {
        ColorRole::Neutral
    }
}

/// Rewrite the paint attributes of one node.
///
/// The input is never modified. Non-paint attributes keep their values and
/// their relative order; removed paint attributes are re-appended at the end.
pub fn normalize_attributes(attrs: &Attributes, options: NormalizeOptions) -> Attributes {
    if options.keep_colors {
        return attrs.clone();
    }

    let role = classify(attrs);
    let mut result = attrs.clone();
    result.shift_remove(FILL);
    result.shift_remove(STROKE);
    let original_stroke_width = result.shift_remove(STROKE_WIDTH);

    match role {
        ColorRole::Fill => {
            result.insert(FILL.to_string(), RuntimeParam::Color.into());
        }
        ColorRole::Stroke => {
            result.insert(FILL.to_string(), AttrValue::from("none"));
            result.insert(STROKE.to_string(), RuntimeParam::Color.into());
            result.insert(
                STROKE_WIDTH.to_string(),
                original_stroke_width.unwrap_or(RuntimeParam::StrokeWidth.into()),
            );
            // `insert` on an existing key replaces the value in place.
            result.insert(STROKE_LINECAP.to_string(), AttrValue::from("round"));
            result.insert(STROKE_LINEJOIN.to_string(), AttrValue::from("round"));
        }
        ColorRole::Neutral => {}
    }

    result
}

/// Normalize a node and its whole subtree.
pub fn normalize_node(node: &IconNode, options: NormalizeOptions) -> IconNode {
    IconNode {
        element: node.element,
        attributes: normalize_attributes(&node.attributes, options),
        children: node.children.as_ref().map(|children| {
            children
                .iter()
                .map(|child| normalize_node(child, options))
                .collect()
        }),
    }
}

/// Normalize every root node of an icon, preserving order.
pub fn normalize_icon_set(icon_set: &[IconNode], options: NormalizeOptions) -> IconSet {
    icon_set
        .iter()
        .map(|node| normalize_node(node, options))
        .collect()
}
