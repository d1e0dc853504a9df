//! Property-based tests for vectify.
//!
//! Properties tested:
//! - Normalization is idempotent
//! - Keeping colors leaves attributes untouched
//! - Fill-type nodes carry no stroke attributes
//! - Non-paint attributes survive normalization
//! - Finite numbers coerce back to themselves
//! - Markup round-trip: parse(markup(tree)) == tree
//! - Every node appears once in the formatted literal
//! - Index completeness and ordering for every variant

use proptest::prelude::*;

use vectify::format::{FormatOptions, KeyStyle, MarkupOptions, format_icon_node, to_svg_document};
use vectify::node::attrs;
use vectify::normalize::{ColorRole, classify};
use vectify::{
    AttrValue, Attributes, ElementType, IconNode, NormalizeOptions, RuntimeParam,
    normalize_attributes, parse_svg, registry,
};

const PAINT_KEYS: [&str; 5] = ["fill", "stroke", "strokeWidth", "strokeLinecap", "strokeLinejoin"];

// =============================================================================
// Generators for property tests
// =============================================================================

fn arb_element() -> impl Strategy<Value = ElementType> {
    prop::sample::select(ElementType::ALL.to_vec())
}

/// Attribute names that survive hyphenation and re-camelization.
fn arb_key() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{1,8}".prop_filter("reserved prefix", |k| !k.starts_with("xml")),
        "[a-z]{1,5}[A-Z][a-z]{1,5}".prop_filter("reserved prefix", |k| !k.starts_with("xml")),
        "(data|aria)[A-Z][a-z]{1,5}",
        prop::sample::select(vec![
            "strokeWidth",
            "fillRule",
            "clipPath",
            "viewBox",
            "pathLength",
            "x1",
            "strokeDasharray",
        ])
        .prop_map(String::from),
    ]
}

/// Text values that are never numeric and need no XML escaping.
fn arb_text() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9#.]{0,10}"
}

fn arb_value() -> impl Strategy<Value = AttrValue> {
    prop_oneof![
        (-1.0e6f64..1.0e6).prop_map(AttrValue::Number),
        (-1000i32..1000).prop_map(|n| AttrValue::Number(f64::from(n))),
        arb_text().prop_map(AttrValue::String),
    ]
}

fn arb_attributes() -> impl Strategy<Value = Attributes> {
    prop::collection::vec((arb_key(), arb_value()), 0..6).prop_map(|pairs| attrs(pairs))
}

/// Attribute maps biased towards paint attributes.
fn arb_paint_attributes() -> impl Strategy<Value = Attributes> {
    let paint = prop::collection::vec(
        (
            prop::sample::select(PAINT_KEYS.to_vec()).prop_map(String::from),
            prop_oneof![
                Just(AttrValue::from("none")),
                Just(AttrValue::from("#000")),
                Just(AttrValue::from("currentColor")),
                (0.5f64..4.0).prop_map(AttrValue::Number),
            ],
        ),
        0..5,
    );
    (paint, arb_attributes()).prop_map(|(paint, mut rest)| {
        rest.extend(paint);
        rest
    })
}

fn arb_node() -> impl Strategy<Value = IconNode> {
    let leaf = (arb_element(), arb_attributes()).prop_map(|(e, a)| IconNode::leaf(e, a));
    leaf.prop_recursive(3, 24, 4, |inner| {
        (arb_element(), arb_attributes(), prop::collection::vec(inner, 0..4))
            .prop_map(|(element, attributes, children)| IconNode::new(element, attributes, children))
    })
}

// =============================================================================
// Normalizer
// =============================================================================

proptest! {
    #[test]
    fn prop_normalize_idempotent(input in arb_paint_attributes()) {
        let options = NormalizeOptions::default();
        let once = normalize_attributes(&input, options);
        let twice = normalize_attributes(&once, options);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_keep_colors_is_identity(input in arb_paint_attributes()) {
        let output = normalize_attributes(&input, NormalizeOptions::keep_colors());
        prop_assert_eq!(output, input);
    }

    #[test]
    fn prop_role_decides_output(input in arb_paint_attributes()) {
        let output = normalize_attributes(&input, NormalizeOptions::default());

        match classify(&input) {
            ColorRole::Fill => {
                prop_assert_eq!(output.get("fill"), Some(&AttrValue::Param(RuntimeParam::Color)));
                prop_assert!(!output.contains_key("stroke"));
                prop_assert!(!output.contains_key("strokeWidth"));
            }
            ColorRole::Stroke => {
                prop_assert_eq!(output.get("fill"), Some(&AttrValue::from("none")));
                prop_assert_eq!(output.get("stroke"), Some(&AttrValue::Param(RuntimeParam::Color)));
                prop_assert!(output.contains_key("strokeWidth"));
                prop_assert_eq!(output.get("strokeLinecap"), Some(&AttrValue::from("round")));
                prop_assert_eq!(output.get("strokeLinejoin"), Some(&AttrValue::from("round")));
            }
            ColorRole::Neutral => {
                prop_assert!(!output.contains_key("fill"));
                prop_assert!(!output.contains_key("stroke"));
                prop_assert!(!output.contains_key("strokeWidth"));
            }
        }
    }

    #[test]
    fn prop_non_paint_attributes_preserved(input in arb_paint_attributes()) {
        let output = normalize_attributes(&input, NormalizeOptions::default());

        for (key, value) in &input {
            if !PAINT_KEYS.contains(&key.as_str()) {
                prop_assert_eq!(output.get(key), Some(value));
            }
        }
    }
}

// =============================================================================
// Coercion
// =============================================================================

proptest! {
    #[test]
    fn prop_finite_numbers_coerce(n in prop::num::f64::NORMAL | prop::num::f64::ZERO) {
        prop_assert_eq!(AttrValue::coerce(&n.to_string()), AttrValue::Number(n));
    }

    #[test]
    fn prop_padded_numbers_coerce(n in -1000i32..1000, pad in " {0,3}") {
        let raw = format!("{pad}{n}{pad}");
        prop_assert_eq!(AttrValue::coerce(&raw), AttrValue::Number(f64::from(n)));
    }

    #[test]
    fn prop_text_stays_string(text in arb_text()) {
        prop_assert_eq!(AttrValue::coerce(&text), AttrValue::String(text.clone()));
    }

    #[test]
    fn prop_numbers_with_units_stay_strings(n in 0u32..1000, unit in "(px|em|%|pt)") {
        let raw = format!("{n}{unit}");
        prop_assert_eq!(AttrValue::coerce(&raw), AttrValue::String(raw.clone()));
    }
}

// =============================================================================
// Parser and formatter
// =============================================================================

proptest! {
    #[test]
    fn prop_markup_round_trip(nodes in prop::collection::vec(arb_node(), 0..4)) {
        let markup = to_svg_document(&nodes, &MarkupOptions::default());
        let parsed = parse_svg(&markup).unwrap();
        prop_assert_eq!(parsed, nodes);
    }

    #[test]
    fn prop_literal_lists_every_node(node in arb_node()) {
        for key_style in [KeyStyle::Camel, KeyStyle::Kebab] {
            let literal = format_icon_node(&node, &FormatOptions::new(0, key_style));
            prop_assert_eq!(literal.matches("['").count(), node.node_count());
            let leaves = count_leaves(&node);
            prop_assert_eq!(literal.lines().count(), leaves + 2 * (node.node_count() - leaves));
        }
    }
}

fn count_leaves(node: &IconNode) -> usize {
    if node.has_children() {
        node.children().iter().map(count_leaves).sum()
    } else {
        1
    }
}

// =============================================================================
// Index
// =============================================================================

proptest! {
    #[test]
    fn prop_index_lists_every_component(
        names in prop::collection::vec("[A-Z][a-zA-Z0-9]{0,10}", 0..8),
        typed in any::<bool>(),
    ) {
        for id in registry().list() {
            let strategy = registry().get(id).unwrap();
            let index = strategy.render_index(&names, typed).unwrap();
            let lines: Vec<&str> = index.lines().filter(|l| !l.trim().is_empty()).collect();

            prop_assert_eq!(lines.len(), names.len());
            for (line, name) in lines.iter().zip(&names) {
                prop_assert!(line.contains(&format!(" {} ", name)), "{}: {}", id, line);
                prop_assert!(line.starts_with("export {"), "{}: {}", id, line);
            }
        }
    }
}
