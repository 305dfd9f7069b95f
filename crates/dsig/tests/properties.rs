// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Property-based tests for signature parsing and traversal.
//!
//! Valid signatures are generated from the grammar; arbitrary text is used to
//! check that malformed input is rejected cleanly.

use dsig::{IterError, ParseOptions, Signature, SignatureIterator, StrictChecks, TypeNode};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn arb_basic() -> impl Strategy<Value = String> {
    prop::sample::select(vec!['y', 'b', 'n', 'q', 'i', 'u', 'x', 't', 'd', 's', 'o', 'g', 'h'])
        .prop_map(String::from)
}

/// One complete type.
fn arb_type() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![4 => arb_basic(), 1 => Just("v".to_string())];
    leaf.prop_recursive(6, 48, 4, |inner| {
        prop_oneof![
            inner.clone().prop_map(|t| format!("a{t}")),
            prop::collection::vec(inner.clone(), 0..4).prop_map(|f| format!("({})", f.concat())),
            (arb_basic(), inner).prop_map(|(k, v)| format!("a{{{k}{v}}}")),
        ]
    })
}

/// Zero or more complete types.
fn arb_signature() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_type(), 0..5)
}

/// Visit every node reachable from `it`, checking that `recurse` succeeds
/// exactly on containers. Returns the number of nodes visited.
fn walk(mut it: SignatureIterator<'_>) -> usize {
    let mut visited = 0;
    while let Some(node) = it.current() {
        visited += 1;
        match it.recurse() {
            Ok(child) => {
                assert!(node.is_container());
                visited += walk(child);
            }
            Err(err) => {
                assert!(!node.is_container());
                assert_eq!(err, IterError::NotContainer { tag: node.tag() });
            }
        }
        it.advance();
    }
    visited
}

fn count_nodes(nodes: &[TypeNode]) -> usize {
    nodes.iter().map(|n| 1 + count_nodes(n.children())).sum()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn generated_signatures_are_valid(types in arb_signature()) {
        let text = types.concat();
        let sig = Signature::new(text.as_str());
        prop_assert!(sig.is_valid(), "rejected {:?}: {:?}", text, sig.error());
        prop_assert_eq!(sig.len(), types.len());
        prop_assert_eq!(sig.is_singleton(), types.len() == 1);
    }

    #[test]
    fn nodes_render_back_to_their_text(types in arb_signature()) {
        let sig = Signature::new(types.concat());
        let rendered: Vec<String> = sig.iter().map(TypeNode::signature).collect();
        prop_assert_eq!(rendered, types);
    }

    #[test]
    fn parsing_is_deterministic(types in arb_signature()) {
        let text = types.concat();
        prop_assert_eq!(Signature::new(text.as_str()), Signature::new(text.as_str()));
    }

    #[test]
    fn advancing_len_times_reaches_end(types in arb_signature()) {
        let sig = Signature::new(types.concat());
        let mut it = sig.begin();
        for _ in 0..types.len() {
            prop_assert!(it != sig.end());
            it.advance();
        }
        prop_assert!(it == sig.end());
        prop_assert_eq!(it.current_tag(), Err(IterError::AtEnd));
    }

    #[test]
    fn recurse_succeeds_only_on_containers(types in arb_signature()) {
        let sig = Signature::new(types.concat());
        prop_assert_eq!(walk(sig.begin()), count_nodes(sig.nodes()));
    }

    #[test]
    fn generated_dictionaries_pass_dict_entry_checks(types in arb_signature()) {
        let options = ParseOptions::with_checks(
            StrictChecks::DICT_ENTRY_ARITY | StrictChecks::DICT_ENTRY_KEY_BASIC,
        );
        let sig = Signature::with_options(types.concat(), options);
        prop_assert!(sig.is_valid(), "rejected: {:?}", sig.error());
    }

    #[test]
    fn grammar_alphabet_never_panics(text in "[ybnqiuxtdsoghva(){}]{0,24}") {
        let sig = Signature::new(text.as_str());
        match sig.error() {
            None => {
                let rendered: String = sig.iter().map(TypeNode::signature).collect();
                prop_assert_eq!(rendered, text);
            }
            Some(err) => {
                prop_assert!(err.position() <= text.len());
                prop_assert!(sig.is_empty());
                prop_assert!(sig.begin() == sig.end());
            }
        }
    }

    #[test]
    fn arbitrary_text_never_panics(text in ".{0,32}") {
        let sig = Signature::new(text.as_str());
        prop_assert_eq!(sig.as_str(), text.as_str());
        if let Some(err) = sig.error() {
            prop_assert!(text.is_char_boundary(err.position()));
        }
    }

    #[test]
    fn unbalanced_struct_is_invalid(types in arb_signature()) {
        let text = format!("({}", types.concat());
        prop_assert!(!Signature::new(text).is_valid());
    }
}
