#![cfg(feature = "serde")]
// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Serialization of signatures as their text.

use dsig::{Signature, TypeTag};
use pretty_assertions::assert_eq;

#[test]
fn serializes_as_string() {
    let sig = Signature::new("a{sv}");
    assert_eq!(serde_json::to_string(&sig).unwrap(), "\"a{sv}\"");
}

#[test]
fn deserializes_by_parsing() {
    let sig: Signature = serde_json::from_str("\"a(ii)\"").unwrap();
    assert!(sig.is_singleton());
    assert_eq!(sig.begin().current_tag(), Ok(TypeTag::Array));
}

#[test]
fn empty_signature_round_trips() {
    let sig: Signature = serde_json::from_str("\"\"").unwrap();
    assert!(sig.is_valid());
    assert!(sig.is_empty());
}

#[test]
fn invalid_text_fails_to_deserialize() {
    let err = serde_json::from_str::<Signature>("\"(i\"").unwrap_err();
    assert!(
        err.to_string().contains("missing STRUCT end"),
        "unexpected error: {err}"
    );
}

#[test]
fn signatures_inside_structures() {
    let sigs: Vec<Signature> = serde_json::from_str(r#"["s", "ai", "a{oa{sv}}"]"#).unwrap();
    let lens: Vec<usize> = sigs.iter().map(Signature::len).collect();
    assert_eq!(lens, vec![1, 1, 1]);
    assert_eq!(
        serde_json::to_string(&sigs).unwrap(),
        r#"["s","ai","a{oa{sv}}"]"#
    );
}
