use super::*;

#[test]
fn discriminant_is_signature_character() {
    assert_eq!(TypeTag::Byte as u8, b'y');
    assert_eq!(TypeTag::Int32 as u8, b'i');
    assert_eq!(TypeTag::Variant as u8, b'v');
    assert_eq!(TypeTag::StructBegin as u8, b'(');
    assert_eq!(TypeTag::DictEntryEnd as u8, b'}');
    assert_eq!(TypeTag::Invalid as u8, 0);
}

#[test]
fn from_code_maps_every_grammar_symbol() {
    for c in "ybnqiuxtdsoghva(){}".chars() {
        let tag = TypeTag::from_code(c);
        assert!(tag.is_some(), "no tag for {c:?}");
        assert_eq!(tag.map(TypeTag::code), Some(c));
    }
}

#[test]
fn from_code_rejects_non_symbols() {
    assert_eq!(TypeTag::from_code('7'), None);
    assert_eq!(TypeTag::from_code(' '), None);
    assert_eq!(TypeTag::from_code('I'), None);
    assert_eq!(TypeTag::from_code('\0'), None);
    assert_eq!(TypeTag::from_code('é'), None);
}

#[test]
fn synthetic_container_codes_are_not_symbols() {
    assert_eq!(TypeTag::Struct.code(), 'r');
    assert_eq!(TypeTag::DictEntry.code(), 'e');
    assert_eq!(TypeTag::from_code('r'), None);
    assert_eq!(TypeTag::from_code('e'), None);
}

#[test]
fn categories_are_disjoint() {
    assert!(TypeTag::UnixFd.is_basic());
    assert!(TypeTag::String.is_basic());
    assert!(!TypeTag::Variant.is_basic());
    assert!(TypeTag::Variant.is_terminal());
    assert!(!TypeTag::Array.is_terminal());

    assert!(TypeTag::Array.is_container());
    assert!(TypeTag::Struct.is_container());
    assert!(TypeTag::DictEntry.is_container());
    assert!(!TypeTag::StructBegin.is_container());

    assert!(TypeTag::StructEnd.is_delimiter());
    assert!(!TypeTag::Struct.is_delimiter());
    assert!(!TypeTag::Invalid.is_terminal());
}

#[test]
fn display_uses_upper_case_names() {
    assert_eq!(TypeTag::ObjectPath.to_string(), "OBJECT_PATH");
    assert_eq!(TypeTag::DictEntry.to_string(), "DICT_ENTRY");
    assert_eq!(ContainerKind::Struct.to_string(), "STRUCT");
}

#[test]
fn container_kind_round_trips_through_tags() {
    for kind in [
        ContainerKind::Array,
        ContainerKind::Struct,
        ContainerKind::DictEntry,
    ] {
        assert_eq!(ContainerKind::from_tag(kind.tag()), Some(kind));
    }
    assert_eq!(
        ContainerKind::from_tag(TypeTag::StructEnd),
        Some(ContainerKind::Struct)
    );
    assert_eq!(ContainerKind::from_tag(TypeTag::Int32), None);
}

#[test]
fn closing_delimiters() {
    assert_eq!(ContainerKind::Array.closing(), None);
    assert_eq!(ContainerKind::Struct.closing(), Some(TypeTag::StructEnd));
    assert_eq!(
        ContainerKind::DictEntry.closing(),
        Some(TypeTag::DictEntryEnd)
    );
}
