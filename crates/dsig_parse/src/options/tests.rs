use super::*;

#[test]
fn checks_size() {
    assert_eq!(std::mem::size_of::<StrictChecks>(), 1);
}

#[test]
fn default_is_permissive() {
    assert_eq!(ParseOptions::default(), ParseOptions::permissive());
    assert!(!ParseOptions::default().is_strict());
    assert!(ParseOptions::default().checks().is_empty());
}

#[test]
fn strict_enables_every_check() {
    let checks = ParseOptions::strict().checks();
    assert!(checks.contains(StrictChecks::DICT_ENTRY_ARITY));
    assert!(checks.contains(StrictChecks::DICT_ENTRY_KEY_BASIC));
    assert!(checks.contains(StrictChecks::NON_EMPTY_STRUCT));
}

#[test]
fn single_check_is_strict() {
    let options = ParseOptions::with_checks(StrictChecks::DICT_ENTRY_ARITY);
    assert!(options.is_strict());
    assert!(!options.checks().contains(StrictChecks::NON_EMPTY_STRUCT));
}
