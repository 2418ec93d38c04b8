use chub_kernel::SAFE_ALPHABET;
use chub_kernel::safe_nanoid;
use std::collections::HashSet;

#[test]
fn request_ids_avoid_ambiguous_characters() {
    let id = safe_nanoid!();
    assert_eq!(id.len(), 12);
    assert!(id.chars().all(|ch| SAFE_ALPHABET.contains(&ch)), "{id}");
    assert!(!id.contains(['I', 'O', 'l', '0', '1']), "{id}");
}

#[test]
fn request_ids_are_plain_ascii_header_values() {
    let id = safe_nanoid!(24);
    assert_eq!(id.len(), 24);
    assert!(id.bytes().all(|b| b.is_ascii_alphanumeric()), "{id}");
}

#[test]
fn request_ids_do_not_repeat_in_practice() {
    let ids: HashSet<String> = (0..500).map(|_| safe_nanoid!()).collect();
    assert_eq!(ids.len(), 500);
}
