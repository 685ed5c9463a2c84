use super::*;

#[test]
fn validate_token_input_trims_and_requires_value() {
    assert_eq!(validate_token_input("  a.b.c \n"), Ok("a.b.c".to_owned()));
    assert_eq!(validate_token_input("   "), Err("Paste your access token first."));
    assert_eq!(validate_token_input(""), Err("Paste your access token first."));
}

#[test]
fn invalidation_message_is_absent_without_rejection() {
    assert_eq!(invalidation_message(None), None);
}

#[test]
fn invalidation_message_distinguishes_reasons() {
    let malformed = invalidation_message(Some(Invalidation::Malformed));
    let expired = invalidation_message(Some(Invalidation::Expired));
    assert!(malformed.is_some_and(|m| m.contains("could not be read")));
    assert!(expired.is_some_and(|m| m.contains("expired")));
    assert_ne!(malformed, expired);
}
