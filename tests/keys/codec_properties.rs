//! Property-based tests for the composite key codec.

use proptest::prelude::*;
use tokenstate::{build, split, Error};

/// Text free of U+0000 and U+10FFFF.
fn attribute() -> impl Strategy<Value = String> {
    any::<String>().prop_map(|s| s.replace(['\u{0}', '\u{10FFFF}'], ""))
}

proptest! {
    #[test]
    fn fuzz_split_build_roundtrip(
        object_type in attribute(),
        attributes in proptest::collection::vec(attribute(), 0..6),
    ) {
        let key = build(&object_type, &attributes).unwrap();
        let parsed = split(key.as_bytes(), attributes.len()).unwrap();
        prop_assert_eq!(parsed.object_type, object_type);
        prop_assert_eq!(parsed.attributes, attributes);
    }

    #[test]
    fn fuzz_same_object_type_shares_prefix(
        object_type in attribute(),
        a in proptest::collection::vec(attribute(), 0..4),
        b in proptest::collection::vec(attribute(), 0..4),
    ) {
        let prefix = build::<String>(&object_type, &[]).unwrap();
        prop_assert!(build(&object_type, &a).unwrap().starts_with(&prefix));
        prop_assert!(build(&object_type, &b).unwrap().starts_with(&prefix));
    }

    #[test]
    fn fuzz_forbidden_codepoint_is_reported(
        head in attribute(),
        tail in attribute(),
        forbidden in prop_oneof![Just('\u{0}'), Just('\u{10FFFF}')],
    ) {
        let text = format!("{}{}{}", head, forbidden, tail);
        let err = build("ztoken", &[text]).unwrap_err();
        prop_assert_eq!(
            err,
            Error::InvalidAttribute { codepoint: forbidden, position: head.len() }
        );
    }
}
