//! Catalog shapes and parsers.

use tokenstate::{
    build, issue_action_metadata_key, parse_token_output_key, parse_transfer_metadata_sub_key,
    setup_hash_key, setup_key, split, token_output_key, transfer_action_metadata_key, Error,
    KeyKind, KeyTranslator, LedgerKey, StateKey, TokenId, TokenKeys,
};

#[test]
fn token_output_key_splits_to_txid_and_index() {
    let key = token_output_key("tx1", 3).unwrap();
    let parsed = split(key.as_bytes(), 2).unwrap();
    assert_eq!(parsed.object_type, "ztoken");
    assert_eq!(parsed.attributes, vec!["tx1", "3"]);
}

#[test]
fn token_output_key_index_is_decimal() {
    let key = token_output_key("tx1", u64::MAX).unwrap();
    let parsed = split(key.as_bytes(), 2).unwrap();
    assert_eq!(parsed.attributes[1], "18446744073709551615");
    assert_eq!(
        parse_token_output_key(key.as_bytes()).unwrap(),
        TokenId::new("tx1", u64::MAX)
    );
}

#[test]
fn transfer_metadata_sub_key_roundtrip() {
    let key = transfer_action_metadata_key("abc").unwrap();
    assert_eq!(parse_transfer_metadata_sub_key(key.as_bytes()).unwrap(), "abc");
}

#[test]
fn transfer_metadata_rejects_other_object_type() {
    let key = build("zother", &["tam", "abc"]).unwrap();
    assert!(matches!(
        parse_transfer_metadata_sub_key(key.as_bytes()),
        Err(Error::WrongPrefix { .. })
    ));
}

#[test]
fn transfer_metadata_rejects_one_attribute() {
    for key in [setup_key().unwrap(), setup_hash_key().unwrap()] {
        assert!(matches!(
            parse_transfer_metadata_sub_key(key.as_bytes()),
            Err(Error::WrongArity {
                expected: 2,
                found: 1,
                ..
            })
        ));
    }
}

#[test]
fn transfer_metadata_rejects_other_marker() {
    let key = issue_action_metadata_key("abc").unwrap();
    assert!(matches!(
        parse_transfer_metadata_sub_key(key.as_bytes()),
        Err(Error::WrongMarker { .. })
    ));
}

#[test]
fn token_output_key_requires_two_attributes() {
    let key = build("ztoken", &["tx1"]).unwrap();
    assert!(matches!(
        parse_token_output_key(key.as_bytes()),
        Err(Error::MalformedKey { .. })
    ));
}

#[test]
fn every_kind_shares_the_token_prefix() {
    let prefix = build::<&str>("ztoken", &[]).unwrap();
    let keys = [
        token_output_key("t", 0).unwrap(),
        setup_key().unwrap(),
        setup_hash_key().unwrap(),
        issue_action_metadata_key("h").unwrap(),
        transfer_action_metadata_key("s").unwrap(),
    ];
    for key in keys {
        assert!(key.starts_with(&prefix));
    }
}

#[test]
fn ledger_key_classifies_every_kind() {
    for kind in KeyKind::ALL {
        let key: StateKey = match kind {
            KeyKind::TokenOutput => token_output_key("tx", 1),
            KeyKind::SerialNumber => tokenstate::serial_number_key("sn"),
            KeyKind::Setup => setup_key(),
            KeyKind::SetupHash => setup_hash_key(),
            KeyKind::TokenRequest => tokenstate::token_request_key("tx"),
            KeyKind::IssueActionMetadata => issue_action_metadata_key("h"),
            KeyKind::TransferActionMetadata => transfer_action_metadata_key("s"),
        }
        .unwrap();
        assert_eq!(LedgerKey::parse(key.as_bytes()).unwrap().kind(), kind);
    }
}

/// Test double placing every key under its own object type.
struct PrefixedKeys;

impl KeyTranslator for PrefixedKeys {
    fn token_request_key(&self, tx_id: &str) -> tokenstate::Result<StateKey> {
        build("test", &["token_request", tx_id])
    }
    fn setup_key(&self) -> tokenstate::Result<StateKey> {
        build("test", &["setup"])
    }
    fn setup_hash_key(&self) -> tokenstate::Result<StateKey> {
        build("test", &["setup.hash"])
    }
    fn token_output_key(&self, tx_id: &str, index: u64) -> tokenstate::Result<StateKey> {
        build("test", &[tx_id.to_string(), index.to_string()])
    }
    fn serial_number_key(&self, sn: &str) -> tokenstate::Result<StateKey> {
        build("test", &["sn", sn])
    }
    fn issue_action_metadata_key(&self, hash: &str) -> tokenstate::Result<StateKey> {
        build("test", &["iam", hash])
    }
    fn transfer_action_metadata_key(&self, sub_key: &str) -> tokenstate::Result<StateKey> {
        build("test", &["tam", sub_key])
    }
    fn transfer_metadata_sub_key(&self, key: &[u8]) -> tokenstate::Result<String> {
        let mut parsed = split(key, 2)?;
        Ok(parsed.attributes.swap_remove(1))
    }
    fn token_output_id(&self, key: &[u8]) -> tokenstate::Result<TokenId> {
        let parsed = split(key, 2)?;
        parse_token_output_key(build("ztoken", parsed.attributes.as_slice())?.as_bytes())
    }
    fn ledger_key(&self, key: &[u8]) -> tokenstate::Result<LedgerKey> {
        let parsed = split(key, 1)?;
        LedgerKey::parse(build("ztoken", parsed.attributes.as_slice())?.as_bytes())
    }
}

fn setup_location(translator: &dyn KeyTranslator) -> StateKey {
    translator.setup_key().unwrap()
}

#[test]
fn translator_is_substitutable_at_test_boundaries() {
    assert_eq!(setup_location(&TokenKeys), setup_key().unwrap());
    assert_eq!(
        setup_location(&PrefixedKeys),
        build("test", &["setup"]).unwrap()
    );

    let translator: Box<dyn KeyTranslator> = Box::new(PrefixedKeys);
    let key = translator.transfer_action_metadata_key("k").unwrap();
    assert_eq!(translator.transfer_metadata_sub_key(key.as_bytes()).unwrap(), "k");
    // The production catalog rejects keys outside its namespace.
    assert!(TokenKeys.transfer_metadata_sub_key(key.as_bytes()).is_err());

    let output = translator.token_output_key("tx1", 7).unwrap();
    assert_eq!(
        translator.token_output_id(output.as_bytes()).unwrap(),
        TokenId::new("tx1", 7)
    );
    assert_eq!(
        translator.ledger_key(output.as_bytes()).unwrap().kind(),
        KeyKind::TokenOutput
    );
    assert!(matches!(
        TokenKeys.ledger_key(output.as_bytes()),
        Err(Error::WrongPrefix { .. })
    ));
}
