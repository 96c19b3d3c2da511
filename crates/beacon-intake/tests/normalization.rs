use beacon_intake::{
    convert_to_boolean, create_main_storage_name, create_product_storage_name,
    filter_user_identities, generate_hash, generate_unique_id, is_delayed_by_integration,
    parse_string_or_number, IdentityType, IntegrationDelays, Scalar, UserIdentities, Value,
};
use serde_json::json;
use std::collections::BTreeMap;

#[test]
fn parse_string_or_number_is_identity_on_scalars() {
    assert_eq!(
        parse_string_or_number(&Value::from("abc")),
        Some(Scalar::Text("abc".to_string()))
    );
    assert_eq!(
        parse_string_or_number(&Value::from(123)),
        Some(Scalar::Number(123.0))
    );
    assert_eq!(parse_string_or_number(&Value::Object(BTreeMap::new())), None);
    assert_eq!(parse_string_or_number(&Value::Array(Vec::new())), None);
    assert_eq!(parse_string_or_number(&Value::Null), None);
}

#[test]
fn filtered_identities_put_customerid_first() {
    let identities: UserIdentities = [
        ("email", "test@gmail.com"),
        ("other", "abc"),
        ("customerid", "123"),
        ("facebook", "facebook123"),
        ("google", "google123"),
        ("yahoo", "yahoo123"),
    ]
    .into_iter()
    .collect();

    let filtered = filter_user_identities(&identities, &[2, 4, 6, 8]);
    assert_eq!(filtered.len(), 3);
    assert_eq!(
        serde_json::to_value(&filtered).unwrap(),
        json!([
            {"Identity": "123", "Type": 1},
            {"Identity": "test@gmail.com", "Type": 7},
            {"Identity": "abc", "Type": 0}
        ])
    );
}

#[test]
fn filtered_identities_skip_absent_and_falsy_values() {
    let identities: UserIdentities = [
        ("customerid", Value::from("")),
        ("email", Value::Null),
        ("other", Value::from("abc")),
    ]
    .into_iter()
    .collect();

    let filtered = filter_user_identities(&identities, &[]);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].identity, Scalar::Text("abc".to_string()));
    assert_eq!(filtered[0].identity_type, IdentityType::Other);
}

#[test]
fn filtered_identities_keep_caller_order_after_customerid() {
    let identities: UserIdentities = [
        ("yahoo", "yahoo123"),
        ("email", "test@gmail.com"),
        ("customerid", "123"),
    ]
    .into_iter()
    .collect();

    let filtered = filter_user_identities(&identities, &[]);
    let codes: Vec<u32> = filtered
        .iter()
        .map(|entry| entry.identity_type.code())
        .collect();
    assert_eq!(codes, vec![1, 6, 7]);
}

#[test]
fn unknown_identity_names_map_to_other() {
    assert_eq!(IdentityType::from_name("unrecognized"), IdentityType::Other);
    assert_eq!(IdentityType::from_name("customerid").code(), 1);
    assert_eq!(IdentityType::from_name("email").code(), 7);
    assert_eq!(IdentityType::from_code(7), Some(IdentityType::Email));
    assert_eq!(IdentityType::from_code(8), None);
    assert_eq!(IdentityType::Email.name(), "email");
}

#[test]
fn integration_delay_requires_at_least_one_true() {
    let mixed = IntegrationDelays::from([(128, false), (20, false), (10, true)]);
    assert!(is_delayed_by_integration(&mixed));

    let single_true = IntegrationDelays::from([(128, true)]);
    assert!(is_delayed_by_integration(&single_true));

    let single_false = IntegrationDelays::from([(128, false)]);
    assert!(!is_delayed_by_integration(&single_false));

    let all_false = IntegrationDelays::from([(128, false), (20, false), (10, false)]);
    assert!(!is_delayed_by_integration(&all_false));
}

#[test]
fn empty_integration_delay_map_does_not_block() {
    assert!(!is_delayed_by_integration(&IntegrationDelays::new()));
}

#[test]
fn boolean_conversion_follows_the_literal_table() {
    assert!(!convert_to_boolean(&Value::from("false")));
    assert!(!convert_to_boolean(&Value::from(false)));
    assert!(convert_to_boolean(&Value::from("true")));
    assert!(convert_to_boolean(&Value::from("randomstring")));
    assert!(!convert_to_boolean(&Value::from(0)));
    assert!(convert_to_boolean(&Value::from(1)));
    assert!(!convert_to_boolean(&Value::from("0")));
    assert!(convert_to_boolean(&Value::from("1")));
    assert!(!convert_to_boolean(&Value::Null));
    assert!(!convert_to_boolean(&Value::Undefined));
    assert!(!convert_to_boolean(&Value::from("")));
}

#[test]
fn hash_is_zero_only_for_absent_values() {
    assert_eq!(generate_hash(&Value::Undefined), 0);
    assert_eq!(generate_hash(&Value::Null), 0);
    assert_ne!(generate_hash(&Value::from(false)), 0);
}

#[test]
fn unique_id_is_non_empty() {
    assert!(!generate_unique_id().is_empty());
}

#[test]
fn storage_names_follow_the_versioned_namespace_format() {
    assert_eq!(
        create_main_storage_name(Some("test_key")),
        "mprtcl-v4_test_key"
    );
    assert_eq!(create_main_storage_name(None), "mprtcl-v4");
    assert_eq!(
        create_product_storage_name(Some("test_key")),
        "mprtcl-prodv4_test_key"
    );
    assert_eq!(create_product_storage_name(None), "mprtcl-prodv4");
}

#[test]
fn empty_api_key_is_treated_as_absent() {
    assert_eq!(create_main_storage_name(Some("")), "mprtcl-v4");
    assert_eq!(create_product_storage_name(Some("")), "mprtcl-prodv4");
}
