use paramlog_core::{ExclusionList, FILTERED, ParameterMap, mask_secrets};
use proptest::prelude::*;

fn filtered() -> Vec<String> {
    vec![FILTERED.to_string()]
}

#[test]
fn excluded_keys_are_replaced_with_sentinel() {
    let form: ParameterMap = [("user", "alice"), ("Password", "secret123")]
        .into_iter()
        .collect();

    let masked = mask_secrets(&form, &ExclusionList::default());

    assert_eq!(masked.get("user").unwrap(), ["alice"]);
    assert_eq!(masked.get("Password").unwrap(), filtered().as_slice());
}

#[test]
fn matching_ignores_case() {
    let form: ParameterMap = [("creditcard", "4111111111111111"), ("cvc", "999")]
        .into_iter()
        .collect();

    let masked = mask_secrets(&form, &ExclusionList::default());

    assert_eq!(masked.get("creditcard").unwrap(), filtered().as_slice());
    assert_eq!(masked.get("cvc").unwrap(), filtered().as_slice());
}

#[test]
fn multi_value_field_is_replaced_wholesale() {
    let form: ParameterMap = [("password", "a"), ("password", "b"), ("password", "c")]
        .into_iter()
        .collect();

    let masked = mask_secrets(&form, &ExclusionList::default());

    assert_eq!(masked.get("password").unwrap(), filtered().as_slice());
}

#[test]
fn empty_exclusion_list_falls_back_to_defaults() {
    let excluded = ExclusionList::new(Vec::<String>::new());
    let form: ParameterMap = [("PASSWORD", "hunter2")].into_iter().collect();

    let masked = mask_secrets(&form, &excluded);

    assert_eq!(masked.get("PASSWORD").unwrap(), filtered().as_slice());
}

#[test]
fn custom_list_replaces_defaults() {
    let excluded = ExclusionList::new(["ApiKey"]);
    let form: ParameterMap = [("apikey", "k"), ("password", "p")].into_iter().collect();

    let masked = mask_secrets(&form, &excluded);

    assert_eq!(masked.get("apikey").unwrap(), filtered().as_slice());
    assert_eq!(masked.get("password").unwrap(), ["p"]);
}

#[test]
fn extended_list_keeps_defaults() {
    let excluded = ExclusionList::default().extend(["Token"]);
    let form: ParameterMap = [("token", "t"), ("cvc", "1")].into_iter().collect();

    let masked = mask_secrets(&form, &excluded);

    assert_eq!(masked.get("token").unwrap(), filtered().as_slice());
    assert_eq!(masked.get("cvc").unwrap(), filtered().as_slice());
}

#[test]
fn first_matching_entry_wins() {
    let excluded = ExclusionList::new(["TOKEN", "token", "Token"]);
    assert_eq!(excluded.find("tOkEn"), Some("TOKEN"));
    assert_eq!(excluded.find("other"), None);
}

#[test]
fn empty_map_yields_empty_map() {
    let masked = mask_secrets(&ParameterMap::new(), &ExclusionList::default());
    assert!(masked.is_empty());
}

#[test]
fn key_without_values_is_kept() {
    let mut form = ParameterMap::new();
    form.insert("note", Vec::new());
    form.insert("cvc", Vec::new());

    let masked = mask_secrets(&form, &ExclusionList::default());

    assert_eq!(masked.get("note").unwrap(), Vec::<String>::new().as_slice());
    assert_eq!(masked.get("cvc").unwrap(), filtered().as_slice());
}

#[test]
fn input_is_not_modified() {
    let form: ParameterMap = [("Password", "secret")].into_iter().collect();
    let before = form.clone();

    let _ = mask_secrets(&form, &ExclusionList::default());

    assert_eq!(form, before);
}

#[test]
fn serializes_as_object_of_arrays() {
    let form: ParameterMap = [("user", "alice"), ("Password", "secret123")]
        .into_iter()
        .collect();

    let json = serde_json::to_value(mask_secrets(&form, &ExclusionList::default())).unwrap();

    assert_eq!(
        json,
        serde_json::json!({"user": ["alice"], "Password": ["[FILTERED]"]})
    );
}

fn key_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("password".to_string()),
        Just("PasswordConfirmation".to_string()),
        Just("CREDITCARD".to_string()),
        Just("cVc".to_string()),
        "[a-zA-Z_]{1,12}",
    ]
}

fn map_strategy() -> impl Strategy<Value = ParameterMap> {
    proptest::collection::vec(
        (key_strategy(), proptest::collection::vec(".{0,8}", 0..4)),
        0..8,
    )
    .prop_map(|entries| {
        let mut map = ParameterMap::new();
        for (key, values) in entries {
            map.insert(key, values);
        }
        map
    })
}

fn list_strategy() -> impl Strategy<Value = ExclusionList> {
    proptest::collection::vec(key_strategy(), 0..4).prop_map(ExclusionList::new)
}

proptest! {
    #[test]
    fn key_set_is_preserved(form in map_strategy(), excluded in list_strategy()) {
        let masked = mask_secrets(&form, &excluded);
        prop_assert_eq!(masked.keys().collect::<Vec<_>>(), form.keys().collect::<Vec<_>>());
    }

    #[test]
    fn excluded_values_are_exactly_sentinel(form in map_strategy(), excluded in list_strategy()) {
        let masked = mask_secrets(&form, &excluded);
        let sentinel = filtered();
        for (key, values) in form.iter() {
            if excluded.is_excluded(key) {
                prop_assert_eq!(masked.get(key).unwrap(), sentinel.as_slice());
            } else {
                prop_assert_eq!(masked.get(key).unwrap(), values);
            }
        }
    }

    #[test]
    fn masking_is_idempotent(form in map_strategy(), excluded in list_strategy()) {
        let once = mask_secrets(&form, &excluded);
        let twice = mask_secrets(&once, &excluded);
        prop_assert_eq!(once, twice);
    }
}
