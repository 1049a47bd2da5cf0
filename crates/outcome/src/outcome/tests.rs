//! Unit coverage for outcome construction, queries, and mutation.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn fresh() -> Outcome {
    Outcome::new(Outcome::SUCCESS)
}

#[rstest]
#[case::success(Outcome::SUCCESS, true, false)]
#[case::fail(Outcome::FAIL, false, true)]
fn flag_drives_status_queries(
    #[case] flag: bool,
    #[case] expect_success: bool,
    #[case] expect_fail: bool,
) {
    let outcome = Outcome::new(flag);
    assert_eq!(outcome.is_success(), expect_success);
    assert_eq!(outcome.is_fail(), expect_fail);
}

#[rstest]
fn new_sets_no_other_fields(fresh: Outcome) {
    assert!(fresh.code().is_none());
    assert_eq!(fresh.code_str(), "");
    assert_eq!(fresh.message(), "");
    assert!(fresh.errors().is_empty());
    assert!(fresh.extras().is_empty());
    assert!(!fresh.has_errors());
}

#[rstest]
fn success_factory_without_parts_is_empty() {
    assert_eq!(Outcome::success(), Outcome::new(true));
}

#[rstest]
fn fail_factory_without_parts_is_empty() {
    let outcome = Outcome::fail();
    assert!(outcome.is_fail());
    assert!(!outcome.is_success());
    assert_eq!(outcome, Outcome::new(false));
}

#[rstest]
fn success_with_applies_every_part() {
    let outcome = Outcome::success_with(
        Code::Updated,
        "lorem ipsum",
        [("foo", "bar")],
        [("bar", "foo")],
    );

    assert!(outcome.is_success());
    assert_eq!(outcome.code(), Some(&Code::Updated));
    assert_eq!(outcome.message(), "lorem ipsum");
    assert_eq!(outcome.errors(), &Errors::from([("foo", "bar")]));
    assert_eq!(outcome.extras(), &Extras::from([("bar", "foo")]));
}

#[rstest]
fn fail_with_skips_empty_parts() {
    let outcome = Outcome::fail_with("", "", Errors::new(), Extras::new());
    assert!(outcome.is_fail());
    assert!(outcome.code().is_none());
    assert_eq!(outcome, Outcome::fail());
}

#[rstest]
fn set_code_round_trips_verbatim(mut fresh: Outcome) {
    let created = Code::Created;
    fresh.set_code(&created);
    assert_eq!(fresh.code(), Some(&created));
    assert_eq!(fresh.code_str(), "created");

    fresh.set_code("Not_Found ");
    assert_eq!(fresh.code_str(), "Not_Found ");

    fresh.set_code(Code::NotFound);
    assert_eq!(fresh.code(), Some(&Code::NotFound));
}

#[rstest]
fn set_message_replaces_message(mut fresh: Outcome) {
    fresh.set_message("Test validation message");
    assert_eq!(fresh.message(), "Test validation message");
}

#[rstest]
fn set_errors_replaces_container(mut fresh: Outcome) {
    fresh.add_error("dropped");
    fresh.set_errors([("foo", "bar"), ("bar", "foo"), ("foobar", "barfoo")]);

    let keys: Vec<String> = fresh.errors().keys().map(ToString::to_string).collect();
    assert_eq!(keys, vec!["foo", "bar", "foobar"]);
    assert_eq!(fresh.error(&ErrorKey::from("foobar")), Some(&json!("barfoo")));
}

#[rstest]
fn add_error_appends_scalars_then_merges_containers(mut fresh: Outcome) {
    fresh.add_error("foobar");
    assert_eq!(fresh.errors(), &Errors::from(vec![json!("foobar")]));

    fresh.add_error(json!({"field": ["Required Field"]}));
    assert_eq!(
        fresh.errors(),
        &Errors::from([
            (ErrorKey::Index(0), json!("foobar")),
            (ErrorKey::from("field"), json!(["Required Field"])),
        ])
    );
}

#[rstest]
fn add_error_list_keeps_colliding_positions(mut fresh: Outcome) {
    fresh.add_error("first");
    fresh.add_error(json!(["ignored", "second"]));
    fresh.add_error("third");

    let values: Vec<&Value> = fresh.errors().values().collect();
    assert_eq!(values, vec![&json!("first"), &json!("second"), &json!("third")]);
}

#[rstest]
fn add_error_numeric_object_key_keeps_existing_position(mut fresh: Outcome) {
    fresh.add_error("foobar");
    fresh.add_error(json!({"0": "replacement"}));

    assert_eq!(fresh.errors().len(), 1);
    assert_eq!(fresh.errors().at(0), Some(&json!("foobar")));
}

#[rstest]
fn add_error_continues_after_numeric_object_key(mut fresh: Outcome) {
    let replaced = fresh.try_set_errors(json!({"5": "x"})).map(|_| ());
    assert_eq!(replaced, Ok(()));
    fresh.add_error("y");

    let keys: Vec<String> = fresh.errors().keys().map(ToString::to_string).collect();
    assert_eq!(keys, vec!["5", "6"]);
    assert_eq!(fresh.error(&ErrorKey::Index(6)), Some(&json!("y")));
}

#[rstest]
fn add_error_is_dropped_when_positions_are_exhausted(mut fresh: Outcome) {
    fresh.set_errors([(u64::MAX, "last")]);
    fresh.add_error("overflow");

    assert_eq!(fresh.errors().len(), 1);
    assert_eq!(fresh.errors().at(u64::MAX), Some(&json!("last")));
}

#[rstest]
#[case::string(json!("not an array"))]
#[case::number(json!(3.5))]
#[case::boolean(json!(true))]
#[case::null(Value::Null)]
fn try_set_errors_rejects_scalars_and_keeps_errors(mut fresh: Outcome, #[case] value: Value) {
    fresh.set_errors([("foo", "bar")]);
    let result = fresh.try_set_errors(value).map(|_| ());

    assert!(matches!(
        result,
        Err(OutcomeError::InvalidArgument { target: "errors", .. })
    ));
    assert_eq!(fresh.errors(), &Errors::from([("foo", "bar")]));
}

#[rstest]
fn try_set_errors_accepts_objects(mut fresh: Outcome) {
    let result = fresh
        .try_set_errors(json!({"email": "Invalid address"}))
        .map(|outcome| outcome.errors().len());
    assert_eq!(result, Ok(1));
}

#[rstest]
fn set_extra_overwrites_by_key(mut fresh: Outcome) {
    fresh.set_extra("foo", "bar");
    assert_eq!(fresh.extras(), &Extras::from([("foo", "bar")]));

    fresh.set_extra("bar", "foo");
    assert_eq!(fresh.extras(), &Extras::from([("foo", "bar"), ("bar", "foo")]));

    fresh.set_extra("foo", json!({"one": "two"}));
    assert_eq!(
        Value::from(fresh.extras().clone()),
        json!({"foo": {"one": "two"}, "bar": "foo"})
    );
    let keys: Vec<&String> = fresh.extras().iter().map(|(key, _)| key).collect();
    assert_eq!(keys, vec!["foo", "bar"]);
}

#[rstest]
fn extra_distinguishes_missing_from_false(mut fresh: Outcome) {
    assert_eq!(fresh.extra("missing-key"), None);

    fresh.set_extra("flag", false);
    assert_eq!(fresh.extra("flag"), Some(&json!(false)));
}

#[rstest]
fn set_extras_replaces_mapping(mut fresh: Outcome) {
    fresh.set_extra("stale", 1);
    fresh.set_extras([("foo", "bar"), ("bar", "foo"), ("foobar", "barfoo")]);

    assert_eq!(fresh.extras().len(), 3);
    assert!(!fresh.extras().contains_key("stale"));
}

#[rstest]
#[case::string(json!("string should fail"))]
#[case::list(json!(["a", "b"]))]
fn try_set_extras_rejects_non_objects(mut fresh: Outcome, #[case] value: Value) {
    fresh.set_extra("kept", true);
    let result = fresh.try_set_extras(value).map(|_| ());

    assert!(matches!(
        result,
        Err(OutcomeError::InvalidArgument { target: "extras", .. })
    ));
    assert_eq!(fresh.extra("kept"), Some(&json!(true)));
}

#[rstest]
fn setters_chain_on_one_outcome(mut fresh: Outcome) {
    fresh
        .set_code(Code::Saved)
        .set_message("stored")
        .add_error("warning")
        .set_extra("id", 9);

    assert_eq!(fresh.code_str(), "saved");
    assert_eq!(fresh.message(), "stored");
    assert!(fresh.has_errors());
    assert_eq!(fresh.extra("id"), Some(&json!(9)));
}

#[rstest]
fn builder_methods_match_setters() {
    let built = Outcome::fail()
        .with_code(Code::Validation)
        .with_message("check the form")
        .with_error(json!({"email": "Required"}))
        .with_extra("attempt", 2);

    let mut set = Outcome::fail();
    set.set_code("validation")
        .set_message("check the form")
        .add_error(json!({"email": "Required"}))
        .set_extra("attempt", 2);

    assert_eq!(built, set);
}

#[rstest]
#[case::bare(Outcome::success(), "success")]
#[case::coded(Outcome::fail().with_code(Code::NotFound), "fail [not_found]")]
#[case::full(
    Outcome::success().with_code(Code::Created).with_message("walk saved"),
    "success [created]: walk saved"
)]
#[case::empty_custom_code(Outcome::fail().with_code(""), "fail")]
fn display_summarises_outcome(#[case] outcome: Outcome, #[case] expected: &str) {
    assert_eq!(outcome.to_string(), expected);
}
