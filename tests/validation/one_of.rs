use field_rail::{fields, FieldValue, Param, Rule, Validator};

#[test]
fn empty_candidate_list_disables_rule() {
    let mut validator = Validator::new(fields! { "a" => "anything" });
    validator
        .one_of("a", Vec::<&str>::new())
        .one_of("absent", Vec::<FieldValue>::new());

    assert!(validator.errors().is_empty());
}

#[test]
fn member_passes() {
    let mut validator = Validator::new(fields! { "size" => "m", "level" => 2 });
    validator.one_of("size", ["s", "m", "l"]).one_of("level", [1, 2, 3]);

    assert!(validator.errors().is_empty());
}

#[test]
fn non_member_records_json_encoded_candidates() {
    let mut validator = Validator::new(fields! { "k" => "c" });
    validator.one_of("k", ["a", "b"]);

    let error = &validator.errors()[0];
    assert_eq!(error.rule(), Rule::Enum);
    assert_eq!(error.params(), [Param::Text(r#"["a","b"]"#.to_string())]);
    assert!(error.to_string().contains(r#"["a","b"]"#));
}

#[test]
fn comparison_is_exact() {
    let mut validator = Validator::new(fields! { "n" => "1" });
    validator.one_of("n", [1, 2]);

    assert_eq!(validator.errors().len(), 1);
    assert_eq!(validator.errors()[0].params(), [Param::Text("[1,2]".to_string())]);
}

#[test]
fn absent_value_is_compared_as_null() {
    let mut validator = Validator::new(fields! {});
    validator
        .one_of("missing", ["a"])
        .one_of("missing", [FieldValue::Null, FieldValue::from("a")]);

    assert_eq!(validator.errors().len(), 1);
    assert_eq!(validator.errors()[0].field(), "missing");
}

#[test]
fn param_is_serde_json_encoding() {
    let mut validator = Validator::new(fields! { "path" => "c" });
    validator.one_of("path", ["a/b", "é"]);

    assert_eq!(validator.errors()[0].params(), [Param::from(r#"["a/b","é"]"#)]);
}
