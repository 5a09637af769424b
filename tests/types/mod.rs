use field_rail::{fields, MessageTemplates, Param, Rule, Validator};


#[test]
fn validation_error_exposes_its_parts() {
    let mut validator = Validator::new(fields! { "name" => "abcdef" });
    validator.length("name", Some(2), Some(4));

    let errors = validator.errors();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].field(), "name");
    assert_eq!(errors[0].rule(), Rule::MaxLength);
    assert_eq!(errors[0].params(), [Param::Int(4)]);
    assert_eq!(errors[1].rule(), Rule::BetweenLength);
    assert_eq!(errors[1].params(), [Param::Int(2), Param::Int(4)]);
}

#[test]
fn display_matches_render() {
    let mut validator = Validator::new(fields! {});
    validator.not_empty(["bio"]);

    let error = &validator.errors()[0];
    assert_eq!(error.to_string(), error.render());
    assert_eq!(error.render(), "The field bio cannot be empty");
}

#[test]
fn render_with_custom_templates() {
    let mut validator = Validator::new(fields! { "n" => 3 });
    validator.between("n", Some(5), Some(9));

    let templates = MessageTemplates::default()
        .with_template(Rule::Min, "%s >= %d")
        .with_template(Rule::Between, "%1$s in [%2$d, %3$d]");
    let messages: Vec<String> =
        validator.errors().iter().map(|e| e.render_with(&templates)).collect();

    assert_eq!(messages, ["n >= 5", "n in [5, 9]"]);
}

#[test]
fn validation_error_serializes_as_plain_record() {
    let mut validator = Validator::new(fields! { "x" => "abc" });
    validator.length("x", None, Some(2));

    let json = serde_json::to_value(&validator.errors()[0]).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "field": "x", "rule": "maxLength", "params": [2] })
    );
}

#[test]
fn param_display() {
    assert_eq!(Param::Int(-4).to_string(), "-4");
    assert_eq!(Param::from("Y-m-d").to_string(), "Y-m-d");
    assert_eq!(Param::from(7usize), Param::Int(7));
}
