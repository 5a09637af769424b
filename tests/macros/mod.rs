use field_rail::{fields, FieldValue, Fields};

#[test]
fn fields_macro_builds_mapping() {
    let fields = fields! {
        "name" => "Ada",
        "age" => 36,
        "admin" => true,
        "score" => 9.5,
        "tags" => vec!["a", "b"],
        "deleted" => FieldValue::Null,
    };

    assert_eq!(fields.len(), 6);
    assert_eq!(fields.value("name"), Some(&FieldValue::from("Ada")));
    assert_eq!(fields.value("age"), Some(&FieldValue::Int(36)));
    assert_eq!(fields.value("admin"), Some(&FieldValue::Bool(true)));
    assert_eq!(fields.value("score"), Some(&FieldValue::Float(9.5)));
    assert!(fields.value("deleted").is_none());
}

#[test]
fn fields_macro_empty_and_trailing_comma() {
    let empty: Fields = fields! {};
    assert!(empty.is_empty());

    let one = fields! { "k" => "v", };
    assert_eq!(one.len(), 1);
}

#[test]
fn fields_macro_later_duplicates_win() {
    let fields = fields! { "k" => 1, "k" => 2 };
    assert_eq!(fields.value("k"), Some(&FieldValue::Int(2)));
}

#[test]
fn fields_macro_accepts_owned_keys() {
    let key = String::from("dynamic");
    let fields = fields! { key.clone() => "value" };
    assert!(fields.contains_key(&key));
}
