use std::collections::{BTreeMap, HashMap};

use field_rail::{FieldValue, Fields};

#[test]
fn text_coercion_of_scalars() {
    assert_eq!(FieldValue::Null.as_text().as_deref(), Some(""));
    assert_eq!(FieldValue::from(true).as_text().as_deref(), Some("1"));
    assert_eq!(FieldValue::from(false).as_text().as_deref(), Some(""));
    assert_eq!(FieldValue::from(-12).as_text().as_deref(), Some("-12"));
    assert_eq!(FieldValue::from(2.5).as_text().as_deref(), Some("2.5"));
    assert_eq!(FieldValue::from(3.0).as_text().as_deref(), Some("3"));
    assert!(FieldValue::from(vec![1]).as_text().is_none());
}

#[test]
fn numeric_detection() {
    for text in ["0", "-1", "+1.5", "1.", ".5", "1e10", "2E-3", "\t7\n"] {
        assert!(FieldValue::from(text).is_numeric(), "{text:?}");
    }
    for text in ["", " ", "1,5", "1e", "--1", "0x10", "1 2", "NaN", "."] {
        assert!(!FieldValue::from(text).is_numeric(), "{text:?}");
    }
    assert!(!FieldValue::from(true).is_numeric());
    assert!(!FieldValue::Null.is_numeric());
}

#[test]
fn as_number_parses_numeric_text() {
    assert_eq!(FieldValue::from(" 42 ").as_number(), Some(42.0));
    assert_eq!(FieldValue::from("-1.5e1").as_number(), Some(-15.0));
    assert_eq!(FieldValue::from(7).as_number(), Some(7.0));
    assert_eq!(FieldValue::from("seven").as_number(), None);
}

#[test]
fn char_len_of_values() {
    assert_eq!(FieldValue::from("naïve").char_len(), 5);
    assert_eq!(FieldValue::from(1234).char_len(), 4);
    assert_eq!(FieldValue::Null.char_len(), 0);
    assert_eq!(FieldValue::from(vec!["a", "b", "c"]).char_len(), 3);
}

#[test]
fn option_conversion() {
    assert_eq!(FieldValue::from(None::<&str>), FieldValue::Null);
    assert_eq!(FieldValue::from(Some(5)), FieldValue::Int(5));
}

#[test]
fn json_conversion_and_deserialization_agree() {
    let json = serde_json::json!({
        "n": null,
        "b": true,
        "i": 3,
        "f": 0.25,
        "s": "txt",
        "l": [1, "two"],
        "m": { "k": "v" },
    });

    let converted = FieldValue::from(json.clone());
    let deserialized: FieldValue = serde_json::from_value(json).unwrap();
    assert_eq!(converted, deserialized);

    let FieldValue::Map(entries) = converted else {
        panic!("object should convert to a map");
    };
    assert_eq!(entries["n"], FieldValue::Null);
    assert_eq!(entries["i"], FieldValue::Int(3));
    assert_eq!(entries["f"], FieldValue::Float(0.25));
    assert_eq!(
        entries["l"],
        FieldValue::List(vec![FieldValue::Int(1), FieldValue::from("two")])
    );
}

#[test]
fn field_value_serializes_untagged() {
    let value = FieldValue::List(vec![FieldValue::Null, FieldValue::from("a"), FieldValue::from(1)]);
    assert_eq!(serde_json::to_string(&value).unwrap(), r#"[null,"a",1]"#);
}

#[test]
fn fields_treat_null_as_absent() {
    let fields = Fields::new().with("a", "x").with("b", FieldValue::Null);

    assert!(fields.contains_key("b"));
    assert_eq!(fields.get("b"), Some(&FieldValue::Null));
    assert_eq!(fields.value("b"), None);
    assert_eq!(fields.value("c"), None);
    assert_eq!(fields.len(), 2);
}

#[test]
fn fields_from_maps() {
    let mut hash = HashMap::new();
    hash.insert("k".to_string(), 1);
    let from_hash = Fields::from(hash);

    let mut tree = BTreeMap::new();
    tree.insert("k".to_string(), FieldValue::Int(1));
    let from_tree = Fields::from(tree);

    assert_eq!(from_hash, from_tree);
    assert_eq!(from_tree.into_inner().len(), 1);
}

#[test]
fn fields_insert_replaces() {
    let mut fields = Fields::new();
    assert_eq!(fields.insert("k", 1), None);
    assert_eq!(fields.insert("k", 2), Some(FieldValue::Int(1)));

    let keys: Vec<&str> = fields.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, ["k"]);
}

#[test]
fn fields_try_from_json() {
    let fields = Fields::try_from(serde_json::json!({ "a": 1 })).unwrap();
    assert_eq!(fields.value("a"), Some(&FieldValue::Int(1)));

    assert!(Fields::try_from(serde_json::json!("not an object")).is_err());
}
