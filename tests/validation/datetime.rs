use field_rail::validation::datetime::{parse_date_time, DateTimeParseError};
use field_rail::{fields, FieldValue, Param, Rule, Validator, DEFAULT_DATE_TIME_FORMAT};

fn date_time_errors(value: impl Into<FieldValue>, format: &str) -> usize {
    let mut validator = Validator::new(fields! { "at" => value });
    validator.date_time_format("at", format);
    validator.errors().len()
}

#[test]
fn default_format_accepts_valid_timestamp() {
    let mut validator = Validator::new(fields! { "at" => "2024-06-01 13:45:00" });
    validator.date_time("at");

    assert!(validator.errors().is_empty());
}

#[test]
fn default_format_rejects_partial_or_padded_input() {
    for value in [
        "2024-06-01",
        "2024-06-01 13:45",
        "2024-06-01 13:45:00 ",
        " 2024-06-01 13:45:00",
        "24-06-01 13:45:00",
        "2024/06/01 13:45:00",
    ] {
        assert_eq!(date_time_errors(value, DEFAULT_DATE_TIME_FORMAT), 1, "{value}");
    }
}

#[test]
fn out_of_range_components_fail() {
    for value in ["2023-02-29 00:00:00", "2024-00-10 00:00:00", "2024-01-01 12:60:00"] {
        assert_eq!(date_time_errors(value, DEFAULT_DATE_TIME_FORMAT), 1, "{value}");
    }
    assert_eq!(date_time_errors("2024-02-29 00:00:00", DEFAULT_DATE_TIME_FORMAT), 0);
}

#[test]
fn custom_formats() {
    assert_eq!(date_time_errors("31/12/1999", "d/m/Y"), 0);
    assert_eq!(date_time_errors("12/31/1999", "d/m/Y"), 1);
    assert_eq!(date_time_errors("5 March 2021", "j F Y"), 0);
    assert_eq!(date_time_errors("09:15 PM", "h:i A"), 0);
    assert_eq!(date_time_errors("13:15 PM", "h:i A"), 1);
}

#[test]
fn error_carries_format_param() {
    let mut validator = Validator::new(fields! { "at" => "nope" });
    validator.date_time_format("at", "d/m/Y");

    let error = &validator.errors()[0];
    assert_eq!(error.rule(), Rule::DateTime);
    assert_eq!(error.params(), [Param::from("d/m/Y")]);
    assert_eq!(
        error.to_string(),
        "The field at must be a valid date in the format (d/m/Y)"
    );
}

#[test]
fn missing_and_collection_values_fail() {
    let mut validator = Validator::new(fields! { "list" => vec!["2024-01-01"] });
    validator.date_time("absent").date_time_format("list", "Y-m-d");

    assert_eq!(validator.errors().len(), 2);
}

#[test]
fn parser_reports_failure_reason() {
    assert_eq!(
        parse_date_time("2024-01-01 10:00:00extra", DEFAULT_DATE_TIME_FORMAT),
        Err(DateTimeParseError::TrailingData { position: 19 })
    );
    assert_eq!(
        parse_date_time("2024-0x-01", "Y-m-d"),
        Err(DateTimeParseError::Mismatch { position: 5, expected: 'm' })
    );
    assert!(parse_date_time("", "Y").unwrap_err().to_string().contains("`Y`"));
}

#[test]
fn unix_timestamps_beyond_32_bits() {
    assert_eq!(date_time_errors("4294967296", "U"), 0);
    assert_eq!(date_time_errors("-62135596800", "U"), 0);
    assert_eq!(date_time_errors("99999999999999999999", "U"), 1);
    assert_eq!(
        parse_date_time("4294967296", "U").unwrap().to_string(),
        "2106-02-07 06:28:16"
    );
}
