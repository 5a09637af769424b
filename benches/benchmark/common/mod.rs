use criterion::Criterion;
use field_rail::{fields, Fields};
use std::time::Duration;

pub fn configure_criterion() -> Criterion {
    Criterion::default()
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1))
        .sample_size(100)
}

pub fn signup_form(id: u64) -> Fields {
    fields! {
        "username" => format!("user_{id}"),
        "email" => format!("user{id}@company.com"),
        "password" => "correct horse battery",
        "age" => "29",
        "phone" => "06-12-34-56",
        "slug" => format!("user-{id}"),
        "born" => "1995-04-12 08:30:00",
        "role" => "editor",
    }
}

pub fn invalid_signup_form() -> Fields {
    fields! {
        "username" => "x",
        "email" => "not-an-email",
        "age" => "very old",
        "phone" => "123",
        "slug" => "Not A Slug",
        "born" => "1995-02-30 08:30:00",
        "role" => "root",
    }
}
