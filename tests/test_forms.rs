//! Form definition and validation tests.

use std::collections::HashMap;

use salon_booking::forms::{
    FieldError, Rule, CLIENT_REGISTRATION, ESTABLISHMENT_ADDRESS, SERVICE_SEGMENTATION,
};
use salon_booking::BookingError;

fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn valid_client_registration_passes() {
    let form = values(&[
        ("name", "Ana Souza"),
        ("phone", "11 99999-0000"),
        ("email", "ana@example.com"),
        ("password", "segredo"),
    ]);
    assert!(CLIENT_REGISTRATION.validate(&form).is_ok());
}

#[test]
fn empty_client_registration_reports_required_in_field_order() {
    let errors = CLIENT_REGISTRATION.errors(&HashMap::new());
    let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();

    assert_eq!(fields, vec!["name", "phone", "email", "password"]);
    assert!(errors.iter().all(|e| e.rule == Rule::Required));
}

#[test]
fn bad_email_and_short_password() {
    let form = values(&[
        ("name", "Ana"),
        ("phone", "1"),
        ("email", "ana.example.com"),
        ("password", "123"),
    ]);
    let errors = CLIENT_REGISTRATION.errors(&form);

    assert_eq!(
        errors,
        vec![
            FieldError { field: "email", rule: Rule::Email },
            FieldError { field: "password", rule: Rule::MinLength(6) },
        ]
    );
}

#[test]
fn validate_wraps_errors() {
    let err = SERVICE_SEGMENTATION
        .validate(&values(&[("service", "Corte"), ("price", "35"), ("team_size", "3")]))
        .unwrap_err();

    match err {
        BookingError::Validation(errors) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].field, "team_size");
            assert!(errors[0].to_string().contains("2 a 5 Profissionais"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn segmentation_accepts_listed_team_size() {
    let form = values(&[
        ("service", "Corte"),
        ("price", "35"),
        ("team_size", "6 a 15 Profissionais"),
    ]);
    assert!(SERVICE_SEGMENTATION.validate(&form).is_ok());
}

#[test]
fn address_fields_are_enumerated() {
    let names: Vec<&str> = ESTABLISHMENT_ADDRESS.fields.iter().map(|f| f.name).collect();
    assert_eq!(
        names,
        vec!["country", "postal_code", "state", "city", "district", "street", "number"]
    );
    assert_eq!(ESTABLISHMENT_ADDRESS.field("city").unwrap().label, "City");
}
