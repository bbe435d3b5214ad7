//! Typed form definitions for the registration and segmentation screens.
//!
//! Each form is a static list of [`FieldDef`]s. [`FormDef::validate`] walks the
//! list in order and collects every rule violation, so a renderer can iterate
//! the same definitions to draw inputs and to place errors.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{BookingError, Result};

// ---------------------------------------------------------------------------
// Rules and fields
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Non-blank after trimming.
    Required,
    /// Shaped like `local@domain.tld`.
    Email,
    /// At least this many characters.
    MinLength(usize),
    /// One of a fixed set of options.
    OneOf(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    pub name: &'static str,
    pub label: &'static str,
    pub rules: &'static [Rule],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormDef {
    pub name: &'static str,
    pub fields: &'static [FieldDef],
}

/// A rule a field value failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub rule: Rule,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rule {
            Rule::Required => write!(f, "{} is required", self.field),
            Rule::Email => write!(f, "{} is not a valid email", self.field),
            Rule::MinLength(n) => write!(f, "{} must have at least {} characters", self.field, n),
            Rule::OneOf(options) => {
                write!(f, "{} must be one of: {}", self.field, options.join(", "))
            }
        }
    }
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid")
    })
}

impl Rule {
    /// Check `value` against this rule.
    ///
    /// Only `Required` trims, and only `Required` rejects an empty value; the
    /// other rules see the raw input and let an empty one pass so an optional
    /// field is not forced to satisfy them.
    pub fn check(&self, value: &str) -> bool {
        match self {
            Rule::Required => !value.trim().is_empty(),
            _ if value.is_empty() => true,
            Rule::Email => email_regex().is_match(value),
            Rule::MinLength(n) => value.chars().count() >= *n,
            Rule::OneOf(options) => options.contains(&value),
        }
    }
}

impl FieldDef {
    /// Violations for this field, in rule order. A missing value is blank.
    pub fn validate(&self, value: Option<&str>) -> Vec<FieldError> {
        let value = value.unwrap_or("");
        self.rules
            .iter()
            .filter(|rule| !rule.check(value))
            .map(|rule| FieldError {
                field: self.name,
                rule: *rule,
            })
            .collect()
    }
}

impl FormDef {
    pub fn field(&self, name: &str) -> Option<&'static FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Every violation across the form, in field order.
    pub fn errors(&self, values: &HashMap<String, String>) -> Vec<FieldError> {
        self.fields
            .iter()
            .flat_map(|field| field.validate(values.get(field.name).map(String::as_str)))
            .collect()
    }

    /// `Ok(())` when every field passes, otherwise [`BookingError::Validation`].
    pub fn validate(&self, values: &HashMap<String, String>) -> Result<()> {
        let errors = self.errors(values);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(BookingError::Validation(errors))
        }
    }
}

// ---------------------------------------------------------------------------
// Forms
// ---------------------------------------------------------------------------

const PASSWORD_RULES: &[Rule] = &[Rule::Required, Rule::MinLength(6)];
const EMAIL_RULES: &[Rule] = &[Rule::Required, Rule::Email];
const REQUIRED: &[Rule] = &[Rule::Required];

pub const TEAM_SIZE_OPTIONS: &[&str] = &[
    "1 Profissional",
    "2 a 5 Profissionais",
    "6 a 15 Profissionais",
    "+ 15 Profissionais",
];

pub const CLIENT_REGISTRATION: FormDef = FormDef {
    name: "client_registration",
    fields: &[
        FieldDef { name: "name", label: "Full name", rules: REQUIRED },
        FieldDef { name: "phone", label: "Mobile phone", rules: REQUIRED },
        FieldDef { name: "email", label: "Email", rules: EMAIL_RULES },
        FieldDef { name: "password", label: "Password", rules: PASSWORD_RULES },
    ],
};

pub const PROFESSIONAL_REGISTRATION: FormDef = FormDef {
    name: "professional_registration",
    fields: &[
        FieldDef { name: "name", label: "Full name", rules: REQUIRED },
        FieldDef { name: "establishment", label: "Establishment name", rules: REQUIRED },
        FieldDef { name: "phone", label: "Phone", rules: REQUIRED },
        FieldDef { name: "email", label: "Email", rules: EMAIL_RULES },
        FieldDef { name: "password", label: "Password", rules: PASSWORD_RULES },
    ],
};

pub const SERVICE_SEGMENTATION: FormDef = FormDef {
    name: "service_segmentation",
    fields: &[
        FieldDef { name: "service", label: "Service name", rules: REQUIRED },
        FieldDef { name: "price", label: "Service price", rules: REQUIRED },
        FieldDef {
            name: "team_size",
            label: "Number of professionals",
            rules: &[Rule::Required, Rule::OneOf(TEAM_SIZE_OPTIONS)],
        },
    ],
};

pub const ESTABLISHMENT_ADDRESS: FormDef = FormDef {
    name: "establishment_address",
    fields: &[
        FieldDef { name: "country", label: "Country", rules: REQUIRED },
        FieldDef { name: "postal_code", label: "Postal code", rules: REQUIRED },
        FieldDef { name: "state", label: "State", rules: REQUIRED },
        FieldDef { name: "city", label: "City", rules: REQUIRED },
        FieldDef { name: "district", label: "District", rules: REQUIRED },
        FieldDef { name: "street", label: "Street", rules: REQUIRED },
        FieldDef { name: "number", label: "Number", rules: REQUIRED },
    ],
};

/// All forms, for renderers that look definitions up by name.
pub const ALL_FORMS: &[FormDef] = &[
    CLIENT_REGISTRATION,
    PROFESSIONAL_REGISTRATION,
    SERVICE_SEGMENTATION,
    ESTABLISHMENT_ADDRESS,
];

pub fn form(name: &str) -> Option<&'static FormDef> {
    ALL_FORMS.iter().find(|f| f.name == name)
}
