//! Typed validation rules for the contact form.
//!
//! Every form field has exactly one [`FieldRule`]: the field it guards, the
//! message shown when the field is empty, and an ordered list of checks. The
//! first failing check wins. All rules are evaluated the same way by
//! [`validate`], so adding a field means adding a row to [`RULES`].

use crate::domain::{char_len, is_valid_email, is_valid_phone, MAX_TEXT_LEN, MIN_TEXT_LEN};
use crate::models::NewContact;
use std::collections::BTreeMap;
use std::fmt;

/// The five fields of the contact form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Name,
    Email,
    Phone,
    Company,
    Title,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::Email,
        FormField::Phone,
        FormField::Company,
        FormField::Title,
    ];

    /// Label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Phone => "Phone",
            FormField::Company => "Company",
            FormField::Title => "Title",
        }
    }

    /// Example value shown in an empty input.
    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::Name => "Angela Moss",
            FormField::Email => "Email address",
            FormField::Phone => "(123) 456 - 7890",
            FormField::Company => "Company name",
            FormField::Title => "Marketing Manager",
        }
    }

    /// Read this field's value from a draft.
    pub fn get(self, values: &NewContact) -> &str {
        match self {
            FormField::Name => &values.name,
            FormField::Email => &values.email,
            FormField::Phone => &values.phone,
            FormField::Company => &values.company,
            FormField::Title => &values.title,
        }
    }

    /// Write this field's value into a draft.
    pub fn set(self, values: &mut NewContact, value: String) {
        match self {
            FormField::Name => values.name = value,
            FormField::Email => values.email = value,
            FormField::Phone => values.phone = value,
            FormField::Company => values.company = value,
            FormField::Title => values.title = value,
        }
    }

    /// The rule guarding this field.
    pub fn rule(self) -> &'static FieldRule {
        // RULES is indexed in the same order as FormField::ALL
        &RULES[self as usize]
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One predicate over a non-empty field value and the message shown when it fails.
pub struct Check {
    pub predicate: fn(&str) -> bool,
    pub message: &'static str,
}

impl fmt::Debug for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Check")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Validation rule for a single form field.
#[derive(Debug)]
pub struct FieldRule {
    pub field: FormField,
    pub required: bool,
    pub required_message: &'static str,
    pub checks: &'static [Check],
}

impl FieldRule {
    /// Evaluate the rule, returning the message of the first failure.
    ///
    /// Only the empty string fails `required`; whitespace is ordinary input.
    pub fn evaluate(&self, value: &str) -> Option<&'static str> {
        if value.is_empty() {
            return self.required.then_some(self.required_message);
        }

        self.checks
            .iter()
            .find(|check| !(check.predicate)(value))
            .map(|check| check.message)
    }
}

fn at_least_min(value: &str) -> bool {
    char_len(value) >= MIN_TEXT_LEN
}

fn at_most_max(value: &str) -> bool {
    char_len(value) <= MAX_TEXT_LEN
}

/// The contact form rule set, one row per field in `FormField::ALL` order.
pub static RULES: [FieldRule; 5] = [
    FieldRule {
        field: FormField::Name,
        required: true,
        required_message: "Name is required",
        checks: &[
            Check {
                predicate: at_least_min,
                message: "Name must be minimum 2 characters",
            },
            Check {
                predicate: at_most_max,
                message: "Name must not be more than 100 characters",
            },
        ],
    },
    FieldRule {
        field: FormField::Email,
        required: true,
        required_message: "Email is required",
        checks: &[Check {
            predicate: is_valid_email,
            message: "Invalid email",
        }],
    },
    FieldRule {
        field: FormField::Phone,
        required: true,
        required_message: "Phone is required",
        checks: &[Check {
            predicate: is_valid_phone,
            message: "Phone number must be exactly 10 digits",
        }],
    },
    FieldRule {
        field: FormField::Company,
        required: true,
        required_message: "Company is required",
        checks: &[
            Check {
                predicate: at_least_min,
                message: "Company must be minimum 2 characters",
            },
            Check {
                predicate: at_most_max,
                message: "Company must not be more than 100 characters",
            },
        ],
    },
    FieldRule {
        field: FormField::Title,
        required: true,
        required_message: "Title is required",
        checks: &[
            Check {
                predicate: at_least_min,
                message: "Title must be minimum 2 characters",
            },
            Check {
                predicate: at_most_max,
                message: "Title must not be more than 100 characters",
            },
        ],
    },
];

/// Current error message per failing field.
pub type FieldErrors = BTreeMap<FormField, &'static str>;

/// Evaluate every rule against a draft.
pub fn validate(values: &NewContact) -> FieldErrors {
    RULES
        .iter()
        .filter_map(|rule| {
            rule.evaluate(rule.field.get(values))
                .map(|message| (rule.field, message))
        })
        .collect()
}
