// SPDX-License-Identifier: Apache-2.0
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::submission::{ContactSubmission, Field};

pub const MAX_FULL_NAME_CHARS: usize = 100;
pub const MAX_EMAIL_CHARS: usize = 320;
pub const MAX_PHONE_CHARS: usize = 20;

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// A problem with one field of the caller's input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub field: Field,
    pub message: String,
}

impl ValidationError {
    fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// `local@domain.tld` with no whitespace and a single `@`
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Run every check and collect all violations, in check order
pub fn validate(submission: &ContactSubmission) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for field in Field::REQUIRED {
        if submission.get(field).trim().is_empty() {
            errors.push(ValidationError::new(field, format!("{field} is required")));
        }
    }

    if !is_valid_email(&submission.email) {
        errors.push(ValidationError::new(
            Field::Email,
            "Please provide a valid email address",
        ));
    }

    if !submission.honeypot.trim().is_empty() {
        errors.push(ValidationError::new(Field::Honeypot, "Spam detected"));
    }

    if submission.full_name.chars().count() > MAX_FULL_NAME_CHARS {
        errors.push(ValidationError::new(
            Field::FullName,
            "Full name must be less than 100 characters",
        ));
    }

    if submission.email.chars().count() > MAX_EMAIL_CHARS {
        errors.push(ValidationError::new(
            Field::Email,
            "Email must be less than 320 characters",
        ));
    }

    if submission.phone.chars().count() > MAX_PHONE_CHARS {
        errors.push(ValidationError::new(
            Field::Phone,
            "Phone number must be less than 20 characters",
        ));
    }

    errors
}
