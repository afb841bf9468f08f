// SPDX-License-Identifier: Apache-2.0
use actix_web::http::{StatusCode, header};
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use crate::config::ConfigError;
use crate::mailer::MailError;
use crate::validation::ValidationError;

pub const SUCCESS_MESSAGE: &str = "Thank you for your submission! We will get back to you soon.";

/// JSON body of every contact endpoint response
#[derive(Debug, Serialize)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ValidationError>>,
}

impl ApiResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            errors: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            errors: None,
        }
    }
}

/// Every way a contact request can fail.
///
/// Only validation failures describe the problem to the caller; everything
/// else answers with a fixed message and leaves details to the logs.
#[derive(Debug, Error)]
pub enum ContactError {
    #[error("validation failed with {} error(s)", .0.len())]
    Validation(Vec<ValidationError>),
    #[error("request body is not a JSON object of strings: {0}")]
    MalformedBody(#[from] serde_json::Error),
    #[error("method not allowed")]
    MethodNotAllowed,
    #[error("server configuration error: {0}")]
    Configuration(ConfigError),
    #[error("mail service unavailable")]
    MailUnavailable,
    #[error("mail delivery failed: {0}")]
    Delivery(MailError),
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl From<MailError> for ContactError {
    fn from(e: MailError) -> Self {
        match e {
            MailError::Transport(_) => ContactError::Delivery(e),
            MailError::Message(_) => ContactError::Unexpected(e.to_string()),
        }
    }
}

impl ContactError {
    /// Message shown to the caller
    pub fn public_message(&self) -> &'static str {
        match self {
            ContactError::Validation(_) => {
                "Validation failed. Please check your input and try again."
            }
            ContactError::MalformedBody(_) => "Invalid request body. Expected a JSON object.",
            ContactError::MethodNotAllowed => {
                "Method not allowed. Only POST requests are accepted."
            }
            ContactError::Configuration(_) => {
                "Server configuration error. Please contact the administrator."
            }
            ContactError::MailUnavailable => {
                "Email service is currently unavailable. Please try again later."
            }
            ContactError::Delivery(_) | ContactError::Unexpected(_) => {
                "An unexpected error occurred. Please try again later."
            }
        }
    }
}

impl ResponseError for ContactError {
    fn status_code(&self) -> StatusCode {
        match self {
            ContactError::Validation(_) | ContactError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ContactError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ContactError::Configuration(_)
            | ContactError::MailUnavailable
            | ContactError::Delivery(_)
            | ContactError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut body = ApiResponse::failure(self.public_message());
        if let ContactError::Validation(errors) = self {
            body.errors = Some(errors.clone());
        }

        let mut response = HttpResponse::build(self.status_code());
        if let ContactError::MethodNotAllowed = self {
            response.insert_header((header::ALLOW, "POST, OPTIONS"));
        }
        response.json(body)
    }
}
