// SPDX-License-Identifier: Apache-2.0
use std::sync::Arc;

use actix_web::{web, HttpResponse, Responder};
use tracing::{error, info, instrument, warn};

use crate::config::{ConfigError, MailConfig};
use crate::error::{ApiResponse, ContactError, SUCCESS_MESSAGE};
use crate::mailer::{Mailer, SmtpMailer};
use crate::submission::{ContactPayload, ContactSubmission};
use crate::validation::validate;

pub const CONTACT_PATH: &str = "/api/contact";

/// Mail delivery as prepared at startup.
///
/// A broken configuration does not stop the server; every contact request
/// reports it until the process is restarted with a fixed environment.
pub enum MailSetup {
    Ready(Arc<dyn Mailer>),
    Misconfigured(ConfigError),
}

impl MailSetup {
    /// Build the SMTP mailer from a loaded configuration
    pub fn from_config(config: Result<MailConfig, ConfigError>) -> Self {
        match config.and_then(|config| SmtpMailer::new(&config)) {
            Ok(mailer) => MailSetup::Ready(Arc::new(mailer)),
            Err(e) => {
                warn!(error = %e, "Mail delivery is not configured; contact requests will fail");
                MailSetup::Misconfigured(e)
            }
        }
    }

    pub fn mailer(&self) -> Result<Arc<dyn Mailer>, ContactError> {
        match self {
            MailSetup::Ready(mailer) => Ok(Arc::clone(mailer)),
            MailSetup::Misconfigured(e) => {
                error!(error = %e, "Rejecting contact request: mail configuration is invalid");
                Err(ContactError::Configuration(e.clone()))
            }
        }
    }
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json("contact-relay is running")
}

/// Relay one contact form submission to the operator's inbox
#[instrument(name = "submit_contact", skip(body, setup), fields(body_len = body.len()))]
pub async fn submit_contact(
    body: web::Bytes,
    setup: web::Data<MailSetup>,
) -> Result<HttpResponse, ContactError> {
    let mailer = setup.mailer()?;

    let payload = ContactPayload::from_slice(&body).map_err(|e| {
        info!(error = %e, "Rejecting malformed request body");
        ContactError::from(e)
    })?;
    let submission = ContactSubmission::from_payload(payload);

    let errors = validate(&submission);
    if !errors.is_empty() {
        info!(error_count = errors.len(), "Submission failed validation");
        return Err(ContactError::Validation(errors));
    }

    let message = mailer.compose(&submission).map_err(|e| {
        error!(error = %e, "Could not build notification email");
        ContactError::from(e)
    })?;

    if !mailer.verify_connection().await {
        error!("SMTP connection verification failed");
        return Err(ContactError::MailUnavailable);
    }

    mailer.send(message).await.map_err(|e| {
        error!(error = %e, "Error processing contact form");
        ContactError::from(e)
    })?;

    info!(
        full_name = %submission.full_name,
        email = %submission.email,
        "Contact form submitted successfully"
    );
    Ok(HttpResponse::Ok().json(ApiResponse::success(SUCCESS_MESSAGE)))
}

async fn method_not_allowed() -> Result<HttpResponse, ContactError> {
    Err(ContactError::MethodNotAllowed)
}

/// Register the API routes. The caller provides `web::Data<MailSetup>`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/health").route(web::get().to(health_check)))
        .service(
            web::resource(CONTACT_PATH)
                .route(web::post().to(submit_contact))
                .default_service(web::to(method_not_allowed)),
        );
}
