// SPDX-License-Identifier: Apache-2.0
use async_trait::async_trait;
use lettre::message::header::{HeaderName, HeaderValue};
use lettre::message::{Mailbox, Message, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::client::{Tls, TlsParameters};
use lettre::{AsyncSmtpTransport, AsyncTransport, Tokio1Executor};
use thiserror::Error;
use tracing::{debug, error, info, instrument, warn};

use crate::config::{ConfigError, MailConfig, SMTP_FROM_ENV, SMTP_USER_ENV};
use crate::submission::ContactSubmission;
use crate::templates::{render_html, render_text, subject};

#[derive(Debug, Error)]
pub enum MailError {
    #[error("failed to build message: {0}")]
    Message(#[from] lettre::error::Error),
    #[error("SMTP transport failed: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

/// Delivers contact submissions to the operator's inbox
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Build the notification without touching the network
    fn compose(&self, submission: &ContactSubmission) -> Result<Message, MailError>;

    /// Check that the relay accepts a connection. Never fails; problems are logged.
    async fn verify_connection(&self) -> bool;

    async fn send(&self, message: Message) -> Result<(), MailError>;

    async fn send_submission(&self, submission: &ContactSubmission) -> Result<(), MailError> {
        let message = self.compose(submission)?;
        self.send(message).await
    }
}

/// Build the notification for `submission`, addressed to `operator`.
///
/// Addresses the submission form accepts but lettre cannot parse as a
/// mailbox are still set as a raw `Reply-To` value.
pub fn compose_message(
    sender: &Mailbox,
    operator: &Mailbox,
    submission: &ContactSubmission,
) -> Result<Message, MailError> {
    let builder = Message::builder()
        .from(sender.clone())
        .to(operator.clone())
        .subject(subject(submission));

    let builder = match submission.email.parse::<Mailbox>() {
        Ok(reply_to) => builder.reply_to(reply_to),
        Err(e) => {
            debug!(error = %e, "Reply-to is not a strict mailbox, setting it verbatim");
            builder.raw_header(HeaderValue::new(
                HeaderName::new_from_ascii_str("Reply-To"),
                submission.email.clone(),
            ))
        }
    };

    let message = builder.multipart(MultiPart::alternative_plain_html(
        render_text(submission),
        render_html(submission),
    ))?;

    Ok(message)
}

/// Mailer backed by an authenticated SMTP relay
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
    operator: Mailbox,
}

impl SmtpMailer {
    pub fn new(config: &MailConfig) -> Result<Self, ConfigError> {
        let sender = parse_mailbox(SMTP_FROM_ENV, &config.sender_address)?;
        let operator = parse_mailbox(SMTP_USER_ENV, &config.username)?;
        let credentials = Credentials::new(config.username.clone(), config.password.clone());

        // Permissive relays often present self-signed certificates
        let params = TlsParameters::builder(config.host.clone())
            .dangerous_accept_invalid_certs(true)
            .build()
            .map_err(|e| ConfigError::Tls {
                host: config.host.clone(),
                reason: e.to_string(),
            })?;
        let tls = if config.implicit_tls() {
            Tls::Wrapper(params)
        } else {
            Tls::Opportunistic(params)
        };

        let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host)
            .port(config.port)
            .tls(tls)
            .credentials(credentials)
            .build();

        info!(
            host = %config.host,
            port = config.port,
            implicit_tls = config.implicit_tls(),
            "SMTP transport configured"
        );

        Ok(Self {
            transport,
            sender,
            operator,
        })
    }
}

fn parse_mailbox(var: &'static str, value: &str) -> Result<Mailbox, ConfigError> {
    value
        .parse::<Mailbox>()
        .map_err(|e| ConfigError::InvalidAddress {
            var,
            reason: e.to_string(),
        })
}

#[async_trait]
impl Mailer for SmtpMailer {
    fn compose(&self, submission: &ContactSubmission) -> Result<Message, MailError> {
        compose_message(&self.sender, &self.operator, submission)
    }

    #[instrument(name = "verify_smtp_connection", skip(self))]
    async fn verify_connection(&self) -> bool {
        match self.transport.test_connection().await {
            Ok(true) => true,
            Ok(false) => {
                warn!("SMTP server did not accept the connection");
                false
            }
            Err(e) => {
                error!(error = %e, "SMTP connection failed");
                false
            }
        }
    }

    #[instrument(name = "send_message", skip(self, message))]
    async fn send(&self, message: Message) -> Result<(), MailError> {
        let response = self.transport.send(message).await.map_err(|e| {
            error!(error = %e, "Error sending email");
            e
        })?;

        info!(code = %response.code(), "Email sent successfully");
        Ok(())
    }
}
