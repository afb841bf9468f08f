// SPDX-License-Identifier: Apache-2.0
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifies one field of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FullName,
    Email,
    Phone,
    WeightLossStage,
    Challenges,
    PreviousAttempts,
    MentalHealthConcerns,
    SuccessVision,
    TimelineToStart,
    Honeypot,
    CtaSource,
}

impl Field {
    /// Fields that must be non-empty, in the order they are checked
    pub const REQUIRED: [Field; 9] = [
        Field::FullName,
        Field::Email,
        Field::WeightLossStage,
        Field::Challenges,
        Field::PreviousAttempts,
        Field::MentalHealthConcerns,
        Field::SuccessVision,
        Field::TimelineToStart,
        Field::CtaSource,
    ];

    /// Name used on the wire and in error messages
    pub fn as_str(self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::WeightLossStage => "weightLossStage",
            Field::Challenges => "challenges",
            Field::PreviousAttempts => "previousAttempts",
            Field::MentalHealthConcerns => "mentalHealthConcerns",
            Field::SuccessVision => "successVision",
            Field::TimelineToStart => "timelineToStart",
            Field::Honeypot => "honeypot",
            Field::CtaSource => "ctaSource",
        }
    }

    /// Heading shown in the notification email
    pub fn label(self) -> &'static str {
        match self {
            Field::FullName => "Full Name",
            Field::Email => "Email Address",
            Field::Phone => "Phone Number",
            Field::WeightLossStage => "Weight Loss Stage",
            Field::Challenges => "Current Challenges",
            Field::PreviousAttempts => "Previous Attempts",
            Field::MentalHealthConcerns => "Mental Health Concerns",
            Field::SuccessVision => "Success Vision",
            Field::TimelineToStart => "Timeline To Start",
            Field::Honeypot => "Honeypot",
            Field::CtaSource => "CTA Source",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request body as posted by the form. Absent and `null` keys are `None`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPayload {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub weight_loss_stage: Option<String>,
    pub challenges: Option<String>,
    pub previous_attempts: Option<String>,
    pub mental_health_concerns: Option<String>,
    pub success_vision: Option<String>,
    pub timeline_to_start: Option<String>,
    pub honeypot: Option<String>,
    pub cta_source: Option<String>,
}

impl ContactPayload {
    /// Parse a request body. An empty body is an empty form.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body)
    }
}

/// A sanitized contact form submission
#[derive(Debug, Clone)]
pub struct ContactSubmission {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub weight_loss_stage: String,
    pub challenges: String,
    pub previous_attempts: String,
    pub mental_health_concerns: String,
    pub success_vision: String,
    pub timeline_to_start: String,
    /// Kept raw; only ever checked for emptiness
    pub honeypot: String,
    pub cta_source: String,
    pub received_at: DateTime<Utc>,
}

impl ContactSubmission {
    pub fn from_payload(payload: ContactPayload) -> Self {
        Self::from_payload_at(payload, Utc::now())
    }

    pub fn from_payload_at(payload: ContactPayload, received_at: DateTime<Utc>) -> Self {
        let clean = |value: Option<String>| sanitize(value.as_deref().unwrap_or_default());

        Self {
            full_name: clean(payload.full_name),
            email: clean(payload.email),
            phone: clean(payload.phone),
            weight_loss_stage: clean(payload.weight_loss_stage),
            challenges: clean(payload.challenges),
            previous_attempts: clean(payload.previous_attempts),
            mental_health_concerns: clean(payload.mental_health_concerns),
            success_vision: clean(payload.success_vision),
            timeline_to_start: clean(payload.timeline_to_start),
            honeypot: payload.honeypot.unwrap_or_default(),
            cta_source: clean(payload.cta_source),
            received_at,
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::WeightLossStage => &self.weight_loss_stage,
            Field::Challenges => &self.challenges,
            Field::PreviousAttempts => &self.previous_attempts,
            Field::MentalHealthConcerns => &self.mental_health_concerns,
            Field::SuccessVision => &self.success_vision,
            Field::TimelineToStart => &self.timeline_to_start,
            Field::Honeypot => &self.honeypot,
            Field::CtaSource => &self.cta_source,
        }
    }

    pub fn phone(&self) -> Option<&str> {
        Some(self.phone.as_str()).filter(|phone| !phone.is_empty())
    }
}

/// Strip angle brackets, then surrounding whitespace
pub fn sanitize(raw: &str) -> String {
    raw.replace(['<', '>'], "").trim().to_string()
}
