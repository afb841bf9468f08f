// SPDX-License-Identifier: Apache-2.0
//! Notification email bodies.
//!
//! Both renderings list the fields in the same order and end with the
//! submission timestamp taken from the submission itself, so output depends
//! only on the submission.
use std::fmt::Write;

use crate::submission::{ContactSubmission, Field};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

const HTML_STYLE: &str = r#"
    body {
      font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
      line-height: 1.6;
      color: #333;
      max-width: 600px;
      margin: 0 auto;
      background-color: #f8f9fa;
      padding: 20px;
    }
    .container { background: white; border-radius: 12px; overflow: hidden; box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1); }
    .header { background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: white; padding: 30px; text-align: center; }
    .header h1 { margin: 0; font-size: 28px; font-weight: 600; }
    .content { padding: 30px; }
    .field-group { margin-bottom: 25px; border-left: 4px solid #667eea; background: #f8f9ff; padding: 15px 20px; border-radius: 0 8px 8px 0; }
    .field-label { font-weight: 600; color: #4a5568; font-size: 14px; text-transform: uppercase; letter-spacing: 0.5px; margin-bottom: 5px; }
    .field-value { color: #2d3748; font-size: 16px; line-height: 1.5; }
    .field-value a { color: #667eea; text-decoration: none; }
    .footer { background: #f7fafc; padding: 20px 30px; border-top: 1px solid #e2e8f0; text-align: center; color: #718096; font-size: 14px; }
    .timestamp { font-style: italic; color: #a0aec0; }
"#;

/// Fields listed after email and phone, in display order
const DETAIL_FIELDS: [Field; 7] = [
    Field::WeightLossStage,
    Field::Challenges,
    Field::PreviousAttempts,
    Field::MentalHealthConcerns,
    Field::SuccessVision,
    Field::TimelineToStart,
    Field::CtaSource,
];

/// Subject line of the notification
pub fn subject(submission: &ContactSubmission) -> String {
    format!("🌟 New Contact Form Submission from {}", submission.full_name)
}

/// Escape text for use inside HTML element content and quoted attributes
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn html_field(out: &mut String, field: Field, value_html: &str) {
    let _ = write!(
        out,
        r#"
      <div class="field-group">
        <div class="field-label">{}</div>
        <div class="field-value">{}</div>
      </div>"#,
        field.label(),
        value_html
    );
}

pub fn render_html(submission: &ContactSubmission) -> String {
    let mut fields = String::new();

    html_field(&mut fields, Field::FullName, &escape_html(&submission.full_name));

    let email = escape_html(&submission.email);
    html_field(
        &mut fields,
        Field::Email,
        &format!(r#"<a href="mailto:{email}">{email}</a>"#),
    );

    if let Some(phone) = submission.phone() {
        let phone = escape_html(phone);
        html_field(
            &mut fields,
            Field::Phone,
            &format!(r#"<a href="tel:{phone}">{phone}</a>"#),
        );
    }

    for field in DETAIL_FIELDS {
        html_field(&mut fields, field, &escape_html(submission.get(field)));
    }

    let submitted_at = submission.received_at.format(TIMESTAMP_FORMAT);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>New Contact Form Submission</title>
  <style>{HTML_STYLE}</style>
</head>
<body>
  <div class="container">
    <div class="header">
      <h1>🌟 New Contact Form Submission</h1>
    </div>
    <div class="content">{fields}
    </div>
    <div class="footer">
      <p class="timestamp">Submitted on {submitted_at}</p>
      <p>This email was automatically generated from your contact form.</p>
    </div>
  </div>
</body>
</html>
"#
    )
}

pub fn render_text(submission: &ContactSubmission) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "NEW CONTACT FORM SUBMISSION");
    let _ = writeln!(out, "===========================");
    let _ = writeln!(out);
    let _ = writeln!(out, "Full Name: {}", submission.full_name);
    let _ = writeln!(out, "Email: {}", submission.email);
    if let Some(phone) = submission.phone() {
        let _ = writeln!(out, "Phone: {phone}");
    }

    for field in DETAIL_FIELDS {
        let value = submission.get(field);
        let _ = writeln!(out);
        match field {
            // Free-form answers go on their own line
            Field::Challenges
            | Field::PreviousAttempts
            | Field::MentalHealthConcerns
            | Field::SuccessVision => {
                let _ = writeln!(out, "{}:", field.label());
                let _ = writeln!(out, "{value}");
            }
            _ => {
                let _ = writeln!(out, "{}: {value}", field.label());
            }
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "--");
    let _ = writeln!(
        out,
        "Submitted on: {}",
        submission.received_at.format(TIMESTAMP_FORMAT)
    );
    let _ = write!(
        out,
        "This email was automatically generated from your contact form."
    );

    out
}
