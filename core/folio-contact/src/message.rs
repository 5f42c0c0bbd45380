//! Rendering submissions into outbound emails.

use serde::{Deserialize, Serialize};

use crate::config::ContactConfig;
use crate::escape::escape_html;
use crate::submission::ContactSubmission;

/// Subject line of the acknowledgement email.
pub const ACKNOWLEDGEMENT_SUBJECT: &str = "Thanks — I got your message";

/// A provider-neutral outbound email.
///
/// Serializes to the JSON body accepted by the hosted provider's send endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Builds the operator notification.
///
/// Every visitor-supplied field is HTML-escaped before it is placed in the body.
pub fn render_notification(config: &ContactConfig, submission: &ContactSubmission) -> OutboundEmail {
    let subject = match &submission.subject {
        Some(subject) => format!("{} {}", config.subject_prefix, subject),
        None => format!("{} {}", config.subject_prefix, config.default_subject),
    };

    let html = format!(
        r#"
        <div style="font-family:system-ui,Segoe UI,Arial">
          <h2>New portfolio message</h2>
          <p><b>Name:</b> {name}</p>
          <p><b>Email:</b> {email}</p>
          <p><b>Subject:</b> {subject}</p>
          <p style="white-space:pre-wrap"><b>Message:</b><br/>{body}</p>
        </div>
      "#,
        name = escape_html(&submission.name),
        email = escape_html(&submission.email),
        subject = escape_html(submission.subject.as_deref().unwrap_or_default()),
        body = escape_html(&submission.body),
    );

    OutboundEmail {
        from: config.sender_address.clone(),
        to: vec![config.operator_address.clone()],
        subject,
        reply_to: Some(submission.email.clone()),
        html: Some(html),
        text: None,
    }
}

/// Builds the plain-text confirmation sent back to the visitor.
pub fn render_acknowledgement(
    config: &ContactConfig,
    submission: &ContactSubmission,
) -> OutboundEmail {
    let text = format!(
        "Hi {},\n\nThanks for reaching out via my portfolio. I'll get back to you shortly.\n\n— {}",
        submission.name, config.signoff
    );

    OutboundEmail {
        from: config.sender_address.clone(),
        to: vec![submission.email.clone()],
        subject: ACKNOWLEDGEMENT_SUBJECT.to_string(),
        reply_to: None,
        html: None,
        text: Some(text),
    }
}
