//! Feedback emails.
//!
//! Sends grading feedback to a student over SMTP using `lettre`. Tests swap the
//! SMTP transport for lettre's in-memory stub.

use lettre::message::{Mailbox, header::ContentType};
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::stub::AsyncStubTransport;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::error::{ServiceError, ServiceResult};

/// SMTP connection settings.
#[derive(Debug, Clone, Default)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub from_address: String,
    pub from_name: String,
}

#[derive(Clone)]
enum Transport {
    Smtp(AsyncSmtpTransport<Tokio1Executor>),
    Stub(AsyncStubTransport),
    Disabled,
}

/// Everything the feedback email shows.
#[derive(Debug, Clone)]
pub struct FeedbackEmail<'a> {
    pub to: &'a str,
    pub student_name: &'a str,
    pub assignment_title: &'a str,
    pub grade: Option<&'a str>,
    pub feedback: &'a str,
}

#[derive(Clone)]
pub struct EmailService {
    transport: Transport,
    from: Option<Mailbox>,
}

fn mailbox(name: &str, address: &str) -> ServiceResult<Mailbox> {
    let address = address
        .parse()
        .map_err(|e| ServiceError::Email(format!("invalid sender address: {e}")))?;
    let name = (!name.is_empty()).then(|| name.to_string());
    Ok(Mailbox::new(name, address))
}

impl EmailService {
    /// Builds an SMTP-backed service. An empty host leaves email disabled.
    pub fn from_settings(settings: &SmtpSettings) -> ServiceResult<Self> {
        if settings.host.is_empty() {
            tracing::warn!("SMTP_HOST not set, feedback emails are disabled");
            return Ok(Self::disabled());
        }

        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.host)
            .map_err(|e| ServiceError::Email(e.to_string()))?
            .port(settings.port);
        if !settings.username.is_empty() {
            builder = builder.credentials(Credentials::new(
                settings.username.clone(),
                settings.password.clone(),
            ));
        }

        Ok(Self {
            transport: Transport::Smtp(builder.build()),
            from: Some(mailbox(&settings.from_name, &settings.from_address)?),
        })
    }

    /// A service that records messages in memory instead of sending them.
    pub fn stub(stub: AsyncStubTransport, from_name: &str, from_address: &str) -> ServiceResult<Self> {
        Ok(Self {
            transport: Transport::Stub(stub),
            from: Some(mailbox(from_name, from_address)?),
        })
    }

    pub fn disabled() -> Self {
        Self {
            transport: Transport::Disabled,
            from: None,
        }
    }

    pub async fn send_feedback(&self, email: FeedbackEmail<'_>) -> ServiceResult<()> {
        let to: Mailbox = email
            .to
            .parse()
            .map_err(|_| ServiceError::Validation(format!("Invalid email address: {}", email.to)))?;
        let from = self
            .from
            .clone()
            .ok_or_else(|| ServiceError::Email("email delivery is not configured".into()))?;

        let message = Message::builder()
            .from(from)
            .to(to)
            .subject(format!("Feedback Tugas: {}", email.assignment_title))
            .header(ContentType::TEXT_HTML)
            .body(feedback_html(&email))
            .map_err(|e| ServiceError::Email(e.to_string()))?;

        match &self.transport {
            Transport::Smtp(smtp) => smtp
                .send(message)
                .await
                .map(|_| ())
                .map_err(|e| ServiceError::Email(e.to_string())),
            Transport::Stub(stub) => stub
                .send(message)
                .await
                .map_err(|e| ServiceError::Email(e.to_string())),
            Transport::Disabled => Err(ServiceError::Email(
                "email delivery is not configured".into(),
            )),
        }?;

        tracing::info!(to = %email.to, assignment = %email.assignment_title, "feedback email sent");
        Ok(())
    }
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

fn feedback_html(email: &FeedbackEmail<'_>) -> String {
    let grade = email
        .grade
        .filter(|g| !g.is_empty())
        .map(|g| format!("<p><strong>Nilai:</strong> {}</p>", escape_html(g)))
        .unwrap_or_default();

    format!(
        r#"<h2>Feedback untuk Tugas: {title}</h2>
<p>Halo {name},</p>
<p>Berikut adalah feedback untuk tugas yang telah Anda kumpulkan:</p>
{grade}
<div style="background-color: #f5f5f5; padding: 15px; border-radius: 5px; margin: 15px 0;">
  <h3>Feedback:</h3>
  <p style="white-space: pre-wrap;">{feedback}</p>
</div>
<p>Terima kasih,<br>Tim Pengajar</p>"#,
        title = escape_html(email.assignment_title),
        name = escape_html(email.student_name),
        feedback = escape_html(email.feedback),
    )
}
