//! Outreach email delivery via SMTP.
//!
//! [`SmtpMailer`] wraps the `lettre` async SMTP transport behind the
//! [`Mailer`] trait so handlers (and their tests) never touch the provider
//! directly. The transport is built lazily on the first send and cached for
//! the process lifetime. Configuration is loaded from environment
//! variables; if `SMTP_HOST` is not set, [`MailConfig::from_env`] returns
//! `None` and [`UnconfiguredMailer`] should be used instead.

use async_trait::async_trait;
use lettre::{AsyncSmtpTransport, Tokio1Executor};
use tokio::sync::OnceCell;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for mail delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    /// SMTP transport-level failure (authentication, connection, etc.).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// The recipient or sender address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),

    /// No SMTP host is configured for this process.
    #[error("Mail delivery is not configured (set SMTP_HOST)")]
    NotConfigured,
}

// ---------------------------------------------------------------------------
// MailConfig
// ---------------------------------------------------------------------------

/// Default SMTP port (STARTTLS).
const DEFAULT_SMTP_PORT: u16 = 587;

/// Default sender address when `MAIL_FROM` is not set.
const DEFAULT_FROM_ADDRESS: &str = "outreach@linkreach.local";

/// Configuration for the SMTP mail delivery service.
#[derive(Debug, Clone)]
pub struct MailConfig {
    /// SMTP server hostname.
    pub smtp_host: String,
    /// SMTP server port (defaults to 587).
    pub smtp_port: u16,
    /// RFC 5322 "From" address used for every outreach email.
    pub from_address: String,
    /// Optional SMTP username.
    pub smtp_user: Option<String>,
    /// Optional SMTP password.
    pub smtp_password: Option<String>,
}

impl MailConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if `SMTP_HOST` is not set, signalling that mail
    /// delivery is not configured.
    ///
    /// | Variable        | Required | Default                     |
    /// |-----------------|----------|-----------------------------|
    /// | `SMTP_HOST`     | yes      | —                           |
    /// | `SMTP_PORT`     | no       | `587`                       |
    /// | `MAIL_FROM`     | no       | `outreach@linkreach.local`  |
    /// | `SMTP_USER`     | no       | —                           |
    /// | `SMTP_PASSWORD` | no       | —                           |
    pub fn from_env() -> Option<Self> {
        let smtp_host = std::env::var("SMTP_HOST").ok()?;
        Some(Self {
            smtp_host,
            smtp_port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_SMTP_PORT),
            from_address: std::env::var("MAIL_FROM")
                .unwrap_or_else(|_| DEFAULT_FROM_ADDRESS.to_string()),
            smtp_user: std::env::var("SMTP_USER").ok(),
            smtp_password: std::env::var("SMTP_PASSWORD").ok(),
        })
    }
}

// ---------------------------------------------------------------------------
// Mailer trait
// ---------------------------------------------------------------------------

/// A successfully transmitted message.
#[derive(Debug, Clone)]
pub struct SentMessage {
    /// Provider-side identifier recorded on the email row.
    pub provider_message_id: String,
}

/// The send seam consumed by the request-handling layer.
///
/// Implementations must never panic on provider failure; everything is
/// reported as a [`MailError`].
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Transmit one HTML email and return its provider message id.
    async fn send(&self, to: &str, subject: &str, html_body: &str)
        -> Result<SentMessage, MailError>;
}

// ---------------------------------------------------------------------------
// SmtpMailer
// ---------------------------------------------------------------------------

/// Sends outreach emails via SMTP, building the transport once on first use.
pub struct SmtpMailer {
    config: MailConfig,
    transport: OnceCell<AsyncSmtpTransport<Tokio1Executor>>,
}

impl SmtpMailer {
    /// Create a new mailer with the given configuration. No network
    /// activity happens until the first [`Mailer::send`].
    pub fn new(config: MailConfig) -> Self {
        Self {
            config,
            transport: OnceCell::new(),
        }
    }

    /// Build (or reuse) the cached SMTP transport.
    async fn transport(&self) -> Result<&AsyncSmtpTransport<Tokio1Executor>, MailError> {
        use lettre::transport::smtp::authentication::Credentials;

        self.transport
            .get_or_try_init(|| async {
                let mut builder =
                    AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.smtp_host)?
                        .port(self.config.smtp_port);

                if let (Some(user), Some(pass)) =
                    (&self.config.smtp_user, &self.config.smtp_password)
                {
                    builder = builder.credentials(Credentials::new(user.clone(), pass.clone()));
                }

                Ok(builder.build())
            })
            .await
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(
        &self,
        to: &str,
        subject: &str,
        html_body: &str,
    ) -> Result<SentMessage, MailError> {
        use lettre::message::header::ContentType;
        use lettre::{AsyncTransport, Message};

        let message_id = make_message_id(&self.config.from_address);

        let email = Message::builder()
            .from(self.config.from_address.parse()?)
            .to(to.parse()?)
            .subject(subject)
            .message_id(Some(message_id.clone()))
            .header(ContentType::TEXT_HTML)
            .body(html_body.to_string())
            .map_err(|e| MailError::Build(e.to_string()))?;

        let transport = self.transport().await?;
        transport.send(email).await?;

        tracing::info!(to, message_id = %message_id, "Outreach email sent");
        Ok(SentMessage {
            provider_message_id: message_id,
        })
    }
}

// ---------------------------------------------------------------------------
// UnconfiguredMailer
// ---------------------------------------------------------------------------

/// Stand-in used when `SMTP_HOST` is absent: every send fails with
/// [`MailError::NotConfigured`] and no state is mutated by the caller.
pub struct UnconfiguredMailer;

#[async_trait]
impl Mailer for UnconfiguredMailer {
    async fn send(
        &self,
        _to: &str,
        _subject: &str,
        _html_body: &str,
    ) -> Result<SentMessage, MailError> {
        Err(MailError::NotConfigured)
    }
}

/// Generate a unique RFC 5322 Message-ID under the sender's domain.
fn make_message_id(from_address: &str) -> String {
    let domain = from_address
        .split_once('@')
        .map(|(_, d)| d)
        .filter(|d| !d.is_empty())
        .unwrap_or("linkreach.local");
    let stamp = chrono::Utc::now()
        .timestamp_nanos_opt()
        .unwrap_or_default();
    format!("<{stamp}.{}@{domain}>", std::process::id())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_returns_none_without_smtp_host() {
        std::env::remove_var("SMTP_HOST");
        assert!(MailConfig::from_env().is_none());
    }

    #[test]
    fn mail_error_display_build() {
        let err = MailError::Build("missing body".to_string());
        assert_eq!(err.to_string(), "Email build error: missing body");
    }

    #[test]
    fn mail_error_display_address() {
        let addr_err: Result<lettre::Address, _> = "not-an-email".parse();
        let err = MailError::Address(addr_err.unwrap_err());
        assert!(err.to_string().contains("Email address parse error"));
    }

    #[test]
    fn message_id_uses_sender_domain() {
        let id = make_message_id("anna@example.com");
        assert!(id.starts_with('<'));
        assert!(id.ends_with("@example.com>"));
    }

    #[test]
    fn message_id_falls_back_without_domain() {
        let id = make_message_id("not-an-address");
        assert!(id.ends_with("@linkreach.local>"));
    }

    #[tokio::test]
    async fn unconfigured_mailer_reports_not_configured() {
        let result = UnconfiguredMailer.send("a@b.com", "hi", "<p>hi</p>").await;
        assert!(matches!(result, Err(MailError::NotConfigured)));
    }
}
