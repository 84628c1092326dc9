//! SMTP mail transport over implicit TLS.

use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::info;

use fintrack_core::config::mail::MailConfig;
use fintrack_core::error::AppError;
use fintrack_core::result::AppResult;
use fintrack_core::traits::Mailer;

/// Sends plain-text mail through a configured SMTP relay.
///
/// Credentials and connection parameters come from [`MailConfig`] at
/// construction; nothing is hard-coded.
#[derive(Debug, Clone)]
pub struct SmtpMailer {
    /// Pooled async SMTP transport.
    transport: AsyncSmtpTransport<Tokio1Executor>,
    /// Sender mailbox for the `From` header.
    sender: Mailbox,
}

impl SmtpMailer {
    /// Creates a new mailer from mail configuration.
    pub fn new(config: &MailConfig) -> Result<Self, AppError> {
        let sender: Mailbox = config
            .sender
            .parse()
            .map_err(|e| AppError::configuration(format!("Invalid sender address: {e}")))?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.relay)
            .map_err(|e| AppError::configuration(format!("Invalid SMTP relay: {e}")))?
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        Ok(Self { transport, sender })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, subject: &str, body: &str, recipient: &str) -> AppResult<()> {
        let to: Mailbox = recipient
            .parse()
            .map_err(|e| AppError::validation(format!("Invalid recipient address: {e}")))?;

        let message = Message::builder()
            .from(self.sender.clone())
            .to(to)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(|e| AppError::internal(format!("Failed to build message: {e}")))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| AppError::external_service(format!("SMTP delivery failed: {e}")))?;

        info!(recipient = %recipient, "Mail dispatched");
        Ok(())
    }
}
