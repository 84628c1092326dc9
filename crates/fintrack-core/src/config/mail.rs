//! Outbound mail transport configuration.
//!
//! Credentials and connection parameters are injected here and handed to
//! the transport at construction time; they are never embedded in source.

use serde::{Deserialize, Serialize};

/// SMTP relay configuration for the mail transport.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailConfig {
    /// SMTP relay hostname.
    #[serde(default = "default_relay")]
    pub relay: String,
    /// SMTP relay port (implicit TLS).
    #[serde(default = "default_port")]
    pub port: u16,
    /// SMTP username.
    #[serde(default)]
    pub username: String,
    /// SMTP password.
    #[serde(default)]
    pub password: String,
    /// Sender address placed in the `From` header.
    #[serde(default = "default_sender")]
    pub sender: String,
}

fn default_relay() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    465
}

fn default_sender() -> String {
    "no-reply@fintrack.local".to_string()
}
