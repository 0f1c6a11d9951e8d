//! Outbound mail seam
//!
//! Delivery mechanics live behind this trait so the identity workflows
//! stay testable. The default implementation logs the reset link; an
//! SMTP-backed implementation can be swapped in without touching the
//! services.

use crate::contract::DomainError;

#[async_trait::async_trait]
pub trait Mailer: Send + Sync {
    /// Hand over a password-reset link for `to`.
    async fn send_password_reset(&self, to: &str, link: &str) -> Result<(), DomainError>;
}

/// Logs the reset link instead of sending it
pub struct LogMailer;

#[async_trait::async_trait]
impl Mailer for LogMailer {
    async fn send_password_reset(&self, to: &str, link: &str) -> Result<(), DomainError> {
        tracing::info!(to, link, "password reset link issued");
        Ok(())
    }
}
