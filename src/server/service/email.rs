//! Delivery of one-time passcodes.

use serde::Serialize;

use crate::server::{
    config::{Config, EmailBackend},
    error::AppError,
};

const RESEND_API_URL: &str = "https://api.resend.com/emails";

/// Outcome of a delivery attempt. Delivery never fails the calling request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReport {
    pub delivered: bool,
}

#[derive(Serialize)]
struct ResendEmail<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    text: String,
}

pub struct EmailService<'a> {
    http_client: &'a reqwest::Client,
    backend: &'a EmailBackend,
    from: &'a str,
}

impl<'a> EmailService<'a> {
    pub fn new(http_client: &'a reqwest::Client, config: &'a Config) -> Self {
        Self {
            http_client,
            backend: &config.email_backend,
            from: &config.email_from,
        }
    }

    pub async fn send_otp(&self, email: &str, code: &str) -> DeliveryReport {
        match self.backend {
            EmailBackend::Log => {
                tracing::info!("OTP for {}: {}", email, code);
                DeliveryReport { delivered: true }
            }
            EmailBackend::Resend { api_key } => {
                match self.send_with_resend(api_key, email, code).await {
                    Ok(()) => {
                        tracing::debug!("OTP email sent to {}", email);
                        DeliveryReport { delivered: true }
                    }
                    Err(e) => {
                        tracing::warn!("Failed to send OTP email to {}: {}", email, e);
                        DeliveryReport { delivered: false }
                    }
                }
            }
        }
    }

    async fn send_with_resend(&self, api_key: &str, email: &str, code: &str) -> Result<(), AppError> {
        let body = ResendEmail {
            from: self.from,
            to: [email],
            subject: "Your Vibe Analytics verification code",
            text: format!(
                "Your verification code is {}.\n\nIt expires in 10 minutes. If you did not request it, you can ignore this email.",
                code
            ),
        };

        self.http_client
            .post(RESEND_API_URL)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}
