//! Transactional email through the Brevo SMTP API.

use serde::Serialize;

use crate::server::{
    config::BrevoConfig,
    error::{external::ExternalError, AppError},
};

const PROVIDER: &str = "brevo";

#[derive(Serialize)]
struct Contact<'a> {
    email: &'a str,
    name: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SendEmailRequest<'a> {
    sender: Contact<'a>,
    to: [Contact<'a>; 1],
    subject: &'a str,
    html_content: &'a str,
}

pub struct MailService<'a> {
    http_client: &'a reqwest::Client,
    config: &'a BrevoConfig,
}

impl<'a> MailService<'a> {
    pub fn new(http_client: &'a reqwest::Client, config: &'a BrevoConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    /// Sends one HTML email.
    ///
    /// Callers treat failures as non-fatal and log them, the triggering action has
    /// already been committed by the time mail goes out.
    ///
    /// # Arguments
    /// - `to_email` - Recipient address
    /// - `to_name` - Recipient display name
    /// - `subject` - Subject line
    /// - `html` - HTML body
    ///
    /// # Returns
    /// - `Ok(())` - Brevo accepted the message
    /// - `Err(AppError::ExternalErr)` - Brevo rejected the request
    /// - `Err(AppError::ReqwestErr)` - Brevo could not be reached
    pub async fn send(
        &self,
        to_email: &str,
        to_name: &str,
        subject: &str,
        html: &str,
    ) -> Result<(), AppError> {
        let body = SendEmailRequest {
            sender: Contact {
                email: &self.config.sender_email,
                name: &self.config.sender_name,
            },
            to: [Contact {
                email: to_email,
                name: to_name,
            }],
            subject,
            html_content: html,
        };

        let response = self
            .http_client
            .post(format!("{}/v3/smtp/email", self.config.api_url))
            .header("api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        ExternalError::check(PROVIDER, response).await?;

        Ok(())
    }
}
