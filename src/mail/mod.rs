pub mod template;

use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::MailCredentials;
use crate::error::{ClinicError, Result};

pub trait MailSender {
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<()>;
}

/// Sends through an authenticated SMTP relay (implicit TLS).
pub struct SmtpMailer {
    from: Mailbox,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    pub fn new(host: &str, credentials: &MailCredentials) -> Result<Self> {
        let from: Mailbox = credentials
            .user
            .parse()
            .map_err(|e| ClinicError::Mail(format!("invalid sender '{}': {e}", credentials.user)))?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(host)
            .map_err(|e| ClinicError::Mail(e.to_string()))?
            .credentials(Credentials::new(
                credentials.user.clone(),
                credentials.password.clone(),
            ))
            .build();

        Ok(SmtpMailer { from, transport })
    }
}

impl MailSender for SmtpMailer {
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<()> {
        let to: Mailbox = to
            .trim()
            .parse()
            .map_err(|e| ClinicError::Mail(format!("invalid recipient '{to}': {e}")))?;

        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(html_body.to_string())
            .map_err(|e| ClinicError::Mail(e.to_string()))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| ClinicError::Mail(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds(user: &str) -> MailCredentials {
        MailCredentials {
            user: user.to_string(),
            password: "secret".to_string(),
        }
    }

    #[tokio::test]
    async fn builds_mailer_without_connecting() {
        assert!(SmtpMailer::new("smtp.gmail.com", &creds("clinica@example.com")).is_ok());
    }

    #[tokio::test]
    async fn rejects_invalid_sender() {
        let err = SmtpMailer::new("smtp.gmail.com", &creds("not an address"))
            .err()
            .unwrap();
        assert!(matches!(err, ClinicError::Mail(_)));
    }

    #[tokio::test]
    async fn rejects_invalid_recipient_before_sending() {
        let mailer = SmtpMailer::new("smtp.gmail.com", &creds("clinica@example.com")).unwrap();
        let err = mailer.send("", "Assunto", "<p>oi</p>").await.unwrap_err();
        assert!(matches!(err, ClinicError::Mail(_)));
    }
}
