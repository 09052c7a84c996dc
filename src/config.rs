use anyhow::{Context, Result};
use url::Url;

use crate::constants::*;

/// Process-wide settings. Loaded once in `main`, never mutated afterwards.
#[derive(Clone)]
pub struct Config {
    pub agenda_csv_url: String,
    pub confirmation_csv_url: String,
    pub email_user: Option<String>,
    pub email_pass: Option<String>,
    pub smtp_host: String,
    pub template_path: String,
    pub bind_addr: String,
    pub port: u16,
}

#[derive(Clone)]
pub struct MailCredentials {
    pub user: String,
    pub password: String,
}

impl std::fmt::Debug for MailCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailCredentials")
            .field("user", &self.user)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let agenda_csv_url = get("AGENDA_CSV_URL").unwrap_or_else(|| AGENDA_CSV_URL.to_string());
        let confirmation_csv_url =
            get("CONFIRMATION_CSV_URL").unwrap_or_else(|| CONFIRMATION_CSV_URL.to_string());

        Url::parse(&agenda_csv_url).context("AGENDA_CSV_URL is not a valid URL")?;
        Url::parse(&confirmation_csv_url).context("CONFIRMATION_CSV_URL is not a valid URL")?;

        let port = match get("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("PORT must be a number, got '{}'", raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Config {
            agenda_csv_url,
            confirmation_csv_url,
            email_user: get("EMAIL_USER"),
            email_pass: get("EMAIL_PASS"),
            smtp_host: get("SMTP_HOST").unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string()),
            template_path: get("EMAIL_TEMPLATE_PATH")
                .unwrap_or_else(|| DEFAULT_TEMPLATE_PATH.to_string()),
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            port,
        })
    }

    /// Both halves of the mail login, or nothing.
    pub fn mail_credentials(&self) -> Option<MailCredentials> {
        match (&self.email_user, &self.email_pass) {
            (Some(user), Some(password)) => Some(MailCredentials {
                user: user.clone(),
                password: password.clone(),
            }),
            _ => None,
        }
    }
}
