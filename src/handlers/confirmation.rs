use tracing::{error, info, warn};

use crate::config::{Config, MailCredentials};
use crate::constants::*;
use crate::dates::parse_start;
use crate::error::Result;
use crate::mail::template;
use crate::mail::MailSender;
use crate::models::appointment::AppointmentRow;
use crate::models::confirmation::DispatchOutcome;
use crate::source::RowSource;

/// A filled confirmation e-mail for one pending row.
#[derive(Debug, Clone, PartialEq)]
pub struct Confirmation {
    pub to: String,
    pub client: String,
    pub body: String,
}

/// Sends a confirmation e-mail to every pending row of the confirmation sheet.
///
/// The batch is all or nothing: the first failure stops it, and e-mails
/// already sent are neither undone nor reported. Rows are never marked as
/// confirmed, so calling this again resends to every row still pending.
pub async fn dispatch_confirmations<S, M, F>(config: &Config, source: &S, connect: F) -> DispatchOutcome
where
    S: RowSource,
    M: MailSender,
    F: FnOnce(&MailCredentials) -> Result<M>,
{
    let Some(credentials) = config.mail_credentials() else {
        warn!("mail credentials missing, skipping confirmations");
        return DispatchOutcome::failed(MISSING_CREDENTIALS);
    };

    match send_pending(config, source, connect(&credentials)).await {
        Ok(log) if log.is_empty() => DispatchOutcome::done_with_message(NO_PENDING),
        Ok(log) => DispatchOutcome::done(log),
        Err(e) => {
            error!("confirmation batch aborted: {}", e);
            DispatchOutcome::failed(e.to_string())
        }
    }
}

async fn send_pending<S, M>(config: &Config, source: &S, mailer: Result<M>) -> Result<Vec<String>>
where
    S: RowSource,
    M: MailSender,
{
    let mailer = mailer?;
    let rows = source.fetch_rows(&config.confirmation_csv_url).await?;
    let pending: Vec<&AppointmentRow> = rows.iter().filter(|row| row.is_pending()).collect();
    info!("{} pending confirmations", pending.len());

    let template = template::load(&config.template_path).await?;

    let mut log = Vec::with_capacity(pending.len());
    for row in pending {
        let confirmation = prepare(row, &template)?;
        mailer
            .send(&confirmation.to, CONFIRMATION_SUBJECT, &confirmation.body)
            .await?;
        info!("confirmation sent to {}", confirmation.client);
        log.push(format!("E-mail enviado para {}.", confirmation.client));
    }

    Ok(log)
}

/// Fills the template for one row. Fails on an unreadable date or time.
pub fn prepare(row: &AppointmentRow, template: &str) -> Result<Confirmation> {
    let start = parse_start(
        row.date.as_deref().unwrap_or_default(),
        row.start(),
    )?;
    let procedure = row.procedure.as_deref().unwrap_or_default();
    let link = template::calendar_link(procedure, start);
    let when = start.format("%d/%m/%Y %H:%M").to_string();

    Ok(Confirmation {
        to: row.email.clone().unwrap_or_default(),
        client: row.client().to_string(),
        body: template::fill(template, row.client(), procedure, &when, &link),
    })
}
