use chrono::NaiveDate;
use tracing::{error, info, warn};

use crate::constants::*;
use crate::dates::{agenda_header, format_hour, parse_row_date, parse_target_date};
use crate::error::Result;
use crate::models::appointment::AppointmentRow;
use crate::pdf::{Document, Weight};
use crate::source::RowSource;

/// Fetches the agenda sheet and renders the schedule for `target_date`
/// (`dd/mm/yyyy`) as PDF bytes.
///
/// Never fails: any error is rendered as a one-line PDF instead, so the
/// caller always has a document to return.
pub async fn render_schedule_pdf<S: RowSource>(source: &S, url: &str, target_date: &str) -> Vec<u8> {
    let rendered = schedule_document(source, url, target_date).await.render();
    match rendered {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("failed to render agenda for {}: {}", target_date, e);
            render_error(&e.to_string())
        }
    }
}

/// The agenda for `target_date`, or the error document when the sheet
/// can't be fetched or the date can't be read.
async fn schedule_document<S: RowSource>(source: &S, url: &str, target_date: &str) -> Document {
    let built = match source.fetch_rows(url).await {
        Ok(rows) => build_schedule(&rows, target_date),
        Err(e) => Err(e),
    };

    built.unwrap_or_else(|e| {
        error!("failed to build agenda for {}: {}", target_date, e);
        error_document(&e.to_string())
    })
}

/// Filters, sorts and groups the rows of one day into an agenda document.
pub fn build_schedule(rows: &[AppointmentRow], target_date: &str) -> Result<Document> {
    let target = parse_target_date(target_date)?;
    let day = rows_for_day(rows, target);
    info!("{} appointments on {}", day.len(), target);

    let mut doc = Document::new(format!("Agenda {}", target.format("%d/%m/%Y")));
    doc.line(agenda_header(target), 12.0, Weight::Regular, 10.0);
    doc.line(AGENDA_TITLE, 14.0, Weight::Regular, 10.0);
    doc.gap(5.0);

    if day.is_empty() {
        doc.line(NO_APPOINTMENTS, 12.0, Weight::Regular, 10.0);
        return Ok(doc);
    }

    let mut current: Option<&str> = None;
    for row in day {
        if current != Some(row.employee()) {
            if current.is_some() {
                doc.gap(5.0);
            }
            doc.line(row.employee(), 12.0, Weight::Bold, 10.0);
            current = Some(row.employee());
        }
        doc.line(appointment_line(row), 11.0, Weight::Regular, 8.0);
    }
    doc.gap(5.0);

    Ok(doc)
}

/// Rows dated `target`, sorted by employee then raw start time. Rows whose
/// date can't be read are dropped.
fn rows_for_day(rows: &[AppointmentRow], target: NaiveDate) -> Vec<&AppointmentRow> {
    let mut dropped = 0;
    let mut day: Vec<&AppointmentRow> = rows
        .iter()
        .filter(|row| match row.date.as_deref().and_then(parse_row_date) {
            Some(date) => date == target,
            None => {
                dropped += 1;
                false
            }
        })
        .collect();

    if dropped > 0 {
        warn!("dropped {} rows with unreadable dates", dropped);
    }

    day.sort_by(|a, b| (a.employee(), a.start()).cmp(&(b.employee(), b.start())));
    day
}

fn appointment_line(row: &AppointmentRow) -> String {
    let hour = format_hour(row.start()).unwrap_or_else(|| INVALID_TIME.to_string());
    match row.procedure() {
        Some(procedure) => format!("    {} - {} ({})", hour, row.client(), procedure),
        None => format!("    {} - {}", hour, row.client()),
    }
}

fn error_document(message: &str) -> Document {
    let mut doc = Document::new("Agenda");
    doc.line(format!("{PDF_ERROR_PREFIX}{message}"), 12.0, Weight::Regular, 10.0);
    doc
}

fn render_error(message: &str) -> Vec<u8> {
    error_document(message).render().unwrap_or_else(|e| {
        error!("failed to render error document: {}", e);
        Vec::new()
    })
}
