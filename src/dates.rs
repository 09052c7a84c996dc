use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ClinicError, Result};

/// Day-first shapes accepted in the sheet's date column, tried in order.
const ROW_DATE_FORMATS: &[&str] = &["%d/%m/%Y", "%d-%m-%Y", "%d.%m.%Y", "%Y-%m-%d"];

static CLOCK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{1,2})\s*[:hH]\s*(\d{2})\b").expect("valid clock regex"));

/// Parses the requested agenda date (`dd/mm/yyyy`).
pub fn parse_target_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%d/%m/%Y")
        .map_err(|_| ClinicError::InvalidDate(input.to_string()))
}

/// Parses a sheet date, day first. Anything after the first whitespace
/// (a time of day, usually) is ignored.
pub fn parse_row_date(raw: &str) -> Option<NaiveDate> {
    let date_part = raw.split_whitespace().next()?;
    ROW_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(date_part, fmt).ok())
}

/// Reformats a start time as `HHhMM`, or `None` if no clock time is found.
pub fn format_hour(raw: &str) -> Option<String> {
    let caps = CLOCK_RE.captures(raw)?;
    let hour: u32 = caps[1].parse().ok()?;
    let minute: u32 = caps[2].parse().ok()?;
    let time = NaiveTime::from_hms_opt(hour, minute, 0)?;
    Some(time.format("%Hh%M").to_string())
}

/// `Saturday, 10/05/2025`
pub fn agenda_header(date: NaiveDate) -> String {
    format!("{}, {}", date.format("%A"), date.format("%d/%m/%Y"))
}

/// Start instant of an appointment for the confirmation e-mail. Only the
/// first five characters of the time are used, so `09:00:00` reads as `09:00`.
pub fn parse_start(date: &str, time: &str) -> Result<NaiveDateTime> {
    let clock: String = time.trim().chars().take(5).collect();
    let joined = format!("{} {}", date.trim(), clock);
    NaiveDateTime::parse_from_str(&joined, "%d/%m/%Y %H:%M")
        .map_err(|_| ClinicError::InvalidStart(joined))
}
