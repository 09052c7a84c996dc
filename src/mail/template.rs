use chrono::{Duration, NaiveDateTime};
use url::form_urlencoded::byte_serialize;

use crate::constants::*;
use crate::error::Result;

/// Reads the e-mail template from disk. Called once per dispatch, never cached.
pub async fn load(path: &str) -> Result<String> {
    Ok(tokio::fs::read_to_string(path).await?)
}

/// Google Calendar "add event" link for a one hour appointment. Times are
/// written as-is with a `Z` suffix, no timezone conversion.
pub fn calendar_link(procedure: &str, start: NaiveDateTime) -> String {
    let end = start + Duration::hours(1);
    let text: String = byte_serialize(procedure.as_bytes()).collect();
    format!(
        "{}&text={}&dates={}/{}",
        CALENDAR_BASE_URL,
        text,
        start.format("%Y%m%dT%H%M%SZ"),
        end.format("%Y%m%dT%H%M%SZ"),
    )
}

/// Plain substring replacement of the four placeholders.
pub fn fill(template: &str, client: &str, procedure: &str, when: &str, link: &str) -> String {
    template
        .replace(PH_CLIENT, client)
        .replace(PH_PROCEDURE, procedure)
        .replace(PH_DATETIME, when)
        .replace(PH_CALENDAR_LINK, link)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Write;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn calendar_link_spans_one_hour() {
        let link = calendar_link("Limpeza", at(2025, 6, 1, 10, 0));
        assert_eq!(
            link,
            "https://www.google.com/calendar/render?action=TEMPLATE&text=Limpeza&dates=20250601T100000Z/20250601T110000Z"
        );
    }

    #[test]
    fn calendar_link_crosses_midnight() {
        let link = calendar_link("Consulta", at(2025, 12, 31, 23, 30));
        assert!(link.ends_with("&dates=20251231T233000Z/20260101T003000Z"));
    }

    #[test]
    fn calendar_link_encodes_procedure() {
        let link = calendar_link("Limpeza & Clareamento", at(2025, 6, 1, 10, 0));
        assert!(link.contains("&text=Limpeza+%26+Clareamento&"));
    }

    #[test]
    fn fill_replaces_every_occurrence() {
        let template = "Olá {{cliente}}! {{procedimento}} em {{datahora}}. \
                        <a href=\"{{calendar_link}}\">agenda</a> Até logo, {{cliente}}.";
        let body = fill(template, "Bea", "Limpeza", "01/06/2025 10:00", "https://cal");
        assert_eq!(
            body,
            "Olá Bea! Limpeza em 01/06/2025 10:00. <a href=\"https://cal\">agenda</a> Até logo, Bea."
        );
    }

    #[test]
    fn fill_is_not_a_template_engine() {
        let body = fill("{{ cliente }} {% if x %}", "Bea", "", "", "");
        assert_eq!(body, "{{ cliente }} {% if x %}");
    }

    #[tokio::test]
    async fn loads_template_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "<p>{{{{cliente}}}}</p>").unwrap();

        let template = load(file.path().to_str().unwrap()).await.unwrap();
        assert_eq!(template, "<p>{{cliente}}</p>");
    }

    #[tokio::test]
    async fn missing_template_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.html");
        assert!(load(path.to_str().unwrap()).await.is_err());
    }
}
