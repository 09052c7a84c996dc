use csv::{ReaderBuilder, Trim};
use reqwest::Client;
use tracing::info;

use crate::error::Result;
use crate::models::appointment::AppointmentRow;

/// Anything that can hand back the rows of a published sheet.
pub trait RowSource {
    async fn fetch_rows(&self, url: &str) -> Result<Vec<AppointmentRow>>;
}

/// Reads the sheet's CSV export over HTTP. No retries.
#[derive(Default)]
pub struct SheetSource {
    client: Client,
}

impl SheetSource {
    pub fn new(client: Client) -> Self {
        SheetSource { client }
    }
}

impl RowSource for SheetSource {
    async fn fetch_rows(&self, url: &str) -> Result<Vec<AppointmentRow>> {
        let body = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let rows = parse_rows(&body)?;
        info!("fetched {} rows from sheet", rows.len());
        Ok(rows)
    }
}

/// Parses a CSV export with a header line into rows, in source order.
pub fn parse_rows(body: &str) -> Result<Vec<AppointmentRow>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(body.as_bytes());

    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let row: AppointmentRow = result?;
        rows.push(row);
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHEET: &str = "\
Nome Funcionario,Nome Cliente,Data,Hora - Inicio,Procedimento,Status,Email,Observacao
Ana,Bea,10/05/2025,09:00,Limpeza,Pendente,bea@example.com,
Ana,Cid,10/05/2025,08:00,,Confirmado,cid@example.com,retorno
";

    #[test]
    fn parses_rows_in_source_order() {
        let rows = parse_rows(SHEET).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].client(), "Bea");
        assert_eq!(rows[0].procedure(), Some("Limpeza"));
        assert!(rows[0].is_pending());
        assert_eq!(rows[1].client(), "Cid");
        assert_eq!(rows[1].procedure(), None);
        assert!(!rows[1].is_pending());
    }

    #[test]
    fn missing_columns_become_empty_fields() {
        let rows = parse_rows("Nome Cliente,Data\nBea,10/05/2025\n").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].client(), "Bea");
        assert_eq!(rows[0].employee_name, None);
        assert_eq!(rows[0].email, None);
    }

    #[test]
    fn header_whitespace_and_short_rows_are_tolerated() {
        let rows = parse_rows(" Nome Cliente , Data ,Status\nBea,10/05/2025\n").unwrap();
        assert_eq!(rows[0].client(), "Bea");
        assert_eq!(rows[0].date.as_deref(), Some("10/05/2025"));
        assert_eq!(rows[0].status, None);
    }

    #[tokio::test]
    async fn fetches_from_remote_export() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/export")
            .with_status(200)
            .with_header("content-type", "text/csv")
            .with_body(SHEET)
            .create_async()
            .await;

        let source = SheetSource::default();
        let rows = source
            .fetch_rows(&format!("{}/export", server.url()))
            .await
            .unwrap();

        assert_eq!(rows.len(), 2);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn non_success_status_is_a_fetch_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/export")
            .with_status(404)
            .create_async()
            .await;

        let source = SheetSource::default();
        let err = source
            .fetch_rows(&format!("{}/export", server.url()))
            .await
            .unwrap_err();

        assert!(matches!(err, crate::error::ClinicError::Fetch(_)));
    }
}
