use actix_web::http::header;
use actix_web::{HttpResponse, Responder, post, web};
use chrono::Local;

use crate::handlers::agenda::render_schedule_pdf;
use crate::models::agenda::AgendaRequest;
use crate::state::AppState;

#[post("/generate_agenda_pdf")]
async fn generate_agenda_pdf(
    state: web::Data<AppState>,
    body: Option<web::Json<AgendaRequest>>,
) -> impl Responder {
    // no body, no `data` or an empty one all mean today
    let requested = body
        .and_then(|b| b.into_inner().data)
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| Local::now().format("%d/%m/%Y").to_string());

    let pdf = render_schedule_pdf(&state.source, &state.config.agenda_csv_url, &requested).await;

    HttpResponse::Ok()
        .content_type("application/pdf")
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("inline; filename={}", pdf_filename(&requested)),
        ))
        .body(pdf)
}

/// `Agenda_10-05-2025.pdf`. Anything outside `[0-9A-Za-z._-]` becomes `-`
/// so the header value is always valid.
fn pdf_filename(requested: &str) -> String {
    let cleaned: String = requested
        .chars()
        .map(|c| match c {
            '0'..='9' | 'A'..='Z' | 'a'..='z' | '.' | '_' | '-' => c,
            _ => '-',
        })
        .collect();

    if cleaned.is_empty() {
        "Agenda.pdf".to_string()
    } else {
        format!("Agenda_{}.pdf", cleaned)
    }
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(generate_agenda_pdf);
}
