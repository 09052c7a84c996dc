use actix_web::{HttpResponse, Responder, post, web};

use crate::handlers::confirmation::dispatch_confirmations;
use crate::mail::SmtpMailer;
use crate::state::AppState;

#[post("/send_confirmation")]
async fn send_confirmation(state: web::Data<AppState>) -> impl Responder {
    let config = &state.config;
    let outcome = dispatch_confirmations(config, &state.source, |credentials| {
        SmtpMailer::new(&config.smtp_host, credentials)
    })
    .await;

    if outcome.is_failure() {
        HttpResponse::InternalServerError().json(outcome)
    } else {
        HttpResponse::Ok().json(outcome)
    }
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(send_confirmation);
}
