use actix_web::{HttpResponse, Responder, get, web};

use crate::constants::HOME_BODY;

#[get("/")]
async fn home() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(HOME_BODY)
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(home);
}
