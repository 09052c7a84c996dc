pub mod agenda;
pub mod confirmation;
pub mod home;

use actix_web::web;

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.configure(home::init)
        .configure(agenda::init)
        .configure(confirmation::init);
}
