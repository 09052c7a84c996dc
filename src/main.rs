mod config;
mod constants;
mod dates;
mod error;
mod handlers;
mod mail;
mod models;
mod pdf;
mod routes;
mod source;
mod state;

use actix_web::{App, HttpServer, web};
use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    dotenv().ok();

    let config = Config::from_env().map_err(|e| std::io::Error::other(format!("{e:#}")))?;
    let bind = (config.bind_addr.clone(), config.port);
    let state = web::Data::new(AppState::new(config));

    info!("listening on {}:{}", bind.0, bind.1);
    HttpServer::new(move || App::new().app_data(state.clone()).configure(routes::init))
        .bind(bind)?
        .run()
        .await
}
