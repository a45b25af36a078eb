// src/main.rs
mod cli;
mod config;
mod constants;
mod data_fetcher;
mod error;
mod logging;
mod server;

use actix_web::web::Data;
use actix_web::{App, HttpServer};
use clap::Parser;
use cli::Args;
use config::Config;
use error::AppError;
use logging::setup_logging;
use server::{AppState, configure_routes};
use tracing::info;

#[actix_web::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_from_path(path).await?,
        None => Config::load().await?,
    };

    let (log_dir, _guard) = setup_logging(&args, &config).await?;
    info!("Logging to {log_dir}");
    info!(
        "Upstream bases: provider={}, cms={}",
        config.provider_base, config.cms_base
    );

    let state = Data::new(AppState::new(config)?);
    let bind_addr = (args.bind.clone(), args.port);
    info!("Listening on {}:{}", args.bind, args.port);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(configure_routes)
    })
    .bind(bind_addr)?
    .run()
    .await?;

    Ok(())
}
