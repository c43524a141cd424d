use actix_web::{web, App, HttpServer};
use log::info;

use leave_desk::api::{fetch_file_handler, liveness_handler, vault_action_handler};
use leave_desk::app_state::AppState;
use leave_desk::config::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = AppConfig::load().expect("Failed to load configuration");
    log4rs::init_file(&config.logging.config_file, Default::default()).unwrap();

    let server = config.server.clone();
    info!("Starting server on {}:{}", server.host, server.port);

    let app_state = web::Data::new(AppState::from_config(config));
    let payload_limit = server.max_payload_size;

    HttpServer::new(move || {
        App::new()
            .wrap(actix_web::middleware::Logger::default())
            .app_data(web::PayloadConfig::default().limit(payload_limit))
            .app_data(app_state.clone())
            // Single-endpoint vault protocol: POST dispatches on the action
            // field, GET is the liveness probe
            .route("/", web::post().to(vault_action_handler))
            .route("/", web::get().to(liveness_handler))
            .route("/files/{id}", web::get().to(fetch_file_handler))
    })
    .workers(server.workers)
    .bind((server.host.as_str(), server.port))?
    .run()
    .await
}
