/// HTTP server module

pub mod middleware;
pub mod routes;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use std::io;

use crate::app_state::AppState;
use crate::config::Config;
use middleware::request_log::RequestLog;

pub async fn start_server(config: Config, app_state: AppState) -> io::Result<()> {
    let bind_addr = format!("{}:{}", config.server.host, config.server.port);

    tracing::info!(
        service_name = %config.service.name,
        service_version = %config.service.version,
        bind_addr = %bind_addr,
        log_level = %config.telemetry.log_level,
        log_format = %config.telemetry.log_format,
        "Starting HTTP server"
    );

    let app_state = web::Data::new(app_state);
    let integrations = web::Data::new(config.integrations.clone());
    let request_id_header = config.telemetry.request_id_header.clone();
    let cors_origins = config.server.cors_allow_origins.clone();
    let body_limit = config.server.request_body_limit_bytes;

    HttpServer::new(move || {
        let mut cors = Cors::default().allow_any_method().allow_any_header();
        for origin in &cors_origins {
            if origin == "*" {
                cors = cors.allow_any_origin();
                break;
            }
            cors = cors.allowed_origin(origin);
        }

        App::new()
            .app_data(app_state.clone())
            .app_data(integrations.clone())
            .app_data(web::PayloadConfig::new(body_limit))
            .wrap(cors)
            .wrap(RequestLog::new(request_id_header.clone()))
            .configure(routes::configure)
    })
    .bind(&bind_addr)?
    .run()
    .await
}
