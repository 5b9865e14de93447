/// Root, health, and store diagnostics routes
use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;

use crate::app_state::AppState;
use crate::config::IntegrationsConfig;
use crate::infra::postgres;
use crate::store::DocumentStore;

#[derive(Serialize)]
struct StatusResponse {
    message: String,
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
}

#[derive(Serialize)]
struct DiagnosticsResponse {
    backend: String,
    database: String,
    database_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    database_name: Option<String>,
    connection_status: String,
    collections: Vec<String>,
}

pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(StatusResponse {
        message: "Money Manager backend running".to_string(),
    })
}

pub async fn healthz() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// GET /test
///
/// Store connectivity diagnostics. Always answers 200; failures are
/// reported inside the body with the error text truncated for display.
pub async fn diagnostics(
    state: web::Data<AppState>,
    integrations: web::Data<IntegrationsConfig>,
) -> impl Responder {
    let mut response = DiagnosticsResponse {
        backend: "running".to_string(),
        database: "not available".to_string(),
        database_url: if integrations.database_url.is_empty() {
            "not set"
        } else {
            "set"
        }
        .to_string(),
        database_name: database_name(&integrations.database_url),
        connection_status: "not connected".to_string(),
        collections: Vec::new(),
    };

    if let Some(pool) = &state.postgres {
        match postgres::check_postgres_health(pool).await {
            Ok(()) => {
                response.connection_status = "connected".to_string();
                match DocumentStore::new(pool.clone()).collection_names().await {
                    Ok(names) => {
                        response.database = "connected and working".to_string();
                        response.collections = names;
                    }
                    Err(e) => {
                        response.database =
                            format!("connected but error: {}", truncate(&e.to_string(), 80));
                    }
                }
            }
            Err(e) => {
                response.database = format!("error: {}", truncate(&e, 80));
            }
        }
    }

    HttpResponse::Ok().json(response)
}

/// Database name is the last path segment of the connection URL
fn database_name(url: &str) -> Option<String> {
    let name = url.rsplit('/').next()?.split('?').next()?;
    if name.is_empty() || name.contains('@') || name.contains(':') {
        None
    } else {
        Some(name.to_string())
    }
}

fn truncate(message: &str, max_chars: usize) -> String {
    message.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn database_name_from_url() {
        assert_eq!(
            database_name("postgres://user:pw@localhost:5432/money"),
            Some("money".to_string())
        );
        assert_eq!(
            database_name("postgres://user:pw@localhost/money?sslmode=require"),
            Some("money".to_string())
        );
        assert_eq!(database_name(""), None);
        assert_eq!(database_name("postgres://user:pw@localhost:5432"), None);
    }

    #[test]
    fn truncate_is_char_safe() {
        assert_eq!(truncate("hello", 80), "hello");
        assert_eq!(truncate("hello", 2), "he");
        assert_eq!(truncate("héllo", 2), "hé");
    }
}
