/// Account routes
use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;

use super::CreatedResponse;
use crate::app_state::AppState;
use crate::errors::ApiError;
use crate::models::{self, NewAccount};
use crate::store::to_document;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    100
}

// POST /api/accounts
pub async fn create_account(
    state: web::Data<AppState>,
    payload: web::Json<NewAccount>,
) -> Result<impl Responder, ApiError> {
    let store = state.store()?;
    let id = store
        .create(models::ACCOUNTS, to_document(&payload.into_inner())?)
        .await?;
    Ok(HttpResponse::Ok().json(CreatedResponse { id }))
}

// GET /api/accounts
pub async fn list_accounts(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> Result<impl Responder, ApiError> {
    let store = state.store()?;
    let accounts = store.list(models::ACCOUNTS, query.limit, None).await?;
    Ok(HttpResponse::Ok().json(accounts))
}
