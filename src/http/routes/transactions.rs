/// Transaction routes
use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;

use super::CreatedResponse;
use crate::app_state::AppState;
use crate::errors::ApiError;
use crate::models::{self, NewTransaction};
use crate::store::{to_document, Sort};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    50
}

// POST /api/transactions
pub async fn create_transaction(
    state: web::Data<AppState>,
    payload: web::Json<NewTransaction>,
) -> Result<impl Responder, ApiError> {
    let store = state.store()?;
    let mut tx = payload.into_inner();
    // The stored amount is always a magnitude; the sign lives in `direction`
    tx.amount = tx.amount.abs();
    let id = store
        .create(models::TRANSACTIONS, to_document(&tx)?)
        .await?;
    Ok(HttpResponse::Ok().json(CreatedResponse { id }))
}

// GET /api/transactions
pub async fn list_transactions(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> Result<impl Responder, ApiError> {
    let store = state.store()?;
    let transactions = store
        .list(models::TRANSACTIONS, query.limit, Some(Sort::desc("date")))
        .await?;
    Ok(HttpResponse::Ok().json(transactions))
}
