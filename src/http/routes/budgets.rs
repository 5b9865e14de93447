/// Budget routes
use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;

use super::CreatedResponse;
use crate::app_state::AppState;
use crate::errors::ApiError;
use crate::models::{self, NewBudget};
use crate::store::to_document;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    100
}

// POST /api/budgets
pub async fn create_budget(
    state: web::Data<AppState>,
    payload: web::Json<NewBudget>,
) -> Result<impl Responder, ApiError> {
    let store = state.store()?;
    let id = store
        .create(models::BUDGETS, to_document(&payload.into_inner())?)
        .await?;
    Ok(HttpResponse::Ok().json(CreatedResponse { id }))
}

// GET /api/budgets
pub async fn list_budgets(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> Result<impl Responder, ApiError> {
    let store = state.store()?;
    let budgets = store.list(models::BUDGETS, query.limit, None).await?;
    Ok(HttpResponse::Ok().json(budgets))
}
