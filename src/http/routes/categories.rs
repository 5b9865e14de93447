/// Category routes
use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;

use super::CreatedResponse;
use crate::app_state::AppState;
use crate::errors::ApiError;
use crate::models::{self, NewCategory};
use crate::store::to_document;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    200
}

// POST /api/categories
pub async fn create_category(
    state: web::Data<AppState>,
    payload: web::Json<NewCategory>,
) -> Result<impl Responder, ApiError> {
    let store = state.store()?;
    let id = store
        .create(models::CATEGORIES, to_document(&payload.into_inner())?)
        .await?;
    Ok(HttpResponse::Ok().json(CreatedResponse { id }))
}

// GET /api/categories
pub async fn list_categories(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> Result<impl Responder, ApiError> {
    let store = state.store()?;
    let categories = store.list(models::CATEGORIES, query.limit, None).await?;
    Ok(HttpResponse::Ok().json(categories))
}
