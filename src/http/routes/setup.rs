/// Bootstrap seeding route
use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;

use crate::app_state::AppState;
use crate::errors::ApiError;
use crate::models;
use crate::store::to_document;

#[derive(Serialize)]
struct SeedResponse {
    status: String,
}

/// POST /api/setup/defaults
///
/// Seeds the fixed category set and a Cash account. Idempotent only
/// through the empty-collection guard; there is no upsert.
pub async fn seed_defaults(state: web::Data<AppState>) -> Result<impl Responder, ApiError> {
    let store = state.store()?;

    if store.count(models::CATEGORIES).await? == 0 {
        for category in models::default_categories() {
            store
                .create(models::CATEGORIES, to_document(&category)?)
                .await?;
        }
        tracing::info!("Seeded default categories");
    }

    if store.count(models::ACCOUNTS).await? == 0 {
        store
            .create(models::ACCOUNTS, to_document(&models::default_cash_account())?)
            .await?;
        tracing::info!("Seeded default Cash account");
    }

    Ok(HttpResponse::Ok().json(SeedResponse {
        status: "ok".to_string(),
    }))
}
