/// Text parsing route
use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;

use crate::app_state::AppState;
use crate::errors::ApiError;

#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    /// Raw text pasted from a screen or receipt
    pub text: String,
}

/// POST /api/parse
///
/// Returns a best-effort transaction draft for the client to review and
/// edit; nothing is persisted here. 400 only for empty/whitespace input.
pub async fn parse_text(
    state: web::Data<AppState>,
    payload: web::Json<ParseRequest>,
) -> Result<impl Responder, ApiError> {
    let draft = state.parser.parse(&payload.text)?;
    Ok(HttpResponse::Ok().json(draft))
}
