/// Route modules

pub mod accounts;
pub mod budgets;
pub mod categories;
pub mod health;
pub mod parse;
pub mod setup;
pub mod transactions;
pub mod version;

use actix_web::web;
use serde::Serialize;

/// Response body for every create endpoint
#[derive(Serialize)]
pub struct CreatedResponse {
    pub id: String,
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(health::index))
        .route("/test", web::get().to(health::diagnostics))
        .route("/healthz", web::get().to(health::healthz))
        .route("/version", web::get().to(version::version))
        .service(
            web::scope("/api")
                .service(
                    web::scope("/accounts")
                        .route("", web::post().to(accounts::create_account))
                        .route("", web::get().to(accounts::list_accounts)),
                )
                .service(
                    web::scope("/categories")
                        .route("", web::post().to(categories::create_category))
                        .route("", web::get().to(categories::list_categories)),
                )
                .service(
                    web::scope("/transactions")
                        .route("", web::post().to(transactions::create_transaction))
                        .route("", web::get().to(transactions::list_transactions)),
                )
                .service(
                    web::scope("/budgets")
                        .route("", web::post().to(budgets::create_budget))
                        .route("", web::get().to(budgets::list_budgets)),
                )
                .service(
                    web::scope("/setup")
                        .route("/defaults", web::post().to(setup::seed_defaults)),
                )
                .route("/parse", web::post().to(parse::parse_text)),
        );
}
