pub mod catalog;
pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::middleware::in_flight::SubmissionGuard;
use crate::services::submission_service::SubmissionService;
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub submission_service: SubmissionService,
    pub submission_guard: SubmissionGuard,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        let submission_service = SubmissionService::new(pool.clone());
        let submission_guard = SubmissionGuard::new();

        Self {
            pool,
            submission_service,
            submission_guard,
        }
    }
}
