use crate::config::get_config;
use crate::error::Result;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;

pub async fn create_pool() -> Result<PgPool> {
    let config = get_config();
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_acquire_timeout_secs))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime_secs))
        .test_before_acquire(config.db_pre_ping)
        .connect(&config.database_url)
        .await?;
    Ok(pool)
}
