use axum::{
    routing::{get, post},
    Router,
};
use salaries_backend::{
    config::{get_config, init_config},
    database::pool::create_pool,
    middleware::rate_limit::{rps_middleware, PublicRateLimit},
    routes, AppState,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    let pool = create_pool().await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let app_state = AppState::new(pool);

    let base_routes = Router::new().route("/health", get(routes::health::health));

    let public_api = Router::new()
        .route(
            "/api/public/catalogs",
            get(routes::catalog_routes::get_catalogs),
        )
        .route(
            "/api/public/submissions",
            post(routes::submission_routes::submit_salary),
        )
        .layer(axum::middleware::from_fn_with_state(
            PublicRateLimit::new(config.public_rps),
            rps_middleware,
        ));

    let app = base_routes
        .merge(public_api)
        .with_state(app_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
