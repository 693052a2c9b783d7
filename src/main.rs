use axum::{
    routing::{delete, get, patch},
    Router,
};
use std::net::SocketAddr;
use test_center_backend::{
    config::{get_config, init_config},
    database::pool::create_pool,
    routes, AppState,
};
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

    let app = Router::new()
        .route("/health", get(routes::health::health))
        .route(
            "/api/manage/test-types",
            get(routes::catalog::list_test_types).post(routes::catalog::create_test_type),
        )
        .route(
            "/api/manage/rooms",
            get(routes::catalog::list_rooms).post(routes::catalog::create_room),
        )
        .route(
            "/api/manage/staff",
            get(routes::catalog::list_staff).post(routes::catalog::create_staff_member),
        )
        .route(
            "/api/sessions",
            get(routes::schedule::list_sessions).post(routes::schedule::schedule_session),
        )
        .route("/api/sessions/:id", delete(routes::schedule::delete_session))
        .route(
            "/api/sessions/:id/readiness",
            patch(routes::schedule::update_readiness),
        )
        .with_state(app_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
