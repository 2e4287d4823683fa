use std::sync::Arc;

use auth::Authenticator;
use auth::TokenCodec;
use category_service::config::Config;
use category_service::domain::category::ports::CategoryServicePort;
use category_service::domain::category::service::CategoryService;
use category_service::domain::user::ports::UserServicePort;
use category_service::domain::user::service::UserService;
use category_service::inbound::http::router::create_router;
use category_service::outbound::repositories::category::PostgresCategoryRepository;
use category_service::outbound::repositories::user::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "category_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "category-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        jwt_algorithm = %config.jwt.algorithm,
        jwt_ttl_minutes = config.jwt.ttl_minutes,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let algorithm = config.jwt.algorithm.parse::<auth::Algorithm>()?;
    let token_codec = TokenCodec::with_algorithm(
        config.jwt.secret.as_bytes(),
        algorithm,
        chrono::Duration::minutes(config.jwt.ttl_minutes),
    )?;
    let authenticator = Arc::new(Authenticator::new(token_codec));

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let category_repository = Arc::new(PostgresCategoryRepository::new(pg_pool));

    let user_service: Arc<dyn UserServicePort> = Arc::new(UserService::new(user_repository));
    let category_service: Arc<dyn CategoryServicePort> =
        Arc::new(CategoryService::new(category_repository));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(
        user_service,
        category_service,
        authenticator,
        config.auth.public_paths.clone(),
    );

    axum::serve(http_listener, http_application).await?;

    Ok(())
}
