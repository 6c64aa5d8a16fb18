use std::sync::Arc;

use auth::Authenticator;
use recipe_service::config::Config;
use recipe_service::domain::invite::service::InviteService;
use recipe_service::domain::share_code::service::ShareCodeService;
use recipe_service::domain::user::service::AuthService;
use recipe_service::inbound::http::router::create_router;
use recipe_service::outbound::repositories::PostgresInviteRepository;
use recipe_service::outbound::repositories::PostgresRecipeRepository;
use recipe_service::outbound::repositories::PostgresShareCodeRepository;
use recipe_service::outbound::repositories::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "recipe_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "recipe-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        environment = %config.environment,
        http_port = config.server.http_port,
        access_expiration_hours = config.jwt.access_expiration_hours,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let authenticator = Arc::new(Authenticator::new(&config.token_codec_config()));

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let recipe_repository = Arc::new(PostgresRecipeRepository::new(pg_pool.clone()));
    let share_code_repository = Arc::new(PostgresShareCodeRepository::new(pg_pool.clone()));
    let invite_repository = Arc::new(PostgresInviteRepository::new(pg_pool));

    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&user_repository),
        authenticator,
    ));
    let share_code_service = Arc::new(ShareCodeService::new(
        share_code_repository,
        recipe_repository,
    ));
    let invite_service = Arc::new(InviteService::new(invite_repository, user_repository));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(auth_service, share_code_service, invite_service);

    if let Err(e) = axum::serve(http_listener, http_application).await {
        tracing::error!(error = %e, "Server error");
        return Err(e.into());
    }

    tracing::info!("Server exited successfully");
    Ok(())
}
