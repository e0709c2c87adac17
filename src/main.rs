use std::fs::OpenOptions;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use sqlx::Executor;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use video_api::{
    AppState,
    config::Config,
    database::{InMemoryVideoRepository, PgVideoRepository, VideoRepository},
    router::create_router,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;

    // stdout always, plus a plain-text copy in LOG_FILE when set
    let file_layer = match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            Some(fmt::layer().with_ansi(false).with_writer(Arc::new(file)))
        }
        None => None,
    };
    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(fmt::layer())
        .with(file_layer)
        .init();

    #[cfg(debug_assertions)]
    tracing::info!("Running in debug mode with CORS enabled");

    #[cfg(not(debug_assertions))]
    tracing::info!("Running in production mode with CORS disabled");

    let videos: Arc<dyn VideoRepository> = match &config.database_url {
        Some(url) => {
            let pool = PgPoolOptions::new()
                .max_connections(10)
                .after_connect(|conn, _meta| {
                    Box::pin(async move {
                        conn.execute("SET application_name = 'video_api';").await?;
                        Ok(())
                    })
                })
                .connect(url)
                .await?;
            let repository = PgVideoRepository::new(pool);
            repository.migrate().await?;
            tracing::info!("Using Postgres video repository");
            Arc::new(repository)
        }
        None => {
            tracing::warn!("DATABASE_URL not set, videos are kept in memory");
            Arc::new(InMemoryVideoRepository::new())
        }
    };

    let host = config.server_host.parse().unwrap_or_else(|_| {
        tracing::warn!("Invalid server_host, falling back to dual-stack default");
        IpAddr::V6(std::net::Ipv6Addr::UNSPECIFIED)
    });
    let addr = SocketAddr::new(host, config.server_port);

    let state = AppState::new(config, videos);
    let app = create_router(state);

    tracing::info!("Server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
