//! Fixverse Admin Service
//!
//! Main application entry point

use actix_web::{App, HttpServer, web};
use tracing::info;

use fixverse_admin::{
    config::Settings,
    database::{DatabaseConfig, create_pool, run_migrations},
    handlers::{self, AppState},
    middleware::Authentication,
    utils::logging,
};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging; the guard must stay alive for the file appender
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", fixverse_admin::info());

    // Initialize database connection
    info!("Connecting to database...");
    let db_config = DatabaseConfig::from(&settings.database);
    let pool = create_pool(&db_config).await?;

    run_migrations(&pool).await?;

    let state = AppState::new(pool, settings.clone());
    let bind_addr = (settings.server.host.clone(), settings.server.port);

    info!(
        host = %settings.server.host,
        port = settings.server.port,
        "Admin service listening"
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Authentication)
            .service(handlers::health::health)
            .service(handlers::api_routes())
    })
    .bind(bind_addr)?
    .run()
    .await?;

    Ok(())
}
