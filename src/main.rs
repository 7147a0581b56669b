use std::io;

use actix_web::{middleware::Logger, web, App, HttpServer};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use health_record_api::{config::Config, db, middleware, routes, utils::jwt::JwksVerifier};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn")),
        )
        .init();

    let config = Config::from_env().map_err(|e| {
        error!("Exiting: {e}");
        io::Error::other(e)
    })?;

    info!("Connecting to database...");
    let db = db::establish_connection(&config.database_url)
        .await
        .map_err(io::Error::other)?;

    let verifier = web::Data::new(JwksVerifier::new(&config.auth0_domain, &config.auth0_audience));
    if let Err(e) = verifier.refresh().await {
        warn!(error = %e, "initial JWKS fetch failed, will retry on first token");
    }

    let db_data = web::Data::new(db.clone());
    let app_origin = config.app_origin.clone();

    info!("API Server listening on http://{}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::security_headers())
            .wrap(middleware::cors(&app_origin))
            .wrap(Logger::new("%r %s %Dms - %b"))
            .app_data(db_data.clone())
            .app_data(verifier.clone())
            .configure(routes::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    info!("Server stopped, closing database pool");
    db.close().await.map_err(io::Error::other)
}
