use actix_cors::Cors;
use actix_web::{web, App, HttpServer, middleware};
use std::sync::Arc;
use tracing::{info, error};
use tracing_subscriber::EnvFilter;
use zip_locator::config::{LogFormat, LoggingSettings, Settings};
use zip_locator::core::Locator;
use zip_locator::models::default_targets;
use zip_locator::routes::{self, lookup::AppState};
use zip_locator::services::load_reference_store;

/// Install the global tracing subscriber
fn init_logging(logging: &LoggingSettings) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&logging.level))
        .with_target(false)
        .with_level(true);

    match logging.log_format() {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Pretty => subscriber.pretty().init(),
        LogFormat::Plain => subscriber.init(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration. On failure, log with env/default settings before bailing out.
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            init_logging(&LoggingSettings::default().with_env_overrides());
            error!("Failed to load configuration: {}", e);
            panic!("Configuration error: {}", e);
        }
    };

    // Initialize logging (LOG_LEVEL / LOG_FORMAT override the config file)
    init_logging(&settings.logging.clone().with_env_overrides());

    info!("Starting Zip Locator service...");
    info!("Configuration loaded successfully");

    // Build the reference store once; it is read-only from here on
    let store = load_reference_store(&settings.dataset).map_err(|e| {
        error!("Failed to load zip dataset: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
    })?;

    if store.is_empty() {
        error!("Zip dataset produced no entries; every lookup will miss");
    }

    let targets = default_targets();
    info!(
        "Locator initialized ({} zips, {} targets, limit {}, history {})",
        store.len(),
        targets.len(),
        settings.lookup.default_limit,
        settings.lookup.history_capacity
    );

    let app_state = AppState {
        locator: Arc::new(Locator::new(
            store,
            targets,
            settings.lookup.default_limit,
            settings.lookup.history_capacity,
        )),
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(routes::json_config())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
