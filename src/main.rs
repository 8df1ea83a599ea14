use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use emotion_detector::config::Settings;
use emotion_detector::routes::{self, AppState};
use emotion_detector::services::EmotionClient;
use emotion_detector::telemetry;
use std::sync::Arc;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    telemetry::init_tracing(&settings.logging);

    info!("Starting emotion detector service...");

    let classifier = EmotionClient::new(settings.classifier.to_client_config()).map_err(|e| {
        error!("Failed to initialize classifier client: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e)
    })?;

    let client_config = classifier.config();
    info!(
        "Classifier endpoint: {} (model: {}, timeout: {:?})",
        client_config.url, client_config.model_id, client_config.timeout
    );

    let app_state = AppState {
        classifier: Arc::new(classifier),
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
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
