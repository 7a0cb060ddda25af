use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use tracing::info;

use warikan::config::Config;
use warikan::handlers::{self, AppState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env();
    info!("storing data under {}", config.data_dir.display());

    let state = web::Data::new(AppState::new(&config.data_dir));

    info!("listening on {}:{}", config.host, config.port);
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .configure(handlers::routes)
    })
    // One worker: the JSON store does read-modify-write with no locking.
    .workers(1)
    .bind((config.host, config.port))?
    .run()
    .await
}
