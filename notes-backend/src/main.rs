use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;

mod config;
mod controllers;
mod notes;

use config::Config;
use notes::NoteStore;

pub struct AppState {
    pub note_store: Arc<NoteStore>,
    /// Server start time for uptime calculation
    pub started_at: std::time::Instant,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::parse();
    let note_store = Arc::new(NoteStore::new(config.notes_dir.clone()));

    // The notes directory must exist before the first request is served
    if let Err(e) = note_store.ensure_root().await {
        log::error!(
            "Failed to create notes directory {}: {}",
            note_store.notes_dir().display(),
            e
        );
        return Err(std::io::Error::other(e));
    }

    let started_at = std::time::Instant::now();
    let (host, port) = config.bind_addr();
    log::info!("Notes service listening on http://{}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(AppState {
                note_store: Arc::clone(&note_store),
                started_at,
            }))
            .wrap(Logger::default())
            .configure(controllers::health::config_routes)
            .configure(controllers::notes::config)
    })
    .bind((host, port))?
    .run()
    .await
}
