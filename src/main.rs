//! Main entry point for the backend server.
//!
//! Starts the engine actor (sole owner of the game state), configures
//! application state, and launches the HTTP server with the game routes and
//! WebSocket endpoint.

use actix::Actor;
use actix_web::{web, App, HttpServer};
use log::info;

use config::server::{BIND_ADDRESS, PORT, SAVE_DIR};
use game::save::SaveStore;
use server::engine::GameEngine;

pub mod config;
mod server;
mod game;
mod tests;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger from environment variable (default to info level).
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Start the engine actor; every command goes through its mailbox.
    let engine = GameEngine::new(SaveStore::new(SAVE_DIR)).start();

    // Shared application state for HTTP/WebSocket handlers.
    let state = web::Data::new(server::state::AppState::new(engine));

    info!("[Http] Serving on {}:{}", BIND_ADDRESS, PORT);
    HttpServer::new(move || {
        App::new()
            .wrap(
                actix_web::middleware::DefaultHeaders::new()
                    .add(("Access-Control-Allow-Origin", "*"))
                    .add(("Access-Control-Allow-Headers", "*"))
            )
            .wrap(actix_web::middleware::Logger::default())
            .app_data(state.clone())
            .configure(crate::server::router::config)
    })
    .bind((BIND_ADDRESS, PORT))?
    .run()
    .await
}
