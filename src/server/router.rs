//! HTTP and WebSocket routing configuration.
//!
//! Every route is a thin translation layer in front of the engine actor.

use actix_web::web;
use crate::server::http;
use crate::server::engine::session::ws_game;

/// Configure the application's HTTP/WebSocket routes.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(http::form_config())
        .route("/state", web::get().to(http::get_state))
        .route("/initialize", web::post().to(http::initialize))
        .route("/move", web::post().to(http::move_player))
        .route("/interact", web::post().to(http::interact))
        .route("/save", web::post().to(http::save))
        .route("/load", web::post().to(http::load))
        .service(web::resource("/ws/game").to(ws_game));
}
