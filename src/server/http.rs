//! HTTP handlers.
//!
//! Each handler decodes its form input, sends one command to the engine
//! actor, waits for the reply, and renders it as JSON.

use actix::MailboxError;
use actix_web::{error::InternalError, web, HttpRequest, HttpResponse, http::StatusCode};
use log::{error, warn};
use serde::{Deserialize, Serialize};

use crate::game::error::GameError;
use crate::game::state::{GameState, StateView};
use crate::game::types::Direction;
use crate::server::engine::messages::{GetSnapshot, Initialize, Interact, Load, Move, Save};
use crate::server::state::AppState;
use crate::server::ws_error::{game_error_response, http_error_response};

#[derive(Debug, Deserialize)]
pub struct MoveForm {
    pub direction: String,
}

#[derive(Debug, Deserialize)]
pub struct SaveForm {
    pub filename: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SaveResponse {
    pub saved: bool,
}

/// Form extraction failures (missing or malformed fields) use the same JSON
/// error envelope as engine errors.
pub fn form_config() -> web::FormConfig {
    web::FormConfig::default().error_handler(|err, req: &HttpRequest| {
        warn!("[Http] Rejected form on {}: {}", req.path(), err);
        let response = http_error_response(
            "INVALID_FORM",
            &err.to_string(),
            Some(req.path()),
            StatusCode::BAD_REQUEST,
        );
        InternalError::from_response(err, response).into()
    })
}

fn mailbox_error_response(err: MailboxError) -> HttpResponse {
    error!("[Http] Engine unreachable: {}", err);
    http_error_response(
        "ENGINE_UNAVAILABLE",
        "Game engine unavailable",
        None,
        StatusCode::INTERNAL_SERVER_ERROR,
    )
}

fn state_response(
    reply: Result<Result<GameState, GameError>, MailboxError>,
    context: Option<&str>,
) -> HttpResponse {
    match reply {
        Ok(Ok(state)) => HttpResponse::Ok().json(StateView::from(&state)),
        Ok(Err(e)) => game_error_response(&e, context),
        Err(e) => mailbox_error_response(e),
    }
}

pub async fn get_state(data: web::Data<AppState>) -> HttpResponse {
    match data.engine.send(GetSnapshot).await {
        Ok(state) => HttpResponse::Ok().json(StateView::from(&state)),
        Err(e) => mailbox_error_response(e),
    }
}

pub async fn initialize(data: web::Data<AppState>) -> HttpResponse {
    state_response(data.engine.send(Initialize).await, None)
}

/// Unknown directions are rejected here and never reach the engine.
pub async fn move_player(data: web::Data<AppState>, form: web::Form<MoveForm>) -> HttpResponse {
    let direction: Direction = match form.direction.parse() {
        Ok(direction) => direction,
        Err(e) => {
            warn!("[Http] Rejected move: {}", e);
            return game_error_response(&e, Some(form.direction.as_str()));
        }
    };
    state_response(data.engine.send(Move(direction)).await, None)
}

pub async fn interact(data: web::Data<AppState>) -> HttpResponse {
    state_response(data.engine.send(Interact).await, None)
}

pub async fn save(data: web::Data<AppState>, form: web::Form<SaveForm>) -> HttpResponse {
    let SaveForm { filename } = form.into_inner();
    match data.engine.send(Save { name: filename }).await {
        Ok(saved) => HttpResponse::Ok().json(SaveResponse { saved }),
        Err(e) => mailbox_error_response(e),
    }
}

pub async fn load(data: web::Data<AppState>, form: web::Form<SaveForm>) -> HttpResponse {
    let SaveForm { filename } = form.into_inner();
    let reply = data.engine.send(Load { name: filename.clone() }).await;
    state_response(reply, Some(filename.as_str()))
}
