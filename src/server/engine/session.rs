//! WebSocket session for a game client.
//!
//! Decodes `ClientAction` frames, forwards them to the engine actor, and
//! writes the engine's reply back to the socket. Replies are awaited in
//! order, so a client always sees them in the order it sent its commands.

use actix::dev::ToEnvelope;
use actix::prelude::*;
use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;
use log::{debug, info, warn};
use uuid::Uuid;

use crate::game::error::GameError;
use crate::game::state::{GameState, StateView};
use crate::server::anti_spam::AntiSpamState;
use crate::server::engine::server::GameEngine;
use crate::server::engine::messages::{
    ClientAction, Initialize, Interact, Load, Move, Save, ServerWsMessage,
};
use crate::server::ws_actor_utils::WsActorUtils;

pub struct GameWsSession {
    pub session_id: Uuid,
    pub engine: Addr<GameEngine>,
    anti_spam: AntiSpamState,
}

impl GameWsSession {
    pub fn new(engine: Addr<GameEngine>) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            engine,
            anti_spam: AntiSpamState::new(),
        }
    }

    /// Sends a state-producing command and relays the snapshot or error.
    fn forward<M>(&mut self, msg: M, ctx: &mut ws::WebsocketContext<Self>)
    where
        M: Message<Result = Result<GameState, GameError>> + Send + 'static,
        GameEngine: Handler<M>,
        Context<GameEngine>: ToEnvelope<GameEngine, M>,
    {
        self.engine
            .send(msg)
            .into_actor(self)
            .map(|reply, act, ctx| match reply {
                Ok(Ok(state)) => {
                    act.anti_spam.reset_on_valid_action();
                    act.send_message(ctx, ServerWsMessage::GameStateUpdate(StateView::from(&state)));
                }
                Ok(Err(e)) => {
                    act.send_error_and_maybe_ban(ctx, e.code(), &e.to_string(), None);
                }
                Err(e) => {
                    warn!("[GameWs] Engine unreachable: {}", e);
                    act.send_error_and_maybe_ban(ctx, "ENGINE_UNAVAILABLE", "Game engine unavailable", None);
                }
            })
            .wait(ctx);
    }

    fn save(&mut self, name: String, ctx: &mut ws::WebsocketContext<Self>) {
        self.engine
            .send(Save { name })
            .into_actor(self)
            .map(|reply, act, ctx| match reply {
                Ok(saved) => act.send_message(ctx, ServerWsMessage::SaveResult { saved }),
                Err(e) => {
                    warn!("[GameWs] Engine unreachable: {}", e);
                    act.send_error_and_maybe_ban(ctx, "ENGINE_UNAVAILABLE", "Game engine unavailable", None);
                }
            })
            .wait(ctx);
    }

    fn send_message(&mut self, ctx: &mut ws::WebsocketContext<Self>, msg: ServerWsMessage) {
        match serde_json::to_string(&msg) {
            Ok(text) => self.send_json_or_ban(ctx, text),
            Err(e) => {
                warn!("[GameWs] Failed to serialize reply: {}", e);
                ctx.text(r#"{"action":"Error","data":{"code":"INTERNAL","message":"Internal server error","context":""}}"#);
            }
        }
    }
}

impl WsActorUtils for GameWsSession {
    fn anti_spam(&mut self) -> &mut AntiSpamState {
        &mut self.anti_spam
    }

    fn session_id(&self) -> String {
        self.session_id.to_string()
    }
}

impl Actor for GameWsSession {
    type Context = ws::WebsocketContext<Self>;

    fn started(&mut self, _ctx: &mut Self::Context) {
        info!("[GameWs] Session {} connected", self.session_id);
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        info!("[GameWs] Session {} closed", self.session_id);
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for GameWsSession {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Text(text)) => {
                let session = self.session_id();
                if self.anti_spam.record_request(&session) {
                    self.send_ban_and_close(ctx);
                    return;
                }

                let action: ClientAction = match serde_json::from_str(&text) {
                    Ok(action) => action,
                    Err(_) => {
                        self.send_error_and_maybe_ban(ctx, "INVALID_COMMAND", "Invalid client message", None);
                        return;
                    }
                };
                debug!("[GameWs] Session {} sent {:?}", self.session_id, action);

                match action {
                    ClientAction::Initialize => self.forward(Initialize, ctx),
                    ClientAction::Move(direction) => self.forward(Move(direction), ctx),
                    ClientAction::Interact => self.forward(Interact, ctx),
                    ClientAction::Save(name) => self.save(name, ctx),
                    ClientAction::Load(name) => self.forward(Load { name }, ctx),
                    ClientAction::Ping => self.send_message(ctx, ServerWsMessage::Pong),
                }
            }
            Ok(ws::Message::Ping(msg)) => ctx.pong(&msg),
            Ok(ws::Message::Close(reason)) => {
                ctx.close(reason);
                ctx.stop();
            }
            _ => (),
        }
    }
}

/// WebSocket endpoint for a game client.
pub async fn ws_game(
    req: HttpRequest,
    stream: web::Payload,
    data: web::Data<crate::server::state::AppState>,
) -> Result<HttpResponse, Error> {
    ws::start(GameWsSession::new(data.engine.clone()), &req, stream)
}
