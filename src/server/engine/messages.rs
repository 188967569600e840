//! Messages accepted by the engine actor, and the WebSocket wire protocol.

use actix::prelude::*;
use serde::{Serialize, Deserialize};

use crate::game::error::GameError;
use crate::game::state::{GameState, StateView};
use crate::game::types::Direction;

/// Discard the current state and rebuild the starting layout.
#[derive(Message, Debug)]
#[rtype(result = "Result<GameState, GameError>")]
pub struct Initialize;

#[derive(Message, Debug)]
#[rtype(result = "Result<GameState, GameError>")]
pub struct Move(pub Direction);

/// Toggle the first lever adjacent to the player.
#[derive(Message, Debug)]
#[rtype(result = "Result<GameState, GameError>")]
pub struct Interact;

/// Persist the current state under `name`. Replies whether the write succeeded.
#[derive(Message, Debug)]
#[rtype(result = "bool")]
pub struct Save {
    pub name: String,
}

/// Replace the current state with the save stored under `name`.
#[derive(Message, Debug)]
#[rtype(result = "Result<GameState, GameError>")]
pub struct Load {
    pub name: String,
}

/// Read the current state without changing it.
#[derive(Message, Debug)]
#[rtype(result = "GameState")]
pub struct GetSnapshot;

/// Messages sent by a WebSocket client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClientAction {
    Initialize,
    Move(Direction),
    Interact,
    Save(String),
    Load(String),
    Ping,
}

/// Messages sent to a WebSocket client. Errors use the `ws_error` helpers,
/// which share the same `action`/`data` envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", content = "data")]
pub enum ServerWsMessage {
    GameStateUpdate(StateView),
    SaveResult { saved: bool },
    Pong,
}
