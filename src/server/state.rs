// src/server/state.rs

//! Application state for the backend server.
//!
//! Holds the address of the engine actor, shared by every HTTP/WebSocket handler.

use actix::Addr;
use crate::server::engine::GameEngine;

/// Shared application state, injected into HTTP/WebSocket handlers.
pub struct AppState {
    /// Address of the engine actor (sole owner of the game state).
    pub engine: Addr<GameEngine>,
}

impl AppState {
    pub fn new(engine: Addr<GameEngine>) -> Self {
        AppState { engine }
    }
}
