// src/server/mod.rs

//! Server layer root module.
//!
//! This module organizes the shell around the game engine:
//! - The engine actor that serializes every command against the game state
//! - HTTP handlers and WebSocket sessions that translate requests into commands
//! - Routing, shared application state, error payloads and anti-spam

pub mod state;
pub mod router;
pub mod engine;
pub mod http;
pub mod ws_error;
pub mod ws_actor_utils;
pub mod anti_spam;
