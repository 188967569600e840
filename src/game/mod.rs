//! Game engine.
//!
//! The grid model, movement and lever rules, the fixed level and the save
//! format. Everything here is synchronous and operates on a [`state::GameState`]
//! passed by reference; ownership of the live state belongs to the server's
//! engine actor.

pub mod types;
pub mod error;
pub mod state;
pub mod level;
pub mod save;

pub mod grid;
pub mod systems;
