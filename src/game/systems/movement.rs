//! Player movement system.
//!
//! This module handles moving the player one step on the grid, including
//! currency pickup and blocking.

use log::debug;

use crate::game::types::{Direction, Point, Tile};
use crate::game::state::GameState;

/// Move the player one step in the given direction.
/// Returns the player's position afterwards.
///
/// Stepping off the board or into an impassable tile leaves the state
/// untouched. Stepping onto currency collects it and moves in the same step;
/// with the counter already at `u32::MAX` the currency blocks like a wall.
pub fn move_player(game_state: &mut GameState, direction: Direction) -> Point {
    let current = game_state.player;
    let next = current.step(direction);

    if !game_state.grid.contains(next) {
        return current;
    }

    match game_state.grid.value(next) {
        Tile::Currency => {
            let Some(money) = game_state.money.checked_add(1) else {
                return current;
            };
            game_state.money = money;
            debug!("[Movement] Currency collected at {}, total={}", next, game_state.money);
        }
        tile if !tile.is_passable() => return current,
        _ => {}
    }

    game_state.grid.set(current, Tile::Empty);
    game_state.grid.set(next, Tile::Player);
    game_state.player = next;
    next
}
