//! Lever/gate system.
//!
//! Toggles the first lever orthogonally adjacent to the player and flips its
//! paired gate.

use log::debug;

use crate::game::error::GameError;
use crate::game::state::GameState;
use crate::game::types::{Direction, Point, Tile};

/// Toggle the first adjacent lever, scanning up, down, left, right.
///
/// At most one lever changes per call; no adjacent lever is a no-op.
pub fn interact(game_state: &mut GameState) -> Result<(), GameError> {
    let player = game_state.player;
    let lever = Direction::ALL
        .into_iter()
        .map(|d| player.step(d))
        .find(|&p| game_state.grid.contains(p) && game_state.grid.value(p).is_lever());

    match lever {
        Some(lever) => toggle_lever(game_state, lever),
        None => Ok(()),
    }
}

/// Flip a lever and its gate: `I` opens the gate, `i` closes it again.
/// A gate mapped onto the player's cell is never rewritten.
fn toggle_lever(game_state: &mut GameState, lever: Point) -> Result<(), GameError> {
    let gate = *game_state
        .lever_map
        .get(&lever)
        .ok_or(GameError::MissingLever(lever))?;
    if game_state.player == gate {
        return Err(GameError::BlockedGate(gate));
    }

    match game_state.grid.value(lever) {
        Tile::LeverArmed => {
            game_state.grid.set(lever, Tile::LeverDisarmed);
            game_state.grid.set(gate, Tile::Empty);
            debug!("[Levers] Lever {} opened gate {}", lever, gate);
        }
        _ => {
            game_state.grid.set(lever, Tile::LeverArmed);
            game_state.grid.set(gate, Tile::Gate);
            debug!("[Levers] Lever {} closed gate {}", lever, gate);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::game::BOARD_SIZE;
    use crate::game::save;
    use crate::game::systems::move_player;

    /// Walks from the start cell to (8,2), right of the lever at (8,1).
    fn stand_by_lower_lever(state: &mut GameState) {
        for _ in 0..5 {
            move_player(state, Direction::Down);
        }
        assert_eq!(state.player(), Point::new(8, 2));
    }

    #[test]
    fn toggle_twice_restores_lever_and_gate() {
        let mut state = GameState::initial();
        stand_by_lower_lever(&mut state);
        let before = state.clone();

        interact(&mut state).unwrap();
        assert_eq!(state.grid().value(Point::new(8, 1)), Tile::LeverDisarmed);
        assert_eq!(state.grid().value(Point::new(2, 6)), Tile::Empty);

        interact(&mut state).unwrap();
        assert_eq!(state.grid().value(Point::new(8, 1)), Tile::LeverArmed);
        assert_eq!(state.grid().value(Point::new(2, 6)), Tile::Gate);
        assert_eq!(state, before);
    }

    #[test]
    fn no_adjacent_lever_is_a_no_op() {
        let mut state = GameState::initial();
        let before = state.clone();
        interact(&mut state).unwrap();
        assert_eq!(state, before);
    }

    #[test]
    fn only_first_lever_in_scan_order_toggles() {
        let mut state = GameState::initial();
        stand_by_lower_lever(&mut state);
        // Second lever below the player; "down" is scanned before "left".
        let extra_lever = Point::new(9, 2);
        let extra_gate = Point::new(0, 9);
        state.grid.set(extra_lever, Tile::LeverArmed);
        state.grid.set(extra_gate, Tile::Gate);
        state.lever_map.insert(extra_lever, extra_gate);

        interact(&mut state).unwrap();
        assert_eq!(state.grid().value(extra_lever), Tile::LeverDisarmed);
        assert_eq!(state.grid().value(extra_gate), Tile::Empty);
        assert_eq!(state.grid().value(Point::new(8, 1)), Tile::LeverArmed);
        assert_eq!(state.grid().value(Point::new(2, 6)), Tile::Gate);
    }

    #[test]
    fn lever_without_map_entry_is_an_error() {
        let mut state = GameState::initial();
        stand_by_lower_lever(&mut state);
        state.lever_map.remove(&Point::new(8, 1));
        let before = state.clone();

        let err = interact(&mut state).unwrap_err();
        assert!(matches!(err, GameError::MissingLever(p) if p == Point::new(8, 1)));
        assert_eq!(state, before);
    }

    #[test]
    fn player_on_edge_skips_out_of_bounds_neighbours() {
        let mut state = GameState::initial();
        for _ in 0..6 {
            move_player(&mut state, Direction::Down);
        }
        assert_eq!(state.player(), Point::new(9, 2));
        let before = state.clone();
        interact(&mut state).unwrap();
        assert_eq!(state, before);
    }

    #[test]
    fn closing_a_gate_on_the_player_is_refused() {
        let mut state = GameState::initial();
        // Rewire the lower lever so its gate sits right above the player.
        stand_by_lower_lever(&mut state);
        let gate = Point::new(7, 2);
        state.lever_map.insert(Point::new(8, 1), gate);
        state.grid.set(gate, Tile::Gate);

        interact(&mut state).unwrap();
        assert_eq!(state.grid().value(gate), Tile::Empty);
        move_player(&mut state, Direction::Up);
        assert_eq!(state.player(), gate);

        let err = toggle_lever(&mut state, Point::new(8, 1)).unwrap_err();
        assert!(matches!(err, GameError::BlockedGate(p) if p == gate));
        assert_eq!(state.grid().value(gate), Tile::Player);
        assert_eq!(state.grid().value(Point::new(8, 1)), Tile::LeverDisarmed);
    }

    #[test]
    fn opening_a_gate_mapped_onto_the_player_is_refused() {
        let mut state = GameState::initial();
        stand_by_lower_lever(&mut state);
        let text = save::encode(&state).replace("8,1:2,6", "8,1:8,2");
        let mut state = save::decode(&text, BOARD_SIZE).unwrap();
        let before = state.clone();

        let err = interact(&mut state).unwrap_err();
        assert!(matches!(err, GameError::BlockedGate(p) if p == Point::new(8, 2)));
        assert_eq!(state, before);
        assert_eq!(state.grid().positions_of(Tile::Player).count(), 1);
    }
}
