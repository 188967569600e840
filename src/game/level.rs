//! The fixed starting layout.
//!
//! A wall column splits the board in two. Each half holds a lever that opens
//! the gate cut into the wall on the other side of the board.

use crate::config::game::{BOARD_SIZE, CURRENCY_START, LEVER_GATES, PLAYER_START, WALL_COLUMN};
use crate::game::grid::Grid;
use crate::game::state::{GameState, LeverMap};
use crate::game::types::{Point, Tile};

impl GameState {
    /// Fresh state for the single level: player at its start cell, no currency
    /// collected, every gate closed.
    pub fn initial() -> Self {
        let mut grid = Grid::new(BOARD_SIZE);
        for row in 0..BOARD_SIZE as i32 {
            grid.set(Point::new(row, WALL_COLUMN), Tile::Wall);
        }

        let mut lever_map = LeverMap::new();
        for (lever, gate) in LEVER_GATES {
            let (lever, gate) = (Point::from(lever), Point::from(gate));
            grid.set(gate, Tile::Gate);
            grid.set(lever, Tile::LeverArmed);
            lever_map.insert(lever, gate);
        }

        let player = Point::from(PLAYER_START);
        grid.set(player, Tile::Player);
        grid.set(Point::from(CURRENCY_START), Tile::Currency);

        GameState::from_parts(grid, 0, lever_map, player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_layout_matches_level() {
        let state = GameState::initial();
        let grid = state.grid();

        assert_eq!(grid.size(), 10);
        assert_eq!(state.player(), Point::new(3, 2));
        assert_eq!(grid.value(Point::new(3, 2)), Tile::Player);
        assert_eq!(grid.value(Point::new(8, 8)), Tile::Currency);
        assert_eq!(grid.value(Point::new(2, 6)), Tile::Gate);
        assert_eq!(grid.value(Point::new(9, 6)), Tile::Gate);
        assert_eq!(grid.value(Point::new(8, 1)), Tile::LeverArmed);
        assert_eq!(grid.value(Point::new(2, 1)), Tile::LeverArmed);
        assert_eq!(grid.positions_of(Tile::Wall).count(), 8);
        assert_eq!(state.money(), 0);
    }

    #[test]
    fn every_lever_tile_has_a_map_entry() {
        let state = GameState::initial();
        let levers: Vec<_> = state
            .grid()
            .positions_of(Tile::LeverArmed)
            .chain(state.grid().positions_of(Tile::LeverDisarmed))
            .collect();
        assert_eq!(levers.len(), state.lever_map().len());
        for lever in levers {
            let gate = state.lever_map()[&lever];
            assert_eq!(state.grid().value(gate), Tile::Gate);
        }
    }
}
