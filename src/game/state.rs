use std::collections::HashMap;

use serde::{Serialize, Deserialize};

use crate::game::grid::Grid;
use crate::game::types::{Direction, Point, Tile};
use crate::game::systems::{move_player, interact};
use crate::game::error::GameError;

/// Lever position -> position of the gate it controls.
pub type LeverMap = HashMap<Point, Point>;

/// Full game state: the grid, the currency counter, the lever map and the
/// cached player position.
///
/// `player` always names the single `P` cell of `grid`; only the movement
/// system relocates the player and it updates both in the same step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) grid: Grid,
    pub(crate) money: u32,
    pub(crate) lever_map: LeverMap,
    pub(crate) player: Point,
}

impl GameState {
    pub(crate) fn from_parts(grid: Grid, money: u32, lever_map: LeverMap, player: Point) -> Self {
        debug_assert_eq!(grid.value(player), Tile::Player);
        Self { grid, money, lever_map, player }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn money(&self) -> u32 {
        self.money
    }

    pub fn lever_map(&self) -> &LeverMap {
        &self.lever_map
    }

    pub fn player(&self) -> Point {
        self.player
    }

    /// Moves the player one step and returns where it ended up. Blocked
    /// moves are no-ops, so this cannot fail.
    pub fn apply_move(&mut self, direction: Direction) -> Point {
        move_player(self, direction)
    }

    pub fn apply_interact(&mut self) -> Result<(), GameError> {
        interact(self)
    }
}

/// A lever/gate pair as exposed to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeverLink {
    pub lever: Point,
    pub gate: Point,
}

/// Client-facing snapshot of a [`GameState`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateView {
    pub rows: Vec<String>,
    pub money: u32,
    pub player: Point,
    pub levers: Vec<LeverLink>,
}

impl From<&GameState> for StateView {
    fn from(state: &GameState) -> Self {
        let mut levers: Vec<LeverLink> = state
            .lever_map
            .iter()
            .map(|(&lever, &gate)| LeverLink { lever, gate })
            .collect();
        levers.sort_by_key(|link| link.lever);

        StateView {
            rows: state.grid.row_strings(),
            money: state.money,
            player: state.player,
            levers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_move_reports_resulting_position() {
        let mut state = GameState::initial();
        assert_eq!(state.apply_move(Direction::Down), Point::new(4, 2));

        for _ in 0..3 {
            state.apply_move(Direction::Right);
        }
        // Blocked by the wall column.
        assert_eq!(state.apply_move(Direction::Right), Point::new(4, 5));
        assert_eq!(state.player(), Point::new(4, 5));
    }

    #[test]
    fn view_lists_levers_in_point_order() {
        let state = GameState::initial();
        let view = StateView::from(&state);

        assert_eq!(view.rows.len(), 10);
        assert_eq!(view.rows[3], "__P___W___");
        assert_eq!(view.money, 0);
        assert_eq!(view.player, Point::new(3, 2));
        assert_eq!(
            view.levers,
            vec![
                LeverLink { lever: Point::new(2, 1), gate: Point::new(9, 6) },
                LeverLink { lever: Point::new(8, 1), gate: Point::new(2, 6) },
            ]
        );
    }

    #[test]
    fn view_serializes_points_as_objects() {
        let view = StateView::from(&GameState::initial());
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["player"]["row"], 3);
        assert_eq!(json["player"]["col"], 2);
        assert_eq!(json["levers"][0]["gate"]["row"], 9);
    }
}
