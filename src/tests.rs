//! End-to-end play-throughs of the fixed level and the state invariants
//! that must hold after every command.

#[cfg(test)]
mod tests {
    use crate::config::game::BOARD_SIZE;
    use crate::game::save::{decode, encode};
    use crate::game::state::GameState;
    use crate::game::systems::{interact, move_player};
    use crate::game::types::{Direction, Point, Tile};

    /// Exactly one player tile, matching the cached position.
    fn assert_single_player(state: &GameState) {
        let players: Vec<Point> = state.grid().positions_of(Tile::Player).collect();
        assert_eq!(players, vec![state.player()]);
    }

    fn walk(state: &mut GameState, direction: Direction, times: usize) {
        for _ in 0..times {
            let money_before = state.money();
            move_player(state, direction);
            assert!(state.money() >= money_before);
            assert_single_player(state);
        }
    }

    #[test]
    fn wall_blocks_the_direct_route_to_currency() {
        let mut state = GameState::initial();
        walk(&mut state, Direction::Down, 5);
        walk(&mut state, Direction::Right, 6);

        assert_eq!(state.player(), Point::new(8, 5));
        assert_eq!(state.money(), 0);
        assert_eq!(state.grid().value(Point::new(8, 8)), Tile::Currency);
    }

    #[test]
    fn opening_the_upper_gate_reaches_the_currency() {
        let mut state = GameState::initial();
        walk(&mut state, Direction::Down, 5);
        assert_eq!(state.player(), Point::new(8, 2));

        interact(&mut state).unwrap();
        assert_eq!(state.grid().value(Point::new(8, 1)), Tile::LeverDisarmed);
        assert_eq!(state.grid().value(Point::new(2, 6)), Tile::Empty);

        walk(&mut state, Direction::Up, 6);
        walk(&mut state, Direction::Right, 5);
        assert_eq!(state.player(), Point::new(2, 7));
        walk(&mut state, Direction::Down, 6);
        walk(&mut state, Direction::Right, 1);

        assert_eq!(state.player(), Point::new(8, 8));
        assert_eq!(state.money(), 1);

        // The currency is gone; wandering over the cell again adds nothing.
        walk(&mut state, Direction::Right, 1);
        walk(&mut state, Direction::Left, 1);
        assert_eq!(state.money(), 1);
    }

    #[test]
    fn lower_lever_round_trip() {
        let mut state = GameState::initial();
        walk(&mut state, Direction::Down, 5);
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
    fn boundaries_are_idempotent() {
        for (direction, steps) in [
            (Direction::Up, 3),
            (Direction::Left, 2),
            (Direction::Down, 6),
            (Direction::Right, 3),
        ] {
            let mut state = GameState::initial();
            walk(&mut state, direction, steps);
            let at_edge = state.clone();
            walk(&mut state, direction, 5);
            assert_eq!(state, at_edge, "{:?}", direction);
        }
    }

    #[test]
    fn right_edge_is_idempotent_past_the_open_gate() {
        let mut state = GameState::initial();
        walk(&mut state, Direction::Down, 5);
        interact(&mut state).unwrap();
        walk(&mut state, Direction::Up, 6);
        walk(&mut state, Direction::Right, 7);
        assert_eq!(state.player(), Point::new(2, 9));

        let at_edge = state.clone();
        walk(&mut state, Direction::Right, 5);
        assert_eq!(state, at_edge);
    }

    #[test]
    fn save_round_trip_after_play() {
        let mut state = GameState::initial();
        walk(&mut state, Direction::Down, 5);
        interact(&mut state).unwrap();
        walk(&mut state, Direction::Up, 6);

        let restored = decode(&encode(&state), BOARD_SIZE).unwrap();
        assert_eq!(restored.grid(), state.grid());
        assert_eq!(restored.money(), state.money());
        assert_eq!(restored.lever_map(), state.lever_map());
        assert_eq!(restored.player(), state.player());
        assert_single_player(&restored);
    }
}
