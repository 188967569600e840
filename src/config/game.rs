/// Game configuration constants.
///
/// This module defines the fixed level layout: board dimensions, starting
/// positions, the wall column, and the lever/gate pairs that cut through it.
/// Coordinates are `(row, col)`, 0-indexed.

/// Number of rows and columns in the (square) game grid.
pub const BOARD_SIZE: usize = 10;

/// Cell the player starts on.
pub const PLAYER_START: (i32, i32) = (3, 2);

/// Cell holding the single currency marker of the level.
pub const CURRENCY_START: (i32, i32) = (8, 8);

/// Column filled with walls, except where a gate sits.
pub const WALL_COLUMN: i32 = 6;

/// Lever position paired with the gate it controls.
pub const LEVER_GATES: [((i32, i32), (i32, i32)); 2] = [
    ((8, 1), (2, WALL_COLUMN)),
    ((2, 1), (9, WALL_COLUMN)),
];
