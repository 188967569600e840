//! Save-file encoding and the on-disk save store.
//!
//! Layout of a save, one item per line:
//!
//! ```text
//! <all rows concatenated, row-major>
//! <currency>
//! Lever map start
//! <lever row>,<lever col>:<gate row>,<gate col>
//! ...
//! Lever map end
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::config::server::{MAX_SAVE_NAME_LEN, SAVE_EXTENSION};
use crate::game::error::{FormatError, GameError};
use crate::game::grid::Grid;
use crate::game::state::{GameState, LeverMap};
use crate::game::types::{Point, Tile};

const LEVER_MAP_START: &str = "Lever map start";
const LEVER_MAP_END: &str = "Lever map end";

/// Encodes `state` as save text. No validation is performed.
pub fn encode(state: &GameState) -> String {
    let mut out: String = state.grid.row_strings().concat();
    out.push('\n');
    out.push_str(&state.money.to_string());
    out.push('\n');
    out.push_str(LEVER_MAP_START);

    let mut links: Vec<_> = state.lever_map.iter().collect();
    links.sort();
    for (lever, gate) in links {
        out.push_str(&format!("\n{},{}:{},{}", lever.row, lever.col, gate.row, gate.col));
    }

    out.push('\n');
    out.push_str(LEVER_MAP_END);
    out
}

/// Decodes save text for a `size` x `size` board. The player position is
/// recovered by scanning the grid for its tile.
pub fn decode(text: &str, size: usize) -> Result<GameState, FormatError> {
    let mut lines = text.lines().map(|line| line.trim_end_matches('\r'));

    let tiles_line = lines.next().filter(|l| !l.is_empty()).ok_or(FormatError::Empty)?;
    let grid = decode_grid(tiles_line, size)?;

    let player = {
        let mut players = grid.positions_of(Tile::Player);
        let player = players.next().ok_or(FormatError::MissingPlayer)?;
        if players.next().is_some() {
            return Err(FormatError::DuplicatePlayer);
        }
        player
    };

    let money_line = lines.next().unwrap_or_default();
    let money = money_line
        .trim()
        .parse::<u32>()
        .map_err(|_| FormatError::BadCurrency(money_line.to_string()))?;

    if lines.next() != Some(LEVER_MAP_START) {
        return Err(FormatError::MissingLeverMapStart);
    }

    let mut lever_map = LeverMap::new();
    loop {
        match lines.next() {
            None => return Err(FormatError::MissingLeverMapEnd),
            Some(LEVER_MAP_END) => break,
            Some(line) => {
                let (lever, gate) = decode_lever_entry(line, &grid)?;
                lever_map.insert(lever, gate);
            }
        }
    }

    Ok(GameState::from_parts(grid, money, lever_map, player))
}

fn decode_grid(line: &str, size: usize) -> Result<Grid, FormatError> {
    let codes: Vec<char> = line.chars().collect();
    if codes.len() != size * size {
        return Err(FormatError::TileCount { expected: size * size, found: codes.len() });
    }

    let rows = codes
        .chunks(size)
        .map(|chunk| {
            chunk
                .iter()
                .map(|&c| Tile::from_code(c).ok_or(FormatError::UnknownTile(c)))
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Grid::from_rows(rows))
}

fn decode_lever_entry(line: &str, grid: &Grid) -> Result<(Point, Point), FormatError> {
    let bad_entry = || FormatError::BadLeverEntry(line.to_string());

    let (lever, gate) = line.split_once(':').ok_or_else(bad_entry)?;
    let lever = decode_point(lever).ok_or_else(bad_entry)??;
    let gate = decode_point(gate).ok_or_else(bad_entry)??;

    if !grid.contains(lever) || !grid.contains(gate) {
        return Err(bad_entry());
    }
    Ok((lever, gate))
}

/// `None` when the text has no `,` separator.
fn decode_point(text: &str) -> Option<Result<Point, FormatError>> {
    let (row, col) = text.split_once(',')?;
    let coord = |part: &str| {
        part.trim()
            .parse::<i32>()
            .map_err(|_| FormatError::BadCoordinate(part.to_string()))
    };
    Some(coord(row).and_then(|row| Ok(Point::new(row, coord(col)?))))
}

/// Directory of save files, one `<name>.txt` per save.
#[derive(Debug, Clone)]
pub struct SaveStore {
    dir: PathBuf,
}

impl SaveStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Resolves a save name to its file, rejecting anything that could
    /// escape the save directory.
    pub fn path_for(&self, name: &str) -> Result<PathBuf, GameError> {
        let valid = !name.is_empty()
            && name.len() <= MAX_SAVE_NAME_LEN
            && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(GameError::InvalidSaveName(name.to_string()));
        }
        Ok(self.dir.join(format!("{name}.{SAVE_EXTENSION}")))
    }

    /// Writes save text, creating the save directory when missing.
    pub fn write(&self, name: &str, contents: &str) -> Result<(), GameError> {
        let path = self.path_for(name)?;
        fs::create_dir_all(&self.dir)?;
        fs::write(&path, contents)?;
        info!("[SaveStore] Wrote {}", path.display());
        Ok(())
    }

    pub fn read(&self, name: &str) -> Result<String, GameError> {
        let path = self.path_for(name)?;
        let contents = fs::read_to_string(&path)?;
        debug!("[SaveStore] Read {} ({} bytes)", path.display(), contents.len());
        Ok(contents)
    }
}
