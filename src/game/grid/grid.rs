use crate::game::types::{Point, Tile};

/// Square matrix of tiles. Dimensions never change after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    tiles: Vec<Vec<Tile>>,
}

impl Grid {
    /// A `size` x `size` grid of empty tiles.
    pub fn new(size: usize) -> Self {
        Self { tiles: vec![vec![Tile::Empty; size]; size] }
    }

    /// Builds a grid from already-validated square rows.
    pub(crate) fn from_rows(tiles: Vec<Vec<Tile>>) -> Self {
        debug_assert!(tiles.iter().all(|row| row.len() == tiles.len()));
        Self { tiles }
    }

    pub fn size(&self) -> usize {
        self.tiles.len()
    }

    /// Whether `p` lies inside `[0, size)` on both axes.
    pub fn contains(&self, p: Point) -> bool {
        let size = self.size() as i32;
        (0..size).contains(&p.row) && (0..size).contains(&p.col)
    }

    /// Tile at `p`. Callers bounds-check with [`Grid::contains`] first.
    pub fn value(&self, p: Point) -> Tile {
        self.tiles[p.row as usize][p.col as usize]
    }

    /// Overwrites the tile at `p`. Callers bounds-check with [`Grid::contains`] first.
    pub fn set(&mut self, p: Point, tile: Tile) {
        self.tiles[p.row as usize][p.col as usize] = tile;
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.iter().map(Vec::as_slice)
    }

    /// Every point holding `tile`, in row-major order.
    pub fn positions_of(&self, tile: Tile) -> impl Iterator<Item = Point> + '_ {
        self.tiles.iter().enumerate().flat_map(move |(r, row)| {
            row.iter().enumerate().filter_map(move |(c, cell)| {
                (*cell == tile).then_some(Point::new(r as i32, c as i32))
            })
        })
    }

    /// One string of tile codes per row.
    pub fn row_strings(&self) -> Vec<String> {
        self.rows()
            .map(|row| row.iter().map(|t| t.code()).collect())
            .collect()
    }
}
