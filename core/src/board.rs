// SPDX-License-Identifier: MIT OR Apache-2.0

//! Board representation and manipulation

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Color, Coord, BOARD_SIZE};

/// Contents of a single cell; `None` is empty
pub type Cell = Option<Color>;

/// Black half of the starting layout, rows 1..=7 (0-based).
/// White's half is the same rows mirrored across the horizontal midline.
const BLACK_HALF: [&str; 7] = [
    "..B.B.BBBBBBBB.B.B..",
    ".BBB.B.BBBB.B.B.BBB.",
    "..B.B.BBBBBBBB.B.B..",
    "....................",
    "....................",
    "..B..B..B..B..B..B..",
    "....................",
];

/// Problems building a board from a text diagram
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DiagramError {
    /// The diagram does not have exactly 20 rows
    #[error("Expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },

    /// A row is not exactly 20 cells wide
    #[error("Row {row} has {found} cells, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A cell symbol other than `B`, `W`, `.` or space
    #[error("Unknown symbol {symbol:?} at row {row}, column {col}")]
    UnknownSymbol { row: usize, col: usize, symbol: char },
}

/// The 20x20 Gess board
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board
    pub fn empty() -> Self {
        let size = BOARD_SIZE as usize;
        Self {
            cells: vec![None; size * size],
        }
    }

    /// Create the board every game starts from
    pub fn starting() -> Self {
        let mut board = Self::empty();
        for (i, row) in BLACK_HALF.iter().enumerate() {
            let y = i as u8 + 1;
            let mirrored = BOARD_SIZE - 1 - y;
            for (x, symbol) in row.bytes().enumerate() {
                if symbol == b'B' {
                    board.set(Coord::new(x as u8, y), Some(Color::Black));
                    board.set(Coord::new(x as u8, mirrored), Some(Color::White));
                }
            }
        }
        board
    }

    /// Build a board from 20 rows of 20 symbols each.
    ///
    /// `B` is a black stone, `W` a white stone, `.` or a space is empty.
    /// The first row is row `1` in notation.
    pub fn from_diagram(rows: &[&str]) -> Result<Self, DiagramError> {
        let size = BOARD_SIZE as usize;
        if rows.len() != size {
            return Err(DiagramError::RowCount {
                expected: size,
                found: rows.len(),
            });
        }

        let mut board = Self::empty();
        for (y, row) in rows.iter().enumerate() {
            let symbols: Vec<char> = row.chars().collect();
            if symbols.len() != size {
                return Err(DiagramError::RowLength {
                    row: y,
                    expected: size,
                    found: symbols.len(),
                });
            }
            for (x, symbol) in symbols.into_iter().enumerate() {
                let cell = match symbol {
                    'B' | 'b' => Some(Color::Black),
                    'W' | 'w' => Some(Color::White),
                    '.' | ' ' => None,
                    other => {
                        return Err(DiagramError::UnknownSymbol {
                            row: y,
                            col: x,
                            symbol: other,
                        })
                    }
                };
                board.set(Coord::new(x as u8, y as u8), cell);
            }
        }
        Ok(board)
    }

    /// Get the cell at the specified coordinate; off-board reads as empty
    pub fn get(&self, coord: Coord) -> Cell {
        if !coord.is_valid() {
            return None;
        }
        self.cells
            .get(Self::coord_to_index(coord))
            .copied()
            .flatten()
    }

    /// Overwrite the cell at the specified coordinate
    pub fn set(&mut self, coord: Coord, cell: Cell) {
        if !coord.is_valid() {
            return;
        }
        if let Some(slot) = self.cells.get_mut(Self::coord_to_index(coord)) {
            *slot = cell;
        }
    }

    /// Empty the cell at the specified coordinate.
    ///
    /// Returns the stone that was removed, if any.
    pub fn remove(&mut self, coord: Coord) -> Cell {
        let previous = self.get(coord);
        self.set(coord, None);
        previous
    }

    /// The nine cells around `center`, row by row from the north-west corner.
    /// Cells that fall off the board read as empty.
    pub fn neighborhood(&self, center: Coord) -> [Cell; 9] {
        std::array::from_fn(|i| {
            let delta = ((i % 3) as i8 - 1, (i / 3) as i8 - 1);
            center.offset(delta).and_then(|c| self.get(c))
        })
    }

    /// The cells of one board row, west to east
    pub fn row(&self, y: u8) -> &[Cell] {
        let size = BOARD_SIZE as usize;
        let start = y as usize * size;
        self.cells.get(start..start + size).unwrap_or(&[])
    }

    /// Count the stones of one color on the whole board
    pub fn count_stones(&self, color: Color) -> usize {
        self.cells.iter().filter(|c| **c == Some(color)).count()
    }

    /// Whether every cell of the edge band is empty
    pub fn edges_clear(&self) -> bool {
        edge_coords().all(|c| self.get(c).is_none())
    }

    /// Render as 20 diagram rows, the inverse of [`Board::from_diagram`]
    pub fn to_diagram(&self) -> Vec<String> {
        (0..BOARD_SIZE)
            .map(|y| {
                self.row(y)
                    .iter()
                    .map(|cell| match cell {
                        Some(Color::Black) => 'B',
                        Some(Color::White) => 'W',
                        None => '.',
                    })
                    .collect()
            })
            .collect()
    }

    fn coord_to_index(coord: Coord) -> usize {
        (coord.y as usize) * (BOARD_SIZE as usize) + (coord.x as usize)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for line in self.to_diagram() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Every coordinate in the edge band
pub fn edge_coords() -> impl Iterator<Item = Coord> {
    all_coords().filter(|c| c.is_edge())
}

/// Every coordinate that may hold a cluster or ring center
pub fn interior_coords() -> impl Iterator<Item = Coord> {
    all_coords().filter(|c| c.is_interior())
}

fn all_coords() -> impl Iterator<Item = Coord> {
    (0..BOARD_SIZE).flat_map(|y| (0..BOARD_SIZE).map(move |x| Coord::new(x, y)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_has_no_stones() {
        let board = Board::empty();
        assert_eq!(board.count_stones(Color::Black), 0);
        assert_eq!(board.count_stones(Color::White), 0);
        assert!(board.edges_clear());
    }

    #[test]
    fn starting_layout_is_mirrored() {
        let board = Board::starting();
        assert_eq!(board.count_stones(Color::Black), 43);
        assert_eq!(board.count_stones(Color::White), 43);
        assert!(board.edges_clear());

        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                let here = board.get(Coord::new(x, y));
                let there = board.get(Coord::new(x, BOARD_SIZE - 1 - y));
                assert_eq!(here.map(|c| c.opposite()), there);
            }
        }
    }

    #[test]
    fn starting_layout_spot_checks() {
        let board = Board::starting();
        // c3 is a full plus-shaped cluster
        assert_eq!(board.get(Coord::new(2, 2)), Some(Color::Black));
        assert_eq!(board.get(Coord::new(1, 2)), Some(Color::Black));
        assert_eq!(board.get(Coord::new(2, 1)), Some(Color::Black));
        assert_eq!(board.get(Coord::new(1, 1)), None);
        // l3 is the empty middle of Black's ring
        assert_eq!(board.get(Coord::new(11, 2)), None);
        assert_eq!(board.get(Coord::new(11, 17)), None);
        assert_eq!(board.get(Coord::new(2, 13)), Some(Color::White));
    }

    #[test]
    fn get_set_remove() {
        let mut board = Board::empty();
        let c = Coord::new(4, 4);
        board.set(c, Some(Color::White));
        assert_eq!(board.get(c), Some(Color::White));
        assert_eq!(board.remove(c), Some(Color::White));
        assert_eq!(board.get(c), None);
        assert_eq!(board.get(Coord::new(30, 1)), None);
    }

    #[test]
    fn diagram_round_trip() {
        let board = Board::starting();
        let rows = board.to_diagram();
        let refs: Vec<&str> = rows.iter().map(String::as_str).collect();
        assert_eq!(Board::from_diagram(&refs).unwrap(), board);
    }

    #[test]
    fn diagram_errors() {
        assert_eq!(
            Board::from_diagram(&["...."]),
            Err(DiagramError::RowCount {
                expected: 20,
                found: 1
            })
        );

        let mut rows = vec!["...................."; 20];
        rows[3] = "..";
        assert!(matches!(
            Board::from_diagram(&rows),
            Err(DiagramError::RowLength { row: 3, .. })
        ));

        rows[3] = "........X...........";
        assert!(matches!(
            Board::from_diagram(&rows),
            Err(DiagramError::UnknownSymbol {
                row: 3,
                col: 8,
                symbol: 'X'
            })
        ));
    }

    #[test]
    fn neighborhood_reads_all_nine_cells() {
        let board = Board::starting();
        let cells = board.neighborhood(Coord::new(2, 2));
        let black = Some(Color::Black);
        assert_eq!(
            cells,
            [None, black, None, black, black, black, None, black, None]
        );
    }

    #[test]
    fn neighborhood_off_the_board_reads_empty() {
        let mut board = Board::empty();
        board.set(Coord::new(0, 4), Some(Color::White));
        board.set(Coord::new(1, 6), Some(Color::Black));

        let cells = board.neighborhood(Coord::new(0, 5));
        let white = Some(Color::White);
        let black = Some(Color::Black);
        assert_eq!(cells, [None, white, None, None, None, None, None, None, black]);

        assert_eq!(board.neighborhood(Coord::new(19, 19)), [None; 9]);
    }

    #[test]
    fn band_iterators() {
        assert_eq!(edge_coords().count(), 76);
        assert_eq!(interior_coords().count(), 18 * 18);
    }
}
