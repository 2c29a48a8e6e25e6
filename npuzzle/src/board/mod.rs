pub mod neighbors;
pub mod heuristic;
pub mod scramble;

use std::fmt;
use std::iter::FusedIterator;
use std::str::FromStr;
use arrayvec::ArrayVec;
use crate::error::BoardError;
use self::neighbors::{cell_nr, cell_coords, neighbors_of, are_adjacent};
use self::heuristic::{hamming_distance, manhattan_distance};

/// Immutable arrangement of tiles on the `dimension` x `dimension` board.
///
/// Cells are numbered row-major. Tile `0` denotes the blank.
/// Every transformation (slide, swap, twin) returns a new board.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Board {
    dimension: usize,
    /// Indexed by cell numbers, gives tiles that occupy given cell.
    tiles: Box<[u32]>,
    /// Cell occupied by the blank (to speed up operations).
    blank: usize
}

impl Board {
    /// Constructs the board with given `dimension` from `tiles` listed in row-major order.
    ///
    /// Fails unless `tiles` contains each number in `0..dimension²` exactly once.
    pub fn new(dimension: usize, tiles: Vec<u32>) -> Result<Self, BoardError> {
        if dimension == 0 { return Err(BoardError::Empty); }
        let expected = dimension.checked_mul(dimension)
            .ok_or(BoardError::NotSquare { dimension, expected: usize::MAX, found: tiles.len() })?;
        if tiles.len() != expected {
            return Err(BoardError::NotSquare { dimension, expected, found: tiles.len() });
        }
        let mut seen = vec![false; expected];
        for &tile in &tiles {
            let seen_tile = seen.get_mut(tile as usize)
                .ok_or(BoardError::TileOutOfRange { tile, max: expected - 1 })?;
            if *seen_tile { return Err(BoardError::DuplicateTile(tile)); }
            *seen_tile = true;
        }
        // every number occurs once, so does the blank
        let blank = tiles.iter().position(|&t| t == 0).ok_or(BoardError::TileOutOfRange { tile: 0, max: expected - 1 })?;
        Ok(Self { dimension, tiles: tiles.into_boxed_slice(), blank })
    }

    /// Constructs the board from its rows. Fails if `rows` do not form a square.
    pub fn from_rows<R: AsRef<[u32]>>(rows: &[R]) -> Result<Self, BoardError> {
        let dimension = rows.len();
        if let Some(row) = rows.iter().find(|r| r.as_ref().len() != dimension) {
            return Err(BoardError::NotSquare { dimension, expected: dimension, found: row.as_ref().len() });
        }
        Self::new(dimension, rows.iter().flat_map(|r| r.as_ref().iter().copied()).collect())
    }

    /// Constructs the goal board: tiles `1..dimension²` in row-major order followed by the blank.
    ///
    /// # Panics
    ///
    /// Panics if `dimension` is `0`.
    pub fn goal(dimension: usize) -> Self {
        assert!(dimension > 0, "board must have at least one cell");
        let size = dimension * dimension;
        let tiles = (1..size as u32).chain(std::iter::once(0)).collect();
        Self { dimension, tiles, blank: size - 1 }
    }

    /// Returns board dimension N.
    #[inline] pub fn dimension(&self) -> usize { self.dimension }

    /// Returns number of cells, N².
    #[inline] pub fn size(&self) -> usize { self.tiles.len() }

    /// Returns the tile at given row and column.
    #[inline] pub fn tile_at(&self, row: usize, col: usize) -> u32 {
        self.tiles[cell_nr(self.dimension, col, row)]
    }

    /// Returns the tile in given `cell`.
    #[inline] pub fn tile_at_cell(&self, cell: usize) -> u32 { self.tiles[cell] }

    /// Returns the cell occupied by the blank.
    #[inline] pub fn blank_cell(&self) -> usize { self.blank }

    /// Returns (row, col) of the blank.
    #[inline] pub fn blank_position(&self) -> (usize, usize) {
        let (col, row) = cell_coords(self.dimension, self.blank);
        (row, col)
    }

    /// Returns tiles in row-major order.
    #[inline] pub fn iter(&self) -> impl ExactSizeIterator<Item=u32> + '_ {
        self.tiles.iter().copied()
    }

    /// Returns rows of the board.
    #[inline] pub fn rows(&self) -> std::slice::Chunks<'_, u32> {
        self.tiles.chunks(self.dimension)
    }

    /// Returns number of tiles out of their goal cells.
    #[inline] pub fn hamming(&self) -> usize { hamming_distance(self) }

    /// Returns sum of Manhattan distances between tiles and their goal cells.
    #[inline] pub fn manhattan(&self) -> usize { manhattan_distance(self) }

    /// Checks whether this is the goal board.
    #[inline] pub fn is_goal(&self) -> bool { self.hamming() == 0 }

    /// Returns the board with contents of cells `a` and `b` exchanged.
    pub fn swap(&self, a: usize, b: usize) -> Self {
        let mut tiles = self.tiles.clone();
        tiles.swap(a, b);
        let blank = if self.blank == a { b } else if self.blank == b { a } else { self.blank };
        Self { dimension: self.dimension, tiles, blank }
    }

    /// Returns the board obtained by sliding the tile from `cell` into the blank.
    /// `cell` must be adjacent to the blank.
    pub fn slide(&self, cell: usize) -> Self {
        debug_assert!(are_adjacent(self.dimension, cell, self.blank));
        self.swap(cell, self.blank)
    }

    /// Returns all boards reachable by one slide, in order in which the blank moves: up, down, left, right.
    ///
    /// The returned iterator is lazy, and a new one can be obtained at any time.
    pub fn neighbors(&self) -> Neighbors<'_> {
        Neighbors { board: self, cells: neighbors_of(self.dimension, self.blank), next: 0 }
    }

    /// Checks whether `other` is reachable from `self` by exactly one slide.
    pub fn is_neighbor_of(&self, other: &Board) -> bool {
        self.dimension == other.dimension
            && are_adjacent(self.dimension, self.blank, other.blank)
            && self.slide(other.blank) == *other
    }

    /// Returns the board with two horizontally adjacent non-blank tiles exchanged.
    ///
    /// The leftmost such pair of the topmost row that has one is swapped.
    /// The twin is solvable iff `self` is not. For 1 x 1 board an unchanged copy is returned.
    pub fn twin(&self) -> Self {
        let n = self.dimension;
        for row in 0..n {
            for col in 1..n {
                let (left, right) = (cell_nr(n, col-1, row), cell_nr(n, col, row));
                if self.tiles[left] != 0 && self.tiles[right] != 0 {
                    return self.swap(left, right);
                }
            }
        }
        self.clone()
    }
}

/// Lazy iterator over neighbors of a board, see [`Board::neighbors`].
#[derive(Clone)]
pub struct Neighbors<'b> {
    board: &'b Board,
    cells: ArrayVec<usize, 4>,
    next: usize
}

impl Iterator for Neighbors<'_> {
    type Item = Board;

    fn next(&mut self) -> Option<Self::Item> {
        let cell = *self.cells.get(self.next)?;
        self.next += 1;
        Some(self.board.slide(cell))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.cells.len() - self.next;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Neighbors<'_> {}

impl FusedIterator for Neighbors<'_> {}

/// Dimension line followed by rows, with each tile printed in two-character column.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dimension)?;
        for row in self.rows() {
            writeln!(f)?;
            for (i, tile) in row.iter().enumerate() {
                if i != 0 { write!(f, " ")?; }
                write!(f, "{:2}", tile)?;
            }
        }
        Ok(())
    }
}

/// Parses the board from the token stream: the dimension followed by tiles in row-major order.
impl FromStr for Board {
    type Err = BoardError;

    #[inline] fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::io::parse_board(s)
    }
}

impl TryFrom<Vec<Vec<u32>>> for Board {
    type Error = BoardError;

    #[inline] fn try_from(rows: Vec<Vec<u32>>) -> Result<Self, Self::Error> {
        Self::from_rows(&rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(dimension: usize, tiles: &[u32]) -> Board {
        Board::new(dimension, tiles.to_vec()).unwrap()
    }

    #[test]
    fn test_new_33() {
        let b = board(3, &[4, 7, 0,  2, 3, 6,  8, 1, 5]);
        assert_eq!(b.dimension(), 3);
        assert_eq!(b.size(), 9);
        assert_eq!(b.tile_at(0, 0), 4);
        assert_eq!(b.tile_at(0, 2), 0);
        assert_eq!(b.tile_at(1, 0), 2);
        assert_eq!(b.tile_at(2, 1), 1);
        assert_eq!(b.blank_cell(), 2);
        assert_eq!(b.blank_position(), (0, 2));
        assert_eq!(b.iter().collect::<Vec<_>>(), &[4, 7, 0, 2, 3, 6, 8, 1, 5]);
    }

    #[test]
    fn test_invalid_boards() {
        assert!(matches!(Board::new(0, vec![]), Err(BoardError::Empty)));
        assert!(matches!(Board::new(2, vec![1, 2, 0]),
            Err(BoardError::NotSquare { dimension: 2, expected: 4, found: 3 })));
        assert!(matches!(Board::new(2, vec![1, 2, 3, 4]), Err(BoardError::TileOutOfRange { tile: 4, max: 3 })));
        assert!(matches!(Board::new(2, vec![1, 1, 3, 0]), Err(BoardError::DuplicateTile(1))));
        assert!(matches!(Board::from_rows(&[vec![1, 2], vec![3]]), Err(BoardError::NotSquare { .. })));
        assert!(matches!(Board::from_rows(&[vec![1, 2, 0], vec![3, 4, 5]]), Err(BoardError::NotSquare { .. })));
    }

    #[test]
    fn test_from_rows() {
        let b = Board::try_from(vec![vec![1, 2], vec![0, 3]]).unwrap();
        assert_eq!(b, board(2, &[1, 2, 0, 3]));
        assert_eq!(b.rows().collect::<Vec<_>>(), vec![&[1, 2][..], &[0, 3][..]]);
    }

    #[test]
    fn test_goal() {
        let goal = Board::goal(3);
        assert_eq!(goal, board(3, &[1, 2, 3,  4, 5, 6,  7, 8, 0]));
        assert!(goal.is_goal());
        assert_eq!(goal.blank_cell(), 8);
        assert!(Board::goal(1).is_goal());
        assert!(!board(3, &[1, 2, 3,  4, 5, 6,  7, 0, 8]).is_goal());
    }

    #[test]
    fn test_equality() {
        assert_eq!(board(2, &[1, 2, 3, 0]), Board::goal(2));
        assert_ne!(board(2, &[1, 2, 0, 3]), Board::goal(2));
        assert_ne!(Board::goal(2), Board::goal(3));
    }

    #[test]
    fn test_neighbors_center() {
        let b = board(3, &[1, 2, 3,  4, 0, 5,  6, 7, 8]);
        let neighbors: Vec<_> = b.neighbors().collect();
        assert_eq!(neighbors, vec![
            board(3, &[1, 0, 3,  4, 2, 5,  6, 7, 8]),   // up
            board(3, &[1, 2, 3,  4, 7, 5,  6, 0, 8]),   // down
            board(3, &[1, 2, 3,  0, 4, 5,  6, 7, 8]),   // left
            board(3, &[1, 2, 3,  4, 5, 0,  6, 7, 8]),   // right
        ]);
        assert_eq!(b.neighbors().len(), 4);
        // restartable, and the source stays unchanged
        assert_eq!(b.neighbors().collect::<Vec<_>>(), neighbors);
        assert_eq!(b, board(3, &[1, 2, 3,  4, 0, 5,  6, 7, 8]));
    }

    #[test]
    fn test_neighbors_corner_and_edge() {
        assert_eq!(Board::goal(3).neighbors().count(), 2);
        assert_eq!(board(3, &[1, 0, 3,  4, 2, 5,  6, 7, 8]).neighbors().count(), 3);
        assert_eq!(Board::goal(1).neighbors().count(), 0);
        for n in board(3, &[1, 0, 3,  4, 2, 5,  6, 7, 8]).neighbors() {
            assert!(n.is_neighbor_of(&board(3, &[1, 0, 3,  4, 2, 5,  6, 7, 8])));
        }
    }

    #[test]
    fn test_is_neighbor_of() {
        let goal = Board::goal(3);
        assert!(board(3, &[1, 2, 3,  4, 5, 6,  7, 0, 8]).is_neighbor_of(&goal));
        assert!(goal.is_neighbor_of(&board(3, &[1, 2, 3,  4, 5, 0,  7, 8, 6])));
        assert!(!goal.is_neighbor_of(&goal));
        assert!(!goal.is_neighbor_of(&board(3, &[1, 2, 3,  4, 5, 6,  0, 7, 8])));   // two slides
        assert!(!goal.is_neighbor_of(&goal.twin()));
        assert!(!goal.is_neighbor_of(&Board::goal(2)));
    }

    #[test]
    fn test_twin() {
        assert_eq!(Board::goal(3).twin(), board(3, &[2, 1, 3,  4, 5, 6,  7, 8, 0]));
        assert_eq!(board(3, &[0, 1, 3,  4, 2, 5,  7, 8, 6]).twin(), board(3, &[0, 3, 1,  4, 2, 5,  7, 8, 6]));
        assert_eq!(board(2, &[0, 1,  2, 3]).twin(), board(2, &[0, 1,  3, 2]));
        assert_eq!(board(2, &[1, 0,  2, 3]).twin(), board(2, &[1, 0,  3, 2]));
        assert_eq!(Board::goal(1).twin(), Board::goal(1));
    }

    #[test]
    fn test_twin_is_self_inverse() {
        for b in [board(3, &[8, 1, 3,  4, 0, 2,  7, 6, 5]), board(2, &[0, 3,  2, 1]), Board::goal(4)] {
            assert_ne!(b.twin(), b);
            assert_eq!(b.twin().twin(), b);
        }
    }

    #[test]
    fn test_swap_moves_blank() {
        let b = board(2, &[1, 2,  3, 0]).swap(3, 0);
        assert_eq!(b.blank_cell(), 0);
        assert_eq!(b, board(2, &[0, 2,  3, 1]));
    }

    #[test]
    fn test_display() {
        let b = board(3, &[8, 1, 3,  4, 0, 2,  7, 6, 5]);
        assert_eq!(b.to_string(), "3\n 8  1  3\n 4  0  2\n 7  6  5");
        assert_eq!(board(4, &[1, 2, 3, 4,  5, 6, 7, 8,  9, 10, 11, 12,  13, 14, 15, 0]).to_string(),
                   "4\n 1  2  3  4\n 5  6  7  8\n 9 10 11 12\n13 14 15  0");
    }

    #[test]
    fn test_display_line_format() {
        assert_eq!(Board::goal(2).to_string(), "2\n 1  2\n 3  0");
        let rendered = Board::goal(4).to_string();
        assert_eq!(rendered.lines().count(), 5);
        for line in rendered.lines().skip(1) {
            assert!(!line.ends_with(' '), "line {:?} ends with a space", line);
            assert_eq!(line.len(), 4 * 2 + 3);
        }
        assert!(!rendered.ends_with('\n'));
    }

    #[test]
    #[should_panic(expected = "board must have at least one cell")]
    fn test_goal_empty_panics() {
        Board::goal(0);
    }

    #[test]
    fn test_display_round_trip() {
        let b = board(3, &[8, 1, 3,  4, 0, 2,  7, 6, 5]);
        assert_eq!(b.to_string().parse::<Board>().unwrap(), b);
    }
}
