use crate::board::Board;
use crate::board::neighbors::cell_coords;

/// Returns the cell that `tile` occupies in the goal board or `None` for the blank.
///
/// Tiles of the goal board are ordered row-major from 1, and the blank occupies the last cell.
#[inline] pub fn goal_cell(tile: u32) -> Option<usize> {
    (tile != 0).then(|| tile as usize - 1)
}

/// Returns Manhattan distance between cells `a` and `b` of the board with given `dimension`.
#[inline] pub fn cell_distance(dimension: usize, a: usize, b: usize) -> usize {
    let (ac, ar) = cell_coords(dimension, a);
    let (bc, br) = cell_coords(dimension, b);
    ac.abs_diff(bc) + ar.abs_diff(br)
}

/// Returns distance of `tile` placed in `cell` to its goal cell (`0` for the blank).
#[inline] pub fn tile_distance(dimension: usize, tile: u32, cell: usize) -> usize {
    goal_cell(tile).map_or(0, |goal| cell_distance(dimension, cell, goal))
}

/// Returns number of tiles (blank excluded) which are not in their goal cells.
pub fn hamming_distance(board: &Board) -> usize {
    board.iter().enumerate().filter(|&(cell, tile)| goal_cell(tile).map_or(false, |goal| goal != cell)).count()
}

/// Returns sum of distances of all tiles (blank excluded) to their goal cells.
pub fn manhattan_distance(board: &Board) -> usize {
    let dimension = board.dimension();
    board.iter().enumerate().map(|(cell, tile)| tile_distance(dimension, tile, cell)).sum()
}

/// Returns Manhattan distance of the board obtained by moving `tile` from cell `from` to cell `to`,
/// given the distance `old_value` of the board before the move.
#[inline(always)] pub fn update_manhattan(dimension: usize, old_value: usize, tile: u32, from: usize, to: usize) -> usize {
    old_value
        - tile_distance(dimension, tile, from)
        + tile_distance(dimension, tile, to)
}
