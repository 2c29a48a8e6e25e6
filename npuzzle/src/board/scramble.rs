use rand::Rng;
use rand::seq::SliceRandom;
use crate::board::Board;
use crate::board::neighbors::neighbors_of;

/// Returns random, solvable board obtained from the goal by a random walk of the blank.
///
/// The walk makes `steps` attempts, and an attempt which would undo the previous slide is skipped,
/// so the number of slides made is random as well.
///
/// # Panics
///
/// Panics if `dimension` is `0`.
pub fn scrambled<R: Rng + ?Sized>(dimension: usize, steps: usize, rng: &mut R) -> Board {
    let mut board = Board::goal(dimension);
    let mut prev_blank = usize::MAX;
    for _ in 0..steps {
        let blank = board.blank_cell();
        let Some(&new_blank) = neighbors_of(dimension, blank).choose(rng) else { break };
        if new_blank == prev_blank { continue; }
        prev_blank = blank;
        board = board.slide(new_blank);
    }
    board
}

/// Returns board with tiles uniformly shuffled. Exactly half of such boards are solvable.
///
/// # Panics
///
/// Panics if `dimension` is `0`.
pub fn shuffled<R: Rng + ?Sized>(dimension: usize, rng: &mut R) -> Board {
    assert!(dimension > 0, "board must have at least one cell");
    let size = dimension * dimension;
    let mut tiles: Vec<u32> = (0..size as u32).collect();
    tiles.shuffle(rng);
    match Board::new(dimension, tiles) {
        Ok(board) => board,
        Err(_) => unreachable!("a permutation of 0..{} is a valid board", size)
    }
}
