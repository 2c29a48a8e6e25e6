use arrayvec::ArrayVec;

/// Direction in which the blank moves (the tile on that side slides into the blank).
pub const UP: usize = 0;
pub const DOWN: usize = 1;
pub const LEFT: usize = 2;
pub const RIGHT: usize = 3;

/// Returns cell number = row-major index of the cell with given (col, row) coordinates in the board with given `dimension`.
#[inline(always)] pub fn cell_nr(dimension: usize, col: usize, row: usize) -> usize { row * dimension + col }

/// Returns (col, row) coordinates of the given `cell`.
#[inline(always)] pub fn cell_coords(dimension: usize, cell: usize) -> (usize, usize) { (cell % dimension, cell / dimension) }

/// Returns iterator over cell numbers of cells with given (col, row) coordinates.
pub fn cell_nrs(dimension: usize, crs: impl IntoIterator<Item=(usize, usize)>) -> impl Iterator<Item=usize> {
    crs.into_iter().map(move |(c, r)| cell_nr(dimension, c, r))
}

/// Returns the neighbor of `cell` in direction `dir` or `None` if `cell` lies on that edge of the board.
pub fn neighbor_in(dimension: usize, cell: usize, dir: usize) -> Option<usize> {
    let (c, r) = cell_coords(dimension, cell);
    match dir {
        UP => (r != 0).then(|| cell_nr(dimension, c, r-1)),
        DOWN => (r+1 != dimension).then(|| cell_nr(dimension, c, r+1)),
        LEFT => (c != 0).then(|| cell_nr(dimension, c-1, r)),
        RIGHT => (c+1 != dimension).then(|| cell_nr(dimension, c+1, r)),
        _ => None
    }
}

/// Returns neighbors (cell numbers) of the given `cell`, in order: up, down, left, right.
pub fn neighbors_of(dimension: usize, cell: usize) -> ArrayVec<usize, 4> {
    let mut result = ArrayVec::<usize, 4>::new();
    for dir in [UP, DOWN, LEFT, RIGHT] {
        if let Some(neighbor) = neighbor_in(dimension, cell, dir) {
            result.push(neighbor);
        }
    }
    result
}

/// Checks whether cells `a` and `b` share an edge.
#[inline] pub fn are_adjacent(dimension: usize, a: usize, b: usize) -> bool {
    let (ac, ar) = cell_coords(dimension, a);
    let (bc, br) = cell_coords(dimension, b);
    ac.abs_diff(bc) + ar.abs_diff(br) == 1
}
