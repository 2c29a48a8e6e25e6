use thiserror::Error;

/// Error returned when a board cannot be constructed or read.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("board must have at least one cell")]
    Empty,

    #[error("{dimension}x{dimension} board needs {expected} tiles, got {found}")]
    NotSquare { dimension: usize, expected: usize, found: usize },

    #[error("tile {tile} is out of range 0..={max}")]
    TileOutOfRange { tile: u32, max: usize },

    #[error("tile {0} occurs more than once")]
    DuplicateTile(u32),

    #[error("missing board dimension")]
    MissingDimension,

    #[error("invalid token '{0}'")]
    InvalidToken(String),

    #[error("unexpected token '{0}' after the last tile")]
    TrailingToken(String),

    #[error("failed to read board: {0}")]
    Io(#[from] std::io::Error),
}
