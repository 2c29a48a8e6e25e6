//! Reading boards from text and printing solutions.
//!
//! A board is given as a stream of whitespace separated integers:
//! the dimension N followed by N² tiles in row-major order, with `0` standing for the blank.

use std::fmt;
use std::io::Read;
use crate::board::Board;
use crate::error::BoardError;
use crate::solver::Solver;

fn parse_token<T: std::str::FromStr>(token: &str) -> Result<T, BoardError> {
    token.parse().map_err(|_| BoardError::InvalidToken(token.to_owned()))
}

/// Parses the board from `text`. Tokens after the last tile are not allowed.
pub fn parse_board(text: &str) -> Result<Board, BoardError> {
    let mut tokens = text.split_whitespace();
    let dimension: usize = parse_token(tokens.next().ok_or(BoardError::MissingDimension)?)?;
    let size = dimension.saturating_mul(dimension);
    let tiles = tokens.by_ref().take(size).map(parse_token).collect::<Result<Vec<u32>, _>>()?;
    if let Some(extra) = tokens.next() {
        return Err(BoardError::TrailingToken(extra.to_owned()));
    }
    Board::new(dimension, tiles)
}

/// Reads the whole `input` and parses the board from it.
pub fn read_board<R: Read>(mut input: R) -> Result<Board, BoardError> {
    let mut text = String::new();
    input.read_to_string(&mut text)?;
    parse_board(&text)
}

/// Printable result of the solver: either the `No solution possible` line, or the number of moves
/// followed by all boards of the solution, separated by empty lines.
pub struct Report<'s>(pub &'s Solver);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(solution) = self.0.solution() else {
            return writeln!(f, "No solution possible");
        };
        write!(f, "Minimum number of moves = {}", solution.len() - 1)?;
        for board in solution {
            write!(f, "\n\n{}", board)?;
        }
        writeln!(f)
    }
}

/// Returns text of the [`Report`] for `solver`.
#[inline] pub fn render_solution(solver: &Solver) -> String {
    Report(solver).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_board() {
        let board = parse_board("3\n 0  1  3\n 4  2  5\n 7  8  6\n").unwrap();
        assert_eq!(board, Board::new(3, vec![0, 1, 3, 4, 2, 5, 7, 8, 6]).unwrap());
        assert_eq!(parse_board("2 1 2 3 0").unwrap(), Board::goal(2));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse_board(""), Err(BoardError::MissingDimension)));
        assert!(matches!(parse_board("  \n"), Err(BoardError::MissingDimension)));
        assert!(matches!(parse_board("x 1 2 3 0"), Err(BoardError::InvalidToken(t)) if t == "x"));
        assert!(matches!(parse_board("2 1 -2 3 0"), Err(BoardError::InvalidToken(t)) if t == "-2"));
        assert!(matches!(parse_board("2 1 2 3"), Err(BoardError::NotSquare { expected: 4, found: 3, .. })));
        assert!(matches!(parse_board("2 1 2 3 0 4"), Err(BoardError::TrailingToken(t)) if t == "4"));
        assert!(matches!(parse_board("2 1 2 2 0"), Err(BoardError::DuplicateTile(2))));
        assert!(matches!(parse_board("2 1 2 7 0"), Err(BoardError::TileOutOfRange { tile: 7, max: 3 })));
        assert!(matches!(parse_board("0"), Err(BoardError::Empty)));
    }

    #[test]
    fn test_read_board() {
        let board = read_board("3 1 2 3 4 5 6 7 0 8".as_bytes()).unwrap();
        assert_eq!(board.blank_position(), (2, 1));
    }

    #[test]
    fn test_from_str() {
        let board: Board = "1 0".parse().unwrap();
        assert!(board.is_goal());
    }

    #[test]
    fn test_render_unsolvable() {
        let solver = Solver::new(parse_board("3  1 2 3  4 5 6  8 7 0").unwrap());
        assert_eq!(render_solution(&solver), "No solution possible\n");
    }

    #[test]
    fn test_render_goal() {
        let solver = Solver::new(Board::goal(2));
        assert_eq!(render_solution(&solver), "Minimum number of moves = 0\n\n2\n 1  2\n 3  0\n");
    }
}
