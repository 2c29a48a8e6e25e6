#![doc = include_str!("../README.md")]

pub mod board;
pub mod error;
pub mod io;
pub mod queue;
pub mod solver;
pub mod stats;

pub use board::Board;
pub use error::BoardError;
pub use solver::{Solver, SolverConfig};
