//! Code-breaking session and guess selection
//!
//! The [`Solver`] runs the guess/eliminate loop; a [`Strategy`] decides which
//! remaining candidate to guess next.

mod engine;
pub mod entropy;
pub mod minimax;
pub mod strategy;

pub use engine::{Solver, SolverState};
pub use strategy::{EntropyStrategy, MinimaxStrategy, RandomStrategy, Strategy, StrategyType};
