//! Bulls and Cows Solver
//!
//! Breaks Bulls-and-Cows (XAYB) codes by candidate elimination: every guess
//! prunes the codes that could not have produced the observed hint.
//!
//! # Quick Start
//!
//! ```rust
//! use bulls_cows::core::{Code, Hint, check_similarity};
//!
//! // Create codes
//! let guess = Code::new("4589").unwrap();
//! let answer = Code::new("5049").unwrap();
//!
//! // Calculate the hint
//! let hint = Hint::calculate(&guess, &answer);
//! assert_eq!(hint.to_string(), "1A2B");
//!
//! // Hints parse from their XAYB form
//! let hint: Hint = "1A3B".parse().unwrap();
//! let candidate = Code::new("3241").unwrap();
//! assert!(check_similarity(&Code::new("1234").unwrap(), &candidate, hint));
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Session configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

mod error;

pub use error::{Error, Result};
