use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Solving strategy requested by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Heuristic-guided depth-first backtracking search
    DepthFirst,
    /// Algorithm-X style exact cover; reserved, currently unimplemented
    ExactCover,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::DepthFirst => write!(f, "depth-first"),
            Strategy::ExactCover => write!(f, "exact-cover"),
        }
    }
}

/// Why a solve attempt produced no solution grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The input already breaks a row, column or box constraint
    #[error("puzzle has conflicting givens")]
    InvalidInput,
    /// The givens are consistent but admit no complete assignment
    #[error("puzzle has no solution")]
    NoSolution,
    /// The requested strategy has no implementation
    #[error("{0} solving is not implemented")]
    Unsupported(Strategy),
    /// The search was cut off after the configured number of trial
    /// assignments
    #[error("search exceeded the limit of {0} trial assignments")]
    NodeLimitExceeded(u64),
}
