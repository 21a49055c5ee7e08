use thiserror::Error;

/// Failures raised by the priority queues, the shortest-path solvers and the seam finders.
///
/// Element and vertex payloads are carried as their `Debug` rendering so the enum stays
/// free of type parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("priority queue already contains {0}")]
    DuplicateElement(String),

    #[error("priority queue does not contain {0}")]
    NotFound(String),

    #[error("priority queue is empty")]
    Empty,

    #[error("no path from the start vertex reaches {0}")]
    Unreachable(String),

    #[error("picture must be at least 1x1, got {width}x{height}")]
    InvalidPicture { width: usize, height: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
