//! This module contains all custom errors used in this library.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Graph: edge probability {0} is not within [0, 1]")]
    InvalidProbability(f64),
    #[error("Graph: vertex {vertex} is out of range for a graph of size {n}")]
    VertexOutOfRange { vertex: usize, n: usize },
    #[error("Graph: self-loop on vertex {0}")]
    SelfLoop(usize),
}

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Import: IoError")]
    IoError(#[from] std::io::Error),
    #[error("Import: Input is malformed.")]
    InputMalformedError,
    #[error("Import: Integer is malformed.")]
    BadIntError(#[from] std::num::ParseIntError),
    #[error("Import: {0}")]
    Graph(#[from] GraphError),
}

#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("InvalidSolution: {0}")]
    InvalidSolution(String),
}
