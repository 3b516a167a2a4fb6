use std::error::Error;
use std::fmt::{Display, Formatter};

/// Possible errors that arise from a malformed graph or a misused runner.
#[derive(Debug, Clone, PartialEq)]
pub enum PrimError {
    EmptyGraph,
    UnknownVertex(String),
    InvalidWeight(String),
    AlreadyInitialized,
}

impl Error for PrimError {}

impl Display for PrimError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            PrimError::EmptyGraph => String::from("The graph provided has no vertices"),
            PrimError::UnknownVertex(msg) => format!("Unknown vertex: {msg}"),
            PrimError::InvalidWeight(msg) => format!("Invalid edge weight: {msg}"),
            PrimError::AlreadyInitialized => {
                String::from("The spanning tree has already been started from a vertex")
            }
        };
        write!(f, "{message}")
    }
}
