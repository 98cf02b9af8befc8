use std::path::PathBuf;

use thiserror::Error;

use crate::graphs::{Vertex, Weight};

/// Errors raised while building a graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// Dijkstra is only correct for non-negative weights, so negative edges are
    /// rejected when they are added.
    #[error("edge ({tail} -> {head}) has negative weight {weight}")]
    InvalidWeight {
        tail: Vertex,
        head: Vertex,
        weight: Weight,
    },
}

/// Errors raised by a frontier that is used outside of its contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrontierError {
    #[error("extract_min called on an empty frontier")]
    Empty,
}

/// Errors raised while reading or writing graph files.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("unable to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("unsupported graph file extension of {}", .0.display())]
    UnsupportedExtension(PathBuf),

    #[error("bincode error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl ReadError {
    pub fn open(path: impl Into<PathBuf>, source: std::io::Error) -> ReadError {
        ReadError::Open {
            path: path.into(),
            source,
        }
    }

    pub fn parse(line: usize, reason: impl Into<String>) -> ReadError {
        ReadError::Parse {
            line,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_weight_names_the_edge() {
        let error = GraphError::InvalidWeight {
            tail: 3,
            head: 7,
            weight: -2,
        };
        assert_eq!(error.to_string(), "edge (3 -> 7) has negative weight -2");
    }

    #[test]
    fn graph_error_converts_into_read_error() {
        let error: ReadError = GraphError::InvalidWeight {
            tail: 0,
            head: 1,
            weight: -1,
        }
        .into();
        assert!(matches!(error, ReadError::Graph(_)));
    }
}
