//! Error type shared by the whole crate.

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while building or ranking a graph.
#[derive(Debug, Error)]
pub enum PageRankError {
    #[error("weight must be a finite non-negative number, got {value}")]
    InvalidWeight { value: f64 },

    #[error("edge {edge} does not connect nodes of this graph")]
    IncompatibleEndpoint { edge: String },

    #[error("no node with id {id:?}")]
    NodeNotFound { id: String },

    #[error("no edge with id {id:?}")]
    EdgeNotFound { id: String },

    #[error("cannot rank an empty graph")]
    EmptyGraph,

    #[error("invalid generator config: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },
}

pub type Result<T> = std::result::Result<T, PageRankError>;

// Allow `?` on std::io::Error when the path is not known at the call site.
impl From<std::io::Error> for PageRankError {
    fn from(source: std::io::Error) -> Self {
        PageRankError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

/// Reject negative, infinite and NaN weights.
pub(crate) fn check_weight(value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(PageRankError::InvalidWeight { value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_weight() {
        assert_eq!(check_weight(0.0).unwrap(), 0.0);
        assert_eq!(check_weight(2.5).unwrap(), 2.5);
        assert!(matches!(
            check_weight(-0.1),
            Err(PageRankError::InvalidWeight { .. })
        ));
        assert!(check_weight(f64::NAN).is_err());
        assert!(check_weight(f64::INFINITY).is_err());
        assert!(check_weight(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = PageRankError::NodeNotFound { id: "A".to_string() };
        assert_eq!(err.to_string(), "no node with id \"A\"");
        assert_eq!(PageRankError::EmptyGraph.to_string(), "cannot rank an empty graph");
    }
}
