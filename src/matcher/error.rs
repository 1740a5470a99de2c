use crate::error::ErrorKind;
use crate::frechet::FrechetError;
use crate::graph::GraphError;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatchError {
    #[error("no trajectory points were given")]
    EmptyTrajectory,

    #[error("search radius must be a positive number, got {0}")]
    InvalidRadius(f64),

    #[error("no graph node lies within {radius} of the trajectory")]
    NoAdmissibleNodes { radius: f64 },

    #[error("no admissible start and end edges are connected within the radius")]
    NoConnectedRoute,

    #[error("could not score candidate: {0}")]
    Frechet(#[from] FrechetError),

    #[error("candidate does not resolve against the graph: {0}")]
    Graph(#[from] GraphError),
}

impl MatchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MatchError::EmptyTrajectory
            | MatchError::InvalidRadius(_)
            | MatchError::Frechet(_) => ErrorKind::InvalidInput,
            MatchError::NoAdmissibleNodes { .. } | MatchError::NoConnectedRoute => {
                ErrorKind::NoPathFound
            }
            MatchError::Graph(_) => ErrorKind::Graph,
        }
    }
}
