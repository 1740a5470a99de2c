use crate::frechet::FrechetError;
use crate::graph::GraphError;
use crate::impl_err;
use crate::matcher::MatchError;
use crate::util::env::ConfigError;

use thiserror::Error;

/// The coarse classification every error of the crate falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An empty point sequence, or a radius that is not a positive number.
    InvalidInput,
    /// No admissible route exists within the radius. Retrying with a
    /// larger radius may succeed.
    NoPathFound,
    /// An identifier did not resolve against the graph.
    Graph,
    /// Malformed configuration.
    Config,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Frechet(FrechetError),

    #[error(transparent)]
    Match(MatchError),

    #[error(transparent)]
    Graph(GraphError),

    #[error("invalid configuration: {0}")]
    Config(ConfigError),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Frechet(_) => ErrorKind::InvalidInput,
            Error::Match(error) => error.kind(),
            Error::Graph(_) => ErrorKind::Graph,
            Error::Config(_) => ErrorKind::Config,
        }
    }
}

impl_err! {
    FrechetError => Frechet,
    MatchError => Match,
    GraphError => Graph,
    ConfigError => Config,
}
