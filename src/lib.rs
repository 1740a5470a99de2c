#![doc = include_str!("../readme.md")]

pub mod error;
pub mod frechet;
pub mod graph;
pub mod index;
pub mod matcher;
pub mod primitive;
pub mod util;

pub use error::{Error, ErrorKind};
pub use frechet::{
    frechet_coupling, frechet_distance, CoupledPair, Coupling, DiscreteFrechet, FrechetError,
};
pub use graph::{Graph, GraphError, Scan};
pub use index::{IndexOptions, PathLookup, Predecessor, Route, ShortestPathIndex, ShortestPathTable};
pub use matcher::{
    get_closest_path, ClosestPath, Endpoints, MatchError, MatchOptions, MatchedPath, PathSegment,
};
pub use primitive::{Edge, EdgeId, Node, NodeId};

pub type Result<T> = std::result::Result<T, Error>;
