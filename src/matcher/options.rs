use crate::util::env::{self, ConfigError};

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const DEFAULT_RADIUS: f64 = 50.0;

/// How the first and last trajectory points attach to their edges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endpoints {
    /// The route starts and ends part-way along its edges, at the
    /// projection of the first and last trajectory points.
    #[default]
    Projected,

    /// The start and end edges are traversed in full.
    Whole,
}

impl FromStr for Endpoints {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "projected" => Ok(Endpoints::Projected),
            "whole" => Ok(Endpoints::Whole),
            other => Err(format!("unknown endpoint mode {other}")),
        }
    }
}

impl Display for Endpoints {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Endpoints::Projected => write!(f, "projected"),
            Endpoints::Whole => write!(f, "whole"),
        }
    }
}

/// Options of a [`ClosestPath`](crate::ClosestPath) search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchOptions {
    /// Nodes further than this from every trajectory point are never
    /// part of a match.
    pub radius: f64,

    pub endpoints: Endpoints,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            endpoints: Endpoints::default(),
        }
    }
}

impl MatchOptions {
    pub const RADIUS_VAR: &'static str = "FRECHET_RADIUS";
    pub const ENDPOINTS_VAR: &'static str = "FRECHET_ENDPOINTS";

    pub fn new(radius: f64) -> Self {
        Self {
            radius,
            ..Self::default()
        }
    }

    pub fn with_endpoints(self, endpoints: Endpoints) -> Self {
        Self { endpoints, ..self }
    }

    /// Reads the options from the environment, loading a `.env` file first
    /// when one is present. Unset variables keep their default.
    pub fn from_env() -> Result<Self, ConfigError> {
        env::load();

        let mut options = Self::default();
        if let Some(radius) = env::read(Self::RADIUS_VAR)? {
            options.radius = radius;
        }

        if let Some(endpoints) = env::read(Self::ENDPOINTS_VAR)? {
            options.endpoints = endpoints;
        }

        Ok(options)
    }
}
