//! Point-set loader
//!
//! Reads lattice point sets from JSON so fixtures and the CLI share one format:
//!
//! ```json
//! {
//!   "id": "unit_square",
//!   "description": "Corners of the unit square",
//!   "points": [{"x": 0, "y": 0}, {"x": 1, "y": 0}, {"x": 0, "y": 1}, {"x": 1, "y": 1}],
//!   "expected_circles": 1
//! }
//! ```

pub mod files;

pub use files::{load_point_set, load_point_sets};

use crate::geometry::Point;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A named point sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointSet {
    pub id: String,

    #[serde(default)]
    pub description: String,

    /// Order matters: it fixes enumeration order
    pub points: Vec<Point>,

    /// Known answer, for validation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_circles: Option<i64>,
}

impl PointSet {
    pub fn new(id: impl Into<String>, points: Vec<Point>) -> Self {
        Self {
            id: id.into(),
            description: String::new(),
            points,
            expected_circles: None,
        }
    }

    pub fn from_json(json: &str) -> LoadResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> LoadResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Loader result
pub type LoadResult<T> = Result<T, LoadError>;

/// Point-set loading errors
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0} is not a directory")]
    NotADirectory(String),
}
