//! Input and result types shared by both network representations.

use pyo3::prelude::*;
use std::fmt;
use std::str::FromStr;

use crate::error::CpmError;

/// A named activity with a duration and precedence tokens.
///
/// For AoA each dependency token is `"<from>-<to>"` naming two event nodes;
/// for AoN each token is the name of a predecessor activity.
#[pyclass]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Activity {
    #[pyo3(get, set)]
    pub name: String,
    #[pyo3(get, set)]
    pub duration: u32,
    #[pyo3(get, set)]
    pub dependencies: Vec<String>,
}

#[pymethods]
impl Activity {
    #[new]
    #[pyo3(signature = (name, duration, dependencies=Vec::new()))]
    pub fn new(name: String, duration: u32, dependencies: Vec<String>) -> Self {
        Self {
            name,
            duration,
            dependencies,
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "Activity(name={:?}, duration={}, dependencies={:?})",
            self.name, self.duration, self.dependencies
        )
    }
}

/// Which network representation the dependency tokens use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GraphType {
    /// Activity-on-Arrow: activities are edges between event nodes.
    #[default]
    Aoa,
    /// Activity-on-Node: activities reference predecessors by name.
    Aon,
}

impl FromStr for GraphType {
    type Err = CpmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AoA" => Ok(GraphType::Aoa),
            "AoN" => Ok(GraphType::Aon),
            other => Err(CpmError::UnknownGraphType(other.to_string())),
        }
    }
}

impl fmt::Display for GraphType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphType::Aoa => write!(f, "AoA"),
            GraphType::Aon => write!(f, "AoN"),
        }
    }
}

/// Outcome of a critical path computation.
#[pyclass]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CriticalPathResult {
    /// Activity names on the critical path.
    /// Ordered walk for AoA; critical set in input order for AoN.
    #[pyo3(get)]
    pub critical_path: Vec<String>,
    /// Project duration (longest path length).
    #[pyo3(get)]
    pub total_duration: i64,
}

#[pymethods]
impl CriticalPathResult {
    fn __repr__(&self) -> String {
        format!(
            "CriticalPathResult(critical_path={:?}, total_duration={})",
            self.critical_path, self.total_duration
        )
    }

    fn __str__(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CriticalPathResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.critical_path.join(" > "), self.total_duration)
    }
}
