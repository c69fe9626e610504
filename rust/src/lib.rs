//! Critical Path Method engine.
//!
//! Computes earliest/latest times, slack and critical paths for project
//! networks given either as Activity-on-Arrow (activities are edges between
//! numbered events) or Activity-on-Node (activities name their predecessors).
//! The engine is also exported as a Python extension module.

// Allow clippy warning triggered by PyO3 macro expansion
#![allow(clippy::useless_conversion)]

use pyo3::prelude::*;

pub mod aoa;
pub mod aon;
mod config;
mod cpm;
mod error;
pub mod logging;
mod models;
pub mod topology;

pub use aoa::{ActivityRow, AoaEdge, AoaGraph, EventNode, NodeId};
pub use aon::{ActivityNode, AonGraph};
pub use config::CpmConfig;
pub use cpm::{calculate_critical_path, CpmOutput, Graph};
pub use error::CpmError;
pub use models::{Activity, CriticalPathResult, GraphType};

/// Compute the critical path of a list of activities.
///
/// # Arguments
/// * `activities` - Activities with durations and dependency tokens
/// * `graph_type` - "AoA" (tokens are "<from>-<to>") or "AoN" (tokens are activity names)
/// * `config` - Optional policy and verbosity settings
///
/// # Returns
/// * Tuple of (CriticalPathResult, AoaGraph | AonGraph | None)
///
/// # Raises
/// * ValueError for an unknown graph type, a cycle, a malformed AoA token,
///   or an unknown AoN predecessor
#[pyfunction]
#[pyo3(name = "calculate_critical_path", signature = (activities, graph_type="AoA", config=None))]
fn py_calculate_critical_path(
    py: Python<'_>,
    activities: Vec<Activity>,
    graph_type: &str,
    config: Option<CpmConfig>,
) -> PyResult<(CriticalPathResult, PyObject)> {
    let to_py_err = |e: CpmError| pyo3::exceptions::PyValueError::new_err(e.to_string());

    let graph_type: GraphType = graph_type.parse().map_err(to_py_err)?;
    let config = config.unwrap_or_default();
    let output = calculate_critical_path(&activities, graph_type, &config).map_err(to_py_err)?;

    let graph = match output.graph {
        Some(Graph::Aoa(graph)) => graph.into_py(py),
        Some(Graph::Aon(graph)) => graph.into_py(py),
        None => py.None(),
    };

    Ok((output.result, graph))
}

/// The cpm.rust Python module.
#[pymodule]
fn rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Input and result types
    m.add_class::<Activity>()?;
    m.add_class::<CriticalPathResult>()?;
    m.add_class::<CpmConfig>()?;

    // Graph types
    m.add_class::<EventNode>()?;
    m.add_class::<AoaEdge>()?;
    m.add_class::<ActivityRow>()?;
    m.add_class::<AoaGraph>()?;
    m.add_class::<ActivityNode>()?;
    m.add_class::<AonGraph>()?;

    // Algorithms
    m.add_function(wrap_pyfunction!(py_calculate_critical_path, m)?)?;

    Ok(())
}
