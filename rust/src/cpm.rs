//! Critical path computation entry point.
//!
//! Selects the AoA or AoN pipeline, runs
//! build -> forward pass -> backward pass -> slack -> extraction,
//! and returns the result together with the annotated graph.

use crate::aoa::{self, AoaGraph};
use crate::aon::{self, AonGraph};
use crate::config::CpmConfig;
use crate::error::CpmError;
use crate::models::{Activity, CriticalPathResult, GraphType};
use crate::{log_passes, log_summary};

/// The annotated network a computation produced.
#[derive(Clone, Debug)]
pub enum Graph {
    Aoa(AoaGraph),
    Aon(AonGraph),
}

/// Result of `calculate_critical_path`.
///
/// `graph` is `None` when there was nothing to compute (no activities, or
/// AoA input without any `"<from>-<to>"` token); callers should treat that
/// as "nothing to render", not as an error.
#[derive(Clone, Debug)]
pub struct CpmOutput {
    pub result: CriticalPathResult,
    pub graph: Option<Graph>,
}

impl CpmOutput {
    fn empty() -> Self {
        Self {
            result: CriticalPathResult::default(),
            graph: None,
        }
    }
}

/// Compute the critical path of `activities` in the given representation.
///
/// For AoA the result path is one ordered walk along zero-slack edges and the
/// total duration is the largest event time. For AoN the result path is the
/// set of critical activities in input order and the total duration is the
/// largest early finish.
///
/// # Errors
/// * `CpmError::CircularDependency` if the precedence structure has a cycle
/// * `CpmError::MalformedToken` for an AoA token that is not `"<from>-<to>"`
/// * `CpmError::UnresolvedDependency` for an unknown AoN predecessor name
///   (unless the config allows it)
pub fn calculate_critical_path(
    activities: &[Activity],
    graph_type: GraphType,
    config: &CpmConfig,
) -> Result<CpmOutput, CpmError> {
    let verbosity = config.verbosity;

    if activities.is_empty() {
        log_summary!(verbosity, "{}: no activities", graph_type);
        return Ok(CpmOutput::empty());
    }

    let output = match graph_type {
        GraphType::Aoa => {
            if !aoa::is_aoa_shaped(activities) {
                log_summary!(verbosity, "AoA: no \"<from>-<to>\" dependencies, nothing to compute");
                return Ok(CpmOutput::empty());
            }
            calculate_aoa(activities, config)?
        }
        GraphType::Aon => calculate_aon(activities, config)?,
    };

    log_summary!(
        verbosity,
        "{}: total duration {}, critical path [{}]",
        graph_type,
        output.result.total_duration,
        output.result.critical_path.join(" > ")
    );

    Ok(output)
}

fn calculate_aoa(activities: &[Activity], config: &CpmConfig) -> Result<CpmOutput, CpmError> {
    let verbosity = config.verbosity;

    let mut graph = AoaGraph::build(activities)?;
    let order = graph.topological_order()?;
    log_passes!(
        verbosity,
        "AoA graph: {} event nodes, {} edges",
        graph.nodes.len(),
        graph.edges.len()
    );

    let total_duration = aoa::forward_pass(&mut graph, &order, verbosity);
    log_passes!(verbosity, "AoA forward pass: project duration {}", total_duration);

    aoa::backward_pass(&mut graph, &order, total_duration, verbosity);
    aoa::compute_slack(&mut graph, config);
    log_passes!(
        verbosity,
        "AoA slack: {} of {} edges critical",
        graph.edges.iter().filter(|e| e.is_critical).count(),
        graph.edges.len()
    );

    let critical_path = graph.critical_path();

    Ok(CpmOutput {
        result: CriticalPathResult {
            critical_path,
            total_duration,
        },
        graph: Some(Graph::Aoa(graph)),
    })
}

fn calculate_aon(activities: &[Activity], config: &CpmConfig) -> Result<CpmOutput, CpmError> {
    let verbosity = config.verbosity;

    let mut graph = AonGraph::build(activities, config)?;
    let order = graph.topological_order()?;
    log_passes!(verbosity, "AoN graph: {} activities", graph.activities.len());

    let total_duration = aon::forward_pass(&mut graph, &order, verbosity);
    log_passes!(verbosity, "AoN forward pass: project duration {}", total_duration);

    aon::backward_pass(&mut graph, &order, total_duration, verbosity);
    aon::compute_slack(&mut graph, config);

    let critical_path = graph.critical_activities();
    log_passes!(
        verbosity,
        "AoN slack: {} of {} activities critical",
        critical_path.len(),
        graph.activities.len()
    );

    Ok(CpmOutput {
        result: CriticalPathResult {
            critical_path,
            total_duration,
        },
        graph: Some(Graph::Aon(graph)),
    })
}
