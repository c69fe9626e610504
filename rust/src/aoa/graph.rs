//! AoA graph types and construction.

use pyo3::prelude::*;
use rustc_hash::FxHashMap;

use crate::error::CpmError;
use crate::models::Activity;
use crate::topology::topological_order;

/// Dense event-node index into `AoaGraph::nodes`.
pub type NodeId = u32;

/// Latest time of an event node before the backward pass runs.
pub const LATEST_UNSET: i64 = i64::MAX;

/// An event (milestone) between activities.
#[pyclass]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventNode {
    #[pyo3(get)]
    pub name: String,
    /// Earliest occurrence time (forward pass).
    #[pyo3(get)]
    pub event_time: i64,
    /// Latest occurrence time (backward pass); `LATEST_UNSET` until then.
    #[pyo3(get)]
    pub latest_time: i64,
    #[pyo3(get)]
    pub early_start: i64,
    #[pyo3(get)]
    pub early_finish: i64,
    #[pyo3(get)]
    pub late_start: i64,
    #[pyo3(get)]
    pub late_finish: i64,
    #[pyo3(get)]
    pub slack: i64,
}

impl EventNode {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            event_time: 0,
            latest_time: LATEST_UNSET,
            early_start: 0,
            early_finish: 0,
            late_start: 0,
            late_finish: 0,
            slack: 0,
        }
    }
}

#[pymethods]
impl EventNode {
    fn __repr__(&self) -> String {
        format!(
            "EventNode(name={:?}, event_time={}, latest_time={}, slack={})",
            self.name, self.event_time, self.latest_time, self.slack
        )
    }
}

/// One activity occurrence between two event nodes.
///
/// An activity with several dependency tokens yields several edges that
/// share its name.
#[pyclass]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AoaEdge {
    #[pyo3(get)]
    pub from: String,
    #[pyo3(get)]
    pub to: String,
    #[pyo3(get)]
    pub name: String,
    #[pyo3(get)]
    pub duration: u32,
    #[pyo3(get)]
    pub slack: i64,
    #[pyo3(get)]
    pub is_critical: bool,
    pub(crate) from_id: NodeId,
    pub(crate) to_id: NodeId,
}

#[pymethods]
impl AoaEdge {
    fn __repr__(&self) -> String {
        format!(
            "AoaEdge(name={:?}, {}-{}, duration={}, slack={}, is_critical={})",
            self.name, self.from, self.to, self.duration, self.slack, self.is_critical
        )
    }
}

/// Event nodes and activity edges, with index-addressed adjacency.
///
/// Nodes are stored in discovery order; `NodeId` values index `nodes`.
#[pyclass]
#[derive(Clone, Debug)]
pub struct AoaGraph {
    #[pyo3(get)]
    pub nodes: Vec<EventNode>,
    #[pyo3(get)]
    pub edges: Vec<AoaEdge>,
    /// Edge indices leaving each node, in edge order.
    pub(crate) outgoing: Vec<Vec<usize>>,
    /// Edge indices entering each node, in edge order.
    pub(crate) incoming: Vec<Vec<usize>>,
    /// Event name -> `NodeId`.
    node_ids: FxHashMap<String, NodeId>,
}

/// True if any dependency token looks like an AoA `"<from>-<to>"` token.
pub fn is_aoa_shaped(activities: &[Activity]) -> bool {
    activities
        .iter()
        .any(|a| a.dependencies.iter().any(|dep| dep.contains('-')))
}

fn split_token<'a>(activity: &Activity, token: &'a str) -> Result<(&'a str, &'a str), CpmError> {
    let malformed = || CpmError::MalformedToken {
        activity: activity.name.clone(),
        token: token.to_string(),
    };
    let (from, to) = token.split_once('-').ok_or_else(malformed)?;
    let (from, to) = (from.trim(), to.trim());
    if from.is_empty() || to.is_empty() || to.contains('-') {
        return Err(malformed());
    }
    Ok((from, to))
}

impl AoaGraph {
    /// Build the event-node graph from AoA dependency tokens.
    ///
    /// One edge per (activity, token) pair, in input order. Nodes are created
    /// on first sight of an endpoint, `from` before `to`.
    ///
    /// # Errors
    /// `CpmError::MalformedToken` for a token that is not `"<from>-<to>"`.
    pub fn build(activities: &[Activity]) -> Result<Self, CpmError> {
        let token_count: usize = activities.iter().map(|a| a.dependencies.len()).sum();
        let mut graph = Self {
            nodes: Vec::new(),
            edges: Vec::with_capacity(token_count),
            outgoing: Vec::new(),
            incoming: Vec::new(),
            node_ids: FxHashMap::with_capacity_and_hasher(token_count + 1, Default::default()),
        };

        for activity in activities {
            for token in &activity.dependencies {
                let (from, to) = split_token(activity, token)?;
                let from_id = graph.node_id(from);
                let to_id = graph.node_id(to);

                let edge_idx = graph.edges.len();
                graph.edges.push(AoaEdge {
                    from: from.to_string(),
                    to: to.to_string(),
                    name: activity.name.clone(),
                    duration: activity.duration,
                    slack: 0,
                    is_critical: false,
                    from_id,
                    to_id,
                });
                graph.outgoing[from_id as usize].push(edge_idx);
                graph.incoming[to_id as usize].push(edge_idx);
            }
        }

        Ok(graph)
    }

    /// Index of the event node `name`, creating the node on first sight.
    fn node_id(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.node_ids.get(name) {
            return id;
        }
        let id = self.nodes.len() as NodeId;
        self.node_ids.insert(name.to_string(), id);
        self.nodes.push(EventNode::new(name));
        self.outgoing.push(Vec::new());
        self.incoming.push(Vec::new());
        id
    }

    /// Look up an event node by name.
    pub fn node(&self, name: &str) -> Option<&EventNode> {
        self.node_ids.get(name).map(|&id| &self.nodes[id as usize])
    }

    /// Node indices ordered so every edge goes from an earlier to a later node.
    ///
    /// # Errors
    /// `CpmError::CircularDependency` if the event graph has a cycle.
    pub fn topological_order(&self) -> Result<Vec<usize>, CpmError> {
        let arcs: Vec<(usize, usize)> = self
            .edges
            .iter()
            .map(|e| (e.from_id as usize, e.to_id as usize))
            .collect();
        topological_order(self.nodes.len(), &arcs)
    }

    /// Largest event time over all nodes (0 for an empty graph).
    pub fn project_duration(&self) -> i64 {
        self.nodes.iter().map(|n| n.event_time).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_activity(name: &str, duration: u32, deps: &[&str]) -> Activity {
        Activity::new(
            name.to_string(),
            duration,
            deps.iter().map(|d| d.to_string()).collect(),
        )
    }

    #[test]
    fn test_build_discovers_nodes_in_order() {
        let activities = vec![
            make_activity("A", 3, &["1-2"]),
            make_activity("B", 2, &["2-3"]),
            make_activity("C", 4, &["1-3"]),
        ];
        let graph = AoaGraph::build(&activities).unwrap();

        let names: Vec<&str> = graph.nodes.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["1", "2", "3"]);
        assert_eq!(graph.edges.len(), 3);
        assert_eq!(graph.edges[2].from, "1");
        assert_eq!(graph.edges[2].to, "3");
        assert_eq!(graph.edges[2].name, "C");
        assert!(graph.nodes.iter().all(|n| n.latest_time == LATEST_UNSET));
    }

    #[test]
    fn test_multiple_tokens_share_activity_name() {
        let activities = vec![make_activity("A", 2, &["1-2", "1-3"])];
        let graph = AoaGraph::build(&activities).unwrap();

        assert_eq!(graph.nodes.len(), 3);
        assert_eq!(graph.edges.len(), 2);
        assert!(graph.edges.iter().all(|e| e.name == "A" && e.duration == 2));
        assert_eq!(graph.outgoing[0], vec![0, 1]);
    }

    #[test]
    fn test_repeated_endpoints_share_one_node() {
        let activities = vec![
            make_activity("A", 1, &["1-2"]),
            make_activity("B", 1, &["2-3"]),
            make_activity("C", 1, &["1-3"]),
        ];
        let graph = AoaGraph::build(&activities).unwrap();

        assert_eq!(graph.nodes.len(), 3);
        assert_eq!(graph.edges[0].to_id, graph.edges[1].from_id);
        assert_eq!(graph.edges[0].from_id, graph.edges[2].from_id);
        assert_eq!(graph.incoming[2], vec![1, 2]);
        assert_eq!(graph.node("3").unwrap().name, "3");
        assert!(graph.node("4").is_none());
    }

    #[test]
    fn test_malformed_tokens_rejected() {
        for token in ["12", "1-", "-2", "1-2-3"] {
            let activities = vec![make_activity("A", 1, &[token])];
            assert_eq!(
                AoaGraph::build(&activities).unwrap_err(),
                CpmError::MalformedToken {
                    activity: "A".to_string(),
                    token: token.to_string(),
                }
            );
        }
    }

    #[test]
    fn test_token_endpoints_trimmed() {
        let activities = vec![make_activity("A", 1, &[" 1 - 2 "])];
        let graph = AoaGraph::build(&activities).unwrap();
        assert!(graph.node("1").is_some());
        assert!(graph.node("2").is_some());
    }

    #[test]
    fn test_is_aoa_shaped() {
        assert!(is_aoa_shaped(&[make_activity("A", 1, &["1-2"])]));
        assert!(!is_aoa_shaped(&[make_activity("B", 1, &["A"])]));
        assert!(!is_aoa_shaped(&[make_activity("A", 1, &[])]));
        assert!(!is_aoa_shaped(&[]));
    }

    #[test]
    fn test_cycle_in_event_graph() {
        let activities = vec![
            make_activity("A", 1, &["1-2"]),
            make_activity("B", 1, &["2-1"]),
        ];
        let graph = AoaGraph::build(&activities).unwrap();
        assert_eq!(
            graph.topological_order(),
            Err(CpmError::CircularDependency { unordered: 2 })
        );
    }
}
