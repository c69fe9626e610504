//! Slack, criticality and critical path extraction for AoA graphs.

use pyo3::prelude::*;
use rustc_hash::FxHashSet;

use crate::config::CpmConfig;

use super::graph::AoaGraph;

/// Derive node and edge slack and flag critical edges.
///
/// Node slack is `latest_time - event_time`. Edge slack is the gap between the
/// latest and earliest start of the activity:
/// `(to.latest_time - duration) - from.event_time`.
pub fn compute_slack(graph: &mut AoaGraph, config: &CpmConfig) {
    for node in &mut graph.nodes {
        node.slack = node.latest_time - node.event_time;
    }

    for edge in &mut graph.edges {
        let from = &graph.nodes[edge.from_id as usize];
        let to = &graph.nodes[edge.to_id as usize];
        edge.slack = (to.latest_time - i64::from(edge.duration)) - from.event_time;
        edge.is_critical = config.is_critical(edge.slack, edge.duration);
    }
}

/// Schedule of one AoA edge, as shown in an activity table.
#[pyclass]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityRow {
    #[pyo3(get)]
    pub from: String,
    #[pyo3(get)]
    pub to: String,
    #[pyo3(get)]
    pub name: String,
    #[pyo3(get)]
    pub duration: u32,
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
    #[pyo3(get)]
    pub is_critical: bool,
}

#[pymethods]
impl ActivityRow {
    fn __repr__(&self) -> String {
        format!(
            "ActivityRow(name={:?}, {}-{}, ES={}, EF={}, LS={}, LF={}, slack={})",
            self.name,
            self.from,
            self.to,
            self.early_start,
            self.early_finish,
            self.late_start,
            self.late_finish,
            self.slack
        )
    }
}

impl AoaGraph {
    /// First node without incoming edges, in discovery order.
    fn start_node(&self) -> Option<usize> {
        self.incoming.iter().position(|edges| edges.is_empty())
    }

    /// Node with the largest event time; the first one wins ties.
    fn end_node(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (idx, node) in self.nodes.iter().enumerate() {
            match best {
                Some(b) if self.nodes[b].event_time >= node.event_time => {}
                _ => best = Some(idx),
            }
        }
        best
    }
}

#[pymethods]
impl AoaGraph {
    /// One representative critical path, as an ordered list of activity names.
    ///
    /// Walks from the start node, always taking the first zero-slack outgoing
    /// edge in edge order, until the end node is reached or no such edge
    /// exists. Parallel critical paths are not enumerated; use
    /// `critical_activities` for the full set.
    pub fn critical_path(&self) -> Vec<String> {
        let (Some(start), Some(end)) = (self.start_node(), self.end_node()) else {
            return Vec::new();
        };

        let mut path = Vec::new();
        let mut current = start;
        while current != end {
            let next = self.outgoing[current]
                .iter()
                .map(|&e| &self.edges[e])
                .find(|edge| edge.slack == 0);
            let Some(edge) = next else {
                break;
            };
            path.push(edge.name.clone());
            current = edge.to_id as usize;
        }
        path
    }

    /// Names of all critical edges, deduplicated, in edge order.
    pub fn critical_activities(&self) -> Vec<String> {
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        self.edges
            .iter()
            .filter(|edge| edge.is_critical && seen.insert(edge.name.as_str()))
            .map(|edge| edge.name.clone())
            .collect()
    }

    /// Per-edge ES/EF/LS/LF schedule rows, in edge order.
    pub fn activity_table(&self) -> Vec<ActivityRow> {
        self.edges
            .iter()
            .map(|edge| {
                let duration = i64::from(edge.duration);
                let early_start = self.nodes[edge.from_id as usize].event_time;
                let late_finish = self.nodes[edge.to_id as usize].latest_time;
                ActivityRow {
                    from: edge.from.clone(),
                    to: edge.to.clone(),
                    name: edge.name.clone(),
                    duration: edge.duration,
                    early_start,
                    early_finish: early_start + duration,
                    late_start: late_finish - duration,
                    late_finish,
                    slack: edge.slack,
                    is_critical: edge.is_critical,
                }
            })
            .collect()
    }

    fn __repr__(&self) -> String {
        format!(
            "AoaGraph(nodes={}, edges={}, project_duration={})",
            self.nodes.len(),
            self.edges.len(),
            self.project_duration()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aoa::{backward_pass, forward_pass};
    use crate::models::Activity;

    fn make_activity(name: &str, duration: u32, deps: &[&str]) -> Activity {
        Activity::new(
            name.to_string(),
            duration,
            deps.iter().map(|d| d.to_string()).collect(),
        )
    }

    fn analyze(activities: &[Activity], config: &CpmConfig) -> AoaGraph {
        let mut graph = AoaGraph::build(activities).unwrap();
        let order = graph.topological_order().unwrap();
        let duration = forward_pass(&mut graph, &order, 0);
        backward_pass(&mut graph, &order, duration, 0);
        compute_slack(&mut graph, config);
        graph
    }

    fn diamond() -> Vec<Activity> {
        vec![
            make_activity("A", 1, &["1-2"]),
            make_activity("B", 5, &["1-3"]),
            make_activity("C", 1, &["2-4"]),
            make_activity("D", 1, &["3-4"]),
        ]
    }

    #[test]
    fn test_edge_slack_and_criticality() {
        let graph = analyze(&diamond(), &CpmConfig::default());

        let slacks: Vec<(&str, i64, bool)> = graph
            .edges
            .iter()
            .map(|e| (e.name.as_str(), e.slack, e.is_critical))
            .collect();
        assert_eq!(
            slacks,
            vec![("A", 4, false), ("B", 0, true), ("C", 4, false), ("D", 0, true)]
        );
        assert_eq!(graph.node("2").unwrap().slack, 4);
        assert_eq!(graph.node("4").unwrap().slack, 0);
    }

    #[test]
    fn test_critical_path_walk_diamond() {
        let graph = analyze(&diamond(), &CpmConfig::default());
        assert_eq!(graph.critical_path(), vec!["B", "D"]);
    }

    #[test]
    fn test_critical_path_takes_first_parallel_branch() {
        // Two equal-length branches 1-2-4 and 1-3-4.
        let graph = analyze(
            &[
                make_activity("A", 2, &["1-2"]),
                make_activity("B", 2, &["1-3"]),
                make_activity("C", 3, &["2-4"]),
                make_activity("D", 3, &["3-4"]),
            ],
            &CpmConfig::default(),
        );

        assert_eq!(graph.critical_path(), vec!["A", "C"]);
        assert_eq!(graph.critical_activities(), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_zero_duration_policy_keeps_path() {
        // Dummy activity X links 2 -> 3 with no duration.
        let activities = [
            make_activity("A", 4, &["1-2"]),
            make_activity("X", 0, &["2-3"]),
            make_activity("B", 1, &["1-3"]),
            make_activity("C", 2, &["3-4"]),
        ];
        let config = CpmConfig {
            zero_duration_critical: false,
            ..CpmConfig::default()
        };
        let graph = analyze(&activities, &config);

        let dummy = graph.edges.iter().find(|e| e.name == "X").unwrap();
        assert_eq!(dummy.slack, 0);
        assert!(!dummy.is_critical);
        assert_eq!(graph.critical_activities(), vec!["A", "C"]);
        assert_eq!(graph.critical_path(), vec!["A", "X", "C"]);

        let graph = analyze(&activities, &CpmConfig::default());
        assert_eq!(graph.critical_activities(), vec!["A", "X", "C"]);
    }

    #[test]
    fn test_activity_table_rows() {
        let graph = analyze(&diamond(), &CpmConfig::default());
        let rows = graph.activity_table();

        assert_eq!(rows.len(), 4);
        let a = &rows[0];
        assert_eq!((a.from.as_str(), a.to.as_str()), ("1", "2"));
        assert_eq!((a.early_start, a.early_finish), (0, 1));
        assert_eq!((a.late_start, a.late_finish), (4, 5));
        assert_eq!(a.slack, 4);

        let d = &rows[3];
        assert_eq!((d.early_start, d.early_finish), (5, 6));
        assert_eq!((d.late_start, d.late_finish), (5, 6));
        assert!(d.is_critical);
    }

    #[test]
    fn test_empty_graph_has_empty_path() {
        let graph = AoaGraph::build(&[]).unwrap();
        assert!(graph.critical_path().is_empty());
        assert!(graph.critical_activities().is_empty());
    }
}
