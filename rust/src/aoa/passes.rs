//! Forward and backward propagation over AoA event nodes.
//!
//! Both passes sweep nodes in a topological order computed up front, which
//! reaches the same fixpoint as repeated edge relaxation and cannot spin on a
//! cyclic input (the order itself fails first).

use crate::log_debug;

use super::graph::AoaGraph;

/// Compute earliest event times (longest path from any source).
///
/// Resets every node, then for each node in `order` relaxes its incoming
/// edges. On ties the first incoming edge in edge order that produces the
/// final event time sets the `early_start`/`early_finish` mirrors. This is
/// not the edge a repeated whole-graph relaxation would settle on first: that
/// depends on scan order across passes, while this rule depends only on the
/// edge list.
///
/// Returns the project duration (maximum event time).
pub fn forward_pass(graph: &mut AoaGraph, order: &[usize], verbosity: u8) -> i64 {
    for node in &mut graph.nodes {
        node.event_time = 0;
        node.early_start = 0;
        node.early_finish = 0;
    }

    for &node_idx in order {
        for &edge_idx in &graph.incoming[node_idx] {
            let edge = &graph.edges[edge_idx];
            let duration = i64::from(edge.duration);
            let candidate = graph.nodes[edge.from_id as usize].event_time + duration;

            let node = &mut graph.nodes[node_idx];
            if candidate > node.event_time {
                node.event_time = candidate;
                node.early_start = candidate - duration;
                node.early_finish = candidate;
                log_debug!(
                    verbosity,
                    "  forward: node {} event_time={} via {}",
                    node.name,
                    candidate,
                    edge.name
                );
            }
        }
    }

    graph.project_duration()
}

/// Compute latest event times anchored at `project_duration`.
///
/// Every node starts at the project duration. Nodes are visited in reverse
/// `order` and their outgoing edges relaxed in reverse edge order; on ties
/// the first of those edges that lowers a node's latest time sets the
/// `late_start`/`late_finish` mirrors, independent of relaxation pass order.
pub fn backward_pass(graph: &mut AoaGraph, order: &[usize], project_duration: i64, verbosity: u8) {
    for node in &mut graph.nodes {
        node.latest_time = project_duration;
        node.late_start = project_duration;
        node.late_finish = project_duration;
    }

    for &node_idx in order.iter().rev() {
        for &edge_idx in graph.outgoing[node_idx].iter().rev() {
            let edge = &graph.edges[edge_idx];
            let duration = i64::from(edge.duration);
            let successor_latest = graph.nodes[edge.to_id as usize].latest_time;
            let candidate = successor_latest - duration;

            let node = &mut graph.nodes[node_idx];
            if candidate < node.latest_time {
                node.latest_time = candidate;
                node.late_finish = successor_latest;
                node.late_start = successor_latest - duration;
                log_debug!(
                    verbosity,
                    "  backward: node {} latest_time={} via {}",
                    node.name,
                    candidate,
                    edge.name
                );
            }
        }
    }
}
