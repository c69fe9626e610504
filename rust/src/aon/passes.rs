//! Forward and backward passes over AoN activities.

use crate::config::CpmConfig;
use crate::log_debug;

use super::graph::AonGraph;

/// Compute early start/finish for every activity.
///
/// Activities without resolved predecessors start at 0; every other activity
/// starts at the latest finish among its predecessors. Returns the project
/// duration (maximum early finish).
pub fn forward_pass(graph: &mut AonGraph, order: &[usize], verbosity: u8) -> i64 {
    for activity in &mut graph.activities {
        activity.early_start = 0;
        activity.early_finish = i64::from(activity.duration);
    }

    for &idx in order {
        let start = graph.predecessors[idx]
            .iter()
            .map(|&pred| graph.activities[pred].early_finish)
            .max()
            .unwrap_or(0);

        let activity = &mut graph.activities[idx];
        if start > activity.early_start {
            activity.early_start = start;
            activity.early_finish = start + i64::from(activity.duration);
            log_debug!(
                verbosity,
                "  forward: {} ES={} EF={}",
                activity.name,
                activity.early_start,
                activity.early_finish
            );
        }
    }

    graph.project_duration()
}

/// Compute late start/finish anchored at `project_end`.
///
/// Activities without successors finish at `project_end`; every other
/// activity must finish by the earliest late start among its successors.
pub fn backward_pass(graph: &mut AonGraph, order: &[usize], project_end: i64, verbosity: u8) {
    for activity in &mut graph.activities {
        activity.late_finish = project_end;
        activity.late_start = project_end - i64::from(activity.duration);
    }

    for &idx in order.iter().rev() {
        let Some(finish) = graph.successors[idx]
            .iter()
            .map(|&succ| graph.activities[succ].late_start)
            .min()
        else {
            continue;
        };

        let activity = &mut graph.activities[idx];
        if finish < activity.late_finish {
            activity.late_finish = finish;
            activity.late_start = finish - i64::from(activity.duration);
            log_debug!(
                verbosity,
                "  backward: {} LS={} LF={}",
                activity.name,
                activity.late_start,
                activity.late_finish
            );
        }
    }
}

/// Slack is `late_start - early_start`; zero slack marks an activity critical.
pub fn compute_slack(graph: &mut AonGraph, config: &CpmConfig) {
    for activity in &mut graph.activities {
        activity.slack = activity.late_start - activity.early_start;
        activity.is_critical = config.is_critical(activity.slack, activity.duration);
    }
}
