//! AoN graph types, construction and critical activity extraction.

use pyo3::prelude::*;
use rustc_hash::FxHashMap;

use crate::config::CpmConfig;
use crate::error::CpmError;
use crate::models::Activity;
use crate::topology::topological_order;

/// An activity enriched with its computed schedule.
#[pyclass]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityNode {
    #[pyo3(get)]
    pub name: String,
    #[pyo3(get)]
    pub duration: u32,
    #[pyo3(get)]
    pub dependencies: Vec<String>,
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

impl From<&Activity> for ActivityNode {
    fn from(activity: &Activity) -> Self {
        Self {
            name: activity.name.clone(),
            duration: activity.duration,
            dependencies: activity.dependencies.clone(),
            early_start: 0,
            early_finish: 0,
            late_start: 0,
            late_finish: 0,
            slack: 0,
            is_critical: false,
        }
    }
}

#[pymethods]
impl ActivityNode {
    fn __repr__(&self) -> String {
        format!(
            "ActivityNode(name={:?}, ES={}, EF={}, LS={}, LF={}, slack={}, is_critical={})",
            self.name,
            self.early_start,
            self.early_finish,
            self.late_start,
            self.late_finish,
            self.slack,
            self.is_critical
        )
    }
}

/// Activity nodes in input order, with resolved precedence lists.
#[pyclass]
#[derive(Clone, Debug)]
pub struct AonGraph {
    #[pyo3(get)]
    pub activities: Vec<ActivityNode>,
    /// Resolved predecessor indices per activity, in dependency order.
    pub(crate) predecessors: Vec<Vec<usize>>,
    /// Successor indices per activity, in input order of the successor.
    pub(crate) successors: Vec<Vec<usize>>,
}

impl AonGraph {
    /// Build one node per activity, in input order.
    ///
    /// Dependency names resolve to the first activity carrying that name.
    ///
    /// # Errors
    /// `CpmError::UnresolvedDependency` for a name that matches no activity,
    /// unless `config.allow_unresolved_dependencies` is set, in which case the
    /// dependency is dropped (it would contribute a finish time of 0).
    pub fn build(activities: &[Activity], config: &CpmConfig) -> Result<Self, CpmError> {
        let mut by_name: FxHashMap<&str, usize> =
            FxHashMap::with_capacity_and_hasher(activities.len(), Default::default());
        for (idx, activity) in activities.iter().enumerate() {
            by_name.entry(activity.name.as_str()).or_insert(idx);
        }

        let n = activities.len();
        let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); n];
        let mut successors: Vec<Vec<usize>> = vec![Vec::new(); n];

        for (idx, activity) in activities.iter().enumerate() {
            for dependency in &activity.dependencies {
                match by_name.get(dependency.as_str()) {
                    Some(&pred) => {
                        predecessors[idx].push(pred);
                        successors[pred].push(idx);
                    }
                    None if config.allow_unresolved_dependencies => {}
                    None => {
                        return Err(CpmError::UnresolvedDependency {
                            activity: activity.name.clone(),
                            dependency: dependency.clone(),
                        });
                    }
                }
            }
        }

        Ok(Self {
            activities: activities.iter().map(ActivityNode::from).collect(),
            predecessors,
            successors,
        })
    }

    /// Look up an activity node by name (first match).
    pub fn activity(&self, name: &str) -> Option<&ActivityNode> {
        self.activities.iter().find(|a| a.name == name)
    }

    /// Activity indices ordered so predecessors come before successors.
    ///
    /// # Errors
    /// `CpmError::CircularDependency` if the precedence graph has a cycle.
    pub fn topological_order(&self) -> Result<Vec<usize>, CpmError> {
        let arcs: Vec<(usize, usize)> = self
            .predecessors
            .iter()
            .enumerate()
            .flat_map(|(idx, preds)| preds.iter().map(move |&pred| (pred, idx)))
            .collect();
        topological_order(self.activities.len(), &arcs)
    }

    /// Largest early finish over all activities (0 for an empty graph).
    pub fn project_duration(&self) -> i64 {
        self.activities
            .iter()
            .map(|a| a.early_finish)
            .max()
            .unwrap_or(0)
    }
}

#[pymethods]
impl AonGraph {
    /// Names of all critical activities, in input order.
    pub fn critical_activities(&self) -> Vec<String> {
        self.activities
            .iter()
            .filter(|a| a.is_critical)
            .map(|a| a.name.clone())
            .collect()
    }

    /// One representative critical chain, as an ordered list of names.
    ///
    /// Starts at the first zero-slack activity that starts at time 0 and has
    /// no predecessors, then repeatedly follows the first zero-slack successor
    /// whose early start equals the current early finish. Zero-duration
    /// activities are walked through whatever the criticality policy says.
    pub fn critical_path(&self) -> Vec<String> {
        let start = self.activities.iter().enumerate().position(|(idx, a)| {
            a.slack == 0 && a.early_start == 0 && self.predecessors[idx].is_empty()
        });
        let Some(mut current) = start else {
            return Vec::new();
        };

        let mut path = vec![self.activities[current].name.clone()];
        loop {
            let finish = self.activities[current].early_finish;
            let next = self.successors[current].iter().copied().find(|&s| {
                let succ = &self.activities[s];
                succ.slack == 0 && succ.early_start == finish
            });
            let Some(next) = next else {
                break;
            };
            path.push(self.activities[next].name.clone());
            current = next;
        }
        path
    }

    fn __repr__(&self) -> String {
        format!(
            "AonGraph(activities={}, project_duration={})",
            self.activities.len(),
            self.project_duration()
        )
    }
}
