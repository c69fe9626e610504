//! Error types for critical path computation.

use thiserror::Error;

/// Errors raised by the CPM engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CpmError {
    /// The precedence structure is not acyclic.
    #[error("Circular dependency detected: {unordered} node(s) could not be ordered")]
    CircularDependency { unordered: usize },

    /// An AoN activity names a predecessor that is not in the activity list.
    #[error("Activity {activity:?} depends on unknown activity {dependency:?}")]
    UnresolvedDependency { activity: String, dependency: String },

    /// An AoA dependency token is not of the form `<from>-<to>`.
    #[error("Activity {activity:?} has malformed dependency {token:?} (expected \"<from>-<to>\")")]
    MalformedToken { activity: String, token: String },

    #[error("Unknown graph type: {0} (expected \"AoA\" or \"AoN\")")]
    UnknownGraphType(String),
}
