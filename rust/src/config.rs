//! Configuration for the CPM engine.

use pyo3::prelude::*;

use crate::logging::VERBOSITY_SILENT;

/// Policy and diagnostics switches for a critical path computation.
#[pyclass]
#[derive(Clone, Debug)]
pub struct CpmConfig {
    /// Whether zero-duration (dummy) activities may be flagged critical.
    /// Path extraction follows zero-slack edges regardless of this flag.
    #[pyo3(get, set)]
    pub zero_duration_critical: bool,
    /// Treat AoN dependencies on unknown activities as finishing at time 0
    /// instead of failing.
    #[pyo3(get, set)]
    pub allow_unresolved_dependencies: bool,
    /// Verbosity level: 0=silent, 1=summary, 2=passes, 3=debug.
    #[pyo3(get, set)]
    pub verbosity: u8,
}

impl Default for CpmConfig {
    fn default() -> Self {
        Self {
            zero_duration_critical: true,
            allow_unresolved_dependencies: false,
            verbosity: VERBOSITY_SILENT,
        }
    }
}

impl CpmConfig {
    /// Apply the zero-duration policy to a zero-slack test.
    pub fn is_critical(&self, slack: i64, duration: u32) -> bool {
        slack == 0 && (self.zero_duration_critical || duration > 0)
    }
}

#[pymethods]
impl CpmConfig {
    #[new]
    #[pyo3(signature = (
        zero_duration_critical=true,
        allow_unresolved_dependencies=false,
        verbosity=VERBOSITY_SILENT
    ))]
    fn new(zero_duration_critical: bool, allow_unresolved_dependencies: bool, verbosity: u8) -> Self {
        Self {
            zero_duration_critical,
            allow_unresolved_dependencies,
            verbosity,
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "CpmConfig(zero_duration_critical={}, allow_unresolved_dependencies={}, verbosity={})",
            self.zero_duration_critical, self.allow_unresolved_dependencies, self.verbosity
        )
    }
}
