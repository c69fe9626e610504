//! Activity-on-Arrow networks.
//!
//! Activities are edges between event nodes named by `"<from>-<to>"`
//! dependency tokens. Event nodes are discovered from the tokens, never
//! declared.

mod analysis;
mod graph;
mod passes;

pub use analysis::{compute_slack, ActivityRow};
pub use graph::{is_aoa_shaped, AoaEdge, AoaGraph, EventNode, NodeId, LATEST_UNSET};
pub use passes::{backward_pass, forward_pass};
