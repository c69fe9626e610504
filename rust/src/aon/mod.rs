//! Activity-on-Node networks.
//!
//! Activities are nodes; precedence is implied by each activity naming its
//! predecessors.

mod graph;
mod passes;

pub use graph::{ActivityNode, AonGraph};
pub use passes::{backward_pass, compute_slack, forward_pass};
