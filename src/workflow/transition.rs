//! Transition edges: plain configuration data.

use serde::{Deserialize, Serialize};

/// One `(from_state, command) -> to_state` edge of a workflow table.
///
/// Transitions are plain data. A full set of them is handed to a
/// [`WorkflowBuilder`](super::WorkflowBuilder) once; after construction the
/// engine owns an immutable table and the triples are gone. The serde
/// derives let transition tables live in configuration files.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition<S, C> {
    /// The state this edge leaves from.
    pub from: S,
    /// The command that triggers the edge.
    pub command: C,
    /// The state this edge arrives at.
    pub to: S,
}

impl<S, C> Transition<S, C> {
    /// Create an edge.
    pub fn new(from: S, command: C, to: S) -> Self {
        Self { from, command, to }
    }
}
