//! The workflow engine: an immutable, query-only transition table.

use crate::outcome::{Failure, Outcome};
use crate::workflow::builder::WorkflowBuilder;
use crate::workflow::state::{Command, State};
use std::collections::{HashMap, HashSet};

/// A generic finite-state workflow over opaque state and command tokens.
///
/// The engine is a table of `(from_state, command) -> to_state` edges,
/// built once through a [`WorkflowBuilder`] and queried many times. It
/// holds no workflow instance state: the current state of any one workflow
/// lives with the caller, who applies the engine's computed next state
/// themselves (typically via [`Outcome::tap_success`]).
///
/// Queries are pure reads over an immutable table; an engine shared behind
/// an `Arc` can be queried concurrently without locking.
///
/// A missing edge is a recoverable condition, not an error: `get_next`
/// returns a failure [`Outcome`] and the caller decides what "action not
/// allowed in the current state" means for its users.
#[derive(Debug)]
pub struct WorkflowEngine<S: State, C: Command> {
    table: HashMap<S, HashMap<C, S>>,
}

impl<S: State, C: Command> WorkflowEngine<S, C> {
    /// Start building an engine.
    pub fn builder() -> WorkflowBuilder<S, C> {
        WorkflowBuilder::new()
    }

    pub(crate) fn from_table(table: HashMap<S, HashMap<C, S>>) -> Self {
        Self { table }
    }

    /// Look up the state reached by applying `command` in `state`.
    ///
    /// Returns a success outcome wrapping the target state when the edge is
    /// registered, and a single-failure outcome naming the command and
    /// state when it is not.
    pub fn get_next(&self, state: &S, command: &C) -> Outcome<S> {
        match self.table.get(state).and_then(|commands| commands.get(command)) {
            Some(next) => Outcome::success(next.clone()),
            None => Outcome::fail(Failure::new(format!(
                "No transition for command '{}' from state '{}'",
                command.name(),
                state.name(),
            ))),
        }
    }

    /// Every command with a registered edge leaving `state`.
    ///
    /// Returned as a set: no duplicates, no meaningful order.
    pub fn available_commands(&self, state: &S) -> HashSet<C> {
        self.table
            .get(state)
            .map(|commands| commands.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// True when `state` has no outgoing edges for any command.
    pub fn is_terminal(&self, state: &S) -> bool {
        self.table
            .get(state)
            .map_or(true, |commands| commands.is_empty())
    }
}
