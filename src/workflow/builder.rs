//! Builder for constructing workflow engines.

use crate::workflow::engine::WorkflowEngine;
use crate::workflow::error::BuildError;
use crate::workflow::state::{Command, State};
use crate::workflow::transition::Transition;
use std::collections::HashMap;

/// Collects transition edges and builds an immutable [`WorkflowEngine`].
///
/// The builder is consumed exactly once by [`build`](WorkflowBuilder::build),
/// which validates the whole edge set eagerly: a duplicate
/// `(from_state, command)` key makes construction fail with
/// [`BuildError::DuplicateTransition`], whether or not the duplicate points
/// at the same target. The table must be a partial function from
/// `(state, command)` to `state`; anything else would make queries
/// non-deterministic.
///
/// # Example
///
/// ```rust
/// use railyard::workflow::WorkflowBuilder;
/// use railyard::{command_enum, state_enum};
///
/// state_enum! {
///     enum DocumentState {
///         Draft,
///         Published,
///     }
/// }
///
/// command_enum! {
///     enum DocumentCommand {
///         Publish,
///     }
/// }
///
/// let engine = WorkflowBuilder::new()
///     .add_transition(DocumentState::Draft, DocumentCommand::Publish, DocumentState::Published)
///     .build()
///     .unwrap();
///
/// let next = engine.get_next(&DocumentState::Draft, &DocumentCommand::Publish);
/// assert_eq!(next.value(), Some(&DocumentState::Published));
/// ```
pub struct WorkflowBuilder<S: State, C: Command> {
    transitions: Vec<Transition<S, C>>,
}

impl<S: State, C: Command> WorkflowBuilder<S, C> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Add one edge.
    pub fn add_transition(mut self, from: S, command: C, to: S) -> Self {
        self.transitions.push(Transition::new(from, command, to));
        self
    }

    /// Add a pre-built edge.
    pub fn transition(mut self, transition: Transition<S, C>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple edges at once.
    pub fn transitions(mut self, transitions: Vec<Transition<S, C>>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Build the engine, validating the edge set.
    ///
    /// Fails if no edges were added or if any `(from_state, command)` key
    /// appears more than once.
    pub fn build(self) -> Result<WorkflowEngine<S, C>, BuildError> {
        if self.transitions.is_empty() {
            return Err(BuildError::NoTransitions);
        }

        let mut table: HashMap<S, HashMap<C, S>> = HashMap::new();
        for edge in self.transitions {
            let commands = table.entry(edge.from.clone()).or_default();
            if commands.contains_key(&edge.command) {
                return Err(BuildError::DuplicateTransition {
                    from: edge.from.name().to_string(),
                    command: edge.command.name().to_string(),
                });
            }
            commands.insert(edge.command, edge.to);
        }

        Ok(WorkflowEngine::from_table(table))
    }
}

impl<S: State, C: Command> Default for WorkflowBuilder<S, C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{command_enum, state_enum};

    state_enum! {
        enum TestState {
            Draft,
            Review,
            Published,
        }
    }

    command_enum! {
        enum TestCommand {
            Submit,
            Approve,
        }
    }

    #[test]
    fn builder_requires_transitions() {
        let result = WorkflowBuilder::<TestState, TestCommand>::new().build();
        assert_eq!(result.unwrap_err(), BuildError::NoTransitions);
    }

    #[test]
    fn duplicate_key_with_different_targets_is_rejected() {
        let result = WorkflowBuilder::new()
            .add_transition(TestState::Draft, TestCommand::Submit, TestState::Review)
            .add_transition(TestState::Draft, TestCommand::Submit, TestState::Published)
            .build();

        assert_eq!(
            result.unwrap_err(),
            BuildError::DuplicateTransition {
                from: "Draft".to_string(),
                command: "Submit".to_string(),
            }
        );
    }

    #[test]
    fn duplicate_key_with_identical_target_is_also_rejected() {
        let result = WorkflowBuilder::new()
            .add_transition(TestState::Draft, TestCommand::Submit, TestState::Review)
            .add_transition(TestState::Draft, TestCommand::Submit, TestState::Review)
            .build();

        assert!(matches!(
            result,
            Err(BuildError::DuplicateTransition { .. })
        ));
    }

    #[test]
    fn same_command_from_different_states_is_fine() {
        let result = WorkflowBuilder::new()
            .add_transition(TestState::Draft, TestCommand::Submit, TestState::Review)
            .add_transition(TestState::Review, TestCommand::Submit, TestState::Published)
            .build();

        assert!(result.is_ok());
    }

    #[test]
    fn prebuilt_and_bulk_edges_are_accepted() {
        let engine = WorkflowBuilder::new()
            .transition(Transition::new(
                TestState::Draft,
                TestCommand::Submit,
                TestState::Review,
            ))
            .transitions(vec![Transition::new(
                TestState::Review,
                TestCommand::Approve,
                TestState::Published,
            )])
            .build()
            .unwrap();

        let next = engine.get_next(&TestState::Review, &TestCommand::Approve);
        assert_eq!(next.value(), Some(&TestState::Published));
    }
}
