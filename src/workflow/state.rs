//! State and Command token traits.

use std::fmt::Debug;
use std::hash::Hash;

/// A workflow state token.
///
/// States are opaque, structurally comparable values supplied by the
/// client domain; the engine imposes nothing beyond what it needs to key a
/// lookup table and to name states in diagnostics. There is no reserved
/// initial or terminal state at the type level: "initial" is whatever state
/// a caller starts a workflow instance in, and "terminal" is any state with
/// no outgoing transitions (see
/// [`WorkflowEngine::is_terminal`](super::WorkflowEngine::is_terminal)).
///
/// The [`state_enum!`](crate::state_enum) macro generates an implementation
/// for fieldless enums.
///
/// # Example
///
/// ```rust
/// use railyard::workflow::State;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum DocumentState {
///     Draft,
///     Published,
/// }
///
/// impl State for DocumentState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Draft => "Draft",
///             Self::Published => "Published",
///         }
///     }
/// }
/// ```
pub trait State: Clone + Eq + Hash + Debug + Send + Sync {
    /// The state's name, for diagnostics and failure messages.
    fn name(&self) -> &str;
}

/// A workflow command token.
///
/// Commands label the edges of a workflow's transition table. Like
/// [`State`], they are opaque structurally comparable values; the
/// [`command_enum!`](crate::command_enum) macro generates an implementation
/// for fieldless enums.
pub trait Command: Clone + Eq + Hash + Debug + Send + Sync {
    /// The command's name, for diagnostics and failure messages.
    fn name(&self) -> &str;
}
