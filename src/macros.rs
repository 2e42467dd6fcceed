//! Macros for declaring workflow state and command enums.

/// Generate a [`State`](crate::workflow::State) implementation for a
/// fieldless enum.
///
/// The macro derives the structural traits the workflow engine needs plus
/// serde, so callers can persist workflow state.
///
/// # Example
///
/// ```
/// use railyard::state_enum;
///
/// state_enum! {
///     pub enum DocumentState {
///         Draft,
///         InReview,
///         Published,
///     }
/// }
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::workflow::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

/// Generate a [`Command`](crate::workflow::Command) implementation for a
/// fieldless enum.
///
/// # Example
///
/// ```
/// use railyard::command_enum;
///
/// command_enum! {
///     pub enum DocumentCommand {
///         Submit,
///         Approve,
///         Reject,
///     }
/// }
/// ```
#[macro_export]
macro_rules! command_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::workflow::Command for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
