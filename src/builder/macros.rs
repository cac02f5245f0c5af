//! Macros for ergonomic state machine construction.

/// Declare a transition table without hooks.
///
/// Expands to a `Vec<(String, StateDefinition<C, E>)>` suitable for
/// [`FsmBuilder::states`](crate::builder::FsmBuilder::states). Hooks can be
/// attached afterwards with `configure_state`.
///
/// # Example
///
/// ```
/// use actionfsm::builder::FsmBuilder;
/// use actionfsm::states;
/// use std::convert::Infallible;
///
/// let fsm = FsmBuilder::<(), Infallible>::new()
///     .initial_state("red")
///     .states(states! {
///         "red" => { "next" => "green" },
///         "green" => { "next" => "yellow" },
///         "yellow" => { "next" => "red" },
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(fsm.reachable_states(), vec!["green"]);
/// ```
#[macro_export]
macro_rules! states {
    (
        $(
            $state:expr => {
                $( $action:expr => $target:expr ),* $(,)?
            }
        ),* $(,)?
    ) => {
        ::std::vec![
            $(
                (
                    ::std::string::String::from($state),
                    $crate::core::StateDefinition::new()
                        $( .action($action, $crate::core::ActionDefinition::new($target)) )*
                )
            ),*
        ]
    };
}
