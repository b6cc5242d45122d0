//! The contracts a screen implements to plug into a view model.

use std::fmt::Debug;

/// Something that drives a transition: a screen event such as a click or
/// typed text, or an internal step such as "balances arrived".
pub trait Intent: Debug + Send + 'static {}

/// Everything a screen needs to draw itself.
///
/// A value is never edited in place; each transition produces the next
/// one. `PartialEq` lets the view model skip publishing a no-op change,
/// and `Default` is what a screen shows before its first event.
pub trait UiState: Clone + PartialEq + Default + Send + Sync + 'static {}

/// A one-shot output such as a navigation request or an error dialog.
pub trait Effect: Debug + Send + 'static {}

/// Computes the next state. All transitions of a screen go through here.
///
/// `reduce` may read collaborators held by `self` (a formatter) but has
/// no side effects: no I/O, no effects, no shared mutation.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(&self, state: Self::State, intent: Self::Intent) -> Self::State;
}
