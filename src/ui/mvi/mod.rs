//! Model-View-Intent building blocks shared by every screen.
//!
//! ```text
//!  event ──→ view model ──→ Reducer ──→ State  (watch, latest value)
//!                 │
//!                 └──────────────────→ Effect (single consumer, once)
//! ```
//!
//! A view model turns events into [`Intent`]s, folds them into its
//! [`UiState`] with a [`Reducer`], and emits [`Effect`]s for things that
//! must happen once, such as navigation.

mod effect;
mod traits;

pub use effect::{effect_channel, EffectReceiver, EffectSender};
pub use traits::{Effect, Intent, Reducer, UiState};
