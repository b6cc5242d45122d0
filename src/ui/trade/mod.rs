//! Trade (buy crypto) feature module.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `event.rs` - What the screen sends (ScreenLoad, AmountChange, ...)
//! - `action.rs` - Transitions the view model feeds to the reducer
//! - `state.rs` - Screen state (Idle → Loading → Success | Error)
//! - `effect.rs` - One-shot outputs (navigation, buy error dialog)
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `view_model.rs` - Task that owns the state and talks to repositories

mod action;
mod effect;
mod event;
mod reducer;
mod state;
mod view_model;

pub use action::TradeAction;
pub use effect::TradeEffect;
pub use event::TradeEvent;
pub use reducer::TradeReducer;
pub use state::{TradeState, TradeSuccess, TradeValidationError};
pub use view_model::{TradeError, TradeViewModel};
