//! Home feature module.
//!
//! The home screen holds no state: every event maps straight to a
//! navigation effect.

mod effect;
mod event;
mod view_model;

pub use effect::HomeEffect;
pub use event::HomeEvent;
pub use view_model::HomeViewModel;
