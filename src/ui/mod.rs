//! Presentation-facing view models built on the MVI primitives.

pub mod home;
pub mod mvi;
pub mod trade;
