use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeEvent {
    TradeClick,
    SettingsClick,
}

impl Intent for HomeEvent {}
