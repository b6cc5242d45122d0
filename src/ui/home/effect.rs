use crate::ui::mvi::Effect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeEffect {
    NavigateToTrade,
    NavigateToSettings,
}

impl Effect for HomeEffect {}
