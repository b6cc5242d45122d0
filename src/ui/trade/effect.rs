use crate::ui::mvi::Effect;

/// One-shot outputs of the trade screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeEffect {
    NavigateToSettings,
    /// A purchase failed; the screen should show an error dialog.
    ShowBuyError,
}

impl Effect for TradeEffect {}
