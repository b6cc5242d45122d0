use crate::ui::mvi::{effect_channel, EffectReceiver, EffectSender};

use super::effect::HomeEffect;
use super::event::HomeEvent;

pub struct HomeViewModel {
    effects_tx: EffectSender<HomeEffect>,
    effects_rx: Option<EffectReceiver<HomeEffect>>,
}

impl HomeViewModel {
    pub fn new() -> Self {
        let (effects_tx, effects_rx) = effect_channel();
        Self {
            effects_tx,
            effects_rx: Some(effects_rx),
        }
    }

    pub fn on_event(&self, event: HomeEvent) {
        let effect = match event {
            HomeEvent::TradeClick => HomeEffect::NavigateToTrade,
            HomeEvent::SettingsClick => HomeEffect::NavigateToSettings,
        };
        self.effects_tx.emit(effect);
    }

    /// Take the effect stream. Only the first caller gets it.
    pub fn take_effects(&mut self) -> Option<EffectReceiver<HomeEffect>> {
        self.effects_rx.take()
    }
}

impl Default for HomeViewModel {
    fn default() -> Self {
        Self::new()
    }
}
