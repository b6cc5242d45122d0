//! Trade view model: a task that owns [`TradeState`].
//!
//! Events are queued on a channel and handled one at a time by a single
//! task, so no two transitions interleave their writes to state. State is
//! published on a `watch` channel (latest value, replayable); effects on a
//! single-consumer channel (each delivered once).

use std::collections::VecDeque;
use std::sync::Arc;

use rust_decimal::Decimal;
use thiserror::Error;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::format::AmountFormatter;
use crate::repository::{Balances, BalancesRepository, PriceRepository, RepositoryError};
use crate::ui::mvi::{effect_channel, EffectReceiver, EffectSender, Reducer};

use super::action::TradeAction;
use super::effect::TradeEffect;
use super::event::TradeEvent;
use super::reducer::TradeReducer;
use super::state::{TradeState, TradeSuccess};

#[derive(Debug, Error)]
pub enum TradeError {
    #[error("trade view model has stopped")]
    Stopped,
}

/// Handle to a running trade view model.
pub struct TradeViewModel {
    events: Option<mpsc::UnboundedSender<TradeEvent>>,
    state: watch::Receiver<TradeState>,
    effects: Option<EffectReceiver<TradeEffect>>,
    task: JoinHandle<()>,
}

impl TradeViewModel {
    /// Spawn the view model task on the current tokio runtime.
    pub fn spawn(
        balances: Arc<dyn BalancesRepository>,
        prices: Arc<dyn PriceRepository>,
        formatter: AmountFormatter,
    ) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let (state_tx, state_rx) = watch::channel(TradeState::default());
        let (effects_tx, effects_rx) = effect_channel();

        let worker = TradeWorker {
            balances,
            prices,
            reducer: TradeReducer::new(formatter),
            state: state_tx,
            effects: effects_tx,
            events: events_rx,
            events_open: true,
            pending: VecDeque::new(),
        };
        let task = tokio::spawn(worker.run());

        Self {
            events: Some(events_tx),
            state: state_rx,
            effects: Some(effects_rx),
            task,
        }
    }

    /// Queue an event. Returns immediately; the transition happens on the
    /// view model task.
    pub fn dispatch(&self, event: TradeEvent) -> Result<(), TradeError> {
        let Some(events) = &self.events else {
            return Err(TradeError::Stopped);
        };
        events.send(event).map_err(|_| TradeError::Stopped)
    }

    /// Latest published state.
    pub fn state(&self) -> TradeState {
        self.state.borrow().clone()
    }

    /// Observe state changes. A new subscriber sees the latest state first.
    pub fn subscribe(&self) -> watch::Receiver<TradeState> {
        self.state.clone()
    }

    /// Take the effect stream. Only the first caller gets it.
    pub fn take_effects(&mut self) -> Option<EffectReceiver<TradeEffect>> {
        self.effects.take()
    }

    /// Stop accepting events. Already queued events are still handled;
    /// the state stream closes once they are.
    pub fn close(&mut self) {
        self.events = None;
    }

    /// Close and wait until queued events are handled.
    pub async fn shutdown(mut self) {
        self.close();
        if let Err(err) = self.task.await {
            tracing::warn!(%err, "Trade view model task ended abnormally");
        }
    }
}

struct TradeWorker {
    balances: Arc<dyn BalancesRepository>,
    prices: Arc<dyn PriceRepository>,
    reducer: TradeReducer,
    state: watch::Sender<TradeState>,
    effects: EffectSender<TradeEffect>,
    events: mpsc::UnboundedReceiver<TradeEvent>,
    events_open: bool,
    /// Events that arrived while a load was in flight.
    pending: VecDeque<TradeEvent>,
}

impl TradeWorker {
    async fn run(mut self) {
        while let Some(event) = self.next_event().await {
            self.handle(event).await;
        }
        tracing::debug!("Trade view model stopped");
    }

    async fn next_event(&mut self) -> Option<TradeEvent> {
        if let Some(event) = self.pending.pop_front() {
            return Some(event);
        }
        if !self.events_open {
            return None;
        }
        self.events.recv().await
    }

    async fn handle(&mut self, event: TradeEvent) {
        tracing::debug!(?event, "Trade event");
        match event {
            TradeEvent::ScreenLoad => self.load().await,
            TradeEvent::SettingsClick => self.effects.emit(TradeEffect::NavigateToSettings),
            TradeEvent::BuyCryptoClick => self.buy().await,
            TradeEvent::AmountChange(value) => self.apply(TradeAction::AmountChanged(value)),
        }
    }

    fn apply(&self, action: TradeAction) {
        let reducer = &self.reducer;
        self.state.send_if_modified(|state| {
            let next = reducer.reduce(state.clone(), action);
            if *state == next {
                return false;
            }
            *state = next;
            true
        });
    }

    fn current_success(&self) -> Option<TradeSuccess> {
        self.state.borrow().success().cloned()
    }

    /// Load balances, then price. A `ScreenLoad` arriving meanwhile
    /// cancels this load and starts over; other events wait in `pending`.
    ///
    /// Events parked before a superseding `ScreenLoad` were aimed at the
    /// state it replaces, so only navigation survives the restart.
    async fn load(&mut self) {
        loop {
            self.apply(TradeAction::LoadStarted);

            let fetch = fetch_market(Arc::clone(&self.balances), Arc::clone(&self.prices));
            tokio::pin!(fetch);

            let outcome = loop {
                tokio::select! {
                    biased;
                    result = &mut fetch => break Some(result),
                    next = self.events.recv(), if self.events_open => match next {
                        Some(TradeEvent::ScreenLoad) => break None,
                        Some(other) => self.pending.push_back(other),
                        None => self.events_open = false,
                    },
                }
            };

            match outcome {
                None => {
                    let parked = self.pending.len();
                    self.pending
                        .retain(|event| matches!(event, TradeEvent::SettingsClick));
                    tracing::debug!(
                        dropped = parked - self.pending.len(),
                        "Screen load superseded by a newer one"
                    );
                }
                Some(Ok((balances, crypto_price))) => {
                    tracing::debug!(
                        crypto_balance = %balances.crypto_balance,
                        fiat_balance = %balances.fiat_balance,
                        %crypto_price,
                        "Screen loaded"
                    );
                    self.apply(TradeAction::Loaded {
                        balances,
                        crypto_price,
                    });
                    return;
                }
                Some(Err(err)) => {
                    tracing::warn!(%err, "Screen load failed");
                    self.apply(TradeAction::LoadFailed);
                    return;
                }
            }
        }
    }

    async fn buy(&mut self) {
        let Some(success) = self.current_success() else {
            tracing::debug!("Buy ignored: screen not loaded");
            return;
        };
        if !success.is_buying_allowed {
            tracing::info!(amount = %success.amount, "Buy refused: insufficient balance");
            return;
        }

        self.apply(TradeAction::PurchaseStarted);

        match self
            .balances
            .buy_crypto(success.amount, success.crypto_price)
            .await
        {
            Ok(()) => self.load().await,
            Err(err) => {
                // State stays Loading until the screen dispatches ScreenLoad.
                tracing::warn!(%err, amount = %success.amount, "Purchase failed");
                self.effects.emit(TradeEffect::ShowBuyError);
            }
        }
    }
}

async fn fetch_market(
    balances: Arc<dyn BalancesRepository>,
    prices: Arc<dyn PriceRepository>,
) -> Result<(Balances, Decimal), RepositoryError> {
    let snapshot = balances.get_balances().await?;
    let crypto_price = prices.get_crypto_price().await?;
    Ok((snapshot, crypto_price))
}
