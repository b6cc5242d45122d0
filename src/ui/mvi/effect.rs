//! One-shot effects in MVI architecture.
//!
//! State is replayable: a late observer sees the latest value. Effects are
//! not: each one is delivered to a single consumer exactly once, so a
//! re-subscribing view never repeats a navigation or re-opens a dialog.

use tokio::sync::mpsc;

use super::traits::Effect;

/// Producer half, owned by the view model.
#[derive(Debug)]
pub struct EffectSender<E: Effect> {
    tx: mpsc::UnboundedSender<E>,
}

impl<E: Effect> Clone for EffectSender<E> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<E: Effect> EffectSender<E> {
    /// Emit an effect. Dropped with a trace log when nobody can consume it.
    pub fn emit(&self, effect: E) {
        tracing::debug!(?effect, "Effect emitted");
        if let Err(err) = self.tx.send(effect) {
            tracing::trace!(effect = ?err.0, "Effect dropped (receiver gone)");
        }
    }
}

/// Consumer half. There is exactly one per channel; receiving an effect
/// consumes it.
#[derive(Debug)]
pub struct EffectReceiver<E: Effect> {
    rx: mpsc::UnboundedReceiver<E>,
}

impl<E: Effect> EffectReceiver<E> {
    /// Wait for the next effect. Returns `None` once the producer is gone
    /// and every pending effect has been consumed.
    pub async fn recv(&mut self) -> Option<E> {
        self.rx.recv().await
    }

    /// Take the next pending effect without waiting.
    pub fn try_recv(&mut self) -> Option<E> {
        self.rx.try_recv().ok()
    }
}

/// Create a single-consumer effect channel.
pub fn effect_channel<E: Effect>() -> (EffectSender<E>, EffectReceiver<E>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (EffectSender { tx }, EffectReceiver { rx })
}
