use std::time::Duration;

/// Suspend the caller for `delay` to mimic a network round trip.
///
/// A zero delay returns without touching the timer.
pub async fn simulate_network_latency(delay: Duration) {
    if delay.is_zero() {
        return;
    }
    tokio::time::sleep(delay).await;
}
