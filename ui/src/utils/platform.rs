//! Platform helpers
//!
//! The UI ships to the browser as WASM, but the logic is also exercised natively
//! in unit tests. Anything that touches a timer goes through here so both targets
//! share one call site.

#[cfg(target_arch = "wasm32")]
use gloo_timers::future::TimeoutFuture;

/// Suspend the current task for `delay_ms` milliseconds.
pub async fn sleep_ms(delay_ms: u32) {
    if delay_ms == 0 {
        return;
    }

    #[cfg(target_arch = "wasm32")]
    TimeoutFuture::new(delay_ms).await;

    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(u64::from(delay_ms))).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    #[tokio::test]
    async fn test_sleep_waits_at_least_the_delay() {
        let started = Instant::now();
        sleep_ms(20).await;
        assert!(started.elapsed() >= Duration::from_millis(20));
    }

    #[tokio::test]
    async fn test_zero_delay_returns_immediately() {
        let started = Instant::now();
        sleep_ms(0).await;
        assert!(started.elapsed() < Duration::from_millis(20));
    }
}
