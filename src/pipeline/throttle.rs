//! Fixed-rate request throttle
//!
//! Every fetch in a batch first waits on the shared [`Throttle`], which spaces
//! request starts at least `interval` apart no matter how many workers are
//! running. The first request of a batch goes out immediately.

use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

/// Spaces request starts by a fixed interval
#[derive(Debug)]
pub struct Throttle {
    /// Minimum time between two request starts
    interval: Duration,

    /// Earliest instant the next request may start
    next_slot: Mutex<Option<Instant>>,
}

impl Throttle {
    /// Creates a throttle with the given spacing
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_slot: Mutex::new(None),
        }
    }

    /// Creates a throttle from a millisecond delay
    pub fn from_millis(delay_ms: u64) -> Self {
        Self::new(Duration::from_millis(delay_ms))
    }

    /// The configured spacing
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Waits until the caller may start its request
    ///
    /// The first call on a fresh throttle returns immediately; there is no
    /// delay before the first request of a batch. Every later call starts at
    /// least `interval` after the previous one.
    ///
    /// Callers are served in the order they acquire the internal lock; the
    /// lock is held while sleeping so slots are never handed out twice.
    pub async fn acquire(&self) {
        let mut next_slot = self.next_slot.lock().await;
        let now = Instant::now();

        let start = match *next_slot {
            Some(slot) if slot > now => {
                tracing::trace!("Throttle: waiting {:?} for next slot", slot - now);
                tokio::time::sleep_until(slot).await;
                slot
            }
            _ => now,
        };

        *next_slot = Some(start + self.interval);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_first_acquire_is_immediate() {
        let throttle = Throttle::from_millis(1000);
        let start = Instant::now();

        throttle.acquire().await;

        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_consecutive_acquires_are_spaced() {
        let throttle = Throttle::from_millis(1000);
        let start = Instant::now();

        throttle.acquire().await;
        throttle.acquire().await;
        throttle.acquire().await;

        assert!(start.elapsed() >= Duration::from_millis(2000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_idle_time_counts_towards_spacing() {
        let throttle = Throttle::from_millis(500);

        throttle.acquire().await;
        tokio::time::sleep(Duration::from_millis(800)).await;

        let before = Instant::now();
        throttle.acquire().await;

        assert_eq!(before.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_interval_never_waits() {
        let throttle = Throttle::from_millis(0);
        let start = Instant::now();

        for _ in 0..5 {
            throttle.acquire().await;
        }

        assert_eq!(start.elapsed(), Duration::ZERO);
        assert_eq!(throttle.interval(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_shared_between_tasks() {
        let throttle = std::sync::Arc::new(Throttle::from_millis(100));
        let start = Instant::now();

        let mut handles = Vec::new();
        for _ in 0..4 {
            let throttle = throttle.clone();
            handles.push(tokio::spawn(async move {
                throttle.acquire().await;
                Instant::now()
            }));
        }

        let mut starts = Vec::new();
        for handle in handles {
            starts.push(handle.await.unwrap());
        }
        starts.sort();

        assert!(starts[3] - start >= Duration::from_millis(300));
        for pair in starts.windows(2) {
            assert!(pair[1] - pair[0] >= Duration::from_millis(100));
        }
    }
}
