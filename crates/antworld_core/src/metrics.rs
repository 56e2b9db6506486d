//! Tick and food-registry counters plus logging setup.

use crate::food::PickupOutcome;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Interval, in ticks, between `info!` summaries.
pub const LOG_INTERVAL: u64 = 1000;

#[derive(Debug)]
pub struct Metrics {
    tick_count: AtomicU64,
    mask_rebuilds: AtomicU64,
    respawns: AtomicU64,
    bites_taken: AtomicU64,
    start_time: Instant,
}

/// Point-in-time copy of [`Metrics`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub ticks: u64,
    pub mask_rebuilds: u64,
    pub respawns: u64,
    pub bites_taken: u64,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tick_count: AtomicU64::new(0),
            mask_rebuilds: AtomicU64::new(0),
            respawns: AtomicU64::new(0),
            bites_taken: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// Records a completed dispersal tick.
    pub fn record_tick(&self, duration: Duration, food_total: f64, foraging_total: f64) {
        let tick = self.tick_count.fetch_add(1, Ordering::Relaxed) + 1;
        if tick.is_multiple_of(LOG_INTERVAL) {
            tracing::info!(
                tick,
                food_total,
                foraging_total,
                respawns = self.respawns.load(Ordering::Relaxed),
                duration_us = duration.as_micros() as u64,
                "Dispersal tick"
            );
        }
    }

    pub fn record_pickup(&self, outcome: &PickupOutcome) {
        self.bites_taken
            .fetch_add(outcome.bites_taken as u64, Ordering::Relaxed);
        if outcome.respawned > 0 {
            self.respawns
                .fetch_add(outcome.respawned as u64, Ordering::Relaxed);
            self.record_mask_rebuilds(outcome.respawned as u64);
        }
    }

    pub fn record_mask_rebuilds(&self, count: u64) {
        self.mask_rebuilds.fetch_add(count, Ordering::Relaxed);
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    #[must_use]
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            ticks: self.tick_count.load(Ordering::Relaxed),
            mask_rebuilds: self.mask_rebuilds.load(Ordering::Relaxed),
            respawns: self.respawns.load(Ordering::Relaxed),
            bites_taken: self.bites_taken.load(Ordering::Relaxed),
        }
    }
}

/// Installs a global fmt subscriber. `RUST_LOG` overrides `default_level`.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging(default_level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(filter)
            .finish(),
    )
    .ok();
}
