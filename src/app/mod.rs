//! Headless driver: builds a world from configuration and runs the tick loop.

pub mod forager;

use crate::app::forager::SyntheticColony;
use antworld_core::grid::FieldStats;
use antworld_core::{AntWorld, AppConfig, FoodSource, MetricsSnapshot, PheromoneWorld};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// End-of-run report printed as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub ticks: u64,
    pub width: usize,
    pub height: usize,
    pub food_field: FieldStats,
    pub foraging_field: FieldStats,
    pub food_cells: usize,
    pub sources: Vec<FoodSource>,
    pub metrics: MetricsSnapshot,
    pub elapsed_ms: u64,
}

pub struct App {
    pub world: PheromoneWorld,
    pub config: AppConfig,
    colony: Option<SyntheticColony>,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        let world = PheromoneWorld::from_config(&config)?;
        Ok(Self {
            world,
            config,
            colony: None,
        })
    }

    /// Enables the built-in deposit/pickup pattern run before every tick.
    pub fn with_synthetic_colony(mut self) -> Self {
        self.colony = Some(SyntheticColony::new(self.world.nest()));
        self
    }

    /// One simulation step: callers act on the world, then the fields advance.
    pub fn step(&mut self) {
        if let Some(colony) = self.colony.as_mut() {
            colony.act(&mut self.world);
        }
        self.world.self_contained_disperse();
    }

    pub fn run(&mut self, ticks: u64) -> RunSummary {
        let started = Instant::now();
        for _ in 0..ticks {
            self.step();
        }
        tracing::info!(
            ticks,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Run finished"
        );
        self.summary(started)
    }

    fn summary(&self, started: Instant) -> RunSummary {
        let grid = self.world.grid();
        RunSummary {
            ticks: self.world.metrics().tick_count(),
            width: self.world.width(),
            height: self.world.height(),
            food_field: grid.food_stats(),
            foraging_field: grid.foraging_stats(),
            food_cells: grid.food_cell_count(),
            sources: self.world.food_sources().to_vec(),
            metrics: self.world.metrics().snapshot(),
            elapsed_ms: started.elapsed().as_millis() as u64,
        }
    }
}
