//! The world surface agents and renderers talk to, and its default implementation.

use crate::config::AppConfig;
use crate::dispersal::{DispersalEngine, DispersalPolicy, NeighborAverage};
use crate::error::{Result, WorldError};
use crate::food::{FoodRegistry, PickupOutcome};
use crate::grid::GridStore;
use crate::metrics::Metrics;
use antworld_data::{FoodSource, Position};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Everything an agent can sense or change in a world.
///
/// Cell-indexed methods truncate `pos` to a cell; callers must check
/// [`AntWorld::is_obstacle`] first. Out-of-bounds cell access panics.
pub trait AntWorld {
    fn width(&self) -> usize;
    fn height(&self) -> usize;

    fn is_obstacle(&self, pos: Position) -> bool;

    fn drop_food_pheromone(&mut self, pos: Position, amount: f32);
    fn drop_foraging_pheromone(&mut self, pos: Position, amount: f32);
    fn food_strength(&self, pos: Position) -> f32;
    fn foraging_strength(&self, pos: Position) -> f32;

    fn contains_food(&self, pos: Position) -> bool;
    fn pick_up_food(&mut self, pos: Position);
    fn drop_food(&mut self, pos: Position);

    fn is_home(&self, pos: Position) -> bool;

    /// Worlds without corpse tracking report zero.
    fn dead_ant_count(&self, _pos: Position) -> f32 {
        0.0
    }

    /// Worlds without a food store report zero.
    fn food_count(&self) -> u64 {
        0
    }

    /// Advances both fields one tick with a caller-supplied per-cell rule.
    fn disperse_pheromones(&mut self, policy: &dyn DispersalPolicy);

    /// Advances both fields one tick with the world's own dispersal.
    fn self_contained_disperse(&mut self);

    fn set_obstacle(&mut self, _pos: Position, _add: bool) {}
    fn hit_obstacle(&mut self, _pos: Position, _strength: f32) {}
}

/// Circular home area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Nest {
    pub center: Position,
    pub radius: f64,
}

impl Nest {
    pub const DEFAULT_RADIUS: f64 = 20.0;

    /// Nest centred on the midpoint of the right edge.
    pub fn right_edge(width: usize, height: usize) -> Self {
        Self {
            center: Position::new(width as f64, (height / 2) as f64),
            radius: Self::DEFAULT_RADIUS,
        }
    }

    pub fn contains(&self, pos: &Position) -> bool {
        pos.is_within_radius(&self.center, self.radius)
    }
}

/// Open world with no interior obstacles, two pheromone fields and respawning food.
#[derive(Debug)]
pub struct PheromoneWorld {
    grid: GridStore,
    food: FoodRegistry,
    engine: DispersalEngine,
    nest: Nest,
    metrics: Metrics,
}

impl PheromoneWorld {
    /// World with `food_sources` default-sized sources and default dispersal.
    pub fn new(width: usize, height: usize, food_sources: usize, rng: ChaCha8Rng) -> Result<Self> {
        let mut grid = GridStore::new(width, height)?;
        let food = FoodRegistry::new(food_sources, &mut grid, rng);
        Ok(Self::assemble(
            grid,
            food,
            DispersalEngine::default(),
            Nest::right_edge(width, height),
        ))
    }

    /// World with explicit food sources. Respawns use the default radius and capacity.
    pub fn with_sources(
        width: usize,
        height: usize,
        sources: Vec<FoodSource>,
        rng: ChaCha8Rng,
    ) -> Result<Self> {
        let mut grid = GridStore::new(width, height)?;
        let food = FoodRegistry::from_sources(
            sources,
            &mut grid,
            rng,
            FoodSource::DEFAULT_RADIUS,
            FoodSource::DEFAULT_BITES,
        );
        Ok(Self::assemble(
            grid,
            food,
            DispersalEngine::default(),
            Nest::right_edge(width, height),
        ))
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| WorldError::config(e.to_string()))?;
        let world = &config.world;
        let mut grid = GridStore::new(world.width, world.height)?;
        let food = FoodRegistry::with_params(
            world.food_sources,
            world.food_radius,
            world.food_bites,
            &mut grid,
            world.rng(),
        );
        let engine = DispersalEngine::new(
            NeighborAverage::new(config.dispersal.blend, config.dispersal.evaporation),
            config.dispersal.parallel,
        );
        Ok(Self::assemble(grid, food, engine, world.nest.resolve(world.width, world.height)))
    }

    fn assemble(grid: GridStore, food: FoodRegistry, engine: DispersalEngine, nest: Nest) -> Self {
        tracing::info!(
            width = grid.width(),
            height = grid.height(),
            food_sources = food.len(),
            "World created"
        );
        let metrics = Metrics::new();
        metrics.record_mask_rebuilds(food.mask_rebuilds());
        Self {
            grid,
            food,
            engine,
            nest,
            metrics,
        }
    }

    pub fn grid(&self) -> &GridStore {
        &self.grid
    }

    pub fn food_sources(&self) -> &[FoodSource] {
        self.food.sources()
    }

    pub fn food_registry(&self) -> &FoodRegistry {
        &self.food
    }

    pub fn nest(&self) -> &Nest {
        &self.nest
    }

    pub fn set_nest(&mut self, nest: Nest) {
        self.nest = nest;
    }

    pub fn engine(&self) -> &DispersalEngine {
        &self.engine
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Pickup that also reports what happened.
    pub fn pick_up_food_at(&mut self, pos: &Position) -> PickupOutcome {
        let outcome = self.food.pick_up_food(&mut self.grid, pos);
        self.metrics.record_pickup(&outcome);
        outcome
    }

    fn record_tick(&self, started: Instant) {
        self.metrics.record_tick(
            started.elapsed(),
            self.grid.food_stats().sum,
            self.grid.foraging_stats().sum,
        );
    }
}

impl AntWorld for PheromoneWorld {
    fn width(&self) -> usize {
        self.grid.width()
    }

    fn height(&self) -> usize {
        self.grid.height()
    }

    fn is_obstacle(&self, pos: Position) -> bool {
        self.grid.is_obstacle(&pos)
    }

    fn drop_food_pheromone(&mut self, pos: Position, amount: f32) {
        self.grid.drop_food_pheromone(&pos, amount);
    }

    fn drop_foraging_pheromone(&mut self, pos: Position, amount: f32) {
        self.grid.drop_foraging_pheromone(&pos, amount);
    }

    fn food_strength(&self, pos: Position) -> f32 {
        self.grid.food_strength(&pos)
    }

    fn foraging_strength(&self, pos: Position) -> f32 {
        self.grid.foraging_strength(&pos)
    }

    fn contains_food(&self, pos: Position) -> bool {
        self.grid.contains_food(&pos)
    }

    fn pick_up_food(&mut self, pos: Position) {
        self.pick_up_food_at(&pos);
    }

    fn drop_food(&mut self, pos: Position) {
        self.food.drop_food(&pos);
    }

    fn is_home(&self, pos: Position) -> bool {
        self.nest.contains(&pos)
    }

    fn disperse_pheromones(&mut self, policy: &dyn DispersalPolicy) {
        let started = Instant::now();
        let (width, height) = (self.grid.width(), self.grid.height());
        let current: &dyn AntWorld = self;
        let next: Vec<[f32; 2]> = (0..width * height)
            .map(|idx| policy.dispersed_value(current, Position::from((idx % width, idx / width))))
            .collect();
        self.grid.commit_pairs(&next);
        self.record_tick(started);
    }

    fn self_contained_disperse(&mut self) {
        let started = Instant::now();
        self.engine.tick(&mut self.grid);
        self.record_tick(started);
    }
}
