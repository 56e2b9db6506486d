//! Food registry: a fixed number of circular, depletable food sources.
//!
//! The registry is the only writer of the grid's food mask. The mask is
//! rebuilt in full whenever the set of sources changes, which only happens
//! when a source runs out of bites and respawns somewhere else.

use crate::grid::GridStore;
use antworld_data::{FoodSource, Position};
use rand_chacha::ChaCha8Rng;

/// What a single pickup did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PickupOutcome {
    /// Sources that lost a bite.
    pub bites_taken: usize,
    /// Sources that ran out and were replaced.
    pub respawned: usize,
}

#[derive(Debug, Clone)]
pub struct FoodRegistry {
    sources: Vec<FoodSource>,
    rng: ChaCha8Rng,
    radius: f64,
    bites: u32,
    mask_rebuilds: u64,
}

impl FoodRegistry {
    /// Places `count` sources with the default radius and capacity.
    pub fn new(count: usize, grid: &mut GridStore, rng: ChaCha8Rng) -> Self {
        Self::with_params(
            count,
            FoodSource::DEFAULT_RADIUS,
            FoodSource::DEFAULT_BITES,
            grid,
            rng,
        )
    }

    pub fn with_params(
        count: usize,
        radius: f64,
        bites: u32,
        grid: &mut GridStore,
        mut rng: ChaCha8Rng,
    ) -> Self {
        let sources = (0..count)
            .map(|_| FoodSource::spawn(&mut rng, grid.width(), grid.height(), radius, bites))
            .collect();
        Self::from_sources(sources, grid, rng, radius, bites)
    }

    /// Starts from explicit sources; respawns still use `radius` and `bites`.
    pub fn from_sources(
        sources: Vec<FoodSource>,
        grid: &mut GridStore,
        rng: ChaCha8Rng,
        radius: f64,
        bites: u32,
    ) -> Self {
        let mut registry = Self {
            sources,
            rng,
            radius,
            bites,
            mask_rebuilds: 0,
        };
        registry.rebuild_mask(grid);
        registry
    }

    pub fn sources(&self) -> &[FoodSource] {
        &self.sources
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Total mask rebuilds, including the one done at construction.
    pub fn mask_rebuilds(&self) -> u64 {
        self.mask_rebuilds
    }

    /// Takes one bite from every source whose circle contains `pos`.
    ///
    /// A source that reaches zero bites is replaced in place by a fresh one and
    /// the mask is rebuilt before the next source is considered.
    pub fn pick_up_food(&mut self, grid: &mut GridStore, pos: &Position) -> PickupOutcome {
        let mut outcome = PickupOutcome::default();
        for i in 0..self.sources.len() {
            if !self.sources[i].contains(pos) {
                continue;
            }
            self.sources[i].take_bite();
            outcome.bites_taken += 1;

            if !self.sources[i].has_food() {
                let fresh = FoodSource::spawn(
                    &mut self.rng,
                    grid.width(),
                    grid.height(),
                    self.radius,
                    self.bites,
                );
                tracing::debug!(
                    index = i,
                    old_x = self.sources[i].center.x,
                    old_y = self.sources[i].center.y,
                    new_x = fresh.center.x,
                    new_y = fresh.center.y,
                    "Food source depleted, respawning"
                );
                self.sources[i] = fresh;
                outcome.respawned += 1;
                self.rebuild_mask(grid);
            }
        }
        outcome
    }

    /// The default world does not accept food back.
    pub fn drop_food(&mut self, _pos: &Position) {}

    fn rebuild_mask(&mut self, grid: &mut GridStore) {
        grid.rebuild_food_mask(&self.sources);
        self.mask_rebuilds += 1;
    }
}
