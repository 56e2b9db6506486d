pub mod macros;

use antworld_core::{AntWorld, FoodSource, Nest, PheromoneWorld, Position};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[allow(dead_code)]
pub struct WorldBuilder {
    width: usize,
    height: usize,
    seed: u64,
    random_sources: usize,
    sources: Vec<FoodSource>,
    nest: Option<Nest>,
    food_deposits: Vec<(Position, f32)>,
    foraging_deposits: Vec<(Position, f32)>,
}

#[allow(dead_code)]
impl WorldBuilder {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            seed: 42,
            random_sources: 0,
            sources: Vec::new(),
            nest: None,
            food_deposits: Vec::new(),
            foraging_deposits: Vec::new(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Randomly placed default sources. Ignored if explicit sources are given.
    pub fn with_random_sources(mut self, count: usize) -> Self {
        self.random_sources = count;
        self
    }

    pub fn with_source(mut self, x: f64, y: f64, radius: f64, bites: u32) -> Self {
        self.sources
            .push(FoodSource::new(Position::new(x, y), radius, bites));
        self
    }

    pub fn with_nest(mut self, x: f64, y: f64, radius: f64) -> Self {
        self.nest = Some(Nest {
            center: Position::new(x, y),
            radius,
        });
        self
    }

    pub fn with_food_pheromone(mut self, x: f64, y: f64, amount: f32) -> Self {
        self.food_deposits.push((Position::new(x, y), amount));
        self
    }

    pub fn with_foraging_pheromone(mut self, x: f64, y: f64, amount: f32) -> Self {
        self.foraging_deposits.push((Position::new(x, y), amount));
        self
    }

    pub fn build(self) -> PheromoneWorld {
        let rng = ChaCha8Rng::seed_from_u64(self.seed);
        let mut world = if self.sources.is_empty() {
            PheromoneWorld::new(self.width, self.height, self.random_sources, rng)
        } else {
            PheromoneWorld::with_sources(self.width, self.height, self.sources, rng)
        }
        .expect("Failed to build world");
        if let Some(nest) = self.nest {
            world.set_nest(nest);
        }
        for (p, a) in self.food_deposits {
            world.drop_food_pheromone(p, a);
        }
        for (p, a) in self.foraging_deposits {
            world.drop_foraging_pheromone(p, a);
        }
        world
    }
}

/// Every cell of a world, row-major.
#[allow(dead_code)]
pub fn cells(world: &PheromoneWorld) -> impl Iterator<Item = Position> {
    let (w, h) = (world.width(), world.height());
    (0..w * h).map(move |i| Position::from((i % w, i / w)))
}
