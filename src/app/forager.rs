//! Deterministic stand-in for an ant colony, used by the headless driver.
//!
//! One scout circles the nest laying foraging pheromone. Each food source has a
//! harvester parked on its centre that takes one bite per tick and marks the
//! spot with food pheromone, so sources deplete and respawn on a fixed cadence.

use antworld_core::{AntWorld, Nest, PheromoneWorld, Position};

const SCOUT_DEPOSIT: f32 = 0.5;
const HARVEST_DEPOSIT: f32 = 0.3;
const SCOUT_STEP_RADIANS: f64 = 0.1;
const SCOUT_RING_MARGIN: f64 = 5.0;

#[derive(Debug, Clone)]
pub struct SyntheticColony {
    nest: Nest,
    angle: f64,
}

impl SyntheticColony {
    pub fn new(nest: &Nest) -> Self {
        Self {
            nest: *nest,
            angle: 0.0,
        }
    }

    fn scout_position(&self) -> Position {
        let r = self.nest.radius + SCOUT_RING_MARGIN;
        Position::new(
            self.nest.center.x + r * self.angle.cos(),
            self.nest.center.y + r * self.angle.sin(),
        )
    }

    /// Runs every caller-side action for one tick.
    pub fn act(&mut self, world: &mut PheromoneWorld) {
        let scout = self.scout_position();
        if !world.is_obstacle(scout) {
            world.drop_foraging_pheromone(scout, SCOUT_DEPOSIT);
        }
        self.angle = (self.angle + SCOUT_STEP_RADIANS) % std::f64::consts::TAU;

        let centers: Vec<Position> = world.food_sources().iter().map(|s| s.center).collect();
        for center in centers {
            if world.contains_food(center) {
                world.pick_up_food(center);
                world.drop_food_pheromone(center, HARVEST_DEPOSIT);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_scout_stays_on_ring() {
        let nest = Nest {
            center: Position::new(50.0, 50.0),
            radius: 10.0,
        };
        let mut colony = SyntheticColony::new(&nest);
        let mut world = PheromoneWorld::new(100, 100, 0, ChaCha8Rng::seed_from_u64(2)).unwrap();
        for _ in 0..20 {
            let p = colony.scout_position();
            assert!((p.distance_sq(&nest.center).sqrt() - 15.0).abs() < 1e-9);
            colony.act(&mut world);
        }
        assert!(world.grid().foraging_stats().sum > 0.0);
    }

    #[test]
    fn test_harvesters_take_one_bite_per_source() {
        let mut world = PheromoneWorld::with_sources(
            200,
            200,
            vec![
                antworld_core::FoodSource::new(Position::new(20.0, 20.0), 20.0, 100),
                antworld_core::FoodSource::new(Position::new(150.0, 150.0), 20.0, 100),
            ],
            ChaCha8Rng::seed_from_u64(4),
        )
        .unwrap();
        let mut colony = SyntheticColony::new(world.nest());
        colony.act(&mut world);
        let bites: Vec<u32> = world.food_sources().iter().map(|s| s.bites).collect();
        assert_eq!(bites, vec![99, 99]);
        assert_eq!(world.food_strength(Position::new(20.0, 20.0)), HARVEST_DEPOSIT);
    }
}
