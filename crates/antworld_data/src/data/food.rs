use super::position::Position;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A circular, depletable patch of food.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodSource {
    pub center: Position,
    pub radius: f64,
    pub bites: u32,
}

impl FoodSource {
    pub const DEFAULT_RADIUS: f64 = 20.0;
    pub const DEFAULT_BITES: u32 = 100;

    pub fn new(center: Position, radius: f64, bites: u32) -> Self {
        Self {
            center,
            radius,
            bites,
        }
    }

    /// Places a fresh source on a uniformly random cell of a `width x height` world.
    ///
    /// Both dimensions must be non-zero.
    pub fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        width: usize,
        height: usize,
        radius: f64,
        bites: u32,
    ) -> Self {
        let x = rng.gen_range(0..width);
        let y = rng.gen_range(0..height);
        Self::new(Position::from((x, y)), radius, bites)
    }

    #[inline]
    pub fn contains(&self, pos: &Position) -> bool {
        pos.is_within_radius(&self.center, self.radius)
    }

    #[inline]
    pub fn has_food(&self) -> bool {
        self.bites > 0
    }

    /// Removes one bite, never going below zero.
    pub fn take_bite(&mut self) {
        self.bites = self.bites.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_spawn_is_in_bounds_and_on_a_cell() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..500 {
            let src = FoodSource::spawn(&mut rng, 13, 4, 20.0, 100);
            assert!(src.center.is_in_bounds(13, 4));
            assert_eq!(src.center.x.fract(), 0.0);
            assert_eq!(src.center.y.fract(), 0.0);
            assert_eq!(src.bites, 100);
        }
    }

    #[test]
    fn test_take_bite_floors_at_zero() {
        let mut src = FoodSource::new(Position::new(1.0, 1.0), 2.0, 1);
        src.take_bite();
        assert!(!src.has_food());
        src.take_bite();
        assert_eq!(src.bites, 0);
    }

    #[test]
    fn test_serde_shape() {
        let src = FoodSource::new(Position::new(4.0, 5.0), 20.0, 3);
        let json = serde_json::to_string(&src).unwrap();
        let back: FoodSource = serde_json::from_str(&json).unwrap();
        assert_eq!(src, back);
    }
}
