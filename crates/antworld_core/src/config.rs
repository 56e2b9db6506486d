//! Configuration management for world parameters.
//!
//! Strongly-typed structures that map to a `config.toml` file. Every field has a
//! default, so a file only needs the keys it wants to change.
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [world]
//! width = 200
//! height = 120
//! food_sources = 4
//! seed = 42
//!
//! [world.nest]
//! radius = 15.0
//!
//! [dispersal]
//! blend = 0.5
//! evaporation = 0.95
//! ```

use crate::dispersal::{DEFAULT_BLEND, DEFAULT_EVAPORATION};
use crate::world::Nest;
use antworld_data::{FoodSource, Position};
use anyhow::Context;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Largest accepted width or height.
pub const MAX_DIMENSION: usize = 10_000;

/// Grid size, food layout and random seed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    pub width: usize,
    pub height: usize,
    pub food_sources: usize,
    pub food_radius: f64,
    pub food_bites: u32,
    /// Fixed seed for reproducible food placement; `None` draws one at startup.
    pub seed: Option<u64>,
    pub nest: NestConfig,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
            food_sources: 3,
            food_radius: FoodSource::DEFAULT_RADIUS,
            food_bites: FoodSource::DEFAULT_BITES,
            seed: None,
            nest: NestConfig::default(),
        }
    }
}

impl WorldConfig {
    /// The single random source for food placement and respawns.
    pub fn rng(&self) -> ChaCha8Rng {
        let seed = self.seed.unwrap_or_else(rand::random);
        tracing::debug!(seed, "Seeding food registry");
        ChaCha8Rng::seed_from_u64(seed)
    }
}

/// Nest placement. Unset coordinates fall back to the midpoint of the right edge.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct NestConfig {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub radius: f64,
}

impl Default for NestConfig {
    fn default() -> Self {
        Self {
            x: None,
            y: None,
            radius: Nest::DEFAULT_RADIUS,
        }
    }
}

impl NestConfig {
    pub fn resolve(&self, width: usize, height: usize) -> Nest {
        let fallback = Nest::right_edge(width, height);
        Nest {
            center: Position::new(
                self.x.unwrap_or(fallback.center.x),
                self.y.unwrap_or(fallback.center.y),
            ),
            radius: self.radius,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DispersalConfig {
    /// Weight of the cell's own value against its neighbour average.
    pub blend: f32,
    /// Per-tick multiplier applied after blending.
    pub evaporation: f32,
    /// Compute rows on the rayon pool. Ignored without the `parallel` feature.
    pub parallel: bool,
}

impl Default for DispersalConfig {
    fn default() -> Self {
        Self {
            blend: DEFAULT_BLEND,
            evaporation: DEFAULT_EVAPORATION,
            parallel: true,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub world: WorldConfig,
    pub dispersal: DispersalConfig,
}

impl AppConfig {
    /// Reads a TOML file. A missing file yields the defaults; a malformed one is an error.
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::info!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        tracing::info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Validates all configuration parameters.
    ///
    /// Returns the first failing rule as an error.
    pub fn validate(&self) -> anyhow::Result<()> {
        let world = &self.world;
        anyhow::ensure!(world.width > 0, "World width must be positive");
        anyhow::ensure!(
            world.width <= MAX_DIMENSION,
            "World width too large (max {MAX_DIMENSION})"
        );
        anyhow::ensure!(world.height > 0, "World height must be positive");
        anyhow::ensure!(
            world.height <= MAX_DIMENSION,
            "World height too large (max {MAX_DIMENSION})"
        );
        anyhow::ensure!(
            world.food_radius.is_finite() && world.food_radius > 0.0,
            "Food radius must be positive"
        );
        anyhow::ensure!(world.food_bites >= 1, "Food bites must be at least 1");
        anyhow::ensure!(
            world.nest.radius.is_finite() && world.nest.radius >= 0.0,
            "Nest radius must be non-negative"
        );

        let dispersal = &self.dispersal;
        anyhow::ensure!(
            (0.0..=1.0).contains(&dispersal.blend),
            "Dispersal blend must be in [0.0, 1.0]"
        );
        anyhow::ensure!(
            (0.0..=1.0).contains(&dispersal.evaporation),
            "Evaporation must be in [0.0, 1.0]"
        );
        Ok(())
    }
}
