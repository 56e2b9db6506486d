//! # Antworld Core
//!
//! The shared world half of an ant-colony simulation: two diffusing pheromone
//! fields on a bounded grid plus a set of depletable, respawning food sources.
//!
//! - [`grid::GridStore`] owns the fields and the derived food mask
//! - [`food::FoodRegistry`] owns the sources and rebuilds the mask on respawn
//! - [`dispersal::DispersalEngine`] advances both fields one tick at a time
//! - [`world::AntWorld`] is the surface agents use; [`world::PheromoneWorld`]
//!   is the default implementation
//!
//! ## Example
//!
//! ```
//! use antworld_core::{AntWorld, PheromoneWorld, Position};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut world = PheromoneWorld::new(50, 50, 1, ChaCha8Rng::seed_from_u64(42)).unwrap();
//! let p = Position::new(10.0, 10.0);
//! world.drop_foraging_pheromone(p, 0.6);
//! world.self_contained_disperse();
//! assert!(world.foraging_strength(p) < 0.6);
//! ```

/// Configuration loading and validation
pub mod config;
/// Diffusion and evaporation of the pheromone fields
pub mod dispersal;
/// Error types
pub mod error;
/// Food sources, depletion and respawn
pub mod food;
/// Pheromone fields and food mask storage
pub mod grid;
/// Counters and structured logging
pub mod metrics;
/// World capability trait and default world
pub mod world;

pub use antworld_data::{FoodSource, Position};
pub use config::AppConfig;
pub use dispersal::{DispersalEngine, DispersalPolicy, NeighborAverage};
pub use error::{Result, WorldError};
pub use metrics::{init_logging, Metrics, MetricsSnapshot};
pub use world::{AntWorld, Nest, PheromoneWorld};
