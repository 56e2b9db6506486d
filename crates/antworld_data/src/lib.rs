//! # Antworld Data
//!
//! Plain value types shared between the world core and its callers.

pub mod data;

pub use data::food::FoodSource;
pub use data::position::Position;
