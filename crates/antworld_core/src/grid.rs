//! Grid store: the two pheromone fields and the derived food mask.
//!
//! Fields are stored row-major (`y * width + x`). Each field has a back buffer
//! that the dispersal pass writes into; readers only ever see the front buffers.

use crate::error::{Result, WorldError};
use antworld_data::{FoodSource, Position};
use serde::{Deserialize, Serialize};

/// Upper bound applied by deposits.
pub const MAX_STRENGTH: f32 = 1.0;

/// Summary of one scalar field.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FieldStats {
    pub sum: f64,
    pub min: f32,
    pub max: f32,
}

impl FieldStats {
    fn of(field: &[f32]) -> Self {
        if field.is_empty() {
            return Self::default();
        }
        let mut stats = Self {
            sum: 0.0,
            min: f32::INFINITY,
            max: f32::NEG_INFINITY,
        };
        for &v in field {
            stats.sum += v as f64;
            stats.min = stats.min.min(v);
            stats.max = stats.max.max(v);
        }
        stats
    }
}

/// Read side and write side of both fields for one dispersal pass.
pub(crate) struct FieldBuffers<'a> {
    pub food: &'a [f32],
    pub foraging: &'a [f32],
    pub next_food: &'a mut [f32],
    pub next_foraging: &'a mut [f32],
}

#[derive(Debug, Clone)]
pub struct GridStore {
    width: usize,
    height: usize,
    food: Vec<f32>,
    foraging: Vec<f32>,
    food_back: Vec<f32>,
    foraging_back: Vec<f32>,
    food_mask: Vec<bool>,
}

impl GridStore {
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let size = width
            .checked_mul(height)
            .filter(|&size| size > 0)
            .ok_or(WorldError::InvalidDimensions { width, height })?;
        Ok(Self {
            width,
            height,
            food: vec![0.0; size],
            foraging: vec![0.0; size],
            food_back: vec![0.0; size],
            foraging_back: vec![0.0; size],
            food_mask: vec![false; size],
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline(always)]
    pub(crate) fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Flat index of the cell `pos` truncates to, if that cell exists.
    #[inline]
    pub fn cell_index(&self, pos: &Position) -> Option<usize> {
        if !pos.is_in_bounds(self.width, self.height) {
            return None;
        }
        pos.cell().map(|(x, y)| self.index(x, y))
    }

    /// Checked variant of [`Self::cell_index`].
    pub fn try_index(&self, pos: &Position) -> Result<usize> {
        self.cell_index(pos).ok_or(WorldError::OutOfBounds {
            x: pos.x,
            y: pos.y,
            width: self.width,
            height: self.height,
        })
    }

    /// Index for the unchecked accessors. Out-of-bounds is a caller bug.
    #[inline]
    fn expect_index(&self, pos: &Position) -> usize {
        match self.try_index(pos) {
            Ok(idx) => idx,
            Err(e) => panic!("{e}"),
        }
    }

    /// The default world has no interior obstacles; only the boundary blocks.
    #[inline]
    pub fn is_obstacle(&self, pos: &Position) -> bool {
        !pos.is_in_bounds(self.width, self.height)
    }

    pub fn drop_food_pheromone(&mut self, pos: &Position, amount: f32) {
        let idx = self.expect_index(pos);
        deposit(&mut self.food[idx], amount);
    }

    pub fn drop_foraging_pheromone(&mut self, pos: &Position, amount: f32) {
        let idx = self.expect_index(pos);
        deposit(&mut self.foraging[idx], amount);
    }

    pub fn food_strength(&self, pos: &Position) -> f32 {
        self.food[self.expect_index(pos)]
    }

    pub fn foraging_strength(&self, pos: &Position) -> f32 {
        self.foraging[self.expect_index(pos)]
    }

    pub fn contains_food(&self, pos: &Position) -> bool {
        self.food_mask[self.expect_index(pos)]
    }

    pub fn try_food_strength(&self, pos: &Position) -> Result<f32> {
        self.try_index(pos).map(|idx| self.food[idx])
    }

    pub fn try_foraging_strength(&self, pos: &Position) -> Result<f32> {
        self.try_index(pos).map(|idx| self.foraging[idx])
    }

    pub fn try_contains_food(&self, pos: &Position) -> Result<bool> {
        self.try_index(pos).map(|idx| self.food_mask[idx])
    }

    /// Field value at integer cell coordinates. Both must be in range.
    #[inline]
    pub fn food_at(&self, x: usize, y: usize) -> f32 {
        self.food[self.index(x, y)]
    }

    #[inline]
    pub fn foraging_at(&self, x: usize, y: usize) -> f32 {
        self.foraging[self.index(x, y)]
    }

    pub fn food_stats(&self) -> FieldStats {
        FieldStats::of(&self.food)
    }

    pub fn foraging_stats(&self) -> FieldStats {
        FieldStats::of(&self.foraging)
    }

    /// Number of cells currently marked as containing food.
    pub fn food_cell_count(&self) -> usize {
        self.food_mask.iter().filter(|&&b| b).count()
    }

    /// Recomputes every mask bit from scratch against `sources`.
    pub(crate) fn rebuild_food_mask(&mut self, sources: &[FoodSource]) {
        let width = self.width;
        for (idx, bit) in self.food_mask.iter_mut().enumerate() {
            let cell = Position::from((idx % width, idx / width));
            *bit = sources.iter().any(|src| src.contains(&cell));
        }
        tracing::trace!(
            sources = sources.len(),
            cells = self.food_mask.iter().filter(|&&b| b).count(),
            "Food mask rebuilt"
        );
    }

    pub(crate) fn buffers_mut(&mut self) -> FieldBuffers<'_> {
        FieldBuffers {
            food: &self.food,
            foraging: &self.foraging,
            next_food: &mut self.food_back,
            next_foraging: &mut self.foraging_back,
        }
    }

    /// Makes the back buffers current. Both fields flip together.
    pub(crate) fn swap_buffers(&mut self) {
        std::mem::swap(&mut self.food, &mut self.food_back);
        std::mem::swap(&mut self.foraging, &mut self.foraging_back);
    }

    /// Installs a fully computed `[food, foraging]` pair per cell, row-major.
    pub(crate) fn commit_pairs(&mut self, next: &[[f32; 2]]) {
        debug_assert_eq!(next.len(), self.food.len());
        for (idx, pair) in next.iter().enumerate() {
            self.food_back[idx] = pair[0];
            self.foraging_back[idx] = pair[1];
        }
        self.swap_buffers();
    }
}

#[inline]
fn deposit(cell: &mut f32, amount: f32) {
    *cell = (*cell + amount).min(MAX_STRENGTH);
}
