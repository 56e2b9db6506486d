//! Dispersal engine: one tick of diffusion plus evaporation for both fields.
//!
//! Per cell and per field:
//!
//! ```text
//! blended = (1 - blend) * sum(8 neighbours) / 8 + blend * current
//! next    = blended * evaporation
//! ```
//!
//! Neighbour coordinates outside the grid are clamped to the nearest edge cell.
//! Every output cell reads only pre-tick values, so cells can be computed in any
//! order (or in parallel) and both fields are swapped in together afterwards.

use crate::grid::{FieldBuffers, GridStore};
use crate::world::AntWorld;
use antworld_data::Position;
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

pub const DEFAULT_BLEND: f32 = 0.5;
pub const DEFAULT_EVAPORATION: f32 = 0.95;

/// Neighbour visiting order. Summation order is fixed so the policy path and
/// the buffer path produce bit-identical results.
const NEIGHBOURS: [(isize, isize); 8] = [
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// Computes the next `[food, foraging]` pair for a cell from the current world.
///
/// Any `Fn(&dyn AntWorld, Position) -> [f32; 2]` is a policy.
pub trait DispersalPolicy {
    fn dispersed_value(&self, world: &dyn AntWorld, pos: Position) -> [f32; 2];
}

impl<F> DispersalPolicy for F
where
    F: Fn(&dyn AntWorld, Position) -> [f32; 2],
{
    fn dispersed_value(&self, world: &dyn AntWorld, pos: Position) -> [f32; 2] {
        self(world, pos)
    }
}

/// Clamped-edge eight-neighbour averaging blended with the cell's own value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NeighborAverage {
    pub blend: f32,
    pub evaporation: f32,
}

impl Default for NeighborAverage {
    fn default() -> Self {
        Self {
            blend: DEFAULT_BLEND,
            evaporation: DEFAULT_EVAPORATION,
        }
    }
}

impl NeighborAverage {
    pub fn new(blend: f32, evaporation: f32) -> Self {
        Self { blend, evaporation }
    }

    #[inline(always)]
    pub fn combine(&self, neighbour_sum: f32, current: f32) -> f32 {
        let k = self.blend;
        ((1.0 - k) * neighbour_sum / 8.0 + k * current) * self.evaporation
    }

    fn disperse_row(&self, src: &[f32], row: &mut [f32], width: usize, height: usize, y: usize) {
        for (x, out) in row.iter_mut().enumerate() {
            let sum = neighbour_sum(width, height, x, y, |nx, ny| src[ny * width + nx]);
            *out = self.combine(sum, src[y * width + x]);
        }
    }

    /// Writes the next tick of `src` into `dst`. Both are row-major `width x height`.
    pub fn disperse_field(&self, src: &[f32], dst: &mut [f32], width: usize, height: usize) {
        debug_assert_eq!(src.len(), width * height);
        debug_assert_eq!(dst.len(), src.len());
        for (y, row) in dst.chunks_mut(width).enumerate() {
            self.disperse_row(src, row, width, height, y);
        }
    }

    #[cfg(feature = "parallel")]
    pub fn disperse_field_parallel(
        &self,
        src: &[f32],
        dst: &mut [f32],
        width: usize,
        height: usize,
    ) {
        debug_assert_eq!(src.len(), width * height);
        debug_assert_eq!(dst.len(), src.len());
        dst.par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| self.disperse_row(src, row, width, height, y));
    }
}

impl DispersalPolicy for NeighborAverage {
    fn dispersed_value(&self, world: &dyn AntWorld, pos: Position) -> [f32; 2] {
        let (width, height) = (world.width(), world.height());
        let (x, y) = pos.cell().unwrap_or((0, 0));
        let at = |nx: usize, ny: usize| Position::from((nx, ny));
        let food_sum = neighbour_sum(width, height, x, y, |nx, ny| {
            world.food_strength(at(nx, ny))
        });
        let foraging_sum = neighbour_sum(width, height, x, y, |nx, ny| {
            world.foraging_strength(at(nx, ny))
        });
        [
            self.combine(food_sum, world.food_strength(pos)),
            self.combine(foraging_sum, world.foraging_strength(pos)),
        ]
    }
}

#[inline(always)]
fn clamp_axis(v: usize, delta: isize, len: usize) -> usize {
    v.saturating_add_signed(delta).min(len - 1)
}

#[inline(always)]
fn neighbour_sum<F>(width: usize, height: usize, x: usize, y: usize, sample: F) -> f32
where
    F: Fn(usize, usize) -> f32,
{
    let mut sum = 0.0f32;
    for (dx, dy) in NEIGHBOURS {
        sum += sample(clamp_axis(x, dx, width), clamp_axis(y, dy, height));
    }
    sum
}

/// Advances a [`GridStore`] by whole ticks using the fixed algorithm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DispersalEngine {
    pub kernel: NeighborAverage,
    pub parallel: bool,
}

impl Default for DispersalEngine {
    fn default() -> Self {
        Self {
            kernel: NeighborAverage::default(),
            parallel: cfg!(feature = "parallel"),
        }
    }
}

impl DispersalEngine {
    pub fn new(kernel: NeighborAverage, parallel: bool) -> Self {
        Self { kernel, parallel }
    }

    /// Computes both next fields into the back buffers, then swaps them in.
    pub fn tick(&self, grid: &mut GridStore) {
        let (width, height) = (grid.width(), grid.height());
        let buffers = grid.buffers_mut();
        if self.parallel {
            self.pass_parallel(buffers, width, height);
        } else {
            self.pass(buffers, width, height);
        }
        grid.swap_buffers();
    }

    fn pass(&self, buffers: FieldBuffers<'_>, width: usize, height: usize) {
        let FieldBuffers {
            food,
            foraging,
            next_food,
            next_foraging,
        } = buffers;
        self.kernel.disperse_field(food, next_food, width, height);
        self.kernel
            .disperse_field(foraging, next_foraging, width, height);
    }

    #[cfg(feature = "parallel")]
    fn pass_parallel(&self, buffers: FieldBuffers<'_>, width: usize, height: usize) {
        let FieldBuffers {
            food,
            foraging,
            next_food,
            next_foraging,
        } = buffers;
        let kernel = &self.kernel;
        rayon::join(
            || kernel.disperse_field_parallel(food, next_food, width, height),
            || kernel.disperse_field_parallel(foraging, next_foraging, width, height),
        );
    }

    #[cfg(not(feature = "parallel"))]
    fn pass_parallel(&self, buffers: FieldBuffers<'_>, width: usize, height: usize) {
        self.pass(buffers, width, height);
    }
}
