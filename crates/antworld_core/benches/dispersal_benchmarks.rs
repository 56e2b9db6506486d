use antworld_core::grid::GridStore;
use antworld_core::{AntWorld, DispersalEngine, NeighborAverage, PheromoneWorld, Position};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn seeded_grid(width: usize, height: usize) -> GridStore {
    let mut grid = GridStore::new(width, height).unwrap();
    for i in 0..(width * height / 10) {
        let p = Position::from(((i * 37) % width, (i * 11) % height));
        grid.drop_food_pheromone(&p, 0.5);
        grid.drop_foraging_pheromone(&p, 0.25);
    }
    grid
}

fn bench_dispersal_sequential(c: &mut Criterion) {
    let mut grid = seeded_grid(400, 400);
    let engine = DispersalEngine::new(NeighborAverage::default(), false);
    c.bench_function("dispersal_400x400_sequential", |b| {
        b.iter(|| {
            engine.tick(&mut grid);
            black_box(grid.food_at(200, 200))
        })
    });
}

#[cfg(feature = "parallel")]
fn bench_dispersal_parallel(c: &mut Criterion) {
    let mut grid = seeded_grid(400, 400);
    let engine = DispersalEngine::new(NeighborAverage::default(), true);
    c.bench_function("dispersal_400x400_parallel", |b| {
        b.iter(|| {
            engine.tick(&mut grid);
            black_box(grid.food_at(200, 200))
        })
    });
}

#[cfg(not(feature = "parallel"))]
fn bench_dispersal_parallel(_c: &mut Criterion) {}

fn bench_policy_dispersal(c: &mut Criterion) {
    let mut world = PheromoneWorld::new(100, 100, 0, ChaCha8Rng::seed_from_u64(1)).unwrap();
    world.drop_food_pheromone(Position::new(50.0, 50.0), 1.0);
    let policy = NeighborAverage::default();
    c.bench_function("policy_dispersal_100x100", |b| {
        b.iter(|| {
            world.disperse_pheromones(&policy);
            black_box(world.food_strength(Position::new(50.0, 50.0)))
        })
    });
}

fn bench_mask_rebuild(c: &mut Criterion) {
    // 100 bites at a default source centre deplete it and force one full rebuild.
    let mut world = PheromoneWorld::new(200, 200, 8, ChaCha8Rng::seed_from_u64(9)).unwrap();
    c.bench_function("respawn_mask_rebuild_200x200_8_sources", |b| {
        b.iter(|| {
            let center = world.food_sources()[0].center;
            for _ in 0..100 {
                world.pick_up_food(center);
            }
            black_box(world.grid().food_cell_count())
        })
    });
}

criterion_group!(
    benches,
    bench_dispersal_sequential,
    bench_dispersal_parallel,
    bench_policy_dispersal,
    bench_mask_rebuild
);
criterion_main!(benches);
