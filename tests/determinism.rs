mod common;

use antworld_core::{AntWorld, AppConfig, PheromoneWorld, Position};
use antworld_lib::app::App;
use common::WorldBuilder;

fn churn(world: &mut PheromoneWorld, rounds: usize) {
    for i in 0..rounds {
        let center = world.food_sources()[i % world.food_sources().len()].center;
        world.pick_up_food(center);
        world.drop_foraging_pheromone(center, 0.1);
        world.self_contained_disperse();
    }
}

#[test]
fn test_same_seed_replays_identically() {
    let mut a = WorldBuilder::new(80, 60).with_seed(12345).with_random_sources(3).build();
    let mut b = WorldBuilder::new(80, 60).with_seed(12345).with_random_sources(3).build();
    churn(&mut a, 900);
    churn(&mut b, 900);

    assert_eq!(a.food_sources(), b.food_sources());
    assert_eq!(a.metrics().snapshot(), b.metrics().snapshot());
    for p in common::cells(&a) {
        assert_eq!(a.foraging_strength(p), b.foraging_strength(p));
        assert_eq!(a.contains_food(p), b.contains_food(p));
    }
}

#[test]
fn test_different_seeds_place_food_differently() {
    let a = WorldBuilder::new(500, 500).with_seed(1).with_random_sources(4).build();
    let b = WorldBuilder::new(500, 500).with_seed(2).with_random_sources(4).build();
    assert_ne!(a.food_sources(), b.food_sources());
}

#[test]
fn test_config_world_is_reproducible() {
    let config = AppConfig::from_toml(
        r#"
        [world]
        width = 64
        height = 48
        food_sources = 2
        seed = 777
        "#,
    )
    .unwrap();
    let a = PheromoneWorld::from_config(&config).unwrap();
    let b = PheromoneWorld::from_config(&config).unwrap();
    assert_eq!(a.food_sources(), b.food_sources());
    assert_eq!(a.width(), 64);
    assert!(a.is_home(Position::new(63.0, 24.0)));
}

#[test]
fn test_headless_runs_match() {
    let mut config = AppConfig::default();
    config.world.width = 70;
    config.world.height = 50;
    config.world.seed = Some(8);
    let mut a = App::new(config.clone()).unwrap().with_synthetic_colony();
    let mut b = App::new(config).unwrap().with_synthetic_colony();
    let sa = a.run(250);
    let sb = b.run(250);
    assert_eq!(sa.sources, sb.sources);
    assert_eq!(sa.metrics, sb.metrics);
    assert_eq!(sa.foraging_field, sb.foraging_field);
    assert_eq!(sa.food_cells, sb.food_cells);
}
