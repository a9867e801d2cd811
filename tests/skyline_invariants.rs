use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use skyline_core::skyline::{clean, skyline};
use skyline_core::types::Building;

const SEEDS: u64 = 200;

fn random_buildings(seed: u64) -> Vec<Building> {
    let mut rng = StdRng::seed_from_u64(seed);
    let count = rng.random_range(0..40);
    (0..count)
        .map(|_| {
            let left = rng.random_range(0..50);
            let width = rng.random_range(1..=15);
            let height = rng.random_range(0..=20);
            Building::new(left, left + width, height)
        })
        .collect()
}

/// Brute-force height at `x`: tallest building whose range covers it.
fn covering_height(buildings: &[Building], x: i64) -> i64 {
    buildings
        .iter()
        .filter(|b| b.covers(x))
        .map(|b| b.height)
        .max()
        .unwrap_or(0)
}

#[test]
fn invariant_output_is_canonical() {
    for seed in 0..SEEDS {
        let buildings = random_buildings(seed);
        let result = skyline(&buildings);
        assert!(result.validate().is_ok(), "seed {seed}: {:?}", result.validate());

        for pair in result.points().windows(2) {
            assert!(pair[0].x < pair[1].x, "seed {seed}: x must strictly increase");
            assert_ne!(pair[0].height, pair[1].height, "seed {seed}: adjacent duplicate height");
        }
    }
}

#[test]
fn invariant_matches_brute_force_envelope() {
    for seed in 0..SEEDS {
        let buildings = random_buildings(seed);
        let result = skyline(&buildings);

        for x in -1..=70 {
            assert_eq!(
                result.height_at(x),
                covering_height(&buildings, x),
                "seed {seed}: height mismatch at x={x}"
            );
        }
    }
}

#[test]
fn invariant_heights_bounded_by_input() {
    for seed in 0..SEEDS {
        let buildings = random_buildings(seed);
        let tallest = buildings.iter().map(|b| b.height).max().unwrap_or(0);
        let result = skyline(&buildings);

        for point in &result {
            assert!(point.height >= 0, "seed {seed}: negative height");
            assert!(point.height <= tallest, "seed {seed}: height above tallest building");
            assert!(
                point.height <= covering_height(&buildings, point.x),
                "seed {seed}: height at x={} exceeds covering buildings",
                point.x
            );
        }
    }
}

#[test]
fn invariant_terminal_point_is_ground() {
    for seed in 0..SEEDS {
        let buildings = random_buildings(seed);
        if !buildings.iter().any(|b| b.height > 0) {
            continue;
        }
        let result = skyline(&buildings);
        let last = result.points().last().expect("non-empty skyline");
        assert_eq!(last.height, 0, "seed {seed}");

        let rightmost = buildings.iter().map(|b| b.right).max().unwrap();
        assert!(last.x <= rightmost, "seed {seed}");
    }
}

#[test]
fn invariant_cleanup_is_idempotent() {
    for seed in 0..SEEDS {
        let result = skyline(&random_buildings(seed));
        assert_eq!(clean(result.points()), result.points(), "seed {seed}");
    }
}

#[test]
fn invariant_empty_only_for_empty_input() {
    for seed in 0..SEEDS {
        let buildings = random_buildings(seed);
        assert_eq!(skyline(&buildings).is_empty(), buildings.is_empty(), "seed {seed}");
    }
}
