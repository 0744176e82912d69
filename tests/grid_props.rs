use proptest::prelude::*;
use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};
use seabattle::{
    fleet, BoardError, Cell, Coordinate, Grid, MatchConfig, ShotResult, NUM_VESSELS,
    TOTAL_VESSEL_CELLS,
};

fn random_grid(seed: u64, size: usize) -> Grid {
    let mut rng = SmallRng::seed_from_u64(seed);
    let config = MatchConfig::new(size).unwrap();
    fleet::generate(&mut rng, &config)
}

fn chebyshev(a: Coordinate, b: Coordinate) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn generated_fleet_keeps_its_distance(seed in any::<u64>(), size in 6usize..=10) {
        let grid = random_grid(seed, size);
        prop_assert_eq!(grid.vessels().len(), NUM_VESSELS);
        prop_assert_eq!(grid.exhausted_count(), 0);

        let occupied = grid.cells().iter().filter(|&&c| c == Cell::Occupied).count();
        prop_assert_eq!(occupied, TOTAL_VESSEL_CELLS);

        let vessels = grid.vessels();
        for (i, a) in vessels.iter().enumerate() {
            for cell in a.cells() {
                prop_assert!(!grid.is_out_of_bounds(cell));
            }
            for b in vessels.iter().skip(i + 1) {
                for ca in a.cells() {
                    for cb in b.cells() {
                        // distance 0 is overlap, 1 is inside the halo
                        prop_assert!(chebyshev(ca, cb) >= 2, "{:?} touches {:?}", a, b);
                    }
                }
            }
        }
    }

    #[test]
    fn second_shot_is_already_targeted(seed in any::<u64>(), x in 0i32..6, y in 0i32..6) {
        let mut grid = random_grid(seed, 6);
        let target = Coordinate::new(x, y);
        prop_assert!(grid.resolve_shot(target).is_ok());
        for _ in 0..3 {
            prop_assert_eq!(
                grid.resolve_shot(target).unwrap_err(),
                BoardError::AlreadyTargeted(target)
            );
        }
    }

    #[test]
    fn out_of_range_is_always_out_of_bounds(
        seed in any::<u64>(),
        x in -50i32..50,
        y in -50i32..50,
    ) {
        prop_assume!(x < 0 || x >= 6 || y < 0 || y >= 6);
        let mut grid = random_grid(seed, 6);
        let target = Coordinate::new(x, y);
        prop_assert_eq!(grid.resolve_shot(target).unwrap_err(), BoardError::OutOfBounds(target));

        // still out of bounds once the grid has been shot at
        for cx in 0..6 {
            let _ = grid.resolve_shot(Coordinate::new(cx, 0));
        }
        prop_assert_eq!(grid.resolve_shot(target).unwrap_err(), BoardError::OutOfBounds(target));
    }

    #[test]
    fn sweeping_the_grid_sinks_each_vessel_once(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut grid = random_grid(seed, 6);
        let mut targets: Vec<_> = (0..6)
            .flat_map(|x| (0..6).map(move |y| Coordinate::new(x, y)))
            .collect();
        targets.shuffle(&mut rng);

        let mut sunk = 0;
        for target in targets {
            let owner = grid.vessels().iter().position(|v| v.occupies(target));
            let before = owner.map(|i| grid.vessels()[i].health());
            match grid.resolve_shot(target) {
                Ok(ShotResult::Miss) => prop_assert!(owner.is_none()),
                Ok(result) => {
                    let i = owner.unwrap();
                    let after = grid.vessels()[i].health();
                    prop_assert_eq!(after + 1, before.unwrap());
                    prop_assert_eq!(result == ShotResult::Sunk, after == 0);
                    if result == ShotResult::Sunk {
                        sunk += 1;
                    }
                }
                // only water next to a destroyed vessel is refused
                Err(e) => {
                    prop_assert_eq!(e, BoardError::AlreadyTargeted(target));
                    prop_assert_eq!(grid.cell(target), Some(Cell::MarginBlocked));
                }
            }
            prop_assert_eq!(
                grid.destroyed_count(),
                grid.vessels().iter().filter(|v| v.is_destroyed()).count()
            );
        }

        prop_assert_eq!(sunk, NUM_VESSELS);
        prop_assert!(grid.all_destroyed());
        prop_assert!(grid.cells().iter().all(|&c| c != Cell::Occupied && c != Cell::Empty));
    }
}
