//! Property-based checks of the set invariants across sizes and bounds.

use eqvec_core::{Config, GenerationStep, generate, generate_with_observer};
use glam::IVec2;
use proptest::prelude::*;
use rand::{SeedableRng, rngs::StdRng};

/// Bounds that pass `Config::validate`.
fn arb_config() -> impl Strategy<Value = Config> {
    (8u32..=150).prop_flat_map(|max| {
        let floor = 2 * max - max * 3 / 2;
        (0u32..=floor).prop_map(move |min| Config {
            component_min: min,
            component_max: max,
            ..Config::default()
        })
    })
}

proptest! {
    #[test]
    fn generated_sets_hold_every_invariant(
        cfg in arb_config(),
        n in 2usize..300,
        seed in any::<u64>(),
    ) {
        prop_assert!(cfg.validate().is_ok());
        let max = cfg.component_max as i32;
        let min = cfg.component_min as i32;

        let mut worst_delta = 0;
        let mut observer = |step: &GenerationStep| {
            worst_delta = worst_delta
                .max(step.x.running_delta.abs())
                .max(step.y.running_delta.abs());
        };
        let mut rng = StdRng::seed_from_u64(seed);
        let set = generate_with_observer(n, &cfg, &mut rng, &mut observer).unwrap();

        prop_assert_eq!(set.len(), n);
        prop_assert_eq!(set.component_sum(), IVec2::ZERO);
        prop_assert!(set.iter().all(|v| !v.is_zero()));
        prop_assert!(worst_delta <= 2 * max);

        let (last, body) = set.vectors().split_last().unwrap();
        for v in body {
            prop_assert!((min..=max).contains(&v.x().abs()), "{:?}", v);
            prop_assert!((min..=max).contains(&v.y().abs()), "{:?}", v);
        }
        prop_assert!(last.x().abs() <= max && last.y().abs() <= max, "{:?}", last);
    }

    #[test]
    fn same_seed_reproduces_the_set(cfg in arb_config(), n in 2usize..100, seed in any::<u64>()) {
        let a = generate(n, &cfg, &mut StdRng::seed_from_u64(seed)).unwrap();
        let b = generate(n, &cfg, &mut StdRng::seed_from_u64(seed)).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn angles_are_defined_unless_horizontal(cfg in arb_config(), seed in any::<u64>()) {
        let set = generate(50, &cfg, &mut StdRng::seed_from_u64(seed)).unwrap();
        for v in &set {
            match v.angle() {
                None => prop_assert_eq!(v.y(), 0),
                Some(a) => prop_assert!((0.0..360.0).contains(&a), "{:?}", v),
            }
        }
    }
}

#[test]
fn independent_runs_in_parallel() {
    let cfg = Config::default();
    let sizes = [100usize, 1_000, 10_000];

    std::thread::scope(|scope| {
        let handles: Vec<_> = sizes
            .iter()
            .flat_map(|&n| (0..4u64).map(move |worker| (n, worker)))
            .map(|(n, worker)| {
                let cfg = &cfg;
                scope.spawn(move || {
                    let mut rng = StdRng::seed_from_u64(n as u64 * 31 + worker);
                    generate(n, cfg, &mut rng)
                })
            })
            .collect();

        for handle in handles {
            let set = handle.join().expect("worker panicked").unwrap();
            assert_eq!(set.component_sum(), IVec2::ZERO);
            assert!(set.iter().all(|v| !v.is_zero()));
        }
    });
}
