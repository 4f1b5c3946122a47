//! Property and randomized fill tests for `SparseBitSet`.

use std::collections::BTreeSet;

use proptest::prelude::*;
use rand::Rng;
use sparse_bitset::{constants::SOFT_CAP, Error, SparseBitSet};

/// Walk `[0, capacity)`, setting ~10% of values at random and checking
/// every value right after deciding on it.
fn random_fill(capacity: u64) {
    let mut rng = rand::thread_rng();
    let mut set = SparseBitSet::new(capacity).unwrap();

    for v in 0..capacity {
        if rng.gen_range(0..1000) < 100 {
            set.set(v).unwrap();
            assert_eq!(set.get(v), Ok(true), "value {v}");
        } else {
            assert_eq!(set.get(v), Ok(false), "value {v}");
        }
    }
}

#[test]
fn test_random_fill_1k() {
    random_fill(1000);
}

#[test]
fn test_random_fill_1m() {
    random_fill(1_000_000);
}

#[test]
fn test_random_fill_u16_max() {
    random_fill(u16::MAX as u64);
}

#[test]
fn test_shared_behind_mutex() {
    use std::sync::{Arc, Mutex};
    use std::thread;

    let set = Arc::new(Mutex::new(SparseBitSet::new(1 << 20).unwrap()));
    let handles: Vec<_> = (0..4u64)
        .map(|t| {
            let set = Arc::clone(&set);
            thread::spawn(move || {
                for i in 0..1000u64 {
                    set.lock().unwrap().set(t * 100_000 + i).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let set = set.lock().unwrap();
    for t in 0..4u64 {
        assert!(set.get(t * 100_000).unwrap());
        assert!(set.get(t * 100_000 + 999).unwrap());
        assert!(!set.get(t * 100_000 + 1000).unwrap());
    }
}

proptest! {
    #[test]
    fn set_then_get_matches_model(
        capacity in 1u64..=SOFT_CAP,
        picks in prop::collection::vec(any::<u64>(), 0..64),
    ) {
        let mut set = SparseBitSet::new(capacity).unwrap();
        let mut model = BTreeSet::new();

        for pick in picks {
            let v = pick % (capacity + 1);
            set.set(v).unwrap();
            model.insert(v);
        }

        for &v in &model {
            prop_assert_eq!(set.get(v), Ok(true));
            if v > 0 && !model.contains(&(v - 1)) {
                prop_assert_eq!(set.get(v - 1), Ok(false));
            }
            if v < capacity && !model.contains(&(v + 1)) {
                prop_assert_eq!(set.get(v + 1), Ok(false));
            }
        }
    }

    #[test]
    fn set_is_idempotent(capacity in 1u64..=SOFT_CAP, pick in any::<u64>()) {
        let v = pick % (capacity + 1);
        let mut once = SparseBitSet::new(capacity).unwrap();
        let mut twice = SparseBitSet::new(capacity).unwrap();

        once.set(v).unwrap();
        twice.set(v).unwrap();
        twice.set(v).unwrap();

        prop_assert_eq!(once.get(v), twice.get(v));
        prop_assert_eq!(once.stats(), twice.stats());
    }

    #[test]
    fn fresh_set_is_empty(capacity in 1u64..=SOFT_CAP, pick in any::<u64>()) {
        let set = SparseBitSet::new(capacity).unwrap();
        let v = pick % (capacity + 1);
        prop_assert_eq!(set.get(v), Ok(false));
    }

    #[test]
    fn beyond_capacity_is_rejected(capacity in 1u64..=SOFT_CAP, excess in 1u64..1 << 20) {
        let mut set = SparseBitSet::new(capacity).unwrap();
        let v = capacity + excess;
        let err = Error::OutOfRange { value: v, capacity };

        prop_assert_eq!(set.set(v), Err(err));
        prop_assert_eq!(set.get(v), Err(err));
        prop_assert_eq!(set.stats().leaf_blocks, 0);
    }

    #[test]
    fn memory_tracks_touched_regions(
        capacity in 1u64..=SOFT_CAP,
        picks in prop::collection::vec(any::<u64>(), 1..32),
    ) {
        let mut set = SparseBitSet::new(capacity).unwrap();
        let mut leaves = BTreeSet::new();
        let mut mids = BTreeSet::new();

        for pick in picks {
            let v = pick % (capacity + 1);
            set.set(v).unwrap();
            leaves.insert(v >> 11);
            mids.insert(v >> 16);
        }

        prop_assert_eq!(set.stats().leaf_blocks, leaves.len());
        prop_assert_eq!(set.stats().mid_blocks, mids.len());
    }
}
