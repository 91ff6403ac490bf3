//! Property tests for the pool's monotonic partition.
//!
//! If any index answers free, every higher index must answer free too. Each
//! sampled pair gets a fresh pool so the two free answers fit the budget.

use proptest::prelude::*;

use first_free::{Probe, ResourcePool};

fn partition_pair() -> impl Strategy<Value = (usize, usize, usize, usize)> {
    (2usize..512)
        .prop_flat_map(|size| (Just(size), 0..=size, 0..size - 1))
        .prop_flat_map(|(size, boundary, i)| {
            (Just(size), Just(boundary), Just(i), (i + 1)..size)
        })
}

proptest! {
    #[test]
    fn free_answers_are_upward_closed((size, boundary, i, j) in partition_pair()) {
        let mut pool = ResourcePool::new(size as i64, boundary as i64).unwrap();

        let lower = pool.query(i).expect("first probe is always in budget");
        if lower == Probe::Free {
            let higher = pool.query(j).expect("second free answer fits the budget");
            prop_assert_eq!(higher, Probe::Free);
        }
    }

    #[test]
    fn busy_answers_are_downward_closed((size, boundary, i, j) in partition_pair()) {
        let mut pool = ResourcePool::new(size as i64, boundary as i64).unwrap();

        // Probe the higher index first; busy answers are unbounded, and a
        // single free answer stays in budget.
        let higher = pool.query(j).expect("first probe is always in budget");
        if higher == Probe::Busy {
            let lower = pool.query(i).expect("busy probes are never budgeted");
            prop_assert_eq!(lower, Probe::Busy);
        }
    }
}
