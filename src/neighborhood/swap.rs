//! Boundary swaps of a block (the N5 neighborhood).
//!
//! # Reference
//! Nowicki & Smutnicki (1996), "A Fast Taboo Search Algorithm for the Job
//! Shop Problem"

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::Block;
use crate::encoding::ResourceOrder;
use crate::models::Task;

/// Exchange of two slots in one machine's dispatch order.
///
/// Applying the same swap twice restores the original order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Swap {
    /// Machine whose order is modified.
    pub machine: usize,
    /// First slot.
    pub slot_a: usize,
    /// Second slot.
    pub slot_b: usize,
}

impl Swap {
    /// Creates a swap of two slots of a machine.
    pub fn new(machine: usize, slot_a: usize, slot_b: usize) -> Self {
        Self {
            machine,
            slot_a,
            slot_b,
        }
    }

    /// Exchanges the two slots in place.
    pub fn apply_on(&self, order: &mut ResourceOrder<'_>) {
        order.swap_slots(self.machine, self.slot_a, self.slot_b);
    }

    /// The two tasks currently in the swapped slots, in slot order.
    pub fn tasks(&self, order: &ResourceOrder<'_>) -> (Task, Task) {
        (
            order.task_at(self.machine, self.slot_a),
            order.task_at(self.machine, self.slot_b),
        )
    }
}

impl fmt::Display for Swap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[machine {} | {} <-> {}]",
            self.machine, self.slot_a, self.slot_b
        )
    }
}

/// Restricted Nowicki–Smutnicki moves of a block.
///
/// | Block size | Swaps |
/// |------------|-------|
/// | < 2 | none |
/// | 2 | (first, last) |
/// | > 2 | (first, first+1), (last-1, last) |
pub fn neighbors(block: &Block) -> Vec<Swap> {
    let Block {
        machine,
        first_slot,
        last_slot,
    } = *block;

    match block.size() {
        0 | 1 => {
            warn!(event = "degenerate_block", %block, "block has fewer than 2 slots");
            Vec::new()
        }
        2 => vec![Swap::new(machine, first_slot, last_slot)],
        _ => vec![
            Swap::new(machine, first_slot, first_slot + 1),
            Swap::new(machine, last_slot - 1, last_slot),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{ft06, random_instance};
    use crate::encoding::{Encoding, JobNumbers};
    use proptest::prelude::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_neighbors_of_pair() {
        let swaps = neighbors(&Block::new(2, 3, 4));
        assert_eq!(swaps, vec![Swap::new(2, 3, 4)]);
    }

    #[test]
    fn test_neighbors_of_triple() {
        let swaps = neighbors(&Block::new(0, 0, 2));
        assert_eq!(swaps, vec![Swap::new(0, 0, 1), Swap::new(0, 1, 2)]);
    }

    #[test]
    fn test_neighbors_of_long_block() {
        let swaps = neighbors(&Block::new(1, 2, 7));
        assert_eq!(swaps, vec![Swap::new(1, 2, 3), Swap::new(1, 6, 7)]);
    }

    #[test]
    fn test_apply_on() {
        let inst = ft06();
        let s = JobNumbers::round_robin(&inst).to_schedule().unwrap();
        let mut order = ResourceOrder::from_schedule(&s);
        let (a, b) = Swap::new(3, 1, 4).tasks(&order);

        Swap::new(3, 1, 4).apply_on(&mut order);
        assert_eq!(order.task_at(3, 1), b);
        assert_eq!(order.task_at(3, 4), a);
    }

    #[test]
    fn test_neighbors_of_singleton() {
        assert!(neighbors(&Block::new(0, 3, 3)).is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(Swap::new(1, 0, 1).to_string(), "[machine 1 | 0 <-> 1]");
    }

    proptest! {
        #[test]
        fn prop_swap_is_self_inverse(
            num_jobs in 2usize..7,
            num_machines in 1usize..5,
            seed in any::<u64>(),
            machine_pick in any::<usize>(),
            a in any::<usize>(),
            b in any::<usize>(),
        ) {
            let mut rng = SmallRng::seed_from_u64(seed);
            let inst = random_instance(num_jobs, num_machines, &mut rng);
            let s = JobNumbers::round_robin(&inst).to_schedule().unwrap();
            let original = ResourceOrder::from_schedule(&s);

            let swap = Swap::new(machine_pick % num_machines, a % num_jobs, b % num_jobs);
            let mut order = original.clone();
            swap.apply_on(&mut order);
            swap.apply_on(&mut order);
            prop_assert_eq!(order, original);
        }
    }
}
