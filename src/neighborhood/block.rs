//! Block decomposition of a critical path.
//!
//! A block is a run of critical operations processed back to back on one
//! machine. Only its boundary operations are worth swapping: exchanging two
//! interior operations cannot shorten the critical path.
//!
//! # Reference
//! Nowicki & Smutnicki (1996), "A Fast Taboo Search Algorithm for the Job
//! Shop Problem", Section 3

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::encoding::{Encoding, ResourceOrder};
use crate::models::Task;

/// A run of critical operations on one machine, as slot indices of that
/// machine's dispatch order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Block {
    /// Machine the block lives on.
    pub machine: usize,
    /// Slot of the first critical operation.
    pub first_slot: usize,
    /// Slot of the last critical operation.
    pub last_slot: usize,
}

impl Block {
    /// Creates a block. `first_slot` must not exceed `last_slot`.
    pub fn new(machine: usize, first_slot: usize, last_slot: usize) -> Self {
        debug_assert!(first_slot <= last_slot);
        Self {
            machine,
            first_slot,
            last_slot,
        }
    }

    /// Number of slots spanned, both ends included.
    #[inline]
    pub fn size(&self) -> usize {
        self.last_slot - self.first_slot + 1
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[machine {} | slots {}..={}]",
            self.machine, self.first_slot, self.last_slot
        )
    }
}

/// Cuts a critical path into blocks.
///
/// For every machine the smallest and largest slot index of its critical
/// tasks are kept; machines where these differ yield one block. Blocks are
/// returned in ascending machine order.
pub fn blocks_of_critical_path(order: &ResourceOrder<'_>, critical_path: &[Task]) -> Vec<Block> {
    let instance = order.instance();
    let mut bounds: Vec<Option<(usize, usize)>> = vec![None; instance.num_machines];

    for &task in critical_path {
        let machine = instance.machine_of(task);
        let Some(slot) = order.slot_of(task) else {
            continue;
        };
        bounds[machine] = Some(match bounds[machine] {
            Some((lo, hi)) => (lo.min(slot), hi.max(slot)),
            None => (slot, slot),
        });
    }

    bounds
        .into_iter()
        .enumerate()
        .filter_map(|(machine, b)| match b {
            Some((lo, hi)) if lo < hi => Some(Block::new(machine, lo, hi)),
            _ => None,
        })
        .collect()
}
