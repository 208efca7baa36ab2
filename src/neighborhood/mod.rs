//! Critical-path neighborhood for local search.
//!
//! A schedule's critical path is cut into per-machine [`Block`]s; each
//! block yields at most two boundary [`Swap`]s.
//!
//! # Usage
//!
//! ```
//! use u_jobshop::encoding::{Encoding, ResourceOrder};
//! use u_jobshop::models::{Instance, Task};
//! use u_jobshop::neighborhood::{blocks_of_critical_path, neighbors};
//!
//! let instance = Instance::from_pairs("single", 1, &[&[(0, 2)], &[(0, 3)], &[(0, 4)]]);
//! let order = ResourceOrder::from_machines(
//!     &instance,
//!     vec![vec![Task::new(0, 0), Task::new(1, 0), Task::new(2, 0)]],
//! );
//! let schedule = order.to_schedule().unwrap();
//!
//! let blocks = blocks_of_critical_path(&order, &schedule.critical_path());
//! assert_eq!(blocks.len(), 1);
//! assert_eq!(neighbors(&blocks[0]).len(), 2);
//! ```
//!
//! # Reference
//! Nowicki & Smutnicki (1996), "A Fast Taboo Search Algorithm for the Job
//! Shop Problem", Management Science 42(6)

mod block;
mod swap;

pub use block::{blocks_of_critical_path, Block};
pub use swap::{neighbors, Swap};
