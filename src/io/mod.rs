//! Instance files and reference results.
//!
//! - [`parse_instance`] / [`load_instance`] / [`format_instance`]: the
//!   plain-text instance format
//! - [`best_known`]: reference makespans of the classical benchmarks

mod best_known;
mod instance_file;

pub use best_known::{best_known, is_known, known_instances};
pub use instance_file::{format_instance, load_instance, parse_instance};
