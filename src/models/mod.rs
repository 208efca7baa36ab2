//! Job-shop domain models.
//!
//! Provides the static problem description and the timed solution it is
//! scheduled into.
//!
//! # Domain Mappings
//!
//! | u-jobshop | Manufacturing | Computing |
//! |-----------|---------------|-----------|
//! | Instance | Shop order book | Batch of pipelines |
//! | Task | Operation of a job | Stage of a pipeline |
//! | Schedule | Production plan | Execution timeline |

mod instance;
mod schedule;
mod task;

pub use instance::{Instance, Operation};
pub use schedule::{Assignment, Schedule, Violation, ViolationType};
pub use task::Task;
