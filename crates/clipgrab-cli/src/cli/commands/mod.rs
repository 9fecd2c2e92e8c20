//! CLI command handlers.

mod grab;

pub use grab::run_grab;

#[cfg(test)]
pub use grab::{build_job, grab_and_report};
