pub mod constants;
pub mod engine;
pub mod sweep;

pub use constants::*;
pub use engine::compute;
pub use sweep::{lowest_margin_within_capacity, margin_sweep, SweepConfig, SweepRow};
