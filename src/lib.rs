//! Feasible launch angle ranges for a ballistic projectile leaving a gravitating body.
//!
//! This facade re-exports the workspace crates so front ends (CLI, plotting, tests) depend on
//! a single library: the numeric kernel, sweep generation, configuration, and export helpers.

pub use launch_config as config;
pub use launch_core::{constants, grid, units};
pub use launch_export as export;
pub use launch_kernel as kernel;
pub use launch_sweep as sweep;

pub use launch_kernel::{
    DomainError, SeriesEvaluation, arcsin, evaluate_arcsin, launch_angle, launch_angle_range,
    max_altitude_ratio, max_velocity_ratio, min_altitude_ratio, min_velocity_ratio,
};
