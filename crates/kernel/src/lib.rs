//! Numeric kernel: a convergence-controlled series for the inverse sine and the closed-form
//! launch angle formulas built on it.
//!
//! Every function is pure and stateless. Inputs outside the region where a formula yields a
//! real, meaningful result are reported as [`DomainError`], never clamped.

pub mod angle;
pub mod arcsin;
pub mod limits;

mod error;

pub use angle::{launch_angle, launch_angle_range};
pub use arcsin::{SeriesEvaluation, arcsin, evaluate as evaluate_arcsin};
pub use error::DomainError;
pub use limits::{max_altitude_ratio, max_velocity_ratio, min_altitude_ratio, min_velocity_ratio};
