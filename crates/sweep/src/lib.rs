//! Launch angle range sweeps shared between the CLI front ends.
//!
//! A sweep holds one ratio fixed and samples the other across the range where the tolerance
//! band stays inside the formula's validity domain, evaluating the launch angle range at every
//! sample.

use launch_config::{SweepAxisConfig, SweepConfig};
use launch_core::grid::linspace;
use launch_kernel::{
    DomainError, launch_angle_range, max_altitude_ratio, max_velocity_ratio, min_altitude_ratio,
    min_velocity_ratio,
};
use thiserror::Error;

/// Which ratio is held fixed while the other is swept.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SweepAxis {
    /// Sweep the altitude ratio `alpha` at a fixed velocity ratio.
    Altitude { ve_v0: f64 },
    /// Sweep the velocity ratio `ve_v0` at a fixed altitude ratio.
    Velocity { alpha: f64 },
}

impl SweepAxis {
    /// Short label used in exported tables.
    pub fn label(&self) -> &'static str {
        match self {
            SweepAxis::Altitude { .. } => "altitude",
            SweepAxis::Velocity { .. } => "velocity",
        }
    }

    /// Name of the ratio held fixed.
    pub fn fixed_name(&self) -> &'static str {
        match self {
            SweepAxis::Altitude { .. } => "ve_v0",
            SweepAxis::Velocity { .. } => "alpha",
        }
    }

    /// Name of the ratio being sampled.
    pub fn swept_name(&self) -> &'static str {
        match self {
            SweepAxis::Altitude { .. } => "alpha",
            SweepAxis::Velocity { .. } => "ve_v0",
        }
    }

    /// Value of the ratio held fixed.
    pub fn fixed_value(&self) -> f64 {
        match *self {
            SweepAxis::Altitude { ve_v0 } => ve_v0,
            SweepAxis::Velocity { alpha } => alpha,
        }
    }

    fn angle_range(&self, swept_value: f64, tol_alpha: f64) -> Result<[f64; 2], DomainError> {
        match *self {
            SweepAxis::Altitude { ve_v0 } => launch_angle_range(ve_v0, swept_value, tol_alpha),
            SweepAxis::Velocity { alpha } => launch_angle_range(swept_value, alpha, tol_alpha),
        }
    }
}

impl From<SweepAxisConfig> for SweepAxis {
    fn from(config: SweepAxisConfig) -> Self {
        match config {
            SweepAxisConfig::Altitude { ve_v0 } => SweepAxis::Altitude { ve_v0 },
            SweepAxisConfig::Velocity { alpha } => SweepAxis::Velocity { alpha },
        }
    }
}

/// Request to sample a launch angle range sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepRequest {
    pub name: String,
    pub axis: SweepAxis,
    pub tol_alpha: f64,
    pub samples: usize,
}

impl SweepRequest {
    /// Convert a loaded `SweepConfig` into a request.
    pub fn from_config(config: &SweepConfig) -> Self {
        Self {
            name: config.name.clone(),
            axis: config.axis.into(),
            tol_alpha: config.tol_alpha,
            samples: config.samples,
        }
    }
}

/// Launch angle range at one sample of the swept ratio.
///
/// `phi0_min` is taken at the upper altitude bound `(1 + tol) * alpha` and `phi0_max` at the
/// lower bound, matching the element order of [`launch_angle_range`]. Both are NaN when the
/// point is infeasible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepPoint {
    pub swept_value: f64,
    pub phi0_min: f64,
    pub phi0_max: f64,
    pub error: Option<DomainError>,
}

impl SweepPoint {
    pub fn feasible(&self) -> bool {
        self.error.is_none()
    }
}

/// Sampled sweep with the bounds it was generated over.
#[derive(Debug, Clone)]
pub struct Sweep {
    pub name: String,
    pub axis: SweepAxis,
    pub tol_alpha: f64,
    pub start: f64,
    pub end: f64,
    pub points: Vec<SweepPoint>,
}

impl Sweep {
    pub fn feasible_points(&self) -> impl Iterator<Item = &SweepPoint> {
        self.points.iter().filter(|p| p.feasible())
    }

    pub fn feasible_count(&self) -> usize {
        self.feasible_points().count()
    }

    /// Smallest `phi0_min` and largest `phi0_max` over the feasible points.
    pub fn angle_extrema(&self) -> Option<(f64, f64)> {
        self.feasible_points().fold(None, |acc, p| match acc {
            None => Some((p.phi0_min, p.phi0_max)),
            Some((lo, hi)) => Some((lo.min(p.phi0_min), hi.max(p.phi0_max))),
        })
    }
}

#[derive(Debug, Error)]
pub enum SweepError {
    #[error("sweep bounds are outside the formula domain: {0}")]
    Domain(#[from] DomainError),
    #[error("tolerance fraction {0} must lie in [0, 1)")]
    InvalidTolerance(f64),
    #[error("sweep needs at least 2 samples (got {0})")]
    TooFewSamples(usize),
    #[error("empty sweep range: start {start} exceeds end {end}")]
    EmptyRange { start: f64, end: f64 },
}

/// Range of the swept ratio over which both tolerance bounds stay inside the validity domain.
///
/// Altitude sweeps cover `[min_altitude_ratio / (1 - tol), max_altitude_ratio / (1 + tol)]`;
/// velocity sweeps cover `[min_velocity_ratio((1 - tol) * alpha), max_velocity_ratio((1 + tol) * alpha)]`.
pub fn sweep_bounds(axis: &SweepAxis, tol_alpha: f64) -> Result<(f64, f64), SweepError> {
    if !(0.0..1.0).contains(&tol_alpha) {
        return Err(SweepError::InvalidTolerance(tol_alpha));
    }

    let (start, end) = match *axis {
        SweepAxis::Altitude { ve_v0 } => (
            min_altitude_ratio(ve_v0)? / (1.0 - tol_alpha),
            max_altitude_ratio(ve_v0)? / (1.0 + tol_alpha),
        ),
        SweepAxis::Velocity { alpha } => (
            min_velocity_ratio((1.0 - tol_alpha) * alpha)?,
            max_velocity_ratio((1.0 + tol_alpha) * alpha)?,
        ),
    };

    if !(start <= end) {
        return Err(SweepError::EmptyRange { start, end });
    }
    Ok((start, end))
}

/// Sample the sweep and evaluate the launch angle range at every point.
///
/// Points where the kernel reports a domain error are kept as infeasible rather than aborting
/// the sweep.
pub fn generate(request: &SweepRequest) -> Result<Sweep, SweepError> {
    if request.samples < 2 {
        return Err(SweepError::TooFewSamples(request.samples));
    }
    let (start, end) = sweep_bounds(&request.axis, request.tol_alpha)?;

    let points: Vec<SweepPoint> = linspace(start, end, request.samples)
        .into_iter()
        .map(|swept_value| match request.axis.angle_range(swept_value, request.tol_alpha) {
            Ok([phi0_min, phi0_max]) => SweepPoint {
                swept_value,
                phi0_min,
                phi0_max,
                error: None,
            },
            Err(err) => {
                log::warn!(
                    "{}: {} = {} is infeasible: {}",
                    request.name,
                    request.axis.swept_name(),
                    swept_value,
                    err
                );
                SweepPoint {
                    swept_value,
                    phi0_min: f64::NAN,
                    phi0_max: f64::NAN,
                    error: Some(err),
                }
            }
        })
        .collect();

    let sweep = Sweep {
        name: request.name.clone(),
        axis: request.axis,
        tol_alpha: request.tol_alpha,
        start,
        end,
        points,
    };
    log::info!(
        "{}: swept {} over [{:.6}, {:.6}] with {}/{} feasible points",
        sweep.name,
        sweep.axis.swept_name(),
        start,
        end,
        sweep.feasible_count(),
        sweep.points.len()
    );
    Ok(sweep)
}
