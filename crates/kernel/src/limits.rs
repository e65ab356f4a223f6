//! Closed-form boundaries of the launch angle formula's validity domain.
//!
//! Two constraints shape the domain of `sin(phi0) = (1 + alpha) * sqrt(1 - alpha / (1 + alpha) * ve_v0^2)`:
//! the square-root argument must be non-negative, and the right-hand side must not exceed 1
//! (the largest launch angle is pi/2). Solving each for one ratio given the other yields the
//! four limits below. Sweep drivers use them to choose valid sampling ranges.

use crate::DomainError;

/// Smallest peak altitude ratio reachable at `ve_v0` without exceeding a pi/2 launch angle.
///
/// The algebraic limit `-(ve_v0^2 - 2) / (ve_v0^2 - 1)` turns negative once `ve_v0 > sqrt(2)`,
/// in which case the minimum is the trivial 0.0.
pub fn min_altitude_ratio(ve_v0: f64) -> Result<f64, DomainError> {
    let ve_v0_squared = velocity_ratio_squared(ve_v0)?;
    Ok((-(ve_v0_squared - 2.0) / (ve_v0_squared - 1.0)).max(0.0))
}

/// Largest peak altitude ratio for which the square-root argument stays non-negative.
///
/// Approaches 0.0 as `ve_v0` grows (the launch speed shrinks).
pub fn max_altitude_ratio(ve_v0: f64) -> Result<f64, DomainError> {
    let ve_v0_squared = velocity_ratio_squared(ve_v0)?;
    Ok(1.0 / (ve_v0_squared - 1.0))
}

/// Smallest velocity ratio (largest launch speed) that keeps the sine argument at or below 1.
pub fn min_velocity_ratio(alpha: f64) -> Result<f64, DomainError> {
    check_altitude_ratio(alpha)?;
    Ok(((2.0 + alpha) / (1.0 + alpha)).sqrt())
}

/// Largest velocity ratio (smallest launch speed) that keeps the square-root argument non-negative.
pub fn max_velocity_ratio(alpha: f64) -> Result<f64, DomainError> {
    check_altitude_ratio(alpha)?;
    Ok(((1.0 + alpha) / alpha).sqrt())
}

fn velocity_ratio_squared(ve_v0: f64) -> Result<f64, DomainError> {
    if !(ve_v0 > 1.0) {
        return Err(DomainError::VelocityRatioNotAboveOne(ve_v0));
    }
    Ok(ve_v0 * ve_v0)
}

fn check_altitude_ratio(alpha: f64) -> Result<(), DomainError> {
    if !(alpha > 0.0) {
        return Err(DomainError::AltitudeRatioNotPositive(alpha));
    }
    Ok(())
}
