//! Launch angle from energy and angular momentum conservation.
//!
//! For a projectile launched at speed `v0` from the surface of a body with escape speed `ve`,
//! reaching a peak altitude of `alpha` body radii requires a launch angle `phi0` from local
//! vertical satisfying
//!
//! ```text
//! sin(phi0) = (1 + alpha) * sqrt(1 - alpha / (1 + alpha) * (ve / v0)^2)
//! ```

use crate::DomainError;
use crate::arcsin::arcsin;

/// Launch angle from vertical, in radians, for velocity ratio `ve_v0` and altitude ratio `alpha`.
///
/// Fails when `ve_v0 < 1.0`, when the square-root argument is negative (reporting the largest
/// valid `alpha`, `1 / (ve_v0^2 - 1)`), or when the sine argument exceeds 1.
pub fn launch_angle(ve_v0: f64, alpha: f64) -> Result<f64, DomainError> {
    if ve_v0 < 1.0 {
        return Err(DomainError::SubEscapeVelocity(ve_v0));
    }
    let ve_v0_squared = ve_v0 * ve_v0;
    let d = 1.0 - alpha / (1.0 + alpha) * ve_v0_squared;
    if d < 0.0 {
        return Err(DomainError::AltitudeAboveMaximum {
            ve_v0,
            alpha,
            alpha_max: 1.0 / (ve_v0_squared - 1.0),
        });
    }
    arcsin((1.0 + alpha) * d.sqrt())
}

/// Launch angles at the edges of a symmetric altitude tolerance band.
///
/// Returns `[phi0((1 + tol_alpha) * alpha), phi0((1 - tol_alpha) * alpha)]`: the angle for the
/// upper altitude bound comes first. No validation happens here; a failure for either bound
/// propagates unchanged from [`launch_angle`].
pub fn launch_angle_range(ve_v0: f64, alpha: f64, tol_alpha: f64) -> Result<[f64; 2], DomainError> {
    let alpha_upper = (1.0 + tol_alpha) * alpha;
    let alpha_lower = (1.0 - tol_alpha) * alpha;
    Ok([
        launch_angle(ve_v0, alpha_upper)?,
        launch_angle(ve_v0, alpha_lower)?,
    ])
}
