use thiserror::Error;

/// Inputs fall outside the region where the underlying formula yields a real result.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DomainError {
    #[error("input abs({0}) > 1.0 is out of range")]
    ArcsinArgument(f64),
    #[error("invalid value ve_v0 = {0} < 1.0")]
    SubEscapeVelocity(f64),
    #[error("invalid value alpha = {alpha} > {alpha_max} for ve_v0 = {ve_v0}")]
    AltitudeAboveMaximum {
        ve_v0: f64,
        alpha: f64,
        alpha_max: f64,
    },
    #[error("invalid velocity ratio: {0}, must be > 1.0")]
    VelocityRatioNotAboveOne(f64),
    #[error("invalid altitude ratio: {0}, must be > 0.0")]
    AltitudeRatioNotPositive(f64),
}
