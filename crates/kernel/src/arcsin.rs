//! Inverse sine from the power series for `arcsin(x)^2`.
//!
//! The series (Borwein & Chamberland, "Integer Powers of Arcsin", 2007) is
//!
//! ```text
//! arcsin(x)^2 = 1/2 * sum_{n>=1} (2x)^(2n) / (n^2 * C(2n, n))
//! ```
//!
//! It is evaluated on `|x|` and the sign restored afterwards, since arcsin is odd. Convergence
//! slows down as `|x|` approaches 1, where the term cap rather than the tolerance ends the loop.

use launch_core::constants::{SERIES_MAX_TERMS, SERIES_TOLERANCE};

use crate::DomainError;

/// Outcome of a single series evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesEvaluation {
    /// Principal value in radians, on `[-pi/2, pi/2]`.
    pub value: f64,
    /// Number of series terms summed. Zero on the small-argument shortcut.
    pub terms: usize,
    /// Last term divided by the running sum.
    pub relative_increment: f64,
    /// `false` when the term cap stopped the loop before the tolerance was met.
    pub converged: bool,
}

/// Inverse sine of `x` in radians, for `x` on `[-1, 1]`.
pub fn arcsin(x: f64) -> Result<f64, DomainError> {
    evaluate(x).map(|evaluation| evaluation.value)
}

/// Inverse sine of `x` together with the convergence details of the series.
pub fn evaluate(x: f64) -> Result<SeriesEvaluation, DomainError> {
    let (sign, x_abs) = if x < 0.0 { (-1.0, x.abs()) } else { (1.0, x) };
    // NaN fails this comparison too
    if !(x_abs <= 1.0) {
        return Err(DomainError::ArcsinArgument(x));
    }

    if x_abs < SERIES_TOLERANCE {
        return Ok(SeriesEvaluation {
            value: sign * x_abs,
            terms: 0,
            relative_increment: 0.0,
            converged: true,
        });
    }

    let two_x_squared = 4.0 * x_abs * x_abs;
    let mut power = 1.0_f64; // (2x)^(2n)
    let mut central_binomial = 1.0_f64; // (2n)! / (n!)^2
    let mut result = 0.0_f64;
    let mut increment = 1.0_f64;
    let mut n = 0usize;

    while increment > SERIES_TOLERANCE && n < SERIES_MAX_TERMS {
        n += 1;
        let nf = n as f64;
        power *= two_x_squared;
        central_binomial *= (2.0 * nf) * (2.0 * nf - 1.0) / (nf * nf);
        let term = 0.5 * power / (nf * nf * central_binomial);
        result += term;
        increment = term / result;
    }

    let converged = increment <= SERIES_TOLERANCE;
    if !converged {
        log::debug!(
            "arcsin({x}) stopped at {n} terms with relative increment {increment:.3e}"
        );
    }

    Ok(SeriesEvaluation {
        value: sign * result.sqrt(),
        terms: n,
        relative_increment: increment,
        converged,
    })
}
