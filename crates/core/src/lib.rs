//! Core constants, unit helpers, and sampling grids shared across the launch angle workspace.

/// Numeric constants used by the series kernel.
pub mod constants {
    /// Stopping tolerance for the inverse-sine series, so that at least 5 significant figures converge.
    pub const SERIES_TOLERANCE: f64 = 0.5e-5;
    /// Hard cap on the number of series terms summed for a single evaluation.
    pub const SERIES_MAX_TERMS: usize = 100;
}

/// Basic angle conversion helpers.
pub mod units {
    /// Convert radians to degrees.
    #[inline]
    pub fn rad_to_deg(v: f64) -> f64 {
        v.to_degrees()
    }

    /// Convert degrees to radians.
    #[inline]
    pub fn deg_to_rad(v: f64) -> f64 {
        v.to_radians()
    }
}

/// Evenly spaced sampling grids for parameter sweeps.
pub mod grid {
    /// Return `count` evenly spaced samples over `[start, end]`, both endpoints included.
    ///
    /// The last sample is pinned to `end` so that sweeps hit their boundary exactly.
    pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
        match count {
            0 => Vec::new(),
            1 => vec![start],
            _ => {
                let step = (end - start) / (count - 1) as f64;
                let mut samples: Vec<f64> = (0..count).map(|i| start + step * i as f64).collect();
                samples[count - 1] = end;
                samples
            }
        }
    }
}
