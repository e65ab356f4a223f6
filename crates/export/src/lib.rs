//! Export helpers for CSV and JSON artifacts.

pub mod sweep {
    use std::fs::{self, File};
    use std::io::{self, BufWriter, Write};
    use std::path::Path;

    use launch_core::units::rad_to_deg;

    pub const HEADER: &str = "axis,fixed_value,swept_value,tol_alpha,phi0_min_rad,phi0_max_rad,phi0_min_deg,phi0_max_deg,feasible";

    /// Create a writer for the target path, handling stdout (`-`) by convention.
    pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
        if path == Path::new("-") {
            return Ok(Box::new(BufWriter::new(io::stdout())));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        Ok(Box::new(BufWriter::new(file)))
    }

    /// Write the standard sweep CSV header.
    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)
    }

    /// CSV row emitted by the sweep exporter. Angles are given in radians.
    #[derive(Debug, Clone)]
    pub struct Record<'a> {
        pub axis: &'a str,
        pub fixed_value: f64,
        pub swept_value: f64,
        pub tol_alpha: f64,
        pub phi0_min: f64,
        pub phi0_max: f64,
        pub feasible: bool,
    }

    impl<'a> Record<'a> {
        /// Serialize the record to CSV, matching the standard header ordering.
        pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
            writeln!(
                writer,
                "{},{},{:.9},{},{:.9},{:.9},{:.6},{:.6},{}",
                self.axis,
                self.fixed_value,
                self.swept_value,
                self.tol_alpha,
                self.phi0_min,
                self.phi0_max,
                rad_to_deg(self.phi0_min),
                rad_to_deg(self.phi0_max),
                if self.feasible { "true" } else { "false" },
            )
        }
    }
}

pub mod summary {
    use serde::Serialize;
    use serde_json::to_writer_pretty;
    use std::fs::{self, File};
    use std::io;
    use std::path::Path;

    /// JSON sidecar describing a generated sweep.
    #[derive(Debug, Clone, Serialize)]
    pub struct SweepSummary {
        pub name: String,
        pub axis: String,
        pub fixed_name: String,
        pub fixed_value: f64,
        pub swept_name: String,
        pub swept_start: f64,
        pub swept_end: f64,
        pub tol_alpha: f64,
        pub samples: usize,
        pub feasible_samples: usize,
        pub phi0_min_rad: Option<f64>,
        pub phi0_max_rad: Option<f64>,
        pub generated_utc: String,
    }

    /// Write the summary as pretty-printed JSON, creating parent directories as needed.
    pub fn write_summary(path: &Path, summary: &SweepSummary) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        to_writer_pretty(File::create(path)?, summary)?;
        Ok(())
    }
}
