//! Textual pass/fail harness over the kernel's reference cases.
//!
//! Each case prints `Testing ...PASSED` or `Testing ...FAILED` with the mismatch, followed by a
//! per-group summary. The process exits non-zero when any case fails.

use clap::Parser;
use launch_angle_calculator::{DomainError, arcsin, launch_angle, launch_angle_range};
use launch_cli::logging::start_logger;

#[derive(Parser)]
#[command(author, version, about = "Run the kernel reference cases and report pass/fail")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

const RTOL: f64 = 1e-5;
const ATOL: f64 = 1e-8;

#[derive(Default)]
struct Tally {
    tests: usize,
    failed: usize,
}

impl Tally {
    fn record(&mut self, label: String, outcome: Result<(), String>) {
        self.tests += 1;
        match outcome {
            Ok(()) => println!("{label}PASSED"),
            Err(msg) => {
                self.failed += 1;
                println!("{label}FAILED\n\t{msg}");
            }
        }
    }

    fn summarize(&self) {
        if self.failed > 0 {
            println!("{} / {} tests failed.", self.failed, self.tests);
        } else {
            println!("All tests passed!");
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _logger = start_logger(cli.verbose)?;

    let failed = check_arcsin() + check_launch_angle() + check_launch_angle_range();
    if failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}

fn check_arcsin() -> usize {
    let mut tally = Tally::default();
    println!("\n***Testing arcsin(x)***");

    println!("Testing with valid inputs [-1.0, 1.0]:");
    for (x, expected) in [
        (0.0, 0.0),
        (1.0e-8, 0.0),
        (-1.0e-8, 0.0),
        (0.5, 0.5_f64.asin()),
        (-0.7, (-0.7_f64).asin()),
        (0.9, 0.9_f64.asin()),
    ] {
        tally.record(
            format!("Testing x = {x}..."),
            compare(arcsin(x).map(|v| [v]), &[expected]),
        );
    }

    println!("Testing with invalid inputs abs(x) > 1.0:");
    for x in [1.1, -1.1] {
        tally.record(format!("Testing x = {x}..."), expect_domain_error(arcsin(x)));
    }

    tally.summarize();
    tally.failed
}

fn check_launch_angle() -> usize {
    let mut tally = Tally::default();
    println!("\n***Testing launch_angle(ve_v0, alpha)***");

    println!("Testing with valid inputs:");
    for (ve_v0, alpha, expected) in [(2.0, 0.25, 0.593200), (3.0, 0.10, 0.488205)] {
        tally.record(
            format!("Testing ve_v0 = {ve_v0} and alpha = {alpha}..."),
            compare(launch_angle(ve_v0, alpha).map(|v| [v]), &[expected]),
        );
    }

    println!("Testing with invalid inputs:");
    // sub-escape ratio, alpha too big for ve_v0, ve_v0 too big for alpha
    for (ve_v0, alpha) in [(0.9, 0.25), (2.0, 0.34), (2.24, 0.25)] {
        tally.record(
            format!("Testing ve_v0 = {ve_v0} and alpha = {alpha}..."),
            expect_domain_error(launch_angle(ve_v0, alpha)),
        );
    }

    tally.summarize();
    tally.failed
}

fn check_launch_angle_range() -> usize {
    let mut tally = Tally::default();
    println!("\n***Testing launch_angle_range(ve_v0, alpha, tol_alpha)***");

    for (ve_v0, alpha, tol_alpha, expected) in [
        (2.0, 0.25, 0.02, [0.574089, 0.611860]),
        (3.0, 0.10, 0.05, [0.433970, 0.538257]),
    ] {
        tally.record(
            format!("Testing ve_v0 = {ve_v0}, alpha = {alpha}, tol_alpha = {tol_alpha}..."),
            compare(launch_angle_range(ve_v0, alpha, tol_alpha), &expected),
        );
    }

    tally.summarize();
    tally.failed
}

fn compare<const N: usize>(
    result: Result<[f64; N], DomainError>,
    expected: &[f64; N],
) -> Result<(), String> {
    let result = result.map_err(|err| format!("result : {err}, expected : {expected:?}"))?;
    let close = result
        .iter()
        .zip(expected)
        .all(|(a, b)| (a - b).abs() <= ATOL + RTOL * b.abs());
    if close {
        Ok(())
    } else {
        Err(format!("result : {result:?}, expected : {expected:?}"))
    }
}

fn expect_domain_error<T: std::fmt::Debug>(result: Result<T, DomainError>) -> Result<(), String> {
    match result {
        Err(_) => Ok(()),
        Ok(value) => Err(format!("result : {value:?}, expected : DomainError")),
    }
}
