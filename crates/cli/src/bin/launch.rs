use clap::{Parser, Subcommand};
use launch_angle_calculator::units::rad_to_deg;
use launch_angle_calculator::{
    evaluate_arcsin, launch_angle, launch_angle_range, max_altitude_ratio, max_velocity_ratio,
    min_altitude_ratio, min_velocity_ratio,
};
use launch_cli::logging::start_logger;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Launch angle calculator (series arcsin, energy/momentum formula)"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Inverse sine of X from the power series
    Arcsin {
        #[arg(long, allow_negative_numbers = true)]
        x: f64,

        /// Also print the number of series terms and the final relative increment
        #[arg(long, default_value_t = false)]
        diagnostics: bool,
    },
    /// Launch angle from vertical for a velocity ratio and target altitude ratio
    Angle {
        /// Ratio of escape velocity to launch velocity
        #[arg(long)]
        ve_v0: f64,

        /// Target peak altitude relative to the body radius
        #[arg(long)]
        alpha: f64,
    },
    /// Launch angles at the edges of an altitude tolerance band
    Range {
        #[arg(long)]
        ve_v0: f64,

        #[arg(long)]
        alpha: f64,

        /// Fractional tolerance on the altitude ratio
        #[arg(long)]
        tol_alpha: f64,
    },
    /// Validity limits for one ratio given the other
    Limits {
        /// Report altitude ratio limits for this velocity ratio
        #[arg(long, conflicts_with = "alpha", required_unless_present = "alpha")]
        ve_v0: Option<f64>,

        /// Report velocity ratio limits for this altitude ratio
        #[arg(long)]
        alpha: Option<f64>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _logger = start_logger(cli.verbose)?;

    match cli.command {
        Command::Arcsin { x, diagnostics } => {
            let evaluation = evaluate_arcsin(x)?;
            println!("arcsin({x}) = {}", format_angle(evaluation.value));
            if diagnostics {
                println!(
                    "Series terms   : {} (relative increment {:.3e}, {})",
                    evaluation.terms,
                    evaluation.relative_increment,
                    if evaluation.converged {
                        "converged"
                    } else {
                        "term cap reached"
                    }
                );
            }
        }
        Command::Angle { ve_v0, alpha } => {
            let phi0 = launch_angle(ve_v0, alpha)?;
            println!("=== Launch Angle ===");
            println!("ve/v0          : {ve_v0}");
            println!("alpha          : {alpha}");
            println!("phi0           : {}", format_angle(phi0));
        }
        Command::Range {
            ve_v0,
            alpha,
            tol_alpha,
        } => {
            let [at_upper, at_lower] = launch_angle_range(ve_v0, alpha, tol_alpha)?;
            println!("=== Launch Angle Range ===");
            println!("ve/v0          : {ve_v0}");
            println!("alpha          : {alpha} ± {:.2}%", tol_alpha * 100.0);
            println!(
                "phi0 @ alpha = {:.6} : {}",
                (1.0 + tol_alpha) * alpha,
                format_angle(at_upper)
            );
            println!(
                "phi0 @ alpha = {:.6} : {}",
                (1.0 - tol_alpha) * alpha,
                format_angle(at_lower)
            );
        }
        Command::Limits { ve_v0, alpha } => {
            if let Some(ve_v0) = ve_v0 {
                println!("=== Altitude Ratio Limits (ve/v0 = {ve_v0}) ===");
                println!("alpha_min      : {:.6}", min_altitude_ratio(ve_v0)?);
                println!("alpha_max      : {:.6}", max_altitude_ratio(ve_v0)?);
            }
            if let Some(alpha) = alpha {
                println!("=== Velocity Ratio Limits (alpha = {alpha}) ===");
                println!("ve_v0_min      : {:.6}", min_velocity_ratio(alpha)?);
                println!("ve_v0_max      : {:.6}", max_velocity_ratio(alpha)?);
            }
        }
    }

    Ok(())
}

fn format_angle(radians: f64) -> String {
    format!("{:.6} rad ({:.4}°)", radians, rad_to_deg(radians))
}
