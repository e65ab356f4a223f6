use anyhow::anyhow;
use clap::Parser;
use launch_angle_calculator::config::{SweepConfig, load_sweeps};
use launch_angle_calculator::export::summary::{SweepSummary, write_summary};
use launch_angle_calculator::export::sweep as export_sweep;
use launch_angle_calculator::sweep::{self as sweep_calc, Sweep, SweepAxis, SweepRequest};
use launch_cli::logging::start_logger;
use launch_cli::plot::{self, Table};
use std::collections::HashSet;
use std::io::Write;
use std::path::{Path, PathBuf};

const DEFAULT_OUTPUT: &str = "artifacts/sweep.csv";

/// Sweep one ratio across its valid range and tabulate the launch angle range at each sample.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Launch angle range sweep generator (CSV + JSON summary + PNG)"
)]
struct Cli {
    /// Sweep definitions: a TOML file, a YAML list, or a directory of TOML files.
    /// Every record is run; records that name an `output` figure are also plotted.
    #[arg(long, conflicts_with_all = ["ve_v0", "alpha"])]
    config: Option<PathBuf>,

    /// Fix the velocity ratio and sweep the altitude ratio
    #[arg(long, conflicts_with = "alpha")]
    ve_v0: Option<f64>,

    /// Fix the altitude ratio and sweep the velocity ratio
    #[arg(long)]
    alpha: Option<f64>,

    /// Fractional tolerance on the altitude ratio
    #[arg(long, default_value_t = 0.04)]
    tol_alpha: f64,

    /// Number of evenly spaced samples
    #[arg(long, default_value_t = 20)]
    samples: usize,

    /// Output CSV file for a single sweep (use '-' for stdout) [default: artifacts/sweep.csv]
    #[arg(long)]
    output: Option<PathBuf>,

    /// Optional JSON summary sidecar for a single sweep
    #[arg(long)]
    summary: Option<PathBuf>,

    /// Directory receiving `<name>.csv` and `<name>.json` when a config holds several sweeps
    #[arg(long, default_value = "artifacts")]
    output_dir: PathBuf,

    /// Skip rendering the figures named by config records
    #[arg(long, default_value_t = false)]
    no_plot: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// One sweep run and where its artifacts go.
struct Job {
    request: SweepRequest,
    csv: PathBuf,
    summary: Option<PathBuf>,
    figure: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _logger = start_logger(cli.verbose)?;

    for job in plan_jobs(&cli)? {
        run(&job)?;
    }
    Ok(())
}

fn plan_jobs(cli: &Cli) -> anyhow::Result<Vec<Job>> {
    let Some(path) = &cli.config else {
        let axis = match (cli.ve_v0, cli.alpha) {
            (Some(ve_v0), None) => SweepAxis::Altitude { ve_v0 },
            (None, Some(alpha)) => SweepAxis::Velocity { alpha },
            _ => return Err(anyhow!("provide --config, --ve-v0, or --alpha")),
        };
        let request = SweepRequest {
            name: format!("{}_{}", axis.fixed_name(), axis.fixed_value()),
            axis,
            tol_alpha: cli.tol_alpha,
            samples: cli.samples,
        };
        return Ok(vec![Job {
            request,
            csv: cli
                .output
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            summary: cli.summary.clone(),
            figure: None,
        }]);
    };

    let configs = load_sweeps(path)?;
    let figure = |config: &SweepConfig| {
        if cli.no_plot {
            None
        } else {
            config.output.clone()
        }
    };
    match (configs.as_slice(), &cli.output) {
        ([], _) => Err(anyhow!("no sweep definitions found in {}", path.display())),
        ([config], Some(csv)) => Ok(vec![Job {
            request: SweepRequest::from_config(config),
            csv: csv.clone(),
            summary: cli.summary.clone(),
            figure: figure(config),
        }]),
        (_, Some(_)) => Err(anyhow!(
            "{} holds {} sweeps; use --output-dir instead of --output",
            path.display(),
            configs.len()
        )),
        (_, None) if cli.summary.is_some() => Err(anyhow!(
            "--summary needs --output; otherwise summaries go to --output-dir as <name>.json"
        )),
        (_, None) => {
            let mut names = HashSet::new();
            configs
                .iter()
                .map(|config| {
                    if !names.insert(config.name.as_str()) {
                        return Err(anyhow!(
                            "duplicate sweep name '{}' in {}",
                            config.name,
                            path.display()
                        ));
                    }
                    Ok(Job {
                        request: SweepRequest::from_config(config),
                        csv: cli.output_dir.join(format!("{}.csv", config.name)),
                        summary: Some(cli.output_dir.join(format!("{}.json", config.name))),
                        figure: figure(config),
                    })
                })
                .collect()
        }
    }
}

fn run(job: &Job) -> anyhow::Result<()> {
    let sweep = sweep_calc::generate(&job.request)?;
    write_csv(&sweep, &job.csv)?;

    if let Some(path) = &job.summary {
        write_summary(path, &summarize(&sweep))?;
        log::info!("{}: wrote summary to {}", sweep.name, path.display());
    }
    if let Some(path) = &job.figure {
        plot::render(&Table::from_sweep(&sweep), path, (900, 650), None)?;
    }
    Ok(())
}

fn write_csv(sweep: &Sweep, path: &Path) -> anyhow::Result<()> {
    let mut writer = export_sweep::writer_for_path(path)?;
    export_sweep::write_header(writer.as_mut())?;
    for point in &sweep.points {
        export_sweep::Record {
            axis: sweep.axis.label(),
            fixed_value: sweep.axis.fixed_value(),
            swept_value: point.swept_value,
            tol_alpha: sweep.tol_alpha,
            phi0_min: point.phi0_min,
            phi0_max: point.phi0_max,
            feasible: point.feasible(),
        }
        .write_to(writer.as_mut())?;
    }
    writer.flush()?;
    log::info!(
        "{}: wrote {} rows to {}",
        sweep.name,
        sweep.points.len(),
        path.display()
    );
    Ok(())
}

fn summarize(sweep: &Sweep) -> SweepSummary {
    let extrema = sweep.angle_extrema();
    SweepSummary {
        name: sweep.name.clone(),
        axis: sweep.axis.label().to_string(),
        fixed_name: sweep.axis.fixed_name().to_string(),
        fixed_value: sweep.axis.fixed_value(),
        swept_name: sweep.axis.swept_name().to_string(),
        swept_start: sweep.start,
        swept_end: sweep.end,
        tol_alpha: sweep.tol_alpha,
        samples: sweep.points.len(),
        feasible_samples: sweep.feasible_count(),
        phi0_min_rad: extrema.map(|(lo, _)| lo),
        phi0_max_rad: extrema.map(|(_, hi)| hi),
        generated_utc: chrono::Utc::now().to_rfc3339(),
    }
}
