use clap::Parser;
use launch_cli::logging::start_logger;
use launch_cli::plot::{read_table, render};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Render launch angle range curves from a sweep CSV"
)]
struct Cli {
    #[arg(long)]
    input: PathBuf,
    #[arg(long, default_value = "figures/launch_range.png")]
    output: PathBuf,
    #[arg(long, default_value_t = 900)]
    width: u32,
    #[arg(long, default_value_t = 650)]
    height: u32,
    /// Override the generated chart caption
    #[arg(long)]
    title: Option<String>,
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _logger = start_logger(cli.verbose)?;
    let table = read_table(&cli.input)?;
    render(
        &table,
        &cli.output,
        (cli.width, cli.height),
        cli.title.as_deref(),
    )
}
