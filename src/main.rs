use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use punctual::{input, solve};

/// Exact single-machine sequencing with deadlines.
///
/// Each input file holds one `duration,profit,deadline` record per line;
/// blank lines are skipped. For every file the optimal schedule, the
/// rejected jobs, and the collected profit are printed.
#[derive(Parser)]
#[command(name = "punctual", version)]
struct Cli {
    /// Job files to solve, one schedule per file
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("punctual=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    for path in &cli.files {
        let jobs = input::read_jobs(path)
            .with_context(|| format!("cannot load jobs from {}", path.display()))?;
        let solution = solve(&jobs);
        info!(
            file = %path.display(),
            jobs = jobs.len(),
            scheduled = solution.schedule().len(),
            "solved"
        );

        println!(
            "{}: scheduled {} of {} jobs, profit {}",
            path.display(),
            solution.schedule().len(),
            jobs.len(),
            solution.profit()
        );
        let order: Vec<String> = solution.schedule().iter().map(u32::to_string).collect();
        println!("  order:    [{}]", order.join(", "));
        let rejected: Vec<String> = solution.rejected().iter().map(u32::to_string).collect();
        println!("  rejected: {{{}}}", rejected.join(", "));
    }

    Ok(())
}
