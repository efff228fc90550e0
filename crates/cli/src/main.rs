use anyhow::Result;
use clap::{Parser, Subcommand};
use samestats::dest::DESTINATION_NAMES;
use samestats::transform::RampMode;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod points_io;
mod provenance;
mod run;

use run::{do_single_run, RunArgs};

#[derive(Parser)]
#[command(name = "samestats")]
#[command(about = "Same stats, different graphs: pull a scatter onto a shape")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Transform a source dataset toward a named destination shape
    Run {
        /// Dataset name or path (".csv" appended if missing)
        source: String,
        /// Destination name (see `dests`)
        target: String,
        #[arg(long, default_value_t = 100_000)]
        n_iter: usize,
        #[arg(long, default_value_t = 100)]
        n_frames: usize,
        #[arg(long, default_value_t = 2)]
        error_precision: u32,
        #[arg(long, default_value = "seed_datasets")]
        source_home: PathBuf,
        #[arg(long, default_value = "results")]
        output_home: PathBuf,
        /// RNG seed; drawn from the clock and logged when omitted
        #[arg(long)]
        seed: Option<u64>,
        /// Denser checkpoints near the start
        #[arg(long)]
        ramp_in: bool,
        /// Denser checkpoints near the end
        #[arg(long)]
        ramp_out: bool,
    },
    /// List destination names
    Dests,
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run {
            source,
            target,
            n_iter,
            n_frames,
            error_precision,
            source_home,
            output_home,
            seed,
            ramp_in,
            ramp_out,
        } => {
            let args = RunArgs {
                source,
                target,
                n_iter,
                n_frames,
                error_precision,
                source_home,
                output_home,
                seed,
                ramp: RampMode { ramp_in, ramp_out },
            };
            do_single_run(&args).map(|_| ())
        }
        Action::Dests => {
            for name in DESTINATION_NAMES {
                println!("{name}");
            }
            Ok(())
        }
        Action::Report => report(),
    }
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "samestats_version": samestats::VERSION,
        "destinations": DESTINATION_NAMES,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
