use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Report;
use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
};
use tracing_subscriber::EnvFilter;

mod script;

use crate::script::Session;

/// Replays an edit script against a rope and prints the resulting text.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Initial text of the rope
    #[arg(default_value = "")]
    text: String,

    /// Script file to run; commands are read from stdin when omitted
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Rebalance the rope once the script has run
    #[arg(short, long)]
    rebalance: bool,

    /// Print length, depth and leaf count at the end
    #[arg(long)]
    stats: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<(), Report> {
    color_eyre::install()?;
    let args = Args::parse();

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&args.log_level)?,
    };
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();

    let mut session = Session::new(&args.text, io::stdout().lock());
    match &args.script {
        Some(path) => {
            let file = File::open(path).wrap_err_with(|| format!("Error opening script '{}'", path.display()))?;
            session.run(BufReader::new(file))?;
        }
        None => session.run(io::stdin().lock())?,
    }

    if args.rebalance {
        session.rope.rebalance();
    }
    if args.stats {
        session.write_stats()?;
    }

    let _ = session.finish()?;
    Ok(())
}
