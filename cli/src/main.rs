//! Netbaseline CLI - Detect network changes over time
//!
//! Records a baseline of the open TCP ports on a host and later
//! re-scans to report ports that opened or closed since.

mod commands;
mod logging;

use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Args, Parser, Subcommand};
use netbaseline_core::config::{DEFAULT_BASELINE_FILE, DEFAULT_PORTS, DEFAULT_TARGET};
use netbaseline_core::{ScanSettings, ScannerSettings};

const BANNER: &str = r"
 _   _      _   ____                 _ _
| \ | | ___| |_| __ )  __ _ ___  ___| (_)_ __   ___
|  \| |/ _ \ __|  _ \ / _` / __|/ _ \ | | '_ \ / _ \
| |\  |  __/ |_| |_) | (_| \__ \  __/ | | | | |  __/
|_| \_|\___|\__|____/ \__,_|___/\___|_|_|_| |_|\___|

        Network Baseline Tool
  Detecting Network Changes Over Time
";

#[derive(Parser)]
#[command(name = "netbaseline")]
#[command(author, version, about = "Baseline open TCP ports and detect network changes")]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Do not print the banner
    #[arg(long, global = true)]
    no_banner: bool,

    /// Path to the nmap executable (searched on PATH by default)
    #[arg(long = "nmap", global = true, value_name = "PATH")]
    nmap: Option<PathBuf>,

    /// Give up on the scan after this many seconds
    #[arg(long, global = true, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    timeout: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan the target and save the open ports as the baseline
    Baseline(ScanArgs),

    /// Scan the target and compare against the saved baseline
    Compare(ScanArgs),
}

#[derive(Args, Debug, Clone)]
struct ScanArgs {
    /// Target host or IP address
    #[arg(long, default_value = DEFAULT_TARGET)]
    target: String,

    /// Port range to scan
    #[arg(long, default_value = DEFAULT_PORTS)]
    ports: String,

    /// Baseline file
    #[arg(long, default_value = DEFAULT_BASELINE_FILE)]
    file: PathBuf,
}

impl From<ScanArgs> for ScanSettings {
    fn from(args: ScanArgs) -> Self {
        ScanSettings::new(args.target, args.ports).with_file(args.file)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if !cli.json && !cli.no_banner && atty::is(atty::Stream::Stdout) {
        println!("{}", BANNER);
    }

    let scanner = ScannerSettings {
        nmap_path: cli.nmap,
        timeout: cli.timeout.map(Duration::from_secs),
    };

    match cli.command {
        Commands::Baseline(args) => {
            commands::baseline::run(args.into(), &scanner, cli.json).await?;
        }
        Commands::Compare(args) => {
            commands::compare::run(args.into(), &scanner, cli.json).await?;
        }
    }

    Ok(())
}
