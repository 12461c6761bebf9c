// SPDX-License-Identifier: MIT OR Apache-2.0

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use nodecfg::{export, render, Document, ExportMode, Result};

/// Environment variable holding a tracing filter; overrides `-v`.
const ENV_LOG: &str = "NODECFG_LOG";

#[derive(Parser, Debug)]
#[command(name = "nodecfg", version)]
#[command(about = "Print deployment node settings as shell assignments", long_about = None)]
struct Cli {
    /// Path to the node config file
    #[arg(long, env = "NODECFG_FILE")]
    file: PathBuf,

    /// Node id to print (defaults to default_node, then primary)
    #[arg(long)]
    node: Option<String>,

    /// Print the primary node and a listing of all nodes instead
    #[arg(long)]
    merge_info: bool,

    /// Print the parsed config as YAML instead of assignments
    #[arg(long, conflicts_with = "merge_info")]
    dump: bool,

    /// Increase log verbosity on stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "error",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn run(cli: &Cli) -> Result<String> {
    let doc = Document::load_from_path(&cli.file)?;

    if cli.dump {
        return doc.to_yaml();
    }

    let mode = if cli.merge_info {
        ExportMode::MergeInfo
    } else {
        ExportMode::Node {
            selector: cli.node.clone(),
        }
    };

    Ok(render(&export(&doc, &mode)?))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("[ERROR] {e}");
            ExitCode::FAILURE
        }
    }
}
