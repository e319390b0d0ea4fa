//! List topics, run a selection, or run them all.
//!
//! Run with: cargo run --bin catalogue -- --help

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use stream_pipelines::catalogue::{self, Topic, TOPICS};
use stream_pipelines::{logging, Config, PipelineError, Report};

#[derive(Parser)]
#[command(
    name = "catalogue",
    version = env!("CARGO_PKG_VERSION"),
    about = "Collection pipeline examples on iterators and Rayon"
)]
struct Cli {
    /// Increase verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress log output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Use custom configuration file
    #[arg(long, global = true, env = "STREAMS_CONFIG")]
    config: Option<PathBuf>,

    /// Disable coloured output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List every topic with its binary name
    List,
    /// Run the named topics in order
    Run {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Run every topic
    All,
}

fn main() -> Result<(), PipelineError> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let mut config = Config::load(cli.config.as_deref())?;
    if cli.no_color {
        config.output.color = false;
    }

    let selected: Vec<&Topic> = match cli.command.unwrap_or(Commands::List) {
        Commands::List => return list(config.output.color),
        Commands::Run { names } => names
            .iter()
            .map(|name| catalogue::find(name))
            .collect::<Result<_, _>>()?,
        Commands::All => TOPICS.iter().collect(),
    };

    info!(count = selected.len(), "running topics");
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut report = Report::new(&mut out, config.output.color);
    selected
        .into_iter()
        .try_for_each(|topic| catalogue::run_topic(topic, &mut report, &config))
}

fn list(color: bool) -> Result<(), PipelineError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for topic in TOPICS {
        let name = format!("{:<12}", topic.name);
        if color {
            writeln!(out, "{} {:<20} {}", name.bold(), topic.bin, topic.summary)?;
        } else {
            writeln!(out, "{} {:<20} {}", name, topic.bin, topic.summary)?;
        }
    }
    Ok(())
}
