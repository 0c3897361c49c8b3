use anyhow::Context;
use clap::{Parser, Subcommand};
use sightline::{format_duration, format_duration_compact, format_nano_duration};
use sightline_cli::{OutputFormat, Source};
use std::path::PathBuf;

const ENV_LOG: &str = "SIGHTLINE_LOG";
const DEFAULT_LOG_FILTER: &str = "warn,sightline=info";

#[derive(Parser)]
#[command(name = "sightline")]
#[command(version, about = "Response times for your traces, at a glance", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Chart the most recent traces with average and maximum response time
    Chart {
        /// JSON file with trace summaries, or "-" for stdin
        #[arg(short, long, env = "SIGHTLINE_INPUT", default_value = "-")]
        input: PathBuf,

        /// Chart built-in sample traces instead of reading input
        #[arg(long)]
        seed: bool,

        /// Output format
        #[arg(short, long, value_enum, env = "SIGHTLINE_OUTPUT", default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Format a duration given in milliseconds
    Format {
        #[arg(allow_negative_numbers = true)]
        milliseconds: f64,

        /// Use the compact form
        #[arg(long)]
        compact: bool,
    },

    /// Format the time between two nanosecond timestamps
    Span { start_nanos: u64, end_nanos: u64 },

    /// Show an attributes JSON object
    Attrs {
        /// JSON file with an attributes object, or "-" for stdin
        #[arg(short, long, default_value = "-")]
        input: PathBuf,

        /// Heading printed above the attributes
        #[arg(long, default_value = "Attributes")]
        title: String,

        /// Summarize arrays instead of listing their items
        #[arg(long)]
        collapse: bool,
    },
}

fn init_logging() {
    let filter = std::env::var(ENV_LOG)
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());

    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .with_env_filter(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let cli = Cli::parse();

    let output = match cli.command {
        Commands::Chart {
            input,
            seed,
            output,
        } => {
            let traces = if seed {
                tracing::info!("using seed traces");
                sightline_cli::seed_traces()
            } else {
                sightline_cli::load_traces(&Source::from_path(&input))
                    .context("could not load traces")?
            };
            sightline_cli::render_chart(&traces, output)?
        }
        Commands::Format {
            milliseconds,
            compact,
        } => {
            let formatted = if compact {
                format_duration_compact(milliseconds)?
            } else {
                format_duration(milliseconds)?
            };
            formatted + "\n"
        }
        Commands::Span {
            start_nanos,
            end_nanos,
        } => {
            if end_nanos < start_nanos {
                tracing::warn!(start_nanos, end_nanos, "span ends before it starts");
            }
            format_nano_duration(start_nanos, end_nanos)? + "\n"
        }
        Commands::Attrs {
            input,
            title,
            collapse,
        } => {
            let attributes = sightline_cli::load_attributes(&Source::from_path(&input))
                .context("could not load attributes")?;
            sightline_cli::render_attributes(&attributes, &title, !collapse)
        }
    };

    print!("{output}");
    Ok(())
}
