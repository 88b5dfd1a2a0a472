use clap::{Parser, Subcommand};
use shroud::cli::{self, CliError, ProcessOptions};
use shroud::processor::Outcome;
use shroud::{to_json, to_json_pretty};
use std::io::{self, Read};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "shroud")]
#[command(about = "Shroud - rewrite selected string fields of a JSON document")]
#[command(version)]
struct Cli {
    /// Log which keys were applied or skipped (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite the fields selected by the keys
    Process {
        /// Key selecting fields to rewrite (repeatable)
        #[arg(short, long = "key")]
        keys: Vec<String>,

        /// File with one key per line
        #[arg(long)]
        keys_file: Option<PathBuf>,

        /// JSON input (reads from stdin if not provided)
        #[arg(short, long)]
        input: Option<String>,

        /// Transform to apply to each selected string
        #[arg(short, long, default_value = "mask")]
        strategy: String,

        /// Characters left visible by the mask strategy
        #[arg(long, default_value_t = 0)]
        keep: usize,

        /// Redaction or replacement text
        #[arg(long)]
        with: Option<String>,

        /// Regex for the replace strategy
        #[arg(long)]
        pattern: Option<String>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Validate keys and show what each one selects
    Check {
        /// Keys to validate
        keys: Vec<String>,
    },

    /// List documentation topics
    Docs,

    /// Show documentation for a specific topic
    Doc {
        /// Topic name (use 'shroud docs' to list topics)
        topic: String,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("shroud=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Process {
            keys,
            keys_file,
            input,
            strategy,
            keep,
            with,
            pattern,
            pretty,
        } => read_input(input).and_then(|input| {
            run_process(
                ProcessOptions {
                    keys,
                    keys_file,
                    input,
                    strategy,
                    keep,
                    with,
                    pattern,
                },
                pretty,
            )
        }),
        Commands::Check { keys } => run_check(&keys),
        Commands::Docs => {
            print!("{}", cli::get_docs_overview());
            Ok(())
        }
        Commands::Doc { topic } => cli::get_doc_topic(&topic).map(|content| print!("{}", content)),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(e.exit_code());
    }
}

fn read_input(input: Option<String>) -> Result<Option<String>, CliError> {
    match input {
        Some(s) => Ok(Some(s)),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(Some(buffer))
        }
        None => Ok(None),
    }
}

fn run_process(options: ProcessOptions, pretty: bool) -> Result<(), CliError> {
    let output = cli::execute_process(&options)?;

    for report in &output.reports {
        match &report.outcome {
            Outcome::Applied(count) => info!(key = %report.key, count, "applied"),
            Outcome::Skipped(reason) => info!(key = %report.key, %reason, "skipped"),
        }
    }

    let json = if pretty {
        to_json_pretty(&output.document)
    } else {
        to_json(&output.document)
    };
    println!("{}", json);
    Ok(())
}

fn run_check(keys: &[String]) -> Result<(), CliError> {
    for spec in cli::execute_check(keys)? {
        println!("{}\t{}", spec, cli::describe_key(&spec));
    }
    Ok(())
}
