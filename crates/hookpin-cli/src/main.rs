// Rust guideline compliant 2026-02-06

//! Hookpin CLI Application
//!
//! Command-line interface for inspecting and validating pre-commit hook configuration.

use clap::Parser;
use hookpin_core::Settings;
use hookpin_cli::commands;
use hookpin_cli::terminal::print_error;
use hookpin_cli::{create_formatter, should_use_color};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "hookpin",
    version,
    about = "Hookpin: load and validate pinned pre-commit hook configuration",
    after_help = "Examples:\n  hookpin validate\n  hookpin validate ci/a.yaml ci/b.yaml --strict\n  hookpin show --format table\n  hookpin hooks --id black\n  hookpin sample-config --output .pre-commit-config.yaml\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Configuration document to use instead of the configured one
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Reject unknown keys and stage names
    #[arg(long, global = true)]
    strict: bool,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Table,
    Plain,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Validate configuration documents
    Validate {
        /// Files to validate (defaults to the configured document)
        files: Vec<PathBuf>,
    },

    /// Show a parsed configuration document
    Show {
        /// Document to show (defaults to the configured document)
        file: Option<PathBuf>,
    },

    /// List hooks with their pinned repositories
    Hooks {
        /// Document to read (defaults to the configured document)
        file: Option<PathBuf>,

        /// Show only the hook with this id
        #[arg(long)]
        id: Option<String>,
    },

    /// Print or write the sample configuration document
    SampleConfig {
        /// Write to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,

        /// Overwrite an existing output file
        #[arg(long)]
        force: bool,
    },
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let use_color = !cli.no_color && should_use_color();
    if let Err(err) = run(cli) {
        print_error(&format!("{:#}", err), use_color);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let mut settings = Settings::load(&cwd)?;

    if let Some(config) = cli.config {
        settings.config_file = config;
    }
    if cli.strict {
        settings.strict = true;
    }
    settings.output_format = match cli.format {
        Some(OutputFormat::Json) => hookpin_core::OutputFormat::Json,
        Some(OutputFormat::Table) => hookpin_core::OutputFormat::Table,
        Some(OutputFormat::Plain) => hookpin_core::OutputFormat::Plain,
        None if cli.json => hookpin_core::OutputFormat::Json,
        None => settings.output_format,
    };

    let formatter = create_formatter(settings.output_format);
    let options = settings.load_options();
    let default_path = settings.config_path(&cwd);

    match cli.command {
        Some(Commands::Validate { files }) => {
            let files = if files.is_empty() {
                vec![default_path]
            } else {
                files
            };
            commands::validate::execute(files, &options, formatter.as_ref())?;
        }
        Some(Commands::Show { file }) => {
            let path = file.unwrap_or(default_path);
            commands::show::execute(&path, &options, formatter.as_ref())?;
        }
        Some(Commands::Hooks { file, id }) => {
            let path = file.unwrap_or(default_path);
            commands::hooks::execute(&path, id, &options, formatter.as_ref())?;
        }
        Some(Commands::SampleConfig { output, force }) => {
            commands::sample::execute(output.as_deref(), force)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}
