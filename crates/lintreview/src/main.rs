use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "lintreview")]
#[command(about = "Run flake8 over files and report problems")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Show debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Check files and print the problems found
    Check {
        /// Files to check (non-Python files are skipped)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Base directory the tool runs in (defaults to current directory)
        #[arg(short, long)]
        root: Option<PathBuf>,

        /// Config file (defaults to <root>/.lintreview/tools.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List tools and whether they are installed
    Tools {
        /// Base directory (defaults to current directory)
        #[arg(short, long)]
        root: Option<PathBuf>,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match cli.command {
        Commands::Check {
            files,
            root,
            config,
            json,
        } => commands::cmd_check(&files, root.as_deref(), config.as_deref(), json),
        Commands::Tools { root } => commands::cmd_tools(root.as_deref()),
    };
    std::process::exit(exit_code);
}
