//! studydrill CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use studydrill_core::model::Language;

mod commands;

#[derive(Parser)]
#[command(
    name = "studydrill",
    version,
    about = "Interactive quiz sessions over study documents"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an interactive quiz session
    Run {
        #[command(flatten)]
        selection: commands::SelectionArgs,

        /// Output directory for report artifacts
        #[arg(long)]
        output: Option<PathBuf>,

        /// Report formats: text, json, markdown, html (comma-separated)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Print the generated question batch without starting a session
    Preview {
        #[command(flatten)]
        selection: commands::SelectionArgs,
    },

    /// Check study documents for authoring problems
    Validate {
        /// Directory of study documents
        #[arg(long)]
        docs: PathBuf,

        /// Topics to check (comma-separated; default: every document in the directory)
        #[arg(long)]
        topics: Option<String>,

        /// Document language: en, es
        #[arg(long, default_value = "en")]
        language: Language,
    },

    /// List topics available in a docs directory
    Topics {
        /// Directory of study documents
        #[arg(long)]
        docs: PathBuf,

        /// Document language: en, es
        #[arg(long, default_value = "en")]
        language: Language,
    },

    /// Create a starter config and sample documents
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("studydrill=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            selection,
            output,
            format,
        } => commands::run::execute(selection, output, format).await,
        Commands::Preview { selection } => commands::preview::execute(selection).await,
        Commands::Validate {
            docs,
            topics,
            language,
        } => commands::validate::execute(docs, topics, language),
        Commands::Topics { docs, language } => commands::topics::execute(docs, language),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
