//! docent CLI entry point

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use docent::{
    error::Result,
    excerpt::{self, Category},
    guides::{default_guides_dir, GuideStore},
    mcp::McpServer,
};
use std::path::PathBuf;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "docent")]
#[command(version, about = "Curated MCP development documentation, served over MCP", long_about = None)]
struct Cli {
    /// Directory containing the guide documents
    #[arg(long, global = true, value_name = "DIR")]
    guides_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start MCP server on stdio
    Serve,

    /// Print a documentation report to stdout
    Show {
        /// Documentation category to print
        #[arg(value_enum)]
        category: Category,

        /// Filter the report to sections matching a query
        #[arg(short, long)]
        query: Option<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stdout carries protocol frames and reports, so
    // diagnostics go to stderr
    let filter = if cli.verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let guides_dir = cli.guides_dir.unwrap_or_else(default_guides_dir);

    match cli.command {
        Commands::Serve => {
            let store = GuideStore::new(guides_dir);
            let server = McpServer::new(store);
            server
                .run()
                .await
                .map_err(|e| docent::error::Error::McpProtocol(e.to_string()))?;
        }

        Commands::Show { category, query } => {
            let store = GuideStore::new(guides_dir);
            let library = store.library().await?;
            let report = excerpt::build_report(library, category, query.as_deref());
            println!("{}", report);
        }

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "docent", &mut std::io::stdout());
        }
    }

    Ok(())
}
