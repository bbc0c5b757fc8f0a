use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use xsweb::di::ServiceContainer;
use xsweb::pages;
use xsweb::XswebResult;

#[derive(Parser)]
#[command(name = "xsweb")]
#[command(about = "Page renderer for the XS-Labs project website")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a page fragment
    Render {
        /// Page name (see `xsweb pages`)
        page: String,
        /// Write the fragment to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List renderable pages
    Pages,
}

async fn render(page: String, output: Option<PathBuf>) -> XswebResult<()> {
    let container = ServiceContainer::new()?;
    let fragment = pages::render_page(&container, &page).await?;

    match output {
        Some(path) => {
            std::fs::write(&path, fragment)?;
            tracing::info!(page = %page, path = %path.display(), "page rendered");
        }
        None => print!("{}", fragment),
    }

    Ok(())
}

fn list_pages() -> XswebResult<()> {
    for name in pages::PAGE_NAMES {
        println!("{}", name);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render { page, output } => render(page, output).await,
        Commands::Pages => list_pages(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\nError: {}", e);
            ExitCode::FAILURE
        }
    }
}
