mod collect;
mod output;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use storerev_core::StoreKind;

#[derive(Debug, Parser)]
#[command(name = "storerev")]
#[command(about = "Collect storefront reviews and app metadata to local files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run the collection pipeline for one app.
    Collect(CollectArgs),
}

#[derive(Debug, Args)]
struct CollectArgs {
    /// Store identifier: numeric track id (App Store) or package name
    /// (Google Play).
    #[arg(long)]
    app_id: String,

    /// Canonical storefront slug, e.g. `one-pass`.
    #[arg(long)]
    slug: String,

    #[arg(long, value_enum, default_value_t = StoreArg::AppStore)]
    store: StoreArg,

    /// Which strategy family to run.
    #[arg(long, value_enum, default_value_t = FamilyArg::Api)]
    family: FamilyArg,

    /// Storefront country code; overrides STOREREV_COUNTRY.
    #[arg(long)]
    country: Option<String>,

    /// Output directory; overrides STOREREV_OUTPUT_DIR.
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StoreArg {
    AppStore,
    GooglePlay,
}

impl From<StoreArg> for StoreKind {
    fn from(value: StoreArg) -> Self {
        match value {
            StoreArg::AppStore => StoreKind::AppleAppStore,
            StoreArg::GooglePlay => StoreKind::GooglePlay,
        }
    }
}

/// The three entry points of the collector, mirroring how much machinery
/// each is willing to bring to bear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FamilyArg {
    /// Storefront API, then the public feed.
    Api,
    /// Interactive browser session.
    Browser,
    /// Static page placeholder only.
    Static,
}

impl FamilyArg {
    /// Token used in output file names.
    fn file_slug(self) -> &'static str {
        match self {
            FamilyArg::Api => "api",
            FamilyArg::Browser => "browser",
            FamilyArg::Static => "static",
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Collect(args) => collect::run_collect(args).await,
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
