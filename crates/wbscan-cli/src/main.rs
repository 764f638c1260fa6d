mod chart;
mod export;
mod table;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use wbscan_core::ResultSet;
use wbscan_scraper::{PipelineClient, RetrievalRequest};

#[derive(Debug, Parser)]
#[command(name = "wbscan")]
#[command(about = "Collect and report marketplace product listings")]
struct Cli {
    /// Relay base URL (overrides WBSCAN_RELAY_URL).
    #[arg(long, global = true)]
    relay: Option<String>,

    /// Export the result set to CSV; a timestamped filename is generated
    /// when FILE is omitted.
    #[arg(long, global = true, value_name = "FILE", num_args = 0..=1)]
    export: Option<Option<PathBuf>>,

    /// Print a chart summary after the table.
    #[arg(long, global = true)]
    chart: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search the catalog by free-text query.
    Search { query: String },
    /// Pull one seller's full catalog.
    Seller { seller_id: String },
    /// Pull one brand's full catalog.
    Brand { brand_id: String },
    /// Look up a single product by article number (includes attributes).
    Item { article: i64 },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let mut config = wbscan_core::load_app_config_from_env()?;
    if let Some(relay) = cli.relay {
        config.relay_url = relay;
    }
    let client = PipelineClient::from_config(&config)?;

    let records: ResultSet = match cli.command {
        Commands::Search { query } => {
            let request = RetrievalRequest::search(query)?;
            client.retrieve(&request).await?
        }
        Commands::Seller { seller_id } => {
            let request = RetrievalRequest::mass(Some(seller_id), None)?;
            client.retrieve(&request).await?
        }
        Commands::Brand { brand_id } => {
            let request = RetrievalRequest::mass(None, Some(brand_id))?;
            client.retrieve(&request).await?
        }
        Commands::Item { article } => vec![client.retrieve_item(article).await?],
    };

    if records.is_empty() {
        println!("nothing found");
        return Ok(());
    }

    print!("{}", table::render(&records));

    if cli.chart {
        if let Some(spec) = chart::chart_for(&records) {
            println!();
            print!("{}", chart::render(&spec));
        }
    }

    if let Some(export) = cli.export {
        let path = export.unwrap_or_else(export::default_export_path);
        export::write_csv_file(&records, &path)?;
        println!("exported {} records to {}", records.len(), path.display());
    }

    Ok(())
}
