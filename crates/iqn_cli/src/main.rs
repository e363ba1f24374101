use clap::Parser;
use iqn_core::{KeywordFilter, Result, TagRules};
use iqn_sources::{default_sources, Aggregator};
use iqn_translate::{GoogleTranslator, Translator};
use iqn_web::AppState;
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Port for the HTTP endpoint
    #[arg(long, env = "PORT", default_value_t = 3000)]
    port: u16,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Serve the aggregated feed over HTTP
    Serve,
    /// Run the pipeline once and print the result as JSON
    Fetch {
        /// Skip title translation augmentation
        #[arg(long)]
        no_translate: bool,
        /// Apply consumer-side tag derivation before printing
        #[arg(long)]
        tagged: bool,
    },
    /// List the registered sources
    List,
}

fn build_aggregator(translate: bool) -> Result<Aggregator> {
    // The deep-fetch source always holds the translator handle; `translate`
    // only controls the title augmentation pass.
    let translator: Arc<dyn Translator> = Arc::new(GoogleTranslator::hebrew()?);
    let sources = default_sources(translator.clone());
    let aggregator = Aggregator::new(sources, KeywordFilter::default());
    Ok(if translate {
        aggregator.with_translator(translator)
    } else {
        aggregator
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve => {
            let aggregator = build_aggregator(true)?;
            info!(
                "🗞️ Serving {} sources on port {}",
                aggregator.source_names().len(),
                cli.port
            );
            iqn_web::serve(AppState { aggregator }, cli.port).await?;
        }
        Commands::Fetch {
            no_translate,
            tagged,
        } => {
            let aggregator = build_aggregator(!no_translate)?;
            let mut records = aggregator.collect().await?;
            info!("📰 Collected {} records", records.len());
            if tagged {
                let rules = TagRules::default();
                for record in &mut records {
                    let tags = rules.derive(record);
                    record.tags = tags;
                }
            }
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        Commands::List => {
            let aggregator = build_aggregator(false)?;
            println!("Registered sources:");
            for name in aggregator.source_names() {
                println!("  - {}", name);
            }
        }
    }

    Ok(())
}
