mod cli;
mod console;
mod settings;

use std::sync::Arc;

use anyhow::Result;
use homesearch_provider_api::{EntrySelection, Host, ProviderRegistry, ResultSink};
use homesearch_provider_factset::{FactSetProvider, PROVIDER_ID};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use console::{ConsoleSink, TerminalHost};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = cli::parse_cli();
    let resolved = settings::load(&cli)?;

    let host: Arc<dyn Host> = Arc::new(TerminalHost);
    let mut registry = ProviderRegistry::new(host);
    registry
        .register(FactSetProvider::new(resolved.factset.into_settings()))
        .await?;
    tracing::info!("host ready with {} provider(s)", registry.len());

    run_prompt(&registry).await?;

    let _ = registry.deregister(PROVIDER_ID).await;
    Ok(())
}

/// Read queries from stdin and feed them through the registry until EOF or
/// `:quit`.
async fn run_prompt(registry: &ProviderRegistry) -> Result<()> {
    let sink = Arc::new(ConsoleSink::default());
    let sink_dyn: Arc<dyn ResultSink> = sink.clone();

    println!("type a query (two words of three letters or more)");
    println!(":open N follows the n-th link of the last result, :quit exits");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == ":quit" {
            break;
        }
        if let Some(index) = line.strip_prefix(":open ") {
            dispatch_open(registry, &sink, index.trim()).await;
            continue;
        }

        for placeholder in registry.search_all(line, &sink_dyn) {
            println!("... {}", placeholder.title);
        }
    }

    Ok(())
}

/// Replay an `open{N}` action of the last published entry.
async fn dispatch_open(registry: &ProviderRegistry, sink: &ConsoleSink, index: &str) {
    let Some(entry) = sink.last_entry() else {
        println!("no result to open");
        return;
    };

    let selection = EntrySelection {
        provider_id: PROVIDER_ID.to_owned(),
        key: entry.key.clone(),
        action: format!("open{index}"),
        data: entry.data,
    };
    if !registry.dispatch_selection(&selection).await {
        println!("nothing to open");
    }
}
