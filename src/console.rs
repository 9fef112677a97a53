use anyhow::Result;
use homesearch_provider_api::{HomeEntry, Host, ResultSink};
use parking_lot::Mutex;

/// Sink that renders published entries to the terminal.
///
/// Remembers the last published entry so selections can be replayed against
/// it from the prompt.
#[derive(Default)]
pub struct ConsoleSink {
    last_entry: Mutex<Option<HomeEntry>>,
}

impl ConsoleSink {
    /// The most recently published entry, if any.
    pub fn last_entry(&self) -> Option<HomeEntry> {
        self.last_entry.lock().clone()
    }
}

impl ResultSink for ConsoleSink {
    fn publish(&self, entries: Vec<HomeEntry>) {
        for entry in &entries {
            print_entry(entry);
        }
        if let Some(entry) = entries.into_iter().last() {
            *self.last_entry.lock() = Some(entry);
        }
    }

    fn revoke(&self, key: &str) {
        println!("(removed {key})");
    }
}

/// Host surface that reports opened URLs on the terminal instead of spawning
/// a browser.
pub struct TerminalHost;

impl Host for TerminalHost {
    fn open_url(&self, url: &str) -> Result<()> {
        println!("opening {url}");
        Ok(())
    }
}

fn print_entry(entry: &HomeEntry) {
    match &entry.label {
        Some(label) => println!("* {} ({label})", entry.title),
        None => println!("* {}", entry.title),
    }
    for (label, value) in &entry.data.fields {
        println!("    {label}: {value}");
    }
    for table in &entry.data.tables {
        println!("    {}", table.headers.join(" | "));
        for row in &table.rows {
            println!("    {}", row.join(" | "));
        }
    }
    for (index, link) in entry.data.links.iter().enumerate() {
        println!("    [open{index}] {} -> {}", link.label, link.url);
    }
}
