use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments accepted by the `homesearch` binary.
#[derive(Parser, Debug)]
#[command(
    name = "homesearch",
    version,
    about = "Terminal host for home search provider integrations"
)]
pub struct CliArgs {
    /// Additional configuration file to load after the default locations.
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "HOMESEARCH_CONFIG"
    )]
    pub config: Vec<PathBuf>,

    /// Skip the default configuration file locations.
    #[arg(long)]
    pub no_config: bool,

    /// Override the FactSet proxy endpoint.
    #[arg(long, value_name = "URL", env = "HOMESEARCH_FACTSET_PROXY")]
    pub proxy_endpoint: Option<String>,
}

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub fn parse_cli() -> CliArgs {
    CliArgs::parse()
}
