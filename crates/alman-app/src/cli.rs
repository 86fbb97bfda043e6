use alman_config::Config;
use alman_config::lookup::Source;
use clap::Parser;

/// Look up a German word on Duden or DWDS
#[derive(Parser, Debug)]
#[command(name = "alman", version)]
pub struct Args {
    /// Word to search
    pub word: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Write debugging info
    #[arg(long)]
    pub debug: bool,

    /// Dictionary to query: duden or dwds
    #[arg(long)]
    pub source: Option<Source>,

    /// Give up on the lookup after this many seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,
}

impl Args {
    /// Command line flags take precedence over environment configuration
    pub fn apply(&self, config: &mut Config) {
        if let Some(source) = self.source {
            config.lookup.source = source;
        }
        if let Some(timeout) = self.timeout {
            config.lookup.timeout_seconds = timeout;
        }
    }
}
