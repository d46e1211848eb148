use clap::Parser;

pub mod global;

pub use global::{GlobalFlags, OutputFormat};

/// Top-level CLI parser for the `jirasum` binary.
///
/// The positionals are optional here so that a missing or unsupported
/// command is reported by the handler with the jirasum usage text rather
/// than by clap.
#[derive(Debug, Parser)]
#[command(
    name = "jirasum",
    version,
    about = "Fetch and summarize Jira issues through the summarizer backend"
)]
pub struct Cli {
    /// Tool to run: fetch_jira or fetch_and_summarize
    pub command: Option<String>,

    /// Jira issue key, e.g. PROJ-123
    pub issue_key: Option<String>,

    /// Output format: text, json, raw
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Quiet mode (errors only in logs)
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,

    /// Backend base URL for this call (overrides configuration)
    #[arg(long)]
    pub base_url: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for the handler.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            base_url: self.base_url.clone(),
        }
    }
}
