use clap::ValueEnum;

/// Output mode for the extracted fields.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// `Label: value` lines.
    #[default]
    Text,
    /// Pretty JSON object keyed by response field.
    Json,
    /// Single-line JSON object.
    Raw,
}

/// Global flags shared by the handler.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub quiet: bool,
    pub verbose: bool,
    pub base_url: Option<String>,
}
