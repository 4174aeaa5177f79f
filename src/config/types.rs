use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub counter: CounterConfig,
    #[serde(default)]
    pub todo: TodoConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Counter store settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CounterConfig {
    /// Starting value of the counter (default: 0).
    #[serde(default)]
    pub initial: i64,
}

/// Todo store settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TodoConfig {
    /// Texts preloaded into the list, in display order.
    #[serde(default)]
    pub seed: Vec<String>,
}

/// How rendered state is written to stdout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON document per line.
    Json,
}
