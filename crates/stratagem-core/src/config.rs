use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::CoreResult;

/// Connection settings for the simulation service. Flattened into the
/// CLI so every flag can also come from a JSON config file; flags given
/// on the command line win.
#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the simulation service
    #[arg(global = true, long, default_value = "http://localhost:8000/api")]
    pub api_url: String,

    /// Request timeout in seconds
    #[arg(global = true, long, default_value_t = 30)]
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8000/api".to_string(),
            timeout_secs: 30,
        }
    }
}

impl ClientConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> CoreResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Overlay flags the user actually typed on top of file-loaded values;
    /// defaults never clobber the file.
    pub fn merge_from_cli(&mut self, cli: &ClientConfig, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli.$field.clone();
                }
            };
        }

        update_if_present!(api_url, "api_url");
        update_if_present!(timeout_secs, "timeout_secs");
    }
}
