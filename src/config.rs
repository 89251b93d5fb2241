use crate::error::{WfResult, WordForgeError};
use crate::generator::runner::{DEFAULT_DECOY_DRAWS, DEFAULT_GRID_SIZE, DEFAULT_MAX_ATTEMPTS};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Side length of the square grid
    #[arg(short = 's', long, default_value_t = DEFAULT_GRID_SIZE)]
    pub grid_size: usize,

    /// Also place words reversed (covers left, up and the other diagonals)
    #[arg(short = 'b', long, default_value_t = false)]
    pub allow_backwards: bool,

    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: usize,

    #[arg(long, default_value_t = DEFAULT_DECOY_DRAWS)]
    pub decoy_draws: usize,

    /// Stop retrying once this many milliseconds have passed
    #[arg(long)]
    pub max_time_ms: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            allow_backwards: false,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            decoy_draws: DEFAULT_DECOY_DRAWS,
            max_time_ms: None,
        }
    }
}

impl GeneratorConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> WfResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: GeneratorConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Copies only the values the user actually typed on the command line.
    pub fn merge_from_cli(&mut self, cli: &GeneratorConfig, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli.$field.clone();
                }
            };
        }

        update_if_present!(grid_size, "grid_size");
        update_if_present!(allow_backwards, "allow_backwards");
        update_if_present!(max_attempts, "max_attempts");
        update_if_present!(decoy_draws, "decoy_draws");
        update_if_present!(max_time_ms, "max_time_ms");
    }

    pub fn validate(&self) -> WfResult<()> {
        if self.grid_size == 0 {
            return Err(WordForgeError::Config(
                "grid_size must be greater than zero".to_string(),
            ));
        }
        if self.max_attempts == 0 {
            return Err(WordForgeError::Config(
                "max_attempts must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
