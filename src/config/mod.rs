pub mod toml_config;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use toml_config::RosterConfig;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "secret-santa")]
#[command(about = "Draw Secret Santa pairs so nobody gifts to themselves")]
pub struct CliConfig {
    /// TOML roster file; the built-in roster is used when omitted
    #[arg(short, long)]
    pub roster: Option<String>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Reads the roster file named on the command line, or falls back to the built-in roster.
    pub fn load_roster(&self) -> Result<RosterConfig> {
        match &self.roster {
            Some(path) => {
                tracing::debug!("Loading roster from {}", path);
                RosterConfig::from_file(path)
            }
            None => Ok(RosterConfig::builtin()),
        }
    }
}
