use crate::core::derangement::MIN_PARTICIPANTS;
use crate::core::RosterProvider;
use crate::utils::error::{Result, SantaError};
use crate::utils::validation::{count_unique, validate_non_empty_string, validate_unique, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_GROUP_NAME: &str = "Secret Santa";

pub const BUILTIN_PARTICIPANTS: [&str; 12] = [
    "Eliddinn",
    "Paul",
    "Astoriacanada",
    "Mog",
    "sarah",
    "Mincherz",
    "Byfield",
    "Anna",
    "TheCarrotBandit",
    "JP",
    "Veeyno",
    "KrispyChew",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterConfig {
    pub group: GroupConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupConfig {
    pub name: Option<String>,
    pub participants: Vec<String>,
}

impl RosterConfig {
    /// The roster used when no file is given.
    pub fn builtin() -> Self {
        Self {
            group: GroupConfig {
                name: None,
                participants: BUILTIN_PARTICIPANTS.iter().map(|s| s.to_string()).collect(),
            },
        }
    }

    /// 從 TOML 檔案載入名單
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SantaError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| SantaError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(name) = &self.group.name {
            validate_non_empty_string("group.name", name)?;
        }

        let participants = &self.group.participants;
        let unique = count_unique(participants);
        if unique < MIN_PARTICIPANTS {
            return Err(SantaError::InvalidInput {
                unique,
                required: MIN_PARTICIPANTS,
            });
        }
        for participant in participants {
            validate_non_empty_string("group.participants", participant)?;
        }
        validate_unique("group.participants", participants)?;

        Ok(())
    }
}

impl RosterProvider for RosterConfig {
    fn group_name(&self) -> &str {
        self.group.name.as_deref().unwrap_or(DEFAULT_GROUP_NAME)
    }

    fn participants(&self) -> &[String] {
        &self.group.participants
    }
}

impl Validate for RosterConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
