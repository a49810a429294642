pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{toml_config::RosterConfig, OutputFormat};
pub use crate::core::derangement::{derange, generate, generate_with_thread_rng};
pub use crate::core::draw::DrawEngine;
pub use crate::core::{DrawOutcome, Pair, RosterProvider, StaticRoster};
pub use crate::utils::error::{Result, SantaError};
