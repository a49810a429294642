pub mod derangement;
pub mod draw;
pub mod report;

pub use crate::domain::model::{Assignment, DrawAudit, DrawOutcome, Pair};
pub use crate::domain::ports::{RosterProvider, StaticRoster};
pub use crate::utils::error::Result;
