use crate::core::derangement::generate;
use crate::core::report::audit;
use crate::domain::model::DrawOutcome;
use crate::domain::ports::RosterProvider;
use crate::utils::error::{Result, SantaError};
use chrono::Utc;
use rand::Rng;

pub struct DrawEngine<P: RosterProvider> {
    roster: P,
}

impl<P: RosterProvider> DrawEngine<P> {
    pub fn new(roster: P) -> Self {
        Self { roster }
    }

    pub fn run(&self) -> Result<DrawOutcome> {
        self.run_with_rng(&mut rand::thread_rng())
    }

    pub fn run_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<DrawOutcome> {
        let group = self.roster.group_name();
        let participants = self.roster.participants();
        tracing::info!("🎁 Drawing '{}' with {} participants", group, participants.len());

        let pairs = generate(participants, rng)?;
        let audit = audit(participants, &pairs);
        tracing::debug!("Draw audit: {:?}", audit);

        if !audit.is_clean() {
            tracing::error!("❌ Draw for '{}' failed its audit: {:?}", group, audit);
            return Err(SantaError::RepairExhausted {
                index: participants.len(),
                size: participants.len(),
            });
        }

        tracing::info!("✅ Drew {} pairs", audit.pair_count);
        Ok(DrawOutcome {
            group: group.to_string(),
            pairs,
            audit,
            drawn_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::StaticRoster;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_run_produces_clean_outcome() {
        let engine = DrawEngine::new(StaticRoster::new("Family", ["Ann", "Bob", "Cid", "Dee"]));
        let mut rng = StdRng::seed_from_u64(11);

        let outcome = engine.run_with_rng(&mut rng).unwrap();
        assert_eq!(outcome.group, "Family");
        assert_eq!(outcome.pairs.len(), 4);
        assert!(outcome.audit.is_clean());

        let givers: Vec<&str> = outcome.pairs.iter().map(|p| p.giver.as_str()).collect();
        assert_eq!(givers, vec!["Ann", "Bob", "Cid", "Dee"]);
    }

    #[test]
    fn test_run_rejects_tiny_roster() {
        let engine = DrawEngine::new(StaticRoster::new("Alone", ["Ann"]));
        assert!(matches!(
            engine.run(),
            Err(SantaError::InvalidInput { unique: 1, .. })
        ));
    }
}
