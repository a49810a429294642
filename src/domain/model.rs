use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pair {
    pub giver: String,
    pub receiver: String,
}

impl Pair {
    pub fn new(giver: impl Into<String>, receiver: impl Into<String>) -> Self {
        Self {
            giver: giver.into(),
            receiver: receiver.into(),
        }
    }

    pub fn is_self_assignment(&self) -> bool {
        self.giver == self.receiver
    }
}

/// A permutation of participant indices: giver `i` gifts to `receivers()[i]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment(Vec<usize>);

impl Assignment {
    pub fn identity(n: usize) -> Self {
        Self((0..n).collect())
    }

    pub fn receivers(&self) -> &[usize] {
        &self.0
    }

    pub(crate) fn receivers_mut(&mut self) -> &mut [usize] {
        &mut self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_fixed(&self, index: usize) -> bool {
        self.0[index] == index
    }

    pub fn fixed_points(&self) -> Vec<usize> {
        (0..self.0.len()).filter(|&i| self.is_fixed(i)).collect()
    }

    pub fn is_permutation(&self) -> bool {
        let mut seen = vec![false; self.0.len()];
        for &target in &self.0 {
            match seen.get_mut(target) {
                Some(slot) if !*slot => *slot = true,
                _ => return false,
            }
        }
        true
    }

    pub fn is_derangement(&self) -> bool {
        self.is_permutation() && self.fixed_points().is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawAudit {
    pub gives_once: bool,
    pub receives_once: bool,
    pub no_self_assignments: bool,
    pub pair_count: usize,
}

impl DrawAudit {
    pub fn is_clean(&self) -> bool {
        self.gives_once && self.receives_once && self.no_self_assignments
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawOutcome {
    pub group: String,
    pub pairs: Vec<Pair>,
    pub audit: DrawAudit,
    pub drawn_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_is_all_fixed_points() {
        let assignment = Assignment::identity(4);
        assert_eq!(assignment.fixed_points(), vec![0, 1, 2, 3]);
        assert!(assignment.is_permutation());
        assert!(!assignment.is_derangement());
    }

    #[test]
    fn test_derangement_checks() {
        assert!(Assignment(vec![1, 2, 0]).is_derangement());
        assert!(!Assignment(vec![1, 0, 2]).is_derangement());
        // not a permutation: index 0 received twice
        assert!(!Assignment(vec![1, 0, 0]).is_derangement());
        assert!(!Assignment(vec![3, 0, 1]).is_permutation());
    }

    #[test]
    fn test_audit_is_clean() {
        let audit = DrawAudit {
            gives_once: true,
            receives_once: true,
            no_self_assignments: false,
            pair_count: 3,
        };
        assert!(!audit.is_clean());
    }
}
