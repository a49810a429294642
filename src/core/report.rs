use crate::domain::model::{DrawAudit, DrawOutcome, Pair};
use crate::utils::error::Result;
use std::collections::HashMap;
use std::fmt::Write;

pub const HEADER: &str = "Secret Santa Pairs:";

/// Checks a set of pairs against the roster it was drawn from.
pub fn audit(participants: &[String], pairs: &[Pair]) -> DrawAudit {
    DrawAudit {
        gives_once: same_multiset(participants, pairs.iter().map(|p| p.giver.as_str())),
        receives_once: same_multiset(participants, pairs.iter().map(|p| p.receiver.as_str())),
        no_self_assignments: pairs.iter().all(|p| !p.is_self_assignment()),
        pair_count: pairs.len(),
    }
}

fn same_multiset<'a>(participants: &[String], names: impl Iterator<Item = &'a str>) -> bool {
    let mut counts: HashMap<&str, i64> = HashMap::new();
    for participant in participants {
        *counts.entry(participant.as_str()).or_default() += 1;
    }
    for name in names {
        *counts.entry(name).or_default() -= 1;
    }
    counts.values().all(|&count| count == 0)
}

fn mark(ok: bool) -> &'static str {
    if ok {
        "✓"
    } else {
        "✗"
    }
}

pub fn render_text(outcome: &DrawOutcome) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "{}", HEADER);
    for pair in &outcome.pairs {
        let _ = writeln!(out, "{} → {}", pair.giver, pair.receiver);
    }

    let audit = &outcome.audit;
    let _ = writeln!(out);
    let _ = writeln!(out, "Validation:");
    let _ = writeln!(out, "{} All participants give exactly once", mark(audit.gives_once));
    let _ = writeln!(
        out,
        "{} All participants receive exactly once",
        mark(audit.receives_once)
    );
    let _ = writeln!(out, "{} Zero self-assignments", mark(audit.no_self_assignments));
    let _ = writeln!(out, "Total pairs: {}", audit.pair_count);
    out
}

pub fn render_json(outcome: &DrawOutcome) -> Result<String> {
    Ok(serde_json::to_string_pretty(outcome)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn names(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    fn outcome(pairs: Vec<Pair>, audit: DrawAudit) -> DrawOutcome {
        DrawOutcome {
            group: "Test".to_string(),
            pairs,
            audit,
            drawn_at: Utc::now(),
        }
    }

    #[test]
    fn test_audit_clean_draw() {
        let participants = names(&["A", "B", "C"]);
        let pairs = vec![Pair::new("A", "B"), Pair::new("B", "C"), Pair::new("C", "A")];
        let audit = audit(&participants, &pairs);
        assert!(audit.is_clean());
        assert_eq!(audit.pair_count, 3);
    }

    #[test]
    fn test_audit_flags_each_violation() {
        let participants = names(&["A", "B", "C"]);

        let self_pair = vec![Pair::new("A", "A"), Pair::new("B", "C"), Pair::new("C", "B")];
        let result = audit(&participants, &self_pair);
        assert!(result.gives_once && result.receives_once);
        assert!(!result.no_self_assignments);

        let double_receiver = vec![Pair::new("A", "B"), Pair::new("B", "A"), Pair::new("C", "A")];
        let result = audit(&participants, &double_receiver);
        assert!(result.gives_once);
        assert!(!result.receives_once);

        let missing_giver = vec![Pair::new("A", "B"), Pair::new("B", "A")];
        let result = audit(&participants, &missing_giver);
        assert!(!result.gives_once);
        assert_eq!(result.pair_count, 2);
    }

    #[test]
    fn test_render_text_layout() {
        let pairs = vec![Pair::new("A", "B"), Pair::new("B", "A")];
        let audit = audit(&names(&["A", "B"]), &pairs);
        let text = render_text(&outcome(pairs, audit));

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Secret Santa Pairs:");
        assert_eq!(lines[1], "A → B");
        assert_eq!(lines[2], "B → A");
        assert!(text.contains("✓ All participants give exactly once"));
        assert!(text.contains("✓ All participants receive exactly once"));
        assert!(text.contains("✓ Zero self-assignments"));
        assert!(text.ends_with("Total pairs: 2\n"));
    }

    #[test]
    fn test_render_text_marks_failures() {
        let pairs = vec![Pair::new("A", "A"), Pair::new("B", "B")];
        let audit = audit(&names(&["A", "B"]), &pairs);
        let text = render_text(&outcome(pairs, audit));
        assert!(text.contains("✗ Zero self-assignments"));
    }

    #[test]
    fn test_render_json() {
        let pairs = vec![Pair::new("A", "B"), Pair::new("B", "A")];
        let audit = audit(&names(&["A", "B"]), &pairs);
        let json = render_json(&outcome(pairs, audit)).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["group"], "Test");
        assert_eq!(value["pairs"][0]["giver"], "A");
        assert_eq!(value["pairs"][0]["receiver"], "B");
        assert_eq!(value["audit"]["pair_count"], 2);
        assert!(value["drawn_at"].is_string());
    }
}
