use crate::engines::generation::genome::{EncodedVector, Rule};
use serde::{Deserialize, Serialize};

/// How a rule fares on held-out data it covers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoverageReport {
    pub covered: usize,
    pub correct: usize,
    /// `correct / covered`; `None` when the rule covers no instance
    pub accuracy: Option<f64>,
}

impl CoverageReport {
    pub fn measure(rule: &Rule, instances: &[EncodedVector]) -> Self {
        let (covered, correct) = instances
            .iter()
            .filter(|instance| rule.covers(instance))
            .fold((0, 0), |(covered, correct), instance| {
                let hit = usize::from(instance.label() == rule.label());
                (covered + 1, correct + hit)
            });

        Self {
            covered,
            correct,
            accuracy: (covered > 0).then(|| correct as f64 / covered as f64),
        }
    }
}
