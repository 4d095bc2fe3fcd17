use crate::engines::evaluation::CoverageReport;
use crate::engines::generation::genome::{Condition, Rule};
use crate::engines::generation::population::Individual;
use crate::types::Indicator;
use serde::Serialize;
use std::fmt;

/// Final result of a run: the winning rule and how it holds up on test data
#[derive(Debug, Clone, Serialize)]
pub struct RuleReport {
    pub rule: String,
    pub fitness: f64,
    pub description: String,
    pub coverage: CoverageReport,
}

impl RuleReport {
    pub fn new(best: &Individual, coverage: CoverageReport) -> Self {
        Self {
            rule: best.genome.to_bit_string(),
            fitness: best.fitness,
            description: describe_rule(&best.genome),
            coverage,
        }
    }
}

/// Human-readable form of a rule, e.g.
/// `IF {SMA(SHORT) > SMA(LONG) = TRUE} {MOM > 0 = FALSE} THEN YES`.
///
/// Don't-care and never-matching pairs are left out.
pub fn describe_rule(rule: &Rule) -> String {
    let mut line = String::from("IF ");
    for (position, condition) in rule.conditions().into_iter().enumerate() {
        if let Condition::RequireValue(value) = condition {
            let name = Indicator::from_position(position)
                .map(|indicator| indicator.condition().to_string())
                .unwrap_or_else(|| format!("INDICATOR {}", position + 1));
            let value = if value { "TRUE" } else { "FALSE" };
            line.push_str(&format!("{{{} = {}}} ", name, value));
        }
    }
    line.push_str(if rule.label() { "THEN YES" } else { "THEN NO" });
    line
}

impl fmt::Display for RuleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Fitness: {:.4}", self.fitness)?;
        writeln!(f, "[{}]", self.rule)?;
        writeln!(f, "{}", self.description)?;
        writeln!(f, "Instances: {}", self.coverage.covered)?;
        match self.coverage.accuracy {
            Some(accuracy) => write!(f, "Accuracy: {:.4}", accuracy),
            None => write!(f, "Accuracy: undefined (no covered test instances)"),
        }
    }
}
