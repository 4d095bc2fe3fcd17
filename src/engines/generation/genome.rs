use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed-length bit string used both for encoded data instances and for rules
///
/// Layout: one bit pair per indicator, followed by a single label bit.
///
/// # Data instances
///
/// Every pair is one-hot: `(1, 0)` when the indicator flag is set,
/// `(0, 1)` when it is clear. The label bit is the observed price direction.
///
/// # Rules
///
/// Pairs may take any of the four combinations, read as a [`Condition`]:
/// - `(1, 0)` / `(0, 1)`: the instance must have the flag set / clear
/// - `(1, 1)`: don't care, any instance value matches
/// - `(0, 0)`: never matches, so the rule covers nothing
///
/// The label bit is the direction the rule predicts. The raw bits stay the
/// canonical representation so mutation and crossover can work on them directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Chromosome {
    bits: Vec<bool>,
}

/// A chromosome read as a candidate rule
pub type Rule = Chromosome;

/// A chromosome holding one one-hot encoded trading day
pub type EncodedVector = Chromosome;

/// Per-indicator constraint derived from a rule's bit pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    RequireValue(bool),
    DontCare,
    NeverMatches,
}

impl Condition {
    pub fn from_pair(first: bool, second: bool) -> Self {
        match (first, second) {
            (true, true) => Self::DontCare,
            (false, false) => Self::NeverMatches,
            (value, _) => Self::RequireValue(value),
        }
    }
}

impl Chromosome {
    pub fn new(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Build from 0/1 integers; any non-zero value counts as a set bit
    pub fn from_bits(bits: &[u8]) -> Self {
        Self {
            bits: bits.iter().map(|&b| b != 0).collect(),
        }
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).copied()
    }

    /// Complement one bit; out-of-range positions are ignored
    pub fn flip(&mut self, index: usize) {
        if let Some(bit) = self.bits.get_mut(index) {
            *bit = !*bit;
        }
    }

    pub fn count_ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Label bit: the observed direction for data, the prediction for rules
    pub fn label(&self) -> bool {
        self.bits.last().copied().unwrap_or(false)
    }

    /// Indicator bit pairs, excluding the label bit
    pub fn segments(&self) -> impl Iterator<Item = (bool, bool)> + '_ {
        let body = self.bits.len().saturating_sub(1);
        self.bits[..body].chunks_exact(2).map(|pair| (pair[0], pair[1]))
    }

    pub fn conditions(&self) -> Vec<Condition> {
        self.segments()
            .map(|(first, second)| Condition::from_pair(first, second))
            .collect()
    }

    /// Whether this rule's conditions hold for `instance`; labels are ignored.
    ///
    /// A segment is satisfied when the rule sets both bits, or when some
    /// position is set in both the rule and the instance.
    pub fn covers(&self, instance: &EncodedVector) -> bool {
        self.segments()
            .zip(instance.segments())
            .all(|((r0, r1), (i0, i1))| (r0 && r1) || (r0 && i0) || (r1 && i1))
    }

    pub fn to_bit_string(&self) -> String {
        self.bits.iter().map(|&b| if b { '1' } else { '0' }).collect()
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.to_bit_string())
    }
}

impl std::ops::Index<usize> for Chromosome {
    type Output = bool;

    fn index(&self, index: usize) -> &bool {
        &self.bits[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(bits: &[u8]) -> Chromosome {
        Chromosome::from_bits(bits)
    }

    #[test]
    fn test_conditions() {
        let r = rule(&[1, 0, 0, 1, 1, 1, 0, 0, 1]);
        assert_eq!(
            r.conditions(),
            vec![
                Condition::RequireValue(true),
                Condition::RequireValue(false),
                Condition::DontCare,
                Condition::NeverMatches,
            ]
        );
        assert!(r.label());
    }

    #[test]
    fn test_require_value_matches_only_that_value() {
        let r = rule(&[1, 0, 1, 1, 1, 1, 0]);
        assert!(r.covers(&rule(&[1, 0, 0, 1, 1, 0, 1])));
        assert!(!r.covers(&rule(&[0, 1, 0, 1, 1, 0, 1])));

        let r = rule(&[0, 1, 1, 1, 1, 1, 0]);
        assert!(r.covers(&rule(&[0, 1, 1, 0, 0, 1, 0])));
        assert!(!r.covers(&rule(&[1, 0, 1, 0, 0, 1, 0])));
    }

    #[test]
    fn test_dont_care_and_never_matches() {
        let instance = rule(&[1, 0, 0, 1, 1, 0, 0]);
        assert!(rule(&[1, 1, 1, 1, 1, 1, 1]).covers(&instance));
        assert!(!rule(&[1, 1, 0, 0, 1, 1, 1]).covers(&instance));
    }

    #[test]
    fn test_label_ignored_by_covers() {
        let r = rule(&[1, 0, 1]);
        assert!(r.covers(&rule(&[1, 0, 0])));
        assert!(r.covers(&rule(&[1, 0, 1])));
    }

    #[test]
    fn test_flip_and_display() {
        let mut r = rule(&[1, 0, 1]);
        r.flip(1);
        r.flip(10);
        assert_eq!(r.to_string(), "[111]");
        assert_eq!(r.count_ones(), 3);
    }
}
