use super::traits::{check_probability, ConfigSection};
use crate::error::TraderulesError;
use crate::types::DEFAULT_CHROMOSOME_LENGTH;
use serde::{Deserialize, Serialize};

/// Parameters of the generational rule-induction loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    /// Number of rules alive in every generation.
    pub population_size: usize,
    /// Bits per rule: two per indicator plus the predicted label.
    pub chromosome_length: usize,
    /// Number of full generational replacements.
    pub max_generations: usize,
    /// Chance that an offspring slot is filled by mutating one parent
    /// instead of crossing two.
    pub mutation_probability: f64,
    /// Kept for parity with the mutation rate; the offspring path is decided
    /// by `mutation_probability` alone and this value is never drawn against.
    pub crossover_probability: f64,
    /// Distinct individuals sampled per tournament.
    pub tournament_size: usize,
    /// Fixed seed for reproducible runs; entropy when absent.
    pub seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            chromosome_length: DEFAULT_CHROMOSOME_LENGTH,
            max_generations: 10,
            mutation_probability: 0.2,
            crossover_probability: 0.8,
            tournament_size: 7,
            seed: None,
        }
    }
}

impl EvolutionConfig {
    /// Number of indicator bit pairs in a chromosome
    pub fn segment_count(&self) -> usize {
        self.chromosome_length / 2
    }
}

impl ConfigSection for EvolutionConfig {
    fn section_name() -> &'static str {
        "evolution"
    }

    fn validate(&self) -> Result<(), TraderulesError> {
        if self.tournament_size == 0 {
            return Err(TraderulesError::Configuration(
                "Tournament size must be at least 1".to_string()
            ));
        }
        if self.population_size < self.tournament_size {
            return Err(TraderulesError::Configuration(format!(
                "Population size ({}) must be at least the tournament size ({})",
                self.population_size, self.tournament_size
            )));
        }
        if self.chromosome_length < 3 || self.chromosome_length % 2 == 0 {
            return Err(TraderulesError::Configuration(format!(
                "Chromosome length must be an odd number >= 3 (bit pairs plus a label bit), got {}",
                self.chromosome_length
            )));
        }
        check_probability("Mutation probability", self.mutation_probability)?;
        check_probability("Crossover probability", self.crossover_probability)?;
        Ok(())
    }
}
