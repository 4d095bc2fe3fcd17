use crate::engines::generation::genome::{Chromosome, EncodedVector, Rule};
use crate::engines::generation::population::{Individual, Population};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Outcome counts of one rule over a labelled dataset.
///
/// "Positive" means the instance label equals the label the rule predicts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    pub true_positives: usize,
    pub false_positives: usize,
    pub false_negatives: usize,
    pub true_negatives: usize,
}

impl ConfusionMatrix {
    pub fn tally(rule: &Rule, instances: &[EncodedVector]) -> Self {
        let target = rule.label();
        let mut matrix = Self::default();

        for instance in instances {
            let positive = instance.label() == target;
            match (rule.covers(instance), positive) {
                (true, true) => matrix.true_positives += 1,
                (true, false) => matrix.false_positives += 1,
                (false, true) => matrix.false_negatives += 1,
                (false, false) => matrix.true_negatives += 1,
            }
        }

        matrix
    }

    /// TP / (TP + FN), undefined without positive instances
    pub fn sensitivity(&self) -> Option<f64> {
        ratio(self.true_positives, self.true_positives + self.false_negatives)
    }

    /// TN / (TN + FP), undefined without negative instances
    pub fn specificity(&self) -> Option<f64> {
        ratio(self.true_negatives, self.true_negatives + self.false_positives)
    }

    /// Sensitivity times specificity; 0.0 when either is undefined
    pub fn fitness(&self) -> f64 {
        match (self.sensitivity(), self.specificity()) {
            (Some(sensitivity), Some(specificity)) => sensitivity * specificity,
            _ => 0.0,
        }
    }
}

fn ratio(numerator: usize, denominator: usize) -> Option<f64> {
    (denominator > 0).then(|| numerator as f64 / denominator as f64)
}

/// Scores rules against a fixed training set
pub struct FitnessEvaluator<'a> {
    training: &'a [EncodedVector],
}

impl<'a> FitnessEvaluator<'a> {
    pub fn new(training: &'a [EncodedVector]) -> Self {
        Self { training }
    }

    pub fn fitness(&self, rule: &Rule) -> f64 {
        ConfusionMatrix::tally(rule, self.training).fitness()
    }

    /// Score every genome in parallel and assemble the generation
    pub fn evaluate(&self, genomes: Vec<Chromosome>) -> Population {
        let individuals = genomes
            .into_par_iter()
            .map(|genome| {
                let fitness = self.fitness(&genome);
                Individual { genome, fitness }
            })
            .collect();

        Population::new(individuals)
    }
}
