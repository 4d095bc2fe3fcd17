use crate::engines::generation::genome::Chromosome;
use serde::{Deserialize, Serialize};

/// A rule together with its training-set fitness
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Individual {
    pub genome: Chromosome,
    pub fitness: f64,
}

/// One generation of scored rules.
///
/// Only built from freshly evaluated individuals, so fitness is never stale.
#[derive(Debug, Clone, Default)]
pub struct Population {
    individuals: Vec<Individual>,
}

impl Population {
    pub fn new(individuals: Vec<Individual>) -> Self {
        Self { individuals }
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    pub fn get(&self, index: usize) -> Option<&Individual> {
        self.individuals.get(index)
    }

    /// Fitness values in population order, for index-based selection
    pub fn fitness_values(&self) -> Vec<f64> {
        self.individuals.iter().map(|ind| ind.fitness).collect()
    }

    /// Fittest individual and its index; the first one wins ties
    pub fn best(&self) -> Option<(usize, &Individual)> {
        let mut best: Option<(usize, &Individual)> = None;
        for (idx, individual) in self.individuals.iter().enumerate() {
            match best {
                Some((_, leader)) if leader.fitness >= individual.fitness => {}
                _ => best = Some((idx, individual)),
            }
        }
        best
    }

    pub fn mean_fitness(&self) -> f64 {
        if self.individuals.is_empty() {
            return 0.0;
        }
        self.individuals.iter().map(|ind| ind.fitness).sum::<f64>() / self.individuals.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn individual(fitness: f64) -> Individual {
        Individual {
            genome: Chromosome::from_bits(&[1, 0, 1]),
            fitness,
        }
    }

    #[test]
    fn test_best_first_seen_on_ties() {
        let population = Population::new(vec![
            individual(0.2),
            individual(0.7),
            individual(0.7),
            individual(0.1),
        ]);
        let (idx, best) = population.best().unwrap();
        assert_eq!(idx, 1);
        assert_eq!(best.fitness, 0.7);
    }

    #[test]
    fn test_all_zero_fitness_picks_first() {
        let population = Population::new(vec![individual(0.0), individual(0.0)]);
        assert_eq!(population.best().unwrap().0, 0);
        assert_eq!(population.mean_fitness(), 0.0);
    }

    #[test]
    fn test_fitness_projection() {
        let population = Population::new(vec![individual(0.25), individual(0.75)]);
        assert_eq!(population.fitness_values(), vec![0.25, 0.75]);
        assert_eq!(population.mean_fitness(), 0.5);
        assert!(Population::default().best().is_none());
    }
}
