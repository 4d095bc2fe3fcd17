use crate::config::{ConfigSection, EvolutionConfig};
use crate::engines::evaluation::{CoverageReport, FitnessEvaluator};
use crate::engines::generation::{
    encoding::encode_all,
    genome::Chromosome,
    operators::{crossover, mutate, random_genome, tournament_selection},
    population::Population,
    splitters::{DataSplit, DataSplitter, SimpleSplitter},
};
use crate::engines::reporting::RuleReport;
use crate::error::TraderulesError;
use crate::types::RawFeatureVector;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Fitness summary of one evaluated generation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationStats {
    pub generation: usize,
    pub best_fitness: f64,
    pub mean_fitness: f64,
}

impl GenerationStats {
    fn from_population(generation: usize, population: &Population) -> Self {
        Self {
            generation,
            best_fitness: population.best().map(|(_, ind)| ind.fitness).unwrap_or(0.0),
            mean_fitness: population.mean_fitness(),
        }
    }
}

/// Everything a finished run hands to the reporter
#[derive(Debug, Clone, Serialize)]
pub struct EvolutionOutcome {
    pub report: RuleReport,
    pub best_index: usize,
    /// Generation 0 is the random initial population
    pub history: Vec<GenerationStats>,
    pub training_size: usize,
    pub testing_size: usize,
}

pub trait ProgressCallback: Send {
    fn on_generation_start(&mut self, generation: usize);
    fn on_generation_complete(&mut self, stats: &GenerationStats);
}

pub struct EvolutionEngine<R: Rng = StdRng> {
    config: EvolutionConfig,
    splitter: Box<dyn DataSplitter>,
    rng: R,
}

impl EvolutionEngine<StdRng> {
    pub fn new(config: EvolutionConfig, splitter: Box<dyn DataSplitter>) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, splitter, rng)
    }

    /// Engine with the default 70/30 sequential split
    pub fn with_default_split(config: EvolutionConfig) -> Self {
        Self::new(config, Box::new(SimpleSplitter::default()))
    }
}

impl<R: Rng> EvolutionEngine<R> {
    pub fn with_rng(config: EvolutionConfig, splitter: Box<dyn DataSplitter>, rng: R) -> Self {
        Self {
            config,
            splitter,
            rng,
        }
    }

    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }

    /// Encode, split, and evolve rules over the given feature vectors
    pub fn run<C: ProgressCallback>(
        &mut self,
        features: &[RawFeatureVector],
        callback: C,
    ) -> Result<EvolutionOutcome, TraderulesError> {
        self.config.validate()?;
        let encoded = encode_all(features);
        let split = self.splitter.split(&encoded)?;
        log::info!(
            "Split {} instances at fraction {}: {} training, {} testing",
            encoded.len(),
            self.splitter.config().training_fraction,
            split.training.len(),
            split.testing.len()
        );
        self.run_on_split(&split, callback)
    }

    /// Evolve rules over an already encoded and split dataset
    pub fn run_on_split<C: ProgressCallback>(
        &mut self,
        split: &DataSplit,
        mut callback: C,
    ) -> Result<EvolutionOutcome, TraderulesError> {
        self.config.validate()?;
        self.validate_split(split)?;
        self.check_crossover_probability();

        let evaluator = FitnessEvaluator::new(&split.training);

        // Initial population
        callback.on_generation_start(0);
        let mut population = evaluator.evaluate(self.initialize_population());
        let mut history = Vec::with_capacity(self.config.max_generations + 1);
        self.record(0, &population, &mut history, &mut callback);

        // Evolution loop
        for generation in 1..=self.config.max_generations {
            callback.on_generation_start(generation);
            let offspring = self.create_next_generation(&population);
            population = evaluator.evaluate(offspring);
            self.record(generation, &population, &mut history, &mut callback);
        }

        let (best_index, best) = population.best().ok_or_else(|| {
            TraderulesError::Validation("Population is empty after evolution".to_string())
        })?;
        let coverage = CoverageReport::measure(&best.genome, &split.testing);
        log::info!(
            "Best rule {} (index {}) fitness {:.4}, covers {} of {} test instances",
            best.genome,
            best_index,
            best.fitness,
            coverage.covered,
            split.testing.len()
        );

        Ok(EvolutionOutcome {
            report: RuleReport::new(best, coverage),
            best_index,
            history,
            training_size: split.training.len(),
            testing_size: split.testing.len(),
        })
    }

    fn record<C: ProgressCallback>(
        &self,
        generation: usize,
        population: &Population,
        history: &mut Vec<GenerationStats>,
        callback: &mut C,
    ) {
        let stats = GenerationStats::from_population(generation, population);
        log::debug!(
            "Generation {}: best {:.4}, mean {:.4}",
            generation,
            stats.best_fitness,
            stats.mean_fitness
        );
        callback.on_generation_complete(&stats);
        history.push(stats);
    }

    fn validate_split(&self, split: &DataSplit) -> Result<(), TraderulesError> {
        if split.training.is_empty() || split.testing.is_empty() {
            return Err(TraderulesError::Validation(format!(
                "Training ({}) and testing ({}) sets must both be non-empty",
                split.training.len(),
                split.testing.len()
            )));
        }
        let expected = self.config.chromosome_length;
        let mismatched = split
            .training
            .iter()
            .chain(&split.testing)
            .find(|instance| instance.len() != expected);
        if let Some(instance) = mismatched {
            return Err(TraderulesError::Validation(format!(
                "Encoded instance has {} bits, chromosome length is {}",
                instance.len(),
                expected
            )));
        }
        Ok(())
    }

    // Offspring path is chosen by the mutation draw alone; crossover_probability is not drawn against
    fn check_crossover_probability(&self) {
        let total = self.config.mutation_probability + self.config.crossover_probability;
        if (total - 1.0).abs() > 1e-9 {
            log::warn!(
                "crossover_probability {} is not consulted; crossover happens with probability {} (1 - mutation_probability)",
                self.config.crossover_probability,
                1.0 - self.config.mutation_probability
            );
        }
    }

    fn initialize_population(&mut self) -> Vec<Chromosome> {
        (0..self.config.population_size)
            .map(|_| random_genome(self.config.chromosome_length, &mut self.rng))
            .collect()
    }

    /// Breed a full replacement generation; no individual carries over
    fn create_next_generation(&mut self, population: &Population) -> Vec<Chromosome> {
        let size = self.config.population_size;
        let fitness = population.fitness_values();
        let mut next_generation = Vec::with_capacity(size);

        while next_generation.len() < size {
            let draw: f64 = self.rng.gen();
            let last_slot = size - next_generation.len() == 1;

            if draw <= self.config.mutation_probability || last_slot {
                let parent = tournament_selection(&fitness, self.config.tournament_size, &mut self.rng);
                let genome = &population.individuals()[parent].genome;
                next_generation.push(mutate(genome, &mut self.rng));
            } else {
                let p1 = tournament_selection(&fitness, self.config.tournament_size, &mut self.rng);
                let p2 = tournament_selection(&fitness, self.config.tournament_size, &mut self.rng);

                let individuals = population.individuals();
                let (child1, child2) =
                    crossover(&individuals[p1].genome, &individuals[p2].genome, &mut self.rng);

                next_generation.push(child1);
                next_generation.push(child2);
            }
        }

        next_generation
    }
}
