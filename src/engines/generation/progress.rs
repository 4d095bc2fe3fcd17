use super::evolution_engine::{GenerationStats, ProgressCallback};

/// Logs each generation through the `log` facade
pub struct ConsoleProgressCallback;

impl ProgressCallback for ConsoleProgressCallback {
    fn on_generation_start(&mut self, generation: usize) {
        log::debug!("Generation {} starting...", generation);
    }

    fn on_generation_complete(&mut self, stats: &GenerationStats) {
        log::info!(
            "Generation {} complete. Best fitness: {:.4}, mean fitness: {:.4}",
            stats.generation, stats.best_fitness, stats.mean_fitness
        );
    }
}
