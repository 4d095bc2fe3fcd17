pub mod encoding;
pub mod evolution_engine;
pub mod genome;
pub mod operators;
pub mod population;
pub mod progress;
pub mod splitters;

pub use encoding::{decode, encode, encode_all};
pub use evolution_engine::{EvolutionEngine, EvolutionOutcome, GenerationStats, ProgressCallback};
pub use genome::{Chromosome, Condition, EncodedVector, Rule};
pub use population::{Individual, Population};
pub use progress::ConsoleProgressCallback;
pub use splitters::{DataSplit, DataSplitter, SimpleSplitter, SplitConfig};
