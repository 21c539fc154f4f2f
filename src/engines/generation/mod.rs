pub mod random;
pub mod gene;
pub mod individual;
pub mod operators;
pub mod hall_of_fame;
pub mod evolution_engine;
pub mod progress;

pub use random::RandomSource;
pub use gene::{Gene, GeneMutation};
pub use individual::Individual;
pub use hall_of_fame::{HallOfFame, EliteEntry};
pub use evolution_engine::{EvolutionEngine, GenerationStats, ProgressCallback};
pub use progress::{
    ChannelProgressCallback, ConsoleProgressCallback, ProgressMessage, SilentProgressCallback,
};
pub use operators::{crossover, crossover_at, mutate, tournament_selection, MutationParams};
