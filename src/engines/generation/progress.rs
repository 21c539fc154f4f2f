use super::evolution_engine::{GenerationStats, ProgressCallback};
use super::individual::Individual;

/// Reports through the `log` facade
pub struct ConsoleProgressCallback;

impl ProgressCallback for ConsoleProgressCallback {
    fn on_generation_start(&mut self, generation: usize) {
        log::debug!("Generation {} starting...", generation + 1);
    }

    fn on_generation_complete(&mut self, stats: &GenerationStats) {
        log::info!(
            "Generation {} complete. Best fitness: {:.0}, genes: {}, mutated: {}",
            stats.generation + 1,
            stats.best_fitness,
            stats.best_gene_count,
            stats.mutated_count
        );
    }

    fn on_individual_evaluated(&mut self, done: usize, total: usize) {
        if done == total {
            log::trace!("  Evaluated {}/{} individuals", done, total);
        }
    }

    fn on_snapshot(&mut self, generation: usize, best: &Individual) {
        log::info!(
            "Snapshot at generation {}: fitness {:.0} with {} genes",
            generation + 1,
            best.fitness_or_worst(),
            best.len()
        );
    }
}

/// Ignores every event
pub struct SilentProgressCallback;

impl ProgressCallback for SilentProgressCallback {
    fn on_generation_start(&mut self, _generation: usize) {}
    fn on_generation_complete(&mut self, _stats: &GenerationStats) {}
    fn on_individual_evaluated(&mut self, _done: usize, _total: usize) {}
}

// For handing progress to another thread (e.g. a viewer or file writer)
pub struct ChannelProgressCallback {
    sender: std::sync::mpsc::Sender<ProgressMessage>,
}

#[derive(Debug, Clone)]
pub enum ProgressMessage {
    GenerationStart(usize),
    GenerationComplete(GenerationStats),
    IndividualEvaluated { done: usize, total: usize },
    Snapshot { generation: usize, best: Individual },
}

impl ChannelProgressCallback {
    pub fn new(sender: std::sync::mpsc::Sender<ProgressMessage>) -> Self {
        Self { sender }
    }
}

impl ProgressCallback for ChannelProgressCallback {
    fn on_generation_start(&mut self, generation: usize) {
        let _ = self.sender.send(ProgressMessage::GenerationStart(generation));
    }

    fn on_generation_complete(&mut self, stats: &GenerationStats) {
        let _ = self.sender.send(ProgressMessage::GenerationComplete(stats.clone()));
    }

    fn on_individual_evaluated(&mut self, done: usize, total: usize) {
        let _ = self.sender.send(ProgressMessage::IndividualEvaluated { done, total });
    }

    fn on_snapshot(&mut self, generation: usize, best: &Individual) {
        let _ = self.sender.send(ProgressMessage::Snapshot {
            generation,
            best: best.clone(),
        });
    }
}
