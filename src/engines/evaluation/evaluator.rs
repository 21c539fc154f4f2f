use crate::engines::evaluation::fitness;
use crate::engines::generation::{Individual, ProgressCallback};
use crate::error::{GenartError, Result};
use crate::types::{BlendMode, PixelBuffer};
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Scores a whole population on a fixed-size worker pool.
///
/// Workers pull individual indices one at a time from a shared atomic
/// counter, so cheap and expensive individuals balance out across threads.
/// While a generation is being scored the population is only read; each
/// score is written back to its own slot after every worker has joined.
pub struct FitnessEvaluator {
    pool: ThreadPool,
    workers: usize,
    blend_mode: BlendMode,
}

impl FitnessEvaluator {
    /// `worker_threads = None` uses the available hardware parallelism.
    pub fn new(worker_threads: Option<usize>, blend_mode: BlendMode) -> Result<Self> {
        let workers = worker_threads
            .unwrap_or_else(|| {
                std::thread::available_parallelism()
                    .map(|n| n.get())
                    .unwrap_or(1)
            })
            .max(1);

        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("fitness-{i}"))
            .build()
            .map_err(|e| GenartError::Configuration(format!("Failed to build worker pool: {}", e)))?;

        log::trace!("Fitness worker pool started with {} threads", workers);

        Ok(Self {
            pool,
            workers,
            blend_mode,
        })
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    pub fn blend_mode(&self) -> BlendMode {
        self.blend_mode
    }

    /// Score every individual against `target`. Returns once all workers are done.
    pub fn evaluate<C: ProgressCallback>(
        &self,
        population: &mut [Individual],
        target: &PixelBuffer,
        callback: &mut C,
    ) {
        let total = population.len();
        if total == 0 {
            return;
        }

        let next = AtomicUsize::new(0);
        let finished = AtomicUsize::new(0);
        let sink = Mutex::new(callback);
        let scores = Mutex::new(Vec::with_capacity(total));
        let individuals: &[Individual] = population;
        let blend_mode = self.blend_mode;

        self.pool.scope(|scope| {
            for _ in 0..self.workers.min(total) {
                scope.spawn(|_| {
                    let mut local = Vec::new();
                    loop {
                        let index = next.fetch_add(1, Ordering::Relaxed);
                        if index >= total {
                            break;
                        }
                        local.push((index, fitness::score(&individuals[index], target, blend_mode)));

                        let done = finished.fetch_add(1, Ordering::Relaxed) + 1;
                        sink.lock()
                            .unwrap_or_else(|e| e.into_inner())
                            .on_individual_evaluated(done, total);
                    }
                    scores.lock().unwrap_or_else(|e| e.into_inner()).extend(local);
                });
            }
        });

        for (index, value) in scores.into_inner().unwrap_or_else(|e| e.into_inner()) {
            population[index].fitness = Some(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::generation::SilentProgressCallback;
    use crate::types::{Color, ShapeType};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    struct CountingCallback {
        calls: usize,
        max_done: usize,
    }

    impl ProgressCallback for CountingCallback {
        fn on_generation_start(&mut self, _generation: usize) {}
        fn on_generation_complete(&mut self, _stats: &crate::engines::generation::GenerationStats) {}
        fn on_individual_evaluated(&mut self, done: usize, _total: usize) {
            self.calls += 1;
            self.max_done = self.max_done.max(done);
        }
    }

    fn population(n: usize) -> Vec<Individual> {
        let mut rng = StdRng::seed_from_u64(9);
        (0..n)
            .map(|_| Individual::random(&mut rng, 1, 12, 16, 16, 6, ShapeType::Circle))
            .collect()
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let target = PixelBuffer::filled(16, 16, Color::new(30, 60, 90, 255));
        let mut parallel = population(37);
        let evaluator = FitnessEvaluator::new(Some(4), BlendMode::AlphaOver).unwrap();

        evaluator.evaluate(&mut parallel, &target, &mut SilentProgressCallback);

        for individual in &parallel {
            let expected = fitness::score(individual, &target, BlendMode::AlphaOver);
            assert_eq!(individual.fitness, Some(expected));
        }
    }

    #[test]
    fn test_every_individual_reported_once() {
        let target = PixelBuffer::new(8, 8);
        let mut individuals = population(20);
        let evaluator = FitnessEvaluator::new(Some(3), BlendMode::Additive).unwrap();
        let mut callback = CountingCallback { calls: 0, max_done: 0 };

        evaluator.evaluate(&mut individuals, &target, &mut callback);

        assert_eq!(callback.calls, 20);
        assert_eq!(callback.max_done, 20);
        assert!(individuals.iter().all(|i| i.fitness.is_some()));
    }

    #[test]
    fn test_empty_population() {
        let evaluator = FitnessEvaluator::new(Some(2), BlendMode::Overwrite).unwrap();
        let mut empty: Vec<Individual> = Vec::new();
        evaluator.evaluate(&mut empty, &PixelBuffer::new(1, 1), &mut SilentProgressCallback);
        assert!(empty.is_empty());
    }
}
