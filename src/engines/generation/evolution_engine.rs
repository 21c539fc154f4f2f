use crate::config::{ConfigSection, EvolutionConfig, RenderConfig};
use crate::engines::evaluation::{FitnessEvaluator, Renderer};
use crate::engines::generation::{
    hall_of_fame::HallOfFame,
    individual::Individual,
    operators::{crossover, mutate, tournament_selection, MutationParams},
    random::RandomSource,
};
use crate::error::GenartError;
use crate::types::PixelBuffer;
use rand::rngs::StdRng;
use rand::SeedableRng;

const HALL_OF_FAME_SIZE: usize = 10;

/// Summary of one evaluated generation
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationStats {
    pub generation: usize,
    pub best_fitness: f64,
    pub mean_fitness: f64,
    pub worst_fitness: f64,
    pub best_gene_count: usize,
    pub mutated_count: usize, // Offspring that received at least one mutation
}

pub trait ProgressCallback: Send {
    fn on_generation_start(&mut self, generation: usize);
    fn on_generation_complete(&mut self, stats: &GenerationStats);
    /// Called from worker threads, serialized by a mutex.
    fn on_individual_evaluated(&mut self, done: usize, total: usize);
    /// Best individual of `generation`, every `snapshot_interval` generations.
    fn on_snapshot(&mut self, _generation: usize, _best: &Individual) {}
}

/// Owns the population and drives evaluate -> select -> crossover -> mutate -> elitism.
pub struct EvolutionEngine<'a, R: RandomSource = StdRng> {
    config: EvolutionConfig,
    render: RenderConfig,
    target: &'a PixelBuffer,
    img_width: i32,
    img_height: i32,
    evaluator: FitnessEvaluator,
    population: Vec<Individual>,
    hall_of_fame: HallOfFame,
    rng: R,
    generation: usize,
}

impl<'a> EvolutionEngine<'a, StdRng> {
    /// Seed `StdRng` from `config.seed`, or from entropy when unset.
    pub fn from_config(
        config: EvolutionConfig,
        render: RenderConfig,
        target: &'a PixelBuffer,
    ) -> Result<Self, GenartError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(config, render, target, rng)
    }
}

impl<'a, R: RandomSource> EvolutionEngine<'a, R> {
    /// Validate everything up front and build the initial population.
    pub fn new(
        config: EvolutionConfig,
        render: RenderConfig,
        target: &'a PixelBuffer,
        rng: R,
    ) -> Result<Self, GenartError> {
        config.validate()?;
        render.validate()?;

        let (img_width, img_height) = match (i32::try_from(target.width()), i32::try_from(target.height())) {
            (Ok(w), Ok(h)) if w > 0 && h > 0 => (w, h),
            _ => {
                return Err(GenartError::Configuration(format!(
                    "Target image dimensions must be positive, got {}x{}",
                    target.width(),
                    target.height()
                )))
            }
        };

        let evaluator = FitnessEvaluator::new(config.worker_threads, render.blend_mode)?;

        let mut engine = Self {
            config,
            render,
            target,
            img_width,
            img_height,
            evaluator,
            population: Vec::new(),
            hall_of_fame: HallOfFame::new(HALL_OF_FAME_SIZE),
            rng,
            generation: 0,
        };
        engine.initialize_population();
        Ok(engine)
    }

    fn initialize_population(&mut self) {
        self.population = (0..self.config.population_size)
            .map(|_| {
                Individual::random(
                    &mut self.rng,
                    self.config.min_gene_count,
                    self.config.max_gene_count,
                    self.img_width,
                    self.img_height,
                    self.config.max_gene_size,
                    self.render.shape_type,
                )
            })
            .collect();
    }

    /// Run the remaining generations, then score the final population.
    pub fn run<C: ProgressCallback>(&mut self, callback: &mut C) -> &Individual {
        log::info!(
            "Starting evolution: population {}, generations {}, {}x{} target, {} workers",
            self.config.population_size,
            self.config.generations,
            self.img_width,
            self.img_height,
            self.evaluator.workers()
        );

        while self.generation < self.config.generations {
            self.step(callback);
        }
        self.evaluate(callback);

        let best = self.best_individual();
        log::info!(
            "Evolution finished after {} generations. Best fitness: {:.1}, genes: {}",
            self.generation,
            best.fitness_or_worst(),
            best.len()
        );
        best
    }

    /// One full generation: evaluate, report, then breed the next population.
    pub fn step<C: ProgressCallback>(&mut self, callback: &mut C) -> GenerationStats {
        let generation = self.generation;
        callback.on_generation_start(generation);

        self.evaluate(callback);

        if self.config.snapshot_interval > 0 && generation % self.config.snapshot_interval == 0 {
            callback.on_snapshot(generation, &self.population[0]);
        }

        let mut stats = self.current_stats();
        stats.mutated_count = self.breed();

        log::debug!(
            "Generation {}: best {:.1}, mean {:.1}, mutated {}",
            generation,
            stats.best_fitness,
            stats.mean_fitness,
            stats.mutated_count
        );
        callback.on_generation_complete(&stats);
        stats
    }

    /// Score every individual in parallel, then sort ascending (index 0 = best).
    pub fn evaluate<C: ProgressCallback>(&mut self, callback: &mut C) {
        self.evaluator.evaluate(&mut self.population, self.target, callback);

        self.population
            .sort_by(|a, b| a.fitness_or_worst().total_cmp(&b.fitness_or_worst()));

        self.hall_of_fame.try_add(&self.population[0], self.generation);
    }

    /// Replace the population with elites plus mutated offspring.
    /// Expects a sorted population; returns the number of mutated offspring.
    pub fn breed(&mut self) -> usize {
        let elite_count = self.config.elitism_count.min(self.population.len());
        let elites: Vec<Individual> = self.population[..elite_count].to_vec();

        let offspring_count = self.config.population_size - elite_count;
        let mut next_generation = Vec::with_capacity(self.config.population_size);
        for _ in 0..offspring_count {
            let parent1 = tournament_selection(&self.population, self.config.tournament_size, &mut self.rng);
            let parent2 = tournament_selection(&self.population, self.config.tournament_size, &mut self.rng);
            next_generation.push(crossover(parent1, parent2, &mut self.rng));
        }

        let params = self.mutation_params();
        let mut mutated_count = 0;
        for child in next_generation.iter_mut() {
            if mutate(child, &params, &mut self.rng) {
                mutated_count += 1;
            }
        }

        next_generation.extend(elites);
        self.population = next_generation;
        self.generation += 1;

        mutated_count
    }

    fn mutation_params(&self) -> MutationParams {
        MutationParams {
            mutate_gene_probability: self.config.mutate_gene_probability,
            add_gene_probability: self.config.add_gene_probability,
            delete_gene_probability: self.config.delete_gene_probability,
            img_width: self.img_width,
            img_height: self.img_height,
            max_gene_size: self.config.max_gene_size,
            shape: self.render.shape_type,
        }
    }

    fn current_stats(&self) -> GenerationStats {
        let best = &self.population[0];
        let total: f64 = self.population.iter().map(Individual::fitness_or_worst).sum();

        GenerationStats {
            generation: self.generation,
            best_fitness: best.fitness_or_worst(),
            mean_fitness: total / self.population.len() as f64,
            worst_fitness: self.population[self.population.len() - 1].fitness_or_worst(),
            best_gene_count: best.len(),
            mutated_count: 0,
        }
    }

    /// Index 0 of the population. Only meaningful right after `evaluate`.
    pub fn best_individual(&self) -> &Individual {
        &self.population[0]
    }

    /// Render the current best individual at the target's size.
    pub fn render_best(&self) -> PixelBuffer {
        Renderer::render(
            self.target.width(),
            self.target.height(),
            self.best_individual(),
            self.render.blend_mode,
        )
    }

    pub fn population(&self) -> &[Individual] {
        &self.population
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn hall_of_fame(&self) -> &HallOfFame {
        &self.hall_of_fame
    }

    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }
}
