use crate::engines::generation::individual::Individual;
use crate::engines::generation::random::RandomSource;
use crate::types::ShapeType;

/// Tournament selection: draw `tournament_size` candidates with replacement,
/// keep the one with the lowest fitness. `population` must be non-empty.
pub fn tournament_selection<'a, R: RandomSource>(
    population: &'a [Individual],
    tournament_size: usize,
    rng: &mut R,
) -> &'a Individual {
    let mut best = &population[rng.uniform_index(population.len())];

    for _ in 1..tournament_size {
        let candidate = &population[rng.uniform_index(population.len())];
        if candidate.fitness_or_worst() < best.fitness_or_worst() {
            best = candidate;
        }
    }

    best
}

/// Single-point crossover: head `[0, point)` from `parent1`, tail
/// `[point, len(parent2))` from `parent2`, with `point` uniform in `[0, min_len]`.
///
/// The tail always comes from `parent2`, so the child may be longer than `parent1`.
pub fn crossover<R: RandomSource>(parent1: &Individual, parent2: &Individual, rng: &mut R) -> Individual {
    let min_len = parent1.len().min(parent2.len());
    let point = rng.uniform_int(0, i32::try_from(min_len).unwrap_or(i32::MAX)) as usize;
    crossover_at(parent1, parent2, point)
}

/// Crossover at a fixed point; `point` is clamped to the shorter parent.
pub fn crossover_at(parent1: &Individual, parent2: &Individual, point: usize) -> Individual {
    let point = point.min(parent1.len()).min(parent2.len());

    let mut dna = Vec::with_capacity(parent2.len());
    dna.extend_from_slice(&parent1.dna[..point]);
    dna.extend_from_slice(&parent2.dna[point..]);

    Individual::from_genes(dna)
}

/// Per-individual mutation settings for one generation
#[derive(Debug, Clone, Copy)]
pub struct MutationParams {
    pub mutate_gene_probability: f64,
    pub add_gene_probability: f64,
    pub delete_gene_probability: f64,
    pub img_width: i32,
    pub img_height: i32,
    pub max_gene_size: i32,
    pub shape: ShapeType,
}

/// Three independent trials: mutate one gene, append one gene, delete one gene.
/// Returns true if at least one trial changed the individual; a gene mutation
/// or deletion drawn for an empty individual does not count.
pub fn mutate<R: RandomSource>(individual: &mut Individual, params: &MutationParams, rng: &mut R) -> bool {
    let mut mutated = false;

    if rng.chance(params.mutate_gene_probability) {
        mutated |= individual.mutate_random_gene(rng, params.img_width, params.img_height);
    }
    if rng.chance(params.add_gene_probability) {
        individual.add_random_gene(rng, params.img_width, params.img_height, params.max_gene_size, params.shape);
        mutated = true;
    }
    if rng.chance(params.delete_gene_probability) {
        mutated |= individual.delete_random_gene(rng);
    }

    mutated
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn scored(n_genes: usize, fitness: f64, rng: &mut StdRng) -> Individual {
        let mut individual = Individual::random(rng, n_genes, n_genes, 20, 20, 5, ShapeType::Square);
        individual.fitness = Some(fitness);
        individual
    }

    fn params(p1: f64, p2: f64, p3: f64) -> MutationParams {
        MutationParams {
            mutate_gene_probability: p1,
            add_gene_probability: p2,
            delete_gene_probability: p3,
            img_width: 20,
            img_height: 20,
            max_gene_size: 5,
            shape: ShapeType::Circle,
        }
    }

    #[test]
    fn test_crossover_length_property() {
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..500 {
            let a_len = rng.uniform_int(0, 12) as usize;
            let b_len = rng.uniform_int(0, 12) as usize;
            let parent1 = scored(a_len, 1.0, &mut rng);
            let parent2 = scored(b_len, 2.0, &mut rng);

            let child = crossover(&parent1, &parent2, &mut rng);

            // head from parent1 has length <= min_len, tail from parent2 fills the rest
            let point = (0..=a_len.min(b_len))
                .find(|&p| child.dna[..p] == parent1.dna[..p] && child.dna[p..] == parent2.dna[p..])
                .expect("child must split into parent1 head and parent2 tail");
            assert!(point <= a_len.min(b_len));
            assert_eq!(child.len(), point + (b_len - point));
            assert_eq!(child.fitness, None);
        }
    }

    #[test]
    fn test_crossover_tail_always_from_parent2() {
        let mut rng = StdRng::seed_from_u64(4);
        let short = scored(2, 1.0, &mut rng);
        let long = scored(6, 1.0, &mut rng);

        let child = crossover_at(&short, &long, 2);

        assert_eq!(child.len(), 6);
        assert_eq!(&child.dna[..2], &short.dna[..]);
        assert_eq!(&child.dna[2..], &long.dna[2..]);
    }

    #[test]
    fn test_tournament_prefers_lower_fitness() {
        let mut rng = StdRng::seed_from_u64(8);
        let population: Vec<Individual> = (0..5).map(|i| scored(1, i as f64 * 10.0, &mut rng)).collect();

        // A tournament as large as the population almost always contains index 0
        let mut best_hits = 0;
        for _ in 0..200 {
            if tournament_selection(&population, 50, &mut rng).fitness == Some(0.0) {
                best_hits += 1;
            }
        }
        assert!(best_hits > 190);
    }

    #[test]
    fn test_tournament_of_one_is_uniform_pick() {
        let mut rng = StdRng::seed_from_u64(2);
        let population: Vec<Individual> = (0..3).map(|i| scored(1, i as f64, &mut rng)).collect();

        let mut seen = [false; 3];
        for _ in 0..200 {
            let picked = tournament_selection(&population, 1, &mut rng);
            seen[picked.fitness.unwrap() as usize] = true;
        }
        assert_eq!(seen, [true, true, true]);
    }

    #[test]
    fn test_mutate_with_zero_probabilities_is_untouched() {
        let mut rng = StdRng::seed_from_u64(3);
        let original = scored(4, 7.0, &mut rng);
        let mut copy = original.clone();

        assert!(!mutate(&mut copy, &params(0.0, 0.0, 0.0), &mut rng));
        assert_eq!(copy, original);
    }

    #[test]
    fn test_mutate_trials_are_independent() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut individual = scored(4, 7.0, &mut rng);

        // grow and shrink in the same call leaves the length unchanged
        assert!(mutate(&mut individual, &params(1.0, 1.0, 1.0), &mut rng));
        assert_eq!(individual.len(), 4);
        assert_eq!(individual.fitness, None);
    }

    #[test]
    fn test_mutate_ignores_no_op_trials_on_empty_individual() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut empty = Individual::new();
        empty.fitness = Some(3.0);

        assert!(!mutate(&mut empty, &params(1.0, 0.0, 1.0), &mut rng));
        assert!(empty.is_empty());
        assert_eq!(empty.fitness, Some(3.0));

        // an append followed by a delete on the same call is a real change
        assert!(mutate(&mut empty, &params(1.0, 1.0, 1.0), &mut rng));
        assert_eq!(empty.fitness, None);
    }
}
