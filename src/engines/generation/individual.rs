use crate::engines::generation::gene::{Gene, GeneMutation};
use crate::engines::generation::random::RandomSource;
use crate::types::{Color, ShapeType};
use serde::{Deserialize, Serialize};

/// One candidate solution: an ordered gene sequence plus its fitness.
///
/// Later genes are painted over earlier ones. `fitness` is `None` until the
/// evaluator has scored this exact gene sequence; lower is better.
/// `Clone` is a deep copy since `Gene` is a plain value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Individual {
    pub dna: Vec<Gene>,
    pub fitness: Option<f64>,
}

impl Individual {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_genes(dna: Vec<Gene>) -> Self {
        Self { dna, fitness: None }
    }

    /// Build an individual with a uniform gene count in `[min_genes, max_genes]`.
    pub fn random(
        rng: &mut impl RandomSource,
        min_genes: usize,
        max_genes: usize,
        img_width: i32,
        img_height: i32,
        max_size: i32,
        shape: ShapeType,
    ) -> Self {
        let min = i32::try_from(min_genes).unwrap_or(i32::MAX);
        let max = i32::try_from(max_genes).unwrap_or(i32::MAX);
        let count = rng.uniform_int(min, max) as usize;

        let mut individual = Self::new();
        individual.dna.reserve(count);
        for _ in 0..count {
            individual.add_random_gene(rng, img_width, img_height, max_size, shape);
        }
        individual
    }

    pub fn len(&self) -> usize {
        self.dna.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dna.is_empty()
    }

    /// Fitness for ordering; unscored individuals sort last.
    pub fn fitness_or_worst(&self) -> f64 {
        self.fitness.unwrap_or(f64::INFINITY)
    }

    /// Append a random gene. Alpha is limited to [0, 100] so stacked shapes stay visible.
    pub fn add_random_gene(
        &mut self,
        rng: &mut impl RandomSource,
        img_width: i32,
        img_height: i32,
        max_size: i32,
        shape: ShapeType,
    ) {
        let x = rng.uniform_int(0, (img_width - 1).max(0));
        let y = rng.uniform_int(0, (img_height - 1).max(0));

        let color = Color::new(
            rng.uniform_int(0, 255) as u8,
            rng.uniform_int(0, 255) as u8,
            rng.uniform_int(0, 255) as u8,
            rng.uniform_int(0, 100) as u8,
        );

        let size = rng.uniform_int(1, max_size.max(1));
        self.dna.push(Gene::new(x, y, color, shape, size));
        self.fitness = None;
    }

    /// Returns false, drawing nothing, when there is no gene to remove.
    pub fn delete_random_gene(&mut self, rng: &mut impl RandomSource) -> bool {
        if self.dna.is_empty() {
            return false;
        }
        let index = rng.uniform_index(self.dna.len());
        self.dna.remove(index);
        self.fitness = None;
        true
    }

    /// Apply exactly one of the three gene mutation kinds to one random gene.
    /// Returns false when the individual has no genes.
    pub fn mutate_random_gene(&mut self, rng: &mut impl RandomSource, img_width: i32, img_height: i32) -> bool {
        if self.dna.is_empty() {
            return false;
        }
        let index = rng.uniform_index(self.dna.len());
        let mutation = GeneMutation::ALL[rng.uniform_index(GeneMutation::ALL.len())];

        self.dna[index].apply(mutation, rng, img_width, img_height);
        self.fitness = None;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded(n: usize) -> (Individual, StdRng) {
        let mut rng = StdRng::seed_from_u64(42);
        let individual = Individual::random(&mut rng, n, n, 64, 48, 20, ShapeType::Circle);
        (individual, rng)
    }

    #[test]
    fn test_random_gene_ranges() {
        let (individual, _) = seeded(500);

        assert_eq!(individual.len(), 500);
        for gene in &individual.dna {
            assert!((0..64).contains(&gene.position.x));
            assert!((0..48).contains(&gene.position.y));
            assert!(gene.color.a <= 100);
            assert!((1..=20).contains(&gene.size));
            assert_eq!(gene.shape, ShapeType::Circle);
        }
    }

    #[test]
    fn test_random_gene_count_within_bounds() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..200 {
            let individual = Individual::random(&mut rng, 3, 7, 10, 10, 5, ShapeType::Square);
            assert!((3..=7).contains(&individual.len()));
        }
    }

    #[test]
    fn test_empty_individual_operations_are_noops() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut individual = Individual::new();

        assert!(!individual.delete_random_gene(&mut rng));
        assert!(!individual.mutate_random_gene(&mut rng, 10, 10));

        assert!(individual.is_empty());
    }

    #[test]
    fn test_delete_removes_one_gene() {
        let (mut individual, mut rng) = seeded(10);

        individual.delete_random_gene(&mut rng);

        assert_eq!(individual.len(), 9);
    }

    #[test]
    fn test_mutate_changes_at_most_one_gene() {
        let (original, mut rng) = seeded(30);

        for _ in 0..100 {
            let mut mutated = original.clone();
            mutated.mutate_random_gene(&mut rng, 64, 48);

            let changed = original.dna.iter().zip(&mutated.dna).filter(|(a, b)| a != b).count();
            assert!(changed <= 1);
            assert_eq!(mutated.len(), original.len());
        }
    }

    #[test]
    fn test_clone_shares_no_storage() {
        let (mut original, mut rng) = seeded(5);
        original.fitness = Some(12.5);

        let mut copy = original.clone();
        assert_eq!(copy, original);

        copy.dna[0].size += 1;
        copy.add_random_gene(&mut rng, 64, 48, 20, ShapeType::Circle);

        assert_eq!(original.len(), 5);
        assert_ne!(original.dna[0], copy.dna[0]);
        assert_eq!(original.fitness, Some(12.5));
    }
}
