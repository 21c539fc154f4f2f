use super::traits::{ConfigSection, ConfigManifest, FieldManifest};
use crate::error::GenartError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    pub population_size: usize,
    pub tournament_size: usize,
    pub elitism_count: usize,
    pub min_gene_count: usize,
    pub max_gene_count: usize,
    pub max_gene_size: i32,
    pub generations: usize,
    pub mutate_gene_probability: f64,
    pub add_gene_probability: f64,
    pub delete_gene_probability: f64,
    pub snapshot_interval: usize, // 0 disables snapshots
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker_threads: Option<usize>, // None = available parallelism
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            tournament_size: 3,
            elitism_count: 1,
            min_gene_count: 50,
            max_gene_count: 100,
            max_gene_size: 100,
            generations: 10_000,
            mutate_gene_probability: 0.7,
            add_gene_probability: 0.2,
            delete_gene_probability: 0.1,
            snapshot_interval: 100,
            seed: None,
            worker_threads: None,
        }
    }
}

fn check_probability(name: &str, value: f64) -> Result<(), GenartError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(GenartError::Configuration(format!(
            "{} must be between 0 and 1, got {}",
            name, value
        )));
    }
    Ok(())
}

impl ConfigSection for EvolutionConfig {
    fn section_name() -> &'static str {
        "evolution"
    }

    fn validate(&self) -> Result<(), GenartError> {
        if self.population_size == 0 {
            return Err(GenartError::Configuration(
                "Population size must be at least 1".to_string()
            ));
        }
        if self.elitism_count >= self.population_size {
            return Err(GenartError::Configuration(format!(
                "Elitism count ({}) must be smaller than population size ({})",
                self.elitism_count, self.population_size
            )));
        }
        if self.tournament_size == 0 {
            return Err(GenartError::Configuration(
                "Tournament size must be at least 1".to_string()
            ));
        }
        if self.min_gene_count > self.max_gene_count {
            return Err(GenartError::Configuration(format!(
                "Minimum gene count ({}) exceeds maximum gene count ({})",
                self.min_gene_count, self.max_gene_count
            )));
        }
        if self.max_gene_size < 1 {
            return Err(GenartError::Configuration(
                "Maximum gene size must be at least 1".to_string()
            ));
        }
        check_probability("Gene mutation probability", self.mutate_gene_probability)?;
        check_probability("Gene insertion probability", self.add_gene_probability)?;
        check_probability("Gene deletion probability", self.delete_gene_probability)?;
        if self.worker_threads == Some(0) {
            return Err(GenartError::Configuration(
                "Worker thread count must be positive when set".to_string()
            ));
        }
        Ok(())
    }

    fn to_manifest(&self) -> ConfigManifest {
        let defaults = Self::default();
        ConfigManifest {
            section: "Evolution".to_string(),
            fields: vec![
                FieldManifest::new(
                    "population_size",
                    "integer",
                    serde_json::json!(defaults.population_size),
                    Some(1.0),
                    None,
                    "Number of individuals per generation",
                ),
                FieldManifest::new(
                    "tournament_size",
                    "integer",
                    serde_json::json!(defaults.tournament_size),
                    Some(1.0),
                    None,
                    "Candidates drawn per tournament",
                ),
                FieldManifest::new(
                    "elitism_count",
                    "integer",
                    serde_json::json!(defaults.elitism_count),
                    Some(0.0),
                    None,
                    "Best individuals carried over unchanged (< population_size)",
                ),
                FieldManifest::new(
                    "min_gene_count",
                    "integer",
                    serde_json::json!(defaults.min_gene_count),
                    Some(0.0),
                    None,
                    "Fewest shapes in an initial individual",
                ),
                FieldManifest::new(
                    "max_gene_count",
                    "integer",
                    serde_json::json!(defaults.max_gene_count),
                    Some(0.0),
                    None,
                    "Most shapes in an initial individual",
                ),
                FieldManifest::new(
                    "max_gene_size",
                    "integer",
                    serde_json::json!(defaults.max_gene_size),
                    Some(1.0),
                    None,
                    "Upper bound for a new shape's radius or side length",
                ),
                FieldManifest::new(
                    "generations",
                    "integer",
                    serde_json::json!(defaults.generations),
                    Some(0.0),
                    None,
                    "Number of generations to run",
                ),
                FieldManifest::new(
                    "mutate_gene_probability",
                    "float",
                    serde_json::json!(defaults.mutate_gene_probability),
                    Some(0.0),
                    Some(1.0),
                    "Chance to mutate one random gene",
                ),
                FieldManifest::new(
                    "add_gene_probability",
                    "float",
                    serde_json::json!(defaults.add_gene_probability),
                    Some(0.0),
                    Some(1.0),
                    "Chance to append one random gene",
                ),
                FieldManifest::new(
                    "delete_gene_probability",
                    "float",
                    serde_json::json!(defaults.delete_gene_probability),
                    Some(0.0),
                    Some(1.0),
                    "Chance to delete one random gene",
                ),
                FieldManifest::new(
                    "snapshot_interval",
                    "integer",
                    serde_json::json!(defaults.snapshot_interval),
                    Some(0.0),
                    None,
                    "Generations between best-individual snapshots (0 = never)",
                ),
            ],
        }
    }
}
