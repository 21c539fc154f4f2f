use crate::engines::generation::individual::Individual;

use std::collections::HashSet;

#[derive(Clone, Debug)]
pub struct EliteEntry {
    pub individual: Individual,
    pub fitness: f64,
    pub generation: usize,      // Generation in which it was first recorded
    pub canonical_string: String, // For deduplication
}

/// Best distinct individuals seen over a whole run, ascending by fitness.
pub struct HallOfFame {
    entries: Vec<EliteEntry>,
    max_size: usize,
    seen_signatures: HashSet<String>,
}

impl HallOfFame {
    pub fn new(max_size: usize) -> Self {
        Self {
            entries: Vec::new(),
            max_size,
            seen_signatures: HashSet::new(),
        }
    }

    /// Attempt to record an evaluated individual. Unscored and duplicate
    /// gene sequences are rejected.
    pub fn try_add(&mut self, individual: &Individual, generation: usize) -> bool {
        let Some(fitness) = individual.fitness else {
            return false;
        };
        if self.max_size == 0 {
            return false;
        }

        let canonical_string = match get_canonical_dna_string(individual) {
            Ok(canonical) => canonical,
            Err(e) => {
                log::warn!("Skipping hall of fame entry, gene sequence did not serialize: {}", e);
                return false;
            }
        };
        if self.seen_signatures.contains(&canonical_string) {
            return false;
        }

        // Full and not better than the current worst
        if self.entries.len() >= self.max_size
            && self.entries.last().is_some_and(|worst| fitness >= worst.fitness)
        {
            return false;
        }

        self.seen_signatures.insert(canonical_string.clone());
        self.entries.push(EliteEntry {
            individual: individual.clone(),
            fitness,
            generation,
            canonical_string,
        });
        self.sort_and_trim();

        true
    }

    fn sort_and_trim(&mut self) {
        self.entries.sort_by(|a, b| a.fitness.total_cmp(&b.fitness));

        while self.entries.len() > self.max_size {
            if let Some(removed) = self.entries.pop() {
                self.seen_signatures.remove(&removed.canonical_string);
            }
        }
    }

    pub fn best(&self) -> Option<&EliteEntry> {
        self.entries.first()
    }

    pub fn get_all(&self) -> &[EliteEntry] {
        &self.entries
    }

    pub fn get_top_n(&self, n: usize) -> &[EliteEntry] {
        &self.entries[..n.min(self.entries.len())]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Canonical string for deduplication: the serialized gene sequence
pub fn get_canonical_dna_string(individual: &Individual) -> serde_json::Result<String> {
    serde_json::to_string(&individual.dna)
}
