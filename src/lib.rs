//! Approximates a target image with stacks of semi-transparent circles or
//! squares, evolved by a genetic algorithm with parallel fitness evaluation.

pub mod config;
pub mod engines;
pub mod error;
pub mod types;

pub use engines::evaluation::{FitnessEvaluator, Renderer};
pub use engines::generation::{EvolutionEngine, Individual, ProgressCallback};
pub use error::{GenartError, Result};
pub use types::{BlendMode, Color, PixelBuffer, Position, ShapeType};
