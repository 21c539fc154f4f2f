pub mod renderer;
pub mod fitness;
pub mod evaluator;

pub use renderer::{blend, Renderer};
pub use fitness::score;
pub use evaluator::FitnessEvaluator;
