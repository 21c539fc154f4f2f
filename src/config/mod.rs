pub mod traits;
pub mod evolution;
pub mod render;
pub mod manager;

pub use manager::{ConfigManager, AppConfig};
pub use evolution::EvolutionConfig;
pub use render::RenderConfig;
pub use traits::{ConfigSection, ConfigManifest, FieldManifest};
