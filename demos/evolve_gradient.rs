//! Evolves shapes toward a synthetic gradient and prints the final score.
//!
//! Usage: cargo run --example evolve_gradient [config.toml]
use genart::config::ConfigManager;
use genart::engines::generation::ConsoleProgressCallback;
use genart::{EvolutionEngine, PixelBuffer};
use std::env;

const WIDTH: usize = 64;
const HEIGHT: usize = 48;

/// Horizontal red-to-blue gradient, opaque
fn gradient_target() -> genart::Result<PixelBuffer> {
    let mut bytes = Vec::with_capacity(WIDTH * HEIGHT * 4);
    for _y in 0..HEIGHT {
        for x in 0..WIDTH {
            let t = (x * 255 / (WIDTH - 1)) as u8;
            bytes.extend_from_slice(&[255 - t, 40, t, 255]);
        }
    }
    PixelBuffer::from_rgba8(WIDTH, HEIGHT, &bytes)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let manager = ConfigManager::new();
    match env::args().nth(1) {
        Some(path) => manager.load_from_file(&path)?,
        None => manager.update(|c| {
            c.evolution.population_size = 40;
            c.evolution.generations = 200;
            c.evolution.min_gene_count = 10;
            c.evolution.max_gene_count = 30;
            c.evolution.max_gene_size = 16;
            c.evolution.snapshot_interval = 50;
            c.evolution.seed = Some(42);
        })?,
    }
    let config = manager.get();

    let target = gradient_target()?;
    let mut engine = EvolutionEngine::from_config(config.evolution, config.render, &target)?;
    let best = engine.run(&mut ConsoleProgressCallback);
    let (fitness, genes) = (best.fitness.unwrap_or(f64::NAN), best.len());

    let rendered = engine.render_best();
    println!(
        "Best fitness {:.0} with {} genes ({} bytes of RGBA rendered)",
        fitness,
        genes,
        rendered.to_rgba8().len()
    );
    Ok(())
}
