use genart::engines::evaluation::{score, Renderer};
use genart::engines::generation::{Gene, Individual};
use genart::{BlendMode, Color, GenartError, PixelBuffer, ShapeType};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn random_individual(seed: u64, shape: ShapeType) -> Individual {
    let mut rng = StdRng::seed_from_u64(seed);
    Individual::random(&mut rng, 20, 40, 32, 24, 12, shape)
}

#[test]
fn test_render_is_pure() {
    for (seed, shape) in [(1, ShapeType::Circle), (2, ShapeType::Square)] {
        let individual = random_individual(seed, shape);
        for mode in [BlendMode::AlphaOver, BlendMode::Additive, BlendMode::Overwrite] {
            let first = Renderer::render(32, 24, &individual, mode);
            let second = Renderer::render(32, 24, &individual, mode);
            assert_eq!(first.to_rgba8(), second.to_rgba8());
        }
    }
}

#[test]
fn test_fitness_is_non_negative() {
    let target = PixelBuffer::filled(32, 24, Color::new(12, 200, 99, 180));
    for seed in 0..10 {
        let individual = random_individual(seed, ShapeType::Circle);
        assert!(score(&individual, &target, BlendMode::AlphaOver) >= 0.0);
    }
}

#[test]
fn test_overwrite_cover_matches_target() {
    let red = Color::new(255, 0, 0, 255);
    let target = PixelBuffer::filled(2, 2, red);
    let mut individual = Individual::from_genes(vec![Gene::new(1, 1, Color::new(0, 0, 255, 255), ShapeType::Circle, 1)]);

    let partial = score(&individual, &target, BlendMode::Overwrite);
    individual.dna.push(Gene::new(1, 1, red, ShapeType::Square, 3));
    let covered = score(&individual, &target, BlendMode::Overwrite);

    assert!(partial > 0.0);
    assert_eq!(covered, 0.0);
}

#[test]
fn test_rgba8_adaptation() {
    let bytes: Vec<u8> = (0..24).collect();
    let buffer = PixelBuffer::from_rgba8(3, 2, &bytes).unwrap();

    assert_eq!(buffer.get(1, 0), Some(Color::new(4, 5, 6, 7)));
    assert_eq!(buffer.get(0, 1), Some(Color::new(12, 13, 14, 15)));
    assert_eq!(buffer.get(3, 0), None);
    assert_eq!(buffer.to_rgba8(), bytes);
}

#[test]
fn test_rgba8_errors() {
    assert!(matches!(
        PixelBuffer::from_rgba8(2, 2, &[0; 15]),
        Err(GenartError::ImageDecode(_))
    ));
    assert!(matches!(
        PixelBuffer::from_rgba8(0, 2, &[]),
        Err(GenartError::Configuration(_))
    ));
}

fn load_target(width: usize, height: usize, bytes: &[u8]) -> anyhow::Result<PixelBuffer> {
    Ok(PixelBuffer::from_rgba8(width, height, bytes)?)
}

#[test]
fn test_decode_failure_propagates_instead_of_substituting() {
    let err = load_target(4, 4, &[255; 10]).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<GenartError>(),
        Some(GenartError::ImageDecode(_))
    ));
}
