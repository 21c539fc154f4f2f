//! Sum of absolute differences over all four channels of every pixel.
//! This is an error metric: 0 is a perfect match and smaller is fitter.
use crate::engines::evaluation::renderer::Renderer;
use crate::engines::generation::Individual;
use crate::types::{BlendMode, Color, PixelBuffer};

/// Render `individual` at the target's size and score it against the target.
pub fn score(individual: &Individual, target: &PixelBuffer, blend_mode: BlendMode) -> f64 {
    let rendered = Renderer::render(target.width(), target.height(), individual, blend_mode);
    sad(&rendered, target) as f64
}

/// Error between two equally sized buffers.
pub fn sad(rendered: &PixelBuffer, target: &PixelBuffer) -> u64 {
    debug_assert_eq!(rendered.pixels().len(), target.pixels().len());

    rendered
        .pixels()
        .iter()
        .zip(target.pixels())
        .map(|(a, b)| pixel_distance(*a, *b))
        .sum()
}

#[inline]
fn pixel_distance(a: Color, b: Color) -> u64 {
    (a.r.abs_diff(b.r) as u64)
        + (a.g.abs_diff(b.g) as u64)
        + (a.b.abs_diff(b.b) as u64)
        + (a.a.abs_diff(b.a) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::generation::Gene;
    use crate::types::ShapeType;

    #[test]
    fn test_empty_individual_against_solid_red() {
        let target = PixelBuffer::filled(2, 2, Color::new(255, 0, 0, 255));
        // each pixel differs by 255 in r and a
        assert_eq!(score(&Individual::new(), &target, BlendMode::AlphaOver), 4.0 * 510.0);
    }

    #[test]
    fn test_perfect_match_scores_zero() {
        let red = Color::new(255, 0, 0, 255);
        let target = PixelBuffer::filled(2, 2, red);
        let cover = Individual::from_genes(vec![Gene::new(0, 0, red, ShapeType::Square, 4)]);

        assert_eq!(score(&cover, &target, BlendMode::Overwrite), 0.0);
    }

    #[test]
    fn test_score_is_symmetric_per_channel() {
        let a = PixelBuffer::filled(3, 1, Color::new(10, 20, 30, 40));
        let b = PixelBuffer::filled(3, 1, Color::new(40, 30, 20, 10));
        assert_eq!(sad(&a, &b), sad(&b, &a));
        assert_eq!(sad(&a, &b), 3 * (30 + 10 + 10 + 30));
    }
}
