use crate::engines::generation::{Gene, Individual};
use crate::types::{BlendMode, Color, PixelBuffer, ShapeType};

/// Rasterizes individuals onto a transparent black canvas. Stateless.
pub struct Renderer;

impl Renderer {
    /// Paint every gene in DNA order. Same inputs always give the same buffer.
    pub fn render(width: usize, height: usize, individual: &Individual, blend_mode: BlendMode) -> PixelBuffer {
        let mut canvas = PixelBuffer::new(width, height);
        for gene in &individual.dna {
            draw_gene(&mut canvas, gene, blend_mode);
        }
        canvas
    }
}

/// Composite `src` over `dst` with the given rule.
#[inline]
pub fn blend(dst: Color, src: Color, blend_mode: BlendMode) -> Color {
    match blend_mode {
        BlendMode::AlphaOver => {
            let a = src.a as u32;
            let inv = 255 - a;
            let over = |s: u8, d: u8| ((s as u32 * a + d as u32 * inv) / 255).min(255) as u8;
            Color {
                r: over(src.r, dst.r),
                g: over(src.g, dst.g),
                b: over(src.b, dst.b),
                a: (a + dst.a as u32 * inv / 255).min(255) as u8,
            }
        }
        BlendMode::Additive => Color {
            r: dst.r.saturating_add(src.r),
            g: dst.g.saturating_add(src.g),
            b: dst.b.saturating_add(src.b),
            a: dst.a.saturating_add(src.a),
        },
        BlendMode::Overwrite => src,
    }
}

/// Inclusive-exclusive pixel bounds of a gene, clipped to the canvas.
/// Circles span `[x - r, x + r]`; squares are centred on the position.
fn clipped_bounds(gene: &Gene, width: usize, height: usize) -> Option<(usize, usize, usize, usize)> {
    let (x, y, size) = (gene.position.x as i64, gene.position.y as i64, gene.size.max(1) as i64);
    let (x0, y0, x1, y1) = match gene.shape {
        ShapeType::Circle => (x - size, y - size, x + size + 1, y + size + 1),
        ShapeType::Square => {
            let left = x - size / 2;
            let top = y - size / 2;
            (left, top, left + size, top + size)
        }
    };

    let x0 = x0.max(0);
    let y0 = y0.max(0);
    let x1 = x1.min(width as i64);
    let y1 = y1.min(height as i64);
    if x0 >= x1 || y0 >= y1 {
        return None; // entirely off-canvas
    }
    Some((x0 as usize, y0 as usize, x1 as usize, y1 as usize))
}

fn draw_gene(canvas: &mut PixelBuffer, gene: &Gene, blend_mode: BlendMode) {
    let width = canvas.width();
    let Some((x0, y0, x1, y1)) = clipped_bounds(gene, width, canvas.height()) else {
        return;
    };

    let cx = gene.position.x as i64;
    let cy = gene.position.y as i64;
    let r2 = (gene.size as i64) * (gene.size as i64);
    let pixels = canvas.pixels_mut();

    for py in y0..y1 {
        let row = py * width;
        for px in x0..x1 {
            if gene.shape == ShapeType::Circle {
                let dx = px as i64 - cx;
                let dy = py as i64 - cy;
                if dx * dx + dy * dy > r2 {
                    continue;
                }
            }
            let dst = &mut pixels[row + px];
            *dst = blend(*dst, gene.color, blend_mode);
        }
    }
}
