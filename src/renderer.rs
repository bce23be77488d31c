//! Clipped software compositor over a [`PixelBuffer`]

use crate::display::{Pixel, PixelBuffer};
use crate::geometry::Rect;

/// Rasterizes fills and blits into an owned pixel buffer.
///
/// Every draw request is intersected with the target area first, so the
/// unchecked pixel access underneath never sees an out-of-range coordinate.
/// Requests that clip to nothing are silent no-ops.
pub struct Renderer {
    fill_color: Pixel,
    image: PixelBuffer,
}

impl Renderer {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            fill_color: Pixel::default(),
            image: PixelBuffer::new(width, height),
        }
    }

    /// Set the color used by `clear` and `fill_rect`. Does not touch the
    /// buffer.
    pub fn set_fill_color(&mut self, pixel: Pixel) {
        self.fill_color = pixel;
    }

    /// Fill the whole target with the current fill color.
    pub fn clear(&mut self) {
        self.fill_rect(0, 0, self.image.width(), self.image.height());
    }

    /// Fill `[x, x+width) x [y, y+height)` with the current fill color,
    /// clipped to the target bounds.
    pub fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        let render_area = self.target_area();
        let fill_area = Rect::new(x, y, x + width, y + height);

        if let Some(overlap) = render_area.intersection(&fill_area) {
            for py in overlap.top..overlap.bottom {
                for px in overlap.left..overlap.right {
                    self.image.set_pixel(px, py, self.fill_color);
                }
            }
        }
    }

    /// Copy `source` 1:1 with its top-left corner at (x, y), clipped to the
    /// target bounds. No blending, no scaling; each destination pixel takes
    /// the source pixel at the destination coordinate minus the placement
    /// offset.
    pub fn draw_image(&mut self, x: i32, y: i32, source: &PixelBuffer) {
        let render_area = self.target_area();
        let image_area = Rect::new(x, y, x + source.width(), y + source.height());

        if let Some(overlap) = render_area.intersection(&image_area) {
            for py in overlap.top..overlap.bottom {
                for px in overlap.left..overlap.right {
                    self.image.set_pixel(px, py, source.get_pixel(px - x, py - y));
                }
            }
        }
    }

    /// Raw bytes of the rendered image, ready for presentation.
    pub fn image_data(&self) -> &[u8] {
        self.image.data()
    }

    fn target_area(&self) -> Rect {
        Rect::new(0, 0, self.image.width(), self.image.height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkerboard(width: i32, height: i32) -> PixelBuffer {
        let mut buffer = PixelBuffer::new(width, height);
        for y in 0..height {
            for x in 0..width {
                // Unique per-cell color so misrouted copies are detectable
                buffer.set_pixel(x, y, Pixel::new(x as u8, y as u8, (x + y) as u8, 255));
            }
        }
        buffer
    }

    #[test]
    fn test_clear_fills_everything() {
        let mut renderer = Renderer::new(4, 4);
        let green = Pixel::new(0, 255, 0, 255);
        renderer.set_fill_color(green);
        renderer.clear();

        assert!(renderer.image_data().chunks_exact(4).all(|px| px == [0, 255, 0, 255]));
    }

    #[test]
    fn test_fill_rect_clips_to_target() {
        let mut renderer = Renderer::new(4, 4);
        renderer.set_fill_color(Pixel::new(255, 255, 255, 255));
        renderer.fill_rect(2, 2, 10, 10);

        let painted = renderer
            .image_data()
            .chunks_exact(4)
            .filter(|px| *px == [255, 255, 255, 255])
            .count();
        assert_eq!(painted, 4); // only the 2x2 corner inside the target
    }

    #[test]
    fn test_fill_rect_outside_target_is_noop() {
        let mut renderer = Renderer::new(4, 4);
        renderer.set_fill_color(Pixel::new(255, 255, 255, 255));
        renderer.fill_rect(-10, -10, 5, 5);
        renderer.fill_rect(4, 0, 3, 3);

        assert!(renderer.image_data().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_draw_image_identity_copy() {
        let source = checkerboard(6, 6);
        let mut renderer = Renderer::new(6, 6);
        renderer.draw_image(0, 0, &source);

        assert_eq!(renderer.image_data(), source.data());
    }

    #[test]
    fn test_draw_image_offset_uses_row_correct_source_index() {
        // Regression pin: the source row must come from the destination row
        // minus the vertical offset, not from the destination column.
        let source = checkerboard(2, 2);
        let mut renderer = Renderer::new(4, 4);
        renderer.draw_image(1, 2, &source);

        let rendered = {
            let mut copy = PixelBuffer::new(4, 4);
            for y in 0..4 {
                for x in 0..4 {
                    let idx = ((x + y * 4) * 4) as usize;
                    let px = &renderer.image_data()[idx..idx + 4];
                    copy.set_pixel(x, y, Pixel::new(px[0], px[1], px[2], px[3]));
                }
            }
            copy
        };

        assert_eq!(rendered.get_pixel(1, 2), source.get_pixel(0, 0));
        assert_eq!(rendered.get_pixel(2, 2), source.get_pixel(1, 0));
        assert_eq!(rendered.get_pixel(1, 3), source.get_pixel(0, 1));
        assert_eq!(rendered.get_pixel(2, 3), source.get_pixel(1, 1));
        // Pixels outside the blit remain untouched
        assert_eq!(rendered.get_pixel(0, 0), Pixel::default());
        assert_eq!(rendered.get_pixel(3, 1), Pixel::default());
    }

    #[test]
    fn test_draw_image_clips_at_bottom_right() {
        let source = checkerboard(3, 3);
        let mut renderer = Renderer::new(4, 4);
        renderer.draw_image(2, 2, &source);

        let idx = |x: i32, y: i32| ((x + y * 4) * 4) as usize;
        // Only the 2x2 overlap was written
        for (x, y, sx, sy) in [(2, 2, 0, 0), (3, 2, 1, 0), (2, 3, 0, 1), (3, 3, 1, 1)] {
            let px = &renderer.image_data()[idx(x, y)..idx(x, y) + 4];
            let src = source.get_pixel(sx, sy);
            assert_eq!(px, [src.b, src.g, src.r, src.a]);
        }
        assert_eq!(&renderer.image_data()[idx(1, 1)..idx(1, 1) + 4], [0, 0, 0, 0]);
    }
}
