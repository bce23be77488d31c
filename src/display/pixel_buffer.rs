use serde::{Deserialize, Serialize};

/// One 32-bit color value. Channels are independent bytes; writing a pixel
/// overwrites all four, there is no blending or premultiplication.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pixel {
    pub b: u8,
    pub g: u8,
    pub r: u8,
    pub a: u8,
}

impl Pixel {
    pub const fn new(b: u8, g: u8, r: u8, a: u8) -> Self {
        Self { b, g, r, a }
    }
}

const BYTES_PER_PIXEL: usize = 4;

/// BGRA8888 pixel buffer for software rendering.
///
/// The byte layout is row-major, 4 bytes per pixel in B,G,R,A order - exactly
/// what `Display::present` uploads to the streaming texture, so no format
/// conversion happens anywhere between rasterization and presentation.
///
/// Pixel access is deliberately not clipped: the renderer intersects every
/// draw request with the buffer bounds before touching pixels, so per-pixel
/// bounds checks would only cost time in the inner loops. Out-of-range
/// coordinates are a caller bug and panic via slice indexing.
pub struct PixelBuffer {
    data: Vec<u8>,
    width: i32,
    height: i32,
}

impl PixelBuffer {
    /// Create a zero-initialized buffer. Panics if either dimension is not
    /// positive.
    pub fn new(width: i32, height: i32) -> Self {
        assert!(
            width > 0 && height > 0,
            "pixel buffer dimensions must be positive, got {}x{}",
            width,
            height
        );
        Self {
            data: vec![0; width as usize * height as usize * BYTES_PER_PIXEL],
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Byte offset of the pixel at (x, y).
    #[inline]
    fn pixel_index(&self, x: i32, y: i32) -> usize {
        (x + y * self.width) as usize * BYTES_PER_PIXEL
    }

    /// Overwrite the four channel bytes at (x, y). The caller must pass
    /// in-range coordinates.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, pixel: Pixel) {
        let idx = self.pixel_index(x, y);
        self.data[idx] = pixel.b;
        self.data[idx + 1] = pixel.g;
        self.data[idx + 2] = pixel.r;
        self.data[idx + 3] = pixel.a;
    }

    /// Read the pixel at (x, y). The caller must pass in-range coordinates.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Pixel {
        let idx = self.pixel_index(x, y);
        Pixel {
            b: self.data[idx],
            g: self.data[idx + 1],
            r: self.data[idx + 2],
            a: self.data[idx + 3],
        }
    }

    /// Raw bytes for texture upload, laid out exactly as stored.
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer_is_zeroed() {
        let buffer = PixelBuffer::new(4, 3);
        assert_eq!(buffer.data().len(), 4 * 3 * 4);
        assert!(buffer.data().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_set_pixel_writes_bgra_order() {
        let mut buffer = PixelBuffer::new(3, 2);
        buffer.set_pixel(2, 1, Pixel::new(10, 20, 30, 40));

        let idx = (2 + 3) * 4;
        assert_eq!(&buffer.data()[idx..idx + 4], &[10, 20, 30, 40]);
    }

    #[test]
    fn test_get_pixel_round_trips() {
        let mut buffer = PixelBuffer::new(5, 5);
        let pixel = Pixel::new(1, 2, 3, 4);
        buffer.set_pixel(3, 4, pixel);
        assert_eq!(buffer.get_pixel(3, 4), pixel);
        assert_eq!(buffer.get_pixel(0, 0), Pixel::default());
    }

    #[test]
    #[should_panic(expected = "dimensions must be positive")]
    fn test_zero_width_panics() {
        let _ = PixelBuffer::new(0, 10);
    }
}
