/// An RGBA pixel buffer representing a rendered image.
///
/// The host blits this to its display surface; nothing in here is display
/// specific beyond the byte layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterBuffer {
    pub width: u32,
    pub height: u32,
    /// RGBA pixel data, 4 bytes per pixel, row-major order.
    pub pixels: Vec<u8>,
}

impl RasterBuffer {
    /// Create a new buffer filled with opaque black.
    pub fn new(width: u32, height: u32) -> Self {
        let mut pixels = vec![0u8; width as usize * height as usize * 4];
        // Set alpha to 255 for all pixels.
        for chunk in pixels.chunks_exact_mut(4) {
            chunk[3] = 255;
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// The four RGBA bytes of the pixel at `(row, col)`.
    #[inline]
    pub fn pixel(&self, row: u32, col: u32) -> &[u8] {
        let idx = ((row * self.width + col) * 4) as usize;
        &self.pixels[idx..idx + 4]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer_is_black_opaque() {
        let buf = RasterBuffer::new(4, 4);
        assert_eq!(buf.pixels.len(), 4 * 4 * 4);
        for chunk in buf.pixels.chunks_exact(4) {
            assert_eq!(chunk, &[0, 0, 0, 255]);
        }
    }

    #[test]
    fn pixel_accessor_is_row_major() {
        let mut buf = RasterBuffer::new(3, 2);
        // Mark the pixel at row 1, col 2.
        let idx = ((1 * 3) + 2) * 4;
        buf.pixels[idx] = 200;
        assert_eq!(buf.pixel(1, 2), &[200, 0, 0, 255]);
        assert_eq!(buf.pixel(0, 0), &[0, 0, 0, 255]);
    }
}
