//! In-memory 128x64 1-bit canvas that the tests render into and read back.

use core::convert::Infallible;

use embedded_graphics::{pixelcolor::BinaryColor, prelude::*, primitives::Rectangle};

pub const WIDTH: u32 = 128;
pub const HEIGHT: u32 = 64;

const BUFFER_LEN: usize = (WIDTH * HEIGHT / 8) as usize;

#[derive(Clone)]
pub struct FrameBuffer {
    buf: [u8; BUFFER_LEN],
}

impl FrameBuffer {
    pub const fn new() -> Self {
        Self {
            buf: [0; BUFFER_LEN],
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    // (byte index, bit mask) for an in-bounds point, one row after another
    fn locate(p: Point) -> Option<(usize, u8)> {
        if p.x < 0 || p.y < 0 || p.x >= WIDTH as i32 || p.y >= HEIGHT as i32 {
            return None;
        }
        let bit = p.y as usize * WIDTH as usize + p.x as usize;
        Some((bit / 8, 1 << (bit % 8)))
    }

    pub fn pixel(&self, p: Point) -> bool {
        Self::locate(p)
            .map(|(i, mask)| self.buf[i] & mask != 0)
            .unwrap_or(false)
    }

    pub fn lit_pixels(&self) -> u32 {
        self.buf.iter().map(|b| b.count_ones()).sum()
    }

    /// True if any pixel inside `area` is lit.
    pub fn any_lit(&self, area: &Rectangle) -> bool {
        area.points().any(|p| self.pixel(p))
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(WIDTH, HEIGHT)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<BinaryColor>>,
    {
        for Pixel(p, c) in pixels {
            if let Some((i, mask)) = Self::locate(p) {
                if c.is_on() {
                    self.buf[i] |= mask;
                } else {
                    self.buf[i] &= !mask;
                }
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: BinaryColor) -> Result<(), Self::Error> {
        self.buf.fill(if color.is_on() { 0xFF } else { 0x00 });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::primitives::PrimitiveStyle;

    #[test]
    fn out_of_bounds_is_clipped() {
        let mut fb = FrameBuffer::new();
        let off_screen = [Point::new(-1, 0), Point::new(128, 0), Point::new(0, 64)];
        fb.draw_iter(off_screen.map(|p| Pixel(p, BinaryColor::On)))
            .unwrap();
        assert_eq!(fb.lit_pixels(), 0);
        assert!(!fb.pixel(Point::new(-5, -5)));
    }

    #[test]
    fn clear_and_fill() {
        let mut fb = FrameBuffer::new();
        fb.clear(BinaryColor::On).unwrap();
        assert_eq!(fb.lit_pixels(), WIDTH * HEIGHT);
        fb.clear(BinaryColor::Off).unwrap();
        assert_eq!(fb.lit_pixels(), 0);

        Rectangle::new(Point::new(2, 3), Size::new(4, 5))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut fb)
            .unwrap();
        assert_eq!(fb.lit_pixels(), 20);
        assert!(fb.pixel(Point::new(5, 7)));
        assert!(!fb.pixel(Point::new(6, 7)));
        assert!(fb.any_lit(&Rectangle::new(Point::new(0, 0), Size::new(3, 4))));
        assert!(!fb.any_lit(&Rectangle::new(Point::new(6, 0), Size::new(10, 10))));
    }
}
