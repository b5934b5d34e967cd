//! Addressable RGB LED strip abstraction
//!
//! Colours use [`Rgb888`] from `embedded-graphics` so the ring can share
//! colour constants with display code.

pub use embedded_graphics::pixelcolor::{Rgb888, RgbColor};

/// Build a colour from `0xRRGGBB`
pub const fn color_from_hex(hex: u32) -> Rgb888 {
    let [_, r, g, b] = hex.to_be_bytes();
    Rgb888::new(r, g, b)
}

/// Build a colour from an `(r, g, b)` tuple
pub const fn color_from_tuple((r, g, b): (u8, u8, u8)) -> Rgb888 {
    Rgb888::new(r, g, b)
}

/// Addressable LED strip driver capability
///
/// Buffering, gamma and when data reaches the LEDs are up to the driver;
/// callers that batch updates call [`PixelStrip::show`] once at the end.
pub trait PixelStrip {
    /// Error type
    type Error;

    /// Number of pixels on the strip
    fn len(&self) -> usize;

    /// Whether the strip has no pixels
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Global brightness, `0.0..=1.0`
    fn brightness(&self) -> f32;

    /// Set global brightness; values outside `0.0..=1.0` are clamped
    fn set_brightness(&mut self, brightness: f32) -> Result<(), Self::Error>;

    /// Colour last assigned to `index`, `None` past the end
    fn pixel(&self, index: usize) -> Option<Rgb888>;

    /// Assign a colour to `index`
    fn set_pixel(&mut self, index: usize, color: Rgb888) -> Result<(), Self::Error>;

    /// Assign one colour to every pixel
    fn fill(&mut self, color: Rgb888) -> Result<(), Self::Error> {
        for index in 0..self.len() {
            self.set_pixel(index, color)?;
        }
        Ok(())
    }

    /// Push the buffered colours to the LEDs
    fn show(&mut self) -> Result<(), Self::Error>;
}
