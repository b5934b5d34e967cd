//! Debounced "pressed since last poll" button latch.
//!
//! Bit `n` of every mask is button `n` (bit 0 = A, bit 1 = B on this board).
//! A button is latched once it reads pressed on two consecutive samples, so a
//! single-sample glitch never registers.

/// Button poller capability
pub trait ButtonPoller {
    /// Error type
    type Error;

    /// Buttons pressed since the previous call, as a bitmask
    fn get_pressed(&mut self) -> Result<u8, Self::Error>;

    /// Feed one instantaneous sample of the button lines.
    ///
    /// Pollers that scan the pins themselves (timer interrupt, DMA) ignore
    /// this; the default does nothing.
    fn sample(&mut self, current: u8) {
        let _ = current;
    }
}

/// Software debouncer for up to eight buttons
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GamePad {
    last: u8,
    pressed: u8,
}

impl GamePad {
    /// Latch with nothing pressed
    pub const fn new() -> Self {
        Self {
            last: 0,
            pressed: 0,
        }
    }

    /// Record one sample; call at a steady rate (~60 Hz).
    pub fn tick(&mut self, current: u8) {
        self.pressed |= self.last & current;
        self.last = current;
    }

    /// Read and re-arm the latch.
    ///
    /// Buttons still held at the time of the call stay latched, so a held
    /// button keeps reporting until it is released.
    pub fn take_pressed(&mut self) -> u8 {
        let pressed = self.pressed;
        self.pressed = self.last;
        pressed
    }
}

impl ButtonPoller for GamePad {
    type Error = core::convert::Infallible;

    fn get_pressed(&mut self) -> Result<u8, Self::Error> {
        Ok(self.take_pressed())
    }

    fn sample(&mut self, current: u8) {
        self.tick(current);
    }
}
