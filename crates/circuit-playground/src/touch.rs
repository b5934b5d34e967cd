//! Lazily bound capacitive touch pads
//!
//! Binding a pad claims a touch channel and calibrates it, so nothing is bound
//! until the pad is first read. A signed threshold adjustment accumulates
//! across calls and is applied to every pad, whether it is bound already or
//! gets bound later.

use playground_hal::{TouchController, TouchPin, TouchSensor};

/// State of one touch pad
#[derive(Debug)]
pub enum TouchSlot<S> {
    /// Not read yet; no sensor allocated
    Unbound(TouchPin),
    /// Bound to a sensor whose calibrated threshold was `base`
    Bound {
        /// Sensor handle
        sensor: S,
        /// Threshold the sensor reported when it was bound
        base: u16,
    },
}

impl<S> TouchSlot<S> {
    /// Whether a sensor has been allocated
    pub fn is_bound(&self) -> bool {
        matches!(self, Self::Bound { .. })
    }
}

/// `base + adjustment`, clamped to the sensor's range
fn adjusted(base: u16, adjustment: i32) -> u16 {
    let value = i32::from(base).saturating_add(adjustment);
    u16::try_from(value.clamp(0, i32::from(u16::MAX))).unwrap_or(u16::MAX)
}

/// The seven touch pads and the controller that binds them
pub struct TouchPads<C: TouchController> {
    controller: C,
    slots: [TouchSlot<C::Sensor>; 7],
    adjustment: i32,
}

impl<C: TouchController> TouchPads<C> {
    /// All pads unbound, no adjustment
    pub fn new(controller: C) -> Self {
        Self {
            controller,
            slots: TouchPin::ALL.map(TouchSlot::Unbound),
            adjustment: 0,
        }
    }

    fn slot(&self, pin: TouchPin) -> &TouchSlot<C::Sensor> {
        match pin {
            TouchPin::A1 => &self.slots[0],
            TouchPin::A2 => &self.slots[1],
            TouchPin::A3 => &self.slots[2],
            TouchPin::A4 => &self.slots[3],
            TouchPin::A5 => &self.slots[4],
            TouchPin::A6 => &self.slots[5],
            TouchPin::Tx => &self.slots[6],
        }
    }

    fn slot_mut(
        slots: &mut [TouchSlot<C::Sensor>; 7],
        pin: TouchPin,
    ) -> &mut TouchSlot<C::Sensor> {
        match pin {
            TouchPin::A1 => &mut slots[0],
            TouchPin::A2 => &mut slots[1],
            TouchPin::A3 => &mut slots[2],
            TouchPin::A4 => &mut slots[3],
            TouchPin::A5 => &mut slots[4],
            TouchPin::A6 => &mut slots[5],
            TouchPin::Tx => &mut slots[6],
        }
    }

    /// Read `pin`, binding it on first use
    pub fn touch(&mut self, pin: TouchPin) -> Result<bool, C::Error> {
        let adjustment = self.adjustment;
        let slot = Self::slot_mut(&mut self.slots, pin);
        match *slot {
            TouchSlot::Bound { ref mut sensor, .. } => sensor.is_touched(),
            TouchSlot::Unbound(pin) => {
                let mut sensor = self.controller.bind(pin)?;
                let base = sensor.threshold();
                sensor.set_threshold(adjusted(base, adjustment));
                debug!(
                    "touch {} bound, threshold {}",
                    pin.name(),
                    sensor.threshold()
                );
                let touched = sensor.is_touched();
                *slot = TouchSlot::Bound { sensor, base };
                touched
            }
        }
    }

    /// Shift every pad's threshold by `delta`.
    ///
    /// Adjustments accumulate; unbound pads pick up the total when bound.
    pub fn adjust_threshold(&mut self, delta: i32) {
        self.adjustment = self.adjustment.saturating_add(delta);
        let adjustment = self.adjustment;
        for slot in &mut self.slots {
            if let TouchSlot::Bound { sensor, base } = slot {
                sensor.set_threshold(adjusted(*base, adjustment));
            }
        }
        debug!("touch threshold adjustment now {}", adjustment);
    }

    /// Running threshold adjustment
    pub fn adjustment(&self) -> i32 {
        self.adjustment
    }

    /// Sensor bound to `pin`, if it has been read
    pub fn sensor(&self, pin: TouchPin) -> Option<&C::Sensor> {
        match self.slot(pin) {
            TouchSlot::Bound { sensor, .. } => Some(sensor),
            TouchSlot::Unbound(_) => None,
        }
    }

    /// Whether `pin` has been bound
    pub fn is_bound(&self, pin: TouchPin) -> bool {
        self.slot(pin).is_bound()
    }
}
