use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::InputPin;

use crate::config;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ButtonEvent {
    Pressed,
    Released,
}

/// Debounced watcher for a single active-low button.
///
/// A raw edge is only reported once it survives the debounce interval:
/// sample, wait, sample again. The held latch keeps one physical press
/// from triggering twice; releasing the line re-arms it.
pub struct ButtonHandler<P, D> {
    pin: P,
    delay: D,
    debounce_ms: u16,
    held: bool,
}

impl<P: InputPin, D: DelayMs<u16>> ButtonHandler<P, D> {
    pub fn new(pin: P, delay: D) -> Self {
        Self::with_debounce(pin, delay, config::BUTTON_DEBOUNCE_MS)
    }

    pub fn with_debounce(pin: P, delay: D, debounce_ms: u16) -> Self {
        Self {
            pin,
            delay,
            debounce_ms,
            held: false,
        }
    }

    /// Samples the line once, confirming a fresh press across the
    /// debounce interval. Call from the main loop, never from an
    /// interrupt; the confirmation wait blocks.
    pub fn poll(&mut self) -> Option<ButtonEvent> {
        let asserted = self.sample();

        if self.held {
            if asserted {
                return None;
            }
            self.held = false;
            return Some(ButtonEvent::Released);
        }

        if !asserted {
            return None;
        }

        // Raw edge seen; wait out the bounce window and re-check.
        self.delay.delay_ms(self.debounce_ms);
        if !self.sample() {
            return None;
        }

        self.held = true;
        Some(ButtonEvent::Pressed)
    }

    fn sample(&self) -> bool {
        // Active low; a pin read error counts as released.
        self.pin.is_low().unwrap_or(false)
    }
}
