use avr_device::atmega328p::PORTB;

use crate::segment::{SegmentOutput, INVALID_PATTERN};

/// Common-cathode seven-segment digit on port B, segments a-g on PB0-PB6.
pub struct SevenSegment {
    _private: (),
}

impl SevenSegment {
    /// Drives the segment lines as outputs and shows the dash until the
    /// first byte arrives.
    pub fn new() -> Self {
        let regs = unsafe { &*PORTB::ptr() };
        regs.ddrb.modify(|r, w| unsafe { w.bits(r.bits() | 0x7F) });
        regs.portb
            .modify(|r, w| unsafe { w.bits((r.bits() & 0x80) | INVALID_PATTERN) });
        Self { _private: () }
    }
}

impl SegmentOutput for SevenSegment {
    fn set_pattern(&mut self, pattern: u8) {
        // PB7 stays untouched; it belongs to the status LED.
        let regs = unsafe { &*PORTB::ptr() };
        regs.portb
            .modify(|r, w| unsafe { w.bits((r.bits() & 0x80) | (pattern & 0x7F)) });
    }
}

impl Default for SevenSegment {
    fn default() -> Self {
        Self::new()
    }
}
