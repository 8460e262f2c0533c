use avr_device::atmega328p::TC0;

use embedded_hal::blocking::delay::DelayMs;

/// Busy-wait delay on Timer0.
///
/// 16MHz / 64 = 250kHz, so 250 counts are one millisecond. The timer is
/// reconfigured on every call and stopped afterwards; nothing else in
/// the firmware owns TC0.
pub fn delay_ms(ms: u16) {
    let p = unsafe { &*TC0::ptr() };

    // Normal mode, prescaler 64
    p.tccr0a.write(|w| unsafe { w.bits(0) });
    p.tccr0b.write(|w| w.cs0().prescale_64());

    for _ in 0..ms {
        p.tcnt0.write(|w| w.bits(0));
        while p.tcnt0.read().bits() < 250 {}
    }

    p.tccr0b.write(|w| w.cs0().no_clock());
}

/// `DelayMs` provider backed by [`delay_ms`].
pub struct Delay {
    _private: (),
}

impl Delay {
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl DelayMs<u16> for Delay {
    fn delay_ms(&mut self, ms: u16) {
        delay_ms(ms);
    }
}

impl Default for Delay {
    fn default() -> Self {
        Self::new()
    }
}
