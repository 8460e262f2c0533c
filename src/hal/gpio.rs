use avr_device::atmega328p::{PORTB, PORTC, PORTD};
use core::convert::Infallible;
use core::marker::PhantomData;

use embedded_hal::digital::v2::InputPin;

pub trait PinMode {}
pub struct Input;
pub struct Output;
impl PinMode for Input {}
impl PinMode for Output {}

#[derive(Debug)]
pub struct Pin<PORT, const P: u8, MODE> {
    _port: PhantomData<PORT>,
    _mode: PhantomData<MODE>,
}

impl<PORT, const P: u8, MODE> Default for Pin<PORT, P, MODE> {
    fn default() -> Self {
        Pin {
            _port: PhantomData,
            _mode: PhantomData,
        }
    }
}

macro_rules! impl_port {
    ($PORT:ident, $ddr:ident, $port:ident, $pin:ident) => {
        impl<const P: u8, MODE: PinMode> Pin<$PORT, P, MODE> {
            pub fn into_output(self) -> Pin<$PORT, P, Output> {
                // Set DDRx bit
                let regs = unsafe { &*$PORT::ptr() };
                regs.$ddr.modify(|r, w| unsafe { w.bits(r.bits() | (1 << P)) });
                Pin::default()
            }

            pub fn into_input(self) -> Pin<$PORT, P, Input> {
                // Clear DDRx bit and disable the pull-up
                let regs = unsafe { &*$PORT::ptr() };
                regs.$ddr.modify(|r, w| unsafe { w.bits(r.bits() & !(1 << P)) });
                regs.$port.modify(|r, w| unsafe { w.bits(r.bits() & !(1 << P)) });
                Pin::default()
            }

            pub fn into_pull_up_input(self) -> Pin<$PORT, P, Input> {
                // Clear DDRx bit, PORTx bit high enables the pull-up
                let regs = unsafe { &*$PORT::ptr() };
                regs.$ddr.modify(|r, w| unsafe { w.bits(r.bits() & !(1 << P)) });
                regs.$port.modify(|r, w| unsafe { w.bits(r.bits() | (1 << P)) });
                Pin::default()
            }
        }

        impl<const P: u8> Pin<$PORT, P, Output> {
            #[inline]
            pub fn set_high(&mut self) {
                let regs = unsafe { &*$PORT::ptr() };
                regs.$port.modify(|r, w| unsafe { w.bits(r.bits() | (1 << P)) });
            }

            #[inline]
            pub fn set_low(&mut self) {
                let regs = unsafe { &*$PORT::ptr() };
                regs.$port.modify(|r, w| unsafe { w.bits(r.bits() & !(1 << P)) });
            }

            #[inline]
            pub fn toggle(&mut self) {
                // Writing 1 to PINx toggles the output latch
                let regs = unsafe { &*$PORT::ptr() };
                regs.$pin.write(|w| unsafe { w.bits(1 << P) });
            }
        }

        impl<const P: u8> InputPin for Pin<$PORT, P, Input> {
            type Error = Infallible;

            #[inline]
            fn is_high(&self) -> Result<bool, Self::Error> {
                let regs = unsafe { &*$PORT::ptr() };
                Ok(regs.$pin.read().bits() & (1 << P) != 0)
            }

            #[inline]
            fn is_low(&self) -> Result<bool, Self::Error> {
                self.is_high().map(|high| !high)
            }
        }
    };
}

impl_port!(PORTB, ddrb, portb, pinb);
impl_port!(PORTC, ddrc, portc, pinc);
impl_port!(PORTD, ddrd, portd, pind);

// Board pin assignments
pub mod board {
    use super::*;

    /// Push button on PD2 (INT0), active low, internal pull-up
    pub type Button = Pin<PORTD, 2, Input>;

    /// Spare indicator LED on PB7, the one port B line the display leaves free
    pub type StatusLed = Pin<PORTB, 7, Output>;
}
