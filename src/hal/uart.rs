use avr_device::atmega328p::USART0;
use core::convert::Infallible;

use embedded_hal::serial::Write;

use crate::config;

/// USART0 in asynchronous 8N1 mode.
///
/// Transmit busy-waits on the data register. Receive is interrupt-driven;
/// the RX-complete handler reads UDR0 directly, so the driver itself
/// carries no receive path.
pub struct Uart {
    tx_started: bool,
}

impl Uart {
    /// Sets the baud rate and enables TX, RX and the RX-complete
    /// interrupt. Call once at startup.
    pub fn new() -> Self {
        let p = unsafe { &*USART0::ptr() };

        p.ubrr0.write(|w| w.bits(config::UBRR_VALUE));

        // Asynchronous, 8 data bits, no parity, 1 stop bit
        p.ucsr0c.write(|w| unsafe { w.bits(0x06) });

        // TX, RX, RX complete interrupt
        p.ucsr0b
            .write(|w| w.txen0().set_bit().rxen0().set_bit().rxcie0().set_bit());

        Self { tx_started: false }
    }
}

impl Write<u8> for Uart {
    type Error = Infallible;

    fn write(&mut self, byte: u8) -> nb::Result<(), Self::Error> {
        let p = unsafe { &*USART0::ptr() };
        if p.ucsr0a.read().udre0().bit_is_clear() {
            return Err(nb::Error::WouldBlock);
        }
        p.udr0.write(|w| w.bits(byte));
        // TXC0 is sticky; writing a one after the UDR0 load clears it, so
        // it next sets once this byte has left the shift register.
        p.ucsr0a.write(|w| w.txc0().set_bit());
        self.tx_started = true;
        Ok(())
    }

    fn flush(&mut self) -> nb::Result<(), Self::Error> {
        if !self.tx_started {
            return Ok(());
        }
        let p = unsafe { &*USART0::ptr() };
        // UDRE0 only says the buffer is free; TXC0 waits out the shift
        // register as well.
        if p.ucsr0a.read().txc0().bit_is_clear() {
            return Err(nb::Error::WouldBlock);
        }
        Ok(())
    }
}

impl Default for Uart {
    fn default() -> Self {
        Self::new()
    }
}
