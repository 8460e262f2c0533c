//! Interrupt handlers and the shared state they feed
//!
//! Handlers run to completion and never block; they only store into
//! [`SHARED`], which the main loop drains under a critical section.

use avr_device::atmega328p::USART0;
use avr_device::interrupt::Mutex;

use hexseg_firmware::shared::SharedState;

/// Written by the handlers below, drained once per main-loop iteration.
pub static SHARED: Mutex<SharedState> = Mutex::new(SharedState::new());

/// RX complete: capture the byte, newest wins.
#[avr_device::interrupt(atmega328p)]
fn USART_RX() {
    let usart = unsafe { &*USART0::ptr() };
    let byte = usart.udr0.read().bits();
    avr_device::interrupt::free(|cs| {
        SHARED.borrow(cs).note_byte(byte);
    });
}

/// Falling edge on the button line raises the transmit request, leaving
/// debouncing to the hardware.
#[cfg(feature = "button-int0")]
#[avr_device::interrupt(atmega328p)]
fn INT0() {
    avr_device::interrupt::free(|cs| {
        SHARED.borrow(cs).request_transmit();
    });
}

/// Arms INT0 on the falling edge of PD2. The pull-up must already be on.
#[cfg(feature = "button-int0")]
pub fn arm_button_int0() {
    let exint = unsafe { &*avr_device::atmega328p::EXINT::ptr() };
    // ISC01 set, ISC00 clear: falling edge
    exint
        .eicra
        .modify(|r, w| unsafe { w.bits((r.bits() & !0x03) | 0x02) });
    exint.eimsk.modify(|_, w| w.int0().set_bit());
}
