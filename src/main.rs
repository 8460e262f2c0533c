//! Firmware entry point: peripheral bring-up, then the dispatch loop
#![cfg_attr(target_arch = "avr", no_std)]
#![cfg_attr(target_arch = "avr", no_main)]
#![cfg_attr(target_arch = "avr", feature(abi_avr_interrupt))]

#[cfg(target_arch = "avr")]
mod irq;

#[cfg(target_arch = "avr")]
mod firmware {
    use panic_halt as _;

    use avr_device::interrupt;

    use hexseg_firmware::application::Application;
    #[cfg(not(feature = "button-int0"))]
    use hexseg_firmware::drivers::{ButtonEvent, ButtonHandler};
    use hexseg_firmware::drivers::{SerialConsole, SevenSegment};
    #[cfg(not(feature = "button-int0"))]
    use hexseg_firmware::hal::Delay;
    use hexseg_firmware::hal::{board, Uart};

    use crate::irq;

    #[avr_device::entry]
    fn main() -> ! {
        let mut display = SevenSegment::new();
        let mut console = SerialConsole::new(Uart::new());

        #[cfg(not(feature = "button-int0"))]
        let mut button = ButtonHandler::new(
            board::Button::default().into_pull_up_input(),
            Delay::new(),
        );

        #[cfg(feature = "button-int0")]
        {
            // Pull-up first, then the edge interrupt.
            let _ = board::Button::default().into_pull_up_input();
            irq::arm_button_int0();
        }

        unsafe { interrupt::enable() };

        #[cfg(feature = "debug")]
        {
            ufmt::uwriteln!(
                &mut console,
                "hexseg firmware v{}\r",
                env!("CARGO_PKG_VERSION")
            )
            .ok();
            console.write_line("Ready...");
        }

        let mut app = Application::new();

        loop {
            #[cfg(not(feature = "button-int0"))]
            {
                if let Some(ButtonEvent::Pressed) = button.poll() {
                    interrupt::free(|cs| irq::SHARED.borrow(cs).request_transmit());
                }
            }

            let events = interrupt::free(|cs| irq::SHARED.borrow(cs).take_events());
            app.update(events, &mut display, &mut console);
        }
    }
}

#[cfg(not(target_arch = "avr"))]
fn main() {}
