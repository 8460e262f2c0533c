pub mod button_handler;
#[cfg(feature = "atmega328p")]
pub mod display;
pub mod serial_console;

pub use button_handler::{ButtonEvent, ButtonHandler};
#[cfg(feature = "atmega328p")]
pub use display::SevenSegment;
pub use serial_console::SerialConsole;
