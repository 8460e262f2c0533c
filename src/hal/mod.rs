pub mod gpio;
pub mod uart;
pub mod timer;

// Re-export commonly used types
pub use gpio::{Pin, Input, Output};
pub use gpio::board;
pub use uart::Uart;
pub use timer::{Delay, delay_ms};
