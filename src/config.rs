//! Configuration constants for the hex terminal firmware

/// CPU frequency in Hz
pub const CPU_FREQ_HZ: u32 = 16_000_000;

/// UART baud rate
pub const UART_BAUD: u32 = 4_800;

/// UBRR register value for the configured baud rate (normal speed mode)
pub const UBRR_VALUE: u16 = (CPU_FREQ_HZ / (16 * UART_BAUD) - 1) as u16;

/// Button debounce time in milliseconds
pub const BUTTON_DEBOUNCE_MS: u16 = 50;

/// Identification string transmitted on a confirmed button press
pub const DEVICE_ID: &str = "HEXSEG-01";
