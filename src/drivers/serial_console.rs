use core::convert::Infallible;

use embedded_hal::serial::Write;
use ufmt::uWrite;

/// Text and hex output over any blocking serial writer.
///
/// The firmware hands it the UART; tests hand it a capture writer.
pub struct SerialConsole<W> {
    writer: W,
}

impl<W: Write<u8>> SerialConsole<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_byte(&mut self, byte: u8) {
        nb::block!(self.writer.write(byte)).ok();
    }

    pub fn write_str(&mut self, s: &str) {
        for byte in s.bytes() {
            self.write_byte(byte);
        }
    }

    pub fn write_line(&mut self, s: &str) {
        self.write_str(s);
        self.write_str("\r\n");
    }

    // Debug helper - print hex value
    pub fn write_hex(&mut self, val: u8) {
        const HEX_CHARS: [u8; 16] = *b"0123456789ABCDEF";
        self.write_byte(HEX_CHARS[(val >> 4) as usize]);
        self.write_byte(HEX_CHARS[(val & 0xF) as usize]);
    }

    // Print formatted debug info
    pub fn debug(&mut self, msg: &str, val: u8) {
        self.write_str("[DBG] ");
        self.write_str(msg);
        self.write_str(": 0x");
        self.write_hex(val);
        self.write_str("\r\n");
    }

    /// Gives the underlying writer back.
    pub fn release(self) -> W {
        self.writer
    }
}

impl<W: Write<u8>> uWrite for SerialConsole<W> {
    type Error = Infallible;

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        SerialConsole::write_str(self, s);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::serial::{Mock as SerialMock, Transaction};

    #[test]
    fn write_line_appends_crlf() {
        let mut console = SerialConsole::new(SerialMock::new(&[Transaction::write_many(
            b"ready\r\n".to_vec(),
        )]));
        console.write_line("ready");
        console.release().done();
    }

    #[test]
    fn write_hex_prints_both_nibbles() {
        let mut console = SerialConsole::new(SerialMock::new(&[Transaction::write_many(
            b"3F00".to_vec(),
        )]));
        console.write_hex(0x3F);
        console.write_hex(0x00);
        console.release().done();
    }

    #[test]
    fn debug_formats_message_and_value() {
        let mut console = SerialConsole::new(SerialMock::new(&[Transaction::write_many(
            b"[DBG] rx: 0x37\r\n".to_vec(),
        )]));
        console.debug("rx", 0x37);
        console.release().done();
    }

    #[test]
    fn console_is_a_ufmt_writer() {
        let mut console = SerialConsole::new(SerialMock::new(&[Transaction::write_many(
            b"id HEXSEG-01\n".to_vec(),
        )]));
        ufmt::uwriteln!(&mut console, "id {}", crate::config::DEVICE_ID).ok();
        console.release().done();
    }
}
