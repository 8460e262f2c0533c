//! Dispatch layer between drained events and the output drivers

use embedded_hal::serial::Write;

use crate::config;
use crate::drivers::SerialConsole;
use crate::segment::{self, SegmentOutput, INVALID_PATTERN};
use crate::shared::Events;

/// Consumes the events drained from the shared state each loop turn.
pub struct Application {
    pattern: u8,
}

impl Application {
    pub fn new() -> Self {
        Self {
            // The display boots showing the dash.
            pattern: INVALID_PATTERN,
        }
    }

    /// Pattern most recently applied to the display.
    pub fn current_pattern(&self) -> u8 {
        self.pattern
    }

    /// Renders a pending byte and answers a transmit request.
    ///
    /// The ID transmission blocks until every byte left the writer, so a
    /// second request can only be observed afterwards; overlapping
    /// transmissions cannot happen.
    pub fn update<S, W>(&mut self, events: Events, display: &mut S, console: &mut SerialConsole<W>)
    where
        S: SegmentOutput,
        W: Write<u8>,
    {
        if let Some(byte) = events.byte {
            self.pattern = segment::encode(byte);
            display.set_pattern(self.pattern);
            #[cfg(feature = "debug")]
            {
                console.debug("rx", byte);
                console.debug("pattern", self.pattern);
            }
        }

        if events.transmit {
            console.write_str(config::DEVICE_ID);
        }
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::SharedState;
    use core::convert::Infallible;

    #[derive(Default)]
    struct PatternLog {
        applied: Vec<u8>,
    }

    impl SegmentOutput for PatternLog {
        fn set_pattern(&mut self, pattern: u8) {
            self.applied.push(pattern);
        }
    }

    #[derive(Default)]
    struct TxLog {
        bytes: Vec<u8>,
    }

    impl Write<u8> for TxLog {
        type Error = Infallible;

        fn write(&mut self, byte: u8) -> nb::Result<(), Self::Error> {
            self.bytes.push(byte);
            Ok(())
        }

        fn flush(&mut self) -> nb::Result<(), Self::Error> {
            Ok(())
        }
    }

    #[test]
    fn pending_byte_reaches_the_display() {
        let mut app = Application::new();
        let mut display = PatternLog::default();
        let mut console = SerialConsole::new(TxLog::default());

        let state = SharedState::new();
        state.note_byte(b'7');
        app.update(state.take_events(), &mut display, &mut console);

        assert_eq!(display.applied, [0x07]);
        assert_eq!(app.current_pattern(), 0x07);
    }

    #[test]
    fn empty_events_leave_the_display_alone() {
        let mut app = Application::new();
        let mut display = PatternLog::default();
        let mut console = SerialConsole::new(TxLog::default());

        app.update(SharedState::new().take_events(), &mut display, &mut console);

        assert!(display.applied.is_empty());
        assert_eq!(app.current_pattern(), INVALID_PATTERN);
    }

    #[test]
    fn transmit_request_sends_the_full_id() {
        let mut app = Application::new();
        let mut display = PatternLog::default();
        let mut console = SerialConsole::new(TxLog::default());

        let state = SharedState::new();
        state.request_transmit();
        app.update(state.take_events(), &mut display, &mut console);

        assert!(console.release().bytes.ends_with(config::DEVICE_ID.as_bytes()));
        assert!(display.applied.is_empty());
    }

    #[test]
    fn byte_and_transmit_are_both_serviced_in_one_turn() {
        let mut app = Application::new();
        let mut display = PatternLog::default();
        let mut console = SerialConsole::new(TxLog::default());

        let state = SharedState::new();
        state.note_byte(b'f');
        state.request_transmit();
        app.update(state.take_events(), &mut display, &mut console);

        assert_eq!(display.applied, [0x71]);
        assert!(console.release().bytes.ends_with(config::DEVICE_ID.as_bytes()));
    }
}
