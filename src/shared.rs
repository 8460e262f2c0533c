//! State shared between interrupt context and the main loop

use core::cell::Cell;

/// One main-loop iteration's worth of drained events.
#[derive(Copy, Clone, Debug)]
pub struct Events {
    /// Most recently received byte, if one arrived since the last drain.
    pub byte: Option<u8>,
    /// A confirmed button press asked for the ID transmission.
    pub transmit: bool,
}

/// The only state crossing the interrupt/main-loop boundary.
///
/// Access contract: the receive interrupt stores bytes, the button path
/// raises the transmit request, and the main loop is the single reader,
/// clearing both on read via [`take_events`](SharedState::take_events).
/// The firmware wraps its instance in `avr_device::interrupt::Mutex` so
/// every access runs inside a critical section.
pub struct SharedState {
    pending: Cell<Option<u8>>,
    transmit: Cell<bool>,
}

impl SharedState {
    pub const fn new() -> Self {
        Self {
            pending: Cell::new(None),
            transmit: Cell::new(false),
        }
    }

    /// Records a received byte. A byte arriving before the previous one
    /// was drained replaces it; the newest byte wins.
    pub fn note_byte(&self, byte: u8) {
        self.pending.set(Some(byte));
    }

    /// Raises the transmit request. Requests raised while a transmission
    /// is already running coalesce into at most one follow-up.
    pub fn request_transmit(&self) {
        self.transmit.set(true);
    }

    /// Snapshots and clears both cells in one step.
    pub fn take_events(&self) -> Events {
        Events {
            byte: self.pending.take(),
            transmit: self.transmit.replace(false),
        }
    }
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let state = SharedState::new();
        let events = state.take_events();
        assert_eq!(events.byte, None);
        assert!(!events.transmit);
    }

    #[test]
    fn newest_byte_wins() {
        let state = SharedState::new();
        state.note_byte(b'1');
        state.note_byte(b'2');
        assert_eq!(state.take_events().byte, Some(b'2'));
    }

    #[test]
    fn take_clears_both_cells() {
        let state = SharedState::new();
        state.note_byte(b'A');
        state.request_transmit();

        let first = state.take_events();
        assert_eq!(first.byte, Some(b'A'));
        assert!(first.transmit);

        let second = state.take_events();
        assert_eq!(second.byte, None);
        assert!(!second.transmit);
    }

    #[test]
    fn transmit_requests_coalesce() {
        let state = SharedState::new();
        state.request_transmit();
        state.request_transmit();
        assert!(state.take_events().transmit);
        assert!(!state.take_events().transmit);
    }
}
