//! Hex digit to seven-segment pattern encoding

/// Segment patterns for `0`-`F`, common cathode, segments a-g on bits 0-6.
pub const PATTERNS: [u8; 16] = [
    0x3F, // 0
    0x06, // 1
    0x5B, // 2
    0x4F, // 3
    0x66, // 4
    0x6D, // 5
    0x7D, // 6
    0x07, // 7
    0x7F, // 8
    0x6F, // 9
    0x77, // A
    0x7C, // b
    0x39, // C
    0x5E, // d
    0x79, // E
    0x71, // F
];

/// Pattern shown for bytes that are not hex digits (segment g only, a dash).
pub const INVALID_PATTERN: u8 = 0x40;

/// Maps a received byte to its display pattern.
///
/// `0`-`9` and `A`-`F` (either case) select the matching hex pattern,
/// everything else the dash.
pub fn encode(symbol: u8) -> u8 {
    let index = match symbol {
        b'0'..=b'9' => (symbol - b'0') as usize,
        b'A'..=b'F' => (symbol - b'A' + 10) as usize,
        b'a'..=b'f' => (symbol - b'a' + 10) as usize,
        _ => return INVALID_PATTERN,
    };
    PATTERNS[index]
}

/// Sink for encoded patterns. The firmware writes them to a display port,
/// tests capture them.
pub trait SegmentOutput {
    fn set_pattern(&mut self, pattern: u8);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_map_to_table_entries() {
        for (value, symbol) in b"0123456789".iter().enumerate() {
            assert_eq!(encode(*symbol), PATTERNS[value]);
        }
    }

    #[test]
    fn hex_letters_are_case_insensitive() {
        for (offset, (upper, lower)) in b"ABCDEF".iter().zip(b"abcdef").enumerate() {
            assert_eq!(encode(*upper), PATTERNS[10 + offset]);
            assert_eq!(encode(*upper), encode(*lower));
        }
    }

    #[test]
    fn non_hex_bytes_show_the_dash() {
        for symbol in [b'G', b'z', b' ', b'\r', 0x00, 0xFF] {
            assert_eq!(encode(symbol), INVALID_PATTERN);
        }
    }

    #[test]
    fn encode_is_pure() {
        assert_eq!(encode(b'7'), 0x07);
        assert_eq!(encode(b'7'), encode(b'7'));
        assert_eq!(encode(b'F'), 0x71);
    }
}
