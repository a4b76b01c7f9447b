//! Stored messages shown in text mode.
//!
//! Each entry fits the two LCD rows (32 bytes) and uses only characters the
//! HD44780 ROM renders as-is.

use heapless::Vec;

use crate::config::MESSAGE_CAPACITY;

pub static TEXTS: &[&str] = &[
    "Stay hydrated!",
    "hello world! 1234567890",
    "Keep calm and carry on",
    "Every day is a fresh start",
    "Less is more",
    "Done is better than perfect",
    "Small steps every day",
    "Water the plants today",
    "Breathe in, breathe out",
    "Make it work, then make it fast",
    "Good things take time",
    "Think twice, code once",
];

/// Copies a message into a buffer sized for both rows, cutting off what
/// would not fit on screen.
pub fn stage_message(text: &str) -> Vec<u8, MESSAGE_CAPACITY> {
    let bytes = text.as_bytes();
    Vec::from_slice(&bytes[..bytes.len().min(MESSAGE_CAPACITY)]).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LCD_COLS;

    #[test]
    fn every_message_fits_both_rows() {
        for text in TEXTS {
            assert!(text.len() <= 2 * LCD_COLS, "{text:?} is too long");
            assert!(text.is_ascii(), "{text:?} is not plain ASCII");
        }
    }

    #[test]
    fn collection_has_room_to_rotate() {
        assert!(TEXTS.len() > 1);
    }

    #[test]
    fn stage_keeps_short_messages_whole() {
        assert_eq!(stage_message("Less is more").as_slice(), b"Less is more");
    }

    #[test]
    fn stage_empty_message() {
        assert!(stage_message("").is_empty());
    }

    #[test]
    fn stage_exactly_two_rows() {
        let text = "abcdefghijklmnopABCDEFGHIJKLMNOP";
        assert_eq!(stage_message(text).as_slice(), text.as_bytes());
    }

    #[test]
    fn stage_truncates_to_two_rows() {
        let staged = stage_message("abcdefghijklmnopqrstuvwxyz0123456789");
        assert_eq!(staged.len(), MESSAGE_CAPACITY);
        assert_eq!(staged.as_slice(), b"abcdefghijklmnopqrstuvwxyz012345");
    }
}
