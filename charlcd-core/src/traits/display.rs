//! Character display trait

use crate::config::{Geometry, TextLine};

/// Trait for character-cell displays
///
/// Implemented by controller drivers. All operations block until the
/// transfer (and any settle delays) has completed.
pub trait CharacterDisplay {
    /// Error from the underlying transport
    type Error;

    /// Run the controller's power-on initialization sequence
    fn initialize(&mut self) -> Result<(), Self::Error>;

    /// Erase the display and return the cursor home
    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Move the cursor
    ///
    /// - `line`: Line number (0-based)
    /// - `column`: Column number (0-based)
    fn set_cursor(&mut self, line: u8, column: u8) -> Result<(), Self::Error>;

    /// Write one character at the cursor; the controller advances the cursor
    fn show_char(&mut self, ch: u8) -> Result<(), Self::Error>;

    /// Get the display size
    fn geometry(&self) -> Geometry;

    /// Write each byte of `text` at the cursor, in order
    ///
    /// The text ends at its first NUL byte, if any. A failed character does
    /// not stop the rest; the first error is returned at the end.
    fn show_string(&mut self, text: &str) -> Result<(), Self::Error> {
        let mut result = Ok(());
        for byte in text.bytes().take_while(|&b| b != 0) {
            result = result.and(self.show_char(byte));
        }
        result
    }

    /// Move the cursor and write a string
    ///
    /// The string is written even if moving the cursor failed.
    fn write_at(&mut self, line: u8, column: u8, text: &str) -> Result<(), Self::Error> {
        let moved = self.set_cursor(line, column);
        let shown = self.show_string(text);
        moved.and(shown)
    }

    /// Write a configured [`TextLine`]
    fn write_line(&mut self, line: &TextLine) -> Result<(), Self::Error> {
        self.write_at(line.line, line.column, line.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records calls instead of driving hardware
    #[derive(Default)]
    struct RecordingDisplay {
        cursor: Option<(u8, u8)>,
        chars: std::vec::Vec<u8>,
        cursor_moves: usize,
    }

    impl CharacterDisplay for RecordingDisplay {
        type Error = ();

        fn initialize(&mut self) -> Result<(), ()> {
            Ok(())
        }

        fn clear(&mut self) -> Result<(), ()> {
            self.chars.clear();
            Ok(())
        }

        fn set_cursor(&mut self, line: u8, column: u8) -> Result<(), ()> {
            self.cursor = Some((line, column));
            self.cursor_moves += 1;
            Ok(())
        }

        fn show_char(&mut self, ch: u8) -> Result<(), ()> {
            self.chars.push(ch);
            Ok(())
        }

        fn geometry(&self) -> Geometry {
            Geometry::LCD_1602
        }
    }

    #[test]
    fn test_show_string_writes_bytes_in_order() {
        let mut display = RecordingDisplay::default();
        display.show_string("AB").unwrap();
        assert_eq!(display.chars, b"AB");
        assert_eq!(display.cursor_moves, 0);
    }

    #[test]
    fn test_show_string_empty() {
        let mut display = RecordingDisplay::default();
        display.show_string("").unwrap();
        assert!(display.chars.is_empty());
    }

    #[test]
    fn test_write_line_positions_then_writes() {
        let mut display = RecordingDisplay::default();
        display
            .write_line(&TextLine::new(1, 3, "Eduardo"))
            .unwrap();
        assert_eq!(display.cursor, Some((1, 3)));
        assert_eq!(display.cursor_moves, 1);
        assert_eq!(display.chars, b"Eduardo");
    }

    #[test]
    fn test_show_string_stops_at_nul() {
        let mut display = RecordingDisplay::default();
        display.show_string("AB\0CD").unwrap();
        assert_eq!(display.chars, b"AB");
    }

    /// Fails one call by index, counting cursor moves and characters alike
    struct FailOnce {
        fail_at: usize,
        calls: usize,
        chars: std::vec::Vec<u8>,
    }

    impl FailOnce {
        fn new(fail_at: usize) -> Self {
            Self {
                fail_at,
                calls: 0,
                chars: std::vec::Vec::new(),
            }
        }

        fn call(&mut self) -> Result<(), usize> {
            let call = self.calls;
            self.calls += 1;
            if call == self.fail_at {
                return Err(call);
            }
            Ok(())
        }
    }

    impl CharacterDisplay for FailOnce {
        type Error = usize;

        fn initialize(&mut self) -> Result<(), usize> {
            Ok(())
        }
        fn clear(&mut self) -> Result<(), usize> {
            Ok(())
        }
        fn set_cursor(&mut self, _: u8, _: u8) -> Result<(), usize> {
            self.call()
        }
        fn show_char(&mut self, ch: u8) -> Result<(), usize> {
            self.call()?;
            self.chars.push(ch);
            Ok(())
        }
        fn geometry(&self) -> Geometry {
            Geometry::LCD_1602
        }
    }

    #[test]
    fn test_show_string_continues_after_error() {
        let mut display = FailOnce::new(1);
        assert_eq!(display.show_string("ABCD"), Err(1));
        assert_eq!(display.calls, 4);
        assert_eq!(display.chars, b"ACD");
    }

    #[test]
    fn test_show_string_reports_first_error() {
        struct AlwaysFail(usize);

        impl CharacterDisplay for AlwaysFail {
            type Error = usize;

            fn initialize(&mut self) -> Result<(), usize> {
                Ok(())
            }
            fn clear(&mut self) -> Result<(), usize> {
                Ok(())
            }
            fn set_cursor(&mut self, _: u8, _: u8) -> Result<(), usize> {
                Ok(())
            }
            fn show_char(&mut self, _: u8) -> Result<(), usize> {
                self.0 += 1;
                Err(self.0)
            }
            fn geometry(&self) -> Geometry {
                Geometry::LCD_1602
            }
        }

        let mut display = AlwaysFail(0);
        assert_eq!(display.show_string("ABC"), Err(1));
        assert_eq!(display.0, 3);
    }

    #[test]
    fn test_write_at_writes_text_after_cursor_error() {
        let mut display = FailOnce::new(0);
        assert_eq!(display.write_at(1, 3, "Eduardo"), Err(0));
        assert_eq!(display.chars, b"Eduardo");
    }
}
