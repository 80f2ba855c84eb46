//! Keypad keys.

use crate::calculator::Operation;

/// A single key press on the calculator keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// A digit key, 0 through 9.
    Digit(u8),
    /// The decimal separator key.
    DecimalSeparator,
    /// One of the four operation keys.
    Operation(Operation),
    /// The "=" key.
    Equals,
    /// The clear key.
    Clear,
}

impl Key {
    /// Map a typed character to a key.
    ///
    /// `separator` is the decimal separator currently in use, so that the
    /// same character is read back by the number format.
    pub fn from_char(c: char, separator: char) -> Option<Self> {
        if c == separator {
            return Some(Self::DecimalSeparator);
        }
        if let Some(digit) = c.to_digit(10) {
            return Some(Self::Digit(digit as u8));
        }
        match c {
            '=' => Some(Self::Equals),
            'c' | 'C' => Some(Self::Clear),
            _ => {
                let mut buf = [0u8; 4];
                c.encode_utf8(&mut buf).parse().ok().map(Self::Operation)
            }
        }
    }

    /// Text this key appends to the display, for digit and separator keys.
    pub fn input_text(&self, separator: char) -> Option<char> {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(*d), 10),
            Self::DecimalSeparator => Some(separator),
            _ => None,
        }
    }
}

impl From<Operation> for Key {
    fn from(op: Operation) -> Self {
        Self::Operation(op)
    }
}
