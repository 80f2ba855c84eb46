//! Keypad front end for the calculator core.
//!
//! Key presses arrive as [`Key`] events and are handled one at a time by a
//! [`KeypadSession`], which owns the display line and the calculation history.

mod key;
mod session;

pub use key::Key;
pub use session::{INITIAL_DISPLAY, KeypadSession, SessionState};
