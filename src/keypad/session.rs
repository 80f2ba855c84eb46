//! Display state machine for one calculator session.
//!
//! Every key press is one call to [`KeypadSession::press`]. The session keeps
//! the display text, pushes parsed operands into the [`Evaluator`] and writes
//! the formatted result (or the error label) back to the display.

use tracing::{debug, trace, warn};

use crate::calculator::{CalculationError, Evaluator, HistoryItem, NumberFormat, Operation};

use super::Key;

/// Text shown on a fresh or cleared display.
pub const INITIAL_DISPLAY: &str = "0";

/// Whether the session is in the middle of a calculation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// History is empty; the display holds the first operand (or a result).
    Idle,
    /// At least one operand/operation pair has been entered.
    Accumulating,
}

/// Keypad-driven calculator session.
pub struct KeypadSession<F> {
    display: String,
    evaluator: Evaluator,
    format: F,
    error_text: String,
}

impl<F: NumberFormat> KeypadSession<F> {
    /// Start a session showing `"0"`, reading and writing numbers through
    /// `format` and showing `error_text` after a failed calculation.
    pub fn new(format: F, error_text: impl Into<String>) -> Self {
        Self {
            display: INITIAL_DISPLAY.to_string(),
            evaluator: Evaluator::new(),
            format,
            error_text: error_text.into(),
        }
    }

    /// Decimal separator of the display, for mapping typed characters to keys.
    pub fn decimal_separator(&self) -> char {
        self.format.decimal_separator()
    }

    /// Current display text.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// `Idle` while the history is empty, `Accumulating` otherwise.
    pub fn state(&self) -> SessionState {
        if self.evaluator.is_empty() {
            SessionState::Idle
        } else {
            SessionState::Accumulating
        }
    }

    /// Entries recorded for the calculation in progress.
    pub fn history(&self) -> &[HistoryItem] {
        self.evaluator.items()
    }

    /// Whether the display currently shows the error label.
    pub fn is_error(&self) -> bool {
        self.display == self.error_text
    }

    /// Handle one key press.
    ///
    /// Returns the calculation error when "=" hits a division by zero; the
    /// display already shows the error label by then.
    pub fn press(&mut self, key: Key) -> Option<CalculationError> {
        trace!(?key, display = %self.display, "key pressed");
        match key {
            Key::Digit(_) | Key::DecimalSeparator => {
                if let Some(text) = key.input_text(self.format.decimal_separator()) {
                    self.input(text);
                }
                None
            }
            Key::Operation(op) => {
                self.operation(op);
                None
            }
            Key::Equals => self.calculate(),
            Key::Clear => {
                self.clear();
                None
            }
        }
    }

    /// Reset the history and the display.
    pub fn clear(&mut self) {
        self.evaluator.clear();
        self.reset_display();
    }

    fn input(&mut self, text: char) {
        // Only one decimal separator per operand
        if !text.is_ascii_digit() && self.display.contains(text) {
            return;
        }

        if self.display == INITIAL_DISPLAY || self.is_error() {
            self.display.clear();
        }
        self.display.push(text);
    }

    fn operation(&mut self, op: Operation) {
        let Some(number) = self.format.parse(&self.display) else {
            debug!(display = %self.display, "display is not a number, ignoring operation");
            return;
        };

        self.evaluator.push_number(number);
        self.evaluator.push_operation(op);
        self.reset_display();
    }

    fn calculate(&mut self) -> Option<CalculationError> {
        let Some(number) = self.format.parse(&self.display) else {
            debug!(display = %self.display, "display is not a number, ignoring equals");
            return None;
        };

        self.evaluator.push_number(number);

        let outcome = self.evaluator.evaluate();
        self.evaluator.clear();

        match outcome {
            Ok(result) => {
                debug!(result, "calculation finished");
                self.display = self.format.format(result);
                None
            }
            Err(err) => {
                warn!(%err, "calculation failed");
                self.display = self.error_text.clone();
                Some(err)
            }
        }
    }

    fn reset_display(&mut self) {
        self.display = INITIAL_DISPLAY.to_string();
    }
}
