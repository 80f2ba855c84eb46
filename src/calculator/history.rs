//! A single entry in the calculation history.

use super::Operation;

/// One history entry: either an operand or the operation between two operands.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HistoryItem {
    /// An operand entered on the keypad.
    Number(f64),
    /// An operation key that was pressed after an operand.
    Operation(Operation),
}

impl From<f64> for HistoryItem {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<Operation> for HistoryItem {
    fn from(op: Operation) -> Self {
        Self::Operation(op)
    }
}
