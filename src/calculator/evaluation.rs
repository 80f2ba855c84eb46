//! Left-to-right reduction of the calculation history.
//!
//! The history is read as `Number (Operation Number)*`. There is no operator
//! precedence: `2 + 3 x 4` is `(2 + 3) x 4`.

use tracing::trace;

use super::{CalculationError, HistoryItem, Operation};

/// Append-only history of operands and operations for one calculation.
#[derive(Clone, Debug, Default)]
pub struct Evaluator {
    history: Vec<HistoryItem>,
}

impl Evaluator {
    /// Create an evaluator with an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an operand.
    pub fn push_number(&mut self, value: f64) {
        self.history.push(value.into());
    }

    /// Append an operation. The caller is expected to have pushed an operand
    /// right before; nothing is checked here.
    pub fn push_operation(&mut self, op: Operation) {
        self.history.push(op.into());
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.history.clear();
    }

    /// Number of entries, operands and operations alike.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Whether nothing has been pushed since the last clear.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// The entries pushed so far, oldest first.
    pub fn items(&self) -> &[HistoryItem] {
        &self.history
    }

    /// Reduce the history to a single value.
    ///
    /// An empty history, or one that does not start with a number, yields `0`.
    /// Reduction stops quietly at the first place where the
    /// operation/number pairing breaks and returns what it has so far.
    /// The history itself is left untouched.
    pub fn evaluate(&self) -> Result<f64, CalculationError> {
        let Some(HistoryItem::Number(first)) = self.history.first() else {
            return Ok(0.0);
        };

        let mut result = *first;

        for pair in self.history[1..].chunks(2) {
            let [HistoryItem::Operation(op), HistoryItem::Number(rhs)] = pair else {
                trace!(len = self.history.len(), "history alternation broken, stopping");
                break;
            };
            result = op.apply(result, *rhs)?;
        }

        Ok(result)
    }
}
