//! Calculator core.
//!
//! This module provides functionality to:
//! - Record operands and operations as they are entered
//! - Reduce them strictly left to right, with no operator precedence
//! - Convert between display text and numbers

mod evaluation;
mod format;
mod history;
mod operation;

pub use evaluation::Evaluator;
pub use format::{DecimalFormat, NumberFormat};
pub use history::HistoryItem;
pub use operation::{CalculationError, Operation, OperationParseError};
