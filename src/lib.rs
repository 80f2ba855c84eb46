//! padcalc: a four-function keypad calculator.
//!
//! Operands and operations are recorded as they are keyed in and reduced
//! strictly left to right when "=" is pressed.

pub mod calculator;
pub mod config;
pub mod keypad;
