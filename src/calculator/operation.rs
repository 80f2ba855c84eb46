//! The four supported arithmetic operations.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Failure while applying an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalculationError {
    /// The right operand of a division was zero (positive or negative).
    #[error("division by zero")]
    DivideByZero,
}

/// Failure while reading an operation from its key symbol.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperationParseError {
    #[error("unknown operation symbol: {0:?}")]
    UnknownOperation(String),
}

/// A binary arithmetic operation bound to a calculator key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// The symbol printed on the key.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "x",
            Self::Divide => "/",
        }
    }

    /// Apply the operation to `lhs` and `rhs`.
    ///
    /// Add, subtract and multiply follow plain `f64` semantics, so NaN and
    /// infinities propagate untouched. Divide fails when `rhs == 0.0`, which
    /// also matches `-0.0`.
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, CalculationError> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Subtract => Ok(lhs - rhs),
            Self::Multiply => Ok(lhs * rhs),
            Self::Divide => {
                if rhs == 0.0 {
                    return Err(CalculationError::DivideByZero);
                }
                Ok(lhs / rhs)
            }
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operation {
    type Err = OperationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Self::Add),
            "-" => Ok(Self::Subtract),
            // "*" is what a hardware keyboard sends for the "x" key
            "x" | "*" => Ok(Self::Multiply),
            "/" => Ok(Self::Divide),
            other => Err(OperationParseError::UnknownOperation(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_arithmetic() {
        assert_eq!(Operation::Add.apply(2.0, 3.0), Ok(5.0));
        assert_eq!(Operation::Subtract.apply(2.0, 3.0), Ok(-1.0));
        assert_eq!(Operation::Multiply.apply(2.0, 3.0), Ok(6.0));
        assert_eq!(Operation::Divide.apply(3.0, 2.0), Ok(1.5));
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(
            Operation::Divide.apply(10.0, 0.0),
            Err(CalculationError::DivideByZero)
        );
        assert_eq!(
            Operation::Divide.apply(10.0, -0.0),
            Err(CalculationError::DivideByZero)
        );
        assert_eq!(
            Operation::Divide.apply(0.0, 0.0),
            Err(CalculationError::DivideByZero)
        );
    }

    #[test]
    fn test_tiny_divisor_is_not_zero() {
        let result = Operation::Divide.apply(1.0, f64::MIN_POSITIVE).unwrap();
        assert!(result.is_finite());
    }

    #[test]
    fn test_nan_and_infinity_pass_through() {
        assert!(Operation::Add.apply(f64::NAN, 1.0).unwrap().is_nan());
        assert_eq!(
            Operation::Multiply.apply(f64::INFINITY, 2.0),
            Ok(f64::INFINITY)
        );
        assert!(
            Operation::Subtract
                .apply(f64::INFINITY, f64::INFINITY)
                .unwrap()
                .is_nan()
        );
    }

    #[test]
    fn test_symbols_round_trip() {
        for op in [
            Operation::Add,
            Operation::Subtract,
            Operation::Multiply,
            Operation::Divide,
        ] {
            assert_eq!(op.to_string().parse::<Operation>(), Ok(op));
        }
        assert_eq!("*".parse::<Operation>(), Ok(Operation::Multiply));
    }

    #[test]
    fn test_unknown_symbol_rejected() {
        assert_eq!(
            "%".parse::<Operation>(),
            Err(OperationParseError::UnknownOperation("%".to_string()))
        );
        assert!("".parse::<Operation>().is_err());
    }
}
