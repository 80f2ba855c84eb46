//! Conversion between display text and numbers.
//!
//! The evaluator never touches text. The keypad session reads the display
//! through a [`NumberFormat`] and writes results back through it.

/// Text/number conversion used by the keypad display.
pub trait NumberFormat {
    /// Read a number from display text, or `None` if the text is not a number.
    fn parse(&self, text: &str) -> Option<f64>;

    /// Render a number for the display.
    fn format(&self, value: f64) -> String;

    /// Character that separates the integer and fraction parts.
    fn decimal_separator(&self) -> char;
}

/// Plain decimal notation with a configurable separator and no grouping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecimalFormat {
    pub decimal_separator: char,
    pub max_fraction_digits: usize,
}

impl DecimalFormat {
    pub const DEFAULT_SEPARATOR: char = ',';
    pub const DEFAULT_FRACTION_DIGITS: usize = 3;

    pub fn new(decimal_separator: char, max_fraction_digits: usize) -> Self {
        Self {
            decimal_separator,
            max_fraction_digits,
        }
    }
}

impl Default for DecimalFormat {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEPARATOR, Self::DEFAULT_FRACTION_DIGITS)
    }
}

impl NumberFormat for DecimalFormat {
    fn parse(&self, text: &str) -> Option<f64> {
        let trimmed = text.trim();
        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let mut normalized = String::with_capacity(unsigned.len() + 1);
        if negative {
            normalized.push('-');
        }

        let mut seen_separator = false;
        let mut seen_digit = false;
        for c in unsigned.chars() {
            if c.is_ascii_digit() {
                seen_digit = true;
                normalized.push(c);
            } else if c == self.decimal_separator && !seen_separator {
                seen_separator = true;
                normalized.push('.');
            } else {
                return None;
            }
        }

        if !seen_digit {
            return None;
        }

        // "5." and ".5" are both accepted by f64's parser
        normalized.parse().ok()
    }

    fn format(&self, value: f64) -> String {
        if value.is_nan() {
            return "NaN".to_string();
        }
        if value.is_infinite() {
            return if value.is_sign_positive() { "∞" } else { "-∞" }.to_string();
        }

        let formatted = format!("{:.*}", self.max_fraction_digits, value);
        let trimmed = if formatted.contains('.') {
            formatted.trim_end_matches('0').trim_end_matches('.')
        } else {
            formatted.as_str()
        };

        // Rounding can leave a bare "-0" behind
        if trimmed == "-0" {
            return "0".to_string();
        }

        trimmed.replace('.', &self.decimal_separator.to_string())
    }

    fn decimal_separator(&self) -> char {
        self.decimal_separator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_comma() {
        let fmt = DecimalFormat::default();
        assert_eq!(fmt.parse("3,14"), Some(3.14));
        assert_eq!(fmt.parse("42"), Some(42.0));
        assert_eq!(fmt.parse("-7,5"), Some(-7.5));
        assert_eq!(fmt.parse("  12 "), Some(12.0));
        assert_eq!(fmt.parse("0"), Some(0.0));
    }

    #[test]
    fn test_parse_dangling_separator() {
        let fmt = DecimalFormat::default();
        assert_eq!(fmt.parse(",5"), Some(0.5));
        assert_eq!(fmt.parse("5,"), Some(5.0));
    }

    #[test]
    fn test_parse_rejects_non_numbers() {
        let fmt = DecimalFormat::default();
        assert_eq!(fmt.parse(""), None);
        assert_eq!(fmt.parse(","), None);
        assert_eq!(fmt.parse("-"), None);
        assert_eq!(fmt.parse("1,2,3"), None);
        assert_eq!(fmt.parse("3.14"), None);
        assert_eq!(fmt.parse("1 000"), None);
        assert_eq!(fmt.parse("Ошибка"), None);
        assert_eq!(fmt.parse("--1"), None);
    }

    #[test]
    fn test_parse_with_dot() {
        let fmt = DecimalFormat::new('.', 3);
        assert_eq!(fmt.parse("3.14"), Some(3.14));
        assert_eq!(fmt.parse("3,14"), None);
    }

    #[test]
    fn test_format_integers() {
        let fmt = DecimalFormat::default();
        assert_eq!(fmt.format(8.0), "8");
        assert_eq!(fmt.format(-16.0), "-16");
        assert_eq!(fmt.format(1_000_000.0), "1000000");
        assert_eq!(fmt.format(0.0), "0");
    }

    #[test]
    fn test_format_fractions() {
        let fmt = DecimalFormat::default();
        assert_eq!(fmt.format(2.5), "2,5");
        assert_eq!(fmt.format(1.0 / 3.0), "0,333");
        assert_eq!(fmt.format(2.0 / 3.0), "0,667");
        assert_eq!(fmt.format(-0.25), "-0,25");
    }

    #[test]
    fn test_format_negative_zero() {
        let fmt = DecimalFormat::default();
        assert_eq!(fmt.format(-0.0), "0");
        assert_eq!(fmt.format(-0.0001), "0");
    }

    #[test]
    fn test_format_non_finite() {
        let fmt = DecimalFormat::default();
        assert_eq!(fmt.format(f64::NAN), "NaN");
        assert_eq!(fmt.format(f64::INFINITY), "∞");
        assert_eq!(fmt.format(f64::NEG_INFINITY), "-∞");
    }

    #[test]
    fn test_format_zero_fraction_digits() {
        let fmt = DecimalFormat::new(',', 0);
        assert_eq!(fmt.format(2.4), "2");
        assert_eq!(fmt.format(100.0), "100");
    }

    #[test]
    fn test_formatted_text_parses_back() {
        let fmt = DecimalFormat::default();
        for value in [0.5, -12.125, 3.0, 1e6] {
            assert_eq!(fmt.parse(&fmt.format(value)), Some(value));
        }
    }
}
