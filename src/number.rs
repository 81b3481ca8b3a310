use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::StatsError;
use crate::utils::format::float_repr;

/// A single value in a list of numbers: either an integer or a float.
///
/// Integers stay integers through a statistic whenever the result is
/// exact, so `sum([1, 2])` renders as `3` while `sum([1, 2.0])` renders
/// as `3.0`. Integers are held as `i128`, so totals of `i64` inputs never
/// leave the integer range.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Number {
    Int(i128),
    Float(f64),
}

impl Number {
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Number::Int(_))
    }

    /// Total ordering used when sorting; integers compare exactly with each other.
    pub fn total_cmp(&self, other: &Number) -> Ordering {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a.cmp(b),
            (a, b) => a.as_f64().total_cmp(&b.as_f64()),
        }
    }

}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Int(i128::from(value))
    }
}

impl From<i128> for Number {
    fn from(value: i128) -> Self {
        Number::Int(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Number::Int(i) => write!(f, "{}", i),
            Number::Float(v) => f.write_str(&float_repr(v)),
        }
    }
}

impl FromStr for Number {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if let Ok(i) = token.parse::<i128>() {
            return Ok(Number::Int(i));
        }
        // Also accepts nan, inf and infinity in any case.
        token
            .parse::<f64>()
            .map(Number::Float)
            .map_err(|_| StatsError::NotANumber(token.to_string()))
    }
}

/// Parse every number in `text`, separated by commas and/or whitespace.
pub fn parse_numbers(text: &str) -> Result<Vec<Number>, StatsError> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(str::parse)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integers_and_floats() {
        assert_eq!("42".parse::<Number>(), Ok(Number::Int(42)));
        assert_eq!(" -7 ".parse::<Number>(), Ok(Number::Int(-7)));
        assert_eq!("+3".parse::<Number>(), Ok(Number::Int(3)));
        assert_eq!("2.5".parse::<Number>(), Ok(Number::Float(2.5)));
        assert_eq!("1e3".parse::<Number>(), Ok(Number::Float(1000.0)));
        assert_eq!("-inf".parse::<Number>(), Ok(Number::Float(f64::NEG_INFINITY)));
        assert!(matches!("NaN".parse::<Number>(), Ok(Number::Float(v)) if v.is_nan()));
    }

    #[test]
    fn wide_integers_stay_exact() {
        assert_eq!(
            "100000000000000000001".parse::<Number>(),
            Ok(Number::Int(100_000_000_000_000_000_001))
        );
        assert_eq!(
            "1000000000000000000000000000000000000000".parse::<Number>(),
            Ok(Number::Float(1e39))
        );
    }

    #[test]
    fn rejects_text() {
        assert_eq!(
            "seven".parse::<Number>(),
            Err(StatsError::NotANumber("seven".to_string()))
        );
        assert_eq!(
            "".parse::<Number>(),
            Err(StatsError::NotANumber(String::new()))
        );
    }

    #[test]
    fn parse_numbers_splits_on_commas_and_whitespace() {
        let numbers = parse_numbers("1, 2.5\n3\t,,4").unwrap();
        assert_eq!(
            numbers,
            vec![
                Number::Int(1),
                Number::Float(2.5),
                Number::Int(3),
                Number::Int(4)
            ]
        );
        assert!(parse_numbers("   ").unwrap().is_empty());
    }

    #[test]
    fn parse_numbers_stops_at_first_bad_token() {
        assert_eq!(
            parse_numbers("1 two 3 four"),
            Err(StatsError::NotANumber("two".to_string()))
        );
    }

    #[test]
    fn display_keeps_integer_and_float_apart() {
        assert_eq!(Number::Int(10).to_string(), "10");
        assert_eq!(Number::Float(10.0).to_string(), "10.0");
        assert_eq!(Number::Float(2.5).to_string(), "2.5");
        assert!(Number::Int(10).is_integer());
        assert!(!Number::Float(10.0).is_integer());
    }

    #[test]
    fn ordering_is_exact_between_integers() {
        let big = Number::from(i64::MAX);
        let smaller = Number::from(i64::MAX - 1);
        assert_eq!(big.total_cmp(&smaller), Ordering::Greater);
        assert_eq!(Number::Int(1).total_cmp(&Number::Float(1.5)), Ordering::Less);
    }

    #[test]
    fn displays_integers_beyond_i64() {
        let wide = Number::from(i128::from(i64::MAX) + 1);
        assert_eq!(wide.to_string(), "9223372036854775808");
    }

    #[test]
    fn serializes_as_bare_json_numbers() {
        assert_eq!(serde_json::to_string(&Number::Int(3)).unwrap(), "3");
        assert_eq!(serde_json::to_string(&Number::Float(1.5)).unwrap(), "1.5");
    }
}
