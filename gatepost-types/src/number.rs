//! Numeric scalar for container values.
//!
//! Keeps the integer/float distinction so whole numbers never lose
//! precision in transit, while validation treats both variants as the
//! same primitive kind (`TypeKind::Number`).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A numeric value, integer or floating point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    /// Widens to `f64`. Integers up to 2^53 convert exactly.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
        }
    }

    /// Returns the integer value, if this is an integer.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::Float(_) => None,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{i}"),
            Number::Float(x) => write!(f, "{x}"),
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Integer(i64::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_f64_widens_integers() {
        assert_eq!(Number::Integer(42).as_f64(), 42.0);
        assert_eq!(Number::Float(2.5).as_f64(), 2.5);
    }

    #[test]
    fn as_i64_only_for_integers() {
        assert_eq!(Number::Integer(-3).as_i64(), Some(-3));
        assert_eq!(Number::Float(3.0).as_i64(), None);
    }

    #[test]
    fn display() {
        assert_eq!(Number::Integer(7).to_string(), "7");
        assert_eq!(Number::Float(1.5).to_string(), "1.5");
    }

    #[test]
    fn from_impls() {
        assert_eq!(Number::from(5i64), Number::Integer(5));
        assert_eq!(Number::from(5i32), Number::Integer(5));
        assert_eq!(Number::from(0.5), Number::Float(0.5));
    }
}
