use std::fmt;

use serde::{Deserialize, Serialize};

use super::ValueObject;
use crate::shared::error::{DomainError, DomainResult};

const FIELD: &str = "Counter";

/// Non-negative tally such as a like or comment count.
///
/// Every operation returns a new counter. Note the asymmetry:
/// [`Counter::decrement_by_one`] floors at zero while
/// [`Counter::decrement_by`] refuses to go below it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Counter(i64);

impl Counter {
    pub fn create(value: i64) -> DomainResult<Self> {
        Self::validate(&value)?;
        Ok(Self(value))
    }

    /// Build a counter from textual input.
    pub fn parse(value: &str) -> DomainResult<Self> {
        let value = value
            .trim()
            .parse::<i64>()
            .map_err(|_| DomainError::invalid(FIELD, "The Counter needs to be a number"))?;
        Self::create(value)
    }

    pub fn zero() -> Self {
        Self(0)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    pub fn increment_by_one(&self) -> Self {
        Self(self.0.saturating_add(1))
    }

    pub fn increment_by(&self, amount: i64) -> DomainResult<Self> {
        Self::create(self.0.saturating_add(amount))
    }

    pub fn decrement_by_one(&self) -> Self {
        Self((self.0 - 1).max(0))
    }

    pub fn decrement_by(&self, amount: i64) -> DomainResult<Self> {
        if amount > self.0 {
            return Err(DomainError::invalid(
                FIELD,
                "It is not possible to decrement if the value to be subtracted is greater than the current value of the counter",
            ));
        }
        Self::create(self.0.saturating_sub(amount))
    }
}

impl ValueObject for Counter {
    type Props = i64;

    fn validate(value: &i64) -> DomainResult<()> {
        if *value < 0 {
            return Err(DomainError::invalid(
                FIELD,
                "The Counter cannot be less than zero",
            ));
        }
        Ok(())
    }
}

impl TryFrom<i64> for Counter {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::create(value)
    }
}

impl From<Counter> for i64 {
    fn from(counter: Counter) -> Self {
        counter.0
    }
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
