//! Integer-cent money amounts for prices, totals, and tax.
//!
//! Catalog prices are whole dollars, but derived amounts (tax) are not, so
//! everything is held in cents and only formatted at the edge.

#[cfg(test)]
#[path = "money_test.rs"]
mod money_test;

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// A non-negative amount of money in US cents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Self = Self(0);

    /// Build from a cent count.
    #[must_use]
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Build from a whole-dollar amount.
    #[must_use]
    pub const fn from_dollars(dollars: u64) -> Self {
        Self(dollars * 100)
    }

    #[must_use]
    pub const fn cents(self) -> u64 {
        self.0
    }

    /// Multiply by a line-item quantity.
    #[must_use]
    pub const fn times(self, quantity: u32) -> Self {
        Self(self.0 * quantity as u64)
    }

    /// Apply a rate given in basis points (1/100 of a percent), rounding half up
    /// to the nearest cent.
    #[must_use]
    pub const fn basis_points(self, bps: u64) -> Self {
        Self((self.0 * bps + 5_000) / 10_000)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

