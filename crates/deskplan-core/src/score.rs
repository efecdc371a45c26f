//! PlanScore - Lexicographic three-criterion assignment score

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign};

/// A score with preference, cohesion, and balance criteria.
///
/// Preference hits dominate group cohesion, which dominates zone balance.
/// Higher is better on every criterion; balance is a spread penalty and so
/// sits at or below zero in practice.
///
/// Comparison order: preference > cohesion > balance
///
/// # Examples
///
/// ```
/// use deskplan_core::PlanScore;
///
/// let score1 = PlanScore::of(10, 4, -1);
/// let score2 = PlanScore::of(10, 6, -9);
///
/// // Better cohesion wins even with worse balance
/// assert!(score2 > score1);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PlanScore {
    preference: i64,
    cohesion: i64,
    balance: i64,
}

impl PlanScore {
    /// The zero score.
    pub const ZERO: PlanScore = PlanScore {
        preference: 0,
        cohesion: 0,
        balance: 0,
    };

    /// Creates a new PlanScore.
    #[inline]
    pub const fn of(preference: i64, cohesion: i64, balance: i64) -> Self {
        PlanScore {
            preference,
            cohesion,
            balance,
        }
    }

    /// Returns the preference-hit count.
    #[inline]
    pub const fn preference(&self) -> i64 {
        self.preference
    }

    /// Returns the group-cohesion criterion.
    #[inline]
    pub const fn cohesion(&self) -> i64 {
        self.cohesion
    }

    /// Returns the zone-balance criterion.
    #[inline]
    pub const fn balance(&self) -> i64 {
        self.balance
    }
}

impl Ord for PlanScore {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.preference.cmp(&other.preference) {
            Ordering::Equal => match self.cohesion.cmp(&other.cohesion) {
                Ordering::Equal => self.balance.cmp(&other.balance),
                other => other,
            },
            other => other,
        }
    }
}

impl PartialOrd for PlanScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for PlanScore {
    type Output = PlanScore;

    fn add(self, rhs: PlanScore) -> PlanScore {
        PlanScore {
            preference: self.preference + rhs.preference,
            cohesion: self.cohesion + rhs.cohesion,
            balance: self.balance + rhs.balance,
        }
    }
}

impl AddAssign for PlanScore {
    fn add_assign(&mut self, rhs: PlanScore) {
        *self = *self + rhs;
    }
}

impl fmt::Debug for PlanScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PlanScore({}, {}, {})",
            self.preference, self.cohesion, self.balance
        )
    }
}

impl fmt::Display for PlanScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}pref/{}coh/{}bal",
            self.preference, self.cohesion, self.balance
        )
    }
}
