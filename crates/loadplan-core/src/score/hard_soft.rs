//! HardSoftScore - the lexicographic (hard, soft) layout objective

use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;

use thiserror::Error;

use super::traits::Score;
use super::ScoreLevel;

/// A layout score with separate hard and soft levels.
///
/// The hard level counts violated placement constraints (overlaps, parts
/// outside their surface, disallowed sides, missed mandatory hints) as a
/// non-positive number. The soft level accumulates preference penalties.
/// A layout is feasible once its hard level reaches zero.
///
/// # Examples
///
/// ```
/// use loadplan_core::{HardSoftScore, Score};
///
/// let overlapping = HardSoftScore::of(-1, 0);
/// let feasible = HardSoftScore::of(0, -12);
///
/// assert!(feasible > overlapping);
/// assert!(feasible.is_feasible());
/// assert!(!overlapping.is_feasible());
/// assert_eq!("0hard/-12soft".parse::<HardSoftScore>(), Ok(feasible));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HardSoftScore {
    hard: i64,
    soft: i64,
}

impl HardSoftScore {
    pub const ZERO: HardSoftScore = HardSoftScore { hard: 0, soft: 0 };

    /// Weight of a single hard violation.
    pub const ONE_HARD: HardSoftScore = HardSoftScore { hard: -1, soft: 0 };

    /// Weight of a single soft penalty unit.
    pub const ONE_SOFT: HardSoftScore = HardSoftScore { hard: 0, soft: -1 };

    #[inline]
    pub const fn of(hard: i64, soft: i64) -> Self {
        HardSoftScore { hard, soft }
    }

    #[inline]
    pub const fn of_hard(hard: i64) -> Self {
        HardSoftScore { hard, soft: 0 }
    }

    #[inline]
    pub const fn of_soft(soft: i64) -> Self {
        HardSoftScore { hard: 0, soft }
    }

    #[inline]
    pub const fn hard(&self) -> i64 {
        self.hard
    }

    #[inline]
    pub const fn soft(&self) -> i64 {
        self.soft
    }

    /// The component at `level`.
    pub const fn level(&self, level: ScoreLevel) -> i64 {
        match level {
            ScoreLevel::Hard => self.hard,
            ScoreLevel::Soft => self.soft,
        }
    }

    /// `weight` scaled by `count` matches.
    pub const fn scaled(self, count: i64) -> Self {
        HardSoftScore::of(self.hard * count, self.soft * count)
    }
}

impl Score for HardSoftScore {
    /// Layout hard scores never exceed zero, so this is `hard == 0`.
    #[inline]
    fn is_feasible(&self) -> bool {
        self.hard >= 0
    }
}

impl Ord for HardSoftScore {
    fn cmp(&self, other: &Self) -> Ordering {
        self.hard
            .cmp(&other.hard)
            .then_with(|| self.soft.cmp(&other.soft))
    }
}

impl PartialOrd for HardSoftScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for HardSoftScore {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        HardSoftScore::of(self.hard + rhs.hard, self.soft + rhs.soft)
    }
}

impl Sub for HardSoftScore {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        HardSoftScore::of(self.hard - rhs.hard, self.soft - rhs.soft)
    }
}

impl Neg for HardSoftScore {
    type Output = Self;

    fn neg(self) -> Self {
        HardSoftScore::of(-self.hard, -self.soft)
    }
}

impl Sum for HardSoftScore {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(HardSoftScore::ZERO, Add::add)
    }
}

impl fmt::Debug for HardSoftScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HardSoftScore({}, {})", self.hard, self.soft)
    }
}

impl fmt::Display for HardSoftScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}hard/{}soft", self.hard, self.soft)
    }
}

/// Error when reading a score back from its `"{h}hard/{s}soft"` text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreParseError {
    #[error("Score '{0}' must have the form '<h>hard/<s>soft'")]
    Format(String),

    #[error("Invalid {level} value '{value}'")]
    Number { level: &'static str, value: String },
}

fn parse_level(part: &str, level: ScoreLevel, whole: &str) -> Result<i64, ScoreParseError> {
    let suffix = level.suffix();
    let value = part
        .trim()
        .strip_suffix(suffix)
        .ok_or_else(|| ScoreParseError::Format(whole.to_string()))?;
    value.parse().map_err(|_| ScoreParseError::Number {
        level: suffix,
        value: value.to_string(),
    })
}

impl FromStr for HardSoftScore {
    type Err = ScoreParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (hard, soft) = s
            .split_once('/')
            .ok_or_else(|| ScoreParseError::Format(s.to_string()))?;
        Ok(HardSoftScore::of(
            parse_level(hard, ScoreLevel::Hard, s)?,
            parse_level(soft, ScoreLevel::Soft, s)?,
        ))
    }
}
