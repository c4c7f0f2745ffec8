//! Pluggable rules deciding whether a pattern is acceptable
//!
//! Generators check every pattern they build against a [`PatternValidator`] and
//! discard the ones it rejects. The default rule, [`AcceptAll`], does not yet
//! enforce minimum-length or intermediate-point rules; [`AllOf::strict`] combines
//! the stricter rules below.

use crate::grid::layout::GridShape;
use crate::io::configuration::MIN_PATTERN_POINTS;
use crate::pattern::sequence::Pattern;
use bitvec::{bitvec, vec::BitVec};
use std::fmt;

/// A rule a pattern must satisfy
pub trait PatternValidator: fmt::Debug {
    /// Whether the pattern satisfies the rule
    fn validate(&self, pattern: &Pattern) -> bool;

    /// Short rule name for diagnostics
    fn name(&self) -> &'static str;
}

/// Accepts every pattern
///
/// Placeholder for the minimum-length and intermediate-point rules, which are
/// not enforced by default.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl PatternValidator for AcceptAll {
    fn validate(&self, _pattern: &Pattern) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "accept-all"
    }
}

/// Requires at least the given number of points
#[derive(Debug, Clone, Copy)]
pub struct MinimumLength(pub usize);

impl Default for MinimumLength {
    fn default() -> Self {
        Self(MIN_PATTERN_POINTS)
    }
}

impl PatternValidator for MinimumLength {
    fn validate(&self, pattern: &Pattern) -> bool {
        pattern.len() >= self.0
    }

    fn name(&self) -> &'static str {
        "minimum-length"
    }
}

/// Rejects patterns visiting a dot twice
#[derive(Debug, Clone, Copy, Default)]
pub struct DistinctPoints;

impl PatternValidator for DistinctPoints {
    fn validate(&self, pattern: &Pattern) -> bool {
        let mut sorted = pattern.points().to_vec();
        sorted.sort_unstable();
        sorted.windows(2).all(|pair| pair.first() != pair.last())
    }

    fn name(&self) -> &'static str {
        "distinct-points"
    }
}

/// Rejects indices outside the pattern's own grid
#[derive(Debug, Clone, Copy, Default)]
pub struct WithinGrid;

impl PatternValidator for WithinGrid {
    fn validate(&self, pattern: &Pattern) -> bool {
        let dot_count = pattern.shape().dot_count();
        pattern.points().iter().all(|&point| point < dot_count)
    }

    fn name(&self) -> &'static str {
        "within-grid"
    }
}

/// Rejects segments passing straight over a dot that has not been visited yet
///
/// A segment from column/row `(c1, r1)` to `(c2, r2)` crosses the centre of
/// `gcd(|c2 - c1|, |r2 - r1|) - 1` other dots. Crossing a dot is allowed only
/// once that dot is already part of the pattern. Indices outside the grid fail.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSkippedDots;

impl PatternValidator for NoSkippedDots {
    fn validate(&self, pattern: &Pattern) -> bool {
        let shape = pattern.shape();
        let mut visited: BitVec = bitvec![0; shape.dot_count()];

        let Some(&first) = pattern.points().first() else {
            return true;
        };
        if shape.coordinates_of(first).is_none() {
            return false;
        }
        visited.set(first, true);

        for (from, to) in pattern.segments() {
            let (Some(start), Some(end)) = (shape.coordinates_of(from), shape.coordinates_of(to))
            else {
                return false;
            };

            let skipped = intermediate_indices(shape, start, end)
                .into_iter()
                .any(|index| !visited.get(index).is_some_and(|bit| *bit));
            if skipped {
                return false;
            }

            visited.set(to, true);
        }

        true
    }

    fn name(&self) -> &'static str {
        "no-skipped-dots"
    }
}

/// Satisfied when every contained rule is
#[derive(Debug, Default)]
pub struct AllOf(pub Vec<Box<dyn PatternValidator>>);

impl AllOf {
    /// Minimum length, distinct in-grid indices and no skipped dots
    pub fn strict() -> Self {
        Self(vec![
            Box::new(MinimumLength::default()),
            Box::new(DistinctPoints),
            Box::new(WithinGrid),
            Box::new(NoSkippedDots),
        ])
    }

    /// Name of the first rule the pattern breaks, if any
    pub fn first_failure(&self, pattern: &Pattern) -> Option<&'static str> {
        self.0
            .iter()
            .find(|rule| !rule.validate(pattern))
            .map(|rule| rule.name())
    }
}

impl PatternValidator for AllOf {
    fn validate(&self, pattern: &Pattern) -> bool {
        self.first_failure(pattern).is_none()
    }

    fn name(&self) -> &'static str {
        "all-of"
    }
}

/// Flattened indices of the dots lying strictly between two grid coordinates
pub fn intermediate_indices(
    shape: GridShape,
    start: (usize, usize),
    end: (usize, usize),
) -> Vec<usize> {
    let delta_column = end.0 as i64 - start.0 as i64;
    let delta_row = end.1 as i64 - start.1 as i64;
    let steps = gcd(delta_column.unsigned_abs(), delta_row.unsigned_abs()) as i64;

    if steps <= 1 {
        return Vec::new();
    }

    let step_column = delta_column / steps;
    let step_row = delta_row / steps;

    (1..steps)
        .filter_map(|k| {
            let column = usize::try_from(start.0 as i64 + step_column * k).ok()?;
            let row = usize::try_from(start.1 as i64 + step_row * k).ok()?;
            shape.index_of(column, row)
        })
        .collect()
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
