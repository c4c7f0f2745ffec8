//! Seeded pattern generation over a dot grid

use crate::grid::layout::GridShape;
use crate::io::configuration::MIN_PATTERN_POINTS;
use crate::pattern::kind::PatternKind;
use crate::pattern::sequence::Pattern;
use crate::pattern::validity::{AcceptAll, PatternValidator};
use log::debug;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Anything exposing a grid shape and a dot count to generate patterns against
pub trait DotGrid {
    /// Column and row counts
    fn shape(&self) -> GridShape;

    /// Number of dots currently stored
    fn dot_count(&self) -> usize;
}

impl DotGrid for GridShape {
    fn shape(&self) -> GridShape {
        *self
    }

    fn dot_count(&self) -> usize {
        GridShape::dot_count(*self)
    }
}

/// Range random candidate indices are drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SamplingPolicy {
    /// Candidates are `round(u * (n - 1))`: always a valid dot index
    #[default]
    Clamped,
    /// Candidates are `round(u * n)`: can produce the out-of-range index `n`,
    /// which truncates the drawn pattern at that point
    Inclusive,
}

impl SamplingPolicy {
    /// Largest candidate index for a grid of `dot_count` dots
    pub const fn upper_bound(self, dot_count: usize) -> usize {
        match self {
            Self::Clamped => dot_count.saturating_sub(1),
            Self::Inclusive => dot_count,
        }
    }

    /// Number of distinct candidates for a grid of `dot_count` dots
    pub const fn pool_size(self, dot_count: usize) -> usize {
        self.upper_bound(dot_count).saturating_add(1)
    }
}

/// Produces patterns from a seeded random source
///
/// The same seed, policy and sequence of requests always yields the same
/// patterns.
#[derive(Debug)]
pub struct PatternGenerator {
    rng: StdRng,
    sampling: SamplingPolicy,
    validator: Box<dyn PatternValidator>,
}

impl PatternGenerator {
    /// Generator with clamped sampling that accepts every pattern
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            sampling: SamplingPolicy::default(),
            validator: Box::new(AcceptAll),
        }
    }

    /// Replace the sampling policy
    #[must_use]
    pub fn with_sampling(mut self, sampling: SamplingPolicy) -> Self {
        self.sampling = sampling;
        self
    }

    /// Replace the rule generated patterns are checked against
    #[must_use]
    pub fn with_validator(mut self, validator: Box<dyn PatternValidator>) -> Self {
        self.validator = validator;
        self
    }

    /// Sampling policy in use
    pub const fn sampling(&self) -> SamplingPolicy {
        self.sampling
    }

    /// Rule generated patterns are checked against
    pub fn validator(&self) -> &dyn PatternValidator {
        self.validator.as_ref()
    }

    /// Generate a pattern of the requested kind for a grid
    ///
    /// Returns `None` for grids with fewer than two dots, for
    /// [`PatternKind::MaxComplexity`], and for patterns the validator rejects.
    pub fn generate<G: DotGrid + ?Sized>(&mut self, grid: &G, kind: PatternKind) -> Option<Pattern> {
        let dot_count = grid.dot_count();
        if dot_count <= 1 {
            debug!("no {kind} pattern: grid holds {dot_count} dot(s)");
            return None;
        }

        match kind {
            PatternKind::Random => self.random_pattern(grid.shape(), dot_count),
            PatternKind::MaxComplexity => {
                debug!("no {kind} pattern: kind is not implemented");
                None
            }
        }
    }

    /// Random walk over distinct candidate indices, in draw order
    fn random_pattern(&mut self, shape: GridShape, dot_count: usize) -> Option<Pattern> {
        let iterations = self.iteration_count(dot_count);
        let upper_bound = self.sampling.upper_bound(dot_count);

        let mut pattern = Pattern::with_shape(shape, Vec::with_capacity(iterations));
        while pattern.len() < iterations {
            let candidate = self.candidate_index(upper_bound);
            if !pattern.contains_point(candidate) {
                pattern.push(candidate);
            }
        }

        if pattern.is_valid_with(self.validator.as_ref()) {
            debug!("generated pattern {pattern}");
            Some(pattern)
        } else {
            debug!(
                "discarded pattern {pattern}: rejected by {}",
                self.validator.name()
            );
            None
        }
    }

    /// Number of points to draw: `round(u * (n - 4) + 4)`, capped by the candidate pool
    fn iteration_count(&mut self, dot_count: usize) -> usize {
        let minimum = MIN_PATTERN_POINTS as f64;
        let raw = self
            .rng
            .random::<f64>()
            .mul_add(dot_count as f64 - minimum, minimum)
            .round()
            .max(0.0) as usize;
        raw.min(self.sampling.pool_size(dot_count))
    }

    fn candidate_index(&mut self, upper_bound: usize) -> usize {
        (self.rng.random::<f64>() * upper_bound as f64).round() as usize
    }
}
