//! Connect-the-dots patterns: data, kinds, validity rules and generation

/// Seeded random pattern generation
pub mod generator;
/// Closed set of pattern kinds
pub mod kind;
/// Pattern data and its queries
pub mod sequence;
/// Pluggable pattern validity rules
pub mod validity;

pub use generator::{DotGrid, PatternGenerator, SamplingPolicy};
pub use kind::PatternKind;
pub use sequence::Pattern;
pub use validity::PatternValidator;
