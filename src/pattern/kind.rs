use crate::io::error::{DotPatternError, invalid_parameter};
use std::fmt;

/// Kinds of pattern a generator can be asked for
///
/// The discriminants are part of the external interface: hosts may select a
/// kind by number through [`PatternKind::try_from`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
#[repr(u8)]
pub enum PatternKind {
    /// Random walk over distinct dots
    #[default]
    Random = 0,
    /// Pattern maximising a complexity measure; not implemented and never produced
    MaxComplexity = 1,
}

impl TryFrom<u8> for PatternKind {
    type Error = DotPatternError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Random),
            1 => Ok(Self::MaxComplexity),
            _ => Err(invalid_parameter(
                "pattern_kind",
                &value,
                &"expected 0 (random) or 1 (max complexity)",
            )),
        }
    }
}

impl From<PatternKind> for u8 {
    fn from(kind: PatternKind) -> Self {
        kind as Self
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Random => f.write_str("random"),
            Self::MaxComplexity => f.write_str("max-complexity"),
        }
    }
}
