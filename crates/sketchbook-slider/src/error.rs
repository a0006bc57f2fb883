use thiserror::Error;

/// Which end of the selected range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Bound {
    Lower,
    Upper,
}

impl std::fmt::Display for Bound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Bound::Lower => f.write_str("lower"),
            Bound::Upper => f.write_str("upper"),
        }
    }
}

/// Construction-time precondition violations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SliderError {
    #[error("list of steps has to contain at least 3 values, got {len}")]
    TooFewSteps { len: usize },

    #[error("steps have to be strictly increasing, step {index} is not above its predecessor")]
    StepsNotIncreasing { index: usize },

    #[error("selected {which} bound has to be part of the provided steps")]
    BoundNotInSteps { which: Bound },

    #[error("selected lower bound has to come before the selected upper bound")]
    BoundsOutOfOrder,
}
