use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RefError {
    #[error("unknown functional code {0}")]
    UnknownCode(i32),

    #[error("invalid spin setting {0}, expected 1 (unpolarized) or 2 (polarized)")]
    InvalidSpin(i32),

    #[error("{what} buffer holds {found} values, {expected} expected for {np} points")]
    Dimension {
        what: &'static str,
        np: usize,
        expected: usize,
        found: usize,
    },

    #[error("threshold must be positive and finite, got {0}")]
    Threshold(f64),
}

pub type RefResult<T> = Result<T, RefError>;
