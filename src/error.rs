use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the enumeration routines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input is longer than the enumerator's configured maximum.
    #[error("input of {len} characters exceeds the configured maximum of {max}")]
    ResourceLimitExceeded { len: usize, max: usize },

    /// A subsequence count does not fit in a `u128`.
    #[error("subsequence count for an input of {len} characters overflows u128")]
    CountOverflow { len: usize },
}

impl Error {
    pub fn resource_limit(len: usize, max: usize) -> Self {
        Error::ResourceLimitExceeded { len, max }
    }

    pub fn count_overflow(len: usize) -> Self {
        Error::CountOverflow { len }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::resource_limit(30, 20);
        assert_eq!(
            err.to_string(),
            "input of 30 characters exceeds the configured maximum of 20"
        );
        assert_eq!(
            Error::count_overflow(200).to_string(),
            "subsequence count for an input of 200 characters overflows u128"
        );
    }
}
