use super::error::{CodecError, CodecResult, Status};

/// Result of a single decode attempt.
///
/// A decoded outcome carries the value and the number of bytes consumed from
/// the view handed to the decoder (not a global stream position). A failed
/// outcome carries the error classification and reports zero consumption.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Outcome<T> {
    /// The value decoded successfully.
    Decoded {
        /// Decoded value.
        value: T,
        /// Bytes consumed from the input view.
        consumed: usize,
    },
    /// The decode failed.
    Failed(CodecError),
}

impl<T> Outcome<T> {
    /// Creates a success outcome.
    pub fn decoded(value: T, consumed: usize) -> Self {
        Outcome::Decoded { value, consumed }
    }

    /// Creates a failure outcome.
    pub fn failed(error: CodecError) -> Self {
        Outcome::Failed(error)
    }

    /// Shorthand for a truncated-input failure.
    pub fn early_end() -> Self {
        Outcome::Failed(CodecError::EarlyEndOfStream)
    }

    /// Shorthand for a malformed-input failure.
    pub fn formatting() -> Self {
        Outcome::Failed(CodecError::FormattingError)
    }

    /// Builds an outcome from an internal step result.
    pub fn from_result(result: CodecResult<(T, usize)>) -> Self {
        match result {
            Ok((value, consumed)) => Outcome::Decoded { value, consumed },
            Err(error) => Outcome::Failed(error),
        }
    }

    pub fn has_value(&self) -> bool {
        matches!(self, Outcome::Decoded { .. })
    }

    pub fn has_error(&self) -> bool {
        !self.has_value()
    }

    /// Returns the error classification, if any.
    pub fn error(&self) -> Option<CodecError> {
        match self {
            Outcome::Decoded { .. } => None,
            Outcome::Failed(error) => Some(*error),
        }
    }

    /// Returns the status code of this outcome.
    pub fn status(&self) -> Status {
        match self {
            Outcome::Decoded { .. } => Status::Ok,
            Outcome::Failed(error) => error.status(),
        }
    }

    /// Bytes consumed from the input view; zero for failures.
    pub fn consumed(&self) -> usize {
        match self {
            Outcome::Decoded { consumed, .. } => *consumed,
            Outcome::Failed(_) => 0,
        }
    }

    /// Borrows the decoded value.
    ///
    /// # Panics
    ///
    /// Panics when called on a failed outcome. Check [`Outcome::has_value`]
    /// first.
    pub fn value(&self) -> &T {
        match self {
            Outcome::Decoded { value, .. } => value,
            Outcome::Failed(error) => panic!("value() called on failed outcome: {error}"),
        }
    }

    /// Takes the decoded value.
    ///
    /// # Panics
    ///
    /// Panics when called on a failed outcome.
    pub fn into_value(self) -> T {
        match self {
            Outcome::Decoded { value, .. } => value,
            Outcome::Failed(error) => panic!("into_value() called on failed outcome: {error}"),
        }
    }

    /// Returns the value if present, discarding the error.
    pub fn ok(self) -> Option<T> {
        match self {
            Outcome::Decoded { value, .. } => Some(value),
            Outcome::Failed(_) => None,
        }
    }

    /// Converts into a `Result` pairing the value with its consumption.
    pub fn into_result(self) -> CodecResult<(T, usize)> {
        match self {
            Outcome::Decoded { value, consumed } => Ok((value, consumed)),
            Outcome::Failed(error) => Err(error),
        }
    }

    /// Maps the decoded value, keeping the consumption.
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Decoded { value, consumed } => Outcome::Decoded {
                value: f(value),
                consumed,
            },
            Outcome::Failed(error) => Outcome::Failed(error),
        }
    }

    /// Validates the decoded value; a rejected value becomes a
    /// [`CodecError::FormattingError`].
    pub fn and_then_validate<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Outcome::Decoded { value, consumed } => match f(value) {
                Some(mapped) => Outcome::Decoded {
                    value: mapped,
                    consumed,
                },
                None => Outcome::formatting(),
            },
            Outcome::Failed(error) => Outcome::Failed(error),
        }
    }
}

impl<T> From<Outcome<T>> for CodecResult<T> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result().map(|(value, _)| value)
    }
}
