//! Argument parsing for contract entry points.
//!
//! Entry points receive each argument as an optional byte buffer. These
//! helpers decode it and translate codec failures into [`ApiError`]s the
//! caller can abort with. Bytes after the decoded value are ignored.

use super::error::{ApiError, ErrorCode};
use crate::ser::{ByteView, FromBytes, Outcome};

/// Decodes an argument with a caller-supplied decoder.
///
/// A missing argument maps to [`ErrorCode::MissingArgument`], a decode failure
/// to [`ErrorCode::InvalidArgument`].
pub fn parse_arg_with<T, F>(arg: Option<&[u8]>, decode: F) -> Result<T, ApiError>
where
    F: FnOnce(ByteView<'_>) -> Outcome<T>,
{
    parse(
        arg,
        decode,
        ErrorCode::MissingArgument.into(),
        ErrorCode::InvalidArgument.into(),
    )
}

/// Decodes an argument through its [`FromBytes`] impl.
pub fn parse_arg<T: FromBytes>(arg: Option<&[u8]>) -> Result<T, ApiError> {
    parse_arg_with(arg, T::from_bytes)
}

/// Decodes an argument, reporting failures as contract-defined user errors.
pub fn parse_arg_or_user_error<T: FromBytes>(
    arg: Option<&[u8]>,
    missing: u16,
    invalid: u16,
) -> Result<T, ApiError> {
    parse(
        arg,
        T::from_bytes,
        ApiError::from_user_error(missing),
        ApiError::from_user_error(invalid),
    )
}

fn parse<T, F>(
    arg: Option<&[u8]>,
    decode: F,
    missing: ApiError,
    invalid: ApiError,
) -> Result<T, ApiError>
where
    F: FnOnce(ByteView<'_>) -> Outcome<T>,
{
    let bytes = arg.ok_or(missing)?;
    match decode(ByteView::new(bytes)) {
        Outcome::Decoded { value, .. } => Ok(value),
        Outcome::Failed(error) => {
            tracing::debug!(%error, code = invalid.value(), "argument rejected");
            Err(invalid)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ser::decode_string;

    #[test]
    fn missing_and_invalid_arguments_map_to_generic_codes() {
        let missing = parse_arg::<u64>(None).unwrap_err();
        assert_eq!(missing, ApiError::from_error_code(ErrorCode::MissingArgument));

        let invalid = parse_arg::<u64>(Some(&[1u8, 2, 3][..])).unwrap_err();
        assert_eq!(invalid, ApiError::from_error_code(ErrorCode::InvalidArgument));
    }

    #[test]
    fn trailing_bytes_are_ignored() {
        let arg = [2u8, 0, 0, 0, b'o', b'k', 0xff];
        assert_eq!(parse_arg_with(Some(&arg[..]), decode_string).unwrap(), "ok");
    }

    #[test]
    fn user_codes_are_offset() {
        let err = parse_arg_or_user_error::<String>(None, 101, 103).unwrap_err();
        assert_eq!(err.user_code(), Some(101));
        let err = parse_arg_or_user_error::<String>(Some(&[9u8][..]), 101, 103).unwrap_err();
        assert_eq!(err.user_code(), Some(103));
    }
}
