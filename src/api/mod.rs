//! Host boundary: abort codes and argument parsing for contract entry points.

mod args;
mod error;

pub use args::{parse_arg, parse_arg_or_user_error, parse_arg_with};
pub use error::{
    ApiError, ErrorCode, PosErrorCode, POS_ERROR_CODE_OFFSET, SYSTEM_CONTRACT_ERROR_CODE_OFFSET,
    USER_ERROR_CODE_OFFSET,
};
