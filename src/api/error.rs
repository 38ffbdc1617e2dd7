//! Numeric error space used when a contract aborts back to the host.
//!
//! The space is split into three ranges:
//!
//! * `1..SYSTEM_CONTRACT_ERROR_CODE_OFFSET`: generic [`ErrorCode`]s,
//! * `SYSTEM_CONTRACT_ERROR_CODE_OFFSET..=USER_ERROR_CODE_OFFSET`: system
//!   contract errors, including [`PosErrorCode`]s,
//! * above `USER_ERROR_CODE_OFFSET`: user-defined codes.
//!
//! `0` is reserved for success and never wrapped in an [`ApiError`].

use core::fmt;
use serde::{Deserialize, Serialize};

use crate::ser::{CodecError, DeserializeError};

/// First code of the system contract range.
pub const SYSTEM_CONTRACT_ERROR_CODE_OFFSET: u32 = 65024;

/// First code of the proof-of-stake range.
pub const POS_ERROR_CODE_OFFSET: u32 = 65280;

/// Last code of the system contract range; user codes start right after it.
pub const USER_ERROR_CODE_OFFSET: u32 = 65535;

/// Generic failures shared by every contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum ErrorCode {
    None = 1,
    MissingArgument = 2,
    InvalidArgument = 3,
    Deserialize = 4,
    Read = 5,
    ValueNotFound = 6,
    ContractNotFound = 7,
    GetKey = 8,
    UnexpectedKeyVariant = 9,
    UnexpectedContractRefVariant = 10,
    InvalidPurseName = 11,
    InvalidPurse = 12,
    UpgradeContractAtURef = 13,
    Transfer = 14,
    NoAccessRights = 15,
    CLTypeMismatch = 16,
    EarlyEndOfStream = 17,
    Formatting = 18,
    LeftOverBytes = 19,
    OutOfMemory = 20,
    MaxKeysLimit = 21,
    DuplicateKey = 22,
    PermissionDenied = 23,
    MissingKey = 24,
    ThresholdViolation = 25,
    KeyManagementThreshold = 26,
    DeploymentThreshold = 27,
    InsufficientTotalWeight = 28,
    InvalidSystemContract = 29,
    PurseNotCreated = 30,
    Unhandled = 31,
    BufferTooSmall = 32,
    HostBufferEmpty = 33,
    HostBufferFull = 34,
}

/// Proof-of-stake system contract failures, offset by [`POS_ERROR_CODE_OFFSET`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum PosErrorCode {
    NotBonded = 0,
    TooManyEventsInQueue = 1,
    CannotUnbondLastValidator = 2,
    SpreadTooHigh = 3,
    MultipleRequests = 4,
    BondTooSmall = 5,
    BondTooLarge = 6,
    UnbondTooLarge = 7,
    BondTransferFailed = 8,
    UnbondTransferFailed = 9,
    MissingArgument = 10,
    InvalidArgument = 11,
    TimeWentBackwards = 12,
    StakesNotFound = 13,
    PaymentPurseNotFound = 14,
    PaymentPurseKeyUnexpectedType = 15,
    PaymentPurseBalanceNotFound = 16,
    BondingPurseNotFound = 17,
    BondingPurseKeyUnexpectedType = 18,
    RefundPurseKeyUnexpectedType = 19,
    RewardsPurseNotFound = 20,
    RewardsPurseKeyUnexpectedType = 21,
    QueueNotStoredAsByteArray = 22,
    QueueDeserializationFailed = 23,
    QueueDeserializationExtraBytes = 24,
    StakesKeyDeserializationFailed = 25,
    StakesDeserializationFailed = 26,
    SystemFunctionCalledByUserAccount = 27,
    InsufficientPaymentForAmountSpent = 28,
    FailedTransferToRewardsPurse = 29,
    FailedTransferToAccountPurse = 30,
    SetRefundPurseCalledOutsidePayment = 31,
}

/// Non-zero abort code handed to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApiError(u32);

impl ApiError {
    /// Interprets a raw host status; `0` means success.
    pub fn from_result(result: u32) -> Option<Self> {
        (result != 0).then_some(ApiError(result))
    }

    pub const fn from_error_code(code: ErrorCode) -> Self {
        ApiError(code as u32)
    }

    pub const fn from_pos_error(code: PosErrorCode) -> Self {
        ApiError(POS_ERROR_CODE_OFFSET + code as u32)
    }

    /// Wraps a contract-defined code into the user range.
    pub const fn from_user_error(code: u16) -> Self {
        ApiError(USER_ERROR_CODE_OFFSET + 1 + code as u32)
    }

    /// Raw numeric code.
    pub const fn value(self) -> u32 {
        self.0
    }

    pub const fn is_user_error(self) -> bool {
        self.0 > USER_ERROR_CODE_OFFSET
    }

    pub const fn is_system_contract_error(self) -> bool {
        self.0 >= SYSTEM_CONTRACT_ERROR_CODE_OFFSET && self.0 <= USER_ERROR_CODE_OFFSET
    }

    /// Returns the user code if this error lies in the user range.
    pub fn user_code(self) -> Option<u16> {
        if !self.is_user_error() {
            return None;
        }
        u16::try_from(self.0 - USER_ERROR_CODE_OFFSET - 1).ok()
    }
}

impl From<ErrorCode> for ApiError {
    fn from(code: ErrorCode) -> Self {
        ApiError::from_error_code(code)
    }
}

impl From<PosErrorCode> for ApiError {
    fn from(code: PosErrorCode) -> Self {
        ApiError::from_pos_error(code)
    }
}

impl From<CodecError> for ApiError {
    fn from(error: CodecError) -> Self {
        match error {
            CodecError::EarlyEndOfStream => ErrorCode::EarlyEndOfStream.into(),
            CodecError::FormattingError => ErrorCode::Formatting.into(),
        }
    }
}

impl From<DeserializeError> for ApiError {
    fn from(error: DeserializeError) -> Self {
        match error {
            DeserializeError::Codec(error) => error.into(),
            DeserializeError::LeftOverBytes { .. } => ErrorCode::LeftOverBytes.into(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(code) = self.user_code() {
            write!(f, "user error {code}")
        } else if self.is_system_contract_error() {
            write!(f, "system contract error {}", self.0)
        } else {
            write!(f, "api error {}", self.0)
        }
    }
}

impl std::error::Error for ApiError {}
