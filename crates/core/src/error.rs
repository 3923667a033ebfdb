//! # Error Module
//!
//! Các lý do từ chối giao dịch. Đây là kết quả nghiệp vụ có thể phục hồi,
//! không phải lỗi hệ thống: giao dịch bị hủy và số dư giữ nguyên.

use crate::validation::{OperationKind, ResultCode};
use rust_decimal::Decimal;
use thiserror::Error;

/// Lý do giao dịch bị hủy.
///
/// `Display` trả về thông báo cho người dùng.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransactionError {
    #[error("Account is locked. {kind} is not possible.\nTransaction has been canceled.")]
    AccountLocked { kind: OperationKind },

    #[error("{kind} Error: {kind} amount should be greater than 0.\nTransaction has been canceled.")]
    NonPositiveAmount { kind: OperationKind, amount: Decimal },

    #[error(
        "{kind} Error: Insufficient Funds in account.\nTotal funds: ${available}\n{kind} amount: ${requested}\nTransaction has been canceled."
    )]
    InsufficientFunds {
        kind: OperationKind,
        available: Decimal,
        requested: Decimal,
    },

    #[error("{kind} Error: Resulting balance is out of range.\nTransaction has been canceled.")]
    BalanceOverflow { kind: OperationKind },
}

/// Result type alias với TransactionError
pub type TxResult<T> = Result<T, TransactionError>;

impl TransactionError {
    /// Mã kết quả dạng số tương ứng
    pub fn code(&self) -> ResultCode {
        match self {
            TransactionError::AccountLocked { .. } => ResultCode::AccountLocked,
            TransactionError::NonPositiveAmount { .. } => ResultCode::NonPositiveAmount,
            TransactionError::InsufficientFunds { .. } => ResultCode::InsufficientFunds,
            TransactionError::BalanceOverflow { .. } => ResultCode::BalanceOverflow,
        }
    }

    /// Loại giao dịch bị từ chối
    pub fn kind(&self) -> OperationKind {
        match self {
            TransactionError::AccountLocked { kind }
            | TransactionError::NonPositiveAmount { kind, .. }
            | TransactionError::InsufficientFunds { kind, .. }
            | TransactionError::BalanceOverflow { kind } => *kind,
        }
    }

    pub fn is_insufficient_funds(&self) -> bool {
        matches!(self, TransactionError::InsufficientFunds { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_error_display() {
        let err = TransactionError::AccountLocked {
            kind: OperationKind::Withdrawal,
        };
        assert_eq!(
            err.to_string(),
            "Account is locked. Withdrawal is not possible.\nTransaction has been canceled."
        );

        let err = TransactionError::NonPositiveAmount {
            kind: OperationKind::Deposit,
            amount: dec!(-10),
        };
        assert_eq!(
            err.to_string(),
            "Deposit Error: Deposit amount should be greater than 0.\nTransaction has been canceled."
        );
    }

    #[test]
    fn test_insufficient_funds_display() {
        let err = TransactionError::InsufficientFunds {
            kind: OperationKind::Withdrawal,
            available: dec!(353.00),
            requested: dec!(1000),
        };
        let message = err.to_string();

        assert!(message.starts_with("Withdrawal Error: Insufficient Funds in account."));
        assert!(message.contains("Total funds: $353.00"));
        assert!(message.contains("Withdrawal amount: $1000"));
        assert!(err.is_insufficient_funds());
    }

    #[test]
    fn test_error_code_and_kind() {
        let err = TransactionError::InsufficientFunds {
            kind: OperationKind::Transfer,
            available: dec!(1),
            requested: dec!(2),
        };
        assert_eq!(err.code(), ResultCode::InsufficientFunds);
        assert_eq!(err.code().as_i32(), 0);
        assert_eq!(err.kind(), OperationKind::Transfer);
    }

    #[test]
    fn test_overflow_display() {
        let err = TransactionError::BalanceOverflow {
            kind: OperationKind::Deposit,
        };
        assert_eq!(
            err.to_string(),
            "Deposit Error: Resulting balance is out of range.\nTransaction has been canceled."
        );
        assert_eq!(err.code().as_i32(), -3);
    }
}
