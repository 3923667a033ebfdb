//! # Validation Module
//!
//! Cổng kiểm tra chạy trước mọi thay đổi số dư, theo thứ tự ưu tiên:
//! 1. Account bị khóa → `AccountLocked`
//! 2. Số tiền ≤ 0 → `NonPositiveAmount`
//! 3. Không phải Deposit và số dư < số tiền → `InsufficientFunds`
//! 4. Còn lại → Approved

use crate::error::{TransactionError, TxResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Loại giao dịch đi qua cổng kiểm tra
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Deposit,
    Withdrawal,
    Transfer,
}

impl OperationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Deposit => "deposit",
            OperationKind::Withdrawal => "withdrawal",
            OperationKind::Transfer => "transfer",
        }
    }

    /// Nhãn hiển thị trong thông báo ("Deposit", "Withdrawal", "Transfer")
    pub fn label(&self) -> &'static str {
        match self {
            OperationKind::Deposit => "Deposit",
            OperationKind::Withdrawal => "Withdrawal",
            OperationKind::Transfer => "Transfer",
        }
    }

    /// Deposit không cần kiểm tra số dư
    pub fn requires_funds(&self) -> bool {
        !matches!(self, OperationKind::Deposit)
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Mã kết quả dạng số của mọi giao dịch.
///
/// | Code | Ý nghĩa |
/// |------|---------|
/// | 1    | thành công |
/// | 0    | không đủ số dư |
/// | -1   | số tiền không dương |
/// | -2   | account bị khóa |
/// | -3   | số dư sau giao dịch vượt phạm vi Decimal |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultCode {
    Success,
    InsufficientFunds,
    NonPositiveAmount,
    AccountLocked,
    BalanceOverflow,
}

impl ResultCode {
    pub fn as_i32(&self) -> i32 {
        match self {
            ResultCode::Success => 1,
            ResultCode::InsufficientFunds => 0,
            ResultCode::NonPositiveAmount => -1,
            ResultCode::AccountLocked => -2,
            ResultCode::BalanceOverflow => -3,
        }
    }

    pub fn from_i32(code: i32) -> Option<Self> {
        match code {
            1 => Some(ResultCode::Success),
            0 => Some(ResultCode::InsufficientFunds),
            -1 => Some(ResultCode::NonPositiveAmount),
            -2 => Some(ResultCode::AccountLocked),
            -3 => Some(ResultCode::BalanceOverflow),
            _ => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ResultCode::Success)
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i32())
    }
}

impl<T> From<&TxResult<T>> for ResultCode {
    fn from(result: &TxResult<T>) -> Self {
        match result {
            Ok(_) => ResultCode::Success,
            Err(err) => err.code(),
        }
    }
}

/// Chạy cổng kiểm tra cho một giao dịch.
///
/// Hàm thuần: không thay đổi state, chỉ trả về lý do từ chối đầu tiên.
pub fn check(kind: OperationKind, amount: Decimal, balance: Decimal, locked: bool) -> TxResult<()> {
    if locked {
        return Err(TransactionError::AccountLocked { kind });
    }
    if amount <= Decimal::ZERO {
        return Err(TransactionError::NonPositiveAmount { kind, amount });
    }
    if kind.requires_funds() && balance < amount {
        return Err(TransactionError::InsufficientFunds {
            kind,
            available: balance,
            requested: amount,
        });
    }
    Ok(())
}
