//! # Notice Module
//!
//! Thông báo sinh ra bởi giao dịch thành công, và [`Receipt`] - kết quả
//! trả về cho caller (số tiền thực tế, số dư sau giao dịch).

use crate::validation::{OperationKind, ResultCode};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// Thông báo cho người dùng
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "notice", rename_all = "snake_case")]
pub enum Notice {
    /// Số tiền rút vượt giới hạn, đã bị giảm về `cap`
    WithdrawalCapApplied { requested: Decimal, cap: Decimal },
    Deposited { amount: Decimal },
    Withdrew { amount: Decimal },
    Transferred { amount: Decimal, receiver: String },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::WithdrawalCapApplied { cap, .. } => write!(
                f,
                "Notification: Individual Investment accounts have a withdrawal limit of ${:.2}.\nThis transaction has been set to this limit.",
                cap
            ),
            Notice::Deposited { amount } => {
                write!(f, "Notification: Deposit of ${} successful.", amount)
            }
            Notice::Withdrew { amount } => {
                write!(f, "Notification: Withdrawal of ${} successful.", amount)
            }
            Notice::Transferred { amount, receiver } => write!(
                f,
                "Notification: Transfer of ${} to {} successful.",
                amount, receiver
            ),
        }
    }
}

/// Kết quả của một giao dịch đã được duyệt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    pub kind: OperationKind,
    /// Số tiền caller yêu cầu
    pub requested: Decimal,
    /// Số tiền thực sự được áp dụng (có thể nhỏ hơn `requested` do giới hạn rút)
    pub applied: Decimal,
    /// Số dư của account nguồn sau giao dịch
    pub balance_after: Decimal,
    pub notices: Vec<Notice>,
}

impl Receipt {
    pub fn new(kind: OperationKind, requested: Decimal, applied: Decimal, balance_after: Decimal) -> Self {
        Self {
            kind,
            requested,
            applied,
            balance_after,
            notices: Vec::new(),
        }
    }

    pub fn with_notice(mut self, notice: Notice) -> Self {
        self.notices.push(notice);
        self
    }

    pub fn code(&self) -> ResultCode {
        ResultCode::Success
    }

    /// Có bị giảm về giới hạn rút tiền không
    pub fn was_capped(&self) -> bool {
        self.notices
            .iter()
            .any(|n| matches!(n, Notice::WithdrawalCapApplied { .. }))
    }
}
