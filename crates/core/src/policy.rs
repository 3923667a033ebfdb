//! # Policy Module
//!
//! Chính sách áp dụng cho từng loại account. Hiện tại chỉ có giới hạn
//! rút tiền của Individual Investment account.

use crate::account::AccountType;
use crate::notice::Notice;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Giới hạn rút tiền mặc định cho Individual Investment
pub const DEFAULT_INDIVIDUAL_WITHDRAWAL_CAP: u32 = 500;

/// Chính sách account, có thể load từ file cấu hình.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountPolicy {
    /// Số tiền tối đa cho một lần rút từ Individual Investment account
    pub individual_withdrawal_cap: Decimal,
}

impl Default for AccountPolicy {
    fn default() -> Self {
        Self {
            individual_withdrawal_cap: Decimal::from(DEFAULT_INDIVIDUAL_WITHDRAWAL_CAP),
        }
    }
}

impl AccountPolicy {
    pub fn with_cap(cap: Decimal) -> Self {
        Self {
            individual_withdrawal_cap: cap,
        }
    }

    /// Tính số tiền rút thực tế.
    ///
    /// Chỉ Individual Investment bị giới hạn; yêu cầu lớn hơn cap được giảm
    /// về đúng cap (không từ chối) kèm theo notice.
    pub fn apply_withdrawal_cap(
        &self,
        account_type: AccountType,
        requested: Decimal,
    ) -> (Decimal, Option<Notice>) {
        let cap = self.individual_withdrawal_cap;
        if account_type.is_individual_investment() && requested > cap {
            (cap, Some(Notice::WithdrawalCapApplied { requested, cap }))
        } else {
            (requested, None)
        }
    }
}
