//! # Account Module
//!
//! Định nghĩa Account - tài khoản ngân hàng thuộc về một AccountHolder.
//! Số dư chỉ thay đổi qua deposit / withdraw / transfer_to, và mọi giao dịch
//! đều đi qua cổng kiểm tra trong [`crate::validation`].

use crate::error::{TransactionError, TxResult};
use crate::holder::AccountHolder;
use crate::notice::{Notice, Receipt};
use crate::policy::AccountPolicy;
use crate::validation::{self, OperationKind};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Các loại Investment account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvestmentKind {
    /// Đầu tư cá nhân - bị giới hạn rút tiền
    Individual,
    /// Đầu tư doanh nghiệp
    Corporate,
}

impl InvestmentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvestmentKind::Individual => "individual",
            InvestmentKind::Corporate => "corporate",
        }
    }
}

/// Loại account.
///
/// Individual và Corporate đều thuộc nhóm Investment; Checking thì không.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Checking,
    Investment(InvestmentKind),
}

impl AccountType {
    pub fn individual() -> Self {
        AccountType::Investment(InvestmentKind::Individual)
    }

    pub fn corporate() -> Self {
        AccountType::Investment(InvestmentKind::Corporate)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Checking => "checking",
            AccountType::Investment(kind) => kind.as_str(),
        }
    }

    /// Parse từ string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "checking" => Some(AccountType::Checking),
            "individual" => Some(AccountType::individual()),
            "corporate" => Some(AccountType::corporate()),
            _ => None,
        }
    }

    /// Kiểm tra có thuộc nhóm Investment không
    pub fn is_investment(&self) -> bool {
        matches!(self, AccountType::Investment(_))
    }

    pub fn is_individual_investment(&self) -> bool {
        matches!(self, AccountType::Investment(InvestmentKind::Individual))
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Tài khoản ngân hàng.
///
/// Mỗi Account:
/// - Sở hữu riêng một AccountHolder
/// - Có loại (Checking, Individual, Corporate)
/// - Có cờ `locked`, mặc định false
#[derive(Debug, Clone)]
pub struct Account {
    account_type: AccountType,
    owner: AccountHolder,
    balance: Decimal,
    locked: bool,
    policy: AccountPolicy,
}

impl Account {
    /// Tạo Account mới với số dư khởi tạo, chưa bị khóa
    pub fn new(account_type: AccountType, owner: AccountHolder, initial_balance: Decimal) -> Self {
        Self {
            account_type,
            owner,
            balance: initial_balance,
            locked: false,
            policy: AccountPolicy::default(),
        }
    }

    /// Thay chính sách mặc định
    pub fn with_policy(mut self, policy: AccountPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn account_type(&self) -> AccountType {
        self.account_type
    }

    pub fn owner(&self) -> &AccountHolder {
        &self.owner
    }

    pub fn owner_name(&self) -> &str {
        self.owner.name()
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn policy(&self) -> &AccountPolicy {
        &self.policy
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Khóa account, mọi giao dịch sau đó bị từ chối
    pub fn freeze(&mut self) {
        self.locked = true;
    }

    /// Mở khóa account
    pub fn unfreeze(&mut self) {
        self.locked = false;
    }

    /// Chạy cổng kiểm tra cho giao dịch trên account này, không thay đổi state.
    pub fn validate(&self, kind: OperationKind, amount: Decimal) -> TxResult<()> {
        validation::check(kind, amount, self.balance, self.locked)
    }

    fn gate(&self, kind: OperationKind, amount: Decimal) -> TxResult<()> {
        if let Err(err) = self.validate(kind, amount) {
            tracing::debug!(
                owner = self.owner.name(),
                kind = kind.as_str(),
                %amount,
                code = err.code().as_i32(),
                "Transaction canceled"
            );
            return Err(err);
        }
        Ok(())
    }

    /// Nạp tiền. Không kiểm tra số dư.
    pub fn deposit(&mut self, amount: Decimal) -> TxResult<Receipt> {
        self.gate(OperationKind::Deposit, amount)?;

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(TransactionError::BalanceOverflow {
                kind: OperationKind::Deposit,
            })?;
        tracing::debug!(owner = self.owner.name(), %amount, balance = %self.balance, "Deposit applied");

        Ok(
            Receipt::new(OperationKind::Deposit, amount, amount, self.balance)
                .with_notice(Notice::Deposited { amount }),
        )
    }

    /// Rút tiền.
    ///
    /// Kiểm tra với số tiền yêu cầu, sau đó mới áp dụng giới hạn rút của
    /// Individual Investment.
    pub fn withdraw(&mut self, amount: Decimal) -> TxResult<Receipt> {
        self.gate(OperationKind::Withdrawal, amount)?;

        let (applied, cap_notice) = self.policy.apply_withdrawal_cap(self.account_type, amount);
        if cap_notice.is_some() {
            tracing::info!(owner = self.owner.name(), requested = %amount, %applied, "Withdrawal cap applied");
        }

        self.balance = self
            .balance
            .checked_sub(applied)
            .ok_or(TransactionError::BalanceOverflow {
                kind: OperationKind::Withdrawal,
            })?;
        tracing::debug!(owner = self.owner.name(), %applied, balance = %self.balance, "Withdrawal applied");

        let mut receipt = Receipt::new(OperationKind::Withdrawal, amount, applied, self.balance);
        if let Some(notice) = cap_notice {
            receipt = receipt.with_notice(notice);
        }
        Ok(receipt.with_notice(Notice::Withdrew { amount: applied }))
    }

    /// Chuyển tiền sang account khác.
    ///
    /// Chỉ account nguồn được kiểm tra; account nhận luôn nhận tiền, kể cả
    /// khi đang bị khóa.
    pub fn transfer_to(&mut self, receiver: &mut Account, amount: Decimal) -> TxResult<Receipt> {
        self.gate(OperationKind::Transfer, amount)?;

        // Tính cả hai số dư trước, chỉ ghi khi cả hai hợp lệ
        let overflow = TransactionError::BalanceOverflow {
            kind: OperationKind::Transfer,
        };
        let sender_balance = self.balance.checked_sub(amount).ok_or(overflow.clone())?;
        let receiver_balance = receiver.balance.checked_add(amount).ok_or(overflow)?;

        self.balance = sender_balance;
        receiver.balance = receiver_balance;
        tracing::debug!(
            from = self.owner.name(),
            to = receiver.owner.name(),
            %amount,
            "Transfer applied"
        );

        Ok(
            Receipt::new(OperationKind::Transfer, amount, amount, self.balance).with_notice(
                Notice::Transferred {
                    amount,
                    receiver: receiver.owner_name().to_string(),
                },
            ),
        )
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Account {} (owner: {}, balance: {}, locked: {})",
            self.account_type,
            self.owner.name(),
            self.balance,
            self.locked
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ResultCode;
    use rust_decimal_macros::dec;

    fn holder(name: &str) -> AccountHolder {
        AccountHolder::new(name, "1/1/90", "000-00-0000")
    }

    fn account(account_type: AccountType, balance: Decimal) -> Account {
        Account::new(account_type, holder("Test Owner"), balance)
    }

    #[test]
    fn test_account_type_classification() {
        assert!(!AccountType::Checking.is_investment());
        assert!(AccountType::individual().is_investment());
        assert!(AccountType::corporate().is_investment());

        assert!(AccountType::individual().is_individual_investment());
        assert!(!AccountType::corporate().is_individual_investment());
    }

    #[test]
    fn test_account_type_str() {
        assert_eq!(AccountType::Checking.as_str(), "checking");
        assert_eq!(AccountType::from_str("INDIVIDUAL"), Some(AccountType::individual()));
        assert_eq!(AccountType::from_str("corporate"), Some(AccountType::corporate()));
        assert_eq!(AccountType::from_str("savings"), None);
    }

    #[test]
    fn test_account_creation() {
        let acc = Account::new(AccountType::Checking, holder("Steve Barnes"), dec!(1257.00));

        assert_eq!(acc.balance(), dec!(1257.00));
        assert_eq!(acc.owner_name(), "Steve Barnes");
        assert_eq!(acc.account_type(), AccountType::Checking);
        assert!(!acc.is_locked());
    }

    #[test]
    fn test_deposit_increases_balance() {
        let mut acc = account(AccountType::Checking, dec!(1257.00));
        let receipt = acc.deposit(dec!(37.49)).unwrap();

        assert_eq!(acc.balance(), dec!(1294.49));
        assert_eq!(receipt.balance_after, dec!(1294.49));
        assert_eq!(receipt.notices, vec![Notice::Deposited { amount: dec!(37.49) }]);
    }

    #[test]
    fn test_deposit_ignores_sufficiency() {
        let mut acc = account(AccountType::Checking, dec!(-20));
        assert!(acc.deposit(dec!(5)).is_ok());
        assert_eq!(acc.balance(), dec!(-15));
    }

    #[test]
    fn test_non_positive_amount_leaves_balance() {
        let mut acc = account(AccountType::Checking, dec!(100));
        let mut other = account(AccountType::Checking, dec!(100));

        for amount in [dec!(0), dec!(-10), dec!(-0.01)] {
            let result = acc.deposit(amount);
            assert_eq!(ResultCode::from(&result), ResultCode::NonPositiveAmount);

            let result = acc.withdraw(amount);
            assert_eq!(ResultCode::from(&result), ResultCode::NonPositiveAmount);

            let result = acc.transfer_to(&mut other, amount);
            assert_eq!(ResultCode::from(&result), ResultCode::NonPositiveAmount);
        }

        assert_eq!(acc.balance(), dec!(100));
        assert_eq!(other.balance(), dec!(100));
    }

    #[test]
    fn test_insufficient_funds() {
        let mut acc = account(AccountType::corporate(), dec!(100));
        let mut other = account(AccountType::Checking, dec!(0));

        let err = acc.withdraw(dec!(100.01)).unwrap_err();
        assert_eq!(err.code(), ResultCode::InsufficientFunds);

        let err = acc.transfer_to(&mut other, dec!(150)).unwrap_err();
        assert_eq!(err.code(), ResultCode::InsufficientFunds);

        assert_eq!(acc.balance(), dec!(100));
        assert_eq!(other.balance(), dec!(0));
    }

    #[test]
    fn test_locked_account_rejects_everything() {
        let mut acc = account(AccountType::Checking, dec!(100));
        let mut other = account(AccountType::Checking, dec!(100));
        acc.freeze();
        assert!(acc.is_locked());

        assert_eq!(acc.deposit(dec!(10)).unwrap_err().code(), ResultCode::AccountLocked);
        assert_eq!(acc.withdraw(dec!(-10)).unwrap_err().code(), ResultCode::AccountLocked);
        assert_eq!(
            acc.transfer_to(&mut other, dec!(1000)).unwrap_err().code(),
            ResultCode::AccountLocked
        );
        assert_eq!(acc.balance(), dec!(100));

        acc.unfreeze();
        assert!(acc.withdraw(dec!(10)).is_ok());
        assert_eq!(acc.balance(), dec!(90));
    }

    #[test]
    fn test_individual_withdrawal_cap() {
        let mut acc = account(AccountType::individual(), dec!(853.00));
        let receipt = acc.withdraw(dec!(600)).unwrap();

        assert_eq!(acc.balance(), dec!(353.00));
        assert_eq!(receipt.requested, dec!(600));
        assert_eq!(receipt.applied, dec!(500));
        assert!(receipt.was_capped());
        assert_eq!(receipt.notices.last(), Some(&Notice::Withdrew { amount: dec!(500) }));
    }

    #[test]
    fn test_cap_validates_requested_amount() {
        // Kiểm tra số dư với số tiền yêu cầu, trước khi giảm về cap
        let mut acc = account(AccountType::individual(), dec!(600));
        let err = acc.withdraw(dec!(700)).unwrap_err();

        assert!(err.is_insufficient_funds());
        assert_eq!(acc.balance(), dec!(600));
    }

    #[test]
    fn test_corporate_and_checking_not_capped() {
        let mut corp = account(AccountType::corporate(), dec!(2000));
        let receipt = corp.withdraw(dec!(700)).unwrap();
        assert!(!receipt.was_capped());
        assert_eq!(corp.balance(), dec!(1300));

        let mut checking = account(AccountType::Checking, dec!(2000));
        checking.withdraw(dec!(1500)).unwrap();
        assert_eq!(checking.balance(), dec!(500));
    }

    #[test]
    fn test_custom_policy() {
        let mut acc = account(AccountType::individual(), dec!(1000))
            .with_policy(AccountPolicy::with_cap(dec!(100)));
        let receipt = acc.withdraw(dec!(300)).unwrap();

        assert_eq!(receipt.applied, dec!(100));
        assert_eq!(acc.balance(), dec!(900));
    }

    #[test]
    fn test_transfer_conservation() {
        let mut corp = Account::new(AccountType::corporate(), holder("Freddy Corp"), dec!(1692037.00));
        let mut alex = Account::new(AccountType::individual(), holder("Alex Smith"), dec!(353.00));

        let receipt = corp.transfer_to(&mut alex, dec!(1100)).unwrap();

        assert_eq!(corp.balance(), dec!(1690937.00));
        assert_eq!(alex.balance(), dec!(1453.00));
        assert_eq!(
            receipt.notices,
            vec![Notice::Transferred {
                amount: dec!(1100),
                receiver: "Alex Smith".to_string()
            }]
        );
    }

    #[test]
    fn test_transfer_to_locked_receiver() {
        let mut sender = account(AccountType::Checking, dec!(500));
        let mut receiver = account(AccountType::individual(), dec!(0));
        receiver.freeze();

        assert!(sender.transfer_to(&mut receiver, dec!(200)).is_ok());
        assert_eq!(sender.balance(), dec!(300));
        assert_eq!(receiver.balance(), dec!(200));
    }

    #[test]
    fn test_transfer_to_individual_not_capped() {
        let mut sender = account(AccountType::individual(), dec!(2000));
        let mut receiver = account(AccountType::Checking, dec!(0));

        sender.transfer_to(&mut receiver, dec!(1500)).unwrap();
        assert_eq!(sender.balance(), dec!(500));
        assert_eq!(receiver.balance(), dec!(1500));
    }

    #[test]
    fn test_deposit_overflow_rejected() {
        let mut acc = account(AccountType::Checking, dec!(1));

        let err = acc.deposit(Decimal::MAX).unwrap_err();
        assert_eq!(err.code(), ResultCode::BalanceOverflow);
        assert_eq!(acc.balance(), dec!(1));
    }

    #[test]
    fn test_transfer_overflow_leaves_both_balances() {
        let mut sender = account(AccountType::Checking, dec!(10));
        let mut receiver = account(AccountType::Checking, Decimal::MAX);

        let result = sender.transfer_to(&mut receiver, dec!(1));
        assert_eq!(ResultCode::from(&result), ResultCode::BalanceOverflow);
        assert_eq!(sender.balance(), dec!(10));
        assert_eq!(receiver.balance(), Decimal::MAX);
    }

    #[test]
    fn test_account_display() {
        let acc = Account::new(AccountType::Checking, holder("Steve Barnes"), dec!(10));
        assert_eq!(
            format!("{}", acc),
            "Account checking (owner: Steve Barnes, balance: 10, locked: false)"
        );
    }
}
