//! # Bank Demo Core
//!
//! Các kiểu dữ liệu cốt lõi của Bank Demo:
//! - [`AccountHolder`]: chủ tài khoản, giữ định danh nhạy cảm
//! - [`Account`]: tài khoản với deposit / withdraw / transfer đã qua kiểm tra
//! - [`validation`]: cổng kiểm tra (lock → amount → funds) và [`ResultCode`]
//! - [`AccountPolicy`]: chính sách giới hạn rút tiền cho Individual Investment

pub mod account;
pub mod error;
pub mod holder;
pub mod notice;
pub mod policy;
pub mod validation;

pub use account::{Account, AccountType, InvestmentKind};
pub use error::{TransactionError, TxResult};
pub use holder::AccountHolder;
pub use notice::{Notice, Receipt};
pub use policy::AccountPolicy;
pub use validation::{OperationKind, ResultCode};
