//! # Holder Module
//!
//! Định nghĩa AccountHolder - chủ sở hữu của một Account.
//! Định danh nhạy cảm (SSN, CCCD, ...) không bao giờ được trả ra ngoài,
//! chỉ có thể so sánh với giá trị do caller cung cấp.

use std::fmt;

/// Chủ tài khoản.
///
/// Immutable sau khi tạo. Mỗi holder thuộc về đúng một [`crate::Account`].
#[derive(Clone, PartialEq, Eq)]
pub struct AccountHolder {
    name: String,
    /// Ngày sinh dạng text, không parse
    birthday: String,
    identifier: String,
}

impl AccountHolder {
    /// Tạo AccountHolder mới
    pub fn new(name: &str, birthday: &str, identifier: &str) -> Self {
        Self {
            name: name.to_string(),
            birthday: birthday.to_string(),
            identifier: identifier.to_string(),
        }
    }

    /// Tên hiển thị
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ngày sinh, trả về nguyên dạng đã lưu
    pub fn birthday(&self) -> &str {
        &self.birthday
    }

    /// So sánh `candidate` với định danh đã lưu.
    ///
    /// So sánh chính xác từng ký tự: phân biệt hoa thường, không chuẩn hóa.
    pub fn validate_identifier(&self, candidate: &str) -> bool {
        self.identifier == candidate
    }
}

impl fmt::Debug for AccountHolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountHolder")
            .field("name", &self.name)
            .field("birthday", &self.birthday)
            .field("identifier", &"<redacted>")
            .finish()
    }
}

impl fmt::Display for AccountHolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (born {})", self.name, self.birthday)
    }
}
