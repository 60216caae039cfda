//! Error types for the tabdil-core library.

use thiserror::Error;

/// Errors raised by Sheba (IBAN) validation and conversion.
///
/// Every variant is a deterministic validation failure of the input; there
/// are no transient failure modes. The display text is the Persian message
/// shown to end users, so callers should branch on the variant, not parse
/// the message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShebaError {
    /// The IBAN body is not exactly 24 digits after normalization.
    #[error("شماره شبا باید ۲۴ رقم پس از IR داشته باشد")]
    InvalidLength,

    /// The IBAN body contains non-digit characters after normalization.
    #[error("شماره شبا فقط می‌تواند شامل رقم باشد")]
    NonNumeric,

    /// The ISO 7064 mod-97 check failed.
    #[error("شماره شبا معتبر نیست")]
    ChecksumMismatch,

    /// The 3-digit bank code is not present in the registry.
    #[error("بانک با کد {0} پشتیبانی نمی‌شود")]
    UnsupportedBank(String),

    /// The native account number is longer than the bank's IBAN payload.
    #[error("شماره حساب از طول مجاز شبا بلندتر است")]
    AccountTooLong,
}

/// Result type for Sheba conversion operations.
pub type Result<T> = std::result::Result<T, ShebaError>;
