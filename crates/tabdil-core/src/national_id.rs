//! Iranian national ID validation.
//!
//! The 10th digit is a check digit over the first nine: each digit is
//! weighted by its position (10 down to 2), the sum is taken mod 11, and
//! the expected check is the remainder itself when below 2, otherwise 11
//! minus the remainder. Valid IDs additionally resolve their 3-digit
//! prefix against the issuing-authority registry.

use serde::Serialize;
use tracing::debug;

use crate::locations::lookup_location;
use crate::patterns::NATIONAL_ID_SHAPE;

/// Why a national ID was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NationalIdRejection {
    /// Input is not exactly 10 digits.
    WrongLength,
    /// All ten digits are identical.
    RepeatedDigits,
    /// The check digit does not match the weighted sum.
    ChecksumMismatch,
}

impl NationalIdRejection {
    fn message(self) -> &'static str {
        match self {
            NationalIdRejection::WrongLength => "کد ملی باید دقیقاً ۱۰ رقم باشد",
            NationalIdRejection::RepeatedDigits => "کد ملی با ارقام تکراری معتبر نیست",
            NationalIdRejection::ChecksumMismatch => "کد ملی معتبر نیست",
        }
    }
}

/// Outcome of validating a national ID.
///
/// The message is already localized for direct display; programmatic
/// callers branch on `rejection` instead.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NationalIdValidation {
    /// Whether the ID passed all structural and checksum tests.
    pub is_valid: bool,
    /// Persian description of the outcome.
    pub message: String,
    /// Rejection kind, `None` when valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection: Option<NationalIdRejection>,
    /// Province of the registration office, when the prefix is known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    /// City of the registration office, when the prefix is known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

impl NationalIdValidation {
    fn rejected(rejection: NationalIdRejection) -> Self {
        Self {
            is_valid: false,
            message: rejection.message().to_string(),
            rejection: Some(rejection),
            province: None,
            city: None,
        }
    }
}

/// Validate a 10-digit Iranian national ID.
///
/// Checks run in order and the first failure wins: shape, repeated
/// digits, checksum. Location resolution only happens for valid IDs; an
/// unknown issuing code leaves the ID valid but without province/city.
pub fn validate_national_id(id: &str) -> NationalIdValidation {
    if !NATIONAL_ID_SHAPE.is_match(id) {
        return NationalIdValidation::rejected(NationalIdRejection::WrongLength);
    }

    let digits: Vec<u32> = id.chars().filter_map(|c| c.to_digit(10)).collect();

    let first = digits[0];
    if digits.iter().all(|&d| d == first) {
        return NationalIdValidation::rejected(NationalIdRejection::RepeatedDigits);
    }

    let sum: u32 = digits
        .iter()
        .take(9)
        .enumerate()
        .map(|(i, d)| d * (10 - i as u32))
        .sum();
    let remainder = sum % 11;
    let expected = if remainder < 2 { remainder } else { 11 - remainder };

    if digits[9] != expected {
        return NationalIdValidation::rejected(NationalIdRejection::ChecksumMismatch);
    }

    let location = lookup_location(&id[..3]);
    debug!(prefix = &id[..3], known = location.is_some(), "validated national id");

    match location {
        Some(office) => NationalIdValidation {
            is_valid: true,
            message: "کد ملی معتبر است".to_string(),
            rejection: None,
            province: Some(office.province.to_string()),
            city: Some(office.city.to_string()),
        },
        None => NationalIdValidation {
            is_valid: true,
            message: "کد ملی معتبر است؛ کد محل صدور ناشناخته است".to_string(),
            rejection: None,
            province: None,
            city: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_valid_tehran_id() {
        let result = validate_national_id("0012345679");
        assert!(result.is_valid);
        assert_eq!(result.rejection, None);
        assert_eq!(result.province.as_deref(), Some("تهران"));
        assert_eq!(result.city.as_deref(), Some("تهران"));
    }

    #[test]
    fn test_valid_mashhad_id() {
        let result = validate_national_id("0934567816");
        assert!(result.is_valid);
        assert_eq!(result.city.as_deref(), Some("مشهد"));
    }

    #[test]
    fn test_valid_id_unknown_office() {
        // Checksum holds but prefix 123 is not a registered office
        let result = validate_national_id("1234567891");
        assert!(result.is_valid);
        assert_eq!(result.province, None);
        assert_eq!(result.city, None);
    }

    #[test]
    fn test_repeated_digits() {
        for id in ["0000000000", "1111111111", "9999999999"] {
            let result = validate_national_id(id);
            assert!(!result.is_valid, "{id}");
            assert_eq!(result.rejection, Some(NationalIdRejection::RepeatedDigits));
        }
    }

    #[test]
    fn test_wrong_length() {
        for id in ["", "12345", "12345678901", "123456789x"] {
            let result = validate_national_id(id);
            assert!(!result.is_valid, "{id}");
            assert_eq!(result.rejection, Some(NationalIdRejection::WrongLength));
        }
    }

    #[test]
    fn test_persian_digits_rejected() {
        // Persian and Arabic-Indic digits must fail the shape check, not
        // reach the digit extraction
        for id in ["۱۲۳۴۵۶۷۸۹۰", "١٢٣٤٥٦٧٨٩٠", "۰۰۱۲۳۴۵۶۷۹"] {
            let result = validate_national_id(id);
            assert!(!result.is_valid, "{id}");
            assert_eq!(result.rejection, Some(NationalIdRejection::WrongLength));
        }
    }

    #[test]
    fn test_checksum_mismatch() {
        let result = validate_national_id("0012345678");
        assert!(!result.is_valid);
        assert_eq!(result.rejection, Some(NationalIdRejection::ChecksumMismatch));
        // No location resolution on invalid input
        assert_eq!(result.province, None);
    }

    #[test]
    fn test_remainder_below_two_branch() {
        // Weighted sums of 12 and 11: remainders 1 and 0 are used directly
        // as the check digit instead of being subtracted from 11.
        assert!(validate_national_id("0000000061").is_valid);
        assert!(validate_national_id("0000000140").is_valid);
    }
}
