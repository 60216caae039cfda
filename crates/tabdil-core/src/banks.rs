//! Bank registry: 3-digit bank codes and per-bank account number policies.
//!
//! The 3-digit codes are the identifiers assigned by the Central Bank of
//! Iran and embedded in positions 5-7 of every Iranian IBAN. The registry
//! is a static table fixed at compile time; there are no mutation
//! operations.

use serde::Serialize;

/// How a bank's native account number is recovered from the 19-digit
/// IBAN payload.
///
/// The payload is the native account number left-padded with zeros, but
/// padding conventions differ per bank, so the rule is stored per entry
/// rather than applied globally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountNumberRule {
    /// Drop the leading zero padding; the remainder is the account number.
    StripLeadingZeros,
    /// Use the payload as-is, padding included.
    Identity,
}

impl AccountNumberRule {
    /// Apply the rule to the raw 19-digit payload.
    pub fn extract(self, raw_payload: &str) -> String {
        match self {
            AccountNumberRule::StripLeadingZeros => {
                let stripped = raw_payload.trim_start_matches('0');
                if stripped.is_empty() {
                    // An all-zero payload still denotes account "0".
                    "0".to_string()
                } else {
                    stripped.to_string()
                }
            }
            AccountNumberRule::Identity => raw_payload.to_string(),
        }
    }
}

/// One registered banking institution.
#[derive(Debug, Clone, Serialize)]
pub struct BankEntry {
    /// 3-digit code assigned by the central bank, unique key.
    pub code: &'static str,
    /// Persian display name.
    pub name: &'static str,
    /// Opaque reference to the bank's logo asset; not interpreted here.
    pub logo: &'static str,
    /// How to recover the native account number from the IBAN payload.
    pub account_rule: AccountNumberRule,
    /// Fixed digit-length the native account number is zero-padded to when
    /// building an IBAN. `None` means the full 19-digit payload width.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sheba_length: Option<usize>,
}

/// Default IBAN payload width when a bank has no configured length.
pub const DEFAULT_SHEBA_LENGTH: usize = 19;

impl BankEntry {
    /// The payload width used when padding this bank's account numbers.
    pub fn payload_length(&self) -> usize {
        self.sheba_length.unwrap_or(DEFAULT_SHEBA_LENGTH)
    }
}

macro_rules! bank {
    ($code:literal, $name:literal, $logo:literal) => {
        BankEntry {
            code: $code,
            name: $name,
            logo: $logo,
            account_rule: AccountNumberRule::StripLeadingZeros,
            sheba_length: None,
        }
    };
}

/// All banks recognized by the registry, sorted by code.
pub static BANKS: &[BankEntry] = &[
    bank!("010", "بانک مرکزی جمهوری اسلامی ایران", "banks/markazi.svg"),
    bank!("011", "بانک صنعت و معدن", "banks/sanat-madan.svg"),
    bank!("012", "بانک ملت", "banks/mellat.svg"),
    bank!("013", "بانک رفاه کارگران", "banks/refah.svg"),
    bank!("014", "بانک مسکن", "banks/maskan.svg"),
    bank!("015", "بانک سپه", "banks/sepah.svg"),
    bank!("016", "بانک کشاورزی", "banks/keshavarzi.svg"),
    bank!("017", "بانک ملی ایران", "banks/melli.svg"),
    bank!("018", "بانک تجارت", "banks/tejarat.svg"),
    bank!("019", "بانک صادرات ایران", "banks/saderat.svg"),
    bank!("020", "بانک توسعه صادرات ایران", "banks/tosee-saderat.svg"),
    bank!("021", "پست بانک ایران", "banks/post-bank.svg"),
    bank!("022", "بانک توسعه تعاون", "banks/tosee-taavon.svg"),
    bank!("051", "مؤسسه اعتباری توسعه", "banks/tosee.svg"),
    bank!("053", "بانک کارآفرین", "banks/karafarin.svg"),
    bank!("054", "بانک پارسیان", "banks/parsian.svg"),
    bank!("055", "بانک اقتصاد نوین", "banks/eghtesad-novin.svg"),
    bank!("056", "بانک سامان", "banks/saman.svg"),
    bank!("057", "بانک پاسارگاد", "banks/pasargad.svg"),
    bank!("058", "بانک سرمایه", "banks/sarmayeh.svg"),
    bank!("059", "بانک سینا", "banks/sina.svg"),
    bank!("060", "بانک قرض‌الحسنه مهر ایران", "banks/mehr-iran.svg"),
    bank!("061", "بانک شهر", "banks/shahr.svg"),
    bank!("062", "بانک آینده", "banks/ayandeh.svg"),
    bank!("063", "بانک انصار", "banks/ansar.svg"),
    bank!("064", "بانک گردشگری", "banks/gardeshgari.svg"),
    bank!("065", "بانک حکمت ایرانیان", "banks/hekmat.svg"),
    bank!("066", "بانک دی", "banks/dey.svg"),
    bank!("069", "بانک ایران زمین", "banks/iran-zamin.svg"),
    bank!("070", "بانک قرض‌الحسنه رسالت", "banks/resalat.svg"),
    bank!("073", "بانک کوثر", "banks/kosar.svg"),
    bank!("075", "مؤسسه اعتباری ملل", "banks/melal.svg"),
    bank!("078", "بانک خاورمیانه", "banks/khavarmianeh.svg"),
    bank!("080", "مؤسسه اعتباری نور", "banks/noor.svg"),
    bank!("095", "بانک ایران و ونزوئلا", "banks/iran-venezuela.svg"),
];

/// Look up a bank by its 3-digit code.
///
/// Returns `None` for codes not in the registry; callers surface that as
/// an "unsupported bank" outcome, distinct from a checksum failure.
pub fn lookup_bank(code: &str) -> Option<&'static BankEntry> {
    BANKS
        .binary_search_by(|entry| entry.code.cmp(code))
        .ok()
        .map(|idx| &BANKS[idx])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_registry_sorted_and_unique() {
        for pair in BANKS.windows(2) {
            assert!(pair[0].code < pair[1].code, "registry must stay sorted");
        }
    }

    #[test]
    fn test_lookup_known_banks() {
        assert_eq!(lookup_bank("012").map(|b| b.name), Some("بانک ملت"));
        assert_eq!(lookup_bank("057").map(|b| b.name), Some("بانک پاسارگاد"));
        assert_eq!(
            lookup_bank("070").map(|b| b.name),
            Some("بانک قرض‌الحسنه رسالت")
        );
    }

    #[test]
    fn test_lookup_unknown_bank() {
        assert!(lookup_bank("999").is_none());
        assert!(lookup_bank("01").is_none());
        assert!(lookup_bank("").is_none());
    }

    #[test]
    fn test_strip_leading_zeros() {
        let rule = AccountNumberRule::StripLeadingZeros;
        assert_eq!(rule.extract("0000000004586572526"), "4586572526");
        assert_eq!(rule.extract("0000000000000000000"), "0");
        assert_eq!(rule.extract("1234567890123456789"), "1234567890123456789");
    }

    #[test]
    fn test_identity_rule() {
        let rule = AccountNumberRule::Identity;
        assert_eq!(rule.extract("0000000004586572526"), "0000000004586572526");
    }

    #[test]
    fn test_default_payload_length() {
        let mellat = lookup_bank("012").unwrap();
        assert_eq!(mellat.payload_length(), DEFAULT_SHEBA_LENGTH);
    }
}
