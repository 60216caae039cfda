//! Bidirectional conversion between Sheba (Iranian IBAN) and bank-native
//! account numbers.
//!
//! A Sheba is 26 characters: `IR`, 2 check digits, a 3-digit bank code and
//! a 19-digit payload holding the zero-padded account number. The mod-97
//! check is the one standardized piece; recovering the native account
//! number from the payload is bank policy and lives in the registry.

use serde::Serialize;
use tracing::debug;

use crate::banks::{lookup_bank, BankEntry};
use crate::checksum::{is_valid_iban, mod97};
use crate::error::{Result, ShebaError};
use crate::patterns::DIGITS_ONLY;

/// Bank code of Resalat, the one bank with a deterministic card-number
/// derivation from the account number.
const RESALAT_CODE: &str = "070";

/// Fixed 8-digit card issuer prefix for Resalat cards.
const RESALAT_CARD_PREFIX: &str = "50417290";

/// Longest account number the card derivation applies to.
const RESALAT_CARD_MAX_ACCOUNT: usize = 13;

/// Outcome of a successful Sheba → account conversion.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ShebaConversion {
    /// 3-digit bank code taken from the IBAN.
    pub bank_code: String,
    /// Persian display name of the bank.
    pub bank_name: String,
    /// Reference to the bank's logo asset.
    pub bank_logo: String,
    /// Bank-native account number, digits only.
    pub account_number: String,
    /// 16-digit card number, when the bank has a derivation rule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub possible_card_number: Option<String>,
}

/// Strip formatting from a raw Sheba input: whitespace and dash grouping
/// separators plus an optional leading `IR` in any case. Returns the bare
/// body the caller validates.
fn normalize_body(raw: &str) -> String {
    let compact: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect::<String>()
        .to_uppercase();

    compact
        .strip_prefix("IR")
        .map(str::to_string)
        .unwrap_or(compact)
}

/// Convert a raw Sheba string into the owning bank and native account
/// number.
///
/// Failures are checked in order; the first one wins:
/// length, digits-only, mod-97 checksum, bank registry lookup.
pub fn sheba_to_account(raw: &str) -> Result<ShebaConversion> {
    let body = normalize_body(raw);

    if body.len() != 24 {
        return Err(ShebaError::InvalidLength);
    }
    if !DIGITS_ONLY.is_match(&body) {
        return Err(ShebaError::NonNumeric);
    }

    let iban = format!("IR{body}");
    if !is_valid_iban(&iban) {
        return Err(ShebaError::ChecksumMismatch);
    }

    let bank_code = &body[2..5];
    let payload = &body[5..24];

    let bank = lookup_bank(bank_code)
        .ok_or_else(|| ShebaError::UnsupportedBank(bank_code.to_string()))?;

    let account_number = bank.account_rule.extract(payload);
    let possible_card_number = derive_card_number(bank, &account_number);

    debug!(bank = bank.code, account = %account_number, "decoded sheba");

    Ok(ShebaConversion {
        bank_code: bank.code.to_string(),
        bank_name: bank.name.to_string(),
        bank_logo: bank.logo.to_string(),
        account_number,
        possible_card_number,
    })
}

/// Best-effort card number for banks with a published account → card rule.
///
/// Resalat issues cards as the fixed issuer prefix followed by the account
/// number zero-padded to 8 digits. Accounts longer than the published rule
/// covers get no card number.
fn derive_card_number(bank: &BankEntry, account: &str) -> Option<String> {
    if bank.code == RESALAT_CODE && account.len() <= RESALAT_CARD_MAX_ACCOUNT {
        let card = format!("{RESALAT_CARD_PREFIX}{account:0>8}");
        if card.len() == 16 {
            return Some(card);
        }
    }
    None
}

/// Build a Sheba from a bank-native account number.
///
/// The account is stripped of non-digit formatting, zero-padded to the
/// bank's payload width and prefixed with the ISO 7064 check digits
/// computed over `bank_code + payload + "182700"` (the letter-expanded
/// form of a trailing `IR00`).
pub fn account_to_sheba(account: &str, bank_code: &str) -> Result<String> {
    let bank = lookup_bank(bank_code)
        .ok_or_else(|| ShebaError::UnsupportedBank(bank_code.to_string()))?;

    let cleaned: String = account.chars().filter(char::is_ascii_digit).collect();
    if cleaned.is_empty() {
        return Err(ShebaError::NonNumeric);
    }

    let width = bank.payload_length();
    if cleaned.len() > width {
        return Err(ShebaError::AccountTooLong);
    }
    let padded = format!("{cleaned:0>width$}");

    let preliminary = format!("{}{}182700", bank.code, padded);
    let check = 98 - mod97(&preliminary);

    // ISO 7064 excludes 00 and 01 as IBAN check digits; they cannot arise
    // from this construction for registered bank codes.
    debug_assert!(check >= 2 && check <= 98);

    let sheba = format!("IR{check:02}{}{}", bank.code, padded);
    debug!(bank = bank.code, sheba = %sheba, "built sheba");

    Ok(sheba)
}
