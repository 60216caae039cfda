//! Core library for Iranian banking and identity numbers.
//!
//! This crate provides:
//! - Sheba (Iranian IBAN) validation via ISO 7064 MOD97-10
//! - Bidirectional Sheba <-> bank account number conversion
//! - The bank registry keyed by the central bank's 3-digit codes
//! - National ID validation with issuing-office resolution
//!
//! Everything is pure and synchronous: inputs are strings, outputs are
//! freshly allocated results, and the only shared data is the static
//! registries, so all functions are safe to call from any thread.

pub mod banks;
pub mod checksum;
pub mod error;
pub mod locations;
pub mod national_id;
pub mod patterns;
pub mod sheba;

pub use banks::{lookup_bank, AccountNumberRule, BankEntry, BANKS};
pub use checksum::{is_valid_iban, mod97};
pub use error::{Result, ShebaError};
pub use locations::{lookup_location, IssuingLocation, LOCATIONS};
pub use national_id::{validate_national_id, NationalIdRejection, NationalIdValidation};
pub use sheba::{account_to_sheba, sheba_to_account, ShebaConversion};
