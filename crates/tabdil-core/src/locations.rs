//! Issuing-authority registry: 3-digit national ID prefixes and the
//! registration office (province/city) they denote.
//!
//! Parallel in shape to the bank registry but logically separate. The
//! table is a curated subset of the official civil-registry list covering
//! the provincial registration offices; codes outside it are reported as
//! unknown without affecting checksum validity.

use serde::Serialize;

/// One registration office resolved from a national ID prefix.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct IssuingLocation {
    /// 3-digit issuing-authority code, unique key.
    pub code: &'static str,
    /// Persian province name.
    pub province: &'static str,
    /// Persian city name of the registration office.
    pub city: &'static str,
}

macro_rules! office {
    ($code:literal, $province:literal, $city:literal) => {
        IssuingLocation {
            code: $code,
            province: $province,
            city: $city,
        }
    };
}

/// Known issuing-authority codes, sorted by code.
pub static LOCATIONS: &[IssuingLocation] = &[
    office!("001", "تهران", "تهران"),
    office!("002", "تهران", "تهران"),
    office!("003", "تهران", "تهران"),
    office!("004", "تهران", "تهران"),
    office!("005", "تهران", "تهران"),
    office!("006", "تهران", "تهران"),
    office!("007", "تهران", "تهران"),
    office!("008", "تهران", "تهران"),
    office!("031", "البرز", "کرج"),
    office!("032", "البرز", "کرج"),
    office!("037", "قم", "قم"),
    office!("038", "قم", "قم"),
    office!("051", "مرکزی", "اراک"),
    office!("052", "مرکزی", "اراک"),
    office!("053", "مرکزی", "اراک"),
    office!("058", "خراسان شمالی", "بجنورد"),
    office!("059", "خراسان شمالی", "بجنورد"),
    office!("064", "خراسان جنوبی", "بیرجند"),
    office!("065", "خراسان جنوبی", "بیرجند"),
    office!("092", "خراسان رضوی", "مشهد"),
    office!("093", "خراسان رضوی", "مشهد"),
    office!("094", "خراسان رضوی", "مشهد"),
    office!("127", "اصفهان", "اصفهان"),
    office!("128", "اصفهان", "اصفهان"),
    office!("129", "اصفهان", "اصفهان"),
    office!("136", "آذربایجان شرقی", "تبریز"),
    office!("137", "آذربایجان شرقی", "تبریز"),
    office!("138", "آذربایجان شرقی", "تبریز"),
    office!("145", "اردبیل", "اردبیل"),
    office!("146", "اردبیل", "اردبیل"),
    office!("174", "خوزستان", "اهواز"),
    office!("175", "خوزستان", "اهواز"),
    office!("205", "مازندران", "ساری"),
    office!("206", "مازندران", "ساری"),
    office!("211", "گلستان", "گرگان"),
    office!("212", "گلستان", "گرگان"),
    office!("228", "فارس", "شیراز"),
    office!("229", "فارس", "شیراز"),
    office!("230", "فارس", "شیراز"),
    office!("258", "گیلان", "رشت"),
    office!("259", "گیلان", "رشت"),
    office!("274", "آذربایجان غربی", "ارومیه"),
    office!("275", "آذربایجان غربی", "ارومیه"),
    office!("298", "کرمان", "کرمان"),
    office!("299", "کرمان", "کرمان"),
    office!("324", "کرمانشاه", "کرمانشاه"),
    office!("325", "کرمانشاه", "کرمانشاه"),
    office!("338", "هرمزگان", "بندرعباس"),
    office!("339", "هرمزگان", "بندرعباس"),
    office!("345", "بوشهر", "بوشهر"),
    office!("346", "بوشهر", "بوشهر"),
    office!("361", "سیستان و بلوچستان", "زاهدان"),
    office!("362", "سیستان و بلوچستان", "زاهدان"),
    office!("372", "کردستان", "سنندج"),
    office!("373", "کردستان", "سنندج"),
    office!("386", "همدان", "همدان"),
    office!("387", "همدان", "همدان"),
    office!("405", "لرستان", "خرم‌آباد"),
    office!("406", "لرستان", "خرم‌آباد"),
    office!("423", "کهگیلویه و بویراحمد", "یاسوج"),
    office!("424", "کهگیلویه و بویراحمد", "یاسوج"),
    office!("427", "زنجان", "زنجان"),
    office!("428", "زنجان", "زنجان"),
    office!("431", "قزوین", "قزوین"),
    office!("432", "قزوین", "قزوین"),
    office!("442", "یزد", "یزد"),
    office!("443", "یزد", "یزد"),
    office!("447", "ایلام", "ایلام"),
    office!("448", "ایلام", "ایلام"),
    office!("456", "سمنان", "سمنان"),
    office!("457", "سمنان", "سمنان"),
    office!("461", "چهارمحال و بختیاری", "شهرکرد"),
    office!("462", "چهارمحال و بختیاری", "شهرکرد"),
];

/// Look up the registration office for a 3-digit issuing code.
pub fn lookup_location(code: &str) -> Option<&'static IssuingLocation> {
    LOCATIONS
        .binary_search_by(|entry| entry.code.cmp(code))
        .ok()
        .map(|idx| &LOCATIONS[idx])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_table_sorted_and_unique() {
        for pair in LOCATIONS.windows(2) {
            assert!(pair[0].code < pair[1].code, "table must stay sorted");
        }
    }

    #[test]
    fn test_lookup_known_codes() {
        assert_eq!(lookup_location("001").map(|l| l.province), Some("تهران"));
        assert_eq!(lookup_location("093").map(|l| l.city), Some("مشهد"));
        assert_eq!(lookup_location("230").map(|l| l.city), Some("شیراز"));
    }

    #[test]
    fn test_lookup_unknown_code() {
        assert!(lookup_location("123").is_none());
        assert!(lookup_location("000").is_none());
        assert!(lookup_location("").is_none());
    }
}
