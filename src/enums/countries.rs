//! Countries a number can be bought in.
//!
//! Codes mirror what the GetAlts API sends and accepts. They are mostly
//! ISO 3166-1 alpha-2, with the service's own exceptions kept as-is
//! (`uk` for the United Kingdom, `tg` for Chad).

use super::wire::wire_enum;

wire_enum! {
    /// GetAlts country identifiers.
    pub enum Country("country") {
        Russia => "ru",
        Ukraine => "ua",
        Kazakhstan => "kz",
        China => "cn",
        Philippines => "ph",
        Myanmar => "mm",
        Indonesia => "id",
        Malaysia => "my",
        Kenya => "ke",
        Tanzania => "tz",
        Vietnam => "vn",
        Kyrgyzstan => "kg",
        Usa => "us",
        Israel => "il",
        HongKong => "hk",
        Poland => "pl",
        UnitedKingdom => "uk",
        Madagascar => "mg",
        Congo => "cg",
        Nigeria => "ng",
        Macau => "mo",
        Egypt => "eg",
        Ireland => "ie",
        Cambodia => "kh",
        Lao => "la",
        Haiti => "ht",
        IvoryCoast => "ci",
        Gambia => "gm",
        Serbia => "rs",
        Yemen => "ye",
        SouthAfrica => "za",
        Romania => "ro",
        Estonia => "ee",
        Azerbaijan => "az",
        Canada => "ca",
        Morocco => "ma",
        Ghana => "gh",
        Argentina => "ar",
        Uzbekistan => "uz",
        Cameroon => "cm",
        /// Chad. The service uses "tg" here, not the ISO "td".
        Chad => "tg",
        Germany => "de",
        Lithuania => "lt",
        Croatia => "hr",
        Iraq => "iq",
        Netherlands => "nl",
        India => "in",
    }
}
