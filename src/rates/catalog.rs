//! Static currency catalog
//!
//! Read-only at runtime. Symbols are the glyphs printed on price tags,
//! which are not unique: a dozen currencies all use "$", so symbol lookup
//! returns every match and [`detect`] resolves ambiguity with the user's
//! configured source currency.

/// An entry in the currency catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Currency {
    /// ISO 4217 code, unique key
    pub code: &'static str,
    /// English display name
    pub name: &'static str,
    /// Symbol glyph as printed on tags
    pub symbol: &'static str,
    /// Emoji flag for display
    pub flag: &'static str,
}

/// All supported currencies
pub const CATALOG: &[Currency] = &[
    // Major World Currencies
    Currency { code: "USD", name: "US Dollar", symbol: "$", flag: "🇺🇸" },
    Currency { code: "EUR", name: "Euro", symbol: "€", flag: "🇪🇺" },
    Currency { code: "GBP", name: "British Pound", symbol: "£", flag: "🇬🇧" },
    Currency { code: "JPY", name: "Japanese Yen", symbol: "¥", flag: "🇯🇵" },
    Currency { code: "CNY", name: "Chinese Yuan", symbol: "¥", flag: "🇨🇳" },
    Currency { code: "CHF", name: "Swiss Franc", symbol: "Fr", flag: "🇨🇭" },
    // North America
    Currency { code: "CAD", name: "Canadian Dollar", symbol: "$", flag: "🇨🇦" },
    Currency { code: "MXN", name: "Mexican Peso", symbol: "$", flag: "🇲🇽" },
    // Central America & Caribbean
    Currency { code: "GTQ", name: "Guatemalan Quetzal", symbol: "Q", flag: "🇬🇹" },
    Currency { code: "HNL", name: "Honduran Lempira", symbol: "L", flag: "🇭🇳" },
    Currency { code: "NIO", name: "Nicaraguan Córdoba", symbol: "C$", flag: "🇳🇮" },
    Currency { code: "CRC", name: "Costa Rican Colón", symbol: "₡", flag: "🇨🇷" },
    Currency { code: "PAB", name: "Panamanian Balboa", symbol: "B/.", flag: "🇵🇦" },
    Currency { code: "BZD", name: "Belize Dollar", symbol: "$", flag: "🇧🇿" },
    Currency { code: "JMD", name: "Jamaican Dollar", symbol: "$", flag: "🇯🇲" },
    Currency { code: "TTD", name: "Trinidad Dollar", symbol: "$", flag: "🇹🇹" },
    Currency { code: "BBD", name: "Barbadian Dollar", symbol: "$", flag: "🇧🇧" },
    Currency { code: "BSD", name: "Bahamian Dollar", symbol: "$", flag: "🇧🇸" },
    Currency { code: "KYD", name: "Cayman Islands Dollar", symbol: "$", flag: "🇰🇾" },
    Currency { code: "XCD", name: "East Caribbean Dollar", symbol: "$", flag: "🇦🇬" },
    Currency { code: "DOP", name: "Dominican Peso", symbol: "$", flag: "🇩🇴" },
    Currency { code: "HTG", name: "Haitian Gourde", symbol: "G", flag: "🇭🇹" },
    Currency { code: "CUP", name: "Cuban Peso", symbol: "$", flag: "🇨🇺" },
    Currency { code: "AWG", name: "Aruban Florin", symbol: "ƒ", flag: "🇦🇼" },
    Currency { code: "ANG", name: "Netherlands Antillean Guilder", symbol: "ƒ", flag: "🇨🇼" },
    // South America
    Currency { code: "BRL", name: "Brazilian Real", symbol: "R$", flag: "🇧🇷" },
    Currency { code: "ARS", name: "Argentine Peso", symbol: "$", flag: "🇦🇷" },
    Currency { code: "CLP", name: "Chilean Peso", symbol: "$", flag: "🇨🇱" },
    Currency { code: "COP", name: "Colombian Peso", symbol: "$", flag: "🇨🇴" },
    Currency { code: "PEN", name: "Peruvian Sol", symbol: "S/", flag: "🇵🇪" },
    Currency { code: "UYU", name: "Uruguayan Peso", symbol: "$", flag: "🇺🇾" },
    Currency { code: "PYG", name: "Paraguayan Guarani", symbol: "₲", flag: "🇵🇾" },
    Currency { code: "BOB", name: "Bolivian Boliviano", symbol: "Bs", flag: "🇧🇴" },
    Currency { code: "VES", name: "Venezuelan Bolívar", symbol: "Bs", flag: "🇻🇪" },
    Currency { code: "GYD", name: "Guyanese Dollar", symbol: "$", flag: "🇬🇾" },
    Currency { code: "SRD", name: "Surinamese Dollar", symbol: "$", flag: "🇸🇷" },
    Currency { code: "FKP", name: "Falkland Islands Pound", symbol: "£", flag: "🇫🇰" },
    // Western Europe
    Currency { code: "NOK", name: "Norwegian Krone", symbol: "kr", flag: "🇳🇴" },
    Currency { code: "SEK", name: "Swedish Krona", symbol: "kr", flag: "🇸🇪" },
    Currency { code: "DKK", name: "Danish Krone", symbol: "kr", flag: "🇩🇰" },
    Currency { code: "ISK", name: "Icelandic Króna", symbol: "kr", flag: "🇮🇸" },
    // Eastern Europe
    Currency { code: "PLN", name: "Polish Zloty", symbol: "zł", flag: "🇵🇱" },
    Currency { code: "CZK", name: "Czech Koruna", symbol: "Kč", flag: "🇨🇿" },
    Currency { code: "HUF", name: "Hungarian Forint", symbol: "Ft", flag: "🇭🇺" },
    Currency { code: "RON", name: "Romanian Leu", symbol: "lei", flag: "🇷🇴" },
    Currency { code: "BGN", name: "Bulgarian Lev", symbol: "лв", flag: "🇧🇬" },
    Currency { code: "UAH", name: "Ukrainian Hryvnia", symbol: "₴", flag: "🇺🇦" },
    Currency { code: "RUB", name: "Russian Ruble", symbol: "₽", flag: "🇷🇺" },
    Currency { code: "BYN", name: "Belarusian Ruble", symbol: "Br", flag: "🇧🇾" },
    Currency { code: "MDL", name: "Moldovan Leu", symbol: "L", flag: "🇲🇩" },
    Currency { code: "RSD", name: "Serbian Dinar", symbol: "дин", flag: "🇷🇸" },
    Currency { code: "BAM", name: "Bosnia-Herzegovina Mark", symbol: "KM", flag: "🇧🇦" },
    Currency { code: "HRK", name: "Croatian Kuna", symbol: "kn", flag: "🇭🇷" },
    Currency { code: "MKD", name: "Macedonian Denar", symbol: "ден", flag: "🇲🇰" },
    Currency { code: "ALL", name: "Albanian Lek", symbol: "L", flag: "🇦🇱" },
    Currency { code: "GEL", name: "Georgian Lari", symbol: "₾", flag: "🇬🇪" },
    Currency { code: "AMD", name: "Armenian Dram", symbol: "֏", flag: "🇦🇲" },
    Currency { code: "AZN", name: "Azerbaijani Manat", symbol: "₼", flag: "🇦🇿" },
    // Middle East
    Currency { code: "TRY", name: "Turkish Lira", symbol: "₺", flag: "🇹🇷" },
    Currency { code: "ILS", name: "Israeli Shekel", symbol: "₪", flag: "🇮🇱" },
    Currency { code: "AED", name: "UAE Dirham", symbol: "د.إ", flag: "🇦🇪" },
    Currency { code: "SAR", name: "Saudi Riyal", symbol: "﷼", flag: "🇸🇦" },
    Currency { code: "QAR", name: "Qatari Riyal", symbol: "﷼", flag: "🇶🇦" },
    Currency { code: "KWD", name: "Kuwaiti Dinar", symbol: "د.ك", flag: "🇰🇼" },
    Currency { code: "BHD", name: "Bahraini Dinar", symbol: "د.ب", flag: "🇧🇭" },
    Currency { code: "OMR", name: "Omani Rial", symbol: "ر.ع.", flag: "🇴🇲" },
    Currency { code: "JOD", name: "Jordanian Dinar", symbol: "د.ا", flag: "🇯🇴" },
    Currency { code: "LBP", name: "Lebanese Pound", symbol: "ل.ل", flag: "🇱🇧" },
    Currency { code: "SYP", name: "Syrian Pound", symbol: "£", flag: "🇸🇾" },
    Currency { code: "IQD", name: "Iraqi Dinar", symbol: "ع.د", flag: "🇮🇶" },
    Currency { code: "IRR", name: "Iranian Rial", symbol: "﷼", flag: "🇮🇷" },
    Currency { code: "YER", name: "Yemeni Rial", symbol: "﷼", flag: "🇾🇪" },
    // South Asia
    Currency { code: "INR", name: "Indian Rupee", symbol: "₹", flag: "🇮🇳" },
    Currency { code: "PKR", name: "Pakistani Rupee", symbol: "₨", flag: "🇵🇰" },
    Currency { code: "BDT", name: "Bangladeshi Taka", symbol: "৳", flag: "🇧🇩" },
    Currency { code: "LKR", name: "Sri Lankan Rupee", symbol: "Rs", flag: "🇱🇰" },
    Currency { code: "NPR", name: "Nepalese Rupee", symbol: "₨", flag: "🇳🇵" },
    Currency { code: "BTN", name: "Bhutanese Ngultrum", symbol: "Nu.", flag: "🇧🇹" },
    Currency { code: "MVR", name: "Maldivian Rufiyaa", symbol: "Rf", flag: "🇲🇻" },
    Currency { code: "AFN", name: "Afghan Afghani", symbol: "؋", flag: "🇦🇫" },
    // Southeast Asia
    Currency { code: "THB", name: "Thai Baht", symbol: "฿", flag: "🇹🇭" },
    Currency { code: "SGD", name: "Singapore Dollar", symbol: "$", flag: "🇸🇬" },
    Currency { code: "MYR", name: "Malaysian Ringgit", symbol: "RM", flag: "🇲🇾" },
    Currency { code: "IDR", name: "Indonesian Rupiah", symbol: "Rp", flag: "🇮🇩" },
    Currency { code: "PHP", name: "Philippine Peso", symbol: "₱", flag: "🇵🇭" },
    Currency { code: "VND", name: "Vietnamese Dong", symbol: "₫", flag: "🇻🇳" },
    Currency { code: "MMK", name: "Myanmar Kyat", symbol: "K", flag: "🇲🇲" },
    Currency { code: "KHR", name: "Cambodian Riel", symbol: "៛", flag: "🇰🇭" },
    Currency { code: "LAK", name: "Lao Kip", symbol: "₭", flag: "🇱🇦" },
    Currency { code: "BND", name: "Brunei Dollar", symbol: "$", flag: "🇧🇳" },
    // East Asia
    Currency { code: "KRW", name: "South Korean Won", symbol: "₩", flag: "🇰🇷" },
    Currency { code: "TWD", name: "Taiwan Dollar", symbol: "NT$", flag: "🇹🇼" },
    Currency { code: "HKD", name: "Hong Kong Dollar", symbol: "$", flag: "🇭🇰" },
    Currency { code: "MOP", name: "Macanese Pataca", symbol: "MOP$", flag: "🇲🇴" },
    Currency { code: "MNT", name: "Mongolian Tugrik", symbol: "₮", flag: "🇲🇳" },
    Currency { code: "KPW", name: "North Korean Won", symbol: "₩", flag: "🇰🇵" },
    // Central Asia
    Currency { code: "KZT", name: "Kazakhstani Tenge", symbol: "₸", flag: "🇰🇿" },
    Currency { code: "UZS", name: "Uzbekistani Som", symbol: "so'm", flag: "🇺🇿" },
    Currency { code: "TJS", name: "Tajikistani Somoni", symbol: "ЅМ", flag: "🇹🇯" },
    Currency { code: "KGS", name: "Kyrgyzstani Som", symbol: "с", flag: "🇰🇬" },
    Currency { code: "TMT", name: "Turkmenistani Manat", symbol: "m", flag: "🇹🇲" },
    // Oceania
    Currency { code: "AUD", name: "Australian Dollar", symbol: "$", flag: "🇦🇺" },
    Currency { code: "NZD", name: "New Zealand Dollar", symbol: "$", flag: "🇳🇿" },
    Currency { code: "FJD", name: "Fijian Dollar", symbol: "$", flag: "🇫🇯" },
    Currency { code: "PGK", name: "Papua New Guinean Kina", symbol: "K", flag: "🇵🇬" },
    Currency { code: "SBD", name: "Solomon Islands Dollar", symbol: "$", flag: "🇸🇧" },
    Currency { code: "VUV", name: "Vanuatu Vatu", symbol: "Vt", flag: "🇻🇺" },
    Currency { code: "WST", name: "Samoan Tala", symbol: "T", flag: "🇼🇸" },
    Currency { code: "TOP", name: "Tongan Paʻanga", symbol: "T$", flag: "🇹🇴" },
    Currency { code: "XPF", name: "CFP Franc", symbol: "₣", flag: "🇵🇫" },
    // North Africa
    Currency { code: "EGP", name: "Egyptian Pound", symbol: "£", flag: "🇪🇬" },
    Currency { code: "MAD", name: "Moroccan Dirham", symbol: "د.م.", flag: "🇲🇦" },
    Currency { code: "DZD", name: "Algerian Dinar", symbol: "د.ج", flag: "🇩🇿" },
    Currency { code: "TND", name: "Tunisian Dinar", symbol: "د.ت", flag: "🇹🇳" },
    Currency { code: "LYD", name: "Libyan Dinar", symbol: "ل.د", flag: "🇱🇾" },
    Currency { code: "SDG", name: "Sudanese Pound", symbol: "ج.س.", flag: "🇸🇩" },
    // West Africa
    Currency { code: "NGN", name: "Nigerian Naira", symbol: "₦", flag: "🇳🇬" },
    Currency { code: "GHS", name: "Ghanaian Cedi", symbol: "₵", flag: "🇬🇭" },
    Currency { code: "XOF", name: "West African CFA Franc", symbol: "CFA", flag: "🇸🇳" },
    Currency { code: "GMD", name: "Gambian Dalasi", symbol: "D", flag: "🇬🇲" },
    Currency { code: "GNF", name: "Guinean Franc", symbol: "FG", flag: "🇬🇳" },
    Currency { code: "SLL", name: "Sierra Leonean Leone", symbol: "Le", flag: "🇸🇱" },
    Currency { code: "LRD", name: "Liberian Dollar", symbol: "$", flag: "🇱🇷" },
    Currency { code: "CVE", name: "Cape Verdean Escudo", symbol: "$", flag: "🇨🇻" },
    Currency { code: "MRU", name: "Mauritanian Ouguiya", symbol: "UM", flag: "🇲🇷" },
    // Central Africa
    Currency { code: "XAF", name: "Central African CFA Franc", symbol: "FCFA", flag: "🇨🇲" },
    Currency { code: "CDF", name: "Congolese Franc", symbol: "FC", flag: "🇨🇩" },
    Currency { code: "AOA", name: "Angolan Kwanza", symbol: "Kz", flag: "🇦🇴" },
    Currency { code: "STN", name: "São Tomé Dobra", symbol: "Db", flag: "🇸🇹" },
    // East Africa
    Currency { code: "KES", name: "Kenyan Shilling", symbol: "KSh", flag: "🇰🇪" },
    Currency { code: "TZS", name: "Tanzanian Shilling", symbol: "TSh", flag: "🇹🇿" },
    Currency { code: "UGX", name: "Ugandan Shilling", symbol: "USh", flag: "🇺🇬" },
    Currency { code: "RWF", name: "Rwandan Franc", symbol: "FRw", flag: "🇷🇼" },
    Currency { code: "BIF", name: "Burundian Franc", symbol: "FBu", flag: "🇧🇮" },
    Currency { code: "ETB", name: "Ethiopian Birr", symbol: "Br", flag: "🇪🇹" },
    Currency { code: "DJF", name: "Djiboutian Franc", symbol: "Fdj", flag: "🇩🇯" },
    Currency { code: "ERN", name: "Eritrean Nakfa", symbol: "Nfk", flag: "🇪🇷" },
    Currency { code: "SOS", name: "Somali Shilling", symbol: "S", flag: "🇸🇴" },
    Currency { code: "SSP", name: "South Sudanese Pound", symbol: "£", flag: "🇸🇸" },
    // Southern Africa
    Currency { code: "ZAR", name: "South African Rand", symbol: "R", flag: "🇿🇦" },
    Currency { code: "BWP", name: "Botswana Pula", symbol: "P", flag: "🇧🇼" },
    Currency { code: "NAD", name: "Namibian Dollar", symbol: "$", flag: "🇳🇦" },
    Currency { code: "SZL", name: "Swazi Lilangeni", symbol: "L", flag: "🇸🇿" },
    Currency { code: "LSL", name: "Lesotho Loti", symbol: "L", flag: "🇱🇸" },
    Currency { code: "ZMW", name: "Zambian Kwacha", symbol: "ZK", flag: "🇿🇲" },
    Currency { code: "MWK", name: "Malawian Kwacha", symbol: "MK", flag: "🇲🇼" },
    Currency { code: "ZWL", name: "Zimbabwean Dollar", symbol: "$", flag: "🇿🇼" },
    Currency { code: "MZN", name: "Mozambican Metical", symbol: "MT", flag: "🇲🇿" },
    Currency { code: "MGA", name: "Malagasy Ariary", symbol: "Ar", flag: "🇲🇬" },
    Currency { code: "MUR", name: "Mauritian Rupee", symbol: "₨", flag: "🇲🇺" },
    Currency { code: "SCR", name: "Seychellois Rupee", symbol: "₨", flag: "🇸🇨" },
    Currency { code: "KMF", name: "Comorian Franc", symbol: "CF", flag: "🇰🇲" },
    // Special Territories
    Currency { code: "GIP", name: "Gibraltar Pound", symbol: "£", flag: "🇬🇮" },
    Currency { code: "SHP", name: "Saint Helena Pound", symbol: "£", flag: "🇸🇭" },
    Currency { code: "BMD", name: "Bermudian Dollar", symbol: "$", flag: "🇧🇲" },
    Currency { code: "FOK", name: "Faroese Króna", symbol: "kr", flag: "🇫🇴" },
    Currency { code: "IMP", name: "Isle of Man Pound", symbol: "£", flag: "🇮🇲" },
    Currency { code: "JEP", name: "Jersey Pound", symbol: "£", flag: "🇯🇪" },
    Currency { code: "GGP", name: "Guernsey Pound", symbol: "£", flag: "🇬🇬" },
];

/// Look up a currency by ISO code, case-insensitively
pub fn for_code(code: &str) -> Option<&'static Currency> {
    CATALOG.iter().find(|c| c.code.eq_ignore_ascii_case(code))
}

/// All currencies sharing a symbol glyph
pub fn with_symbol(symbol: &str) -> Vec<&'static Currency> {
    CATALOG.iter().filter(|c| c.symbol == symbol).collect()
}

/// Resolve a captured currency hint (symbol glyph or ISO code) to a
/// catalog entry. An ambiguous symbol resolves to the preferred currency
/// when it is among the matches, otherwise to the first match in catalog
/// order.
pub fn detect(hint: &str, preferred_code: &str) -> Option<&'static Currency> {
    if let Some(currency) = for_code(hint) {
        return Some(currency);
    }

    let matches = with_symbol(hint);
    match matches.as_slice() {
        [] => None,
        [only] => Some(*only),
        many => Some(
            many.iter()
                .find(|c| c.code == preferred_code)
                .copied()
                .unwrap_or(many[0]),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_unique() {
        let mut codes: Vec<&str> = CATALOG.iter().map(|c| c.code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), CATALOG.len());
    }

    #[test]
    fn test_for_code_is_case_insensitive() {
        assert_eq!(for_code("usd").unwrap().code, "USD");
        assert_eq!(for_code("EUR").unwrap().name, "Euro");
        assert!(for_code("XXX").is_none());
    }

    #[test]
    fn test_with_symbol_returns_all_matches() {
        let dollars = with_symbol("$");
        assert!(dollars.len() > 5);
        assert!(dollars.iter().any(|c| c.code == "USD"));
        assert!(dollars.iter().any(|c| c.code == "CAD"));
    }

    #[test]
    fn test_detect_unique_symbol() {
        assert_eq!(detect("₫", "USD").unwrap().code, "VND");
    }

    #[test]
    fn test_detect_prefers_configured_currency() {
        assert_eq!(detect("$", "MXN").unwrap().code, "MXN");
        // Preferred currency not among the matches: first match wins
        assert_eq!(detect("$", "EUR").unwrap().code, "USD");
    }

    #[test]
    fn test_detect_accepts_iso_codes() {
        assert_eq!(detect("gbp", "USD").unwrap().code, "GBP");
    }

    #[test]
    fn test_detect_unknown_hint() {
        assert!(detect("??", "USD").is_none());
    }
}
