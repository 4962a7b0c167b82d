// ── Compiled-in country table ──
//
// Order matters: search preserves it, and the first entry is the
// fallback selection when nothing valid has been persisted.

use crate::model::CountryRecord;

macro_rules! country {
    ($id:literal, $name:literal, $code:literal, $pattern:literal) => {
        CountryRecord {
            id: $id,
            name: $name,
            dial_code: $code,
            pattern: $pattern,
        }
    };
}

pub(super) static COUNTRIES: &[CountryRecord] = &[
    // East Asia
    country!("cn", "China", "+86", "13X XXXX XXXX"),
    country!("hk", "Hong Kong", "+852", "9XXX XXXX"),
    country!("mo", "Macao", "+853", "6XXX XXXX"),
    country!("tw", "Taiwan", "+886", "9XX XXX XXX"),
    country!("jp", "Japan", "+81", "90-XXXX-XXXX"),
    country!("kr", "South Korea", "+82", "10-XXXX-XXXX"),
    country!("mn", "Mongolia", "+976", "9XXX XXXX"),
    // North America
    country!("us", "United States", "+1", "2XX-XXX-XXXX"),
    country!("ca", "Canada", "+1", "4XX-XXX-XXXX"),
    country!("mx", "Mexico", "+52", "55 XXXX XXXX"),
    // Southeast Asia
    country!("sg", "Singapore", "+65", "8XXX XXXX"),
    country!("my", "Malaysia", "+60", "1X-XXX XXXX"),
    country!("th", "Thailand", "+66", "8X XXX XXXX"),
    country!("vn", "Vietnam", "+84", "9X XXX XX XX"),
    country!("ph", "Philippines", "+63", "9XX XXX XXXX"),
    country!("id", "Indonesia", "+62", "81X-XXXX-XXXX"),
    country!("mm", "Myanmar", "+95", "9 XXX XXXXX"),
    country!("kh", "Cambodia", "+855", "1X XXX XXX"),
    country!("la", "Laos", "+856", "20 XX XXX XXX"),
    // South & Central Asia
    country!("in", "India", "+91", "9XXXX XXXXX"),
    country!("pk", "Pakistan", "+92", "3XX XXXXXXX"),
    country!("bd", "Bangladesh", "+880", "1XXX-XXXXXX"),
    country!("lk", "Sri Lanka", "+94", "7X XXX XXXX"),
    country!("np", "Nepal", "+977", "98X-XXXXXXX"),
    country!("kz", "Kazakhstan", "+7", "7XX XXX XX XX"),
    country!("uz", "Uzbekistan", "+998", "9X XXX XX XX"),
    // Europe
    country!("gb", "United Kingdom", "+44", "7XXX XXXXXX"),
    country!("ie", "Ireland", "+353", "8X XXX XXXX"),
    country!("de", "Germany", "+49", "15X XXXXXXXX"),
    country!("fr", "France", "+33", "6 XX XX XX XX"),
    country!("es", "Spain", "+34", "6XX XX XX XX"),
    country!("pt", "Portugal", "+351", "9XX XXX XXX"),
    country!("it", "Italy", "+39", "3XX XXX XXXX"),
    country!("nl", "Netherlands", "+31", "6 XXXXXXXX"),
    country!("be", "Belgium", "+32", "4XX XX XX XX"),
    country!("lu", "Luxembourg", "+352", "6XX XXX XXX"),
    country!("ch", "Switzerland", "+41", "7X XXX XX XX"),
    country!("at", "Austria", "+43", "6XX XXXXXXX"),
    country!("dk", "Denmark", "+45", "2X XX XX XX"),
    country!("se", "Sweden", "+46", "7X-XXX XX XX"),
    country!("no", "Norway", "+47", "4XX XX XXX"),
    country!("fi", "Finland", "+358", "4X XXX XXXX"),
    country!("is", "Iceland", "+354", "6XX XXXX"),
    country!("ee", "Estonia", "+372", "5XXX XXXX"),
    country!("lv", "Latvia", "+371", "2X XXX XXX"),
    country!("lt", "Lithuania", "+370", "6XX XXXXX"),
    country!("pl", "Poland", "+48", "5XX XXX XXX"),
    country!("cz", "Czech Republic", "+420", "6XX XXX XXX"),
    country!("sk", "Slovakia", "+421", "9XX XXX XXX"),
    country!("hu", "Hungary", "+36", "20 XXX XXXX"),
    country!("ro", "Romania", "+40", "7XX XXX XXX"),
    country!("bg", "Bulgaria", "+359", "8X XXX XXXX"),
    country!("rs", "Serbia", "+381", "6X XXX XXXX"),
    country!("hr", "Croatia", "+385", "9X XXX XXXX"),
    country!("si", "Slovenia", "+386", "3X XXX XXX"),
    country!("gr", "Greece", "+30", "69X XXX XXXX"),
    country!("tr", "Turkey", "+90", "5XX XXX XX XX"),
    country!("ua", "Ukraine", "+380", "6X XXX XX XX"),
    country!("by", "Belarus", "+375", "29 XXX-XX-XX"),
    country!("ru", "Russia", "+7", "9XX XXX-XX-XX"),
    // Middle East
    country!("il", "Israel", "+972", "5X-XXX-XXXX"),
    country!("ae", "United Arab Emirates", "+971", "5X XXX XXXX"),
    country!("sa", "Saudi Arabia", "+966", "5X XXX XXXX"),
    country!("qa", "Qatar", "+974", "3XXX XXXX"),
    country!("kw", "Kuwait", "+965", "5XXX XXXX"),
    country!("bh", "Bahrain", "+973", "3XXX XXXX"),
    country!("om", "Oman", "+968", "9XXX XXXX"),
    country!("jo", "Jordan", "+962", "7 XXXX XXXX"),
    country!("lb", "Lebanon", "+961", "7X XXX XXX"),
    country!("ir", "Iran", "+98", "91X XXX XXXX"),
    country!("iq", "Iraq", "+964", "7XX XXX XXXX"),
    // Africa
    country!("eg", "Egypt", "+20", "1X XXXX XXXX"),
    country!("ma", "Morocco", "+212", "6XX-XXXXXX"),
    country!("dz", "Algeria", "+213", "5XX XX XX XX"),
    country!("tn", "Tunisia", "+216", "2X XXX XXX"),
    country!("ng", "Nigeria", "+234", "80X XXX XXXX"),
    country!("gh", "Ghana", "+233", "2X XXX XXXX"),
    country!("ke", "Kenya", "+254", "7XX XXXXXX"),
    country!("et", "Ethiopia", "+251", "9X XXX XXXX"),
    country!("tz", "Tanzania", "+255", "7XX XXX XXX"),
    country!("ug", "Uganda", "+256", "7XX XXXXXX"),
    country!("za", "South Africa", "+27", "8X XXX XXXX"),
    // Oceania
    country!("au", "Australia", "+61", "4XX XXX XXX"),
    country!("nz", "New Zealand", "+64", "2X XXX XXXX"),
    // South America
    country!("br", "Brazil", "+55", "11 9XXXX-XXXX"),
    country!("ar", "Argentina", "+54", "9 11 XXXX-XXXX"),
    country!("cl", "Chile", "+56", "9 XXXX XXXX"),
    country!("co", "Colombia", "+57", "3XX XXX XXXX"),
    country!("pe", "Peru", "+51", "9XX XXX XXX"),
    country!("ve", "Venezuela", "+58", "4XX-XXXXXXX"),
    country!("ec", "Ecuador", "+593", "9X XXX XXXX"),
    country!("uy", "Uruguay", "+598", "9X XXX XXX"),
    country!("py", "Paraguay", "+595", "9XX XXX XXX"),
    country!("bo", "Bolivia", "+591", "7XXXXXXX"),
    // Central America & Caribbean
    country!("cr", "Costa Rica", "+506", "8XXX XXXX"),
    country!("pa", "Panama", "+507", "6XXX-XXXX"),
    country!("cu", "Cuba", "+53", "5 XXX XXXX"),
    country!("do", "Dominican Republic", "+1", "809-XXX-XXXX"),
    country!("jm", "Jamaica", "+1", "876-XXX-XXXX"),
    country!("pr", "Puerto Rico", "+1", "787-XXX-XXXX"),
];
