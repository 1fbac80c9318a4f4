//! Descriptions of the enumerated codes carried by both barcodes.
//!
//! Each table is an ordered list of `(code, description)` pairs. Lookups are
//! exact and case-sensitive, and the first matching entry wins.

/// Description returned for unrecognised branch, PDT and category codes.
pub const UNKNOWN: &str = "N/A";

/// Resolve a code against an ordered table.
fn lookup(table: &'static [(&'static str, &'static str)], code: &str) -> Option<&'static str> {
    table.iter().find(|(c, _)| *c == code).map(|(_, d)| *d)
}

const BRANCHES: &[(&str, &str)] = &[
    ("A", "USA"),
    ("C", "USCG"),
    ("D", "DOD"),
    ("F", "USAF"),
    ("H", "USPHS"),
    ("M", "USMC"),
    ("N", "USN"),
    ("O", "NOAA"),
    ("1", "Foreign Army"),
    ("2", "Foreign Navy"),
    ("3", "Foreign Marine Corps"),
    ("4", "Foreign Air Force"),
    ("X", "Other"),
];

/// Describe a branch code (BC).
pub fn branch(code: &str) -> &'static str {
    lookup(BRANCHES, code).unwrap_or(UNKNOWN)
}

const PERSONAL_DESIGNATOR_TYPES: &[(&str, &str)] = &[
    ("S", "Social Security Number (SSN)"),
    ("N", "9 digits, not valid SSN"),
    ("P", "Special code before SSNs"),
    ("D", "Temporary Identifier Number (TIN)"),
    ("F", "Foreign Identifier Number (FIN)"),
    ("T", "Test (858 series)"),
    ("I", "Individual Taxpayer Identification Number"),
];

/// Describe a personal designator type code (PDT).
pub fn pdt(code: &str) -> &'static str {
    lookup(PERSONAL_DESIGNATOR_TYPES, code).unwrap_or(UNKNOWN)
}

// "G" and "N" share a description, as do "S" and "V".
const CATEGORIES: &[(&str, &str)] = &[
    ("A", "Active Duty member"),
    ("B", "Presidential Appointee"),
    ("C", "DoD civil service employee"),
    ("D", "100% disabled American veteran"),
    ("E", "DoD contract employee"),
    ("F", "Former member"),
    ("G", "National Guard member"),
    ("N", "National Guard member"),
    ("H", "Medal of Honor recipient"),
    ("I", "Non-DoD Civil Service Employee"),
    ("J", "Academy student"),
    ("K", "non-appropriated fund (NAF) DoD employee"),
    ("L", "Lighthouse service"),
    ("M", "Non-Government agency personnel"),
    ("O", "Non-DoD contract employee"),
    ("Q", "Reserve retiree not yet eligible for retired pay"),
    ("R", "Retired Uniformed Service member eligible for retired pay"),
    ("S", "Reserve"),
    ("V", "Reserve"),
    ("T", "Foreign military member"),
    ("U", "Foreign national employee"),
    ("W", "DoD Beneficiary"),
    ("Y", "Retired DoD Civil Service Employees"),
];

/// Describe a personnel category code (PCC).
pub fn category(code: &str) -> &'static str {
    lookup(CATEGORIES, code).unwrap_or(UNKNOWN)
}

const TA_180_CONTINGENCY: &str =
    "Reserve Component TA-180 - 180 days TAMPS for reserve return from named contingencies";
const TA_180_INVOLUNTARY: &str = "TA-180 - 180 days TAMP for involuntary separation";

const ENTITLEMENT_CONDITIONS: &[(&str, &str)] = &[
    ("01", "On Active Duty. Segment condition."),
    ("02", "Mobilization. Segment condition."),
    ("03", "On appellate leave. Segment condition."),
    ("04", "Military prisoner. Segment condition."),
    ("05", "POW/MIA. Segment condition."),
    ("06", "Separated from Selected Reserve. Event condition."),
    ("07", "Declared permanently disabled after temporary disability period. Event condition."),
    ("08", "On non-CONUS assignment. Segment condition."),
    ("09", "Living in Guam or Puerto Rico. Segment condition."),
    ("10", "Living in government quarters. Segment condition."),
    (
        "11",
        "Death determined to be related to an injury, illness, or disease while on Active duty \
         for training or while traveling to or from a place of duty. Event condition.",
    ),
    (
        "12",
        "Discharged due to misconduct involving family member abuse. (Sponsors who are eligible \
         for retirement.) Segment condition.",
    ),
    ("13", "Granted retired pay. Event condition."),
    ("14", "DoD sponsored in U.S. (foreign military). Segment condition."),
    ("15", "DoD non-sponsored in U.S. (foreign military). Segment condition."),
    ("16", "DoD sponsored overseas. Segment condition."),
    ("17", "Deserter. Segment condition."),
    (
        "18",
        "Discharged due to misconduct involving family member abuse. (Sponsors who are not \
         eligible for retirement.) Segment condition.",
    ),
    ("19", "Reservist who dies after receiving their 20 year letter. Event condition."),
    ("20", "Transitional assistance (TA-30). Segment condition."),
    ("21", "Transitional assistance (TA-Res). Segment condition."),
    ("22", "Transitional assistance (TA-60). Segment condition."),
    ("23", "Transitional assistance (TA-120). Segment condition."),
    ("24", "Transitional assistance (SSB program). Segment condition."),
    ("25", "Transitional assistance (VSI program). Segment condition."),
    ("26", "Transitional assistance (composite). Segment condition."),
    ("27", "Senior Executive Service (SES)."),
    ("28", "Emergency Essential - overseas only."),
    ("29", "Emergency Essential - CONUS."),
    // The leading "2" is printed in the format document.
    (
        "30",
        "2Emergency Essential - CONUS in living quarters, living on base, and not drawing a basic \
         allowance for quarters, serving in an emergency essential capacity",
    ),
    (
        "31",
        "Reserve Component TA-120 Reserve Component Transition Assistance TA 120 (Jan 1, 2002 or \
         later)",
    ),
    (
        "32",
        "On MSC owned and operated vessels Deployed to foreign countries on Military Sealift \
         Command owned and operated vessels. Segment condition.",
    ),
    ("33", "Guard/Reserve Alert Notification Period"),
    ("34", TA_180_CONTINGENCY),
    ("35", TA_180_CONTINGENCY),
    ("36", TA_180_INVOLUNTARY),
    ("37", TA_180_INVOLUNTARY),
    (
        "38",
        "Living in Government Quarters in Guam or Puerto Rico, Living on base and not drawing an \
         allowance for quarters in Guam or Puerto Rico.",
    ),
    ("39", "Reserve Component TA-180 - TAMP - Mobilized for Contingency"),
    ("40", "TA-180 TAMP - SPD Code Separation"),
    ("41", "TA-180 - TAMP - Stop/Loss Separation"),
    (
        "42",
        "DoD Non-Sponsored Overseas - Foreign Military personnel serving OCONUS not sponsored by \
         DoD",
    ),
];

/// Describe a personnel entitlement condition type code (PECT).
///
/// Unrecognised codes, including `"00"`, resolve to the empty string.
pub fn pect(code: &str) -> &'static str {
    lookup(ENTITLEMENT_CONDITIONS, code).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn branch_codes() {
        assert_eq!(branch("F"), "USAF");
        assert_eq!(branch("4"), "Foreign Air Force");
        assert_eq!(branch("Z"), "N/A");
        assert_eq!(branch("f"), "N/A");
        assert_eq!(branch(""), "N/A");
    }

    #[test]
    fn pdt_codes() {
        assert_eq!(pdt("S"), "Social Security Number (SSN)");
        assert_eq!(pdt("I"), "Individual Taxpayer Identification Number");
        assert_eq!(pdt("X"), "N/A");
    }

    #[test]
    fn category_shared_descriptions() {
        assert_eq!(category("G"), "National Guard member");
        assert_eq!(category("N"), "National Guard member");
        assert_eq!(category("S"), "Reserve");
        assert_eq!(category("V"), "Reserve");
        assert_eq!(category("P"), "N/A");
        assert_eq!(category("Z"), "N/A");
    }

    #[test]
    fn pect_codes() {
        assert_eq!(pect("01"), "On Active Duty. Segment condition.");
        assert_eq!(pect("35"), pect("34"));
        assert_eq!(pect("37"), pect("36"));
        assert!(pect("30").starts_with("2Emergency Essential"));
        assert_eq!(pect("99"), "");
        assert_eq!(pect("00"), "");
        assert_eq!(pect("1"), "");
    }

    #[test]
    fn pect_covers_01_to_42() {
        for n in 1..=42 {
            let code = alloc::format!("{n:02}");
            assert_ne!(pect(&code), "", "missing {code}");
        }
    }

    #[test]
    fn tables_have_unique_codes() {
        for table in [BRANCHES, PERSONAL_DESIGNATOR_TYPES, CATEGORIES, ENTITLEMENT_CONDITIONS] {
            for (i, (code, _)) in table.iter().enumerate() {
                assert!(table[i + 1..].iter().all(|(c, _)| c != code), "duplicate {code}");
            }
        }
    }
}
