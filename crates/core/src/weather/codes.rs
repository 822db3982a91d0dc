//! WMO weather interpretation codes mapped to a description and an icon code.

struct Category {
    codes: &'static [i64],
    description: &'static str,
    icon: &'static str,
    /// Fog always uses the day icon.
    day_only: bool,
}

const CATEGORIES: [Category; 8] = [
    Category { codes: &[0], description: "Clear sky", icon: "01", day_only: false },
    Category { codes: &[1, 2, 3], description: "Partly cloudy", icon: "02", day_only: false },
    Category { codes: &[45, 48], description: "Fog", icon: "50", day_only: true },
    Category { codes: &[51, 53, 55, 56, 57], description: "Drizzle", icon: "09", day_only: false },
    Category { codes: &[61, 63, 65, 66, 67], description: "Rain", icon: "10", day_only: false },
    Category { codes: &[71, 73, 75, 77], description: "Snow", icon: "13", day_only: false },
    Category { codes: &[80, 81, 82, 85, 86], description: "Rain showers", icon: "09", day_only: false },
    Category { codes: &[95, 96, 99], description: "Thunderstorm", icon: "11", day_only: false },
];

const UNKNOWN_DESCRIPTION: &str = "Unknown";
const UNKNOWN_ICON: &str = "01";

/// A `None` code (the provider sent null or a non-integer) reads as unknown.
pub fn describe(code: Option<i64>, is_day: bool) -> (&'static str, String) {
    let suffix = if is_day { 'd' } else { 'n' };
    let category = code.and_then(|code| CATEGORIES.iter().find(|c| c.codes.contains(&code)));
    match category {
        Some(c) if c.day_only => (c.description, format!("{}d", c.icon)),
        Some(c) => (c.description, format!("{}{suffix}", c.icon)),
        None => (UNKNOWN_DESCRIPTION, format!("{UNKNOWN_ICON}{suffix}")),
    }
}
