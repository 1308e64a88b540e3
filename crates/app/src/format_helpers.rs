//! Shared formatting utilities for the UI layer.
//!
//! Dates arrive from the API as ISO strings (`YYYY-MM-DD`, sometimes
//! with a trailing time) and salaries as plain dollar amounts. Anything
//! unparseable is shown as received.

const MONTH_ABBREV: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const MONTH_FULL: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// Split an ISO date prefix into (year, month, day).
fn parse_iso_date(date_str: &str) -> Option<(&str, usize, u32)> {
    if date_str.len() < 10 || &date_str[4..5] != "-" || &date_str[7..8] != "-" {
        return None;
    }
    let year = &date_str[..4];
    let month = date_str[5..7].parse::<usize>().ok().filter(|m| (1..=12).contains(m))?;
    let day = date_str[8..10].parse::<u32>().ok()?;
    Some((year, month, day))
}

/// Format an ISO date string as "Jan 20, 2026".
pub fn format_date_short(date_str: &str) -> String {
    match parse_iso_date(date_str) {
        Some((year, month, day)) => format!("{} {}, {}", MONTH_ABBREV[month - 1], day, year),
        None => date_str.to_string(),
    }
}

/// Format an ISO date string as "January 20, 2026".
pub fn format_date_long(date_str: &str) -> String {
    match parse_iso_date(date_str) {
        Some((year, month, day)) => format!("{} {}, {}", MONTH_FULL[month - 1], day, year),
        None => date_str.to_string(),
    }
}

/// Format a dollar amount with cents, e.g. "$75,000.00".
pub fn format_currency(amount: f64) -> String {
    format!("${}", group_thousands(&format!("{amount:.2}")))
}

/// Format a dollar amount rounded to whole dollars, e.g. "$50,000".
pub fn format_currency_whole(amount: f64) -> String {
    format!("${}", group_thousands(&format!("{amount:.0}")))
}

/// Insert thousands separators into the integer part of a formatted number.
fn group_thousands(digits: &str) -> String {
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (digits, None),
    };
    let (sign, int_digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(int_digits.len() + int_digits.len() / 3);
    for (i, ch) in int_digits.chars().enumerate() {
        if i > 0 && (int_digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let mut out = format!("{sign}{grouped}");
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}
