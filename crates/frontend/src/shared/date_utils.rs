/// Utilities for date formatting
///
/// The booking summary renders dates as day-with-ordinal-suffix, short
/// month and year, e.g. "23rd Sep 2025".

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

fn ordinal_suffix(day: u32) -> &'static str {
    match day % 100 {
        11..=13 => "th",
        _ => match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}

/// Format an ISO date ("2025-09-23") as "23rd Sep 2025". Anything that
/// does not parse is returned unchanged.
pub fn format_date_ordinal(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    let mut parts = date_part.splitn(3, '-');
    let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next()) else {
        return date_str.to_string();
    };
    let (Ok(month), Ok(day)) = (month.parse::<usize>(), day.parse::<u32>()) else {
        return date_str.to_string();
    };
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return date_str.to_string();
    }
    format!("{}{} {} {}", day, ordinal_suffix(day), MONTHS[month - 1], year)
}

/// Format an ISO date as DD.MM.YYYY for table cells.
pub fn format_date_short(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}.{}.{}", day, month, year);
        }
    }
    date_str.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinal_suffixes() {
        assert_eq!(format_date_ordinal("2025-09-01"), "1st Sep 2025");
        assert_eq!(format_date_ordinal("2025-09-02"), "2nd Sep 2025");
        assert_eq!(format_date_ordinal("2025-09-23"), "23rd Sep 2025");
        assert_eq!(format_date_ordinal("2025-09-11"), "11th Sep 2025");
        assert_eq!(format_date_ordinal("2025-09-12"), "12th Sep 2025");
        assert_eq!(format_date_ordinal("2025-09-21"), "21st Sep 2025");
    }

    #[test]
    fn test_datetime_prefix_is_accepted() {
        assert_eq!(format_date_ordinal("2025-09-23T14:02:26Z"), "23rd Sep 2025");
    }

    #[test]
    fn test_invalid_input_passes_through() {
        assert_eq!(format_date_ordinal("invalid"), "invalid");
        assert_eq!(format_date_ordinal(""), "");
        assert_eq!(format_date_short("invalid"), "invalid");
    }

    #[test]
    fn test_short_format() {
        assert_eq!(format_date_short("2025-09-23"), "23.09.2025");
    }
}
