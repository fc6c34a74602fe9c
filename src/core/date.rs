const MONTH_ABBREVS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Masks free-form input into an `mm/dd/yyyy` (or partial) display string.
/// Non-digits are stripped, the buffer is capped at 8 digits, and `/` is
/// inserted after the 2nd and 4th digits. Display mask only: out-of-range
/// months and days pass through unchanged.
pub fn mask(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).take(8).collect();
    if digits.len() > 4 {
        format!("{}/{}/{}", &digits[..2], &digits[2..4], &digits[4..])
    } else if digits.len() > 2 {
        format!("{}/{}", &digits[..2], &digits[2..])
    } else {
        digits
    }
}

/// Formats a stored date as "Mar 05, 2024", or "Mar 2024" when the day is 0
/// or absent. Accepts `mm/dd/yyyy` or `yyyy-mm-dd` shapes; anything else
/// (including an out-of-range month) yields an empty string. Display only,
/// never fed back into the stored value.
pub fn format_readable(date: &str) -> String {
    let (month_str, day_str, year_str) = if date.contains('-') {
        let mut parts = date.splitn(3, '-');
        let year = parts.next().unwrap_or("");
        let month = parts.next().unwrap_or("");
        let day = parts.next().unwrap_or("");
        (month, day, year)
    } else if date.contains('/') {
        let mut parts = date.splitn(3, '/');
        let month = parts.next().unwrap_or("");
        let day = parts.next().unwrap_or("");
        let year = parts.next().unwrap_or("");
        (month, day, year)
    } else {
        return String::new();
    };

    let Ok(month) = month_str.parse::<usize>() else {
        return String::new();
    };
    let Some(name) = month.checked_sub(1).and_then(|i| MONTH_ABBREVS.get(i)) else {
        return String::new();
    };
    let Ok(year) = year_str.parse::<i32>() else {
        return String::new();
    };
    let day = day_str.parse::<u32>().unwrap_or(0);

    if day == 0 {
        format!("{name} {year}")
    } else {
        format!("{name} {day:02}, {year}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_formats_incrementally() {
        assert_eq!(mask(""), "");
        assert_eq!(mask("0"), "0");
        assert_eq!(mask("05"), "05");
        assert_eq!(mask("051"), "05/1");
        assert_eq!(mask("0512"), "05/12");
        assert_eq!(mask("05122"), "05/12/2");
        assert_eq!(mask("05122024"), "05/12/2024");
    }

    #[test]
    fn mask_strips_non_digits_and_truncates() {
        assert_eq!(mask("05/12/2024"), "05/12/2024");
        assert_eq!(mask("a0b5c1d2e2f0g2h4"), "05/12/2024");
        assert_eq!(mask("051220249999"), "05/12/2024");
    }

    #[test]
    fn mask_preserves_digit_sequence() {
        for raw in ["1", "12", "123", "1234", "12345", "123456", "1234567", "12345678", "1234567890"] {
            let masked = mask(raw);
            assert!(masked.len() <= 10);
            assert!(masked.chars().all(|c| c.is_ascii_digit() || c == '/'));
            let restored: String = masked.chars().filter(|c| *c != '/').collect();
            let expected: String = raw.chars().take(8).collect();
            assert_eq!(restored, expected);
        }
    }

    #[test]
    fn mask_passes_invalid_calendar_values_through() {
        assert_eq!(mask("13452024"), "13/45/2024");
    }

    #[test]
    fn readable_omits_day_zero() {
        assert_eq!(format_readable("03/00/2024"), "Mar 2024");
        assert_eq!(format_readable("03/05/2024"), "Mar 05, 2024");
    }

    #[test]
    fn readable_accepts_iso_shape() {
        assert_eq!(format_readable("2024-03-05"), "Mar 05, 2024");
        assert_eq!(format_readable("2024-03-00"), "Mar 2024");
    }

    #[test]
    fn readable_rejects_unrecognized_shapes() {
        assert_eq!(format_readable(""), "");
        assert_eq!(format_readable("03052024"), "");
        assert_eq!(format_readable("13/05/2024"), "");
        assert_eq!(format_readable("00/05/2024"), "");
        assert_eq!(format_readable("xx/05/2024"), "");
    }

    #[test]
    fn readable_treats_missing_day_as_zero() {
        assert_eq!(format_readable("03//2024"), "Mar 2024");
    }
}
