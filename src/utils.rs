/// Parse the duration field's text into whole minutes.
///
/// Fractional input is truncated; anything that is not a number yields
/// `None` so the caller can leave the duration untouched. That includes an
/// empty field: clearing it while typing a new value must not snap the
/// duration to the 1-minute minimum. Range clamping is left to the timer.
pub fn parse_duration_input(input: &str) -> Option<i64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(minutes) = trimmed.parse::<i64>() {
        return Some(minutes);
    }

    match trimmed.parse::<f64>() {
        Ok(minutes) if minutes.is_finite() => Some(minutes.trunc() as i64),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blind_timer::clamp_duration;

    #[test]
    fn whole_minutes() {
        assert_eq!(parse_duration_input("25"), Some(25));
        assert_eq!(parse_duration_input("  7 "), Some(7));
        assert_eq!(parse_duration_input("-3"), Some(-3));
    }

    #[test]
    fn fractions_truncate() {
        assert_eq!(parse_duration_input("12.9"), Some(12));
    }

    #[test]
    fn non_numbers_are_ignored() {
        assert_eq!(parse_duration_input(""), None);
        assert_eq!(parse_duration_input("abc"), None);
        assert_eq!(parse_duration_input("inf"), None);
        assert_eq!(parse_duration_input("NaN"), None);
    }

    #[test]
    fn parsed_values_clamp_into_range() {
        assert_eq!(parse_duration_input("500").map(clamp_duration), Some(120));
        assert_eq!(parse_duration_input("0").map(clamp_duration), Some(1));
    }
}
