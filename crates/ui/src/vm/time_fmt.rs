use chrono::{DateTime, Utc};

/// `HH:MM`, used for achievement unlock times.
#[must_use]
pub fn format_clock_time(value: DateTime<Utc>) -> String {
    value.format("%H:%M").to_string()
}

#[must_use]
pub fn format_minutes(minutes: i64) -> String {
    if minutes == 1 {
        "1 minute".to_string()
    } else {
        format!("{minutes} minutes")
    }
}

/// Whole-percent label; fractions are rounded the same way the export does.
#[must_use]
pub fn format_percent(value: f64) -> String {
    format!("{value:.0}%")
}

#[cfg(test)]
mod tests {
    use super::*;
    use study_core::time::fixed_now;

    #[test]
    fn clock_time_drops_seconds() {
        assert_eq!(format_clock_time(fixed_now()), "22:13");
    }

    #[test]
    fn minutes_are_pluralised() {
        assert_eq!(format_minutes(0), "0 minutes");
        assert_eq!(format_minutes(1), "1 minute");
        assert_eq!(format_minutes(42), "42 minutes");
    }

    #[test]
    fn percent_rounds_to_whole_numbers() {
        assert_eq!(format_percent(56.25), "56%");
        assert_eq!(format_percent(100.0), "100%");
        assert_eq!(format_percent(0.0), "0%");
    }
}
