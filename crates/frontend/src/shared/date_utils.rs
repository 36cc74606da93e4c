/// Utilities for showing event times to the user
///
/// Form controls work with `YYYY-MM-DDTHH:MM`; read-only views show the
/// Dutch `DD-MM-YYYY HH:MM` notation.

/// Format a `datetime-local` value for display
/// Example: "2023-12-01T19:00" -> "01-12-2023 19:00"
pub fn format_datetime(datetime_str: &str) -> String {
    if let Some((date_part, time_part)) = datetime_str.split_once('T') {
        if let Some((year, rest)) = date_part.split_once('-') {
            if let Some((month, day)) = rest.split_once('-') {
                let time: String = time_part.chars().take(5).collect();
                return format!("{}-{}-{} {}", day, month, year, time);
            }
        }
    }
    datetime_str.to_string()
}

/// Format a time range, dropping the date of the end when it is the same day
/// Example: ("2023-12-01T19:00", "2023-12-01T22:00") -> "01-12-2023 19:00 - 22:00"
pub fn format_time_range(start: &str, end: &str) -> String {
    let same_day = matches!(
        (start.split_once('T'), end.split_once('T')),
        (Some((a, _)), Some((b, _))) if a == b
    );
    if same_day {
        let end_time: String = end
            .split_once('T')
            .map(|(_, t)| t.chars().take(5).collect())
            .unwrap_or_default();
        format!("{} - {}", format_datetime(start), end_time)
    } else {
        format!("{} - {}", format_datetime(start), format_datetime(end))
    }
}
