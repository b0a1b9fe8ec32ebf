//! Display formatting for respawn timers and session stats.
//!
//! Renderers go through these helpers so timers look the same in every
//! overlay.

/// Format whole seconds as `m:ss`.
///
/// # Examples
/// ```
/// use rockwatch_types::formatting::format_duration;
/// assert_eq!(format_duration(0), "0:00");
/// assert_eq!(format_duration(125), "2:05");
/// ```
pub fn format_duration(secs: i64) -> String {
    let secs = secs.max(0);
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Format a respawn countdown.
///
/// - `>= 60s`: `m:ss`
/// - `>= 10s`: whole seconds
/// - `> 0s`: one decimal place
/// - otherwise `zero_label`
///
/// # Examples
/// ```
/// use rockwatch_types::formatting::format_countdown;
/// assert_eq!(format_countdown(75.3, "Ready"), "1:15");
/// assert_eq!(format_countdown(3.5, "Ready"), "3.5");
/// assert_eq!(format_countdown(-1.0, "Ready"), "Ready");
/// ```
pub fn format_countdown(secs: f32, zero_label: &str) -> String {
    if secs <= 0.0 {
        zero_label.to_string()
    } else if secs >= 60.0 {
        format_duration(secs as i64)
    } else if secs >= 10.0 {
        format!("{:.0}", secs)
    } else {
        format!("{:.1}", secs)
    }
}

/// Format an hourly rate, e.g. ores mined per hour.
///
/// Rates below 1000 are shown as integers, larger ones as `X.XK`.
pub fn format_per_hour(rate: f64) -> String {
    if rate >= 1_000.0 {
        format!("{:.1}K/hr", rate / 1_000.0)
    } else {
        format!("{:.0}/hr", rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(59), "0:59");
        assert_eq!(format_duration(60), "1:00");
        assert_eq!(format_duration(720), "12:00");
        assert_eq!(format_duration(-5), "0:00");
    }

    #[test]
    fn test_format_countdown() {
        assert_eq!(format_countdown(75.3, "0:00"), "1:15");
        assert_eq!(format_countdown(15.7, "0:00"), "16");
        assert_eq!(format_countdown(5.4, "0:00"), "5.4");
        assert_eq!(format_countdown(0.0, "Ready"), "Ready");
    }

    #[test]
    fn test_format_per_hour() {
        assert_eq!(format_per_hour(0.0), "0/hr");
        assert_eq!(format_per_hour(412.4), "412/hr");
        assert_eq!(format_per_hour(1_260.0), "1.3K/hr");
    }
}
