//! Helpers for the attendance entry form: the drop-down option lists for the
//! hour/minute/break-length selectors and the `"HH"`/`"MM"` field pair.
//!
//! Every list starts with a blank entry, so "not recorded" stays selectable.

/// Turns a break length into the label shown in the selector.
///
/// The production labels are locale dependent and live with the host
/// application; [`PlainLabels`] is the built-in fallback.
pub trait LabelFormatter {
    fn format_duration(&self, minutes: u16) -> String;
}

/// Locale-neutral labels: `45m`, `2h`, `1h 15m`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainLabels;

impl LabelFormatter for PlainLabels {
    fn format_duration(&self, minutes: u16) -> String {
        let hour = minutes / 60;
        let minute = minutes % 60;

        if hour == 0 {
            format!("{}m", minute)
        } else if minute == 0 {
            format!("{}h", hour)
        } else {
            format!("{}h {}m", hour, minute)
        }
    }
}

/// The hour selector: a blank entry, then `00` to `23`.
#[must_use]
pub fn hour_options() -> Vec<(Option<u8>, String)> {
    let mut options = vec![(None, String::new())];

    for hour in 0..24 {
        options.push((Some(hour), format!("{:02}", hour)));
    }

    options
}

/// The minute selector: a blank entry, then `00` to `59`.
#[must_use]
pub fn minute_options() -> Vec<(Option<u8>, String)> {
    let mut options = vec![(None, String::new())];

    for minute in 0..60 {
        options.push((Some(minute), format!("{:02}", minute)));
    }

    options
}

/// The break length selector: a blank entry, then 15 minute steps up to
/// (not including) 8 hours.
#[must_use]
pub fn break_options(labels: &impl LabelFormatter) -> Vec<(Option<u16>, String)> {
    let mut options = vec![(None, String::new())];

    for minutes in (15..480).step_by(15) {
        options.push((Some(minutes), labels.format_duration(minutes)));
    }

    options
}

/// The hour component of a submitted field value, `None` when the field was
/// left blank (or is too short to carry one).
#[must_use]
pub fn hour_field(value: &str) -> Option<&str> {
    if value.trim().is_empty() {
        return None;
    }

    value.get(..2)
}

/// The minute component, taken from the end of the field value.
#[must_use]
pub fn minute_field(value: &str) -> Option<&str> {
    if value.trim().is_empty() {
        return None;
    }

    value.get(value.len().checked_sub(2)?..)
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_hour_options() {
        let options = hour_options();

        assert_eq!(options.len(), 25);
        assert_eq!(options[0], (None, String::new()));
        assert_eq!(options[1], (Some(0), "00".to_string()));
        assert_eq!(options[24], (Some(23), "23".to_string()));
    }

    #[test]
    fn test_minute_options() {
        let options = minute_options();

        assert_eq!(options.len(), 61);
        assert_eq!(options[60], (Some(59), "59".to_string()));
    }

    #[test]
    fn test_break_options() {
        let options = break_options(&PlainLabels);

        assert_eq!(options[0], (None, String::new()));
        assert_eq!(options[1], (Some(15), "15m".to_string()));
        assert_eq!(options[4], (Some(60), "1h".to_string()));
        assert_eq!(options[5], (Some(75), "1h 15m".to_string()));
        assert_eq!(options.last().unwrap(), &(Some(465), "7h 45m".to_string()));
    }

    #[test]
    fn test_field_splitting() {
        assert_eq!(hour_field("0915"), Some("09"));
        assert_eq!(minute_field("0915"), Some("15"));
        assert_eq!(hour_field("09"), Some("09"));
        assert_eq!(minute_field("15"), Some("15"));
    }

    #[test]
    fn test_blank_fields() {
        assert_eq!(hour_field(""), None);
        assert_eq!(hour_field("   "), None);
        assert_eq!(minute_field(""), None);
        assert_eq!(hour_field("9"), None);
        assert_eq!(minute_field("5"), None);
    }
}
