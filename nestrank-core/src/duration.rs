//! Parsing for the duration strings the routing collaborator emits.

/// Parse a routing duration string into whole seconds.
///
/// Two wire forms exist. A trailing-`s` form (`"600s"`) is an integer number
/// of seconds. Anything else is treated as the ISO-8601-like shorthand the
/// directions service occasionally returns: every non-digit character is
/// stripped and the remaining digits are read as a count of minutes, so
/// `"PT20M"` parses to `20` and `"PT1H"` to `1`. This is deliberately not a
/// calendar-duration parser; a multi-component string such as `"PT1H30M"`
/// concatenates its digits (`130`) and is unsupported. Strings without any
/// digits return `None` and are treated as unroutable by callers.
///
/// # Examples
/// ```
/// use nestrank_core::duration_to_seconds;
///
/// assert_eq!(duration_to_seconds("1200s"), Some(1200));
/// assert_eq!(duration_to_seconds("PT20M"), Some(20));
/// assert_eq!(duration_to_seconds("PT1H"), Some(1));
/// assert_eq!(duration_to_seconds("soon"), None);
/// ```
#[must_use]
pub fn duration_to_seconds(duration: &str) -> Option<u32> {
    if let Some(prefix) = duration.strip_suffix('s') {
        return prefix.parse().ok();
    }
    let digits: String = duration.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}
