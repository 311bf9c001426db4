/// First `max_chars` characters of `value`, never splitting a character.
pub fn preview(value: &str, max_chars: usize) -> &str {
    match value.char_indices().nth(max_chars) {
        Some((end, _)) => &value[..end],
        None => value,
    }
}

/// Renders a lifetime in seconds as `1 hour`, `30 minutes` or `45 seconds`.
pub fn human_expiry(seconds: u64) -> String {
    let (amount, unit) = if seconds >= 3600 && seconds % 3600 == 0 {
        (seconds / 3600, "hour")
    } else if seconds >= 60 && seconds % 60 == 0 {
        (seconds / 60, "minute")
    } else {
        (seconds, "second")
    };
    if amount == 1 {
        format!("{amount} {unit}")
    } else {
        format!("{amount} {unit}s")
    }
}

pub fn separator(width: usize) -> String {
    "─".repeat(width)
}
