//! Formatting utilities for terminal output

/// Format a word length as a circled-number badge
///
/// Mirrors the circled counters on the found-words list: ① through ⑳ for
/// lengths Unicode has glyphs for, a plain `(n)` beyond that.
#[must_use]
pub fn length_badge(length: usize) -> String {
    // U+2460 CIRCLED DIGIT ONE through U+2473 CIRCLED NUMBER TWENTY
    if (1..=20).contains(&length) {
        // Cast is safe: length is at most 20 here
        char::from_u32(0x2460 + (length as u32 - 1))
            .expect("circled digits are valid scalar values")
            .to_string()
    } else {
        format!("({length})")
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_badge_uses_circled_digits() {
        assert_eq!(length_badge(1), "①");
        assert_eq!(length_badge(6), "⑥");
        assert_eq!(length_badge(10), "⑩");
        assert_eq!(length_badge(20), "⑳");
    }

    #[test]
    fn length_badge_falls_back_past_twenty() {
        assert_eq!(length_badge(0), "(0)");
        assert_eq!(length_badge(21), "(21)");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }
}
