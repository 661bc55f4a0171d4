// Number and text formatters
//
// Shared by the views, the status bar and the text report.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Format a number with commas ("1,234,567")
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);

    for (i, ch) in s.chars().enumerate() {
        if i > 0 && (s.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }

    result
}

/// Format a number compactly with K/M suffixes
pub fn format_compact_number(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 10_000 {
        format!("{}K", n / 1_000)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

/// Bar height on a log scale
///
/// ratatui bars take integer heights, so log10(count + 1) is scaled by 100.
/// Zero stays zero and one is still visible.
pub fn log_height(count: usize) -> u64 {
    if count == 0 {
        return 0;
    }
    (((count + 1) as f64).log10() * 100.0).round() as u64
}

/// Horizontal bar of `width` cells filled to `percent`
pub fn share_bar(percent: f64, width: usize) -> String {
    let percent = percent.clamp(0.0, 100.0);
    let eighths = (percent / 100.0 * width as f64 * 8.0).round() as usize;
    let full = eighths / 8;
    let rest = eighths % 8;

    let mut bar = "█".repeat(full);
    if rest > 0 && full < width {
        bar.push(['▏', '▎', '▍', '▌', '▋', '▊', '▉'][rest - 1]);
    }
    bar
}

/// Truncate to at most `max` display columns, marking the cut with "…"
pub fn truncate_to_width(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Number of layout slots for `n` items: at least one, capped at u16::MAX
pub fn slot_count(n: usize) -> u16 {
    u16::try_from(n.max(1)).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_separators() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(12316), "12,316");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn compact_numbers() {
        assert_eq!(format_compact_number(42), "42");
        assert_eq!(format_compact_number(1_500), "1.5K");
        assert_eq!(format_compact_number(954_356), "954K");
        assert_eq!(format_compact_number(1_500_000), "1.5M");
    }

    #[test]
    fn log_heights_keep_small_counts_visible() {
        assert_eq!(log_height(0), 0);
        assert!(log_height(1) > 0);
        assert!(log_height(10) < log_height(10_000));
        // A thousandfold gap shrinks to a few multiples
        assert!(log_height(10_000) < log_height(10) * 5);
    }

    #[test]
    fn share_bar_widths() {
        assert_eq!(share_bar(0.0, 10), "");
        assert_eq!(share_bar(100.0, 10), "██████████");
        assert_eq!(share_bar(50.0, 10), "█████");
        assert_eq!(share_bar(250.0, 4).chars().count(), 4);
        assert_eq!(share_bar(55.0, 10).chars().count(), 6);
    }

    #[test]
    fn truncation_respects_display_width() {
        assert_eq!(truncate_to_width("Daylight", 20), "Daylight");
        assert_eq!(truncate_to_width("Darkness - lights lit", 10), "Darkness …");
        assert_eq!(truncate_to_width("日本語テキスト", 5), "日本…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn slot_count_never_zero_or_truncated() {
        assert_eq!(slot_count(0), 1);
        assert_eq!(slot_count(7), 7);
        assert_eq!(slot_count(65_536), u16::MAX);
        assert_eq!(slot_count(usize::MAX), u16::MAX);
    }
}
