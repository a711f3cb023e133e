//! Report formatting utilities for terminal output

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Render a progress percentage as a bar; values past 100 fill the bar
pub fn format_bar(percent: f64, width: usize) -> String {
    if !percent.is_finite() || percent <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((percent / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else if max_chars <= 3 {
        ".".repeat(max_chars)
    } else {
        let kept: String = s.chars().take(max_chars - 3).collect();
        format!("{}...", kept)
    }
}
