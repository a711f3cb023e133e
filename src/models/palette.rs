//! Display colour tokens
//!
//! Colours are assigned deterministically: a new entity takes the palette
//! entry at `current collection size % palette length`.

/// The category colour palette
pub const CATEGORY_COLORS: [&str; 9] = [
    "#16a34a", // green-600
    "#3b82f6", // blue-500
    "#ec4899", // pink-500
    "#f97316", // orange-500
    "#8b5cf6", // violet-500
    "#06b6d4", // cyan-500
    "#6b7280", // gray-500
    "#ef4444", // red-500
    "#eab308", // yellow-500
];

/// Colour of the protected "Other" category and of unbudgeted report rows
pub const NEUTRAL_COLOR: &str = "#6b7280";

/// Fallback colour for expense slices whose category is not budgeted
pub const UNBUDGETED_SLICE_COLOR: &str = "#8884d8";

/// Progress bar colour for overdue savings goals
pub const ALERT_COLOR: &str = "#ef4444";

/// Pick a colour from `palette` for the entity at position `count`
///
/// Returns `None` only for an empty palette.
pub fn cycle_color<'a>(count: usize, palette: &[&'a str]) -> Option<&'a str> {
    if palette.is_empty() {
        return None;
    }
    Some(palette[count % palette.len()])
}

/// Pick a colour from the default palette for the entity at position `count`
pub fn color_for_index(count: usize) -> &'static str {
    cycle_color(count, &CATEGORY_COLORS).unwrap_or(NEUTRAL_COLOR)
}
