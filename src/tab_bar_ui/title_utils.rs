//! Title truncation helpers for page tabs.

/// Truncate `title` to at most `max_len` characters, ending in `…` when cut.
pub(super) fn truncate_plain(title: &str, max_len: usize) -> String {
    if max_len == 0 {
        return "…".to_string();
    }
    let mut chars = title.chars();
    let mut taken = String::new();
    for _ in 0..max_len {
        if let Some(c) = chars.next() {
            taken.push(c);
        } else {
            return taken;
        }
    }
    if chars.next().is_some() {
        taken.pop();
        taken.push('…');
    }
    taken
}

/// Rough number of characters of `font_id` that fit in `available_width`.
pub(super) fn estimate_max_chars(font_id: &egui::FontId, available_width: f32) -> usize {
    let char_width = (font_id.size * 0.55).max(4.0); // heuristic: ~0.55em per character
    ((available_width / char_width).floor() as usize).max(4)
}

/// Title as displayed on a tab: capped by both the configured character
/// budget and the width actually available.
pub(super) fn display_title(
    title: &str,
    max_title_chars: usize,
    font_id: &egui::FontId,
    available_width: f32,
) -> String {
    let budget = max_title_chars.min(estimate_max_chars(font_id, available_width));
    truncate_plain(title, budget)
}
