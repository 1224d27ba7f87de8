//! Greedy word wrapping against a pixel width budget.

use crate::metrics::TextMetrics;

/// Wrap `text` into lines no wider than `max_width` pixels.
///
/// Words are packed greedily in reading order. A word is never split: a
/// single word wider than the budget is emitted alone on its own line and
/// allowed to overflow. Whitespace runs collapse to single spaces. Empty
/// input produces no lines.
pub fn wrap_text(text: &str, metrics: &dyn TextMetrics, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };

        if metrics.measure(&candidate) <= max_width {
            current = candidate;
        } else {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            current = word.to_string();
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
