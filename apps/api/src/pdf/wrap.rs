//! Greedy word-wrap for the PDF body text.
//!
//! Splits on newlines first so that paragraph structure survives: an empty or
//! whitespace-only paragraph yields exactly one empty output line, which the
//! layout engine renders as vertical spacing. Words are packed greedily by
//! character count — a word longer than `max_chars` is emitted unsplit on its
//! own line and is allowed to overflow the right margin visually.

/// Wraps `text` into display lines of at most `max_chars` characters.
///
/// Empty input yields an empty vec. Character counts use `char` units, not
/// bytes, so accented PT-BR text wraps at the same visual width as ASCII.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();

    for para in text.lines() {
        if para.trim().is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut line = String::new();
        for word in para.split_whitespace() {
            let candidate_len = if line.is_empty() {
                word.chars().count()
            } else {
                line.chars().count() + 1 + word.chars().count()
            };

            if candidate_len <= max_chars {
                if !line.is_empty() {
                    line.push(' ');
                }
                line.push_str(word);
            } else {
                if !line.is_empty() {
                    lines.push(std::mem::take(&mut line));
                }
                line.push_str(word);
            }
        }
        if !line.is_empty() {
            lines.push(line);
        }
    }

    lines
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
