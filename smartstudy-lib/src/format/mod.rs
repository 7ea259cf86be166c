//! Display formatting
//!
//! Greedy word wrapping for terminal output. Formatting is cosmetic: the
//! notes file always receives the unwrapped answer.

/// Default column width for wrapped answers.
pub const DEFAULT_WIDTH: usize = 80;

/// Wrap every line of `text` to at most `width` columns.
///
/// Lines are wrapped independently, so existing line breaks and blank lines
/// survive. Runs of whitespace inside a line collapse to one space. Words
/// longer than `width` are split. A width of 0 disables wrapping.
pub fn wrap(text: &str, width: usize) -> String {
    if width == 0 {
        return text.to_string();
    }

    text.lines()
        .map(|line| wrap_line(line, width))
        .collect::<Vec<_>>()
        .join("\n")
}

fn wrap_line(line: &str, width: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in line.split_whitespace() {
        for piece in split_long(word, width) {
            let piece_len = piece.chars().count();

            if current_len > 0 && current_len + 1 + piece_len > width {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            if current_len > 0 {
                current.push(' ');
                current_len += 1;
            }
            current.push_str(piece);
            current_len += piece_len;
        }
    }

    if current_len > 0 {
        lines.push(current);
    }
    lines.join("\n")
}

/// Split `word` into pieces of at most `width` chars.
fn split_long(word: &str, width: usize) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut rest = word;

    while rest.chars().count() > width {
        let cut = rest
            .char_indices()
            .nth(width)
            .map_or(rest.len(), |(i, _)| i);
        let (head, tail) = rest.split_at(cut);
        pieces.push(head);
        rest = tail;
    }
    pieces.push(rest);
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_line_unchanged() {
        assert_eq!(wrap("hello world", 80), "hello world");
    }

    #[test]
    fn test_wraps_at_width() {
        let wrapped = wrap("aaa bbb ccc ddd", 7);
        assert_eq!(wrapped, "aaa bbb\nccc ddd");
    }

    #[test]
    fn test_no_line_exceeds_width() {
        let text = "Photosynthesis is the process by which green plants use sunlight to convert carbon dioxide and water into glucose and oxygen.";
        for line in wrap(text, 20).lines() {
            assert!(line.chars().count() <= 20, "line too long: {line:?}");
        }
    }

    #[test]
    fn test_words_preserved_in_order() {
        let text = "one two three four five six seven";
        let rejoined: Vec<_> = wrap(text, 9).split_whitespace().map(str::to_string).collect();
        let original: Vec<_> = text.split_whitespace().map(str::to_string).collect();
        assert_eq!(rejoined, original);
    }

    #[test]
    fn test_existing_lines_wrapped_independently() {
        let wrapped = wrap("first line\n\nsecond", 80);
        assert_eq!(wrapped, "first line\n\nsecond");
    }

    #[test]
    fn test_long_word_split() {
        assert_eq!(wrap("abcdefghij", 4), "abcd\nefgh\nij");
    }

    #[test]
    fn test_unicode_long_word_split() {
        let wrapped = wrap("ééééé", 2);
        assert_eq!(wrapped, "éé\néé\né");
    }

    #[test]
    fn test_zero_width_disables() {
        assert_eq!(wrap("a  b\nc", 0), "a  b\nc");
    }
}
