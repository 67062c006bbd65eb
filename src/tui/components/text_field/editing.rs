//! Pure cursor arithmetic for the TextField.
//!
//! Positions are byte offsets into the buffer and always sit on a char
//! boundary. Lines are split on `'\n'` only; the field does not soft-wrap.

/// Find the byte offset of the previous character boundary before `pos` in `text`.
pub(super) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
pub(super) fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

pub(super) fn line_start(text: &str, pos: usize) -> usize {
    text[..pos].rfind('\n').map(|i| i + 1).unwrap_or(0)
}

pub(super) fn line_end(text: &str, pos: usize) -> usize {
    text[pos..].find('\n').map(|i| pos + i).unwrap_or(text.len())
}

/// Zero-based line index of `pos`.
pub(super) fn line_index(text: &str, pos: usize) -> usize {
    text[..pos].matches('\n').count()
}

/// Move `pos` one line up (`direction < 0`) or down, keeping the char column
/// where the target line is long enough. `None` at the first/last line.
pub(super) fn move_vertically(text: &str, pos: usize, direction: i8) -> Option<usize> {
    let start = line_start(text, pos);
    let column = text[start..pos].chars().count();

    let target_start = if direction < 0 {
        if start == 0 {
            return None;
        }
        line_start(text, start - 1)
    } else {
        let end = line_end(text, pos);
        if end == text.len() {
            return None;
        }
        end + 1
    };

    let target_end = line_end(text, target_start);
    let offset = text[target_start..target_end]
        .char_indices()
        .nth(column)
        .map(|(i, _)| i)
        .unwrap_or(target_end - target_start);
    Some(target_start + offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prev_char_boundary_multibyte() {
        // "café" = [99, 97, 102, 195, 169]; 'é' starts at byte 3, len 2
        let s = "café";
        assert_eq!(prev_char_boundary(s, 5), 3);
        assert_eq!(prev_char_boundary(s, 3), 2);
        assert_eq!(prev_char_boundary(s, 1), 0);
    }

    #[test]
    fn next_char_boundary_multibyte() {
        let s = "a🔥b";
        assert_eq!(next_char_boundary(s, 0), 1);
        assert_eq!(next_char_boundary(s, 1), 5);
        assert_eq!(next_char_boundary(s, 5), 6);
    }

    #[test]
    fn line_bounds() {
        let s = "Flour\nMilk\nEggs";
        assert_eq!(line_start(s, 8), 6);
        assert_eq!(line_end(s, 8), 10);
        assert_eq!(line_start(s, 2), 0);
        assert_eq!(line_end(s, 13), s.len());
    }

    #[test]
    fn line_index_counts_newlines_before_pos() {
        let s = "a\nb\n";
        assert_eq!(line_index(s, 0), 0);
        assert_eq!(line_index(s, 2), 1);
        assert_eq!(line_index(s, 4), 2);
    }

    #[test]
    fn move_down_keeps_column() {
        // cursor after "Fl" in "Flour"
        let s = "Flour\nMilk";
        assert_eq!(move_vertically(s, 2, 1), Some(8));
    }

    #[test]
    fn move_down_clamps_to_short_line() {
        let s = "Flour\nOi";
        assert_eq!(move_vertically(s, 5, 1), Some(s.len()));
    }

    #[test]
    fn move_up_from_first_line_is_none() {
        assert_eq!(move_vertically("Flour\nMilk", 3, -1), None);
    }

    #[test]
    fn move_down_from_last_line_is_none() {
        assert_eq!(move_vertically("Flour\nMilk", 7, 1), None);
    }

    #[test]
    fn move_up_across_empty_line() {
        let s = "Mix.\n\nCook.";
        // From "Co|ok." up to the empty line
        assert_eq!(move_vertically(s, 8, -1), Some(5));
        assert_eq!(move_vertically(s, 5, -1), Some(0));
    }

    #[test]
    fn move_counts_chars_not_bytes() {
        let s = "café\nabcdef";
        // column 4 (after 'é', byte 5) maps to byte 4 of the second line
        assert_eq!(move_vertically(s, 5, 1), Some(6 + 4));
    }
}
