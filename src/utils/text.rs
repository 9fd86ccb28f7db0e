use unicode_width::UnicodeWidthStr;

/// Center text within the given display width, accounting for wide
/// characters (the advice glyph is typically double-width).
pub fn center_text(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width >= width {
        return text.to_string();
    }

    let padding = width - text_width;
    let left_padding = padding / 2;
    let right_padding = padding - left_padding;

    format!(
        "{}{}{}",
        " ".repeat(left_padding),
        text,
        " ".repeat(right_padding)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_text() {
        assert_eq!(center_text("ab", 6), "  ab  ");
        assert_eq!(center_text("abc", 6), " abc  ");
        assert_eq!(center_text("toolong", 3), "toolong");
    }

    #[test]
    fn test_center_text_wide_glyph() {
        // 智 is double-width
        assert_eq!(center_text("智", 6), "  智  ");
    }
}
