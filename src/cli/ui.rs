use console::style;

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    Error,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold().underlined(),
        StyleType::Error => style(text).red(),
    };
    styled.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_text_keeps_content() {
        let styled = style_text("API error: invalid-key", StyleType::Error);
        assert_eq!(console::strip_ansi_codes(&styled), "API error: invalid-key");

        let styled = style_text("Currency converter.", StyleType::Title);
        assert_eq!(console::strip_ansi_codes(&styled), "Currency converter.");
    }
}
