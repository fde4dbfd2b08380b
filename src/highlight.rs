use inksac::prelude::*;

/// Colors diagnostics when the terminal supports it.
#[derive(Debug, Clone, Copy)]
pub struct SyntaxHighlighter {
    color_support: ColorSupport,
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxHighlighter {
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    pub fn plain() -> Self {
        Self {
            color_support: ColorSupport::NoColor,
        }
    }

    pub fn highlight_error(&self, error: &str) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return error.to_string();
        }

        let error_style = Style::builder()
            .foreground(Color::Red)
            .bold()
            .build();

        error.style(error_style).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_passthrough() {
        let highlighter = SyntaxHighlighter::plain();
        assert_eq!(
            highlighter.highlight_error("cd: missing argument"),
            "cd: missing argument"
        );
    }

    #[test]
    fn test_error_keeps_message() {
        let highlighter = SyntaxHighlighter::new();
        assert!(highlighter
            .highlight_error("pwd failed")
            .contains("pwd failed"));
    }
}
