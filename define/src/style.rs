const ESCAPE: &str = "\x1b[";
pub const RESET: &str = "\x1b[0m";

/// SGR text attributes understood by ANSI terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleAttribute {
    None,
    Bold,
    Dim,
    Italic,
    Underlined,
}

impl StyleAttribute {
    pub fn code(self) -> u8 {
        match self {
            StyleAttribute::None => 0,
            StyleAttribute::Bold => 1,
            StyleAttribute::Dim => 2,
            StyleAttribute::Italic => 3,
            StyleAttribute::Underlined => 4,
        }
    }
}

/// Wraps `text` in one escape sequence carrying every attribute in order,
/// always followed by a reset.
pub fn style(text: &str, attributes: &[StyleAttribute]) -> String {
    let codes = attributes
        .iter()
        .map(|attribute| attribute.code().to_string())
        .collect::<Vec<String>>()
        .join(";");
    format!("{ESCAPE}{codes}m{text}{RESET}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_without_attributes() {
        assert_eq!(style("plain", &[]), "\x1b[mplain\x1b[0m");
    }

    #[test]
    fn test_style_single_attribute() {
        let styled = style("word", &[StyleAttribute::Bold]);
        assert_eq!(styled, "\x1b[1mword\x1b[0m");
        assert!(styled.ends_with(RESET));
    }

    #[test]
    fn test_style_keeps_attribute_order() {
        let styled = style(
            "header",
            &[
                StyleAttribute::Bold,
                StyleAttribute::Underlined,
                StyleAttribute::Italic,
            ],
        );
        assert_eq!(styled, "\x1b[1;4;3mheader\x1b[0m");
    }

    #[test]
    fn test_attribute_codes() {
        let codes: Vec<u8> = [
            StyleAttribute::None,
            StyleAttribute::Bold,
            StyleAttribute::Dim,
            StyleAttribute::Italic,
            StyleAttribute::Underlined,
        ]
        .into_iter()
        .map(StyleAttribute::code)
        .collect();
        assert_eq!(codes, vec![0, 1, 2, 3, 4]);
        assert_eq!(style("x", &[StyleAttribute::Dim, StyleAttribute::None]), "\x1b[2;0mx\x1b[0m");
    }
}
