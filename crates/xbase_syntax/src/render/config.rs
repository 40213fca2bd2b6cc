//! Rendering configuration.

/// How keywords (and the dotted words `.T.`, `.AND.`, ...) are cased in rendered output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeywordCase {
    /// `FUNCTION`, `ENDIF`, `.AND.`
    Upper,
    /// `function`, `endif`, `.and.`
    Lower,
    /// `Function`, `EndIf`; dotted words and `NIL` stay upper-case.
    #[default]
    Pascal,
}

impl KeywordCase {
    /// Apply this case to a keyword's canonical (Pascal) spelling.
    pub fn apply(self, canonical: &str) -> String {
        match self {
            KeywordCase::Upper => canonical.to_ascii_uppercase(),
            KeywordCase::Lower => canonical.to_ascii_lowercase(),
            KeywordCase::Pascal => canonical.to_string(),
        }
    }

    /// Apply this case to a word that has no Pascal form (dotted words, `NIL`).
    pub fn apply_word(self, word: &str) -> String {
        match self {
            KeywordCase::Lower => word.to_ascii_lowercase(),
            KeywordCase::Upper | KeywordCase::Pascal => word.to_ascii_uppercase(),
        }
    }
}

/// Canonical rendering configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Number of spaces per indentation level
    pub indent_width: usize,
    pub keyword_case: KeywordCase,
    /// Number of blank lines around top-level functions and classes
    pub blank_lines_top_level: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent_width: 4,
            keyword_case: KeywordCase::Pascal,
            blank_lines_top_level: 1,
        }
    }
}

impl RenderConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation width
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Set the keyword case
    pub fn with_keyword_case(mut self, case: KeywordCase) -> Self {
        self.keyword_case = case;
        self
    }

    /// Set the number of blank lines around top-level declarations
    pub fn with_blank_lines_top_level(mut self, count: usize) -> Self {
        self.blank_lines_top_level = count;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();
        assert_eq!(config.indent_width, 4);
        assert_eq!(config.keyword_case, KeywordCase::Pascal);
        assert_eq!(config.blank_lines_top_level, 1);
        assert_eq!(RenderConfig::new(), config);
    }

    #[test]
    fn test_builder_chain() {
        let config = RenderConfig::new()
            .with_indent_width(2)
            .with_keyword_case(KeywordCase::Upper)
            .with_blank_lines_top_level(0);
        assert_eq!(config.indent_width, 2);
        assert_eq!(config.keyword_case, KeywordCase::Upper);
        assert_eq!(config.blank_lines_top_level, 0);
    }

    #[test]
    fn test_builder_override() {
        let config = RenderConfig::new().with_indent_width(2).with_indent_width(8);
        assert_eq!(config.indent_width, 8); // Last value wins
    }

    #[test]
    fn test_keyword_case_apply() {
        assert_eq!(KeywordCase::Upper.apply("EndIf"), "ENDIF");
        assert_eq!(KeywordCase::Lower.apply("EndIf"), "endif");
        assert_eq!(KeywordCase::Pascal.apply("EndIf"), "EndIf");
    }

    #[test]
    fn test_dotted_words_have_no_pascal_form() {
        assert_eq!(KeywordCase::Pascal.apply_word(".and."), ".AND.");
        assert_eq!(KeywordCase::Upper.apply_word("Nil"), "NIL");
        assert_eq!(KeywordCase::Lower.apply_word(".T."), ".t.");
    }
}
