//! @ai:module:intent Format classified tokens for different outputs (JSON, text)
//! @ai:module:layer infrastructure
//! @ai:module:public_api OutputFormat, format_token_set, format_lexemes
//! @ai:module:depends_on token_set
//! @ai:module:stateless true

use crate::token_set::TokenSet;
use colored::Colorize;

/// @ai:intent Output format options
#[derive(Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    JsonPretty,
}

/// @ai:intent Format a token set as a string
/// @ai:effects pure
pub fn format_token_set(tokens: &TokenSet, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => serde_json::to_string(tokens).unwrap_or_default(),
        OutputFormat::JsonPretty => serde_json::to_string_pretty(tokens).unwrap_or_default(),
        OutputFormat::Text => format_token_set_text(tokens),
    }
}

/// @ai:intent Format a token set as human-readable text
/// @ai:effects pure
fn format_token_set_text(tokens: &TokenSet) -> String {
    let mut output = String::new();

    for (category, lexemes) in tokens.iter() {
        output.push_str(&format!(
            "{} ({})\n",
            category.name().to_uppercase().bold(),
            lexemes.len()
        ));

        if lexemes.is_empty() {
            output.push_str(&format!("  {}\n", "none".dimmed()));
            continue;
        }

        for lexeme in lexemes {
            output.push_str(&format!("  {}\n", lexeme.escape_debug()));
        }
    }

    output.push('\n');
    output.push_str(&format!(
        "{} {} lexemes in {} categories\n",
        "OK".green().bold(),
        tokens.total(),
        tokens.categories().count()
    ));

    output
}

/// @ai:intent Format generated lexemes as a string
/// @ai:effects pure
pub fn format_lexemes(lexemes: &[String], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => serde_json::to_string(lexemes).unwrap_or_default(),
        OutputFormat::JsonPretty => serde_json::to_string_pretty(lexemes).unwrap_or_default(),
        OutputFormat::Text => lexemes.join("\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::LexemeCategory;

    fn sample() -> TokenSet {
        let mut set = TokenSet::new();
        set.insert(LexemeCategory::Keyword, "if");
        set.insert(LexemeCategory::Keyword, "return");
        set.ensure_category(LexemeCategory::Comment);
        set
    }

    #[test]
    fn test_json_keeps_category_order() {
        let json = format_token_set(&sample(), OutputFormat::Json);
        assert_eq!(json, r#"{"keyword":["if","return"],"comment":[]}"#);
    }

    #[test]
    fn test_text_lists_each_category() {
        colored::control::set_override(false);
        let text = format_token_set(&sample(), OutputFormat::Text);
        assert!(text.contains("KEYWORD (2)"));
        assert!(text.contains("  return\n"));
        assert!(text.contains("COMMENT (0)"));
        assert!(text.contains("2 lexemes in 2 categories"));
    }

    #[test]
    fn test_format_lexemes_text() {
        let lexemes = vec!["if".to_string(), "{".to_string()];
        assert_eq!(format_lexemes(&lexemes, OutputFormat::Text), "if\n{");
    }

    #[test]
    fn test_format_lexemes_json() {
        let lexemes = vec!["if".to_string(), "{".to_string()];
        assert_eq!(format_lexemes(&lexemes, OutputFormat::Json), r#"["if","{"]"#);
        assert_eq!(
            format_lexemes(&lexemes, OutputFormat::JsonPretty),
            "[\n  \"if\",\n  \"{\"\n]"
        );
    }
}
