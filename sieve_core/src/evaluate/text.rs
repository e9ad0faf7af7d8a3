//! Free-text predicate: case-insensitive substring search

pub fn is_active(query: &str) -> bool {
    !query.trim().is_empty()
}

/// Check if the field, rendered as text, contains the trimmed query
pub fn matches(field_text: &str, query: &str) -> bool {
    field_text
        .to_lowercase()
        .contains(&query.trim().to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_query_inactive() {
        assert!(!is_active(""));
        assert!(!is_active("   "));
        assert!(is_active(" tech "));
    }

    #[test]
    fn test_contains_case_insensitive() {
        assert!(matches("TechCorp LTDA", "tech"));
        assert!(matches("TechCorp LTDA", "LTDA"));
        assert!(matches("TechCorp LTDA", "  corp "));
    }

    #[test]
    fn test_contains_not_found() {
        assert!(!matches("InnovaSoft", "tech"));
    }

    #[test]
    fn test_unicode() {
        assert!(matches("Aprovações", "AÇÕES"));
    }

    #[test]
    fn test_punctuation_in_query() {
        assert!(matches("12.345.678/0001-90", "678/0001"));
    }
}
