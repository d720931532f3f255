use regex::{Regex, RegexBuilder};

/// Case-insensitive match of the search box text against place names.
#[derive(Debug, Clone)]
pub enum SearchFilter {
    Pattern(Regex),
    // Text that isn't a valid pattern is matched literally
    Literal(String),
}

impl SearchFilter {
    pub fn new(text: &str) -> Self {
        RegexBuilder::new(text)
            .case_insensitive(true)
            .build()
            .map(SearchFilter::Pattern)
            .unwrap_or_else(|_| SearchFilter::Literal(text.to_lowercase()))
    }

    pub fn matches(&self, name: &str) -> bool {
        match self {
            SearchFilter::Pattern(re) => re.is_match(name),
            SearchFilter::Literal(text) => name.to_lowercase().contains(text.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substring_ignores_case() {
        let filter = SearchFilter::new("park");
        assert!(!filter.matches("Parque Garota de Ipanema"));
        assert!(filter.matches("Lage PARK"));
        assert!(filter.matches("parking lot"));
    }

    #[test]
    fn empty_text_matches_everything() {
        let filter = SearchFilter::new("");
        assert!(filter.matches("Copacabana Beach"));
        assert!(filter.matches(""));
    }

    #[test]
    fn text_is_a_pattern() {
        let filter = SearchFilter::new("^parque");
        assert!(filter.matches("Parque Estadual da Chacrinha"));
        assert!(!filter.matches("Museu de Arte do Rio"));
    }

    #[test]
    fn invalid_pattern_falls_back_to_literal() {
        let filter = SearchFilter::new("forte (");
        assert!(matches!(filter, SearchFilter::Literal(_)));
        assert!(filter.matches("Forte (Copacabana)"));
        assert!(!filter.matches("Forte de Copacabana"));
    }
}
