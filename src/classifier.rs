//! Local keyword classifier
//!
//! Deterministic offline fallback for expense categorization. Categories
//! are tested in taxonomy priority order; the first category with any
//! keyword hit wins. Never touches the network.

use crate::taxonomy::Category;

/// Keyword-based expense classifier
pub struct KeywordClassifier;

impl KeywordClassifier {
    /// Classify an expense description offline.
    ///
    /// Lowercases the input, then walks `Category::ALL` in order and
    /// returns the first category with a keyword substring hit. Falls
    /// through to `Category::Other` when nothing matches.
    pub fn classify(description: &str) -> Category {
        let text = description.to_lowercase();

        Category::ALL
            .iter()
            .copied()
            .find(|category| {
                category
                    .keywords()
                    .iter()
                    .any(|keyword| text.contains(keyword))
            })
            .unwrap_or(Category::Other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_expenses() {
        let cases = vec![
            ("Dinner at an Italian restaurant", Category::Food),
            ("Uber ride to the airport", Category::Transportation),
            ("Monthly rent payment", Category::Housing),
            ("Electricity bill for March", Category::Utilities),
            ("Netflix subscription", Category::Entertainment),
            ("New clothes from the mall", Category::Shopping),
            ("Flight to Barcelona", Category::Travel),
            ("Pharmacy pickup", Category::Health),
            ("University tuition", Category::Education),
        ];

        for (description, expected) in cases {
            assert_eq!(
                KeywordClassifier::classify(description),
                expected,
                "wrong category for {:?}",
                description
            );
        }
    }

    #[test]
    fn test_first_match_wins_by_priority() {
        // "grocery" (food) and "shopping" (shopping) both match; food is
        // declared first, so food wins.
        assert_eq!(
            KeywordClassifier::classify("grocery shopping run"),
            Category::Food
        );
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            KeywordClassifier::classify("DINNER AT A RESTAURANT"),
            Category::Food
        );
    }

    #[test]
    fn test_unmatched_falls_through_to_other() {
        assert_eq!(KeywordClassifier::classify("xyzzy"), Category::Other);
        assert_eq!(
            KeywordClassifier::classify("miscellaneous payment"),
            Category::Other
        );
    }

    #[test]
    fn test_deterministic() {
        let first = KeywordClassifier::classify("coffee with friends");
        let second = KeywordClassifier::classify("coffee with friends");
        assert_eq!(first, second);
        assert_eq!(first, Category::Food);
    }
}
