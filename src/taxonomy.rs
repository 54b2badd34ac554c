//! Spending category taxonomy
//!
//! The closed set of categories every classification resolves to.
//! Declaration order is significant: it is the priority order used by
//! both the local keyword matcher and remote-reply validation.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Transportation,
    Housing,
    Utilities,
    Entertainment,
    Shopping,
    Travel,
    Health,
    Education,
    Other,
}

impl Category {
    /// All categories in priority order. Matching is first-wins by this
    /// order, so food keywords are tested before shopping keywords.
    pub const ALL: [Category; 10] = [
        Category::Food,
        Category::Transportation,
        Category::Housing,
        Category::Utilities,
        Category::Entertainment,
        Category::Shopping,
        Category::Travel,
        Category::Health,
        Category::Education,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Transportation => "transportation",
            Category::Housing => "housing",
            Category::Utilities => "utilities",
            Category::Entertainment => "entertainment",
            Category::Shopping => "shopping",
            Category::Travel => "travel",
            Category::Health => "health",
            Category::Education => "education",
            Category::Other => "other",
        }
    }

    /// Keyword substrings for the local heuristic (zero allocation).
    /// Callers match against lowercased input.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Category::Food => &[
                "restaurant", "food", "dinner", "lunch", "breakfast", "coffee",
                "grocery", "groceries", "cafe", "pizza",
            ],
            Category::Transportation => &[
                "uber", "taxi", "bus", "train", "gas", "fuel", "car", "toll",
                "parking", "metro",
            ],
            Category::Housing => &["rent", "mortgage", "home", "apartment", "lease"],
            Category::Utilities => &[
                "electricity", "water", "bill", "internet", "phone", "wifi",
            ],
            Category::Entertainment => &[
                "movie", "netflix", "spotify", "concert", "game", "cinema",
            ],
            Category::Shopping => &[
                "shopping", "shop", "amazon", "mall", "store", "buy", "purchase",
                "clothes",
            ],
            Category::Travel => &[
                "hotel", "flight", "vacation", "trip", "travel", "airbnb",
                "airline",
            ],
            Category::Health => &[
                "doctor", "medicine", "hospital", "health", "pharmacy", "dentist",
            ],
            Category::Education => &[
                "course", "book", "tuition", "class", "school", "university",
            ],
            Category::Other => &[],
        }
    }

    /// Extract a category from a model reply. Scans the taxonomy in
    /// priority order and returns the first category whose name occurs as
    /// a substring, so replies like "This is a food expense" still
    /// resolve. Unrecognized replies map to `Other`.
    pub fn from_model_reply(reply: &str) -> Category {
        let normalized = reply.trim().to_lowercase();
        Category::ALL
            .iter()
            .copied()
            .find(|c| normalized.contains(c.as_str()))
            .unwrap_or(Category::Other)
    }

    /// Short human-readable blurb shown alongside API responses.
    pub fn friendly_message(&self) -> &'static str {
        match self {
            Category::Food => "This looks like a food expense.",
            Category::Transportation => "This is categorized as transportation.",
            Category::Housing => "This is a housing-related expense.",
            Category::Utilities => "This falls under utilities.",
            Category::Entertainment => "This is categorized as entertainment.",
            Category::Shopping => "This appears to be a shopping expense.",
            Category::Travel => "This is a travel expense.",
            Category::Health => "This is a health-related expense.",
            Category::Education => "This is an education expense.",
            Category::Other => "This doesn't fit our standard categories.",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_order_is_pinned() {
        // First-wins matching depends on this exact order.
        let names: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "food",
                "transportation",
                "housing",
                "utilities",
                "entertainment",
                "shopping",
                "travel",
                "health",
                "education",
                "other",
            ]
        );
    }

    #[test]
    fn test_food_declared_before_shopping() {
        let food = Category::ALL.iter().position(|c| *c == Category::Food);
        let shopping = Category::ALL.iter().position(|c| *c == Category::Shopping);
        assert!(food < shopping);
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Category::Food).unwrap(), "\"food\"");
        assert_eq!(
            serde_json::from_str::<Category>("\"transportation\"").unwrap(),
            Category::Transportation
        );
    }

    #[test]
    fn test_from_model_reply_exact() {
        assert_eq!(Category::from_model_reply("food"), Category::Food);
        assert_eq!(Category::from_model_reply("  travel \n"), Category::Travel);
    }

    #[test]
    fn test_from_model_reply_wrapped_in_prose() {
        assert_eq!(
            Category::from_model_reply("I think this is FOOD-related spending"),
            Category::Food
        );
        assert_eq!(
            Category::from_model_reply("Category: entertainment."),
            Category::Entertainment
        );
    }

    #[test]
    fn test_from_model_reply_unrecognized() {
        assert_eq!(Category::from_model_reply("banana"), Category::Other);
        assert_eq!(Category::from_model_reply(""), Category::Other);
    }

    #[test]
    fn test_every_category_has_a_message() {
        for category in Category::ALL {
            assert!(!category.friendly_message().is_empty());
        }
    }
}
