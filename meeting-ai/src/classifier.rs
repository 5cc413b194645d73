//! Keyword-based line classification of agent output.
//!
//! The agent answers in free text. Each line is bucketed by testing whether it
//! contains any keyword of a category, case-insensitively. Keyword tables are
//! fixed: changing them changes what clients see.

/// Category a line of agent output can be classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Suggestion,
    Insight,
    Recommendation,
    ActionItem,
    Decision,
    TimeOptimization,
}

impl Category {
    /// Lower-case keywords; a line matches when it contains any of them.
    pub const fn keywords(self) -> &'static [&'static str] {
        match self {
            Category::Suggestion => &["suggest", "recommend", "consider", "try"],
            Category::Insight => &["insight", "observe", "notice", "pattern"],
            Category::Recommendation => &["recommend", "should", "need to", "must"],
            Category::ActionItem => &["action", "task", "todo", "follow up"],
            Category::Decision => &["decide", "decision", "agreed", "concluded"],
            Category::TimeOptimization => &["time", "schedule", "duration", "efficient", "optimize"],
        }
    }

    /// Maximum number of lines kept for this category.
    pub const fn limit(self) -> usize {
        match self {
            Category::Suggestion => 3,
            Category::Insight => 2,
            Category::Recommendation => 2,
            Category::ActionItem => 5,
            Category::Decision => 3,
            Category::TimeOptimization => 1,
        }
    }

    fn matches(self, line: &str) -> bool {
        let line = line.to_lowercase();
        self.keywords().iter().any(|keyword| line.contains(keyword))
    }
}

/// Return the lines of `text` that belong to `category`, trimmed, in order of
/// appearance and capped at [`Category::limit`].
///
/// Never fails: empty or keyword-free text yields an empty vector.
pub fn classify(text: &str, category: Category) -> Vec<String> {
    text.split('\n')
        .filter(|line| category.matches(line))
        .take(category.limit())
        .map(|line| line.trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Category; 6] = [
        Category::Suggestion,
        Category::Insight,
        Category::Recommendation,
        Category::ActionItem,
        Category::Decision,
        Category::TimeOptimization,
    ];

    #[test]
    fn test_classify_keeps_order_and_trims() {
        let text = "  I suggest we split the service  \nunrelated line\nConsider adding a cache\n";
        assert_eq!(
            classify(text, Category::Suggestion),
            vec![
                "I suggest we split the service".to_string(),
                "Consider adding a cache".to_string()
            ]
        );
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        let text = "WE AGREED ON POSTGRES\nThe team Concluded the review";
        assert_eq!(classify(text, Category::Decision).len(), 2);
    }

    #[test]
    fn test_classify_caps_each_category() {
        let line = "suggest insight recommend action decision time\n";
        let text = line.repeat(20);
        for category in ALL {
            assert_eq!(classify(&text, category).len(), category.limit());
        }
    }

    #[test]
    fn test_classify_earliest_lines_win() {
        let text = (1..=8)
            .map(|n| format!("task {n}"))
            .collect::<Vec<_>>()
            .join("\n");
        assert_eq!(
            classify(&text, Category::ActionItem),
            vec!["task 1", "task 2", "task 3", "task 4", "task 5"]
        );
    }

    #[test]
    fn test_classify_without_matches_is_empty() {
        for category in ALL {
            assert!(classify("", category).is_empty());
            assert!(classify("hello\nworld", category).is_empty());
        }
    }

    #[test]
    fn test_classify_multi_word_keywords() {
        let text = "We need to ship\nPlease follow up with legal";
        assert_eq!(classify(text, Category::Recommendation), vec!["We need to ship"]);
        assert_eq!(
            classify(text, Category::ActionItem),
            vec!["Please follow up with legal"]
        );
    }

    #[test]
    fn test_classify_matches_substrings() {
        // "try" inside "country" counts, as does "time" inside "timeline".
        assert_eq!(classify("country roads", Category::Suggestion).len(), 1);
        assert_eq!(classify("the timeline", Category::TimeOptimization).len(), 1);
    }

    #[test]
    fn test_classify_strips_carriage_returns() {
        let text = "Consider Redis\r\nok\r\n";
        assert_eq!(classify(text, Category::Suggestion), vec!["Consider Redis"]);
    }
}
